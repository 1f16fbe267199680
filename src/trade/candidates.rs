//! Pool candidate resolution: which currency combinations are worth
//! checking for a swap, and the asynchronous lookup that resolves each
//! combination into a pool existence state.

use std::collections::{HashMap, HashSet};

use futures::future::join_all;
use itertools::Itertools;
use log::warn;

use crate::chain::ChainId;
use crate::trade::currency::{Currency, TokenPair};
use crate::trade::pool::{ConstantProductPool, PairPool, Pool, PoolCandidate};

/// The token pairs worth checking for a swap between two currencies:
/// the direct pair, each endpoint against the chain's bridge tokens,
/// and the bridge tokens among themselves. Deduplicated, self-pairs
/// removed, insertion order preserved.
#[must_use]
pub fn currency_combinations(
    chain: ChainId,
    input: Currency,
    output: Currency,
) -> Vec<TokenPair> {
    let token_in = input.wrapped();
    let token_out = output.wrapped();

    let mut bases = vec![chain.wrapped_native()];
    bases.extend(chain.bridge_tokens());

    let mut seen = HashSet::new();
    let mut combinations = Vec::new();
    let mut push = |pair: Option<TokenPair>| {
        if let Some(pair) = pair {
            if seen.insert(pair) {
                combinations.push(pair);
            }
        }
    };

    push(TokenPair::new(token_in, token_out));
    for base in &bases {
        push(TokenPair::new(token_in, *base));
        push(TokenPair::new(token_out, *base));
    }
    for (a, b) in bases.iter().tuple_combinations() {
        push(TokenPair::new(*a, *b));
    }
    combinations
}

/// The external pool-existence lookup. Implementations never fail: an
/// unresolvable lookup is a `Loading` or `NotExists` candidate.
pub trait PoolResolver {
    /// Resolves the legacy pair pool for a token combination.
    async fn pair(&self, tokens: TokenPair) -> PoolCandidate;

    /// Resolves the constant-product pool for a token combination.
    async fn constant_product(&self, tokens: TokenPair) -> PoolCandidate;
}

/// Resolves every combination for the swap concurrently and returns the
/// flat candidate list: pair candidates first, constant-product
/// candidates second, combination order preserved within each group.
pub async fn resolve_candidates<R: PoolResolver>(
    resolver: &R,
    chain: ChainId,
    input: Currency,
    output: Currency,
) -> Vec<PoolCandidate> {
    let combinations = currency_combinations(chain, input, output);
    let pairs = join_all(combinations.iter().map(|tokens| resolver.pair(*tokens)));
    let constant_products = join_all(
        combinations
            .iter()
            .map(|tokens| resolver.constant_product(*tokens)),
    );
    let (pairs, constant_products) = futures::join!(pairs, constant_products);
    pairs.into_iter().chain(constant_products).collect()
}

/// A resolver backed by an in-memory pool snapshot. Downstream stages
/// observe whatever the snapshot currently holds; refreshing it is the
/// caller's concern.
#[derive(Default, Clone, Debug)]
pub struct SnapshotResolver {
    /// Known pair pools, keyed by their token pair
    pairs: HashMap<TokenPair, PairPool>,
    /// Known constant-product pools, keyed by their token pair
    constant_products: HashMap<TokenPair, ConstantProductPool>,
}

impl SnapshotResolver {
    /// Creates an empty resolver.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a pair pool to the snapshot, replacing any previous pool
    /// for the same tokens.
    pub fn add_pair(&mut self, pool: PairPool) {
        if self.pairs.insert(pool.tokens, pool).is_some() {
            warn!("snapshot replaced a pair pool");
        }
    }

    /// Adds a constant-product pool to the snapshot, replacing any
    /// previous pool for the same tokens.
    pub fn add_constant_product(&mut self, pool: ConstantProductPool) {
        let tokens = pool.tokens;
        if self.constant_products.insert(tokens, pool).is_some() {
            warn!("snapshot replaced a constant-product pool");
        }
    }

    /// Number of pools in the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len() + self.constant_products.len()
    }

    /// Whether the snapshot holds no pools.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty() && self.constant_products.is_empty()
    }
}

impl PoolResolver for SnapshotResolver {
    async fn pair(&self, tokens: TokenPair) -> PoolCandidate {
        self.pairs.get(&tokens).map_or_else(PoolCandidate::not_exists, |pool| {
            PoolCandidate::exists(Pool::Pair(pool.clone()))
        })
    }

    async fn constant_product(&self, tokens: TokenPair) -> PoolCandidate {
        self.constant_products
            .get(&tokens)
            .map_or_else(PoolCandidate::not_exists, |pool| {
                PoolCandidate::exists(Pool::ConstantProduct(pool.clone()))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trade::pool::PoolState;
    use crate::trade::test_helpers::*;

    #[test]
    fn test_combinations_include_direct_pair() {
        let combos = currency_combinations(chain(), erc20("A"), erc20("B"));
        let direct = TokenPair::new(token("A"), token("B")).unwrap();
        assert_eq!(combos[0], direct);
    }

    #[test]
    fn test_combinations_have_no_self_pairs() {
        let wrapped = Currency::Erc20(chain().wrapped_native());
        let combos = currency_combinations(chain(), wrapped, erc20("B"));
        for pair in combos {
            let (a, b) = pair.get();
            assert_ne!(a, b);
        }
    }

    #[test]
    fn test_combinations_are_unique() {
        let combos = currency_combinations(chain(), erc20("A"), erc20("B"));
        let unique: HashSet<_> = combos.iter().copied().collect();
        assert_eq!(unique.len(), combos.len());
    }

    #[test]
    fn test_combinations_cover_bridges() {
        let combos = currency_combinations(chain(), erc20("A"), erc20("B"));
        let wrapped = chain().wrapped_native();
        assert!(combos.contains(&TokenPair::new(token("A"), wrapped).unwrap()));
        assert!(combos.contains(&TokenPair::new(token("B"), wrapped).unwrap()));
        for bridge in chain().bridge_tokens() {
            assert!(combos.contains(&TokenPair::new(wrapped, bridge).unwrap()));
        }
    }

    #[tokio::test]
    async fn test_snapshot_resolver_states() {
        let mut resolver = SnapshotResolver::new();
        resolver.add_pair(pair_pool("A", "B", 100, 200));

        let known = TokenPair::new(token("A"), token("B")).unwrap();
        let unknown = TokenPair::new(token("A"), token("C")).unwrap();

        assert_eq!(resolver.pair(known).await.state, PoolState::Exists);
        assert_eq!(resolver.pair(unknown).await.state, PoolState::NotExists);
        assert_eq!(
            resolver.constant_product(known).await.state,
            PoolState::NotExists
        );
    }

    #[tokio::test]
    async fn test_resolve_candidates_order() {
        let mut resolver = SnapshotResolver::new();
        resolver.add_pair(pair_pool("A", "B", 100, 200));
        resolver.add_constant_product(cp_pool("P1", "A", "B", 100, 200, 30));

        let candidates =
            resolve_candidates(&resolver, chain(), erc20("A"), erc20("B")).await;

        let combination_count = currency_combinations(chain(), erc20("A"), erc20("B")).len();
        assert_eq!(candidates.len(), 2 * combination_count);

        // Pair candidates come first; the direct combination leads each
        // group.
        assert_eq!(candidates[0], PoolCandidate::exists(pair("A", "B", 100, 200)));
        assert_eq!(
            candidates[combination_count],
            PoolCandidate::exists(cp("P1", "A", "B", 100, 200, 30))
        );
    }
}
