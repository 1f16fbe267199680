//! Liquidity pools a swap can route through. Two pool types exist: the
//! legacy two-asset pair and the constant-product pool; both price with
//! the x·y=k curve, differing in how they are identified and in their
//! fee configuration.

use alloy::primitives::{Address, U256};
use derive_more::Display;

use crate::trade::currency::{Token, TokenPair};

/// Swap fee of legacy pair pools, in basis points (0.3%).
pub const PAIR_FEE_BPS: u32 = 30;

/// Gas a swap through a pair pool roughly costs.
const PAIR_GAS: u64 = 60_000;
/// Gas a swap through a constant-product pool roughly costs.
const CONSTANT_PRODUCT_GAS: u64 = 90_000;

/// A legacy two-asset pair pool, identified by its constituent tokens.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct PairPool {
    /// The pool's token pair, canonically ordered
    pub tokens: TokenPair,
    /// Reserve of the first token in canonical order
    pub reserve0: U256,
    /// Reserve of the second token in canonical order
    pub reserve1: U256,
}

impl PairPool {
    /// Creates a pair pool. Reserves are given per argument token and
    /// reordered to match the canonical token order. Returns `None`
    /// when both tokens are the same.
    #[must_use]
    pub fn new(token_a: Token, token_b: Token, reserve_a: U256, reserve_b: U256) -> Option<Self> {
        let tokens = TokenPair::new(token_a, token_b)?;
        let (reserve0, reserve1) = if tokens.get().0 == token_a {
            (reserve_a, reserve_b)
        } else {
            (reserve_b, reserve_a)
        };
        Some(Self {
            tokens,
            reserve0,
            reserve1,
        })
    }
}

/// A constant-product pool, identified by its deployed address so that
/// several fee tiers may exist for the same token pair.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct ConstantProductPool {
    /// The pool contract address
    pub address: Address,
    /// The pool's token pair, canonically ordered
    pub tokens: TokenPair,
    /// Reserve of the first token in canonical order
    pub reserve0: U256,
    /// Reserve of the second token in canonical order
    pub reserve1: U256,
    /// Swap fee in basis points
    pub fee_bps: u32,
}

impl ConstantProductPool {
    /// Creates a constant-product pool. Reserves are given per argument
    /// token and reordered to match the canonical token order. Returns
    /// `None` when both tokens are the same.
    #[must_use]
    pub fn new(
        address: Address,
        token_a: Token,
        token_b: Token,
        reserve_a: U256,
        reserve_b: U256,
        fee_bps: u32,
    ) -> Option<Self> {
        let tokens = TokenPair::new(token_a, token_b)?;
        let (reserve0, reserve1) = if tokens.get().0 == token_a {
            (reserve_a, reserve_b)
        } else {
            (reserve_b, reserve_a)
        };
        Some(Self {
            address,
            tokens,
            reserve0,
            reserve1,
            fee_bps,
        })
    }
}

/// A routable pool of either type.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum Pool {
    /// A legacy pair pool
    Pair(PairPool),
    /// A constant-product pool
    ConstantProduct(ConstantProductPool),
}

/// Identity of a pool, used to deduplicate candidate lists. Pairs are
/// identified by their tokens, constant-product pools by their address.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PoolId {
    /// Identity of a pair pool
    Pair(TokenPair),
    /// Identity of a constant-product pool
    ConstantProduct(Address),
}

impl Pool {
    /// The pool's token pair.
    #[must_use]
    pub const fn tokens(&self) -> TokenPair {
        match self {
            Self::Pair(pool) => pool.tokens,
            Self::ConstantProduct(pool) => pool.tokens,
        }
    }

    /// The pool's identity for deduplication.
    #[must_use]
    pub const fn id(&self) -> PoolId {
        match self {
            Self::Pair(pool) => PoolId::Pair(pool.tokens),
            Self::ConstantProduct(pool) => PoolId::ConstantProduct(pool.address),
        }
    }

    /// Whether this is a constant-product pool.
    #[must_use]
    pub const fn is_constant_product(&self) -> bool {
        matches!(self, Self::ConstantProduct(_))
    }

    /// The pool's swap fee in basis points.
    #[must_use]
    pub const fn fee_bps(&self) -> u32 {
        match self {
            Self::Pair(_) => PAIR_FEE_BPS,
            Self::ConstantProduct(pool) => pool.fee_bps,
        }
    }

    /// Rough gas cost of one swap through this pool.
    #[must_use]
    pub const fn gas_estimate(&self) -> u64 {
        match self {
            Self::Pair(_) => PAIR_GAS,
            Self::ConstantProduct(_) => CONSTANT_PRODUCT_GAS,
        }
    }

    /// The output of swapping `amount_in` of `token_in` through this
    /// pool, after the fee. `None` when the token is not in the pool,
    /// the pool has no liquidity, or the math overflows.
    #[must_use]
    pub fn amount_out(&self, token_in: Token, amount_in: U256) -> Option<U256> {
        let (token0, _) = self.tokens().get();
        self.tokens().other(token_in)?;
        let (reserve0, reserve1) = match self {
            Self::Pair(pool) => (pool.reserve0, pool.reserve1),
            Self::ConstantProduct(pool) => (pool.reserve0, pool.reserve1),
        };
        let (reserve_in, reserve_out) = if token_in == token0 {
            (reserve0, reserve1)
        } else {
            (reserve1, reserve0)
        };
        constant_product_out(reserve_in, reserve_out, amount_in, self.fee_bps())
    }
}

/// x·y=k output amount with the fee taken from the input side.
fn constant_product_out(
    reserve_in: U256,
    reserve_out: U256,
    amount_in: U256,
    fee_bps: u32,
) -> Option<U256> {
    if reserve_in.is_zero() || reserve_out.is_zero() || amount_in.is_zero() || fee_bps >= 10_000 {
        return None;
    }
    let amount_in_after_fee = amount_in.checked_mul(U256::from(10_000 - fee_bps))?;
    let numerator = amount_in_after_fee.checked_mul(reserve_out)?;
    let denominator = reserve_in
        .checked_mul(U256::from(10_000u64))?
        .checked_add(amount_in_after_fee)?;
    Some(numerator / denominator)
}

/// Existence state of a pool candidate as reported by the lookup
/// service.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Display)]
pub enum PoolState {
    /// The pool exists on-chain and is usable
    Exists,
    /// The pool does not exist
    NotExists,
    /// The lookup has not resolved yet
    Loading,
    /// The lookup produced an inconsistent result
    Invalid,
}

/// A pool lookup result: an existence state and, when resolved, the
/// pool itself.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PoolCandidate {
    /// Existence state reported by the lookup
    pub state: PoolState,
    /// The resolved pool, present only for usable candidates
    pub pool: Option<Pool>,
}

impl PoolCandidate {
    /// A candidate that resolved to a usable pool.
    #[must_use]
    pub const fn exists(pool: Pool) -> Self {
        Self {
            state: PoolState::Exists,
            pool: Some(pool),
        }
    }

    /// A candidate whose pool does not exist.
    #[must_use]
    pub const fn not_exists() -> Self {
        Self {
            state: PoolState::NotExists,
            pool: None,
        }
    }

    /// A candidate whose lookup has not resolved.
    #[must_use]
    pub const fn loading() -> Self {
        Self {
            state: PoolState::Loading,
            pool: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trade::test_helpers::*;

    #[test]
    fn test_reserves_follow_canonical_order() {
        let (a, b) = (token("A"), token("B"));
        let forward = PairPool::new(a, b, U256::from(100), U256::from(200)).unwrap();
        let backward = PairPool::new(b, a, U256::from(200), U256::from(100)).unwrap();
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_rejects_same_token() {
        let a = token("A");
        assert!(PairPool::new(a, a, U256::from(1), U256::from(1)).is_none());
    }

    #[test]
    fn test_amount_out() {
        // Same fee table as the pair fee: 10 in against 100/200
        // reserves nets 18 out after the 0.3% fee.
        let pool = pair("A", "B", 100, 200);
        for (amount_in, expected) in &[(10u64, 18u64), (20, 33), (30, 46), (50, 66)] {
            assert_eq!(
                pool.amount_out(token("A"), U256::from(*amount_in)),
                Some(U256::from(*expected))
            );
        }
    }

    #[test]
    fn test_amount_out_reverse_direction() {
        let pool = pair("A", "B", 100, 200);
        assert_eq!(
            pool.amount_out(token("B"), U256::from(20)),
            Some(U256::from(9))
        );
    }

    #[test]
    fn test_amount_out_unknown_token() {
        let pool = pair("A", "B", 100, 200);
        assert_eq!(pool.amount_out(token("C"), U256::from(10)), None);
    }

    #[test]
    fn test_amount_out_no_liquidity() {
        let pool = pair("A", "B", 0, 0);
        assert_eq!(pool.amount_out(token("A"), U256::from(10)), None);
    }

    #[test]
    fn test_constant_product_fee_tier() {
        // 100 bps fee leaves less output than the 30 bps pair.
        let cheap = pair("A", "B", 1_000_000, 1_000_000);
        let dear = cp("P1", "A", "B", 1_000_000, 1_000_000, 100);
        let out_cheap = cheap.amount_out(token("A"), U256::from(10_000)).unwrap();
        let out_dear = dear.amount_out(token("A"), U256::from(10_000)).unwrap();
        assert!(out_cheap > out_dear);
    }

    #[test]
    fn test_pool_identity() {
        let by_tokens = pair("A", "B", 1, 2);
        let same_tokens = pair("A", "B", 3, 4);
        assert_eq!(by_tokens.id(), same_tokens.id());

        let by_address = cp("P1", "A", "B", 1, 2, 30);
        let other_address = cp("P2", "A", "B", 1, 2, 30);
        assert_ne!(by_address.id(), other_address.id());
    }
}
