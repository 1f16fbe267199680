//! Route search over a filtered pool set.
//!
//! The production routing optimizer is an external collaborator; this
//! module only fixes its surface: two exact-input searches taking the
//! wrapped endpoint tokens, the amount, the pool set, a bridge token and
//! a gas price. [`BaselineRouter`] is a self-contained implementation of
//! that surface: it enumerates token paths through the bridge, picks the
//! best pool per hop by output amount, and keeps the path with the
//! highest total output.

use std::collections::HashSet;

use alloy::primitives::U256;
use log::debug;

use crate::trade::currency::{Token, TokenPair};
use crate::trade::pool::Pool;
use crate::trade::route::{Route, RouteLeg, RouteStatus};

/// The maximum number of intermediate hops a baseline path may take.
pub const DEFAULT_MAX_HOPS: usize = 2;

/// Gas a settlement costs before any pool is crossed.
const SETTLEMENT_GAS: u64 = 50_000;

/// The routing optimizer surface consumed by the trade derivation.
pub trait RouteSearch {
    /// Searches for the best route over constant-product pools,
    /// possibly crossing several of them.
    fn find_multi_route_exact_in(
        &self,
        token_in: Token,
        token_out: Token,
        amount_in: U256,
        pools: &[Pool],
        bridge: Token,
        gas_price: U256,
    ) -> Route;

    /// Searches for the best unsplit route over the full pool set.
    fn find_single_route_exact_in(
        &self,
        token_in: Token,
        token_out: Token,
        amount_in: U256,
        pools: &[Pool],
        bridge: Token,
        gas_price: U256,
    ) -> Route;
}

/// A baseline path search. It never splits an amount across parallel
/// paths, so the multi-hop and single-route searches coincide; they
/// differ only in the pool set the caller hands them.
#[derive(Clone, Copy, Debug)]
pub struct BaselineRouter {
    /// Maximum number of intermediate hops per path
    pub max_hops: usize,
}

impl Default for BaselineRouter {
    fn default() -> Self {
        Self {
            max_hops: DEFAULT_MAX_HOPS,
        }
    }
}

impl RouteSearch for BaselineRouter {
    fn find_multi_route_exact_in(
        &self,
        token_in: Token,
        token_out: Token,
        amount_in: U256,
        pools: &[Pool],
        bridge: Token,
        gas_price: U256,
    ) -> Route {
        self.best_route(token_in, token_out, amount_in, pools, bridge, gas_price)
    }

    fn find_single_route_exact_in(
        &self,
        token_in: Token,
        token_out: Token,
        amount_in: U256,
        pools: &[Pool],
        bridge: Token,
        gas_price: U256,
    ) -> Route {
        self.best_route(token_in, token_out, amount_in, pools, bridge, gas_price)
    }
}

impl BaselineRouter {
    /// Creates a router with the given hop limit.
    #[must_use]
    pub const fn new(max_hops: usize) -> Self {
        Self { max_hops }
    }

    /// Evaluates every candidate path and keeps the one with the
    /// highest output; equal outputs break towards the cheaper route.
    fn best_route(
        &self,
        token_in: Token,
        token_out: Token,
        amount_in: U256,
        pools: &[Pool],
        bridge: Token,
        _gas_price: U256,
    ) -> Route {
        if amount_in.is_zero() || token_in == token_out || pools.is_empty() {
            return Route::no_way();
        }

        let bases = HashSet::from([bridge]);
        let mut best: Option<Route> = None;
        for path in path_candidates(token_in, token_out, &bases, self.max_hops) {
            let Some(route) = evaluate_path(&path, amount_in, pools) else {
                continue;
            };
            let better = best.as_ref().is_none_or(|b| {
                route.amount_out > b.amount_out
                    || (route.amount_out == b.amount_out && route.gas_estimate < b.gas_estimate)
            });
            if better {
                best = Some(route);
            }
        }

        best.unwrap_or_else(|| {
            debug!("no path from {token_in} to {token_out} over {} pools", pools.len());
            Route::no_way()
        })
    }
}

/// Walks a token path, choosing at each hop the pool that yields the
/// most output. `None` when any hop lacks a pool or produces nothing.
fn evaluate_path(path: &[Token], amount_in: U256, pools: &[Pool]) -> Option<Route> {
    let mut legs = Vec::with_capacity(path.len().saturating_sub(1));
    let mut amount = amount_in;
    for window in path.windows(2) {
        let (from, to) = (window[0], window[1]);
        let tokens = TokenPair::new(from, to)?;
        let (pool, amount_out) = pools
            .iter()
            .filter(|pool| pool.tokens() == tokens)
            .filter_map(|pool| Some((pool, pool.amount_out(from, amount)?)))
            .max_by_key(|(_, amount_out)| *amount_out)?;
        legs.push(RouteLeg {
            pool: pool.clone(),
            token_in: from,
            token_out: to,
            amount_in: amount,
            amount_out,
        });
        amount = amount_out;
    }

    if legs.is_empty() || amount.is_zero() {
        return None;
    }
    let gas_estimate = SETTLEMENT_GAS + legs.iter().map(|leg| leg.pool.gas_estimate()).sum::<u64>();
    Some(Route {
        status: RouteStatus::Success,
        legs,
        amount_in,
        amount_out: amount,
        gas_estimate,
    })
}

/// Token paths from `token_in` to `token_out` through the base tokens,
/// shortest first, with at most `max_hops` intermediate stops.
fn path_candidates(
    token_in: Token,
    token_out: Token,
    bases: &HashSet<Token>,
    max_hops: usize,
) -> Vec<Vec<Token>> {
    let mut candidates = HashSet::new();
    let mut prefixes = vec![vec![token_in]];
    for _ in 0..=max_hops {
        let mut next_prefixes = Vec::new();
        for prefix in &prefixes {
            let mut full_path = prefix.clone();
            full_path.push(token_out);
            candidates.insert(full_path);

            for base in bases {
                if *base != token_out && !prefix.contains(base) {
                    let mut extended = prefix.clone();
                    extended.push(*base);
                    next_prefixes.push(extended);
                }
            }
        }
        prefixes = next_prefixes;
    }

    let mut candidates: Vec<_> = candidates.into_iter().collect();
    candidates.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trade::test_helpers::*;

    fn search(pools: &[Pool], from: &str, to: &str, amount: u64) -> Route {
        BaselineRouter::default().find_single_route_exact_in(
            token(from),
            token(to),
            U256::from(amount),
            pools,
            token("W"),
            U256::from(1_000_000u64),
        )
    }

    #[test]
    fn test_path_candidates_direct_and_bridged() {
        let bases = HashSet::from([token("W")]);
        let paths = path_candidates(token("A"), token("B"), &bases, 2);
        assert!(paths.contains(&vec![token("A"), token("B")]));
        assert!(paths.contains(&vec![token("A"), token("W"), token("B")]));
        // The single base cannot be used twice.
        assert_eq!(paths.len(), 2);
    }

    #[test]
    fn test_path_candidates_skip_base_equal_to_endpoint() {
        let bases = HashSet::from([token("B")]);
        let paths = path_candidates(token("A"), token("B"), &bases, 2);
        assert_eq!(paths, vec![vec![token("A"), token("B")]]);
    }

    #[test]
    fn test_direct_route() {
        let pools = vec![pair("A", "B", 100, 200)];
        let route = search(&pools, "A", "B", 10);
        assert_eq!(route.status, RouteStatus::Success);
        assert_eq!(route.legs.len(), 1);
        assert_eq!(route.amount_out, U256::from(18));
    }

    #[test]
    fn test_direct_beats_worse_bridged_path() {
        let pools = vec![
            pair("A", "B", 100, 200),
            pair("A", "W", 100, 200),
            pair("W", "B", 200, 100),
        ];
        let route = search(&pools, "A", "B", 10);
        assert_eq!(route.legs.len(), 1);
        assert_eq!(route.amount_out, U256::from(18));
    }

    #[test]
    fn test_bridged_route_when_no_direct_pool() {
        let pools = vec![pair("A", "W", 100, 200), pair("W", "B", 200, 100)];
        let route = search(&pools, "A", "B", 10);
        assert_eq!(route.status, RouteStatus::Success);
        assert_eq!(route.legs.len(), 2);
        // 10 -> 18 through A/W, 18 -> 8 through W/B.
        assert_eq!(route.legs[0].amount_out, U256::from(18));
        assert_eq!(route.amount_out, U256::from(8));
        assert_eq!(route.amount_in, U256::from(10));
    }

    #[test]
    fn test_best_pool_chosen_per_hop() {
        let shallow = pair("A", "B", 100, 200);
        let deep = cp("P1", "A", "B", 1_000_000, 2_000_000, 30);
        let route = search(&[shallow, deep.clone()], "A", "B", 1_000);
        assert_eq!(route.legs.len(), 1);
        assert_eq!(route.legs[0].pool, deep);
    }

    #[test]
    fn test_no_way_on_empty_pool_set() {
        assert_eq!(search(&[], "A", "B", 10).status, RouteStatus::NoWay);
    }

    #[test]
    fn test_no_way_on_zero_amount() {
        let pools = vec![pair("A", "B", 100, 200)];
        assert_eq!(search(&pools, "A", "B", 0).status, RouteStatus::NoWay);
    }

    #[test]
    fn test_no_way_on_disconnected_tokens() {
        let pools = vec![pair("A", "W", 100, 200)];
        assert_eq!(search(&pools, "A", "B", 10).status, RouteStatus::NoWay);
    }

    #[test]
    fn test_gas_estimate_counts_hops() {
        let pools = vec![pair("A", "W", 1_000, 1_000), pair("W", "B", 1_000, 1_000)];
        let route = search(&pools, "A", "B", 10);
        assert_eq!(route.gas_estimate, 50_000 + 2 * 60_000);
    }
}
