//! The trade derivation: a pure function from a swap query and a pool
//! snapshot to the best trade, or nothing. Callers re-invoke it whenever
//! an input changes; there is no hidden cache.

use alloy::primitives::U256;
use log::{debug, error};

use crate::chain::ChainId;
use crate::trade::amount::Amount;
use crate::trade::currency::Currency;
use crate::trade::pool::Pool;
use crate::trade::route::RouteStatus;
use crate::trade::router::RouteSearch;
use crate::trade::trade::{LegacyTrade, MultiHopTrade, Trade, TradeKind};

/// Everything the derivation reads: the swap request plus the current
/// filtered pool snapshot.
#[derive(Clone, Debug)]
pub struct TradeQuery {
    /// The chain the swap executes on
    pub chain: ChainId,
    /// Whether the specified amount fixes the input or the output side
    pub kind: TradeKind,
    /// The exact amount to swap in (or out, for exact-output requests)
    pub amount_specified: Option<Amount>,
    /// The currency the specified amount is denominated in
    pub main_currency: Option<Currency>,
    /// The currency on the other side of the swap
    pub other_currency: Option<Currency>,
    /// Usable pools, as produced by the filter stage
    pub pools: Vec<Pool>,
    /// Gas price fed into the route search cost model, in wei
    pub gas_price: U256,
}

/// Derives the best trade for the query, or `None` when no trade is
/// possible. Unmet preconditions are absence, not errors.
#[must_use]
pub fn derive_trade(query: &TradeQuery, router: &impl RouteSearch) -> Option<Trade> {
    let (currency_in, currency_out) = match query.kind {
        TradeKind::ExactInput => (query.main_currency?, query.other_currency?),
        TradeKind::ExactOutput => (query.other_currency?, query.main_currency?),
    };
    let amount = query.amount_specified?;
    if !amount.is_positive() {
        return None;
    }
    let token_in = currency_in.wrapped();
    let token_out = currency_out.wrapped();
    // No self-trades: both sides resolving to the same wrapped token
    // means there is nothing to route.
    if token_in.address == token_out.address {
        return None;
    }
    if query.pools.is_empty() {
        return None;
    }

    match query.kind {
        TradeKind::ExactOutput => {
            // Unsupported by design; the route search has no reverse
            // counterpart yet.
            debug!("exact output routing is not supported");
            None
        }
        TradeKind::ExactInput => {
            let bridge = query.chain.wrapped_native();

            if query.chain.supports_multi_hop() {
                let cp_pools: Vec<Pool> = query
                    .pools
                    .iter()
                    .filter(|pool| pool.is_constant_product())
                    .cloned()
                    .collect();
                let route = router.find_multi_route_exact_in(
                    token_in,
                    token_out,
                    amount.quotient(),
                    &cp_pools,
                    bridge,
                    query.gas_price,
                );
                if route.status == RouteStatus::Success {
                    let trade = MultiHopTrade::exact_in(route, amount, currency_out);
                    return Some(Trade::MultiHop(trade));
                }
            }

            let route = router.find_single_route_exact_in(
                token_in,
                token_out,
                amount.quotient(),
                &query.pools,
                bridge,
                query.gas_price,
            );
            if route.status != RouteStatus::Success {
                debug!("no route from {token_in} to {token_out}: {}", route.status);
                return None;
            }
            let pairs: Vec<_> = query
                .pools
                .iter()
                .filter_map(|pool| match pool {
                    Pool::Pair(pair) => Some(pair.clone()),
                    Pool::ConstantProduct(_) => None,
                })
                .collect();
            match LegacyTrade::exact_in(&route, &pairs, amount, currency_out) {
                Ok(trade) => Some(Trade::Legacy(trade)),
                Err(e) => {
                    // Swallowed on purpose: a conversion failure means
                    // "no trade", not a hard error.
                    error!("legacy trade construction failed: {e}");
                    None
                }
            }
        }
    }
}
