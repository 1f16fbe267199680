//! The finalized trade selection. Two representations exist: the legacy
//! trade, whose route crosses pair pools only, and the multi-hop trade,
//! which carries a constant-product route verbatim. Downstream consumers
//! match on the variant explicitly.

use alloy::primitives::U256;
use derive_more::Display;
use eyre::{bail, Result};

use crate::trade::amount::Amount;
use crate::trade::currency::{Currency, Token};
use crate::trade::pool::{PairPool, Pool};
use crate::trade::route::{Route, RouteLeg, RouteStatus};

/// Trade direction: which side of the swap the specified amount fixes.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Display)]
pub enum TradeKind {
    /// The input amount is fixed
    ExactInput,
    /// The output amount is fixed
    ExactOutput,
}

/// One hop of a legacy trade, always through a pair pool.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PairHop {
    /// The pair pool crossed
    pub pair: PairPool,
    /// Token entering the pool
    pub token_in: Token,
    /// Token leaving the pool
    pub token_out: Token,
    /// Amount entering the pool
    pub amount_in: U256,
    /// Amount leaving the pool
    pub amount_out: U256,
}

/// A trade routed exclusively over legacy pair pools.
#[derive(Clone, Debug)]
pub struct LegacyTrade {
    /// The pair hops, in execution order
    hops: Vec<PairHop>,
    /// The realized input amount
    amount_in: Amount,
    /// The realized output amount
    amount_out: Amount,
    /// The trade direction
    kind: TradeKind,
}

impl LegacyTrade {
    /// Converts a found route into the legacy representation for an
    /// exact-input trade.
    ///
    /// # Errors
    ///
    /// Fails when the route did not succeed, crosses a non-pair pool,
    /// or crosses a pair that is absent from the supplied pair set.
    pub fn exact_in(
        route: &Route,
        pairs: &[PairPool],
        amount_specified: Amount,
        currency_out: Currency,
    ) -> Result<Self> {
        if route.status != RouteStatus::Success {
            bail!("cannot build a trade from a {} route", route.status);
        }
        let hops = route
            .legs
            .iter()
            .map(|leg| pair_hop(leg, pairs))
            .collect::<Result<Vec<_>>>()?;
        if hops.is_empty() {
            bail!("route has no legs");
        }
        Ok(Self {
            hops,
            amount_in: amount_specified,
            amount_out: Amount::new(currency_out, route.amount_out),
            kind: TradeKind::ExactInput,
        })
    }

    /// The pair hops, in execution order.
    #[must_use]
    pub fn hops(&self) -> &[PairHop] {
        &self.hops
    }
}

/// Converts one route leg into a pair hop.
fn pair_hop(leg: &RouteLeg, pairs: &[PairPool]) -> Result<PairHop> {
    let Pool::Pair(pair) = &leg.pool else {
        bail!("route leg crosses a non-pair pool");
    };
    if !pairs.contains(pair) {
        bail!("route leg pair is missing from the pool set");
    }
    Ok(PairHop {
        pair: pair.clone(),
        token_in: leg.token_in,
        token_out: leg.token_out,
        amount_in: leg.amount_in,
        amount_out: leg.amount_out,
    })
}

/// A trade carrying a multi-hop constant-product route.
#[derive(Clone, Debug)]
pub struct MultiHopTrade {
    /// The winning route, kept verbatim
    route: Route,
    /// The realized input amount
    amount_in: Amount,
    /// The realized output amount
    amount_out: Amount,
    /// The trade direction
    kind: TradeKind,
}

impl MultiHopTrade {
    /// Wraps a successful multi-hop route into an exact-input trade.
    #[must_use]
    pub fn exact_in(route: Route, amount_specified: Amount, currency_out: Currency) -> Self {
        let amount_out = Amount::new(currency_out, route.amount_out);
        Self {
            route,
            amount_in: amount_specified,
            amount_out,
            kind: TradeKind::ExactInput,
        }
    }

    /// The winning route.
    #[must_use]
    pub const fn route(&self) -> &Route {
        &self.route
    }
}

/// The finalized trade selection, tagged by which search stage produced
/// the winning route.
#[derive(Clone, Debug)]
pub enum Trade {
    /// Built from the single-route search over pair pools
    Legacy(LegacyTrade),
    /// Built from the multi-hop constant-product search
    MultiHop(MultiHopTrade),
}

impl Trade {
    /// The trade direction.
    #[must_use]
    pub const fn kind(&self) -> TradeKind {
        match self {
            Self::Legacy(trade) => trade.kind,
            Self::MultiHop(trade) => trade.kind,
        }
    }

    /// The realized input amount.
    #[must_use]
    pub const fn amount_in(&self) -> Amount {
        match self {
            Self::Legacy(trade) => trade.amount_in,
            Self::MultiHop(trade) => trade.amount_in,
        }
    }

    /// The realized output amount.
    #[must_use]
    pub const fn amount_out(&self) -> Amount {
        match self {
            Self::Legacy(trade) => trade.amount_out,
            Self::MultiHop(trade) => trade.amount_out,
        }
    }

    /// Number of pools the trade crosses.
    #[must_use]
    pub fn hop_count(&self) -> usize {
        match self {
            Self::Legacy(trade) => trade.hops.len(),
            Self::MultiHop(trade) => trade.route.legs.len(),
        }
    }

    /// Output per unit of input, as a float for display. `None` when
    /// the input amount is zero.
    #[must_use]
    pub fn execution_price(&self) -> Option<f64> {
        let amount_in = self.amount_in().quotient();
        if amount_in.is_zero() {
            return None;
        }
        Some(f64::from(self.amount_out().quotient()) / f64::from(amount_in))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trade::test_helpers::*;

    #[test]
    fn test_legacy_exact_in() {
        let route = success_route(&[("A", "B", 100, 200)], 10);
        let trade = LegacyTrade::exact_in(
            &route,
            &[pair_pool("A", "B", 100, 200)],
            amount("A", 10),
            erc20("B"),
        )
        .unwrap();
        assert_eq!(trade.hops().len(), 1);
        assert_eq!(trade.amount_out, amount("B", 18));
        assert_eq!(trade.kind, TradeKind::ExactInput);
    }

    #[test]
    fn test_legacy_rejects_failed_route() {
        let err = LegacyTrade::exact_in(
            &Route::no_way(),
            &[pair_pool("A", "B", 100, 200)],
            amount("A", 10),
            erc20("B"),
        )
        .err()
        .unwrap();
        assert_eq!(err.to_string(), "cannot build a trade from a NoWay route");
    }

    #[test]
    fn test_legacy_rejects_constant_product_leg() {
        let route = cp_success_route("P1", "A", "B", 100, 200, 10);
        let err = LegacyTrade::exact_in(&route, &[], amount("A", 10), erc20("B"))
            .err()
            .unwrap();
        assert_eq!(err.to_string(), "route leg crosses a non-pair pool");
    }

    #[test]
    fn test_legacy_rejects_unknown_pair() {
        let route = success_route(&[("A", "B", 100, 200)], 10);
        let err = LegacyTrade::exact_in(&route, &[], amount("A", 10), erc20("B"))
            .err()
            .unwrap();
        assert_eq!(
            err.to_string(),
            "route leg pair is missing from the pool set"
        );
    }

    #[test]
    fn test_multi_hop_exact_in() {
        let route = cp_success_route("P1", "A", "B", 100, 200, 10);
        let trade = MultiHopTrade::exact_in(route.clone(), amount("A", 10), erc20("B"));
        assert_eq!(trade.route(), &route);
        assert_eq!(trade.amount_out, amount("B", 18));
    }

    #[test]
    fn test_execution_price() {
        let route = success_route(&[("A", "B", 1_000_000, 2_000_000)], 1_000);
        let trade = Trade::Legacy(
            LegacyTrade::exact_in(
                &route,
                &[pair_pool("A", "B", 1_000_000, 2_000_000)],
                amount("A", 1_000),
                erc20("B"),
            )
            .unwrap(),
        );
        let price = trade.execution_price().unwrap();
        assert!(price > 1.9 && price < 2.0);
    }
}
