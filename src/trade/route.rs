//! Routes as reported by a route search: a status and, on success, the
//! ordered pool hops with their per-leg amounts.

use alloy::primitives::U256;
use derive_more::Display;

use crate::trade::currency::Token;
use crate::trade::pool::Pool;

/// Outcome of a route search.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Display)]
pub enum RouteStatus {
    /// A route carrying the full amount was found
    Success,
    /// No route connects the two tokens
    NoWay,
    /// Only part of the amount could be routed
    PartialSuccess,
}

/// One hop of a route: a pool crossed in a specific direction with the
/// amounts realized on each side.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct RouteLeg {
    /// The pool this leg crosses
    pub pool: Pool,
    /// Token entering the pool
    pub token_in: Token,
    /// Token leaving the pool
    pub token_out: Token,
    /// Amount entering the pool
    pub amount_in: U256,
    /// Amount leaving the pool
    pub amount_out: U256,
}

/// An ordered sequence of legs connecting an input token to an output
/// token, annotated with the search outcome and total amounts.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Route {
    /// Outcome of the search that produced this route
    pub status: RouteStatus,
    /// The hops, in execution order; empty unless the search succeeded
    pub legs: Vec<RouteLeg>,
    /// Total amount entering the first leg
    pub amount_in: U256,
    /// Total amount leaving the last leg
    pub amount_out: U256,
    /// Rough gas cost of executing the route
    pub gas_estimate: u64,
}

impl Route {
    /// The route returned when no path connects the tokens.
    #[must_use]
    pub const fn no_way() -> Self {
        Self {
            status: RouteStatus::NoWay,
            legs: Vec::new(),
            amount_in: U256::ZERO,
            amount_out: U256::ZERO,
            gas_estimate: 0,
        }
    }

    /// The input token of the route, if it has any legs.
    #[must_use]
    pub fn token_in(&self) -> Option<Token> {
        self.legs.first().map(|leg| leg.token_in)
    }

    /// The output token of the route, if it has any legs.
    #[must_use]
    pub fn token_out(&self) -> Option<Token> {
        self.legs.last().map(|leg| leg.token_out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trade::test_helpers::*;

    #[test]
    fn test_no_way_has_no_legs() {
        let route = Route::no_way();
        assert_eq!(route.status, RouteStatus::NoWay);
        assert!(route.legs.is_empty());
        assert_eq!(route.token_in(), None);
        assert_eq!(route.token_out(), None);
    }

    #[test]
    fn test_endpoint_tokens() {
        let route = success_route(&[("A", "B", 100, 200), ("B", "C", 200, 100)], 10);
        assert_eq!(route.token_in(), Some(token("A")));
        assert_eq!(route.token_out(), Some(token("C")));
    }
}
