//! Terse constructors for tests. Token and pool tags are short strings
//! that map to deterministic addresses, so fixtures read as `pair("A",
//! "B", 100, 200)` rather than forty-character hex literals.

#![allow(dead_code)]

use alloy::primitives::{Address, U256};

use crate::chain::ChainId;
use crate::trade::amount::Amount;
use crate::trade::currency::{Currency, Token};
use crate::trade::derive::TradeQuery;
use crate::trade::pool::{ConstantProductPool, PairPool, Pool};
use crate::trade::route::{Route, RouteLeg, RouteStatus};
use crate::trade::trade::TradeKind;

/// The chain all test fixtures live on.
pub fn chain() -> ChainId {
    ChainId::Ethereum
}

/// A deterministic address derived from a short tag.
pub fn address_from_tag(tag: &str) -> Address {
    let mut bytes = [0u8; 20];
    for (i, byte) in tag.bytes().take(20).enumerate() {
        bytes[i] = byte;
    }
    Address::from(bytes)
}

/// A token on the test chain.
pub fn token(tag: &str) -> Token {
    Token::new(chain(), address_from_tag(tag))
}

/// An ERC-20 currency on the test chain.
pub fn erc20(tag: &str) -> Currency {
    Currency::Erc20(token(tag))
}

/// An amount of an ERC-20 currency.
pub fn amount(tag: &str, quotient: u64) -> Amount {
    Amount::new(erc20(tag), U256::from(quotient))
}

/// A pair pool between two tagged tokens.
pub fn pair_pool(token_a: &str, token_b: &str, reserve_a: u64, reserve_b: u64) -> PairPool {
    PairPool::new(
        token(token_a),
        token(token_b),
        U256::from(reserve_a),
        U256::from(reserve_b),
    )
    .unwrap()
}

/// A pair pool wrapped as a routable [`Pool`].
pub fn pair(token_a: &str, token_b: &str, reserve_a: u64, reserve_b: u64) -> Pool {
    Pool::Pair(pair_pool(token_a, token_b, reserve_a, reserve_b))
}

/// A constant-product pool between two tagged tokens.
pub fn cp_pool(
    pool_tag: &str,
    token_a: &str,
    token_b: &str,
    reserve_a: u64,
    reserve_b: u64,
    fee_bps: u32,
) -> ConstantProductPool {
    ConstantProductPool::new(
        address_from_tag(pool_tag),
        token(token_a),
        token(token_b),
        U256::from(reserve_a),
        U256::from(reserve_b),
        fee_bps,
    )
    .unwrap()
}

/// A constant-product pool wrapped as a routable [`Pool`].
pub fn cp(
    pool_tag: &str,
    token_a: &str,
    token_b: &str,
    reserve_a: u64,
    reserve_b: u64,
    fee_bps: u32,
) -> Pool {
    Pool::ConstantProduct(cp_pool(
        pool_tag, token_a, token_b, reserve_a, reserve_b, fee_bps,
    ))
}

/// A successful route folded through pair pools, one per hop tuple
/// `(token_in, token_out, reserve_in, reserve_out)`.
pub fn success_route(hops: &[(&str, &str, u64, u64)], amount_in: u64) -> Route {
    let pools: Vec<Pool> = hops
        .iter()
        .map(|(token_in, token_out, reserve_in, reserve_out)| {
            pair(token_in, token_out, *reserve_in, *reserve_out)
        })
        .collect();
    route_through(&pools, hops, amount_in)
}

/// A successful single-hop route through a constant-product pool.
pub fn cp_success_route(
    pool_tag: &str,
    token_a: &str,
    token_b: &str,
    reserve_a: u64,
    reserve_b: u64,
    amount_in: u64,
) -> Route {
    let pool = cp(pool_tag, token_a, token_b, reserve_a, reserve_b, 30);
    route_through(&[pool], &[(token_a, token_b, reserve_a, reserve_b)], amount_in)
}

/// Folds an amount through the given pools along the hop tuples.
fn route_through(pools: &[Pool], hops: &[(&str, &str, u64, u64)], amount_in: u64) -> Route {
    let amount_in = U256::from(amount_in);
    let mut legs = Vec::with_capacity(pools.len());
    let mut current = amount_in;
    for (pool, (token_in, token_out, _, _)) in pools.iter().zip(hops) {
        let amount_out = pool.amount_out(token(token_in), current).unwrap();
        legs.push(RouteLeg {
            pool: pool.clone(),
            token_in: token(token_in),
            token_out: token(token_out),
            amount_in: current,
            amount_out,
        });
        current = amount_out;
    }
    let gas_estimate = 50_000 + legs.iter().map(|leg| leg.pool.gas_estimate()).sum::<u64>();
    Route {
        status: RouteStatus::Success,
        legs,
        amount_in,
        amount_out: current,
        gas_estimate,
    }
}

/// An exact-input query from token "A" to token "B" over the given
/// pools, with the default gas price.
pub fn query(pools: &[Pool], amount_in: u64) -> TradeQuery {
    TradeQuery {
        chain: chain(),
        kind: TradeKind::ExactInput,
        amount_specified: Some(amount("A", amount_in)),
        main_currency: Some(erc20("A")),
        other_currency: Some(erc20("B")),
        pools: pools.to_vec(),
        gas_price: U256::from(1_000_000u64),
    }
}
