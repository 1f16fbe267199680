use alloy::primitives::{Address, U256};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use eddy::chain::ChainId;
use eddy::trade::amount::Amount;
use eddy::trade::currency::{Currency, Token};
use eddy::trade::derive::{derive_trade, TradeQuery};
use eddy::trade::pool::{PairPool, Pool};
use eddy::trade::router::BaselineRouter;
use eddy::trade::trade::TradeKind;
use rand::prelude::*;

/// Generate a new random token on the bench chain
fn random_token(rng: &mut impl Rng) -> Token {
    let mut bytes = [0u8; 20];
    rng.fill(&mut bytes);
    Token::new(ChainId::Ethereum, Address::from(bytes))
}

/// Generate synthetic pair pools between random tokens
fn generate_pools(pool_count: usize, tokens: &[Token], rng: &mut impl Rng) -> Vec<Pool> {
    let mut pools = Vec::with_capacity(pool_count);
    while pools.len() < pool_count {
        let idx1 = fastrand::usize(0..tokens.len());
        let mut idx2 = fastrand::usize(0..tokens.len());
        while idx1 == idx2 {
            idx2 = fastrand::usize(0..tokens.len());
        }

        let reserve0 = U256::from(rng.random_range(1_000u64..1_000_000));
        let reserve1 = U256::from(rng.random_range(1_000u64..1_000_000));

        if let Some(pool) = PairPool::new(tokens[idx1], tokens[idx2], reserve0, reserve1) {
            pools.push(Pool::Pair(pool));
        }
    }
    pools
}

/// Benchmark deriving a trade over pool sets of increasing size
fn bench_derive_trade(c: &mut Criterion) {
    let mut group = c.benchmark_group("derive_trade");
    let mut rng = rand::rng();
    let router = BaselineRouter::default();

    for pool_count in [100usize, 500, 1_000] {
        let token_count = (pool_count / 5).max(10);
        let tokens: Vec<Token> = (0..token_count).map(|_| random_token(&mut rng)).collect();
        let mut pools = generate_pools(pool_count, &tokens, &mut rng);

        // Guarantee at least one direct pool between the endpoints so
        // the search always has a route to find.
        let (token_in, token_out) = (tokens[0], tokens[1]);
        pools.push(Pool::Pair(
            PairPool::new(
                token_in,
                token_out,
                U256::from(500_000u64),
                U256::from(500_000u64),
            )
            .unwrap(),
        ));

        let query = TradeQuery {
            chain: ChainId::Ethereum,
            kind: TradeKind::ExactInput,
            amount_specified: Some(Amount::new(
                Currency::Erc20(token_in),
                U256::from(1_000u64),
            )),
            main_currency: Some(Currency::Erc20(token_in)),
            other_currency: Some(Currency::Erc20(token_out)),
            pools,
            gas_price: U256::from(1_000_000u64),
        };

        group.throughput(criterion::Throughput::Elements(pool_count as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(pool_count),
            &query,
            |b, query| b.iter(|| black_box(derive_trade(query, &router))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_derive_trade);
criterion_main!(benches);
