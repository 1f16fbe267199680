use std::path::{Path, PathBuf};

use alloy::primitives::{Address, U256};
use clap::{Parser, Subcommand};
use eyre::Result;
use log::info;

use eddy::config::Config;
use eddy::snapshot::Snapshot;
use eddy::trade::amount::Amount;
use eddy::trade::candidates::resolve_candidates;
use eddy::trade::currency::{Currency, Token};
use eddy::trade::derive::{derive_trade, TradeQuery};
use eddy::trade::filter::usable_pools;
use eddy::trade::router::BaselineRouter;
use eddy::trade::trade::{Trade, TradeKind};
use eddy::utils::logger::setup_logger;

/// Command line interface definition.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// The subcommand to run
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Quote the best trade for a swap over a pool snapshot
    Quote {
        /// Path to the pool snapshot JSON file
        snapshot: PathBuf,
        /// Input token address
        token_in: Address,
        /// Output token address
        token_out: Address,
        /// Input amount, in the token's smallest unit
        amount: U256,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logger()?;
    let cli = Cli::parse();

    match cli.command {
        Commands::Quote {
            snapshot,
            token_in,
            token_out,
            amount,
        } => quote(&snapshot, token_in, token_out, amount).await,
    }
}

/// Loads the snapshot, derives the best trade and prints it.
async fn quote(path: &Path, token_in: Address, token_out: Address, amount: U256) -> Result<()> {
    let config = Config::from_env()?;
    let snapshot = Snapshot::load(path)?;
    let chain = snapshot.chain()?;
    let resolver = snapshot.resolver()?;
    info!("loaded {} pools from {}", resolver.len(), path.display());

    let input = Currency::Erc20(Token::new(chain, token_in));
    let output = Currency::Erc20(Token::new(chain, token_out));
    let candidates = resolve_candidates(&resolver, chain, input, output).await;
    let pools = usable_pools(&candidates);
    info!(
        "{} of {} candidates are usable",
        pools.len(),
        candidates.len()
    );

    let query = TradeQuery {
        chain,
        kind: TradeKind::ExactInput,
        amount_specified: Some(Amount::new(input, amount)),
        main_currency: Some(input),
        other_currency: Some(output),
        pools,
        gas_price: config.gas_price,
    };

    match derive_trade(&query, &BaselineRouter::default()) {
        Some(trade) => print_trade(&trade),
        None => println!("no trade"),
    }
    Ok(())
}

/// Prints a derived trade for human consumption.
fn print_trade(trade: &Trade) {
    let variant = match trade {
        Trade::Legacy(_) => "legacy",
        Trade::MultiHop(_) => "multi-hop",
    };
    println!("{variant} trade, {} hop(s)", trade.hop_count());
    println!("  amount in:  {:?}", trade.amount_in());
    println!("  amount out: {:?}", trade.amount_out());
    if let Some(price) = trade.execution_price() {
        println!("  price: {price:.6}");
    }
}
