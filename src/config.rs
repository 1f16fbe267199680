//! Environment-driven configuration.

use alloy::primitives::U256;
use eyre::{Result, WrapErr};

use crate::chain::ChainId;

/// Gas price assumed when none is configured, in wei. Matches the flat
/// estimate the swap frontend ships with.
pub const DEFAULT_GAS_PRICE: u64 = 1_000_000;

/// Runtime configuration, read once at startup.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Chain to quote trades on when the snapshot does not pin one
    pub chain: ChainId,
    /// Gas price fed into the route search cost model, in wei
    pub gas_price: U256,
}

impl Config {
    /// Reads configuration from the environment, after loading `.env`
    /// if present.
    ///
    /// # Environment Variables
    /// * `EDDY_CHAIN_ID` - numeric chain id (default: 1)
    /// * `EDDY_GAS_PRICE` - gas price in wei (default: 1,000,000)
    ///
    /// # Errors
    /// * If a variable is set but does not parse
    /// * If the chain id is not supported
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        let chain = match std::env::var("EDDY_CHAIN_ID") {
            Ok(raw) => {
                let id = raw.parse().wrap_err("EDDY_CHAIN_ID must be a number")?;
                ChainId::from_id(id)?
            }
            Err(_) => ChainId::Ethereum,
        };

        let gas_price = match std::env::var("EDDY_GAS_PRICE") {
            Ok(raw) => raw.parse().wrap_err("EDDY_GAS_PRICE must be a number")?,
            Err(_) => U256::from(DEFAULT_GAS_PRICE),
        };

        Ok(Self { chain, gas_price })
    }
}
