//! The pool snapshot file consumed by the CLI: a JSON document listing
//! the pair and constant-product pools known for one chain, with their
//! current reserves.

use std::fs;
use std::path::Path;

use alloy::primitives::{Address, U256};
use eyre::{Result, WrapErr};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::chain::ChainId;
use crate::trade::candidates::SnapshotResolver;
use crate::trade::currency::Token;
use crate::trade::pool::{ConstantProductPool, PairPool};

/// A point-in-time view of the pools on one chain.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Snapshot {
    /// Numeric id of the chain the pools live on
    pub chain_id: u64,
    /// Legacy pair pools
    #[serde(default)]
    pub pairs: Vec<PairEntry>,
    /// Constant-product pools
    #[serde(default)]
    pub constant_product: Vec<ConstantProductEntry>,
}

/// One pair pool in the snapshot.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PairEntry {
    /// First token of the pool
    pub token0: Address,
    /// Second token of the pool
    pub token1: Address,
    /// Reserve of `token0`
    pub reserve0: U256,
    /// Reserve of `token1`
    pub reserve1: U256,
}

/// One constant-product pool in the snapshot.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ConstantProductEntry {
    /// The pool contract address
    pub address: Address,
    /// First token of the pool
    pub token0: Address,
    /// Second token of the pool
    pub token1: Address,
    /// Reserve of `token0`
    pub reserve0: U256,
    /// Reserve of `token1`
    pub reserve1: U256,
    /// Swap fee in basis points
    pub fee_bps: u32,
}

impl Snapshot {
    /// Loads a snapshot from a JSON file.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read snapshot {}", path.display()))?;
        serde_json::from_str(&contents)
            .wrap_err_with(|| format!("failed to parse snapshot {}", path.display()))
    }

    /// The chain this snapshot was taken on.
    ///
    /// # Errors
    ///
    /// Fails when the chain id is not supported.
    pub fn chain(&self) -> Result<ChainId> {
        ChainId::from_id(self.chain_id)
    }

    /// Builds a resolver over the snapshot's pools. Entries that do not
    /// form a valid pool (both tokens equal) are skipped with a
    /// warning, matching the rule that bad lookup data degrades to
    /// "pool unusable" rather than failing the derivation.
    ///
    /// # Errors
    ///
    /// Fails when the snapshot's chain id is not supported.
    pub fn resolver(&self) -> Result<SnapshotResolver> {
        let chain = self.chain()?;
        let mut resolver = SnapshotResolver::new();
        for entry in &self.pairs {
            let pool = PairPool::new(
                Token::new(chain, entry.token0),
                Token::new(chain, entry.token1),
                entry.reserve0,
                entry.reserve1,
            );
            match pool {
                Some(pool) => resolver.add_pair(pool),
                None => warn!("skipping pair with identical tokens: {}", entry.token0),
            }
        }
        for entry in &self.constant_product {
            let pool = ConstantProductPool::new(
                entry.address,
                Token::new(chain, entry.token0),
                Token::new(chain, entry.token1),
                entry.reserve0,
                entry.reserve1,
                entry.fee_bps,
            );
            match pool {
                Some(pool) => resolver.add_constant_product(pool),
                None => warn!("skipping pool with identical tokens: {}", entry.address),
            }
        }
        Ok(resolver)
    }
}
