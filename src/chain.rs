//! Chain registry: numeric chain ids, wrapped-native tokens, configured
//! bridge tokens and per-chain routing capabilities.

use alloy::primitives::{address, Address};
use derive_more::Display;
use eyre::{bail, Result};

use crate::trade::currency::Token;

/// WETH on Ethereum mainnet
const WETH_MAINNET: Address = address!("0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2");
/// WETH on Optimism (OP stack predeploy)
const WETH_OPTIMISM: Address = address!("0x4200000000000000000000000000000000000006");
/// WMATIC on Polygon
const WMATIC_POLYGON: Address = address!("0x0d500B1d8E8eF31E21C99d1Db9A6444d3ADf1270");
/// WETH on Base (OP stack predeploy)
const WETH_BASE: Address = address!("0x4200000000000000000000000000000000000006");

/// A supported chain.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChainId {
    /// Ethereum mainnet (chain id 1)
    Ethereum,
    /// Optimism (chain id 10)
    Optimism,
    /// Polygon PoS (chain id 137)
    Polygon,
    /// Base (chain id 8453)
    Base,
}

impl ChainId {
    /// The numeric chain id.
    #[must_use]
    pub const fn id(self) -> u64 {
        match self {
            Self::Ethereum => 1,
            Self::Optimism => 10,
            Self::Polygon => 137,
            Self::Base => 8453,
        }
    }

    /// Looks up a chain by its numeric id.
    ///
    /// # Errors
    ///
    /// Returns an error for chain ids this crate has no configuration for.
    pub fn from_id(id: u64) -> Result<Self> {
        match id {
            1 => Ok(Self::Ethereum),
            10 => Ok(Self::Optimism),
            137 => Ok(Self::Polygon),
            8453 => Ok(Self::Base),
            other => bail!("unsupported chain id: {other}"),
        }
    }

    /// Whether the multi-hop constant-product routing stage runs on this
    /// chain. Only Optimism has the pool type deployed.
    #[must_use]
    pub const fn supports_multi_hop(self) -> bool {
        matches!(self, Self::Optimism)
    }

    /// The wrapped form of the chain's native asset.
    #[must_use]
    pub const fn wrapped_native(self) -> Token {
        let address = match self {
            Self::Ethereum => WETH_MAINNET,
            Self::Optimism => WETH_OPTIMISM,
            Self::Polygon => WMATIC_POLYGON,
            Self::Base => WETH_BASE,
        };
        Token::new(self, address)
    }

    /// Bridge tokens used to connect currency pairs that lack a direct
    /// pool. The wrapped native asset is always a bridge and is not
    /// repeated here.
    #[must_use]
    pub fn bridge_tokens(self) -> Vec<Token> {
        let addresses: &[Address] = match self {
            Self::Ethereum => &[
                // USDC, DAI, USDT
                address!("0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48"),
                address!("0x6B175474E89094C44Da98b954EedeAC495271d0F"),
                address!("0xdAC17F958D2ee523a2206206994597C13D831ec7"),
            ],
            Self::Optimism => &[
                // USDC (bridged), DAI
                address!("0x7F5c764cBc14f9669B88837ca1490cCa17c31607"),
                address!("0xDA10009cBd5D07dd0CeCc66161FC93D7c9000da1"),
            ],
            Self::Polygon => &[
                // USDC, DAI
                address!("0x2791Bca1f2de4661ED88A30C99A7a9449Aa84174"),
                address!("0x8f3Cf7ad23Cd3CaDbD9735AFf958023239c6A063"),
            ],
            Self::Base => &[
                // USDC, DAI
                address!("0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913"),
                address!("0x50c5725949A6F0c72E6C4a641F24049A917DB0Cb"),
            ],
        };
        addresses
            .iter()
            .map(|address| Token::new(self, *address))
            .collect()
    }
}
