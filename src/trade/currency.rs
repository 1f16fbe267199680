//! Currencies as they appear in a swap request: ERC-20 tokens identified
//! by a chain-scoped address, and the chain's native asset, which trades
//! through its wrapped token form.

use std::fmt::{self, Debug, Display};

use alloy::primitives::Address;

use crate::chain::ChainId;

/// A token contract on a specific chain.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Token {
    /// The chain the contract is deployed on
    pub chain: ChainId,
    /// The contract address
    pub address: Address,
}

impl Token {
    /// Creates a token from a chain and contract address.
    #[must_use]
    pub const fn new(chain: ChainId, address: Address) -> Self {
        Self { chain, address }
    }
}

impl Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.address, self.chain)
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.address)
    }
}

/// An unordered pair of distinct tokens, stored in canonical order so it
/// can key pool lookups regardless of which side the caller puts first.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TokenPair(Token, Token);

impl TokenPair {
    /// Creates a canonically ordered pair. Returns `None` when both
    /// tokens are the same.
    #[must_use]
    pub fn new(a: Token, b: Token) -> Option<Self> {
        match a.cmp(&b) {
            std::cmp::Ordering::Less => Some(Self(a, b)),
            std::cmp::Ordering::Equal => None,
            std::cmp::Ordering::Greater => Some(Self(b, a)),
        }
    }

    /// The pair in canonical order.
    #[must_use]
    pub const fn get(&self) -> (Token, Token) {
        (self.0, self.1)
    }

    /// Whether the pair contains the given token.
    #[must_use]
    pub fn contains(&self, token: Token) -> bool {
        self.0 == token || self.1 == token
    }

    /// Given one token of the pair, returns the other. `None` when the
    /// token is not part of the pair.
    #[must_use]
    pub fn other(&self, token: Token) -> Option<Token> {
        if token == self.0 {
            Some(self.1)
        } else if token == self.1 {
            Some(self.0)
        } else {
            None
        }
    }
}

impl Debug for TokenPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?})", self.0, self.1)
    }
}

/// A tradable currency: either an ERC-20 token or the chain's native
/// asset. The native asset routes through its wrapped token.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Currency {
    /// The chain's native asset (ETH, MATIC, ...)
    Native(ChainId),
    /// An ERC-20 token
    Erc20(Token),
}

impl Currency {
    /// The chain this currency lives on.
    #[must_use]
    pub const fn chain(&self) -> ChainId {
        match self {
            Self::Native(chain) => *chain,
            Self::Erc20(token) => token.chain,
        }
    }

    /// The tradable token form: the token itself for ERC-20s, the
    /// chain's wrapped native token otherwise.
    #[must_use]
    pub const fn wrapped(&self) -> Token {
        match self {
            Self::Native(chain) => chain.wrapped_native(),
            Self::Erc20(token) => *token,
        }
    }
}
