//! # Trade Derivation
//!
//! The derivation pipeline that turns a swap request into the best
//! available trade: enumerate pool candidates, filter them down to
//! usable pools, search for the best route, and wrap the winner into a
//! trade value. Every stage is a pure function over its inputs; callers
//! re-run the pipeline whenever an input changes.

/// Currency-tagged integer amounts
pub mod amount;
/// Candidate enumeration and pool resolution
pub mod candidates;
/// Tokens, token pairs and currencies
pub mod currency;
/// The trade derivation entry point
pub mod derive;
/// Candidate filtering
pub mod filter;
/// Pool types and swap math
pub mod pool;
/// Routes and their statuses
pub mod route;
/// Route search over a pool set
pub mod router;
/// Test fixtures
mod test_helpers;
/// Trade representations
pub mod trade;
