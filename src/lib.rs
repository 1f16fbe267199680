/*!
 * # Eddy - Best-Route Trade Derivation
 *
 * Eddy derives the best available trade for a token swap from a set of
 * liquidity pools on EVM-compatible chains. Given a swap request and a
 * snapshot of pool state, it enumerates the pool candidates worth
 * checking, filters them down to usable pools, searches for the best
 * single- or multi-hop route, and wraps the winner into an immutable
 * trade value ready for display or transaction encoding.
 *
 * ## Core Features
 *
 * - **Candidate Resolution**: Direct and bridged token combinations,
 *   resolved against an async pool-existence lookup
 * - **Route Search**: Pluggable optimizer seam with a built-in baseline
 *   path search
 * - **Trade Construction**: Legacy (pair-only) and multi-hop trade
 *   representations, selected by which search produced the winner
 * - **Pure Derivation**: No hidden caches; callers re-derive whenever
 *   an input changes
 *
 * ## Module Structure
 *
 * - `chain`: Chain registry and bridge-token configuration
 * - `config`: Configuration management for the CLI
 * - `snapshot`: Pool snapshot file format
 * - `trade`: The derivation pipeline and its data model
 * - `utils`: Utility functions and helpers
 */

/// Chain registry and bridge-token configuration
pub mod chain;
/// Configuration management
pub mod config;
/// Pool snapshot file format
pub mod snapshot;
/// Trade derivation pipeline
pub mod trade;
/// Utility functions and helpers
pub mod utils;
