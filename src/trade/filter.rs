//! Reduces a heterogeneous candidate list to the pools a route search
//! may actually use.

use std::collections::HashSet;

use crate::trade::pool::{Pool, PoolCandidate, PoolState};

/// Keeps only candidates that exist and carry a concrete pool. Input
/// order is preserved; repeated pools keep their first occurrence.
#[must_use]
pub fn usable_pools(candidates: &[PoolCandidate]) -> Vec<Pool> {
    let mut seen = HashSet::new();
    candidates
        .iter()
        .filter(|candidate| candidate.state == PoolState::Exists)
        .filter_map(|candidate| candidate.pool.clone())
        .filter(|pool| seen.insert(pool.id()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trade::test_helpers::*;

    #[test]
    fn test_keeps_existing_pools_in_order() {
        let first = pair("A", "B", 1, 2);
        let second = cp("P1", "B", "C", 3, 4, 30);
        let candidates = vec![
            PoolCandidate::exists(first.clone()),
            PoolCandidate::not_exists(),
            PoolCandidate::loading(),
            PoolCandidate::exists(second.clone()),
        ];
        assert_eq!(usable_pools(&candidates), vec![first, second]);
    }

    #[test]
    fn test_drops_exists_without_pool() {
        // A lookup may claim existence but fail to materialize the pool;
        // such entries are unusable.
        let candidates = vec![PoolCandidate {
            state: PoolState::Exists,
            pool: None,
        }];
        assert!(usable_pools(&candidates).is_empty());
    }

    #[test]
    fn test_deduplicates_by_identity() {
        let stale = pair("A", "B", 1, 2);
        let fresh = pair("A", "B", 5, 6);
        let candidates = vec![
            PoolCandidate::exists(stale.clone()),
            PoolCandidate::exists(fresh),
        ];
        // First occurrence wins.
        assert_eq!(usable_pools(&candidates), vec![stale]);
    }

    #[test]
    fn test_empty_input() {
        assert!(usable_pools(&[]).is_empty());
    }
}
