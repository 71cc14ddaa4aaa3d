//! Batch queries spread over the rayon thread pool.
//!
//! Each search stays single-threaded; only independent graph pairs run in
//! parallel.

use isomatch_common::{Config, GraphView};
use rayon::prelude::*;

use crate::error::MatchError;

/// Run [`crate::find_mapping`] over every `(host, pattern)` pair and report
/// whether each one matched. Results keep the input order.
pub fn matches_batch<G1, G2>(pairs: &[(G1, G2)], config: &Config) -> Vec<Result<bool, MatchError>>
where
    G1: GraphView + Sync,
    G2: GraphView + Sync,
{
    tracing::info!("matching {} graph pairs in parallel", pairs.len());
    pairs
        .par_iter()
        .map(|(host, pattern)| crate::find_mapping(host, pattern, config).map(|m| m.is_some()))
        .collect()
}

/// Count mappings for every `(host, pattern)` pair. Results keep the input
/// order.
pub fn count_batch<G1, G2>(pairs: &[(G1, G2)], config: &Config) -> Vec<Result<usize, MatchError>>
where
    G1: GraphView + Sync,
    G2: GraphView + Sync,
{
    pairs
        .par_iter()
        .map(|(host, pattern)| crate::count_mappings(host, pattern, config))
        .collect()
}
