//! Input validation and cheap whole-graph rejection, run once per search.

use isomatch_common::{Config, GraphView, MatchMode, NodeIdx};
use itertools::Itertools;

use crate::error::MatchError;

/// Check that the graphs can be compared under `config` and return their
/// shared directedness.
///
/// # Errors
///
/// Returns [`MatchError`] when the graphs disagree on directedness, when the
/// configuration demands a directedness the graphs lack, or when a subgraph
/// pattern has more nodes than its host.
pub fn validate<G1: GraphView, G2: GraphView>(
    host: &G1,
    pattern: &G2,
    config: &Config,
) -> Result<bool, MatchError> {
    let directed = host.is_directed();
    if directed != pattern.is_directed() {
        return Err(MatchError::directedness_mismatch(directed, pattern.is_directed()));
    }
    if let Some(requested) = config.directedness.required() {
        if requested != directed {
            return Err(MatchError::unsupported_directedness(requested, directed));
        }
    }
    if config.mode.is_subgraph() && pattern.node_count() > host.node_count() {
        return Err(MatchError::pattern_larger_than_host(
            host.node_count(),
            pattern.node_count(),
        ));
    }
    Ok(directed)
}

/// Whether a search could possibly succeed. A `false` answer is definitive.
pub fn admits<G1: GraphView, G2: GraphView>(
    host: &G1,
    pattern: &G2,
    mode: MatchMode,
    multiplicity: bool,
) -> bool {
    match mode {
        MatchMode::Isomorphism => {
            host.node_count() == pattern.node_count()
                && edge_weight(host, multiplicity) == edge_weight(pattern, multiplicity)
                && degree_signature(host, multiplicity) == degree_signature(pattern, multiplicity)
        }
        MatchMode::Subgraph | MatchMode::InducedSubgraph => {
            host.node_count() >= pattern.node_count()
                && edge_weight(host, multiplicity) >= edge_weight(pattern, multiplicity)
        }
    }
}

/// Number of edges, or of distinct adjacent pairs when multiplicity is ignored.
fn edge_weight<G: GraphView>(g: &G, multiplicity: bool) -> usize {
    let directed = g.is_directed();
    g.nodes()
        .flat_map(move |v| {
            g.successors(v)
                .iter()
                .filter(move |&&w| directed || w >= v)
                .map(move |&w| weight(g, v, w, multiplicity))
        })
        .sum()
}

fn weight<G: GraphView>(g: &G, from: NodeIdx, to: NodeIdx, multiplicity: bool) -> usize {
    if multiplicity { g.edge_multiplicity(from, to) } else { 1 }
}

/// Sorted `(out, in, self-loops)` triple of every node. Self-loops are kept
/// apart from the other edges; `in` stays zero for undirected graphs.
fn degree_signature<G: GraphView>(g: &G, multiplicity: bool) -> Vec<(usize, usize, usize)> {
    let directed = g.is_directed();
    g.nodes()
        .map(|v| {
            let out: usize = g
                .successors(v)
                .iter()
                .filter(|&&w| w != v)
                .map(|&w| weight(g, v, w, multiplicity))
                .sum();
            let ins: usize = if directed {
                g.predecessors(v)
                    .iter()
                    .filter(|&&w| w != v)
                    .map(|&w| weight(g, w, v, multiplicity))
                    .sum()
            } else {
                0
            };
            let loops = if g.self_loops(v) > 0 { weight(g, v, v, multiplicity) } else { 0 };
            (out, ins, loops)
        })
        .sorted_unstable()
        .collect()
}
