//! VF2 graph and subgraph isomorphism.
//!
//! Given a host graph and a pattern graph (both implementing
//! [`GraphView`]), the matcher decides whether the pattern occurs in the
//! host and enumerates every host-to-pattern node correspondence under one
//! of three relations: full isomorphism, subgraph (monomorphism), or
//! induced subgraph. Directed graphs, self-loops and parallel edges are
//! supported.
//!
//! Quick examples
//!
//! Decide isomorphism:
//! ```ignore
//! use isomatch_common::AdjacencyGraph;
//! let a = AdjacencyGraph::from_edges(false, 3, [(0, 1), (1, 2)]);
//! let b = AdjacencyGraph::from_edges(false, 3, [(2, 0), (0, 1)]);
//! assert!(isomatch_vf2::is_isomorphic(&a, &b)?);
//! ```
//!
//! Enumerate occurrences of a pattern lazily:
//! ```ignore
//! use isomatch_common::Config;
//! for mapping in isomatch_vf2::enumerate_mappings(&host, &pattern, &Config::subgraph())? {
//!     let image: Vec<_> = mapping.host_nodes().collect();
//! }
//! ```

mod engine;
mod error;
mod mapping;
mod observer;
#[cfg(feature = "rayon")]
pub mod parallel;
mod prefilter;
mod semantic;

pub use engine::{SearchStatus, Vf2Matcher};
pub use error::MatchError;
pub use isomatch_common::{Config, Directedness, EdgeSemantics, GraphView, MatchMode, NodeIdx};
pub use mapping::Mapping;
pub use observer::{NoObserver, SearchObserver, SearchStats, StepBudget, Visit};
pub use semantic::{EdgeMatcher, NoSemanticMatch, NodeMatcher};

/// Whether `g1` and `g2` are isomorphic.
///
/// # Errors
///
/// Returns [`MatchError::DirectednessMismatch`] if one graph is directed and
/// the other is not.
pub fn is_isomorphic<G1: GraphView, G2: GraphView>(g1: &G1, g2: &G2) -> Result<bool, MatchError> {
    Ok(find_mapping(g1, g2, &Config::isomorphism())?.is_some())
}

/// Whether `pattern` occurs in `host`, as an induced subgraph when
/// `induced` is set and as a plain subgraph otherwise.
///
/// # Errors
///
/// Returns [`MatchError`] if the graphs disagree on directedness or the
/// pattern has more nodes than the host.
pub fn is_subgraph_isomorphic<G1: GraphView, G2: GraphView>(
    host: &G1,
    pattern: &G2,
    induced: bool,
) -> Result<bool, MatchError> {
    let config = if induced {
        Config::induced_subgraph()
    } else {
        Config::subgraph()
    };
    Ok(find_mapping(host, pattern, &config)?.is_some())
}

/// First mapping in enumeration order, if any.
///
/// # Errors
///
/// Returns [`MatchError`] when the graphs cannot be compared under `config`.
pub fn find_mapping<G1: GraphView, G2: GraphView>(
    host: &G1,
    pattern: &G2,
    config: &Config,
) -> Result<Option<Mapping>, MatchError> {
    Ok(Vf2Matcher::new(host, pattern, config)?.next())
}

/// Lazy iterator over every mapping of `pattern` into `host`.
///
/// # Errors
///
/// Returns [`MatchError`] when the graphs cannot be compared under `config`.
pub fn enumerate_mappings<'g, G1: GraphView, G2: GraphView>(
    host: &'g G1,
    pattern: &'g G2,
    config: &Config,
) -> Result<Vf2Matcher<'g, G1, G2>, MatchError> {
    Vf2Matcher::new(host, pattern, config)
}

/// Number of mappings of `pattern` into `host`.
///
/// # Errors
///
/// Returns [`MatchError`] when the graphs cannot be compared under `config`.
pub fn count_mappings<G1: GraphView, G2: GraphView>(
    host: &G1,
    pattern: &G2,
    config: &Config,
) -> Result<usize, MatchError> {
    Ok(Vf2Matcher::new(host, pattern, config)?.count())
}
