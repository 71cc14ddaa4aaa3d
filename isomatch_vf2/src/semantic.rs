//! Optional node and edge compatibility predicates.
//!
//! Structural feasibility is always checked first; these hooks let callers
//! veto pairs by payload (labels, weights, cell kinds, ...). Closures with
//! the right signature implement the traits directly.
//!
//! Quick examples
//!
//! Only match nodes carrying the same color:
//! ```ignore
//! let colors_host = vec![0, 1, 1];
//! let colors_pattern = vec![1, 1];
//! let matcher = Vf2Matcher::new(&host, &pattern, &Config::subgraph())?
//!     .with_node_match(|h: NodeIdx, p: NodeIdx| {
//!         colors_host[h.as_usize()] == colors_pattern[p.as_usize()]
//!     });
//! ```

use isomatch_common::NodeIdx;

/// Decides whether a host node may stand in for a pattern node.
pub trait NodeMatcher {
    /// When false the matcher is skipped entirely.
    fn enabled(&self) -> bool {
        true
    }

    /// Whether `host` is compatible with `pattern`.
    fn eq(&mut self, host: NodeIdx, pattern: NodeIdx) -> bool;
}

/// Decides whether a host edge may stand in for a pattern edge.
///
/// Edges are given as `(from, to)`; for undirected graphs the orientation
/// follows the pair being extended, with the newly added node first.
pub trait EdgeMatcher {
    /// When false the matcher is skipped entirely.
    fn enabled(&self) -> bool {
        true
    }

    /// Whether the host edge is compatible with the pattern edge.
    fn eq(&mut self, host: (NodeIdx, NodeIdx), pattern: (NodeIdx, NodeIdx)) -> bool;
}

/// Matcher that accepts everything and reports itself disabled.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoSemanticMatch;

impl NodeMatcher for NoSemanticMatch {
    #[inline]
    fn enabled(&self) -> bool {
        false
    }

    #[inline]
    fn eq(&mut self, _host: NodeIdx, _pattern: NodeIdx) -> bool {
        true
    }
}

impl EdgeMatcher for NoSemanticMatch {
    #[inline]
    fn enabled(&self) -> bool {
        false
    }

    #[inline]
    fn eq(&mut self, _host: (NodeIdx, NodeIdx), _pattern: (NodeIdx, NodeIdx)) -> bool {
        true
    }
}

impl<F> NodeMatcher for F
where
    F: FnMut(NodeIdx, NodeIdx) -> bool,
{
    #[inline]
    fn eq(&mut self, host: NodeIdx, pattern: NodeIdx) -> bool {
        self(host, pattern)
    }
}

impl<F> EdgeMatcher for F
where
    F: FnMut((NodeIdx, NodeIdx), (NodeIdx, NodeIdx)) -> bool,
{
    #[inline]
    fn eq(&mut self, host: (NodeIdx, NodeIdx), pattern: (NodeIdx, NodeIdx)) -> bool {
        self(host, pattern)
    }
}
