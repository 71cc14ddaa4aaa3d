//! Graph capability contract and the reference adjacency container.

mod adjacency;
mod node_idx;

pub use adjacency::{AdjacencyGraph, GraphBuilder};
pub use node_idx::NodeIdx;

/// Read-only view of a graph, as consumed by the matching engine.
///
/// Nodes are numbered `0..node_count()`. Adjacency slices must be sorted and
/// free of duplicates; parallel edges are reported through
/// [`GraphView::edge_multiplicity`] rather than by repeating a neighbor. A
/// node carrying a self-loop lists itself among its successors (and its
/// predecessors when directed).
pub trait GraphView {
    /// Number of nodes in the graph.
    fn node_count(&self) -> usize;

    /// Whether edges are ordered pairs.
    fn is_directed(&self) -> bool;

    /// Whether the graph may carry parallel edges.
    fn is_multigraph(&self) -> bool {
        false
    }

    /// Distinct out-neighbors of `node`. For undirected graphs, all neighbors.
    fn successors(&self, node: NodeIdx) -> &[NodeIdx];

    /// Distinct in-neighbors of `node`. For undirected graphs, all neighbors.
    fn predecessors(&self, node: NodeIdx) -> &[NodeIdx] {
        self.successors(node)
    }

    /// Number of parallel edges from `from` to `to`. Symmetric when undirected.
    fn edge_multiplicity(&self, from: NodeIdx, to: NodeIdx) -> usize;

    /// Whether at least one edge runs from `from` to `to`.
    fn has_edge(&self, from: NodeIdx, to: NodeIdx) -> bool {
        self.edge_multiplicity(from, to) > 0
    }

    /// Number of self-loops on `node`.
    fn self_loops(&self, node: NodeIdx) -> usize {
        self.edge_multiplicity(node, node)
    }

    /// Count of distinct neighbors, successors and predecessors both counted
    /// for directed graphs.
    fn degree(&self, node: NodeIdx) -> usize {
        if self.is_directed() {
            self.successors(node).len() + self.predecessors(node).len()
        } else {
            self.successors(node).len()
        }
    }

    /// All node identifiers in ascending order.
    fn nodes(&self) -> impl Iterator<Item = NodeIdx> {
        (0..self.node_count()).map(NodeIdx::from)
    }
}

impl<G: GraphView + ?Sized> GraphView for &G {
    fn node_count(&self) -> usize {
        (**self).node_count()
    }

    fn is_directed(&self) -> bool {
        (**self).is_directed()
    }

    fn is_multigraph(&self) -> bool {
        (**self).is_multigraph()
    }

    fn successors(&self, node: NodeIdx) -> &[NodeIdx] {
        (**self).successors(node)
    }

    fn predecessors(&self, node: NodeIdx) -> &[NodeIdx] {
        (**self).predecessors(node)
    }

    fn edge_multiplicity(&self, from: NodeIdx, to: NodeIdx) -> usize {
        (**self).edge_multiplicity(from, to)
    }

    fn has_edge(&self, from: NodeIdx, to: NodeIdx) -> bool {
        (**self).has_edge(from, to)
    }

    fn self_loops(&self, node: NodeIdx) -> usize {
        (**self).self_loops(node)
    }

    fn degree(&self, node: NodeIdx) -> usize {
        (**self).degree(node)
    }
}
