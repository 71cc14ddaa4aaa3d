//! Reference adjacency container implementing [`GraphView`].

use std::collections::HashMap;

use contracts::*;
use itertools::Itertools;

use super::{GraphView, NodeIdx};

/// An immutable graph stored as sorted adjacency lists plus a multiplicity
/// table keyed by node pair (ordered when directed, normalized when not).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdjacencyGraph {
    directed: bool,
    succ: Vec<Vec<NodeIdx>>,
    /// Only populated for directed graphs.
    pred: Vec<Vec<NodeIdx>>,
    multiplicity: HashMap<(NodeIdx, NodeIdx), usize>,
    edge_count: usize,
}

impl AdjacencyGraph {
    /// Builds a graph from an edge list. Repeated edges become parallel edges.
    ///
    /// # Panics
    ///
    /// Panics if an endpoint is not below `node_count`.
    pub fn from_edges<I>(directed: bool, node_count: usize, edges: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut builder = GraphBuilder::new(directed, node_count);
        for (a, b) in edges {
            builder.add_edge(a, b);
        }
        builder.build()
    }

    /// Total number of edges, parallel edges counted individually.
    pub const fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Iterates `(from, to, multiplicity)` once per distinct node pair.
    pub fn edges(&self) -> impl Iterator<Item = (NodeIdx, NodeIdx, usize)> + '_ {
        self.multiplicity
            .iter()
            .map(|(&(a, b), &m)| (a, b, m))
            .sorted()
    }

    /// Returns a copy with node `i` renamed to `permutation[i]`.
    ///
    /// # Panics
    ///
    /// Panics if `permutation` does not cover exactly the node set.
    #[debug_requires(is_permutation(permutation), "relabeling must be a bijection")]
    pub fn relabel(&self, permutation: &[usize]) -> Self {
        assert_eq!(permutation.len(), self.succ.len(), "relabeling size mismatch");
        let mut builder = GraphBuilder::new(self.directed, self.succ.len());
        for (a, b, m) in self.edges() {
            for _ in 0..m {
                builder.add_edge(permutation[a.as_usize()], permutation[b.as_usize()]);
            }
        }
        builder.build()
    }

    fn key(&self, a: NodeIdx, b: NodeIdx) -> (NodeIdx, NodeIdx) {
        if self.directed || a <= b { (a, b) } else { (b, a) }
    }
}

fn sorted_distinct(lists: Vec<Vec<NodeIdx>>) -> Vec<Vec<NodeIdx>> {
    lists
        .into_iter()
        .map(|list| list.into_iter().sorted_unstable().dedup().collect())
        .collect()
}

fn is_permutation(permutation: &[usize]) -> bool {
    let mut seen = vec![false; permutation.len()];
    permutation
        .iter()
        .all(|&p| p < seen.len() && !std::mem::replace(&mut seen[p], true))
}

impl GraphView for AdjacencyGraph {
    fn node_count(&self) -> usize {
        self.succ.len()
    }

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn is_multigraph(&self) -> bool {
        self.multiplicity.values().any(|&m| m > 1)
    }

    fn successors(&self, node: NodeIdx) -> &[NodeIdx] {
        &self.succ[node.as_usize()]
    }

    fn predecessors(&self, node: NodeIdx) -> &[NodeIdx] {
        if self.directed {
            &self.pred[node.as_usize()]
        } else {
            &self.succ[node.as_usize()]
        }
    }

    fn edge_multiplicity(&self, from: NodeIdx, to: NodeIdx) -> usize {
        self.multiplicity
            .get(&self.key(from, to))
            .copied()
            .unwrap_or(0)
    }
}

/// Incremental builder for [`AdjacencyGraph`].
#[derive(Clone, Debug)]
pub struct GraphBuilder {
    directed: bool,
    node_count: usize,
    edges: Vec<(NodeIdx, NodeIdx)>,
}

impl GraphBuilder {
    /// Starts a graph with `node_count` isolated nodes.
    pub const fn new(directed: bool, node_count: usize) -> Self {
        Self {
            directed,
            node_count,
            edges: Vec::new(),
        }
    }

    /// Starts an undirected graph.
    pub const fn undirected(node_count: usize) -> Self {
        Self::new(false, node_count)
    }

    /// Starts a directed graph.
    pub const fn directed(node_count: usize) -> Self {
        Self::new(true, node_count)
    }

    /// Adds one edge; calling twice with the same pair adds a parallel edge.
    ///
    /// # Panics
    ///
    /// Panics if an endpoint is not below the node count.
    pub fn add_edge(&mut self, from: usize, to: usize) -> &mut Self {
        assert!(
            from < self.node_count && to < self.node_count,
            "edge ({from}, {to}) out of range for {} nodes",
            self.node_count
        );
        self.edges.push((NodeIdx::from(from), NodeIdx::from(to)));
        self
    }

    /// Chaining form of [`GraphBuilder::add_edge`].
    #[must_use]
    pub fn edge(mut self, from: usize, to: usize) -> Self {
        self.add_edge(from, to);
        self
    }

    /// Freezes the builder into an [`AdjacencyGraph`].
    pub fn build(self) -> AdjacencyGraph {
        let mut succ: Vec<Vec<NodeIdx>> = vec![Vec::new(); self.node_count];
        let mut pred: Vec<Vec<NodeIdx>> = if self.directed {
            vec![Vec::new(); self.node_count]
        } else {
            Vec::new()
        };
        let mut multiplicity: HashMap<(NodeIdx, NodeIdx), usize> = HashMap::new();

        for &(a, b) in &self.edges {
            let key = if self.directed || a <= b { (a, b) } else { (b, a) };
            *multiplicity.entry(key).or_insert(0) += 1;

            succ[a.as_usize()].push(b);
            if self.directed {
                pred[b.as_usize()].push(a);
            } else if a != b {
                succ[b.as_usize()].push(a);
            }
        }

        tracing::trace!(
            "built {} graph: {} nodes, {} edges, {} distinct pairs",
            if self.directed { "directed" } else { "undirected" },
            self.node_count,
            self.edges.len(),
            multiplicity.len()
        );

        AdjacencyGraph {
            directed: self.directed,
            succ: sorted_distinct(succ),
            pred: sorted_distinct(pred),
            multiplicity,
            edge_count: self.edges.len(),
        }
    }
}
