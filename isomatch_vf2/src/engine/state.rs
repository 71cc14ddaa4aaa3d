//! Matching state: the partial mapping plus depth-tagged frontier sets.
//!
//! Each graph gets a [`SideState`]. Frontier membership is stored as the
//! depth at which a node entered the set (`0` meaning absent), so undoing a
//! push only has to clear the entries tagged with the depth being vacated.

use contracts::*;
use indexmap::IndexMap;
use isomatch_common::{GraphView, NodeIdx};

use crate::mapping::Mapping;

/// Per-graph half of the matching state.
#[derive(Debug)]
pub struct SideState<'g, G> {
    /// The graph this half was built from.
    pub(crate) graph: &'g G,
    /// Partner in the other graph for every mapped node.
    core: Vec<Option<NodeIdx>>,
    /// Depth at which a node became an out-terminal (successor of a mapped node).
    out: Vec<usize>,
    /// Depth at which a node became an in-terminal. Empty when undirected.
    ins: Vec<usize>,
    /// Number of unmapped nodes tagged in `out`.
    out_len: usize,
    /// Number of unmapped nodes tagged in `ins`.
    ins_len: usize,
}

impl<'g, G: GraphView> SideState<'g, G> {
    fn new(graph: &'g G, directed: bool) -> Self {
        let n = graph.node_count();
        Self {
            graph,
            core: vec![None; n],
            out: vec![0; n],
            ins: vec![0; n * usize::from(directed)],
            out_len: 0,
            ins_len: 0,
        }
    }

    /// Number of nodes on this side.
    pub(crate) const fn len(&self) -> usize {
        self.core.len()
    }

    /// The node this one is mapped to, if any.
    #[inline]
    pub(crate) fn partner(&self, node: NodeIdx) -> Option<NodeIdx> {
        self.core[node.as_usize()]
    }

    #[inline]
    pub(crate) fn is_free(&self, node: NodeIdx) -> bool {
        self.core[node.as_usize()].is_none()
    }

    /// Unmapped successor of some mapped node.
    #[inline]
    pub(crate) fn in_terminal_out(&self, node: NodeIdx) -> bool {
        let i = node.as_usize();
        self.out[i] > 0 && self.core[i].is_none()
    }

    /// Unmapped predecessor of some mapped node. Always false when undirected.
    #[inline]
    pub(crate) fn in_terminal_in(&self, node: NodeIdx) -> bool {
        let i = node.as_usize();
        !self.ins.is_empty() && self.ins[i] > 0 && self.core[i].is_none()
    }

    /// Unmapped and not adjacent to the mapped region.
    #[inline]
    pub(crate) fn is_outside(&self, node: NodeIdx) -> bool {
        let i = node.as_usize();
        self.core[i].is_none() && self.out[i] == 0 && (self.ins.is_empty() || self.ins[i] == 0)
    }

    pub(crate) const fn terminal_out_len(&self) -> usize {
        self.out_len
    }

    pub(crate) const fn terminal_in_len(&self) -> usize {
        self.ins_len
    }

    /// Smallest out-terminal node at or after `from`.
    pub(crate) fn next_terminal_out(&self, from: usize) -> Option<NodeIdx> {
        (from..self.len())
            .map(NodeIdx::from)
            .find(|&v| self.in_terminal_out(v))
    }

    /// Smallest in-terminal node at or after `from`.
    pub(crate) fn next_terminal_in(&self, from: usize) -> Option<NodeIdx> {
        (from..self.len())
            .map(NodeIdx::from)
            .find(|&v| self.in_terminal_in(v))
    }

    /// Smallest unmapped node at or after `from`.
    pub(crate) fn next_free(&self, from: usize) -> Option<NodeIdx> {
        (from..self.len())
            .map(NodeIdx::from)
            .find(|&v| self.is_free(v))
    }

    fn push(&mut self, node: NodeIdx, partner: NodeIdx, depth: usize) {
        let i = node.as_usize();
        self.core[i] = Some(partner);
        // the node leaves whichever frontier it was on
        if self.out[i] > 0 {
            self.out_len -= 1;
        }
        if !self.ins.is_empty() && self.ins[i] > 0 {
            self.ins_len -= 1;
        }

        let graph = self.graph;
        for &succ in graph.successors(node) {
            let s = succ.as_usize();
            if self.core[s].is_none() && self.out[s] == 0 {
                self.out[s] = depth;
                self.out_len += 1;
            }
        }
        if !self.ins.is_empty() {
            for &pred in graph.predecessors(node) {
                let p = pred.as_usize();
                if self.core[p].is_none() && self.ins[p] == 0 {
                    self.ins[p] = depth;
                    self.ins_len += 1;
                }
            }
        }
    }

    fn pop(&mut self, node: NodeIdx, depth: usize) {
        let graph = self.graph;
        for &succ in graph.successors(node) {
            let s = succ.as_usize();
            if self.out[s] == depth {
                self.out[s] = 0;
                self.out_len -= 1;
            }
        }
        if !self.ins.is_empty() {
            for &pred in graph.predecessors(node) {
                let p = pred.as_usize();
                if self.ins[p] == depth {
                    self.ins[p] = 0;
                    self.ins_len -= 1;
                }
            }
        }

        let i = node.as_usize();
        self.core[i] = None;
        if self.out[i] > 0 {
            self.out_len += 1;
        }
        if !self.ins.is_empty() && self.ins[i] > 0 {
            self.ins_len += 1;
        }
    }

    /// Frontier tags never exceed the depth, and the cached sizes match.
    fn frontier_is_consistent(&self, depth: usize) -> bool {
        let tags_bounded = self.out.iter().chain(self.ins.iter()).all(|&t| t <= depth);
        let out_len = (0..self.len())
            .filter(|&i| self.in_terminal_out(NodeIdx::from(i)))
            .count();
        let ins_len = (0..self.len())
            .filter(|&i| self.in_terminal_in(NodeIdx::from(i)))
            .count();
        tags_bounded && out_len == self.out_len && ins_len == self.ins_len
    }
}

/// Partial correspondence between host (graph 1) and pattern (graph 2).
#[derive(Debug)]
pub struct MatchingState<'g, G1, G2> {
    pub(crate) host: SideState<'g, G1>,
    pub(crate) pattern: SideState<'g, G2>,
    /// Pairs in push order; its length is the search depth.
    trail: Vec<(NodeIdx, NodeIdx)>,
}

impl<'g, G1: GraphView, G2: GraphView> MatchingState<'g, G1, G2> {
    pub(crate) fn new(host: &'g G1, pattern: &'g G2, directed: bool) -> Self {
        Self {
            host: SideState::new(host, directed),
            pattern: SideState::new(pattern, directed),
            trail: Vec::with_capacity(pattern.node_count()),
        }
    }

    /// Number of mapped pairs.
    pub(crate) const fn depth(&self) -> usize {
        self.trail.len()
    }

    /// Map `host_node` to `pattern_node`. The pair must already be feasible.
    #[debug_requires(
        self.host.is_free(host_node) && self.pattern.is_free(pattern_node),
        "push of an already mapped node"
    )]
    #[debug_ensures(self.depth() == old(self.depth()) + 1)]
    #[debug_ensures(self.is_consistent())]
    pub(crate) fn push(&mut self, host_node: NodeIdx, pattern_node: NodeIdx) {
        self.trail.push((host_node, pattern_node));
        let depth = self.trail.len();
        self.host.push(host_node, pattern_node, depth);
        self.pattern.push(pattern_node, host_node, depth);
    }

    /// Undo the most recent push, returning the pair it added.
    ///
    /// # Panics
    ///
    /// Panics if nothing is mapped.
    #[debug_requires(self.depth() > 0, "pop on an empty state")]
    #[debug_ensures(self.depth() + 1 == old(self.depth()))]
    #[debug_ensures(self.is_consistent())]
    pub(crate) fn pop(&mut self) -> (NodeIdx, NodeIdx) {
        let depth = self.trail.len();
        let (host_node, pattern_node) = self.trail.pop().expect("pop on an empty state");
        self.host.pop(host_node, depth);
        self.pattern.pop(pattern_node, depth);
        (host_node, pattern_node)
    }

    /// Every pattern node is mapped.
    pub(crate) const fn is_complete(&self) -> bool {
        self.trail.len() == self.pattern.len()
    }

    /// Both mapping directions are exact inverses and the frontier
    /// bookkeeping agrees with the depth.
    pub(crate) fn is_consistent(&self) -> bool {
        let depth = self.depth();
        let inverse = self.trail.iter().all(|&(h, p)| {
            self.host.partner(h) == Some(p) && self.pattern.partner(p) == Some(h)
        });
        let mapped_host = (0..self.host.len())
            .filter(|&i| !self.host.is_free(NodeIdx::from(i)))
            .count();
        let mapped_pattern = (0..self.pattern.len())
            .filter(|&i| !self.pattern.is_free(NodeIdx::from(i)))
            .count();
        inverse
            && mapped_host == depth
            && mapped_pattern == depth
            && self.host.frontier_is_consistent(depth)
            && self.pattern.frontier_is_consistent(depth)
    }

    /// Independent copy of the current host-to-pattern correspondence.
    pub(crate) fn mapping(&self) -> Mapping {
        let pairs: IndexMap<NodeIdx, NodeIdx> = (0..self.host.len())
            .map(NodeIdx::from)
            .filter_map(|h| self.host.partner(h).map(|p| (h, p)))
            .collect();
        Mapping::new(pairs)
    }
}
