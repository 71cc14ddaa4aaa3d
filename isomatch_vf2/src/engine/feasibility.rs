//! Feasibility rules for extending a partial mapping by one pair.
//!
//! Checks run cheapest first and stop at the first failure:
//! 1. the node matcher,
//! 2. look-back: edges between the new pair and already mapped nodes,
//! 3. self-loops on the new pair,
//! 4. look-ahead: neighbor counts per frontier class,
//! 5. the edge matcher over every edge the pair closes.
//!
//! After a pair is pushed, [`Feasibility::frontier_sizes_agree`] prunes
//! states whose frontiers can no longer be matched.

use isomatch_common::{GraphView, MatchMode, NodeIdx};

use super::state::{MatchingState, SideState};
use crate::semantic::{EdgeMatcher, NodeMatcher};

/// How a host edge count is compared against a pattern edge count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgePolicy {
    pub(crate) mode: MatchMode,
    pub(crate) multiplicity: bool,
}

impl EdgePolicy {
    pub(crate) const fn new(mode: MatchMode, multiplicity: bool) -> Self {
        Self { mode, multiplicity }
    }

    /// Whether `host` parallel edges may stand in for `pattern` parallel edges.
    #[inline]
    pub(crate) const fn agrees(self, host: usize, pattern: usize) -> bool {
        match (self.multiplicity, self.mode) {
            (true, MatchMode::Subgraph) => host >= pattern,
            (true, _) => host == pattern,
            (false, MatchMode::Subgraph) => pattern == 0 || host > 0,
            (false, _) => (host > 0) == (pattern > 0),
        }
    }
}

/// Unmapped neighbors of a node, split by frontier class.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct NeighborCounts {
    terminal_out: usize,
    terminal_in: usize,
    outside: usize,
    unmapped: usize,
}

impl NeighborCounts {
    fn tally<G: GraphView>(side: &SideState<'_, G>, neighbors: &[NodeIdx], node: NodeIdx) -> Self {
        let mut counts = Self::default();
        for &m in neighbors.iter().filter(|&&m| m != node && side.is_free(m)) {
            counts.unmapped += 1;
            counts.terminal_out += usize::from(side.in_terminal_out(m));
            counts.terminal_in += usize::from(side.in_terminal_in(m));
            counts.outside += usize::from(side.is_outside(m));
        }
        counts
    }
}

/// The full feasibility predicate for one search.
#[derive(Debug)]
pub struct Feasibility<NM, EM> {
    policy: EdgePolicy,
    directed: bool,
    pub(crate) node_match: NM,
    pub(crate) edge_match: EM,
}

impl<NM, EM> Feasibility<NM, EM> {
    pub(crate) const fn new(policy: EdgePolicy, directed: bool, node_match: NM, edge_match: EM) -> Self {
        Self {
            policy,
            directed,
            node_match,
            edge_match,
        }
    }

    /// Swap the node matcher, keeping every other rule.
    pub(crate) fn with_node_match<N>(self, node_match: N) -> Feasibility<N, EM> {
        Feasibility::new(self.policy, self.directed, node_match, self.edge_match)
    }

    /// Swap the edge matcher, keeping every other rule.
    pub(crate) fn with_edge_match<E>(self, edge_match: E) -> Feasibility<NM, E> {
        Feasibility::new(self.policy, self.directed, self.node_match, edge_match)
    }

    const fn mode(&self) -> MatchMode {
        self.policy.mode
    }
}

impl<NM: NodeMatcher, EM: EdgeMatcher> Feasibility<NM, EM> {
    /// Whether the state stays extendable after adding `(n1, n2)`.
    pub(crate) fn check<G1: GraphView, G2: GraphView>(
        &mut self,
        state: &MatchingState<'_, G1, G2>,
        n1: NodeIdx,
        n2: NodeIdx,
    ) -> bool {
        if self.node_match.enabled() && !self.node_match.eq(n1, n2) {
            return false;
        }
        self.look_back(state, n1, n2)
            && self.self_loops_agree(state, n1, n2)
            && self.look_ahead(state, n1, n2)
            && self.edges_match(state, n1, n2)
    }

    /// Multiplicities between the new pair and mapped nodes. Pattern edges
    /// must be present in the host; in the exact modes host edges toward
    /// mapped nodes must also exist in the pattern.
    fn look_back<G1: GraphView, G2: GraphView>(
        &self,
        state: &MatchingState<'_, G1, G2>,
        n1: NodeIdx,
        n2: NodeIdx,
    ) -> bool {
        let (g1, g2) = (state.host.graph, state.pattern.graph);
        let policy = self.policy;

        let pattern_out = g2
            .successors(n2)
            .iter()
            .filter(|&&m2| m2 != n2)
            .filter_map(|&m2| state.pattern.partner(m2).map(|m1| (m1, m2)))
            .all(|(m1, m2)| policy.agrees(g1.edge_multiplicity(n1, m1), g2.edge_multiplicity(n2, m2)));
        if !pattern_out {
            return false;
        }
        if self.directed {
            let pattern_in = g2
                .predecessors(n2)
                .iter()
                .filter(|&&m2| m2 != n2)
                .filter_map(|&m2| state.pattern.partner(m2).map(|m1| (m1, m2)))
                .all(|(m1, m2)| policy.agrees(g1.edge_multiplicity(m1, n1), g2.edge_multiplicity(m2, n2)));
            if !pattern_in {
                return false;
            }
        }

        if !self.mode().is_exact() {
            return true;
        }

        let host_out = g1
            .successors(n1)
            .iter()
            .filter(|&&m1| m1 != n1)
            .filter_map(|&m1| state.host.partner(m1).map(|m2| (m1, m2)))
            .all(|(m1, m2)| policy.agrees(g1.edge_multiplicity(n1, m1), g2.edge_multiplicity(n2, m2)));
        if !host_out {
            return false;
        }
        !self.directed
            || g1
                .predecessors(n1)
                .iter()
                .filter(|&&m1| m1 != n1)
                .filter_map(|&m1| state.host.partner(m1).map(|m2| (m1, m2)))
                .all(|(m1, m2)| policy.agrees(g1.edge_multiplicity(m1, n1), g2.edge_multiplicity(m2, n2)))
    }

    fn self_loops_agree<G1: GraphView, G2: GraphView>(
        &self,
        state: &MatchingState<'_, G1, G2>,
        n1: NodeIdx,
        n2: NodeIdx,
    ) -> bool {
        self.policy
            .agrees(state.host.graph.self_loops(n1), state.pattern.graph.self_loops(n2))
    }

    /// Counts of unmapped neighbors in each frontier class, per direction.
    fn look_ahead<G1: GraphView, G2: GraphView>(
        &self,
        state: &MatchingState<'_, G1, G2>,
        n1: NodeIdx,
        n2: NodeIdx,
    ) -> bool {
        let (g1, g2) = (state.host.graph, state.pattern.graph);
        let succ_ok = self.counts_agree(
            NeighborCounts::tally(&state.host, g1.successors(n1), n1),
            NeighborCounts::tally(&state.pattern, g2.successors(n2), n2),
        );
        succ_ok
            && (!self.directed
                || self.counts_agree(
                    NeighborCounts::tally(&state.host, g1.predecessors(n1), n1),
                    NeighborCounts::tally(&state.pattern, g2.predecessors(n2), n2),
                ))
    }

    const fn counts_agree(&self, host: NeighborCounts, pattern: NeighborCounts) -> bool {
        let mode = self.mode();
        let frontier = mode.admits(host.terminal_out, pattern.terminal_out)
            && mode.admits(host.terminal_in, pattern.terminal_in);
        if mode.is_exact() {
            frontier && mode.admits(host.outside, pattern.outside)
        } else {
            frontier && mode.admits(host.unmapped, pattern.unmapped)
        }
    }

    /// Run the edge matcher over every pattern edge the new pair closes.
    fn edges_match<G1: GraphView, G2: GraphView>(
        &mut self,
        state: &MatchingState<'_, G1, G2>,
        n1: NodeIdx,
        n2: NodeIdx,
    ) -> bool {
        if !self.edge_match.enabled() {
            return true;
        }
        let g2 = state.pattern.graph;

        if g2.self_loops(n2) > 0 && !self.edge_match.eq((n1, n1), (n2, n2)) {
            return false;
        }
        for &m2 in g2.successors(n2).iter().filter(|&&m2| m2 != n2) {
            if let Some(m1) = state.pattern.partner(m2) {
                if !self.edge_match.eq((n1, m1), (n2, m2)) {
                    return false;
                }
            }
        }
        if self.directed {
            for &m2 in g2.predecessors(n2).iter().filter(|&&m2| m2 != n2) {
                if let Some(m1) = state.pattern.partner(m2) {
                    if !self.edge_match.eq((m1, n1), (m2, n2)) {
                        return false;
                    }
                }
            }
        }
        true
    }
}

impl<NM, EM> Feasibility<NM, EM> {
    /// Frontier sizes after a push: host frontiers must be able to absorb
    /// the pattern frontiers.
    pub(crate) const fn frontier_sizes_agree<G1: GraphView, G2: GraphView>(
        &self,
        state: &MatchingState<'_, G1, G2>,
    ) -> bool {
        let mode = self.mode();
        mode.admits(state.host.terminal_out_len(), state.pattern.terminal_out_len())
            && mode.admits(state.host.terminal_in_len(), state.pattern.terminal_in_len())
    }
}
