//! Complete correspondences produced by the matcher.

use indexmap::IndexMap;
use isomatch_common::{Config, GraphView, NodeIdx};
use itertools::Itertools;

use crate::engine::EdgePolicy;

/// Host-to-pattern node correspondence covering every pattern node.
///
/// Pairs are kept in ascending host order. Each mapping is an independent
/// copy; later search steps never alter it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Mapping {
    host_to_pattern: IndexMap<NodeIdx, NodeIdx>,
}

impl Mapping {
    pub(crate) const fn new(host_to_pattern: IndexMap<NodeIdx, NodeIdx>) -> Self {
        Self { host_to_pattern }
    }

    /// Number of mapped pairs, equal to the pattern's node count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.host_to_pattern.len()
    }

    /// True only for the mapping of an empty pattern.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.host_to_pattern.is_empty()
    }

    /// Pattern node mapped to `host`, if `host` is part of the image.
    pub fn pattern_of(&self, host: NodeIdx) -> Option<NodeIdx> {
        self.host_to_pattern.get(&host).copied()
    }

    /// Host node standing in for `pattern`.
    pub fn host_of(&self, pattern: NodeIdx) -> Option<NodeIdx> {
        self.host_to_pattern
            .iter()
            .find_map(|(&h, &p)| (p == pattern).then_some(h))
    }

    /// `(host, pattern)` pairs in ascending host order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeIdx, NodeIdx)> + Clone + '_ {
        self.host_to_pattern.iter().map(|(&h, &p)| (h, p))
    }

    /// Host nodes in the image, ascending.
    pub fn host_nodes(&self) -> impl Iterator<Item = NodeIdx> + '_ {
        self.host_to_pattern.keys().copied()
    }

    /// The mapping viewed from the pattern side, indexed by pattern node.
    pub fn pattern_to_host(&self) -> Vec<NodeIdx> {
        self.host_to_pattern
            .iter()
            .map(|(&h, &p)| (p, h))
            .sorted_unstable()
            .map(|(_, h)| h)
            .collect()
    }

    /// Replay the mapping against both graphs: it must be injective, cover
    /// the pattern (and the host, for isomorphism), and every node pair must
    /// satisfy the configured edge rule, self-loops included.
    ///
    /// Quadratic in the mapping size.
    pub fn verify<G1: GraphView, G2: GraphView>(&self, host: &G1, pattern: &G2, config: &Config) -> bool {
        if self.len() != pattern.node_count() || !config.mode.admits(host.node_count(), self.len()) {
            return false;
        }
        let in_range = self
            .iter()
            .all(|(h, p)| h.as_usize() < host.node_count() && p.as_usize() < pattern.node_count());
        if !in_range || !self.host_to_pattern.values().all_unique() {
            return false;
        }

        let policy = EdgePolicy::new(
            config.mode,
            config.counts_multiplicity(host.is_multigraph() || pattern.is_multigraph()),
        );
        self.iter().cartesian_product(self.iter()).all(|((h1, p1), (h2, p2))| {
            policy.agrees(host.edge_multiplicity(h1, h2), pattern.edge_multiplicity(p1, p2))
        })
    }
}

impl<'a> IntoIterator for &'a Mapping {
    type Item = (&'a NodeIdx, &'a NodeIdx);
    type IntoIter = indexmap::map::Iter<'a, NodeIdx, NodeIdx>;

    fn into_iter(self) -> Self::IntoIter {
        self.host_to_pattern.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use isomatch_common::AdjacencyGraph;

    fn n(i: u32) -> NodeIdx {
        NodeIdx::new(i)
    }

    fn mapping(pairs: &[(u32, u32)]) -> Mapping {
        Mapping::new(pairs.iter().map(|&(h, p)| (n(h), n(p))).collect())
    }

    #[test]
    fn test_lookups() {
        let m = mapping(&[(1, 2), (3, 0), (4, 1)]);
        assert_eq!(m.len(), 3);
        assert_eq!(m.pattern_of(n(3)), Some(n(0)));
        assert_eq!(m.pattern_of(n(0)), None);
        assert_eq!(m.host_of(n(1)), Some(n(4)));
        assert_eq!(m.host_nodes().collect::<Vec<_>>(), vec![n(1), n(3), n(4)]);
        assert_eq!(m.pattern_to_host(), vec![n(3), n(4), n(1)]);
    }

    #[test]
    fn test_verify_accepts_valid_and_rejects_broken() {
        let host = AdjacencyGraph::from_edges(false, 3, [(0, 1), (1, 2)]);
        let pattern = AdjacencyGraph::from_edges(false, 2, [(0, 1)]);
        let cfg = Config::subgraph();

        assert!(mapping(&[(1, 0), (2, 1)]).verify(&host, &pattern, &cfg));
        assert!(!mapping(&[(0, 0), (2, 1)]).verify(&host, &pattern, &cfg));
        assert!(!mapping(&[(1, 0)]).verify(&host, &pattern, &cfg));
        assert!(!mapping(&[(1, 0), (2, 0)]).verify(&host, &pattern, &cfg));
    }

    #[test]
    fn test_verify_checks_every_node_pair() {
        // path 0-1-2 in a triangle: fine as a subgraph, not induced
        let host = AdjacencyGraph::from_edges(false, 3, [(0, 1), (1, 2), (2, 0)]);
        let pattern = AdjacencyGraph::from_edges(false, 3, [(0, 1), (1, 2)]);
        let m = mapping(&[(0, 0), (1, 1), (2, 2)]);
        assert!(m.verify(&host, &pattern, &Config::subgraph()));
        assert!(!m.verify(&host, &pattern, &Config::induced_subgraph()));

        let reordered = mapping(&[(0, 1), (1, 0), (2, 2)]);
        assert!(reordered.verify(&host, &pattern, &Config::subgraph()));
        let pairs: Vec<_> = reordered.iter().collect();
        assert_eq!(pairs, vec![(n(0), n(1)), (n(1), n(0)), (n(2), n(2))]);
    }

    #[test]
    fn test_verify_isomorphism_needs_full_cover() {
        let g = AdjacencyGraph::from_edges(false, 2, [(0, 1)]);
        let pattern = AdjacencyGraph::from_edges(false, 1, std::iter::empty());
        assert!(!mapping(&[(0, 0)]).verify(&g, &pattern, &Config::isomorphism()));
        assert!(mapping(&[(0, 1), (1, 0)]).verify(&g, &g, &Config::isomorphism()));
    }
}
