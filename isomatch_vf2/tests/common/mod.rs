#![allow(dead_code)]

use std::sync::OnceLock;

use isomatch_common::{AdjacencyGraph, Config, GraphBuilder, GraphView, MatchMode, NodeIdx};
use itertools::Itertools;
use quickcheck::{Arbitrary, Gen};

pub fn init_test_logger() {
    static INIT: OnceLock<()> = OnceLock::new();
    let _ = INIT.get_or_init(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

lazy_static::lazy_static! {
    /// Two columns of four nodes, each of a-d joined to three of g-j.
    /// Nodes 0..4 are a-d, 4..8 are g-j.
    pub static ref CUBE_COLUMNS: AdjacencyGraph = AdjacencyGraph::from_edges(false, 8, [
        (0, 4), (0, 5), (0, 6),
        (1, 4), (1, 5), (1, 7),
        (2, 4), (2, 6), (2, 7),
        (3, 5), (3, 6), (3, 7),
    ]);

    /// The same cube drawn as an outer square 0-3 and an inner square 4-7.
    pub static ref CUBE_SQUARES: AdjacencyGraph = AdjacencyGraph::from_edges(false, 8, [
        (0, 1), (1, 2), (2, 3), (3, 0),
        (4, 5), (5, 6), (6, 7), (7, 4),
        (0, 4), (1, 5), (2, 6), (3, 7),
    ]);

    pub static ref SQUARE: AdjacencyGraph = cycle(4);

    pub static ref TWO_TRIANGLES: AdjacencyGraph = AdjacencyGraph::from_edges(false, 6, [
        (0, 1), (1, 2), (2, 0),
        (3, 4), (4, 5), (5, 3),
    ]);

    /// A 20-cycle whose second half carries doubled edges.
    pub static ref HALF_DOUBLED_RING: Vec<(usize, usize)> = (0..20)
        .flat_map(|i| {
            let edge = (i, (i + 1) % 20);
            if i >= 10 { vec![edge, edge] } else { vec![edge] }
        })
        .collect();

    /// Six nodes with a self-loop on node 2 and a few antiparallel pairs.
    pub static ref LOOPED_EDGES: Vec<(usize, usize)> = vec![
        (0, 1), (0, 2), (1, 2), (1, 3), (2, 2),
        (2, 4), (3, 1), (3, 2), (4, 2), (4, 5), (5, 4),
    ];
}

pub fn cycle(len: usize) -> AdjacencyGraph {
    AdjacencyGraph::from_edges(false, len, (0..len).map(|i| (i, (i + 1) % len)))
}

pub fn complete(n: usize) -> AdjacencyGraph {
    AdjacencyGraph::from_edges(false, n, (0..n).tuple_combinations())
}

/// Undirected simple graph from an edge list that may name a pair twice.
pub fn simple_undirected(n: usize, edges: &[(usize, usize)]) -> AdjacencyGraph {
    let distinct = edges
        .iter()
        .map(|&(a, b)| if a <= b { (a, b) } else { (b, a) })
        .unique();
    AdjacencyGraph::from_edges(false, n, distinct)
}

/// Exhaustive count of injective pattern-to-host maps satisfying the
/// configured edge rule on every ordered node pair.
pub fn brute_force_count<G1: GraphView, G2: GraphView>(host: &G1, pattern: &G2, config: &Config) -> usize {
    let (hn, pn) = (host.node_count(), pattern.node_count());
    if config.mode == MatchMode::Isomorphism && hn != pn {
        return 0;
    }
    let multiplicity = config.counts_multiplicity(host.is_multigraph() || pattern.is_multigraph());
    let normalize = |m: usize| if multiplicity { m } else { m.min(1) };

    (0..hn)
        .permutations(pn)
        .filter(|image| {
            (0..pn).cartesian_product(0..pn).all(|(a, b)| {
                let h = normalize(host.edge_multiplicity(NodeIdx::from(image[a]), NodeIdx::from(image[b])));
                let p = normalize(pattern.edge_multiplicity(NodeIdx::from(a), NodeIdx::from(b)));
                match config.mode {
                    MatchMode::Subgraph => h >= p,
                    MatchMode::Isomorphism | MatchMode::InducedSubgraph => h == p,
                }
            })
        })
        .count()
}

/// Small random graph for property tests.
#[derive(Clone, Debug)]
pub struct SmallGraph(pub AdjacencyGraph);

impl SmallGraph {
    pub fn with_direction(g: &mut Gen, directed: bool, max_nodes: usize) -> Self {
        let node_count = usize::arbitrary(g) % max_nodes + 1;
        let edge_total = usize::arbitrary(g) % (2 * node_count + 1);
        let edges: Vec<(usize, usize)> = (0..edge_total)
            .map(|_| (usize::arbitrary(g) % node_count, usize::arbitrary(g) % node_count))
            .collect();
        Self(AdjacencyGraph::from_edges(directed, node_count, edges))
    }
}

impl Arbitrary for SmallGraph {
    fn arbitrary(g: &mut Gen) -> Self {
        let directed = bool::arbitrary(g);
        Self::with_direction(g, directed, 6)
    }
}

/// Host and pattern with the same directedness, pattern no larger than host.
#[derive(Clone, Debug)]
pub struct HostAndPattern {
    pub host: AdjacencyGraph,
    pub pattern: AdjacencyGraph,
}

impl Arbitrary for HostAndPattern {
    fn arbitrary(g: &mut Gen) -> Self {
        let directed = bool::arbitrary(g);
        let SmallGraph(host) = SmallGraph::with_direction(g, directed, 6);
        let max_pattern = host.node_count().min(4);
        let SmallGraph(pattern) = SmallGraph::with_direction(g, directed, max_pattern);
        Self { host, pattern }
    }
}

/// Random sort keys; `permutation(n)` ranks the first `n` of them.
#[derive(Clone, Debug)]
pub struct Shuffle(pub Vec<u32>);

impl Shuffle {
    pub const MAX: usize = 32;

    pub fn permutation(&self, n: usize) -> Vec<usize> {
        let order: Vec<usize> = (0..n).sorted_by_key(|&i| (self.0[i], i)).collect();
        let mut permutation = vec![0; n];
        for (rank, &i) in order.iter().enumerate() {
            permutation[i] = rank;
        }
        permutation
    }
}

impl Arbitrary for Shuffle {
    fn arbitrary(g: &mut Gen) -> Self {
        Self((0..Self::MAX).map(|_| u32::arbitrary(g)).collect())
    }
}

pub fn directed(n: usize, edges: &[(usize, usize)]) -> AdjacencyGraph {
    let mut builder = GraphBuilder::directed(n);
    for &(a, b) in edges {
        builder.add_edge(a, b);
    }
    builder.build()
}
