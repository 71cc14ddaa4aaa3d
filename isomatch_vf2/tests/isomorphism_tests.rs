#![allow(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

mod common;

use common::{CUBE_COLUMNS, CUBE_SQUARES, Shuffle, TWO_TRIANGLES, cycle, init_test_logger};
use isomatch_common::{AdjacencyGraph, Config, GraphView, NodeIdx};
use isomatch_vf2::{
    Mapping, MatchError, SearchStats, SearchStatus, Vf2Matcher, count_mappings, enumerate_mappings,
    find_mapping, is_isomorphic,
};
use quickcheck::{Arbitrary, Gen};
use rstest::rstest;

fn idx(values: &[usize]) -> Vec<NodeIdx> {
    values.iter().map(|&v| NodeIdx::from(v)).collect()
}

#[test]
fn test_cube_drawings_are_isomorphic() {
    init_test_logger();
    let host = &*CUBE_COLUMNS;
    let pattern = &*CUBE_SQUARES;
    assert!(is_isomorphic(host, pattern).unwrap());

    let mapping = find_mapping(host, pattern, &Config::isomorphism()).unwrap().unwrap();
    assert_eq!(mapping.len(), 8);
    assert!(mapping.verify(host, pattern, &Config::isomorphism()));
}

#[test]
fn test_cube_has_48_symmetries() {
    init_test_logger();
    let count = count_mappings(&*CUBE_COLUMNS, &*CUBE_SQUARES, &Config::isomorphism()).unwrap();
    assert_eq!(count, 48);
}

#[test]
fn test_cube_known_correspondence_is_enumerated() {
    init_test_logger();
    // a->1, b->6, c->3, d->8, g->2, h->5, i->4, j->7 in one-based square labels
    let expected = idx(&[0, 4, 2, 6, 5, 1, 7, 3]);
    let found = enumerate_mappings(&*CUBE_COLUMNS, &*CUBE_SQUARES, &Config::isomorphism())
        .unwrap()
        .any(|m| m.pattern_to_host() == expected);
    assert!(found);
}

#[test]
fn test_cube_relabelings() {
    init_test_logger();
    let mut g = Gen::new(32);
    for _ in 0..100 {
        let permutation = Shuffle::arbitrary(&mut g).permutation(8);
        let relabeled = CUBE_SQUARES.relabel(&permutation);
        assert!(is_isomorphic(&*CUBE_COLUMNS, &relabeled).unwrap(), "{permutation:?}");
    }
}

#[rstest]
#[case::path_vs_star(
    AdjacencyGraph::from_edges(false, 4, [(0, 1), (1, 2), (2, 3)]),
    AdjacencyGraph::from_edges(false, 4, [(0, 1), (0, 2), (0, 3)])
)]
#[case::triangle_tail_vs_fan(
    AdjacencyGraph::from_edges(false, 5, [(0, 1), (1, 2), (2, 0), (2, 3), (3, 4)]),
    AdjacencyGraph::from_edges(false, 5, [(0, 1), (0, 2), (0, 3), (0, 4), (1, 2)])
)]
#[case::directed_orientation(
    AdjacencyGraph::from_edges(true, 3, [(0, 1), (0, 2)]),
    AdjacencyGraph::from_edges(true, 3, [(1, 0), (2, 0)])
)]
fn test_degree_mismatch_skips_search(#[case] g1: AdjacencyGraph, #[case] g2: AdjacencyGraph) {
    init_test_logger();
    let mut matcher = Vf2Matcher::new(&g1, &g2, &Config::isomorphism())
        .unwrap()
        .with_observer(SearchStats::default());
    assert!(matcher.next().is_none());
    assert_eq!(matcher.status(), SearchStatus::Exhausted);
    assert_eq!(matcher.observer().feasibility_checks, 0);
    assert_eq!(matcher.observer().candidates, 0);
}

#[test]
fn test_same_degrees_still_searched() {
    init_test_logger();
    // hexagon and two triangles share every degree but differ in structure
    let hexagon = cycle(6);
    let mut matcher = Vf2Matcher::new(&hexagon, &*TWO_TRIANGLES, &Config::isomorphism())
        .unwrap()
        .with_observer(SearchStats::default());
    assert!(matcher.next().is_none());
    assert!(matcher.observer().feasibility_checks > 0);
}

#[test]
fn test_disjoint_triangles() {
    init_test_logger();
    let relabeled = TWO_TRIANGLES.relabel(&[4, 0, 2, 5, 1, 3]);
    assert!(is_isomorphic(&*TWO_TRIANGLES, &relabeled).unwrap());
    // two components, each with 3! rotations/reflections, and the swap
    assert_eq!(
        count_mappings(&*TWO_TRIANGLES, &relabeled, &Config::isomorphism()).unwrap(),
        72
    );
    assert!(!is_isomorphic(&cycle(6), &*TWO_TRIANGLES).unwrap());
}

#[test]
fn test_enumeration_is_repeatable() {
    init_test_logger();
    let first: Vec<Mapping> = enumerate_mappings(&*CUBE_COLUMNS, &*CUBE_SQUARES, &Config::isomorphism())
        .unwrap()
        .collect();
    let second: Vec<Mapping> = enumerate_mappings(&*CUBE_COLUMNS, &*CUBE_SQUARES, &Config::isomorphism())
        .unwrap()
        .collect();
    assert_eq!(first.len(), 48);
    let order = |ms: &[Mapping]| ms.iter().map(Mapping::pattern_to_host).collect::<Vec<_>>();
    assert_eq!(order(&first), order(&second));
}

#[test]
fn test_mappings_are_distinct() {
    init_test_logger();
    let all: Vec<Vec<NodeIdx>> = enumerate_mappings(&*CUBE_COLUMNS, &*CUBE_SQUARES, &Config::isomorphism())
        .unwrap()
        .map(|m| m.pattern_to_host())
        .collect();
    let mut deduped = all.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), all.len());
}

#[test]
fn test_directedness_mismatch_is_error() {
    let undirected = cycle(3);
    let directed = AdjacencyGraph::from_edges(true, 3, [(0, 1), (1, 2), (2, 0)]);
    assert_eq!(
        is_isomorphic(&undirected, &directed),
        Err(MatchError::DirectednessMismatch {
            host: false,
            pattern: true
        })
    );
}

#[test]
fn test_empty_graphs_are_isomorphic() {
    let empty = AdjacencyGraph::from_edges(false, 0, std::iter::empty());
    assert!(is_isomorphic(&empty, &empty).unwrap());
    assert_eq!(count_mappings(&empty, &empty, &Config::isomorphism()).unwrap(), 1);
}

#[test]
fn test_directed_cycle_vs_reversed() {
    let forward = AdjacencyGraph::from_edges(true, 3, [(0, 1), (1, 2), (2, 0)]);
    let backward = AdjacencyGraph::from_edges(true, 3, [(1, 0), (2, 1), (0, 2)]);
    assert!(is_isomorphic(&forward, &backward).unwrap());
    let path = AdjacencyGraph::from_edges(true, 3, [(0, 1), (1, 2), (0, 2)]);
    assert!(!is_isomorphic(&forward, &path).unwrap());
    assert!(forward.is_directed());
}
