//! Shared fixtures for unit tests

use itertools::Itertools;
use rand::{Rng, seq::SliceRandom};

use crate::{gens::*, prelude::*};

/// Routes `log` output of the crate to the test harness; set `RUST_LOG` to see it
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// The undirected graph `2 - 0 - 1 - 3` stored as six directed edges
pub fn sample_graph() -> Graph<u32> {
    Graph::new(
        [0, 1, 2, 3],
        [(0, 1), (0, 2), (1, 0), (1, 3), (2, 0), (3, 1)],
    )
    .unwrap()
}

/// Creates an undirected graph on `0..n` with at most `m_ub` random (non-loop) edges
pub fn random_undirected_graph<R: Rng>(rng: &mut R, n: u32, m_ub: usize) -> Graph<u32> {
    let mut builder = GraphBuilder::new_undirected();
    builder.add_vertices(0..n);

    for _ in 0..m_ub {
        let u = rng.random_range(0..n);
        let v = rng.random_range(0..n);
        if u != v {
            builder.connect(u, v);
        }
    }

    builder.build().unwrap()
}

/// Returns a copy of `graph` whose vertices are relabelled by a random permutation and whose
/// vertex and edge lists are shuffled. The result is isomorphic to `graph`.
pub fn shuffled_copy<R: Rng>(rng: &mut R, graph: &Graph<u32>) -> Graph<u32> {
    let mut labels = graph.vertices().copied().collect_vec();
    labels.shuffle(rng);
    let relabel = |u: &u32| labels[graph.index_of(u).unwrap()] + 1000;

    let mut vertices = graph.vertices().map(relabel).collect_vec();
    vertices.shuffle(rng);

    let mut edges = graph
        .edge_list()
        .iter()
        .map(|Edge(u, v)| Edge(relabel(u), relabel(v)))
        .collect_vec();
    edges.shuffle(rng);

    Graph::new(vertices, edges).unwrap()
}

/// Asserts that `path` starts at `start`, ends at `target` and follows edges of `graph`
pub fn assert_valid_path<G: AdjacencyList>(
    graph: &G,
    path: &[G::V],
    start: &G::V,
    target: &G::V,
) {
    assert_eq!(path.first(), Some(start));
    assert_eq!(path.last(), Some(target));
    for (u, v) in path.iter().tuple_windows() {
        assert!(graph.has_edge(u, v), "{u:?} -> {v:?} is not an edge");
    }
}
