/*!
# Bipartiteness

Two notions live in this module and they are **not** the same:

- [`BipartiteTest::is_bipartite`] answers whether the graph consists of exactly **two connected
  components**. This is the definition this crate has always used and it is kept as is; it is
  *not* the graph-theoretic notion.
- [`BipartiteTest::is_two_colorable`] answers the textbook question: can the vertices be split
  into two sides such that every edge crosses sides?
*/

use std::collections::VecDeque;

use fxhash::{FxHashMap, FxHashSet};

use super::*;

/// One side of a bipartition. Vertices in the set are on the **right** side,
/// all others on the **left** side.
pub type Bipartition<V> = FxHashSet<V>;

/// A trait for bipartiteness queries
pub trait BipartiteTest: AdjacencyList + Sized {
    /// Returns *true* iff the graph has **exactly two connected components**.
    ///
    /// Note that this deliberately differs from the usual definition of bipartite graphs:
    /// a path is not "bipartite" here, while two disjoint triangles are.
    /// Use [`BipartiteTest::is_two_colorable`] for the standard notion.
    ///
    /// # Examples
    /// ```
    /// use adjgraphs::{prelude::*, algo::*, gens::*};
    ///
    /// let mut b = GraphBuilder::new_undirected();
    /// b.connect_cycle([1, 2, 3]);
    /// b.connect_cycle([4, 5, 6]);
    /// let g = b.build().unwrap();
    ///
    /// assert!(g.is_bipartite());
    /// assert!(!g.is_two_colorable());
    /// ```
    fn is_bipartite(&self) -> bool;

    /// Tests whether every edge has exactly one endpoint in `bipartition`.
    fn is_bipartition(&self, bipartition: &Bipartition<Self::V>) -> bool;

    /// Computes a valid bipartition (ignoring edge directions), if one exists.
    /// Returns `None` if the graph has an odd cycle (self-loops included).
    fn compute_bipartition(&self) -> Option<Bipartition<Self::V>>;

    /// Tests whether the graph is bipartite in the graph-theoretic sense.
    ///
    /// # Examples
    /// ```
    /// use adjgraphs::{prelude::*, algo::*, gens::*};
    ///
    /// let mut b = GraphBuilder::new_undirected();
    /// b.connect_path(0..10);
    /// let g = b.build().unwrap();
    ///
    /// assert!(g.is_two_colorable());
    /// assert!(!g.is_bipartite());
    /// ```
    fn is_two_colorable(&self) -> bool {
        self.compute_bipartition().is_some()
    }
}

impl<G> BipartiteTest for G
where
    G: AdjacencyList,
{
    fn is_bipartite(&self) -> bool {
        self.connected_components().len() == 2
    }

    fn is_bipartition(&self, bipartition: &Bipartition<G::V>) -> bool {
        self.edge_list()
            .iter()
            .all(|Edge(u, v)| bipartition.contains(u) != bipartition.contains(v))
    }

    fn compute_bipartition(&self) -> Option<Bipartition<G::V>> {
        let bipartition = propose_possibly_illegal_bipartition(self);
        self.is_bipartition(&bipartition).then_some(bipartition)
    }
}

/// Computes a candidate bipartition by alternating sides along BFS trees of the undirected
/// view of the graph.
///
/// - If the graph is bipartite, the returned partition is valid
/// - If the graph is not bipartite, the returned partition may be invalid
fn propose_possibly_illegal_bipartition<G>(graph: &G) -> Bipartition<G::V>
where
    G: AdjacencyList,
{
    let mut undirected: FxHashMap<&G::V, Vec<&G::V>> = FxHashMap::default();
    for Edge(u, v) in graph.edge_list() {
        undirected.entry(u).or_default().push(v);
        undirected.entry(v).or_default().push(u);
    }

    let mut on_right: FxHashMap<&G::V, bool> = FxHashMap::default();
    let mut queue = VecDeque::new();

    for root in graph.vertices() {
        if on_right.contains_key(root) {
            continue;
        }
        on_right.insert(root, false);
        queue.push_back(root);

        while let Some(u) = queue.pop_front() {
            let side = on_right.get(u).copied().unwrap_or_default();
            for &v in undirected.get(u).into_iter().flatten() {
                if !on_right.contains_key(v) {
                    on_right.insert(v, !side);
                    queue.push_back(v);
                }
            }
        }
    }

    on_right
        .into_iter()
        .filter_map(|(u, right)| right.then(|| u.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{gens::*, testing::*};

    #[test]
    fn two_components() {
        let g = Graph::from_adjacency([
            (1, vec![2, 3]),
            (2, vec![1, 3]),
            (3, vec![1, 2]),
            (4, vec![6]),
            (5, vec![6]),
            (6, vec![4, 5]),
        ])
        .unwrap();
        assert!(g.is_bipartite());
        assert_eq!(g.is_bipartite(), g.connected_components().len() == 2);
    }

    #[test]
    fn narrow_definition() {
        assert!(!sample_graph().is_bipartite());
        assert!(sample_graph().is_two_colorable());

        let single = Graph::edgeless([0]);
        assert!(!single.is_bipartite());

        let empty: Graph<u8> = Graph::edgeless([]);
        assert!(!empty.is_bipartite());

        let pair = Graph::edgeless([0, 1]);
        assert!(pair.is_bipartite());

        let three = Graph::edgeless([0, 1, 2]);
        assert!(!three.is_bipartite());
        assert!(three.is_two_colorable());
    }

    #[test]
    fn path() {
        for n in 1..10u32 {
            let mut b = GraphBuilder::new_undirected();
            b.connect_path(0..n);
            let g = b.build().unwrap();
            assert!(g.is_two_colorable());

            let bip = g.compute_bipartition().unwrap();
            assert!(g.is_bipartition(&bip));
            assert_eq!(bip.len() as u32, n / 2);

            if n > 2 {
                let mut b = GraphBuilder::new_undirected();
                b.connect_path(0..n);
                b.connect(1 - (n % 2), n - 1);
                let g = b.build().unwrap();
                assert!(!g.is_two_colorable());
            }
        }
    }

    #[test]
    fn directed_edges_are_treated_undirected() {
        // 0 -> 1 <- 2 -> 3
        let g = Graph::new([0, 1, 2, 3], [(0, 1), (2, 1), (2, 3)]).unwrap();
        assert!(g.is_two_colorable());

        let g = Graph::new([0, 1, 2], [(0, 1), (1, 2), (0, 2)]).unwrap();
        assert!(!g.is_two_colorable());

        let g = Graph::new([0], [(0, 0)]).unwrap();
        assert!(!g.is_two_colorable());
    }
}
