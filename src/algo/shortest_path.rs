/*!
Single-source shortest paths.

Weighted graphs are handled by Bellman-Ford, which tolerates negative weights and reports
negative cycles in its result type. Unweighted graphs use unit costs and are solved by a
breadth-first search, which gives exact hop counts in a single sweep.
*/

use std::collections::VecDeque;

use fxhash::FxHashMap;
use itertools::Itertools;
use log::{trace, warn};

use super::*;

/// Distance of every registered vertex from the source; unreached vertices map to infinity
pub type Distances<V> = FxHashMap<V, f64>;

/// Result of a single-source shortest path computation
#[derive(Debug, Clone, PartialEq)]
pub enum ShortestPaths<V: Vertex> {
    /// The distances are exact
    Converged(Distances<V>),
    /// A negative cycle is reachable from the source; the distances are the state after
    /// `|V| - 1` relaxation rounds and must not be trusted
    NegativeCycle(Distances<V>),
}

impl<V: Vertex> ShortestPaths<V> {
    /// Returns the distances regardless of convergence
    pub fn distances(&self) -> &Distances<V> {
        match self {
            ShortestPaths::Converged(d) | ShortestPaths::NegativeCycle(d) => d,
        }
    }

    /// Consumes the result and returns the distances regardless of convergence
    pub fn into_distances(self) -> Distances<V> {
        match self {
            ShortestPaths::Converged(d) | ShortestPaths::NegativeCycle(d) => d,
        }
    }

    /// Returns the distance to `v`, infinity if `v` is unreached or unknown
    pub fn distance_to(&self, v: &V) -> f64 {
        self.distances().get(v).copied().unwrap_or(f64::INFINITY)
    }

    /// Returns *true* if a negative cycle was detected
    pub fn has_negative_cycle(&self) -> bool {
        matches!(self, ShortestPaths::NegativeCycle(_))
    }
}

/// Provides single-source shortest paths on graphs
pub trait ShortestPath: AdjacencyList + Sized {
    /// Computes the least-cost distance from `source` to every vertex.
    ///
    /// For weighted graphs, all edges are relaxed in edge-list order for `|V| - 1` rounds
    /// (stopping early once a round changes nothing), followed by one round that only
    /// checks for negative cycles. Unweighted graphs count edges.
    ///
    /// # Errors
    /// Fails with [`GraphError::UnknownVertex`] if `source` is not registered.
    ///
    /// # Examples
    /// ```
    /// use adjgraphs::{prelude::*, algo::*};
    ///
    /// let g = Graph::with_weights([0, 1, 2], [(0, 1), (1, 2), (0, 2)], [5.0, -3.0, 4.0]).unwrap();
    /// let paths = g.bellman_ford(&0).unwrap();
    ///
    /// assert!(!paths.has_negative_cycle());
    /// assert_eq!(paths.distance_to(&1), 5.0);
    /// assert_eq!(paths.distance_to(&2), 2.0);
    /// ```
    fn bellman_ford(&self, source: &Self::V) -> Result<ShortestPaths<Self::V>>;
}

impl<G> ShortestPath for G
where
    G: AdjacencyList,
{
    fn bellman_ford(&self, source: &G::V) -> Result<ShortestPaths<G::V>> {
        if !self.contains_vertex(source) {
            return Err(GraphError::unknown_vertex(source));
        }

        let mut distance: Distances<G::V> = self
            .vertices()
            .map(|v| (v.clone(), f64::INFINITY))
            .collect();
        distance.insert(source.clone(), 0.0);

        if !self.is_weighted() {
            hop_distances(self, source, &mut distance)?;
            return Ok(ShortestPaths::Converged(distance));
        }

        let weighted_edges = self
            .edge_list()
            .iter()
            .map(|Edge(u, v)| {
                self.weight_of(u, v)
                    .map(|w| (u, v, w))
                    .ok_or_else(|| GraphError::missing_weight(u, v))
            })
            .collect::<Result<Vec<_>>>()?;

        let dist = |d: &Distances<G::V>, v: &G::V| d.get(v).copied().unwrap_or(f64::INFINITY);

        for round in 1..self.number_of_vertices() {
            let mut updated = false;
            for &(u, v, w) in &weighted_edges {
                let candidate = dist(&distance, u) + w;
                if candidate < dist(&distance, v) {
                    distance.insert(v.clone(), candidate);
                    updated = true;
                }
            }

            if !updated {
                trace!("Bellman-Ford converged after {round} rounds");
                break;
            }
        }

        let cycle_edges = weighted_edges
            .iter()
            .filter(|(u, v, w)| dist(&distance, u) + w < dist(&distance, v))
            .collect_vec();

        if let Some((u, v, _)) = cycle_edges.first() {
            warn!(
                "Graph contains a negative-weight cycle reachable from {source:?}: \
                 {} edges still relax, e.g. ({u:?},{v:?})",
                cycle_edges.len()
            );
            return Ok(ShortestPaths::NegativeCycle(distance));
        }

        Ok(ShortestPaths::Converged(distance))
    }
}

/// Assigns every vertex reachable from `source` its number of edges on a shortest path
fn hop_distances<G>(graph: &G, source: &G::V, distance: &mut Distances<G::V>) -> Result<()>
where
    G: AdjacencyList,
{
    let mut queue = VecDeque::from([(source.clone(), 0.0)]);
    while let Some((u, d)) = queue.pop_front() {
        for v in graph.neighbors_of(&u)? {
            if distance.get(v).is_none_or(|&dv| dv.is_infinite()) {
                distance.insert(v.clone(), d + 1.0);
                queue.push_back((v.clone(), d + 1.0));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::{gens::*, testing::*};

    #[test]
    fn sample_unweighted() {
        let paths = sample_graph().bellman_ford(&0).unwrap();
        assert!(!paths.has_negative_cycle());

        let d = paths.distances();
        assert_eq!(d.len(), 4);
        assert_eq!(d[&0], 0.0);
        assert_eq!(d[&1], 1.0);
        assert_eq!(d[&2], 1.0);
        assert_eq!(d[&3], 2.0);
    }

    #[test]
    fn unreachable_stays_infinite() {
        let g = Graph::new([0, 1, 2, 3], [(0, 1), (2, 3)]).unwrap();
        let d = g.bellman_ford(&0).unwrap().into_distances();
        assert_eq!(d[&0], 0.0);
        assert_eq!(d[&1], 1.0);
        assert!(d[&2].is_infinite());
        assert!(d[&3].is_infinite());

        assert_eq!(
            g.bellman_ford(&5),
            Err(GraphError::UnknownVertex("5".into()))
        );
    }

    #[test]
    fn unweighted_needs_more_than_one_round() {
        // relaxing in adjacency order once would leave 3 at infinity
        let g = Graph::new([3, 2, 1, 0], [(2, 3), (1, 2), (0, 1)]).unwrap();
        let paths = g.bellman_ford(&0).unwrap();
        assert_eq!(paths.distance_to(&3), 3.0);
    }

    #[test]
    fn weighted() {
        let mut b = GraphBuilder::new();
        b.add_weighted_edge('s', 'a', 4.0);
        b.add_weighted_edge('s', 'b', 1.0);
        b.add_weighted_edge('b', 'a', 2.0);
        b.add_weighted_edge('a', 't', 1.0);
        b.add_weighted_edge('b', 't', 5.0);
        b.add_vertex('x');
        let g = b.build().unwrap();

        let paths = g.bellman_ford(&'s').unwrap();
        assert!(!paths.has_negative_cycle());
        assert_eq!(paths.distance_to(&'s'), 0.0);
        assert_eq!(paths.distance_to(&'b'), 1.0);
        assert_eq!(paths.distance_to(&'a'), 3.0);
        assert_eq!(paths.distance_to(&'t'), 4.0);
        assert_eq!(paths.distance_to(&'x'), f64::INFINITY);
    }

    #[test]
    fn negative_edges_without_cycle() {
        let g = Graph::with_weights(
            [0, 1, 2, 3],
            [(2, 3), (1, 2), (0, 1), (0, 3)],
            [-2.0, -1.0, 3.0, 1.0],
        )
        .unwrap();
        let paths = g.bellman_ford(&0).unwrap();
        assert!(!paths.has_negative_cycle());
        assert_eq!(paths.distance_to(&3), 0.0);
    }

    #[test]
    fn negative_cycle() {
        init_logger();

        let g = Graph::with_weights(
            [0, 1, 2],
            [(0, 1), (1, 2), (2, 1)],
            [1.0, -2.0, 1.0],
        )
        .unwrap();
        let paths = g.bellman_ford(&0).unwrap();
        assert!(paths.has_negative_cycle());
        assert_eq!(paths.distance_to(&0), 0.0);

        assert!(g.bellman_ford(&2).unwrap().has_negative_cycle());

        // cycle not reachable from the source
        let g = Graph::with_weights([0, 1, 2], [(1, 2), (2, 1)], [-2.0, 1.0]).unwrap();
        assert!(!g.bellman_ford(&0).unwrap().has_negative_cycle());
    }

    #[test]
    fn unit_weights_agree_with_hop_counts() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);

        for n in [10u32, 30] {
            let g = random_undirected_graph(rng, n, 2 * n as usize);
            let unit = Graph::with_weights(
                g.vertices().copied(),
                g.edge_list().iter().cloned(),
                std::iter::repeat_n(1.0, g.number_of_edges()),
            )
            .unwrap();

            for source in 0..n {
                let hops = g.bellman_ford(&source).unwrap();
                let weighted = unit.bellman_ford(&source).unwrap();
                assert_eq!(hops, weighted);

                for v in 0..n {
                    let reachable = g.bfs(&source, &v).unwrap().is_found();
                    assert_eq!(reachable, hops.distance_to(&v).is_finite());
                }
            }
        }
    }
}
