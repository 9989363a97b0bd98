use fxhash::FxHashMap;
use itertools::Itertools;

use super::*;

/// Edge weights keyed by the directed edge they belong to
pub type Weights<V> = FxHashMap<Edge<V>, f64>;

/// An immutable graph given by a vertex collection, an edge collection, optional edge weights
/// and the adjacency list derived from them at construction.
///
/// No algorithm in this crate mutates a `Graph`; build a new one (e.g. via
/// [`GraphBuilder`](crate::gens::GraphBuilder)) to change it.
///
/// # Examples
/// ```
/// use adjgraphs::prelude::*;
///
/// // 0 - 1 - 3
/// // |
/// // 2
/// let g = Graph::new(
///     [0, 1, 2, 3],
///     [(0, 1), (1, 0), (0, 2), (2, 0), (1, 3), (3, 1)],
/// ).unwrap();
///
/// assert_eq!(g.count_vertices(), 4);
/// assert_eq!(g.count_edges(), 6);
/// assert_eq!(g.degree_of_vertex(&0), Ok(2));
/// assert_eq!(g.degree_of_vertex(&3), Ok(1));
/// assert!(g.degree_of_vertex(&4).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Graph<V: Vertex> {
    vertex_set: Collection<V>,
    edge_set: Collection<Edge<V>>,
    weights: Option<Weights<V>>,
    edges: Adjacency<V>,
}

impl<V: Vertex> Graph<V> {
    /// Creates an unweighted graph from finite vertex and edge collections.
    ///
    /// # Errors
    /// Fails with [`GraphError::InconsistentEdge`] if an edge references an unknown vertex.
    pub fn new<I, E>(vertices: I, edges: E) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
        E: IntoIterator,
        E::Item: Into<Edge<V>>,
    {
        Self::from_collections(
            vertices.into_iter().collect(),
            edges.into_iter().map_into().collect(),
            None,
        )
    }

    /// Creates a graph without any edges
    pub fn edgeless<I>(vertices: I) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        let vertex_set: Collection<V> = vertices.into_iter().collect();
        let mut edges = Adjacency::new();
        for u in vertex_set.as_slice() {
            edges.register(u.clone());
        }

        Self {
            vertex_set,
            edge_set: Collection::default(),
            weights: None,
            edges,
        }
    }

    /// Creates a weighted graph where the `i`-th weight belongs to the `i`-th edge.
    /// If an edge occurs multiple times, its last weight wins.
    ///
    /// # Errors
    /// Fails with [`GraphError::WeightCountMismatch`] if there are not exactly as many weights
    /// as edges, or with [`GraphError::InconsistentEdge`] as [`Graph::new`].
    pub fn with_weights<I, E, W>(vertices: I, edges: E, weights: W) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
        E: IntoIterator,
        E::Item: Into<Edge<V>>,
        W: IntoIterator<Item = f64>,
    {
        let edges = edges.into_iter().map_into().collect_vec();
        let weights = weights.into_iter().collect_vec();
        if edges.len() != weights.len() {
            return Err(GraphError::WeightCountMismatch {
                edges: edges.len(),
                weights: weights.len(),
            });
        }

        let weights: Weights<V> = edges.iter().cloned().zip(weights).collect();
        Self::from_collections(
            vertices.into_iter().collect(),
            Collection::Finite(edges),
            Some(weights),
        )
    }

    /// Creates a weighted graph from an explicit edge -> weight mapping.
    ///
    /// # Errors
    /// Fails with [`GraphError::MissingWeight`] if an edge has no weight in `weights`,
    /// or with [`GraphError::InconsistentEdge`] as [`Graph::new`].
    pub fn with_weight_map<I, E>(vertices: I, edges: E, weights: Weights<V>) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
        E: IntoIterator,
        E::Item: Into<Edge<V>>,
    {
        Self::from_collections(
            vertices.into_iter().collect(),
            edges.into_iter().map_into().collect(),
            Some(weights),
        )
    }

    /// Creates a graph from a listing `vertex -> neighbors`; every listed neighbor `v` of `u`
    /// becomes the edge `(u, v)`.
    ///
    /// # Errors
    /// Fails with [`GraphError::InconsistentEdge`] if a neighbor is not listed as a vertex.
    ///
    /// # Examples
    /// ```
    /// use adjgraphs::prelude::*;
    ///
    /// let g = Graph::from_adjacency([('a', vec!['b']), ('b', vec!['a', 'c']), ('c', vec![])]).unwrap();
    /// assert_eq!(g.edge_list(), &[Edge('a', 'b'), Edge('b', 'a'), Edge('b', 'c')]);
    /// ```
    pub fn from_adjacency<A, N>(adjacency: A) -> Result<Self>
    where
        A: IntoIterator<Item = (V, N)>,
        N: IntoIterator<Item = V>,
    {
        let mut vertices = Vec::new();
        let mut edges = Vec::new();
        for (u, neighbors) in adjacency {
            edges.extend(neighbors.into_iter().map(|v| Edge(u.clone(), v)));
            vertices.push(u);
        }

        Self::from_collections(Collection::Finite(vertices), Collection::Finite(edges), None)
    }

    /// Creates a graph from arbitrary collections.
    ///
    /// If the vertex collection is not finite, membership cannot be checked and all endpoints
    /// of the (materialized) edges are registered as vertices in order of appearance.
    /// An infinite edge collection contributes no adjacencies.
    ///
    /// # Errors
    /// Fails with [`GraphError::InconsistentEdge`] if a finite vertex collection misses an edge
    /// endpoint, or with [`GraphError::MissingWeight`] if `weights` lacks an edge.
    pub fn from_collections(
        vertex_set: Collection<V>,
        edge_set: Collection<Edge<V>>,
        weights: Option<Weights<V>>,
    ) -> Result<Self> {
        let edges = if vertex_set.is_finite() {
            build_adjacency(vertex_set.as_slice().iter().cloned(), edge_set.as_slice())?
        } else {
            build_adjacency_registering(edge_set.as_slice())
        };

        if let Some(weights) = &weights {
            if let Some(Edge(u, v)) = edge_set
                .as_slice()
                .iter()
                .find(|e| !weights.contains_key(*e))
            {
                return Err(GraphError::missing_weight(u, v));
            }
        }

        Ok(Self {
            vertex_set,
            edge_set,
            weights,
            edges,
        })
    }

    /// Returns the vertex collection as given at construction
    pub fn vertex_set(&self) -> &Collection<V> {
        &self.vertex_set
    }

    /// Returns the edge collection as given at construction
    pub fn edge_set(&self) -> &Collection<Edge<V>> {
        &self.edge_set
    }

    /// Returns the edge weights, if any
    pub fn weights(&self) -> Option<&Weights<V>> {
        self.weights.as_ref()
    }

    /// Returns the derived adjacency list
    pub fn edges(&self) -> &Adjacency<V> {
        &self.edges
    }
}

impl<V: Vertex> GraphVertexOrder for Graph<V> {
    type V = V;

    fn count_vertices(&self) -> Cardinality {
        self.vertex_set.cardinality()
    }

    fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.edges.vertices()
    }

    fn number_of_vertices(&self) -> usize {
        self.edges.len()
    }

    fn contains_vertex(&self, u: &V) -> bool {
        self.edges.contains(u)
    }
}

impl<V: Vertex> GraphEdgeOrder for Graph<V> {
    fn count_edges(&self) -> Cardinality {
        self.edge_set.cardinality()
    }

    fn edge_list(&self) -> &[Edge<V>] {
        self.edge_set.as_slice()
    }

    fn weight_of(&self, u: &V, v: &V) -> Option<f64> {
        self.weights
            .as_ref()?
            .get(&Edge(u.clone(), v.clone()))
            .copied()
    }

    fn is_weighted(&self) -> bool {
        self.weights.is_some()
    }
}

impl<V: Vertex> AdjacencyList for Graph<V> {
    fn try_neighbors_of(&self, u: &V) -> Option<&[V]> {
        self.edges.neighbors_of(u)
    }

    fn index_of(&self, u: &V) -> Option<usize> {
        self.edges.index_of(u)
    }

    fn vertex_at(&self, pos: usize) -> Option<&V> {
        self.edges.vertex_at(pos)
    }
}

#[cfg(test)]
mod tests {
    use crate::testing::sample_graph;

    use super::*;

    #[test]
    fn counting_and_degrees() {
        let g = sample_graph();

        assert_eq!(g.count_vertices(), Cardinality::Finite(4));
        assert_eq!(g.count_edges(), Cardinality::Finite(6));
        assert_eq!(g.number_of_vertices(), 4);
        assert_eq!(g.number_of_arcs(), 6);

        for (u, d) in [(0, 2), (1, 2), (2, 1), (3, 1)] {
            assert_eq!(g.degree_of_vertex(&u), Ok(d));
        }
        for u in g.vertices() {
            assert_eq!(g.degree_of_vertex(u), Ok(g.edges().neighbors_of(u).unwrap().len()));
        }

        assert_eq!(g.degree_sequence(), vec![1, 1, 2, 2]);
        assert_eq!(g.max_degree(), 2);
        assert!(g.has_edge(&1, &3));
        assert!(!g.has_edge(&2, &3));
    }

    #[test]
    fn unknown_vertex() {
        let g = sample_graph();
        assert_eq!(
            g.degree_of_vertex(&42),
            Err(GraphError::UnknownVertex("42".into()))
        );
        assert!(g.neighbors_of(&42).is_err());
    }

    #[test]
    fn empty_and_single_vertex() {
        let empty: Graph<u32> = Graph::edgeless([]);
        assert_eq!(empty.count_vertices(), 0);
        assert_eq!(empty.count_edges(), 0);
        assert!(empty.is_empty());

        let single = Graph::edgeless([0u32]);
        assert_eq!(single.count_vertices(), 1);
        assert_eq!(single.count_edges(), 0);
        assert_eq!(single.degree_of_vertex(&0), Ok(0));
    }

    #[test]
    fn parallel_edges_are_counted_but_not_adjacent_twice() {
        let g = Graph::new([0, 1], [(0, 1), (0, 1), (1, 1)]).unwrap();
        assert_eq!(g.count_edges(), 3);
        assert_eq!(g.degree_of_vertex(&0), Ok(1));
        assert_eq!(g.neighbors_of(&1), Ok(&[1][..]));
    }

    #[test]
    fn weights() {
        let g = Graph::with_weights([0, 1, 2], [(0, 1), (1, 2), (0, 1)], [4.0, 2.5, 1.0]).unwrap();
        assert!(g.is_weighted());
        assert_eq!(g.weight_of(&0, &1), Some(1.0));
        assert_eq!(g.weight_of(&1, &2), Some(2.5));
        assert_eq!(g.weight_of(&2, &1), None);

        assert_eq!(
            Graph::with_weights([0, 1], [(0, 1)], [1.0, 2.0]).unwrap_err(),
            GraphError::WeightCountMismatch {
                edges: 1,
                weights: 2
            }
        );

        let mut map = Weights::default();
        map.insert(Edge(0, 1), 3.0);
        assert!(Graph::with_weight_map([0, 1], [(0, 1)], map.clone()).is_ok());
        assert_eq!(
            Graph::with_weight_map([0, 1], [(0, 1), (1, 0)], map).unwrap_err(),
            GraphError::MissingWeight("(1,0)".into())
        );
    }

    #[test]
    fn infinite_collections() {
        let g = Graph::from_collections(
            Collection::countable(|i| i as i64),
            vec![Edge(0, 1), Edge(1, 0), Edge(1, 2)].into(),
            None,
        )
        .unwrap();
        assert_eq!(g.count_vertices(), Cardinality::CountablyInfinite);
        assert_eq!(g.count_edges(), 3);
        assert_eq!(g.vertices().copied().collect_vec(), vec![0, 1, 2]);
        assert_eq!(g.degree_of_vertex(&1), Ok(2));

        let g: Graph<u64> =
            Graph::from_collections(Collection::Uncountable, Collection::Uncountable, None)
                .unwrap();
        assert_eq!(g.count_vertices(), Cardinality::UncountablyInfinite);
        assert_eq!(g.count_edges(), Cardinality::UncountablyInfinite);
        assert!(g.is_empty());

        let g = Graph::from_collections(
            vec![0u8, 1].into(),
            Collection::countable(|i| Edge((i % 2) as u8, ((i + 1) % 2) as u8)),
            None,
        )
        .unwrap();
        assert_eq!(g.count_edges(), Cardinality::CountablyInfinite);
        assert_eq!(g.number_of_edges(), 0);
    }

    #[test]
    fn from_adjacency_listing() {
        let g = Graph::from_adjacency([
            (0, vec![1, 2]),
            (1, vec![0, 3]),
            (2, vec![0]),
            (3, vec![1]),
        ])
        .unwrap();
        assert_eq!(g.count_edges(), 6);
        assert_eq!(g.edges(), sample_graph().edges());
    }
}
