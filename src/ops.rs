use itertools::Itertools;

use crate::prelude::*;

/// Provides getters pertaining to the vertex set of a graph
pub trait GraphVertexOrder {
    /// Vertex label type
    type V: Vertex;

    /// Classifies the size of the vertex set.
    /// Finite vertex sets report their size, enumerations and markers their kind of infinity.
    fn count_vertices(&self) -> Cardinality;

    /// Returns an iterator over all registered vertices in registration order.
    /// For infinite vertex sets, only vertices appearing in the edge list are registered.
    fn vertices(&self) -> impl Iterator<Item = &Self::V> + '_;

    /// Returns the number of registered vertices
    fn number_of_vertices(&self) -> usize;

    /// Returns *true* if `u` is registered
    fn contains_vertex(&self, u: &Self::V) -> bool;

    /// Returns *true* if the graph has no registered vertices (and thus no edges)
    fn is_empty(&self) -> bool {
        self.number_of_vertices() == 0
    }
}

/// Provides getters pertaining to the edge set of a graph
pub trait GraphEdgeOrder: GraphVertexOrder {
    /// Classifies the size of the edge set
    fn count_edges(&self) -> Cardinality;

    /// Returns the materialized edge list in insertion order (parallel edges included)
    fn edge_list(&self) -> &[Edge<Self::V>];

    /// Returns the number of entries in the materialized edge list
    fn number_of_edges(&self) -> usize {
        self.edge_list().len()
    }

    /// Returns the weight of edge `(u, v)` if the graph is weighted
    fn weight_of(&self, u: &Self::V, v: &Self::V) -> Option<f64>;

    /// Returns *true* if a weight is attached to every edge
    fn is_weighted(&self) -> bool;
}

/// Traits pertaining getters for neighborhoods
pub trait AdjacencyList: GraphEdgeOrder + Sized {
    /// Returns the (out-)neighbors of `u` in first-seen order, or `None` if `u` is unknown
    fn try_neighbors_of(&self, u: &Self::V) -> Option<&[Self::V]>;

    /// Returns the registration position of `u`
    fn index_of(&self, u: &Self::V) -> Option<usize>;

    /// Returns the vertex registered at position `pos`
    fn vertex_at(&self, pos: usize) -> Option<&Self::V>;

    /// Returns the (out-)neighbors of `u` in first-seen order
    ///
    /// # Errors
    /// Fails with [`GraphError::UnknownVertex`] if `u` is not registered.
    fn neighbors_of(&self, u: &Self::V) -> Result<&[Self::V]> {
        self.try_neighbors_of(u)
            .ok_or_else(|| GraphError::unknown_vertex(u))
    }

    /// Returns the number of distinct (outgoing) neighbors of `u`
    ///
    /// # Errors
    /// Fails with [`GraphError::UnknownVertex`] if `u` is not registered.
    fn degree_of_vertex(&self, u: &Self::V) -> Result<usize> {
        self.neighbors_of(u).map(<[Self::V]>::len)
    }

    /// Returns `(vertex, degree)` for all registered vertices
    fn degrees(&self) -> impl Iterator<Item = (&Self::V, usize)> + '_ {
        self.vertices()
            .map(|u| (u, self.try_neighbors_of(u).map_or(0, <[Self::V]>::len)))
    }

    /// Returns the degrees of all vertices in ascending order
    fn degree_sequence(&self) -> Vec<usize> {
        self.degrees().map(|(_, d)| d).sorted_unstable().collect_vec()
    }

    /// Returns the maximum degree in the graph
    fn max_degree(&self) -> usize {
        self.degrees().map(|(_, d)| d).max().unwrap_or(0)
    }

    /// Returns the number of distinct directed adjacencies, i.e. the sum of all degrees
    fn number_of_arcs(&self) -> usize {
        self.degrees().map(|(_, d)| d).sum()
    }

    /// Returns *true* if `v` is a neighbor of `u`
    fn has_edge(&self, u: &Self::V, v: &Self::V) -> bool {
        self.try_neighbors_of(u).is_some_and(|nbs| nbs.contains(v))
    }
}
