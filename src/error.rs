//! Error types for graph construction and queries.

use std::fmt::Debug;

use thiserror::Error;

/// All errors that can occur when building or querying a graph.
///
/// Vertex labels are generic, so offending vertices are stored in their `Debug` rendering.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A vertex was looked up that is not registered in the adjacency list.
    #[error("Vertex {0} is not registered in the graph")]
    UnknownVertex(String),

    /// An edge references a vertex that is absent from the vertex set.
    #[error("Edge {edge} references vertex {vertex} which is not in the vertex set")]
    InconsistentEdge { edge: String, vertex: String },

    /// The number of weights does not match the number of edges.
    #[error("Expected one weight per edge: {edges} edges but {weights} weights")]
    WeightCountMismatch { edges: usize, weights: usize },

    /// A weighted graph lacks a weight for one of its edges.
    #[error("No weight given for edge {0}")]
    MissingWeight(String),
}

impl GraphError {
    pub(crate) fn unknown_vertex<V: Debug>(vertex: &V) -> Self {
        GraphError::UnknownVertex(format!("{vertex:?}"))
    }

    pub(crate) fn inconsistent_edge<V: Debug>(u: &V, v: &V, missing: &V) -> Self {
        GraphError::InconsistentEdge {
            edge: format!("({u:?},{v:?})"),
            vertex: format!("{missing:?}"),
        }
    }

    pub(crate) fn missing_weight<V: Debug>(u: &V, v: &V) -> Self {
        GraphError::MissingWeight(format!("({u:?},{v:?})"))
    }
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_render_vertices_with_debug() {
        assert_eq!(
            GraphError::unknown_vertex(&"a").to_string(),
            "Vertex \"a\" is not registered in the graph"
        );
        assert_eq!(
            GraphError::inconsistent_edge(&1, &7, &7).to_string(),
            "Edge (1,7) references vertex 7 which is not in the vertex set"
        );
        assert_eq!(
            GraphError::WeightCountMismatch { edges: 3, weights: 2 }.to_string(),
            "Expected one weight per edge: 3 edges but 2 weights"
        );
    }
}
