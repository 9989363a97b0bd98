/*!
# Graph Construction

[`Graph`] is frozen once built. This module provides the mutable counterpart:
[`GraphBuilder`] collects vertices, edges and weights incrementally and produces a [`Graph`]
on [`GraphBuilder::build`]. The [`GeneratorSubstructures`] trait adds paths, cycles and
cliques in one call.

# Example

```rust
use adjgraphs::{prelude::*, gens::*};

let mut builder = GraphBuilder::new_undirected();
builder.connect_path(["a", "b", "c"]);
builder.add_vertex("d");

let g = builder.build().unwrap();
assert_eq!(g.count_vertices(), 4);
assert_eq!(g.count_edges(), 4);
assert_eq!(g.neighbors_of(&"b").unwrap(), &["a", "c"]);
```
*/

use fxhash::FxHashSet;
use itertools::Itertools;

use crate::prelude::*;

mod substructures;

pub use substructures::*;

/// Incrementally assembles a [`Graph`].
///
/// Endpoints of added edges are registered as vertices automatically. In *undirected* mode,
/// [`GraphBuilder::connect`] (and all substructure generators) insert both directions of an edge;
/// [`GraphBuilder::add_edge`] always inserts a single directed edge.
#[derive(Debug, Clone)]
pub struct GraphBuilder<V: Vertex> {
    vertices: Vec<V>,
    known: FxHashSet<V>,
    edges: Vec<Edge<V>>,
    weights: Vec<Option<f64>>,
    undirected: bool,
}

impl<V: Vertex> Default for GraphBuilder<V> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            known: FxHashSet::default(),
            edges: Vec::new(),
            weights: Vec::new(),
            undirected: false,
        }
    }
}

impl<V: Vertex> GraphBuilder<V> {
    /// Creates a builder whose `connect*` methods insert directed edges
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder whose `connect*` methods insert both directions of each edge
    pub fn new_undirected() -> Self {
        Self {
            undirected: true,
            ..Self::default()
        }
    }

    /// Returns *true* if `connect*` methods insert both directions
    pub fn is_undirected(&self) -> bool {
        self.undirected
    }

    /// Registers a vertex. Returns *true* if the vertex was registered before.
    pub fn add_vertex(&mut self, u: V) -> bool {
        if self.known.contains(&u) {
            return true;
        }
        self.known.insert(u.clone());
        self.vertices.push(u);
        false
    }

    /// Registers multiple vertices in order
    pub fn add_vertices<I>(&mut self, vertices: I)
    where
        I: IntoIterator<Item = V>,
    {
        for u in vertices {
            self.add_vertex(u);
        }
    }

    /// Adds the directed edge `(u, v)` without a weight
    pub fn add_edge(&mut self, u: V, v: V) {
        self.push_edge(u, v, None);
    }

    /// Adds the directed edge `(u, v)` with weight `w`
    pub fn add_weighted_edge(&mut self, u: V, v: V, w: f64) {
        self.push_edge(u, v, Some(w));
    }

    /// Adds the edges `(u, v)` and `(v, u)` without weights
    pub fn add_undirected_edge(&mut self, u: V, v: V) {
        self.push_edge(u.clone(), v.clone(), None);
        if u != v {
            self.push_edge(v, u, None);
        }
    }

    /// Adds the edges `(u, v)` and `(v, u)`, both with weight `w`
    pub fn add_undirected_weighted_edge(&mut self, u: V, v: V, w: f64) {
        self.push_edge(u.clone(), v.clone(), Some(w));
        if u != v {
            self.push_edge(v, u, Some(w));
        }
    }

    /// Adds `(u, v)` and, in undirected mode, also `(v, u)`
    pub fn connect(&mut self, u: V, v: V) {
        if self.undirected {
            self.add_undirected_edge(u, v);
        } else {
            self.add_edge(u, v);
        }
    }

    /// Number of vertices registered so far
    pub fn number_of_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Number of directed edges added so far
    pub fn number_of_edges(&self) -> usize {
        self.edges.len()
    }

    /// Freezes the builder into a [`Graph`].
    /// The graph is weighted iff at least one edge was added with a weight.
    ///
    /// # Errors
    /// Fails with [`GraphError::MissingWeight`] if only some edges carry weights.
    pub fn build(self) -> Result<Graph<V>> {
        if self.weights.iter().all(Option::is_none) {
            return Graph::new(self.vertices, self.edges);
        }

        if let Some((Edge(u, v), _)) = self
            .edges
            .iter()
            .zip(&self.weights)
            .find(|(_, w)| w.is_none())
        {
            return Err(GraphError::missing_weight(u, v));
        }

        let weights = self.weights.into_iter().flatten().collect_vec();
        Graph::with_weights(self.vertices, self.edges, weights)
    }

    fn push_edge(&mut self, u: V, v: V, w: Option<f64>) {
        self.add_vertex(u.clone());
        self.add_vertex(v.clone());
        self.edges.push(Edge(u, v));
        self.weights.push(w);
    }
}
