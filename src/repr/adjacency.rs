use fxhash::FxHashMap;
use smallvec::SmallVec;

use super::*;

/// Neighbor list of a single vertex. Most graphs handled here are sparse, so a handful of
/// neighbors are kept inline.
pub type Neighborhood<V> = SmallVec<[V; 4]>;

/// Derived adjacency-list mapping: vertex -> ordered sequence of distinct out-neighbors.
///
/// Vertices are kept in registration order, neighbors in first-seen order. Parallel edges
/// collapse into a single neighbor entry; self-loops are kept.
#[derive(Debug, Clone)]
pub struct Adjacency<V: Vertex> {
    order: Vec<V>,
    index: FxHashMap<V, usize>,
    neighborhoods: Vec<Neighborhood<V>>,
}

impl<V: Vertex> Default for Adjacency<V> {
    fn default() -> Self {
        Self {
            order: Vec::new(),
            index: FxHashMap::default(),
            neighborhoods: Vec::new(),
        }
    }
}

impl<V: Vertex> Adjacency<V> {
    /// Creates an empty adjacency list
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a vertex with an empty neighborhood.
    /// Returns *true* if the vertex was registered before (its neighborhood is left untouched).
    pub fn register(&mut self, u: V) -> bool {
        let known = self.contains(&u);
        self.position_or_register(u);
        known
    }

    /// Returns the position of `u`, registering it first if necessary
    fn position_or_register(&mut self, u: V) -> usize {
        if let Some(pos) = self.index_of(&u) {
            return pos;
        }

        let pos = self.order.len();
        self.index.insert(u.clone(), pos);
        self.order.push(u);
        self.neighborhoods.push(Neighborhood::new());
        pos
    }

    /// Appends `v` to the neighborhood at position `pos` unless already present.
    /// Returns *true* if `v` was present before.
    fn push_neighbor_at(&mut self, pos: usize, v: V) -> bool {
        let neighborhood = &mut self.neighborhoods[pos];
        if neighborhood.contains(&v) {
            return true;
        }
        neighborhood.push(v);
        false
    }

    /// Appends `v` to the neighborhood of `u` unless it is already present.
    /// Returns *true* if `v` was a neighbor of `u` before.
    ///
    /// # Errors
    /// Fails with [`GraphError::UnknownVertex`] if `u` is not registered.
    pub fn try_add_neighbor(&mut self, u: &V, v: V) -> Result<bool> {
        let pos = self.index_of(u).ok_or_else(|| GraphError::unknown_vertex(u))?;
        Ok(self.push_neighbor_at(pos, v))
    }

    /// Returns the neighbors of `u` or `None` if `u` is not registered
    pub fn neighbors_of(&self, u: &V) -> Option<&[V]> {
        self.index_of(u).map(|pos| self.neighborhoods[pos].as_slice())
    }

    /// Returns the registration position of `u`
    pub fn index_of(&self, u: &V) -> Option<usize> {
        self.index.get(u).copied()
    }

    /// Returns the vertex registered at position `pos`
    pub fn vertex_at(&self, pos: usize) -> Option<&V> {
        self.order.get(pos)
    }

    /// Returns *true* if `u` is registered
    pub fn contains(&self, u: &V) -> bool {
        self.index.contains_key(u)
    }

    /// Iterates over all registered vertices in registration order
    pub fn vertices(&self) -> std::slice::Iter<'_, V> {
        self.order.iter()
    }

    /// Iterates over `(vertex, neighbors)` in registration order
    pub fn iter(&self) -> impl Iterator<Item = (&V, &[V])> + '_ {
        self.order
            .iter()
            .zip(self.neighborhoods.iter().map(|n| n.as_slice()))
    }

    /// Number of registered vertices
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns *true* if no vertex is registered
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Number of (deduplicated) directed adjacencies
    pub fn number_of_arcs(&self) -> usize {
        self.neighborhoods.iter().map(|n| n.len()).sum()
    }
}

/// Two adjacency lists are equal if they map the same vertices to the same neighbor sequences.
/// The order in which vertices were registered is irrelevant; the order of neighbors is not.
impl<V: Vertex> PartialEq for Adjacency<V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(u, nbs)| other.neighbors_of(u) == Some(nbs))
    }
}

impl<V: Vertex> Eq for Adjacency<V> {}

/// Builds the adjacency list of a graph.
///
/// Every vertex gets an empty neighborhood first; then each edge `(u, v)` appends `v` to the
/// neighborhood of `u` unless already present.
///
/// # Errors
/// Fails with [`GraphError::InconsistentEdge`] if an edge references a vertex outside of
/// `vertices`.
///
/// # Examples
/// ```
/// use adjgraphs::prelude::*;
///
/// let adj = build_adjacency([0, 1, 2], [(0, 1), (0, 2), (0, 1), (2, 2)]).unwrap();
/// assert_eq!(adj.neighbors_of(&0), Some(&[1, 2][..]));
/// assert_eq!(adj.neighbors_of(&1), Some(&[][..]));
/// assert_eq!(adj.neighbors_of(&2), Some(&[2][..]));
///
/// assert!(build_adjacency([0, 1], [(0, 5)]).is_err());
/// ```
pub fn build_adjacency<V, I, E>(vertices: I, edges: E) -> Result<Adjacency<V>>
where
    V: Vertex,
    I: IntoIterator<Item = V>,
    E: IntoIterator,
    E::Item: Into<Edge<V>>,
{
    let mut adjacency = Adjacency::new();
    for u in vertices {
        adjacency.register(u);
    }

    for edge in edges {
        let Edge(u, v) = edge.into();
        if !adjacency.contains(&u) {
            return Err(GraphError::inconsistent_edge(&u, &v, &u));
        }
        if !adjacency.contains(&v) {
            return Err(GraphError::inconsistent_edge(&u, &v, &v));
        }
        adjacency.try_add_neighbor(&u, v)?;
    }

    Ok(adjacency)
}

/// Builds an adjacency list for graphs whose vertex set is not materialized: vertices are
/// registered on their first appearance as an edge endpoint.
pub(crate) fn build_adjacency_registering<'a, V, E>(edges: E) -> Adjacency<V>
where
    V: Vertex + 'a,
    E: IntoIterator<Item = &'a Edge<V>>,
{
    let mut adjacency = Adjacency::new();
    for Edge(u, v) in edges {
        let pos = adjacency.position_or_register(u.clone());
        adjacency.position_or_register(v.clone());
        adjacency.push_neighbor_at(pos, v.clone());
    }
    adjacency
}
