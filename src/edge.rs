use std::fmt::{Debug, Display};

/// An edge is defined by two endpoints and is always directed from `.0` to `.1`.
/// An undirected edge is stored as the two entries `Edge(u, v)` and `Edge(v, u)`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge<V>(pub V, pub V);

impl<V: Debug> Display for Edge<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:?},{:?})", self.0, self.1)
    }
}

impl<V: Debug> Debug for Edge<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl<V> Edge<V> {
    /// Returns the tail of the edge
    pub fn source(&self) -> &V {
        &self.0
    }

    /// Returns the head of the edge
    pub fn target(&self) -> &V {
        &self.1
    }
}

impl<V: PartialEq> Edge<V> {
    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }
}

impl<V: Clone> Edge<V> {
    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        Edge(self.1.clone(), self.0.clone())
    }
}

impl<V> From<(V, V)> for Edge<V> {
    fn from(value: (V, V)) -> Self {
        Edge(value.0, value.1)
    }
}

impl<V: Clone> From<&(V, V)> for Edge<V> {
    fn from(value: &(V, V)) -> Self {
        Edge(value.0.clone(), value.1.clone())
    }
}

impl<V: Clone> From<(&V, &V)> for Edge<V> {
    fn from(value: (&V, &V)) -> Self {
        Edge(value.0.clone(), value.1.clone())
    }
}

impl<V: Clone> From<&Edge<V>> for Edge<V> {
    fn from(value: &Edge<V>) -> Self {
        value.clone()
    }
}
