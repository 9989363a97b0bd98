/*!
# Representation

This module holds the graph storage:
- [`Collection`]: a vertex or edge collection tagged with its cardinality (finite, countably
  infinite, uncountably infinite),
- [`Adjacency`] and [`build_adjacency`]: the derived vertex -> neighbors mapping,
- [`Graph`]: the frozen graph all algorithms operate on.
*/

use std::{fmt::Debug, sync::Arc};

use crate::prelude::*;

mod adjacency;
mod graph;

pub use adjacency::*;
pub use graph::*;

/// Result of counting a (possibly infinite) collection
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Cardinality {
    /// A materialized collection with the given number of entries
    Finite(usize),
    /// An enumerable but endless collection
    CountablyInfinite,
    /// A collection that cannot be enumerated at all
    UncountablyInfinite,
}

impl Cardinality {
    /// Returns the count if the collection is finite
    pub fn finite(self) -> Option<usize> {
        match self {
            Cardinality::Finite(n) => Some(n),
            _ => None,
        }
    }

    /// Returns *true* if the collection is finite
    pub fn is_finite(self) -> bool {
        matches!(self, Cardinality::Finite(_))
    }
}

impl std::fmt::Display for Cardinality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cardinality::Finite(n) => write!(f, "{n}"),
            Cardinality::CountablyInfinite => write!(f, "countably infinite"),
            Cardinality::UncountablyInfinite => write!(f, "uncountably infinite"),
        }
    }
}

impl PartialEq<usize> for Cardinality {
    fn eq(&self, other: &usize) -> bool {
        *self == Cardinality::Finite(*other)
    }
}

/// An endless sequence given by a function from position to element.
///
/// Cloning is cheap as the generating function is shared.
pub struct Enumeration<T>(Arc<dyn Fn(usize) -> T + Send + Sync>);

impl<T> Enumeration<T> {
    /// Wraps a generating function `i -> i-th element`
    pub fn new<F>(generator: F) -> Self
    where
        F: Fn(usize) -> T + Send + Sync + 'static,
    {
        Self(Arc::new(generator))
    }

    /// Returns the element at position `i`
    pub fn nth(&self, i: usize) -> T {
        (self.0)(i)
    }

    /// Returns an (endless) iterator over the enumeration
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        (0..).map(move |i| self.nth(i))
    }
}

impl<T> Clone for Enumeration<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T> Debug for Enumeration<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Enumeration(..)")
    }
}

/// A vertex or edge collection with an explicit cardinality tag.
///
/// Only [`Collection::Finite`] is materialized; algorithms see the other variants as empty.
#[derive(Debug, Clone)]
pub enum Collection<T> {
    /// An explicit, ordered list
    Finite(Vec<T>),
    /// An endless enumeration
    Countable(Enumeration<T>),
    /// A marker for collections that cannot be enumerated
    Uncountable,
}

impl<T> Collection<T> {
    /// Creates a countably infinite collection from a generating function
    pub fn countable<F>(generator: F) -> Self
    where
        F: Fn(usize) -> T + Send + Sync + 'static,
    {
        Collection::Countable(Enumeration::new(generator))
    }

    /// Classifies the collection
    pub fn cardinality(&self) -> Cardinality {
        match self {
            Collection::Finite(items) => Cardinality::Finite(items.len()),
            Collection::Countable(_) => Cardinality::CountablyInfinite,
            Collection::Uncountable => Cardinality::UncountablyInfinite,
        }
    }

    /// Returns *true* if the collection is materialized
    pub fn is_finite(&self) -> bool {
        matches!(self, Collection::Finite(_))
    }

    /// Returns the materialized entries; empty for infinite collections
    pub fn as_slice(&self) -> &[T] {
        match self {
            Collection::Finite(items) => items,
            _ => &[],
        }
    }
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Collection::Finite(Vec::new())
    }
}

impl<T> From<Vec<T>> for Collection<T> {
    fn from(value: Vec<T>) -> Self {
        Collection::Finite(value)
    }
}

impl<T> FromIterator<T> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Collection::Finite(iter.into_iter().collect())
    }
}
