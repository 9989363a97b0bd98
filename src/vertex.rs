/*!
# Vertex Representation

Vertices are arbitrary labels: integers, strings or any other value that can be hashed,
compared for equality and cloned. Unlike dense `0..n` numberings, labels are kept as given
and every structure in this crate is keyed by them directly.
*/

use std::{fmt::Debug, hash::Hash};

use stream_bitset::bitset::BitSetImpl;

/// Anything usable as a vertex label.
///
/// This is a blanket trait, so there is nothing to implement: `u32`, `i64`, `&str`, `String`,
/// `char`, tuples of those, ... all qualify.
pub trait Vertex: Clone + Eq + Hash + Debug {}

impl<T> Vertex for T where T: Clone + Eq + Hash + Debug {}

/// Position of a vertex in the registration order of a graph
pub type VertexIndex = u32;

/// BitSet over vertex positions
pub type VertexBitSet = BitSetImpl<VertexIndex>;
