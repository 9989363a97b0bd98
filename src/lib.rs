/*!
`adjgraphs` is a small library of classic graph algorithms on **labelled** adjacency-list graphs.

# Representation

A [`Graph`](crate::repr::Graph) is built from
- a **vertex collection**: any labels implementing [`Vertex`](crate::vertex::Vertex)
  (`u32`, `&str`, `String`, `char`, ...),
- an **edge collection**: directed edges `Edge(u, v)`,
- optional **edge weights** (`f64`).

The adjacency list is derived once at construction and the graph is immutable afterwards.
Vertex and edge collections may also be *infinite* (lazily enumerable or uncountable); such
graphs still report their [`Cardinality`](crate::repr::Cardinality) correctly.

### Directed vs Undirected

Edges are always directed. An undirected edge is stored as the pair `Edge(u, v)`, `Edge(v, u)`;
[`GraphBuilder`](crate::gens::GraphBuilder) can insert both for you.

# Design

Algorithms taking options are provided as configurable structs that one can alter using the
*Builder* / *Setter* pattern before running them on a graph. The commonly used functionality is
also implemented via traits on the graph itself:

```rust
use adjgraphs::{prelude::*, algo::*};

let g = Graph::new(
    ["a", "b", "c", "d"],
    [("a", "b"), ("b", "c"), ("c", "a"), ("a", "d")],
).unwrap();

assert_eq!(g.bfs(&"b", &"d").unwrap().path(), Some(&["b", "c", "a", "d"][..]));
assert_eq!(g.bellman_ford(&"a").unwrap().distance_to(&"c"), 2.0);
assert!(g.is_connected());
```

# Usage

- [`prelude`] includes vertices, edges, errors, basic graph operations and the graph itself,
- [`algo`] includes path search (BFS/DFS), Bellman-Ford, connected components,
  bipartiteness and isomorphism tests,
- [`gens`] includes a builder and substructure generators (paths, cycles, cliques).

In most use-cases, `use adjgraphs::{prelude::*, algo::*};` suffices.

# Logging

The crate emits diagnostics through the [`log`](https://crates.io/crates/log) facade
(`debug!` for search summaries, `warn!` for negative cycles, `trace!` for single steps).
Install any logger, e.g. `env_logger`, to see them.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod ops;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;
pub mod vertex;

/// `adjgraphs::prelude` includes definitions for vertices and edges, errors, all basic graph
/// operation traits as well as the graph representation.
pub mod prelude {
    pub use super::{edge::*, error::*, ops::*, repr::*, vertex::*};
}
