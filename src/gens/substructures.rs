/*!
# Substructure Generators

Adds common motifs (**paths**, **cycles**, **cliques**) to a [`GraphBuilder`]. Whether the
motif is directed or undirected follows the mode of the builder.

# Example

```rust
use adjgraphs::{prelude::*, gens::*};

let mut b = GraphBuilder::new();
b.connect_path([0, 1, 2]);
b.connect_cycle([2, 3, 4]);

let g = b.build().unwrap();
assert_eq!(
    g.edge_list(),
    &[Edge(0, 1), Edge(1, 2), Edge(2, 3), Edge(3, 4), Edge(4, 2)]
);
```
*/

use itertools::Itertools;

use super::*;

/// Trait for creating additional **substructures** (paths, cycles, cliques)
/// inside a graph under construction.
pub trait GeneratorSubstructures<V> {
    /// Connects the given vertices in order with a **simple path**.
    ///
    /// # Example
    /// ```rust
    /// use adjgraphs::{prelude::*, gens::*};
    ///
    /// let mut b = GraphBuilder::new_undirected();
    /// b.connect_path([0, 1, 2, 3]);
    ///
    /// let g = b.build().unwrap();
    /// assert!(g.has_edge(&1, &0));
    /// assert!(g.has_edge(&2, &3));
    /// ```
    fn connect_path<P>(&mut self, vertices_on_path: P)
    where
        P: IntoIterator<Item = V>;

    /// Connects the given vertices with a **cycle**: consecutive vertices are connected and
    /// the last vertex is connected back to the first.
    fn connect_cycle<C>(&mut self, vertices_in_cycle: C)
    where
        C: IntoIterator<Item = V>;

    /// Connects all given vertices into a **clique**.
    /// If `with_loops` is `true`, each vertex also gets a self-loop.
    fn connect_clique<C>(&mut self, vertices: C, with_loops: bool)
    where
        C: IntoIterator<Item = V>;
}

impl<V: Vertex> GeneratorSubstructures<V> for GraphBuilder<V> {
    fn connect_path<P>(&mut self, vertices_on_path: P)
    where
        P: IntoIterator<Item = V>,
    {
        let mut iter = vertices_on_path.into_iter();
        if let Some(first) = iter.next() {
            self.add_vertex(first.clone());
            let mut prev = first;
            for cur in iter {
                self.connect(prev, cur.clone());
                prev = cur;
            }
        }
    }

    fn connect_cycle<C>(&mut self, vertices_in_cycle: C)
    where
        C: IntoIterator<Item = V>,
    {
        let mut iter = vertices_in_cycle.into_iter();
        if let Some(first) = iter.next() {
            let mut prev = first.clone();
            for cur in iter {
                self.connect(prev, cur.clone());
                prev = cur;
            }

            self.connect(prev, first);
        }
    }

    fn connect_clique<C>(&mut self, vertices: C, with_loops: bool)
    where
        C: IntoIterator<Item = V>,
    {
        let vertices = vertices.into_iter().unique().collect_vec();
        self.add_vertices(vertices.iter().cloned());

        if with_loops {
            for u in &vertices {
                self.add_edge(u.clone(), u.clone());
            }
        }

        if self.is_undirected() {
            for (u, v) in vertices.iter().tuple_combinations() {
                self.connect(u.clone(), v.clone());
            }
        } else {
            for (u, v) in vertices.iter().cartesian_product(&vertices) {
                if u != v {
                    self.add_edge(u.clone(), v.clone());
                }
            }
        }
    }
}
