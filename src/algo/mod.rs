/*!
# Graph Algorithms

This module provides the algorithms operating on a frozen [`Graph`](crate::repr::Graph).
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use adjgraphs::algo::*;
```
and gain access to path search, shortest paths, connectivity, bipartiteness and isomorphism.

Algorithms are implemented as traits on any [`AdjacencyList`]; those taking options are also
available as configurable structs ([`PathSearch`], [`IsomorphismTest`]).
*/

mod bipartite;
mod connectivity;
mod isomorphism;
mod shortest_path;
mod traversal;

use crate::prelude::*;

pub use bipartite::*;
pub use connectivity::*;
pub use isomorphism::*;
pub use shortest_path::*;
pub use traversal::*;
