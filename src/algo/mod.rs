/*!
# Graph Algorithms

Traversals over any [`AdjacencyList`](crate::ops::AdjacencyList). All algorithms are re-exported
at the top level of this module, so you can simply do:
```rust
use friendgraph::algo::*;
```
If possible, algorithms are provided as **iterators**, making it easy to consume results lazily.
*/

mod traversal;

use crate::prelude::*;

pub use traversal::*;
