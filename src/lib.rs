/*!
`friendgraph` models a social network as an **undirected**, **unweighted** graph of people
(vertices) and friendships (edges), held entirely in memory.

# Representation

We represent **people** by their *position*, a `u32` in the range `0..n` where `n` is the number
of people in the graph. Every person additionally carries a display name that is unique within
the graph (case-sensitive). Positions are not stable: removing the person at position `k` moves
every later person down by one (*compaction*), so positions must be looked up again by name after
any removal.

For **friendships**, we use a simple tuple-struct `Edge(Node, Node)`. `Edge(u, v)` and
`Edge(v, u)` denote the same friendship; there are no self-friendships and no duplicates.

### Available Representations

See the [`repr`] module:

- [`FriendGraph`](crate::repr::FriendGraph): friends stored in a `Vec`,
- [`SparseFriendGraph`](crate::repr::SparseFriendGraph): friends stored inline in a `SmallVec`.

The friend lists are the only source of truth. Adjacency and incidence matrices are derived on
every request and never cached.

# Design

All operations either succeed or fail with exactly one [`GraphError`](crate::error::GraphError)
without touching the graph. Traversals follow friendships in neighborhood order: the most recently
added friendship first.

Generators and writers are configurable structs using the *Setter* pattern.

# Usage

- [`prelude`] includes positions, edges, errors, configuration, the graph operation traits and
  the graph representations,
- [`algo`] includes traversal traits implemented on graphs (`graph.bfs(start)`, `graph.dfs(start)`,
  shortest paths, depths),
- [`gens`] includes the sample network and a random friendship generator,
- [`io`] includes a writer for the DOT language of GraphViz.

In most use-cases, `use friendgraph::{prelude::*, algo::*};` suffices for your needs.

```
use friendgraph::prelude::*;

let mut graph = FriendGraph::new();
for name in ["Alice", "Bob", "Carol"] {
    graph.add_vertex(name).unwrap();
}
graph.add_friendship("Alice", "Bob").unwrap();
graph.add_friendship("Alice", "Carol").unwrap();

assert_eq!(graph.breadth_first_from("Alice").unwrap(), vec![0, 2, 1]);

graph.remove_person("Alice").unwrap();
assert_eq!(graph.find_by_name("Carol"), Some(1));
assert_eq!(graph.number_of_edges(), 0);
```
*/

pub mod algo;
pub mod config;
pub mod edge;
pub mod error;
pub mod gens;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
pub(crate) mod testing;

pub use config::*;
pub use edge::*;
pub use node::*;

/// `friendgraph::prelude` includes definitions for positions and edges, errors, configuration,
/// all basic graph operation traits as well as all implemented representations.
pub mod prelude {
    pub use super::{
        config::*,
        edge::*,
        error::{GraphError, VertexRef},
        node::*,
        ops::*,
        repr::*,
    };
}
