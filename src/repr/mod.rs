/*!
# Graph Representations

The engine is [`SocialGraph`], parameterized by the [`Neighborhood`] type that stores the friends
of every person:

- [`FriendGraph`] uses [`ArrNeighborhood`] (`Vec<Node>`),
- [`SparseFriendGraph`] uses [`SparseNeighborhood`] (`SmallVec<[Node; 8]>`), keeping small
  friend lists inline.

Both behave identically; they only differ in memory layout.

Derived read-only views ([`AdjacencyMatrix`], [`IncidenceMatrix`], [`AdjacencyEntry`]) live in
[`views`].
*/

use crate::{error::*, ops::*, *};

mod neighborhood;
mod social;

pub mod views;

pub use neighborhood::*;
pub use social::*;
pub use views::{AdjacencyEntry, AdjacencyMatrix, IncidenceMatrix};
