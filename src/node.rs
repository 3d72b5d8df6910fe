/*!
# Node Representation

A person in the network is addressed by its *position*: a zero-based index into the current
ordering of people. We choose `Node = u32` as the network is bounded to a handful of people and
positions are cheap to copy, compare and store in neighborhoods.

Positions are **not** stable identifiers. Removing the person at position `k` shifts every person
after `k` down by one, so a `Node` held across a removal must be looked up again by name.
*/

use roaring::RoaringBitmap;

/// Nodes are positions from `0` to `n - 1`
pub type Node = u32;

/// Node-Value that is never a valid position
pub const INVALID_NODE: Node = Node::MAX;

/// Number of people in a graph
pub type NumNodes = Node;

/// BitSet over Nodes, used for visited-states and matrix rows
pub type NodeBitSet = RoaringBitmap;
