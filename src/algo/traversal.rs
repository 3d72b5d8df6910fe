/*!
Graph traversal algorithms and traversal-derived utilities.

This module provides:
- Lazy traversal iterators: breadth-first (with and without predecessor tracking)
  and depth-first pre-order.
- Abstractions (`TraversalTree`, `RankFromOrder`) that turn traversals into
  parent arrays, depths ("degrees of separation") or rankings.
- A `Traversal` trait that exposes the traversals directly as methods on graphs.

Every traversal visits each person reachable from the start exactly once,
follows friendships in neighborhood order (most recent friendship first) and
never visits people that are unreachable. Cycles are harmless as people are
marked as visited.

The iterators assume a valid start position; [`SocialGraph::breadth_first`](crate::repr::SocialGraph::breadth_first)
and [`SocialGraph::depth_first`](crate::repr::SocialGraph::depth_first) validate it first.
*/

use super::*;
use std::{collections::VecDeque, marker::PhantomData};

/// Abstraction for items yielded by a traversal iterator.
///
/// A `SequencedItem` encodes both the **node currently visited**
/// and an **optional predecessor** that represents its parent
/// in the traversal tree.
///
/// Two implementations are provided:
/// - [`Node`]: stores only the node (no predecessor information).
/// - [`PredecessorOfNode`]: stores `(predecessor, node)` pairs.
pub trait SequencedItem: Clone + Copy {
    /// Constructs a new item with a predecessor.
    fn new_with_predecessor(predecessor: Node, item: Node) -> Self;

    /// Constructs a new item without a predecessor (e.g. the start node).
    fn new_without_predecessor(item: Node) -> Self;

    /// Returns the node represented by this item.
    fn item(&self) -> Node;

    /// Returns the predecessor of this node, if any.
    fn predecessor(&self) -> Option<Node>;

    /// Returns a pair `(predecessor, item)` where the predecessor
    /// may be `None` if not tracked.
    fn predecessor_with_item(&self) -> (Option<Node>, Node) {
        (self.predecessor(), self.item())
    }
}

impl SequencedItem for Node {
    fn new_with_predecessor(_: Node, item: Node) -> Self {
        item
    }
    fn new_without_predecessor(item: Node) -> Self {
        item
    }
    fn item(&self) -> Node {
        *self
    }
    fn predecessor(&self) -> Option<Node> {
        None
    }
}

/// Compact representation of `(predecessor, node)` used for
/// traversals with parent tracking.
///
/// Internally, the absence of a predecessor is encoded by
/// setting both tuple entries to the same node value.
pub type PredecessorOfNode = (Node, Node);

impl SequencedItem for PredecessorOfNode {
    fn new_with_predecessor(predecessor: Node, item: Node) -> Self {
        (predecessor, item)
    }
    fn new_without_predecessor(item: Node) -> Self {
        (item, item)
    }
    fn item(&self) -> Node {
        self.1
    }
    fn predecessor(&self) -> Option<Node> {
        if self.0 == self.1 { None } else { Some(self.0) }
    }
}

/// Breadth-first traversal iterator.
///
/// Nodes are marked as visited when they are enqueued and yielded when they are dequeued.
/// Parameterized by the type of items yielded (either `Node` or `PredecessorOfNode`).
pub struct TraversalSearch<'a, G, I>
where
    G: AdjacencyList,
    I: SequencedItem,
{
    graph: &'a G,
    visited: NodeBitSet,
    queue: VecDeque<I>,
    _item: PhantomData<I>,
}

/// A BFS traversal iterator over the graph, visiting nodes in
/// breadth-first order from a given starting node.
pub type BFS<'a, G> = TraversalSearch<'a, G, Node>;

/// A BFS traversal iterator that records predecessor information,
/// producing a spanning tree of the search.
pub type BFSWithPredecessor<'a, G> = TraversalSearch<'a, G, PredecessorOfNode>;

impl<'a, G, I> TraversalSearch<'a, G, I>
where
    G: AdjacencyList,
    I: SequencedItem,
{
    /// Creates a new traversal iterator starting from `start`.
    pub fn new(graph: &'a G, start: Node) -> Self {
        let mut visited = graph.vertex_bitset_unset();
        visited.insert(start);
        Self {
            graph,
            visited,
            queue: VecDeque::from(vec![I::new_without_predecessor(start)]),
            _item: PhantomData,
        }
    }

    /// Returns the graph being traversed.
    pub fn graph_ref(&self) -> &'a G {
        self.graph
    }
}

impl<G, I> Iterator for TraversalSearch<'_, G, I>
where
    G: AdjacencyList,
    I: SequencedItem,
{
    type Item = I;

    fn next(&mut self) -> Option<Self::Item> {
        let popped = self.queue.pop_front()?;
        let u = popped.item();

        for v in self.graph.neighbors_of(u) {
            if self.visited.insert(v) {
                self.queue.push_back(I::new_with_predecessor(u, v));
            }
        }

        Some(popped)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (
            self.queue.len(),
            Some(self.queue.len() + self.graph.len() - self.visited.len() as usize),
        )
    }
}

/// Depth-first pre-order traversal iterator.
///
/// Yields a node, then descends into its first unvisited neighbor before any of its siblings,
/// exactly like the recursive formulation. Neighbors are pushed in reverse and a node is only
/// marked as visited when it is popped, so a node pushed several times is yielded once, at its
/// earliest pre-order position.
pub struct DFS<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    visited: NodeBitSet,
    stack: Vec<Node>,
    buffer: Vec<Node>,
}

impl<'a, G> DFS<'a, G>
where
    G: AdjacencyList,
{
    /// Creates a new depth-first iterator starting from `start`.
    pub fn new(graph: &'a G, start: Node) -> Self {
        Self {
            graph,
            visited: graph.vertex_bitset_unset(),
            stack: vec![start],
            buffer: Vec::new(),
        }
    }

    /// Returns the graph being traversed.
    pub fn graph_ref(&self) -> &'a G {
        self.graph
    }
}

impl<G> Iterator for DFS<'_, G>
where
    G: AdjacencyList,
{
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let u = self.stack.pop()?;
            if !self.visited.insert(u) {
                continue;
            }

            let visited = &self.visited;
            self.buffer.clear();
            self.buffer
                .extend(self.graph.neighbors_of(u).filter(|&v| !visited.contains(v)));
            self.stack.extend(self.buffer.drain(..).rev());

            return Some(u);
        }
    }
}

/// Extension trait for traversal iterators that allows computing a ranking (iteration order)
/// of the nodes in the graph.
pub trait RankFromOrder<'a, G>: Iterator<Item = Node> + Sized
where
    G: 'a + AdjacencyList,
{
    /// Returns the graph being traversed.
    fn graph(&self) -> &'a G;

    /// Consumes the traversal iterator and produces a vector `ranking` where
    /// `ranking[u]` gives the position (rank, starting at 0) at which node `u`
    /// was visited.
    ///
    /// - Returns `Some(ranking)` if **all nodes of the graph** were visited.
    /// - Returns `None` if the iterator did not cover every node.
    ///
    /// # Panics
    /// Panics if the iterator yields the same node more than once.
    fn ranking(mut self) -> Option<Vec<Node>> {
        let graph = self.graph();
        let mut ranking = vec![INVALID_NODE; graph.len()];
        let mut rank: Node = 0;

        for u in self.by_ref() {
            assert_eq!(ranking[u as usize], INVALID_NODE);
            ranking[u as usize] = rank;
            rank += 1;
        }

        (rank == graph.number_of_nodes()).then_some(ranking)
    }
}

impl<'a, G> RankFromOrder<'a, G> for BFS<'a, G>
where
    G: AdjacencyList,
{
    fn graph(&self) -> &'a G {
        self.graph_ref()
    }
}

impl<'a, G> RankFromOrder<'a, G> for DFS<'a, G>
where
    G: AdjacencyList,
{
    fn graph(&self) -> &'a G {
        self.graph_ref()
    }
}

/// Extension trait for traversal iterators that return `PredecessorOfNode`,
/// enabling extraction of the implied spanning tree structure (parents, depths).
pub trait TraversalTree<'a, G>: Iterator<Item = PredecessorOfNode> + Sized
where
    G: 'a + AdjacencyList,
{
    /// Returns the graph being traversed.
    fn graph(&self) -> &'a G;

    /// Constructs a parent array of size `graph.len()` where each node is initially its own
    /// parent. Then records the predecessor of every visited node.
    fn parent_array(mut self) -> Vec<Node> {
        let mut tree: Vec<_> = self.graph().vertices_range().collect();
        for pred_with_item in self.by_ref() {
            if let Some(p) = pred_with_item.predecessor() {
                tree[pred_with_item.item() as usize] = p;
            }
        }
        tree
    }

    /// Computes the depth of each node in the traversal tree (start depth = 0).
    /// For a breadth-first search this is the number of friendships on a shortest chain.
    /// Unreachable nodes are `None`.
    fn depths(mut self) -> Vec<Option<NumNodes>> {
        let mut depths = vec![None; self.graph().len()];
        for pred_with_item in self.by_ref() {
            depths[pred_with_item.item() as usize] = match pred_with_item.predecessor() {
                None => Some(0),
                Some(p) => depths[p as usize].map(|d: NumNodes| d + 1),
            };
        }
        depths
    }
}

impl<'a, G> TraversalTree<'a, G> for BFSWithPredecessor<'a, G>
where
    G: AdjacencyList,
{
    fn graph(&self) -> &'a G {
        self.graph_ref()
    }
}

/// Provides convenient traversal methods (BFS, DFS, shortest paths)
pub trait Traversal: AdjacencyList + Sized {
    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **breadth-first search (BFS) order**.
    /// ** Panics if `start >= n` **
    ///
    /// # Examples
    /// ```
    /// use friendgraph::{prelude::*, algo::*};
    ///
    /// let g = FriendGraph::from_edges(["a", "b", "c"], [(0, 1), (0, 2)]).unwrap();
    ///
    /// let order: Vec<_> = g.bfs(0).collect();
    /// assert_eq!(order, vec![0, 2, 1]);
    /// ```
    fn bfs(&self, start: Node) -> BFS<'_, Self> {
        assert!(self.contains_node(start));
        BFS::new(self, start)
    }

    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **depth-first pre-order**.
    /// ** Panics if `start >= n` **
    ///
    /// # Examples
    /// ```
    /// use friendgraph::{prelude::*, algo::*};
    ///
    /// let g = FriendGraph::from_edges(["a", "b", "c"], [(0, 1), (1, 2)]).unwrap();
    ///
    /// let order: Vec<_> = g.dfs(2).collect();
    /// assert_eq!(order, vec![2, 1, 0]);
    /// ```
    fn dfs(&self, start: Node) -> DFS<'_, Self> {
        assert!(self.contains_node(start));
        DFS::new(self, start)
    }

    /// Returns a BFS iterator starting from `start` that additionally
    /// yields the predecessor relation (edges traversed).
    /// ** Panics if `start >= n` **
    fn bfs_with_predecessor(&self, start: Node) -> BFSWithPredecessor<'_, Self> {
        assert!(self.contains_node(start));
        BFSWithPredecessor::new(self, start)
    }

    /// Computes the **shortest path** from `start` to `end` using BFS.
    ///
    /// - Returns `Some(path)` if a path exists, where `path` is the sequence
    ///   of intermediate nodes (excluding `start` and `end`).
    /// - Returns `None` if no path exists.
    ///
    /// ** Panics if `start >= n` **
    ///
    /// # Examples
    /// ```
    /// use friendgraph::{prelude::*, algo::*};
    ///
    /// let g = FriendGraph::from_edges(["a", "b", "c"], [(0, 1), (1, 2)]).unwrap();
    ///
    /// assert_eq!(g.shortest_path(0, 2), Some(vec![1]));
    /// ```
    fn shortest_path(&self, start: Node, end: Node) -> Option<Vec<Node>> {
        if start == end {
            return self.contains_node(start).then(Vec::new);
        }

        let mut parent = vec![INVALID_NODE; self.len()];

        // `start` is yielded first and has no predecessor
        for item in self.bfs_with_predecessor(start).skip(1) {
            let (pred, u) = (item.0, item.1);
            parent[u as usize] = pred;

            if u == end {
                let mut path = Vec::new();
                let mut node = pred;
                while node != start {
                    path.push(node);
                    node = parent[node as usize];
                }
                path.reverse();
                return Some(path);
            }
        }

        None
    }
}

impl<G> Traversal for G where G: AdjacencyList + Sized {}
