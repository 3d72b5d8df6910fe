use std::ops::Range;

use itertools::Itertools;

use crate::*;

/// Provides getters pertaining to the number of people in a graph
pub trait GraphNodeOrder {
    /// Returns the number of people in the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of people as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over all valid positions.
    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices_range()
    }

    /// Returns the range of valid positions.
    /// In contrast to self.vertices(), the range does not borrow self and hence may be used
    /// where additional mutable references of self are needed
    fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns *true* if `u` is a valid position, i.e. `u < n`
    fn contains_node(&self, u: Node) -> bool {
        u < self.number_of_nodes()
    }

    /// Returns empty bitset to track a subset of people
    fn vertex_bitset_unset(&self) -> NodeBitSet {
        NodeBitSet::new()
    }

    /// Returns *true* if the graph has no people (and thus no friendships)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Provides getters pertaining to the number of friendships of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of (undirected) friendships of the graph
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no friendships
    fn is_singleton_graph(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns an iterator over the friends of a given person in neighborhood order,
    /// i.e. the most recently added friendship first.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns the number of friends of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns the friends of `u` as a NodeBitSet
    /// ** Panics if `u >= n` **
    fn neighbors_of_as_bitset(&self, u: Node) -> NodeBitSet {
        self.neighbors_of(u).collect()
    }

    /// Returns an iterator over edges of a given person.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    /// ** Panics if `u >= n` **
    fn edges_of(&self, u: Node, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.neighbors_of(u)
            .map(move |v| Edge(u, v))
            .filter(move |e| !only_normalized || e.is_normalized())
    }

    /// Returns an iterator over edges of a given person in sorted order.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    /// ** Panics if `u >= n` **
    fn ordered_edges_of(&self, u: Node, only_normalized: bool) -> impl Iterator<Item = Edge> {
        self.edges_of(u, only_normalized).sorted()
    }

    /// Returns an iterator over all edges in the graph.
    /// If `only_normalized`, then every friendship is reported once as `(u, v)` with `u < v`.
    fn edges(&self, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.vertices_range()
            .flat_map(move |u| self.edges_of(u, only_normalized))
    }

    /// Returns an iterator over all edges in the graph in sorted order.
    /// If `only_normalized`, then every friendship is reported once as `(u, v)` with `u < v`.
    fn ordered_edges(&self, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.vertices_range()
            .flat_map(move |u| self.ordered_edges_of(u, only_normalized))
    }
}

/// Trait to test existence of friendships in a graph.
pub trait AdjacencyTest: GraphNodeOrder {
    /// Returns *true* if the friendship {u,v} exists in the graph.
    /// ** Panics if `u >= n` **
    fn has_edge(&self, u: Node, v: Node) -> bool;

    /// Allows multiple friendship-queries for a single person
    fn has_neighbors<const N: usize>(&self, u: Node, neighbors: [Node; N]) -> [bool; N] {
        neighbors.map(|v| self.has_edge(u, v))
    }
}

/// Access to the display names attached to positions
pub trait NamedVertices: GraphNodeOrder {
    /// Returns the name of the person at position `u` or `None` if `u >= n`
    fn name_of(&self, u: Node) -> Option<&str>;

    /// Returns the position of the person with exactly this name.
    /// Linear scan; the lowest matching position wins.
    fn find_by_name(&self, name: &str) -> Option<Node> {
        self.vertices().find(|&u| self.name_of(u) == Some(name))
    }

    /// Returns an iterator over `(position, name)` in position order
    fn people(&self) -> impl Iterator<Item = (Node, &str)> + '_ {
        self.vertices()
            .filter_map(move |u| self.name_of(u).map(|name| (u, name)))
    }
}
