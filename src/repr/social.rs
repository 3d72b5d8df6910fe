/*!
# Social Graph

[`SocialGraph`] is the graph engine: an ordered list of people, each owning a display name and a
[`Neighborhood`] of friends. The neighborhoods are the only source of truth; matrix views are
derived from them on demand (see [`views`](super::views)).

Positions are contiguous: removing a person compacts all later positions by one and renumbers
every neighborhood accordingly.

```
use friendgraph::prelude::*;

let mut graph = FriendGraph::new();
let alice = graph.add_vertex("Alice").unwrap();
let bob = graph.add_vertex("Bob").unwrap();
graph.add_edge(alice, bob).unwrap();

assert!(graph.has_edge(bob, alice));
assert_eq!(graph.find_by_name("Bob"), Some(1));
```
*/

use tracing::{debug, trace};

use super::*;
use crate::{algo::Traversal, testing::test_graph_ops};

/// A person: display name and friends
#[derive(Clone, Debug)]
struct Person<Nbs> {
    name: String,
    nbs: Nbs,
}

/// An undirected friendship graph with bounded capacity
#[derive(Clone, Debug)]
pub struct SocialGraph<Nbs: Neighborhood> {
    people: Vec<Person<Nbs>>,
    num_edges: NumEdges,
    config: GraphConfig,
}

/// Representation using an Adjacency-Array
pub type FriendGraph = SocialGraph<ArrNeighborhood>;

/// Representation using a sparse Adjacency-Array
pub type SparseFriendGraph = SocialGraph<SparseNeighborhood>;

impl<Nbs: Neighborhood> Default for SocialGraph<Nbs> {
    fn default() -> Self {
        Self::with_config(GraphConfig::default())
    }
}

impl<Nbs: Neighborhood> SocialGraph<Nbs> {
    /// Creates an empty graph holding at most [`DEFAULT_CAPACITY`] people
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph with the given settings
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            people: Vec::new(),
            num_edges: 0,
            config,
        }
    }

    /// Creates an empty graph holding at most `capacity` people
    /// ** Panics if `capacity == 0` **
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(GraphConfig::new().capacity(capacity))
    }

    /// Creates a graph from a list of names and friendships between their positions.
    /// The capacity is [`DEFAULT_CAPACITY`] or the number of names, whichever is larger.
    ///
    /// # Errors
    /// Fails on the first name or friendship that [`SocialGraph::add_vertex`] or
    /// [`SocialGraph::add_edge`] rejects.
    pub fn from_edges<S, E>(
        names: impl IntoIterator<Item = S>,
        edges: impl IntoIterator<Item = E>,
    ) -> Result<Self>
    where
        S: Into<String>,
        E: Into<Edge>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let mut graph = Self::with_capacity(names.len().max(DEFAULT_CAPACITY));
        for name in names {
            graph.add_vertex(name)?;
        }
        for Edge(u, v) in edges.into_iter().map(Into::into) {
            graph.add_edge(u, v)?;
        }
        Ok(graph)
    }

    /// Maximum number of people
    pub fn capacity(&self) -> usize {
        self.config.max_people()
    }

    /// Settings this graph was created with
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Returns *true* if no further person can be added
    pub fn is_full(&self) -> bool {
        self.people.len() >= self.capacity()
    }

    fn check_node(&self, u: Node) -> Result<()> {
        if self.contains_node(u) {
            Ok(())
        } else {
            Err(GraphError::invalid_position(u))
        }
    }

    /// Returns the position of the person with this exact name
    pub fn position_of(&self, name: &str) -> Result<Node> {
        self.find_by_name(name)
            .ok_or_else(|| GraphError::unknown_name(name))
    }

    /// Appends a new person without friends and returns its position.
    ///
    /// # Errors
    /// - [`GraphError::CapacityExceeded`] if the graph is full,
    /// - [`GraphError::DuplicateName`] if a person with this exact name exists.
    pub fn add_vertex<S: Into<String>>(&mut self, name: S) -> Result<Node> {
        let name = name.into();
        if self.is_full() {
            return Err(GraphError::CapacityExceeded {
                capacity: self.capacity(),
            });
        }
        if self.find_by_name(&name).is_some() {
            return Err(GraphError::DuplicateName(name));
        }

        self.people.try_reserve(1)?;
        let u = self.people.len() as Node;
        debug!(position = u, name = %name, "added person");
        self.people.push(Person {
            name,
            nbs: Nbs::new(),
        });
        Ok(u)
    }

    /// Adds the friendship {u,v}.
    /// `v` becomes the first friend of `u` in neighborhood order and vice versa.
    ///
    /// # Errors
    /// - [`GraphError::InvalidVertex`] if `u >= n` or `v >= n`,
    /// - [`GraphError::SelfLoop`] if `u == v`,
    /// - [`GraphError::EdgeExists`] if both are friends already.
    pub fn add_edge(&mut self, u: Node, v: Node) -> Result<()> {
        self.check_node(u)?;
        self.check_node(v)?;
        if u == v {
            return Err(GraphError::SelfLoop(u));
        }
        if self.has_edge(u, v) {
            return Err(GraphError::EdgeExists(Edge(u, v)));
        }

        // both sides are reserved before either one is mutated
        self.people[u as usize].nbs.try_reserve(1)?;
        self.people[v as usize].nbs.try_reserve(1)?;

        self.people[u as usize].nbs.add_neighbor(v);
        self.people[v as usize].nbs.add_neighbor(u);
        self.num_edges += 1;

        debug!(u, v, "added friendship");
        Ok(())
    }

    /// Removes the friendship {u,v}.
    ///
    /// # Errors
    /// - [`GraphError::InvalidVertex`] if `u >= n` or `v >= n`,
    /// - [`GraphError::SelfLoop`] if `u == v`,
    /// - [`GraphError::EdgeNotFound`] if both are not friends.
    pub fn remove_edge(&mut self, u: Node, v: Node) -> Result<()> {
        self.check_node(u)?;
        self.check_node(v)?;
        if u == v {
            return Err(GraphError::SelfLoop(u));
        }
        if !self.has_edge(u, v) {
            return Err(GraphError::EdgeNotFound(Edge(u, v)));
        }

        let removed_u = self.people[u as usize].nbs.try_remove_neighbor(v);
        let removed_v = self.people[v as usize].nbs.try_remove_neighbor(u);
        debug_assert!(removed_u && removed_v);
        self.num_edges -= 1;

        debug!(u, v, "removed friendship");
        Ok(())
    }

    /// Removes the person at `target` together with all of its friendships and returns its name.
    /// Every person after `target` moves down one position.
    ///
    /// # Errors
    /// - [`GraphError::InvalidVertex`] if `target >= n`.
    pub fn remove_vertex(&mut self, target: Node) -> Result<String> {
        self.check_node(target)?;

        // Friendships must be dropped while positions still refer to the pre-shift layout
        for (u, person) in self.people.iter_mut().enumerate() {
            if u as Node != target {
                person.nbs.try_remove_neighbor(target);
            }
        }

        // Dropping the person shifts every later person down by one
        let removed = self.people.remove(target as usize);
        self.num_edges -= removed.nbs.num_of_neighbors() as NumEdges;
        trace!(target, shifted = self.people.len() - target as usize, "compacted positions");

        for person in self.people.iter_mut() {
            person.nbs.renumber_after_removal(target);
        }

        debug!(position = target, name = %removed.name, "removed person");
        Ok(removed.name)
    }

    /// Removes all people and friendships
    pub fn clear(&mut self) {
        self.people.clear();
        self.num_edges = 0;
    }

    /// Adds the friendship between the people named `a` and `b`
    pub fn add_friendship(&mut self, a: &str, b: &str) -> Result<()> {
        let (u, v) = (self.position_of(a)?, self.position_of(b)?);
        self.add_edge(u, v)
    }

    /// Removes the friendship between the people named `a` and `b`
    pub fn remove_friendship(&mut self, a: &str, b: &str) -> Result<()> {
        let (u, v) = (self.position_of(a)?, self.position_of(b)?);
        self.remove_edge(u, v)
    }

    /// Removes the person named `name` and returns the position it had
    pub fn remove_person(&mut self, name: &str) -> Result<Node> {
        let u = self.position_of(name)?;
        self.remove_vertex(u)?;
        Ok(u)
    }

    /// Returns all people reachable from `start` in breadth-first order, `start` first.
    ///
    /// # Errors
    /// - [`GraphError::InvalidVertex`] if `start >= n`.
    pub fn breadth_first(&self, start: Node) -> Result<Vec<Node>> {
        self.check_node(start)?;
        trace!(start, "breadth-first traversal");
        Ok(self.bfs(start).collect())
    }

    /// Returns all people reachable from `start` in depth-first pre-order, `start` first.
    ///
    /// # Errors
    /// - [`GraphError::InvalidVertex`] if `start >= n`.
    pub fn depth_first(&self, start: Node) -> Result<Vec<Node>> {
        self.check_node(start)?;
        trace!(start, "depth-first traversal");
        Ok(self.dfs(start).collect())
    }

    /// Like [`SocialGraph::breadth_first`] but starting at the person named `name`
    pub fn breadth_first_from(&self, name: &str) -> Result<Vec<Node>> {
        self.breadth_first(self.position_of(name)?)
    }

    /// Like [`SocialGraph::depth_first`] but starting at the person named `name`
    pub fn depth_first_from(&self, name: &str) -> Result<Vec<Node>> {
        self.depth_first(self.position_of(name)?)
    }

    /// Snapshot of the adjacency matrix
    pub fn adjacency_matrix(&self) -> AdjacencyMatrix {
        AdjacencyMatrix::from_graph(self)
    }

    /// Snapshot of the incidence matrix
    pub fn incidence_matrix(&self) -> IncidenceMatrix {
        IncidenceMatrix::from_graph(self)
    }

    /// Snapshot of the adjacency list with names
    pub fn adjacency_list(&self) -> Vec<AdjacencyEntry<'_>> {
        views::adjacency_list(self)
    }
}

impl<Nbs: Neighborhood> GraphNodeOrder for SocialGraph<Nbs> {
    fn number_of_nodes(&self) -> NumNodes {
        self.people.len() as NumNodes
    }
}

impl<Nbs: Neighborhood> GraphEdgeOrder for SocialGraph<Nbs> {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl<Nbs: Neighborhood> AdjacencyList for SocialGraph<Nbs> {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.people[u as usize].nbs.neighbors()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.people[u as usize].nbs.num_of_neighbors()
    }
}

impl<Nbs: Neighborhood> AdjacencyTest for SocialGraph<Nbs> {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.people[u as usize].nbs.has_neighbor(v)
    }
}

impl<Nbs: Neighborhood> NamedVertices for SocialGraph<Nbs> {
    fn name_of(&self, u: Node) -> Option<&str> {
        self.people.get(u as usize).map(|p| p.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    fn graph_from(names: &[&str], edges: &[(Node, Node)]) -> FriendGraph {
        let mut graph = FriendGraph::new();
        for name in names {
            graph.add_vertex(*name).unwrap();
        }
        for &(u, v) in edges {
            graph.add_edge(u, v).unwrap();
        }
        graph
    }

    #[test]
    fn add_vertex_errors() {
        let mut graph = FriendGraph::with_capacity(2);
        assert_eq!(graph.add_vertex("Alice").unwrap(), 0);
        assert!(matches!(
            graph.add_vertex("Alice"),
            Err(GraphError::DuplicateName(name)) if name == "Alice"
        ));
        // names are case-sensitive
        assert_eq!(graph.add_vertex("alice").unwrap(), 1);
        assert!(matches!(
            graph.add_vertex("Bob"),
            Err(GraphError::CapacityExceeded { capacity: 2 })
        ));
        assert_eq!(graph.number_of_nodes(), 2);
    }

    #[test]
    fn capacity_is_checked_before_duplicates() {
        let mut graph = FriendGraph::with_capacity(1);
        graph.add_vertex("Alice").unwrap();
        assert!(matches!(
            graph.add_vertex("Alice"),
            Err(GraphError::CapacityExceeded { .. })
        ));
    }

    #[test]
    fn add_edge_errors() {
        let mut graph = graph_from(&["A", "B"], &[]);
        assert!(matches!(
            graph.add_edge(0, 2),
            Err(GraphError::InvalidVertex(VertexRef::Position(2)))
        ));
        assert!(matches!(graph.add_edge(1, 1), Err(GraphError::SelfLoop(1))));
        graph.add_edge(0, 1).unwrap();
        assert!(matches!(
            graph.add_edge(1, 0),
            Err(GraphError::EdgeExists(Edge(1, 0)))
        ));
        assert_eq!(graph.number_of_edges(), 1);
        assert_eq!(graph.degree_of(0), 1);
        assert_eq!(graph.degree_of(1), 1);
    }

    #[test]
    fn remove_edge_errors() {
        let mut graph = graph_from(&["A", "B", "C"], &[(0, 1)]);
        assert!(matches!(
            graph.remove_edge(0, 7),
            Err(GraphError::InvalidVertex(_))
        ));
        assert!(matches!(
            graph.remove_edge(0, 2),
            Err(GraphError::EdgeNotFound(Edge(0, 2)))
        ));
        graph.remove_edge(1, 0).unwrap();
        assert!(!graph.has_edge(0, 1));
        assert!(!graph.has_edge(1, 0));
        assert!(matches!(
            graph.remove_edge(0, 1),
            Err(GraphError::EdgeNotFound(_))
        ));
        graph.add_edge(0, 1).unwrap();
        assert_eq!(graph.number_of_edges(), 1);
    }

    #[test]
    fn compaction() {
        // A - C, B - D; removing B shifts C and D down
        let mut graph = graph_from(&["A", "B", "C", "D"], &[(0, 2), (1, 3)]);
        assert_eq!(graph.remove_vertex(1).unwrap(), "B");

        assert_eq!(
            graph.people().collect_vec(),
            vec![(0, "A"), (1, "C"), (2, "D")]
        );
        assert_eq!(graph.ordered_edges(true).collect_vec(), vec![Edge(0, 1)]);
        assert_eq!(graph.degree_of(2), 0);
        assert_eq!(graph.number_of_edges(), 1);
    }

    #[test]
    fn compaction_renumbers_higher_neighbors() {
        let mut graph = graph_from(
            &["A", "B", "C", "D", "E"],
            &[(0, 4), (1, 2), (2, 4), (3, 0), (1, 3)],
        );
        graph.remove_vertex(2).unwrap();

        // A, B, D, E
        assert_eq!(graph.neighbors_of(0).collect_vec(), vec![2, 3]);
        assert_eq!(graph.neighbors_of(1).collect_vec(), vec![2]);
        assert_eq!(graph.neighbors_of(2).collect_vec(), vec![1, 0]);
        assert_eq!(graph.neighbors_of(3).collect_vec(), vec![0]);
        assert_eq!(graph.number_of_edges(), 3);
        assert!(graph.adjacency_matrix().is_symmetric());
    }

    #[test]
    fn remove_last_and_only() {
        let mut graph = graph_from(&["A", "B"], &[(0, 1)]);
        graph.remove_vertex(1).unwrap();
        assert_eq!(graph.degree_of(0), 0);
        assert!(matches!(
            graph.remove_vertex(1),
            Err(GraphError::InvalidVertex(_))
        ));
        graph.remove_vertex(0).unwrap();
        assert!(graph.is_empty());
        assert!(graph.is_singleton_graph());
    }

    #[test]
    fn freed_capacity_and_name() {
        let mut graph = FriendGraph::with_capacity(2);
        assert_eq!(graph.config().max_people(), 2);
        graph.add_vertex("A").unwrap();
        graph.add_vertex("B").unwrap();
        assert!(graph.is_full());
        graph.remove_person("A").unwrap();
        assert_eq!(graph.add_vertex("A").unwrap(), 1);
    }

    #[test]
    fn name_based_operations() {
        let mut graph = graph_from(&["Alice", "Bob", "Carol"], &[]);
        graph.add_friendship("Alice", "Carol").unwrap();
        assert!(graph.has_edge(0, 2));

        assert!(matches!(
            graph.add_friendship("Alice", "Mallory"),
            Err(GraphError::InvalidVertex(VertexRef::Name(name))) if name == "Mallory"
        ));
        assert!(matches!(
            graph.add_friendship("Bob", "Bob"),
            Err(GraphError::SelfLoop(1))
        ));

        graph.remove_friendship("Carol", "Alice").unwrap();
        assert!(graph.is_singleton_graph());

        assert_eq!(graph.remove_person("Bob").unwrap(), 1);
        assert_eq!(graph.find_by_name("Carol"), Some(1));
        assert_eq!(graph.find_by_name("Bob"), None);
        assert!(graph.remove_person("Bob").is_err());
    }

    #[test]
    fn traversal_validation() {
        let graph = graph_from(&["A"], &[]);
        assert_eq!(graph.breadth_first(0).unwrap(), vec![0]);
        assert_eq!(graph.depth_first(0).unwrap(), vec![0]);
        assert!(matches!(
            graph.breadth_first(1),
            Err(GraphError::InvalidVertex(_))
        ));
        assert!(matches!(
            graph.depth_first(1),
            Err(GraphError::InvalidVertex(_))
        ));
        assert!(graph.breadth_first_from("B").is_err());
    }

    #[test]
    fn clear() {
        let mut graph = graph_from(&["A", "B"], &[(0, 1)]);
        graph.clear();
        assert!(graph.is_empty());
        assert_eq!(graph.number_of_edges(), 0);
        assert_eq!(graph.capacity(), DEFAULT_CAPACITY);
    }
}

test_graph_ops!(
    test_friend_graph,
    FriendGraph,
    (GraphNew, AdjacencyList, EdgeEditing, VertexRemoval, Traversals, Views)
);

test_graph_ops!(
    test_sparse_friend_graph,
    SparseFriendGraph,
    (GraphNew, AdjacencyList, EdgeEditing, VertexRemoval, Traversals, Views)
);
