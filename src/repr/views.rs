/*!
# Derived Views

Read-only snapshots computed from a graph's neighborhoods on every call. None of them is stored
inside the graph, so they can never disagree with it at the moment they are taken. Mutating the
graph afterwards does not update an existing view; request a new one instead.

- [`AdjacencyMatrix`]: `n x n` grid, cell `(i, j)` set iff `i` and `j` are friends.
- [`IncidenceMatrix`]: `n x m` grid over the friendships `{u, v}` (`u < v`) in ascending order.
- [`AdjacencyEntry`]: per person, its name and the names of its friends in neighborhood order.
*/

use itertools::Itertools;

use crate::prelude::*;

/// Square boolean grid with one bitset row per person
#[derive(Clone, Debug, PartialEq)]
pub struct AdjacencyMatrix {
    rows: Vec<NodeBitSet>,
}

impl AdjacencyMatrix {
    /// Takes a snapshot of the adjacency of `graph`
    pub fn from_graph<G: AdjacencyList>(graph: &G) -> Self {
        Self {
            rows: graph
                .vertices()
                .map(|u| graph.neighbors_of_as_bitset(u))
                .collect(),
        }
    }

    /// Number of rows (and columns)
    pub fn order(&self) -> NumNodes {
        self.rows.len() as NumNodes
    }

    /// Returns *true* iff `i` and `j` are friends; *false* outside of the grid
    pub fn get(&self, i: Node, j: Node) -> bool {
        j < self.order() && self.rows.get(i as usize).is_some_and(|row| row.contains(j))
    }

    /// Returns row `i` as bools, column `0` first.
    /// ** Panics if `i >= n` **
    pub fn row(&self, i: Node) -> impl Iterator<Item = bool> + '_ {
        let row = &self.rows[i as usize];
        (0..self.order()).map(move |j| row.contains(j))
    }

    /// Returns the full grid as nested vectors
    pub fn to_grid(&self) -> Vec<Vec<bool>> {
        (0..self.order()).map(|i| self.row(i).collect()).collect()
    }

    /// Returns the number of set cells in row `i`
    /// ** Panics if `i >= n` **
    pub fn row_cardinality(&self, i: Node) -> NumNodes {
        self.rows[i as usize].len() as NumNodes
    }

    /// Returns *true* if cell `(i, j)` equals cell `(j, i)` for all `i, j`
    pub fn is_symmetric(&self) -> bool {
        (0..self.order())
            .cartesian_product(0..self.order())
            .all(|(i, j)| self.get(i, j) == self.get(j, i))
    }
}

/// Person-by-friendship boolean grid
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IncidenceMatrix {
    num_nodes: NumNodes,
    edges: Vec<Edge>,
}

impl IncidenceMatrix {
    /// Takes a snapshot of the friendships of `graph`.
    /// Columns are the friendships `(u, v)` with `u < v`, sorted by `u` and then by `v`.
    pub fn from_graph<G: AdjacencyList>(graph: &G) -> Self {
        Self {
            num_nodes: graph.number_of_nodes(),
            edges: graph.ordered_edges(true).collect(),
        }
    }

    /// Number of rows, i.e. people
    pub fn number_of_nodes(&self) -> NumNodes {
        self.num_nodes
    }

    /// Number of columns, i.e. friendships
    pub fn number_of_edges(&self) -> NumEdges {
        self.edges.len() as NumEdges
    }

    /// The friendship represented by each column
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns *true* iff person `i` is an endpoint of the friendship in column `e`;
    /// *false* outside of the grid
    pub fn get(&self, i: Node, e: NumEdges) -> bool {
        i < self.num_nodes
            && self
                .edges
                .get(e as usize)
                .is_some_and(|edge| edge.is_incident_to(i))
    }

    /// Returns row `i` as bools, column `0` first
    pub fn row(&self, i: Node) -> impl Iterator<Item = bool> + '_ {
        self.edges.iter().map(move |edge| edge.is_incident_to(i))
    }

    /// Returns column `e` as bools, row `0` first
    pub fn column(&self, e: NumEdges) -> impl Iterator<Item = bool> + '_ {
        (0..self.num_nodes).map(move |i| self.get(i, e))
    }

    /// Returns the full grid as nested vectors
    pub fn to_grid(&self) -> Vec<Vec<bool>> {
        (0..self.num_nodes).map(|i| self.row(i).collect()).collect()
    }
}

/// One line of an adjacency-list view
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdjacencyEntry<'a> {
    pub position: Node,
    pub name: &'a str,
    /// Names of all friends, most recently added friendship first
    pub friends: Vec<&'a str>,
}

/// Builds the adjacency-list view of a named graph
pub fn adjacency_list<G>(graph: &G) -> Vec<AdjacencyEntry<'_>>
where
    G: AdjacencyList + NamedVertices,
{
    graph
        .people()
        .map(|(position, name)| AdjacencyEntry {
            position,
            name,
            friends: graph
                .neighbors_of(position)
                .filter_map(|v| graph.name_of(v))
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> FriendGraph {
        let mut graph = FriendGraph::new();
        for name in ["A", "B", "C", "D"] {
            graph.add_vertex(name).unwrap();
        }
        for (u, v) in [(0, 1), (1, 2), (2, 3), (3, 0)] {
            graph.add_edge(u, v).unwrap();
        }
        graph
    }

    #[test]
    fn adjacency_matrix() {
        let graph = square();
        let matrix = graph.adjacency_matrix();

        assert_eq!(matrix.order(), 4);
        assert!(matrix.is_symmetric());
        assert_eq!(
            matrix.to_grid(),
            vec![
                vec![false, true, false, true],
                vec![true, false, true, false],
                vec![false, true, false, true],
                vec![true, false, true, false],
            ]
        );
        assert!(!matrix.get(0, 4));
        assert!(!matrix.get(4, 0));
        assert_eq!(matrix.row_cardinality(2), 2);
    }

    #[test]
    fn incidence_matrix() {
        let graph = square();
        let matrix = graph.incidence_matrix();

        assert_eq!(matrix.number_of_nodes(), 4);
        assert_eq!(matrix.number_of_edges(), 4);
        assert_eq!(
            matrix.edges(),
            &[Edge(0, 1), Edge(0, 3), Edge(1, 2), Edge(2, 3)]
        );
        assert_eq!(
            matrix.to_grid(),
            vec![
                vec![true, true, false, false],
                vec![true, false, true, false],
                vec![false, false, true, true],
                vec![false, true, false, true],
            ]
        );
        for e in 0..matrix.number_of_edges() {
            assert_eq!(matrix.column(e).filter(|&b| b).count(), 2);
        }
        assert!(!matrix.get(0, 4));
    }

    #[test]
    fn empty_views() {
        let graph = FriendGraph::new();
        assert_eq!(graph.adjacency_matrix().order(), 0);
        assert!(graph.adjacency_matrix().to_grid().is_empty());
        assert_eq!(graph.incidence_matrix().number_of_edges(), 0);
        assert!(graph.adjacency_list().is_empty());
    }

    #[test]
    fn adjacency_list_names() {
        let graph = square();
        let list = graph.adjacency_list();

        assert_eq!(list.len(), 4);
        assert_eq!(list[0].name, "A");
        // D-A was added after A-B
        assert_eq!(list[0].friends, vec!["D", "B"]);
        assert_eq!(list[2].position, 2);
        assert_eq!(list[2].friends, vec!["D", "B"]);
    }

    #[test]
    fn views_are_snapshots() {
        let mut graph = square();
        let before = graph.adjacency_matrix();
        graph.remove_edge(0, 1).unwrap();

        assert!(before.get(0, 1));
        assert!(!graph.adjacency_matrix().get(0, 1));
        assert_eq!(graph.incidence_matrix().number_of_edges(), 3);
    }
}
