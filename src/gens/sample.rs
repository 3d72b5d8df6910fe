use crate::error::Result;

use super::*;

/// People of the sample network in insertion order
pub const SAMPLE_PEOPLE: [&str; 6] = ["Alice", "Bob", "Carol", "Dave", "Eve", "Frank"];

/// Friendships of the sample network in insertion order
pub const SAMPLE_FRIENDSHIPS: [(&str, &str); 7] = [
    ("Alice", "Bob"),
    ("Alice", "Carol"),
    ("Bob", "Dave"),
    ("Carol", "Eve"),
    ("Eve", "Frank"),
    ("Bob", "Carol"),
    ("Dave", "Frank"),
];

/// Returns a fresh [`FriendGraph`] holding the sample network of six people and seven
/// friendships.
///
/// ```
/// use friendgraph::{prelude::*, gens::*};
///
/// let graph = sample_network();
/// assert_eq!(graph.number_of_nodes(), 6);
/// assert_eq!(graph.number_of_edges(), 7);
/// assert_eq!(graph.breadth_first_from("Alice").unwrap(), vec![0, 2, 1, 4, 3, 5]);
/// ```
pub fn sample_network() -> FriendGraph {
    let mut graph = FriendGraph::new();
    insert_sample_network(&mut graph)
        .expect("the sample network fits into an empty graph of default capacity");
    graph
}

/// Adds the sample network to `graph`.
/// People already present (by exact name) and friendships already present are skipped.
/// Returns the number of people and friendships that were added.
///
/// # Errors
/// - [`GraphError::CapacityExceeded`] if the missing people do not fit; nothing is added then.
pub fn insert_sample_network<Nbs: Neighborhood>(
    graph: &mut SocialGraph<Nbs>,
) -> Result<(NumNodes, NumEdges)> {
    let missing = SAMPLE_PEOPLE
        .iter()
        .filter(|name| graph.find_by_name(name).is_none())
        .count();
    if graph.len() + missing > graph.capacity() {
        return Err(GraphError::CapacityExceeded {
            capacity: graph.capacity(),
        });
    }

    let mut added_people = 0;
    for name in SAMPLE_PEOPLE {
        if graph.find_by_name(name).is_none() {
            graph.add_vertex(name)?;
            added_people += 1;
        }
    }

    let mut added_friendships = 0;
    for (a, b) in SAMPLE_FRIENDSHIPS {
        match graph.add_friendship(a, b) {
            Ok(()) => added_friendships += 1,
            Err(GraphError::EdgeExists(_)) => {}
            Err(e) => return Err(e),
        }
    }

    Ok((added_people, added_friendships))
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn sample_structure() {
        let graph = sample_network();
        assert_eq!(
            graph.people().map(|(_, name)| name).collect::<Vec<_>>(),
            SAMPLE_PEOPLE
        );
        assert_eq!(
            graph.ordered_edges(true).collect::<Vec<_>>(),
            vec![
                Edge(0, 1),
                Edge(0, 2),
                Edge(1, 2),
                Edge(1, 3),
                Edge(2, 4),
                Edge(3, 5),
                Edge(4, 5)
            ]
        );
        assert_eq!(graph.neighbors_of(1).collect::<Vec<_>>(), vec![2, 3, 0]);
    }

    #[test]
    fn sample_is_inserted_completely() {
        assert!(SAMPLE_PEOPLE.len() <= DEFAULT_CAPACITY);
        assert!(SAMPLE_PEOPLE.iter().all_unique());
        assert!(SAMPLE_FRIENDSHIPS.iter().all(|(a, b)| {
            a != b && SAMPLE_PEOPLE.contains(a) && SAMPLE_PEOPLE.contains(b)
        }));

        let mut graph = FriendGraph::new();
        assert_eq!(
            insert_sample_network(&mut graph).unwrap(),
            (
                SAMPLE_PEOPLE.len() as NumNodes,
                SAMPLE_FRIENDSHIPS.len() as NumEdges
            )
        );
        assert_eq!(
            graph.ordered_edges(true).collect_vec(),
            sample_network().ordered_edges(true).collect_vec()
        );
    }

    #[test]
    fn sample_traversals() {
        let graph = sample_network();
        assert_eq!(graph.breadth_first(0).unwrap(), vec![0, 2, 1, 4, 3, 5]);
        assert_eq!(graph.depth_first(0).unwrap(), vec![0, 2, 1, 3, 5, 4]);
    }

    #[test]
    fn insert_skips_existing() {
        let mut graph = SparseFriendGraph::new();
        graph.add_vertex("Zoe").unwrap();
        graph.add_vertex("Carol").unwrap();
        graph.add_vertex("Alice").unwrap();
        graph.add_friendship("Alice", "Carol").unwrap();

        assert_eq!(insert_sample_network(&mut graph).unwrap(), (4, 6));
        assert_eq!(graph.number_of_nodes(), 7);
        assert_eq!(graph.number_of_edges(), 7);
        assert_eq!(graph.find_by_name("Bob"), Some(3));

        assert_eq!(insert_sample_network(&mut graph).unwrap(), (0, 0));
    }

    #[test]
    fn insert_needs_room() {
        let mut graph = FriendGraph::with_capacity(7);
        graph.add_vertex("Zoe").unwrap();
        graph.add_vertex("Yann").unwrap();

        assert!(matches!(
            insert_sample_network(&mut graph),
            Err(GraphError::CapacityExceeded { capacity: 7 })
        ));
        assert_eq!(graph.number_of_nodes(), 2);
    }
}
