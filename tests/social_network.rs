use friendgraph::{algo::*, error::VertexRef, gens::*, io::*, prelude::*};
use itertools::Itertools;

#[test]
fn alice_bob_carol() {
    let mut graph = FriendGraph::new();
    for name in ["Alice", "Bob", "Carol"] {
        graph.add_vertex(name).unwrap();
    }
    graph.add_friendship("Alice", "Bob").unwrap();
    graph.add_friendship("Alice", "Carol").unwrap();

    assert_eq!(graph.breadth_first_from("Alice").unwrap(), vec![0, 2, 1]);
    assert_eq!(graph.depth_first_from("Alice").unwrap(), vec![0, 2, 1]);
    assert_eq!(graph.depth_first_from("Bob").unwrap(), vec![1, 0, 2]);

    let list = graph.adjacency_list();
    assert_eq!(list[0].friends, vec!["Carol", "Bob"]);
    assert_eq!(list[1].friends, vec!["Alice"]);

    assert_eq!(graph.remove_person("Alice").unwrap(), 0);
    assert_eq!(
        graph.people().collect_vec(),
        vec![(0, "Bob"), (1, "Carol")]
    );
    assert_eq!(graph.number_of_edges(), 0);
    assert!(graph.adjacency_matrix().to_grid().iter().flatten().all(|&b| !b));
    assert!(matches!(
        graph.remove_person("Alice"),
        Err(GraphError::InvalidVertex(VertexRef::Name(name))) if name == "Alice"
    ));
}

#[test]
fn sample_network_views() {
    let graph = sample_network();

    let adj = graph.adjacency_matrix();
    assert_eq!(
        adj.row(1).collect_vec(),
        vec![true, false, true, true, false, false]
    );

    let inc = graph.incidence_matrix();
    assert_eq!(inc.number_of_edges(), 7);
    assert_eq!(inc.edges()[2], Edge(1, 2));
    assert_eq!(
        inc.row(2).collect_vec(),
        vec![false, true, true, false, true, false, false]
    );

    assert_eq!(graph.shortest_path(0, 5), Some(vec![2, 4]));
    assert_eq!(
        graph.bfs_with_predecessor(0).depths(),
        vec![Some(0), Some(1), Some(1), Some(2), Some(2), Some(3)]
    );
}

#[test]
fn sample_network_dot() {
    let mut graph = SparseFriendGraph::new();
    insert_sample_network(&mut graph).unwrap();
    graph.remove_friendship("Bob", "Carol").unwrap();

    let mut buffer = Vec::new();
    graph.try_write_dot(&mut buffer).unwrap();

    assert_eq!(
        String::from_utf8(buffer).unwrap(),
        "graph RedeAmizades {
  v0 [label=\"Alice\"];
  v1 [label=\"Bob\"];
  v2 [label=\"Carol\"];
  v3 [label=\"Dave\"];
  v4 [label=\"Eve\"];
  v5 [label=\"Frank\"];
  v0 -- v1;
  v0 -- v2;
  v1 -- v3;
  v2 -- v4;
  v3 -- v5;
  v4 -- v5;
}
"
    );
}

#[test]
fn removals_keep_views_consistent() {
    let mut graph = sample_network();

    graph.remove_person("Carol").unwrap();
    graph.remove_person("Alice").unwrap();

    assert_eq!(
        graph.people().map(|(_, name)| name).collect_vec(),
        vec!["Bob", "Dave", "Eve", "Frank"]
    );
    assert_eq!(
        graph.ordered_edges(true).collect_vec(),
        vec![Edge(0, 1), Edge(1, 3), Edge(2, 3)]
    );
    assert!(graph.adjacency_matrix().is_symmetric());
    assert_eq!(graph.breadth_first_from("Eve").unwrap(), vec![2, 3, 1, 0]);

    let inc = graph.incidence_matrix();
    assert_eq!(inc.to_grid().len(), 4);
    assert!((0..inc.number_of_edges()).all(|e| inc.column(e).filter(|&b| b).count() == 2));
}

#[test]
fn capacity_is_enforced() {
    let mut graph = FriendGraph::with_config(GraphConfig::new().capacity(2));
    graph.add_vertex("a").unwrap();
    graph.add_vertex("b").unwrap();

    let err = graph.add_vertex("c").unwrap_err();
    assert!(err.is_recoverable());
    assert_eq!(err.to_string(), "capacity of 2 people reached");

    graph.remove_vertex(0).unwrap();
    assert_eq!(graph.add_vertex("c").unwrap(), 1);
}
