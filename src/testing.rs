/// Representation-independent test suites for [`SocialGraph`](crate::repr::SocialGraph).
///
/// `test_graph_ops!(module_name, GraphType, (Suite, ...))` generates a test module running the
/// listed suites against `GraphType`. Randomized suites compare the graph against a simple model
/// of names and adjacency bitsets.
macro_rules! test_graph_ops {
    ($env:ident, $graph:ident, ($($suite:ident),*)) => {
        #[cfg(test)]
        mod $env {
            use crate::{algo::*, error::VertexRef, prelude::*, testing::test_graph_ops};
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;
            use itertools::Itertools;

            fn names(n: NumNodes) -> Vec<String> {
                (0..n).map(|u| format!("p{u}")).collect()
            }

            /// Creates a list of at most `m_ub` random friendships for people `0..n`
            fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m_ub: NumEdges) -> Vec<Edge> {
                let mut edges: Vec<Edge> = (0..m_ub)
                    .map(|_| Edge(rng.random_range(0..n), rng.random_range(0..n)).normalized())
                    .filter(|e| !e.is_loop())
                    .collect_vec();
                edges.sort_unstable();
                edges.dedup();

                edges
            }

            /// Names and adjacency bitsets tracking what the graph should contain
            struct Model {
                names: Vec<String>,
                adj: Vec<NodeBitSet>,
            }

            impl Model {
                fn new(n: NumNodes) -> Self {
                    Self {
                        names: names(n),
                        adj: vec![NodeBitSet::new(); n as usize],
                    }
                }

                fn add_edge(&mut self, u: Node, v: Node) -> bool {
                    self.adj[v as usize].insert(u);
                    self.adj[u as usize].insert(v)
                }

                fn remove_edge(&mut self, u: Node, v: Node) -> bool {
                    self.adj[v as usize].remove(u);
                    self.adj[u as usize].remove(v)
                }

                fn remove_vertex(&mut self, target: Node) {
                    self.names.remove(target as usize);
                    self.adj.remove(target as usize);
                    for row in self.adj.iter_mut() {
                        *row = row
                            .iter()
                            .filter(|&v| v != target)
                            .map(|v| if v > target { v - 1 } else { v })
                            .collect();
                    }
                }

                fn number_of_edges(&self) -> NumEdges {
                    (self.adj.iter().map(|row| row.len()).sum::<u64>() / 2) as NumEdges
                }

                fn ordered_edges(&self) -> Vec<Edge> {
                    self.adj
                        .iter()
                        .enumerate()
                        .flat_map(|(u, row)| {
                            row.iter()
                                .filter(move |&v| (u as Node) < v)
                                .map(move |v| Edge(u as Node, v))
                        })
                        .collect()
                }

                fn reachable(&self, start: Node) -> NodeBitSet {
                    let mut visited = NodeBitSet::new();
                    let mut stack = vec![start];
                    visited.insert(start);
                    while let Some(u) = stack.pop() {
                        for v in self.adj[u as usize].iter() {
                            if visited.insert(v) {
                                stack.push(v);
                            }
                        }
                    }
                    visited
                }

                fn assert_matches(&self, graph: &$graph) {
                    assert_eq!(graph.len(), self.names.len());
                    assert_eq!(
                        graph.people().map(|(_, name)| name.to_string()).collect_vec(),
                        self.names
                    );
                    assert_eq!(graph.number_of_edges(), self.number_of_edges());
                    assert_eq!(graph.ordered_edges(true).collect_vec(), self.ordered_edges());

                    for u in graph.vertices() {
                        assert_eq!(graph.neighbors_of_as_bitset(u), self.adj[u as usize]);
                        assert_eq!(graph.degree_of(u) as u64, self.adj[u as usize].len());
                        for v in graph.neighbors_of(u) {
                            assert!(v < graph.number_of_nodes());
                            assert!(graph.has_edge(v, u));
                        }
                    }
                }
            }

            fn random_graph<R: Rng>(rng: &mut R, n: NumNodes, m_ub: NumEdges) -> ($graph, Model) {
                let edges = random_edges(rng, n, m_ub);
                let graph = <$graph>::from_edges(names(n), edges.iter().copied()).unwrap();

                let mut model = Model::new(n);
                for &Edge(u, v) in &edges {
                    model.add_edge(u, v);
                }

                (graph, model)
            }

            $(
                test_graph_ops!($graph: $suite);
            )*
        }
    };
    ($graph:ident: GraphNew) => {
        #[test]
        fn graph_new() {
            for n in 1..30 {
                let mut graph = <$graph>::with_capacity(n as usize);
                assert!(graph.is_empty());
                assert!(graph.is_singleton_graph());

                for u in 0..n {
                    assert_eq!(graph.add_vertex(format!("p{u}")).unwrap(), u);
                }

                assert!(graph.is_full());
                assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
                assert_eq!(graph.find_by_name(&format!("p{}", n - 1)), Some(n - 1));
                assert_eq!(graph.find_by_name("P0"), None);
                assert!(matches!(
                    graph.add_vertex("late"),
                    Err(GraphError::CapacityExceeded { capacity }) if capacity == n as usize
                ));
                assert_eq!(graph.len(), n as usize);
            }
        }

        #[test]
        fn duplicate_names() {
            let mut graph = <$graph>::new();
            assert_eq!(graph.capacity(), DEFAULT_CAPACITY);

            graph.add_vertex("Ana").unwrap();
            assert!(matches!(
                graph.add_vertex("Ana"),
                Err(GraphError::DuplicateName(name)) if name == "Ana"
            ));
            assert_eq!(graph.add_vertex("ana").unwrap(), 1);
            assert_eq!(graph.number_of_nodes(), 2);
        }
    };
    ($graph:ident: AdjacencyList) => {
        #[test]
        fn adjacency_list() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [5 as NumNodes, 20, 50] {
                for m_ub in [n, n * 3, n * 10] {
                    for _ in 0..10 {
                        let (graph, model) = random_graph(rng, n, m_ub);
                        model.assert_matches(&graph);
                        assert_eq!(
                            graph.edges(false).count(),
                            2 * graph.number_of_edges() as usize
                        );
                    }
                }
            }
        }
    };
    ($graph:ident: EdgeEditing) => {
        #[test]
        fn edge_editing() {
            let rng = &mut Pcg64Mcg::seed_from_u64(4);

            for n in [5 as NumNodes, 20, 50] {
                for _ in 0..5 {
                    let mut graph = <$graph>::from_edges(names(n), std::iter::empty::<Edge>()).unwrap();
                    let mut model = Model::new(n);

                    for _ in 0..(4 * n) {
                        let (u, v) = (rng.random_range(0..n), rng.random_range(0..n));
                        let result = graph.add_edge(u, v);
                        if u == v {
                            assert!(matches!(result, Err(GraphError::SelfLoop(x)) if x == u));
                        } else if model.add_edge(u, v) {
                            assert!(result.is_ok());
                        } else {
                            assert!(matches!(result, Err(GraphError::EdgeExists(_))));
                        }
                    }
                    model.assert_matches(&graph);

                    for _ in 0..(4 * n) {
                        let (u, v) = (rng.random_range(0..n), rng.random_range(0..n));
                        let result = graph.remove_edge(u, v);
                        if u == v {
                            assert!(matches!(result, Err(GraphError::SelfLoop(x)) if x == u));
                        } else if model.remove_edge(u, v) {
                            assert!(result.is_ok());
                        } else {
                            assert!(matches!(result, Err(GraphError::EdgeNotFound(_))));
                        }
                    }
                    model.assert_matches(&graph);

                    assert!(matches!(
                        graph.add_edge(n, 0),
                        Err(GraphError::InvalidVertex(VertexRef::Position(x))) if x == n
                    ));
                    assert!(matches!(
                        graph.remove_edge(0, n + 3),
                        Err(GraphError::InvalidVertex(VertexRef::Position(_)))
                    ));
                    model.assert_matches(&graph);
                }
            }
        }

        #[test]
        fn edge_readd() {
            let mut graph = <$graph>::from_edges(["a", "b", "c"], std::iter::empty::<Edge>()).unwrap();

            graph.add_edge(0, 1).unwrap();
            assert!(matches!(graph.add_edge(1, 0), Err(GraphError::EdgeExists(_))));
            graph.remove_edge(1, 0).unwrap();
            assert!(matches!(graph.remove_edge(0, 1), Err(GraphError::EdgeNotFound(_))));
            graph.add_edge(0, 1).unwrap();

            assert_eq!(graph.number_of_edges(), 1);
            assert_eq!(graph.has_neighbors(0, [1, 2]), [true, false]);
        }

        #[test]
        fn no_self_loops() {
            let mut graph = <$graph>::from_edges(names(10), std::iter::empty::<Edge>()).unwrap();
            for u in graph.vertices_range() {
                assert!(matches!(graph.add_edge(u, u), Err(GraphError::SelfLoop(x)) if x == u));
            }
            assert!(graph.is_singleton_graph());
        }
    };
    ($graph:ident: VertexRemoval) => {
        #[test]
        fn vertex_removal() {
            let rng = &mut Pcg64Mcg::seed_from_u64(5);

            for n in [5 as NumNodes, 20, 40] {
                for _ in 0..5 {
                    let (mut graph, mut model) = random_graph(rng, n, 3 * n);

                    while !graph.is_empty() {
                        let target = rng.random_range(0..graph.number_of_nodes());
                        let name = model.names[target as usize].clone();

                        assert_eq!(graph.remove_vertex(target).unwrap(), name);
                        model.remove_vertex(target);
                        model.assert_matches(&graph);
                    }

                    assert!(graph.is_singleton_graph());
                    assert!(matches!(
                        graph.remove_vertex(0),
                        Err(GraphError::InvalidVertex(_))
                    ));
                }
            }
        }

        #[test]
        fn compaction() {
            let mut graph = <$graph>::from_edges(["A", "B", "C", "D"], [(0, 2), (1, 3)]).unwrap();

            assert_eq!(graph.remove_person("B").unwrap(), 1);
            assert_eq!(
                graph.people().map(|(_, name)| name).collect_vec(),
                vec!["A", "C", "D"]
            );
            assert_eq!(graph.ordered_edges(true).collect_vec(), vec![Edge(0, 1)]);
            assert_eq!(graph.number_of_edges(), 1);

            // a freed slot can be reused
            assert_eq!(graph.add_vertex("B").unwrap(), 3);
        }
    };
    ($graph:ident: Traversals) => {
        #[test]
        fn traversals() {
            let rng = &mut Pcg64Mcg::seed_from_u64(6);

            for n in [5 as NumNodes, 20, 50] {
                for _ in 0..5 {
                    // sparse enough to leave several components
                    let (graph, model) = random_graph(rng, n, n);

                    for start in graph.vertices() {
                        let reachable = model.reachable(start);
                        let bfs = graph.breadth_first(start).unwrap();
                        let dfs = graph.depth_first(start).unwrap();

                        for order in [&bfs, &dfs] {
                            assert_eq!(order[0], start);
                            assert_eq!(order.len() as u64, reachable.len());
                            assert_eq!(order.iter().copied().collect::<NodeBitSet>(), reachable);

                            // every later person is befriended by someone visited before
                            for (i, &u) in order.iter().enumerate().skip(1) {
                                assert!(order[..i].iter().any(|&v| graph.has_edge(u, v)));
                            }
                        }

                        let depths = graph.bfs_with_predecessor(start).depths();
                        assert!(bfs
                            .windows(2)
                            .all(|w| depths[w[0] as usize] <= depths[w[1] as usize]));
                    }

                    assert!(matches!(graph.breadth_first(n), Err(GraphError::InvalidVertex(_))));
                    assert!(matches!(graph.depth_first(n), Err(GraphError::InvalidVertex(_))));
                }
            }
        }

        #[test]
        fn traversals_terminate_on_cycles() {
            let graph = <$graph>::from_edges(["a", "b", "c"], [(0, 1), (1, 2), (2, 0)]).unwrap();

            assert_eq!(graph.breadth_first(0).unwrap(), vec![0, 2, 1]);
            assert_eq!(graph.depth_first(0).unwrap(), vec![0, 2, 1]);
            assert!(matches!(
                graph.breadth_first_from("d"),
                Err(GraphError::InvalidVertex(VertexRef::Name(name))) if name == "d"
            ));
        }
    };
    ($graph:ident: Views) => {
        #[test]
        fn views() {
            let rng = &mut Pcg64Mcg::seed_from_u64(7);

            for n in [1 as NumNodes, 8, 20] {
                for _ in 0..5 {
                    let (graph, model) = random_graph(rng, n, 2 * n);

                    let adj = graph.adjacency_matrix();
                    assert_eq!(adj.order(), n);
                    assert!(adj.is_symmetric());
                    for u in graph.vertices() {
                        for v in graph.vertices() {
                            assert_eq!(adj.get(u, v), model.adj[u as usize].contains(v));
                        }
                        assert_eq!(adj.row_cardinality(u), graph.degree_of(u));
                    }

                    let inc = graph.incidence_matrix();
                    assert_eq!(inc.number_of_nodes(), n);
                    assert_eq!(inc.number_of_edges(), graph.number_of_edges());
                    assert_eq!(inc.edges(), model.ordered_edges().as_slice());
                    for e in 0..inc.number_of_edges() {
                        assert_eq!(inc.column(e).filter(|&b| b).count(), 2);
                    }
                    for u in graph.vertices() {
                        assert_eq!(
                            inc.row(u).filter(|&b| b).count(),
                            graph.degree_of(u) as usize
                        );
                    }

                    for entry in graph.adjacency_list() {
                        assert_eq!(graph.name_of(entry.position), Some(entry.name));
                        assert_eq!(
                            entry.friends,
                            graph
                                .neighbors_of(entry.position)
                                .filter_map(|v| graph.name_of(v))
                                .collect_vec()
                        );
                    }
                }
            }
        }
    };
}

pub(crate) use test_graph_ops;
