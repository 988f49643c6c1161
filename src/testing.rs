/// Every graph representation should pass the same operation tests
macro_rules! test_graph_ops {
    ($env:ident, $graph:ident, $undirected:literal, ($($trait:ident),*)) => {
        #[cfg(test)]
        mod $env {
            use crate::{ops::*, repr::*, testing::test_graph_ops};
            use rand::{seq::SliceRandom, Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;
            use itertools::Itertools;

            /// Creates a shuffled list of at most `m_ub` distinct random edges for nodes `0..n`
            fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m_ub: NumEdges) -> Vec<Edge> {
                let mut edges: Vec<Edge> = (0..m_ub).map(|_| {
                    let u = rng.random_range(0..n);
                    let v = rng.random_range(0..n);

                    if $undirected {
                        Edge(u, v).normalized()
                    } else {
                        Edge(u, v)
                    }
                }).collect_vec();
                edges.sort_unstable();
                edges.dedup();
                edges.shuffle(rng);

                edges
            }

            $(
                test_graph_ops!($graph<$undirected>: $trait);
            )*
        }
    };
    ($graph:ident<$undirected:literal>: GraphNew) => {
        #[test]
        fn graph_new() {
            let graph = <$graph>::new();
            assert!(graph.is_empty());
            assert!(graph.is_edgeless());
            assert_eq!(<$graph>::is_undirected(), $undirected);

            for n in 1..50 {
                let mut graph = <$graph>::with_capacity(n, 2 * n);
                assert_eq!(graph.number_of_nodes(), 0);

                assert_eq!(graph.add_nodes(vec![None; n as usize]), 0..n);
                assert_eq!(graph.number_of_edges(), 0);
                assert_eq!(graph.number_of_nodes(), n);
                assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
                assert!(graph.node_weights().iter().all(|w| w.is_none()));
            }
        }
    };
    ($graph:ident<$undirected:literal>: AdjacencyList) => {
        #[test]
        fn test_adjacency_list() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as NumNodes, 20, 50] {
                for m_ub in [n * 2, n * 5, n * 10] {
                    for _ in 0..10 {
                        let edges = random_edges(rng, n, m_ub as NumEdges);

                        let mut adj_matrix: Vec<NodeBitSet> = vec![NodeBitSet::new(n); n as usize];
                        for &Edge(u, v) in &edges {
                            adj_matrix[u as usize].set_bit(v);
                            if $undirected {
                                adj_matrix[v as usize].set_bit(u);
                            }
                        }

                        let graph = <$graph>::from_edges(vec![None; n as usize], edges.iter());

                        assert_eq!(graph.number_of_nodes(), n);
                        assert_eq!(graph.number_of_edges(), edges.len() as NumEdges);
                        assert_eq!(graph.edge_list(), edges.as_slice());

                        for u in 0..n {
                            assert_eq!(graph.neighbors_of_as_bitset(u), adj_matrix[u as usize]);
                            assert_eq!(graph.degree_of(u), adj_matrix[u as usize].cardinality());
                            for v in 0..n {
                                assert_eq!(graph.has_edge(u, v), adj_matrix[u as usize].get_bit(v));
                            }
                        }
                    }
                }
            }
        }
    };
    ($graph:ident<$undirected:literal>: GraphEdgeEditing) => {
        #[test]
        fn test_graph_edge_editing() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as NumNodes, 20, 50] {
                for m_ub in [n * 2, n * 5, n * 10] {
                    let mut graph = <$graph>::new();
                    graph.add_nodes(vec![None; n as usize]);

                    let mut adj_matrix: Vec<NodeBitSet> = vec![NodeBitSet::new(n); n as usize];
                    let mut m = 0 as NumEdges;

                    for _ in 0..m_ub {
                        let u = rng.random_range(0..n);
                        let v = rng.random_range(0..n);

                        let present = adj_matrix[u as usize].set_bit(v);
                        if $undirected {
                            adj_matrix[v as usize].set_bit(u);
                        }

                        assert_eq!(graph.try_add_edge(u, v), present);
                        if !present {
                            m += 1;
                            assert_eq!(graph.edge_list().last(), Some(&Edge(u, v)));
                        }

                        assert_eq!(graph.number_of_edges(), m);
                    }
                }
            }
        }
    };
}

pub(crate) use test_graph_ops;
