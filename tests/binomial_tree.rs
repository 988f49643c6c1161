use itertools::Itertools;
use topogen::{gens::*, prelude::*};

fn expected_edges(order: u32) -> Vec<Edge> {
    let list: &[(Node, Node)] = match order {
        0 => &[],
        1 => &[(0, 1)],
        2 => &[(0, 1), (0, 2), (2, 3)],
        3 => &[(0, 1), (0, 2), (0, 4), (2, 3), (4, 5), (4, 6), (6, 7)],
        4 => &[
            (0, 1),
            (0, 2),
            (0, 4),
            (0, 8),
            (2, 3),
            (4, 5),
            (4, 6),
            (6, 7),
            (8, 9),
            (8, 10),
            (8, 12),
            (10, 11),
            (12, 13),
            (12, 14),
            (14, 15),
        ],
        _ => unreachable!(),
    };
    list.iter().map(Edge::from).collect()
}

#[test]
fn undirected() {
    for order in 0..5 {
        let g = binomial_tree_graph::<()>(Some(order), None, false).unwrap();
        assert_eq!(g.number_of_nodes(), 1 << order);
        assert_eq!(g.number_of_edges(), (1 << order) - 1);

        let expected = expected_edges(order);
        for e in g.edges() {
            assert!(expected.contains(&e), "{e} in order {order}");
        }
    }
}

#[test]
fn directed() {
    for order in 0..5 {
        let g = directed_binomial_tree_graph::<()>(Some(order), None).unwrap();
        assert_eq!(g.number_of_nodes(), 1 << order);
        assert_eq!(g.number_of_edges(), (1 << order) - 1);
        assert_eq!(g.sorted_edges(false), expected_edges(order));
    }
}

#[test]
fn weights() {
    let g = binomial_tree_graph(Some(2), Some((0..4).collect_vec()), false).unwrap();
    assert_eq!(g.number_of_nodes(), 4);
    assert_eq!(g.node_weights(), &[Some(0), Some(1), Some(2), Some(3)]);
    assert_eq!(g.number_of_edges(), 3);
    for e in g.edges() {
        assert!(expected_edges(3).contains(&e));
    }

    let g = directed_binomial_tree_graph(Some(2), Some((0..4).collect_vec())).unwrap();
    assert_eq!(g.node_weights(), &[Some(0), Some(1), Some(2), Some(3)]);
    assert_eq!(g.number_of_edges(), 3);
}

#[test]
fn fewer_weights_than_nodes() {
    let g = binomial_tree_graph(Some(2), Some(vec![0, 1]), false).unwrap();
    assert_eq!(g.number_of_nodes(), 4);
    assert_eq!(g.node_weights(), &[Some(0), Some(1), None, None]);
    assert_eq!(g.number_of_edges(), 3);

    let g = directed_binomial_tree_graph(Some(2), Some(vec![0, 1])).unwrap();
    assert_eq!(g.node_weights(), &[Some(0), Some(1), None, None]);
    assert_eq!(g.number_of_edges(), 3);
}

#[test]
fn more_weights_than_nodes() {
    let err = binomial_tree_graph(Some(2), Some((0..7).collect_vec()), false).unwrap_err();
    assert!(err.is_out_of_range());
    assert_eq!(err.to_string(), "cannot place 7 weights onto 4 nodes");

    let err = directed_binomial_tree_graph(Some(2), Some((0..7).collect_vec())).unwrap_err();
    assert!(err.is_out_of_range());
}

#[test]
fn missing_order() {
    let err = binomial_tree_graph(None, Some((0..4).collect_vec()), false).unwrap_err();
    assert!(err.is_missing_argument());
    assert_eq!(err.to_string(), "missing required argument `order`");

    let err = directed_binomial_tree_graph(None, Some((0..4).collect_vec())).unwrap_err();
    assert!(err.is_missing_argument());
}

#[test]
fn order_too_large() {
    let err = binomial_tree_graph::<()>(Some(32), None, false).unwrap_err();
    assert!(err.is_domain());
}
