use std::marker::PhantomData;

use smallvec::SmallVec;

use crate::testing::test_graph_ops;

use super::*;

/// Generated topologies have small degrees (at most 3 for heavy-hex lattices),
/// so most neighborhoods stay inline.
type Neighbors = SmallVec<[Node; 4]>;

/// A graph that remembers the insertion order of its edges and stores an optional payload per node.
///
/// - Nodes are numbered densely in creation order and never removed.
/// - `edge_list()` returns the edges exactly as they were added.
/// - Adding an edge whose endpoints do not exist yet panics, as does adding an edge twice.
///
/// # Type parameters
/// - `D`: [`Directed`] or [`Undirected`]
/// - `W`: the node payload
///
/// # Example
/// ```
/// use topogen::prelude::*;
///
/// let mut g = UndirectedGraph::<&str>::new();
/// let a = g.add_node(Some("a"));
/// let b = g.add_node(None);
/// g.add_edge(b, a);
///
/// assert_eq!(g.edge_list(), &[Edge(1, 0)]);
/// assert!(g.has_edge(0, 1));
/// assert_eq!(g.node_weights(), &[Some("a"), None]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeListGraph<D: EdgeDirection, W = ()> {
    weights: Vec<Option<W>>,
    edges: Vec<Edge>,
    nbs: Vec<Neighbors>,
    _dir: PhantomData<D>,
}

impl<D: EdgeDirection, W> GraphType for EdgeListGraph<D, W> {
    type Dir = D;
}

impl<D: EdgeDirection, W> GraphNew for EdgeListGraph<D, W> {
    fn new() -> Self {
        Self::with_capacity(0, 0)
    }

    fn with_capacity(n: NumNodes, m: NumEdges) -> Self {
        Self {
            weights: Vec::with_capacity(n as usize),
            edges: Vec::with_capacity(m as usize),
            nbs: Vec::with_capacity(n as usize),
            _dir: PhantomData,
        }
    }
}

impl<D: EdgeDirection, W> Default for EdgeListGraph<D, W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: EdgeDirection, W> GraphNodeOrder for EdgeListGraph<D, W> {
    fn number_of_nodes(&self) -> NumNodes {
        self.weights.len() as NumNodes
    }
}

impl<D: EdgeDirection, W> GraphEdgeOrder for EdgeListGraph<D, W> {
    fn number_of_edges(&self) -> NumEdges {
        self.edges.len() as NumEdges
    }
}

impl<D: EdgeDirection, W> EdgeSequence for EdgeListGraph<D, W> {
    fn edge_list(&self) -> &[Edge] {
        &self.edges
    }
}

impl<D: EdgeDirection, W> AdjacencyList for EdgeListGraph<D, W> {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.nbs[u as usize].iter().copied()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs[u as usize].len() as NumNodes
    }
}

impl<D: EdgeDirection, W> AdjacencyTest for EdgeListGraph<D, W> {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        assert!(v < self.number_of_nodes());
        self.nbs[u as usize].contains(&v)
    }
}

impl<D: EdgeDirection, W> GraphNodeEditing for EdgeListGraph<D, W> {
    type Weight = W;

    fn add_node(&mut self, weight: Option<W>) -> Node {
        let u = self.number_of_nodes();
        assert!(u < INVALID_NODE, "graph cannot hold more than {INVALID_NODE} nodes");

        self.weights.push(weight);
        self.nbs.push(Neighbors::new());
        u
    }
}

impl<D: EdgeDirection, W> NodeWeights for EdgeListGraph<D, W> {
    fn node_weights(&self) -> &[Option<W>] {
        &self.weights
    }
}

impl<D: EdgeDirection, W> GraphEdgeEditing for EdgeListGraph<D, W> {
    fn try_add_edge(&mut self, u: Node, v: Node) -> bool {
        let n = self.number_of_nodes();
        assert!(
            u < n && v < n,
            "edge ({u},{v}) references a node that does not exist yet (n = {n})"
        );

        if self.has_edge(u, v) {
            return true;
        }

        self.edges.push(Edge(u, v));
        self.nbs[u as usize].push(v);
        if !D::DIRECTED && u != v {
            self.nbs[v as usize].push(u);
        }
        false
    }
}

impl<D: EdgeDirection, W> EdgeListGraph<D, W> {
    /// Consumes the graph and returns its node payloads and edge sequence
    pub fn into_parts(self) -> (Vec<Option<W>>, Vec<Edge>) {
        (self.weights, self.edges)
    }
}

test_graph_ops!(
    test_directed,
    DirectedGraph,
    false,
    (GraphNew, AdjacencyList, GraphEdgeEditing)
);
test_graph_ops!(
    test_undirected,
    UndirectedGraph,
    true,
    (GraphNew, AdjacencyList, GraphEdgeEditing)
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_ids_are_dense() {
        let mut g = DirectedGraph::<u32>::new();
        assert!(g.is_empty());

        for i in 0..10 {
            assert_eq!(g.add_node(Some(i * 10)), i);
        }
        assert_eq!(g.number_of_nodes(), 10);
        assert_eq!(g.node_weight(3), Some(&30));

        let range = g.add_nodes([None, Some(7)]);
        assert_eq!(range, 10..12);
        assert_eq!(g.node_weight(10), None);
        assert_eq!(g.node_weight(11), Some(&7));
    }

    #[test]
    fn edge_order_is_insertion_order() {
        let mut g = UndirectedGraph::<()>::from_edges(
            vec![None; 4],
            [Edge(3, 1), Edge(0, 2), Edge(2, 1)].into_iter(),
        );

        assert_eq!(g.edge_list(), &[Edge(3, 1), Edge(0, 2), Edge(2, 1)]);
        assert_eq!(
            g.sorted_edges(true),
            vec![Edge(0, 2), Edge(1, 2), Edge(1, 3)]
        );

        // undirected edges are symmetric
        assert!(g.try_add_edge(1, 3));
        assert_eq!(g.number_of_edges(), 3);
        assert_eq!(g.has_neighbors(1, [0, 2, 3]), [false, true, true]);
        assert_eq!(g.degree_distribution(), vec![(1, 2), (2, 2)]);
    }

    #[test]
    fn directed_edges_keep_orientation() {
        let mut g = DirectedGraph::<()>::from_edges(vec![None; 3], [Edge(0, 1)].into_iter());
        assert!(g.has_edge(0, 1));
        assert!(!g.has_edge(1, 0));

        assert!(!g.try_add_edge(1, 0));
        assert_eq!(g.edge_list(), &[Edge(0, 1), Edge(1, 0)]);
        assert_eq!(g.max_degree(), 1);
    }

    #[test]
    #[should_panic]
    fn forward_reference_panics() {
        let mut g = UndirectedGraph::<()>::new();
        g.add_node(None);
        g.add_edge(0, 1);
    }

    #[test]
    #[should_panic]
    fn duplicate_edge_panics() {
        let mut g = UndirectedGraph::<()>::from_edges(vec![None; 2], [Edge(0, 1)].into_iter());
        g.add_edge(1, 0);
    }

    #[test]
    fn into_parts() {
        let g = DirectedGraph::<char>::from_edges(vec![Some('x'), None], [Edge(1, 0)].into_iter());
        let (weights, edges) = g.into_parts();
        assert_eq!(weights, vec![Some('x'), None]);
        assert_eq!(edges, vec![Edge(1, 0)]);
    }
}
