use std::ops::Range;

use itertools::Itertools;

use crate::*;

/// Marker trait for the edge interpretation of a graph
pub trait EdgeDirection {
    /// *true* if `Edge(u, v)` and `Edge(v, u)` are distinct
    const DIRECTED: bool;
}

/// Edges have an orientation: `Edge(u, v)` points from `u` to `v`
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Directed;

/// Edges are symmetric: `Edge(u, v)` connects `u` and `v` in both directions
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Undirected;

impl EdgeDirection for Directed {
    const DIRECTED: bool = true;
}

impl EdgeDirection for Undirected {
    const DIRECTED: bool = false;
}

/// Exposes whether a graph type interprets its edges as directed
pub trait GraphType {
    /// Either [`Directed`] or [`Undirected`]
    type Dir: EdgeDirection;

    /// Returns *true* if the graph is directed
    fn is_directed() -> bool {
        Self::Dir::DIRECTED
    }

    /// Returns *true* if the graph is undirected
    fn is_undirected() -> bool {
        !Self::is_directed()
    }
}

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns a range over all nodes. As nodes are dense, this is `0..n`.
    fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns an iterator over V.
    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices_range()
    }

    /// Returns empty bitset with one entry per node
    fn vertex_bitset_unset(&self) -> NodeBitSet {
        NodeBitSet::new(self.number_of_nodes())
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_edgeless(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Access to the edges in the order they were inserted
pub trait EdgeSequence: GraphEdgeOrder {
    /// Returns all edges in insertion order
    fn edge_list(&self) -> &[Edge];

    /// Returns an iterator over all edges in insertion order
    fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edge_list().iter().copied()
    }

    /// Returns all edges in sorted order.
    /// If `normalize`, every edge `(u, v)` is first rewritten such that `u <= v`.
    fn sorted_edges(&self, normalize: bool) -> Vec<Edge> {
        self.edges()
            .map(|e| if normalize { e.normalized() } else { e })
            .sorted_unstable()
            .collect_vec()
    }
}

/// Traits pertaining getters for neighborhoods
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns an iterator over the (open) neighborhood of a given vertex.
    /// For directed graphs these are the out-neighbors.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns the number of (outgoing) neighbors of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns an iterator over the degrees of all nodes
    fn degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.vertices().map(|u| self.degree_of(u))
    }

    /// Returns the maximum degree in the graph
    fn max_degree(&self) -> NumNodes {
        self.degrees().max().unwrap_or(0)
    }

    /// Returns a distribution sorted by degree
    fn degree_distribution(&self) -> Vec<(NumNodes, NumNodes)> {
        let mut distr = self
            .degrees()
            .counts()
            .into_iter()
            .map(|(d, n)| (d, n as NumNodes))
            .collect_vec();
        distr.sort_by_key(|(d, _)| *d);
        distr
    }

    /// Returns the neighbors of a given vertex as a bitset
    /// ** Panics if `u >= n` **
    fn neighbors_of_as_bitset(&self, u: Node) -> NodeBitSet {
        NodeBitSet::new_with_bits_set(self.number_of_nodes(), self.neighbors_of(u))
    }
}

/// Trait to test existence of certain structures in a graph.
pub trait AdjacencyTest: GraphNodeOrder {
    /// Returns *true* if the egde (u,v) exists in the graph.
    /// ** Panics if `u >= n || v >= n` **
    fn has_edge(&self, u: Node, v: Node) -> bool;

    /// Allows multiple edge-queries for a single node
    fn has_neighbors<const N: usize>(&self, u: Node, neighbors: [Node; N]) -> [bool; N] {
        neighbors.map(|v| self.has_edge(u, v))
    }
}

/// Trait for creating a new empty graph
pub trait GraphNew {
    /// Creates a graph without nodes or edges
    fn new() -> Self;

    /// Creates an empty graph with space reserved for `n` nodes and `m` edges
    fn with_capacity(n: NumNodes, m: NumEdges) -> Self;
}

/// Provides functions to append weighted nodes
pub trait GraphNodeEditing: GraphNodeOrder {
    /// Payload type carried by every node
    type Weight;

    /// Appends a node and returns its id, which is always the previous number of nodes.
    fn add_node(&mut self, weight: Option<Self::Weight>) -> Node;

    /// Appends one node per weight and returns the range of created ids
    fn add_nodes<I>(&mut self, weights: I) -> Range<Node>
    where
        I: IntoIterator<Item = Option<Self::Weight>>,
    {
        let start = self.number_of_nodes();
        for w in weights {
            self.add_node(w);
        }
        start..self.number_of_nodes()
    }
}

/// Read access to node payloads
pub trait NodeWeights: GraphNodeEditing {
    /// Returns the payloads of all nodes in id order; nodes without payload are `None`
    fn node_weights(&self) -> &[Option<Self::Weight>];

    /// Returns the payload of `u` if it has one
    /// ** Panics if `u >= n` **
    fn node_weight(&self, u: Node) -> Option<&Self::Weight> {
        self.node_weights()[u as usize].as_ref()
    }
}

/// Provides functions to insert edges
pub trait GraphEdgeEditing {
    /// Adds the edge *(u,v)* to the graph.
    /// ** Panics if `u >= n || v >= n` or the edge was already present **
    fn add_edge(&mut self, u: Node, v: Node) {
        assert!(!self.try_add_edge(u, v), "edge ({u},{v}) is already present");
    }

    /// Adds the edge `(u, v)` to the graph.
    /// Returns *true* exactly if the edge was present previously (the graph is then unchanged).
    /// ** Panics if `u >= n || v >= n` **
    fn try_add_edge(&mut self, u: Node, v: Node) -> bool;

    /// Adds all edges in the collection
    fn add_edges(&mut self, edges: impl Iterator<Item = impl Into<Edge>>) {
        for Edge(u, v) in edges.map(|d| d.into()) {
            self.add_edge(u, v);
        }
    }
}

/// A super trait for creating a graph from scratch from node payloads and a sequence of edges
pub trait GraphFromScratch: GraphNodeEditing {
    /// Creates a graph with one node per entry of `weights` and then inserts `edges` in order
    fn from_edges<I>(weights: Vec<Option<Self::Weight>>, edges: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Edge>;
}

impl<G> GraphFromScratch for G
where
    G: GraphNew + GraphNodeEditing + GraphEdgeEditing,
{
    fn from_edges<I>(weights: Vec<Option<Self::Weight>>, edges: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Edge>,
    {
        let edges = edges.into_iter();
        let mut graph =
            Self::with_capacity(weights.len() as NumNodes, edges.size_hint().0 as NumEdges);
        graph.add_nodes(weights);
        graph.add_edges(edges);
        graph
    }
}
