/*!
# Graph Generators

This module provides a suite of traits and builder patterns for constructing deterministic
topologies from a small set of shape parameters.

Generators are designed to support a builder-style pattern for fluent configuration. The typical
usage workflow is:

1. Create a generator instance (e.g., `HeavyHex::new()`).
2. Set parameters using trait methods (e.g., `.distance(5).bidirectional(true)`).
3. Generate edges via `generate()` / `stream()`, or a whole graph via `build()`.

Every call validates its parameters first and reports a [`GenError`] before any node is created.
Node ids and the order of emitted edges only depend on the parameters.

In addition, the [`DeterministicGraph`] trait provides constructors directly on graph types, and
the free functions [`binomial_tree_graph`], [`directed_binomial_tree_graph`], [`heavy_hex_graph`]
and [`directed_heavy_hex_graph`] cover the common cases.

Supported models include:
- [`BinomialTree`]: binomial trees of order `n` with `2^n` nodes
- [`HeavyHex`]: heavy-hex lattices of odd distance `d >= 3`
*/

use tracing::debug;

use crate::{error::Result, prelude::*};

mod binomial;
mod heavy_hex;
mod validate;
mod weights;

pub use binomial::*;
pub use heavy_hex::*;
pub use validate::*;
pub use weights::*;

/// Trait for generators parameterized by an order (e.g. binomial trees).
pub trait OrderGen: Sized {
    /// Sets the order of the generator in place.
    fn set_order(&mut self, order: u32);

    /// Sets the order of the generator.
    fn order(mut self, order: u32) -> Self {
        self.set_order(order);
        self
    }
}

/// Trait for generators parameterized by a lattice distance (e.g. heavy-hex lattices).
pub trait DistanceGen: Sized {
    /// Sets the distance of the generator in place.
    fn set_distance(&mut self, distance: u32);

    /// Sets the distance of the generator.
    fn distance(mut self, distance: u32) -> Self {
        self.set_distance(distance);
        self
    }
}

/// Trait for generators that can emit every edge in both orientations.
///
/// If enabled, each edge `(u, v)` is immediately followed by `(v, u)`.
/// This is only meaningful for directed graphs.
pub trait BidirectionalGen: Sized {
    /// Enables/disables reverse edges in place.
    fn set_bidirectional(&mut self, bidirectional: bool);

    /// Enables/disables reverse edges.
    fn bidirectional(mut self, bidirectional: bool) -> Self {
        self.set_bidirectional(bidirectional);
        self
    }
}

/// General trait for a configurable deterministic edge generator.
pub trait TopologyGenerator {
    /// Validates the parameters and returns the number of nodes of the topology.
    fn number_of_nodes(&self) -> Result<NumNodes>;

    /// Returns *true* if directed graphs built from this generator follow every edge by its reverse.
    fn is_bidirectional(&self) -> bool;

    /// Validates the parameters and generates the full, ordered edge list in one orientation.
    /// Reverse edges are only added by [`GraphFromGenerator::from_generator`].
    fn generate(&self) -> Result<Vec<Edge>>;

    /// Creates an iterator over the generated edges.
    ///
    /// As the topologies are small compared to their construction cost, this is just an
    /// iterator over the already generated list of edges.
    fn stream(&self) -> Result<impl Iterator<Item = Edge>> {
        Ok(self.generate()?.into_iter())
    }

    /// Builds a graph of type `G` from this generator, assigning `weights` to the first nodes.
    ///
    /// See [`GraphFromGenerator::from_generator`].
    fn build<G>(&self, weights: Option<Vec<G::Weight>>) -> Result<G>
    where
        G: GraphFromGenerator,
        Self: Sized,
    {
        G::from_generator(self, weights)
    }
}

/// Trait for building full graph instances from a [`TopologyGenerator`].
pub trait GraphFromGenerator: GraphFromScratch + Sized {
    /// Creates a graph from the given generator.
    ///
    /// Runs the full pipeline: validate parameters, assign weights, allocate nodes in id order,
    /// emit edges in the generator's order. Both parameter and weight errors are reported
    /// before the first node is created.
    ///
    /// Reverse edges of a bidirectional generator are only inserted into directed graphs:
    /// in an undirected graph they would coincide with the original edges.
    fn from_generator<T>(generator: &T, weights: Option<Vec<Self::Weight>>) -> Result<Self>
    where
        T: TopologyGenerator;
}

impl<G> GraphFromGenerator for G
where
    G: GraphFromScratch + GraphEdgeOrder + GraphType,
{
    fn from_generator<T>(generator: &T, weights: Option<Vec<Self::Weight>>) -> Result<Self>
    where
        T: TopologyGenerator,
    {
        let n = generator.number_of_nodes()?;
        let weights = assign_weights(n, weights)?;
        let edges = generator.generate()?;

        let bidirectional = generator.is_bidirectional() && Self::is_directed();
        let graph = Self::from_edges(weights, with_reverse_edges(edges, bidirectional));
        debug!(
            nodes = graph.number_of_nodes(),
            edges = graph.number_of_edges(),
            bidirectional,
            "built graph from generator"
        );
        Ok(graph)
    }
}

/// Trait for building graph instances of the supported models directly on the graph type.
///
/// Reverse edges requested via `bidirectional` are only emitted if the graph type is directed.
pub trait DeterministicGraph: GraphFromGenerator {
    /// Creates a binomial tree of the given order.
    ///
    /// # Example
    /// ```
    /// use topogen::{prelude::*, gens::*};
    ///
    /// let g = DirectedGraph::<char>::binomial_tree(1, Some(vec!['r']), true).unwrap();
    /// assert_eq!(g.edge_list(), &[Edge(0, 1), Edge(1, 0)]);
    /// assert_eq!(g.node_weights(), &[Some('r'), None]);
    /// ```
    fn binomial_tree(
        order: u32,
        weights: Option<Vec<Self::Weight>>,
        bidirectional: bool,
    ) -> Result<Self> {
        BinomialTree::new()
            .order(order)
            .bidirectional(bidirectional)
            .build(weights)
    }

    /// Creates a heavy-hex lattice of the given distance. No node carries a payload.
    fn heavy_hex(distance: u32, bidirectional: bool) -> Result<Self> {
        HeavyHex::new()
            .distance(distance)
            .bidirectional(bidirectional)
            .build(None)
    }
}

impl<G> DeterministicGraph for G where G: GraphFromGenerator {}

/// Builds a binomial tree from a possibly omitted order
fn binomial_tree_with<G>(
    order: Option<u32>,
    weights: Option<Vec<G::Weight>>,
    bidirectional: bool,
) -> Result<G>
where
    G: GraphFromGenerator,
{
    let mut generator = BinomialTree::new().bidirectional(bidirectional);
    if let Some(order) = order {
        generator.set_order(order);
    }
    generator.build(weights)
}

/// Creates an undirected binomial tree of order `order` with `2^order` nodes.
///
/// - `order` is required: `None` fails with [`GenError::MissingArgument`].
/// - `weights` are assigned to the nodes `0, 1, ...`; missing entries become `None`,
///   excess entries fail with [`GenError::OutOfRange`].
/// - `bidirectional` has no effect on undirected graphs.
///
/// # Example
/// ```
/// use topogen::{prelude::*, gens::*};
///
/// let g = binomial_tree_graph(Some(2), Some(vec![0, 1]), false).unwrap();
/// assert_eq!(g.node_weights(), &[Some(0), Some(1), None, None]);
/// assert_eq!(g.number_of_edges(), 3);
///
/// let err = binomial_tree_graph(None, Some(vec![0, 1, 2, 3]), false).unwrap_err();
/// assert!(err.is_missing_argument());
/// ```
pub fn binomial_tree_graph<W>(
    order: Option<u32>,
    weights: Option<Vec<W>>,
    bidirectional: bool,
) -> Result<UndirectedGraph<W>> {
    binomial_tree_with(order, weights, bidirectional)
}

/// Creates a directed binomial tree of order `order` with `2^order` nodes.
///
/// Every edge points from the parent (the lower id) to the child (the higher id).
/// Errors as in [`binomial_tree_graph`].
pub fn directed_binomial_tree_graph<W>(
    order: Option<u32>,
    weights: Option<Vec<W>>,
) -> Result<DirectedGraph<W>> {
    binomial_tree_with(order, weights, false)
}

/// Creates an undirected heavy-hex lattice of odd distance `distance >= 3`.
///
/// `bidirectional` has no effect on undirected graphs.
///
/// # Example
/// ```
/// use topogen::{prelude::*, gens::*};
///
/// let g = heavy_hex_graph(5, false).unwrap();
/// assert_eq!(g.number_of_nodes(), 57);
/// assert_eq!(g.number_of_edges(), 64);
///
/// assert!(heavy_hex_graph(2, false).unwrap_err().is_domain());
/// ```
pub fn heavy_hex_graph(distance: u32, bidirectional: bool) -> Result<UndirectedGraph> {
    UndirectedGraph::heavy_hex(distance, bidirectional)
}

/// Creates a directed heavy-hex lattice of odd distance `distance >= 3`.
///
/// Edges point from the lower row to the higher row, and within a row from the lower column
/// to the higher column.
pub fn directed_heavy_hex_graph(distance: u32) -> Result<DirectedGraph> {
    DirectedGraph::heavy_hex(distance, false)
}

/// Follows every edge by its reverse if `bidirectional` is set
fn with_reverse_edges<I>(edges: I, bidirectional: bool) -> impl Iterator<Item = Edge>
where
    I: IntoIterator<Item = Edge>,
{
    edges
        .into_iter()
        .flat_map(move |e| std::iter::once(e).chain(bidirectional.then(|| e.reverse())))
}
