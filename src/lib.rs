/*!
`topogen` builds deterministic, parametric graph topologies from a handful of shape parameters.

Every generator is **bit-exact**: node ids and the order in which edges are emitted depend only on
the parameters, never on hashing or traversal order. Downstream consumers (test fixtures,
hardware-mapping tools) can therefore rely on fixed numbering across runs and releases.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
Ids are handed out densely in creation order.
For **edges**, we use a simple tuple-struct `Edge(Node, Node)`.

Generated graphs are stored in an [`EdgeListGraph`](crate::repr::EdgeListGraph), which keeps the
edge sequence in insertion order and an optional payload ("weight") per node:

- In an **undirected** graph ([`UndirectedGraph`](crate::repr::UndirectedGraph)), `Edge(u, v)`
  connects both endpoints symmetrically, but the emitted orientation is still preserved in the edge list.
- In a **directed** graph ([`DirectedGraph`](crate::repr::DirectedGraph)), the edge points from `u` to `v`.

# Generators

- [`BinomialTree`](crate::gens::BinomialTree): the binomial tree of order `n` with `2^n` nodes,
  built by recursive doubling.
- [`HeavyHex`](crate::gens::HeavyHex): the heavy-hex lattice of odd distance `d`, the coupling
  skeleton of fault-tolerant qubit layouts.

Generators are configured as builders and validated eagerly: a failing call returns a
[`GenError`](crate::error::GenError) before any node is created.

```
use topogen::{prelude::*, gens::*};

let tree: DirectedGraph<u32> = BinomialTree::new().order(2).build(Some(vec![0, 1, 2, 3])).unwrap();
assert_eq!(tree.number_of_nodes(), 4);
assert_eq!(tree.sorted_edges(false), vec![Edge(0, 1), Edge(0, 2), Edge(2, 3)]);

let lattice = heavy_hex_graph(3, false).unwrap();
assert_eq!(lattice.number_of_nodes(), 19);
assert_eq!(lattice.edge_list()[..2], [Edge(0, 13), Edge(13, 1)]);
```

# Usage

In most use-cases, `use topogen::{prelude::*, gens::*};` suffices.
*/

pub mod edge;
pub mod error;
pub mod gens;
pub mod node;
pub mod ops;
pub mod repr;
pub(crate) mod testing;

pub use edge::*;
pub use node::*;

/// `topogen::prelude` includes definitions for nodes and edges, all basic graph operation traits as well as the graph representations.
pub mod prelude {
    pub use super::{edge::*, error::GenError, node::*, ops::*, repr::*};
}
