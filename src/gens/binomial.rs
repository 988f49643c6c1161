/*!
# Binomial Trees

A binomial tree of order `n` has exactly `2^n` nodes and `2^n - 1` edges.
It is defined recursively:

- The tree of order `0` is a single node.
- The tree of order `k` consists of two copies of the tree of order `k - 1` with `L = 2^(k-1)`
  nodes each: the first copy keeps the ids `0..L`, the second copy receives the ids `L..2L`,
  and an additional edge `(0, L)` attaches the root of the second copy to the root of the first.

Edges always point from the parent (lower id) to the child (higher id).

# Example

```
use topogen::{prelude::*, gens::*};

let g: UndirectedGraph = BinomialTree::new().order(3).build(None).unwrap();
assert_eq!(
    g.sorted_edges(false),
    vec![Edge(0, 1), Edge(0, 2), Edge(0, 4), Edge(2, 3), Edge(4, 5), Edge(4, 6), Edge(6, 7)]
);
```
*/

use tracing::debug;

use super::*;

/// Generator for binomial trees.
///
/// The order is required; generating without it fails with [`GenError::MissingArgument`].
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct BinomialTree {
    order: Option<u32>,
    bidirectional: bool,
}

impl BinomialTree {
    /// Creates a new generator without an order
    pub fn new() -> Self {
        Self::default()
    }
}

impl OrderGen for BinomialTree {
    fn set_order(&mut self, order: u32) {
        self.order = Some(order);
    }
}

impl BidirectionalGen for BinomialTree {
    fn set_bidirectional(&mut self, bidirectional: bool) {
        self.bidirectional = bidirectional;
    }
}

impl TopologyGenerator for BinomialTree {
    fn number_of_nodes(&self) -> Result<NumNodes> {
        let order = validate_binomial_order(self.order)?;
        Ok(binomial_tree_counts(order).0)
    }

    fn is_bidirectional(&self) -> bool {
        self.bidirectional
    }

    /// Runs the doubling step `order` times. The order among the edges is an implementation
    /// detail, only the edge set is fixed.
    fn generate(&self) -> Result<Vec<Edge>> {
        let order = validate_binomial_order(self.order)?;
        let (n, m) = binomial_tree_counts(order);

        let mut edges: Vec<Edge> = Vec::with_capacity(m as usize);
        let mut len: NumNodes = 1;
        for _ in 0..order {
            let end = edges.len();
            edges.extend_from_within(..end);
            for e in &mut edges[end..] {
                *e = e.shifted(len);
            }

            edges.push(Edge(0, len));
            len *= 2;
        }

        debug_assert_eq!(len, n);
        debug_assert_eq!(edges.len(), m as usize);
        debug!(order, nodes = n, edges = m, "generated binomial tree");
        Ok(edges)
    }
}
