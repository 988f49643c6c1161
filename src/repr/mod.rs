/*!
# Graph Representations

Generated graphs are stored in an [`EdgeListGraph`], which keeps

- one optional payload per node, indexed by the dense node id,
- the edges in exactly the order they were inserted, and
- an adjacency array per node for neighborhood queries.

Directedness is fixed by the type parameter ([`Directed`] or [`Undirected`]);
[`DirectedGraph`] and [`UndirectedGraph`] are the two instantiations used throughout the crate.

[`digest`] computes a SHA-256 fingerprint over the node count and edge sequence of a graph.
*/

use crate::{ops::*, *};

mod edge_list;

pub mod digest;

pub use edge_list::*;

/// Directed graph whose nodes carry payloads of type `W`
pub type DirectedGraph<W = ()> = EdgeListGraph<Directed, W>;

/// Undirected graph whose nodes carry payloads of type `W`
pub type UndirectedGraph<W = ()> = EdgeListGraph<Undirected, W>;
