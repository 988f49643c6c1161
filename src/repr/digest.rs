/*!
# Graph Hash Digests

This module provides the [`GraphDigest`] trait, which computes a **hash-based fingerprint** of a
graph's numbering and edge sequence.

The digest encodes:
- the number of nodes, and
- the edge list **in insertion order**,

before feeding them into a cryptographic hash function. Node payloads are not part of the digest.

Since generators are bit-exact, two calls with identical parameters must produce identical digests,
which makes a digest a compact regression fixture.

## Example
```
use topogen::{prelude::*, repr::digest::GraphDigest};

let mut graph = UndirectedGraph::<()>::new();
graph.add_nodes(vec![None; 10]);
graph.add_edge(4, 3);
graph.add_edge(1, 2);

// Computes a SHA-256 digest (hex string of length 64).
assert_eq!(
    graph.digest_sha256(),
    "510cbaece7da0c03d26e0860cc968e02e6ee3b4e921df25245f967291f848387"
);
```
*/

use std::fmt::LowerHex;

use super::*;
use ::digest::{Digest, Output};

/// Trait for computing a hash digest over the node count and edge sequence of a graph.
///
/// Digests are:
/// - **Order sensitive**: The same edge set emitted in a different order yields a different digest.
/// - **Payload independent**: Node weights are ignored.
/// - **Deterministic**: No hashing of unordered containers is involved.
pub trait GraphDigest {
    /// Computes a digest of the graph using the provided hash function `D`.
    ///
    /// The result is returned as a **hexadecimal string**.
    fn digest<D>(&self) -> String
    where
        Output<D>: LowerHex,
        D: Digest;

    /// Computes a **SHA-256 digest** of the graph.
    ///
    /// The returned string is exactly 64 characters long.
    fn digest_sha256(&self) -> String {
        self.digest::<sha2::Sha256>()
    }
}

impl<G> GraphDigest for G
where
    G: GraphNodeOrder + EdgeSequence,
{
    fn digest<D>(&self) -> String
    where
        Output<D>: LowerHex,
        D: Digest,
    {
        let mut hasher = D::new();
        let mut buffer = [0u8; 8];

        let encode = |buf: &mut [u8], u: Node| {
            buf[..4].copy_from_slice(&u.to_le_bytes());
        };

        // first encode the number of nodes in the graph
        encode(&mut buffer[0..4], self.number_of_nodes());
        hasher.update(buffer);

        // then append the edge list as emitted
        for Edge(u, v) in self.edges() {
            encode(&mut buffer[0..], u);
            encode(&mut buffer[4..], v);
            hasher.update(buffer);
        }

        format!("{:x}", hasher.finalize())
    }
}
