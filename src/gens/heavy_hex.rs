/*!
# Heavy-Hex Lattices

The heavy-hex lattice of odd distance `d >= 3` is the coupling skeleton of fault-tolerant qubit
layouts. It consists of `d` rows of `d` **data** nodes each, **row-link** nodes splicing every row
into a chain, and **connector** nodes joining adjacent rows.

## Numbering

Ids are allocated in three phases by a single counter:

1. Data nodes, row-major: `data(row, col) = row * d + col`.
2. Connectors, gap by gap (gap `g` sits between row `g` and row `g + 1`). Every gap has one
   *boundary* connector at column `0` (even `g`) or `d - 1` (odd `g`) joining two data nodes,
   and `(d - 1) / 2` *interior* connectors at every link position `j` with `j % 2 != g % 2`
   joining two row-links. Even gaps allocate the boundary connector first, odd gaps last.
3. Row-link nodes, row-major: link `j` of a row sits between data columns `j` and `j + 1`.

## Edge order

Edges are emitted in three passes, independent of the allocation order: first all row chains,
then all boundary connectors, then all interior connectors. Every edge points from the lower row
to the higher row, and within a row from the lower column to the higher column.

# Example

```
use topogen::{prelude::*, gens::*};

let g = directed_heavy_hex_graph(3).unwrap();
assert_eq!(g.number_of_nodes(), 19);
assert_eq!(
    g.edge_list()[12..],
    [Edge(0, 9), Edge(9, 3), Edge(5, 12), Edge(12, 8), Edge(14, 10), Edge(10, 16), Edge(15, 11), Edge(11, 17)]
);

let layout = HeavyHexLayout::new(3).unwrap();
assert_eq!(layout.role_of(12), NodeRole::BoundaryConnector { gap: 1, col: 2 });
```
*/

use itertools::Itertools;
use tracing::{debug, trace};

use super::*;

/// Position of a node within a heavy-hex lattice
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum NodeRole {
    /// Data node at `(row, col)`
    Data {
        /// Row of the node
        row: u32,
        /// Column of the node
        col: u32,
    },
    /// The connector of gap `gap` that joins `data(gap, col)` and `data(gap + 1, col)`
    BoundaryConnector {
        /// Gap between row `gap` and row `gap + 1`
        gap: u32,
        /// Either `0` or `d - 1`
        col: u32,
    },
    /// A connector of gap `gap` that joins `row_link(gap, link)` and `row_link(gap + 1, link)`
    InteriorConnector {
        /// Gap between row `gap` and row `gap + 1`
        gap: u32,
        /// Link position
        link: u32,
    },
    /// Row-link between `data(row, link)` and `data(row, link + 1)`
    RowLink {
        /// Row of the node
        row: u32,
        /// Link position
        link: u32,
    },
}

impl NodeRole {
    /// Returns *true* for data nodes
    pub fn is_data(&self) -> bool {
        matches!(self, NodeRole::Data { .. })
    }

    /// Returns *true* for boundary and interior connectors
    pub fn is_connector(&self) -> bool {
        matches!(
            self,
            NodeRole::BoundaryConnector { .. } | NodeRole::InteriorConnector { .. }
        )
    }
}

/// Id tables of a heavy-hex lattice.
///
/// All ids are assigned once, in allocation order, and the tables map lattice positions
/// to ids (and back) for edge emission and for consumers that need to tell node roles apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeavyHexLayout {
    distance: u32,
    /// indexed by `row * d + col`
    data: Vec<Node>,
    /// indexed by gap
    boundary: Vec<Node>,
    /// indexed by `gap * (d - 1) + link`; `None` where a gap has no interior connector
    interior: Vec<Option<OptionalNode>>,
    /// indexed by `row * (d - 1) + link`
    row_links: Vec<Node>,
    /// indexed by node
    roles: Vec<NodeRole>,
}

impl HeavyHexLayout {
    /// Allocates all ids of the lattice of the given distance.
    ///
    /// # Errors
    /// Returns [`GenError::Domain`] if `distance` is even, smaller than `3` or too large.
    pub fn new(distance: u32) -> Result<Self> {
        let d = validate_heavy_hex_distance(Some(distance))?;
        let (n, _) = heavy_hex_counts(d);
        let d_us = d as usize;

        let mut layout = Self {
            distance: d,
            data: Vec::with_capacity(d_us * d_us),
            boundary: Vec::with_capacity(d_us - 1),
            interior: vec![None; (d_us - 1) * (d_us - 1)],
            row_links: Vec::with_capacity(d_us * (d_us - 1)),
            roles: Vec::with_capacity(n as usize),
        };

        for row in 0..d {
            for col in 0..d {
                layout.allocate(NodeRole::Data { row, col });
            }
        }
        trace!(next = layout.roles.len(), "allocated data nodes");

        for gap in 0..d - 1 {
            let boundary = NodeRole::BoundaryConnector {
                gap,
                col: layout.boundary_column(gap),
            };

            if gap % 2 == 0 {
                layout.allocate(boundary);
            }
            for link in interior_links(d, gap) {
                layout.allocate(NodeRole::InteriorConnector { gap, link });
            }
            if gap % 2 == 1 {
                layout.allocate(boundary);
            }
        }
        trace!(next = layout.roles.len(), "allocated connector nodes");

        for row in 0..d {
            for link in 0..d - 1 {
                layout.allocate(NodeRole::RowLink { row, link });
            }
        }
        trace!(next = layout.roles.len(), "allocated row-link nodes");

        debug_assert_eq!(layout.roles.len(), n as usize);
        Ok(layout)
    }

    /// Hands out the next id and records it in the table matching its role
    fn allocate(&mut self, role: NodeRole) -> Node {
        let id = self.roles.len() as Node;
        match role {
            NodeRole::Data { .. } => self.data.push(id),
            NodeRole::BoundaryConnector { .. } => self.boundary.push(id),
            NodeRole::InteriorConnector { gap, link } => {
                let idx = self.link_index(gap, link);
                self.interior[idx] = OptionalNode::new(id);
            }
            NodeRole::RowLink { .. } => self.row_links.push(id),
        }
        self.roles.push(role);
        id
    }

    fn link_index(&self, row: u32, link: u32) -> usize {
        assert!(link + 1 < self.distance);
        (row * (self.distance - 1) + link) as usize
    }

    /// Returns the distance of the lattice
    pub fn distance(&self) -> u32 {
        self.distance
    }

    /// Returns the number of nodes of the lattice
    pub fn number_of_nodes(&self) -> NumNodes {
        self.roles.len() as NumNodes
    }

    /// Returns the id of the data node at `(row, col)`
    /// ** Panics if `row >= d || col >= d` **
    pub fn data(&self, row: u32, col: u32) -> Node {
        assert!(col < self.distance);
        self.data[(row * self.distance + col) as usize]
    }

    /// Returns the id of the row-link between `data(row, link)` and `data(row, link + 1)`
    /// ** Panics if `row >= d || link >= d - 1` **
    pub fn row_link(&self, row: u32, link: u32) -> Node {
        self.row_links[self.link_index(row, link)]
    }

    /// Returns the column of the boundary connector of `gap`: `0` for even gaps, `d - 1` for odd ones
    pub fn boundary_column(&self, gap: u32) -> u32 {
        if gap % 2 == 0 { 0 } else { self.distance - 1 }
    }

    /// Returns the id of the boundary connector of `gap`
    /// ** Panics if `gap >= d - 1` **
    pub fn boundary_connector(&self, gap: u32) -> Node {
        self.boundary[gap as usize]
    }

    /// Returns the link positions of the interior connectors of `gap` in increasing order
    pub fn interior_positions(&self, gap: u32) -> impl Iterator<Item = u32> {
        interior_links(self.distance, gap)
    }

    /// Returns the id of the interior connector of `gap` at link position `link`, if there is one
    /// ** Panics if `gap >= d - 1 || link >= d - 1` **
    pub fn interior_connector(&self, gap: u32, link: u32) -> Option<Node> {
        self.interior[self.link_index(gap, link)].map(|x| x.get())
    }

    /// Returns the role of `node`
    /// ** Panics if `node >= n` **
    pub fn role_of(&self, node: Node) -> NodeRole {
        self.roles[node as usize]
    }

    /// Returns the roles of all nodes in id order
    pub fn roles(&self) -> &[NodeRole] {
        &self.roles
    }

    /// Returns the edges of the lattice in emission order
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        let d = self.distance;

        let row_chains = (0..d)
            .cartesian_product(0..d - 1)
            .flat_map(move |(row, j)| {
                let link = self.row_link(row, j);
                [
                    Edge(self.data(row, j), link),
                    Edge(link, self.data(row, j + 1)),
                ]
            });

        let boundary_connectors = (0..d - 1).flat_map(move |gap| {
            let col = self.boundary_column(gap);
            let connector = self.boundary_connector(gap);
            [
                Edge(self.data(gap, col), connector),
                Edge(connector, self.data(gap + 1, col)),
            ]
        });

        let interior_connectors = (0..d - 1)
            .flat_map(move |gap| self.interior_positions(gap).map(move |j| (gap, j)))
            .filter_map(move |(gap, j)| {
                let connector = self.interior_connector(gap, j)?;
                Some([
                    Edge(self.row_link(gap, j), connector),
                    Edge(connector, self.row_link(gap + 1, j)),
                ])
            })
            .flatten();

        row_chains
            .chain(boundary_connectors)
            .chain(interior_connectors)
    }
}

/// Link positions `j` in `0..d-1` whose parity differs from the parity of `gap`
fn interior_links(distance: u32, gap: u32) -> impl Iterator<Item = u32> {
    ((gap + 1) % 2..distance - 1).step_by(2)
}

/// Generator for heavy-hex lattices.
///
/// The distance is required; generating without it fails with [`GenError::MissingArgument`].
///
/// [`heavy_hex_graph`] and [`directed_heavy_hex_graph`] build lattices without payloads.
/// Building through [`TopologyGenerator::build`] additionally accepts node weights, which are
/// assigned in id order exactly as for binomial trees (data nodes first).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct HeavyHex {
    distance: Option<u32>,
    bidirectional: bool,
}

impl HeavyHex {
    /// Creates a new generator without a distance
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates the distance and allocates the id tables of the lattice
    pub fn layout(&self) -> Result<HeavyHexLayout> {
        HeavyHexLayout::new(validate_heavy_hex_distance(self.distance)?)
    }
}

impl DistanceGen for HeavyHex {
    fn set_distance(&mut self, distance: u32) {
        self.distance = Some(distance);
    }
}

impl BidirectionalGen for HeavyHex {
    fn set_bidirectional(&mut self, bidirectional: bool) {
        self.bidirectional = bidirectional;
    }
}

impl TopologyGenerator for HeavyHex {
    fn number_of_nodes(&self) -> Result<NumNodes> {
        let d = validate_heavy_hex_distance(self.distance)?;
        Ok(heavy_hex_counts(d).0)
    }

    fn is_bidirectional(&self) -> bool {
        self.bidirectional
    }

    fn generate(&self) -> Result<Vec<Edge>> {
        let layout = self.layout()?;
        let edges = layout.edges().collect_vec();

        debug!(
            distance = layout.distance(),
            nodes = layout.number_of_nodes(),
            edges = edges.len(),
            "generated heavy-hex lattice"
        );
        Ok(edges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_d3() {
        let layout = HeavyHexLayout::new(3).unwrap();
        assert_eq!(layout.number_of_nodes(), 19);

        assert_eq!(layout.data(1, 2), 5);
        assert_eq!(layout.boundary_connector(0), 9);
        assert_eq!(layout.interior_connector(0, 1), Some(10));
        assert_eq!(layout.interior_connector(0, 0), None);
        assert_eq!(layout.interior_connector(1, 0), Some(11));
        assert_eq!(layout.boundary_connector(1), 12);
        assert_eq!(layout.boundary_column(1), 2);
        assert_eq!(layout.row_link(0, 0), 13);
        assert_eq!(layout.row_link(2, 1), 18);

        assert_eq!(layout.role_of(4), NodeRole::Data { row: 1, col: 1 });
        assert_eq!(layout.role_of(9), NodeRole::BoundaryConnector { gap: 0, col: 0 });
        assert_eq!(layout.role_of(11), NodeRole::InteriorConnector { gap: 1, link: 0 });
        assert_eq!(layout.role_of(16), NodeRole::RowLink { row: 1, link: 1 });
    }

    #[test]
    fn connector_allocation_order() {
        let layout = HeavyHexLayout::new(5).unwrap();

        // even gaps: boundary first, odd gaps: boundary last
        assert_eq!(layout.boundary_connector(0), 25);
        assert_eq!(layout.interior_positions(0).collect_vec(), vec![1, 3]);
        assert_eq!(layout.interior_connector(0, 3), Some(27));

        assert_eq!(layout.interior_positions(1).collect_vec(), vec![0, 2]);
        assert_eq!(layout.interior_connector(1, 0), Some(28));
        assert_eq!(layout.boundary_connector(1), 30);

        assert_eq!(layout.boundary_connector(2), 31);
        assert_eq!(layout.boundary_connector(3), 36);
        assert_eq!(layout.row_link(0, 0), 37);
    }

    #[test]
    fn roles_are_consistent() {
        for d in [3, 5, 7, 9, 11] {
            let layout = HeavyHexLayout::new(d).unwrap();
            let (n, _) = heavy_hex_counts(d);
            assert_eq!(layout.roles().len(), n as usize);

            let data = layout.roles().iter().filter(|r| r.is_data()).count();
            let connectors = layout.roles().iter().filter(|r| r.is_connector()).count();
            let d = d as usize;
            assert_eq!(data, d * d);
            assert_eq!(connectors, (d * d - 1) / 2);

            for (u, role) in layout.roles().iter().enumerate() {
                let u = u as Node;
                let lookup = match *role {
                    NodeRole::Data { row, col } => layout.data(row, col),
                    NodeRole::BoundaryConnector { gap, .. } => layout.boundary_connector(gap),
                    NodeRole::InteriorConnector { gap, link } => {
                        layout.interior_connector(gap, link).unwrap()
                    }
                    NodeRole::RowLink { row, link } => layout.row_link(row, link),
                };
                assert_eq!(lookup, u);
            }
        }
    }

    #[test]
    fn edges_d3() {
        let edges = HeavyHex::new().distance(3).generate().unwrap();
        assert_eq!(
            edges,
            vec![
                Edge(0, 13),
                Edge(13, 1),
                Edge(1, 14),
                Edge(14, 2),
                Edge(3, 15),
                Edge(15, 4),
                Edge(4, 16),
                Edge(16, 5),
                Edge(6, 17),
                Edge(17, 7),
                Edge(7, 18),
                Edge(18, 8),
                Edge(0, 9),
                Edge(9, 3),
                Edge(5, 12),
                Edge(12, 8),
                Edge(14, 10),
                Edge(10, 16),
                Edge(15, 11),
                Edge(11, 17),
            ]
        );
    }

    /// Returns `(row, column)` of a node, where links and interior connectors sit between columns
    fn position(role: NodeRole, d: u32) -> (u32, f64) {
        match role {
            NodeRole::Data { row, col } => (2 * row, col as f64),
            NodeRole::RowLink { row, link } => (2 * row, link as f64 + 0.5),
            NodeRole::BoundaryConnector { gap, col } => {
                assert!(col == 0 || col == d - 1);
                (2 * gap + 1, col as f64)
            }
            NodeRole::InteriorConnector { gap, link } => (2 * gap + 1, link as f64 + 0.5),
        }
    }

    #[test]
    fn edges_point_downwards_or_rightwards() {
        for d in [3, 5, 7, 9] {
            let layout = HeavyHexLayout::new(d).unwrap();
            for Edge(u, v) in layout.edges() {
                let (ru, cu) = position(layout.role_of(u), d);
                let (rv, cv) = position(layout.role_of(v), d);
                assert!(ru < rv || (ru == rv && cu < cv), "({u},{v})");
            }
        }
    }

    #[test]
    fn degrees() {
        for d in [3, 5, 7, 9, 11] {
            let g = DirectedGraph::<()>::heavy_hex(d, false).unwrap();
            let undirected = UndirectedGraph::<()>::heavy_hex(d, false).unwrap();
            assert_eq!(g.edge_list(), undirected.edge_list());
            assert_eq!(undirected.max_degree(), 3);

            let layout = HeavyHexLayout::new(d).unwrap();
            for u in undirected.vertices() {
                if layout.role_of(u).is_connector() {
                    assert_eq!(undirected.degree_of(u), 2);
                }
            }
        }
    }

    #[test]
    fn bidirectional_is_ignored_on_undirected_builds() {
        for d in [3, 5, 7] {
            let generator = HeavyHex::new().distance(d).bidirectional(true);
            let m = 2 * d * (d - 1) + (d + 1) * (d - 1);
            assert_eq!(generator.generate().unwrap().len(), m as usize);

            let g: UndirectedGraph = generator.build(None).unwrap();
            assert_eq!(g.number_of_edges(), m);
            assert_eq!(g.edge_list(), heavy_hex_graph(d, false).unwrap().edge_list());

            let g: DirectedGraph = generator.build(None).unwrap();
            assert_eq!(g.number_of_edges(), 2 * m);
        }
    }

    #[test]
    fn invalid_distances() {
        for d in [0, 1, 2, 4, 10] {
            assert!(HeavyHex::new().distance(d).generate().unwrap_err().is_domain());
            assert!(HeavyHexLayout::new(d).unwrap_err().is_domain());
        }
        assert!(
            HeavyHex::new()
                .layout()
                .unwrap_err()
                .is_missing_argument()
        );
    }
}
