/*!
# Parameter Validation

Checks the shape parameters of all generators before any node is allocated, and provides the
closed-form node/edge counts of the supported models.
*/

use tracing::debug;

use super::*;

/// Largest binomial-tree order whose `2^order` nodes still fit into [`NumNodes`]
/// (the value [`INVALID_NODE`] is reserved).
pub const MAX_BINOMIAL_ORDER: u32 = 31;

/// Smallest supported heavy-hex distance.
pub const MIN_HEAVY_HEX_DISTANCE: u32 = 3;

/// Largest odd heavy-hex distance whose edge count, even with reverse edges, fits into [`NumEdges`].
pub const MAX_HEAVY_HEX_DISTANCE: u32 = 26_755;

/// Returns `(number of nodes, number of edges)` of a binomial tree of the given order.
/// ** Panics if `order > MAX_BINOMIAL_ORDER` **
///
/// # Example
/// ```
/// use topogen::gens::binomial_tree_counts;
///
/// assert_eq!(binomial_tree_counts(0), (1, 0));
/// assert_eq!(binomial_tree_counts(4), (16, 15));
/// ```
pub fn binomial_tree_counts(order: u32) -> (NumNodes, NumEdges) {
    assert!(order <= MAX_BINOMIAL_ORDER);
    let n: NumNodes = 1 << order;
    (n, n - 1)
}

/// Returns `(number of nodes, number of edges)` of a heavy-hex lattice of the given distance.
/// The formulas are `(5d^2 - 2d - 1) / 2` and `2d(d - 1) + (d + 1)(d - 1)`.
/// ** Panics if `distance > MAX_HEAVY_HEX_DISTANCE` **
///
/// # Example
/// ```
/// use topogen::gens::heavy_hex_counts;
///
/// assert_eq!(heavy_hex_counts(3), (19, 20));
/// assert_eq!(heavy_hex_counts(5), (57, 64));
/// ```
pub fn heavy_hex_counts(distance: u32) -> (NumNodes, NumEdges) {
    assert!(distance <= MAX_HEAVY_HEX_DISTANCE);
    let d = distance as u64;
    let nodes = (5 * d * d).saturating_sub(2 * d + 1) / 2;
    let edges = (3 * d * d).saturating_sub(2 * d + 1);
    (nodes as NumNodes, edges as NumEdges)
}

/// Checks that a binomial-tree order was supplied and that the tree fits into a graph.
///
/// # Errors
/// - [`GenError::MissingArgument`] if `order` is `None`
/// - [`GenError::Domain`] if `order > MAX_BINOMIAL_ORDER`
pub fn validate_binomial_order(order: Option<u32>) -> Result<u32> {
    let Some(order) = order else {
        debug!("binomial tree requested without an order");
        return Err(GenError::MissingArgument { parameter: "order" });
    };

    if order > MAX_BINOMIAL_ORDER {
        debug!(order, "rejected binomial tree order");
        return Err(GenError::Domain {
            parameter: "order",
            value: order as u64,
            reason: "a binomial tree of this order has more nodes than a graph can hold",
        });
    }

    Ok(order)
}

/// Checks that a heavy-hex distance was supplied, is odd, and lies within
/// `MIN_HEAVY_HEX_DISTANCE..=MAX_HEAVY_HEX_DISTANCE`.
///
/// # Errors
/// - [`GenError::MissingArgument`] if `distance` is `None`
/// - [`GenError::Domain`] if `distance` is even, too small or too large
pub fn validate_heavy_hex_distance(distance: Option<u32>) -> Result<u32> {
    let Some(distance) = distance else {
        debug!("heavy-hex lattice requested without a distance");
        return Err(GenError::MissingArgument {
            parameter: "distance",
        });
    };

    let reason = if distance < MIN_HEAVY_HEX_DISTANCE {
        "must be at least 3"
    } else if distance % 2 == 0 {
        "must be odd"
    } else if distance > MAX_HEAVY_HEX_DISTANCE {
        "the lattice has more edges than a graph can hold"
    } else {
        return Ok(distance);
    };

    debug!(distance, reason, "rejected heavy-hex distance");
    Err(GenError::Domain {
        parameter: "distance",
        value: distance as u64,
        reason,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binomial_order() {
        assert_eq!(validate_binomial_order(Some(0)), Ok(0));
        assert_eq!(validate_binomial_order(Some(31)), Ok(31));
        assert!(validate_binomial_order(None).unwrap_err().is_missing_argument());
        assert!(validate_binomial_order(Some(32)).unwrap_err().is_domain());
        assert!(validate_binomial_order(Some(u32::MAX)).unwrap_err().is_domain());
    }

    #[test]
    fn heavy_hex_distance() {
        for d in [3, 5, 7, 101, MAX_HEAVY_HEX_DISTANCE] {
            assert_eq!(validate_heavy_hex_distance(Some(d)), Ok(d));
        }

        for d in [0, 1, 2, 4, 6, 100, MAX_HEAVY_HEX_DISTANCE + 2, u32::MAX] {
            assert!(validate_heavy_hex_distance(Some(d)).unwrap_err().is_domain(), "{d}");
        }

        assert_eq!(
            validate_heavy_hex_distance(Some(2)),
            Err(GenError::Domain {
                parameter: "distance",
                value: 2,
                reason: "must be at least 3"
            })
        );

        assert!(
            validate_heavy_hex_distance(None)
                .unwrap_err()
                .is_missing_argument()
        );
    }

    #[test]
    fn counts() {
        assert_eq!(binomial_tree_counts(MAX_BINOMIAL_ORDER), (1 << 31, (1 << 31) - 1));

        for d in (3..100).step_by(2) {
            let (n, m) = heavy_hex_counts(d);
            assert_eq!(n, (5 * d * d - 2 * d - 1) / 2);
            assert_eq!(m, 2 * d * (d - 1) + (d + 1) * (d - 1));
        }

        let (n, m) = heavy_hex_counts(MAX_HEAVY_HEX_DISTANCE);
        assert!(n < INVALID_NODE);
        assert!(m.checked_mul(2).is_some());

        let d = (MAX_HEAVY_HEX_DISTANCE + 2) as u64;
        assert!(2 * (3 * d * d - 2 * d - 1) > NumEdges::MAX as u64);
    }
}
