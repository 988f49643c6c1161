use tracing::debug;

use super::*;

/// Maps an optional weight sequence onto the `nodes` nodes of a topology in id order.
///
/// - Without weights, every node gets `None`.
/// - With `k <= nodes` weights, nodes `0..k` get `Some(weights[i])` and all others `None`.
/// - With more weights than nodes, nothing is assigned and [`GenError::OutOfRange`] is returned.
///
/// # Example
/// ```
/// use topogen::gens::assign_weights;
///
/// assert_eq!(assign_weights(3, Some(vec!['a'])).unwrap(), vec![Some('a'), None, None]);
/// assert!(assign_weights(1, Some(vec![1, 2])).unwrap_err().is_out_of_range());
/// ```
pub fn assign_weights<W>(nodes: NumNodes, weights: Option<Vec<W>>) -> Result<Vec<Option<W>>> {
    let n = nodes as usize;
    let mut assigned = Vec::with_capacity(n);

    if let Some(weights) = weights {
        if weights.len() > n {
            debug!(weights = weights.len(), nodes, "rejected weight sequence");
            return Err(GenError::OutOfRange {
                weights: weights.len(),
                nodes,
            });
        }

        assigned.extend(weights.into_iter().map(Some));
    }

    assigned.resize_with(n, || None);
    Ok(assigned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn without_weights() {
        assert_eq!(assign_weights::<u8>(4, None), Ok(vec![None; 4]));
        assert_eq!(assign_weights::<u8>(0, None), Ok(vec![]));
    }

    #[test]
    fn pads_missing_weights() {
        assert_eq!(
            assign_weights(4, Some(vec![0, 1])),
            Ok(vec![Some(0), Some(1), None, None])
        );
        assert_eq!(
            assign_weights(4, Some(vec![0, 1, 2, 3])),
            Ok(vec![Some(0), Some(1), Some(2), Some(3)])
        );
        assert_eq!(assign_weights::<u8>(2, Some(vec![])), Ok(vec![None, None]));
    }

    #[test]
    fn rejects_excess_weights() {
        assert_eq!(
            assign_weights(4, Some((0..7).collect())),
            Err::<Vec<Option<u32>>, _>(GenError::OutOfRange {
                weights: 7,
                nodes: 4
            })
        );
        assert!(assign_weights(0, Some(vec![()])).unwrap_err().is_out_of_range());
    }

    #[test]
    fn weights_need_not_be_clone() {
        struct Opaque(u8);

        let assigned = assign_weights(3, Some(vec![Opaque(7)])).unwrap();
        assert_eq!(assigned.len(), 3);
        assert_eq!(assigned[0].as_ref().map(|w| w.0), Some(7));
        assert!(assigned[1].is_none() && assigned[2].is_none());
    }
}
