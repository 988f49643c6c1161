/*!
# Errors

Every generator validates its shape parameters and weight sequence before the first node
is created, so a failing call never hands out a partially built graph.
*/

use thiserror::Error;

use crate::NumNodes;

/// Shorthand for results of generator calls
pub type Result<T> = std::result::Result<T, GenError>;

/// Failure modes of all generators in [`gens`](crate::gens).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenError {
    /// A shape parameter lies outside of its valid domain.
    #[error("{parameter} = {value} is out of domain: {reason}")]
    Domain {
        /// Name of the offending parameter (e.g. `order`, `distance`)
        parameter: &'static str,
        /// The rejected value
        value: u64,
        /// Human readable description of the violated precondition
        reason: &'static str,
    },

    /// A required shape parameter was never set.
    #[error("missing required argument `{parameter}`")]
    MissingArgument {
        /// Name of the parameter that was omitted
        parameter: &'static str,
    },

    /// More weights were supplied than the topology has nodes.
    #[error("cannot place {weights} weights onto {nodes} nodes")]
    OutOfRange {
        /// Length of the supplied weight sequence
        weights: usize,
        /// Number of nodes of the topology
        nodes: NumNodes,
    },
}

impl GenError {
    /// Returns *true* for [`GenError::Domain`]
    pub fn is_domain(&self) -> bool {
        matches!(self, GenError::Domain { .. })
    }

    /// Returns *true* for [`GenError::MissingArgument`]
    pub fn is_missing_argument(&self) -> bool {
        matches!(self, GenError::MissingArgument { .. })
    }

    /// Returns *true* for [`GenError::OutOfRange`]
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, GenError::OutOfRange { .. })
    }
}
