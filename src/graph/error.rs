//! Road graph error types.

use std::fmt;

use crate::core::NodeId;

/// Errors raised by [`RoadGraph`](super::RoadGraph) contract violations.
///
/// All of these indicate a caller bug rather than a recoverable condition:
/// the graph performs no retries and surfaces the failure synchronously.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphError {
    /// The node handle does not belong to this graph.
    UnknownNode {
        /// The offending handle.
        node: NodeId,
    },

    /// The two nodes are not adjacent.
    NoSuchEdge {
        /// First endpoint.
        a: NodeId,
        /// Second endpoint.
        b: NodeId,
    },

    /// An edge was inserted with a negative weight.
    NegativeWeight {
        /// First endpoint.
        a: NodeId,
        /// Second endpoint.
        b: NodeId,
        /// The rejected weight.
        weight: f64,
    },
}

impl GraphError {
    /// Get a short error code for logging/metrics.
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownNode { .. } => "UNKNOWN_NODE",
            Self::NoSuchEdge { .. } => "NO_SUCH_EDGE",
            Self::NegativeWeight { .. } => "NEGATIVE_WEIGHT",
        }
    }
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownNode { node } => {
                write!(f, "Node {} is not part of this graph", node)
            }
            Self::NoSuchEdge { a, b } => {
                write!(f, "No edge between {} and {}", a, b)
            }
            Self::NegativeWeight { a, b, weight } => {
                write!(
                    f,
                    "Negative weight {:.3} rejected for edge {}-{}",
                    weight, a, b
                )
            }
        }
    }
}

impl std::error::Error for GraphError {}
