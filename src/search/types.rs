//! Search engine types.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

use crate::core::NodeId;
use crate::graph::GraphError;

/// An entry in the search frontier.
///
/// Ordered ascending by `priority` (estimated total cost), with insertion
/// sequence as the tie-break. The sequence number makes heap order fully
/// deterministic: equal-priority entries pop oldest-first.
#[derive(Clone, Debug)]
pub(super) struct FrontierEntry {
    pub node: NodeId,
    /// Cost so far plus heuristic (f-score).
    pub priority: f64,
    /// Insertion order, unique per engine.
    pub seq: u64,
}

impl Eq for FrontierEntry {}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.seq == other.seq
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior
        other
            .priority
            .partial_cmp(&self.priority)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Owned view of the engine's in-progress state after one expansion.
///
/// Both fields are copies: the engine keeps mutating its own maps on later
/// [`advance`](super::SearchEngine::advance) calls without invalidating
/// snapshots already handed out.
#[derive(Clone, Debug, PartialEq)]
pub struct FrontierSnapshot {
    /// Frontier nodes in ascending (priority, insertion) order. Stale
    /// duplicates from lazy deletion are included, matching what the engine
    /// will actually pop.
    pub frontier: Vec<NodeId>,
    /// Parent pointers for every discovered node. The start node carries no
    /// entry.
    pub came_from: HashMap<NodeId, NodeId>,
}

impl FrontierSnapshot {
    /// Reconstruct the discovered path from the start to `node`.
    ///
    /// Walks the parent pointers back from `node` and reverses. Hosts use
    /// this to draw exploration trails for each frontier node. A node the
    /// search has not discovered yields just `[node]`.
    pub fn partial_path(&self, node: NodeId) -> Vec<NodeId> {
        let mut path = Vec::new();
        let mut current = node;
        path.push(current);
        while let Some(&prev) = self.came_from.get(&current) {
            path.push(prev);
            current = prev;
        }
        path.reverse();
        path
    }
}

/// Outcome of one unit of search work.
#[derive(Clone, Debug, PartialEq)]
pub enum StepResult {
    /// One node was expanded; the search continues.
    Progress(FrontierSnapshot),
    /// The goal was reached. Terminal.
    Found {
        /// Route from start to goal, inclusive.
        path: Vec<NodeId>,
        /// Total cost along `path`.
        cost: f64,
    },
    /// The frontier emptied without reaching the goal: no route exists.
    /// Terminal, but an expected outcome rather than an error.
    Exhausted,
}

impl StepResult {
    /// Whether this step ended the search.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Progress(_))
    }
}

/// Errors raised by the search engine.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchError {
    /// Start or goal is not a node of the graph.
    InvalidEndpoint {
        /// The offending handle.
        node: NodeId,
    },

    /// `advance()` was called after the engine reached a terminal state.
    /// This is a host-loop logic error, surfaced loudly rather than
    /// returning a stale or fabricated step.
    EngineExhausted,

    /// The graph violated its contract mid-search.
    Graph(GraphError),
}

impl SearchError {
    /// Get a short error code for logging/metrics.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidEndpoint { .. } => "INVALID_ENDPOINT",
            Self::EngineExhausted => "ENGINE_EXHAUSTED",
            Self::Graph(e) => e.code(),
        }
    }
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEndpoint { node } => {
                write!(f, "Endpoint {} is not a node of the graph", node)
            }
            Self::EngineExhausted => {
                write!(f, "advance() called on an engine past its terminal state")
            }
            Self::Graph(e) => write!(f, "Graph contract violation: {}", e),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Graph(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GraphError> for SearchError {
    fn from(e: GraphError) -> Self {
        Self::Graph(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    #[test]
    fn test_frontier_entry_min_heap_order() {
        let mut heap = BinaryHeap::new();
        heap.push(FrontierEntry {
            node: NodeId(0),
            priority: 3.0,
            seq: 0,
        });
        heap.push(FrontierEntry {
            node: NodeId(1),
            priority: 1.0,
            seq: 1,
        });
        heap.push(FrontierEntry {
            node: NodeId(2),
            priority: 2.0,
            seq: 2,
        });

        let order: Vec<u32> = std::iter::from_fn(|| heap.pop()).map(|e| e.node.0).collect();
        assert_eq!(order, vec![1, 2, 0]);
    }

    #[test]
    fn test_frontier_entry_tie_break_by_insertion() {
        let mut heap = BinaryHeap::new();
        for seq in 0..4u64 {
            heap.push(FrontierEntry {
                node: NodeId(seq as u32),
                priority: 1.0,
                seq,
            });
        }
        let order: Vec<u32> = std::iter::from_fn(|| heap.pop()).map(|e| e.node.0).collect();
        assert_eq!(order, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_partial_path_walks_to_start() {
        let mut came_from = HashMap::new();
        came_from.insert(NodeId(2), NodeId(1));
        came_from.insert(NodeId(1), NodeId(0));
        let snapshot = FrontierSnapshot {
            frontier: vec![NodeId(2)],
            came_from,
        };

        assert_eq!(
            snapshot.partial_path(NodeId(2)),
            vec![NodeId(0), NodeId(1), NodeId(2)]
        );
        // Undiscovered node: no trail.
        assert_eq!(snapshot.partial_path(NodeId(9)), vec![NodeId(9)]);
    }
}
