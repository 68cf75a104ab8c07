//! Incremental A* search engine.
//!
//! [`SearchEngine`] runs A* one expansion at a time: each
//! [`advance`](SearchEngine::advance) call pops the best frontier candidate,
//! relaxes its neighbors, and returns a [`StepResult`] describing what
//! happened. The host loop decides the pacing; the engine never blocks and
//! never runs ahead of the caller.
//!
//! A route query is one engine instance. Picking a new start/goal means
//! dropping the engine and constructing a fresh one; no state survives across
//! searches.

use std::collections::{BinaryHeap, HashMap};

use log::{debug, trace};

use crate::core::{MapPoint, NodeId};
use crate::graph::RoadGraph;

use super::types::{FrontierEntry, FrontierSnapshot, SearchError, StepResult};

/// Resumable A* search over a [`RoadGraph`].
///
/// The heuristic is the Euclidean distance between node coordinates. A* is
/// optimal when edge weights are at least the straight-line distance between
/// their endpoints, which holds for road lengths over real geometry; the
/// engine assumes this rather than checking it.
///
/// Frontier ordering is ascending estimated total cost, ties broken by
/// insertion order. Improving the cost of an already-queued node pushes a new
/// entry and leaves the stale one in place (lazy deletion); stale pops relax
/// no one and cost one wasted step at worst.
///
/// # Example
/// ```rust
/// use marga_nav::core::MapPoint;
/// use marga_nav::graph::RoadGraph;
/// use marga_nav::search::{SearchEngine, StepResult};
///
/// let mut graph = RoadGraph::new();
/// let a = graph.add_node(MapPoint::new(0.0, 0.0));
/// let b = graph.add_node(MapPoint::new(1.0, 0.0));
/// graph.add_edge(a, b, 1.0).unwrap();
///
/// let mut engine = SearchEngine::new(&graph, a, b).unwrap();
/// loop {
///     match engine.advance().unwrap() {
///         StepResult::Progress(_) => continue,
///         StepResult::Found { path, cost } => {
///             assert_eq!(path, vec![a, b]);
///             assert_eq!(cost, 1.0);
///             break;
///         }
///         StepResult::Exhausted => unreachable!("a and b are connected"),
///     }
/// }
/// ```
pub struct SearchEngine<'a> {
    graph: &'a RoadGraph,
    start: NodeId,
    goal: NodeId,
    goal_point: MapPoint,
    frontier: BinaryHeap<FrontierEntry>,
    came_from: HashMap<NodeId, NodeId>,
    cost_so_far: HashMap<NodeId, f64>,
    next_seq: u64,
    nodes_expanded: usize,
    finished: bool,
}

impl<'a> SearchEngine<'a> {
    /// Create a new search from `start` to `goal`.
    ///
    /// Fails with [`SearchError::InvalidEndpoint`] if either handle is not a
    /// node of `graph`.
    pub fn new(graph: &'a RoadGraph, start: NodeId, goal: NodeId) -> Result<Self, SearchError> {
        if !graph.contains(start) {
            return Err(SearchError::InvalidEndpoint { node: start });
        }
        if !graph.contains(goal) {
            return Err(SearchError::InvalidEndpoint { node: goal });
        }
        let goal_point = graph.coordinate(goal)?;

        trace!("[Search] new search: start={} goal={}", start, goal);

        let mut engine = Self {
            graph,
            start,
            goal,
            goal_point,
            frontier: BinaryHeap::new(),
            came_from: HashMap::new(),
            cost_so_far: HashMap::new(),
            next_seq: 0,
            nodes_expanded: 0,
            finished: false,
        };
        engine.cost_so_far.insert(start, 0.0);
        engine.push_frontier(start, 0.0);
        Ok(engine)
    }

    /// Execute one unit of search work.
    ///
    /// Pops the best frontier candidate and either terminates (goal popped,
    /// or frontier empty) or relaxes its neighbors and reports progress.
    ///
    /// Calling `advance()` again after a terminal step is a host-loop bug and
    /// fails with [`SearchError::EngineExhausted`].
    pub fn advance(&mut self) -> Result<StepResult, SearchError> {
        if self.finished {
            return Err(SearchError::EngineExhausted);
        }

        let Some(entry) = self.frontier.pop() else {
            debug!(
                "[Search] EXHAUSTED: no route {}->{} after {} expansions",
                self.start, self.goal, self.nodes_expanded
            );
            self.finished = true;
            return Ok(StepResult::Exhausted);
        };
        let current = entry.node;
        self.nodes_expanded += 1;

        if current == self.goal {
            self.finished = true;
            let path = self.reconstruct_path();
            let cost = self.cost_so_far[&self.goal];
            debug!(
                "[Search] SUCCESS: path length={} nodes, cost={:.2}, expansions={}",
                path.len(),
                cost,
                self.nodes_expanded
            );
            return Ok(StepResult::Found { path, cost });
        }

        let current_cost = self.cost_so_far[&current];
        for &(neighbor, weight) in self.graph.neighbors(current)? {
            let new_cost = current_cost + weight;
            let known = self
                .cost_so_far
                .get(&neighbor)
                .copied()
                .unwrap_or(f64::INFINITY);
            if new_cost < known {
                self.cost_so_far.insert(neighbor, new_cost);
                self.came_from.insert(neighbor, current);
                let h = self.graph.coordinate(neighbor)?.distance(&self.goal_point);
                self.push_frontier(neighbor, new_cost + h);
            }
        }

        trace!(
            "[Search] expanded {} (g={:.2}), frontier={}",
            current,
            current_cost,
            self.frontier.len()
        );
        Ok(StepResult::Progress(self.snapshot()))
    }

    /// The start node of this search.
    #[inline]
    pub fn start(&self) -> NodeId {
        self.start
    }

    /// The goal node of this search.
    #[inline]
    pub fn goal(&self) -> NodeId {
        self.goal
    }

    /// Number of frontier pops so far.
    #[inline]
    pub fn nodes_expanded(&self) -> usize {
        self.nodes_expanded
    }

    /// Whether the search has reached `Found` or `Exhausted`.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.finished
    }

    fn push_frontier(&mut self, node: NodeId, priority: f64) {
        self.frontier.push(FrontierEntry {
            node,
            priority,
            seq: self.next_seq,
        });
        self.next_seq += 1;
    }

    /// Copy out the frontier and parent map for the caller.
    fn snapshot(&self) -> FrontierSnapshot {
        let mut entries: Vec<&FrontierEntry> = self.frontier.iter().collect();
        // FrontierEntry's Ord is heap-reversed; flipping it here sorts
        // ascending by (priority, seq).
        entries.sort_unstable_by(|a, b| b.cmp(a));

        FrontierSnapshot {
            frontier: entries.into_iter().map(|e| e.node).collect(),
            came_from: self.came_from.clone(),
        }
    }

    /// Walk the parent pointers from the goal back to the start.
    fn reconstruct_path(&self) -> Vec<NodeId> {
        let mut path = Vec::new();
        let mut current = self.goal;

        while let Some(&prev) = self.came_from.get(&current) {
            path.push(current);
            current = prev;
        }
        path.push(current); // Add start
        path.reverse();
        path
    }
}
