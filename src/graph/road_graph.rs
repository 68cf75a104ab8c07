//! Weighted road network graph.
//!
//! [`RoadGraph`] owns the node set, coordinates, and adjacency lists produced
//! by a map-loading frontend. Once a search starts the graph is only touched
//! through `&RoadGraph`, so repeated searches over the same (start, goal) pair
//! are deterministic.

use log::debug;

use crate::core::{Bounds, MapPoint, NodeId};

use super::error::GraphError;

/// Undirected weighted graph with node coordinates.
///
/// Nodes are dense handles issued by [`add_node`](RoadGraph::add_node);
/// adjacency is stored as per-node lists of `(neighbor, weight)` pairs.
///
/// # Parallel edges
///
/// Road data frequently carries multiple ways between the same node pair.
/// Inserting an edge that already exists keeps the **minimum** weight of the
/// two, so `edge_weight` always returns a single deterministic value.
///
/// # Example
/// ```rust
/// use marga_nav::core::MapPoint;
/// use marga_nav::graph::RoadGraph;
///
/// let mut graph = RoadGraph::new();
/// let a = graph.add_node(MapPoint::new(0.0, 0.0));
/// let b = graph.add_node(MapPoint::new(1.0, 0.0));
/// graph.add_edge(a, b, 1.0).unwrap();
///
/// assert_eq!(graph.edge_weight(a, b).unwrap(), 1.0);
/// assert_eq!(graph.neighbors(a).unwrap(), &[(b, 1.0)]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct RoadGraph {
    coords: Vec<MapPoint>,
    adjacency: Vec<Vec<(NodeId, f64)>>,
    edge_count: usize,
    bounds: Bounds,
}

impl RoadGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            coords: Vec::new(),
            adjacency: Vec::new(),
            edge_count: 0,
            bounds: Bounds::empty(),
        }
    }

    /// Create an empty graph with capacity for `nodes` nodes.
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            coords: Vec::with_capacity(nodes),
            adjacency: Vec::with_capacity(nodes),
            edge_count: 0,
            bounds: Bounds::empty(),
        }
    }

    /// Add a node at the given coordinate and return its handle.
    pub fn add_node(&mut self, point: MapPoint) -> NodeId {
        let id = NodeId(self.coords.len() as u32);
        self.coords.push(point);
        self.adjacency.push(Vec::new());
        self.bounds.expand_to_include(point);
        id
    }

    /// Add an undirected edge between `a` and `b`.
    ///
    /// Rejects negative weights and unknown endpoints. A duplicate edge
    /// min-collapses with the existing weight. Self-loops are dropped: they
    /// can never improve a route and would only clutter neighbor lists.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId, weight: f64) -> Result<(), GraphError> {
        self.check_node(a)?;
        self.check_node(b)?;
        if weight < 0.0 {
            return Err(GraphError::NegativeWeight { a, b, weight });
        }
        if a == b {
            debug!("[Graph] dropping self-loop on {}", a);
            return Ok(());
        }

        if let Some(entry) = self.adjacency[a.index()].iter_mut().find(|(n, _)| *n == b) {
            if weight < entry.1 {
                entry.1 = weight;
                if let Some(back) = self.adjacency[b.index()].iter_mut().find(|(n, _)| *n == a) {
                    back.1 = weight;
                }
            }
            return Ok(());
        }

        self.adjacency[a.index()].push((b, weight));
        self.adjacency[b.index()].push((a, weight));
        self.edge_count += 1;
        Ok(())
    }

    /// All `(neighbor, weight)` pairs adjacent to `node`, in insertion order.
    pub fn neighbors(&self, node: NodeId) -> Result<&[(NodeId, f64)], GraphError> {
        self.check_node(node)?;
        Ok(&self.adjacency[node.index()])
    }

    /// Weight of the edge between `a` and `b`.
    pub fn edge_weight(&self, a: NodeId, b: NodeId) -> Result<f64, GraphError> {
        self.check_node(a)?;
        self.check_node(b)?;
        self.adjacency[a.index()]
            .iter()
            .find(|(n, _)| *n == b)
            .map(|(_, w)| *w)
            .ok_or(GraphError::NoSuchEdge { a, b })
    }

    /// Coordinate of `node`.
    pub fn coordinate(&self, node: NodeId) -> Result<MapPoint, GraphError> {
        self.check_node(node)?;
        Ok(self.coords[node.index()])
    }

    /// Whether `node` belongs to this graph.
    #[inline]
    pub fn contains(&self, node: NodeId) -> bool {
        node.index() < self.coords.len()
    }

    /// Number of nodes.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.coords.len()
    }

    /// Number of undirected edges (parallel input edges counted once).
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Extent of the node set, for viewport fitting.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Iterate all nodes as `(id, coordinate)` pairs.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, MapPoint)> + '_ {
        self.coords
            .iter()
            .enumerate()
            .map(|(i, p)| (NodeId(i as u32), *p))
    }

    /// Iterate all undirected edges as `(a, b, weight)`, each reported once.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId, f64)> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(i, list)| {
            let a = NodeId(i as u32);
            list.iter()
                .filter(move |(b, _)| a < *b)
                .map(move |(b, w)| (a, *b, *w))
        })
    }

    #[inline]
    fn check_node(&self, node: NodeId) -> Result<(), GraphError> {
        if self.contains(node) {
            Ok(())
        } else {
            Err(GraphError::UnknownNode { node })
        }
    }
}
