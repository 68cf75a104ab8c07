//! Spatial indexing for nearest-node queries.
//!
//! Uses an R-tree so a host can map a pointer position to the closest graph
//! node (pick start/goal by clicking the map) without scanning every node.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use crate::core::{MapPoint, NodeId};

use super::road_graph::RoadGraph;

/// An indexed node for R-tree storage.
#[derive(Clone, Debug)]
struct IndexedNode {
    position: [f64; 2],
    id: NodeId,
}

impl RTreeObject for IndexedNode {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.position)
    }
}

impl PointDistance for IndexedNode {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.position[0] - point[0];
        let dy = self.position[1] - point[1];
        dx * dx + dy * dy
    }
}

/// Nearest-node lookup over a [`RoadGraph`]'s node set.
///
/// # Example
/// ```rust
/// use marga_nav::core::MapPoint;
/// use marga_nav::graph::{NodeLocator, RoadGraph};
///
/// let mut graph = RoadGraph::new();
/// let a = graph.add_node(MapPoint::new(0.0, 0.0));
/// let _b = graph.add_node(MapPoint::new(10.0, 0.0));
///
/// let locator = NodeLocator::new(&graph);
/// let (nearest, dist) = locator.nearest(MapPoint::new(1.0, 1.0)).unwrap();
/// assert_eq!(nearest, a);
/// assert!((dist - 2.0f64.sqrt()).abs() < 1e-9);
/// ```
#[derive(Clone)]
pub struct NodeLocator {
    tree: RTree<IndexedNode>,
}

impl NodeLocator {
    /// Build an index over all nodes of the graph.
    ///
    /// The index holds copies of the coordinates; it stays valid for the
    /// lifetime of the node set it was built from (nodes are never removed).
    pub fn new(graph: &RoadGraph) -> Self {
        let indexed: Vec<IndexedNode> = graph
            .nodes()
            .map(|(id, p)| IndexedNode {
                position: [p.x, p.y],
                id,
            })
            .collect();

        Self {
            tree: RTree::bulk_load(indexed),
        }
    }

    /// Find the node closest to `point`, with its Euclidean distance.
    ///
    /// Returns `None` for an empty graph.
    pub fn nearest(&self, point: MapPoint) -> Option<(NodeId, f64)> {
        let query = [point.x, point.y];
        self.tree
            .nearest_neighbor(&query)
            .map(|node| (node.id, node.distance_2(&query).sqrt()))
    }

    /// Number of indexed nodes.
    pub fn len(&self) -> usize {
        self.tree.size()
    }

    /// Whether the index is empty.
    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nearest_picks_closest() {
        let mut graph = RoadGraph::new();
        let ids: Vec<NodeId> = (0..5)
            .map(|i| graph.add_node(MapPoint::new(i as f64 * 10.0, 0.0)))
            .collect();

        let locator = NodeLocator::new(&graph);
        assert_eq!(locator.len(), 5);

        let (id, dist) = locator.nearest(MapPoint::new(21.0, 3.0)).unwrap();
        assert_eq!(id, ids[2]);
        assert!((dist - (1.0f64 + 9.0).sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_empty_graph() {
        let graph = RoadGraph::new();
        let locator = NodeLocator::new(&graph);
        assert!(locator.is_empty());
        assert!(locator.nearest(MapPoint::new(0.0, 0.0)).is_none());
    }
}
