//! Node handles and map coordinates.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque handle identifying a node within a [`RoadGraph`](crate::graph::RoadGraph).
///
/// Handles are dense indices assigned in insertion order. They are only
/// meaningful for the graph that issued them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Index into graph-internal storage.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// A 2D map coordinate.
///
/// Used for the search heuristic and by renderers. Units are whatever the map
/// source provides (projected meters, or raw lon/lat for small extents); the
/// search only assumes edge weights are at least the straight-line distance
/// between their endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct MapPoint {
    /// X coordinate (east)
    pub x: f64,
    /// Y coordinate (north)
    pub y: f64,
}

impl MapPoint {
    /// Create a new map point
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    #[inline]
    pub fn distance(&self, other: &MapPoint) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Squared distance (faster, avoids sqrt)
    #[inline]
    pub fn distance_squared(&self, other: &MapPoint) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}
