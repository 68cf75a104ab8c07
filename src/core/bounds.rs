//! Axis-aligned bounding box for map extents.
//!
//! [`Bounds`] tracks the rectangular extent of a node set. Renderers use it to
//! fit the network into a viewport; the search itself never reads it.

use serde::{Deserialize, Serialize};

use super::point::MapPoint;

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Minimum corner (smallest x and y values).
    pub min: MapPoint,
    /// Maximum corner (largest x and y values).
    pub max: MapPoint,
}

impl Bounds {
    /// Create a new bounding box from min and max corners.
    #[inline]
    pub const fn new(min: MapPoint, max: MapPoint) -> Self {
        Self { min, max }
    }

    /// Create an empty (invalid) bounding box.
    ///
    /// The empty bounds has min > max, so it will expand to fit any point.
    #[inline]
    pub fn empty() -> Self {
        Self {
            min: MapPoint::new(f64::INFINITY, f64::INFINITY),
            max: MapPoint::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    /// Check if the bounds are empty (invalid).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    /// Width of the bounding box (x extent).
    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Height of the bounding box (y extent).
    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Center point of the bounding box.
    #[inline]
    pub fn center(&self) -> MapPoint {
        MapPoint::new(
            (self.min.x + self.max.x) * 0.5,
            (self.min.y + self.max.y) * 0.5,
        )
    }

    /// Check if a point lies inside the bounds (inclusive).
    #[inline]
    pub fn contains(&self, point: MapPoint) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Expand the bounds to include a point.
    #[inline]
    pub fn expand_to_include(&mut self, point: MapPoint) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
    }
}
