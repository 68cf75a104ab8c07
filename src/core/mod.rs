//! Core types for the marga-nav route search library.
//!
//! This module provides the fundamental types used throughout the library:
//! - [`NodeId`]: opaque node handle
//! - [`MapPoint`]: 2D map coordinate
//! - [`Bounds`]: axis-aligned map extent

mod bounds;
mod point;

pub use bounds::Bounds;
pub use point::{MapPoint, NodeId};
