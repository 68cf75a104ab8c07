//! Road network graph model.
//!
//! This module provides the read-only graph contract the search engine runs
//! against:
//!
//! - **[`RoadGraph`]**: nodes, coordinates, adjacency, edge weights
//! - **[`NodeLocator`]**: R-tree nearest-node lookup for interactive hosts
//!
//! ## Building a graph
//!
//! ```rust,ignore
//! use marga_nav::core::MapPoint;
//! use marga_nav::graph::RoadGraph;
//!
//! let mut graph = RoadGraph::with_capacity(nodes.len());
//! for (x, y) in nodes {
//!     graph.add_node(MapPoint::new(x, y));
//! }
//! for (a, b, length) in edges {
//!     graph.add_edge(a, b, length)?;
//! }
//! ```

mod error;
mod locator;
mod road_graph;

pub use error::GraphError;
pub use locator::NodeLocator;
pub use road_graph::RoadGraph;
