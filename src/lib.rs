//! # Marga-Nav: Incremental A* Route Search
//!
//! A route search library for road networks, built so a renderer can watch
//! the search happen. Instead of running A* to completion, the engine
//! executes one frontier expansion per [`advance`](search::SearchEngine::advance)
//! call and reports what changed, so a host loop can pace the search against
//! its frame rate and animate the frontier, the exploration trails, and the
//! final route.
//!
//! ## Quick Start
//!
//! ```rust
//! use marga_nav::core::MapPoint;
//! use marga_nav::graph::RoadGraph;
//! use marga_nav::search::{SearchEngine, StepResult};
//!
//! // Build a graph (normally produced by a map-loading frontend)
//! let mut graph = RoadGraph::new();
//! let a = graph.add_node(MapPoint::new(0.0, 0.0));
//! let b = graph.add_node(MapPoint::new(1.0, 0.0));
//! let c = graph.add_node(MapPoint::new(2.0, 0.0));
//! graph.add_edge(a, b, 1.0).unwrap();
//! graph.add_edge(b, c, 1.0).unwrap();
//!
//! // Drive the search one step at a time
//! let mut engine = SearchEngine::new(&graph, a, c).unwrap();
//! let route = loop {
//!     match engine.advance().unwrap() {
//!         StepResult::Progress(snapshot) => {
//!             // frontier + parent map, ready to draw
//!             let _ = snapshot.frontier.len();
//!         }
//!         StepResult::Found { path, .. } => break path,
//!         StepResult::Exhausted => panic!("no route"),
//!     }
//! };
//! assert_eq!(route, vec![a, b, c]);
//! ```
//!
//! ## Architecture
//!
//! The library is organized into modules:
//!
//! - [`core`]: Fundamental types ([`NodeId`](core::NodeId),
//!   [`MapPoint`](core::MapPoint), [`Bounds`](core::Bounds))
//! - [`graph`]: The road network model and nearest-node lookup
//! - [`search`]: The incremental A* engine and per-tick step driver
//! - [`config`]: YAML configuration
//!
//! ## Data Flow
//!
//! ```text
//!  ┌──────────────┐    ┌─────────────┐    ┌──────────────────┐
//!  │  Map loader  │───►│  RoadGraph  │◄───│   SearchEngine   │
//!  │  (external)  │    │ (read-only  │    │  advance() ──►   │
//!  └──────────────┘    │  in search) │    │   StepResult     │
//!                      └─────────────┘    └────────┬─────────┘
//!                                                  │ Progress / Found / Exhausted
//!                                                  ▼
//!                                         ┌──────────────────┐
//!                                         │    Host loop     │
//!                                         │ (render, pace)   │
//!                                         └──────────────────┘
//! ```
//!
//! ## Concurrency model
//!
//! Single-threaded and cooperative: the engine never spawns work, never
//! blocks, and can be dropped between steps with no cleanup. The graph is
//! shared read-only during a search, so repeated runs over the same
//! (start, goal) pair produce identical step sequences.

pub mod config;
pub mod core;
pub mod graph;
pub mod search;

pub use crate::config::MargaConfig;
pub use crate::core::{Bounds, MapPoint, NodeId};
pub use crate::graph::{GraphError, NodeLocator, RoadGraph};
pub use crate::search::{FrontierSnapshot, SearchEngine, SearchError, StepDriver, StepResult};
