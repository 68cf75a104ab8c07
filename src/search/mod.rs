//! Incremental A* route search.
//!
//! This module turns a normally run-to-completion algorithm into an
//! interruptible one without threads or async machinery: all work happens
//! inside [`SearchEngine::advance`], which executes exactly one frontier
//! expansion and hands control back.
//!
//! - **[`SearchEngine`]**: the resumable A* state machine
//! - **[`StepResult`]**: what one unit of work produced
//! - **[`FrontierSnapshot`]**: owned view of the in-progress state
//! - **[`StepDriver`]**: budgeted per-tick pacing for frame loops
//!
//! ## Driving a search
//!
//! ```rust,ignore
//! use marga_nav::search::{SearchEngine, StepResult};
//!
//! let mut engine = SearchEngine::new(&graph, start, goal)?;
//! loop {
//!     match engine.advance()? {
//!         StepResult::Progress(snapshot) => draw_frontier(&snapshot),
//!         StepResult::Found { path, cost } => break draw_route(&path, cost),
//!         StepResult::Exhausted => break show_no_route(),
//!     }
//! }
//! ```

mod driver;
mod engine;
mod types;

pub use driver::StepDriver;
pub use engine::SearchEngine;
pub use types::{FrontierSnapshot, SearchError, StepResult};
