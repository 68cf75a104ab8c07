//! Per-tick pacing for a host rendering loop.

use log::trace;

use crate::search::{SearchEngine, SearchError, StepResult};

/// Pulls a bounded number of search steps per rendering tick.
///
/// The raw engine fails loudly when advanced past its terminal state; a frame
/// loop calling [`tick`](StepDriver::tick) every frame would trip that
/// constantly, so the driver latches the terminal step itself and returns an
/// empty batch from then on.
///
/// # Example
/// ```rust,ignore
/// let engine = SearchEngine::new(&graph, start, goal)?;
/// let mut driver = StepDriver::new(engine, config.search.steps_per_tick);
///
/// // Inside the frame loop:
/// for step in driver.tick()? {
///     renderer.apply(step);
/// }
/// ```
pub struct StepDriver<'a> {
    engine: SearchEngine<'a>,
    steps_per_tick: usize,
    finished: bool,
}

impl<'a> StepDriver<'a> {
    /// Wrap an engine with a per-tick step budget.
    ///
    /// A budget of zero is clamped to one step per tick so the search always
    /// makes progress.
    pub fn new(engine: SearchEngine<'a>, steps_per_tick: usize) -> Self {
        Self {
            engine,
            steps_per_tick: steps_per_tick.max(1),
            finished: false,
        }
    }

    /// Advance the search by up to the per-tick budget.
    ///
    /// Stops early when a terminal step (`Found` or `Exhausted`) is produced;
    /// that step is included in the batch. Ticks after the terminal return an
    /// empty batch.
    pub fn tick(&mut self) -> Result<Vec<StepResult>, SearchError> {
        if self.finished {
            return Ok(Vec::new());
        }

        let mut batch = Vec::with_capacity(self.steps_per_tick);
        for _ in 0..self.steps_per_tick {
            let step = self.engine.advance()?;
            let done = step.is_terminal();
            batch.push(step);
            if done {
                self.finished = true;
                break;
            }
        }
        trace!("[Search] tick produced {} steps", batch.len());
        Ok(batch)
    }

    /// Whether the underlying search has terminated.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Access the wrapped engine (expansion counts, endpoints).
    #[inline]
    pub fn engine(&self) -> &SearchEngine<'a> {
        &self.engine
    }
}
