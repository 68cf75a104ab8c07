//! Search pacing configuration section.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Search settings section
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchSection {
    /// Engine steps pulled per rendering tick
    #[serde(default = "defaults::steps_per_tick")]
    pub steps_per_tick: usize,
}

impl Default for SearchSection {
    fn default() -> Self {
        Self {
            steps_per_tick: defaults::steps_per_tick(),
        }
    }
}
