//! Default value functions for serde deserialization.

pub fn steps_per_tick() -> usize {
    5
}
