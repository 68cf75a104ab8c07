//! Unified configuration loading for marga-nav.
//!
//! Loads all configuration from a single YAML file. Every field has a
//! sensible default, so a missing file or empty document is valid.

mod defaults;
mod error;
mod marga;
mod search;

pub use error::ConfigLoadError;
pub use marga::MargaConfig;
pub use search::SearchSection;
