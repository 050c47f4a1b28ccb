//! Profile storage and persistence module.
//!
//! Holds the profile document model, the built-in defaults,
//! and the JSON file store.

pub mod defaults;
pub mod profiles;
pub mod types;

// Re-export commonly used items
pub use defaults::default_profile;
pub use profiles::{LoadOutcome, ProfileSink, ProfileStore};
pub use types::*;
