//! Bio Console Library
//!
//! An interactive terminal bio card: skills, interests, learning goals and
//! contact links, typed out with a typewriter effect and editable in place.
//!
//! # Features
//!
//! - Load the profile from a JSON file, or built-in defaults when none exists
//! - Animated, colored rendering to any writer
//! - Menu-driven editing with save-and-exit
//!
//! # Example
//!
//! ```no_run
//! use bio_console::config::Settings;
//! use bio_console::display::Presenter;
//! use bio_console::repl::Repl;
//! use bio_console::storage::ProfileStore;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let settings = Settings::default();
//!     let store = ProfileStore::new(&settings.data_file);
//!     let (profile, _corrupt) = store.load_or_default()?;
//!
//!     let stdin = std::io::stdin();
//!     let mut repl = Repl::new(
//!         stdin.lock(),
//!         std::io::stdout(),
//!         Presenter::from_settings(&settings),
//!         store,
//!         profile,
//!     );
//!     repl.run()?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod display;
pub mod editor;
pub mod error;
pub mod repl;
pub mod storage;
pub mod utils;

// Re-exports for convenience
pub use error::{BioError, Result};
pub use storage::{Profile, ProfileStore};
