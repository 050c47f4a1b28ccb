//! Profile storage and persistence.
//!
//! Loads the profile document from a single JSON file and writes it back
//! wholesale on save.

use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::{BioError, Result};
use crate::storage::defaults::default_profile;
use crate::storage::types::Profile;

// =============================================================================
// Save Seam
// =============================================================================

/// Destination for the profile when the user chooses to save.
pub trait ProfileSink {
    fn save(&mut self, profile: &Profile) -> Result<()>;
}

// =============================================================================
// File Store
// =============================================================================

/// Outcome of a load that did not fail outright.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The file existed and parsed.
    Loaded(Profile),
    /// No file yet; built-in defaults.
    Defaults(Profile),
}

impl LoadOutcome {
    pub fn into_profile(self) -> Profile {
        match self {
            LoadOutcome::Loaded(p) | LoadOutcome::Defaults(p) => p,
        }
    }
}

/// JSON file backing the profile.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    path: PathBuf,
}

impl ProfileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the profile from disk.
    ///
    /// A missing file yields the built-in defaults. A file that exists but does
    /// not parse yields [`BioError::CorruptData`].
    pub fn load(&self) -> Result<LoadOutcome> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("No profile at {}, using defaults", self.path.display());
                return Ok(LoadOutcome::Defaults(default_profile()));
            }
            Err(source) => {
                return Err(BioError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let profile = serde_json::from_str(&content).map_err(|e| BioError::CorruptData {
            path: self.path.clone(),
            message: e.to_string(),
        })?;
        log::debug!("Loaded profile from {}", self.path.display());
        Ok(LoadOutcome::Loaded(profile))
    }

    /// Load the profile, falling back to defaults when the file is corrupt.
    ///
    /// The corruption error is returned alongside so the caller can report it.
    /// Other read failures are still propagated.
    pub fn load_or_default(&self) -> Result<(Profile, Option<BioError>)> {
        match self.load() {
            Ok(outcome) => Ok((outcome.into_profile(), None)),
            Err(e @ BioError::CorruptData { .. }) => {
                log::warn!("{}; falling back to defaults", e);
                Ok((default_profile(), Some(e)))
            }
            Err(e) => Err(e),
        }
    }

    /// Write the full profile as indented JSON, replacing any previous contents.
    ///
    /// The JSON goes to a temporary file beside the target which is then renamed
    /// over it, so a failed write leaves the previous file intact.
    pub fn save_profile(&self, profile: &Profile) -> Result<()> {
        let content = serde_json::to_string_pretty(profile)?;
        let write_err = |source: std::io::Error| BioError::Write {
            path: self.path.clone(),
            source,
        };

        // Same directory as the target, so the rename never crosses filesystems.
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut file = NamedTempFile::new_in(dir).map_err(write_err)?;
        file.write_all(content.as_bytes()).map_err(write_err)?;
        file.as_file().sync_all().map_err(write_err)?;
        file.persist(&self.path).map_err(|e| write_err(e.error))?;

        log::info!("Saved profile to {}", self.path.display());
        Ok(())
    }
}

impl ProfileSink for ProfileStore {
    fn save(&mut self, profile: &Profile) -> Result<()> {
        self.save_profile(profile)
    }
}
