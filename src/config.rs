//! Runtime settings for the bio console.
//!
//! Provides animation pacing presets and the session settings built from CLI flags.

use std::path::PathBuf;
use std::time::Duration;

// =============================================================================
// Defaults
// =============================================================================

/// Data file used when no `--data` flag is given (relative to the working directory).
pub const DEFAULT_DATA_FILE: &str = "bio_data.json";

/// Per-character delay for the first banner block.
pub const BANNER_PRIMARY_DELAY: Duration = Duration::from_millis(100);

/// Per-character delay for the second banner block.
pub const BANNER_SECONDARY_DELAY: Duration = Duration::from_millis(20);

/// Delay after each section item.
pub const ITEM_DELAY: Duration = Duration::from_millis(100);

/// Upper bound for `--speed`.
pub const MAX_SPEED_FACTOR: f64 = 100.0;

// =============================================================================
// Pacing
// =============================================================================

/// Delays used by the typewriter presentation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pacing {
    /// Per-character delay for banner block one.
    pub banner_primary: Duration,
    /// Per-character delay for banner block two.
    pub banner_secondary: Duration,
    /// Pause after each printed section item.
    pub item: Duration,
}

impl Pacing {
    /// No delays at all. Used for tests and `--no-animation`.
    pub const fn instant() -> Self {
        Self {
            banner_primary: Duration::ZERO,
            banner_secondary: Duration::ZERO,
            item: Duration::ZERO,
        }
    }

    /// Default pacing with every delay multiplied by `factor`.
    ///
    /// Negative or non-finite factors are treated as zero; large factors are
    /// capped at [`MAX_SPEED_FACTOR`].
    pub fn scaled(factor: f64) -> Self {
        let factor = if factor.is_finite() && factor > 0.0 {
            factor.min(MAX_SPEED_FACTOR)
        } else {
            0.0
        };
        let base = Self::default();
        Self {
            banner_primary: base.banner_primary.mul_f64(factor),
            banner_secondary: base.banner_secondary.mul_f64(factor),
            item: base.item.mul_f64(factor),
        }
    }

    /// True when no delay will ever be applied.
    pub fn is_instant(&self) -> bool {
        self.banner_primary.is_zero() && self.banner_secondary.is_zero() && self.item.is_zero()
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            banner_primary: BANNER_PRIMARY_DELAY,
            banner_secondary: BANNER_SECONDARY_DELAY,
            item: ITEM_DELAY,
        }
    }
}

// =============================================================================
// Settings
// =============================================================================

/// Session settings resolved from the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub data_file: PathBuf,
    pub pacing: Pacing,
    /// Emit color attributes around headers.
    pub color: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            pacing: Pacing::default(),
            color: true,
        }
    }
}
