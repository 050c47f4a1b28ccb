//! Bio Console CLI
//!
//! Shows the profile card and runs the edit menu until the user saves and exits.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use bio_console::config::{DEFAULT_DATA_FILE, MAX_SPEED_FACTOR, Pacing, Settings};
use bio_console::display::Presenter;
use bio_console::editor::prompt_line;
use bio_console::repl::Repl;
use bio_console::storage::ProfileStore;

// =============================================================================
// CLI Arguments
// =============================================================================

/// Interactive bio card
#[derive(Parser, Debug)]
#[command(name = "bio-console")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Profile data file
    #[arg(short, long, default_value = DEFAULT_DATA_FILE)]
    data: PathBuf,

    /// Render instantly, without the typewriter effect
    #[arg(long)]
    no_animation: bool,

    /// Multiply every animation delay by this factor
    #[arg(short, long, default_value = "1.0", value_parser = parse_speed)]
    speed: f64,

    /// Disable colored headers
    #[arg(long)]
    no_color: bool,
}

fn parse_speed(s: &str) -> std::result::Result<f64, String> {
    let factor: f64 = s.parse().map_err(|_| format!("'{}' is not a number", s))?;
    if !(0.0..=MAX_SPEED_FACTOR).contains(&factor) {
        return Err(format!("speed must be between 0 and {}", MAX_SPEED_FACTOR));
    }
    Ok(factor)
}

impl Args {
    fn into_settings(self) -> Settings {
        let pacing = if self.no_animation {
            Pacing::instant()
        } else {
            Pacing::scaled(self.speed)
        };
        Settings {
            data_file: self.data,
            pacing,
            color: !self.no_color,
        }
    }
}

// =============================================================================
// Main
// =============================================================================

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let settings = Args::parse().into_settings();
    log::debug!("Settings: {:?}", settings);

    let store = ProfileStore::new(&settings.data_file);
    let (profile, corrupt) = store
        .load_or_default()
        .context("Failed to load profile data")?;

    let mut input = std::io::stdin().lock();
    if let Some(e) = corrupt {
        // Shown before the first render clears the screen.
        eprintln!("⚠️  {}", e);
        eprintln!("⚠️  Starting from the default profile; saving will overwrite the file.");
        prompt_line(&mut input, &mut std::io::stderr(), "Press Enter to continue...")
            .context("Failed to read acknowledgment")?;
    }

    let mut repl = Repl::new(
        input,
        std::io::stdout(),
        Presenter::from_settings(&settings),
        store,
        profile,
    );
    repl.run().context("Bio console session ended unexpectedly")?;

    Ok(())
}
