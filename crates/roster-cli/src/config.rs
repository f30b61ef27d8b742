//! Roster options from a JSON config file and command-line overrides.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use roster_model::RosterOptions;

/// Loads options: defaults, then the config file, then `--preferred-exam` flags.
///
/// Fields missing from the file keep their defaults. Repeated
/// `--preferred-exam` flags replace the whole preferred list.
pub fn load_options(config: Option<&Path>, preferred_exams: &[String]) -> Result<RosterOptions> {
    let mut options = match config {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("read config {}", path.display()))?;
            let options: RosterOptions = serde_json::from_str(&raw)
                .with_context(|| format!("parse config {}", path.display()))?;
            debug!(path = %path.display(), "config loaded");
            options
        }
        None => RosterOptions::default(),
    };
    if !preferred_exams.is_empty() {
        options = options.with_preferred_exams(preferred_exams.iter().cloned());
    }
    options.validate().context("invalid roster options")?;
    Ok(options)
}
