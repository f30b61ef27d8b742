//! Output file naming.

use std::path::{Path, PathBuf};

/// Prefix of every roster workbook written by the converter.
pub const OUTPUT_FILE_PREFIX: &str = "output_sorted_";

/// Roster path for an export: `output_sorted_<stem>.xlsx`.
///
/// The file lands next to the input unless an output directory is given.
pub fn output_path_for(input: &Path, output_dir: Option<&Path>) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "roster".to_string());
    let dir = match output_dir {
        Some(dir) => dir.to_path_buf(),
        None => input
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default(),
    };
    dir.join(format!("{OUTPUT_FILE_PREFIX}{stem}.xlsx"))
}
