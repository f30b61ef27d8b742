//! Converting exports into roster workbooks, one file or a whole folder.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{error, info, info_span, warn};

use roster_core::build_roster;
use roster_ingest::{list_input_files, read_source_table};
use roster_model::RosterOptions;
use roster_report::{RenderOptions, output_path_for, render_with_fallback};

use crate::types::{BatchResult, FileStatus, FileSummary};

/// Settings shared by every file of a run.
#[derive(Debug, Clone, Default)]
pub struct ConvertSettings {
    pub options: RosterOptions,
    pub render: RenderOptions,
    /// Directory for outputs; next to each input when unset.
    pub output_dir: Option<PathBuf>,
    /// Build and report rosters without writing them.
    pub dry_run: bool,
}

/// Converts one export. `output` overrides the derived output path.
pub fn convert_file(
    input: &Path,
    output: Option<&Path>,
    settings: &ConvertSettings,
) -> Result<FileSummary> {
    let span = info_span!("file", input = %input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let table = read_source_table(input).with_context(|| format!("read {}", input.display()))?;
    let run = build_roster(&table, &settings.options)
        .with_context(|| format!("build roster for {}", input.display()))?;
    if run.stats.patients == 0 {
        warn!("no employee rows found");
    }
    if !run.stats.defaulted_fields.is_empty() {
        warn!(
            fields = ?run.stats.defaulted_fields,
            "company fields missing from export"
        );
    }

    let output_path = match output {
        Some(path) => path.to_path_buf(),
        None => output_path_for(input, settings.output_dir.as_deref()),
    };
    let status = if settings.dry_run {
        info!(output = %output_path.display(), "dry run, roster not written");
        FileStatus::DryRun
    } else {
        let rendered = render_with_fallback(&run.grid, &output_path, settings.render)
            .with_context(|| format!("write {}", output_path.display()))?;
        info!(output = %output_path.display(), ?rendered, "roster written");
        FileStatus::Written(rendered)
    };

    Ok(FileSummary {
        input: input.to_path_buf(),
        output: (!settings.dry_run).then_some(output_path),
        company: run.metadata.name,
        employees: run.stats.patients,
        exam_types: run.stats.exam_types,
        rows_skipped: run.stats.skipped_total(),
        defaulted_fields: run.stats.defaulted_fields.len(),
        status,
        elapsed: start.elapsed(),
    })
}

/// Converts every export in `folder`. A failing file is recorded and the
/// batch moves on.
pub fn run_batch(folder: &Path, settings: &ConvertSettings) -> Result<BatchResult> {
    let span = info_span!("batch", folder = %folder.display());
    let _guard = span.enter();

    let inputs = list_input_files(folder).context("list input files")?;
    info!(files = inputs.len(), "exports found");

    let mut files = Vec::with_capacity(inputs.len());
    for input in inputs {
        let start = Instant::now();
        match convert_file(&input, None, settings) {
            Ok(summary) => files.push(summary),
            Err(err) => {
                let message = format!("{err:#}");
                error!(input = %input.display(), error = %message, "conversion failed");
                files.push(FileSummary::failed(input, message, start.elapsed()));
            }
        }
    }

    let has_errors = files.iter().any(|file| file.status.is_failed());
    Ok(BatchResult {
        folder: folder.to_path_buf(),
        files,
        has_errors,
    })
}
