use std::path::PathBuf;
use std::time::Duration;

use roster_report::RenderedWith;

/// How one input file ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileStatus {
    Written(RenderedWith),
    DryRun,
    Failed(String),
}

impl FileStatus {
    pub fn is_failed(&self) -> bool {
        matches!(self, FileStatus::Failed(_))
    }
}

#[derive(Debug, Clone)]
pub struct FileSummary {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub company: String,
    pub employees: usize,
    pub exam_types: usize,
    pub rows_skipped: usize,
    pub defaulted_fields: usize,
    pub status: FileStatus,
    pub elapsed: Duration,
}

impl FileSummary {
    pub fn failed(input: PathBuf, error: String, elapsed: Duration) -> Self {
        Self {
            input,
            output: None,
            company: String::new(),
            employees: 0,
            exam_types: 0,
            rows_skipped: 0,
            defaulted_fields: 0,
            status: FileStatus::Failed(error),
            elapsed,
        }
    }
}

#[derive(Debug)]
pub struct BatchResult {
    pub folder: PathBuf,
    pub files: Vec<FileSummary>,
    pub has_errors: bool,
}

impl BatchResult {
    pub fn failed_count(&self) -> usize {
        self.files.iter().filter(|file| file.status.is_failed()).count()
    }

    pub fn succeeded_count(&self) -> usize {
        self.files.len() - self.failed_count()
    }
}
