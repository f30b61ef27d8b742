use thiserror::Error;

/// Structural problems that make a roster grid unsafe to emit.
///
/// Messages refer to positions, never to names or identity numbers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssemblyFailure {
    #[error("ordered patient #{position} has no aggregated record")]
    UnknownPatient { position: usize },
    #[error("ordered patient #{position} has no patient number")]
    MissingNumber { position: usize },
    #[error("patient numbers are not a dense 1..={expected} sequence")]
    NumberingGap { expected: usize },
    #[error("{ordered} ordered patients for {aggregated} aggregated records")]
    PatientCountMismatch { ordered: usize, aggregated: usize },
    #[error("exam column #{column} appears more than once")]
    DuplicateExamColumn { column: usize },
    #[error("exam column #{column} has {marked} marks but a tally of {counted}")]
    TallyMismatch {
        column: usize,
        marked: usize,
        counted: usize,
    },
}

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("assembly failed: {0}")]
    Assembly(#[from] AssemblyFailure),
    #[error("invalid options: {0}")]
    InvalidOptions(String),
}

pub type Result<T> = std::result::Result<T, RosterError>;
