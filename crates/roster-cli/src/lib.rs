//! Library side of the `exam-roster` binary: batch driver, config and logging.

pub mod batch;
pub mod config;
pub mod logging;
pub mod types;
