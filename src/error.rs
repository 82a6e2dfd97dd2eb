//! Error taxonomy for a log analysis run.
//!
//! Malformed log lines are not errors: the parser drops them and the
//! aggregator counts them. Everything here is fatal.

use crate::reduce::AverageKind;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("{0}")]
    Usage(String),

    #[error("cannot read log file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("cannot compute average {kind}: no valid log entries")]
    DivideByZero { kind: AverageKind },

    #[error("{kind} worker closed its channel without a result")]
    WorkerChannel { kind: AverageKind },

    #[error("{kind} worker panicked")]
    WorkerPanicked { kind: AverageKind },
}

impl AnalysisError {
    pub fn io(path: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
