//! Process log analysis: per-user process counts and CPU totals, plus
//! global CPU and memory averages computed by two isolated workers.

pub mod analysis;
pub mod error;
pub mod log;
pub mod logging;
pub mod model;
pub mod reduce;
pub mod render;

pub use error::AnalysisError;

pub type Result<T> = anyhow::Result<T>;
