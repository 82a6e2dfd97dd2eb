//! Log parsing for the fixed-format process log.

pub mod parse;
pub mod record;

pub use parse::{parse_line, parse_log_file, parse_log_reader};
pub use record::LogRecord;
