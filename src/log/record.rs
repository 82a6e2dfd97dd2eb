/// One parsed line of the process log.
///
/// Only `username`, `cpu` and `mem` feed the aggregation; `timestamp` and
/// `process` are kept so callers can log or inspect the full record.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub timestamp: String,
    pub username: String,
    pub process: String,
    pub cpu: f64,
    pub mem: f64,
}
