use crate::error::AnalysisError;
use crate::log::record::LogRecord;
use crate::model::LogStats;
use regex::Regex;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::sync::LazyLock;
use tracing::{debug, info, trace};

// Exactly five whitespace-separated fields:
// 1) timestamp
// 2) username
// 3) process
// 4) cpu
// 5) mem
static LOG_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s*(\S+)\s+(\S+)\s+(\S+)\s+(\S+)\s+(\S+)\s*$"#)
        .expect("log line pattern is valid")
});

/// Parse one log line into a record.
///
/// Expected columns (whitespace-separated):
/// timestamp  username  process  cpu  mem
///
/// Example:
/// 2024-01-01 alice proc1 10.0 100.0
///
/// Returns `None` for anything else: wrong field count, or a cpu/mem
/// field that is not a finite float.
pub fn parse_line(line: &str) -> Option<LogRecord> {
    let caps = LOG_LINE_RE.captures(line)?;

    let cpu = parse_metric(&caps[4])?;
    let mem = parse_metric(&caps[5])?;

    Some(LogRecord {
        timestamp: caps[1].to_string(),
        username: caps[2].to_string(),
        process: caps[3].to_string(),
        cpu,
        mem,
    })
}

fn parse_metric(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Run the parse pass over a whole log file.
pub fn parse_log_file(path: &str) -> Result<LogStats, AnalysisError> {
    let file = File::open(path).map_err(|e| AnalysisError::io(path, e))?;
    parse_log_reader(BufReader::new(file), path)
}

/// Run the parse pass over any buffered reader, folding every accepted
/// record into a fresh `LogStats` in input order.
///
/// `source` only labels errors and log events.
pub fn parse_log_reader<R: BufRead>(
    mut reader: R,
    source: &str,
) -> Result<LogStats, AnalysisError> {
    let mut stats = LogStats::new();
    let mut buf = Vec::new();
    let mut lno = 0usize;

    loop {
        buf.clear();
        let n = reader
            .read_until(b'\n', &mut buf)
            .map_err(|e| AnalysisError::io(source, e))?;
        if n == 0 {
            break;
        }
        lno += 1;

        // Usernames are map keys; decoding lossily would merge distinct ones.
        let line = std::str::from_utf8(&buf).map_err(|e| {
            AnalysisError::io(
                source,
                io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("line {lno} is not valid UTF-8: {e}"),
                ),
            )
        })?;
        match parse_line(line) {
            Some(record) => {
                trace!(
                    line = lno,
                    timestamp = %record.timestamp,
                    user = %record.username,
                    process = %record.process,
                    "accepted log line"
                );
                stats.record(&record);
            }
            None => {
                debug!(source, line = lno, "skipping malformed log line");
                stats.record_skip();
            }
        }
    }

    info!(
        source,
        lines = lno,
        entries = stats.totals().entry_count,
        users = stats.users().len(),
        skipped = stats.skipped_lines(),
        "parse pass complete"
    );

    Ok(stats)
}
