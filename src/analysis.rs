//! Coordinator: parse pass first, then the two reduction workers, then the
//! report.

use crate::error::AnalysisError;
use crate::log;
use crate::model::{LogStats, Report};
use crate::reduce;
use std::io::BufRead;

/// Analyze a log file end to end.
pub fn analyze_file(path: &str) -> Result<Report, AnalysisError> {
    let stats = log::parse_log_file(path)?;
    summarize(&stats)
}

/// Analyze log text from any buffered reader.
pub fn analyze_reader<R: BufRead>(reader: R, source: &str) -> Result<Report, AnalysisError> {
    let stats = log::parse_log_reader(reader, source)?;
    summarize(&stats)
}

/// Fan the finalized totals out to the workers and build the report once
/// both have answered.
pub fn summarize(stats: &LogStats) -> Result<Report, AnalysisError> {
    let averages = reduce::collect_averages(stats.totals())?;
    Ok(Report::assemble(stats, averages))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::UserRow;
    use crate::reduce::AverageKind;
    use std::io::Cursor;

    const SAMPLE: &str = "\
2024-01-01 alice proc1 10.0 100.0
2024-01-01 bob proc2 20.0 200.0
2024-01-01 alice proc3 30.0 300.0
garbage line here
";

    #[test]
    fn sample_log_report() {
        let report = analyze_reader(Cursor::new(SAMPLE), "sample").unwrap();

        assert_eq!(report.entries, 3);
        assert!((report.average_cpu - 20.0).abs() < 1e-4);
        assert!((report.average_mem - 200.0).abs() < 1e-4);
        assert_eq!(report.skipped_lines, 1);
        assert_eq!(
            report.users,
            vec![
                UserRow {
                    username: "alice".to_string(),
                    processes: 2,
                    cpu_total: 40.0,
                },
                UserRow {
                    username: "bob".to_string(),
                    processes: 1,
                    cpu_total: 20.0,
                },
            ]
        );
    }

    #[test]
    fn only_malformed_lines_is_fatal() {
        let err = analyze_reader(Cursor::new("garbage\nts u p x y\n"), "bad").unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::DivideByZero {
                kind: AverageKind::Cpu
            }
        ));
    }

    #[test]
    fn empty_input_is_fatal() {
        let err = analyze_reader(Cursor::new(""), "empty").unwrap_err();
        assert!(matches!(err, AnalysisError::DivideByZero { .. }));
    }

    #[test]
    fn averages_match_field_sums() {
        let mut text = String::new();
        let mut cpu_sum = 0.0;
        let mut mem_sum = 0.0;
        for i in 0..50u32 {
            let cpu = f64::from(i) * 0.37;
            let mem = f64::from(i * i) * 1.5;
            cpu_sum += cpu;
            mem_sum += mem;
            text.push_str(&format!("t{i} user{} p{i} {cpu} {mem}\n", i % 7));
            if i % 5 == 0 {
                text.push_str("noise\n");
            }
        }

        let report = analyze_reader(Cursor::new(text), "gen").unwrap();
        assert_eq!(report.entries, 50);
        assert_eq!(report.skipped_lines, 10);
        assert!((report.average_cpu - cpu_sum / 50.0).abs() < 1e-4);
        assert!((report.average_mem - mem_sum / 50.0).abs() < 1e-4);

        let processes: u64 = report.users.iter().map(|u| u.processes).sum();
        assert_eq!(processes, report.entries);
        let order: Vec<&str> = report.users.iter().map(|u| u.username.as_str()).collect();
        assert_eq!(
            order,
            vec!["user0", "user1", "user2", "user3", "user4", "user5", "user6"]
        );
    }
}
