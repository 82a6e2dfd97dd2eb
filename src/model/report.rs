use crate::model::LogStats;
use crate::reduce::Averages;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserRow {
    pub username: String,
    pub processes: u64,
    pub cpu_total: f64,
}

/// The finished analysis, assembled only once both averages are known.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub entries: u64,
    pub average_cpu: f64,
    pub average_mem: f64,
    pub skipped_lines: u64,

    /// Users in order of first appearance in the log.
    pub users: Vec<UserRow>,
}

impl Report {
    pub fn assemble(stats: &LogStats, averages: Averages) -> Self {
        let users = stats
            .users()
            .map(|u| UserRow {
                username: u.username.clone(),
                processes: u.process_count,
                cpu_total: u.total_cpu,
            })
            .collect();

        Self {
            entries: stats.totals().entry_count,
            average_cpu: averages.cpu,
            average_mem: averages.mem,
            skipped_lines: stats.skipped_lines(),
            users,
        }
    }
}
