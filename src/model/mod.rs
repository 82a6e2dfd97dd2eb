//! Aggregation model: fold log records into per-user stats and global totals.

pub mod report;

pub use report::{Report, UserRow};

use crate::log::LogRecord;
use indexmap::IndexMap;

/// Running totals over every accepted record.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Totals {
    pub entry_count: u64,
    pub total_cpu: f64,
    pub total_mem: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserStat {
    pub username: String,
    pub process_count: u64,
    pub total_cpu: f64,
}

impl UserStat {
    fn new(username: &str) -> Self {
        Self {
            username: username.to_string(),
            process_count: 0,
            total_cpu: 0.0,
        }
    }
}

/// Everything the parse pass produces.
///
/// The user table keeps first-seen order; usernames match by exact,
/// case-sensitive equality.
#[derive(Debug, Clone, Default)]
pub struct LogStats {
    users: IndexMap<String, UserStat>,
    totals: Totals,
    skipped_lines: u64,
}

impl LogStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one accepted record into the user table and the totals.
    pub fn record(&mut self, rec: &LogRecord) {
        let user = self
            .users
            .entry(rec.username.clone())
            .or_insert_with(|| UserStat::new(&rec.username));
        user.process_count += 1;
        user.total_cpu += rec.cpu;

        self.totals.entry_count += 1;
        self.totals.total_cpu += rec.cpu;
        self.totals.total_mem += rec.mem;
    }

    /// Count a line the parser rejected.
    pub fn record_skip(&mut self) {
        self.skipped_lines += 1;
    }

    /// Users in order of first appearance.
    pub fn users(&self) -> impl ExactSizeIterator<Item = &UserStat> {
        self.users.values()
    }

    pub fn user(&self, username: &str) -> Option<&UserStat> {
        self.users.get(username)
    }

    pub fn totals(&self) -> &Totals {
        &self.totals
    }

    pub fn skipped_lines(&self) -> u64 {
        self.skipped_lines
    }
}
