use crate::model::Report;
use std::fmt::Write;

/// Render the fixed-layout plain text report, trailing newline included.
pub fn render_text_report(report: &Report) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "===== LOG ANALYSIS =====");
    let _ = writeln!(out, "Total Entries: {}", report.entries);
    let _ = writeln!(out, "Average CPU: {:.2}", report.average_cpu);
    let _ = writeln!(out, "Average Memory: {:.2}", report.average_mem);
    let _ = writeln!(out);
    let _ = writeln!(out, "--- User Stats ---");
    for user in &report.users {
        let _ = writeln!(
            out,
            "{} -> Processes: {} CPU Total: {:.2}",
            user.username, user.processes, user.cpu_total
        );
    }

    out
}
