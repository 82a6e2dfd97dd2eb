use crate::Result;
use crate::model::Report;

/// Render the report as pretty-printed JSON, trailing newline included.
pub fn render_json_report(report: &Report) -> Result<String> {
    let mut json = serde_json::to_string_pretty(report)?;
    json.push('\n');
    Ok(json)
}
