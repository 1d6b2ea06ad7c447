//! JSON reporter
//!
//! Outputs the full AssessmentReport as pretty-printed JSON. Useful for
//! machine consumption, piping to jq, or further processing. The scores
//! object uses the `dim1`..`dim7` + `total` wire names.

use crate::models::AssessmentReport;
use crate::reporters::ReportError;

/// Render report as JSON
pub fn render(report: &AssessmentReport) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Render report as compact JSON (single line)
#[allow(dead_code)] // Public API helper
pub fn render_compact(report: &AssessmentReport) -> Result<String, ReportError> {
    Ok(serde_json::to_string(report)?)
}
