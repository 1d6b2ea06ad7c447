//! Output reporters for assessment results
//!
//! Supports multiple output formats:
//! - `text` - Terminal output with colors
//! - `json` - Machine-readable JSON
//! - `markdown` - GitHub-flavored Markdown

mod json;
mod markdown;
mod text;

use crate::config::BrandingConfig;
use crate::models::AssessmentReport;
use std::str::FromStr;
use thiserror::Error;

/// Errors from format selection and rendering
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Unknown format '{0}'. Valid formats: text, json, markdown")]
    UnknownFormat(String),
    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Markdown,
}

impl FromStr for OutputFormat {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "terminal" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            _ => Err(ReportError::UnknownFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
        }
    }
}

/// Render an assessment report in the named format
pub fn report(
    report: &AssessmentReport,
    branding: &BrandingConfig,
    format: &str,
) -> Result<String, ReportError> {
    let fmt = OutputFormat::from_str(format)?;
    report_with_format(report, branding, fmt)
}

/// Render an assessment report using an OutputFormat enum
pub fn report_with_format(
    report: &AssessmentReport,
    branding: &BrandingConfig,
    format: OutputFormat,
) -> Result<String, ReportError> {
    match format {
        OutputFormat::Text => Ok(text::render(report, branding)),
        OutputFormat::Json => json::render(report),
        OutputFormat::Markdown => Ok(markdown::render(report, branding)),
    }
}

/// Recommended file extension for a format
pub fn file_extension(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Text => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Markdown => "md",
    }
}
