//! Text (terminal) reporter with colors and formatting

use crate::config::BrandingConfig;
use crate::models::{AssessmentReport, Dimension, MAX_SCORE, MAX_SCORE_PER_DIMENSION};

/// Level colors (ANSI escape codes)
fn level_color(number: u8) -> &'static str {
    match number {
        5 => "\x1b[32m", // Green
        4 => "\x1b[92m", // Light green
        3 => "\x1b[33m", // Yellow
        2 => "\x1b[91m", // Light red
        _ => "\x1b[31m", // Red
    }
}

/// Reset ANSI color
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

/// Width of the per-dimension score bar
const BAR_WIDTH: usize = 8;

/// Render report as formatted terminal output
pub fn render(report: &AssessmentReport, branding: &BrandingConfig) -> String {
    let mut out = String::new();

    // Header
    let lc = level_color(report.level.number);
    out.push_str(&format!("\n{BOLD}{}{RESET}\n", branding.product_name));
    out.push_str(&format!(
        "{DIM}──────────────────────────────────────{RESET}\n"
    ));
    out.push_str(&format!(
        "Score: {BOLD}{}/{}{RESET}  Level: {lc}{BOLD}{} ({}){RESET}\n\n",
        report.scores.total, MAX_SCORE, report.level.number, report.level.name
    ));

    // Dimension breakdown
    out.push_str(&format!("{BOLD}DIMENSIONS{RESET}\n"));
    for dim in Dimension::ALL {
        let score = report.scores.dimension(dim);
        out.push_str(&format!(
            "  {:<22} {} {}/{}\n",
            dim.name(),
            score_bar(score),
            score,
            MAX_SCORE_PER_DIMENSION
        ));
    }
    out.push('\n');

    // Level summary (first paragraph only; full text belongs to markdown/json)
    if let Some(first_para) = report.level.description.split("\n\n").next() {
        out.push_str(&format!("{}\n\n", strip_emphasis(first_para)));
    }

    // Recommendations
    out.push_str(&format!(
        "{BOLD}RECOMMENDATIONS{RESET} ({})\n",
        report.recommendations.len()
    ));
    for (i, rec) in report.recommendations.iter().enumerate() {
        out.push_str(&format!("  {DIM}{:>2}.{RESET} {BOLD}{}{RESET}\n", i + 1, rec.title));
        out.push_str(&format!("      {}\n", rec.description));
    }
    out.push('\n');

    // Insights
    if !report.insights.is_empty() {
        out.push_str(&format!("{BOLD}KEY INSIGHTS{RESET}\n"));
        for insight in &report.insights {
            out.push_str(&format!("  {BOLD}{}{RESET}: {}\n", insight.title, insight.body));
        }
        out.push('\n');
    }

    // Benchmark
    if let Some(benchmark) = &report.benchmark {
        out.push_str(&format!("{BOLD}BENCHMARK{RESET}\n"));
        out.push_str(&format!(
            "  Industry average: {:.1}/{}  Your delta: {}\n",
            benchmark.mean_score,
            MAX_SCORE,
            format_delta(benchmark.delta)
        ));
        out.push_str(&format!(
            "  Estimated percentile: {}\n\n",
            benchmark.percentile
        ));
    }

    out.push_str(&format!(
        "{DIM}{} · {}{RESET}\n",
        branding.company_name, branding.website_url
    ));

    out
}

/// Filled/empty bar for a 0-4 score
fn score_bar(score: u8) -> String {
    let filled = (usize::from(score) * BAR_WIDTH) / usize::from(MAX_SCORE_PER_DIMENSION);
    let color = if score >= 3 {
        "\x1b[32m"
    } else if score == 2 {
        "\x1b[33m"
    } else {
        "\x1b[31m"
    };
    format!(
        "{color}{}{DIM}{}{RESET}",
        "█".repeat(filled),
        "░".repeat(BAR_WIDTH - filled)
    )
}

/// Signed delta with color
fn format_delta(delta: f64) -> String {
    let color = if delta >= 0.0 { "\x1b[32m" } else { "\x1b[31m" };
    format!("{color}{:+.1}{RESET}", delta)
}

/// Drop markdown bold markers for terminal prose
fn strip_emphasis(s: &str) -> String {
    s.replace("**", "")
}
