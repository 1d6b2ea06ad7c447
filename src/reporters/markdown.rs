//! Markdown reporter for GitHub-flavored Markdown output
//!
//! Generates reports suitable for:
//! - Sharing with stakeholders
//! - Email delivery
//! - Documentation and wikis

use crate::config::BrandingConfig;
use crate::models::{AssessmentReport, Dimension, MAX_SCORE, MAX_SCORE_PER_DIMENSION};
use chrono::Local;

/// Render report as GitHub-flavored Markdown
pub fn render(report: &AssessmentReport, branding: &BrandingConfig) -> String {
    let mut md = String::new();

    md.push_str(&render_header(report, branding));
    md.push('\n');

    md.push_str(&render_dimensions(report));
    md.push('\n');

    md.push_str(&render_level(report));
    md.push('\n');

    md.push_str(&render_recommendations(report));
    md.push('\n');

    if !report.insights.is_empty() {
        md.push_str(&render_insights(report));
        md.push('\n');
    }

    if let Some(benchmark) = &report.benchmark {
        md.push_str(&render_benchmark(report, benchmark));
        md.push('\n');
    }

    md.push_str(&render_footer(branding));

    md
}

fn render_header(report: &AssessmentReport, branding: &BrandingConfig) -> String {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    format!(
        r#"# {} Report

**Score: {}/{}** | **Level {}: {}**

Generated: {}
"#,
        branding.product_name,
        report.scores.total,
        MAX_SCORE,
        report.level.number,
        report.level.name,
        timestamp
    )
}

fn render_dimensions(report: &AssessmentReport) -> String {
    let mut md = String::from(
        "## Dimensional Breakdown\n\n\
         | Dimension | Score | Status |\n\
         |-----------|-------|--------|\n",
    );

    for dim in Dimension::ALL {
        let score = report.scores.dimension(dim);
        md.push_str(&format!(
            "| {} | {}/{} | {} |\n",
            dim.name(),
            score,
            MAX_SCORE_PER_DIMENSION,
            score_indicator(score)
        ));
    }

    md
}

fn render_level(report: &AssessmentReport) -> String {
    format!(
        "## {} Maturity\n\n{}\n",
        report.level.name, report.level.description
    )
}

fn render_recommendations(report: &AssessmentReport) -> String {
    let mut md = String::from("## Personalized Recommendations\n\n");

    for (i, rec) in report.recommendations.iter().enumerate() {
        md.push_str(&format!(
            "{}. **{}** — {}\n",
            i + 1,
            rec.title,
            rec.description
        ));
    }

    md
}

fn render_insights(report: &AssessmentReport) -> String {
    let mut md = String::from("## Key Insights\n\n");

    for insight in &report.insights {
        md.push_str(&format!("- **{}**: {}\n", insight.title, insight.body));
    }

    md
}

fn render_benchmark(
    report: &AssessmentReport,
    benchmark: &crate::models::BenchmarkComparison,
) -> String {
    let mut md = format!(
        r#"## Benchmarking

| Metric | Value |
|--------|-------|
| Your Level | Level {} |
| Industry Average | {:.1}/{} |
| Your Delta | {:+.1} |
| Estimated Percentile | {} |

### Dimension vs. Industry Average

| Dimension | You | Average | Delta |
|-----------|-----|---------|-------|
"#,
        report.level.number,
        benchmark.mean_score,
        MAX_SCORE,
        benchmark.delta,
        benchmark.percentile
    );

    for (i, dim) in Dimension::ALL.iter().enumerate() {
        let mean = benchmark.dimension_means.get(i).copied().unwrap_or(0.0);
        let delta = benchmark.dimension_deltas.get(i).copied().unwrap_or(0.0);
        md.push_str(&format!(
            "| {} | {} | {:.2} | {:+.2} |\n",
            dim.short_name(),
            report.scores.dimension(*dim),
            mean,
            delta
        ));
    }

    md
}

fn render_footer(branding: &BrandingConfig) -> String {
    format!(
        "---\n\n*Generated by {} ({})*\n",
        branding.company_name, branding.website_url
    )
}

fn score_indicator(score: u8) -> &'static str {
    match score {
        3..=4 => "✅ Strong",
        2 => "⚠️ Fair",
        _ => "❌ Gap",
    }
}
