//! The scoring engine
//!
//! Three pure functions composed in sequence: the score calculator, the
//! level classifier, and the recommendation generator. Each takes plain
//! data in and returns plain data out; none holds state between calls, so
//! concurrent invocations need no coordination. [`assess`] is the standard
//! composition, adding the insight and benchmark overlays when enabled.

pub mod calculator;
pub mod classifier;
pub mod insights;
pub mod recommender;

pub use calculator::calculate_score;
pub use classifier::{classify_level, level_for_total};
pub use recommender::generate_recommendations;

use crate::config::AssessmentConfig;
use crate::models::{AssessmentReport, ResponseSet};
use tracing::info;

/// Run a complete assessment: calculator -> classifier -> recommender,
/// plus the configured overlays.
pub fn assess(responses: &ResponseSet, config: &AssessmentConfig) -> AssessmentReport {
    let scores = calculate_score(responses);
    let level = classify_level(i32::from(scores.total));
    let level_enum = level_for_total(i32::from(scores.total));

    let mut recommendations = generate_recommendations(&scores, level_enum);
    // The configured cap may only lower the engine's fixed limit of 5
    recommendations.truncate(config.report.num_recommendations);

    let insights = if config.report.show_insights {
        insights::generate(&scores)
    } else {
        Vec::new()
    };

    let benchmark = config.report.show_benchmarks.then(|| {
        insights::benchmark_against(
            &scores,
            config.benchmark.mean_score,
            &config.benchmark.dimension_scores,
        )
    });

    info!(
        "Job IQ: {}/28 - Level {} ({}), {} recommendations",
        scores.total,
        level.number,
        level.name,
        recommendations.len()
    );

    AssessmentReport {
        scores,
        level,
        recommendations,
        insights,
        benchmark,
    }
}
