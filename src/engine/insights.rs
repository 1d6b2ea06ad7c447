//! Auto-generated insights and benchmark comparison
//!
//! Secondary overlays for the report: pattern checks over the score
//! profile, and a comparison against the research sample. Neither feeds
//! back into scoring.

use crate::catalog::{BENCHMARK_DIMENSION_SCORES, BENCHMARK_MEAN_SCORE};
use crate::models::{BenchmarkComparison, Insight, ScoreResult};

/// Generate key insights from the score profile.
///
/// Returns at least one entry: the balanced-foundation message when no
/// pattern check fires.
pub fn generate(scores: &ScoreResult) -> Vec<Insight> {
    let mut insights = Vec::new();

    // High coverage without the governance to operationalize it
    if scores.coverage >= 3 && scores.total < 20 {
        insights.push(Insight {
            title: "Coverage vs. Governance Gap Detected".to_string(),
            body: "You have high skills coverage but lack the governance to operationalize \
                   it. This is the #1 pain point in our research: 91% of orgs with high \
                   coverage still plan major overhauls."
                .to_string(),
        });
    }

    // Single weakest dimension, only when it is a real gap
    if let Some(weakest) = scores.lowest_dimensions().first().copied() {
        if scores.dimension(weakest) <= 1 {
            insights.push(Insight {
                title: "Priority Gap".to_string(),
                body: format!(
                    "{} is your lowest-scoring dimension. Addressing this will have the \
                     highest impact on your overall maturity.",
                    weakest.short_name()
                ),
            });
        }
    }

    if scores.velocity <= 1 {
        insights.push(Insight {
            title: "Velocity Bottleneck".to_string(),
            body: "Taking 15+ days to update jobs creates friction in hiring and comp \
                   decisions. Streamlining your approval process should be a priority."
                .to_string(),
        });
    }

    if scores.ability_to_act <= 1 {
        insights.push(Insight {
            title: "Data Trapped".to_string(),
            body: "Your job/skills data isn't driving decisions or being measured. Without \
                   analytics and process linkage, you can't demonstrate ROI."
                .to_string(),
        });
    }

    if insights.is_empty() {
        insights.push(Insight {
            title: "Strong Foundation".to_string(),
            body: "Your scores are well-balanced across dimensions. Focus on incremental \
                   improvements to reach the next maturity level."
                .to_string(),
        });
    }

    insights
}

/// Compare a score result against the research benchmark sample
pub fn benchmark(scores: &ScoreResult) -> BenchmarkComparison {
    benchmark_against(scores, BENCHMARK_MEAN_SCORE, &BENCHMARK_DIMENSION_SCORES)
}

/// Benchmark against caller-supplied reference values (config overrides)
pub fn benchmark_against(
    scores: &ScoreResult,
    mean_score: f64,
    dimension_means: &[f64],
) -> BenchmarkComparison {
    let dims = scores.dimensions();
    let dimension_deltas = dims
        .iter()
        .zip(dimension_means.iter())
        .map(|(score, mean)| f64::from(*score) - mean)
        .collect();

    BenchmarkComparison {
        mean_score,
        delta: f64::from(scores.total) - mean_score,
        dimension_means: dimension_means.to_vec(),
        dimension_deltas,
        percentile: percentile(scores.total).to_string(),
    }
}

/// Rough percentile estimate from the survey distribution
pub fn percentile(total: u8) -> &'static str {
    match total {
        22.. => "Top 5%",
        20..=21 => "Top 10%",
        17..=19 => "Top 25%",
        14..=16 => "Top 50%",
        _ => "Bottom 50%",
    }
}
