//! Score calculator
//!
//! Turns a raw [`ResponseSet`] into per-dimension scores and a total.
//! Fail-open by contract: unknown or missing answers score the minimum for
//! their dimension, they are never an error.

use crate::models::{ResponseSet, ScoreResult, MAX_SCORE_PER_DIMENSION};
use tracing::debug;

/// Calculate the Job IQ score across all 7 dimensions.
///
/// Total is the unweighted sum of the dimension scores; each dimension is
/// in [0,4] so the total is in [0,28].
pub fn calculate_score(responses: &ResponseSet) -> ScoreResult {
    let coverage = coverage_score(responses.coverage.as_deref());
    let governance = governance_score(responses.governance.as_deref());
    let velocity = velocity_score(responses.velocity.as_deref());
    let architecture = architecture_score(responses);
    let integration = integration_score(responses.integration.as_deref());
    let controls = controls_score(responses);
    let ability_to_act = ability_to_act_score(responses);

    let total = coverage
        + governance
        + velocity
        + architecture
        + integration
        + controls
        + ability_to_act;

    debug!(
        "Dimension scores: coverage={} governance={} velocity={} architecture={} \
         integration={} controls={} ability_to_act={} total={}",
        coverage, governance, velocity, architecture, integration, controls, ability_to_act, total
    );

    ScoreResult {
        coverage,
        governance,
        velocity,
        architecture,
        integration,
        controls,
        ability_to_act,
        total,
    }
}

/// Dimension 1: ordinal lookup over coverage bands
fn coverage_score(answer: Option<&str>) -> u8 {
    match answer {
        Some("<25%") => 0,
        Some("25-49%") => 1,
        Some("50-74%") => 2,
        Some("75-89%") => 3,
        Some("≥90%") => 4,
        _ => 0,
    }
}

/// Dimension 2: categorical lookup over operating models.
///
/// Deliberately non-uniform: project-based scores 2, skipping 3. Governance
/// legitimacy above ad hoc is close to binary; keep these as literal table
/// entries, not a derived ladder.
fn governance_score(answer: Option<&str>) -> u8 {
    match answer {
        Some("Ongoing governed program with clear ownership and regular reviews") => 4,
        Some("Primarily project-based with temporary ownership") => 2,
        Some("Decentralized — each function manages independently") => 1,
        Some("We do not actively manage job/skills data today") => 0,
        _ => 0,
    }
}

/// Dimension 3: ordinal lookup over time-to-publish bands
fn velocity_score(answer: Option<&str>) -> u8 {
    match answer {
        Some("More than 30 days") => 0,
        Some("15-30 days") => 1,
        Some("8-14 days") => 2,
        Some("3-7 days") => 3,
        Some("Less than 3 days") => 4,
        _ => 0,
    }
}

/// Dimension 4: count of architecture linkages.
///
/// The cap is unreachable with 3 inputs; kept in case the question set grows.
fn architecture_score(responses: &ResponseSet) -> u8 {
    let count = [
        responses.arch_mobility,
        responses.arch_comp,
        responses.arch_planning,
    ]
    .into_iter()
    .filter(|&b| b)
    .count() as u8;
    count.min(MAX_SCORE_PER_DIMENSION)
}

/// Dimension 5: categorical lookup over synchronization states.
///
/// Non-uniform: partial integration with manual work scores 1, not 2, to
/// penalize it more sharply than a linear scale would.
fn integration_score(answer: Option<&str>) -> u8 {
    match answer {
        Some("All core systems fully synchronized (HRIS, ATS, Comp, LMS)") => 4,
        Some("Most systems integrated (3 of 4)") => 3,
        Some("Some systems connected, but significant manual work") => 1,
        Some("Systems operate independently (manual exports/imports)") => 0,
        _ => 0,
    }
}

/// Dimension 6: count of governance controls, capped at 4
fn controls_score(responses: &ResponseSet) -> u8 {
    let count = [
        responses.control_ownership,
        responses.control_approvals,
        responses.control_lineage,
        responses.control_bias,
    ]
    .into_iter()
    .filter(|&b| b)
    .count() as u8;
    count.min(MAX_SCORE_PER_DIMENSION)
}

/// Dimension 7: composite of decision drivers and tracked metrics.
///
/// Score = min(4, decisions/2 + metrics). Each tracked metric is worth a
/// full point while two decision linkages are needed for one: measurable
/// tracking is the stronger maturity signal.
fn ability_to_act_score(responses: &ResponseSet) -> u8 {
    let decisions = [
        responses.act_reskilling,
        responses.act_mobility,
        responses.act_comp,
        responses.act_hiring,
        responses.act_planning,
    ]
    .into_iter()
    .filter(|&b| b)
    .count() as u8;

    let metrics = [
        responses.metric_cycle,
        responses.metric_exception,
        responses.metric_ttp,
        responses.metric_mobility,
    ]
    .into_iter()
    .filter(|&b| b)
    .count() as u8;

    (decisions / 2 + metrics).min(MAX_SCORE_PER_DIMENSION)
}
