//! Recommendation generator
//!
//! Assembles the advisory list as an ordered rule pipeline: two strategic
//! entries for the level, then gap-driven entries for the weakest
//! dimensions, then two conditional cross-cutting entries, truncated to
//! [`MAX_RECOMMENDATIONS`]. Insertion order is the priority signal; the
//! list is never re-sorted after assembly.

use crate::models::{Dimension, MaturityLevel, Recommendation, ScoreResult};

/// Upper bound on the returned list length
pub const MAX_RECOMMENDATIONS: usize = 5;

/// A dimension must score at or below this to earn a gap recommendation
const GAP_THRESHOLD: u8 = 2;

/// Generate 2-5 recommendations for the given scores and level.
///
/// Deterministic for identical input; always begins with the two
/// level-specific strategic entries.
pub fn generate_recommendations(scores: &ScoreResult, level: MaturityLevel) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    let lowest_dims = scores.lowest_dimensions();

    // 1. Level-specific strategic pair, unconditional
    let (first, second) = level_recommendations(level);
    recommendations.push(first);
    recommendations.push(second);

    // 2. Up to 2 gap entries for minimum-tied dimensions. A tie at the
    //    minimum is not enough on its own: the score must also be a real
    //    gap (<= 2), so an all-threes result adds nothing here.
    for dim in lowest_dims.iter().take(2) {
        if scores.dimension(*dim) <= GAP_THRESHOLD {
            recommendations.push(dimension_recommendation(*dim));
        }
    }

    // 3. Cross-cutting integration push, unless integration was already
    //    surfaced as a minimum-tied dimension above
    if scores.integration <= 1 && !lowest_dims.contains(&Dimension::Integration) {
        recommendations.push(Recommendation::new(
            "Prioritize System Integration",
            "Siloed systems create version conflicts and manual rework. Integrating HRIS, \
             ATS, and Comp systems will have outsized impact on data quality and operational \
             efficiency.",
        ));
    }

    // 4. AI readiness for Defined and above with weak controls or analytics
    if level >= MaturityLevel::Defined
        && (scores.controls <= GAP_THRESHOLD || scores.ability_to_act <= GAP_THRESHOLD)
    {
        recommendations.push(Recommendation::new(
            "Prepare for AI-Driven Workforce Decisions",
            "AI tools require clean, governed skills data. Without strong controls and \
             analytics, AI will amplify existing data quality issues. Treat governance as a \
             prerequisite for AI adoption, not an afterthought.",
        ));
    }

    recommendations.truncate(MAX_RECOMMENDATIONS);
    recommendations
}

/// The fixed strategic pair for a maturity level
fn level_recommendations(level: MaturityLevel) -> (Recommendation, Recommendation) {
    match level {
        MaturityLevel::AdHoc => (
            Recommendation::new(
                "Establish Foundational Governance",
                "Assign a clear owner for job data governance. Start with 10-20 critical \
                 roles and establish a governed process for maintaining them. This creates \
                 the foundation for scaling.",
            ),
            Recommendation::new(
                "Build Your Pilot",
                "Choose one high-value use case (e.g., critical hiring roles or equity \
                 audit). Define skills, implement basic approval workflow, and track cycle \
                 time improvement. Use this to build executive support.",
            ),
        ),
        MaturityLevel::Emerging => (
            Recommendation::new(
                "Formalize Your Operating Model",
                "Move from ad-hoc projects to an ongoing governed program. Define ownership \
                 across HR, Talent Acquisition, and Comp. Establish regular review cadences \
                 (quarterly minimum).",
            ),
            Recommendation::new(
                "Integrate Your Core Systems",
                "Connect HRIS, ATS, and Compensation systems to ensure job data flows \
                 automatically. This eliminates manual rework and ensures consistency across \
                 recruiting, hiring, and comp decisions.",
            ),
        ),
        MaturityLevel::Defined => (
            Recommendation::new(
                "Address the Coverage-Governance Gap",
                "You likely have decent coverage but weak governance, the exact trap our \
                 research identified. Before expanding coverage further, implement formal \
                 approval workflows, version control, and system synchronization. Otherwise \
                 your data becomes stale technical debt.",
            ),
            Recommendation::new(
                "Implement Change Management Process",
                "Establish SLAs for job updates (target: <7 days from request to publish). \
                 Create lightweight approval workflows that balance control with velocity. \
                 Track time-to-publish as a key metric.",
            ),
        ),
        MaturityLevel::Governed => (
            Recommendation::new(
                "Build Advanced Analytics Capabilities",
                "Move from descriptive to predictive analytics. Build dashboards that \
                 surface skill gaps, succession risks, and mobility opportunities. Empower \
                 business leaders with self-service insights.",
            ),
            Recommendation::new(
                "Expand to Strategic Workforce Planning",
                "Link your job architecture to 3-year workforce planning. Model future skill \
                 needs, identify build-vs-buy decisions, and quantify cost of skill gaps. \
                 Your governance foundation enables this.",
            ),
        ),
        MaturityLevel::Optimized => (
            Recommendation::new(
                "Drive Industry Leadership",
                "Share your practices at conferences and with industry peers. Your maturity \
                 model can influence how the broader market approaches job data governance. \
                 Consider publishing case studies.",
            ),
            Recommendation::new(
                "Continuous Innovation",
                "Explore AI-driven job description generation, real-time labor market \
                 intelligence integration, and predictive skill obsolescence modeling. Stay \
                 at the forefront of the field.",
            ),
        ),
    }
}

/// The canned gap entry for a weak dimension
fn dimension_recommendation(dim: Dimension) -> Recommendation {
    match dim {
        Dimension::Coverage => Recommendation::new(
            "Expand Skills Coverage Strategically",
            "Start with high-impact roles: critical hiring needs, executive positions, or \
             roles with equity concerns. Use AI-assisted tools to accelerate inventory \
             creation while maintaining quality.",
        ),
        Dimension::Governance => Recommendation::new(
            "Establish Governance Program",
            "Assign a dedicated owner (e.g., Talent Management, HRBP lead). Define approval \
             workflows with 3-5 day SLAs. Implement version control and audit trails. Move \
             from projects to program.",
        ),
        Dimension::Velocity => Recommendation::new(
            "Accelerate Time-to-Publish",
            "Your current cycle time is slowing hiring and comp decisions. Streamline \
             approvals, automate status notifications, and implement async review processes. \
             Target: <7 days for standard updates, <3 days for urgent.",
        ),
        Dimension::Architecture => Recommendation::new(
            "Build Job Architecture Framework",
            "Define job levels, families, and career paths. Link skills to career \
             progression and compensation bands. This scaffolding enables mobility, equity, \
             and workforce planning initiatives.",
        ),
        Dimension::Integration => Recommendation::new(
            "Integrate HR Systems",
            "Connect HRIS, ATS, LMS, and Compensation systems to create a single source of \
             truth. Automate data propagation when jobs are updated. Eliminate manual \
             exports/imports and version conflicts.",
        ),
        Dimension::Controls => Recommendation::new(
            "Implement Governance Controls",
            "Add formal approval workflows, version history, and bias review checks. These \
             controls ensure quality, compliance, and auditability, critical for legal \
             defensibility and AI readiness.",
        ),
        Dimension::AbilityToAct => Recommendation::new(
            "Enable Data-Driven Decisions",
            "Build analytics dashboards and link skills data to business processes (hiring, \
             promotion, reskilling). Track metrics like cycle time, mobility rate, and \
             time-to-fill. Demonstrate ROI to sustain investment.",
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(dims: [u8; 7]) -> ScoreResult {
        ScoreResult {
            coverage: dims[0],
            governance: dims[1],
            velocity: dims[2],
            architecture: dims[3],
            integration: dims[4],
            controls: dims[5],
            ability_to_act: dims[6],
            total: dims.iter().sum(),
        }
    }

    #[test]
    fn test_level_pair_always_first() {
        for level in MaturityLevel::ALL {
            let recs = generate_recommendations(&scores([0; 7]), level);
            let (first, second) = level_recommendations(level);
            assert_eq!(recs[0], first);
            assert_eq!(recs[1], second);
        }
    }

    #[test]
    fn test_bounds_two_to_five() {
        // All dimensions strong: only the level pair
        let recs = generate_recommendations(&scores([4, 4, 4, 4, 4, 4, 4]), MaturityLevel::Governed);
        assert_eq!(recs.len(), 2);

        // Level pair + two gap entries + integration cross-cut + AI readiness
        // is six candidates, truncated to the cap
        let recs = generate_recommendations(&scores([0, 0, 3, 3, 1, 2, 4]), MaturityLevel::Defined);
        assert_eq!(recs.len(), MAX_RECOMMENDATIONS);

        // Everything weak: the cross-cut is suppressed, leaving four
        let recs = generate_recommendations(&scores([0; 7]), MaturityLevel::AdHoc);
        assert_eq!(recs.len(), 4);
    }

    #[test]
    fn test_tie_at_three_adds_no_gap_entries() {
        // Minimum is 3 everywhere: ties exist, but no score is a gap
        let recs = generate_recommendations(&scores([3; 7]), MaturityLevel::Governed);
        assert_eq!(recs.len(), 2);
    }

    #[test]
    fn test_gap_entries_follow_dimension_order() {
        let recs = generate_recommendations(&scores([0, 4, 0, 4, 4, 0, 4]), MaturityLevel::Emerging);
        // Coverage and Velocity are the first two minimum-tied dimensions
        assert_eq!(recs[2].title, "Expand Skills Coverage Strategically");
        assert_eq!(recs[3].title, "Accelerate Time-to-Publish");
    }

    #[test]
    fn test_integration_cross_cut_skipped_when_already_lowest() {
        // Integration is the unique minimum: surfaced as a gap entry, so the
        // cross-cutting entry must not duplicate it
        let recs = generate_recommendations(&scores([3, 3, 3, 3, 1, 3, 3]), MaturityLevel::Emerging);
        let integration_titles: Vec<_> = recs
            .iter()
            .filter(|r| r.title.contains("Integrat"))
            .collect();
        assert_eq!(integration_titles.len(), 2); // level pair entry + gap entry
        assert!(!recs.iter().any(|r| r.title == "Prioritize System Integration"));
    }

    #[test]
    fn test_integration_cross_cut_added_when_not_lowest() {
        // Governance 0 is the minimum; integration 1 still warrants the push
        let recs = generate_recommendations(&scores([3, 0, 3, 3, 1, 3, 3]), MaturityLevel::AdHoc);
        assert!(recs.iter().any(|r| r.title == "Prioritize System Integration"));
    }

    #[test]
    fn test_ai_readiness_only_at_defined_and_above() {
        let weak_controls = scores([3, 3, 3, 3, 3, 2, 3]);
        let low = generate_recommendations(&weak_controls, MaturityLevel::Emerging);
        assert!(!low
            .iter()
            .any(|r| r.title == "Prepare for AI-Driven Workforce Decisions"));

        let high = generate_recommendations(&weak_controls, MaturityLevel::Defined);
        assert!(high
            .iter()
            .any(|r| r.title == "Prepare for AI-Driven Workforce Decisions"));
    }

    #[test]
    fn test_deterministic() {
        let s = scores([1, 0, 2, 3, 1, 2, 0]);
        let a = generate_recommendations(&s, MaturityLevel::Defined);
        let b = generate_recommendations(&s, MaturityLevel::Defined);
        assert_eq!(a, b);
    }
}
