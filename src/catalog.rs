//! Static questionnaire catalog
//!
//! The questions, answer options, dimension descriptions, and research
//! benchmark constants. Reference data only: the `questions` command and
//! the reporters read it, the scoring engine never does. Option labels are
//! listed in score order (index == points awarded) for ordinal questions.

use crate::models::Dimension;
use serde::Serialize;

/// How a question is answered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    /// One label from an ordered scale; index in `options` is the score
    Ordinal,
    /// One label from an unordered set; scores come from a lookup table
    Categorical,
    /// Independent select-all-that-apply checkboxes
    Checkboxes,
}

/// A checkbox item within a multi-select question
#[derive(Debug, Clone, Serialize)]
pub struct CheckboxItem {
    /// Response field key, e.g. `arch_mobility`
    pub key: &'static str,
    pub label: &'static str,
}

/// One questionnaire entry, covering a full dimension (or half of one,
/// for the two-part Ability to Act question)
#[derive(Debug, Clone, Serialize)]
pub struct Question {
    pub dimension: Dimension,
    /// Response field key for single-answer questions, empty for checkboxes
    pub key: &'static str,
    pub prompt: &'static str,
    pub kind: QuestionKind,
    /// Answer labels for ordinal/categorical questions
    pub options: &'static [&'static str],
    /// Items for checkbox questions
    pub items: &'static [CheckboxItem],
}

/// Coverage bands in score order (0-4)
pub const COVERAGE_OPTIONS: [&str; 5] = ["<25%", "25-49%", "50-74%", "75-89%", "≥90%"];

/// Operating-model options, highest-scoring first (4, 2, 1, 0)
pub const GOVERNANCE_OPTIONS: [&str; 4] = [
    "Ongoing governed program with clear ownership and regular reviews",
    "Primarily project-based with temporary ownership",
    "Decentralized — each function manages independently",
    "We do not actively manage job/skills data today",
];

/// Time-to-publish bands in score order (0-4)
pub const VELOCITY_OPTIONS: [&str; 5] = [
    "More than 30 days",
    "15-30 days",
    "8-14 days",
    "3-7 days",
    "Less than 3 days",
];

/// Synchronization-state options, highest-scoring first (4, 3, 1, 0)
pub const INTEGRATION_OPTIONS: [&str; 4] = [
    "All core systems fully synchronized (HRIS, ATS, Comp, LMS)",
    "Most systems integrated (3 of 4)",
    "Some systems connected, but significant manual work",
    "Systems operate independently (manual exports/imports)",
];

/// The full questionnaire in presentation order
pub const QUESTIONS: [Question; 8] = [
    Question {
        dimension: Dimension::Coverage,
        key: "coverage",
        prompt: "What percentage of your job descriptions include defined skills or competencies?",
        kind: QuestionKind::Ordinal,
        options: &COVERAGE_OPTIONS,
        items: &[],
    },
    Question {
        dimension: Dimension::Governance,
        key: "governance",
        prompt: "How do you currently manage job and skills data?",
        kind: QuestionKind::Categorical,
        options: &GOVERNANCE_OPTIONS,
        items: &[],
    },
    Question {
        dimension: Dimension::Velocity,
        key: "velocity",
        prompt: "When you need to update a job description, how quickly can it go live?",
        kind: QuestionKind::Ordinal,
        options: &VELOCITY_OPTIONS,
        items: &[],
    },
    Question {
        dimension: Dimension::Architecture,
        key: "",
        prompt: "Which of the following are linked to your job/skills data?",
        kind: QuestionKind::Checkboxes,
        options: &[],
        items: &[
            CheckboxItem {
                key: "arch_mobility",
                label: "Internal mobility and career paths",
            },
            CheckboxItem {
                key: "arch_comp",
                label: "Compensation and job leveling",
            },
            CheckboxItem {
                key: "arch_planning",
                label: "Workforce planning",
            },
        ],
    },
    Question {
        dimension: Dimension::Integration,
        key: "integration",
        prompt: "Are job data updates automatically propagated across your HR systems?",
        kind: QuestionKind::Categorical,
        options: &INTEGRATION_OPTIONS,
        items: &[],
    },
    Question {
        dimension: Dimension::Controls,
        key: "",
        prompt: "Which governance controls are in place?",
        kind: QuestionKind::Checkboxes,
        options: &[],
        items: &[
            CheckboxItem {
                key: "control_ownership",
                label: "Clear ownership of job/skills content",
            },
            CheckboxItem {
                key: "control_approvals",
                label: "Formal approval workflows",
            },
            CheckboxItem {
                key: "control_lineage",
                label: "Version history and audit trails",
            },
            CheckboxItem {
                key: "control_bias",
                label: "Bias review and compliance checks",
            },
        ],
    },
    Question {
        dimension: Dimension::AbilityToAct,
        key: "",
        prompt: "Skills data drives decisions for:",
        kind: QuestionKind::Checkboxes,
        options: &[],
        items: &[
            CheckboxItem {
                key: "act_reskilling",
                label: "Reskilling/upskilling programs",
            },
            CheckboxItem {
                key: "act_mobility",
                label: "Internal mobility decisions",
            },
            CheckboxItem {
                key: "act_comp",
                label: "Compensation decisions",
            },
            CheckboxItem {
                key: "act_hiring",
                label: "Hiring/requisition requirements",
            },
            CheckboxItem {
                key: "act_planning",
                label: "Workforce planning",
            },
        ],
    },
    Question {
        dimension: Dimension::AbilityToAct,
        key: "",
        prompt: "We track these metrics:",
        kind: QuestionKind::Checkboxes,
        options: &[],
        items: &[
            CheckboxItem {
                key: "metric_cycle",
                label: "Cycle times (JD → Req → Hire)",
            },
            CheckboxItem {
                key: "metric_exception",
                label: "Exception rates / MTTR",
            },
            CheckboxItem {
                key: "metric_ttp",
                label: "Time-to-publish",
            },
            CheckboxItem {
                key: "metric_mobility",
                label: "Internal mobility rate",
            },
        ],
    },
];

/// Reference text explaining a dimension
#[derive(Debug, Clone, Serialize)]
pub struct DimensionDescription {
    pub dimension: Dimension,
    pub description: &'static str,
    pub why_it_matters: &'static str,
}

/// What each dimension measures and why it matters
pub fn dimension_descriptions() -> [DimensionDescription; 7] {
    [
        DimensionDescription {
            dimension: Dimension::Coverage,
            description: "What percentage of your job descriptions include defined skills or \
                competencies? Coverage is the foundation, though research shows coverage alone \
                is not maturity.",
            why_it_matters: "Without baseline coverage, you can't execute on skills-based \
                initiatives. However, high coverage without governance leads to stale, \
                untrustworthy data.",
        },
        DimensionDescription {
            dimension: Dimension::Governance,
            description: "Do you have a repeatable process with clear accountability for \
                managing job data? Or is it ad-hoc and project-based?",
            why_it_matters: "Governance determines whether your data is an asset or liability. \
                Without it, coverage becomes technical debt.",
        },
        DimensionDescription {
            dimension: Dimension::Velocity,
            description: "How quickly can you respond to business needs by updating job \
                descriptions? Measured as time from request to publication.",
            why_it_matters: "Lengthy approval cycles bottleneck hiring, compensation changes, \
                and workforce planning. Velocity indicates operational maturity.",
        },
        DimensionDescription {
            dimension: Dimension::Architecture,
            description: "Is there a coherent framework of job levels, families, and career \
                paths that scaffolds your job data and enables consistency?",
            why_it_matters: "Architecture enables mobility, equity, and workforce planning. \
                Without it, every job is an island.",
        },
        DimensionDescription {
            dimension: Dimension::Integration,
            description: "Are job data updates automatically propagated across HR systems? Or \
                do systems operate independently with manual syncing?",
            why_it_matters: "Fragmentation creates version conflicts, manual rework, and \
                \"which system is right?\" debates. Integration ensures a single source of \
                truth.",
        },
        DimensionDescription {
            dimension: Dimension::Controls,
            description: "Do you have guardrails like approval workflows, version history, and \
                bias review to ensure quality and compliance?",
            why_it_matters: "Controls mitigate legal risk, ensure equity, and prepare you for \
                AI. Without them, you can't defend your job data in an audit or lawsuit.",
        },
        DimensionDescription {
            dimension: Dimension::AbilityToAct,
            description: "Can stakeholders extract insights and drive decisions from your \
                job/skills data? Or is data trapped in spreadsheets?",
            why_it_matters: "Data only delivers ROI when it drives action. Analytics, \
                dashboards, and process integration turn inventory into impact.",
        },
    ]
}

/// Research benchmark: mean total score across the survey sample
pub const BENCHMARK_MEAN_SCORE: f64 = 14.28;

/// Research benchmark: per-dimension averages (0-4 scale), scoring order
pub const BENCHMARK_DIMENSION_SCORES: [f64; 7] = [1.95, 2.08, 1.94, 1.93, 2.52, 2.08, 1.78];
