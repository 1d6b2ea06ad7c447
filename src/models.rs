//! Core data models for jobiq
//!
//! These models are used throughout the codebase for representing
//! questionnaire responses, dimension scores, maturity levels, and
//! assessment results.

use serde::{Deserialize, Serialize};

/// Number of scored dimensions.
pub const NUM_DIMENSIONS: usize = 7;

/// Maximum score per dimension.
pub const MAX_SCORE_PER_DIMENSION: u8 = 4;

/// Maximum total score (7 dimensions x 4 points).
pub const MAX_SCORE: u8 = 28;

/// The seven maturity dimensions, in scoring order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Coverage,
    Governance,
    Velocity,
    Architecture,
    Integration,
    Controls,
    AbilityToAct,
}

impl Dimension {
    /// All dimensions in scoring order (dim1..dim7)
    pub const ALL: [Dimension; NUM_DIMENSIONS] = [
        Dimension::Coverage,
        Dimension::Governance,
        Dimension::Velocity,
        Dimension::Architecture,
        Dimension::Integration,
        Dimension::Controls,
        Dimension::AbilityToAct,
    ];

    /// Zero-based index in scoring order
    pub fn index(&self) -> usize {
        match self {
            Dimension::Coverage => 0,
            Dimension::Governance => 1,
            Dimension::Velocity => 2,
            Dimension::Architecture => 3,
            Dimension::Integration => 4,
            Dimension::Controls => 5,
            Dimension::AbilityToAct => 6,
        }
    }

    /// Full dimension name as shown in reports
    pub fn name(&self) -> &'static str {
        match self {
            Dimension::Coverage => "Coverage/Completeness",
            Dimension::Governance => "Governance/Ownership",
            Dimension::Velocity => "Freshness/Velocity",
            Dimension::Architecture => "Architecture Alignment",
            Dimension::Integration => "System Integration",
            Dimension::Controls => "Controls/Compliance",
            Dimension::AbilityToAct => "Ability to Act",
        }
    }

    /// Short name for compact output
    pub fn short_name(&self) -> &'static str {
        match self {
            Dimension::Coverage => "Coverage",
            Dimension::Governance => "Governance",
            Dimension::Velocity => "Velocity",
            Dimension::Architecture => "Architecture",
            Dimension::Integration => "Integration",
            Dimension::Controls => "Controls",
            Dimension::AbilityToAct => "Ability to Act",
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

/// A complete set of questionnaire responses.
///
/// The key set is fixed and closed; every field defaults so that a missing
/// or unrecognized answer scores the minimum for its dimension rather than
/// failing. Extra keys in the input document are ignored by serde.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResponseSet {
    /// Coverage band, e.g. "75-89%"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coverage: Option<String>,
    /// Operating model description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub governance: Option<String>,
    /// Time-to-publish band, e.g. "3-7 days"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub velocity: Option<String>,

    // Architecture linkages (select all that apply)
    #[serde(default)]
    pub arch_mobility: bool,
    #[serde(default)]
    pub arch_comp: bool,
    #[serde(default)]
    pub arch_planning: bool,

    /// System synchronization description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub integration: Option<String>,

    // Governance controls in place (select all that apply)
    #[serde(default)]
    pub control_ownership: bool,
    #[serde(default)]
    pub control_approvals: bool,
    #[serde(default)]
    pub control_lineage: bool,
    #[serde(default)]
    pub control_bias: bool,

    // Decision drivers (select all that apply)
    #[serde(default)]
    pub act_reskilling: bool,
    #[serde(default)]
    pub act_mobility: bool,
    #[serde(default)]
    pub act_comp: bool,
    #[serde(default)]
    pub act_hiring: bool,
    #[serde(default)]
    pub act_planning: bool,

    // Metrics tracked (select all that apply)
    #[serde(default)]
    pub metric_cycle: bool,
    #[serde(default)]
    pub metric_exception: bool,
    #[serde(default)]
    pub metric_ttp: bool,
    #[serde(default)]
    pub metric_mobility: bool,
}

/// Per-dimension scores plus the total.
///
/// Serialized field names (`dim1`..`dim7`, `total`) are the wire format;
/// the struct fields carry the dimension names for readability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreResult {
    #[serde(rename = "dim1")]
    pub coverage: u8,
    #[serde(rename = "dim2")]
    pub governance: u8,
    #[serde(rename = "dim3")]
    pub velocity: u8,
    #[serde(rename = "dim4")]
    pub architecture: u8,
    #[serde(rename = "dim5")]
    pub integration: u8,
    #[serde(rename = "dim6")]
    pub controls: u8,
    #[serde(rename = "dim7")]
    pub ability_to_act: u8,
    pub total: u8,
}

impl ScoreResult {
    /// Score for a single dimension
    pub fn dimension(&self, dim: Dimension) -> u8 {
        match dim {
            Dimension::Coverage => self.coverage,
            Dimension::Governance => self.governance,
            Dimension::Velocity => self.velocity,
            Dimension::Architecture => self.architecture,
            Dimension::Integration => self.integration,
            Dimension::Controls => self.controls,
            Dimension::AbilityToAct => self.ability_to_act,
        }
    }

    /// All dimension scores in scoring order (dim1..dim7)
    pub fn dimensions(&self) -> [u8; NUM_DIMENSIONS] {
        [
            self.coverage,
            self.governance,
            self.velocity,
            self.architecture,
            self.integration,
            self.controls,
            self.ability_to_act,
        ]
    }

    /// Lowest dimension score
    pub fn minimum(&self) -> u8 {
        self.dimensions().into_iter().min().unwrap_or(0)
    }

    /// All dimensions tied at the lowest score, in scoring order
    pub fn lowest_dimensions(&self) -> Vec<Dimension> {
        let min = self.minimum();
        Dimension::ALL
            .into_iter()
            .filter(|d| self.dimension(*d) == min)
            .collect()
    }
}

/// The five maturity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaturityLevel {
    AdHoc,
    Emerging,
    Defined,
    Governed,
    Optimized,
}

impl MaturityLevel {
    /// All levels in ascending order
    pub const ALL: [MaturityLevel; 5] = [
        MaturityLevel::AdHoc,
        MaturityLevel::Emerging,
        MaturityLevel::Defined,
        MaturityLevel::Governed,
        MaturityLevel::Optimized,
    ];

    /// Level number 1-5
    pub fn number(&self) -> u8 {
        match self {
            MaturityLevel::AdHoc => 1,
            MaturityLevel::Emerging => 2,
            MaturityLevel::Defined => 3,
            MaturityLevel::Governed => 4,
            MaturityLevel::Optimized => 5,
        }
    }

    /// Level display name
    pub fn name(&self) -> &'static str {
        match self {
            MaturityLevel::AdHoc => "Ad Hoc",
            MaturityLevel::Emerging => "Emerging",
            MaturityLevel::Defined => "Defined",
            MaturityLevel::Governed => "Governed",
            MaturityLevel::Optimized => "Optimized",
        }
    }

    /// Inclusive total-score band for this level
    pub fn band(&self) -> (u8, u8) {
        match self {
            MaturityLevel::AdHoc => (0, 5),
            MaturityLevel::Emerging => (6, 10),
            MaturityLevel::Defined => (11, 16),
            MaturityLevel::Governed => (17, 21),
            MaturityLevel::Optimized => (22, 28),
        }
    }
}

impl std::fmt::Display for MaturityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A classified maturity level with its descriptive text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelInfo {
    pub number: u8,
    pub name: String,
    pub description: String,
}

/// A single advisory entry. Order within a list is priority order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub description: String,
}

impl Recommendation {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// An auto-generated insight derived from score patterns
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Insight {
    pub title: String,
    pub body: String,
}

/// Comparison against the research benchmark sample
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkComparison {
    /// Research mean total score
    pub mean_score: f64,
    /// Delta of this assessment's total vs. the mean
    pub delta: f64,
    /// Research per-dimension averages (0-4 scale), scoring order
    pub dimension_means: Vec<f64>,
    /// Per-dimension deltas vs. the averages, scoring order
    pub dimension_deltas: Vec<f64>,
    /// Rough percentile estimate, e.g. "Top 25%"
    pub percentile: String,
}

/// Complete assessment output: scores, level, advice, and optional overlays
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentReport {
    pub scores: ScoreResult,
    pub level: LevelInfo,
    pub recommendations: Vec<Recommendation>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub insights: Vec<Insight>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub benchmark: Option<BenchmarkComparison>,
}
