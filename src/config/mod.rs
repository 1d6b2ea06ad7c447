//! Assessment configuration support
//!
//! Loads optional per-project configuration from a `jobiq.toml` file in the
//! working directory (or an explicit `--config` path). Every field has a
//! default; a malformed file is logged and replaced by defaults rather than
//! aborting the run.
//!
//! # Configuration Format
//!
//! ```toml
//! # jobiq.toml
//!
//! [branding]
//! product_name = "Job IQ — Job Intelligence Index"
//! company_name = "JDX"
//! website_url = "https://jdxpert.com"
//!
//! [report]
//! num_recommendations = 5
//! show_benchmarks = true
//! show_insights = true
//!
//! [benchmark]
//! mean_score = 14.28
//! dimension_scores = [1.95, 2.08, 1.94, 1.93, 2.52, 2.08, 1.78]
//! ```

use crate::catalog::{BENCHMARK_DIMENSION_SCORES, BENCHMARK_MEAN_SCORE};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, warn};

/// Default config file name
pub const CONFIG_FILE: &str = "jobiq.toml";

/// Top-level assessment configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssessmentConfig {
    #[serde(default)]
    pub branding: BrandingConfig,
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub benchmark: BenchmarkConfig,
}

/// Branding shown in report headers and footers
#[derive(Debug, Clone, Deserialize)]
pub struct BrandingConfig {
    #[serde(default = "default_product_name")]
    pub product_name: String,
    #[serde(default = "default_company_name")]
    pub company_name: String,
    #[serde(default = "default_website_url")]
    pub website_url: String,
}

impl Default for BrandingConfig {
    fn default() -> Self {
        Self {
            product_name: default_product_name(),
            company_name: default_company_name(),
            website_url: default_website_url(),
        }
    }
}

fn default_product_name() -> String {
    "Job IQ — Job Intelligence Index".to_string()
}
fn default_company_name() -> String {
    "JDX".to_string()
}
fn default_website_url() -> String {
    "https://jdxpert.com".to_string()
}

/// Report assembly options
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Cap on recommendations shown (the engine never produces more than 5)
    #[serde(default = "default_num_recommendations")]
    pub num_recommendations: usize,
    #[serde(default = "default_true")]
    pub show_benchmarks: bool,
    #[serde(default = "default_true")]
    pub show_insights: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            num_recommendations: default_num_recommendations(),
            show_benchmarks: true,
            show_insights: true,
        }
    }
}

fn default_num_recommendations() -> usize {
    5
}
fn default_true() -> bool {
    true
}

/// Research benchmark reference values, overridable per deployment
#[derive(Debug, Clone, Deserialize)]
pub struct BenchmarkConfig {
    #[serde(default = "default_mean_score")]
    pub mean_score: f64,
    #[serde(default = "default_dimension_scores")]
    pub dimension_scores: Vec<f64>,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            mean_score: default_mean_score(),
            dimension_scores: default_dimension_scores(),
        }
    }
}

fn default_mean_score() -> f64 {
    BENCHMARK_MEAN_SCORE
}
fn default_dimension_scores() -> Vec<f64> {
    BENCHMARK_DIMENSION_SCORES.to_vec()
}

impl AssessmentConfig {
    /// Load config from an explicit path, or `jobiq.toml` in `dir` if
    /// present. Falls back to defaults on any error.
    pub fn load(explicit: Option<&Path>, dir: &Path) -> Self {
        let path = match explicit {
            Some(p) => p.to_path_buf(),
            None => dir.join(CONFIG_FILE),
        };

        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => match toml::from_str::<AssessmentConfig>(&content) {
                Ok(mut config) => {
                    debug!("Loaded config from {}", path.display());
                    config.sanitize();
                    config
                }
                Err(e) => {
                    warn!("Failed to parse {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Clamp out-of-range values back to usable defaults
    fn sanitize(&mut self) {
        if self.report.num_recommendations == 0 || self.report.num_recommendations > 5 {
            warn!(
                "report.num_recommendations = {} out of range, using 5",
                self.report.num_recommendations
            );
            self.report.num_recommendations = 5;
        }
        if self.benchmark.dimension_scores.len() != 7 {
            warn!(
                "benchmark.dimension_scores has {} entries, expected 7; using research defaults",
                self.benchmark.dimension_scores.len()
            );
            self.benchmark.dimension_scores = default_dimension_scores();
        }
    }

    /// Commented template written by `jobiq init`
    pub fn example_toml() -> &'static str {
        r#"# jobiq.toml - Job IQ assessment configuration
# All settings are optional; defaults shown.

[branding]
# product_name = "Job IQ — Job Intelligence Index"
# company_name = "JDX"
# website_url = "https://jdxpert.com"

[report]
# Maximum recommendations shown (1-5)
# num_recommendations = 5
# show_benchmarks = true
# show_insights = true

[benchmark]
# Research reference values for the benchmark overlay
# mean_score = 14.28
# dimension_scores = [1.95, 2.08, 1.94, 1.93, 2.52, 2.08, 1.78]
"#
    }
}
