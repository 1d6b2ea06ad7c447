//! jobiq - Job IQ maturity assessment
//!
//! Scores an organization's job & skills data maturity from a 7-dimension
//! questionnaire: per-dimension scores (0-4), a total Job IQ (0-28), a
//! maturity level (Ad Hoc through Optimized), and a ranked set of
//! recommendations. The engine is a set of pure functions; the CLI,
//! config, and reporters around it are presentation plumbing.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod engine;
pub mod models;
pub mod reporters;
