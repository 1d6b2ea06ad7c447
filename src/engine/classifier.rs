//! Maturity level classifier
//!
//! Maps a total score to one of five maturity levels with pre-authored
//! descriptive text. Defensive: totals outside [0,28] fall back to level 1
//! rather than failing.

use crate::models::{LevelInfo, MaturityLevel};

/// Classify a total score into its maturity level.
///
/// Takes an `i32` so callers holding raw or external totals can pass them
/// straight through; anything outside [0,28] is treated as Ad Hoc.
pub fn classify_level(total: i32) -> LevelInfo {
    let level = level_for_total(total);
    LevelInfo {
        number: level.number(),
        name: level.name().to_string(),
        description: level_description(level).to_string(),
    }
}

/// Band lookup. Out-of-range totals default to Ad Hoc.
pub fn level_for_total(total: i32) -> MaturityLevel {
    match total {
        0..=5 => MaturityLevel::AdHoc,
        6..=10 => MaturityLevel::Emerging,
        11..=16 => MaturityLevel::Defined,
        17..=21 => MaturityLevel::Governed,
        22..=28 => MaturityLevel::Optimized,
        _ => MaturityLevel::AdHoc,
    }
}

/// Pre-authored characteristics and next-step text for a level
pub fn level_description(level: MaturityLevel) -> &'static str {
    match level {
        MaturityLevel::AdHoc => {
            "**You're at the beginning.** Job and skills data management is informal or \
             non-existent. You're likely feeling pain around inconsistent job descriptions, \
             lengthy hiring cycles, and inability to make data-driven workforce decisions.\n\n\
             **Characteristics:**\n\
             - Minimal skills coverage (<25%)\n\
             - No formal governance or ownership\n\
             - Each function manages independently\n\
             - Systems completely disconnected\n\
             - High cycle times and manual work\n\n\
             **Key Challenge:** Without foundational structure, every talent initiative starts \
             from scratch.\n\n\
             **Next Step:** Start with a pilot. Define ownership, establish a small governed \
             inventory, and demonstrate quick wins to build executive support."
        }
        MaturityLevel::Emerging => {
            "**You're building momentum.** You have some foundational elements in place but \
             lack the systematic approach needed for scale. Your job data efforts are reactive \
             and siloed.\n\n\
             **Characteristics:**\n\
             - Limited skills coverage (25-50%)\n\
             - Primarily ad-hoc or project-based efforts\n\
             - Decentralized ownership across functions\n\
             - Systems operate independently\n\
             - Minimal governance controls\n\n\
             **Key Challenge:** Scaling without governance will create the coverage paradox: \
             more data, but no control over quality or consistency.\n\n\
             **Next Step:** Define an operating model and assign clear ownership before \
             expanding coverage."
        }
        MaturityLevel::Defined => {
            "**You're at a critical juncture.** You likely have good coverage but inconsistent \
             governance, the exact paradox our research uncovered. 91% of organizations at \
             this level are planning major overhauls because their data has become static \
             technical debt rather than a strategic asset.\n\n\
             **Characteristics:**\n\
             - Moderate to high skills coverage (50-75%+)\n\
             - Project-based or informal governance\n\
             - Manual processes and fragmented systems\n\
             - Data exists but isn't driving decisions\n\
             - Planning governance overhauls\n\n\
             **Critical Risk:** Without governance, your coverage becomes stale and \
             untrustworthy.\n\n\
             **Next Step:** Establish formal governance (ownership, approval workflows, system \
             integration) before expanding coverage further."
        }
        MaturityLevel::Governed => {
            "**Well done!** You have systematic governance with integrated systems and clear \
             accountability. Your job data is trustworthy and actionable. Focus now shifts to \
             optimization and advanced analytics capabilities.\n\n\
             **Characteristics:**\n\
             - Comprehensive governance controls in place\n\
             - Systems fully integrated with automated sync\n\
             - Clear ownership and approval workflows\n\
             - Data actively drives talent decisions\n\
             - Regular audits and continuous improvement\n\n\
             **Next Step:** Move from reactive to predictive. Build advanced analytics and \
             forecasting capabilities."
        }
        MaturityLevel::Optimized => {
            "**Congratulations!** Your organization demonstrates world-class job data \
             maturity. You have continuous improvement cycles, predictive analytics, and \
             skills data that drives strategic workforce decisions. Your data is a competitive \
             advantage.\n\n\
             **Characteristics:**\n\
             - Real-time data synchronization across all systems\n\
             - Predictive analytics and AI-driven insights\n\
             - Skills data drives all major talent decisions\n\
             - Continuous improvement with tracked ROI\n\
             - Industry leadership in governance practices"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries() {
        assert_eq!(level_for_total(0), MaturityLevel::AdHoc);
        assert_eq!(level_for_total(5), MaturityLevel::AdHoc);
        assert_eq!(level_for_total(6), MaturityLevel::Emerging);
        assert_eq!(level_for_total(10), MaturityLevel::Emerging);
        assert_eq!(level_for_total(11), MaturityLevel::Defined);
        assert_eq!(level_for_total(16), MaturityLevel::Defined);
        assert_eq!(level_for_total(17), MaturityLevel::Governed);
        assert_eq!(level_for_total(21), MaturityLevel::Governed);
        assert_eq!(level_for_total(22), MaturityLevel::Optimized);
        assert_eq!(level_for_total(28), MaturityLevel::Optimized);
    }

    #[test]
    fn test_out_of_range_defaults_to_ad_hoc() {
        assert_eq!(classify_level(-5).number, 1);
        assert_eq!(classify_level(35).number, 1);
        assert_eq!(classify_level(29).number, 1);
    }

    #[test]
    fn test_monotonic_over_valid_range() {
        let mut prev = 0;
        for total in 0..=28 {
            let number = classify_level(total).number;
            assert!(number >= prev, "level dropped at total {}", total);
            prev = number;
        }
    }

    #[test]
    fn test_level_info_carries_name_and_description() {
        let info = classify_level(14);
        assert_eq!(info.number, 3);
        assert_eq!(info.name, "Defined");
        assert!(info.description.contains("critical juncture"));
    }
}
