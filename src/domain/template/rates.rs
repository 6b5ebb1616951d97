//! Rate table keyed by experience level.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Suggested rates for one experience tier, in whole dollars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateCard {
    /// Hourly rate.
    pub hourly: u32,
    /// Project-based starting price.
    pub project: u32,
}

/// Project prices below this favor the hourly framing.
const PROJECT_RATE_FLOOR: u32 = 1000;

static RATE_TABLE: Lazy<HashMap<&'static str, RateCard>> = Lazy::new(|| {
    HashMap::from([
        ("beginner", RateCard { hourly: 25, project: 500 }),
        ("intermediate", RateCard { hourly: 50, project: 1500 }),
        ("expert", RateCard { hourly: 100, project: 3500 }),
    ])
});

impl RateCard {
    /// Looks up the rates for an experience level.
    ///
    /// Unknown levels default to the intermediate tier.
    pub fn for_level(level: &str) -> RateCard {
        RATE_TABLE
            .get(level)
            .copied()
            .unwrap_or(RATE_TABLE["intermediate"])
    }

    /// The pricing framing to recommend for this tier.
    pub fn recommended_framing(&self) -> &'static str {
        if self.project < PROJECT_RATE_FLOOR {
            "starting with an hourly arrangement"
        } else {
            "a project-based fee"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn beginner_rates() {
        let rate = RateCard::for_level("beginner");
        assert_eq!(rate.hourly, 25);
        assert_eq!(rate.project, 500);
    }

    #[test]
    fn intermediate_rates() {
        let rate = RateCard::for_level("intermediate");
        assert_eq!(rate.hourly, 50);
        assert_eq!(rate.project, 1500);
    }

    #[test]
    fn expert_rates() {
        let rate = RateCard::for_level("expert");
        assert_eq!(rate.hourly, 100);
        assert_eq!(rate.project, 3500);
    }

    #[test]
    fn unknown_level_defaults_to_intermediate() {
        assert_eq!(RateCard::for_level("wizard"), RateCard::for_level("intermediate"));
        assert_eq!(RateCard::for_level(""), RateCard::for_level("intermediate"));
    }

    #[test]
    fn cheap_projects_recommend_hourly_framing() {
        let rate = RateCard::for_level("beginner");
        assert_eq!(rate.recommended_framing(), "starting with an hourly arrangement");
    }

    #[test]
    fn expensive_projects_recommend_project_framing() {
        let rate = RateCard::for_level("expert");
        assert_eq!(rate.recommended_framing(), "a project-based fee");
    }
}
