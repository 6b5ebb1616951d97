//! Proposal generation input value object.

use serde::{Deserialize, Serialize};

/// The four-field form a caller fills in before generating.
///
/// Immutable once attached to a saved proposal. `experience_level` carries
/// one of `beginner`/`intermediate`/`expert`; unknown values are not an
/// error, the template engine degrades them to defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalInput {
    /// The client's job description or project requirements, free text.
    pub client_job_description: String,

    /// Comma-separated skills, e.g. "React, Node.js, UI/UX Design".
    pub skills: String,

    /// Experience tier as entered: beginner, intermediate, or expert.
    pub experience_level: String,

    /// Optional portfolio URL; empty string means none supplied.
    pub portfolio_link: String,
}

impl ProposalInput {
    /// The first comma-separated skill token, trimmed.
    ///
    /// Empty when `skills` is empty.
    pub fn first_skill(&self) -> &str {
        self.skills.split(',').next().unwrap_or_default().trim()
    }

    /// Whether a portfolio link was supplied.
    pub fn has_portfolio_link(&self) -> bool {
        !self.portfolio_link.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_skill_takes_leading_token() {
        let input = ProposalInput {
            skills: "React, Figma".to_string(),
            ..Default::default()
        };
        assert_eq!(input.first_skill(), "React");
    }

    #[test]
    fn first_skill_trims_whitespace() {
        let input = ProposalInput {
            skills: "  Content Writing , SEO".to_string(),
            ..Default::default()
        };
        assert_eq!(input.first_skill(), "Content Writing");
    }

    #[test]
    fn first_skill_of_empty_skills_is_empty() {
        let input = ProposalInput::default();
        assert_eq!(input.first_skill(), "");
    }

    #[test]
    fn empty_portfolio_link_counts_as_absent() {
        let input = ProposalInput::default();
        assert!(!input.has_portfolio_link());
    }

    #[test]
    fn non_empty_portfolio_link_counts_as_present() {
        let input = ProposalInput {
            portfolio_link: "https://example.com".to_string(),
            ..Default::default()
        };
        assert!(input.has_portfolio_link());
    }
}
