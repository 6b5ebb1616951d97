//! The four artifact templates.

use super::RateCard;
use crate::domain::proposal::{ProposalInput, ProposalOutput};

/// Job-description snippet lengths, in characters, per artifact.
const PROPOSAL_SNIPPET_LEN: usize = 200;
const EMAIL_SNIPPET_LEN: usize = 150;
const DM_SNIPPET_LEN: usize = 80;

/// Renders all four artifacts from one input.
///
/// Total and deterministic: identical input yields byte-identical output.
pub fn render(input: &ProposalInput) -> ProposalOutput {
    ProposalOutput {
        upwork_free_proposal: upwork_proposal(input),
        cold_email_pitch: cold_email(input),
        short_dm_pitch: short_dm(input),
        pricing_breakdown: pricing_breakdown(input),
    }
}

/// Experience-tier phrase used in the Upwork proposal.
fn experience_phrase(level: &str) -> &'static str {
    match level {
        "beginner" => "emerging professional",
        "intermediate" => "experienced specialist",
        "expert" => "seasoned expert",
        _ => "professional",
    }
}

/// First `len` characters of `text`. The ellipsis is appended by the
/// templates unconditionally, matching output produced by earlier clients.
fn snippet(text: &str, len: usize) -> String {
    text.chars().take(len).collect()
}

fn upwork_proposal(input: &ProposalInput) -> String {
    let portfolio = if input.has_portfolio_link() {
        format!("You can view examples of my work at {}.", input.portfolio_link)
    } else {
        "I would be happy to share relevant work samples upon request.".to_string()
    };

    format!(
        "Dear Hiring Manager,\n\n\
         I am excited to submit my proposal for your project. After carefully reviewing your \
         requirements, I believe I am an excellent fit for this opportunity.\n\n\
         **Why I'm the Right Choice:**\n\n\
         With my expertise in {skills}, I am confident I can deliver exceptional results for \
         your project. As an {experience}, I have successfully completed similar projects and \
         understand the nuances required to meet your specific needs.\n\n\
         **My Approach:**\n\n\
         {job}... I will approach this project with attention to detail, clear communication, \
         and a commitment to exceeding your expectations.\n\n\
         **Relevant Experience:**\n\n\
         My background in {skills} has equipped me with the technical skills and \
         problem-solving abilities necessary to tackle the challenges outlined in your job \
         description. {portfolio}\n\n\
         I am available to start immediately and look forward to discussing how I can \
         contribute to your project's success.\n\n\
         Best regards",
        skills = input.skills,
        experience = experience_phrase(&input.experience_level),
        job = snippet(&input.client_job_description, PROPOSAL_SNIPPET_LEN),
        portfolio = portfolio,
    )
}

fn cold_email(input: &ProposalInput) -> String {
    let portfolio = if input.has_portfolio_link() {
        format!("You can see examples of my work here: {}", input.portfolio_link)
    } else {
        "I'd be happy to share relevant case studies and examples.".to_string()
    };

    format!(
        "Subject: Expert {first_skill} Services for Your Business\n\n\
         Hi [Name],\n\n\
         I came across your company and was impressed by [specific detail about their \
         business]. I specialize in {skills} and help businesses like yours achieve their \
         goals through high-quality deliverables.\n\n\
         I noticed you might benefit from expertise in areas related to: {job}...\n\n\
         With my background as an {level} professional, I've helped clients overcome similar \
         challenges and would love to explore how I can add value to your team.\n\n\
         {portfolio}\n\n\
         Would you be open to a brief call to discuss potential collaboration?\n\n\
         Best regards,\n\
         [Your Name]",
        first_skill = input.first_skill(),
        skills = input.skills,
        job = snippet(&input.client_job_description, EMAIL_SNIPPET_LEN),
        level = input.experience_level,
        portfolio = portfolio,
    )
}

fn short_dm(input: &ProposalInput) -> String {
    let portfolio = if input.has_portfolio_link() {
        format!("Check out my work: {}", input.portfolio_link)
    } else {
        "Happy to share my portfolio!".to_string()
    };

    format!(
        "Hi! I saw your post about {job}... I specialize in {first_skill} and would love to \
         help. {portfolio} Interested in chatting?",
        job = snippet(&input.client_job_description, DM_SNIPPET_LEN),
        first_skill = input.first_skill(),
        portfolio = portfolio,
    )
}

fn pricing_breakdown(input: &ProposalInput) -> String {
    let rate = RateCard::for_level(&input.experience_level);

    format!(
        "**Pricing Breakdown Suggestion**\n\n\
         Based on your {level} experience level and skills in {skills}, here's a recommended \
         pricing structure:\n\n\
         **Hourly Rate:** ${hourly}/hour\n\
         - Suitable for ongoing work or projects with evolving scope\n\
         - Provides flexibility for both parties\n\n\
         **Project-Based Pricing:** Starting at ${project}\n\
         - Fixed scope projects\n\
         - Includes revisions and final delivery\n\
         - Payment milestones: 30% upfront, 40% mid-project, 30% on completion\n\n\
         **Value-Based Pricing:** Custom quote\n\
         - For high-impact projects where ROI is measurable\n\
         - Pricing tied to business outcomes\n\n\
         **Recommended Approach:**\n\
         For the project described, I suggest {framing} to ensure clear expectations and \
         deliverables. We can discuss the best structure based on your specific needs and \
         timeline.\n\n\
         Note: Rates are competitive for {level}-level professionals in the {first_skill} \
         space.",
        level = input.experience_level,
        skills = input.skills,
        hourly = rate.hourly,
        project = rate.project,
        framing = rate.recommended_framing(),
        first_skill = input.first_skill(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn beginner_input() -> ProposalInput {
        ProposalInput {
            client_job_description: "Build a landing page for our product launch".to_string(),
            skills: "React, Figma".to_string(),
            experience_level: "beginner".to_string(),
            portfolio_link: String::new(),
        }
    }

    #[test]
    fn render_is_deterministic() {
        let input = beginner_input();
        assert_eq!(render(&input), render(&input));
    }

    #[test]
    fn beginner_pricing_quotes_beginner_rates() {
        let output = render(&beginner_input());

        assert!(output.pricing_breakdown.contains("**Hourly Rate:** $25/hour"));
        assert!(output
            .pricing_breakdown
            .contains("**Project-Based Pricing:** Starting at $500"));
    }

    #[test]
    fn cheap_project_recommends_hourly_arrangement() {
        let output = render(&beginner_input());
        assert!(output
            .pricing_breakdown
            .contains("I suggest starting with an hourly arrangement"));
    }

    #[test]
    fn expert_pricing_recommends_project_fee() {
        let mut input = beginner_input();
        input.experience_level = "expert".to_string();

        let output = render(&input);
        assert!(output.pricing_breakdown.contains("**Hourly Rate:** $100/hour"));
        assert!(output.pricing_breakdown.contains("I suggest a project-based fee"));
    }

    #[test]
    fn missing_portfolio_uses_fallback_sentences() {
        let output = render(&beginner_input());

        assert!(output
            .upwork_free_proposal
            .contains("I would be happy to share relevant work samples upon request."));
        assert!(output
            .cold_email_pitch
            .contains("I'd be happy to share relevant case studies and examples."));
        assert!(output.short_dm_pitch.contains("Happy to share my portfolio!"));
    }

    #[test]
    fn supplied_portfolio_is_linked_in_every_artifact() {
        let mut input = beginner_input();
        input.portfolio_link = "https://me.dev".to_string();

        let output = render(&input);
        assert!(output
            .upwork_free_proposal
            .contains("You can view examples of my work at https://me.dev."));
        assert!(output
            .cold_email_pitch
            .contains("You can see examples of my work here: https://me.dev"));
        assert!(output.short_dm_pitch.contains("Check out my work: https://me.dev"));
    }

    #[test]
    fn email_subject_uses_first_skill() {
        let output = render(&beginner_input());
        assert!(output
            .cold_email_pitch
            .starts_with("Subject: Expert React Services for Your Business"));
    }

    #[test]
    fn experience_phrase_covers_all_tiers() {
        assert_eq!(experience_phrase("beginner"), "emerging professional");
        assert_eq!(experience_phrase("intermediate"), "experienced specialist");
        assert_eq!(experience_phrase("expert"), "seasoned expert");
        assert_eq!(experience_phrase("something else"), "professional");
    }

    #[test]
    fn long_description_is_truncated_per_artifact() {
        let mut input = beginner_input();
        input.client_job_description = "x".repeat(500);

        let output = render(&input);
        assert!(output.upwork_free_proposal.contains(&format!("{}...", "x".repeat(200))));
        assert!(!output.upwork_free_proposal.contains(&"x".repeat(201)));
        assert!(output.cold_email_pitch.contains(&format!("{}...", "x".repeat(150))));
        assert!(!output.cold_email_pitch.contains(&"x".repeat(151)));
        assert!(output.short_dm_pitch.contains(&format!("{}...", "x".repeat(80))));
        assert!(!output.short_dm_pitch.contains(&"x".repeat(81)));
    }

    #[test]
    fn empty_input_still_renders_all_artifacts() {
        let output = render(&ProposalInput::default());

        assert!(!output.upwork_free_proposal.is_empty());
        assert!(!output.cold_email_pitch.is_empty());
        assert!(!output.short_dm_pitch.is_empty());
        assert!(!output.pricing_breakdown.is_empty());
        // Unknown level falls back to intermediate rates.
        assert!(output.pricing_breakdown.contains("$50/hour"));
    }

    proptest! {
        #[test]
        fn render_never_panics_and_stays_deterministic(
            job in ".{0,400}",
            skills in ".{0,100}",
            level in ".{0,20}",
            link in ".{0,60}",
        ) {
            let input = ProposalInput {
                client_job_description: job,
                skills,
                experience_level: level,
                portfolio_link: link,
            };
            let first = render(&input);
            let second = render(&input);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn snippet_never_exceeds_requested_length(text in ".{0,300}", len in 0usize..250) {
            prop_assert!(snippet(&text, len).chars().count() <= len);
        }
    }
}
