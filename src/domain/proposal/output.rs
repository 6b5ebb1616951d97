//! Proposal generation output value object.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// The four generated text artifacts.
///
/// Produced by the template engine; callers may edit the text client-side
/// before saving, so the fields are plain strings with no further
/// structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalOutput {
    /// Multi-paragraph Upwork cover letter.
    pub upwork_free_proposal: String,

    /// Cold email with subject line.
    pub cold_email_pitch: String,

    /// One-sentence direct message.
    pub short_dm_pitch: String,

    /// Rate table and milestone breakdown.
    pub pricing_breakdown: String,
}

impl ProposalOutput {
    /// Validates the shape of a caller-supplied output.
    ///
    /// Generation meters quota against whatever the caller computed, so the
    /// only check is that all four artifacts are present and non-empty.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [
            ("upwork_free_proposal", &self.upwork_free_proposal),
            ("cold_email_pitch", &self.cold_email_pitch),
            ("short_dm_pitch", &self.short_dm_pitch),
            ("pricing_breakdown", &self.pricing_breakdown),
        ] {
            if value.is_empty() {
                return Err(ValidationError::empty_field(field));
            }
        }
        Ok(())
    }
}
