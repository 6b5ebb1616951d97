//! Generation quota configuration

use serde::Deserialize;

use crate::domain::entitlement::UserProfile;

/// Quota configuration
#[derive(Debug, Clone, Deserialize)]
pub struct QuotaConfig {
    /// Free generations granted to a fresh profile
    #[serde(default = "default_free_generation_allowance")]
    pub free_generation_allowance: u64,
}

impl Default for QuotaConfig {
    fn default() -> Self {
        Self {
            free_generation_allowance: default_free_generation_allowance(),
        }
    }
}

fn default_free_generation_allowance() -> u64 {
    UserProfile::DEFAULT_FREE_GENERATIONS
}
