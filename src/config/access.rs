//! Access control configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::foundation::UserId;

/// Access control configuration
///
/// Role assignment requires an existing admin, so the first admins come
/// from configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AccessConfig {
    /// Comma-separated principals seeded as admins at startup
    pub admins: Option<String>,
}

impl AccessConfig {
    /// Parsed admin principals.
    pub fn admin_ids(&self) -> Vec<UserId> {
        self.admins
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .filter_map(|entry| UserId::new(entry).ok())
            .collect()
    }

    /// Validate access configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(admins) = &self.admins {
            if admins.split(',').any(|entry| entry.trim().is_empty()) {
                return Err(ValidationError::EmptyAdminEntry);
            }
        }
        Ok(())
    }
}
