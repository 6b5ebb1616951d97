//! Entitlement command and query handlers.

mod admin_get_subscription_status;
mod get_profile;
mod get_subscription_status;
mod save_profile;
mod upgrade_to_premium;

pub use admin_get_subscription_status::{
    AdminSubscriptionStatusHandler, AdminSubscriptionStatusQuery,
};
pub use get_profile::{GetCallerProfileHandler, GetCallerProfileQuery};
pub use get_subscription_status::{SubscriptionStatusHandler, SubscriptionStatusQuery};
pub use save_profile::{SaveCallerProfileCommand, SaveCallerProfileHandler};
pub use upgrade_to_premium::{UpgradeToPremiumCommand, UpgradeToPremiumHandler};
