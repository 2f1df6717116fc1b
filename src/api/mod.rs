pub mod client;
pub mod match_logs;
pub mod models;
pub mod profiles;

pub use client::ProfileClient;
pub use models::{MatchLog, MatchLogFilter, Profile, ResourceId};

use crate::error::AppResult;

/// Remote operations the reconciler depends on.
#[allow(async_fn_in_trait)]
pub trait ProfileApi {
    async fn list_profiles(&self) -> AppResult<Vec<Profile>>;
    async fn set_active(&self, id: &ResourceId, active: bool) -> AppResult<()>;
}
