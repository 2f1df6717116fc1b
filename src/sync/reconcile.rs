use serde::Serialize;
use tracing::{debug, warn};

use crate::api::{Profile, ProfileApi, ResourceId};
use crate::names::NameSet;

use super::summary::{SyncOutcome, SyncSummary};

#[derive(Debug, Clone, Serialize)]
pub struct ProfileReport {
    pub id: ResourceId,
    pub name: String,
    pub current: bool,
    pub target: bool,
    #[serde(flatten)]
    pub outcome: SyncOutcome,
}

/// Active when the profile's normalized name is in the list.
pub fn target_state(profile: &Profile, names: &NameSet) -> bool {
    names.contains(&profile.name)
}

/// Applies one profile's target state, issuing a call only when it differs.
pub async fn apply<A: ProfileApi>(api: &A, profile: &Profile, target: bool) -> ProfileReport {
    let outcome = if profile.active == target {
        SyncOutcome::Unchanged
    } else {
        match api.set_active(&profile.id, target).await {
            Ok(()) if target => SyncOutcome::Activated,
            Ok(()) => SyncOutcome::Deactivated,
            Err(err) => {
                warn!(id = %profile.id, name = %profile.name, error = %err, "profile update failed");
                SyncOutcome::Error {
                    kind: err.kind(),
                    message: err.to_string(),
                }
            }
        }
    };

    ProfileReport {
        id: profile.id.clone(),
        name: profile.name.clone(),
        current: profile.active,
        target,
        outcome,
    }
}

/// Walks `profiles` in listing order. Per-profile failures are recorded and
/// never stop the pass; `on_report` sees each result as soon as it is known.
pub async fn reconcile<A, F>(
    api: &A,
    names: &NameSet,
    profiles: &[Profile],
    mut on_report: F,
) -> (Vec<ProfileReport>, SyncSummary)
where
    A: ProfileApi,
    F: FnMut(&ProfileReport),
{
    let mut summary = SyncSummary::default();
    let mut reports = Vec::with_capacity(profiles.len());

    for profile in profiles {
        let target = target_state(profile, names);
        debug!(id = %profile.id, current = profile.active, target, "reconciling profile");

        let report = apply(api, profile, target).await;
        summary.record(&report.outcome);
        on_report(&report);
        reports.push(report);
    }

    (reports, summary)
}
