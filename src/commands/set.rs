use crate::api::{Profile, ProfileApi};
use crate::cli::SetArgs;
use crate::context::AppContext;
use crate::error::{AppError, AppResult};
use crate::names::normalize_name;
use crate::output::status_label;
use crate::sync::{ProfileReport, SyncOutcome};

pub async fn run(ctx: &AppContext, args: SetArgs) -> AppResult<()> {
    let client = ctx.client()?;
    let target = args.status.is_active();

    ctx.output.line(&format!("Looking for profile: {}", args.name));
    let profiles = client.list_profiles().await?;

    let Some(profile) = find_by_name(&profiles, &args.name) else {
        ctx.output.line("Available profiles:");
        ctx.output
            .lines(profiles.iter().map(|profile| format!("  - {}", profile.name)));
        return Err(AppError::NotFound(format!(
            "no profile named `{}`",
            args.name.trim()
        )));
    };

    ctx.output.line(&format!("Found profile: {}", profile.name));
    ctx.output.line(&format!(
        "Current status: {}",
        status_label(profile.active)
    ));
    ctx.output
        .line(&format!("Target status: {}", status_label(target)));

    let outcome = if profile.active == target {
        SyncOutcome::Unchanged
    } else {
        client.set_active(&profile.id, target).await?;
        if target {
            SyncOutcome::Activated
        } else {
            SyncOutcome::Deactivated
        }
    };

    let text = match outcome {
        SyncOutcome::Unchanged => format!(
            "Profile is already {}. No changes needed.",
            status_label(target).to_lowercase()
        ),
        _ => format!("✓ Successfully {outcome} profile '{}'", profile.name),
    };

    let report = ProfileReport {
        id: profile.id.clone(),
        name: profile.name.clone(),
        current: profile.active,
        target,
        outcome,
    };
    ctx.output.emit(&text, &report)
}

/// First profile whose normalized name equals the normalized query.
fn find_by_name<'a>(profiles: &'a [Profile], name: &str) -> Option<&'a Profile> {
    let needle = normalize_name(name);
    profiles
        .iter()
        .find(|profile| normalize_name(&profile.name) == needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ResourceId;

    fn profile(id: &str, name: &str) -> Profile {
        Profile {
            id: ResourceId::new(id),
            name: name.to_string(),
            active: false,
        }
    }

    #[test]
    fn finds_first_case_insensitive_match() {
        let profiles = vec![
            profile("1", "Old Employee"),
            profile("2", "Jane Smith"),
            profile("3", "JANE SMITH"),
        ];

        let found = find_by_name(&profiles, "  jane smith ").expect("match");
        assert_eq!(found.id.as_str(), "2");
    }

    #[test]
    fn missing_name_finds_nothing() {
        let profiles = vec![profile("1", "John Doe")];
        assert!(find_by_name(&profiles, "John").is_none());
    }
}
