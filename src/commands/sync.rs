use std::path::PathBuf;

use serde::Serialize;

use crate::api::ProfileApi;
use crate::cli::SyncArgs;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::names::{self, NameSet};
use crate::output::status_label;
use crate::sync::{self, ProfileReport, SyncOutcome, SyncSummary};

#[derive(Debug, Serialize)]
struct SyncReport<'a> {
    names_file: PathBuf,
    names: usize,
    profiles: &'a [ProfileReport],
    summary: SyncSummary,
}

pub async fn run(ctx: &AppContext, args: SyncArgs) -> AppResult<()> {
    let client = ctx.client()?;
    let path = args.file.unwrap_or_else(|| ctx.settings.names_file());

    ctx.output.line("=== Profile Status Sync ===");
    let names = names::load_names(&path)?;
    ctx.output.line(&format!(
        "Read {} names from {}",
        names.len(),
        path.display()
    ));
    ctx.output
        .line(&format!("Sample names: {}", format_sample(&names, 3)));

    let profiles = client.list_profiles().await?;
    if profiles.is_empty() {
        ctx.output.line("No profiles found in account.");
    } else {
        ctx.output
            .line(&format!("Found {} profiles in account", profiles.len()));
    }

    let (reports, summary) = sync::reconcile(&client, &names, &profiles, |report| {
        ctx.output.lines(progress_lines(report));
    })
    .await;

    ctx.output.line("");
    ctx.output.lines(summary.report_lines());
    ctx.output.json(&SyncReport {
        names_file: path,
        names: names.len(),
        profiles: &reports,
        summary,
    })
}

fn progress_lines(report: &ProfileReport) -> Vec<String> {
    let action = match &report.outcome {
        SyncOutcome::Unchanged => "  ✓ Already in correct state - skipping".to_string(),
        SyncOutcome::Activated | SyncOutcome::Deactivated => {
            format!("  ✓ Successfully {}", report.outcome)
        }
        SyncOutcome::Error { kind, message } => {
            format!("  ✗ Failed to update [{kind}]: {message}")
        }
    };

    vec![
        String::new(),
        format!("Processing: {}", report.name),
        format!("  Current status: {}", status_label(report.current)),
        format!("  Should be: {}", status_label(report.target)),
        action,
    ]
}

fn format_sample(names: &NameSet, limit: usize) -> String {
    let sample = names.sample(limit).join(", ");
    if names.len() > limit {
        format!("{sample}, ...")
    } else {
        sample
    }
}
