use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use serde::Serialize;

use crate::api::{MatchLog, MatchLogFilter};
use crate::cli::{ExportArgs, LogsCommand};
use crate::context::AppContext;
use crate::error::{AppError, AppResult};
use crate::export;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
const SUMMARY_SAMPLE: u32 = 10;
const SUMMARY_SHOWN: usize = 5;
const SUMMARY_DAYS: u32 = 7;

#[derive(Debug, Serialize)]
struct ExportResult {
    path: String,
    exported: usize,
    start_date: Option<String>,
    end_date: Option<String>,
}

#[derive(Debug, Serialize)]
struct LogsSummary {
    recent_days: u32,
    recent_count: usize,
    sample: Vec<MatchLog>,
}

pub async fn run(ctx: &AppContext, command: LogsCommand) -> AppResult<()> {
    match command {
        LogsCommand::Export(args) => run_export(ctx, args).await,
        LogsCommand::Summary => run_summary(ctx).await,
    }
}

async fn run_export(ctx: &AppContext, args: ExportArgs) -> AppResult<()> {
    let client = ctx.client()?;
    let now = Local::now().naive_local();
    let mut filter = export_window(&args, now)?;
    filter.profile_id = args.profile_id.clone();
    filter.device_id = args.device_id.clone();

    ctx.output.line(&format!(
        "Exporting match logs from {} to {}...",
        filter.start_date.as_deref().unwrap_or("beginning"),
        filter.end_date.as_deref().unwrap_or("now")
    ));

    let logs = client.list_all_match_logs(&filter).await?;
    if logs.is_empty() {
        return Err(AppError::NotFound(
            "no match logs found to export".to_string(),
        ));
    }

    let exported = export::export_match_logs(&args.output, &logs)?;
    let result = ExportResult {
        path: args.output.display().to_string(),
        exported,
        start_date: filter.start_date,
        end_date: filter.end_date,
    };
    let text = format!(
        "Exported {} match logs to '{}'",
        result.exported, result.path
    );
    ctx.output.emit(&text, &result)
}

async fn run_summary(ctx: &AppContext) -> AppResult<()> {
    let client = ctx.client()?;
    let sample = client
        .list_match_logs(SUMMARY_SAMPLE, 0, &MatchLogFilter::default())
        .await?;

    let recent_count = if sample.is_empty() {
        0
    } else {
        let now = Local::now().naive_local();
        let filter = trailing_days(SUMMARY_DAYS, now)?;
        client.list_all_match_logs(&filter).await?.len()
    };

    let summary = LogsSummary {
        recent_days: SUMMARY_DAYS,
        recent_count,
        sample: sample.into_iter().take(SUMMARY_SHOWN).collect(),
    };

    ctx.output.line(&format!(
        "Recent logs (last {} days): {}",
        summary.recent_days, summary.recent_count
    ));
    if summary.sample.is_empty() {
        ctx.output.line("No match logs available.");
    } else {
        ctx.output.line("");
        ctx.output.line("Sample logs:");
        ctx.output.lines(
            summary
                .sample
                .iter()
                .enumerate()
                .map(|(index, log)| format!("  {}. {}", index + 1, describe(log))),
        );
    }

    ctx.output.json(&summary)
}

/// Date filters for an export. `--all` beats explicit dates, which beat `--days`.
fn export_window(args: &ExportArgs, now: NaiveDateTime) -> AppResult<MatchLogFilter> {
    if args.all {
        return Ok(MatchLogFilter::default());
    }

    if args.start_date.is_some() || args.end_date.is_some() {
        return Ok(MatchLogFilter {
            start_date: args
                .start_date
                .as_deref()
                .map(|raw| parse_date("start-date", raw))
                .transpose()?,
            end_date: args
                .end_date
                .as_deref()
                .map(|raw| parse_date("end-date", raw))
                .transpose()?,
            ..MatchLogFilter::default()
        });
    }

    trailing_days(args.days, now)
}

fn trailing_days(days: u32, now: NaiveDateTime) -> AppResult<MatchLogFilter> {
    let start = TimeDelta::try_days(i64::from(days))
        .and_then(|span| now.checked_sub_signed(span))
        .ok_or_else(|| AppError::InvalidInput(format!("--days is out of range: {days}")))?;

    Ok(MatchLogFilter {
        start_date: Some(start.format(TIMESTAMP_FORMAT).to_string()),
        end_date: Some(now.format(TIMESTAMP_FORMAT).to_string()),
        ..MatchLogFilter::default()
    })
}

fn parse_date(flag: &str, raw: &str) -> AppResult<String> {
    let date = NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|_| {
        AppError::InvalidInput(format!("--{flag} must be in YYYY-MM-DD format, got `{raw}`"))
    })?;
    Ok(date
        .and_time(NaiveTime::MIN)
        .format(TIMESTAMP_FORMAT)
        .to_string())
}

fn describe(log: &MatchLog) -> String {
    let matched_at = log.matched_at.as_deref().unwrap_or("Unknown");
    let profile = log.profile_name.as_deref().unwrap_or("Unknown");
    let device = log.device_name.as_deref().unwrap_or("Unknown");
    let confidence = log.confidence.unwrap_or_default() * 100.0;
    format!("{matched_at} - {profile} ({confidence:.2}% confidence) - {device}")
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn args() -> ExportArgs {
        ExportArgs {
            output: PathBuf::from("match_logs.csv"),
            days: 30,
            start_date: None,
            end_date: None,
            profile_id: None,
            device_id: None,
            all: false,
        }
    }

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 19)
            .and_then(|date| date.and_hms_opt(12, 0, 0))
            .expect("valid timestamp")
    }

    #[test]
    fn defaults_to_trailing_days() {
        let filter = export_window(&args(), now()).expect("window");
        assert_eq!(filter.start_date.as_deref(), Some("2026-09-19T12:00:00"));
        assert_eq!(filter.end_date.as_deref(), Some("2026-10-19T12:00:00"));
    }

    #[test]
    fn out_of_range_days_is_invalid_input() {
        let mut args = args();
        args.days = u32::MAX;
        let err = export_window(&args, now()).expect_err("window should not fit");
        match err {
            AppError::InvalidInput(message) => assert!(message.contains("--days")),
            other => panic!("expected invalid input, got {other:?}"),
        }
    }

    #[test]
    fn explicit_dates_become_midnight_timestamps() {
        let mut args = args();
        args.start_date = Some("2026-01-05".to_string());
        let filter = export_window(&args, now()).expect("window");
        assert_eq!(filter.start_date.as_deref(), Some("2026-01-05T00:00:00"));
        assert!(filter.end_date.is_none());
    }

    #[test]
    fn all_drops_date_filters() {
        let mut args = args();
        args.all = true;
        assert_eq!(
            export_window(&args, now()).expect("window"),
            MatchLogFilter::default()
        );
    }

    #[test]
    fn rejects_malformed_dates() {
        let mut args = args();
        args.end_date = Some("05/01/2026".to_string());
        let err = export_window(&args, now()).expect_err("bad date");
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[test]
    fn describes_log_with_percentage() {
        let log = MatchLog {
            profile_name: Some("Jane Smith".to_string()),
            confidence: Some(0.9312),
            device_name: Some("Front Door".to_string()),
            matched_at: Some("2026-10-18T09:00:00Z".to_string()),
            ..MatchLog::default()
        };
        assert_eq!(
            describe(&log),
            "2026-10-18T09:00:00Z - Jane Smith (93.12% confidence) - Front Door"
        );
    }
}
