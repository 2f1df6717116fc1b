use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SyncOutcome {
    Activated,
    Deactivated,
    Unchanged,
    Error { kind: &'static str, message: String },
}

impl fmt::Display for SyncOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncOutcome::Activated => f.write_str("activated"),
            SyncOutcome::Deactivated => f.write_str("deactivated"),
            SyncOutcome::Unchanged => f.write_str("unchanged"),
            SyncOutcome::Error { kind, .. } => write!(f, "error ({kind})"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SyncSummary {
    pub activated: usize,
    pub deactivated: usize,
    pub unchanged: usize,
    pub errors: usize,
    pub total: usize,
}

impl SyncSummary {
    pub fn record(&mut self, outcome: &SyncOutcome) {
        match outcome {
            SyncOutcome::Activated => self.activated += 1,
            SyncOutcome::Deactivated => self.deactivated += 1,
            SyncOutcome::Unchanged => self.unchanged += 1,
            SyncOutcome::Error { .. } => self.errors += 1,
        }
        self.total += 1;
    }

    pub fn report_lines(&self) -> Vec<String> {
        vec![
            "=== Summary ===".to_string(),
            format!("Profiles activated: {}", self.activated),
            format!("Profiles deactivated: {}", self.deactivated),
            format!("Profiles skipped (already correct): {}", self.unchanged),
            format!("Errors: {}", self.errors),
            format!("Total processed: {}", self.total),
        ]
    }
}
