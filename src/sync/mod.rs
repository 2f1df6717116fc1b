//! One reconciliation pass: remote profiles against the local name list.

pub mod reconcile;
pub mod summary;

pub use reconcile::{ProfileReport, reconcile, target_state};
pub use summary::{SyncOutcome, SyncSummary};
