//! Duration and row formatting for tables and export files.
//!
//! All durations are shown as `HH:MM`: hours zero-padded to at least two
//! digits, minutes always two digits, seconds truncated, negatives clamped to
//! `00:00`. Percentages carry one decimal.
//!
//! ```rust
//! use worktally::libs::formatter::{format_duration, format_seconds};
//! use chrono::Duration;
//!
//! assert_eq!(format_duration(&Duration::minutes(90)), "01:30");
//! assert_eq!(format_seconds(11_700), "03:15");
//! ```

use crate::libs::report::GroupView;
use chrono::Duration;
use serde::{Deserialize, Serialize};

/// A group view flattened to display strings, one row per group.
///
/// Used by the console tables and the CSV export so both show the same
/// columns in the same format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormattedGroup {
    pub key: String,
    pub label: String,
    pub records: usize,
    pub open: usize,
    pub total_work: String,
    pub wait_before_resource: String,
    pub inter_operation: String,
    pub since_order_placed: String,
    pub until_due: String,
    pub total_cycle: String,
    pub operators: usize,
    pub tasks: usize,
    pub orders: usize,
    pub modules: usize,
    pub time_per_module: String,
    pub last_event: String,
}

impl From<&GroupView> for FormattedGroup {
    fn from(view: &GroupView) -> Self {
        FormattedGroup {
            key: view.key.clone(),
            label: view.display_label.clone(),
            records: view.record_count,
            open: view.open_count,
            total_work: format_seconds(view.aggregate.total_work),
            wait_before_resource: format_seconds(view.aggregate.wait_before_resource),
            inter_operation: format_seconds(view.aggregate.inter_operation),
            since_order_placed: format_seconds(view.aggregate.since_order_placed),
            until_due: format_seconds(view.aggregate.until_due),
            total_cycle: format_seconds(view.aggregate.total_cycle),
            operators: view.unique.operators,
            tasks: view.unique.tasks,
            orders: view.unique.orders,
            modules: view.unique.modules,
            time_per_module: format_seconds(view.time_per_module.round() as u64),
            last_event: view.last_event.clone().unwrap_or_else(|| "-".to_string()),
        }
    }
}

/// Formats a chrono::Duration into a standardized "HH:MM" string.
pub fn format_duration(duration: &Duration) -> String {
    let hours = duration.num_hours();
    let mins = duration.num_minutes() % 60;

    format!("{:02}:{:02}", hours.max(0), mins.max(0))
}

/// Formats a number of seconds as "HH:MM".
pub fn format_seconds(seconds: u64) -> String {
    let seconds = i64::try_from(seconds).unwrap_or(i64::MAX);
    format_duration(&Duration::seconds(seconds.min(i64::MAX / 1000)))
}

pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}
