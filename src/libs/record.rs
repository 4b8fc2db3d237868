//! Work-event records as delivered by the data-fetch collaborator.
//!
//! A [`WorkEventRecord`] is one timed work event: who worked, on which task,
//! for which order and module, and for how long. Records arrive as loosely
//! typed JSON, so every field is deserialized leniently:
//!
//! - Missing fields and `null` become `None` / `0` / `false`
//! - Numbers sent as strings (`"600"`) are accepted
//! - Non-numeric, non-finite and negative time values are coerced to `0`
//! - Identifiers sent as numbers (`"taskCode": 3`) are stringified
//!
//! Nothing in this module rejects an individual field; only a snapshot that is
//! not JSON at all, or not an array of records, is reported as an error.
//!
//! ## Time units
//!
//! Durations are expected in seconds. Upstream feeds that send milliseconds
//! are converted with [`normalize_units`] using an explicit [`DurationUnit`].
//! [`DurationUnit::Auto`] keeps the magnitude guess (values above `1e9` are
//! treated as milliseconds) for feeds whose unit is unknown.

use crate::libs::error::{Result, WorktallyError};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Raw values above this are taken as milliseconds by [`DurationUnit::Auto`].
const AUTO_MILLIS_THRESHOLD: u64 = 1_000_000_000;

/// Envelope keys under which REST responses commonly wrap the record array.
const ENVELOPE_KEYS: [&str; 2] = ["data", "records"];

/// One timed work event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkEventRecord {
    /// Calendar date of the event, the source of truth for day bucketing.
    #[serde(default, deserialize_with = "lenient_string")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub operator_code: Option<String>,
    /// Free-text operator name, may hold several tokens ("Juan Perez", "Juan/Otro").
    #[serde(default, deserialize_with = "lenient_string")]
    pub operator_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub task_code: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub order_number: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub module_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub start_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub start_time: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub end_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub end_time: Option<String>,
    /// Authoritative work time in seconds.
    #[serde(default, alias = "duration", deserialize_with = "lenient_seconds")]
    pub duration_seconds: u64,
    #[serde(default, deserialize_with = "lenient_seconds")]
    pub wait_before_resource_seconds: u64,
    #[serde(default, deserialize_with = "lenient_seconds")]
    pub inter_operation_seconds: u64,
    #[serde(default, deserialize_with = "lenient_seconds")]
    pub since_order_placed_seconds: u64,
    #[serde(default, deserialize_with = "lenient_seconds")]
    pub until_due_seconds: u64,
    #[serde(default, deserialize_with = "lenient_seconds")]
    pub total_cycle_seconds: u64,
    /// Explicit marker that the event has not been closed yet.
    #[serde(default, deserialize_with = "lenient_flag")]
    pub open_flag: bool,
}

impl WorkEventRecord {
    /// The calendar day of the event, `None` when the date is unparseable.
    pub fn day(&self) -> Option<NaiveDate> {
        self.date.as_deref().and_then(parse_date)
    }

    pub fn started_at(&self) -> Option<NaiveDateTime> {
        combine(self.start_date.as_deref().or(self.date.as_deref()), self.start_time.as_deref())
    }

    pub fn ended_at(&self) -> Option<NaiveDateTime> {
        combine(self.end_date.as_deref().or(self.date.as_deref()), self.end_time.as_deref())
    }

    /// The most precise moment known for the event: end, then start, then the
    /// start of its day. Unparseable values yield `None`, which callers treat
    /// as "earlier than everything".
    pub fn event_timestamp(&self) -> Option<NaiveDateTime> {
        self.ended_at()
            .or_else(|| self.started_at())
            .or_else(|| self.day().and_then(|day| day.and_hms_opt(0, 0, 0)))
    }

    /// An event is open when flagged so, or when it carries no end at all.
    pub fn is_open(&self) -> bool {
        self.open_flag || (is_blank(self.end_date.as_deref()) && is_blank(self.end_time.as_deref()))
    }

    /// Rescales every time component from `unit` into seconds.
    pub fn with_unit(self, unit: DurationUnit) -> Self {
        Self {
            duration_seconds: unit.to_seconds(self.duration_seconds),
            wait_before_resource_seconds: unit.to_seconds(self.wait_before_resource_seconds),
            inter_operation_seconds: unit.to_seconds(self.inter_operation_seconds),
            since_order_placed_seconds: unit.to_seconds(self.since_order_placed_seconds),
            until_due_seconds: unit.to_seconds(self.until_due_seconds),
            total_cycle_seconds: unit.to_seconds(self.total_cycle_seconds),
            ..self
        }
    }
}

/// Unit in which the upstream feed expresses time values.
#[derive(clap::ValueEnum, Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DurationUnit {
    #[default]
    Seconds,
    Milliseconds,
    /// Guess per value: anything above `1e9` is taken as milliseconds.
    Auto,
}

impl DurationUnit {
    pub fn to_seconds(self, raw: u64) -> u64 {
        match self {
            DurationUnit::Seconds => raw,
            DurationUnit::Milliseconds => millis_to_seconds(raw),
            DurationUnit::Auto if raw > AUTO_MILLIS_THRESHOLD => millis_to_seconds(raw),
            DurationUnit::Auto => raw,
        }
    }
}

fn millis_to_seconds(raw: u64) -> u64 {
    raw.saturating_add(500) / 1000
}

/// Converts every record of a snapshot into seconds.
pub fn normalize_units(records: Vec<WorkEventRecord>, unit: DurationUnit) -> Vec<WorkEventRecord> {
    if unit == DurationUnit::Seconds {
        return records;
    }
    records.into_iter().map(|record| record.with_unit(unit)).collect()
}

/// Parses a record snapshot from a JSON string.
///
/// Accepts a bare array or an object wrapping the array under `data` or
/// `records`. Entries that are not JSON objects are skipped with a warning.
pub fn parse_records(json: &str) -> Result<Vec<WorkEventRecord>> {
    let value: Value = serde_json::from_str(json)?;
    records_from_value(value)
}

/// Reads and parses a record snapshot from a JSON file.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<WorkEventRecord>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WorktallyError::RecordsRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_records(&content)
}

/// Converts an already-decoded JSON document into records.
pub fn records_from_value(value: Value) -> Result<Vec<WorkEventRecord>> {
    let items = envelope_items(value)?;
    let total = items.len();
    let records: Vec<WorkEventRecord> = items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| {
            if !item.is_object() {
                tracing::warn!(index, kind = describe(&item), "skipping record entry that is not an object");
                return None;
            }
            match serde_json::from_value::<WorkEventRecord>(item) {
                Ok(record) => Some(record),
                Err(error) => {
                    tracing::warn!(index, %error, "skipping undecodable record entry");
                    None
                }
            }
        })
        .collect();

    tracing::debug!(total, kept = records.len(), "parsed record snapshot");
    Ok(records)
}

/// The entries of a bare array, or of the array under `data` / `records`.
pub(crate) fn envelope_items(value: Value) -> Result<Vec<Value>> {
    match value {
        Value::Array(items) => Ok(items),
        Value::Object(mut map) => ENVELOPE_KEYS
            .iter()
            .find_map(|key| match map.remove(*key) {
                Some(Value::Array(items)) => Some(items),
                _ => None,
            })
            .ok_or_else(|| WorktallyError::UnexpectedShape("an object without a data/records array".to_string())),
        other => Err(WorktallyError::UnexpectedShape(describe(&other).to_string())),
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// ---------------------------
// Lenient field decoding
// ---------------------------

fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_to_string))
}

fn lenient_seconds<'de, D>(deserializer: D) -> std::result::Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map_or(0, coerce_seconds))
}

fn lenient_flag<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Bool(flag)) => flag,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
        Some(Value::String(s)) => matches!(
            s.trim().to_lowercase().as_str(),
            "true" | "1" | "yes" | "y" | "s" | "si" | "sí" | "open"
        ),
        _ => false,
    })
}

/// Identifiers may arrive as strings or numbers; anything else is absent.
pub(crate) fn value_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Coerces a JSON value to a whole, non-negative number of seconds.
pub(crate) fn coerce_seconds(value: &Value) -> u64 {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match number {
        Some(n) if n.is_finite() && n > 0.0 => n.round() as u64,
        _ => 0,
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |s| s.trim().is_empty())
}

// ---------------------------
// Date and time parsing
// ---------------------------

/// Parses `YYYY-MM-DD`, an ISO timestamp, or `DD/MM/YYYY`.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| parse_datetime(raw).map(|dt| dt.date()))
        .or_else(|| NaiveDate::parse_from_str(raw, "%d/%m/%Y").ok())
}

/// Parses `HH:MM`, `HH:MM:SS` (optionally fractional) or the time part of an
/// ISO timestamp.
pub fn parse_time(raw: &str) -> Option<NaiveTime> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M:%S%.f")
        .ok()
        .or_else(|| NaiveTime::parse_from_str(raw, "%H:%M").ok())
        .or_else(|| parse_datetime(raw).map(|dt| dt.time()))
}

/// Parses ISO-like timestamps with `T` or space separators, with or without
/// seconds, and RFC 3339 timestamps carrying an offset (kept in local time).
pub fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    const FORMATS: [&str; 4] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"];

    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    let raw = raw.strip_suffix('Z').unwrap_or(raw);
    FORMATS.iter().find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
}

fn combine(date: Option<&str>, time: Option<&str>) -> Option<NaiveDateTime> {
    if let Some(dt) = time.and_then(parse_datetime) {
        return Some(dt);
    }
    match time.filter(|t| !t.trim().is_empty()) {
        Some(time) => {
            let day = date.and_then(parse_date)?;
            parse_time(time).map(|time| day.and_time(time))
        }
        None => date.and_then(parse_datetime),
    }
}
