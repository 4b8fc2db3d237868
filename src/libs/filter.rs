//! Narrowing a snapshot before it is grouped.
//!
//! Screens recompute on date-range and search-text changes. Both are applied
//! here, returning references into the snapshot so the grouping that follows
//! borrows the same records.

use crate::libs::error::{Result, WorktallyError};
use crate::libs::normalizer::TaskNames;
use crate::libs::record::WorkEventRecord;
use chrono::NaiveDate;

/// An inclusive range of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(WorktallyError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn day(day: NaiveDate) -> Self {
        Self { start: day, end: day }
    }

    /// Parses `YYYY-MM-DD` bounds.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Self::new(parse_day(start)?, parse_day(end)?)
    }

    /// Builds a range from optional bounds; a missing bound is open-ended.
    pub fn from_bounds(start: Option<&str>, end: Option<&str>) -> Result<Option<Self>> {
        if start.is_none() && end.is_none() {
            return Ok(None);
        }
        let start = start.map(parse_day).transpose()?.unwrap_or(NaiveDate::MIN);
        let end = end.map(parse_day).transpose()?.unwrap_or(NaiveDate::MAX);
        Self::new(start, end).map(Some)
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }
}

fn parse_day(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| WorktallyError::InvalidDate(raw.to_string()))
}

#[derive(Debug, Clone, Default)]
pub struct RecordFilter {
    pub range: Option<DateRange>,
    /// Case-insensitive text matched against operator, task, order and module.
    pub search: Option<String>,
}

impl RecordFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_range(mut self, range: Option<DateRange>) -> Self {
        self.range = range;
        self
    }

    pub fn with_search(mut self, search: Option<String>) -> Self {
        self.search = search.map(|s| s.trim().to_lowercase()).filter(|s| !s.is_empty());
        self
    }

    /// Records with an unparseable date never fall inside a range.
    pub fn matches(&self, record: &WorkEventRecord, names: &TaskNames) -> bool {
        if let Some(range) = &self.range {
            if !record.day().is_some_and(|day| range.contains(day)) {
                return false;
            }
        }

        match &self.search {
            Some(needle) => searchable_fields(record, names).any(|field| field.to_lowercase().contains(needle.as_str())),
            None => true,
        }
    }

    pub fn apply<'a>(&self, records: &'a [WorkEventRecord], names: &TaskNames) -> Vec<&'a WorkEventRecord> {
        let kept: Vec<&WorkEventRecord> = records.iter().filter(|r| self.matches(r, names)).collect();
        tracing::debug!(total = records.len(), kept = kept.len(), "filtered records");
        kept
    }
}

fn searchable_fields<'r>(record: &'r WorkEventRecord, names: &'r TaskNames) -> impl Iterator<Item = &'r str> {
    let task_label = record.task_code.as_deref().and_then(|code| names.get(code));
    [
        record.operator_name.as_deref(),
        record.operator_code.as_deref(),
        record.task_code.as_deref(),
        task_label,
        record.order_number.as_deref(),
        record.module_id.as_deref(),
    ]
    .into_iter()
    .flatten()
}
