//! Per-day totals of a record snapshot.
//!
//! Records are bucketed by their calendar `date`; records whose date cannot
//! be parsed are counted as undated instead. The two traits turn the buckets
//! into the grand total and daily average shown by `worktally sum`.

use crate::libs::formatter::format_seconds;
use crate::libs::normalizer::{raw_key, Dimension};
use crate::libs::record::WorkEventRecord;
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashSet};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub total_work: u64,
    pub record_count: usize,
    pub operator_count: usize,
}

/// Per-day totals of a snapshot, plus the number of records whose date could
/// not be parsed and therefore belong to no day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DailyBreakdown {
    pub days: Vec<DailySummary>,
    pub undated: usize,
}

pub fn daily_summaries<'a, I>(records: I) -> DailyBreakdown
where
    I: IntoIterator<Item = &'a WorkEventRecord>,
{
    let mut days: BTreeMap<NaiveDate, (u64, usize, HashSet<String>)> = BTreeMap::new();
    let mut undated = 0;

    for record in records {
        let Some(day) = record.day() else {
            undated += 1;
            continue;
        };
        let (total, count, operators) = days.entry(day).or_default();
        *total = total.saturating_add(record.duration_seconds);
        *count += 1;
        if let Some(operator) = raw_key(Dimension::Operator, record) {
            operators.insert(operator);
        }
    }

    let days = days
        .into_iter()
        .map(|(date, (total_work, record_count, operators))| DailySummary {
            date,
            total_work,
            record_count,
            operator_count: operators.len(),
        })
        .collect();
    DailyBreakdown { days, undated }
}

pub trait SummaryCalculator {
    fn calculate_totals(self) -> (Self, u64, u64)
    where
        Self: Sized;
}

impl SummaryCalculator for Vec<DailySummary> {
    fn calculate_totals(mut self) -> (Self, u64, u64) {
        self.sort_by_key(|ds| ds.date);

        let total_work = self.iter().fold(0u64, |acc, ds| acc.saturating_add(ds.total_work));

        let count = self.len() as u64;
        let average_work = if count > 0 { total_work / count } else { 0 };

        (self, total_work, average_work)
    }
}

pub trait SummaryFormatter {
    fn format_summary(&self) -> (Vec<(NaiveDate, String)>, String, String);
}

impl SummaryFormatter for (Vec<DailySummary>, u64, u64) {
    fn format_summary(&self) -> (Vec<(NaiveDate, String)>, String, String) {
        let daily = self.0.iter().map(|ds| (ds.date, format_seconds(ds.total_work))).collect();

        (daily, format_seconds(self.1), format_seconds(self.2))
    }
}
