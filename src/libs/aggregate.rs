//! Additive time aggregation and distinct counts over a set of records.
//!
//! One [`Aggregator`] serves every dimension. It is parameterized by the time
//! components to sum ([`TimeField`]) and the attributes to count distinct
//! values of ([`UniqueField`]); the default aggregator covers all of them.
//!
//! ## Rules
//!
//! - Time components are plain sums. Records carry already-coerced,
//!   non-negative seconds, so sums never go negative and never hold NaN.
//! - Distinct counts use set semantics over non-blank values. A blank module
//!   id is not counted as a module.
//! - Averages and percentages divide safely: a zero denominator yields `0`.

use crate::libs::normalizer::{raw_key, Dimension};
use crate::libs::record::WorkEventRecord;
use chrono::NaiveDateTime;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// A summable time component of a work event.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TimeField {
    Work,
    WaitBeforeResource,
    InterOperation,
    SinceOrderPlaced,
    UntilDue,
    TotalCycle,
}

impl TimeField {
    pub const ALL: [TimeField; 6] = [
        TimeField::Work,
        TimeField::WaitBeforeResource,
        TimeField::InterOperation,
        TimeField::SinceOrderPlaced,
        TimeField::UntilDue,
        TimeField::TotalCycle,
    ];

    pub fn read(self, record: &WorkEventRecord) -> u64 {
        match self {
            TimeField::Work => record.duration_seconds,
            TimeField::WaitBeforeResource => record.wait_before_resource_seconds,
            TimeField::InterOperation => record.inter_operation_seconds,
            TimeField::SinceOrderPlaced => record.since_order_placed_seconds,
            TimeField::UntilDue => record.until_due_seconds,
            TimeField::TotalCycle => record.total_cycle_seconds,
        }
    }
}

/// Sums of every time component, in seconds.
#[derive(Serialize, Copy, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TimeAggregate {
    pub total_work: u64,
    pub wait_before_resource: u64,
    pub inter_operation: u64,
    pub since_order_placed: u64,
    pub until_due: u64,
    pub total_cycle: u64,
}

impl TimeAggregate {
    pub fn get(&self, field: TimeField) -> u64 {
        match field {
            TimeField::Work => self.total_work,
            TimeField::WaitBeforeResource => self.wait_before_resource,
            TimeField::InterOperation => self.inter_operation,
            TimeField::SinceOrderPlaced => self.since_order_placed,
            TimeField::UntilDue => self.until_due,
            TimeField::TotalCycle => self.total_cycle,
        }
    }

    fn slot(&mut self, field: TimeField) -> &mut u64 {
        match field {
            TimeField::Work => &mut self.total_work,
            TimeField::WaitBeforeResource => &mut self.wait_before_resource,
            TimeField::InterOperation => &mut self.inter_operation,
            TimeField::SinceOrderPlaced => &mut self.since_order_placed,
            TimeField::UntilDue => &mut self.until_due,
            TimeField::TotalCycle => &mut self.total_cycle,
        }
    }

    pub fn add_field(&mut self, field: TimeField, seconds: u64) {
        let slot = self.slot(field);
        *slot = slot.saturating_add(seconds);
    }

    /// Every component of a single record.
    pub fn of(record: &WorkEventRecord) -> Self {
        let mut aggregate = TimeAggregate::default();
        for field in TimeField::ALL {
            aggregate.add_field(field, field.read(record));
        }
        aggregate
    }
}

impl AddAssign for TimeAggregate {
    fn add_assign(&mut self, other: Self) {
        for field in TimeField::ALL {
            self.add_field(field, other.get(field));
        }
    }
}

impl Add for TimeAggregate {
    type Output = TimeAggregate;

    fn add(mut self, other: Self) -> Self {
        self += other;
        self
    }
}

impl Sum for TimeAggregate {
    fn sum<I: Iterator<Item = TimeAggregate>>(iter: I) -> Self {
        iter.fold(TimeAggregate::default(), Add::add)
    }
}

/// An attribute whose distinct values are counted.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum UniqueField {
    Operator,
    Task,
    Order,
    Module,
}

impl UniqueField {
    pub const ALL: [UniqueField; 4] = [UniqueField::Operator, UniqueField::Task, UniqueField::Order, UniqueField::Module];

    /// The distinct-count field matching a grouping dimension.
    pub fn for_dimension(dimension: Dimension) -> Self {
        match dimension {
            Dimension::Operator => UniqueField::Operator,
            Dimension::Task => UniqueField::Task,
            Dimension::Order => UniqueField::Order,
        }
    }

    /// Projects a record onto this attribute; blanks project to `None`.
    /// Operators are projected through their normalized key.
    pub fn project(self, record: &WorkEventRecord) -> Option<String> {
        match self {
            UniqueField::Operator => raw_key(Dimension::Operator, record),
            UniqueField::Task => raw_key(Dimension::Task, record),
            UniqueField::Order => raw_key(Dimension::Order, record),
            UniqueField::Module => record
                .module_id
                .as_deref()
                .filter(|m| !m.trim().is_empty())
                .map(str::to_string),
        }
    }
}

/// Distinct-value counts of the related entities of a record set.
#[derive(Serialize, Copy, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UniqueCounts {
    pub operators: usize,
    pub tasks: usize,
    pub orders: usize,
    pub modules: usize,
}

impl UniqueCounts {
    pub fn get(&self, field: UniqueField) -> usize {
        match field {
            UniqueField::Operator => self.operators,
            UniqueField::Task => self.tasks,
            UniqueField::Order => self.orders,
            UniqueField::Module => self.modules,
        }
    }

    fn set(&mut self, field: UniqueField, count: usize) {
        match field {
            UniqueField::Operator => self.operators = count,
            UniqueField::Task => self.tasks = count,
            UniqueField::Order => self.orders = count,
            UniqueField::Module => self.modules = count,
        }
    }
}

/// Everything the aggregator derives from one record set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aggregation {
    pub time: TimeAggregate,
    pub unique: UniqueCounts,
    pub record_count: usize,
    pub open_count: usize,
    /// Most recent event timestamp; records with unparseable dates are ignored.
    pub last_event: Option<NaiveDateTime>,
}

#[derive(Debug, Clone)]
pub struct Aggregator {
    time_fields: Vec<TimeField>,
    unique_fields: Vec<UniqueField>,
}

impl Default for Aggregator {
    fn default() -> Self {
        Aggregator::new(&TimeField::ALL, &UniqueField::ALL)
    }
}

impl Aggregator {
    pub fn new(time_fields: &[TimeField], unique_fields: &[UniqueField]) -> Self {
        Self {
            time_fields: time_fields.to_vec(),
            unique_fields: unique_fields.to_vec(),
        }
    }

    pub fn aggregate<'a, I>(&self, records: I) -> Aggregation
    where
        I: IntoIterator<Item = &'a WorkEventRecord>,
    {
        let mut aggregation = Aggregation::default();
        let mut distinct: HashMap<UniqueField, HashSet<String>> = HashMap::new();

        for record in records {
            aggregation.record_count += 1;
            if record.is_open() {
                aggregation.open_count += 1;
            }
            for &field in &self.time_fields {
                aggregation.time.add_field(field, field.read(record));
            }
            for &field in &self.unique_fields {
                if let Some(value) = field.project(record) {
                    distinct.entry(field).or_default().insert(value);
                }
            }
            if let Some(timestamp) = record.event_timestamp() {
                aggregation.last_event = aggregation.last_event.max(Some(timestamp));
            }
        }

        for (field, values) in distinct {
            aggregation.unique.set(field, values.len());
        }
        aggregation
    }
}

/// Aggregates with every time and distinct-count field.
pub fn aggregate<'a, I>(records: I) -> Aggregation
where
    I: IntoIterator<Item = &'a WorkEventRecord>,
{
    Aggregator::default().aggregate(records)
}

/// `total / count`, or `0` when there is nothing to divide by.
pub fn per_unit(total: u64, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        total as f64 / count as f64
    }
}

/// `part / whole * 100`, or `0` when `whole` is zero.
pub fn percent(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 * 100.0 / whole as f64
    }
}
