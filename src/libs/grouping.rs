//! Partitioning of a record snapshot along one dimension.
//!
//! Grouping is two pure steps, kept apart so each can be checked on its own:
//!
//! 1. [`partition`] walks the records once and files each under its
//!    normalized key in an ordered map.
//! 2. [`group`] turns every map entry into a [`Group`] by running the
//!    aggregator over its members.
//!
//! Groups borrow their members from the snapshot, so a drill-down can
//! re-partition them without copying or re-fetching anything.
//!
//! Every record lands in exactly one group, blanks included (they go to the
//! dimension's sentinel key), and groups come out in ascending key order
//! whatever the input order was.

use crate::libs::aggregate::{per_unit, Aggregator, TimeAggregate, UniqueCounts};
use crate::libs::normalizer::{normalize, Dimension, GroupKey};
use crate::libs::record::WorkEventRecord;
use chrono::NaiveDateTime;
use std::collections::BTreeMap;

/// The records sharing one key, with their aggregates.
#[derive(Debug, Clone)]
pub struct Group<'a> {
    pub dimension: Dimension,
    pub key: GroupKey,
    pub members: Vec<&'a WorkEventRecord>,
    pub aggregate: TimeAggregate,
    pub unique: UniqueCounts,
    /// Members that are still open (flagged or without an end).
    pub open_count: usize,
    pub last_event: Option<NaiveDateTime>,
}

impl<'a> Group<'a> {
    fn build(dimension: Dimension, key: GroupKey, members: Vec<&'a WorkEventRecord>, aggregator: &Aggregator) -> Self {
        let aggregation = aggregator.aggregate(members.iter().copied());
        Group {
            dimension,
            key,
            members,
            aggregate: aggregation.time,
            unique: aggregation.unique,
            open_count: aggregation.open_count,
            last_event: aggregation.last_event,
        }
    }

    pub fn record_count(&self) -> usize {
        self.members.len()
    }

    /// Total work divided by distinct modules, `0` when no module is known.
    pub fn time_per_module(&self) -> f64 {
        per_unit(self.aggregate.total_work, self.unique.modules)
    }
}

/// Files every record under its normalized key, in one pass.
pub fn partition<'a, I>(records: I, dimension: Dimension) -> BTreeMap<GroupKey, Vec<&'a WorkEventRecord>>
where
    I: IntoIterator<Item = &'a WorkEventRecord>,
{
    let mut partitions: BTreeMap<GroupKey, Vec<&'a WorkEventRecord>> = BTreeMap::new();
    for record in records {
        partitions.entry(normalize(dimension, record)).or_default().push(record);
    }
    partitions
}

/// Groups records by `dimension`, aggregating every time and count field.
pub fn group<'a, I>(records: I, dimension: Dimension) -> Vec<Group<'a>>
where
    I: IntoIterator<Item = &'a WorkEventRecord>,
{
    group_with(records, dimension, &Aggregator::default())
}

/// Groups records by `dimension` with a custom aggregator.
pub fn group_with<'a, I>(records: I, dimension: Dimension, aggregator: &Aggregator) -> Vec<Group<'a>>
where
    I: IntoIterator<Item = &'a WorkEventRecord>,
{
    let groups: Vec<Group<'a>> = partition(records, dimension)
        .into_iter()
        .map(|(key, members)| Group::build(dimension, key, members, aggregator))
        .collect();

    tracing::debug!(%dimension, groups = groups.len(), "grouped records");
    groups
}
