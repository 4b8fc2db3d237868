//! Nested views: a group re-partitioned along a second dimension.
//!
//! A user looking at "by task" can expand one task into "by operator within
//! this task". Nothing is fetched again; the group's borrowed members are
//! simply grouped a second time.
//!
//! A breakdown is warranted when the group spans more than one value of the
//! secondary dimension, e.g. a task worked by several operators. Such a group
//! is rendered as its breakdown instead of a single flat aggregate.

use crate::libs::aggregate::{TimeAggregate, UniqueField};
use crate::libs::grouping::{group, Group};
use crate::libs::normalizer::{Dimension, GroupKey};
use crate::libs::record::WorkEventRecord;

#[derive(Debug, Clone)]
pub struct SubGroup<'a> {
    pub dimension: Dimension,
    pub key: GroupKey,
    pub items: Vec<&'a WorkEventRecord>,
    pub aggregate: TimeAggregate,
}

impl<'a> From<Group<'a>> for SubGroup<'a> {
    fn from(group: Group<'a>) -> Self {
        SubGroup {
            dimension: group.dimension,
            key: group.key,
            items: group.members,
            aggregate: group.aggregate,
        }
    }
}

/// Re-groups the members of `parent` by `secondary`, sorted by key.
pub fn build_drilldown<'a>(parent: &Group<'a>, secondary: Dimension) -> Vec<SubGroup<'a>> {
    group(parent.members.iter().copied(), secondary)
        .into_iter()
        .map(SubGroup::from)
        .collect()
}

/// The dimension a group of `primary` is naturally expanded into.
pub fn default_secondary(primary: Dimension) -> Dimension {
    match primary {
        Dimension::Task => Dimension::Operator,
        Dimension::Operator | Dimension::Order => Dimension::Task,
    }
}

/// Whether `parent` spans more than one distinct value of `secondary`.
pub fn breakdown_warranted(parent: &Group<'_>, secondary: Dimension) -> bool {
    secondary != parent.dimension && parent.unique.get(UniqueField::for_dimension(secondary)) > 1
}

/// The automatic breakdown of a group: its default secondary dimension, when
/// warranted, together with the sub-groups.
pub fn secondary_breakdown<'a>(parent: &Group<'a>) -> Option<(Dimension, Vec<SubGroup<'a>>)> {
    let secondary = default_secondary(parent.dimension);
    if !breakdown_warranted(parent, secondary) {
        return None;
    }
    tracing::debug!(key = %parent.key, %secondary, "breakdown warranted");
    Some((secondary, build_drilldown(parent, secondary)))
}
