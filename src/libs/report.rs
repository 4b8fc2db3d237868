//! Report assembly: groups turned into owned, display-ready views.
//!
//! This is the output side of the engine. [`build_report`] runs the whole
//! pipeline for one dimension:
//!
//! ```text
//! records ─▶ group ─▶ GroupView ─▶ (+ EffectiveTime) ─▶ (+ Breakdown)
//! ```
//!
//! Views own their strings and numbers, so they can outlive the snapshot and
//! go straight to the table renderer or to an export file.

use crate::libs::aggregate::{TimeAggregate, UniqueCounts};
use crate::libs::drilldown::{build_drilldown, secondary_breakdown, SubGroup};
use crate::libs::effective::{compute_effective, EffectiveTime, ShiftConfig};
use crate::libs::grouping::{group, Group};
use crate::libs::normalizer::{Dimension, TaskNames};
use crate::libs::record::WorkEventRecord;
use chrono::NaiveDateTime;
use serde::Serialize;

/// How groups are expanded into a secondary dimension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Drill {
    #[default]
    None,
    /// Expand only groups that span several values of their natural
    /// secondary dimension (tasks shared by several operators, ...).
    Auto,
    /// Expand every group along the given dimension.
    By(Dimension),
}

#[derive(Debug, Clone, Default)]
pub struct ReportOptions {
    pub drill: Drill,
    /// When set, each group carries its effective shift time at this moment,
    /// its total work being the active time.
    pub effective_at: Option<NaiveDateTime>,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubGroupView {
    pub key: String,
    pub display_label: String,
    pub record_count: usize,
    pub aggregate: TimeAggregate,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Breakdown {
    pub dimension: Dimension,
    pub subgroups: Vec<SubGroupView>,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GroupView {
    pub dimension: Dimension,
    pub key: String,
    pub display_label: String,
    pub record_count: usize,
    pub open_count: usize,
    pub aggregate: TimeAggregate,
    pub unique: UniqueCounts,
    pub time_per_module: f64,
    /// Most recent event, `YYYY-MM-DD HH:MM:SS`.
    pub last_event: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective: Option<EffectiveTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<Breakdown>,
}

impl GroupView {
    pub fn from_group(group: &Group<'_>, names: &TaskNames) -> Self {
        GroupView {
            dimension: group.dimension,
            key: group.key.to_string(),
            display_label: names.display_label(group.dimension, &group.key),
            record_count: group.record_count(),
            open_count: group.open_count,
            aggregate: group.aggregate,
            unique: group.unique,
            time_per_module: group.time_per_module(),
            last_event: group.last_event.map(|ts| ts.format("%Y-%m-%d %H:%M:%S").to_string()),
            effective: None,
            breakdown: None,
        }
    }

    pub fn with_effective(mut self, now: NaiveDateTime, shift: &ShiftConfig) -> Self {
        self.effective = Some(compute_effective(now, shift, self.aggregate.total_work));
        self
    }

    pub fn with_breakdown(mut self, dimension: Dimension, subgroups: &[SubGroup<'_>], names: &TaskNames) -> Self {
        let subgroups = subgroups
            .iter()
            .map(|sub| SubGroupView {
                key: sub.key.to_string(),
                display_label: names.display_label(sub.dimension, &sub.key),
                record_count: sub.items.len(),
                aggregate: sub.aggregate,
            })
            .collect();
        self.breakdown = Some(Breakdown { dimension, subgroups });
        self
    }
}

/// Groups `records` by `dimension` and assembles the views.
pub fn build_report<'a, I>(
    records: I,
    dimension: Dimension,
    options: &ReportOptions,
    names: &TaskNames,
    shift: &ShiftConfig,
) -> Vec<GroupView>
where
    I: IntoIterator<Item = &'a WorkEventRecord>,
{
    group(records, dimension)
        .iter()
        .map(|g| {
            let mut view = GroupView::from_group(g, names);
            if let Some(now) = options.effective_at {
                view = view.with_effective(now, shift);
            }
            match options.drill {
                Drill::None => view,
                Drill::Auto => match secondary_breakdown(g) {
                    Some((secondary, subgroups)) => view.with_breakdown(secondary, &subgroups, names),
                    None => view,
                },
                Drill::By(secondary) => view.with_breakdown(secondary, &build_drilldown(g, secondary), names),
            }
        })
        .collect()
}
