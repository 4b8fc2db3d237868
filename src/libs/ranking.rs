//! Cross-group statistics for the dashboards.
//!
//! - [`rank_operators`]: efficiency ranking by average time per module,
//!   lower is better
//! - [`task_distribution`]: share of the grand total taken by each task
//! - [`order_complexity`] / [`rank_order_complexity`]: bounded breadth
//!   heuristic per order, a relative ranking aid and not a probability
//! - [`compare_operators`]: who worked a given task, flagging tasks shared by
//!   more than one operator

use crate::libs::aggregate::percent;
use crate::libs::grouping::{group, Group};
use crate::libs::normalizer::{normalize, Dimension, GroupKey, TaskNames};
use crate::libs::record::WorkEventRecord;
use serde::Serialize;
use std::cmp::Ordering;

/// Upper bound of the complexity score.
const COMPLEXITY_CAP: u32 = 100;
const TASK_WEIGHT: u32 = 20;
const OPERATOR_WEIGHT: u32 = 15;
const MODULE_WEIGHT: u32 = 2;

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OperatorRanking {
    /// 1-based position, 1 being the fastest per module.
    pub rank: usize,
    pub operator: GroupKey,
    pub total_work: u64,
    pub module_count: usize,
    pub avg_time_per_module: f64,
}

/// Ranks operator groups by ascending average time per module.
///
/// Operators without any module have no meaningful average (reported as `0`)
/// and are ranked after everyone else. Ties keep key order.
pub fn rank_operators(groups: &[Group<'_>]) -> Vec<OperatorRanking> {
    let mut rows: Vec<OperatorRanking> = groups
        .iter()
        .map(|group| OperatorRanking {
            rank: 0,
            operator: group.key.clone(),
            total_work: group.aggregate.total_work,
            module_count: group.unique.modules,
            avg_time_per_module: group.time_per_module(),
        })
        .collect();

    rows.sort_by(|a, b| {
        (a.module_count == 0)
            .cmp(&(b.module_count == 0))
            .then_with(|| a.avg_time_per_module.total_cmp(&b.avg_time_per_module))
            .then_with(|| a.operator.cmp(&b.operator))
    });
    for (index, row) in rows.iter_mut().enumerate() {
        row.rank = index + 1;
    }
    rows
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TaskShare {
    pub task: GroupKey,
    pub label: String,
    pub total_work: u64,
    pub share_percent: f64,
}

/// Share of total work per task over all records, largest first.
pub fn task_distribution<'a, I>(records: I, names: &TaskNames) -> Vec<TaskShare>
where
    I: IntoIterator<Item = &'a WorkEventRecord>,
{
    let groups = group(records, Dimension::Task);
    let grand_total: u64 = groups.iter().map(|g| g.aggregate.total_work).sum();

    let mut shares: Vec<TaskShare> = groups
        .iter()
        .map(|g| TaskShare {
            task: g.key.clone(),
            label: names.display_label(Dimension::Task, &g.key),
            total_work: g.aggregate.total_work,
            share_percent: percent(g.aggregate.total_work, grand_total),
        })
        .collect();
    shares.sort_by(|a, b| b.total_work.cmp(&a.total_work).then_with(|| a.task.cmp(&b.task)));
    shares
}

/// `min(100, tasks * 20 + operators * 15 + modules * 2)` for one group.
pub fn order_complexity(group: &Group<'_>) -> u32 {
    let weigh = |count: usize, weight: u32| u32::try_from(count).unwrap_or(u32::MAX).saturating_mul(weight);
    weigh(group.unique.tasks, TASK_WEIGHT)
        .saturating_add(weigh(group.unique.operators, OPERATOR_WEIGHT))
        .saturating_add(weigh(group.unique.modules, MODULE_WEIGHT))
        .min(COMPLEXITY_CAP)
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrderComplexity {
    pub order: GroupKey,
    pub score: u32,
    pub task_count: usize,
    pub operator_count: usize,
    pub module_count: usize,
}

/// Scores every order group, most complex first.
pub fn rank_order_complexity(groups: &[Group<'_>]) -> Vec<OrderComplexity> {
    let mut rows: Vec<OrderComplexity> = groups
        .iter()
        .map(|g| OrderComplexity {
            order: g.key.clone(),
            score: order_complexity(g),
            task_count: g.unique.tasks,
            operator_count: g.unique.operators,
            module_count: g.unique.modules,
        })
        .collect();
    rows.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.order.cmp(&b.order)));
    rows
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OperatorShare {
    pub operator: GroupKey,
    pub total_work: u64,
    pub module_count: usize,
    pub order_count: usize,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OperatorComparison {
    pub task: GroupKey,
    /// Operators sorted by descending work time.
    pub rows: Vec<OperatorShare>,
    /// More than one operator worked the task; display it as a breakdown.
    pub multi_operator: bool,
}

/// Compares the operators who worked `task` across the whole snapshot.
pub fn compare_operators<'a, I>(records: I, task: &GroupKey) -> OperatorComparison
where
    I: IntoIterator<Item = &'a WorkEventRecord>,
{
    let members = records
        .into_iter()
        .filter(|record| normalize(Dimension::Task, record) == *task);
    comparison_of(task.clone(), members)
}

/// Compares the operators inside an already-built task group.
pub fn compare_operators_in(task_group: &Group<'_>) -> OperatorComparison {
    comparison_of(task_group.key.clone(), task_group.members.iter().copied())
}

fn comparison_of<'a, I>(task: GroupKey, members: I) -> OperatorComparison
where
    I: IntoIterator<Item = &'a WorkEventRecord>,
{
    let mut rows: Vec<OperatorShare> = group(members, Dimension::Operator)
        .into_iter()
        .map(|g| OperatorShare {
            operator: g.key,
            total_work: g.aggregate.total_work,
            module_count: g.unique.modules,
            order_count: g.unique.orders,
        })
        .collect();
    rows.sort_by(|a, b| match b.total_work.cmp(&a.total_work) {
        Ordering::Equal => a.operator.cmp(&b.operator),
        other => other,
    });

    let multi_operator = rows.iter().filter(|row| !row.operator.is_sentinel()).count() > 1;
    OperatorComparison {
        task,
        rows,
        multi_operator,
    }
}
