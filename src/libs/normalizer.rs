//! Canonical grouping keys for operators, tasks and orders.
//!
//! Raw identifiers on work events are free text typed on the shop floor. This
//! module turns them into stable [`GroupKey`]s so that the same person, task or
//! order always lands in the same group:
//!
//! | Dimension  | Source field                         | Rule                                    |
//! |------------|--------------------------------------|-----------------------------------------|
//! | `operator` | `operatorName`, else `operatorCode`  | first token split on whitespace or `/`, upper-cased |
//! | `task`     | `taskCode`                           | as-is                                   |
//! | `order`    | `orderNumber`                        | as-is                                   |
//!
//! Blank sources map to a sentinel key (`UNASSIGNED_OPERATOR`,
//! `UNASSIGNED_TASK`, `UNASSIGNED_ORDER`) so that every record always has a
//! group. Normalization is pure: the same record always yields the same key.
//!
//! The task table ([`TaskNames`]) is kept apart from normalization. Keys stay
//! codes; names are only applied when a key is displayed.

use crate::libs::record::WorkEventRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub const UNASSIGNED_OPERATOR: &str = "UNASSIGNED_OPERATOR";
pub const UNASSIGNED_TASK: &str = "UNASSIGNED_TASK";
pub const UNASSIGNED_ORDER: &str = "UNASSIGNED_ORDER";

/// A dimension along which records can be grouped.
#[derive(clap::ValueEnum, Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Operator,
    Task,
    Order,
}

impl Dimension {
    pub const ALL: [Dimension; 3] = [Dimension::Operator, Dimension::Task, Dimension::Order];

    pub fn sentinel(self) -> &'static str {
        match self {
            Dimension::Operator => UNASSIGNED_OPERATOR,
            Dimension::Task => UNASSIGNED_TASK,
            Dimension::Order => UNASSIGNED_ORDER,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Dimension::Operator => "operator",
            Dimension::Task => "task",
            Dimension::Order => "order",
        };
        write!(f, "{}", name)
    }
}

/// A normalized grouping key. Ordering is plain lexical order of the string.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct GroupKey(String);

impl GroupKey {
    pub fn new(key: impl Into<String>) -> Self {
        GroupKey(key.into())
    }

    pub fn sentinel(dimension: Dimension) -> Self {
        GroupKey(dimension.sentinel().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_sentinel(&self) -> bool {
        Dimension::ALL.iter().any(|d| d.sentinel() == self.0)
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Derives the grouping key of `record` along `dimension`.
pub fn normalize(dimension: Dimension, record: &WorkEventRecord) -> GroupKey {
    raw_key(dimension, record).map_or_else(|| GroupKey::sentinel(dimension), GroupKey)
}

/// The normalized key without the sentinel fallback, `None` when the source
/// field is blank. Used for distinct counts, where blanks are not a category.
pub fn raw_key(dimension: Dimension, record: &WorkEventRecord) -> Option<String> {
    match dimension {
        Dimension::Operator => operator_key(record.operator_name.as_deref(), record.operator_code.as_deref()),
        Dimension::Task => non_blank(record.task_code.as_deref()).map(str::to_string),
        Dimension::Order => non_blank(record.order_number.as_deref()).map(str::to_string),
    }
}

/// First token of the operator name (or code), upper-cased.
///
/// `"Juan Pérez"` and `"juan/otro"` both become `"JUAN"`. People sharing a
/// first name therefore share a key.
pub fn operator_key(name: Option<&str>, code: Option<&str>) -> Option<String> {
    [name, code].into_iter().flatten().find_map(|raw| {
        raw.trim()
            .split(|c: char| c.is_whitespace() || c == '/')
            .find(|token| !token.is_empty())
            .map(str::to_uppercase)
    })
}

/// Canonical form of a task code for matching: numeric codes are zero-padded
/// to two digits (`"3"` and `"003"` both become `"03"`), others are trimmed.
pub fn canonical_task_code(code: &str) -> String {
    let code = code.trim();
    match code.parse::<u32>() {
        Ok(number) => format!("{:02}", number),
        Err(_) => code.to_string(),
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Static lookup from task code to display name.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(transparent)]
pub struct TaskNames(BTreeMap<String, String>);

impl Default for TaskNames {
    /// The production steps of the assembly line, on codes `01`..`10`.
    fn default() -> Self {
        let names = [
            ("01", "CORTE"),
            ("02", "PRE-ARMADO"),
            ("03", "ARMADO"),
            ("04", "HERRAJE"),
            ("05", "MATRIMONIO"),
            ("06", "COMPACTO"),
            ("07", "ACRISTALADO"),
            ("08", "EMBALAJE"),
            ("09", "OPTIMIZACION"),
            ("10", "REBARBA"),
        ];
        TaskNames(names.iter().map(|(code, name)| (code.to_string(), name.to_string())).collect())
    }
}

impl TaskNames {
    pub fn new(names: BTreeMap<String, String>) -> Self {
        TaskNames(names)
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Looks up a code; numeric codes also match their zero-padded form
    /// (`"3"` finds `"03"`).
    pub fn get(&self, code: &str) -> Option<&str> {
        let code = code.trim();
        self.0
            .get(code)
            .or_else(|| self.0.get(&canonical_task_code(code)))
            .map(String::as_str)
    }

    /// Display name for a code; unknown codes pass through unmapped.
    pub fn label<'a>(&'a self, code: &'a str) -> &'a str {
        self.get(code).unwrap_or(code)
    }

    /// Display label for a key of the given dimension. Only task keys are
    /// translated; operator and order keys, and sentinels, are shown as-is.
    pub fn display_label(&self, dimension: Dimension, key: &GroupKey) -> String {
        match dimension {
            Dimension::Task if !key.is_sentinel() => self.label(key.as_str()).to_string(),
            _ => key.to_string(),
        }
    }
}
