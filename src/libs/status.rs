//! Three-state completion status of a module.
//!
//! A module is worked through a sequence of tasks. Its status is derived from
//! the time recorded per task code, never stored:
//!
//! - `NONE`: no participating task has any time
//! - `COMPLETE`: every participating task has time
//! - `PARTIAL`: some do, some don't
//!
//! Only expected task codes whose field is *present* participate. A task that
//! is present with `0` counts as not done yet; a task absent from the payload
//! is not part of this module's route at all.
//!
//! Per-task times come either from a module payload carrying one field per
//! task (`TiempoAcumulado01`, `TiempoAcumulado02`, ...) through
//! [`ModuleSnapshot::from_payload`], or from work events through
//! [`module_progress`].

use crate::libs::error::{Result, WorktallyError};
use crate::libs::normalizer::{canonical_task_code, raw_key, Dimension, UNASSIGNED_ORDER};
use crate::libs::record::{coerce_seconds, envelope_items, value_to_string, WorkEventRecord};
use serde::Serialize;
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::fs;
use std::path::Path;

#[derive(Serialize, Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum ModuleStatus {
    Complete,
    Partial,
    None,
}

impl fmt::Display for ModuleStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            ModuleStatus::Complete => "COMPLETE",
            ModuleStatus::Partial => "PARTIAL",
            ModuleStatus::None => "NONE",
        };
        write!(f, "{}", label)
    }
}

/// Classifies a module from its per-task durations. Codes on both sides are
/// compared in canonical form, so `"1"` and `"01"` are the same task.
pub fn classify<S: AsRef<str>>(expected: &[S], durations: &BTreeMap<String, u64>) -> ModuleStatus {
    let mut canonical: BTreeMap<String, u64> = BTreeMap::new();
    for (code, seconds) in durations {
        let slot = canonical.entry(canonical_task_code(code)).or_insert(0);
        *slot = slot.saturating_add(*seconds);
    }

    let expected: BTreeSet<String> = expected.iter().map(|code| canonical_task_code(code.as_ref())).collect();
    let participating: Vec<u64> = expected.iter().filter_map(|code| canonical.get(code).copied()).collect();
    let done = participating.iter().filter(|&&seconds| seconds > 0).count();

    if done == 0 {
        ModuleStatus::None
    } else if done == participating.len() {
        ModuleStatus::Complete
    } else {
        ModuleStatus::Partial
    }
}

/// Time recorded per task code for one module. A key being present is
/// meaningful even when its value is `0`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleTimes {
    durations: BTreeMap<String, u64>,
}

impl ModuleTimes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads every `<prefix><code>` field of a payload object. Present but
    /// `null` or non-numeric fields are kept with `0`.
    pub fn from_payload(payload: &Value, prefix: &str) -> Self {
        let durations = payload
            .as_object()
            .map(|fields| {
                fields
                    .iter()
                    .filter_map(|(name, value)| {
                        let code = name.strip_prefix(prefix).filter(|code| !code.is_empty())?;
                        Some((canonical_task_code(code), coerce_seconds(value)))
                    })
                    .collect()
            })
            .unwrap_or_default();
        ModuleTimes { durations }
    }

    /// Adds time to a task, marking it present. The code is stored in
    /// canonical form.
    pub fn record(&mut self, code: impl AsRef<str>, seconds: u64) {
        let slot = self.durations.entry(canonical_task_code(code.as_ref())).or_insert(0);
        *slot = slot.saturating_add(seconds);
    }

    pub fn durations(&self) -> &BTreeMap<String, u64> {
        &self.durations
    }

    /// Time recorded for `code`, `None` when the task is absent.
    pub fn get(&self, code: &str) -> Option<u64> {
        self.durations.get(&canonical_task_code(code)).copied()
    }

    pub fn classify<S: AsRef<str>>(&self, expected: &[S]) -> ModuleStatus {
        classify(expected, &self.durations)
    }
}

/// A module payload as sent by the modules endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleSnapshot {
    pub order: Option<String>,
    pub module: Option<String>,
    pub times: ModuleTimes,
}

impl ModuleSnapshot {
    pub fn from_payload(payload: &Value, prefix: &str) -> Self {
        let field = |name: &str| payload.get(name).and_then(value_to_string);
        ModuleSnapshot {
            order: field("orderNumber"),
            module: field("moduleId"),
            times: ModuleTimes::from_payload(payload, prefix),
        }
    }
}

impl ModuleSnapshot {
    /// Classifies the payload; a missing order is filed under
    /// `UNASSIGNED_ORDER` and a missing module id shows as `-`.
    pub fn into_progress<S: AsRef<str>>(self, expected: &[S]) -> ModuleProgress {
        let status = self.times.classify(expected);
        ModuleProgress {
            order: self.order.unwrap_or_else(|| UNASSIGNED_ORDER.to_string()),
            module: self.module.unwrap_or_else(|| "-".to_string()),
            times: self.times,
            status,
        }
    }
}

/// Reads module payloads from a JSON file holding a bare array or a
/// `data` / `records` envelope. Non-object entries are skipped.
pub fn load_module_payloads(path: impl AsRef<Path>, prefix: &str) -> Result<Vec<ModuleSnapshot>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WorktallyError::RecordsRead {
        path: path.to_path_buf(),
        source,
    })?;
    let items = envelope_items(serde_json::from_str(&content)?)?;
    Ok(items
        .iter()
        .filter(|item| item.is_object())
        .map(|item| ModuleSnapshot::from_payload(item, prefix))
        .collect())
}

/// Per-task progress of one `(order, module)` pair derived from work events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleProgress {
    pub order: String,
    pub module: String,
    pub times: ModuleTimes,
    pub status: ModuleStatus,
}

/// Builds the progress of every module seen in `records`, ordered by order
/// then module. Events without a module id or a task code are skipped; a
/// missing order is filed under `UNASSIGNED_ORDER`.
pub fn module_progress<'a, I, S>(records: I, expected: &[S]) -> Vec<ModuleProgress>
where
    I: IntoIterator<Item = &'a WorkEventRecord>,
    S: AsRef<str>,
{
    let mut modules: BTreeMap<(String, String), ModuleTimes> = BTreeMap::new();
    for record in records {
        let Some(module) = record.module_id.as_deref().filter(|m| !m.trim().is_empty()) else {
            continue;
        };
        let Some(task) = raw_key(Dimension::Task, record) else {
            continue;
        };
        let order = raw_key(Dimension::Order, record).unwrap_or_else(|| UNASSIGNED_ORDER.to_string());
        modules
            .entry((order, module.to_string()))
            .or_default()
            .record(task, record.duration_seconds);
    }

    modules
        .into_iter()
        .map(|((order, module), times)| {
            let status = times.classify(expected);
            ModuleProgress {
                order,
                module,
                times,
                status,
            }
        })
        .collect()
}
