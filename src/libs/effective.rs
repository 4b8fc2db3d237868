//! Effective shift time: elapsed working time net of the fixed break.
//!
//! ## Formula
//!
//! ```text
//! rawElapsed       = clamp(now - shiftStart, 0, shiftLength)
//! breakOverlap     = |[shiftStart, shiftStart + rawElapsed] ∩ [breakStart, breakEnd]|
//! effectiveElapsed = rawElapsed - breakOverlap
//! active           = min(activeSeconds, effectiveElapsed)
//! inactive         = effectiveElapsed - active
//! utilization      = round(100 * active / effectiveElapsed), 0 when effectiveElapsed is 0
//! ```
//!
//! `shiftStart` is today's start time, or yesterday's when that shift runs
//! past midnight and is still going at `now` (a 22:00 night shift checked at
//! 01:00). The break window is placed after the shift start, wrapping past
//! midnight the same way. The function is pure:
//! callers refresh the figures by calling it again with a new `now` (the CLI
//! does this once per second in `shift --watch`).

use crate::libs::record::parse_time;
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

const DAY_SECONDS: i64 = 86_400;

/// The configured daily working window.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
pub struct ShiftConfig {
    /// Time of day the shift starts.
    #[serde(with = "hhmm")]
    pub start: NaiveTime,
    /// Shift length in seconds; elapsed time never exceeds it.
    pub length_seconds: u64,
    #[serde(with = "hhmm")]
    pub break_start: NaiveTime,
    #[serde(with = "hhmm")]
    pub break_end: NaiveTime,
}

impl Default for ShiftConfig {
    /// 06:30 start, 7.5 hours, break 09:30-10:00.
    fn default() -> Self {
        ShiftConfig {
            start: hm(6, 30),
            length_seconds: 27_000,
            break_start: hm(9, 30),
            break_end: hm(10, 0),
        }
    }
}

fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default()
}

impl ShiftConfig {
    pub fn new(start: NaiveTime, length_seconds: u64, break_start: NaiveTime, break_end: NaiveTime) -> Self {
        Self {
            start,
            length_seconds,
            break_start,
            break_end,
        }
    }

    pub fn start_on(&self, day: NaiveDate) -> NaiveDateTime {
        day.and_time(self.start)
    }

    /// Start of the shift `now` belongs to.
    pub fn start_for(&self, now: NaiveDateTime) -> NaiveDateTime {
        let today = self.start_on(now.date());
        if now >= today {
            return today;
        }
        let Some(yesterday) = now.date().pred_opt().map(|day| self.start_on(day)) else {
            return today;
        };
        let end = Duration::try_seconds(i64::try_from(self.length_seconds).unwrap_or(i64::MAX))
            .and_then(|length| yesterday.checked_add_signed(length));
        if end.map_or(true, |end| end > now) {
            yesterday
        } else {
            today
        }
    }

    /// Length of the break window; an inverted window counts as no break.
    pub fn break_seconds(&self) -> u64 {
        u64::try_from((self.break_end - self.break_start).num_seconds()).unwrap_or(0)
    }
}

/// Elapsed, break and activity figures of a shift at one moment.
#[derive(Serialize, Copy, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EffectiveTime {
    pub raw_elapsed: u64,
    pub break_overlap: u64,
    pub effective_elapsed: u64,
    pub active_seconds: u64,
    pub inactive_seconds: u64,
    pub utilization_percent: u32,
}

/// Computes the effective time of the shift running at `now`, given
/// `active_seconds` of aggregated work.
pub fn compute_effective(now: NaiveDateTime, shift: &ShiftConfig, active_seconds: u64) -> EffectiveTime {
    let shift_start = shift.start_for(now);
    let length = i64::try_from(shift.length_seconds).unwrap_or(i64::MAX);

    // Offsets in seconds relative to the shift start.
    let raw_elapsed = (now - shift_start).num_seconds().clamp(0, length);
    let break_length = i64::try_from(shift.break_seconds()).unwrap_or(0);
    let mut break_start = (shift.break_start - shift.start).num_seconds();
    if break_start + break_length <= 0 {
        break_start += DAY_SECONDS;
    }
    let break_end = break_start + break_length;

    let break_overlap = if break_length > 0 {
        (raw_elapsed.min(break_end) - break_start.max(0)).clamp(0, raw_elapsed)
    } else {
        0
    };

    let raw_elapsed = raw_elapsed as u64;
    let break_overlap = break_overlap as u64;
    let effective_elapsed = raw_elapsed - break_overlap;
    let active_seconds = active_seconds.min(effective_elapsed);
    let inactive_seconds = effective_elapsed - active_seconds;
    let utilization_percent = if effective_elapsed > 0 {
        (active_seconds as f64 * 100.0 / effective_elapsed as f64).round() as u32
    } else {
        0
    };

    EffectiveTime {
        raw_elapsed,
        break_overlap,
        effective_elapsed,
        active_seconds,
        inactive_seconds,
        utilization_percent,
    }
}

/// `HH:MM` (de)serialization for times of day in the configuration file.
pub(crate) mod hhmm {
    use super::parse_time;
    use chrono::{NaiveTime, Timelike};
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let format = if time.second() == 0 { "%H:%M" } else { "%H:%M:%S" };
        serializer.serialize_str(&time.format(format).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_time(&raw).ok_or_else(|| D::Error::custom(format!("invalid time of day: {}", raw)))
    }
}
