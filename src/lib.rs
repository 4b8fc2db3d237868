//! # Worktally
//!
//! Shop-floor time analytics over work-event records.
//!
//! A snapshot of records (who worked which task, on which order and module,
//! for how long) is grouped by operator, task or order, and each group gets
//! its time aggregates, distinct counts, module completion status and
//! rankings. All of it is recomputed from the snapshot on demand; nothing is
//! stored.
//!
//! ## Features
//!
//! - **Grouping**: stable keys per dimension with sentinels for missing values
//! - **Aggregation**: summed time fields and distinct counts per group
//! - **Effective time**: elapsed shift time net of the fixed break
//! - **Module status**: `COMPLETE`, `PARTIAL` or `NONE` from per-task times
//! - **Rankings**: operator efficiency, task shares, order complexity
//! - **Drill-down**: a group re-grouped along a second dimension
//! - **Export**: CSV, JSON and Excel
//!
//! ## Usage
//!
//! ```rust
//! use worktally::libs::grouping::group;
//! use worktally::libs::normalizer::Dimension;
//! use worktally::libs::record::parse_records;
//!
//! let records = parse_records(r#"[
//!     {"operatorName": "ana lopez", "taskCode": "03", "durationSeconds": 600},
//!     {"operatorName": "Ana", "taskCode": "04", "durationSeconds": 300}
//! ]"#).unwrap();
//!
//! let groups = group(&records, Dimension::Operator);
//! assert_eq!(groups.len(), 1);
//! assert_eq!(groups[0].key.as_str(), "ANA");
//! assert_eq!(groups[0].aggregate.total_work, 900);
//! ```

pub mod commands;
pub mod libs;
