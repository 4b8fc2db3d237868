//! Core library modules for worktally.
//!
//! ## Layout
//!
//! - **Engine**: `record`, `normalizer`, `grouping`, `aggregate`, `effective`,
//!   `status`, `ranking`, `drilldown`
//! - **Assembly**: `filter`, `summary`, `report`
//! - **Infrastructure**: `config`, `data_storage`, `error`, `logging`, `messages`
//! - **Presentation**: `formatter`, `view`, `export`
//!
//! ## Usage
//!
//! ```rust
//! use worktally::libs::effective::{compute_effective, ShiftConfig};
//! use chrono::NaiveDate;
//!
//! let now = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap().and_hms_opt(10, 30, 0).unwrap();
//! let time = compute_effective(now, &ShiftConfig::default(), 5_400);
//! assert_eq!(time.effective_elapsed, 12_600);
//! assert_eq!(time.utilization_percent, 43);
//! ```

pub mod aggregate;
pub mod config;
pub mod data_storage;
pub mod drilldown;
pub mod effective;
pub mod error;
pub mod export;
pub mod filter;
pub mod formatter;
pub mod grouping;
pub mod logging;
pub mod messages;
pub mod normalizer;
pub mod ranking;
pub mod record;
pub mod report;
pub mod status;
pub mod summary;
pub mod view;
