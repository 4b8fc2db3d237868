use crate::{
    libs::{
        config::Config,
        error::WorktallyError,
        filter::{DateRange, RecordFilter},
        messages::Message,
        record::{load_records, normalize_units, parse_datetime, DurationUnit, WorkEventRecord},
    },
    msg_debug,
};
use anyhow::Result;
use chrono::{Local, NaiveDateTime};
use clap::Args;
use std::path::PathBuf;

/// Record file and filter options shared by the analysis commands.
#[derive(Debug, Args)]
pub struct SourceArgs {
    /// JSON file with work-event records
    #[arg(short, long)]
    pub input: PathBuf,

    /// First day to include (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,

    /// Last day to include (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<String>,

    /// Case-insensitive text matched against operator, task, order and module
    #[arg(short, long)]
    pub search: Option<String>,

    /// Unit of the duration fields, overriding the configuration
    #[arg(long, value_enum)]
    pub unit: Option<DurationUnit>,
}

impl SourceArgs {
    /// Loads the snapshot with durations converted to seconds.
    pub fn load(&self, config: &Config) -> Result<Vec<WorkEventRecord>> {
        let unit = self.unit.unwrap_or(config.records().duration_unit);
        let records = normalize_units(load_records(&self.input)?, unit);
        msg_debug!(Message::RecordsLoaded(records.len(), self.input.display().to_string()));
        Ok(records)
    }

    pub fn filter(&self) -> Result<RecordFilter> {
        let range = DateRange::from_bounds(self.from.as_deref(), self.to.as_deref())?;
        Ok(RecordFilter::new().with_range(range).with_search(self.search.clone()))
    }
}

/// The moment to evaluate the shift at: `raw` when given, the local clock
/// otherwise.
pub fn parse_now(raw: Option<&str>) -> Result<NaiveDateTime> {
    match raw {
        Some(raw) => Ok(parse_datetime(raw).ok_or_else(|| WorktallyError::InvalidTimestamp(raw.to_string()))?),
        None => Ok(Local::now().naive_local()),
    }
}
