//! Writing report views to CSV, JSON and Excel files.
//!
//! Two kinds of data can be exported:
//!
//! - **Report**: the groups of one dimension, with their drill-down rows when
//!   a breakdown was built
//! - **Summary**: per-day totals with grand total and daily average
//!
//! Without an explicit path the file is written to the current directory as
//! `worktally_<subject>_<YYYYMMDD_HHMMSS>.<ext>`, the subject being the
//! dimension name (`operator`, `task`, `order`) or `summary`.
//!
//! CSV and Excel show durations as `HH:MM`; JSON keeps the raw seconds.

use crate::{
    libs::{
        error::WorktallyError,
        formatter::{format_seconds, FormattedGroup},
        messages::Message,
        report::GroupView,
        summary::{DailyBreakdown, SummaryCalculator, SummaryFormatter},
    },
    msg_success,
};
use anyhow::Result;
use chrono::Local;
use rust_xlsxwriter::{Format, Workbook};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Excel,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "xlsx",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ExportData {
    #[default]
    Report,
    Summary,
}

const REPORT_COLUMNS: [&str; 17] = [
    "Parent",
    "Key",
    "Name",
    "Records",
    "Open",
    "Work",
    "Wait",
    "Inter-op",
    "Since order",
    "Until due",
    "Cycle",
    "Operators",
    "Tasks",
    "Orders",
    "Modules",
    "Per module",
    "Last event",
];

/// Columns written as numbers in Excel; keys stay text so that leading
/// zeros survive.
const COUNT_COLUMNS: [usize; 6] = [3, 4, 11, 12, 13, 14];

#[derive(Debug, Serialize, Deserialize)]
pub struct ExportSummary {
    pub days: Vec<ExportDaySum>,
    pub total_hours: String,
    pub average_hours: String,
    pub total_days: usize,
    pub undated_records: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExportDaySum {
    pub date: String,
    pub hours: String,
    pub records: usize,
    pub operators: usize,
}

impl From<&DailyBreakdown> for ExportSummary {
    fn from(breakdown: &DailyBreakdown) -> Self {
        let totals = breakdown.days.clone().calculate_totals();
        let (_, total_hours, average_hours) = totals.format_summary();
        ExportSummary {
            days: totals
                .0
                .iter()
                .map(|day| ExportDaySum {
                    date: day.date.format("%Y-%m-%d").to_string(),
                    hours: format_seconds(day.total_work),
                    records: day.record_count,
                    operators: day.operator_count,
                })
                .collect(),
            total_hours,
            average_hours,
            total_days: totals.0.len(),
            undated_records: breakdown.undated,
        }
    }
}

pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// `subject` names the exported data in the default file name.
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>, subject: &str) -> Self {
        let default_name = format!("worktally_{}_{}", subject, Local::now().format("%Y%m%d_%H%M%S"));
        let output_path =
            output_path.unwrap_or_else(|| PathBuf::from(format!("{}.{}", default_name, format.extension())));

        Self { format, output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn export_report(&self, views: &[GroupView]) -> Result<()> {
        self.check_target()?;
        match self.format {
            ExportFormat::Csv => self.export_report_csv(views)?,
            ExportFormat::Json => self.write_json(&serde_json::json!({
                "exported_at": Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
                "dimension": views.first().map(|v| v.dimension),
                "groups": views,
            }))?,
            ExportFormat::Excel => self.export_report_excel(views)?,
        }
        tracing::debug!(groups = views.len(), path = %self.output_path.display(), "report exported");
        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }

    pub fn export_summary(&self, breakdown: &DailyBreakdown) -> Result<()> {
        self.check_target()?;
        let summary = ExportSummary::from(breakdown);
        match self.format {
            ExportFormat::Csv => self.export_summary_csv(&summary)?,
            ExportFormat::Json => self.write_json(&summary)?,
            ExportFormat::Excel => self.export_summary_excel(&summary)?,
        }
        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }

    fn check_target(&self) -> Result<()> {
        match self.output_path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() && !dir.is_dir() => Err(WorktallyError::Export(format!(
                "directory {} does not exist",
                dir.display()
            ))
            .into()),
            _ => Ok(()),
        }
    }

    fn write_json<T: Serialize + ?Sized>(&self, data: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(data)?;
        File::create(&self.output_path)?.write_all(json.as_bytes())?;
        Ok(())
    }

    /// Groups and their sub-groups as rows. Sub-group rows carry their
    /// parent key in the first column and leave the count columns empty.
    fn report_rows(views: &[GroupView]) -> Vec<[String; 17]> {
        let mut rows = Vec::new();
        for view in views {
            let g = FormattedGroup::from(view);
            rows.push([
                String::new(),
                g.key,
                g.label,
                g.records.to_string(),
                g.open.to_string(),
                g.total_work,
                g.wait_before_resource,
                g.inter_operation,
                g.since_order_placed,
                g.until_due,
                g.total_cycle,
                g.operators.to_string(),
                g.tasks.to_string(),
                g.orders.to_string(),
                g.modules.to_string(),
                g.time_per_module,
                g.last_event,
            ]);

            let Some(breakdown) = &view.breakdown else {
                continue;
            };
            for sub in &breakdown.subgroups {
                rows.push([
                    view.key.clone(),
                    sub.key.clone(),
                    sub.display_label.clone(),
                    sub.record_count.to_string(),
                    String::new(),
                    format_seconds(sub.aggregate.total_work),
                    format_seconds(sub.aggregate.wait_before_resource),
                    format_seconds(sub.aggregate.inter_operation),
                    format_seconds(sub.aggregate.since_order_placed),
                    format_seconds(sub.aggregate.until_due),
                    format_seconds(sub.aggregate.total_cycle),
                    String::new(),
                    String::new(),
                    String::new(),
                    String::new(),
                    String::new(),
                    String::new(),
                ]);
            }
        }
        rows
    }

    fn export_report_csv(&self, views: &[GroupView]) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;

        wtr.write_record(REPORT_COLUMNS)?;
        for row in Self::report_rows(views) {
            wtr.write_record(&row)?;
        }

        wtr.flush()?;
        Ok(())
    }

    fn export_report_excel(&self, views: &[GroupView]) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        let header_format = Format::new().set_bold().set_background_color(rust_xlsxwriter::Color::Gray);

        for (col, title) in REPORT_COLUMNS.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *title, &header_format)?;
        }

        for (i, row) in Self::report_rows(views).iter().enumerate() {
            let row_index = i as u32 + 1;
            for (col, cell) in row.iter().enumerate() {
                match cell.parse::<f64>() {
                    Ok(number) if COUNT_COLUMNS.contains(&col) => worksheet.write_number(row_index, col as u16, number)?,
                    _ => worksheet.write_string(row_index, col as u16, cell)?,
                };
            }
        }

        worksheet.autofit();
        workbook.save(&self.output_path)?;
        Ok(())
    }

    fn export_summary_csv(&self, summary: &ExportSummary) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;

        wtr.write_record(["Date", "Hours", "Records", "Operators"])?;
        for day in &summary.days {
            wtr.write_record([day.date.clone(), day.hours.clone(), day.records.to_string(), day.operators.to_string()])?;
        }
        wtr.write_record(["", "", "", ""])?;
        wtr.write_record(["Total Hours", summary.total_hours.as_str(), "", ""])?;
        wtr.write_record(["Average Hours", summary.average_hours.as_str(), "", ""])?;
        wtr.write_record(["Total Days", summary.total_days.to_string().as_str(), "", ""])?;
        wtr.write_record(["Undated Records", summary.undated_records.to_string().as_str(), "", ""])?;

        wtr.flush()?;
        Ok(())
    }

    fn export_summary_excel(&self, summary: &ExportSummary) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        let header_format = Format::new().set_bold().set_background_color(rust_xlsxwriter::Color::Gray);

        worksheet.write_string_with_format(0, 0, "Date", &header_format)?;
        worksheet.write_string_with_format(0, 1, "Hours", &header_format)?;
        worksheet.write_string_with_format(0, 2, "Records", &header_format)?;
        worksheet.write_string_with_format(0, 3, "Operators", &header_format)?;

        let mut row = 1;
        for day in &summary.days {
            worksheet.write_string(row, 0, &day.date)?;
            worksheet.write_string(row, 1, &day.hours)?;
            worksheet.write_number(row, 2, day.records as f64)?;
            worksheet.write_number(row, 3, day.operators as f64)?;
            row += 1;
        }

        row += 1;
        worksheet.write_string(row, 0, "Total Hours")?;
        worksheet.write_string(row, 1, &summary.total_hours)?;
        row += 1;
        worksheet.write_string(row, 0, "Average Hours")?;
        worksheet.write_string(row, 1, &summary.average_hours)?;
        row += 1;
        worksheet.write_string(row, 0, "Total Days")?;
        worksheet.write_number(row, 1, summary.total_days as f64)?;
        row += 1;
        worksheet.write_string(row, 0, "Undated Records")?;
        worksheet.write_number(row, 1, summary.undated_records as f64)?;

        worksheet.autofit();
        workbook.save(&self.output_path)?;
        Ok(())
    }
}
