use super::source::{parse_now, SourceArgs};
use crate::{
    libs::{
        config::Config,
        export::{ExportData, ExportFormat, Exporter},
        messages::Message,
        normalizer::Dimension,
        report::{build_report, Drill, ReportOptions},
        summary::daily_summaries,
    },
    msg_info,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// What to export
    #[arg(value_enum, default_value = "report")]
    data: ExportData,

    /// Dimension to group by (report only)
    #[arg(short, long, value_enum, default_value = "operator")]
    by: Dimension,

    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    /// Output file; defaults to worktally_<subject>_<timestamp>.<ext>
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Include automatic drill-down rows (report only)
    #[arg(long)]
    auto_drill: bool,

    /// Include effective shift time evaluated at this moment (report only)
    #[arg(long)]
    effective_at: Option<String>,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let config = Config::read()?;
    let tasks = config.tasks();

    let records = args.source.load(&config)?;
    let selected = args.source.filter()?.apply(&records, &tasks.names);
    if selected.is_empty() {
        msg_info!(Message::NoRecordsFound);
        return Ok(());
    }

    match args.data {
        ExportData::Report => {
            let options = ReportOptions {
                drill: if args.auto_drill { Drill::Auto } else { Drill::None },
                effective_at: match args.effective_at.as_deref() {
                    Some(raw) => Some(parse_now(Some(raw))?),
                    None => None,
                },
            };
            let views = build_report(selected.iter().copied(), args.by, &options, &tasks.names, &config.shift());
            Exporter::new(args.format, args.output, &args.by.to_string()).export_report(&views)
        }
        ExportData::Summary => {
            let breakdown = daily_summaries(selected.iter().copied());
            Exporter::new(args.format, args.output, "summary").export_summary(&breakdown)
        }
    }
}
