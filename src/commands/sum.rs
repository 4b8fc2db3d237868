use super::source::SourceArgs;
use crate::{
    libs::{
        config::Config,
        messages::Message,
        summary::{daily_summaries, SummaryCalculator, SummaryFormatter},
        view::View,
    },
    msg_info, msg_print, msg_warning,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct SumArgs {
    #[command(flatten)]
    source: SourceArgs,
}

pub fn cmd(args: SumArgs) -> Result<()> {
    let config = Config::read()?;
    let tasks = config.tasks();

    let records = args.source.load(&config)?;
    let selected = args.source.filter()?.apply(&records, &tasks.names);

    let breakdown = daily_summaries(selected.iter().copied());
    if breakdown.days.is_empty() {
        msg_info!(Message::NoRecordsFound);
        return Ok(());
    }

    let period = match (breakdown.days.first(), breakdown.days.last()) {
        (Some(first), Some(last)) if first.date != last.date => {
            format!("{} - {}", first.date.format("%d.%m.%Y"), last.date.format("%d.%m.%Y"))
        }
        (Some(first), _) => first.date.format("%d.%m.%Y").to_string(),
        _ => String::new(),
    };
    msg_print!(Message::SummaryHeader(period), true);

    let summary = breakdown.days.calculate_totals().format_summary();
    View::sum(&summary)?;

    if breakdown.undated > 0 {
        msg_warning!(Message::UndatedRecords(breakdown.undated));
    }

    Ok(())
}
