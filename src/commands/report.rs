use super::source::{parse_now, SourceArgs};
use crate::{
    libs::{
        config::Config,
        messages::Message,
        normalizer::Dimension,
        report::{build_report, Drill, ReportOptions},
        view::View,
    },
    msg_debug, msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ReportArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Dimension to group by
    #[arg(short, long, value_enum, default_value = "operator")]
    by: Dimension,

    /// Expand every group along a second dimension
    #[arg(short, long, value_enum, conflicts_with = "auto_drill")]
    drill: Option<Dimension>,

    /// Expand only groups spanning several operators (or tasks)
    #[arg(long)]
    auto_drill: bool,

    /// Show effective shift time per group
    #[arg(short, long)]
    effective: bool,

    /// Moment to evaluate the shift at, "YYYY-MM-DD HH:MM"
    #[arg(long, requires = "effective")]
    now: Option<String>,
}

pub fn cmd(args: ReportArgs) -> Result<()> {
    let config = Config::read()?;
    let tasks = config.tasks();

    let records = args.source.load(&config)?;
    let selected = args.source.filter()?.apply(&records, &tasks.names);
    msg_debug!(Message::RecordsFiltered(selected.len(), records.len()));

    if selected.is_empty() {
        msg_info!(Message::NoRecordsFound);
        return Ok(());
    }

    let drill = match (args.drill, args.auto_drill) {
        (Some(dimension), _) => Drill::By(dimension),
        (None, true) => Drill::Auto,
        (None, false) => Drill::None,
    };
    let effective_at = if args.effective {
        Some(parse_now(args.now.as_deref())?)
    } else {
        None
    };
    let options = ReportOptions { drill, effective_at };

    let views = build_report(selected.iter().copied(), args.by, &options, &tasks.names, &config.shift());

    msg_print!(Message::ReportHeader(args.by.to_string(), views.len()), true);
    View::groups(&views)?;

    if let Some(now) = effective_at {
        msg_print!(Message::EffectiveAt(now.format("%Y-%m-%d %H:%M").to_string()), true);
        let rows: Vec<_> = views
            .iter()
            .filter_map(|view| view.effective.map(|time| (view.display_label.clone(), time)))
            .collect();
        View::effective(&rows)?;
    }

    for view in &views {
        if let Some(breakdown) = &view.breakdown {
            msg_print!(
                Message::BreakdownHeader(view.display_label.clone(), breakdown.dimension.to_string()),
                true
            );
            View::breakdown(breakdown)?;
        }
    }

    Ok(())
}
