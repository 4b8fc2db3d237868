use super::source::SourceArgs;
use crate::{
    libs::{
        config::Config,
        messages::Message,
        status::{load_module_payloads, module_progress, ModuleProgress},
        view::View,
    },
    msg_debug, msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct StatusArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// The input holds module payloads; statuses come from their per-task
    /// time fields instead of from work events
    #[arg(short, long, conflicts_with_all = ["from", "to", "search", "unit"])]
    modules: bool,
}

pub fn cmd(args: StatusArgs) -> Result<()> {
    let config = Config::read()?;
    let tasks = config.tasks();

    let progress: Vec<ModuleProgress> = if args.modules {
        let path = &args.source.input;
        let prefix = config.records().module_field_prefix;
        let snapshots = load_module_payloads(path, &prefix)?;
        msg_debug!(Message::ModulePayloadsLoaded(snapshots.len(), path.display().to_string()));
        snapshots
            .into_iter()
            .map(|snapshot| snapshot.into_progress(&tasks.expected))
            .collect()
    } else {
        let records = args.source.load(&config)?;
        let selected = args.source.filter()?.apply(&records, &tasks.names);
        module_progress(selected.iter().copied(), &tasks.expected)
    };

    if progress.is_empty() {
        msg_info!(Message::NoRecordsFound);
        return Ok(());
    }

    msg_print!(Message::StatusHeader, true);
    View::modules(&progress, &tasks.expected, &tasks.names)?;

    Ok(())
}
