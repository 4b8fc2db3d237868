use super::source::SourceArgs;
use crate::{
    libs::{
        config::Config,
        messages::Message,
        normalizer::{Dimension, GroupKey},
        ranking::compare_operators,
        view::View,
    },
    msg_bail_anyhow, msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct CompareArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Task code to compare operators on
    #[arg(short, long)]
    task: String,
}

pub fn cmd(args: CompareArgs) -> Result<()> {
    if args.task.trim().is_empty() {
        msg_bail_anyhow!(Message::TaskCodeRequired);
    }

    let config = Config::read()?;
    let tasks = config.tasks();

    let records = args.source.load(&config)?;
    let selected = args.source.filter()?.apply(&records, &tasks.names);

    let task = GroupKey::new(args.task.trim());
    let comparison = compare_operators(selected.iter().copied(), &task);
    if comparison.rows.is_empty() {
        msg_info!(Message::TaskNotFound(task.to_string()));
        return Ok(());
    }

    let label = tasks.names.display_label(Dimension::Task, &task);
    let title = if label == task.as_str() { label } else { format!("{} {}", task, label) };
    msg_print!(Message::ComparisonHeader(title), true);
    View::comparison(&comparison)?;

    if comparison.multi_operator {
        let operators = comparison.rows.iter().filter(|row| !row.operator.is_sentinel()).count();
        msg_info!(Message::MultiOperatorTask(operators));
    } else {
        msg_info!(Message::SingleOperatorTask);
    }

    Ok(())
}
