use super::source::SourceArgs;
use crate::{
    libs::{
        config::Config,
        grouping::group,
        messages::Message,
        normalizer::Dimension,
        ranking::{rank_operators, rank_order_complexity, task_distribution},
        view::View,
    },
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct RankArgs {
    #[command(flatten)]
    source: SourceArgs,
}

pub fn cmd(args: RankArgs) -> Result<()> {
    let config = Config::read()?;
    let tasks = config.tasks();

    let records = args.source.load(&config)?;
    let selected = args.source.filter()?.apply(&records, &tasks.names);
    if selected.is_empty() {
        msg_info!(Message::NoRecordsFound);
        return Ok(());
    }

    let operators = group(selected.iter().copied(), Dimension::Operator);
    msg_print!(Message::RankingHeader, true);
    View::ranking(&rank_operators(&operators))?;

    msg_print!(Message::DistributionHeader, true);
    View::distribution(&task_distribution(selected.iter().copied(), &tasks.names))?;

    let orders = group(selected.iter().copied(), Dimension::Order);
    msg_print!(Message::ComplexityHeader, true);
    View::complexity(&rank_order_complexity(&orders))?;

    Ok(())
}
