//! Command-line interface.
//!
//! Each subcommand lives in its own module with an `Args` struct and a
//! `cmd` function. The analysis commands share [`source::SourceArgs`] for the
//! record file and the date/search filter.

pub mod compare;
pub mod export;
pub mod init;
pub mod rank;
pub mod report;
pub mod shift;
pub mod source;
pub mod status;
pub mod sum;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configure shift, task catalogue and record decoding")]
    Init(init::InitArgs),
    #[command(about = "Time aggregates grouped by operator, task or order", arg_required_else_help = true)]
    Report(report::ReportArgs),
    #[command(about = "Operator ranking, task distribution and order complexity", arg_required_else_help = true)]
    Rank(rank::RankArgs),
    #[command(about = "Compare the operators who worked one task", arg_required_else_help = true)]
    Compare(compare::CompareArgs),
    #[command(about = "Completion status of every module", arg_required_else_help = true)]
    Status(status::StatusArgs),
    #[command(about = "Working hours per day", arg_required_else_help = true)]
    Sum(sum::SumArgs),
    #[command(about = "Effective shift time net of the break")]
    Shift(shift::ShiftArgs),
    #[command(about = "Export a report or the daily summary to CSV, JSON or Excel", arg_required_else_help = true)]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Report(args) => report::cmd(args),
            Commands::Rank(args) => rank::cmd(args),
            Commands::Compare(args) => compare::cmd(args),
            Commands::Status(args) => status::cmd(args),
            Commands::Sum(args) => sum::cmd(args),
            Commands::Shift(args) => shift::cmd(args),
            Commands::Export(args) => export::cmd(args),
        }
    }
}
