use super::source::parse_now;
use crate::{
    libs::{
        config::Config,
        effective::{compute_effective, EffectiveTime, ShiftConfig},
        formatter::format_seconds,
        messages::Message,
        view::View,
    },
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;
use std::io::Write;
use std::thread;
use std::time::Duration;

#[derive(Debug, Args)]
pub struct ShiftArgs {
    /// Moment to evaluate the shift at, "YYYY-MM-DD HH:MM"
    #[arg(short, long, conflicts_with = "watch")]
    now: Option<String>,

    /// Seconds of active work so far
    #[arg(short, long, default_value_t = 0)]
    active: u64,

    /// Refresh the figures every second until interrupted
    #[arg(short, long)]
    watch: bool,
}

pub fn cmd(args: ShiftArgs) -> Result<()> {
    let shift = Config::read()?.shift();

    if args.watch {
        return watch(&shift, args.active);
    }

    let now = parse_now(args.now.as_deref())?;
    let time = compute_effective(now, &shift, args.active);

    msg_print!(Message::ShiftHeader(now.format("%Y-%m-%d %H:%M").to_string()), true);
    View::effective(&[(String::new(), time)])?;
    print_phase(&shift, &time);

    Ok(())
}

fn watch(shift: &ShiftConfig, active: u64) -> Result<()> {
    let mut stdout = std::io::stdout();
    loop {
        let now = parse_now(None)?;
        let time = compute_effective(now, shift, active);
        write!(
            stdout,
            "\r{}  elapsed {}  break {}  effective {}  utilization {}%   ",
            now.format("%H:%M:%S"),
            format_seconds(time.raw_elapsed),
            format_seconds(time.break_overlap),
            format_seconds(time.effective_elapsed),
            time.utilization_percent
        )?;
        stdout.flush()?;
        thread::sleep(Duration::from_secs(1));
    }
}

fn print_phase(shift: &ShiftConfig, time: &EffectiveTime) {
    if time.raw_elapsed == 0 {
        msg_info!(Message::ShiftBeforeStart);
    } else if time.raw_elapsed >= shift.length_seconds {
        msg_info!(Message::ShiftFinished);
    }
}
