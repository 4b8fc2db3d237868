//! `tracing` subscriber setup.
//!
//! The filter comes from `RUST_LOG` (e.g. `RUST_LOG=worktally=debug`). Without
//! it, `WORKTALLY_DEBUG` turns on `debug` for this crate; otherwise only
//! warnings are shown so that they do not clutter table output.

use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global subscriber. Call once, from the binary.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive()));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .try_init();
}

fn default_directive() -> &'static str {
    if std::env::var("WORKTALLY_DEBUG").is_ok() {
        "worktally=debug"
    } else {
        "warn"
    }
}
