//! Headless replay runner (default binary).
//!
//! Reads a script of engine actions from stdin and prints JSON observations
//! to stdout. Logging goes to stderr and is controlled by `RUST_LOG`.

use std::io;

use anyhow::Result;

use tetris_rules::replay::{self, ReplayConfig};

fn main() -> Result<()> {
    env_logger::init();

    let config = ReplayConfig::from_env()?;
    let stdin = io::stdin();
    let stdout = io::stdout();

    let summary = replay::run_with_config(&config, stdin.lock(), stdout.lock())?;
    log::debug!(
        "final score {} after {} steps",
        summary.last.player.score,
        summary.steps
    );
    Ok(())
}
