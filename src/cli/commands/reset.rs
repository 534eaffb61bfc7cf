use super::{journal, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::timer::TimerLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `reset` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Reset) {
        let mut store = open_store(cfg);
        TimerLogic::reset(&mut store)?;
        journal(cfg, "reset", "Timer has been reset");
        success("Timer has been reset.");
    }

    Ok(())
}
