use super::{journal, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::timer::{StopOutcome, TimerLogic};
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::{format_duration, now_epoch};

/// Handle the `stop` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Stop) {
        let mut store = open_store(cfg);
        let now = now_epoch();

        match TimerLogic::stop(&mut store, now)? {
            StopOutcome::Stopped(interval) => {
                let duration = format_duration(interval.duration(now));
                journal(cfg, "stop", &format!("Timer stopped after {}", duration));
                success(format!("Timer stopped. Duration: {}", duration));
            }
            StopOutcome::NotRunning => info("No timer is currently running."),
        }
    }

    Ok(())
}
