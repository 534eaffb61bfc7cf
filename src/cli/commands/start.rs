use super::{journal, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::timer::{StartOutcome, TimerLogic};
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::formatting::format_timestamp;
use crate::utils::now_epoch;
use chrono::Local;

/// Handle the `start` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Start) {
        let mut store = open_store(cfg);

        match TimerLogic::start(&mut store, now_epoch())? {
            StartOutcome::Started(interval) => {
                let at = format_timestamp(interval.start, &Local)?;
                journal(cfg, "start", &format!("Timer started at {}", at));
                success("New timer started.");
            }
            StartOutcome::AlreadyRunning(interval) => {
                let since = format_timestamp(interval.start, &Local)?;
                info(format!("Timer is already running (since {}).", since));
            }
        }
    }

    Ok(())
}
