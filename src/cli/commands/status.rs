use super::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::timer::{IntervalStatus, StatusReport, TimerLogic};
use crate::errors::AppResult;
use crate::ui::messages::{info, timer};
use crate::utils::colors::{colorize_duration, colorize_end, colorize_total};
use crate::utils::formatting::{bold, format_timestamp};
use crate::utils::{format_duration, now_epoch};
use chrono::Local;

const RUNNING: &str = "Currently Running";

fn describe(entry: &IntervalStatus) -> AppResult<String> {
    let start = format_timestamp(entry.start, &Local)?;
    let end = match entry.end {
        Some(end) => format_timestamp(end, &Local)?,
        None => RUNNING.to_string(),
    };

    Ok(format!(
        "Start: {}, End: {}, Duration: {}",
        start,
        colorize_end(&end, entry.is_running()),
        colorize_duration(&format_duration(entry.duration))
    ))
}

/// Handle the `status` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { all } = cmd {
        let store = open_store(cfg);

        match TimerLogic::status(&store, *all, now_epoch())? {
            StatusReport::NoTimer => info("No timer started."),
            StatusReport::Last(entry) => {
                timer(format!("Last timer: {}", describe(&entry)?));
            }
            StatusReport::All { entries, total } => {
                for entry in &entries {
                    timer(format!("Timer {}: {}", entry.index, describe(entry)?));
                }
                println!();
                println!(
                    "{} {}.",
                    bold("Total time worked:"),
                    colorize_total(&format_duration(total))
                );
            }
        }
    }

    Ok(())
}
