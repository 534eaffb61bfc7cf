use super::{journal, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::push::{PushLogic, PushOutcome};
use crate::errors::{AppError, AppResult};
use crate::sink;
use crate::ui::messages::{block, info, success, warning};
use crate::utils::now_epoch;

/// Handle the `push` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Push { message } = cmd {
        // credentials are checked before the staging file is even read
        let sink = sink::from_config(cfg)?;
        let mut store = open_store(cfg);

        match PushLogic::apply(&mut store, sink.as_ref(), message, now_epoch()) {
            Ok(PushOutcome::NothingToPush) => info("No timers found to push."),
            Ok(PushOutcome::Pushed {
                records,
                receipt,
                closed_running,
            }) => {
                if closed_running {
                    info("The running timer was stopped for this push.");
                }
                info(format!("Response from {}:", sink.name()));
                for body in &receipt.responses {
                    block(body);
                }
                journal(
                    cfg,
                    "push",
                    &format!("Pushed {} timer(s) to {}", records.len(), sink.name()),
                );
                success("All timers pushed and reset.");
            }
            Err(e) if e.is_remote() => {
                journal(cfg, "push_failed", &e.to_string());
                warning("Local timers were kept. Run 'plog push' again to retry.");
                if let AppError::PartialSubmission { accepted, .. } = &e {
                    warning(format!(
                        "{} entr{} already accepted remotely will be sent again on retry.",
                        accepted,
                        if *accepted == 1 { "y" } else { "ies" }
                    ));
                }
                return Err(e);
            }
            Err(e) => return Err(e),
        }
    }

    Ok(())
}
