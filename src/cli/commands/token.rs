use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::sink::gateway::fetch_user_token;
use crate::ui::messages::{success, warning};
use crate::utils::clipboard::copy_to_clipboard;

/// Handle the hidden `token` admin command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Token { email } = cmd {
        let (base_url, function_key) = cfg.token_settings()?;
        let token = fetch_user_token(&base_url, &function_key, email)?;

        match copy_to_clipboard(&token) {
            Some(tool) => success(format!(
                "The token has been copied to the clipboard (via {}).",
                tool
            )),
            None => {
                warning("No clipboard tool available, printing the token instead:");
                println!("{}", token);
            }
        }
    }

    Ok(())
}
