pub mod config;
pub mod log;
pub mod push;
pub mod reset;
pub mod start;
pub mod status;
pub mod stop;
pub mod token;

use crate::config::Config;
use crate::store::FileStore;
use crate::store::journal::ttlog;
use crate::ui::messages::warning;

/// Store of the staging file selected by the configuration.
pub(crate) fn open_store(cfg: &Config) -> FileStore {
    FileStore::new(cfg.staging_path())
}

/// Write a journal line; failures never abort the command.
pub(crate) fn journal(cfg: &Config, operation: &str, message: &str) {
    let target = cfg.staging_path().display().to_string();
    if let Err(e) = ttlog(&Config::journal_file(), operation, &target, message) {
        warning(format!("Failed to write journal: {}", e));
    }
}
