/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Running timers are highlighted, closed ones keep the default colour.
pub fn colorize_end(value: &str, running: bool) -> String {
    if running {
        format!("{YELLOW}{value}{RESET}")
    } else {
        value.to_string()
    }
}

pub fn colorize_duration(value: &str) -> String {
    format!("{CYAN}{value}{RESET}")
}

pub fn colorize_total(value: &str) -> String {
    format!("{GREEN}{value}{RESET}")
}

/// Grey out the timestamp column of journal lines.
pub fn dim(value: &str) -> String {
    format!("{GREY}{value}{RESET}")
}
