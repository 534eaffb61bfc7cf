use clap::{Parser, Subcommand};

/// Command-line interface definition for plog
#[derive(Parser)]
#[command(
    name = "plog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Start, stop and push your daily work logs.",
    long_about = None
)]
pub struct Cli {
    /// Override the staging file path (default: ./plog.staging)
    #[arg(global = true, long = "staging", value_name = "FILE")]
    pub staging: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start a new work timer, or do nothing if a timer is already running
    Start,

    /// Stop the current work timer
    Stop,

    /// Check the status of the current timer or show total duration for all timers
    Status {
        #[arg(short = 'a', long = "all", help = "Show the total duration for all timers")]
        all: bool,
    },

    /// Push all work logs to the HR API and reset the timer
    Push {
        #[arg(
            short = 'm',
            long = "message",
            default_value = "",
            help = "Description of the work performed"
        )]
        message: String,
    },

    /// Reset the timer completely
    Reset,

    /// Get personalized plog API token (admin feature)
    #[command(hide = true)]
    Token {
        #[arg(
            short = 'e',
            long = "email",
            default_value = "",
            help = "Get a personalized token for a user identified by email"
        )]
        email: String,
    },

    /// Show or edit the configuration file
    Config {
        #[arg(long = "print", help = "Print the effective configuration (secrets masked)")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use (vim, nano, or custom path)")]
        editor: Option<String>,
    },

    /// Print the internal journal of timer operations
    Log {
        #[arg(long = "print", help = "Print the journal entries")]
        print: bool,
    },
}
