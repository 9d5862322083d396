use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, ModeArg};
pub use root_commands::{Commands, ConfigArgs, PromptArgs};

const AFTER_HELP: &str = "\
Examples:
  vity do \"find all python files\"
  vity chat \"explain this error\"
  vity record
  vity install";

/// Top-level CLI parser for the `vity` binary.
#[derive(Debug, Parser)]
#[command(
    name = "vity",
    version,
    about = "Vity - AI terminal assistant",
    after_help = AFTER_HELP
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Terminal session log to use as context
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    pub history_file: Option<PathBuf>,

    /// Chat transcript to continue and save
    #[arg(short = 'c', long = "chat", value_name = "PATH")]
    pub chat_file: Option<PathBuf>,

    /// Interaction mode (the subcommand takes precedence)
    #[arg(short, long, value_enum, default_value = "do")]
    pub mode: ModeArg,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            history_file: self.history_file.clone(),
            chat_file: self.chat_file.clone(),
            mode: self.mode,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}
