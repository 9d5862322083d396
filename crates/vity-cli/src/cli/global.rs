use std::path::PathBuf;

use clap::ValueEnum;
use vity_core::InteractionMode;

/// Interaction mode as accepted on the command line.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum ModeArg {
    #[default]
    Do,
    Chat,
}

impl From<ModeArg> for InteractionMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Do => Self::Do,
            ModeArg::Chat => Self::Chat,
        }
    }
}

/// Flags given before the subcommand.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    /// Terminal log supplying session context.
    pub history_file: Option<PathBuf>,
    /// Chat transcript to continue and rewrite.
    pub chat_file: Option<PathBuf>,
    pub mode: ModeArg,
    pub quiet: bool,
    pub verbose: bool,
}
