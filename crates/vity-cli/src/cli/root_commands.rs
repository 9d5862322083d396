use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Generate a shell command for a task.
    Do(PromptArgs),
    /// Ask a question about your terminal session.
    Chat(PromptArgs),
    /// Install the shell integration into ~/.bashrc.
    Install,
    /// Remove any existing shell integration and install a fresh one.
    Reinstall,
    /// Show or reset the API key configuration.
    Config(ConfigArgs),
    /// Record the terminal session in a subshell for contextual help.
    Record,
    /// Show whether a recording session is active.
    Status,
}

#[derive(Clone, Debug, Args)]
pub struct PromptArgs {
    /// What you want done or want to know.
    #[arg(
        required = true,
        num_args = 1..,
        trailing_var_arg = true,
        allow_hyphen_values = true,
        value_name = "PROMPT"
    )]
    pub prompt: Vec<String>,
}

impl PromptArgs {
    /// Words joined with single spaces.
    #[must_use]
    pub fn text(&self) -> String {
        self.prompt.join(" ")
    }
}

#[derive(Clone, Debug, Args)]
pub struct ConfigArgs {
    /// Delete the stored API key.
    #[arg(long)]
    pub reset: bool,
}
