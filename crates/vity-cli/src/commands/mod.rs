mod config;
mod generate;
mod record;
mod shell;
mod status;

use std::path::Path;

use vity_core::{InteractionMode, Session};

use crate::cli::{Commands, GlobalFlags};

/// Route a parsed command to its handler. Only handlers that use settings
/// load them, so `status` and `config` keep working with a broken config.
pub async fn dispatch(command: Commands, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Do(args) => generate::handle(InteractionMode::Do, &args, flags).await,
        Commands::Chat(args) => generate::handle(InteractionMode::Chat, &args, flags).await,
        Commands::Install => shell::install(),
        Commands::Reinstall => shell::reinstall(),
        Commands::Config(args) => config::handle(&args),
        Commands::Record => record::handle(),
        Commands::Status => status::handle(),
    }
}

/// Session markers from the process environment. Entries whose name is not
/// UTF-8 cannot be markers and are skipped; values are decoded lossily.
fn session_from_env() -> Session {
    Session::from_markers(std::env::vars_os().filter_map(|(key, value)| {
        let key = key.into_string().ok()?;
        Some((key, value.to_string_lossy().into_owned()))
    }))
}

/// `~/...` form of a path under the home directory, for messages.
fn display_path(path: &Path) -> String {
    dirs::home_dir()
        .and_then(|home| path.strip_prefix(home).ok().map(Path::to_path_buf))
        .map_or_else(
            || path.display().to_string(),
            |relative| format!("~/{}", relative.display()),
        )
}
