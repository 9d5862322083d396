//! `vity install` and `vity reinstall`.

use anyhow::Context;
use vity_shell::{InstallOutcome, ShellError};

use super::display_path;
use crate::bootstrap;

const RELOAD_HINT: &str = "Run 'source ~/.bashrc' or start a new terminal session";

pub fn install() -> anyhow::Result<()> {
    let profile = profile_path()?;

    match vity_shell::install(&profile) {
        Ok(InstallOutcome::Installed) => {
            println!("✅ Shell integration installed!");
            println!("{RELOAD_HINT}");
        }
        Ok(InstallOutcome::AlreadyInstalled) => println!("✅ Shell integration already installed"),
        Err(ShellError::ProfileMissing(path)) => println!("❌ {} not found", display_path(&path)),
        Err(error) => return Err(error.into()),
    }
    Ok(())
}

pub fn reinstall() -> anyhow::Result<()> {
    let profile = profile_path()?;

    match vity_shell::reinstall(&profile) {
        Ok(report) => {
            println!("🔄 Reinstalling shell integration...");
            for _ in 0..report.removed_blocks {
                println!("🗑️  Removing existing shell integration...");
            }
            println!("✨ Installing fresh shell integration...");
            println!("✅ Shell integration reinstalled successfully!");
            println!("{RELOAD_HINT}");
        }
        Err(ShellError::ProfileMissing(path)) => println!("❌ {} not found", display_path(&path)),
        Err(error) => return Err(error.into()),
    }
    Ok(())
}

fn profile_path() -> anyhow::Result<std::path::PathBuf> {
    bootstrap::load_config()?
        .profile_file_path()
        .context("cannot locate shell profile: home directory unknown")
}
