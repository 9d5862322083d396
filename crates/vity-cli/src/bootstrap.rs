use std::io::{BufRead, Write};

use anyhow::Context;
use vity_config::{ApiKeyFile, ConfigError, VityConfig, resolve_api_key};

pub fn load_config() -> anyhow::Result<VityConfig> {
    VityConfig::load().map_err(anyhow::Error::from)
}

/// Resolve the API key, running first-run setup on the terminal if nothing
/// is configured yet.
pub fn ensure_api_key() -> anyhow::Result<String> {
    let file = ApiKeyFile::default_location()?;
    match resolve_api_key(&file) {
        Ok(key) => Ok(key),
        Err(ConfigError::MissingApiKey) => {
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            first_run_setup(&file, &mut stdin.lock(), &mut stdout)
        }
        Err(error) => Err(error.into()),
    }
}

/// Prompt for a key and store it in `file`. An empty answer is fatal.
fn first_run_setup<R: BufRead, W: Write>(
    file: &ApiKeyFile,
    input: &mut R,
    output: &mut W,
) -> anyhow::Result<String> {
    writeln!(output, "🤖 Welcome to Vity! Let's set up your OpenAI API key.")?;
    writeln!(output, "You can get one at https://platform.openai.com/api-keys")?;
    write!(output, "Enter your OpenAI API key: ")?;
    output.flush()?;

    let mut answer = String::new();
    input
        .read_line(&mut answer)
        .context("failed to read API key from stdin")?;
    let key = answer.trim();
    if key.is_empty() {
        writeln!(output, "❌ API key is required")?;
        return Err(ConfigError::MissingApiKey.into());
    }

    file.write(key)?;
    writeln!(output, "✅ Configuration saved to {}", file.path().display())?;
    tracing::info!(path = %file.path().display(), "api key stored");
    Ok(key.to_string())
}
