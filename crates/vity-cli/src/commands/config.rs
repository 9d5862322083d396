//! `vity config`.

use vity_config::ApiKeyFile;

use crate::cli::ConfigArgs;

pub fn handle(args: &ConfigArgs) -> anyhow::Result<()> {
    let file = ApiKeyFile::default_location()?;
    let lines = if args.reset {
        reset(&file)?
    } else {
        describe(&file)
    };
    for line in lines {
        println!("{line}");
    }
    Ok(())
}

fn describe(file: &ApiKeyFile) -> Vec<String> {
    if file.exists() {
        vec![
            format!("📁 Config file: {}", file.path().display()),
            "🔑 API key configured".to_string(),
        ]
    } else {
        vec!["❌ No configuration found".to_string()]
    }
}

fn reset(file: &ApiKeyFile) -> anyhow::Result<Vec<String>> {
    let line = if file.remove()? {
        "✅ Configuration reset"
    } else {
        "ℹ️  No configuration found"
    };
    Ok(vec![line.to_string()])
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn describe_and_reset_follow_key_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = ApiKeyFile::new(dir.path().join(".env"));

        assert_eq!(describe(&file), vec!["❌ No configuration found"]);
        assert_eq!(reset(&file).unwrap(), vec!["ℹ️  No configuration found"]);

        file.write("sk-test").unwrap();
        let shown = describe(&file);
        assert_eq!(shown.len(), 2);
        assert!(shown[0].starts_with("📁 Config file: "));
        assert_eq!(shown[1], "🔑 API key configured");

        assert_eq!(reset(&file).unwrap(), vec!["✅ Configuration reset"]);
        assert!(!file.exists());
    }
}
