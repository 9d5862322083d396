//! `vity status`.

use vity_core::{Session, SessionState};

pub fn handle() -> anyhow::Result<()> {
    let session = super::session_from_env();
    for line in describe(&session) {
        println!("{line}");
    }
    Ok(())
}

fn describe(session: &Session) -> Vec<String> {
    match (session.state(), &session.active_log_path) {
        (SessionState::Recording, Some(log)) => {
            let mut lines = vec![
                "🔴 Recording active:".to_string(),
                format!("  📝 Terminal log: {}", log.display()),
            ];
            if let Some(chat) = &session.active_chat_path {
                lines.push(format!("  💬 Chat history: {}", chat.display()));
            }
            lines
        }
        _ => vec!["⚫ No active recording".to_string()],
    }
}
