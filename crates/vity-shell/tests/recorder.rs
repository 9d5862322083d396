//! Session recorder against real subprocesses.
#![cfg(unix)]

use std::fs;

use pretty_assertions::assert_eq;
use vity_core::SessionState;
use vity_shell::{CaptureCommand, SessionRecorder, ShellError};

fn shell_capture(script: &str) -> CaptureCommand {
    // The log path is appended last and becomes `$0` inside the script.
    CaptureCommand::new("sh".to_string(), vec!["-c".to_string(), script.to_string()])
}

#[test]
fn markers_reach_the_capture_subprocess() {
    let dir = tempfile::tempdir().unwrap();
    let mut recorder = SessionRecorder::new(
        dir.path().to_path_buf(),
        shell_capture(
            r#"printf '%s|%s|%s|%s' "$VITY_ACTIVE_LOG" "$VITY_ACTIVE_CHAT" "$VITY_RECORDING" "$VITY_OLD_PS1" > "$0""#,
        ),
    );

    let summary = recorder.record(Some("old$ ".to_string())).unwrap();

    let written = fs::read_to_string(&summary.paths.log).unwrap();
    assert_eq!(
        written,
        format!(
            "{}|{}|🔴|old$ ",
            summary.paths.log.display(),
            summary.paths.chat.display()
        )
    );
    assert_eq!(summary.exit_code, Some(0));
    assert_eq!(summary.restored_prompt.as_deref(), Some("old$ "));
    assert_eq!(recorder.state(), SessionState::Idle);
}

#[test]
fn state_is_recording_until_capture_exits() {
    let dir = tempfile::tempdir().unwrap();
    let mut recorder = SessionRecorder::new(dir.path().to_path_buf(), shell_capture("exit 3"));

    let session = recorder.start(None).unwrap();
    assert!(session.recording);
    let log = session.active_log_path.clone().unwrap();
    assert!(log.starts_with(dir.path().join("logs")));
    assert_eq!(recorder.state(), SessionState::Recording);

    let summary = recorder.wait().unwrap();
    assert_eq!(summary.paths.log, log);
    assert_eq!(summary.exit_code, Some(3));
    assert_eq!(recorder.state(), SessionState::Idle);
    assert!(recorder.session().markers().is_empty());
}

#[test]
fn nested_start_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let mut recorder = SessionRecorder::new(dir.path().to_path_buf(), shell_capture("exit 0"));

    recorder.start(None).unwrap();
    assert!(matches!(
        recorder.start(None),
        Err(ShellError::AlreadyRecording(_))
    ));
    recorder.wait().unwrap();
}

#[test]
fn spawn_failure_never_enters_recording() {
    let dir = tempfile::tempdir().unwrap();
    let mut recorder = SessionRecorder::new(
        dir.path().to_path_buf(),
        CaptureCommand::new("/nonexistent/vity-capture".to_string(), Vec::new()),
    );

    let result = recorder.start(Some("$ ".to_string()));

    assert!(matches!(result, Err(ShellError::CaptureSpawn { .. })));
    assert_eq!(recorder.state(), SessionState::Idle);
    assert!(recorder.session().active_log_path.is_none());
    assert!(recorder.session().markers().is_empty());
}
