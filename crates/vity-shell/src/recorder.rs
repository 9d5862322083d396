//! Recording session state machine.
//!
//! ```text
//! Idle --start--> Recording --capture exits--> Idle
//! ```
//!
//! Session markers are exported only into the capture subprocess's
//! environment. They disappear with it, and the invoking shell's prompt is
//! never modified, so nothing needs undoing on the way back to `Idle`.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Child, Command};

use chrono::{DateTime, Local};
use serde::Serialize;
use vity_core::{Session, SessionState};

use crate::error::ShellError;

const LOG_DIR: &str = "logs";
const CHAT_DIR: &str = "chat";

/// External terminal-capture program. The log path is appended as the final
/// argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureCommand {
    program: String,
    args: Vec<String>,
}

impl CaptureCommand {
    #[must_use]
    pub const fn new(program: String, args: Vec<String>) -> Self {
        Self { program, args }
    }

    /// `script -f <log>`: flush after every write so the log is readable
    /// mid-session.
    #[must_use]
    pub fn script() -> Self {
        Self::new("script".to_string(), vec!["-f".to_string()])
    }

    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    fn command(&self, log_path: &Path) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args).arg(log_path);
        command
    }
}

impl Default for CaptureCommand {
    fn default() -> Self {
        Self::script()
    }
}

/// Timestamped log/chat pair for one session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionPaths {
    pub log: PathBuf,
    pub chat: PathBuf,
}

impl SessionPaths {
    /// `{data_dir}/logs/{stamp}-{pid}.log` and `{data_dir}/chat/{stamp}-{pid}.json`,
    /// creating both directories.
    ///
    /// # Errors
    ///
    /// Returns [`ShellError::Io`] if a directory cannot be created.
    pub fn allocate(data_dir: &Path, now: DateTime<Local>, pid: u32) -> Result<Self, ShellError> {
        let log_dir = data_dir.join(LOG_DIR);
        let chat_dir = data_dir.join(CHAT_DIR);
        fs::create_dir_all(&log_dir)?;
        fs::create_dir_all(&chat_dir)?;

        let stem = format!("{}-{pid}", now.format("%Y%m%d-%H%M%S"));
        Ok(Self {
            log: log_dir.join(format!("{stem}.log")),
            chat: chat_dir.join(format!("{stem}.json")),
        })
    }
}

/// Outcome of a finished session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordingSummary {
    pub paths: SessionPaths,
    /// Exit code of the capture subprocess, `None` if killed by a signal.
    pub exit_code: Option<i32>,
    /// Prompt in effect before the session.
    pub restored_prompt: Option<String>,
}

#[derive(Debug)]
pub struct SessionRecorder {
    data_dir: PathBuf,
    capture: CaptureCommand,
    session: Session,
    child: Option<Child>,
}

impl SessionRecorder {
    #[must_use]
    pub fn new(data_dir: PathBuf, capture: CaptureCommand) -> Self {
        Self {
            data_dir,
            capture,
            session: Session::idle(),
            child: None,
        }
    }

    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.session.state()
    }

    /// `Idle -> Recording`: allocate paths and launch the capture subprocess
    /// with the session markers in its environment.
    ///
    /// If the subprocess cannot be spawned the recorder stays `Idle`.
    ///
    /// # Errors
    ///
    /// Returns [`ShellError::AlreadyRecording`] when a session is active and
    /// [`ShellError::CaptureSpawn`] when the capture program fails to start.
    pub fn start(&mut self, saved_prompt: Option<String>) -> Result<&Session, ShellError> {
        if let Some(log) = &self.session.active_log_path {
            return Err(ShellError::AlreadyRecording(log.clone()));
        }

        let paths = SessionPaths::allocate(&self.data_dir, Local::now(), std::process::id())?;
        let candidate = Session::recording(paths.log.clone(), paths.chat, saved_prompt);

        let mut command = self.capture.command(&paths.log);
        for (key, value) in candidate.markers() {
            command.env(key, value);
        }
        let child = command.spawn().map_err(|source| ShellError::CaptureSpawn {
            program: self.capture.program.clone(),
            source,
        })?;

        tracing::debug!(
            log = %paths.log.display(),
            pid = child.id(),
            "recording session started"
        );
        self.session = candidate;
        self.child = Some(child);
        Ok(&self.session)
    }

    /// Block until the capture subprocess exits, then return to `Idle`.
    ///
    /// # Errors
    ///
    /// Returns [`ShellError::NotRecording`] when no session is active and
    /// [`ShellError::Io`] if waiting on the subprocess fails. The recorder is
    /// `Idle` afterwards either way.
    pub fn wait(&mut self) -> Result<RecordingSummary, ShellError> {
        let mut child = self.child.take().ok_or(ShellError::NotRecording)?;
        let status = child.wait();
        let ended = std::mem::take(&mut self.session);
        let status = status?;

        let (Some(log), Some(chat)) = (ended.active_log_path, ended.active_chat_path) else {
            return Err(ShellError::NotRecording);
        };
        tracing::debug!(log = %log.display(), ?status, "recording session ended");
        Ok(RecordingSummary {
            paths: SessionPaths { log, chat },
            exit_code: status.code(),
            restored_prompt: ended.saved_prompt,
        })
    }

    /// Run a whole session: start, block for its lifetime, stop.
    ///
    /// # Errors
    ///
    /// See [`start`](Self::start) and [`wait`](Self::wait).
    pub fn record(&mut self, saved_prompt: Option<String>) -> Result<RecordingSummary, ShellError> {
        self.start(saved_prompt)?;
        self.wait()
    }
}
