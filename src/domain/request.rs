//! Launch request construction and validation.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::LaunchError;

/// A single request to open a new terminal window and run a command in it.
///
/// Constructed from caller input immediately before launch, never
/// persisted. Each request is independent: the launcher keeps no state
/// between calls.
#[derive(Debug, Clone)]
pub struct LaunchRequest {
    /// The shell command line to run in the new window. Passed through to
    /// the destination shell as one logical command line; never
    /// word-split or glob-expanded by the launcher.
    pub command: String,

    /// Directory the spawned terminal's initial shell starts in. Must
    /// exist and be a directory at launch time.
    pub working_directory: PathBuf,

    /// Explicit terminal program name, overriding platform auto-detection.
    pub terminal_hint: Option<String>,

    /// Bounds the launch mechanism round-trip only, never the spawned
    /// terminal's lifetime.
    pub timeout: Option<Duration>,

    /// Check that the command's first token resolves to a runnable tool
    /// before attempting the launch.
    pub validate_tool: bool,
}

impl LaunchRequest {
    pub fn new(command: impl Into<String>, working_directory: impl Into<PathBuf>) -> Self {
        Self {
            command: command.into(),
            working_directory: working_directory.into(),
            terminal_hint: None,
            timeout: None,
            validate_tool: true,
        }
    }

    pub fn with_terminal_hint(mut self, hint: impl Into<String>) -> Self {
        self.terminal_hint = Some(hint.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn without_tool_validation(mut self) -> Self {
        self.validate_tool = false;
        self
    }

    /// Validate the request invariants before any OS-level work happens.
    pub fn validate(&self) -> Result<(), LaunchError> {
        if self.command.trim().is_empty() {
            return Err(LaunchError::InvalidCommand);
        }
        if !self.working_directory.is_dir() {
            return Err(LaunchError::WorkingDirectoryNotFound(
                self.working_directory.clone(),
            ));
        }
        Ok(())
    }
}
