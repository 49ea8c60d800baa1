//! Structured launch failures.

use std::path::PathBuf;

/// Error type for a failed launch attempt.
///
/// Every variant is recoverable from the caller's perspective: no launch
/// failure corrupts process state, and there are no partial launches to
/// clean up. Scripted callers branch on [`kind`](LaunchError::kind) or the
/// `error_kind` field of the JSON output instead of parsing messages.
#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    #[error("unsupported platform: {0}")]
    UnsupportedPlatform(String),

    #[error("no terminal emulator found (tried: {})", .tried.join(", "))]
    NoTerminalEmulatorFound { tried: Vec<String> },

    #[error("working directory does not exist: {}", .0.display())]
    WorkingDirectoryNotFound(PathBuf),

    #[error("automation permission denied: {0}")]
    AutomationPermissionDenied(String),

    #[error("launch did not complete within {0} second(s)")]
    LaunchTimeout(u64),

    #[error("command is empty")]
    InvalidCommand,

    #[error("unrecognized terminal: {0}")]
    UnknownTerminal(String),

    #[error("tool not found: {0}")]
    ToolNotFound(String),

    #[error("failed to launch {program}: {detail}")]
    SpawnFailed { program: String, detail: String },
}

impl LaunchError {
    /// Stable machine-readable name for this error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            LaunchError::UnsupportedPlatform(_) => "unsupported_platform",
            LaunchError::NoTerminalEmulatorFound { .. } => "no_terminal_emulator_found",
            LaunchError::WorkingDirectoryNotFound(_) => "working_directory_not_found",
            LaunchError::AutomationPermissionDenied(_) => "automation_permission_denied",
            LaunchError::LaunchTimeout(_) => "launch_timeout",
            LaunchError::InvalidCommand => "invalid_command",
            LaunchError::UnknownTerminal(_) => "unknown_terminal",
            LaunchError::ToolNotFound(_) => "tool_not_found",
            LaunchError::SpawnFailed { .. } => "spawn_failed",
        }
    }

    /// Whether this failure stems from caller input rather than the host
    /// (maps to exit code 2 on the CLI surface).
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            LaunchError::InvalidCommand | LaunchError::WorkingDirectoryNotFound(_)
        )
    }
}
