//! Launch result reporting.

use serde_json::json;

use crate::domain::{Platform, TerminalKind};
use crate::error::LaunchError;

/// Outcome of a single launch attempt.
///
/// Produced once per attempt and immutable afterwards. Failures carry the
/// structured [`LaunchError`] so library callers can branch on the kind
/// without parsing messages.
#[derive(Debug)]
pub struct LaunchResult {
    pub succeeded: bool,
    /// Detected host platform, if detection got that far.
    pub platform: Option<Platform>,
    /// The strategy that was (or would have been) used.
    pub terminal: Option<TerminalKind>,
    /// The alias-expanded command line handed to the new window.
    pub command: String,
    pub error: Option<LaunchError>,
}

impl LaunchResult {
    pub fn success(platform: Platform, terminal: TerminalKind, command: impl Into<String>) -> Self {
        Self {
            succeeded: true,
            platform: Some(platform),
            terminal: Some(terminal),
            command: command.into(),
            error: None,
        }
    }

    pub fn failure(
        platform: Option<Platform>,
        terminal: Option<TerminalKind>,
        command: impl Into<String>,
        error: LaunchError,
    ) -> Self {
        Self {
            succeeded: false,
            platform,
            terminal,
            command: command.into(),
            error: Some(error),
        }
    }

    /// Machine-readable name of the failure kind, if any.
    pub fn error_kind(&self) -> Option<&'static str> {
        self.error.as_ref().map(|e| e.kind())
    }

    /// Structured form for `--json` output.
    pub fn to_json(&self) -> serde_json::Value {
        json!({
            "succeeded": self.succeeded,
            "platform": self.platform.map(|p| p.as_str()),
            "terminal": self.terminal.map(|t| t.as_str()),
            "command": self.command,
            "error": self.error.as_ref().map(|e| e.to_string()),
            "error_kind": self.error_kind(),
        })
    }
}
