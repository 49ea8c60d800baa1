//! General settings types

use serde::{Deserialize, Serialize};

/// General settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Default terminal hint. Overridden by the `LAUNCH_TERMINAL_APP`
    /// environment variable, which is overridden by `--terminal`.
    #[serde(default)]
    pub terminal: Option<String>,

    /// Check that the command's first token resolves before launching.
    /// `--no-validate` turns this off for a single call.
    #[serde(default = "default_validate_tools")]
    pub validate_tools: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            terminal: None,
            validate_tools: default_validate_tools(),
        }
    }
}

fn default_validate_tools() -> bool {
    true
}
