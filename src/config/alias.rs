//! Alias configuration types

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Built-in aliases, applied when the config file does not shadow them.
///
/// `claude` expands to the local install plus the toolkit plugin dir so a
/// bare `claude --model haiku` launched from a skill gets the full
/// invocation.
static BUILTIN_ALIASES: Lazy<HashMap<String, String>> = Lazy::new(|| {
    let home = dirs::home_dir().unwrap_or_else(|| std::path::PathBuf::from("~"));
    let home = home.display();
    HashMap::from([(
        "claude".to_string(),
        format!("{home}/.claude/local/claude --plugin-dir {home}/.claude/plugins/claude-code-toolkit"),
    )])
});

/// Alias configuration for command shortcuts
///
/// Maps a command's leading token to a fuller invocation (an absolute
/// path, fixed flags). Expansion is a pure string rewrite that happens
/// before any quoting, so expanded flags are never double-escaped.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AliasConfig {
    /// Command aliases: leading token -> replacement
    #[serde(flatten)]
    pub command: HashMap<String, String>,
}

impl AliasConfig {
    /// The built-in table with user-defined entries shadowing it.
    pub fn with_builtins(mut self) -> Self {
        for (token, replacement) in BUILTIN_ALIASES.iter() {
            self.command
                .entry(token.clone())
                .or_insert_with(|| replacement.clone());
        }
        self
    }

    /// Rewrite the command's leading token if the table recognizes it.
    ///
    /// Applied exactly once per launch; insensitive to surrounding
    /// whitespace in the input.
    pub fn expand(&self, command: &str) -> String {
        let trimmed = command.trim();
        let (head, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim_start()),
            None => (trimmed, ""),
        };

        match self.command.get(head) {
            Some(replacement) if rest.is_empty() => replacement.clone(),
            Some(replacement) => format!("{replacement} {rest}"),
            None => trimmed.to_string(),
        }
    }
}
