//! Terminal launch engine.
//!
//! Given a [`LaunchRequest`], the launcher validates it, detects the host
//! platform, expands the leading alias, picks a launch strategy, and runs
//! the strategy's invocations through a [`ProcessSpawner`]. It waits only
//! for the launch mechanism itself; the spawned terminal and whatever runs
//! inside it belong to the user from the moment the window exists.
//!
//! Each call is independent and stateless; concurrent launches need no
//! coordination.

pub mod escape;
pub mod spawn;
pub mod strategy;

pub use spawn::{Invocation, ProcessSpawner, SpawnOutput, SystemSpawner, Wait};

use std::path::Path;

use tracing::debug;

use crate::config::Config;
use crate::domain::{LaunchRequest, LaunchResult, Platform, TerminalKind};
use crate::error::LaunchError;

/// One-shot launcher bound to a spawner and a config.
///
/// Holds no mutable state: the same launcher can serve any number of
/// calls, and failures never require cleanup (a window either exists or
/// it does not).
pub struct Launcher<'a> {
    spawner: &'a dyn ProcessSpawner,
    config: &'a Config,
    platform: Option<Platform>,
}

impl<'a> Launcher<'a> {
    /// Launcher for the detected host platform.
    pub fn new(spawner: &'a dyn ProcessSpawner, config: &'a Config) -> Self {
        Self {
            spawner,
            config,
            platform: Platform::detect(),
        }
    }

    /// Launcher pinned to a specific platform. Lets tests exercise every
    /// dispatch path from any host.
    pub fn with_platform(
        spawner: &'a dyn ProcessSpawner,
        config: &'a Config,
        platform: Platform,
    ) -> Self {
        Self {
            spawner,
            config,
            platform: Some(platform),
        }
    }

    /// Open a new terminal window running the request's command.
    ///
    /// Never panics and never returns `Err`: every failure mode is folded
    /// into the [`LaunchResult`] so callers can branch on the error kind.
    pub fn launch(&self, request: &LaunchRequest) -> LaunchResult {
        if let Err(err) = request.validate() {
            return LaunchResult::failure(self.platform, None, &request.command, err);
        }

        let Some(platform) = self.platform else {
            return LaunchResult::failure(
                None,
                None,
                &request.command,
                LaunchError::UnsupportedPlatform(std::env::consts::OS.to_string()),
            );
        };

        let hint = match request.terminal_hint.as_deref() {
            Some(name) => match TerminalKind::parse(name) {
                Some(kind) => Some(kind),
                None => {
                    return LaunchResult::failure(
                        Some(platform),
                        None,
                        &request.command,
                        LaunchError::UnknownTerminal(name.to_string()),
                    );
                }
            },
            None => None,
        };

        // Alias expansion happens before validation and quoting so the
        // expanded flags are checked and escaped exactly once.
        let command = self.config.alias.expand(&request.command);
        if command != request.command {
            debug!(original = %request.command, expanded = %command, "expanded alias");
        }

        if request.validate_tool {
            if let Err(err) = self.validate_tool(&command) {
                return LaunchResult::failure(Some(platform), hint, &command, err);
            }
        }

        let strategy = match strategy::select_strategy(platform, hint, self.spawner) {
            Ok(kind) => kind,
            Err(err) => return LaunchResult::failure(Some(platform), hint, &command, err),
        };
        debug!(%platform, terminal = %strategy, "selected launch strategy");

        let invocations =
            strategy::build_invocations(strategy, &command, &request.working_directory);
        for invocation in &invocations {
            match self.spawner.launch(invocation, request.timeout) {
                Ok(output) if output.success => {}
                Ok(output) => {
                    let err = classify_helper_failure(invocation, &output);
                    return LaunchResult::failure(Some(platform), Some(strategy), &command, err);
                }
                Err(err) => {
                    return LaunchResult::failure(Some(platform), Some(strategy), &command, err);
                }
            }
        }

        debug!(terminal = %strategy, %command, "launched terminal");
        LaunchResult::success(platform, strategy, command)
    }

    /// Check that the command's first token resolves to something
    /// runnable: a PATH lookup for bare names, file existence for paths.
    fn validate_tool(&self, command: &str) -> Result<(), LaunchError> {
        let Some(token) = command.split_whitespace().next() else {
            return Ok(());
        };

        let found = if token.contains('/') || token.contains('\\') {
            Path::new(token).exists()
        } else {
            self.spawner.lookup(token).is_some()
        };

        if found {
            Ok(())
        } else {
            Err(LaunchError::ToolNotFound(token.to_string()))
        }
    }
}

/// Map a nonzero helper exit to a structured error.
///
/// macOS automation consent failures surface as osascript errors like
/// "Not authorized to send Apple events to Terminal. (-1743)".
fn classify_helper_failure(invocation: &Invocation, output: &SpawnOutput) -> LaunchError {
    let stderr = output.stderr.trim();
    if stderr.contains("(-1743)") || stderr.contains("Not authorized to send Apple events") {
        return LaunchError::AutomationPermissionDenied(stderr.to_string());
    }
    LaunchError::SpawnFailed {
        program: invocation.program.clone(),
        detail: if stderr.is_empty() {
            "exited with failure".to_string()
        } else {
            stderr.to_string()
        },
    }
}

/// Launch through the real system spawner.
pub fn launch(request: &LaunchRequest, config: &Config) -> LaunchResult {
    Launcher::new(&SystemSpawner, config).launch(request)
}
