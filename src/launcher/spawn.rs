//! Process spawning seam.
//!
//! The launcher never talks to the OS directly: every window-creation
//! side effect goes through [`ProcessSpawner`], so tests can swap in a
//! recording mock and assert on the exact invocations without opening
//! windows.

use std::io::Read;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use tracing::debug;

use crate::error::LaunchError;

/// How long to own the helper process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wait {
    /// Wait for the launch mechanism to confirm (osascript, powershell,
    /// wt). This bounds only the round-trip that creates the window.
    Exit,
    /// Fire and forget: the emulator owns its own lifetime from the
    /// moment it forks. Standard streams are nulled so the launcher keeps
    /// no handles on the child.
    Detach,
}

/// One fully resolved launch-mechanism invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    /// Payload piped to the helper's stdin (the Warp clipboard mechanism).
    pub stdin: Option<String>,
    pub wait: Wait,
}

impl Invocation {
    pub fn waited(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
            stdin: None,
            wait: Wait::Exit,
        }
    }

    pub fn detached(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
            stdin: None,
            wait: Wait::Detach,
        }
    }

    pub fn with_stdin(mut self, payload: impl Into<String>) -> Self {
        self.stdin = Some(payload.into());
        self
    }
}

/// What the launch mechanism reported back.
#[derive(Debug, Clone)]
pub struct SpawnOutput {
    pub success: bool,
    pub stderr: String,
}

impl SpawnOutput {
    pub fn ok() -> Self {
        Self {
            success: true,
            stderr: String::new(),
        }
    }
}

/// Abstraction over OS process creation.
pub trait ProcessSpawner {
    /// Run one launch-mechanism invocation. `timeout` bounds waited
    /// invocations only; detached ones return as soon as the fork
    /// succeeds.
    fn launch(
        &self,
        invocation: &Invocation,
        timeout: Option<Duration>,
    ) -> Result<SpawnOutput, LaunchError>;

    /// Resolve a program name on the search path.
    fn lookup(&self, program: &str) -> Option<PathBuf>;
}

/// The real spawner used by the binary.
pub struct SystemSpawner;

impl ProcessSpawner for SystemSpawner {
    fn launch(
        &self,
        invocation: &Invocation,
        timeout: Option<Duration>,
    ) -> Result<SpawnOutput, LaunchError> {
        debug!(program = %invocation.program, args = ?invocation.args, "spawning launch helper");

        let spawn_failed = |detail: String| LaunchError::SpawnFailed {
            program: invocation.program.clone(),
            detail,
        };

        match invocation.wait {
            Wait::Detach => {
                Command::new(&invocation.program)
                    .args(&invocation.args)
                    .stdin(Stdio::null())
                    .stdout(Stdio::null())
                    .stderr(Stdio::null())
                    .spawn()
                    .map_err(|e| spawn_failed(e.to_string()))?;
                Ok(SpawnOutput::ok())
            }
            Wait::Exit => {
                let mut command = Command::new(&invocation.program);
                command
                    .args(&invocation.args)
                    .stdout(Stdio::null())
                    .stderr(Stdio::piped());
                command.stdin(if invocation.stdin.is_some() {
                    Stdio::piped()
                } else {
                    Stdio::null()
                });

                let mut child = command.spawn().map_err(|e| spawn_failed(e.to_string()))?;

                if let Some(payload) = &invocation.stdin {
                    if let Some(mut stdin) = child.stdin.take() {
                        stdin
                            .write_all(payload.as_bytes())
                            .map_err(|e| spawn_failed(format!("writing stdin: {e}")))?;
                    }
                }

                let status = match timeout {
                    None => child.wait().map_err(|e| spawn_failed(e.to_string()))?,
                    Some(limit) => {
                        match wait_with_deadline(&mut child, limit)
                            .map_err(|e| spawn_failed(e.to_string()))?
                        {
                            Some(status) => status,
                            None => {
                                let _ = child.kill();
                                let _ = child.wait();
                                return Err(LaunchError::LaunchTimeout(limit.as_secs().max(1)));
                            }
                        }
                    }
                };

                let mut stderr = String::new();
                if let Some(mut pipe) = child.stderr.take() {
                    let _ = pipe.read_to_string(&mut stderr);
                }

                Ok(SpawnOutput {
                    success: status.success(),
                    stderr,
                })
            }
        }
    }

    fn lookup(&self, program: &str) -> Option<PathBuf> {
        which::which(program).ok()
    }
}

/// Poll `try_wait` until the child exits or the deadline passes.
/// Returns `None` on expiry, leaving the child alive for the caller.
fn wait_with_deadline(
    child: &mut std::process::Child,
    limit: Duration,
) -> std::io::Result<Option<std::process::ExitStatus>> {
    let deadline = Instant::now() + limit;
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Some(status));
        }
        if Instant::now() >= deadline {
            return Ok(None);
        }
        std::thread::sleep(Duration::from_millis(25));
    }
}
