//! Shared test utilities for launch flow tests

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use launch_terminal::error::LaunchError;
use launch_terminal::launcher::{Invocation, ProcessSpawner, SpawnOutput};

/// Mock launch backend: records every invocation instead of creating
/// windows, and resolves PATH lookups from a fixed table.
pub struct RecordingSpawner {
    invocations: Mutex<Vec<Invocation>>,
    path: HashMap<String, PathBuf>,
    helper_output: Mutex<Option<SpawnOutput>>,
}

impl RecordingSpawner {
    /// A spawner whose search path contains exactly `programs`.
    pub fn with_path(programs: &[&str]) -> Self {
        Self {
            invocations: Mutex::new(Vec::new()),
            path: programs
                .iter()
                .map(|p| (p.to_string(), PathBuf::from("/usr/bin").join(p)))
                .collect(),
            helper_output: Mutex::new(None),
        }
    }

    /// Everything launched through this spawner so far.
    pub fn recorded(&self) -> Vec<Invocation> {
        self.invocations.lock().expect("lock invocations").clone()
    }

    /// Make subsequent helper runs report this output (e.g. a nonzero
    /// osascript exit with a permission error on stderr).
    pub fn set_helper_output(&self, output: SpawnOutput) {
        *self.helper_output.lock().expect("lock output") = Some(output);
    }
}

impl ProcessSpawner for RecordingSpawner {
    fn launch(
        &self,
        invocation: &Invocation,
        _timeout: Option<Duration>,
    ) -> Result<SpawnOutput, LaunchError> {
        self.invocations
            .lock()
            .expect("lock invocations")
            .push(invocation.clone());
        Ok(self
            .helper_output
            .lock()
            .expect("lock output")
            .clone()
            .unwrap_or_else(SpawnOutput::ok))
    }

    fn lookup(&self, program: &str) -> Option<PathBuf> {
        self.path.get(program).cloned()
    }
}
