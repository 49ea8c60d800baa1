//! Launch command implementation

use std::time::Duration;

use tracing::warn;

use launch_terminal::config::Config;
use launch_terminal::launcher::{Launcher, SystemSpawner};
use launch_terminal::{LaunchRequest, LaunchResult, TerminalKind};

/// Environment variable supplying a default terminal hint.
pub const ENV_TERMINAL_APP: &str = "LAUNCH_TERMINAL_APP";

/// Parsed flag values handed down from the argument parser.
pub struct LaunchOptions {
    pub command: String,
    pub terminal: Option<String>,
    pub timeout: Option<u64>,
    pub no_validate: bool,
    pub json: bool,
}

/// Run one launch and return the process exit code.
pub fn launch_command(options: &LaunchOptions) -> i32 {
    let config = match Config::load() {
        Ok(config) => config,
        Err(err) => {
            warn!("{err:#}; using default configuration");
            Config::default().with_builtin_aliases()
        }
    };

    let working_directory = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(err) => {
            eprintln!("✗ Cannot determine working directory: {err}");
            return 2;
        }
    };

    // Flag beats env var beats config default.
    let hint = options
        .terminal
        .clone()
        .or_else(|| {
            std::env::var(ENV_TERMINAL_APP)
                .ok()
                .filter(|value| !value.trim().is_empty())
        })
        .or_else(|| config.settings.terminal.clone());

    let mut request = LaunchRequest::new(options.command.clone(), working_directory);
    if let Some(hint) = hint {
        request = request.with_terminal_hint(hint);
    }
    if let Some(secs) = options.timeout {
        request = request.with_timeout(Duration::from_secs(secs));
    }
    if options.no_validate || !config.settings.validate_tools {
        request = request.without_tool_validation();
    }

    let result = Launcher::new(&SystemSpawner, &config).launch(&request);
    report(&result, options.json);
    exit_code(&result)
}

fn report(result: &LaunchResult, json: bool) {
    if json {
        match serde_json::to_string_pretty(&result.to_json()) {
            Ok(body) => println!("{body}"),
            Err(err) => eprintln!("✗ Failed to serialize result: {err}"),
        }
        return;
    }

    if result.succeeded {
        let terminal = result.terminal.map(|t| t.as_str()).unwrap_or("terminal");
        println!("✓ Launched {terminal} with command: {}", result.command);
        if result.terminal == Some(TerminalKind::Warp) {
            println!("  Press ENTER in Warp to run the pasted command");
        }
    } else if let Some(error) = &result.error {
        eprintln!("✗ Launch failed: {error}");
    }
}

/// 0 = launched, 1 = launch failed, 2 = invalid arguments.
pub fn exit_code(result: &LaunchResult) -> i32 {
    if result.succeeded {
        0
    } else if result
        .error
        .as_ref()
        .is_some_and(|error| error.is_usage_error())
    {
        2
    } else {
        1
    }
}
