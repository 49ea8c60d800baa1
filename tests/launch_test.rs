//! End-to-end launch flow tests against the mock launch backend.

mod common;

use std::collections::HashMap;

use launch_terminal::config::{AliasConfig, Config};
use launch_terminal::launcher::{Launcher, SpawnOutput, Wait};
use launch_terminal::{LaunchRequest, Platform, TerminalKind};

use common::RecordingSpawner;

fn config_with_alias(token: &str, replacement: &str) -> Config {
    Config {
        alias: AliasConfig {
            command: HashMap::from([(token.to_string(), replacement.to_string())]),
        },
        ..Config::default()
    }
}

#[test]
fn linux_launch_uses_first_probed_emulator() {
    let dir = tempfile::tempdir().expect("tempdir");
    let spawner = RecordingSpawner::with_path(&["gnome-terminal", "echo"]);
    let config = Config::default();
    let launcher = Launcher::with_platform(&spawner, &config, Platform::Linux);

    let request = LaunchRequest::new("echo hello world", dir.path());
    let result = launcher.launch(&request);

    assert!(result.succeeded, "unexpected error: {:?}", result.error);
    assert_eq!(result.platform, Some(Platform::Linux));
    assert_eq!(result.terminal, Some(TerminalKind::GnomeTerminal));

    let recorded = spawner.recorded();
    assert_eq!(recorded.len(), 1);
    let inv = &recorded[0];
    assert_eq!(inv.program, "gnome-terminal");
    assert_eq!(inv.wait, Wait::Detach);
    assert_eq!(
        inv.args,
        vec![
            "--working-directory".to_string(),
            dir.path().display().to_string(),
            "--".to_string(),
            "bash".to_string(),
            "-c".to_string(),
            "echo hello world; exec bash".to_string(),
        ]
    );
}

#[test]
fn macos_launch_embeds_cd_prefixed_shell_line() {
    let dir = tempfile::tempdir().expect("tempdir");
    let spawner = RecordingSpawner::with_path(&["osascript", "echo"]);
    let config = Config::default();
    let launcher = Launcher::with_platform(&spawner, &config, Platform::MacOs);

    let request = LaunchRequest::new("echo hello world", dir.path());
    let result = launcher.launch(&request);

    assert!(result.succeeded, "unexpected error: {:?}", result.error);
    assert_eq!(result.terminal, Some(TerminalKind::Terminal));

    let recorded = spawner.recorded();
    assert_eq!(recorded.len(), 1);
    let script = &recorded[0].args[1];
    let expected_line = format!("cd '{}' && echo hello world", dir.path().display());
    assert!(
        script.contains(&expected_line),
        "script missing shell line: {script}"
    );
}

#[test]
fn empty_command_is_rejected_before_any_spawn() {
    let spawner = RecordingSpawner::with_path(&["gnome-terminal"]);
    let config = Config::default();
    let launcher = Launcher::with_platform(&spawner, &config, Platform::Linux);

    let result = launcher.launch(&LaunchRequest::new("", std::env::temp_dir()));

    assert!(!result.succeeded);
    assert_eq!(result.error_kind(), Some("invalid_command"));
    assert!(spawner.recorded().is_empty());
}

#[test]
fn missing_working_directory_is_rejected_before_any_spawn() {
    let spawner = RecordingSpawner::with_path(&["gnome-terminal", "echo"]);
    let config = Config::default();
    let launcher = Launcher::with_platform(&spawner, &config, Platform::Linux);

    let request = LaunchRequest::new("echo hi", "/definitely/not/a/real/dir");
    let result = launcher.launch(&request);

    assert!(!result.succeeded);
    assert_eq!(result.error_kind(), Some("working_directory_not_found"));
    assert!(spawner.recorded().is_empty());
}

#[test]
fn no_emulator_on_path_means_no_side_effect() {
    let dir = tempfile::tempdir().expect("tempdir");
    let spawner = RecordingSpawner::with_path(&["echo"]);
    let config = Config::default();
    let launcher = Launcher::with_platform(&spawner, &config, Platform::Linux);

    let result = launcher.launch(&LaunchRequest::new("echo hi", dir.path()));

    assert!(!result.succeeded);
    assert_eq!(result.error_kind(), Some("no_terminal_emulator_found"));
    assert!(spawner.recorded().is_empty());
}

#[test]
fn unknown_terminal_hint_names_the_offender() {
    let dir = tempfile::tempdir().expect("tempdir");
    let spawner = RecordingSpawner::with_path(&["gnome-terminal", "echo"]);
    let config = Config::default();
    let launcher = Launcher::with_platform(&spawner, &config, Platform::Linux);

    let request =
        LaunchRequest::new("echo hi", dir.path()).with_terminal_hint("bogus-emulator");
    let result = launcher.launch(&request);

    assert!(!result.succeeded);
    assert_eq!(result.error_kind(), Some("unknown_terminal"));
    let detail = result.error.expect("error").to_string();
    assert!(detail.contains("bogus-emulator"), "detail was: {detail}");
    assert!(spawner.recorded().is_empty());
}

#[test]
fn hinted_kitty_is_used_without_probing() {
    let dir = tempfile::tempdir().expect("tempdir");
    // gnome-terminal is also present; the hint must win.
    let spawner = RecordingSpawner::with_path(&["kitty", "gnome-terminal", "echo"]);
    let config = Config::default();
    let launcher = Launcher::with_platform(&spawner, &config, Platform::Linux);

    let request = LaunchRequest::new("echo hi", dir.path()).with_terminal_hint("kitty");
    let result = launcher.launch(&request);

    assert!(result.succeeded);
    assert_eq!(result.terminal, Some(TerminalKind::Kitty));
    assert_eq!(spawner.recorded()[0].program, "kitty");
}

#[test]
fn alias_expansion_happens_before_escaping_and_is_whitespace_insensitive() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = config_with_alias("claude", "echo --marker");

    let mut final_args = Vec::new();
    for input in ["claude --model haiku", "  claude    --model haiku "] {
        let spawner = RecordingSpawner::with_path(&["gnome-terminal", "echo"]);
        let launcher = Launcher::with_platform(&spawner, &config, Platform::Linux);
        let result = launcher.launch(&LaunchRequest::new(input, dir.path()));
        assert!(result.succeeded, "unexpected error: {:?}", result.error);
        assert_eq!(result.command, "echo --marker --model haiku");
        final_args.push(spawner.recorded()[0].args.clone());
    }
    assert_eq!(final_args[0], final_args[1]);
    assert_eq!(
        final_args[0].last().map(String::as_str),
        Some("echo --marker --model haiku; exec bash")
    );
}

#[test]
fn tool_validation_blocks_launch_when_tool_is_missing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let spawner = RecordingSpawner::with_path(&["gnome-terminal"]);
    let config = Config::default();
    let launcher = Launcher::with_platform(&spawner, &config, Platform::Linux);

    let result = launcher.launch(&LaunchRequest::new("missing-tool --flag", dir.path()));

    assert!(!result.succeeded);
    assert_eq!(result.error_kind(), Some("tool_not_found"));
    assert!(spawner.recorded().is_empty());

    // Opting out restores the permissive behavior.
    let request =
        LaunchRequest::new("missing-tool --flag", dir.path()).without_tool_validation();
    let result = launcher.launch(&request);
    assert!(result.succeeded);
    assert_eq!(spawner.recorded().len(), 1);
}

#[test]
fn automation_permission_denial_is_classified() {
    let dir = tempfile::tempdir().expect("tempdir");
    let spawner = RecordingSpawner::with_path(&["osascript", "echo"]);
    spawner.set_helper_output(SpawnOutput {
        success: false,
        stderr: "execution error: Not authorized to send Apple events to Terminal. (-1743)"
            .to_string(),
    });
    let config = Config::default();
    let launcher = Launcher::with_platform(&spawner, &config, Platform::MacOs);

    let result = launcher.launch(&LaunchRequest::new("echo hi", dir.path()));

    assert!(!result.succeeded);
    assert_eq!(result.error_kind(), Some("automation_permission_denied"));
}

#[test]
fn warp_launch_runs_clipboard_then_applescript() {
    let dir = tempfile::tempdir().expect("tempdir");
    let spawner = RecordingSpawner::with_path(&["osascript", "echo"]);
    let config = Config::default();
    let launcher = Launcher::with_platform(&spawner, &config, Platform::MacOs);

    let request = LaunchRequest::new("echo hi", dir.path()).with_terminal_hint("warp");
    let result = launcher.launch(&request);

    assert!(result.succeeded);
    let recorded = spawner.recorded();
    assert_eq!(recorded.len(), 2);
    assert_eq!(recorded[0].program, "pbcopy");
    assert!(recorded[0]
        .stdin
        .as_deref()
        .is_some_and(|payload| payload.ends_with("echo hi\n")));
    assert_eq!(recorded[1].program, "osascript");
}

#[test]
fn concurrent_launches_share_nothing() {
    // Two launchers over the same config run independently; each call is
    // stateless, so results do not bleed between them.
    let dir = tempfile::tempdir().expect("tempdir");
    let config = Config::default();

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                let spawner = RecordingSpawner::with_path(&["konsole", "echo"]);
                let launcher = Launcher::with_platform(&spawner, &config, Platform::Linux);
                let result = launcher.launch(&LaunchRequest::new("echo hi", dir.path()));
                assert!(result.succeeded);
                assert_eq!(spawner.recorded().len(), 1);
            });
        }
    });
}
