//! Strategy selection and per-strategy invocation building.
//!
//! Selection is a pure function of the detected platform plus the optional
//! explicit hint. An explicit hint skips auto-detection entirely: if it
//! cannot be honoured the launch fails rather than falling back to a
//! different emulator.

use std::path::Path;

use crate::domain::{Platform, TerminalKind};
use crate::error::LaunchError;

use super::escape::{applescript_quote, powershell_quote, shell_quote};
use super::spawn::{Invocation, ProcessSpawner};

/// Fixed probe order on POSIX hosts lacking a canonical default terminal.
pub const LINUX_PROBE_ORDER: &[TerminalKind] = &[
    TerminalKind::GnomeTerminal,
    TerminalKind::Konsole,
    TerminalKind::Xterm,
];

/// Pick the launch strategy for this call.
///
/// With a hint: the hinted strategy must belong to the detected platform
/// and its binary must be on the search path. Without one: macOS defaults
/// to Terminal.app, Windows prefers `wt` over PowerShell, and Linux probes
/// [`LINUX_PROBE_ORDER`], first hit wins.
pub fn select_strategy(
    platform: Platform,
    hint: Option<TerminalKind>,
    spawner: &dyn ProcessSpawner,
) -> Result<TerminalKind, LaunchError> {
    if let Some(kind) = hint {
        if kind.platform() != platform {
            return Err(LaunchError::UnsupportedPlatform(format!(
                "{} is a {} terminal, host is {}",
                kind,
                kind.platform(),
                platform
            )));
        }
        if spawner.lookup(kind.program()).is_none() {
            return Err(LaunchError::NoTerminalEmulatorFound {
                tried: vec![kind.program().to_string()],
            });
        }
        return Ok(kind);
    }

    match platform {
        Platform::MacOs => Ok(TerminalKind::Terminal),
        Platform::Windows => Ok(if spawner.lookup("wt").is_some() {
            TerminalKind::WindowsTerminal
        } else {
            TerminalKind::PowerShell
        }),
        Platform::Linux => {
            for kind in LINUX_PROBE_ORDER {
                if spawner.lookup(kind.program()).is_some() {
                    return Ok(*kind);
                }
            }
            Err(LaunchError::NoTerminalEmulatorFound {
                tried: LINUX_PROBE_ORDER
                    .iter()
                    .map(|k| k.program().to_string())
                    .collect(),
            })
        }
    }
}

/// Build the launch-mechanism invocations for one strategy.
///
/// `command` is the caller's (alias-expanded) command line and is handed
/// to the destination shell as one logical unit; the only quoting applied
/// here is the single layer matched to where each string lands.
///
/// Every strategy yields one invocation except Warp, whose clipboard-paste
/// mechanism needs a `pbcopy` step first.
pub fn build_invocations(kind: TerminalKind, command: &str, cwd: &Path) -> Vec<Invocation> {
    let cwd = cwd.display().to_string();
    // The line typed into the new shell: start in the caller's directory,
    // then run the command verbatim.
    let shell_line = format!("cd {} && {}", shell_quote(&cwd), command);
    // Emulators that hand us an argv boundary get the command via
    // `bash -c`, kept open afterwards so the window survives the command.
    let keepalive = format!("{command}; exec bash");

    match kind {
        TerminalKind::Terminal => {
            let script = format!(
                "tell application \"Terminal\"\n\tdo script {}\n\tactivate\nend tell",
                applescript_quote(&shell_line)
            );
            vec![Invocation::waited("osascript", vec!["-e".into(), script])]
        }
        TerminalKind::ITerm => {
            let script = format!(
                "tell application \"iTerm\"\n\tactivate\n\tcreate window with default profile\n\ttell current session of current window\n\t\twrite text {}\n\tend tell\nend tell",
                applescript_quote(&shell_line)
            );
            vec![Invocation::waited("osascript", vec!["-e".into(), script])]
        }
        TerminalKind::Warp => {
            // Warp has no usable AppleScript dictionary: put the command on
            // the clipboard, open a new window, paste. The user presses
            // Enter themselves.
            let script = "tell application \"Warp\"\n\tactivate\nend tell\ndelay 1.0\ntell application \"System Events\"\n\ttell process \"Warp\"\n\t\tkeystroke \"n\" using command down\n\t\tdelay 1.0\n\t\tkeystroke \"v\" using command down\n\tend tell\nend tell";
            vec![
                Invocation::waited("pbcopy", vec![]).with_stdin(format!("{shell_line}\n")),
                Invocation::waited("osascript", vec!["-e".into(), script.to_string()]),
            ]
        }
        TerminalKind::WindowsTerminal => vec![Invocation::waited(
            "wt",
            vec![
                "-d".into(),
                cwd,
                "cmd".into(),
                "/k".into(),
                command.to_string(),
            ],
        )],
        TerminalKind::PowerShell => {
            let inner = format!("Set-Location -Path {}; {}", powershell_quote(&cwd), command);
            let start = format!(
                "Start-Process powershell -ArgumentList '-NoExit','-Command',{}",
                powershell_quote(&inner)
            );
            vec![Invocation::waited(
                "powershell",
                vec!["-NoProfile".into(), "-Command".into(), start],
            )]
        }
        TerminalKind::GnomeTerminal => vec![Invocation::detached(
            "gnome-terminal",
            vec![
                "--working-directory".into(),
                cwd,
                "--".into(),
                "bash".into(),
                "-c".into(),
                keepalive,
            ],
        )],
        TerminalKind::Konsole => vec![Invocation::detached(
            "konsole",
            vec![
                "--workdir".into(),
                cwd,
                "-e".into(),
                "bash".into(),
                "-c".into(),
                keepalive,
            ],
        )],
        TerminalKind::Kitty => vec![Invocation::detached(
            "kitty",
            vec![
                "--directory".into(),
                cwd,
                "-e".into(),
                "bash".into(),
                "-c".into(),
                keepalive,
            ],
        )],
        TerminalKind::Xterm => vec![Invocation::detached(
            "xterm",
            vec![
                "-e".into(),
                format!("cd {} && {}; exec bash", shell_quote(&cwd), command),
            ],
        )],
    }
}
