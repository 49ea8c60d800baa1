//! Platform and terminal strategy definitions.

use serde::{Deserialize, Serialize};

/// The host operating system family, detected once per launch call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    MacOs,
    Windows,
    Linux,
}

impl Platform {
    /// Detect the host platform from the compile-time OS identifier.
    ///
    /// Non-macOS POSIX systems all take the Linux emulator-probing path.
    /// Returns `None` for hosts with no launch strategy at all.
    pub fn detect() -> Option<Platform> {
        Self::from_os_name(std::env::consts::OS)
    }

    pub fn from_os_name(os: &str) -> Option<Platform> {
        match os {
            "macos" => Some(Platform::MacOs),
            "windows" => Some(Platform::Windows),
            "linux" | "freebsd" | "netbsd" | "openbsd" | "dragonfly" | "solaris" | "illumos" => {
                Some(Platform::Linux)
            }
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::MacOs => "macos",
            Platform::Windows => "windows",
            Platform::Linux => "linux",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A launch strategy: one terminal program plus the mechanism used to open
/// a new window in it.
///
/// macOS strategies go through `osascript`; Windows strategies through
/// `wt` or a PowerShell `Start-Process`; Linux strategies exec the
/// emulator binary directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TerminalKind {
    /// macOS Terminal.app (default on macOS, most reliable with AppleScript)
    Terminal,
    /// iTerm2 (macOS)
    ITerm,
    /// Warp (macOS). Uses a clipboard-paste mechanism and needs a manual
    /// Enter to start the command.
    Warp,
    /// Windows Terminal (`wt`)
    #[serde(rename = "wt")]
    WindowsTerminal,
    /// PowerShell console host (Windows fallback)
    PowerShell,
    #[serde(rename = "gnome-terminal")]
    GnomeTerminal,
    Konsole,
    /// Kitty (Linux, hint-only: never auto-probed)
    Kitty,
    Xterm,
}

impl TerminalKind {
    /// Parse a terminal name from a hint (`--terminal` flag, env var, or
    /// config). Case-insensitive; accepts the common spellings.
    pub fn parse(name: &str) -> Option<TerminalKind> {
        match name.trim().to_lowercase().as_str() {
            "terminal" | "terminal.app" => Some(TerminalKind::Terminal),
            "iterm" | "iterm2" => Some(TerminalKind::ITerm),
            "warp" => Some(TerminalKind::Warp),
            "wt" | "windows-terminal" => Some(TerminalKind::WindowsTerminal),
            "powershell" => Some(TerminalKind::PowerShell),
            "gnome-terminal" | "gnome" => Some(TerminalKind::GnomeTerminal),
            "konsole" => Some(TerminalKind::Konsole),
            "kitty" => Some(TerminalKind::Kitty),
            "xterm" => Some(TerminalKind::Xterm),
            _ => None,
        }
    }

    /// The platform this strategy belongs to.
    pub fn platform(&self) -> Platform {
        match self {
            TerminalKind::Terminal | TerminalKind::ITerm | TerminalKind::Warp => Platform::MacOs,
            TerminalKind::WindowsTerminal | TerminalKind::PowerShell => Platform::Windows,
            TerminalKind::GnomeTerminal
            | TerminalKind::Konsole
            | TerminalKind::Kitty
            | TerminalKind::Xterm => Platform::Linux,
        }
    }

    /// The binary that must be on PATH for this strategy to be usable.
    pub fn program(&self) -> &'static str {
        match self {
            // AppleScript strategies all go through osascript
            TerminalKind::Terminal | TerminalKind::ITerm | TerminalKind::Warp => "osascript",
            TerminalKind::WindowsTerminal => "wt",
            TerminalKind::PowerShell => "powershell",
            TerminalKind::GnomeTerminal => "gnome-terminal",
            TerminalKind::Konsole => "konsole",
            TerminalKind::Kitty => "kitty",
            TerminalKind::Xterm => "xterm",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TerminalKind::Terminal => "terminal",
            TerminalKind::ITerm => "iterm",
            TerminalKind::Warp => "warp",
            TerminalKind::WindowsTerminal => "wt",
            TerminalKind::PowerShell => "powershell",
            TerminalKind::GnomeTerminal => "gnome-terminal",
            TerminalKind::Konsole => "konsole",
            TerminalKind::Kitty => "kitty",
            TerminalKind::Xterm => "xterm",
        }
    }
}

impl std::fmt::Display for TerminalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
