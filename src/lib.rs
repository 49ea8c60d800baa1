//! launch-terminal - open a new terminal window and run a command in it
//!
//! The launcher detects the host platform, picks a launch strategy
//! (AppleScript on macOS, Windows Terminal or PowerShell on Windows, a
//! probed emulator on other POSIX hosts), quotes the caller's command for
//! that destination, and spawns the window without waiting on whatever
//! runs inside it.
//!
//! ## Library use
//!
//! ```no_run
//! use launch_terminal::config::Config;
//! use launch_terminal::{launcher, LaunchRequest};
//!
//! let config = Config::load().unwrap_or_default();
//! let request = LaunchRequest::new("claude --model haiku", std::env::current_dir().unwrap());
//! let result = launcher::launch(&request, &config);
//! assert!(result.succeeded || result.error.is_some());
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod launcher;

pub use domain::*;
pub use error::LaunchError;
