//! Core domain types for launch-terminal

mod request;
mod result;
mod terminal;

pub use request::LaunchRequest;
pub use result::LaunchResult;
pub use terminal::{Platform, TerminalKind};
