//! Quoting helpers, one per destination shell dialect.
//!
//! The caller's command line is escaped exactly once, with the dialect
//! matched to where the string lands: a POSIX shell word, an AppleScript
//! string literal, or a PowerShell single-quoted string. Mixing these up
//! is the main correctness hazard in this crate, so each helper is tested
//! against adversarial metacharacters.

/// Escape a string for safe use as a single POSIX shell word.
///
/// Wraps the string in single quotes and escapes embedded single quotes
/// using the `'\''` technique (end quote, escaped quote, start quote).
///
/// # Example
///
/// ```
/// use launch_terminal::launcher::escape::shell_quote;
/// assert_eq!(shell_quote("hello"), "'hello'");
/// assert_eq!(shell_quote("it's"), "'it'\\''s'");
/// ```
pub fn shell_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', "'\\''"))
}

/// Quote a string for AppleScript embedding.
///
/// Escapes backslashes and double quotes, then wraps in double quotes.
/// Equivalent to AppleScript's `quoted form of` for string literals.
pub fn applescript_quote(s: &str) -> String {
    let escaped = s.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{}\"", escaped)
}

/// Quote a string as a PowerShell single-quoted literal.
///
/// Inside single quotes PowerShell treats everything literally except the
/// quote itself, which is doubled.
pub fn powershell_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}
