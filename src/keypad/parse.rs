//! Key-line parsing.
//!
//! Turns a line of typed keys such as `12 × 3 =` or `7+3=` into the
//! key events the engine understands.

use crate::calculator::{KeyEvent, KeyParseError};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// One key per match: the two-letter clear key, or any single
    /// non-whitespace character.
    static ref KEY_TOKEN: Regex = Regex::new(r"(?i:ac)|\S").unwrap();
}

/// Parse a line of typed keys into key events.
///
/// Whitespace separates nothing and is skipped. The first unknown key
/// aborts parsing and reports its byte position in `line`.
pub fn parse_key_line(line: &str) -> Result<Vec<KeyEvent>, KeyParseError> {
    KEY_TOKEN
        .find_iter(line)
        .map(|token| {
            token
                .as_str()
                .parse::<KeyEvent>()
                .map_err(|_| KeyParseError::UnknownKey {
                    key: token.as_str().to_string(),
                    position: token.start(),
                })
        })
        .collect()
}

/// Check whether a line should be treated as a request to leave the session.
pub fn is_quit_command(line: &str) -> bool {
    matches!(line.trim(), "q" | "quit" | "exit")
}
