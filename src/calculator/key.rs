//! Key events accepted by the calculator engine.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const DIGIT_LABELS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

/// A binary arithmetic operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// The symbol shown on the operator's key.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "×",
            Self::Div => "÷",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// The semantic kind of a key, used by presentation layers to style it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeyKind {
    Digit,
    Decimal,
    Operator,
    Equals,
    Clear,
    ToggleSign,
    Percent,
}

/// A single key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyEvent {
    /// A digit key. Values above 9 are ignored by the engine.
    Digit(u8),
    Decimal,
    Operator(Operator),
    Equals,
    ClearAll,
    ToggleSign,
    Percent,
}

impl KeyEvent {
    /// The label printed on the key.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Digit(d) => DIGIT_LABELS.get(usize::from(*d)).copied().unwrap_or("?"),
            Self::Decimal => ".",
            Self::Operator(op) => op.symbol(),
            Self::Equals => "=",
            Self::ClearAll => "AC",
            Self::ToggleSign => "±",
            Self::Percent => "%",
        }
    }

    /// The semantic kind of this key.
    pub fn kind(&self) -> KeyKind {
        match self {
            Self::Digit(_) => KeyKind::Digit,
            Self::Decimal => KeyKind::Decimal,
            Self::Operator(_) => KeyKind::Operator,
            Self::Equals => KeyKind::Equals,
            Self::ClearAll => KeyKind::Clear,
            Self::ToggleSign => KeyKind::ToggleSign,
            Self::Percent => KeyKind::Percent,
        }
    }
}

impl fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A key label that does not name any calculator key.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum KeyParseError {
    #[error("Unknown key {key:?} at position {position}")]
    UnknownKey { key: String, position: usize },
}

impl FromStr for KeyEvent {
    type Err = KeyParseError;

    /// Parse a key from its label or one of its ASCII aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = match s {
            "c" | "C" => Self::ClearAll,
            _ if s.eq_ignore_ascii_case("ac") => Self::ClearAll,
            "±" | "n" | "~" => Self::ToggleSign,
            "%" => Self::Percent,
            "÷" | "/" => Self::Operator(Operator::Div),
            "×" | "*" | "x" | "X" => Self::Operator(Operator::Mul),
            "-" | "−" => Self::Operator(Operator::Sub),
            "+" => Self::Operator(Operator::Add),
            "=" => Self::Equals,
            "." | "," => Self::Decimal,
            _ => {
                let mut chars = s.chars();
                match (chars.next().and_then(|c| c.to_digit(10)), chars.next()) {
                    (Some(d), None) => Self::Digit(d as u8),
                    _ => {
                        return Err(KeyParseError::UnknownKey {
                            key: s.to_string(),
                            position: 0,
                        });
                    }
                }
            }
        };
        Ok(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_parse_back() {
        let keys = [
            KeyEvent::Digit(0),
            KeyEvent::Digit(9),
            KeyEvent::Decimal,
            KeyEvent::Operator(Operator::Add),
            KeyEvent::Operator(Operator::Sub),
            KeyEvent::Operator(Operator::Mul),
            KeyEvent::Operator(Operator::Div),
            KeyEvent::Equals,
            KeyEvent::ClearAll,
            KeyEvent::ToggleSign,
            KeyEvent::Percent,
        ];
        for key in keys {
            assert_eq!(key.label().parse::<KeyEvent>(), Ok(key));
        }
    }

    #[test]
    fn test_ascii_aliases() {
        assert_eq!("*".parse::<KeyEvent>(), Ok(KeyEvent::Operator(Operator::Mul)));
        assert_eq!("x".parse::<KeyEvent>(), Ok(KeyEvent::Operator(Operator::Mul)));
        assert_eq!("/".parse::<KeyEvent>(), Ok(KeyEvent::Operator(Operator::Div)));
        assert_eq!("c".parse::<KeyEvent>(), Ok(KeyEvent::ClearAll));
        assert_eq!("aC".parse::<KeyEvent>(), Ok(KeyEvent::ClearAll));
        assert_eq!("n".parse::<KeyEvent>(), Ok(KeyEvent::ToggleSign));
        assert_eq!(",".parse::<KeyEvent>(), Ok(KeyEvent::Decimal));
    }

    #[test]
    fn test_unknown_keys_rejected() {
        assert!("".parse::<KeyEvent>().is_err());
        assert!("12".parse::<KeyEvent>().is_err());
        assert!("^".parse::<KeyEvent>().is_err());
        assert!("MR".parse::<KeyEvent>().is_err());
    }

    #[test]
    fn test_kinds() {
        assert_eq!(KeyEvent::Digit(3).kind(), KeyKind::Digit);
        assert_eq!(KeyEvent::ClearAll.kind(), KeyKind::Clear);
        assert_eq!(KeyEvent::Operator(Operator::Div).kind(), KeyKind::Operator);
    }

    #[test]
    fn test_out_of_range_digit_label() {
        assert_eq!(KeyEvent::Digit(12).label(), "?");
    }
}
