//! The catalog of keys a calculator front end can offer.

mod parse;

pub use parse::{is_quit_command, parse_key_line};

use crate::calculator::{KeyEvent, KeyKind, Operator};

/// Number of key cells per keypad row.
pub const COLUMNS: usize = 4;

/// A key as it appears on the keypad.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeySpec {
    /// The event sent when the key is pressed.
    pub key: KeyEvent,
    /// Number of grid cells the key occupies.
    pub span: usize,
}

impl KeySpec {
    const fn new(key: KeyEvent) -> Self {
        Self { key, span: 1 }
    }

    const fn wide(key: KeyEvent) -> Self {
        Self { key, span: 2 }
    }

    /// Get the label printed on the key.
    pub fn label(&self) -> &'static str {
        self.key.label()
    }

    /// Get the semantic kind of the key.
    pub fn kind(&self) -> KeyKind {
        self.key.kind()
    }

    /// Check if this key spans more than one cell.
    pub fn is_wide(&self) -> bool {
        self.span > 1
    }
}

/// Keys in display order, row by row.
static KEYPAD: [KeySpec; 19] = [
    KeySpec::new(KeyEvent::ClearAll),
    KeySpec::new(KeyEvent::ToggleSign),
    KeySpec::new(KeyEvent::Percent),
    KeySpec::new(KeyEvent::Operator(Operator::Div)),
    KeySpec::new(KeyEvent::Digit(7)),
    KeySpec::new(KeyEvent::Digit(8)),
    KeySpec::new(KeyEvent::Digit(9)),
    KeySpec::new(KeyEvent::Operator(Operator::Mul)),
    KeySpec::new(KeyEvent::Digit(4)),
    KeySpec::new(KeyEvent::Digit(5)),
    KeySpec::new(KeyEvent::Digit(6)),
    KeySpec::new(KeyEvent::Operator(Operator::Sub)),
    KeySpec::new(KeyEvent::Digit(1)),
    KeySpec::new(KeyEvent::Digit(2)),
    KeySpec::new(KeyEvent::Digit(3)),
    KeySpec::new(KeyEvent::Operator(Operator::Add)),
    KeySpec::wide(KeyEvent::Digit(0)),
    KeySpec::new(KeyEvent::Decimal),
    KeySpec::new(KeyEvent::Equals),
];

/// Get every key in display order.
pub fn catalog() -> &'static [KeySpec] {
    &KEYPAD
}

/// Split the catalog into rows of [`COLUMNS`] cells.
pub fn rows() -> Vec<Vec<KeySpec>> {
    let mut rows = Vec::new();
    let mut row = Vec::new();
    let mut filled = 0;

    for spec in catalog() {
        row.push(*spec);
        filled += spec.span;
        if filled >= COLUMNS {
            rows.push(std::mem::take(&mut row));
            filled = 0;
        }
    }
    if !row.is_empty() {
        rows.push(row);
    }

    rows
}

/// Find the keypad entry for a key event.
pub fn find(key: KeyEvent) -> Option<&'static KeySpec> {
    catalog().iter().find(|spec| spec.key == key)
}
