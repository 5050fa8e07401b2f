//! Keypad rendering for terminals.

use crate::keypad::{KeySpec, rows};

/// Width of a single grid cell, brackets included.
const CELL_WIDTH: usize = 5;

/// Render the keypad as a text grid, one line per row.
pub fn render_keypad() -> String {
    rows()
        .iter()
        .map(|row| row.iter().map(render_key).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render one key, widened to cover every cell it spans.
fn render_key(spec: &KeySpec) -> String {
    let inner = CELL_WIDTH * spec.span - 2;
    format!("[{:^inner$}]", spec.label())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keypad_layout() {
        let keypad = render_keypad();
        let lines: Vec<&str> = keypad.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "[AC ][ ± ][ % ][ ÷ ]");
        assert_eq!(lines[1], "[ 7 ][ 8 ][ 9 ][ × ]");
        assert_eq!(lines[4], "[   0    ][ . ][ = ]");
    }

    #[test]
    fn test_rows_have_equal_width() {
        for line in render_keypad().lines() {
            assert_eq!(line.chars().count(), CELL_WIDTH * 4);
        }
    }
}
