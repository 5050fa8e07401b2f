//! Display rendering.
//!
//! Renders the engine's display text as a terminal row and picks the size
//! tier a graphical front end would draw it at.

use crate::calculator::EngineState;
use serde::Serialize;

/// Visual size of the display text, shrinking as the text grows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplaySize {
    Large,
    Medium,
    Small,
    Compact,
}

impl DisplaySize {
    /// Pick the tier for a display string.
    ///
    /// The decimal point is not counted; a leading sign is.
    pub fn for_display(display: &str) -> Self {
        let len = display.chars().filter(|&c| c != '.').count();
        if len > 14 {
            Self::Compact
        } else if len > 11 {
            Self::Small
        } else if len > 8 {
            Self::Medium
        } else {
            Self::Large
        }
    }

    /// Nominal font size in pixels.
    pub fn point_size(self) -> f32 {
        match self {
            Self::Large => 60.0,
            Self::Medium => 48.0,
            Self::Small => 36.0,
            Self::Compact => 30.0,
        }
    }

    /// Lowercase name of the tier.
    pub fn name(self) -> &'static str {
        match self {
            Self::Large => "large",
            Self::Medium => "medium",
            Self::Small => "small",
            Self::Compact => "compact",
        }
    }
}

/// Render the display as one fixed-width row.
///
/// The pending operator, if any, sits at the left edge and the display text
/// is right-aligned, the way a hardware calculator shows them. Text wider
/// than the row is never truncated.
pub fn render_display(state: &EngineState, width: usize) -> String {
    let marker = state.operator().map(|op| op.symbol()).unwrap_or(" ");
    let text_width = width.saturating_sub(marker.chars().count() + 1);
    format!("{} {:>text_width$}", marker, state.display())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::{KeyEvent, Operator, apply};

    #[test]
    fn test_size_tiers() {
        assert_eq!(DisplaySize::for_display("0"), DisplaySize::Large);
        assert_eq!(DisplaySize::for_display("12345678"), DisplaySize::Large);
        assert_eq!(DisplaySize::for_display("123456789"), DisplaySize::Medium);
        assert_eq!(DisplaySize::for_display("123456789012"), DisplaySize::Small);
        assert_eq!(
            DisplaySize::for_display("123456789012345"),
            DisplaySize::Compact
        );
    }

    #[test]
    fn test_decimal_point_not_counted() {
        assert_eq!(DisplaySize::for_display("1234.5678"), DisplaySize::Large);
        assert_eq!(DisplaySize::for_display("-1234.5678"), DisplaySize::Medium);
    }

    #[test]
    fn test_point_sizes_shrink() {
        assert!(DisplaySize::Large.point_size() > DisplaySize::Medium.point_size());
        assert!(DisplaySize::Medium.point_size() > DisplaySize::Small.point_size());
        assert!(DisplaySize::Small.point_size() > DisplaySize::Compact.point_size());
    }

    #[test]
    fn test_render_idle_display() {
        let row = render_display(&EngineState::new(), 10);
        assert_eq!(row, "         0");
    }

    #[test]
    fn test_render_pending_operator() {
        let state = apply(EngineState::new(), KeyEvent::Digit(5));
        let state = apply(state, KeyEvent::Operator(Operator::Mul));
        let row = render_display(&state, 8);
        assert_eq!(row, "×      5");
    }

    #[test]
    fn test_render_overlong_display() {
        let state = "123456789"
            .chars()
            .filter_map(|c| c.to_digit(10))
            .fold(EngineState::new(), |s, d| apply(s, KeyEvent::Digit(d as u8)));
        assert_eq!(render_display(&state, 4), "  123456789");
    }
}
