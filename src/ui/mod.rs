pub mod display;
pub mod keypad;

pub use display::{DisplaySize, render_display};
pub use keypad::render_keypad;
