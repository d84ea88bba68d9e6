use colored::Color;

pub const PRIMARY: Color = Color::BrightCyan;
pub const ACCENT: Color = Color::BrightYellow;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const SUCCESS: Color = Color::BrightGreen;
pub const FAILURE: Color = Color::BrightRed;
pub const AMOUNT: Color = Color::Green;
