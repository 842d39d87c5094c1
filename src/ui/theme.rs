//! Theme constants and colors for the chess UI.

use gpui::{Rgba, rgb};

// Layout constants
pub const BOARD_PADDING: f32 = 20.0;
pub const PIECE_SCALE: f32 = 0.98; // piece size relative to square
pub const GLYPH_SCALE: f32 = 0.8; // glyph font size relative to piece size
pub const GHOST_OPACITY: f32 = 0.4;
pub const LEGAL_DOT_SCALE: f32 = 0.3;

// Initial panel sizes
pub const INITIAL_LEFT_PANEL: f32 = 540.0;
pub const INITIAL_RIGHT_PANEL: f32 = 280.0;

// Board colors
pub const LIGHT_SQUARE: u32 = 0xEFD9B5;
pub const DARK_SQUARE: u32 = 0xB48764;
pub const SELECTED_SQUARE: u32 = 0x7FA650;
pub const LAST_MOVE_LIGHT: u32 = 0xF6EB72;
pub const LAST_MOVE_DARK: u32 = 0xDCC34B;
pub const LAST_CAPTURE: u32 = 0xE39A4C;
pub const CHECK_SQUARE: u32 = 0xE0604F;
pub const LEGAL_CAPTURE: u32 = 0xC9A25A;
pub const LEGAL_DOT: u32 = 0x00000040;
pub const PIECE_TEXT: u32 = 0x1a1a1a;

// Panel colors
pub const PANEL_BG: u32 = 0x2a2a2a;
pub const MOVE_LIST_BG: u32 = 0x1e1e1e;
pub const BORDER_COLOR: u32 = 0x4a4a4a;
pub const TEXT_PRIMARY: u32 = 0xffffff;
pub const TEXT_SECONDARY: u32 = 0x888888;
pub const TEXT_ALERT: u32 = 0xff8a7a;
pub const REVIEW_BANNER_BG: u32 = 0x3d4f73;

/// Get the color for a board square based on its position
pub fn square_color(row: usize, col: usize) -> Rgba {
    if is_light_square(row, col) {
        rgb(LIGHT_SQUARE)
    } else {
        rgb(DARK_SQUARE)
    }
}

/// Tint for the origin/destination of the last move
pub fn last_move_color(row: usize, col: usize) -> Rgba {
    if is_light_square(row, col) {
        rgb(LAST_MOVE_LIGHT)
    } else {
        rgb(LAST_MOVE_DARK)
    }
}

pub fn is_light_square(row: usize, col: usize) -> bool {
    (row + col) % 2 == 0
}
