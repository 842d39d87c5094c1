//! Board layout calculations - handles sizing and coordinate transformations.

use crate::domain::to_square;
use crate::ui::theme::{BOARD_PADDING, GLYPH_SCALE, INITIAL_LEFT_PANEL, PIECE_SCALE};
use gpui::{Pixels, Size, px};
use shakmaty::Square;

/// Smallest square edge the board shrinks to
const MIN_SQUARE_SIZE: f32 = 30.0;

/// Sizes derived from the measured board panel
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoardLayout {
    pub panel_size: Size<Pixels>,
}

impl BoardLayout {
    pub fn new(panel_size: Size<Pixels>) -> Self {
        Self { panel_size }
    }

    /// Calculate square size from measured panel dimensions
    pub fn square_size(&self) -> f32 {
        let panel_width: f32 = self.panel_size.width.into();
        let panel_height: f32 = self.panel_size.height.into();
        let available_width = panel_width - BOARD_PADDING * 2.0;
        let available_height = panel_height - BOARD_PADDING * 2.0;
        (available_width.min(available_height) / 8.0).max(MIN_SQUARE_SIZE)
    }

    pub fn piece_size(&self) -> f32 {
        self.square_size() * PIECE_SCALE
    }

    /// Font size for piece glyphs
    pub fn glyph_size(&self) -> f32 {
        self.piece_size() * GLYPH_SCALE
    }

    /// Get the total size of the board (8 squares)
    pub fn board_total_size(&self) -> f32 {
        self.square_size() * 8.0
    }

    /// Convert position relative to board panel to board row/col (if within board)
    pub fn pos_to_square(&self, x: f32, y: f32) -> Option<(usize, usize)> {
        let board_x = x - BOARD_PADDING;
        let board_y = y - BOARD_PADDING;

        if board_x < 0.0 || board_y < 0.0 {
            return None;
        }

        let square_size = self.square_size();
        let col = (board_x / square_size) as usize;
        let row = (board_y / square_size) as usize;

        if row < 8 && col < 8 {
            Some((row, col))
        } else {
            None
        }
    }

    /// Board square under a panel position
    pub fn square_at(&self, x: f32, y: f32) -> Option<Square> {
        self.pos_to_square(x, y)
            .map(|(row, col)| to_square(row, col))
    }
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self::new(Size {
            width: px(INITIAL_LEFT_PANEL),
            height: px(600.0),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(width: f32, height: f32) -> BoardLayout {
        BoardLayout::new(Size {
            width: px(width),
            height: px(height),
        })
    }

    #[test]
    fn test_square_size_uses_smaller_side() {
        let layout = layout(840.0, 440.0);
        assert_eq!(layout.square_size(), 50.0);
        assert_eq!(layout.board_total_size(), 400.0);
    }

    #[test]
    fn test_square_size_has_minimum() {
        assert_eq!(layout(100.0, 100.0).square_size(), MIN_SQUARE_SIZE);
    }

    #[test]
    fn test_square_at() {
        let layout = layout(440.0, 440.0);
        // top-left square is a8
        assert_eq!(layout.square_at(25.0, 25.0), Some(Square::A8));
        assert_eq!(layout.square_at(415.0, 415.0), Some(Square::H1));
        assert_eq!(layout.square_at(10.0, 25.0), None);
        assert_eq!(layout.square_at(425.0, 25.0), None);
    }
}
