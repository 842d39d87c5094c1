//! Game state model - the application layer for chess game state.

use log::{debug, info};
use shakmaty::{Chess, Position, Square};

use crate::config::BoardConfig;
use crate::domain::{
    Cursor, GameHistory, GameStatus, Piece, Selection, shakmaty_to_piece, to_square,
};

/// State for a piece being dragged
#[derive(Clone, Copy, Debug)]
pub struct DragState {
    pub piece: Piece,
    pub from: Square,
    /// Mouse position relative to window
    pub mouse_x: f32,
    pub mouse_y: f32,
}

/// The main game model containing all chess game state
pub struct GameModel {
    /// Played moves and the view cursor into them
    history: GameHistory,
    /// Selected piece, only ever set while live
    selection: Option<Selection>,
    /// Drag state for piece movement
    pub drag_state: Option<DragState>,
    config: BoardConfig,
}

impl GameModel {
    pub fn new(config: BoardConfig) -> Self {
        Self {
            history: GameHistory::new(),
            selection: None,
            drag_state: None,
            config,
        }
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    /// Get the currently viewed position
    pub fn current_position(&self) -> &Chess {
        self.history.position()
    }

    pub fn status(&self) -> GameStatus {
        self.history.status()
    }

    pub fn cursor(&self) -> Cursor {
        self.history.cursor()
    }

    /// Whether the board accepts moves (not reviewing history)
    pub fn is_live(&self) -> bool {
        self.history.is_live()
    }

    /// Check if the initial position is on display
    pub fn is_at_start(&self) -> bool {
        self.history.displayed_index() == -1
    }

    #[cfg(test)]
    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn is_selected(&self, square: Square) -> bool {
        self.selection.as_ref().is_some_and(|s| s.square == square)
    }

    pub fn is_legal_destination(&self, square: Square) -> bool {
        self.selection
            .as_ref()
            .is_some_and(|s| s.is_destination(square))
    }

    /// Get piece at row/col from the currently viewed position
    pub fn piece_at(&self, row: usize, col: usize) -> Option<Piece> {
        let sq = to_square(row, col);
        self.current_position()
            .board()
            .piece_at(sq)
            .map(shakmaty_to_piece)
    }

    /// Origin and destination of the move that produced the shown position
    pub fn last_move_squares(&self) -> Option<(Square, Square)> {
        if !self.config.highlight_last_move {
            return None;
        }
        self.history.last_shown_move().map(|m| (m.from, m.to))
    }

    /// Destination of the shown move, when it captured a piece
    pub fn last_capture_square(&self) -> Option<Square> {
        if !self.config.highlight_last_move {
            return None;
        }
        self.history
            .last_shown_move()
            .filter(|m| m.capture.is_some())
            .map(|m| m.to)
    }

    /// Square of the king in check, if any
    pub fn checked_king(&self) -> Option<Square> {
        let position = self.current_position();
        if position.is_check() {
            position.board().king_of(position.turn())
        } else {
            None
        }
    }

    /// Select the piece on `square`, or clear the selection if it cannot
    /// move. Returns whether a piece is now selected.
    pub fn select_square(&mut self, square: Square) -> bool {
        self.selection = if self.is_live() {
            Selection::new(self.current_position(), square)
        } else {
            None
        };
        self.selection.is_some()
    }

    /// Move the selected piece to `square`. The selection is cleared
    /// whether or not the move was played. Returns whether it was played.
    pub fn attempt_move(&mut self, square: Square) -> bool {
        let Some(selection) = self.selection.take() else {
            return false;
        };
        if !selection.is_destination(square) {
            return false;
        }
        let promotion = self.config.promotion.kind();
        match self
            .history
            .apply_move(selection.square, square, promotion)
        {
            Ok(record) => {
                debug!("played {}", record.san);
                true
            }
            Err(err) => {
                debug!("move rejected: {err}");
                false
            }
        }
    }

    /// Board click: completes a move onto a highlighted destination,
    /// otherwise (re)selects.
    pub fn click_square(&mut self, square: Square) {
        if self.is_legal_destination(square) {
            self.attempt_move(square);
        } else {
            self.select_square(square);
        }
    }

    /// Take back the last move, or step back while reviewing
    pub fn undo(&mut self) {
        if self.history.undo() {
            debug!("undo, cursor now {:?}", self.history.cursor());
        }
        self.clear_interaction();
    }

    /// Navigate to a move index (`-1` = start), or back to live with `None`
    pub fn jump_to(&mut self, index: Option<isize>) {
        self.history.jump_to(index);
        debug!("jump, cursor now {:?}", self.history.cursor());
        self.clear_interaction();
    }

    /// Go back one move
    pub fn step_back(&mut self) {
        self.history.step_back();
        self.clear_interaction();
    }

    /// Go forward one move
    pub fn step_forward(&mut self) {
        self.history.step_forward();
        self.clear_interaction();
    }

    /// Go to the starting position
    pub fn go_to_start(&mut self) {
        self.jump_to(Some(-1));
    }

    /// Return to the live position
    pub fn go_to_end(&mut self) {
        self.jump_to(None);
    }

    pub fn new_game(&mut self) {
        info!("new game");
        self.history.reset();
        self.clear_interaction();
    }

    fn clear_interaction(&mut self) {
        self.selection = None;
        self.drag_state = None;
    }
}

impl Default for GameModel {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PromotionPiece;
    use crate::domain::{PieceColor, PieceKind};

    fn play(game: &mut GameModel, from: Square, to: Square) {
        game.click_square(from);
        game.click_square(to);
    }

    #[test]
    fn test_click_to_move() {
        let mut game = GameModel::default();
        game.click_square(Square::E2);
        assert!(game.is_selected(Square::E2));
        assert!(game.is_legal_destination(Square::E4));

        game.click_square(Square::E4);
        assert!(game.selection().is_none());
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.status().turn, PieceColor::Black);
        assert_eq!(game.last_move_squares(), Some((Square::E2, Square::E4)));
    }

    #[test]
    fn test_click_reselects() {
        let mut game = GameModel::default();
        game.click_square(Square::E2);
        game.click_square(Square::G1);
        assert!(game.is_selected(Square::G1));
        assert!(game.is_legal_destination(Square::F3));
        assert!(!game.is_legal_destination(Square::E4));
    }

    #[test]
    fn test_select_without_destinations_clears() {
        let mut game = GameModel::default();
        game.click_square(Square::E2);
        assert!(!game.select_square(Square::A1));
        assert!(game.selection().is_none());
    }

    #[test]
    fn test_attempt_move_off_destination_clears_selection() {
        let mut game = GameModel::default();
        game.select_square(Square::E2);
        assert!(!game.attempt_move(Square::E5));
        assert!(game.selection().is_none());
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_selection_disabled_while_reviewing() {
        let mut game = GameModel::default();
        play(&mut game, Square::E2, Square::E4);
        game.step_back();
        assert!(!game.is_live());
        assert!(!game.select_square(Square::E2));
        game.click_square(Square::E2);
        game.click_square(Square::E4);
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_navigation_clears_selection() {
        let mut game = GameModel::default();
        play(&mut game, Square::E2, Square::E4);
        game.select_square(Square::E7);
        game.step_back();
        assert!(game.selection().is_none());

        game.go_to_end();
        game.select_square(Square::E7);
        game.undo();
        assert!(game.selection().is_none());
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_start_and_end() {
        let mut game = GameModel::default();
        play(&mut game, Square::E2, Square::E4);
        play(&mut game, Square::E7, Square::E5);

        game.go_to_start();
        assert!(game.is_at_start());
        assert_eq!(game.cursor(), Cursor::Reviewing(-1));
        assert!(game.last_move_squares().is_none());

        game.step_forward();
        assert_eq!(game.cursor(), Cursor::Reviewing(0));
        game.go_to_end();
        assert!(game.is_live());
    }

    #[test]
    fn test_checked_king() {
        let mut game = GameModel::default();
        play(&mut game, Square::E2, Square::E4);
        play(&mut game, Square::F7, Square::F6);
        assert_eq!(game.checked_king(), None);
        play(&mut game, Square::D1, Square::H5);
        assert_eq!(game.checked_king(), Some(Square::E8));
        assert!(game.status().in_check);
    }

    #[test]
    fn test_configured_promotion() {
        let config = BoardConfig {
            promotion: PromotionPiece::Rook,
            ..BoardConfig::default()
        };
        let mut game = GameModel::new(config);
        for (from, to) in [
            (Square::H2, Square::H4),
            (Square::G7, Square::G5),
            (Square::H4, Square::G5),
            (Square::H7, Square::H6),
            (Square::G5, Square::H6),
            (Square::F8, Square::G7),
            (Square::H6, Square::G7),
            (Square::G8, Square::F6),
            (Square::G7, Square::H8),
        ] {
            play(&mut game, from, to);
        }
        assert_eq!(game.history().len(), 9);
        let piece = game.piece_at(0, 7).unwrap();
        assert_eq!(piece.kind, PieceKind::Rook);
        assert_eq!(piece.color, PieceColor::White);
    }

    #[test]
    fn test_new_game() {
        let mut game = GameModel::default();
        play(&mut game, Square::E2, Square::E4);
        game.new_game();
        assert!(game.history().is_empty());
        assert!(game.is_live());
        assert_eq!(game.status().turn, PieceColor::White);
    }

    #[test]
    fn test_last_move_highlight_disabled() {
        let config = BoardConfig {
            highlight_last_move: false,
            ..BoardConfig::default()
        };
        let mut game = GameModel::new(config);
        play(&mut game, Square::E2, Square::E4);
        play(&mut game, Square::D7, Square::D5);
        play(&mut game, Square::E4, Square::D5);
        assert!(game.last_move_squares().is_none());
        assert!(game.last_capture_square().is_none());
    }

    #[test]
    fn test_last_capture_square() {
        let mut game = GameModel::default();
        play(&mut game, Square::E2, Square::E4);
        play(&mut game, Square::D7, Square::D5);
        assert_eq!(game.last_capture_square(), None);
        play(&mut game, Square::E4, Square::D5);
        assert_eq!(game.last_capture_square(), Some(Square::D5));
    }
}
