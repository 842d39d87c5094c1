//! View models for rendering the board, move list and status.
//!
//! These types are DTOs (Data Transfer Objects) that prepare game state
//! for display in the UI. They live in the UI layer, not the domain layer.

use crate::domain::Piece;

/// Display data for one board square
#[derive(Clone, Copy, Debug)]
pub struct SquareDisplay {
    pub row: usize,
    pub col: usize,
    pub piece: Option<Piece>,
    pub is_selected: bool,
    /// The selected piece may move here
    pub is_legal_destination: bool,
    /// Origin or destination of the move that produced the shown position
    pub is_last_move: bool,
    /// Destination of the last move, when it took a piece
    pub is_last_capture: bool,
    /// The king of the side to move, in check
    pub is_checked_king: bool,
    /// The piece here is currently being dragged
    pub is_being_dragged: bool,
}

/// Display data for a single move in the history list
#[derive(Clone, Debug)]
pub struct MoveDisplay {
    /// Index into the move history
    pub index: usize,
    /// SAN with check/checkmate suffix
    pub text: String,
    /// The shown position is the one after this move
    pub is_current: bool,
}

/// One numbered row of the move list: white's move and black's reply
#[derive(Clone, Debug)]
pub struct MoveRowDisplay {
    pub move_num: usize,
    pub white: MoveDisplay,
    pub black: Option<MoveDisplay>,
}

/// Text for the status area above the move list
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusDisplay {
    /// Game over or check announcement
    pub headline: Option<String>,
    /// Whose turn it is in the shown position
    pub turn: String,
    /// Present while reviewing history
    pub review_banner: Option<String>,
}
