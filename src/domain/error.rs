use shakmaty::Square;
use thiserror::Error;

/// Reasons a proposed move is not applied to the game.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("illegal move {from}{to}")]
    Illegal { from: Square, to: Square },
    #[error("moves can only be played from the live position")]
    Reviewing,
}
