//! Chess domain layer: piece types, the rules-engine adapter, move history
//! and selection. Nothing here depends on GPUI.

pub mod chess;
pub mod error;
pub mod history;
pub mod rules;
pub mod selection;

pub use chess::{Piece, PieceColor, PieceKind, shakmaty_to_piece, to_row_col, to_square};
pub use history::{Cursor, GameHistory};
pub use rules::{GameStatus, MoveRecord};
pub use selection::Selection;
