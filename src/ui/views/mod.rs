mod board_view;
mod move_list;

pub use board_view::{
    ChessBoardView, JumpToStart, KEY_CONTEXT, NewGame, ReturnToLive, StepBack, StepForward, Undo,
};
pub use move_list::render_move_list_panel;
