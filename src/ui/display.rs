//! Display generation for the board, move list and status area.
//!
//! This module transforms game state into display-ready view models.
//! It lives in the UI layer and depends on domain + models, not vice versa.

use crate::domain::{Cursor, MoveRecord, to_square};
use crate::models::GameModel;
use crate::ui::view_models::{MoveDisplay, MoveRowDisplay, SquareDisplay, StatusDisplay};

/// All 64 squares in row-major order (row 0 = rank 8)
pub fn board_squares(game: &GameModel) -> Vec<SquareDisplay> {
    let last_move = game.last_move_squares();
    let last_capture = game.last_capture_square();
    let checked_king = game.checked_king();
    let dragging_from = game.drag_state.map(|d| d.from);
    let show_legal = game.config().show_legal_destinations;

    (0..8)
        .flat_map(|row| (0..8).map(move |col| (row, col)))
        .map(|(row, col)| {
            let sq = to_square(row, col);
            SquareDisplay {
                row,
                col,
                piece: game.piece_at(row, col),
                is_selected: game.is_selected(sq),
                is_legal_destination: show_legal && game.is_legal_destination(sq),
                is_last_move: last_move.is_some_and(|(from, to)| sq == from || sq == to),
                is_last_capture: last_capture == Some(sq),
                is_checked_king: checked_king == Some(sq),
                is_being_dragged: dragging_from == Some(sq),
            }
        })
        .collect()
}

fn move_text(record: &MoveRecord) -> String {
    let mut text = record.san.clone();
    if record.gives_checkmate {
        text.push('#');
    } else if record.gives_check {
        text.push('+');
    }
    text
}

/// The move history grouped into numbered white/black pairs
pub fn move_list_display(game: &GameModel) -> Vec<MoveRowDisplay> {
    let history = game.history();
    let current = history.displayed_index();

    let moves: Vec<MoveDisplay> = history
        .moves()
        .iter()
        .enumerate()
        .map(|(index, record)| MoveDisplay {
            index,
            text: move_text(record),
            is_current: index as isize == current,
        })
        .collect();

    moves
        .chunks(2)
        .enumerate()
        .map(|(i, pair)| MoveRowDisplay {
            move_num: i + 1,
            white: pair[0].clone(),
            black: pair.get(1).cloned(),
        })
        .collect()
}

/// Headline, turn and review banner for the shown position
pub fn status_display(game: &GameModel) -> StatusDisplay {
    let status = game.status();

    let headline = if status.is_game_over() {
        Some(match status.winner() {
            Some(winner) => format!("Game Over: {} wins", winner.name()),
            None => "Game Over: Draw".to_string(),
        })
    } else if status.in_check {
        Some("Check!".to_string())
    } else {
        None
    };

    let turn = format!("{} to move", status.turn.name());

    let review_banner = match game.cursor() {
        Cursor::Live => None,
        Cursor::Reviewing(-1) => Some(format!(
            "Viewing start position of {} moves",
            game.history().len()
        )),
        Cursor::Reviewing(index) => Some(format!(
            "Viewing move {} of {}",
            index + 1,
            game.history().len()
        )),
    };

    StatusDisplay {
        headline,
        turn,
        review_banner,
    }
}
