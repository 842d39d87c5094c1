//! Square rendering component.

use crate::ui::board_layout::BoardLayout;
use crate::ui::components::render_piece;
use crate::ui::theme::{
    CHECK_SQUARE, GHOST_OPACITY, LAST_CAPTURE, LEGAL_CAPTURE, LEGAL_DOT, LEGAL_DOT_SCALE,
    SELECTED_SQUARE, last_move_color, square_color,
};
use crate::ui::view_models::SquareDisplay;
use gpui::{Rgba, div, prelude::*, px, rgb, rgba};

fn background(square: &SquareDisplay) -> Rgba {
    if square.is_selected {
        rgb(SELECTED_SQUARE)
    } else if square.is_checked_king {
        rgb(CHECK_SQUARE)
    } else if square.is_legal_destination && square.piece.is_some() {
        rgb(LEGAL_CAPTURE)
    } else if square.is_last_capture {
        rgb(LAST_CAPTURE)
    } else if square.is_last_move {
        last_move_color(square.row, square.col)
    } else {
        square_color(square.row, square.col)
    }
}

/// Render a single board square with optional piece and highlights
pub fn render_square(square: SquareDisplay, layout: BoardLayout) -> impl IntoElement {
    let square_size = layout.square_size();
    let glyph_size = layout.glyph_size();
    let dot_size = square_size * LEGAL_DOT_SCALE;
    let show_dot = square.is_legal_destination && square.piece.is_none();

    div()
        .flex_shrink_0() // never shrink - maintain aspect ratio
        .size(px(square_size))
        .bg(background(&square))
        .flex()
        .items_center()
        .justify_center()
        .when(show_dot, |el| {
            el.child(div().size(px(dot_size)).rounded_full().bg(rgba(LEGAL_DOT)))
        })
        .when_some(square.piece, |el, p| {
            if square.is_being_dragged {
                // ghost piece on original square
                el.child(
                    div()
                        .size_full()
                        .opacity(GHOST_OPACITY)
                        .child(render_piece(p, glyph_size)),
                )
            } else {
                el.child(render_piece(p, glyph_size))
            }
        })
}
