//! Move list panel - game status, the move history as numbered pairs, and
//! history navigation buttons.

use gpui::{App, Div, Entity, SharedString, div, prelude::*, px, rgb};

use crate::models::GameModel;
use crate::ui::display::{move_list_display, status_display};
use crate::ui::theme::{
    BOARD_PADDING, BORDER_COLOR, MOVE_LIST_BG, PANEL_BG, REVIEW_BANNER_BG, TEXT_ALERT,
    TEXT_PRIMARY, TEXT_SECONDARY,
};
use crate::ui::view_models::{MoveDisplay, MoveRowDisplay, StatusDisplay};

// Colors for move highlighting
const MOVE_HOVER_BG: u32 = 0x3a3a3a;
const MOVE_SELECTED_BG: u32 = 0x4a6da7;
const NAV_BUTTON_BG: u32 = 0x3a3a3a;
const NAV_BUTTON_HOVER_BG: u32 = 0x4a4a4a;
const NAV_BUTTON_DISABLED: u32 = 0x555555;

/// Render the move list panel for a given game model.
/// Returns a Div element that can be used as a child.
pub fn render_move_list_panel(model: &Entity<GameModel>, cx: &App) -> Div {
    let game = model.read(cx);
    let rows = move_list_display(game);
    let status = status_display(game);
    let is_at_start = game.is_at_start();
    let is_live = game.is_live();
    let has_moves = !game.history().is_empty();

    // Clone model for navigation closures
    let model_start = model.clone();
    let model_back = model.clone();
    let model_forward = model.clone();
    let model_end = model.clone();
    let model_undo = model.clone();
    let model_new = model.clone();

    let moves_content = if rows.is_empty() {
        div().text_color(rgb(TEXT_SECONDARY)).child("No moves yet")
    } else {
        div()
            .flex()
            .flex_col()
            .gap_1()
            .children(rows.into_iter().map(|row| render_move_row(model, row)))
    };

    let move_list = div()
        .flex_1()
        .flex()
        .flex_col()
        .bg(rgb(MOVE_LIST_BG))
        .border_1()
        .border_color(rgb(BORDER_COLOR))
        .rounded_md()
        .overflow_hidden()
        // Header (fixed)
        .child(render_status(status))
        // Scrollable moves content
        .child(
            div()
                .id("move-list-scroll")
                .flex_1()
                .overflow_y_scroll()
                .p_4()
                .pt_2()
                .child(moves_content),
        )
        // Navigation buttons at bottom
        .child(
            div()
                .flex()
                .items_center()
                .justify_center()
                .gap_2()
                .p_3()
                .border_t_1()
                .border_color(rgb(BORDER_COLOR))
                .child(render_nav_button("⟨⟨", !is_at_start, move |cx| {
                    model_start.update(cx, |game, cx| {
                        game.go_to_start();
                        cx.notify();
                    });
                }))
                .child(render_nav_button("⟨", !is_at_start, move |cx| {
                    model_back.update(cx, |game, cx| {
                        game.step_back();
                        cx.notify();
                    });
                }))
                .child(render_nav_button("⟩", !is_live, move |cx| {
                    model_forward.update(cx, |game, cx| {
                        game.step_forward();
                        cx.notify();
                    });
                }))
                .child(render_nav_button("⟩⟩", !is_live, move |cx| {
                    model_end.update(cx, |game, cx| {
                        game.go_to_end();
                        cx.notify();
                    });
                })),
        )
        // Game actions
        .child(
            div()
                .flex()
                .items_center()
                .justify_center()
                .gap_2()
                .p_3()
                .pt_0()
                .child(render_nav_button("Undo", has_moves, move |cx| {
                    model_undo.update(cx, |game, cx| {
                        game.undo();
                        cx.notify();
                    });
                }))
                .child(render_nav_button("New Game", has_moves, move |cx| {
                    model_new.update(cx, |game, cx| {
                        game.new_game();
                        cx.notify();
                    });
                })),
        );

    div()
        .size_full()
        .flex()
        .flex_col()
        .bg(rgb(PANEL_BG))
        .p(px(BOARD_PADDING))
        .child(move_list)
}

/// Title, check/game-over headline, turn and review banner
fn render_status(status: StatusDisplay) -> Div {
    div()
        .flex()
        .flex_col()
        .gap_1()
        .p_4()
        .pb_2()
        .border_b_1()
        .border_color(rgb(BORDER_COLOR))
        .child(div().text_color(rgb(TEXT_PRIMARY)).child("2-Player Chess"))
        .when_some(status.headline, |el, headline| {
            el.child(
                div()
                    .text_color(rgb(TEXT_ALERT))
                    .font_weight(gpui::FontWeight::BOLD)
                    .child(headline),
            )
        })
        .child(
            div()
                .text_sm()
                .text_color(rgb(TEXT_SECONDARY))
                .child(status.turn),
        )
        .when_some(status.review_banner, |el, banner| {
            el.child(
                div()
                    .px_2()
                    .py_1()
                    .rounded(px(3.0))
                    .bg(rgb(REVIEW_BANNER_BG))
                    .text_sm()
                    .text_color(rgb(TEXT_PRIMARY))
                    .child(banner),
            )
        })
}

/// Render one numbered row: "1. e4 e5"
fn render_move_row(model: &Entity<GameModel>, row: MoveRowDisplay) -> Div {
    div()
        .flex()
        .items_center()
        .gap_2()
        .child(
            div()
                .text_color(rgb(TEXT_SECONDARY))
                .w(px(40.0))
                .child(format!("{}.", row.move_num)),
        )
        .child(
            div()
                .flex_1()
                .child(render_clickable_move(row.white, model.clone())),
        )
        .child(
            div()
                .flex_1()
                .when_some(row.black, |el, mv| {
                    el.child(render_clickable_move(mv, model.clone()))
                }),
        )
}

/// Render a clickable move that shows the position after it
fn render_clickable_move(mv: MoveDisplay, model: Entity<GameModel>) -> impl IntoElement {
    let index = mv.index as isize;
    div()
        .id(SharedString::from(format!("move-{}", mv.index)))
        .px_1()
        .rounded(px(3.0))
        .cursor_pointer()
        .text_color(rgb(TEXT_PRIMARY))
        .when(mv.is_current, |el| el.bg(rgb(MOVE_SELECTED_BG)))
        .when(!mv.is_current, |el| el.hover(|s| s.bg(rgb(MOVE_HOVER_BG))))
        .on_click(move |_ev, _window, cx| {
            model.update(cx, |game, cx| {
                game.jump_to(Some(index));
                cx.notify();
            });
        })
        .child(mv.text)
}

/// Render a navigation or action button
fn render_nav_button(
    label: &'static str,
    enabled: bool,
    on_click: impl Fn(&mut App) + 'static,
) -> impl IntoElement {
    div()
        .id(SharedString::from(format!("nav-{}", label)))
        .px_4()
        .py_2()
        .rounded(px(4.0))
        .text_color(if enabled {
            rgb(TEXT_PRIMARY)
        } else {
            rgb(NAV_BUTTON_DISABLED)
        })
        .font_weight(gpui::FontWeight::BOLD)
        .when(enabled, |el| {
            el.bg(rgb(NAV_BUTTON_BG))
                .cursor_pointer()
                .hover(|s| s.bg(rgb(NAV_BUTTON_HOVER_BG)))
                .on_click(move |_ev, _window, cx| {
                    on_click(cx);
                })
        })
        .when(!enabled, |el| el.bg(rgb(PANEL_BG)))
        .child(label)
}
