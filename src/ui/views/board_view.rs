//! Chess board view - the main board with click and drag-and-drop piece
//! movement, plus keyboard navigation through the move history.

use gpui::{
    App, Context, Entity, FocusHandle, Focusable, MouseButton, MouseDownEvent, MouseMoveEvent,
    MouseUpEvent, Pixels, Subscription, Window, actions, canvas, div, prelude::*, px, rgb,
};
use gpui_component::resizable::{h_resizable, resizable_panel};

use crate::models::{DragState, GameModel};
use crate::ui::board_layout::BoardLayout;
use crate::ui::components::{render_piece, render_square};
use crate::ui::display::board_squares;
use crate::ui::theme::{BOARD_PADDING, INITIAL_LEFT_PANEL, INITIAL_RIGHT_PANEL, PANEL_BG};
use crate::ui::views::render_move_list_panel;

/// Key context the board's key bindings are registered under
pub const KEY_CONTEXT: &str = "ChessBoard";

actions!(
    chess_board,
    [StepBack, StepForward, JumpToStart, ReturnToLive, Undo, NewGame]
);

/// The main chess board view that observes a GameModel
pub struct ChessBoardView {
    model: Entity<GameModel>,
    /// Measured from the board panel on every paint
    layout: BoardLayout,
    focus_handle: FocusHandle,
    _subscription: Subscription,
}

impl ChessBoardView {
    pub fn new(model: Entity<GameModel>, cx: &mut Context<Self>) -> Self {
        let _subscription = cx.observe(&model, |_, _, cx| cx.notify());
        Self {
            model,
            layout: BoardLayout::default(),
            focus_handle: cx.focus_handle(),
            _subscription,
        }
    }

    fn update_game(&mut self, cx: &mut Context<Self>, f: impl FnOnce(&mut GameModel)) {
        self.model.update(cx, |game, cx| {
            f(game);
            cx.notify();
        });
    }

    fn step_back(&mut self, _: &StepBack, _window: &mut Window, cx: &mut Context<Self>) {
        self.update_game(cx, GameModel::step_back);
    }

    fn step_forward(&mut self, _: &StepForward, _window: &mut Window, cx: &mut Context<Self>) {
        self.update_game(cx, GameModel::step_forward);
    }

    fn jump_to_start(&mut self, _: &JumpToStart, _window: &mut Window, cx: &mut Context<Self>) {
        self.update_game(cx, GameModel::go_to_start);
    }

    fn return_to_live(&mut self, _: &ReturnToLive, _window: &mut Window, cx: &mut Context<Self>) {
        self.update_game(cx, GameModel::go_to_end);
    }

    fn undo(&mut self, _: &Undo, _window: &mut Window, cx: &mut Context<Self>) {
        self.update_game(cx, GameModel::undo);
    }

    fn new_game(&mut self, _: &NewGame, _window: &mut Window, cx: &mut Context<Self>) {
        self.update_game(cx, GameModel::new_game);
    }
}

impl Focusable for ChessBoardView {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for ChessBoardView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let model_down = self.model.clone();
        let model_move = self.model.clone();
        let model_up = self.model.clone();
        let view_measure = cx.entity();
        let focus_down = self.focus_handle.clone();
        let layout = self.layout;

        let game = self.model.read(cx);
        let squares = board_squares(game);
        let drag_state = game.drag_state;

        let square_size = layout.square_size();
        let piece_size = layout.piece_size();
        let glyph_size = layout.glyph_size();

        // Floating piece follows cursor during drag
        let floating_piece = drag_state.map(|d| {
            div()
                .absolute()
                .left(px(d.mouse_x - piece_size / 2.0))
                .top(px(d.mouse_y - piece_size / 2.0))
                .size(px(piece_size))
                .child(render_piece(d.piece, glyph_size))
        });

        // Board element with fixed size - always maintains 1:1 aspect ratio
        let board_total_size = layout.board_total_size();
        let board = div()
            .flex_shrink_0()
            .flex()
            .flex_col()
            .w(px(board_total_size))
            .h(px(board_total_size))
            .overflow_hidden()
            .rounded_md()
            .children(squares.chunks(8).map(|rank| {
                div()
                    .flex()
                    .flex_shrink_0()
                    .h(px(square_size))
                    .children(rank.iter().map(|square| render_square(*square, layout)))
            }));

        let board_panel_content = div()
            .id("board-panel")
            .relative()
            .size_full()
            .overflow_hidden()
            .bg(rgb(PANEL_BG))
            .p(px(BOARD_PADDING))
            .child(board)
            .when_some(floating_piece, |el, fp| el.child(fp))
            // Mouse down: click a square, start a drag if a piece got selected
            .on_mouse_down(
                MouseButton::Left,
                move |ev: &MouseDownEvent, window, cx| {
                    window.focus(&focus_down);
                    let (x, y): (f32, f32) = (ev.position.x.into(), ev.position.y.into());
                    let Some(sq) = layout.square_at(x, y) else {
                        return;
                    };
                    model_down.update(cx, |game, cx| {
                        game.click_square(sq);
                        if game.is_selected(sq) {
                            let (row, col) = crate::domain::to_row_col(sq);
                            game.drag_state = game.piece_at(row, col).map(|piece| DragState {
                                piece,
                                from: sq,
                                mouse_x: x,
                                mouse_y: y,
                            });
                        }
                        cx.notify();
                    });
                },
            )
            // Mouse move: update drag position
            .on_mouse_move(move |ev: &MouseMoveEvent, _, cx| {
                model_move.update(cx, |game, cx| {
                    if let Some(ref mut drag) = game.drag_state {
                        drag.mouse_x = ev.position.x.into();
                        drag.mouse_y = ev.position.y.into();
                        cx.notify();
                    }
                });
            })
            // Mouse up: drop onto another square completes the move,
            // releasing on the origin leaves the piece selected
            .on_mouse_up(MouseButton::Left, move |ev: &MouseUpEvent, _window, cx| {
                model_up.update(cx, |game, cx| {
                    if let Some(drag) = game.drag_state.take() {
                        let pos = ev.position;
                        if let Some(to) = layout.square_at(pos.x.into(), pos.y.into()) {
                            if to != drag.from {
                                game.attempt_move(to);
                            }
                        }
                        cx.notify();
                    }
                });
            });

        // Canvas to measure actual panel size
        let measure_canvas = canvas(
            move |bounds, _window, cx| {
                view_measure.update(cx, |view, cx| {
                    if view.layout.panel_size != bounds.size {
                        view.layout = BoardLayout::new(bounds.size);
                        cx.notify();
                    }
                });
            },
            |_, _, _, _| {},
        )
        .absolute()
        .top_0()
        .left_0()
        .size_full();

        // Wrap board panel content with measuring canvas
        let board_panel_with_measure = div()
            .relative()
            .size_full()
            .child(measure_canvas)
            .child(board_panel_content);

        // Move list panel
        let move_list_panel_content = render_move_list_panel(&self.model, cx);

        // Main resizable layout
        div()
            .id("chess-board-root")
            .key_context(KEY_CONTEXT)
            .track_focus(&self.focus_handle)
            .on_action(cx.listener(Self::step_back))
            .on_action(cx.listener(Self::step_forward))
            .on_action(cx.listener(Self::jump_to_start))
            .on_action(cx.listener(Self::return_to_live))
            .on_action(cx.listener(Self::undo))
            .on_action(cx.listener(Self::new_game))
            .size_full()
            .child(
                h_resizable("chess-layout")
                    .child(
                        resizable_panel()
                            .size(px(INITIAL_LEFT_PANEL))
                            .size_range(px(320.)..px(1200.))
                            .child(board_panel_with_measure),
                    )
                    .child(
                        resizable_panel()
                            .size(px(INITIAL_RIGHT_PANEL))
                            .size_range(px(150.)..Pixels::MAX)
                            .child(move_list_panel_content),
                    ),
            )
    }
}
