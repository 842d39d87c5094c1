//! Application setup, key bindings and window creation.

use gpui::{App, Bounds, Focusable, KeyBinding, WindowBounds, WindowOptions, prelude::*, px, size};
use gpui_component::Root;
use log::error;

use crate::config::BoardConfig;
use crate::models::GameModel;
use crate::ui::views::{
    ChessBoardView, JumpToStart, KEY_CONTEXT, NewGame, ReturnToLive, StepBack, StepForward, Undo,
};

fn bind_keys(cx: &mut App) {
    cx.bind_keys([
        KeyBinding::new("left", StepBack, Some(KEY_CONTEXT)),
        KeyBinding::new("right", StepForward, Some(KEY_CONTEXT)),
        KeyBinding::new("home", JumpToStart, Some(KEY_CONTEXT)),
        KeyBinding::new("end", ReturnToLive, Some(KEY_CONTEXT)),
        KeyBinding::new("escape", ReturnToLive, Some(KEY_CONTEXT)),
        KeyBinding::new("ctrl-z", Undo, Some(KEY_CONTEXT)),
        KeyBinding::new("cmd-z", Undo, Some(KEY_CONTEXT)),
        KeyBinding::new("ctrl-n", NewGame, Some(KEY_CONTEXT)),
        KeyBinding::new("cmd-n", NewGame, Some(KEY_CONTEXT)),
    ]);
}

/// Initialize and run the chess application
pub fn run(cx: &mut App, config: BoardConfig) {
    gpui_component::init(cx);
    bind_keys(cx);

    let window_size = size(px(config.window_width), px(config.window_height));

    // Create the game model
    let model = cx.new(|_| GameModel::new(config));

    let bounds = Bounds::centered(None, window_size, cx);
    let opened = cx.open_window(
        WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            ..Default::default()
        },
        |window, cx| {
            let view = cx.new(|cx| ChessBoardView::new(model, cx));
            let focus = view.read(cx).focus_handle(cx);
            window.focus(&focus);
            cx.new(|cx| Root::new(view, window, cx))
        },
    );
    if let Err(err) = opened {
        error!("failed to open window: {err:#}");
        cx.quit();
    }
}
