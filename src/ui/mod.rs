pub mod board_layout;
pub mod components;
pub mod display;
pub mod theme;
pub mod view_models;
pub mod views;
