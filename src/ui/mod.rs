pub mod app;
pub mod board;
pub mod confetti;
pub mod config;
pub mod debug_tools;
pub mod dialogs;
pub mod geometry;
pub mod hud;
pub mod input;
pub mod level;
pub mod palette;
pub mod render;
pub mod scene;
pub mod state;
pub mod surface;
pub mod toolbox;
