pub mod alerts;
pub mod config;
pub mod deletion;
pub mod logging;
pub mod model;
pub mod remote;
pub mod streams;
pub mod tags;
pub mod tui;
mod tui_shell;
