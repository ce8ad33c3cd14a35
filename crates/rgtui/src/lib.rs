#![forbid(unsafe_code)]

//! Terminal host for rosgraph-tui.
//!
//! Wires the navigation core to a crossterm terminal: command-line options,
//! file logging, the raw-mode session guard, input mapping, the column
//! widgets that act as [`rgtui_nav::ListPort`]s, and the draw loop.

pub mod app;
pub mod cli;
pub mod input;
pub mod logging;
pub mod render;
pub mod terminal_session;
pub mod widget;

pub use app::{App, AppError, source_from_opts};
pub use cli::Opts;
