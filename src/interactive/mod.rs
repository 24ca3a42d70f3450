//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{
    App, DEFAULT_SAVE_PATH, InputMode, LookupMode, Message, MessageStyle, Output, run_tui,
};
