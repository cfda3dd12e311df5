pub mod bindings;
pub mod commands;
pub mod dialog;
pub mod messaging;
pub mod storage;
pub mod text;
pub mod theme;
pub mod ui;
pub mod view;

pub use dialog::HelpDialog;
