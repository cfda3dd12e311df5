pub mod help_widget;

pub use help_widget::HelpDialogWidget;
