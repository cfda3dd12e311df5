//! Styling for the help overlay.

use ratatui::style::{Color, Modifier, Style};

/// Style set consumed by the help dialog widget.
#[derive(Debug, Clone)]
pub struct HelpTheme {
    pub border: Style,
    pub title: Style,
    pub group_title: Style,
    pub key: Style,
    pub description: Style,
    pub advanced: Style,
    pub link: Style,
    pub footer: Style,
}

impl Default for HelpTheme {
    fn default() -> Self {
        Self {
            border: Style::default().fg(Color::Cyan),
            title: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            group_title: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            key: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            description: Style::default().fg(Color::Gray),
            advanced: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM),
            link: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::UNDERLINED),
            footer: Style::default().fg(Color::DarkGray),
        }
    }
}
