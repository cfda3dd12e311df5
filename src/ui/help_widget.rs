//! Terminal renderer for the help dialog.
//!
//! Buffers rows per group through the [`HelpDialogView`] seam and draws a
//! centered popup with grouped sections, a close affordance and footer links
//! for the options page and the advanced toggle. Rects of the interactive
//! regions are recorded at render time so mouse clicks can be classified.

use crate::commands::CommandGroup;
use crate::theme::HelpTheme;
use crate::view::{ClickTarget, HelpDialogView, HelpRow};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const KEY_COLUMN_WIDTH: usize = 18;
const OPTIONS_LINK_TEXT: &str = "Options";

pub struct HelpDialogWidget {
    groups: Vec<(CommandGroup, Vec<HelpRow>)>,
    toggle_label: String,
    advanced_visible: bool,
    indicator: Option<String>,
    scroll_offset: usize,
    dialog_area: Option<Rect>,
    close_area: Option<Rect>,
    options_link_area: Option<Rect>,
    toggle_area: Option<Rect>,
}

impl HelpDialogWidget {
    pub fn new() -> Self {
        Self {
            groups: CommandGroup::ALL
                .iter()
                .map(|&group| (group, Vec::new()))
                .collect(),
            toggle_label: String::new(),
            advanced_visible: false,
            indicator: None,
            scroll_offset: 0,
            dialog_area: None,
            close_area: None,
            options_link_area: None,
            toggle_area: None,
        }
    }

    /// Rows currently buffered for a group, advanced ones included.
    pub fn rows(&self, group: CommandGroup) -> &[HelpRow] {
        self.groups
            .iter()
            .find(|(g, _)| *g == group)
            .map(|(_, rows)| rows.as_slice())
            .unwrap_or(&[])
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    fn visible_rows(&self, rows: &[HelpRow]) -> usize {
        rows.iter()
            .filter(|row| self.advanced_visible || !row.advanced)
            .count()
    }

    fn row_line(&self, row: &HelpRow, theme: &HelpTheme) -> Line<'static> {
        let label_style = if row.advanced {
            theme.advanced
        } else {
            theme.description
        };
        Line::from(vec![
            Span::styled(
                format!("  {:<width$}", row.keys.join(", "), width = KEY_COLUMN_WIDTH),
                theme.key,
            ),
            Span::styled(" - ", theme.footer),
            Span::styled(row.label.clone(), label_style),
        ])
    }

    fn content_lines(&self, theme: &HelpTheme) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        for (group, rows) in &self.groups {
            if self.visible_rows(rows) == 0 {
                continue;
            }
            if !lines.is_empty() {
                lines.push(Line::from(""));
            }
            lines.push(Line::from(Span::styled(
                format!(" {} ", group.title()),
                theme.group_title,
            )));
            for row in rows {
                if !self.advanced_visible && row.advanced {
                    continue;
                }
                lines.push(self.row_line(row, theme));
            }
        }
        lines
    }

    /// Render the dialog as a centered popup over `area`.
    pub fn render(&mut self, frame: &mut Frame, area: Rect, theme: &HelpTheme) {
        let popup = centered_rect(70, 80, area);
        self.dialog_area = Some(popup);

        frame.render_widget(Clear, popup);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Help ")
            .title_style(theme.title)
            .border_style(theme.border);
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        // Close affordance on the top border, clear of the corner.
        let close = Rect {
            x: popup.x + popup.width.saturating_sub(5),
            y: popup.y,
            width: 3,
            height: 1,
        };
        frame.render_widget(Paragraph::new(Line::from(Span::styled("[x]", theme.link))), close);
        self.close_area = Some(close);

        let sections = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(inner);

        let lines = self.content_lines(theme);
        let max_visible = sections[0].height as usize;
        if self.scroll_offset + max_visible > lines.len() {
            self.scroll_offset = lines.len().saturating_sub(max_visible);
        }
        let visible: Vec<Line> = lines
            .into_iter()
            .skip(self.scroll_offset)
            .take(max_visible)
            .collect();
        frame.render_widget(Paragraph::new(visible), sections[0]);

        self.render_footer(frame, sections[1], theme);

        if let Some(message) = &self.indicator {
            let indicator = Rect {
                x: inner.x,
                y: inner.y + inner.height.saturating_sub(2),
                width: inner.width,
                height: 1,
            };
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(message.clone(), theme.title)))
                    .alignment(Alignment::Center),
                indicator,
            );
        }
    }

    fn render_footer(&mut self, frame: &mut Frame, area: Rect, theme: &HelpTheme) {
        let options_width = OPTIONS_LINK_TEXT.len() as u16;
        let toggle_width = self.toggle_label.len() as u16;

        let options_area = Rect {
            x: area.x + 1,
            y: area.y,
            width: options_width.min(area.width),
            height: 1,
        };
        let toggle_area = Rect {
            x: (area.x + area.width).saturating_sub(toggle_width + 1),
            y: area.y,
            width: toggle_width.min(area.width),
            height: 1,
        };

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(OPTIONS_LINK_TEXT, theme.link))),
            options_area,
        );
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                self.toggle_label.clone(),
                theme.link,
            ))),
            toggle_area,
        );

        self.options_link_area = Some(options_area);
        self.toggle_area = Some(toggle_area);
    }

    /// Classify a mouse click by screen position. Interactive rects come from
    /// the most recent render; before any render everything is `Outside`.
    pub fn hit_test(&self, column: u16, row: u16) -> ClickTarget {
        if rect_contains(self.close_area, column, row) {
            return ClickTarget::Close;
        }
        if rect_contains(self.options_link_area, column, row) {
            return ClickTarget::OptionsLink;
        }
        if rect_contains(self.toggle_area, column, row) {
            return ClickTarget::ToggleAdvanced;
        }
        if rect_contains(self.dialog_area, column, row) {
            return ClickTarget::Inside;
        }
        ClickTarget::Outside
    }
}

impl Default for HelpDialogWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl HelpDialogView for HelpDialogWidget {
    fn clear_group(&mut self, group: CommandGroup) {
        if let Some((_, rows)) = self.groups.iter_mut().find(|(g, _)| *g == group) {
            rows.clear();
        }
    }

    fn render_row(&mut self, group: CommandGroup, row: HelpRow) {
        if let Some((_, rows)) = self.groups.iter_mut().find(|(g, _)| *g == group) {
            rows.push(row);
        }
    }

    fn set_toggle_label(&mut self, label: &str) {
        self.toggle_label = label.to_string();
    }

    fn set_advanced_visible(&mut self, visible: bool) {
        self.advanced_visible = visible;
    }

    fn set_indicator(&mut self, message: Option<&str>) {
        self.indicator = message.map(str::to_string);
    }

    fn content_height(&self) -> usize {
        let mut height = 0;
        let mut first = true;
        for (_, rows) in &self.groups {
            let visible = self.visible_rows(rows);
            if visible == 0 {
                continue;
            }
            if !first {
                height += 1; // blank separator
            }
            height += 1 + visible; // group title plus rows
            first = false;
        }
        height
    }

    fn scroll_by(&mut self, delta: isize) {
        if delta >= 0 {
            self.scroll_offset = self.scroll_offset.saturating_add(delta as usize);
        } else {
            self.scroll_offset = self.scroll_offset.saturating_sub(delta.unsigned_abs());
        }
    }
}

fn centered_rect(width_percent: u16, height_percent: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - height_percent) / 2),
            Constraint::Percentage(height_percent),
            Constraint::Percentage((100 - height_percent) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - width_percent) / 2),
            Constraint::Percentage(width_percent),
            Constraint::Percentage((100 - width_percent) / 2),
        ])
        .split(vertical[1])[1]
}

fn rect_contains(rect: Option<Rect>, column: u16, row: u16) -> bool {
    match rect {
        Some(rect) => {
            column >= rect.x
                && column < rect.x + rect.width
                && row >= rect.y
                && row < rect.y + rect.height
        }
        None => false,
    }
}
