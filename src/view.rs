//! The rendering seam between the dialog controller and whatever actually
//! draws it. Row building and sorting only ever talk to this trait, so the
//! controller can be exercised without a real terminal.

use crate::commands::CommandGroup;

/// One rendered line of the dialog: a command variant and its sorted keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpRow {
    /// Command name, e.g. `scrollDown`.
    pub command: String,
    /// Visible label: description plus a possibly-truncated options suffix.
    pub label: String,
    /// The untruncated label, present only when `label` was truncated;
    /// renderers surface it through a hover/long-press affordance.
    pub full_label: Option<String>,
    /// Key labels in display order (plain keys before named keys).
    pub keys: Vec<String>,
    /// Hidden unless the advanced toggle is on.
    pub advanced: bool,
}

/// What a mouse click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The close affordance.
    Close,
    /// The link to the settings surface.
    OptionsLink,
    /// The advanced-commands toggle.
    ToggleAdvanced,
    /// Inside the dialog bounds but on nothing interactive.
    Inside,
    /// Outside the dialog bounds.
    Outside,
}

/// Capability interface the controller renders through.
pub trait HelpDialogView {
    /// Drop all rows previously rendered into a group container.
    fn clear_group(&mut self, group: CommandGroup);

    /// Append a row to a group container.
    fn render_row(&mut self, group: CommandGroup, row: HelpRow);

    /// Update the advanced-toggle control's label text.
    fn set_toggle_label(&mut self, label: &str);

    /// Show or hide advanced rows.
    fn set_advanced_visible(&mut self, visible: bool);

    /// Show a transient indicator overlay, or clear it with `None`.
    fn set_indicator(&mut self, message: Option<&str>);

    /// Height in lines of the currently visible content, used to keep the
    /// toggle control visually stable across re-renders.
    fn content_height(&self) -> usize;

    /// Adjust the scroll offset by `delta` lines.
    fn scroll_by(&mut self, delta: isize);
}
