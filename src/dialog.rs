//! The help dialog controller.
//!
//! Owns the command registry, the view seam, the storage handles and the
//! host port. All logic is single-task and event-driven: the host pushes
//! lifecycle events in, user input arrives as key/mouse events, and the two
//! storage operations are the only suspension points.

use crate::bindings::{sort_key_labels, BindingTable};
use crate::commands::{is_advanced_command, CommandGroup, CommandRegistry};
use crate::messaging::{DialogEvent, DialogNotice, HandlerRequest, HostPort};
use crate::storage::{SessionStore, SettingsStore, SHOW_ADVANCED_KEY};
use crate::text::{compose_row_label, ROW_LABEL_BUDGET};
use crate::view::{ClickTarget, HelpDialogView, HelpRow};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

pub const SHOW_ADVANCED_LABEL: &str = "Show advanced commands";
pub const HIDE_ADVANCED_LABEL: &str = "Hide advanced commands";

fn toggle_label(show_advanced: bool) -> &'static str {
    if show_advanced {
        HIDE_ADVANCED_LABEL
    } else {
        SHOW_ADVANCED_LABEL
    }
}

/// Compute display rows for every group: canonical group order, canonical
/// command order within each group, options variants of a command sorted
/// lexicographically. Commands absent from the binding table are omitted —
/// a command with zero bound keys never yields a row.
pub fn build_rows(
    registry: &CommandRegistry,
    table: &BindingTable,
) -> Vec<(CommandGroup, Vec<HelpRow>)> {
    CommandGroup::ALL
        .iter()
        .map(|&group| {
            let mut rows = Vec::new();
            for definition in registry.in_group(group) {
                let Some(options_map) = table.get(&definition.name) else {
                    continue;
                };
                let mut variants: Vec<(&String, &Vec<String>)> = options_map.iter().collect();
                variants.sort_by(|a, b| a.0.cmp(b.0));

                for (options, keys) in variants {
                    if keys.is_empty() {
                        continue;
                    }
                    let mut keys = keys.clone();
                    sort_key_labels(&mut keys);
                    let label =
                        compose_row_label(&definition.description, options, ROW_LABEL_BUDGET);
                    rows.push(HelpRow {
                        command: definition.name.clone(),
                        label: label.text,
                        full_label: label.full_text,
                        keys,
                        advanced: is_advanced_command(definition, options),
                    });
                }
            }
            (group, rows)
        })
        .collect()
}

/// Controller for the help-dialog overlay. One instance per dialog lifetime;
/// the host owns the actual show/hide of the surrounding frame.
pub struct HelpDialog<V: HelpDialogView> {
    registry: CommandRegistry,
    view: V,
    session: Arc<dyn SessionStore>,
    settings: Arc<dyn SettingsStore>,
    port: Arc<dyn HostPort>,
    show_advanced: bool,
    visible: bool,
    initialized: bool,
}

impl<V: HelpDialogView> HelpDialog<V> {
    pub fn new(
        registry: CommandRegistry,
        view: V,
        session: Arc<dyn SessionStore>,
        settings: Arc<dyn SettingsStore>,
        port: Arc<dyn HostPort>,
    ) -> Self {
        Self {
            registry,
            view,
            session,
            settings,
            port,
            show_advanced: false,
            visible: false,
            initialized: false,
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn shows_advanced(&self) -> bool {
        self.show_advanced
    }

    /// Wire up the dialog chrome. Idempotent: calling repeatedly never
    /// re-registers anything.
    pub fn init(&mut self) {
        if self.initialized {
            return;
        }
        self.view.set_toggle_label(toggle_label(self.show_advanced));
        self.view.set_advanced_visible(self.show_advanced);
        self.initialized = true;
        debug!("help dialog initialized");
    }

    /// Show the dialog: re-fetch the binding table and the persisted
    /// advanced flag, clear every group container and render all rows.
    pub async fn show(&mut self) -> Result<()> {
        self.init();

        self.show_advanced = self
            .settings
            .get_bool(SHOW_ADVANCED_KEY, false)
            .await?;
        let table = self.session.fetch_binding_table().await?;

        let mut row_count = 0;
        for (group, rows) in build_rows(&self.registry, &table) {
            self.view.clear_group(group);
            for row in rows {
                self.view.render_row(group, row);
                row_count += 1;
            }
        }

        self.view.set_advanced_visible(self.show_advanced);
        self.view.set_toggle_label(toggle_label(self.show_advanced));
        self.visible = true;

        debug!(row_count, show_advanced = self.show_advanced, "help dialog rendered");
        Ok(())
    }

    /// Ask the host to dismiss the dialog frame. The host owns the actual
    /// hide; this only posts the notice.
    pub fn request_hide(&self) -> Result<()> {
        self.post(&DialogNotice::Hide)
    }

    /// Flip advanced-row visibility, persist the new value and keep the
    /// toggle control visually stable: when the content grows, scroll down
    /// by the growth so the toggle stays put.
    pub async fn toggle_advanced(&mut self) -> Result<()> {
        let height_before = self.view.content_height();

        self.show_advanced = !self.show_advanced;
        self.settings
            .set_bool(SHOW_ADVANCED_KEY, self.show_advanced)
            .await?;

        self.view.set_advanced_visible(self.show_advanced);
        self.view.set_toggle_label(toggle_label(self.show_advanced));

        let height_after = self.view.content_height();
        if height_after > height_before {
            self.view.scroll_by((height_after - height_before) as isize);
        }

        info!(show_advanced = self.show_advanced, "advanced visibility toggled");
        Ok(())
    }

    /// Dispatch an inbound host message. An unrecognized message name is a
    /// fatal assertion inside [`DialogEvent::from_value`].
    pub async fn handle_message(&mut self, message: serde_json::Value) -> Result<()> {
        match DialogEvent::from_value(message) {
            DialogEvent::Show => self.show().await,
            DialogEvent::Hide => self.request_hide(),
            DialogEvent::Hidden => {
                self.visible = false;
                self.view.set_indicator(None);
                Ok(())
            }
        }
    }

    /// Handle a key event. Returns whether the event was consumed.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<bool> {
        match key.code {
            KeyCode::Esc => {
                self.request_hide()?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Handle a classified mouse click. Clicking outside the dialog bounds
    /// or on the close affordance requests dismissal; the options link fires
    /// on left and middle click alike.
    pub async fn handle_click(&mut self, target: ClickTarget, button: MouseButton) -> Result<()> {
        match (target, button) {
            (ClickTarget::Close | ClickTarget::Outside, MouseButton::Left) => self.request_hide(),
            (ClickTarget::OptionsLink, MouseButton::Left | MouseButton::Middle) => {
                self.post(&HandlerRequest::open_options_page())
            }
            (ClickTarget::ToggleAdvanced, MouseButton::Left) => self.toggle_advanced().await,
            _ => Ok(()),
        }
    }

    fn post<T: Serialize>(&self, message: &T) -> Result<()> {
        self.port.post(serde_json::to_value(message)?);
        Ok(())
    }
}
