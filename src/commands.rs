use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Display groups for the help dialog, in canonical presentation order.
///
/// Grouping is exhaustive by design: every command carries exactly one group,
/// so there is no fallback bucket for ungrouped commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CommandGroup {
    PageNavigation,
    Omnibar,
    Find,
    History,
    Tabs,
    Misc,
}

impl CommandGroup {
    /// Canonical group order used when rendering the dialog.
    pub const ALL: [CommandGroup; 6] = [
        CommandGroup::PageNavigation,
        CommandGroup::Omnibar,
        CommandGroup::Find,
        CommandGroup::History,
        CommandGroup::Tabs,
        CommandGroup::Misc,
    ];

    /// Human-readable section title.
    pub fn title(&self) -> &'static str {
        match self {
            CommandGroup::PageNavigation => "Navigating the page",
            CommandGroup::Omnibar => "Omnibar commands",
            CommandGroup::Find => "Find commands",
            CommandGroup::History => "Navigating history",
            CommandGroup::Tabs => "Manipulating tabs",
            CommandGroup::Misc => "Miscellaneous commands",
        }
    }
}

impl fmt::Display for CommandGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// A named, user-invokable action with a description, a group and an
/// optional "advanced" flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandDefinition {
    pub name: String,
    pub description: String,
    pub group: CommandGroup,
    pub advanced: bool,
}

impl CommandDefinition {
    /// Create a new command definition.
    pub fn new(name: &str, description: &str, group: CommandGroup) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            group,
            advanced: false,
        }
    }

    /// Mark as advanced (hidden from the default help view).
    pub fn advanced(mut self) -> Self {
        self.advanced = true;
        self
    }
}

/// Per-command exceptions to the static advanced flag: a command listed here
/// is advanced only when its options string contains the given substring.
const ADVANCED_OPTION_EXCEPTIONS: &[(&str, &str)] = &[("reload", "hard")];

/// Whether a command variant should be hidden behind the advanced toggle.
///
/// A statically marked command is advanced regardless of its options. The
/// exception table adds option-dependent cases on top of that.
pub fn is_advanced_command(definition: &CommandDefinition, options: &str) -> bool {
    if definition.advanced {
        return true;
    }
    ADVANCED_OPTION_EXCEPTIONS
        .iter()
        .any(|(name, substring)| definition.name == *name && options.contains(substring))
}

/// The command catalog: a canonical ordered list of definitions plus a name
/// index. The list order defines within-group iteration order in the dialog.
#[derive(Debug, Clone)]
pub struct CommandRegistry {
    commands: Vec<CommandDefinition>,
    index: HashMap<String, usize>,
}

impl CommandRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// The built-in command catalog.
    pub fn builtin() -> Self {
        let mut registry = Self::new();

        // Navigating the page
        registry.register(CommandDefinition::new(
            "scrollDown",
            "Scroll down",
            CommandGroup::PageNavigation,
        ));
        registry.register(CommandDefinition::new(
            "scrollUp",
            "Scroll up",
            CommandGroup::PageNavigation,
        ));
        registry.register(CommandDefinition::new(
            "scrollLeft",
            "Scroll left",
            CommandGroup::PageNavigation,
        ));
        registry.register(CommandDefinition::new(
            "scrollRight",
            "Scroll right",
            CommandGroup::PageNavigation,
        ));
        registry.register(CommandDefinition::new(
            "scrollToTop",
            "Scroll to the top of the page",
            CommandGroup::PageNavigation,
        ));
        registry.register(CommandDefinition::new(
            "scrollToBottom",
            "Scroll to the bottom of the page",
            CommandGroup::PageNavigation,
        ));
        registry.register(CommandDefinition::new(
            "scrollPageDown",
            "Scroll a half page down",
            CommandGroup::PageNavigation,
        ));
        registry.register(CommandDefinition::new(
            "scrollPageUp",
            "Scroll a half page up",
            CommandGroup::PageNavigation,
        ));
        registry.register(CommandDefinition::new(
            "reload",
            "Reload the page",
            CommandGroup::PageNavigation,
        ));
        registry.register(
            CommandDefinition::new(
                "toggleViewSource",
                "View page source",
                CommandGroup::PageNavigation,
            )
            .advanced(),
        );
        registry.register(CommandDefinition::new(
            "copyCurrentUrl",
            "Copy the current URL to the clipboard",
            CommandGroup::PageNavigation,
        ));
        registry.register(
            CommandDefinition::new(
                "openCopiedUrlInCurrentTab",
                "Open the clipboard's URL in the current tab",
                CommandGroup::PageNavigation,
            )
            .advanced(),
        );
        registry.register(CommandDefinition::new(
            "enterInsertMode",
            "Enter insert mode",
            CommandGroup::PageNavigation,
        ));
        registry.register(
            CommandDefinition::new(
                "focusInput",
                "Focus the first text input on the page",
                CommandGroup::PageNavigation,
            )
            .advanced(),
        );
        registry.register(CommandDefinition::new(
            "followLink",
            "Open a link in the current tab",
            CommandGroup::PageNavigation,
        ));
        registry.register(CommandDefinition::new(
            "followLinkInNewTab",
            "Open a link in a new tab",
            CommandGroup::PageNavigation,
        ));

        // Omnibar commands
        registry.register(CommandDefinition::new(
            "openOmnibar",
            "Open URL, bookmark or history entry",
            CommandGroup::Omnibar,
        ));
        registry.register(CommandDefinition::new(
            "openOmnibarNewTab",
            "Open URL, bookmark or history entry in a new tab",
            CommandGroup::Omnibar,
        ));
        registry.register(CommandDefinition::new(
            "bookmarkSearch",
            "Open a bookmark",
            CommandGroup::Omnibar,
        ));
        registry.register(
            CommandDefinition::new("editCurrentUrl", "Edit the current URL", CommandGroup::Omnibar)
                .advanced(),
        );

        // Find commands
        registry.register(CommandDefinition::new(
            "enterFindMode",
            "Enter find mode",
            CommandGroup::Find,
        ));
        registry.register(CommandDefinition::new(
            "performFind",
            "Cycle forward to the next find match",
            CommandGroup::Find,
        ));
        registry.register(CommandDefinition::new(
            "performBackwardsFind",
            "Cycle backward to the previous find match",
            CommandGroup::Find,
        ));

        // Navigating history
        registry.register(CommandDefinition::new(
            "goBack",
            "Go back in history",
            CommandGroup::History,
        ));
        registry.register(CommandDefinition::new(
            "goForward",
            "Go forward in history",
            CommandGroup::History,
        ));

        // Manipulating tabs
        registry.register(CommandDefinition::new(
            "createTab",
            "Create new tab",
            CommandGroup::Tabs,
        ));
        registry.register(CommandDefinition::new(
            "nextTab",
            "Go one tab right",
            CommandGroup::Tabs,
        ));
        registry.register(CommandDefinition::new(
            "previousTab",
            "Go one tab left",
            CommandGroup::Tabs,
        ));
        registry.register(
            CommandDefinition::new("firstTab", "Go to the first tab", CommandGroup::Tabs).advanced(),
        );
        registry.register(
            CommandDefinition::new("lastTab", "Go to the last tab", CommandGroup::Tabs).advanced(),
        );
        registry.register(CommandDefinition::new(
            "duplicateTab",
            "Duplicate current tab",
            CommandGroup::Tabs,
        ));
        registry.register(CommandDefinition::new(
            "removeTab",
            "Close current tab",
            CommandGroup::Tabs,
        ));
        registry.register(CommandDefinition::new(
            "restoreTab",
            "Restore closed tab",
            CommandGroup::Tabs,
        ));
        registry.register(
            CommandDefinition::new("togglePinTab", "Pin or unpin current tab", CommandGroup::Tabs)
                .advanced(),
        );
        registry.register(
            CommandDefinition::new("moveTabLeft", "Move tab to the left", CommandGroup::Tabs)
                .advanced(),
        );
        registry.register(
            CommandDefinition::new("moveTabRight", "Move tab to the right", CommandGroup::Tabs)
                .advanced(),
        );

        // Miscellaneous commands
        registry.register(CommandDefinition::new(
            "showHelp",
            "Show help",
            CommandGroup::Misc,
        ));
        registry.register(
            CommandDefinition::new(
                "toggleMuteTab",
                "Mute or unmute current tab",
                CommandGroup::Misc,
            )
            .advanced(),
        );

        registry
    }

    /// Register a command, appending it to the canonical order. A definition
    /// with an already-registered name replaces the original in place.
    pub fn register(&mut self, definition: CommandDefinition) {
        if let Some(&position) = self.index.get(&definition.name) {
            self.commands[position] = definition;
        } else {
            self.index
                .insert(definition.name.clone(), self.commands.len());
            self.commands.push(definition);
        }
    }

    /// All commands in canonical order.
    pub fn commands(&self) -> &[CommandDefinition] {
        &self.commands
    }

    /// Look up a command by name.
    pub fn get(&self, name: &str) -> Option<&CommandDefinition> {
        self.index.get(name).map(|&position| &self.commands[position])
    }

    /// Commands belonging to a group, preserving canonical order.
    pub fn in_group(&self, group: CommandGroup) -> impl Iterator<Item = &CommandDefinition> {
        self.commands
            .iter()
            .filter(move |definition| definition.group == group)
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_lookup() {
        let registry = CommandRegistry::builtin();
        assert!(registry.get("scrollDown").is_some());
        assert!(registry.get("reload").is_some());
        assert!(registry.get("noSuchCommand").is_none());
    }

    #[test]
    fn test_group_iteration_preserves_canonical_order() {
        let registry = CommandRegistry::builtin();
        let names: Vec<&str> = registry
            .in_group(CommandGroup::History)
            .map(|definition| definition.name.as_str())
            .collect();
        assert_eq!(names, vec!["goBack", "goForward"]);
    }

    #[test]
    fn test_register_replaces_in_place() {
        let mut registry = CommandRegistry::new();
        registry.register(CommandDefinition::new("a", "First", CommandGroup::Misc));
        registry.register(CommandDefinition::new("b", "Second", CommandGroup::Misc));
        registry.register(CommandDefinition::new("a", "Replaced", CommandGroup::Misc));

        let names: Vec<&str> = registry
            .commands()
            .iter()
            .map(|definition| definition.name.as_str())
            .collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(registry.get("a").unwrap().description, "Replaced");
    }

    #[test]
    fn test_statically_advanced_command_ignores_options() {
        let registry = CommandRegistry::builtin();
        let definition = registry.get("moveTabLeft").unwrap();
        assert!(is_advanced_command(definition, ""));
        assert!(is_advanced_command(definition, "count=2"));
    }

    #[test]
    fn test_reload_advanced_only_with_hard_option() {
        let registry = CommandRegistry::builtin();
        let reload = registry.get("reload").unwrap();
        assert!(!is_advanced_command(reload, ""));
        assert!(is_advanced_command(reload, "hard"));
        // Substring match, not exact match.
        assert!(is_advanced_command(reload, "nohard-ish-but-no-match"));
    }

    #[test]
    fn test_plain_command_is_not_advanced() {
        let registry = CommandRegistry::builtin();
        let scroll = registry.get("scrollDown").unwrap();
        assert!(!is_advanced_command(scroll, ""));
        assert!(!is_advanced_command(scroll, "hard"));
    }
}
