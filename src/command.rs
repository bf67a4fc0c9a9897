//! The command registry and its visibility rules.

use std::collections::HashMap;
use std::fmt;

/// The callback invoked when a command is dispatched. It receives the
/// arguments following the command token, and any error it returns is
/// shown to the user verbatim.
pub type CommandAction = Box<dyn Fn(&[String]) -> anyhow::Result<()>>;

/// Commands are invoked by their map key. Keys are case-sensitive and
/// MUST NOT contain spaces; a space in a command name panics at dispatch
/// time.
pub type Registry = HashMap<String, Command>;

/// A named, registrable unit of CLI functionality.
///
/// Every field has a safe default, so it is always valid to register an
/// empty `Command`. That is not interesting, but it never crashes.
#[derive(Default)]
pub struct Command {
    /// Invoked with the arguments following the command token. Leaving
    /// this unset marks the command as not implemented.
    pub action: Option<CommandAction>,

    /// Terse description shown in the command list. For long-form text
    /// see `help`.
    pub summary: String,

    /// Long-form help page displayed by the `help` command. When the
    /// help command is invoked with no arguments, it lists every entry
    /// with a non-empty `help`.
    pub help: String,

    /// Hidden commands may still be invoked as normal but are excluded
    /// from the command list and the help topics. Useful for deprecating
    /// commands or for special commands that are not part of the UI.
    pub hidden: bool,

    /// Help-only commands exist purely for documentation, such as
    /// installation or configuration instructions. They are accessible
    /// through the help command but can never be invoked, and their
    /// `summary` is never used.
    pub help_only: bool,
}

impl Command {
    /// Whether this command appears in the command list.
    pub fn is_listed(&self) -> bool {
        !self.hidden && !self.help_only
    }

    /// Whether this command appears in the list of help topics.
    pub fn is_topic(&self) -> bool {
        !self.hidden && !self.help.is_empty()
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("action", &self.action.is_some())
            .field("summary", &self.summary)
            .field("help", &self.help)
            .field("hidden", &self.hidden)
            .field("help_only", &self.help_only)
            .finish()
    }
}

/// Return all registered command names in lexical order.
///
/// Every rendering path goes through this; deterministic help output is
/// part of the contract, not an implementation detail.
pub fn sorted_names(commands: &Registry) -> Vec<&str> {
    let mut names: Vec<&str> = commands.keys().map(String::as_str).collect();
    names.sort_unstable();
    names
}

/// Column width for the command list: the length of the longest listed
/// name. Hidden and help-only entries never stretch the column.
pub(crate) fn list_width(commands: &Registry) -> usize {
    commands
        .iter()
        .filter(|(_, command)| command.is_listed())
        .map(|(name, _)| name.len())
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_names() {
        let mut commands = Registry::new();
        for name in ["map", "filter", "reduce", "find", "keys"] {
            commands.insert(name.to_string(), Command::default());
        }

        assert_eq!(
            sorted_names(&commands),
            vec!["filter", "find", "keys", "map", "reduce"]
        );
    }

    #[test]
    fn test_sorted_names_empty_registry() {
        assert!(sorted_names(&Registry::new()).is_empty());
    }

    #[test]
    fn test_sorted_names_single_entry() {
        let mut commands = Registry::new();
        commands.insert("only".to_string(), Command::default());
        assert_eq!(sorted_names(&commands), vec!["only"]);
    }

    #[test]
    fn test_visibility_predicates() {
        let plain = Command {
            help: "body".to_string(),
            ..Command::default()
        };
        assert!(plain.is_listed());
        assert!(plain.is_topic());

        let hidden = Command {
            hidden: true,
            help: "body".to_string(),
            ..Command::default()
        };
        assert!(!hidden.is_listed());
        assert!(!hidden.is_topic());

        let help_only = Command {
            help_only: true,
            help: "body".to_string(),
            ..Command::default()
        };
        assert!(!help_only.is_listed());
        assert!(help_only.is_topic());

        let no_help = Command::default();
        assert!(no_help.is_listed());
        assert!(!no_help.is_topic());
    }

    #[test]
    fn test_list_width_ignores_unlisted_entries() {
        let mut commands = Registry::new();
        commands.insert("go".to_string(), Command::default());
        commands.insert(
            "very-long-hidden-name".to_string(),
            Command {
                hidden: true,
                ..Command::default()
            },
        );
        commands.insert(
            "very-long-topic-name".to_string(),
            Command {
                help_only: true,
                ..Command::default()
            },
        );

        assert_eq!(list_width(&commands), "go".len());
    }

    #[test]
    fn test_list_width_empty_registry() {
        assert_eq!(list_width(&Registry::new()), 0);
    }
}
