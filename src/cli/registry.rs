//! Shell command table. Entries keep a fixed display order so `help` and
//! completion list the wizard commands step by step.

use std::collections::HashMap;

use strsim::levenshtein;

use crate::cli::context::{CommandResult, ShellContext};

pub type CommandHandler = fn(&mut ShellContext, &[&str]) -> CommandResult;

/// Largest edit distance still offered as a "did you mean" suggestion.
const MAX_SUGGESTION_DISTANCE: usize = 2;

pub struct CommandEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub handler: CommandHandler,
}

impl CommandEntry {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        usage: &'static str,
        handler: CommandHandler,
    ) -> Self {
        Self {
            name,
            description,
            usage,
            handler,
        }
    }
}

pub struct CommandRegistry {
    commands: HashMap<&'static str, CommandEntry>,
    order: &'static [&'static str],
}

impl CommandRegistry {
    /// An empty table listing commands in `order`; names missing from it
    /// sort last, alphabetically.
    pub fn new(order: &'static [&'static str]) -> Self {
        Self {
            commands: HashMap::new(),
            order,
        }
    }

    /// Adds `entry`, replacing any command registered under the same name.
    pub fn register(&mut self, entry: CommandEntry) {
        self.commands.insert(entry.name, entry);
    }

    pub fn get(&self, name: &str) -> Option<&CommandEntry> {
        self.commands.get(name)
    }

    pub fn handler(&self, name: &str) -> Option<CommandHandler> {
        self.get(name).map(|entry| entry.handler)
    }

    pub fn list(&self) -> Vec<&CommandEntry> {
        let mut entries: Vec<&CommandEntry> = self.commands.values().collect();
        entries.sort_by_key(|entry| (self.rank(entry.name), entry.name));
        entries
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.list().into_iter().map(|entry| entry.name).collect()
    }

    /// The closest command name to a mistyped `input`, if any is near enough.
    pub fn suggest(&self, input: &str) -> Option<&'static str> {
        let needle = input.to_lowercase();
        self.list()
            .into_iter()
            .map(|entry| (levenshtein(entry.name, &needle), entry.name))
            .filter(|(distance, _)| *distance <= MAX_SUGGESTION_DISTANCE)
            .min_by_key(|(distance, _)| *distance)
            .map(|(_, name)| name)
    }

    fn rank(&self, name: &str) -> usize {
        self.order
            .iter()
            .position(|known| known.eq_ignore_ascii_case(name))
            .unwrap_or(self.order.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
        Ok(())
    }

    fn registry(names: &[&'static str]) -> CommandRegistry {
        let mut registry = CommandRegistry::new(&["service", "provider", "next"]);
        for &name in names {
            registry.register(CommandEntry::new(name, "", "", noop));
        }
        registry
    }

    #[test]
    fn listing_follows_wizard_order_then_name() {
        let registry = registry(&["zeta", "next", "alpha", "provider", "service"]);
        assert_eq!(
            registry.names(),
            vec!["service", "provider", "next", "alpha", "zeta"]
        );
    }

    #[test]
    fn suggestion_picks_nearest_name_within_two_edits() {
        let registry = registry(&["service", "provider", "next"]);
        assert_eq!(registry.suggest("servce"), Some("service"));
        assert_eq!(registry.suggest("NEXR"), Some("next"));
        assert_eq!(registry.suggest("calendar"), None);
    }

    #[test]
    fn re_registering_replaces_the_entry() {
        let mut registry = registry(&["next"]);
        registry.register(CommandEntry::new("next", "continue", "next", noop));
        assert_eq!(registry.names(), vec!["next"]);
        assert_eq!(registry.get("next").unwrap().description, "continue");
    }
}
