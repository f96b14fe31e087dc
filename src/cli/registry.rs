use std::{collections::HashMap, iter};

use strsim::levenshtein;

use super::{context::ShellContext, CommandResult};

/// Unknown words further than this from every command get no suggestion.
const SUGGESTION_DISTANCE: usize = 3;

pub type CommandHandler = fn(&mut ShellContext, &[&str]) -> CommandResult;

/// A shell command: its canonical word, alternative spellings, and help text.
pub struct CommandEntry {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub summary: &'static str,
    pub usage: &'static str,
    pub handler: CommandHandler,
}

impl CommandEntry {
    pub const fn new(
        name: &'static str,
        summary: &'static str,
        usage: &'static str,
        handler: CommandHandler,
    ) -> Self {
        Self {
            name,
            aliases: &[],
            summary,
            usage,
            handler,
        }
    }

    pub fn with_aliases(self, aliases: &'static [&'static str]) -> Self {
        Self { aliases, ..self }
    }

    /// The name followed by every alias.
    pub fn spellings(&self) -> impl Iterator<Item = &'static str> + '_ {
        iter::once(self.name).chain(self.aliases.iter().copied())
    }
}

/// Commands in registration order, reachable by name or alias regardless of case.
#[derive(Default)]
pub struct CommandRegistry {
    entries: Vec<CommandEntry>,
    index: HashMap<&'static str, usize>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `entry`, replacing any earlier entry with the same name. When two
    /// entries claim the same spelling the later one wins.
    pub fn register(&mut self, entry: CommandEntry) {
        let slot = match self.entries.iter().position(|e| e.name == entry.name) {
            Some(slot) => {
                self.index.retain(|_, existing| *existing != slot);
                self.entries[slot] = entry;
                slot
            }
            None => {
                self.entries.push(entry);
                self.entries.len() - 1
            }
        };
        for word in self.entries[slot].spellings() {
            self.index.insert(word, slot);
        }
    }

    pub fn resolve(&self, input: &str) -> Option<&CommandEntry> {
        let word = input.trim().to_lowercase();
        self.index
            .get(word.as_str())
            .map(|&slot| &self.entries[slot])
    }

    pub fn handler(&self, input: &str) -> Option<CommandHandler> {
        self.resolve(input).map(|entry| entry.handler)
    }

    pub fn entries(&self) -> impl Iterator<Item = &CommandEntry> {
        self.entries.iter()
    }

    /// Every word the shell accepts, names and aliases alike, sorted.
    pub fn words(&self) -> Vec<&'static str> {
        let mut words: Vec<_> = self.index.keys().copied().collect();
        words.sort_unstable();
        words
    }

    /// Nearest accepted word to a mistyped `input`, if any is close enough.
    pub fn closest(&self, input: &str) -> Option<&'static str> {
        let needle = input.trim().to_lowercase();
        self.index
            .keys()
            .map(|word| (levenshtein(word, &needle), *word))
            .filter(|(distance, _)| *distance <= SUGGESTION_DISTANCE)
            .min()
            .map(|(_, word)| word)
    }
}
