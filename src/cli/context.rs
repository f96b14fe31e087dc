use std::io::{self, IsTerminal};

use dialoguer::{theme::ColorfulTheme, Confirm};

use crate::{
    config::{Config, ConfigManager},
    storage::FileStore,
    summary::TerminalRenderer,
    tracker::Tracker,
};

use super::{
    commands, output,
    registry::{CommandEntry, CommandRegistry},
    CliError, CommandError, LoopControl,
};

pub type SessionTracker = Tracker<FileStore, TerminalRenderer<io::Stdout>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

/// State shared by every command in one shell session.
pub struct ShellContext {
    pub(crate) mode: CliMode,
    pub(crate) config: Config,
    pub(crate) tracker: SessionTracker,
    pub(crate) registry: CommandRegistry,
    pub(crate) running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let manager = ConfigManager::new()?;
        let config = manager.load()?;
        output::set_color(config.color);

        let data_dir = manager.data_dir(&config);
        let store = FileStore::new(&data_dir)?;
        tracing::debug!(data_dir = %data_dir.display(), key = %config.storage_key, "opening tracker");
        let renderer = TerminalRenderer::stdout(config.color && io::stdout().is_terminal());
        let tracker = Tracker::open(store, renderer, config.storage_key.clone())?;

        let mut registry = CommandRegistry::new();
        for entry in commands::all() {
            registry.register(entry);
        }

        Ok(Self {
            mode,
            config,
            tracker,
            registry,
            running: true,
        })
    }

    pub fn prompt(&self) -> String {
        format!("budget [{}]> ", self.tracker.balance_line())
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.words()
    }

    pub(crate) fn commands(&self) -> impl Iterator<Item = &CommandEntry> {
        self.registry.entries()
    }

    pub(crate) fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.resolve(name)
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = self.registry.handler(command) {
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));
        if let Some(best) = self.registry.closest(input) {
            output::info(format!("Suggestion: `{}`?", best));
        }
    }

    /// Asks before a destructive action. Script mode and `confirm_clear = false`
    /// skip the prompt.
    pub(crate) fn confirm(&self, prompt: &str) -> Result<bool, CommandError> {
        if self.mode == CliMode::Script || !self.config.confirm_clear {
            return Ok(true);
        }
        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .default(false)
            .interact()
            .map_err(CommandError::from)
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Exit shell?")
            .default(true)
            .interact()
            .map_err(|err| CliError::Command(err.to_string()))
    }

    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::ExitRequested => Ok(()),
            CommandError::InvalidArguments(message) => {
                output::error(&message);
                output::hint("Use `help <command>` for usage details.");
                Ok(())
            }
            other => {
                tracing::error!(error = %other, "command failed");
                output::error(other);
                Ok(())
            }
        }
    }
}
