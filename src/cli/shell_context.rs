use dialoguer::theme::ColorfulTheme;

use crate::{
    config::{Config, ConfigManager},
    ledger::OrderedLedger,
};

use super::output;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

/// State owned by one shell session: the ledger being built plus display settings.
pub struct ShellContext {
    pub mode: CliMode,
    pub ledger: OrderedLedger,
    pub theme: ColorfulTheme,
    pub config_manager: Option<ConfigManager>,
    pub config: Config,
    pub last_command: Option<String>,
    pub running: bool,
}

impl ShellContext {
    /// Builds a session with the stored configuration, or defaults when it
    /// cannot be read.
    pub fn new(mode: CliMode) -> Self {
        let (config_manager, config) = match ConfigManager::new() {
            Ok(manager) => match manager.load() {
                Ok(config) => (Some(manager), config),
                Err(err) => {
                    tracing::warn!(error = %err, "falling back to default configuration");
                    output::warning(format!(
                        "Could not read configuration ({err}); using defaults."
                    ));
                    (Some(manager), Config::default())
                }
            },
            Err(err) => {
                tracing::warn!(error = %err, "configuration directory unavailable");
                (None, Config::default())
            }
        };
        Self::with_config(mode, config_manager, config)
    }

    pub fn with_config(
        mode: CliMode,
        config_manager: Option<ConfigManager>,
        config: Config,
    ) -> Self {
        let config = config.sanitized();
        output::set_preferences(output::OutputPreferences {
            plain_mode: config.plain_mode,
        });
        Self {
            mode,
            ledger: OrderedLedger::new(),
            theme: ColorfulTheme::default(),
            config_manager,
            config,
            last_command: None,
            running: true,
        }
    }

    pub fn prompt(&self) -> String {
        format!("expenses ({})> ", self.ledger.len())
    }
}
