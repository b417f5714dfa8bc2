use crate::cli::core::{CommandError, CommandResult};
use crate::cli::output;
use crate::cli::shell_context::ShellContext;
use crate::utils::build_info;

pub(crate) const CONFIG_USAGE: &str = "config [show | set <currency|chart_width|plain_mode> <value>]";

const FAREWELL: &str = "Thank you for using the Expense Tracker!";

pub(crate) fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] | ["show"] => show_config(context),
        ["set", key, value @ ..] if !value.is_empty() => set_config(context, key, &value.join(" ")),
        _ => Err(CommandError::InvalidArguments(format!(
            "usage: {}",
            CONFIG_USAGE
        ))),
    }
}

fn show_config(context: &ShellContext) -> CommandResult {
    output::section("Configuration");
    match &context.config_manager {
        Some(manager) => output::info(format!("  File         : {}", manager.path().display())),
        None => output::info("  File         : (unavailable)"),
    }
    output::info(format!("  Currency     : {}", context.config.currency_symbol));
    output::info(format!("  Chart width  : {}", context.config.chart_width));
    output::info(format!("  Plain mode   : {}", context.config.plain_mode));
    Ok(())
}

fn set_config(context: &mut ShellContext, key: &str, value: &str) -> CommandResult {
    let mut updated = context.config.clone();
    updated.set_value(key, value)?;

    let Some(manager) = &context.config_manager else {
        return Err(CommandError::InvalidArguments(
            "Configuration directory unavailable; settings cannot be saved.".into(),
        ));
    };
    manager.save(&updated)?;
    tracing::info!(%key, %value, path = %manager.path().display(), "configuration saved");

    context.config = updated;
    output::set_preferences(output::OutputPreferences {
        plain_mode: context.config.plain_mode,
    });
    output::success(format!("Updated `{}`.", key.to_ascii_lowercase()));
    Ok(())
}

pub(crate) fn cmd_version(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let meta = build_info::current();
    output::section(format!("Expense Tracker {}", meta.version));
    output::info(format!(
        "  Build hash   : {} ({})",
        meta.git_hash, meta.git_status
    ));
    output::info(format!("  Built at     : {}", meta.timestamp));
    output::info(format!("  Target       : {}", meta.target));
    output::info(format!("  Profile      : {}", meta.profile));
    output::info(format!("  Rustc        : {}", meta.rustc));
    Ok(())
}

pub(crate) fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(name) = args.first() {
        match super::lookup(&name.to_lowercase()) {
            Some(entry) => {
                output::section(entry.name);
                output::info(entry.description);
                output::info(format!("usage: {}", entry.usage));
            }
            None => context.suggest_command(name),
        }
        return Ok(());
    }

    output::section("Commands");
    for entry in super::COMMANDS {
        output::info(format!("{:<34} {}", entry.usage, entry.description));
    }
    Ok(())
}

pub(crate) fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::info(FAREWELL);
    Err(CommandError::ExitRequested)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::shell_context::CliMode;
    use crate::config::{Config, ConfigManager, MAX_CHART_WIDTH};

    fn context_in(dir: &tempfile::TempDir) -> ShellContext {
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();
        ShellContext::with_config(CliMode::Script, Some(manager), Config::default())
    }

    #[test]
    fn config_set_persists_the_change() {
        let dir = tempfile::tempdir().unwrap();
        let mut context = context_in(&dir);

        cmd_config(&mut context, &["set", "currency", "EUR"]).unwrap();
        cmd_config(&mut context, &["set", "chart_width", "9999"]).unwrap();

        assert_eq!(context.config.currency_symbol, "EUR");
        assert_eq!(context.config.chart_width, MAX_CHART_WIDTH);

        let reloaded = ConfigManager::with_base_dir(dir.path().to_path_buf())
            .unwrap()
            .load()
            .unwrap();
        assert_eq!(reloaded, context.config);
    }

    #[test]
    fn config_set_rejects_unknown_keys_without_saving() {
        let dir = tempfile::tempdir().unwrap();
        let mut context = context_in(&dir);

        let err = cmd_config(&mut context, &["set", "theme", "dark"]).unwrap_err();

        assert!(matches!(err, CommandError::Config(_)));
        assert_eq!(context.config, Config::default());
        assert!(!dir.path().join("config.json").exists());
    }

    #[test]
    fn config_set_needs_a_config_directory() {
        let mut context = ShellContext::with_config(CliMode::Script, None, Config::default());
        let err = cmd_config(&mut context, &["set", "currency", "EUR"]).unwrap_err();
        assert!(matches!(err, CommandError::InvalidArguments(_)));
        assert_eq!(context.config.currency_symbol, "$");
    }

    #[test]
    fn config_without_value_is_a_usage_error() {
        let mut context = ShellContext::with_config(CliMode::Script, None, Config::default());
        let err = cmd_config(&mut context, &["set", "currency"]).unwrap_err();
        assert!(matches!(err, CommandError::InvalidArguments(_)));
    }

    #[test]
    fn exit_requests_shutdown() {
        let mut context = ShellContext::with_config(CliMode::Script, None, Config::default());
        assert!(matches!(
            cmd_exit(&mut context, &[]),
            Err(CommandError::ExitRequested)
        ));
    }
}
