//! Configure command handler for editing service settings.

use anyhow::Result;
use inquire::Text;

use crate::config::{ConfigFile, ConfigManager};
use crate::ui::{Style, handle_prompt_cancellation};

/// Runs the configure command.
///
/// With `--show`, prints the current settings; otherwise walks through the
/// settings interactively and saves the result.
pub fn run_configure(show: bool) -> Result<()> {
    if show {
        let manager = ConfigManager::new()?;
        print_current_settings(&manager.load_or_default());
        return Ok(());
    }

    handle_prompt_cancellation(run_configure_inner)
}

fn run_configure_inner() -> Result<()> {
    let manager = ConfigManager::new()?;
    let mut config = manager.load_or_default();

    print_current_settings(&config);

    config.qa.endpoint = prompt_optional("QA endpoint URL:", config.qa.endpoint.as_deref())?;
    config.qa.project = prompt_optional("QA project name:", config.qa.project.as_deref())?;
    config.qa.deployment =
        prompt_optional("QA deployment name:", config.qa.deployment.as_deref())?;
    config.qa.api_key_env = prompt_optional(
        "QA API key environment variable:",
        config.qa.api_key_env.as_deref(),
    )?;

    config.translation.endpoint = prompt_optional(
        "Translation endpoint URL (empty = public endpoint):",
        config.translation.endpoint.as_deref(),
    )?;
    config.translation.region = prompt_optional(
        "Translation region:",
        config.translation.region.as_deref(),
    )?;
    config.translation.api_key_env = prompt_optional(
        "Translation API key environment variable:",
        config.translation.api_key_env.as_deref(),
    )?;

    config.session.language = prompt_optional(
        "Default session language (empty = ask at startup):",
        config.session.language.as_deref(),
    )?;

    manager.save(&config)?;

    println!();
    println!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display().to_string())
    );

    Ok(())
}

fn prompt_optional(message: &str, current: Option<&str>) -> Result<Option<String>> {
    let mut prompt = Text::new(message);
    if let Some(current) = current {
        prompt = prompt.with_default(current);
    }

    let value = prompt.prompt()?;
    let value = value.trim();
    if value.is_empty() {
        Ok(None)
    } else {
        Ok(Some(value.to_string()))
    }
}

fn print_current_settings(config: &ConfigFile) {
    let not_set = || Style::secondary("(not set)");

    println!("{}", Style::header("Current settings"));
    println!(
        "  {}       {}",
        Style::label("qa.endpoint"),
        config.qa.endpoint.as_deref().map_or_else(not_set, Style::value)
    );
    println!(
        "  {}        {}",
        Style::label("qa.project"),
        config.qa.project.as_deref().map_or_else(not_set, Style::value)
    );
    println!(
        "  {}     {}",
        Style::label("qa.deployment"),
        config
            .qa
            .deployment
            .as_deref()
            .map_or_else(not_set, Style::value)
    );
    println!(
        "  {}  {}",
        Style::label("session.language"),
        config
            .session
            .language
            .as_deref()
            .map_or_else(not_set, Style::value)
    );
    println!();
}
