use anyhow::Result;

use crate::config::{ConfigManager, resolve_translation};
use crate::gateway::{TranslationClient, TranslationGateway};
use crate::ui::{Spinner, Style};

/// Fetches the remote language catalog and prints it.
pub async fn run_languages() -> Result<()> {
    let manager = ConfigManager::new()?;
    let config_file = manager.load_or_default();
    let settings = resolve_translation(&config_file)?;

    let client = TranslationClient::new(settings.endpoint, settings.region, settings.api_key);

    let spinner = Spinner::new("Fetching language catalog...");
    let catalog = client.languages().await;
    spinner.stop();
    let catalog = catalog?;

    println!("{}", Style::header("Available languages"));
    for (code, language) in &catalog {
        println!("  {:8} {}", Style::code(code), Style::secondary(&language.name));
    }

    Ok(())
}
