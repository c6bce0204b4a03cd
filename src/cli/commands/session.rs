use anyhow::Result;

use crate::config::{ConfigManager, ResolveOptions, resolve_config};
use crate::gateway::{QaClient, TranslationClient};
use crate::session::{Session, TerminalOperator};

pub struct SessionOptions {
    pub language: Option<String>,
    pub project: Option<String>,
    pub deployment: Option<String>,
}

pub async fn run_session(options: SessionOptions) -> Result<()> {
    let manager = ConfigManager::new()?;
    let config_file = manager.load_or_default();

    let resolved = resolve_config(
        &ResolveOptions {
            language: options.language,
            project: options.project,
            deployment: options.deployment,
        },
        &config_file,
    )?;

    let qa = QaClient::new(
        resolved.qa.endpoint,
        resolved.qa.project,
        resolved.qa.deployment,
        resolved.qa.api_key,
    );
    let translator = TranslationClient::new(
        resolved.translation.endpoint,
        resolved.translation.region,
        resolved.translation.api_key,
    );

    let mut session = Session::new(TerminalOperator, qa, translator, resolved.language);
    session.run().await
}
