use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::paths;

/// Public endpoint of the reference translation backend, used when the
/// config file does not name one.
const DEFAULT_TRANSLATION_ENDPOINT: &str = "https://api.cognitive.microsofttranslator.com";

/// The `[qa]` section: where the question-answering project lives.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QaConfig {
    /// The question-answering service endpoint URL.
    pub endpoint: Option<String>,
    /// Project name to query.
    pub project: Option<String>,
    /// Deployment name within the project.
    pub deployment: Option<String>,
    /// API key stored directly in config (not recommended).
    #[serde(default)]
    pub api_key: Option<String>,
    /// Environment variable name containing the API key.
    #[serde(default)]
    pub api_key_env: Option<String>,
}

/// The `[translation]` section: the translation service settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TranslationConfig {
    /// The translation service endpoint URL.
    pub endpoint: Option<String>,
    /// Service region, sent alongside the API key when set.
    #[serde(default)]
    pub region: Option<String>,
    /// API key stored directly in config (not recommended).
    #[serde(default)]
    pub api_key: Option<String>,
    /// Environment variable name containing the API key.
    #[serde(default)]
    pub api_key_env: Option<String>,
}

/// The `[session]` section: defaults for the interactive session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionDefaults {
    /// Default session language (skips the interactive selection).
    pub language: Option<String>,
}

impl QaConfig {
    /// Gets the API key, preferring environment variable over config file.
    pub fn get_api_key(&self) -> Option<String> {
        resolve_key(self.api_key_env.as_deref(), self.api_key.as_deref())
    }

    /// Returns `true` if this service is configured with an API key source.
    pub const fn requires_api_key(&self) -> bool {
        self.api_key.is_some() || self.api_key_env.is_some()
    }
}

impl TranslationConfig {
    /// Gets the API key, preferring environment variable over config file.
    pub fn get_api_key(&self) -> Option<String> {
        resolve_key(self.api_key_env.as_deref(), self.api_key.as_deref())
    }

    /// Returns `true` if this service is configured with an API key source.
    pub const fn requires_api_key(&self) -> bool {
        self.api_key.is_some() || self.api_key_env.is_some()
    }
}

fn resolve_key(api_key_env: Option<&str>, api_key: Option<&str>) -> Option<String> {
    if let Some(env_var) = api_key_env
        && let Ok(key) = std::env::var(env_var)
        && !key.is_empty()
    {
        return Some(key);
    }
    api_key.map(ToString::to_string)
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/qna/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Question-answering service settings.
    #[serde(default)]
    pub qa: QaConfig,
    /// Translation service settings.
    #[serde(default)]
    pub translation: TranslationConfig,
    /// Session defaults.
    #[serde(default)]
    pub session: SessionDefaults,
}

/// Resolved question-answering settings, ready to build a client from.
#[derive(Debug, Clone)]
pub struct QaSettings {
    /// The service endpoint URL.
    pub endpoint: String,
    /// Project name to query.
    pub project: String,
    /// Deployment name within the project.
    pub deployment: String,
    /// The API key (if required).
    pub api_key: Option<String>,
}

/// Resolved translation settings, ready to build a client from.
#[derive(Debug, Clone)]
pub struct TranslationSettings {
    /// The service endpoint URL.
    pub endpoint: String,
    /// Service region (if set).
    pub region: Option<String>,
    /// The API key (if required).
    pub api_key: Option<String>,
}

/// Resolved configuration after merging CLI arguments and config file.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Question-answering settings.
    pub qa: QaSettings,
    /// Translation settings.
    pub translation: TranslationSettings,
    /// Preselected session language, if any.
    pub language: Option<String>,
}

/// Options for resolving configuration.
///
/// Contains CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Session language override.
    pub language: Option<String>,
    /// Project name override.
    pub project: Option<String>,
    /// Deployment name override.
    pub deployment: Option<String>,
}

/// Resolves configuration by merging CLI options with config file settings.
///
/// CLI options take precedence over config file values.
///
/// # Errors
///
/// Returns an error if required configuration (QA endpoint, project,
/// deployment) is missing, or if a service names an API key source that
/// yields no key.
pub fn resolve_config(
    options: &ResolveOptions,
    config_file: &ConfigFile,
) -> Result<ResolvedConfig> {
    let qa_endpoint = config_file.qa.endpoint.clone().ok_or_else(|| {
        anyhow::anyhow!(
            "Missing required configuration: 'qa.endpoint'\n\n\
             Set it in ~/.config/qna/config.toml, or run 'qna configure'."
        )
    })?;

    let project = options
        .project
        .as_ref()
        .or(config_file.qa.project.as_ref())
        .cloned()
        .ok_or_else(|| {
            anyhow::anyhow!(
                "Missing required configuration: 'qa.project'\n\n\
                 Please provide it via:\n  \
                 - CLI option: qna --project <name>\n  \
                 - Config file: ~/.config/qna/config.toml"
            )
        })?;

    let deployment = options
        .deployment
        .as_ref()
        .or(config_file.qa.deployment.as_ref())
        .cloned()
        .ok_or_else(|| {
            anyhow::anyhow!(
                "Missing required configuration: 'qa.deployment'\n\n\
                 Please provide it via:\n  \
                 - CLI option: qna --deployment <name>\n  \
                 - Config file: ~/.config/qna/config.toml"
            )
        })?;

    let qa_api_key = config_file.qa.get_api_key();
    if config_file.qa.requires_api_key() && qa_api_key.is_none() {
        bail_missing_key("qa", config_file.qa.api_key_env.as_deref())?;
    }

    let translation = resolve_translation(config_file)?;

    let language = options
        .language
        .as_ref()
        .or(config_file.session.language.as_ref())
        .cloned();

    Ok(ResolvedConfig {
        qa: QaSettings {
            endpoint: qa_endpoint,
            project,
            deployment,
            api_key: qa_api_key,
        },
        translation,
        language,
    })
}

/// Resolves the translation settings alone.
///
/// The endpoint falls back to the public reference endpoint, so the
/// language catalog can be listed without a config file.
pub fn resolve_translation(config_file: &ConfigFile) -> Result<TranslationSettings> {
    let endpoint = config_file
        .translation
        .endpoint
        .clone()
        .unwrap_or_else(|| DEFAULT_TRANSLATION_ENDPOINT.to_string());

    let api_key = config_file.translation.get_api_key();
    if config_file.translation.requires_api_key() && api_key.is_none() {
        bail_missing_key("translation", config_file.translation.api_key_env.as_deref())?;
    }

    Ok(TranslationSettings {
        endpoint,
        region: config_file.translation.region.clone(),
        api_key,
    })
}

fn bail_missing_key(section: &str, api_key_env: Option<&str>) -> Result<()> {
    let env_var = api_key_env.unwrap_or("API_KEY");
    bail!(
        "The '{section}' service requires an API key\n\n\
         Set the {env_var} environment variable:\n  \
         export {env_var}=\"your-api-key\"\n\n\
         Or set api_key in ~/.config/qna/config.toml"
    )
}

/// Manages loading and saving configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/qna/config.toml`
    /// or `~/.config/qna/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile =
            toml::from_str(&contents).with_context(|| "Failed to parse config file")?;

        Ok(config_file)
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;

        fs::write(&self.config_path, contents).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(())
    }

    pub fn load_or_default(&self) -> ConfigFile {
        self.load().unwrap_or_default()
    }
}
