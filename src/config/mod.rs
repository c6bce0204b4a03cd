//! Configuration file management and service settings.

mod manager;

pub use manager::{
    ConfigFile, ConfigManager, QaConfig, QaSettings, ResolveOptions, ResolvedConfig,
    SessionDefaults, TranslationConfig, TranslationSettings, resolve_config,
    resolve_translation,
};
