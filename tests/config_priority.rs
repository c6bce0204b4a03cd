//! Config priority contract tests.
//!
//! These tests verify that CLI options take priority over config file
//! settings. Priority order (highest to lowest):
//! 1. CLI arguments
//! 2. Config file values
//! 3. Built-in defaults (translation endpoint only)

#![allow(clippy::unwrap_used)]

use qna_cli::config::{
    ConfigFile, QaConfig, ResolveOptions, SessionDefaults, TranslationConfig, resolve_config,
    resolve_translation,
};

fn make_config_with_defaults() -> ConfigFile {
    ConfigFile {
        qa: QaConfig {
            endpoint: Some("https://qa.example.com".to_string()),
            project: Some("config-project".to_string()),
            deployment: Some("config-deployment".to_string()),
            api_key: Some("config-key".to_string()),
            api_key_env: None,
        },
        translation: TranslationConfig::default(),
        session: SessionDefaults {
            language: Some("fr".to_string()),
        },
    }
}

#[test]
fn test_cli_project_overrides_config_project() {
    let config = make_config_with_defaults();
    let options = ResolveOptions {
        language: None,
        project: Some("cli-project".to_string()),
        deployment: None,
    };

    let resolved = resolve_config(&options, &config).unwrap();

    assert_eq!(resolved.qa.project, "cli-project");
    assert_eq!(resolved.qa.deployment, "config-deployment");
}

#[test]
fn test_cli_deployment_overrides_config_deployment() {
    let config = make_config_with_defaults();
    let options = ResolveOptions {
        language: None,
        project: None,
        deployment: Some("cli-deployment".to_string()),
    };

    let resolved = resolve_config(&options, &config).unwrap();

    assert_eq!(resolved.qa.deployment, "cli-deployment");
}

#[test]
fn test_cli_language_overrides_config_language() {
    let config = make_config_with_defaults();
    let options = ResolveOptions {
        language: Some("ja".to_string()),
        project: None,
        deployment: None,
    };

    let resolved = resolve_config(&options, &config).unwrap();

    assert_eq!(resolved.language, Some("ja".to_string()));
}

#[test]
fn test_config_values_used_when_cli_not_specified() {
    let config = make_config_with_defaults();
    let options = ResolveOptions::default();

    let resolved = resolve_config(&options, &config).unwrap();

    assert_eq!(resolved.qa.endpoint, "https://qa.example.com");
    assert_eq!(resolved.qa.project, "config-project");
    assert_eq!(resolved.qa.deployment, "config-deployment");
    assert_eq!(resolved.qa.api_key, Some("config-key".to_string()));
    assert_eq!(resolved.language, Some("fr".to_string()));
}

#[test]
fn test_no_language_anywhere_resolves_to_none() {
    let mut config = make_config_with_defaults();
    config.session.language = None;

    let resolved = resolve_config(&ResolveOptions::default(), &config).unwrap();

    assert!(resolved.language.is_none());
}

#[test]
fn test_translation_endpoint_defaults_to_public_endpoint() {
    let config = make_config_with_defaults();

    let settings = resolve_translation(&config).unwrap();

    assert!(settings.endpoint.contains("microsofttranslator"));
    assert!(settings.api_key.is_none());
}

#[test]
fn test_translation_endpoint_from_config_wins() {
    let mut config = make_config_with_defaults();
    config.translation.endpoint = Some("https://translate.local".to_string());

    let settings = resolve_translation(&config).unwrap();

    assert_eq!(settings.endpoint, "https://translate.local");
}

#[test]
fn test_missing_qa_endpoint_is_an_error() {
    let mut config = make_config_with_defaults();
    config.qa.endpoint = None;

    let result = resolve_config(&ResolveOptions::default(), &config);

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("qa.endpoint"));
}

#[test]
fn test_missing_project_is_an_error() {
    let mut config = make_config_with_defaults();
    config.qa.project = None;

    let result = resolve_config(&ResolveOptions::default(), &config);

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("qa.project"));
}

#[test]
fn test_missing_deployment_is_an_error() {
    let mut config = make_config_with_defaults();
    config.qa.deployment = None;

    let result = resolve_config(&ResolveOptions::default(), &config);

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("qa.deployment"));
}

#[test]
fn test_qa_key_env_named_but_unset_is_an_error() {
    let mut config = make_config_with_defaults();
    config.qa.api_key = None;
    config.qa.api_key_env = Some("QNA_PRIORITY_TEST_NONEXISTENT_KEY".to_string());

    let result = resolve_config(&ResolveOptions::default(), &config);

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("API key"));
}

#[test]
fn test_translation_key_env_named_but_unset_is_an_error() {
    let mut config = make_config_with_defaults();
    config.translation.api_key = None;
    config.translation.api_key_env =
        Some("QNA_PRIORITY_TEST_NONEXISTENT_KEY".to_string());

    let result = resolve_translation(&config);

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("API key"));
}
