//! # qna - Interactive Question-Answering CLI
//!
//! `qna` is a command-line client for a hosted question-answering project.
//! It reads questions at an interactive prompt, queries the configured
//! project, and prints the ranked answers with bracketed spans highlighted.
//! When a non-English session language is selected, questions and answers
//! are translated on the fly through a hosted translation service.
//!
//! ## Quick Start
//!
//! ```bash
//! # Start an interactive session
//! qna
//!
//! # Skip the language selection
//! qna --language fr
//!
//! # List the languages the translation service supports
//! qna languages
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/qna/config.toml`:
//!
//! ```toml
//! [qa]
//! endpoint = "https://my-resource.cognitiveservices.azure.com"
//! project = "game-faq"
//! deployment = "production"
//! api_key_env = "QA_API_KEY"
//!
//! [translation]
//! api_key_env = "TRANSLATION_API_KEY"
//! region = "westeurope"
//! ```

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management and service settings.
pub mod config;

/// Gateway adapters for the question-answering and translation services.
pub mod gateway;

/// Bracketed-span highlighting for answer text.
pub mod highlight;

/// XDG-style path utilities for configuration.
pub mod paths;

/// The interactive question-answering session loop.
pub mod session;

/// Terminal UI components (spinner, colors).
pub mod ui;
