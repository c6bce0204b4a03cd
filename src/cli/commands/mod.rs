//! Subcommand implementations.

/// Configure command handler.
pub mod configure;

/// Language catalog listing command handler.
pub mod languages;

/// Interactive session command handler.
pub mod session;
