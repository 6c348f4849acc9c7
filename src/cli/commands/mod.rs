//! Subcommand implementations.

/// Prompt printing command handler.
pub mod prompt;

/// Provider listing command handler.
pub mod providers;

/// Interactive translation command handler.
pub mod translate;
