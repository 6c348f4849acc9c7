//! # pajajap - Paj Ajap Translation CLI
//!
//! `pajajap` translates between English and the constructed language Paj Ajap.
//! The translation itself is done by an LLM behind an OpenAI-compatible chat
//! completion endpoint; this crate supplies the vocabulary and grammar as a
//! fixed instruction, sends one request per line of input, and reads the
//! `translated` field of the JSON reply.
//!
//! ## Quick Start
//!
//! ```bash
//! export GROQ_API_KEY="your-api-key"
//! pajajap
//! # Enter text to translate (or 'exit'): happy
//! # фok фeþ
//! ```
//!
//! ## Configuration
//!
//! Settings are optional and read from `~/.config/pajajap/config.toml`:
//!
//! ```toml
//! [pajajap]
//! provider = "local"
//! model = "llama3.2"
//!
//! [providers.local]
//! endpoint = "http://localhost:11434"
//! models = ["llama3.2"]
//! ```
//!
//! Without a config file the built-in `groq` provider is used, with the key
//! taken from `GROQ_API_KEY`.

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management and provider settings.
pub mod config;

/// Global output configuration (quiet mode, colors, stderr/stdout routing).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Interactive prompt/translate/print loop.
pub mod repl;

/// Translation session for OpenAI-compatible APIs.
pub mod translation;

/// Terminal UI components (spinner, colors).
pub mod ui;
