mod client;
mod error;
mod prompt;
mod translator;

pub use client::{ChatCompletionRequest, CompletionClient, MAX_TOKENS, TEMPERATURE};
pub use error::TranslateError;
pub use prompt::SYSTEM_PROMPT;
pub use translator::{Translation, Translator, extract_translation};
