use serde::Deserialize;
use serde_json::{Map, Value};

use super::client::{ChatCompletionRequest, CompletionClient};
use super::error::TranslateError;
use crate::config::ResolvedConfig;

/// Shape of the JSON object the model is instructed to reply with.
#[derive(Debug, Deserialize)]
struct TranslatedPayload {
    translated: String,
}

/// Outcome of one translate call.
#[derive(Debug)]
pub struct Translation {
    /// Message content returned by the service, if the call got that far.
    pub raw: Option<String>,
    /// The extracted translation, or why there is none.
    pub result: Result<String, TranslateError>,
}

impl Translation {
    /// The single line the interactive loop prints for this outcome.
    pub fn display_line(&self) -> String {
        match &self.result {
            Ok(translated) => translated.clone(),
            Err(e) => format!("Error: {e}"),
        }
    }
}

/// A translation session bound to one endpoint and one model.
///
/// Holds no per-call state; every [`translate`](Self::translate) issues exactly
/// one request.
pub struct Translator {
    model: String,
    client: CompletionClient,
}

impl Translator {
    pub fn new(config: &ResolvedConfig) -> Self {
        Self {
            model: config.model.clone(),
            client: CompletionClient::new(config.endpoint.clone(), config.api_key.clone()),
        }
    }

    pub async fn translate(&self, text: &str) -> Translation {
        let request = ChatCompletionRequest::for_text(&self.model, text);

        match self.client.complete(&request).await {
            Ok(raw) => {
                let result = extract_translation(&raw);
                Translation {
                    raw: Some(raw),
                    result,
                }
            }
            Err(e) => Translation {
                raw: None,
                result: Err(e),
            },
        }
    }
}

/// Pulls the `translated` string out of a raw reply.
///
/// The reply must be a JSON object; other fields are ignored.
pub fn extract_translation(raw: &str) -> Result<String, TranslateError> {
    let object: Map<String, Value> = serde_json::from_str(raw)?;
    let payload = TranslatedPayload::deserialize(Value::Object(object))?;
    Ok(payload.translated)
}
