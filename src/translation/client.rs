use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use super::error::TranslateError;
use super::prompt::SYSTEM_PROMPT;

/// Sampling temperature sent with every request.
pub const TEMPERATURE: f32 = 1.0;

/// Upper bound on generated tokens per request.
pub const MAX_TOKENS: u32 = 2048;

// Use Cow to avoid cloning strings that are only borrowed for serialization
#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<Message<'a>>,
    pub temperature: f32,
    pub max_tokens: u32,
    pub stream: bool,
    pub response_format: ResponseFormat,
}

impl<'a> ChatCompletionRequest<'a> {
    /// Builds the request for one user input: fixed system instruction first,
    /// the text verbatim second.
    pub fn for_text(model: &'a str, text: &'a str) -> Self {
        Self {
            model,
            messages: vec![
                Message {
                    role: "system",
                    content: Cow::Borrowed(SYSTEM_PROMPT),
                },
                Message {
                    role: "user",
                    content: Cow::Borrowed(text),
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
            stream: false,
            response_format: ResponseFormat::JSON_OBJECT,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Message<'a> {
    pub role: &'static str,
    pub content: Cow<'a, str>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ResponseFormat {
    #[serde(rename = "type")]
    pub kind: &'static str,
}

impl ResponseFormat {
    pub const JSON_OBJECT: Self = Self {
        kind: "json_object",
    };
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// Thin client for the `/v1/chat/completions` route of an OpenAI-compatible API.
pub struct CompletionClient {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl CompletionClient {
    pub fn new(endpoint: String, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            api_key,
        }
    }

    pub fn completions_url(&self) -> String {
        format!(
            "{}/v1/chat/completions",
            self.endpoint.trim_end_matches('/')
        )
    }

    /// Sends one non-streaming completion request and returns the message
    /// content of the first choice.
    pub async fn complete(
        &self,
        request: &ChatCompletionRequest<'_>,
    ) -> Result<String, TranslateError> {
        let url = self.completions_url();

        let mut http_request = self.client.post(&url).json(request);

        // Add Authorization header if API key is present
        if let Some(api_key) = &self.api_key {
            http_request = http_request.header("Authorization", format!("Bearer {api_key}"));
        }

        let response = http_request
            .send()
            .await
            .map_err(|source| TranslateError::Transport {
                url: url.clone(),
                source,
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => format!("<unreadable body: {e}>"),
            };
            return Err(TranslateError::Status { status, body });
        }

        let completion: ChatCompletionResponse =
            response.json().await.map_err(TranslateError::Decode)?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(TranslateError::EmptyResponse)
    }
}
