use async_trait::async_trait;
use serde_json::json;

use business::domain::chat::errors::ChatError;
use business::domain::chat::model::ChatReply;
use business::domain::chat::services::ChatCompletionService;

use crate::client::OpenAIClient;

const SYSTEM_PROMPT: &str = "You are a helpful, cautious health assistant. \
Give general advice and always include a disclaimer: \
You are not a doctor and users should consult a healthcare professional for diagnosis.";

const MODEL: &str = "gpt-3.5-turbo";
const TEMPERATURE: f64 = 0.6;
const MAX_TOKENS: u32 = 400;

pub struct ChatCompletionOpenAI {
    client: OpenAIClient,
}

impl ChatCompletionOpenAI {
    pub fn new(client: OpenAIClient) -> Self {
        Self { client }
    }

    fn request_body(message: &str) -> serde_json::Value {
        json!({
            "model": MODEL,
            "messages": [
                {"role": "system", "content": SYSTEM_PROMPT},
                {"role": "user", "content": message},
            ],
            "temperature": TEMPERATURE,
            "max_tokens": MAX_TOKENS,
        })
    }

    fn extract_reply(data: &serde_json::Value) -> Result<ChatReply, ChatError> {
        let content = data["choices"]
            .as_array()
            .and_then(|choices| choices.first())
            .and_then(|choice| choice["message"]["content"].as_str())
            .ok_or_else(|| {
                ChatError::CompletionFailed(
                    "OpenAI response contained no completion choices".to_string(),
                )
            })?;

        Ok(ChatReply::new(content))
    }
}

#[async_trait]
impl ChatCompletionService for ChatCompletionOpenAI {
    async fn complete(&self, message: &str) -> Result<ChatReply, ChatError> {
        // Fail before any network I/O when the key was never configured.
        let auth_header = self.client.auth_header().ok_or(ChatError::ApiKeyMissing)?;

        let body = Self::request_body(message);

        let response = self
            .client
            .client
            .post(self.client.chat_completions_url())
            .header("Content-Type", "application/json")
            .header("Authorization", auth_header)
            .json(&body)
            .send()
            .await
            .map_err(|err| ChatError::CompletionFailed(err.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            return Err(ChatError::CompletionFailed(format!(
                "OpenAI API returned {}: {}",
                status, detail
            )));
        }

        let data: serde_json::Value = response
            .json()
            .await
            .map_err(|err| ChatError::CompletionFailed(err.to_string()))?;

        Self::extract_reply(&data)
    }
}
