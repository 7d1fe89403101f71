use reqwest::Client;

/// Shared OpenAI HTTP client configuration.
///
/// The API key is optional on purpose: a missing key is only reported when a
/// chat request actually needs it, not at startup.
pub struct OpenAIClient {
    pub client: Client,
    pub api_key: Option<String>,
    pub base_url: String,
}

impl OpenAIClient {
    pub fn new(api_key: Option<String>) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_key,
            base_url: "https://api.openai.com/v1".to_string(),
        }
    }

    /// Builds the authorization header value, if a key is configured.
    pub fn auth_header(&self) -> Option<String> {
        self.api_key.as_ref().map(|key| format!("Bearer {}", key))
    }

    /// Returns the chat completions endpoint URL.
    pub fn chat_completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}
