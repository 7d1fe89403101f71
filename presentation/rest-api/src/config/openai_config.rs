/// Configuration for OpenAI API access.
///
/// The key is read once at startup and never re-read. A missing key does not
/// abort startup: the health endpoint must stay reachable, and chat requests
/// report the missing configuration per request.
pub struct OpenAIConfig {
    pub api_key: Option<String>,
}

impl OpenAIConfig {
    pub fn from_env() -> Self {
        let api_key = std::env::var("OPENAI_API_KEY").ok();
        Self { api_key }
    }
}
