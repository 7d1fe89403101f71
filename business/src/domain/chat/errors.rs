#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("OPENAI_API_KEY not configured. Set it as an environment variable.")]
    ApiKeyMissing,
    #[error("{0}")]
    CompletionFailed(String),
}
