use async_trait::async_trait;

use super::errors::ChatError;
use super::model::ChatReply;

/// Service port for completing a single user message against an LLM.
///
/// Implementations own the persona prompt and the sampling parameters; the
/// caller only supplies the user's verbatim message.
#[async_trait]
pub trait ChatCompletionService: Send + Sync {
    async fn complete(&self, message: &str) -> Result<ChatReply, ChatError>;
}
