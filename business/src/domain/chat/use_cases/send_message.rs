use async_trait::async_trait;

use crate::domain::chat::errors::ChatError;
use crate::domain::chat::model::ChatReply;
use crate::domain::shared::value_objects::UserId;

pub struct SendMessageParams {
    pub user_id: UserId,
    pub message: String,
}

#[async_trait]
pub trait SendMessageUseCase: Send + Sync {
    async fn execute(&self, params: SendMessageParams) -> Result<ChatReply, ChatError>;
}
