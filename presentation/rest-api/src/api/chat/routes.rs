use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::chat::use_cases::send_message::{SendMessageParams, SendMessageUseCase};
use business::domain::shared::value_objects::UserId;

use crate::api::chat::dto::{ChatReplyResponse, ChatRequest};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct ChatApi {
    send_message_use_case: Arc<dyn SendMessageUseCase>,
}

impl ChatApi {
    pub fn new(send_message_use_case: Arc<dyn SendMessageUseCase>) -> Self {
        Self {
            send_message_use_case,
        }
    }
}

/// Chat API
///
/// Relays a single user message to the completion model and returns the reply.
#[OpenApi]
impl ChatApi {
    /// Send a chat message
    ///
    /// Forwards the message to the health-assistant model. Stateless: no
    /// conversation history is kept between calls.
    #[oai(path = "/chat", method = "post", tag = "ApiTags::Chat")]
    async fn chat(&self, body: Json<ChatRequest>) -> ChatResponse {
        let params = SendMessageParams {
            user_id: UserId::new(body.0.user_id),
            message: body.0.message,
        };

        match self.send_message_use_case.execute(params).await {
            Ok(reply) => ChatResponse::Ok(Json(reply.into())),
            Err(err) => {
                let (_, json) = err.into_error_response();
                ChatResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ChatResponse {
    #[oai(status = 200)]
    Ok(Json<ChatReplyResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
