use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use business::domain::chat::model::ChatReply;

fn default_user_id() -> String {
    "guest".to_string()
}

/// A single chat message from the end user.
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct ChatRequest {
    /// The user's message, forwarded verbatim to the model
    pub message: String,
    /// Caller identifier; kept for future session support, currently unused
    #[oai(default = "default_user_id")]
    #[serde(default = "default_user_id")]
    pub user_id: String,
}

/// The assistant's reply.
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct ChatReplyResponse {
    /// Trimmed text of the model's first completion choice
    pub reply: String,
}

impl From<ChatReply> for ChatReplyResponse {
    fn from(reply: ChatReply) -> Self {
        Self {
            reply: reply.message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_user_id_to_guest() {
        let request: ChatRequest =
            serde_json::from_str(r#"{"message": "I have a headache"}"#).unwrap();

        assert_eq!(request.message, "I have a headache");
        assert_eq!(request.user_id, "guest");
    }

    #[test]
    fn should_keep_provided_user_id() {
        let request: ChatRequest =
            serde_json::from_str(r#"{"message": "hi", "user_id": "alice"}"#).unwrap();

        assert_eq!(request.user_id, "alice");
    }

    #[test]
    fn should_map_domain_reply_to_response() {
        let response: ChatReplyResponse = ChatReply::new("  Drink water and rest.  ").into();

        assert_eq!(response.reply, "Drink water and rest.");
    }
}
