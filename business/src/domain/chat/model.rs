/// The assistant's answer to a single chat message.
///
/// Holds the text of the first completion choice, stripped of the
/// leading/trailing whitespace the model tends to emit.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatReply {
    pub message: String,
}

impl ChatReply {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into().trim().to_string(),
        }
    }
}
