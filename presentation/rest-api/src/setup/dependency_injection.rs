use std::sync::Arc;

use logger::TracingLogger;
use openai::chat_completion::ChatCompletionOpenAI;
use openai::client::OpenAIClient;

use business::application::chat::send_message::SendMessageUseCaseImpl;

use crate::config::openai_config::OpenAIConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub chat_api: crate::api::chat::routes::ChatApi,
}

impl DependencyContainer {
    pub fn new() -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let openai_config = OpenAIConfig::from_env();
        let openai_client = OpenAIClient::new(openai_config.api_key);
        let chat_completion = Arc::new(ChatCompletionOpenAI::new(openai_client));

        // Chat use cases
        let send_message_use_case = Arc::new(SendMessageUseCaseImpl {
            completion: chat_completion,
            logger,
        });

        let chat_api = crate::api::chat::routes::ChatApi::new(send_message_use_case);

        Self {
            health_api,
            chat_api,
        }
    }
}
