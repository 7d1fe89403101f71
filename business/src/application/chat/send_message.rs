use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::chat::errors::ChatError;
use crate::domain::chat::model::ChatReply;
use crate::domain::chat::services::ChatCompletionService;
use crate::domain::chat::use_cases::send_message::{SendMessageParams, SendMessageUseCase};
use crate::domain::logger::Logger;

pub struct SendMessageUseCaseImpl {
    pub completion: Arc<dyn ChatCompletionService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SendMessageUseCase for SendMessageUseCaseImpl {
    async fn execute(&self, params: SendMessageParams) -> Result<ChatReply, ChatError> {
        self.logger
            .info(&format!("Handling chat message from user: {}", params.user_id));

        // The message is forwarded verbatim; no content validation here.
        let reply = self.completion.complete(&params.message).await.map_err(|err| {
            self.logger.error(&format!("Chat completion failed: {}", err));
            err
        })?;

        self.logger.debug("Chat completion succeeded");

        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::value_objects::UserId;
    use mockall::mock;

    mock! {
        pub Completion {}

        #[async_trait]
        impl ChatCompletionService for Completion {
            async fn complete(&self, message: &str) -> Result<ChatReply, ChatError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn params(user_id: &str, message: &str) -> SendMessageParams {
        SendMessageParams {
            user_id: UserId::new(user_id),
            message: message.to_string(),
        }
    }

    #[tokio::test]
    async fn should_return_reply_when_completion_succeeds() {
        let mut mock_completion = MockCompletion::new();
        mock_completion
            .expect_complete()
            .returning(|_| Ok(ChatReply::new("Drink water and rest.")));

        let use_case = SendMessageUseCaseImpl {
            completion: Arc::new(mock_completion),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("guest", "I have a headache")).await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().message, "Drink water and rest.");
    }

    #[tokio::test]
    async fn should_forward_message_verbatim() {
        let mut mock_completion = MockCompletion::new();
        mock_completion
            .expect_complete()
            .withf(|message| message == "  what about an empty stomach?  ")
            .returning(|_| Ok(ChatReply::new("ok")));

        let use_case = SendMessageUseCaseImpl {
            completion: Arc::new(mock_completion),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(params("guest", "  what about an empty stomach?  "))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_forward_empty_message_unchanged() {
        let mut mock_completion = MockCompletion::new();
        mock_completion
            .expect_complete()
            .withf(|message| message.is_empty())
            .returning(|_| Ok(ChatReply::new("Please describe your symptoms.")));

        let use_case = SendMessageUseCaseImpl {
            completion: Arc::new(mock_completion),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("guest", "")).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_ignore_user_id_when_calling_completion() {
        let mut mock_completion = MockCompletion::new();
        mock_completion
            .expect_complete()
            .withf(|message| message == "same question")
            .times(2)
            .returning(|_| Ok(ChatReply::new("same answer")));

        let use_case = SendMessageUseCaseImpl {
            completion: Arc::new(mock_completion),
            logger: mock_logger(),
        };

        let first = use_case.execute(params("guest", "same question")).await;
        let second = use_case.execute(params("alice-42", "same question")).await;

        assert_eq!(first.unwrap(), second.unwrap());
    }

    #[tokio::test]
    async fn should_propagate_missing_api_key_error() {
        let mut mock_completion = MockCompletion::new();
        mock_completion
            .expect_complete()
            .returning(|_| Err(ChatError::ApiKeyMissing));

        let use_case = SendMessageUseCaseImpl {
            completion: Arc::new(mock_completion),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("guest", "hello")).await;

        assert!(matches!(result.unwrap_err(), ChatError::ApiKeyMissing));
    }

    #[tokio::test]
    async fn should_propagate_completion_failure_with_its_text() {
        let mut mock_completion = MockCompletion::new();
        mock_completion
            .expect_complete()
            .returning(|_| Err(ChatError::CompletionFailed("connection reset".to_string())));

        let use_case = SendMessageUseCaseImpl {
            completion: Arc::new(mock_completion),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("guest", "hello")).await;

        assert_eq!(result.unwrap_err().to_string(), "connection reset");
    }
}
