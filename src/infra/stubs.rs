use crate::{
    domain::draft_state::SendRequest,
    infra::{config::AppConfig, contracts::ConfigAdapter},
    usecases::send_message::{MessageSender, SendMessageSourceError, SendReceipt},
};

#[derive(Debug, Clone, Default)]
pub struct StubConfigAdapter {
    pub config: AppConfig,
}

impl ConfigAdapter for StubConfigAdapter {
    fn load(&self) -> anyhow::Result<AppConfig> {
        Ok(self.config.clone())
    }
}

/// Sender that always fails with the given error.
#[derive(Debug, Clone)]
pub struct FailingSender {
    pub error: SendMessageSourceError,
}

impl MessageSender for FailingSender {
    fn send_message(&self, _request: &SendRequest) -> Result<SendReceipt, SendMessageSourceError> {
        Err(self.error.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chat::ChatId;

    #[test]
    fn stub_config_returns_given_config() {
        let adapter = StubConfigAdapter::default();
        let config = adapter.load().expect("stub config must load");

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn failing_sender_reports_its_error() {
        let sender = FailingSender {
            error: SendMessageSourceError::Unavailable,
        };

        let result = sender.send_message(&SendRequest {
            chat_id: ChatId::from("c1"),
            text: "x".to_owned(),
        });

        assert_eq!(result, Err(SendMessageSourceError::Unavailable));
    }
}
