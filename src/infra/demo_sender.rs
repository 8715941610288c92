use crate::{
    domain::draft_state::SendRequest,
    usecases::send_message::{MessageSender, SendMessageSourceError, SendReceipt},
};

/// Placeholder sender: accepts every message and only reports what it would do.
///
/// Nothing is encrypted or transmitted.
#[derive(Debug, Clone, Default)]
pub struct DemoSender;

impl MessageSender for DemoSender {
    fn send_message(&self, request: &SendRequest) -> Result<SendReceipt, SendMessageSourceError> {
        tracing::debug!(chat_id = %request.chat_id, "demo sender accepted message");

        Ok(SendReceipt {
            acknowledgement: format!(
                "(Demo) Would send encrypted message: \"{}\"",
                request.text
            ),
        })
    }
}
