//! Use case for sending the active chat's draft.
//!
//! This module provides the `MessageSender` trait and `send_active_draft`,
//! which applies the send guard, hands the trimmed text to a sender and then
//! applies the configured clear and delivery policies.

use crate::{
    domain::{draft_state::SendRequest, workspace::WorkspaceState},
    infra::config::{ClearPolicy, ComposerConfig, DeliveryMode},
};

/// Acknowledgement returned by a sender that accepted a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendReceipt {
    pub acknowledgement: String,
}

/// Errors reported by a sender implementation.
#[cfg_attr(not(test), allow(dead_code))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendMessageSourceError {
    /// Sender refused the message.
    Rejected,
    /// Sender is temporarily unavailable.
    Unavailable,
}

/// Errors surfaced to the shell after a failed hand-off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendMessageError {
    Rejected,
    TemporarilyUnavailable,
}

impl SendMessageError {
    pub fn user_message(&self) -> &'static str {
        match self {
            SendMessageError::Rejected => "Message was rejected.",
            SendMessageError::TemporarilyUnavailable => "Sending is unavailable right now.",
        }
    }
}

/// Trait for handing composed messages off for delivery.
pub trait MessageSender {
    /// # Errors
    /// Returns `SendMessageSourceError` if the message could not be accepted.
    fn send_message(&self, request: &SendRequest) -> Result<SendReceipt, SendMessageSourceError>;
}

impl<T: MessageSender + ?Sized> MessageSender for &T {
    fn send_message(&self, request: &SendRequest) -> Result<SendReceipt, SendMessageSourceError> {
        (*self).send_message(request)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SendPolicy {
    pub clear: ClearPolicy,
    pub delivery: DeliveryMode,
}

impl From<&ComposerConfig> for SendPolicy {
    fn from(config: &ComposerConfig) -> Self {
        Self {
            clear: config.clear_policy,
            delivery: config.delivery,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// No active chat, or the draft was blank. Nothing happened.
    Ignored,
    Sent {
        request: SendRequest,
        receipt: SendReceipt,
        appended: bool,
    },
    Failed {
        request: SendRequest,
        error: SendMessageError,
        /// True when the draft is still in the composer.
        draft_kept: bool,
    },
}

/// Sends the active chat's draft.
///
/// `sent_at` is the display time used when the delivery mode appends locally.
pub fn send_active_draft(
    workspace: &mut WorkspaceState,
    sender: &dyn MessageSender,
    policy: SendPolicy,
    sent_at: &str,
) -> SendOutcome {
    let Some(chat_id) = workspace.active_chat_id() else {
        return SendOutcome::Ignored;
    };

    let request = match policy.clear {
        ClearPolicy::Optimistic => workspace.drafts_mut().send(&chat_id),
        ClearPolicy::Confirmed => workspace.drafts().prepare_send(&chat_id),
    };
    let Some(request) = request else {
        return SendOutcome::Ignored;
    };

    match sender.send_message(&request).map_err(map_source_error) {
        Ok(receipt) => {
            if policy.clear == ClearPolicy::Confirmed {
                workspace.drafts_mut().clear(&chat_id);
            }

            let appended = policy.delivery == DeliveryMode::Append
                && workspace.append_outgoing(&chat_id, &request.text, sent_at);

            tracing::info!(
                chat_id = %chat_id,
                chars = request.text.chars().count(),
                appended,
                "message send acknowledged"
            );
            SendOutcome::Sent {
                request,
                receipt,
                appended,
            }
        }
        Err(error) => {
            let draft_kept = policy.clear == ClearPolicy::Confirmed;
            tracing::warn!(chat_id = %chat_id, ?error, draft_kept, "message send failed");
            SendOutcome::Failed {
                request,
                error,
                draft_kept,
            }
        }
    }
}

fn map_source_error(error: SendMessageSourceError) -> SendMessageError {
    match error {
        SendMessageSourceError::Rejected => SendMessageError::Rejected,
        SendMessageSourceError::Unavailable => SendMessageError::TemporarilyUnavailable,
    }
}
