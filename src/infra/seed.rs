//! Seed data for the conversation store.
//!
//! The built-in workspace mirrors the demo team catalog; a TOML seed file can
//! replace it through `workspace.seed_file`.

use std::{
    collections::{HashMap, HashSet},
    fs,
    path::Path,
};

use serde::Deserialize;
use thiserror::Error;

use crate::{
    domain::{
        chat::{Chat, ChatId},
        conversation_store::ConversationStore,
        message::{Message, MessageId, MessageOrigin},
    },
    infra::error::AppError,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeedError {
    #[error("chat id `{0}` appears more than once")]
    DuplicateChatId(String),
    #[error("chat `{0}` has an empty name")]
    EmptyChatName(String),
    #[error("message id `{message_id}` appears more than once in chat `{chat_id}`")]
    DuplicateMessageId { chat_id: String, message_id: String },
}

#[derive(Debug, Deserialize)]
struct SeedFile {
    #[serde(default)]
    chats: Vec<SeedChat>,
}

#[derive(Debug, Deserialize)]
struct SeedChat {
    id: ChatId,
    name: String,
    #[serde(default)]
    last: String,
    unread: Option<u32>,
    #[serde(default)]
    messages: Vec<SeedMessage>,
}

#[derive(Debug, Deserialize)]
struct SeedMessage {
    id: MessageId,
    from: MessageOrigin,
    text: String,
    #[serde(default)]
    time: String,
}

/// Loads the seed file when given, the built-in workspace otherwise.
pub fn load_store(seed_file: Option<&Path>) -> Result<ConversationStore, AppError> {
    match seed_file {
        Some(path) => load_seed_file(path),
        None => Ok(demo_store()),
    }
}

pub fn load_seed_file(path: &Path) -> Result<ConversationStore, AppError> {
    let raw = fs::read_to_string(path).map_err(|source| AppError::SeedRead {
        path: path.to_path_buf(),
        source,
    })?;

    let seed: SeedFile = toml::from_str(&raw).map_err(|source| AppError::SeedParse {
        path: path.to_path_buf(),
        source,
    })?;

    let store = build_store(seed).map_err(|source| AppError::SeedInvalid {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(
        path = %path.display(),
        chats = store.list_chats().len(),
        "seed catalog loaded"
    );
    Ok(store)
}

fn build_store(seed: SeedFile) -> Result<ConversationStore, SeedError> {
    let mut seen_chats = HashSet::new();
    let mut chats = Vec::with_capacity(seed.chats.len());
    let mut messages = HashMap::new();

    for entry in seed.chats {
        if !seen_chats.insert(entry.id.clone()) {
            return Err(SeedError::DuplicateChatId(entry.id.to_string()));
        }
        if entry.name.trim().is_empty() {
            return Err(SeedError::EmptyChatName(entry.id.to_string()));
        }

        let mut seen_messages = HashSet::new();
        let mut history = Vec::with_capacity(entry.messages.len());
        for message in entry.messages {
            if !seen_messages.insert(message.id.clone()) {
                return Err(SeedError::DuplicateMessageId {
                    chat_id: entry.id.to_string(),
                    message_id: message.id.to_string(),
                });
            }
            history.push(Message {
                id: message.id,
                from: message.from,
                text: message.text,
                time: message.time,
            });
        }

        if !history.is_empty() {
            messages.insert(entry.id.clone(), history);
        }
        chats.push(Chat {
            id: entry.id,
            name: entry.name,
            last: entry.last,
            unread: entry.unread,
        });
    }

    Ok(ConversationStore::new(chats, messages))
}

/// The built-in demo workspace.
pub fn demo_store() -> ConversationStore {
    use MessageOrigin::{Me, Them};

    let chats = vec![
        Chat::new("c1", "Security Team", "Key rotation complete.").with_unread(2),
        Chat::new("c2", "Product", "Ship checklist is ready."),
        Chat::new("c3", "Design", "Updated icon set uploaded."),
        Chat::new("c4", "Ops", "Incident review at 3pm."),
    ];

    let mut messages = HashMap::new();
    messages.insert(
        ChatId::from("c1"),
        vec![
            Message::new(
                "m1",
                Them,
                "We\u{2019}ve enabled encrypted channels for this workspace.",
                "9:11",
            ),
            Message::new(
                "m2",
                Me,
                "Great\u{2014}are we enforcing verified devices?",
                "9:12",
            ),
            Message::new("m3", Them, "Yes. Key rotation complete.", "9:13"),
        ],
    );
    messages.insert(
        ChatId::from("c2"),
        vec![
            Message::new("m1", Them, "Ship checklist is ready.", "10:01"),
            Message::new(
                "m2",
                Me,
                "Awesome\u{2014}send link in the secure channel.",
                "10:02",
            ),
        ],
    );
    messages.insert(
        ChatId::from("c3"),
        vec![Message::new("m1", Them, "Updated icon set uploaded.", "11:08")],
    );
    messages.insert(
        ChatId::from("c4"),
        vec![Message::new("m1", Them, "Incident review at 3pm.", "12:40")],
    );

    ConversationStore::new(chats, messages)
}
