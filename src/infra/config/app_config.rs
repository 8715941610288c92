use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AppConfig {
    pub logging: LogConfig,
    pub workspace: WorkspaceConfig,
    pub composer: ComposerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    pub level: String,
    /// Overrides the log directory resolved from the storage layout.
    pub directory: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            directory: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct WorkspaceConfig {
    /// TOML catalog to load instead of the built-in demo workspace.
    pub seed_file: Option<PathBuf>,
    /// Chat selected at startup. Unknown ids fall back to the first chat.
    pub initial_chat: Option<String>,
}

/// When the composer buffer is cleared relative to the send hand-off.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClearPolicy {
    /// Clear as soon as the send is requested.
    #[default]
    Optimistic,
    /// Clear only after the sender reports success.
    Confirmed,
}

/// What a successful send does to the conversation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryMode {
    /// Acknowledge only; the message list is left untouched.
    #[default]
    Acknowledge,
    /// Append the sent text to the active chat as an outgoing message.
    Append,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ComposerConfig {
    /// Maximum draft length in characters. Unlimited when absent.
    pub max_draft_chars: Option<usize>,
    pub clear_policy: ClearPolicy,
    pub delivery: DeliveryMode,
}
