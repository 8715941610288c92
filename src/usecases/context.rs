use tracing_appender::non_blocking::WorkerGuard;

use crate::{domain::conversation_store::ConversationStore, infra::config::AppConfig};

#[derive(Debug)]
pub struct AppContext {
    pub config: AppConfig,
    pub store: ConversationStore,
    /// Keeps the non-blocking log writer alive; `None` when logging is not installed.
    pub log_guard: Option<WorkerGuard>,
}

impl AppContext {
    pub fn new(config: AppConfig, store: ConversationStore) -> Self {
        Self {
            config,
            store,
            log_guard: None,
        }
    }
}
