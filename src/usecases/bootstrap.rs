use std::path::Path;

use anyhow::Result;

use crate::{
    domain::{
        chat::ChatId, conversation_store::ConversationStore, draft_state::DraftState,
        workspace::WorkspaceState,
    },
    infra::{
        self,
        config::{AppConfig, FileConfigAdapter},
        contracts::ConfigAdapter,
        demo_sender::DemoSender,
    },
    usecases::{context::AppContext, send_message::SendPolicy, shell::DefaultShellOrchestrator},
};

/// Loads config and seed data, then installs file logging.
pub fn bootstrap(config_path: Option<&Path>) -> Result<AppContext> {
    let mut context = build_context(&FileConfigAdapter::new(config_path))?;

    let log_dir = infra::logging::resolve_log_dir(&context.config.logging)?;
    context.log_guard = Some(infra::logging::init(&context.config.logging, &log_dir)?);

    tracing::info!(
        chats = context.store.list_chats().len(),
        seed_file = ?context.config.workspace.seed_file,
        "workspace bootstrapped"
    );
    Ok(context)
}

fn build_context(config_adapter: &dyn ConfigAdapter) -> Result<AppContext> {
    let config = config_adapter.load()?;
    let store = infra::seed::load_store(config.workspace.seed_file.as_deref())?;

    Ok(AppContext::new(config, store))
}

/// Builds the initial workspace: seeded catalog, draft limit and startup selection.
pub fn build_workspace(store: ConversationStore, config: &AppConfig) -> WorkspaceState {
    let drafts = DraftState::with_limit(config.composer.max_draft_chars);
    let mut workspace = WorkspaceState::new(store, drafts);

    if let Some(initial) = config.workspace.initial_chat.as_deref() {
        workspace.select(ChatId::from(initial));
    }

    workspace
}

pub fn compose_shell(context: &AppContext) -> DefaultShellOrchestrator<DemoSender> {
    let workspace = build_workspace(context.store.clone(), &context.config);

    DefaultShellOrchestrator::new(
        workspace,
        DemoSender,
        SendPolicy::from(&context.config.composer),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::{seed::demo_store, stubs::StubConfigAdapter};

    #[test]
    fn builds_context_with_default_config_and_demo_store() {
        let context =
            build_context(&StubConfigAdapter::default()).expect("context should build");

        assert_eq!(context.config, AppConfig::default());
        assert_eq!(context.store, demo_store());
        assert!(context.log_guard.is_none());
    }

    #[test]
    fn missing_seed_file_fails_context() {
        let mut config = AppConfig::default();
        config.workspace.seed_file = Some("./no-such-seed.toml".into());

        let result = build_context(&StubConfigAdapter { config });

        assert!(result.is_err());
    }

    #[test]
    fn workspace_honors_initial_chat() {
        let mut config = AppConfig::default();
        config.workspace.initial_chat = Some("c3".to_owned());

        let workspace = build_workspace(demo_store(), &config);

        assert_eq!(workspace.active_chat_id(), Some(ChatId::from("c3")));
    }

    #[test]
    fn unknown_initial_chat_falls_back_to_first() {
        let mut config = AppConfig::default();
        config.workspace.initial_chat = Some("missing".to_owned());

        let workspace = build_workspace(demo_store(), &config);

        assert_eq!(workspace.active_chat_id(), Some(ChatId::from("c1")));
    }

    #[test]
    fn workspace_applies_draft_limit() {
        let mut config = AppConfig::default();
        config.composer.max_draft_chars = Some(2);

        let workspace = build_workspace(demo_store(), &config);

        assert_eq!(workspace.drafts().max_chars(), Some(2));
    }
}
