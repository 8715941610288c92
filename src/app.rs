use anyhow::Result;

use crate::{
    cli::{Cli, Command},
    domain::{
        self,
        chat::{Chat, ChatId},
        conversation_store::ConversationStore,
        message::Message,
        search_filter::filter_chats,
    },
    infra, ui,
    usecases::{self, bootstrap},
};

pub fn run(cli: Cli) -> Result<()> {
    let context = bootstrap::bootstrap(cli.config.as_deref())?;

    tracing::debug!(
        ui = ui::module_name(),
        domain = domain::module_name(),
        usecases = usecases::module_name(),
        infra = infra::module_name(),
        "module boundaries loaded"
    );

    match cli.command_or_default() {
        Command::Run => {
            let mut orchestrator = bootstrap::compose_shell(&context);
            let mut event_source = ui::CrosstermEventSource;
            ui::shell::start(&context, &mut event_source, &mut orchestrator)?;
        }
        Command::Chats { query } => {
            for line in chat_list_lines(&context.store, query.as_deref().unwrap_or_default()) {
                println!("{line}");
            }
        }
        Command::Messages { chat_id } => {
            let chat_id = ChatId::new(chat_id);
            for line in message_lines(&context.store, &chat_id) {
                println!("{line}");
            }
        }
    }

    Ok(())
}

fn chat_list_lines(store: &ConversationStore, query: &str) -> Vec<String> {
    let chats = filter_chats(store.list_chats(), query);
    tracing::debug!(query, matched = chats.len(), "listing chats");
    chats.into_iter().map(chat_line).collect()
}

fn chat_line(chat: &Chat) -> String {
    match chat.unread_badge() {
        Some(unread) => format!("{}\t{} [{unread}]\t{}", chat.id, chat.name, chat.last),
        None => format!("{}\t{}\t{}", chat.id, chat.name, chat.last),
    }
}

/// Unknown chat ids print nothing.
fn message_lines(store: &ConversationStore, chat_id: &ChatId) -> Vec<String> {
    let Some(chat) = store.chat(chat_id) else {
        tracing::debug!(chat_id = chat_id.as_str(), "no such chat");
        return Vec::new();
    };

    store.messages_for(&chat.id).iter().map(message_line).collect()
}

fn message_line(message: &Message) -> String {
    format!(
        "{:>5} {:<4} {}",
        message.time,
        message.from.display_label(),
        message.text
    )
}
