//! Domain layer: core entities and workspace state rules.

pub mod chat;
pub mod conversation_store;
pub mod draft_state;
pub mod events;
pub mod message;
pub mod message_input_state;
pub mod search_filter;
pub mod selection_state;
pub mod shell_state;
pub mod workspace;

/// Returns the domain module name for smoke checks.
pub fn module_name() -> &'static str {
    "domain"
}
