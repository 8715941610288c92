//! Case-insensitive substring filter over the chat catalog.

use super::chat::Chat;

/// Trims and lowercases a raw query. The catalog itself is never touched.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Returns the chats whose name or preview contains `query`, in catalog order.
///
/// A blank query returns every chat.
pub fn filter_chats<'a>(chats: &'a [Chat], query: &str) -> Vec<&'a Chat> {
    let needle = normalize_query(query);
    matching_indices(chats, &needle)
        .into_iter()
        .map(|index| &chats[index])
        .collect()
}

fn matching_indices(chats: &[Chat], needle: &str) -> Vec<usize> {
    chats
        .iter()
        .enumerate()
        .filter(|(_, chat)| needle.is_empty() || chat_matches(chat, needle))
        .map(|(index, _)| index)
        .collect()
}

fn chat_matches(chat: &Chat, needle: &str) -> bool {
    chat.name.to_lowercase().contains(needle) || chat.last.to_lowercase().contains(needle)
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct FilterMemo {
    needle: String,
    revision: u64,
    indices: Vec<usize>,
}

/// Search query plus the memoized indices of matching chats.
///
/// The memo is keyed by the normalized query and the catalog revision, so
/// whitespace-only edits and repeated refreshes reuse the previous result.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchFilter {
    query: String,
    memo: Option<FilterMemo>,
}

impl SearchFilter {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_active(&self) -> bool {
        !normalize_query(&self.query).is_empty()
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn push_char(&mut self, ch: char) {
        self.query.push(ch);
    }

    pub fn pop_char(&mut self) {
        self.query.pop();
    }

    /// Recomputes matches if the query or catalog changed since the last call.
    ///
    /// Returns true when a recomputation happened.
    pub fn refresh(&mut self, chats: &[Chat], revision: u64) -> bool {
        let needle = normalize_query(&self.query);
        let fresh = self
            .memo
            .as_ref()
            .is_some_and(|memo| memo.needle == needle && memo.revision == revision);
        if fresh {
            return false;
        }

        let indices = matching_indices(chats, &needle);
        tracing::debug!(
            query = %needle,
            revision,
            matches = indices.len(),
            "chat filter recomputed"
        );
        self.memo = Some(FilterMemo {
            needle,
            revision,
            indices,
        });
        true
    }

    /// Indices into the catalog from the last `refresh`.
    pub fn matches(&self) -> &[usize] {
        self.memo
            .as_ref()
            .map(|memo| memo.indices.as_slice())
            .unwrap_or_default()
    }
}
