#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Tick,
    QuitRequested,
    InputKey(KeyInput),
}

/// A key press normalized by the event source.
///
/// Printable keys carry the character itself (`"a"`); named keys use lowercase
/// names such as `"enter"`, `"esc"`, `"backspace"`, `"up"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyInput {
    pub key: String,
    pub ctrl: bool,
}

impl KeyInput {
    pub fn new(key: impl Into<String>, ctrl: bool) -> Self {
        Self {
            key: key.into(),
            ctrl,
        }
    }

    /// Returns the typed character for single-character keys.
    pub fn as_char(&self) -> Option<char> {
        let mut chars = self.key.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) if !self.ctrl => Some(ch),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as_char_returns_single_printable_key() {
        assert_eq!(KeyInput::new("x", false).as_char(), Some('x'));
        assert_eq!(KeyInput::new("é", false).as_char(), Some('é'));
    }

    #[test]
    fn as_char_ignores_named_and_ctrl_keys() {
        assert_eq!(KeyInput::new("enter", false).as_char(), None);
        assert_eq!(KeyInput::new("x", true).as_char(), None);
    }
}
