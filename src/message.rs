//! Failure messages.

/// Message used when an assertion fails.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Message {
    /// The assertion's own description, behind the configured prefix.
    #[default]
    Default,
    /// Caller-supplied text, used as is.
    Custom(String),
}

impl Message {
    pub fn custom(text: impl Into<String>) -> Self {
        Message::Custom(text.into())
    }

    /// Final failure text. `default` is only evaluated when no custom text
    /// was given.
    pub fn resolve(&self, prefix: &str, default: impl FnOnce() -> String) -> String {
        match self {
            Message::Default => format!("{}{}", prefix, default()),
            Message::Custom(text) => text.clone(),
        }
    }
}

impl From<&str> for Message {
    fn from(text: &str) -> Self {
        Message::Custom(text.to_string())
    }
}

impl From<String> for Message {
    fn from(text: String) -> Self {
        Message::Custom(text)
    }
}

impl From<Option<String>> for Message {
    fn from(text: Option<String>) -> Self {
        text.map_or(Message::Default, Message::Custom)
    }
}

/// Builds a custom [`Message`] from format arguments.
///
/// ```
/// let msg = assert_kit::message!("expected {} users", 3);
/// assert_eq!(msg, assert_kit::Message::custom("expected 3 users"));
/// ```
#[macro_export]
macro_rules! message {
    ($($arg:tt)+) => {
        $crate::Message::Custom(format!($($arg)+))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_default() {
        let msg = Message::Default.resolve("assert error: ", || "1 == 2".to_string());
        assert_eq!(msg, "assert error: 1 == 2");
    }

    #[test]
    fn test_resolve_custom() {
        let msg = Message::from("values differ").resolve("assert error: ", || unreachable!());
        assert_eq!(msg, "values differ");
    }

    #[test]
    fn test_message_macro() {
        assert_eq!(crate::message!("got {} items", 3), Message::custom("got 3 items"));
        assert_eq!(Message::from(None), Message::Default);
    }
}
