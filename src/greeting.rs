//! The greeting shown inside the box.

use colored::{ColoredString, Colorize};

/// Message printed when no config overrides it.
pub const DEFAULT_MESSAGE: &str = "Hello! ";

/// Text that is rendered bold and white.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeting {
    text: String,
}

impl Default for Greeting {
    fn default() -> Self {
        Self::new(DEFAULT_MESSAGE)
    }
}

impl Greeting {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The unstyled text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Bold white fragment. Escapes are only written when `colored` has
    /// styling enabled.
    pub fn styled(&self) -> ColoredString {
        self.text.as_str().white().bold()
    }

    /// Styled text as a string, empty for an empty greeting.
    pub fn render(&self) -> String {
        if self.text.is_empty() {
            return String::new();
        }
        self.styled().to_string()
    }
}
