// Message envelopes carried by the buffer

use std::fmt;

/// A content-agnostic envelope the buffer moves between threads.
///
/// Implementors supply how a message is built from borrowed content, how its
/// content is viewed, and how an independent copy is made. Destruction is
/// `Drop`: whoever owns a message last destroys it, exactly once.
pub trait Message: Send + Sized {
    /// The application payload carried by the message.
    type Content: ?Sized;

    /// Build a message owning its own representation of `content`.
    fn construct(content: &Self::Content) -> Self;

    fn content(&self) -> &Self::Content;

    /// Build a new message whose content equals this one's without sharing it.
    fn copy(&self) -> Self;

    /// Release the message and its content.
    fn destroy(self) {
        drop(self)
    }
}

/// A message carrying owned UTF-8 text.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct TextMessage {
    content: String,
}

impl TextMessage {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }

    pub fn into_string(self) -> String {
        self.content
    }
}

impl Message for TextMessage {
    type Content = str;

    fn construct(content: &str) -> Self {
        Self {
            content: content.to_owned(),
        }
    }

    fn content(&self) -> &str {
        &self.content
    }

    fn copy(&self) -> Self {
        Self {
            content: self.content.clone(),
        }
    }
}

impl From<&str> for TextMessage {
    fn from(content: &str) -> Self {
        Self::construct(content)
    }
}

impl From<String> for TextMessage {
    fn from(content: String) -> Self {
        Self { content }
    }
}

impl fmt::Debug for TextMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TextMessage").field(&self.content).finish()
    }
}

impl fmt::Display for TextMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}
