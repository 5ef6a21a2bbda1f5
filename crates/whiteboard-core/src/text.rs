//! Text annotations placed on a board.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity handle for a [`Text`].
///
/// Two texts with the same content and position are still distinct entities;
/// the board addresses them only through this handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextId(Uuid);

impl TextId {
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for TextId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A piece of text positioned on a whiteboard.
///
/// The content never changes after creation. The position is only changed by
/// the owning [`Whiteboard`](crate::Whiteboard), which keeps it inside the
/// board bounds when the board shrinks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    id: TextId,
    content: String,
    x: u32,
    y: u32,
}

impl Text {
    pub(crate) fn new(content: String, x: u32, y: u32) -> Self {
        Self {
            id: TextId::new(),
            content,
            x,
            y,
        }
    }

    /// Identity of this text on its board.
    pub fn id(&self) -> TextId {
        self.id
    }

    /// The text content.
    pub fn text(&self) -> &str {
        &self.content
    }

    /// Horizontal coordinate.
    pub fn x(&self) -> u32 {
        self.x
    }

    /// Vertical coordinate.
    pub fn y(&self) -> u32 {
        self.y
    }

    pub(crate) fn set_position(&mut self, x: u32, y: u32) {
        self.x = x;
        self.y = y;
    }

    pub(crate) fn set_x(&mut self, x: u32) {
        self.x = x;
    }

    pub(crate) fn set_y(&mut self, y: u32) {
        self.y = y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let text = Text::new("Hello".to_string(), 3, 4);
        assert_eq!(text.text(), "Hello");
        assert_eq!(text.x(), 3);
        assert_eq!(text.y(), 4);
    }

    #[test]
    fn test_identical_texts_have_distinct_ids() {
        let a = Text::new("foo".to_string(), 1, 1);
        let b = Text::new("foo".to_string(), 1, 1);
        assert_ne!(a.id(), b.id());
        assert_ne!(a, b);
    }

    #[test]
    fn test_set_position_keeps_id() {
        let mut text = Text::new(String::new(), 0, 0);
        let id = text.id();
        text.set_position(7, 9);
        assert_eq!((text.x(), text.y()), (7, 9));
        assert_eq!(text.id(), id);
    }
}
