//! Change notifications emitted by a whiteboard.
//!
//! Every successful mutation produces exactly one [`BoardEvent`], delivered
//! synchronously to the board's [`EventSink`] before the call returns.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;

/// Number of events an [`EventLog`] keeps by default.
pub const DEFAULT_EVENT_HISTORY: usize = 64;

/// A change made to a whiteboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BoardEvent {
    /// Board constructed
    Created { width: u32, height: u32 },
    /// Text appended to the board
    TextAdded { content: String, x: u32, y: u32 },
    /// Text removed from the board
    TextRemoved { content: String },
    /// Text moved to a new position
    TextMoved { content: String, x: u32, y: u32 },
    /// Board width changed
    WidthChanged { from: u32, to: u32 },
    /// Board height changed
    HeightChanged { from: u32, to: u32 },
}

impl fmt::Display for BoardEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardEvent::Created { width, height } => {
                write!(f, "Whiteboard created with size {}x{}", width, height)
            }
            BoardEvent::TextAdded { content, x, y } => {
                write!(f, "Adding new text \"{}\" to whiteboard at ({}, {})", content, x, y)
            }
            BoardEvent::TextRemoved { content } => {
                write!(f, "Text \"{}\" removed from whiteboard", content)
            }
            BoardEvent::TextMoved { content, x, y } => {
                write!(f, "Text \"{}\" moved to ({}, {})", content, x, y)
            }
            BoardEvent::WidthChanged { from, to } => {
                write!(f, "Whiteboard width changed from {} to {}", from, to)
            }
            BoardEvent::HeightChanged { from, to } => {
                write!(f, "Whiteboard height changed from {} to {}", from, to)
            }
        }
    }
}

/// Receiver of board events.
pub trait EventSink {
    /// Record one event.
    fn record(&mut self, event: &BoardEvent);
}

impl<F> EventSink for F
where
    F: FnMut(&BoardEvent),
{
    fn record(&mut self, event: &BoardEvent) {
        self(event)
    }
}

/// Sink that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn record(&mut self, _event: &BoardEvent) {}
}

/// Bounded in-memory log of the most recent events.
///
/// When full, the oldest event is dropped to make room.
#[derive(Debug, Clone)]
pub struct EventLog {
    events: VecDeque<BoardEvent>,
    capacity: usize,
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new()
    }
}

impl EventLog {
    /// Create a log holding [`DEFAULT_EVENT_HISTORY`] events.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_EVENT_HISTORY)
    }

    /// Create a log holding at most `capacity` events (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            events: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Maximum number of events retained.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Most recent event.
    pub fn last(&self) -> Option<&BoardEvent> {
        self.nth_last(0)
    }

    /// Event recorded just before the most recent one.
    pub fn second_last(&self) -> Option<&BoardEvent> {
        self.nth_last(1)
    }

    /// Event `n` steps back from the most recent (0 = most recent).
    pub fn nth_last(&self, n: usize) -> Option<&BoardEvent> {
        let len = self.events.len();
        if n >= len {
            return None;
        }
        self.events.get(len - 1 - n)
    }

    /// Iterate retained events, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &BoardEvent> {
        self.events.iter()
    }

    /// Display text of every retained event, oldest first.
    pub fn descriptions(&self) -> Vec<String> {
        self.events.iter().map(ToString::to_string).collect()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl EventSink for EventLog {
    fn record(&mut self, event: &BoardEvent) {
        if self.events.len() == self.capacity {
            self.events.pop_front();
        }
        self.events.push_back(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_formats() {
        let cases = [
            (
                BoardEvent::Created { width: 32, height: 20 },
                "Whiteboard created with size 32x20",
            ),
            (
                BoardEvent::TextAdded { content: "Hello, world!".into(), x: 0, y: 13 },
                "Adding new text \"Hello, world!\" to whiteboard at (0, 13)",
            ),
            (
                BoardEvent::TextRemoved { content: "foo".into() },
                "Text \"foo\" removed from whiteboard",
            ),
            (
                BoardEvent::TextMoved { content: "foo".into(), x: 5, y: 6 },
                "Text \"foo\" moved to (5, 6)",
            ),
            (
                BoardEvent::WidthChanged { from: 32, to: 40 },
                "Whiteboard width changed from 32 to 40",
            ),
            (
                BoardEvent::HeightChanged { from: 20, to: 50 },
                "Whiteboard height changed from 20 to 50",
            ),
        ];
        for (event, expected) in cases {
            assert_eq!(event.to_string(), expected);
        }
    }

    #[test]
    fn test_empty_content_is_quoted() {
        let event = BoardEvent::TextAdded { content: String::new(), x: 6, y: 20 };
        assert_eq!(event.to_string(), "Adding new text \"\" to whiteboard at (6, 20)");
    }

    #[test]
    fn test_event_json_tag() {
        let event = BoardEvent::WidthChanged { from: 1, to: 2 };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json, serde_json::json!({"type": "width_changed", "from": 1, "to": 2}));
        let back: BoardEvent = serde_json::from_value(json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn test_log_last_and_second_last() {
        let mut log = EventLog::new();
        assert!(log.last().is_none());

        log.record(&BoardEvent::Created { width: 1, height: 1 });
        assert!(log.second_last().is_none());
        log.record(&BoardEvent::TextRemoved { content: "a".into() });

        assert_eq!(log.last(), Some(&BoardEvent::TextRemoved { content: "a".into() }));
        assert_eq!(log.second_last(), Some(&BoardEvent::Created { width: 1, height: 1 }));
        assert!(log.nth_last(2).is_none());
    }

    #[test]
    fn test_log_drops_oldest_when_full() {
        let mut log = EventLog::with_capacity(2);
        for to in 1..=3 {
            log.record(&BoardEvent::WidthChanged { from: 0, to });
        }
        assert_eq!(log.len(), 2);
        assert_eq!(
            log.descriptions(),
            vec![
                "Whiteboard width changed from 0 to 2".to_string(),
                "Whiteboard width changed from 0 to 3".to_string(),
            ]
        );
    }

    #[test]
    fn test_zero_capacity_is_raised() {
        let mut log = EventLog::with_capacity(0);
        assert_eq!(log.capacity(), 1);
        log.record(&BoardEvent::Created { width: 2, height: 2 });
        assert_eq!(log.len(), 1);
        log.clear();
        assert!(log.is_empty());
    }

    #[test]
    fn test_closure_sink() {
        let mut seen = Vec::new();
        {
            let mut sink = |event: &BoardEvent| seen.push(event.to_string());
            sink.record(&BoardEvent::TextRemoved { content: "x".into() });
        }
        assert_eq!(seen, vec!["Text \"x\" removed from whiteboard".to_string()]);
    }
}
