//! Board construction settings.

use crate::event::DEFAULT_EVENT_HISTORY;
use serde::{Deserialize, Serialize};

/// Default board width.
pub const DEFAULT_WIDTH: u32 = 32;

/// Default board height.
pub const DEFAULT_HEIGHT: u32 = 20;

/// Settings for creating a [`Whiteboard`](crate::Whiteboard).
///
/// Missing fields fall back to their defaults, so `{}` is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Initial board width.
    pub width: u32,
    /// Initial board height.
    pub height: u32,
    /// Number of recent events kept by the board's event log.
    pub event_history: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            event_history: DEFAULT_EVENT_HISTORY,
        }
    }
}

impl BoardConfig {
    /// Parse a config from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
