//! Whiteboard Core Library
//!
//! Board model for a collaborative text whiteboard: a bounded canvas holding
//! positioned text, change events for every mutation, and a JSON snapshot.

pub mod config;
pub mod error;
pub mod event;
pub mod text;
pub mod whiteboard;

pub use config::BoardConfig;
pub use error::{Axis, WhiteboardError, WhiteboardResult};
pub use event::{BoardEvent, EventLog, EventSink, NullSink, DEFAULT_EVENT_HISTORY};
pub use text::{Text, TextId};
pub use whiteboard::{BoardSnapshot, TextEntry, Whiteboard};
