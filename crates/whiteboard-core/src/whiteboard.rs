//! Board state and its invariant-preserving mutations.

use crate::config::BoardConfig;
use crate::error::{Axis, WhiteboardError, WhiteboardResult};
use crate::event::{BoardEvent, EventLog, EventSink};
use crate::text::{Text, TextId};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One text line in a [`BoardSnapshot`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextEntry {
    pub text: String,
    pub x: u32,
    pub y: u32,
}

/// Serializable projection of a board.
///
/// This is the only exported representation of a board; restoring it with
/// [`Whiteboard::from_snapshot`] reproduces the same size and ordered text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub width: u32,
    pub height: u32,
    #[serde(rename = "textLines")]
    pub text_lines: Vec<TextEntry>,
}

/// A bounded board holding positioned text.
///
/// Coordinates range over `0..=width` and `0..=height`. Shrinking the board
/// pulls any text past the new edge to `new_size - 1`; growing it never moves
/// text. Each successful mutation reports exactly one [`BoardEvent`] to the
/// sink `S`.
#[derive(Debug)]
pub struct Whiteboard<S: EventSink = EventLog> {
    width: u32,
    height: u32,
    /// Text in insertion order.
    text_lines: Vec<Text>,
    sink: S,
}

impl Whiteboard<EventLog> {
    /// Create a board that keeps its recent events in an [`EventLog`].
    pub fn new(width: u32, height: u32) -> WhiteboardResult<Self> {
        Self::with_sink(width, height, EventLog::new())
    }

    /// Create a board from configuration.
    pub fn from_config(config: &BoardConfig) -> WhiteboardResult<Self> {
        Self::with_sink(
            config.width,
            config.height,
            EventLog::with_capacity(config.event_history),
        )
    }

    /// Recent events recorded by this board.
    pub fn events(&self) -> &EventLog {
        &self.sink
    }
}

impl<S: EventSink> Whiteboard<S> {
    /// Create a board reporting its events to `sink`.
    pub fn with_sink(width: u32, height: u32, sink: S) -> WhiteboardResult<Self> {
        validate_dimension(Axis::Width, width)?;
        validate_dimension(Axis::Height, height)?;

        let mut board = Self {
            width,
            height,
            text_lines: Vec::new(),
            sink,
        };
        board.emit(BoardEvent::Created { width, height });
        Ok(board)
    }

    /// Rebuild a board from a snapshot.
    ///
    /// Replays the snapshot through [`Whiteboard::with_sink`] and
    /// [`Whiteboard::add_text`], so the sink sees one creation event followed
    /// by one addition per text line. Text identities are newly assigned.
    pub fn from_snapshot(snapshot: &BoardSnapshot, sink: S) -> WhiteboardResult<Self> {
        let mut board = Self::with_sink(snapshot.width, snapshot.height, sink)?;
        for entry in &snapshot.text_lines {
            board.add_text(entry.text.clone(), entry.x, entry.y);
        }
        Ok(board)
    }

    /// Rebuild a board from its JSON snapshot text.
    pub fn from_json_str(json: &str, sink: S) -> WhiteboardResult<Self> {
        let snapshot: BoardSnapshot = serde_json::from_str(json)?;
        Self::from_snapshot(&snapshot, sink)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of text lines on the board.
    pub fn num_text_lines(&self) -> usize {
        self.text_lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text_lines.is_empty()
    }

    /// All text in insertion order.
    pub fn text_lines(&self) -> &[Text] {
        &self.text_lines
    }

    /// Text at `index` in insertion order.
    pub fn text_at_index(&self, index: usize) -> WhiteboardResult<&Text> {
        self.text_lines
            .get(index)
            .ok_or(WhiteboardError::IndexOutOfRange {
                index,
                len: self.text_lines.len(),
            })
    }

    /// Look up a text by identity.
    pub fn text(&self, id: TextId) -> Option<&Text> {
        self.text_lines.iter().find(|text| text.id() == id)
    }

    /// Current index of a text, if it is on the board.
    pub fn index_of(&self, id: TextId) -> Option<usize> {
        self.text_lines.iter().position(|text| text.id() == id)
    }

    /// Append text at `(x, y)`.
    ///
    /// The position is taken as given; only resizing enforces bounds.
    pub fn add_text(&mut self, content: impl Into<String>, x: u32, y: u32) -> TextId {
        let text = Text::new(content.into(), x, y);
        let id = text.id();
        let event = BoardEvent::TextAdded {
            content: text.text().to_string(),
            x,
            y,
        };
        self.text_lines.push(text);
        self.emit(event);
        id
    }

    /// Remove the text with the given identity and return it.
    ///
    /// Other texts with the same content are left alone.
    pub fn remove_text(&mut self, id: TextId) -> WhiteboardResult<Text> {
        let Some(index) = self.index_of(id) else {
            log::warn!("Cannot remove text {}: not on board", id);
            return Err(WhiteboardError::NotFound(id));
        };
        let text = self.text_lines.remove(index);
        self.emit(BoardEvent::TextRemoved {
            content: text.text().to_string(),
        });
        Ok(text)
    }

    /// Move the text with the given identity to `(x, y)`.
    ///
    /// No bounds check is made against the current board size.
    pub fn move_text(&mut self, id: TextId, x: u32, y: u32) -> WhiteboardResult<()> {
        let Some(text) = self.text_lines.iter_mut().find(|text| text.id() == id) else {
            log::warn!("Cannot move text {}: not on board", id);
            return Err(WhiteboardError::NotFound(id));
        };
        text.set_position(x, y);
        let event = BoardEvent::TextMoved {
            content: text.text().to_string(),
            x,
            y,
        };
        self.emit(event);
        Ok(())
    }

    /// Change the board width, pulling text past the new edge back inside.
    pub fn set_width(&mut self, width: u32) -> WhiteboardResult<()> {
        validate_dimension(Axis::Width, width)?;

        let from = self.width;
        self.width = width;
        for text in &mut self.text_lines {
            if let Some(x) = clamp_on_shrink(text.x(), width) {
                text.set_x(x);
            }
        }
        self.emit(BoardEvent::WidthChanged { from, to: width });
        Ok(())
    }

    /// Change the board height, pulling text past the new edge back inside.
    pub fn set_height(&mut self, height: u32) -> WhiteboardResult<()> {
        validate_dimension(Axis::Height, height)?;

        let from = self.height;
        self.height = height;
        for text in &mut self.text_lines {
            if let Some(y) = clamp_on_shrink(text.y(), height) {
                text.set_y(y);
            }
        }
        self.emit(BoardEvent::HeightChanged { from, to: height });
        Ok(())
    }

    /// Typed snapshot of the board.
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            width: self.width,
            height: self.height,
            text_lines: self
                .text_lines
                .iter()
                .map(|text| TextEntry {
                    text: text.text().to_string(),
                    x: text.x(),
                    y: text.y(),
                })
                .collect(),
        }
    }

    /// JSON snapshot of the board.
    pub fn to_json(&self) -> WhiteboardResult<Value> {
        Ok(serde_json::to_value(self.snapshot())?)
    }

    /// Serialize the snapshot to compact JSON text.
    pub fn to_json_string(&self) -> WhiteboardResult<String> {
        Ok(serde_json::to_string(&self.snapshot())?)
    }

    /// Serialize the snapshot to pretty-printed JSON text.
    pub fn to_json_pretty(&self) -> WhiteboardResult<String> {
        Ok(serde_json::to_string_pretty(&self.snapshot())?)
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consume the board, returning its sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    fn emit(&mut self, event: BoardEvent) {
        log::debug!("{}", event);
        self.sink.record(&event);
    }
}

fn validate_dimension(axis: Axis, value: u32) -> WhiteboardResult<()> {
    if value == 0 {
        log::warn!("Rejected board {} of {}", axis, value);
        return Err(WhiteboardError::InvalidDimension { axis, value });
    }
    Ok(())
}

/// New coordinate for a text at `coord` after an axis shrinks to `size`, or
/// `None` if it stays put.
fn clamp_on_shrink(coord: u32, size: u32) -> Option<u32> {
    (coord > size).then(|| size - 1)
}
