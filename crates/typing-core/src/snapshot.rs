//! Frame Snapshot (Headless Output)
//!
//! Provides the per-frame data a renderer needs to paint the editor: visible lines, which
//! line carries the cursor, whether the cursor is drawn, and the suggestion overlay.

use serde::Serialize;

use crate::Frame;
use crate::cursor::cursor_visible;
use crate::line_timing::{LineTiming, active_line_index, visible_lines};
use crate::segment::{Segment, Suggestion};
use crate::state::compute_editor_state;
use crate::text::{char_len, char_width, split_lines, str_width};

/// Character marking where the suggestion overlay is anchored.
pub const SUGGESTION_TRIGGER: char = ':';

/// Cell (character) information
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Cell {
    /// Character content
    pub ch: char,
    /// Visual width (1 or 2 cells)
    pub width: usize,
}

impl Cell {
    /// Create a cell for `ch`, measuring its width.
    pub fn new(ch: char) -> Self {
        Self {
            ch,
            width: char_width(ch),
        }
    }
}

/// One visible editor line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotLine {
    /// Logical line index in the document.
    pub index: usize,
    /// Revealed text of the line.
    pub text: String,
    /// Whether this line holds the cursor.
    pub is_active: bool,
}

impl SnapshotLine {
    /// Total visual width of the line in cells.
    pub fn visual_width(&self) -> usize {
        str_width(&self.text)
    }

    /// The line as monospace cells.
    pub fn cells(&self) -> Vec<Cell> {
        self.text.chars().map(Cell::new).collect()
    }
}

/// Autocomplete dropdown payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionOverlay {
    /// Items in display order.
    pub items: Vec<Suggestion>,
    /// Highlighted item; the first entry by convention.
    pub selected_index: usize,
    /// Character column of the anchor within the active line.
    pub anchor_column: usize,
    /// Cell column of the anchor within the active line.
    pub anchor_cell: usize,
}

impl SuggestionOverlay {
    /// The highlighted item.
    pub fn selected(&self) -> Option<&Suggestion> {
        self.items.get(self.selected_index)
    }
}

/// Everything visible at one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameSnapshot {
    /// Frame this snapshot describes.
    pub frame: Frame,
    /// Visible lines, top to bottom.
    pub lines: Vec<SnapshotLine>,
    /// Logical index of the cursor line (`None` when nothing has started).
    pub active_line: Option<usize>,
    /// Whether the cursor is drawn this frame.
    pub cursor_visible: bool,
    /// Suggestion dropdown, when open.
    pub overlay: Option<SuggestionOverlay>,
}

impl FrameSnapshot {
    /// Snapshot of a segment script.
    ///
    /// The accumulated text is split on `'\n'`; the last line is always the active one, and the
    /// overlay (if any) is anchored on it.
    pub fn from_segments(frame: Frame, segments: &[Segment]) -> Self {
        let state = compute_editor_state(frame, segments);
        let cursor_visible = cursor_visible(frame, state.last_activity_frame);

        let texts = split_lines(&state.text);
        let active = texts.len() - 1;
        let overlay = state
            .active_suggestions
            .filter(|items| !items.is_empty())
            .map(|items| {
                let (anchor_column, anchor_cell) = overlay_anchor(&texts[active]);
                SuggestionOverlay {
                    items,
                    selected_index: 0,
                    anchor_column,
                    anchor_cell,
                }
            });

        let lines = texts
            .into_iter()
            .enumerate()
            .map(|(index, text)| SnapshotLine {
                index,
                text,
                is_active: index == active,
            })
            .collect();

        Self {
            frame,
            lines,
            active_line: Some(active),
            cursor_visible,
            overlay,
        }
    }

    /// Snapshot of line-timed source text.
    ///
    /// Lines that have not started are omitted; the last started line is active. The cursor
    /// blinks freely from frame 0.
    pub fn from_lines<S: AsRef<str>>(frame: Frame, lines: &[S], timings: &[LineTiming]) -> Self {
        let visible = visible_lines(frame, lines, timings);
        let active_line = active_line_index(&visible);

        let lines = visible
            .into_iter()
            .enumerate()
            .filter_map(|(index, text)| {
                text.map(|text| SnapshotLine {
                    index,
                    text,
                    is_active: Some(index) == active_line,
                })
            })
            .collect();

        Self {
            frame,
            lines,
            active_line,
            cursor_visible: cursor_visible(frame, 0),
            overlay: None,
        }
    }

    /// The active line, if any.
    pub fn active(&self) -> Option<&SnapshotLine> {
        self.lines.iter().find(|line| line.is_active)
    }

    /// Visible text with lines joined by `'\n'`.
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(|line| line.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Column of the last trigger character on the line, or the end of the line without one.
fn overlay_anchor(line: &str) -> (usize, usize) {
    match line.char_indices().rfind(|(_, ch)| *ch == SUGGESTION_TRIGGER) {
        Some((byte, _)) => {
            let prefix = &line[..byte];
            (char_len(prefix), str_width(prefix))
        }
        None => (char_len(line), str_width(line)),
    }
}
