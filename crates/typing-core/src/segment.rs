//! Timed editing segments.
//!
//! A [`Segment`] is one entry of an animation script with an explicit, caller-supplied start
//! frame and duration. Segments are the canonical unit shape of this crate: primitive
//! [`Action`](crate::Action) lists convert into segments via
//! [`Timeline::to_segments`](crate::Timeline::to_segments).
//!
//! The serialized form uses the camelCase field names common to video-composition props:
//!
//! ```json
//! { "type": "select", "replaceLength": 5, "insertText": "👋",
//!   "startFrame": 90, "durationInFrames": 1, "dropdownItems": [] }
//! ```

use serde::{Deserialize, Serialize};

use crate::Frame;
use crate::error::TimingError;
use crate::reveal::RevealMode;
use crate::snapshot::FrameSnapshot;
use crate::state::{EditorState, compute_editor_state};

/// One selectable completion item shown in the suggestion overlay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Glyph shown before the label (usually an emoji).
    #[serde(alias = "icon")]
    pub emoji: String,
    /// Human-readable label.
    #[serde(alias = "label")]
    pub name: String,
}

impl Suggestion {
    /// Create a suggestion item.
    pub fn new(emoji: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            emoji: emoji.into(),
            name: name.into(),
        }
    }
}

/// What a segment does to the editor text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SegmentKind {
    /// Reveal `text` progressively over the segment's duration.
    Type {
        /// Text appended to the document.
        text: String,
        /// Pacing of the reveal.
        #[serde(default)]
        reveal: RevealMode,
    },
    /// Hold the current text.
    Pause,
    /// Replace the last `replace_length` characters with `insert_text`, instantly.
    ///
    /// Models accepting an autocomplete suggestion.
    Select {
        /// Characters removed from the end of the text (clamped to the text length).
        #[serde(rename = "replaceLength", default)]
        replace_length: usize,
        /// Text inserted after the removal.
        #[serde(rename = "insertText", default)]
        insert_text: String,
    },
}

/// A timed unit of the animation script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    /// Segment behavior.
    #[serde(flatten)]
    pub kind: SegmentKind,
    /// Absolute frame at which the segment starts.
    pub start_frame: Frame,
    /// Length of the segment in frames.
    pub duration_in_frames: Frame,
    /// Suggestions shown while this segment is the latest one carrying a list.
    #[serde(default, rename = "dropdownItems", alias = "suggestions")]
    pub suggestions: Vec<Suggestion>,
}

impl Segment {
    /// A typing segment with the default (weighted) reveal.
    pub fn typing(text: impl Into<String>, start_frame: Frame, duration_in_frames: Frame) -> Self {
        Self::new(
            SegmentKind::Type {
                text: text.into(),
                reveal: RevealMode::Weighted,
            },
            start_frame,
            duration_in_frames,
        )
    }

    /// A pause segment.
    pub fn pause(start_frame: Frame, duration_in_frames: Frame) -> Self {
        Self::new(SegmentKind::Pause, start_frame, duration_in_frames)
    }

    /// A one-frame select segment replacing `replace_length` characters with `insert_text`.
    pub fn select(
        replace_length: usize,
        insert_text: impl Into<String>,
        start_frame: Frame,
    ) -> Self {
        Self::new(
            SegmentKind::Select {
                replace_length,
                insert_text: insert_text.into(),
            },
            start_frame,
            1,
        )
    }

    fn new(kind: SegmentKind, start_frame: Frame, duration_in_frames: Frame) -> Self {
        Self {
            kind,
            start_frame,
            duration_in_frames,
            suggestions: Vec::new(),
        }
    }

    /// Attach a suggestion list.
    pub fn with_suggestions(mut self, suggestions: Vec<Suggestion>) -> Self {
        self.suggestions = suggestions;
        self
    }

    /// Override the reveal pacing of a typing segment (no-op for other kinds).
    pub fn with_reveal(mut self, mode: RevealMode) -> Self {
        if let SegmentKind::Type { reveal, .. } = &mut self.kind {
            *reveal = mode;
        }
        self
    }

    /// Exclusive end frame.
    pub fn end_frame(&self) -> Frame {
        self.start_frame.saturating_add(self.duration_in_frames)
    }

    /// Typed text, if this is a typing segment.
    pub fn text(&self) -> Option<&str> {
        match &self.kind {
            SegmentKind::Type { text, .. } => Some(text),
            _ => None,
        }
    }

    /// Returns `true` for select segments.
    pub fn is_select(&self) -> bool {
        matches!(self.kind, SegmentKind::Select { .. })
    }
}

/// Check that segments are well-formed: non-negative start frames, durations of at least one
/// frame, and non-decreasing start frames.
pub fn validate_segments(segments: &[Segment]) -> Result<(), TimingError> {
    let mut previous: Option<Frame> = None;
    for (index, segment) in segments.iter().enumerate() {
        if segment.start_frame < 0 {
            return Err(TimingError::NegativeStart {
                index,
                start: segment.start_frame,
            });
        }
        if segment.duration_in_frames < 1 {
            return Err(TimingError::InvalidDuration {
                index,
                duration: segment.duration_in_frames,
            });
        }
        if let Some(previous) = previous
            && segment.start_frame < previous
        {
            return Err(TimingError::OutOfOrder {
                index,
                start: segment.start_frame,
                previous,
            });
        }
        previous = Some(segment.start_frame);
    }
    Ok(())
}

/// A validated, immutable segment list.
///
/// The free function [`compute_editor_state`] accepts any slice and folds it in the given order
/// (last write wins for malformed input). `Script` rejects such input up front instead.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Script {
    segments: Vec<Segment>,
}

impl Script {
    /// Validate and wrap a segment list.
    pub fn new(segments: Vec<Segment>) -> Result<Self, TimingError> {
        validate_segments(&segments)?;
        Ok(Self { segments })
    }

    /// The underlying segments, in order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Latest end frame over all segments (0 for an empty script).
    pub fn end_frame(&self) -> Frame {
        self.segments
            .iter()
            .map(Segment::end_frame)
            .max()
            .unwrap_or(0)
    }

    /// Editor state at `frame`.
    pub fn state_at(&self, frame: Frame) -> EditorState {
        compute_editor_state(frame, &self.segments)
    }

    /// Renderable snapshot at `frame`.
    pub fn snapshot_at(&self, frame: Frame) -> FrameSnapshot {
        FrameSnapshot::from_segments(frame, &self.segments)
    }
}

impl TryFrom<Vec<Segment>> for Script {
    type Error = TimingError;

    fn try_from(segments: Vec<Segment>) -> Result<Self, Self::Error> {
        Self::new(segments)
    }
}

impl<'de> Deserialize<'de> for Script {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let segments = Vec::<Segment>::deserialize(deserializer)?;
        Self::new(segments).map_err(serde::de::Error::custom)
    }
}
