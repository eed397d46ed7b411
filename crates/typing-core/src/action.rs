//! Primitive animation actions and the timeline derived from them.
//!
//! Actions carry no start time. [`build_timeline`] lays them end to end starting at frame 0:
//!
//! | action | duration |
//! |---|---|
//! | `type` | `ceil(chars / speed)`, at least 1 frame |
//! | `wait` | `frames` |
//! | `newline` | 1 frame |

use serde::{Deserialize, Serialize};

use crate::Frame;
use crate::error::{TimingError, check_speed};
use crate::reveal::RevealMode;
use crate::segment::{Segment, SegmentKind};
use crate::text::{char_len, char_prefix};

/// Typing speed used when an action does not specify one (characters per frame).
pub const DEFAULT_TYPE_SPEED: f64 = 1.0;

/// A primitive animation action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Action {
    /// Type `text` at `speed` characters per frame.
    Type {
        /// Text to reveal.
        text: String,
        /// Characters per frame; defaults to [`DEFAULT_TYPE_SPEED`].
        #[serde(default, skip_serializing_if = "Option::is_none")]
        speed: Option<f64>,
    },
    /// Hold for a number of frames.
    Wait {
        /// Frames to wait.
        frames: Frame,
    },
    /// Insert a line break.
    Newline,
}

impl Action {
    /// `type` action at the default speed.
    pub fn type_text(text: impl Into<String>) -> Self {
        Self::Type {
            text: text.into(),
            speed: None,
        }
    }

    /// `type` action at an explicit speed.
    pub fn type_at(text: impl Into<String>, speed: f64) -> Self {
        Self::Type {
            text: text.into(),
            speed: Some(speed),
        }
    }

    /// `wait` action.
    pub fn wait(frames: Frame) -> Self {
        Self::Wait { frames }
    }

    fn duration(&self, index: usize) -> Result<Frame, TimingError> {
        match self {
            Self::Type { text, speed } => {
                let speed = check_speed(index, speed.unwrap_or(DEFAULT_TYPE_SPEED))?;
                let frames = (char_len(text) as f64 / speed).ceil() as Frame;
                Ok(frames.max(1))
            }
            Self::Wait { frames } if *frames < 0 => Err(TimingError::NegativeWait {
                index,
                frames: *frames,
            }),
            Self::Wait { frames } => Ok(*frames),
            Self::Newline => Ok(1),
        }
    }
}

/// An action placed on the timeline over `[start_frame, end_frame)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntry {
    /// Inclusive start frame.
    pub start_frame: Frame,
    /// Exclusive end frame.
    pub end_frame: Frame,
    /// The placed action.
    pub action: Action,
}

impl TimelineEntry {
    /// Length of the entry in frames.
    pub fn duration(&self) -> Frame {
        self.end_frame.saturating_sub(self.start_frame)
    }
}

/// Actions resolved to absolute frame windows.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Timeline {
    /// Entries in playback order.
    pub entries: Vec<TimelineEntry>,
    /// Frames needed to play the whole sequence once.
    pub total_frames: Frame,
}

/// Lay `actions` end to end starting at frame 0.
///
/// # Errors
///
/// [`TimingError::InvalidSpeed`] for a non-positive or non-finite speed,
/// [`TimingError::NegativeWait`] for a negative wait and [`TimingError::FrameOverflow`] when the
/// total length does not fit in a [`Frame`].
pub fn build_timeline(actions: &[Action]) -> Result<Timeline, TimingError> {
    let mut entries = Vec::with_capacity(actions.len());
    let mut frame: Frame = 0;

    for (index, action) in actions.iter().enumerate() {
        let duration = action.duration(index)?;
        let end_frame = frame
            .checked_add(duration)
            .ok_or(TimingError::FrameOverflow { index })?;
        entries.push(TimelineEntry {
            start_frame: frame,
            end_frame,
            action: action.clone(),
        });
        frame = end_frame;
    }

    Ok(Timeline {
        entries,
        total_frames: frame,
    })
}

impl Timeline {
    /// Visible text at `frame` with a linear per-entry reveal.
    pub fn visible_text(&self, frame: Frame) -> String {
        self.visible_text_with(frame, RevealMode::Linear)
    }

    /// Visible text at `frame`, revealing typed entries with `mode`.
    pub fn visible_text_with(&self, frame: Frame, mode: RevealMode) -> String {
        let mut out = String::new();

        for entry in &self.entries {
            if frame < entry.start_frame {
                break;
            }
            match &entry.action {
                Action::Type { text, .. } => {
                    let count = mode.char_count(
                        frame.saturating_sub(entry.start_frame),
                        entry.duration(),
                        text,
                    );
                    out.push_str(char_prefix(text, count));
                }
                Action::Newline => out.push('\n'),
                Action::Wait { .. } => {}
            }
        }

        out
    }

    /// Convert to the canonical segment shape.
    ///
    /// Typed entries become linear-reveal typing segments, waits become pauses and newlines
    /// become one-frame instant typing segments, so the segment resolver reproduces
    /// [`visible_text`](Self::visible_text) frame for frame. Zero-frame waits are dropped, which
    /// keeps the result acceptable to [`Script::new`](crate::Script::new).
    pub fn to_segments(&self) -> Vec<Segment> {
        self.entries
            .iter()
            .filter_map(|entry| {
                let kind = match &entry.action {
                    Action::Type { text, .. } => SegmentKind::Type {
                        text: text.clone(),
                        reveal: RevealMode::Linear,
                    },
                    Action::Wait { .. } if entry.duration() == 0 => return None,
                    Action::Wait { .. } => SegmentKind::Pause,
                    Action::Newline => SegmentKind::Type {
                        text: "\n".to_string(),
                        reveal: RevealMode::Instant,
                    },
                };
                Some(Segment {
                    kind,
                    start_frame: entry.start_frame,
                    duration_in_frames: entry.duration(),
                    suggestions: Vec::new(),
                })
            })
            .collect()
    }
}
