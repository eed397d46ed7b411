//! Editor State Resolver
//!
//! Reconstructs what the simulated editor shows at a given frame by folding over the
//! segment list from the beginning.
//!
//! # Overview
//!
//! The resolver keeps no memory between calls. Every query re-scans the segments that have
//! started by the query frame, so a renderer may ask for frames in any order (scrubbing,
//! parallel export) and always gets the same answer.
//!
//! - **Type** segments append a (possibly partial) reveal of their text
//! - **Select** segments delete trailing characters and insert replacement text
//! - **Pause** segments only hold time
//! - Any segment with a non-empty suggestion list opens the suggestion overlay; a select
//!   segment without one closes it
//!
//! # Example
//!
//! ```rust
//! use typing_core::{Segment, Suggestion, compute_editor_state};
//!
//! let segments = vec![
//!     Segment::typing("Hello :wa", 0, 9)
//!         .with_suggestions(vec![Suggestion::new("👋", "wave")]),
//!     Segment::select(3, "👋", 20),
//! ];
//!
//! let typing = compute_editor_state(10, &segments);
//! assert_eq!(typing.text, "Hello :wa");
//! assert!(typing.active_suggestions.is_some());
//!
//! let accepted = compute_editor_state(20, &segments);
//! assert_eq!(accepted.text, "Hello 👋");
//! assert!(accepted.active_suggestions.is_none());
//! ```

use serde::Serialize;

use crate::Frame;
use crate::segment::{Segment, SegmentKind, Suggestion};
use crate::text::{char_prefix, truncate_chars_from_end};

/// Editor state at one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorState {
    /// Accumulated visible text (may contain `'\n'`).
    pub text: String,
    /// Suggestion list currently shown, if any.
    pub active_suggestions: Option<Vec<Suggestion>>,
    /// Most recent frame at which text was typed or replaced.
    ///
    /// Equals the query frame while a typing segment is still revealing.
    pub last_activity_frame: Frame,
    /// Whether a typing segment is mid-reveal at the query frame.
    pub is_typing: bool,
}

impl EditorState {
    /// Returns `true` if a non-empty suggestion list is active.
    pub fn has_suggestions(&self) -> bool {
        self.active_suggestions
            .as_ref()
            .is_some_and(|items| !items.is_empty())
    }

    /// Frames elapsed since the last typing activity (never negative).
    pub fn frames_since_activity(&self, frame: Frame) -> Frame {
        frame.saturating_sub(self.last_activity_frame).max(0)
    }
}

/// Compute the editor state at `frame`.
///
/// Segments are consumed in slice order and iteration stops at the first segment that has not
/// started yet. The slice is not validated: out-of-order start frames still produce a
/// deterministic, fold-order-dependent result. Use [`Script`](crate::Script) to reject such
/// input instead.
pub fn compute_editor_state(frame: Frame, segments: &[Segment]) -> EditorState {
    let mut text = String::new();
    let mut active_suggestions: Option<&[Suggestion]> = None;
    let mut is_typing = false;
    let mut last_activity_frame: Frame = 0;

    for segment in segments {
        if frame < segment.start_frame {
            break;
        }

        match &segment.kind {
            SegmentKind::Type {
                text: typed,
                reveal,
            } => {
                let elapsed = frame.saturating_sub(segment.start_frame);
                let count = reveal.char_count(elapsed, segment.duration_in_frames, typed);
                text.push_str(char_prefix(typed, count));

                if elapsed < segment.duration_in_frames {
                    is_typing = true;
                } else {
                    last_activity_frame = segment.end_frame();
                }
            }
            SegmentKind::Select {
                replace_length,
                insert_text,
            } => {
                truncate_chars_from_end(&mut text, *replace_length);
                text.push_str(insert_text);
                last_activity_frame = segment.start_frame;
            }
            SegmentKind::Pause => {}
        }

        if !segment.suggestions.is_empty() {
            active_suggestions = Some(&segment.suggestions);
        } else if segment.is_select() {
            active_suggestions = None;
        }
    }

    if is_typing {
        last_activity_frame = frame;
    }

    EditorState {
        text,
        active_suggestions: active_suggestions.map(<[Suggestion]>::to_vec),
        last_activity_frame,
        is_typing,
    }
}
