#![warn(missing_docs)]
//! Typing Core - Headless Typing Animation Engine
//!
//! # Overview
//!
//! `typing-core` computes what a simulated code editor shows at any frame of a "someone is
//! typing" video: the revealed text, which line holds the cursor, whether the cursor is drawn,
//! and the autocomplete dropdown. It does not render anything; a video renderer asks for a
//! frame and paints the returned [`FrameSnapshot`].
//!
//! Every query is a pure function of `(frame, script)`. Nothing is cached between calls, so
//! frames may be requested in any order, repeatedly, or in parallel.
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  Scene & Composition Metadata               │  ← Public API
//! ├─────────────────────────────────────────────┤
//! │  Frame Snapshot (lines, cursor, overlay)    │  ← Rendering Data
//! ├─────────────────────────────────────────────┤
//! │  State Resolver (fold over segments)        │  ← Editor State
//! ├─────────────────────────────────────────────┤
//! │  Timelines (actions, segments, line timing) │  ← Timing
//! ├─────────────────────────────────────────────┤
//! │  Reveal Pacing (weighted / linear)          │  ← Characters per frame
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ## Resolving segments
//!
//! ```rust
//! use typing_core::{Script, Segment, Suggestion};
//!
//! let script = Script::new(vec![
//!     Segment::typing("Hello :wa", 0, 18)
//!         .with_suggestions(vec![Suggestion::new("👋", "wave")]),
//!     Segment::pause(18, 10),
//!     Segment::select(3, "👋", 28),
//! ])
//! .unwrap();
//!
//! let snapshot = script.snapshot_at(20);
//! assert_eq!(snapshot.text(), "Hello :wa");
//! let overlay = snapshot.overlay.expect("dropdown is open");
//! assert_eq!(overlay.anchor_column, 6);
//!
//! assert_eq!(script.state_at(28).text, "Hello 👋");
//! ```
//!
//! ## Building a timeline from primitive actions
//!
//! ```rust
//! use typing_core::{Action, build_timeline};
//!
//! let timeline = build_timeline(&[
//!     Action::type_at("ab", 1.0),
//!     Action::wait(5),
//!     Action::Newline,
//! ])
//! .unwrap();
//!
//! assert_eq!(timeline.total_frames, 8);
//! assert_eq!(timeline.visible_text(1), "a");
//! assert_eq!(timeline.visible_text(7), "ab\n");
//! ```
//!
//! # Module Description
//!
//! - [`action`] - Primitive actions and derived timelines
//! - [`segment`] - Explicitly timed segments (canonical shape) and validated scripts
//! - [`reveal`] - Weighted and linear character reveal
//! - [`state`] - Segment fold producing the editor state
//! - [`line_timing`] - Per-line timing generation and reveal
//! - [`cursor`] - Cursor blink timing
//! - [`snapshot`] - Per-frame rendering data
//! - [`scene`] - Scenes, presets and composition metadata
//!
//! # Unicode Support
//!
//! - All lengths are counted in `char`s, so emoji are typed and deleted whole
//! - Overlay anchors are also reported in display cells (CJK and emoji are 2 cells wide)

pub mod action;
pub mod cursor;
pub mod error;
pub mod line_timing;
pub mod reveal;
pub mod scene;
pub mod segment;
pub mod snapshot;
pub mod state;
mod text;

/// Absolute or relative frame number.
pub type Frame = i64;

pub use action::{Action, DEFAULT_TYPE_SPEED, Timeline, TimelineEntry, build_timeline};
pub use cursor::{CURSOR_BLINK_PERIOD_FRAMES, CURSOR_HOLD_FRAMES, cursor_visible};
pub use error::TimingError;
pub use line_timing::{
    DEFAULT_LINE_GAP, DEFAULT_LINE_SPEED, LineTiming, active_line_index, generate_line_timings,
    resolve_line_timings, visible_lines,
};
pub use reveal::{RevealMode, char_weights, linear_char_count, typed_char_count};
pub use scene::{
    CompositionMetadata, EMPTY_SCENE_FRAMES, Scene, ScriptSource, TRAILING_BUFFER_FRAMES,
    demo_segments, total_duration,
};
pub use segment::{Script, Segment, SegmentKind, Suggestion, validate_segments};
pub use snapshot::{Cell, FrameSnapshot, SnapshotLine, SuggestionOverlay};
pub use state::{EditorState, compute_editor_state};
pub use text::{char_width, str_width};
