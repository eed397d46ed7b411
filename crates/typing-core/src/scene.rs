//! Scenes and composition metadata.
//!
//! A [`Scene`] bundles the presentation inputs the engine passes through untouched
//! (background, filename, canvas size) with one of the three timing representations.

use serde::{Deserialize, Serialize};

use crate::Frame;
use crate::action::{Action, build_timeline};
use crate::error::TimingError;
use crate::line_timing::{DEFAULT_LINE_GAP, DEFAULT_LINE_SPEED, LineTiming, resolve_line_timings};
use crate::segment::{Segment, Suggestion};
use crate::snapshot::FrameSnapshot;
use crate::text::split_lines;

/// Frames appended after the last unit so the finished text stays on screen.
pub const TRAILING_BUFFER_FRAMES: Frame = 30;
/// Composition length for a scene with nothing to animate.
pub const EMPTY_SCENE_FRAMES: Frame = 60;

/// Sizing information consumed by the video composition layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositionMetadata {
    /// Length of the render.
    pub duration_in_frames: Frame,
    /// Frames per second.
    pub fps: u32,
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
}

/// Render length for a segment list: latest end frame plus the trailing buffer.
pub fn total_duration(segments: &[Segment]) -> Frame {
    padded_duration(segments.iter().map(Segment::end_frame).max())
}

fn padded_duration(end: Option<Frame>) -> Frame {
    end.map_or(EMPTY_SCENE_FRAMES, |end| end.saturating_add(TRAILING_BUFFER_FRAMES))
}

/// The timing representation driving a scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ScriptSource {
    /// Primitive actions laid end to end.
    Actions {
        /// Actions in playback order.
        actions: Vec<Action>,
    },
    /// Raw source text revealed line by line.
    #[serde(rename_all = "camelCase")]
    Lines {
        /// Full source text; lines are split on `'\n'`.
        code: String,
        /// Explicit per-line windows; regenerated when absent or stale.
        #[serde(default)]
        line_timings: Option<Vec<LineTiming>>,
        /// Characters per frame for generated timings.
        #[serde(default = "default_line_speed")]
        speed: f64,
        /// Gap after non-empty lines for generated timings.
        #[serde(default = "default_line_gap")]
        gap: Frame,
    },
    /// Explicitly timed segments.
    Segments {
        /// Segments in playback order.
        segments: Vec<Segment>,
    },
}

fn default_line_speed() -> f64 {
    DEFAULT_LINE_SPEED
}

fn default_line_gap() -> Frame {
    DEFAULT_LINE_GAP
}

fn default_fps() -> u32 {
    30
}

/// A complete animation description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    /// Background image reference, passed through to the renderer.
    pub background_image: String,
    /// Filename shown in the window title.
    pub filename: String,
    /// Frames per second.
    #[serde(default = "default_fps")]
    pub fps: u32,
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Timing representation.
    pub script: ScriptSource,
}

impl Scene {
    /// Snapshot at `frame`.
    ///
    /// # Errors
    ///
    /// Returns a [`TimingError`] when the action list or line-timing parameters are invalid.
    /// Segment lists are resolved as given.
    pub fn snapshot(&self, frame: Frame) -> Result<FrameSnapshot, TimingError> {
        match &self.script {
            ScriptSource::Actions { actions } => {
                let segments = build_timeline(actions)?.to_segments();
                Ok(FrameSnapshot::from_segments(frame, &segments))
            }
            ScriptSource::Lines {
                code,
                line_timings,
                speed,
                gap,
            } => {
                let lines = split_lines(code);
                let timings = resolve_line_timings(&lines, line_timings.as_deref(), *speed, *gap)?;
                Ok(FrameSnapshot::from_lines(frame, &lines, &timings))
            }
            ScriptSource::Segments { segments } => {
                Ok(FrameSnapshot::from_segments(frame, segments))
            }
        }
    }

    /// Composition metadata: duration covers every unit plus [`TRAILING_BUFFER_FRAMES`].
    ///
    /// # Errors
    ///
    /// Same conditions as [`snapshot`](Self::snapshot).
    pub fn metadata(&self) -> Result<CompositionMetadata, TimingError> {
        let duration_in_frames = match &self.script {
            ScriptSource::Actions { actions } => {
                let timeline = build_timeline(actions)?;
                padded_duration((!timeline.entries.is_empty()).then_some(timeline.total_frames))
            }
            ScriptSource::Lines {
                code,
                line_timings,
                speed,
                gap,
            } => {
                let lines = split_lines(code);
                let timings = resolve_line_timings(&lines, line_timings.as_deref(), *speed, *gap)?;
                padded_duration(timings.iter().map(LineTiming::end_frame).max())
            }
            ScriptSource::Segments { segments } => total_duration(segments),
        };

        Ok(CompositionMetadata {
            duration_in_frames,
            fps: self.fps,
            width: self.width,
            height: self.height,
        })
    }

    /// The line-timed `App.tsx` sample.
    pub fn code_sample() -> Self {
        let code = [
            "import React from \"react\";",
            "",
            "export const App: React.FC = () => {",
            "  return (",
            "    <div className=\"app\">",
            "      <h1>Hello, World!</h1>",
            "    </div>",
            "  );",
            "};",
        ]
        .join("\n");

        Self {
            background_image: "background.jpg".to_string(),
            filename: "App.tsx".to_string(),
            fps: 30,
            width: 1280,
            height: 720,
            script: ScriptSource::Lines {
                code,
                line_timings: None,
                speed: DEFAULT_LINE_SPEED,
                gap: DEFAULT_LINE_GAP,
            },
        }
    }
}

impl Default for Scene {
    /// Emoji autocomplete demo: types `Hello :wave` and accepts the 👋 suggestion.
    fn default() -> Self {
        Self {
            background_image: "background.png".to_string(),
            filename: "playground/text.mdx".to_string(),
            fps: 30,
            width: 1140,
            height: 850,
            script: ScriptSource::Segments {
                segments: demo_segments(),
            },
        }
    }
}

/// Segments of the emoji autocomplete demo.
pub fn demo_segments() -> Vec<Segment> {
    let s = Suggestion::new;
    vec![
        Segment::typing("Hello", 0, 24),
        Segment::typing(" ", 24, 3),
        Segment::typing(":", 27, 1).with_suggestions(vec![
            s("💕", "ty"),
            s("🙏", "blob pray"),
            s("🖤", "black heart"),
            s("🤣", "lol"),
            s("👍", "thumbs up"),
            s("🆒", "nice"),
            s("🙏", "prayer hands"),
            s("👀", "eyes"),
            s("🐸", "frog wave"),
            s("😅", "sweat smile"),
        ]),
        Segment::pause(28, 20),
        Segment::typing("wa", 48, 6).with_suggestions(vec![
            s("👋", "wave"),
            s("🐸", "frog wave"),
            s("😅", "sweat smile"),
        ]),
        Segment::pause(54, 15),
        Segment::typing("ve", 69, 6).with_suggestions(vec![
            s("👋", "wave"),
            s("🐸", "frog wave"),
        ]),
        Segment::pause(75, 15),
        Segment::select(5, "👋", 90),
    ]
}
