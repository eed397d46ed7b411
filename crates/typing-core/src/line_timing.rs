//! Per-line timing windows for revealing raw source text line by line.

use serde::{Deserialize, Serialize};

use crate::Frame;
use crate::error::{GLOBAL_PARAMETER, TimingError, check_speed};
use crate::reveal::linear_char_count;
use crate::text::{char_len, char_prefix};

/// Default characters per frame for generated line timings.
pub const DEFAULT_LINE_SPEED: f64 = 1.5;
/// Default frames of silence after each non-empty, non-final line.
pub const DEFAULT_LINE_GAP: Frame = 8;

/// The window in which one line is typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineTiming {
    /// Frame at which the line starts appearing.
    pub start_frame: Frame,
    /// Frames taken to type the full line.
    pub duration_in_frames: Frame,
}

impl LineTiming {
    /// Exclusive end frame.
    pub fn end_frame(&self) -> Frame {
        self.start_frame.saturating_add(self.duration_in_frames)
    }
}

/// Derive one timing window per line.
///
/// Each line lasts `ceil(len / speed)` frames (at least 1, so empty lines still occupy a
/// frame). The next line starts right after, plus `gap` frames when the line just typed is
/// non-empty and not the last one.
///
/// # Errors
///
/// [`TimingError::InvalidSpeed`] when `speed` is not a positive finite number,
/// [`TimingError::NegativeWait`] for a negative `gap` and [`TimingError::FrameOverflow`] when
/// the windows run past the last representable frame.
pub fn generate_line_timings<S: AsRef<str>>(
    lines: &[S],
    speed: f64,
    gap: Frame,
) -> Result<Vec<LineTiming>, TimingError> {
    let speed = check_speed(GLOBAL_PARAMETER, speed)?;
    if gap < 0 {
        return Err(TimingError::NegativeWait {
            index: GLOBAL_PARAMETER,
            frames: gap,
        });
    }

    let mut timings = Vec::with_capacity(lines.len());
    let mut frame: Frame = 0;
    let last = lines.len().saturating_sub(1);

    for (i, line) in lines.iter().enumerate() {
        let line = line.as_ref();
        let duration = ((char_len(line) as f64 / speed).ceil() as Frame).max(1);
        timings.push(LineTiming {
            start_frame: frame,
            duration_in_frames: duration,
        });
        let mut next = frame.checked_add(duration);
        if !line.is_empty() && i < last {
            next = next.and_then(|next| next.checked_add(gap));
        }
        frame = next.ok_or(TimingError::FrameOverflow { index: i })?;
    }

    Ok(timings)
}

/// Pick explicit timings when they cover exactly `lines`, otherwise generate fresh ones.
///
/// Explicit timings go stale whenever the source text gains or loses lines; regenerating keeps
/// every line animated instead of leaving the tail untimed.
pub fn resolve_line_timings<S: AsRef<str>>(
    lines: &[S],
    explicit: Option<&[LineTiming]>,
    speed: f64,
    gap: Frame,
) -> Result<Vec<LineTiming>, TimingError> {
    match explicit {
        Some(timings) if timings.len() == lines.len() => {
            for (index, timing) in timings.iter().enumerate() {
                if timing.duration_in_frames < 1 {
                    return Err(TimingError::InvalidDuration {
                        index,
                        duration: timing.duration_in_frames,
                    });
                }
            }
            Ok(timings.to_vec())
        }
        _ => generate_line_timings(lines, speed, gap),
    }
}

/// Reveal each line independently and linearly.
///
/// Returns `None` for lines whose window has not started (or that have no timing) and the
/// revealed prefix otherwise; a line is complete once `frame >= start + duration`.
pub fn visible_lines<S: AsRef<str>>(
    frame: Frame,
    lines: &[S],
    timings: &[LineTiming],
) -> Vec<Option<String>> {
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let timing = timings.get(i)?;
            if frame < timing.start_frame {
                return None;
            }
            let line = line.as_ref();
            let count = linear_char_count(
                frame.saturating_sub(timing.start_frame),
                timing.duration_in_frames,
                char_len(line),
            );
            Some(char_prefix(line, count).to_string())
        })
        .collect()
}

/// Index of the last line that has started, i.e. the line carrying the cursor.
pub fn active_line_index(visible: &[Option<String>]) -> Option<usize> {
    visible.iter().rposition(Option::is_some)
}
