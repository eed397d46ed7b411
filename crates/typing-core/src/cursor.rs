//! Cursor blink timing.

use crate::Frame;

/// Frames after the last typing activity during which the cursor stays solid.
pub const CURSOR_HOLD_FRAMES: Frame = 15;
/// Frames between blink toggles once the hold window has passed.
pub const CURSOR_BLINK_PERIOD_FRAMES: Frame = 15;

/// Whether the cursor is drawn at `frame`, given the most recent activity frame.
///
/// Activity keeps the cursor solid for [`CURSOR_HOLD_FRAMES`]; afterwards it toggles every
/// [`CURSOR_BLINK_PERIOD_FRAMES`], starting hidden. Frames before the activity frame count as
/// "just active".
pub fn cursor_visible(frame: Frame, last_activity_frame: Frame) -> bool {
    let since = frame.saturating_sub(last_activity_frame).max(0);
    if since < CURSOR_HOLD_FRAMES {
        return true;
    }
    ((since - CURSOR_HOLD_FRAMES) / CURSOR_BLINK_PERIOD_FRAMES) % 2 == 1
}
