//! Timing validation errors.

use thiserror::Error;

use crate::Frame;

#[derive(Debug, Clone, PartialEq, Error)]
/// Validation errors for timing input (actions, segments and line-timing parameters).
///
/// `index` is the position of the offending unit in the caller's list.
pub enum TimingError {
    #[error("invalid speed {speed} for unit {index}: speed must be finite and greater than zero")]
    /// A typing speed was zero, negative, NaN or infinite.
    InvalidSpeed {
        /// Position of the unit (`usize::MAX` for a global generator parameter).
        index: usize,
        /// The rejected speed.
        speed: f64,
    },

    #[error("negative wait of {frames} frames for unit {index}")]
    /// A wait action asked for a negative number of frames.
    NegativeWait {
        /// Position of the action.
        index: usize,
        /// The rejected frame count.
        frames: Frame,
    },

    #[error("invalid duration {duration} for segment {index}: duration must be at least 1 frame")]
    /// A segment or line timing declared a duration below one frame.
    InvalidDuration {
        /// Position of the segment.
        index: usize,
        /// The rejected duration.
        duration: Frame,
    },

    #[error("negative start frame {start} for segment {index}")]
    /// A segment starts before frame zero.
    NegativeStart {
        /// Position of the segment.
        index: usize,
        /// The rejected start frame.
        start: Frame,
    },

    #[error(
        "segment {index} starts at frame {start}, before the previous segment's start {previous}"
    )]
    /// Segment start frames are not non-decreasing.
    OutOfOrder {
        /// Position of the segment.
        index: usize,
        /// Its start frame.
        start: Frame,
        /// Start frame of the segment before it.
        previous: Frame,
    },

    #[error("unit {index} ends past the last representable frame")]
    /// Accumulated frame positions no longer fit in a [`Frame`].
    FrameOverflow {
        /// Position of the unit whose end overflowed.
        index: usize,
    },
}

/// Index reported for errors in generator-wide parameters rather than a specific unit.
pub const GLOBAL_PARAMETER: usize = usize::MAX;

pub(crate) fn check_speed(index: usize, speed: f64) -> Result<f64, TimingError> {
    if speed.is_finite() && speed > 0.0 {
        Ok(speed)
    } else {
        Err(TimingError::InvalidSpeed { index, speed })
    }
}
