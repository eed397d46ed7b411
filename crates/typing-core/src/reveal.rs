//! Character reveal pacing.
//!
//! A reveal maps `(elapsed, duration)` to the number of characters of a unit's text that are
//! visible. Three pacings are provided:
//!
//! - [`RevealMode::Weighted`]: human-like bursts and hesitations (see [`char_weights`])
//! - [`RevealMode::Linear`]: `floor(progress * len)`
//! - [`RevealMode::Instant`]: everything as soon as the unit starts
//!
//! Every mode reveals nothing before the unit starts and the full text once
//! `elapsed >= duration`, so the total duration of a unit never depends on the pacing.

use serde::{Deserialize, Serialize};

use crate::Frame;
use crate::text::char_len;

/// Pacing used to reveal a typed unit's characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RevealMode {
    /// Per-character weights give uneven, human-like typing.
    #[default]
    Weighted,
    /// Uniform characters-per-frame.
    Linear,
    /// The full text appears at the unit's start frame.
    Instant,
}

impl RevealMode {
    /// Number of characters of `text` visible `elapsed` frames into a unit lasting `duration`.
    pub fn char_count(self, elapsed: Frame, duration: Frame, text: &str) -> usize {
        match self {
            Self::Weighted => typed_char_count(elapsed, duration, text),
            Self::Linear => linear_char_count(elapsed, duration, char_len(text)),
            Self::Instant => {
                if elapsed >= 0 {
                    char_len(text)
                } else {
                    0
                }
            }
        }
    }
}

const SENTENCE_END: [char; 4] = ['.', '!', '?', ';'];

/// Per-character reveal weights; a higher weight means more time spent on that character.
///
/// Weights are a pure function of the text: the same string always produces the same weights,
/// which keeps seeking and re-rendering reproducible.
pub fn char_weights(text: &str) -> Vec<f64> {
    let mut weights = Vec::with_capacity(text.len());
    let mut prev: Option<char> = None;

    for (i, ch) in text.chars().enumerate() {
        let mut weight = if ch == '\n' {
            0.5
        } else {
            match prev {
                // The first keystroke carries the same hesitation as a new sentence.
                None => 3.0,
                Some(p) if SENTENCE_END.contains(&p) => 3.0,
                Some(' ') => 1.4,
                Some('\n') => 2.0,
                Some(_) => 1.0,
            }
        };

        let hash = ((i as u64 * 7 + u64::from(ch) * 13) % 100) as f64 / 100.0;
        weight *= 0.7 + hash * 0.6;

        weights.push(weight);
        prev = Some(ch);
    }

    weights
}

/// Weighted reveal: characters visible `elapsed` frames into a `duration`-frame unit.
///
/// Progress is measured in cumulative weight. The result is the length of the longest prefix
/// whose cumulative weight does not exceed `(elapsed / duration) * total_weight`.
pub fn typed_char_count(elapsed: Frame, duration: Frame, text: &str) -> usize {
    if elapsed >= duration {
        return char_len(text);
    }
    if elapsed <= 0 || text.is_empty() {
        return 0;
    }

    let weights = char_weights(text);
    let total: f64 = weights.iter().sum();
    let target = (elapsed as f64 / duration as f64) * total;

    let mut cumulative = 0.0;
    for (i, weight) in weights.iter().enumerate() {
        cumulative += weight;
        if cumulative > target {
            return i;
        }
    }
    weights.len()
}

/// Linear reveal: `floor(clamp(elapsed / duration, 0, 1) * len)`.
pub fn linear_char_count(elapsed: Frame, duration: Frame, len: usize) -> usize {
    if elapsed >= duration {
        return len;
    }
    if elapsed <= 0 {
        return 0;
    }
    let progress = (elapsed as f64 / duration as f64).clamp(0.0, 1.0);
    ((progress * len as f64).floor() as usize).min(len)
}
