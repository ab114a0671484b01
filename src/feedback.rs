//! Per-cell coloring of a submitted guess against the round's target.
//!
//! Pure functions only: coloring is recomputed for every render and never
//! stored back into guess history.

use crate::wordbank::WORD_LENGTH;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellFeedback {
    /// Right letter in the right position.
    Correct,
    /// Letter occurs somewhere else in the target.
    Present,
    /// Letter does not occur in the target.
    Absent,
}

impl CellFeedback {
    /// One-character form used by the plain line interface.
    #[must_use]
    pub fn to_char(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => 'X',
        }
    }
}

/// Classifies each letter of `guess` against `target`.
///
/// A letter that misses its position is `Present` whenever the target
/// contains it anywhere; repeated guess letters each get `Present` even when
/// the target holds only one copy. Per-letter counts are intentionally not
/// tracked.
#[must_use]
pub fn color_guess(guess: &str, target: &str) -> Vec<CellFeedback> {
    let target_chars: Vec<char> = target.chars().collect();
    guess
        .chars()
        .take(WORD_LENGTH)
        .enumerate()
        .map(|(i, c)| {
            if target_chars.get(i) == Some(&c) {
                CellFeedback::Correct
            } else if target_chars.contains(&c) {
                CellFeedback::Present
            } else {
                CellFeedback::Absent
            }
        })
        .collect()
}
