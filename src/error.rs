// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Error types for scale derivation and reverse lookup.

use thiserror::Error;

use crate::music::Letter;

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, ScaleError>;

/// Errors returned by the scale builder, matcher and resolver
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScaleError {
    /// Root is not a member of the circle of fifths
    #[error("root note {0} not in circle of fifths")]
    RootNotRecognized(String),

    /// Mode is not in the mode table
    #[error("mode {0} is not a supported mode")]
    ModeNotSupported(String),

    /// Supplied notes cannot define a seven-note scale
    #[error("{notes:?} is not a valid set of scale notes: {reason}")]
    InvalidNoteSet {
        notes: Vec<String>,
        reason: NoteSetProblem,
    },

    /// The tone table has no spelling of a pitch class for the required letter
    #[error("no spelling of pitch class {pitch_class} uses the letter {letter}")]
    InternalSpellingGap { pitch_class: u8, letter: Letter },
}

/// Why a note set was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NoteSetProblem {
    #[error("note {0:?} does not start with a letter A-G")]
    UnknownLetter(String),

    #[error("expected 7 distinct notes, got {0}")]
    WrongCount(usize),

    #[error("letter {0} is used more than once")]
    DuplicateLetter(Letter),
}

impl ScaleError {
    /// Build an `InvalidNoteSet` error from the caller's notes
    pub(crate) fn invalid_notes<S: AsRef<str>>(notes: &[S], reason: NoteSetProblem) -> Self {
        ScaleError::InvalidNoteSet {
            notes: notes.iter().map(|n| n.as_ref().to_string()).collect(),
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ScaleError::RootNotRecognized("H".to_string());
        assert_eq!(err.to_string(), "root note H not in circle of fifths");

        let err = ScaleError::ModeNotSupported("Blues".to_string());
        assert_eq!(err.to_string(), "mode Blues is not a supported mode");

        let err = ScaleError::invalid_notes(&["C", "D"], NoteSetProblem::WrongCount(2));
        assert_eq!(
            err.to_string(),
            r#"["C", "D"] is not a valid set of scale notes: expected 7 distinct notes, got 2"#
        );
    }

    #[test]
    fn test_spelling_gap_message() {
        let err = ScaleError::InternalSpellingGap {
            pitch_class: 1,
            letter: Letter::B,
        };
        assert_eq!(err.to_string(), "no spelling of pitch class 1 uses the letter B");
    }
}
