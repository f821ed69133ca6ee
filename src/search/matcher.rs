// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Scale matcher.
//!
//! Validates caller-supplied notes and tests them against a single
//! root/mode combination. Notes are compared by exact spelling, so
//! "C#" does not match "Db".

use std::collections::BTreeSet;

use tracing::debug;

use crate::error::{NoteSetProblem, Result, ScaleError};
use crate::music::{Letter, Scale};

/// Remove repeated notes (including octave repeats), sorted by spelling
pub fn dedupe_notes<S: AsRef<str>>(notes: &[S]) -> Vec<String> {
    notes
        .iter()
        .map(|n| n.as_ref().to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// A validated set of seven notes, one per letter A-G
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteSet {
    /// Sorted by letter, A first
    notes: Vec<String>,
}

impl NoteSet {
    /// Deduplicate and validate the given notes
    pub fn new<S: AsRef<str>>(notes: &[S]) -> Result<Self> {
        let deduped = dedupe_notes(notes);

        let mut seen = [false; 7];
        for note in &deduped {
            let letter = Letter::of(note).ok_or_else(|| {
                ScaleError::invalid_notes(notes, NoteSetProblem::UnknownLetter(note.clone()))
            })?;
            if seen[letter.index()] {
                return Err(ScaleError::invalid_notes(
                    notes,
                    NoteSetProblem::DuplicateLetter(letter),
                ));
            }
            seen[letter.index()] = true;
        }

        if deduped.len() != Letter::ALL.len() {
            return Err(ScaleError::invalid_notes(
                notes,
                NoteSetProblem::WrongCount(deduped.len()),
            ));
        }

        Ok(Self { notes: deduped })
    }

    /// Notes in letter order
    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Check for an exact spelling
    pub fn contains(&self, note: &str) -> bool {
        self.notes.iter().any(|n| n == note)
    }

    /// True if every degree of the scale is in this set
    pub fn matches_scale(&self, scale: &Scale) -> bool {
        scale.degrees().iter().all(|note| self.contains(note))
    }
}

/// Check whether the given notes form the scale of `root` and `mode`
pub fn matches<S: AsRef<str>>(notes: &[S], root: &str, mode: &str) -> Result<bool> {
    let set = NoteSet::new(notes)?;
    let scale = Scale::new(root, mode)?;
    let matched = set.matches_scale(&scale);
    debug!(scale = %scale, matched, "matched note set");
    Ok(matched)
}
