// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Scale builder.
//!
//! Walks the tone table from a root using a mode's step pattern and
//! spells each degree with the next letter, so every scale uses each
//! of the letters A-G exactly once.

use std::fmt;

use tracing::debug;

use super::mode::{self, Mode};
use super::tone::{self, Letter};
use crate::error::{Result, ScaleError};

/// A scale derived from a root and a mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scale {
    root: &'static str,
    mode: &'static Mode,
    notes: [&'static str; 7],
}

impl Scale {
    /// Build the scale for a root and mode name (e.g., "C", "Major")
    pub fn new(root: &str, mode: &str) -> Result<Self> {
        let root = tone::root(root)?;
        let mode = mode::lookup(mode)?;
        Self::build(root, mode)
    }

    /// Build from an already validated root and mode
    pub(crate) fn build(root: &'static str, mode: &'static Mode) -> Result<Self> {
        let start = tone::pitch_class_of(root)
            .ok_or_else(|| ScaleError::RootNotRecognized(root.to_string()))?;
        let first = Letter::of(root).ok_or_else(|| ScaleError::RootNotRecognized(root.to_string()))?;

        let mut notes = [root; 7];
        for ((note, letter), offset) in notes
            .iter_mut()
            .zip(first.rotation())
            .zip(mode.intervals())
        {
            *note = tone::spelling_for(start.transpose(offset), letter)?;
        }

        debug!(root, mode = mode.name(), ?notes, "built scale");
        Ok(Self { root, mode, notes })
    }

    /// Get the root note
    pub fn root(&self) -> &'static str {
        self.root
    }

    /// Get the mode
    pub fn mode(&self) -> &'static Mode {
        self.mode
    }

    /// The seven scale degrees, root first
    pub fn degrees(&self) -> &[&'static str] {
        &self.notes
    }

    /// The seven degrees followed by the root again as the octave
    pub fn with_octave(&self) -> Vec<&'static str> {
        let mut notes = self.notes.to_vec();
        notes.push(self.root);
        notes
    }

    /// Number of distinct degrees (always 7)
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Check if a note spelling is in this scale
    pub fn contains(&self, note: &str) -> bool {
        self.notes.contains(&note)
    }

    /// Get the scale degree (1-based) for a note, if it's in the scale
    pub fn degree_of(&self, note: &str) -> Option<usize> {
        self.notes.iter().position(|&n| n == note).map(|i| i + 1)
    }

    /// Get the note at a given scale degree (1-based)
    pub fn note_at_degree(&self, degree: usize) -> Option<&'static str> {
        if degree == 0 || degree > self.len() {
            return None;
        }
        Some(self.notes[degree - 1])
    }

    /// Human-readable sentence naming the scale and listing its notes
    pub fn describe(&self, include_octave: bool) -> String {
        let notes = if include_octave {
            self.with_octave()
        } else {
            self.notes.to_vec()
        };
        format!(
            "I am {} {} scale and my notes are {}",
            article_for(self.root),
            self,
            notes.join(", ")
        )
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.root, self.mode)
    }
}

/// Indefinite article for a scale named after this root
pub fn article_for(root: &str) -> &'static str {
    match Letter::of(root) {
        Some(Letter::A) | Some(Letter::E) => "an",
        _ => "a",
    }
}
