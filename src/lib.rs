// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Musical scale derivation and reverse lookup.
//!
//! Given a root and a mode, [`derive_scale`] spells the seven notes of
//! the scale. Given seven notes, [`identify_scales`] lists every
//! "<root> <mode>" whose scale they cover.

pub mod config;
pub mod error;
pub mod music;
pub mod search;

pub use config::Settings;
pub use error::{NoteSetProblem, Result, ScaleError};
pub use music::{circle_of_fifths, modes, Letter, Mode, PitchClass, Scale, Step};
pub use search::{NoteSet, Resolver};

/// Derive the scale for a root and mode name
pub fn derive_scale(root: &str, mode: &str) -> Result<Scale> {
    Scale::new(root, mode)
}

/// Find every scale the notes could represent, sorted by name
pub fn identify_scales<S: AsRef<str>>(notes: &[S]) -> Result<Vec<String>> {
    Resolver::default().resolve_notes(notes)
}
