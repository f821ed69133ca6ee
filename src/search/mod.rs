// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Reverse lookup: which scales could a set of notes represent.

pub mod matcher;
pub mod resolver;

pub use matcher::{dedupe_notes, matches, NoteSet};
pub use resolver::Resolver;
