// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Reverse resolver.
//!
//! Tests a note set against every root in the circle of fifths and
//! every mode in the mode table. Candidates are split across a bounded
//! pool of scoped worker threads; matches are handed back over a
//! channel and sorted once all workers have finished, so output order
//! never depends on scheduling.

use std::num::NonZeroUsize;
use std::sync::mpsc;
use std::thread;

use tracing::{debug, info, warn};

use super::matcher::NoteSet;
use crate::error::Result;
use crate::music::{circle_of_fifths, modes, Mode, Scale};

type Candidate = (&'static str, &'static Mode);

/// Every (root, mode) combination
fn candidates() -> Vec<Candidate> {
    circle_of_fifths()
        .iter()
        .flat_map(|&root| modes().iter().map(move |mode| (root, mode)))
        .collect()
}

/// Name of the scale if the notes match it
fn check(notes: &NoteSet, (root, mode): Candidate) -> Result<Option<String>> {
    let scale = Scale::build(root, mode)?;
    Ok(notes.matches_scale(&scale).then(|| scale.to_string()))
}

/// Searches all root/mode combinations for scales matching a note set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolver {
    workers: usize,
}

impl Resolver {
    /// Create a resolver with the given number of worker threads (minimum 1)
    pub fn new(workers: usize) -> Self {
        Self {
            workers: workers.max(1),
        }
    }

    /// A resolver that checks every candidate on the calling thread
    pub fn sequential() -> Self {
        Self::new(1)
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Validate the notes, then resolve them
    pub fn resolve_notes<S: AsRef<str>>(&self, notes: &[S]) -> Result<Vec<String>> {
        let set = NoteSet::new(notes)?;
        Ok(self.resolve(&set))
    }

    /// All "<root> <mode>" names whose scale is covered by the notes, sorted
    pub fn resolve(&self, notes: &NoteSet) -> Vec<String> {
        let candidates = candidates();
        let found = self.search(&candidates, |candidate| check(notes, candidate));

        info!(
            notes = ?notes.notes(),
            candidates = candidates.len(),
            workers = self.workers,
            matches = found.len(),
            "resolved note set"
        );
        found
    }

    /// Run `check` over every candidate and return the sorted names it found
    fn search<F>(&self, candidates: &[Candidate], check: F) -> Vec<String>
    where
        F: Fn(Candidate) -> Result<Option<String>> + Sync,
    {
        let mut found = if self.workers == 1 {
            search_sequential(candidates, &check)
        } else {
            self.search_parallel(candidates, &check)
        };
        found.sort();
        found
    }

    fn search_parallel<F>(&self, candidates: &[Candidate], check: &F) -> Vec<String>
    where
        F: Fn(Candidate) -> Result<Option<String>> + Sync,
    {
        let chunk_size = candidates.len().div_ceil(self.workers).max(1);
        let (tx, rx) = mpsc::channel::<String>();

        thread::scope(|s| {
            let handles: Vec<_> = candidates
                .chunks(chunk_size)
                .map(|chunk| {
                    let tx = tx.clone();
                    s.spawn(move || {
                        for &candidate in chunk {
                            if let Some(name) = check_or_skip(check, candidate) {
                                // Receiver outlives every worker
                                let _ = tx.send(name);
                            }
                        }
                    })
                })
                .collect();
            drop(tx);

            debug!(workers = handles.len(), chunk_size, "spawned resolver workers");

            // Ends once every worker has dropped its sender
            let found: Vec<String> = rx.iter().collect();

            for handle in handles {
                if handle.join().is_err() {
                    warn!("resolver worker panicked; its candidates were skipped");
                }
            }
            found
        })
    }
}

impl Default for Resolver {
    /// One worker per available core
    fn default() -> Self {
        let workers = thread::available_parallelism()
            .map(NonZeroUsize::get)
            .unwrap_or(1);
        Self::new(workers)
    }
}

fn search_sequential<F>(candidates: &[Candidate], check: &F) -> Vec<String>
where
    F: Fn(Candidate) -> Result<Option<String>>,
{
    candidates
        .iter()
        .filter_map(|&candidate| check_or_skip(check, candidate))
        .collect()
}

/// A failed candidate contributes no result
fn check_or_skip<F>(check: &F, candidate: Candidate) -> Option<String>
where
    F: Fn(Candidate) -> Result<Option<String>>,
{
    match check(candidate) {
        Ok(found) => found,
        Err(e) => {
            let (root, mode) = candidate;
            warn!(root, mode = mode.name(), error = %e, "skipping candidate");
            None
        }
    }
}
