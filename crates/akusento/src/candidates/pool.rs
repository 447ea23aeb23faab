//! Candidate pool and random target selection.
//!
//! Candidates are grouped by mora count so a range query only touches the
//! buckets it needs. The pool is read-only once built and can be shared
//! across request handlers behind an `Arc`.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;
use std::sync::Arc;

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::candidates::report::BuildReport;
use crate::errors::{AnalyzerError, CandidateError};
use crate::models::WordAnalysis;

/// Result of offering one word to the pool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
  /// Stored
  Added,
  /// Mora count outside the pool range (or no pattern)
  OutOfRange,
  /// A candidate with the same text already exists
  Duplicate,
}

/// On-disk form of a pool
#[derive(Serialize, Deserialize)]
struct Snapshot {
  min_mora: usize,
  max_mora: usize,
  candidates: Vec<WordAnalysis>,
}

/// Target words grouped by mora count
#[derive(Debug, Clone)]
pub struct CandidatePool {
  min_mora: usize,
  max_mora: usize,
  by_mora: BTreeMap<usize, Vec<WordAnalysis>>,
  texts: HashSet<String>,
}

impl CandidatePool {
  /// Empty pool accepting words of `min_mora..=max_mora` morae
  pub fn new(min_mora: usize, max_mora: usize) -> Self {
    Self {
      min_mora,
      max_mora,
      by_mora: BTreeMap::new(),
      texts: HashSet::new(),
    }
  }

  /// Builds a pool by analysing each seed with `analyze`.
  ///
  /// Seeds that fail to analyse are skipped and counted in the report.
  pub fn build<I, S, F>(
    seeds: I,
    min_mora: usize,
    max_mora: usize,
    mut analyze: F,
  ) -> (Self, BuildReport)
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    F: FnMut(&str) -> Result<WordAnalysis, AnalyzerError>,
  {
    let mut pool = Self::new(min_mora, max_mora);
    let mut report = BuildReport::default();

    for seed in seeds {
      let seed = seed.as_ref();
      report.record_total();

      match analyze(seed) {
        Ok(word) => match pool.insert(word) {
          InsertOutcome::Added => report.record_added(),
          InsertOutcome::OutOfRange => report.record_out_of_range(),
          InsertOutcome::Duplicate => report.record_duplicate(),
        },
        Err(e) => {
          debug!(seed = %seed, error = %e, "Skip seed");
          report.record_failed();
        }
      }
    }

    info!(
      total = report.total,
      added = report.added,
      out_of_range = report.skipped_out_of_range,
      duplicates = report.skipped_duplicates,
      failed = report.failed,
      "Candidate pool built"
    );

    (pool, report)
  }

  /// Offers one word to the pool
  pub fn insert(&mut self, word: WordAnalysis) -> InsertOutcome {
    let morae = word.mora_count();
    if !word.has_pattern() || morae < self.min_mora || morae > self.max_mora {
      return InsertOutcome::OutOfRange;
    }
    if !self.texts.insert(word.text.clone()) {
      return InsertOutcome::Duplicate;
    }

    self.by_mora.entry(morae).or_default().push(word);
    InsertOutcome::Added
  }

  /// Number of candidates
  pub fn len(&self) -> usize {
    self.texts.len()
  }

  /// Whether the pool is empty
  pub fn is_empty(&self) -> bool {
    self.texts.is_empty()
  }

  /// Inclusive mora range this pool accepts
  pub fn mora_range(&self) -> (usize, usize) {
    (self.min_mora, self.max_mora)
  }

  /// Number of candidates per mora count
  pub fn mora_histogram(&self) -> BTreeMap<usize, usize> {
    self.by_mora.iter().map(|(&morae, words)| (morae, words.len())).collect()
  }

  /// Picks a uniformly random candidate with `min_mora..=max_mora` morae.
  ///
  /// # Errors
  /// - `InvalidRange` if `min_mora > max_mora`
  /// - `NoCandidate` if nothing lies in the range
  pub fn pick<R: Rng + ?Sized>(
    &self,
    min_mora: usize,
    max_mora: usize,
    rng: &mut R,
  ) -> Result<&WordAnalysis, CandidateError> {
    if min_mora > max_mora {
      return Err(CandidateError::InvalidRange { min_mora, max_mora });
    }

    let in_range: Vec<&WordAnalysis> =
      self.by_mora.range(min_mora..=max_mora).flat_map(|(_, words)| words.iter()).collect();

    in_range.choose(rng).copied().ok_or(CandidateError::NoCandidate { min_mora, max_mora })
  }

  /// Writes the pool as a JSON snapshot
  ///
  /// # Errors
  /// If serialisation or the file write fails
  pub fn save_json(&self, path: &Path) -> Result<(), CandidateError> {
    let snapshot = Snapshot {
      min_mora: self.min_mora,
      max_mora: self.max_mora,
      candidates: self.by_mora.values().flatten().cloned().collect(),
    };

    let json = serde_json::to_string_pretty(&snapshot).map_err(|e| CandidateError::Snapshot {
      path: path.to_path_buf(),
      source: Arc::new(e),
    })?;

    std::fs::write(path, json).map_err(|e| CandidateError::Io {
      path: path.to_path_buf(),
      source: Arc::new(e),
    })?;

    info!(path = %path.display(), count = self.len(), "Candidate snapshot written");
    Ok(())
  }

  /// Loads a pool from a JSON snapshot, re-checking every entry
  ///
  /// # Errors
  /// If the file cannot be read or is not a snapshot
  pub fn load_json(path: &Path) -> Result<Self, CandidateError> {
    let content = std::fs::read_to_string(path).map_err(|e| CandidateError::Io {
      path: path.to_path_buf(),
      source: Arc::new(e),
    })?;

    let snapshot: Snapshot =
      serde_json::from_str(&content).map_err(|e| CandidateError::Snapshot {
        path: path.to_path_buf(),
        source: Arc::new(e),
      })?;

    let mut pool = Self::new(snapshot.min_mora, snapshot.max_mora);
    for word in snapshot.candidates {
      let text = word.text.clone();
      let morae = word.mora_count();
      match pool.insert(word) {
        InsertOutcome::Added => {}
        InsertOutcome::OutOfRange => {
          warn!(
            path = %path.display(),
            text = %text,
            morae,
            "Snapshot entry out of range, dropped"
          );
        }
        InsertOutcome::Duplicate => {
          warn!(path = %path.display(), text = %text, "Duplicate snapshot entry, dropped");
        }
      }
    }

    info!(path = %path.display(), count = pool.len(), "Candidate snapshot loaded");
    Ok(pool)
  }
}
