//! Candidate module - target words and their random selection

mod pool;
mod report;
mod seeds;

pub use pool::{CandidatePool, InsertOutcome};
pub use report::BuildReport;
pub use seeds::{DEFAULT_SEEDS, collect_seeds, read_seed_file};
