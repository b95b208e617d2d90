//! Featured matches: configuration, auto-selection, and statistics.
//!
//! - [`settings`] -- the singleton settings record, defaults, partial updates.
//! - [`selector`] -- pure selection of the featured set and the flag diff.
//! - [`stats`] -- aggregation over the currently featured matches.

pub mod selector;
pub mod settings;
pub mod stats;

use serde::Serialize;

/// Number of match rows whose `is_featured` flag changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct UpdatedCount {
    pub updated: u64,
}

/// Outcome of an auto-select invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoSelectRun {
    /// Selection ran and the flag diff was applied.
    Applied(UpdatedCount),
    /// A scheduled run found `autoSelectEnabled = false` and did nothing.
    Skipped,
}
