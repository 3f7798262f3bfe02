//! Algorithm enum for selecting how a generation is computed.
//!
//! Both variants walk only the live cells and their neighborhoods and
//! produce identical generations; they differ in how the work is spread.

use serde::{Deserialize, Serialize};

/// Available stepping strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Single pass over the live set with a shared visited set
    #[default]
    Sequential,
    /// Live set split across rayon workers, candidates deduplicated after
    Parallel,
}

impl Algorithm {
    /// Get all available algorithms
    pub fn all() -> Vec<Algorithm> {
        vec![Algorithm::Sequential, Algorithm::Parallel]
    }

    /// Display name for UI
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Sequential => "Sparse",
            Algorithm::Parallel => "Sparse+Par",
        }
    }

    /// The other strategy
    pub fn toggled(self) -> Self {
        match self {
            Algorithm::Sequential => Algorithm::Parallel,
            Algorithm::Parallel => Algorithm::Sequential,
        }
    }
}
