//! Per-cube solve policies.
//!
//! The orchestrator never guesses search parameters: every (order, variant)
//! pair it is willing to solve has a [`SolvePolicy`] giving the algorithm
//! and the full budget. [`PolicyTable::builtin`] covers the supported range
//! with conservative defaults; a JSON override file can replace or extend
//! entries without recompiling.

use std::fs;
use std::path::Path;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::solver::{Algorithm, SearchBudget};
use crate::types::{Variant, MAX_ORDER, MIN_ORDER};

/// How to attack one (order, variant): which engine, under what budget, and
/// how many expansions to run between progress reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolvePolicy {
    pub algorithm: Algorithm,
    pub budget: SearchBudget,
    pub progress_every: u64,
}

/// One row of a JSON override file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyEntry {
    pub order: u8,
    pub variant: Variant,
    #[serde(flatten)]
    pub policy: SolvePolicy,
}

/// Lookup table from (order, variant) to policy.
#[derive(Debug, Clone, Default)]
pub struct PolicyTable {
    entries: HashMap<(u8, Variant), SolvePolicy>,
}

impl PolicyTable {
    /// Empty table. Useful in tests that want full control.
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults for every supported (order, variant) pair.
    ///
    /// Order 2 gets breadth-first search: its state space is small enough
    /// that BFS inside a few million nodes returns genuinely shortest
    /// paths. Larger orders get IDA*, whose memory stays flat while the
    /// per-iteration node cap bounds runtime. Mirror variants share their
    /// normal twin's policy since move semantics are identical.
    pub fn builtin() -> Self {
        let mut table = Self::new();
        for order in MIN_ORDER..=MAX_ORDER {
            let policy = if order == 2 {
                SolvePolicy {
                    algorithm: Algorithm::Bfs,
                    budget: SearchBudget {
                        max_depth: 14,
                        max_nodes: 4_000_000,
                        max_millis: None,
                        threshold_max: 14,
                    },
                    progress_every: 4_096,
                }
            } else {
                SolvePolicy {
                    algorithm: Algorithm::Ida,
                    budget: SearchBudget {
                        max_depth: 24,
                        max_nodes: 2_000_000,
                        max_millis: Some(30_000),
                        threshold_max: 24,
                    },
                    progress_every: 8_192,
                }
            };
            table.insert(order, Variant::Normal, policy);
            table.insert(order, Variant::Mirror, policy);
        }
        table
    }

    #[inline]
    pub fn get(&self, order: u8, variant: Variant) -> Option<&SolvePolicy> {
        self.entries.get(&(order, variant))
    }

    pub fn insert(&mut self, order: u8, variant: Variant, policy: SolvePolicy) {
        self.entries.insert((order, variant), policy);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Merges a JSON override file (an array of [`PolicyEntry`] rows) into
    /// the table, replacing any existing entry for the same key.
    pub fn load_overrides<P: AsRef<Path>>(&mut self, path: P) -> Result<(), Error> {
        let text = fs::read_to_string(path)?;
        let rows: Vec<PolicyEntry> = serde_json::from_str(&text)?;
        for row in rows {
            self.insert(row.order, row.variant, row.policy);
        }
        Ok(())
    }
}
