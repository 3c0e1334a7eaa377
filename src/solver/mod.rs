//! Resource-bounded blind search over cube states.
//!
//! Two engines share one contract: a search is a resumable state machine
//! that the caller drives through [`Search::advance`] in bounded slices.
//! Control returns to the caller after every slice (`Suspended`) until the
//! engine settles on a [`SolveOutcome`] (`Done`). Running out of budget is
//! an outcome, never an error; errors are reserved for configuration
//! mistakes caught before any work starts.
//!
//! The [`Solver`] orchestrator owns the policy table, enforces the
//! one-search-at-a-time rule, and forwards progress to an observer
//! callback that can cancel between slices.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::moves::{generate_legal_moves, Move};
use crate::policy::PolicyTable;
use crate::state::CubeState;

pub mod bfs;
pub mod ida;
pub mod seen;

pub use bfs::BfsSearch;
pub use ida::IdaSearch;
pub use seen::{SeenMap, SeenSet, SeenStats};

/// Which engine a policy selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Bfs,
    Ida,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Ida => "ida*",
        })
    }
}

/// Hard resource caps for one search. Every field is enforced
/// independently and every search must carry one; there is no unbounded
/// mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchBudget {
    /// Deepest path length considered.
    pub max_depth: u32,
    /// Expansion cap; per threshold iteration for IDA*.
    pub max_nodes: u64,
    /// Wall-clock cap; per threshold iteration for IDA*.
    pub max_millis: Option<u64>,
    /// Highest IDA* threshold attempted. Ignored by BFS.
    pub threshold_max: u32,
}

/// Which budget a search ran out of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetKind {
    Nodes,
    Time,
    Depth,
}

/// Terminal result of one search.
///
/// `Exhausted(Depth)` and `NotFound` differ in what they prove: `Depth`
/// means the depth or threshold cap pruned reachable work, so deeper
/// solutions may exist; `NotFound` means the reachable space within the
/// caps was fully enumerated and contains no solution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SolveOutcome {
    Solved(Vec<Move>),
    Exhausted(BudgetKind),
    NotFound,
    Cancelled,
}

impl SolveOutcome {
    #[inline]
    pub fn is_solved(&self) -> bool {
        matches!(self, SolveOutcome::Solved(_))
    }
}

/// What one call to [`Search::advance`] produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchStep {
    /// Slice consumed; call `advance` again to continue.
    Suspended,
    /// Search finished; further `advance` calls repeat this outcome.
    Done(SolveOutcome),
}

/// Observer verdict after each progress report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchSignal {
    Continue,
    Stop,
}

/// Diagnostics populated on every outcome, success or not.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchStats {
    pub nodes_expanded: u64,
    /// Deepest path length reached.
    pub max_depth: u32,
    /// Final IDA* threshold; `None` for BFS.
    pub last_threshold: Option<u32>,
    /// Revisits suppressed by the seen set/map.
    pub dedup_hits: u64,
    /// Frontier (BFS) or stack (IDA*) high-water mark.
    pub peak_frontier: usize,
    /// Threshold iterations run; always 1 for BFS.
    pub iterations: u32,
    pub elapsed_millis: u64,
}

/// Point-in-time view handed to progress observers between slices.
#[derive(Debug, Clone, Serialize)]
pub struct SearchProgress {
    pub algorithm: Algorithm,
    pub nodes_expanded: u64,
    /// Deepest path length reached so far.
    pub depth: u32,
    /// Current threshold; `None` for BFS.
    pub threshold: Option<u32>,
    /// Current frontier or stack size.
    pub frontier_len: usize,
    pub elapsed_millis: u64,
}

impl fmt::Display for SearchProgress {
    #[allow(clippy::cast_precision_loss)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.algorithm)?;
        if let Some(t) = self.threshold {
            write!(f, "threshold {t}, ")?;
        }
        write!(
            f,
            "depth {}, {} nodes, queue {}, {:.1}s",
            self.depth,
            self.nodes_expanded,
            self.frontier_len,
            self.elapsed_millis as f64 / 1000.0
        )
    }
}

/// A resumable search engine.
///
/// `advance` runs at most `max_expansions` node expansions and returns.
/// Engines are inert between calls; dropping one abandons the search with
/// no cleanup needed. After `Done`, `advance` is idempotent.
pub trait Search {
    fn advance(&mut self, max_expansions: u64) -> SearchStep;
    fn progress(&self) -> SearchProgress;
    fn stats(&self) -> SearchStats;
}

/// Policy-driven orchestrator enforcing the one-search-at-a-time rule.
pub struct Solver {
    policies: PolicyTable,
    busy: AtomicBool,
}

impl Default for Solver {
    fn default() -> Self {
        Self::new(PolicyTable::builtin())
    }
}

impl Solver {
    pub fn new(policies: PolicyTable) -> Self {
        Self {
            policies,
            busy: AtomicBool::new(false),
        }
    }

    #[inline]
    pub fn policies(&self) -> &PolicyTable {
        &self.policies
    }

    /// Solves with no observer; runs until the engine settles.
    pub fn solve(&self, state: &CubeState) -> Result<SolveReport, Error> {
        self.solve_with(state, |_| SearchSignal::Continue)
    }

    /// Solves `state` under its policy, reporting progress between slices.
    ///
    /// The observer runs on the calling thread after every
    /// `progress_every` expansions; returning [`SearchSignal::Stop`] ends
    /// the search at that suspension point with
    /// [`SolveOutcome::Cancelled`]. The authoritative `state` is only read;
    /// all search mutation happens on private clones.
    pub fn solve_with<F>(&self, state: &CubeState, mut observer: F) -> Result<SolveReport, Error>
    where
        F: FnMut(&SearchProgress) -> SearchSignal,
    {
        let _flight = self.begin_flight()?;
        let policy = *self
            .policies
            .get(state.order(), state.variant())
            .ok_or(Error::NoPolicy {
                order: state.order(),
                variant: state.variant(),
            })?;
        if state.is_solved() {
            return Ok(SolveReport {
                algorithm: policy.algorithm,
                outcome: SolveOutcome::Solved(Vec::new()),
                stats: SearchStats::default(),
            });
        }

        let moves = generate_legal_moves(state.order());
        let mut engine: Box<dyn Search> = match policy.algorithm {
            Algorithm::Bfs => Box::new(BfsSearch::new(state, moves, policy.budget)),
            Algorithm::Ida => Box::new(IdaSearch::new(state, moves, policy.budget)),
        };
        let slice = policy.progress_every.max(1);
        loop {
            match engine.advance(slice) {
                SearchStep::Done(outcome) => {
                    return Ok(SolveReport {
                        algorithm: policy.algorithm,
                        outcome,
                        stats: engine.stats(),
                    });
                }
                SearchStep::Suspended => {
                    if observer(&engine.progress()) == SearchSignal::Stop {
                        return Ok(SolveReport {
                            algorithm: policy.algorithm,
                            outcome: SolveOutcome::Cancelled,
                            stats: engine.stats(),
                        });
                    }
                }
            }
        }
    }

    fn begin_flight(&self) -> Result<FlightGuard<'_>, Error> {
        if self
            .busy
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            return Err(Error::SearchInFlight);
        }
        Ok(FlightGuard(&self.busy))
    }
}

/// Clears the in-flight flag on every exit path, including early `?`.
struct FlightGuard<'a>(&'a AtomicBool);

impl Drop for FlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Final report: which engine ran, how it ended, what it cost.
#[derive(Debug, Clone, Serialize)]
pub struct SolveReport {
    pub algorithm: Algorithm,
    pub outcome: SolveOutcome,
    pub stats: SearchStats,
}

/// Wall-clock milliseconds since `started`, saturating.
pub(crate) fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
