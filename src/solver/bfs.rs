//! Breadth-first search engine.

use std::collections::VecDeque;
use std::time::Instant;

use crate::engine::apply::apply_move_unchecked;
use crate::moves::Move;
use crate::state::CubeState;

use super::seen::SeenSet;
use super::{
    elapsed_ms, Algorithm, BudgetKind, Search, SearchBudget, SearchProgress, SearchStats,
    SearchStep, SolveOutcome,
};

struct Node {
    state: CubeState,
    path: Vec<Move>,
}

/// Breadth-first search with a global visited set.
///
/// Visits states in non-decreasing depth, so the first solution returned
/// is shortest among the paths the inverse-of-last filter admits. Memory
/// grows with the frontier; the node budget is the practical cap.
pub struct BfsSearch {
    moves: Vec<Move>,
    budget: SearchBudget,
    frontier: VecDeque<Node>,
    seen: SeenSet,
    stats: SearchStats,
    started: Instant,
    depth_pruned: bool,
    done: Option<SolveOutcome>,
}

impl BfsSearch {
    /// Engine rooted at `start`, expanding exactly the given move set.
    /// Callers normally pass `generate_legal_moves(start.order())`; a
    /// restricted set carves the reachable space down, which is how tests
    /// exercise the `NotFound` outcome.
    pub fn new(start: &CubeState, moves: Vec<Move>, budget: SearchBudget) -> Self {
        let mut seen = SeenSet::default();
        seen.insert(start.key());
        let mut frontier = VecDeque::new();
        frontier.push_back(Node {
            state: start.clone(),
            path: Vec::new(),
        });
        Self {
            moves,
            budget,
            frontier,
            seen,
            stats: SearchStats {
                peak_frontier: 1,
                iterations: 1,
                ..SearchStats::default()
            },
            started: Instant::now(),
            depth_pruned: false,
            done: None,
        }
    }

    fn finish(&mut self, outcome: SolveOutcome) -> SearchStep {
        self.done = Some(outcome.clone());
        SearchStep::Done(outcome)
    }

    fn over_time(&self) -> bool {
        self.budget
            .max_millis
            .is_some_and(|cap| elapsed_ms(self.started) >= cap)
    }
}

impl Search for BfsSearch {
    fn advance(&mut self, max_expansions: u64) -> SearchStep {
        if let Some(done) = &self.done {
            return SearchStep::Done(done.clone());
        }
        for _ in 0..max_expansions {
            if self.over_time() {
                return self.finish(SolveOutcome::Exhausted(BudgetKind::Time));
            }
            let Some(node) = self.frontier.pop_front() else {
                // Frontier drained. If the depth cap ever cut work off, a
                // deeper solution may exist; otherwise the reachable space
                // is fully enumerated.
                let outcome = if self.depth_pruned {
                    SolveOutcome::Exhausted(BudgetKind::Depth)
                } else {
                    SolveOutcome::NotFound
                };
                return self.finish(outcome);
            };
            if self.stats.nodes_expanded >= self.budget.max_nodes {
                self.frontier.push_front(node);
                return self.finish(SolveOutcome::Exhausted(BudgetKind::Nodes));
            }
            self.stats.nodes_expanded += 1;
            let depth = u32::try_from(node.path.len()).unwrap_or(u32::MAX);
            if depth > self.stats.max_depth {
                self.stats.max_depth = depth;
            }
            if node.state.is_solved() {
                return self.finish(SolveOutcome::Solved(node.path));
            }
            if depth >= self.budget.max_depth {
                self.depth_pruned = true;
                continue;
            }
            let last = node.path.last().copied();
            for mv in &self.moves {
                if last.is_some_and(|prev| mv.is_inverse_of(prev)) {
                    continue;
                }
                let mut child = node.state.clone();
                apply_move_unchecked(&mut child, *mv);
                if self.seen.insert(child.key()) {
                    let mut path = node.path.clone();
                    path.push(*mv);
                    self.frontier.push_back(Node { state: child, path });
                }
            }
            if self.frontier.len() > self.stats.peak_frontier {
                self.stats.peak_frontier = self.frontier.len();
            }
        }
        SearchStep::Suspended
    }

    fn progress(&self) -> SearchProgress {
        SearchProgress {
            algorithm: Algorithm::Bfs,
            nodes_expanded: self.stats.nodes_expanded,
            depth: self.stats.max_depth,
            threshold: None,
            frontier_len: self.frontier.len(),
            elapsed_millis: elapsed_ms(self.started),
        }
    }

    fn stats(&self) -> SearchStats {
        let mut stats = self.stats.clone();
        stats.dedup_hits = self.seen.stats().hits;
        stats.elapsed_millis = elapsed_ms(self.started);
        stats
    }
}
