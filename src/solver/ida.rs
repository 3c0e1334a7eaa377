//! Iterative-deepening A* engine.

use std::time::Instant;

use crate::engine::apply::apply_move_unchecked;
use crate::engine::heuristic::heuristic;
use crate::moves::Move;
use crate::state::CubeState;

use super::seen::SeenMap;
use super::{
    elapsed_ms, Algorithm, BudgetKind, Search, SearchBudget, SearchProgress, SearchStats,
    SearchStep, SolveOutcome,
};

struct Frame {
    state: CubeState,
    g: u32,
    last: Option<Move>,
    next_move: usize,
}

/// Depth-first search under a growing `f = g + h` threshold.
///
/// Each iteration explores the subtree where `f` stays within the current
/// threshold; branches that overshoot contribute their `f` to the next
/// threshold (the minimum overshoot). Memory stays proportional to the
/// path, so the node and time budgets apply per iteration rather than
/// across the whole search. The transposition map is cleared at every
/// iteration boundary.
///
/// The heuristic is not a proven lower bound, so the first solution found
/// is not guaranteed globally shortest.
pub struct IdaSearch {
    start: CubeState,
    moves: Vec<Move>,
    budget: SearchBudget,
    threshold: u32,
    next_threshold: Option<u32>,
    stack: Vec<Frame>,
    path: Vec<Move>,
    seen: SeenMap,
    iter_nodes: u64,
    iter_started: Instant,
    stats: SearchStats,
    started: Instant,
    depth_pruned: bool,
    done: Option<SolveOutcome>,
}

impl IdaSearch {
    /// Engine rooted at `start`, expanding exactly the given move set.
    /// The first threshold is the start state's heuristic.
    pub fn new(start: &CubeState, moves: Vec<Move>, budget: SearchBudget) -> Self {
        let h0 = heuristic(start);
        let mut engine = Self {
            start: start.clone(),
            moves,
            budget,
            threshold: h0,
            next_threshold: None,
            stack: Vec::new(),
            path: Vec::new(),
            seen: SeenMap::default(),
            iter_nodes: 0,
            iter_started: Instant::now(),
            stats: SearchStats::default(),
            started: Instant::now(),
            depth_pruned: false,
            done: None,
        };
        if start.is_solved() {
            engine.done = Some(SolveOutcome::Solved(Vec::new()));
        } else if h0 > budget.threshold_max {
            engine.stats.last_threshold = Some(h0);
            engine.done = Some(SolveOutcome::Exhausted(BudgetKind::Depth));
        } else {
            engine.begin_iteration(h0);
        }
        engine
    }

    fn begin_iteration(&mut self, threshold: u32) {
        self.threshold = threshold;
        self.next_threshold = None;
        self.depth_pruned = false;
        self.seen.clear();
        self.seen.visit(self.start.key(), 0);
        self.stack.clear();
        self.stack.push(Frame {
            state: self.start.clone(),
            g: 0,
            last: None,
            next_move: 0,
        });
        self.path.clear();
        self.iter_nodes = 1;
        self.iter_started = Instant::now();
        self.stats.nodes_expanded += 1;
        self.stats.iterations += 1;
        self.stats.last_threshold = Some(threshold);
        if self.stats.peak_frontier == 0 {
            self.stats.peak_frontier = 1;
        }
    }

    fn finish(&mut self, outcome: SolveOutcome) -> SearchStep {
        self.done = Some(outcome.clone());
        SearchStep::Done(outcome)
    }

    fn over_time(&self) -> bool {
        self.budget
            .max_millis
            .is_some_and(|cap| elapsed_ms(self.iter_started) >= cap)
    }

    /// Ends the current iteration once its stack has drained.
    fn next_iteration(&mut self) -> Option<SearchStep> {
        match self.next_threshold {
            Some(t) if t > self.budget.threshold_max => {
                Some(self.finish(SolveOutcome::Exhausted(BudgetKind::Depth)))
            }
            Some(t) if t > self.threshold => {
                self.begin_iteration(t);
                None
            }
            // A candidate that fails to raise the threshold would loop
            // forever; treat the iteration as conclusive.
            Some(_) => Some(self.finish(SolveOutcome::NotFound)),
            None => {
                let outcome = if self.depth_pruned {
                    SolveOutcome::Exhausted(BudgetKind::Depth)
                } else {
                    SolveOutcome::NotFound
                };
                Some(self.finish(outcome))
            }
        }
    }
}

impl Search for IdaSearch {
    fn advance(&mut self, max_expansions: u64) -> SearchStep {
        if let Some(done) = &self.done {
            return SearchStep::Done(done.clone());
        }
        for _ in 0..max_expansions {
            if self.over_time() {
                return self.finish(SolveOutcome::Exhausted(BudgetKind::Time));
            }
            let Some(frame) = self.stack.last_mut() else {
                match self.next_iteration() {
                    Some(step) => return step,
                    None => continue,
                }
            };
            if frame.next_move >= self.moves.len() {
                self.stack.pop();
                self.path.pop();
                continue;
            }
            let mv = self.moves[frame.next_move];
            frame.next_move += 1;
            if frame.last.is_some_and(|prev| mv.is_inverse_of(prev)) {
                continue;
            }
            let g = frame.g + 1;
            let mut child = frame.state.clone();
            apply_move_unchecked(&mut child, mv);

            if child.is_solved() {
                let mut path = self.path.clone();
                path.push(mv);
                return self.finish(SolveOutcome::Solved(path));
            }
            let f = g + heuristic(&child);
            if f > self.threshold {
                self.next_threshold = Some(self.next_threshold.map_or(f, |t| t.min(f)));
                continue;
            }
            if g >= self.budget.max_depth {
                self.depth_pruned = true;
                continue;
            }
            if !self.seen.visit(child.key(), g) {
                continue;
            }
            if self.iter_nodes >= self.budget.max_nodes {
                return self.finish(SolveOutcome::Exhausted(BudgetKind::Nodes));
            }
            self.iter_nodes += 1;
            self.stats.nodes_expanded += 1;
            if g > self.stats.max_depth {
                self.stats.max_depth = g;
            }
            self.stack.push(Frame {
                state: child,
                g,
                last: Some(mv),
                next_move: 0,
            });
            self.path.push(mv);
            if self.stack.len() > self.stats.peak_frontier {
                self.stats.peak_frontier = self.stack.len();
            }
        }
        SearchStep::Suspended
    }

    fn progress(&self) -> SearchProgress {
        SearchProgress {
            algorithm: Algorithm::Ida,
            nodes_expanded: self.stats.nodes_expanded,
            depth: self.stats.max_depth,
            threshold: Some(self.threshold),
            frontier_len: self.stack.len(),
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
