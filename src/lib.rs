#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)] // may be revisited
#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)] // noisy for this API

pub mod types;
pub mod piece;
pub mod state;
pub mod moves;
pub mod encode;
pub mod error;
pub mod scramble;
pub mod policy;

pub mod engine {
    pub mod apply;
    pub mod heuristic;
}

pub mod solver;

// Re-exports: stable minimal API surface for external callers
pub use crate::encode::{encode, StateKey};
pub use crate::engine::apply::{apply_all, apply_move};
pub use crate::engine::heuristic::heuristic;
pub use crate::error::Error;
pub use crate::moves::{filter_moves, generate_legal_moves, Move};
pub use crate::piece::Piece;
pub use crate::policy::{PolicyEntry, PolicyTable, SolvePolicy};
pub use crate::scramble::{scramble_moves, scramble_state};
pub use crate::solver::{
    Algorithm, BudgetKind, Search, SearchBudget, SearchProgress, SearchSignal, SearchStats,
    SearchStep, SolveOutcome, SolveReport, Solver,
};
pub use crate::state::{CubeState, PieceView};
pub use crate::types::{solved_color, Axis, Color, Face, Spin, Variant, MAX_ORDER, MIN_ORDER};
