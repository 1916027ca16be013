//! Optimal N-puzzle solver built on A* with a Manhattan-distance heuristic.
//!
//! # Key types
//!
//! - [`Board`]: flat row-major tiles, `0` is the blank
//! - [`SearchEngine`]: the A* driver returning a [`SearchOutcome`]
//! - [`Frontier`] / [`VisitedSet`]: open and closed sets, fresh per search
//! - [`StateNode`] / [`NodeArena`]: search states linked to their parent by index
//! - [`SolveRequest`] / [`SolveResponse`]: the one-shot worker boundary

pub mod board;
pub mod config;
pub mod error;
pub mod frontier;
pub mod heuristic;
pub mod node;
pub mod search;
pub mod shuffle;
pub mod visited;
pub mod worker;

pub use board::{parse_board, Board, Move, Signature};
pub use config::SolverConfig;
pub use error::PuzzleError;
pub use frontier::Frontier;
pub use heuristic::{full_heuristic, incremental_heuristic, manhattan, GoalIndex};
pub use node::{generate_children, NodeArena, NodeId, StateNode};
pub use search::{SearchEngine, SearchOutcome, SearchStats, Solution};
pub use visited::VisitedSet;
pub use worker::{handle_message, spawn_solver, SolveRequest, SolveResponse, SolverHandle};
