//! One-shot request/response boundary around the search engine.
//!
//! A caller hands over a single [`SolveRequest`] (start and goal rows), the
//! search runs to completion on its own thread, and exactly one
//! [`SolveResponse`] comes back. There is no way to cancel a running search;
//! dropping the [`SolverHandle`] only detaches the thread.

use std::sync::mpsc;
use std::thread;

use serde::{Deserialize, Serialize};

use crate::board::{Board, Move};
use crate::error::PuzzleError;
use crate::search::{SearchEngine, SearchOutcome};

/// `[startBoard, goalBoard]`, each as nested rows. Serialises as a
/// two-element JSON array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveRequest(pub Vec<Vec<u16>>, pub Vec<Vec<u16>>);

impl SolveRequest {
    pub fn new(start: &Board, goal: &Board) -> Self {
        Self(start.rows(), goal.rows())
    }

    pub fn start(&self) -> Board {
        Board::from_rows(&self.0)
    }

    pub fn goal(&self) -> Board {
        Board::from_rows(&self.1)
    }

    pub fn from_json(text: &str) -> Result<Self, PuzzleError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json(&self) -> Result<String, PuzzleError> {
        Ok(serde_json::to_string(self)?)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SolveResponse {
    Solved {
        moves: u32,
        path: Vec<Move>,
        /// Every board from start to goal, as nested rows.
        boards: Vec<Vec<Vec<u16>>>,
    },
    NotFound,
}

impl SolveResponse {
    pub fn from_json(text: &str) -> Result<Self, PuzzleError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json(&self) -> Result<String, PuzzleError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl From<SearchOutcome> for SolveResponse {
    fn from(outcome: SearchOutcome) -> Self {
        match outcome {
            SearchOutcome::Solved(solution) => SolveResponse::Solved {
                moves: solution.moves,
                path: solution.path,
                boards: solution.boards.iter().map(Board::rows).collect(),
            },
            SearchOutcome::Exhausted(_) => SolveResponse::NotFound,
        }
    }
}

/// Answer one request on the current thread.
pub fn respond(engine: &SearchEngine, request: &SolveRequest) -> SolveResponse {
    engine.solve(&request.start(), &request.goal()).into()
}

/// Decode a JSON request, solve it and encode the response.
pub fn handle_message(engine: &SearchEngine, message: &str) -> Result<String, PuzzleError> {
    let request = SolveRequest::from_json(message)?;
    respond(engine, &request).to_json()
}

/// Receiving end of a solver thread.
#[derive(Debug)]
pub struct SolverHandle {
    rx: mpsc::Receiver<SolveResponse>,
    thread: thread::JoinHandle<()>,
}

impl SolverHandle {
    /// Block until the single response arrives.
    pub fn wait(self) -> Result<SolveResponse, PuzzleError> {
        let response = self.rx.recv().map_err(|_| PuzzleError::WorkerLost)?;
        if self.thread.join().is_err() {
            tracing::warn!("solver thread panicked after sending its response");
        }
        Ok(response)
    }
}

/// Run one search on a dedicated thread.
pub fn spawn_solver(
    engine: SearchEngine,
    request: SolveRequest,
) -> Result<SolverHandle, PuzzleError> {
    let (tx, rx) = mpsc::sync_channel(1);
    let thread = thread::Builder::new()
        .name("slider-solver".into())
        .spawn(move || {
            let _span = tracing::debug_span!("solver_worker").entered();
            let response = respond(&engine, &request);
            if tx.send(response).is_err() {
                tracing::debug!("caller dropped the solver handle before the response");
            }
        })?;
    Ok(SolverHandle { rx, thread })
}
