/// Failures at the edges of the solver: reading input, loading config and
/// talking to a solver thread. Failing to find a path is not one of these.
#[derive(Debug, thiserror::Error)]
pub enum PuzzleError {
    /// A tile could not be read as a number.
    #[error("invalid tile {token:?} in row {row}")]
    Parse { row: usize, token: String },
    /// Row lengths do not match the number of rows.
    #[error("row {row} has {found} tiles, expected {expected}")]
    Ragged {
        row: usize,
        found: usize,
        expected: usize,
    },
    /// A config value the solver cannot work with.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    /// The solver thread ended without sending its response.
    #[error("solver worker exited without a response")]
    WorkerLost,
    #[error("message codec error: {0}")]
    Codec(#[from] serde_json::Error),
    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
