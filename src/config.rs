use std::path::Path;

use crate::error::PuzzleError;

/// Solver configuration loaded from TOML.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct SolverConfig {
    /// Side length of generated puzzles.
    #[serde(default = "default_size")]
    pub size: usize,

    /// Seed for puzzle generation. Unset means a fresh random seed.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Generate by a random walk of this many moves instead of a full shuffle.
    #[serde(default)]
    pub shuffle_moves: Option<usize>,

    /// Expansions between progress log lines.
    #[serde(default = "default_progress_interval")]
    pub progress_interval: u64,
}

fn default_size() -> usize {
    3
}
fn default_progress_interval() -> u64 {
    50_000
}

impl SolverConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, PuzzleError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, PuzzleError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Reject a zero size; warn about settings that make generated puzzles awkward.
    pub fn validate(&self) -> Result<(), PuzzleError> {
        if self.size == 0 {
            return Err(PuzzleError::InvalidConfig("size must be at least 1".into()));
        }
        if self.size < 2 {
            tracing::warn!(size = self.size, "puzzle size below 2 has no legal moves");
        }
        if self.size > 4 && self.shuffle_moves.is_none() {
            tracing::warn!(
                size = self.size,
                "fully shuffled puzzles above 4x4 may take a very long time to solve"
            );
        }
        Ok(())
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
            seed: None,
            shuffle_moves: None,
            progress_interval: default_progress_interval(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let cfg = SolverConfig::default();
        assert_eq!(cfg.size, 3);
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.shuffle_moves, None);
        assert_eq!(cfg.progress_interval, 50_000);
    }

    #[test]
    fn test_partial_toml_override() {
        let cfg = SolverConfig::from_toml_str("size = 4\nseed = 7").unwrap();
        assert_eq!(cfg.size, 4);
        assert_eq!(cfg.seed, Some(7));
        // Defaults for unspecified fields
        assert_eq!(cfg.progress_interval, 50_000);
        assert_eq!(cfg.shuffle_moves, None);
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(SolverConfig::from_toml_str("").unwrap(), SolverConfig::default());
    }

    #[test]
    fn test_bad_toml_is_config_error() {
        let err = SolverConfig::from_toml_str("size = \"big\"").unwrap_err();
        assert!(matches!(err, PuzzleError::Config(_)));
    }

    #[test]
    fn test_zero_size_rejected() {
        let cfg = SolverConfig::from_toml_str("size = 0").unwrap();
        assert!(matches!(cfg.validate(), Err(PuzzleError::InvalidConfig(_))));
    }

    #[test]
    fn test_small_and_large_sizes_validate() {
        // Warnings only; neither is an error.
        for size in [1, 6] {
            let cfg = SolverConfig {
                size,
                ..Default::default()
            };
            assert!(cfg.validate().is_ok());
        }
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = SolverConfig::load(Path::new("/nonexistent/slider.toml")).unwrap_err();
        assert!(matches!(err, PuzzleError::Io(_)));
    }
}
