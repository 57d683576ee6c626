//! Solver configuration.

use super::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Default bound on fixed-point passes.
pub const DEFAULT_MAX_ITERATIONS: usize = 1000;

/// Tunables for a `Solver`.
///
/// # Example
///
/// ```rust
/// use reactive_semantics::solver::SolverConfig;
///
/// let config = SolverConfig::from_json_str(r#"{ "max_iterations": 50 }"#).unwrap();
/// assert_eq!(config.max_iterations, 50);
///
/// let config = SolverConfig::from_json_str("{}").unwrap();
/// assert_eq!(config, SolverConfig::default());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Passes run before giving up on convergence. Must be at least 1.
    pub max_iterations: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Set the iteration cap.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Reject configurations the solver cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_iterations == 0 {
            return Err(ConfigError::Invalid(
                "max_iterations must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}
