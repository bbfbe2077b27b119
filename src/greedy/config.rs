//! Greedy driver configuration.

use crate::steiner::Strategy;

/// Configuration for [`GreedyRunner`](super::GreedyRunner).
///
/// # Examples
///
/// ```
/// use u_steiner::greedy::GreedyConfig;
/// use u_steiner::steiner::Strategy;
///
/// let config = GreedyConfig::default()
///     .with_max_iterations(5)
///     .with_strategy(Strategy::MaxEdge);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct GreedyConfig {
    /// Iteration budget `L`.
    pub max_iterations: usize,
    /// The single strategy applied to every obtuse triangle.
    pub strategy: Strategy,
}

impl Default for GreedyConfig {
    fn default() -> Self {
        Self {
            max_iterations: 10,
            strategy: Strategy::Projection,
        }
    }
}

impl GreedyConfig {
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_iterations == 0 {
            return Err("max_iterations must be at least 1".into());
        }
        Ok(())
    }
}
