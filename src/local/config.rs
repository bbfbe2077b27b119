//! Local search configuration.

use crate::search::Method;
use crate::steiner::Strategy;

/// Configuration for [`LocalSearchRunner`](super::LocalSearchRunner).
///
/// # Examples
///
/// ```
/// use u_steiner::local::LocalSearchConfig;
/// use u_steiner::steiner::Strategy;
///
/// let config = LocalSearchConfig::default()
///     .with_max_iterations(1)
///     .with_strategies(vec![Strategy::MaxEdge, Strategy::Projection]);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct LocalSearchConfig {
    /// Iteration budget `L`.
    pub max_iterations: usize,

    /// Strategies evaluated for every obtuse triangle.
    pub strategies: Vec<Strategy>,

    /// Evaluate trials on rayon. Only honored with the `parallel` feature.
    pub parallel: bool,
}

impl Default for LocalSearchConfig {
    fn default() -> Self {
        Self {
            max_iterations: 10,
            strategies: Method::Local.default_strategies(),
            parallel: false,
        }
    }
}

impl LocalSearchConfig {
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_strategies(mut self, strategies: Vec<Strategy>) -> Self {
        self.strategies = strategies;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_iterations == 0 {
            return Err("max_iterations must be at least 1".into());
        }
        if self.strategies.is_empty() {
            return Err("at least one strategy is required".into());
        }
        Ok(())
    }
}
