//! SA configuration.

use crate::energy::EnergyModel;
use crate::search::Method;
use crate::steiner::Strategy;

/// Configuration for the Simulated Annealing driver.
///
/// The temperature falls linearly from 1 to 0 in `max_iterations` steps, so
/// a run executes at most `max_iterations + 1` iterations.
///
/// # Examples
///
/// ```
/// use u_steiner::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_max_iterations(20)
///     .with_weights(5.0, 1.0)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct SaConfig {
    /// Iteration budget `L`; also sets the cooling step `1 / L`.
    pub max_iterations: usize,

    /// Strategies drawn uniformly for each obtuse triangle.
    pub strategies: Vec<Strategy>,

    /// Energy weight of an obtuse triangle.
    pub alpha: f64,

    /// Energy weight of a Steiner point.
    pub beta: f64,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        let energy = EnergyModel::default();
        Self {
            max_iterations: 10,
            strategies: Method::Sa.default_strategies(),
            alpha: energy.alpha,
            beta: energy.beta,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_strategies(mut self, strategies: Vec<Strategy>) -> Self {
        self.strategies = strategies;
        self
    }

    pub fn with_weights(mut self, alpha: f64, beta: f64) -> Self {
        self.alpha = alpha;
        self.beta = beta;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn energy_model(&self) -> EnergyModel {
        EnergyModel::new(self.alpha, self.beta)
    }

    /// Temperature of the zero-based iteration `k`.
    pub fn temperature(&self, k: usize) -> f64 {
        let l = self.max_iterations;
        l.saturating_sub(k) as f64 / l as f64
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_iterations == 0 {
            return Err("max_iterations must be at least 1".into());
        }
        if self.strategies.is_empty() {
            return Err("at least one strategy is required".into());
        }
        for (name, weight) in [("alpha", self.alpha), ("beta", self.beta)] {
            if !weight.is_finite() || weight < 0.0 {
                return Err(format!("{name} must be finite and non-negative, got {weight}"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SaConfig::default();
        assert_eq!(config.max_iterations, 10);
        assert_eq!(config.strategies.len(), 4);
        assert!((config.alpha - 3.0).abs() < 1e-10);
        assert!((config.beta - 1.0).abs() < 1e-10);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_validate_ok() {
        assert!(SaConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_zero_iterations() {
        assert!(SaConfig::default().with_max_iterations(0).validate().is_err());
    }

    #[test]
    fn test_validate_bad_weights() {
        assert!(SaConfig::default().with_weights(-1.0, 1.0).validate().is_err());
        assert!(SaConfig::default().with_weights(1.0, f64::NAN).validate().is_err());
    }

    #[test]
    fn test_linear_schedule_hits_zero() {
        let config = SaConfig::default().with_max_iterations(4);
        let temps: Vec<f64> = (0..=4).map(|k| config.temperature(k)).collect();
        assert_eq!(temps, vec![1.0, 0.75, 0.5, 0.25, 0.0]);
    }

    #[test]
    fn test_schedule_has_no_drift() {
        let config = SaConfig::default().with_max_iterations(10);
        assert_eq!(config.temperature(10), 0.0);
        assert_eq!(config.temperature(0), 1.0);
    }
}
