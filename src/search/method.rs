//! Driver selection by name.

use std::fmt;
use std::str::FromStr;

use crate::cdt::Triangulation;
use crate::geometry::BoundaryRegion;
use crate::greedy::{GreedyConfig, GreedyRunner};
use crate::local::{LocalSearchConfig, LocalSearchRunner};
use crate::sa::{SaConfig, SaRunner};
use crate::steiner::Strategy;

use super::{RefineError, RefineResult};

/// Refinement driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Method {
    /// Single-strategy greedy pass.
    Legacy,
    /// Best-of-N local search.
    #[default]
    Local,
    /// Simulated annealing.
    Sa,
    /// Ant colony search; reserved.
    Ant,
}

impl Method {
    pub fn name(self) -> &'static str {
        match self {
            Method::Legacy => "legacy",
            Method::Local => "local",
            Method::Sa => "sa",
            Method::Ant => "ant",
        }
    }

    /// Strategies the driver tries when none are configured.
    pub fn default_strategies(self) -> Vec<Strategy> {
        match self {
            Method::Legacy => vec![Strategy::Projection],
            Method::Local => vec![
                Strategy::MaxEdge,
                Strategy::Pericenter,
                Strategy::Polygon,
                Strategy::Projection,
                Strategy::Bisection,
            ],
            Method::Sa | Method::Ant => vec![
                Strategy::MaxEdge,
                Strategy::Pericenter,
                Strategy::Polygon,
                Strategy::Projection,
            ],
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown search method `{0}` (expected legacy, local, sa or ant)")]
pub struct UnknownMethod(pub String);

impl FromStr for Method {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "legacy" => Ok(Method::Legacy),
            "local" => Ok(Method::Local),
            "sa" => Ok(Method::Sa),
            "ant" => Ok(Method::Ant),
            _ => Err(UnknownMethod(s.to_string())),
        }
    }
}

/// Everything needed to run one driver.
///
/// # Examples
///
/// ```
/// use u_steiner::search::{Method, RunParameters};
///
/// let params = RunParameters::default()
///     .with_method(Method::Sa)
///     .with_max_iterations(25)
///     .with_seed(7);
/// assert_eq!(params.max_iterations, 25);
/// ```
#[derive(Debug, Clone)]
pub struct RunParameters {
    pub method: Method,
    /// Iteration budget `L`.
    pub max_iterations: usize,
    /// Energy weight of obtuse triangles (SA only).
    pub alpha: f64,
    /// Energy weight of Steiner points (SA only).
    pub beta: f64,
    /// SA seed; OS entropy when `None`.
    pub seed: Option<u64>,
    /// Evaluate local search trials on rayon when the `parallel` feature is on.
    pub parallel: bool,
}

impl Default for RunParameters {
    fn default() -> Self {
        Self {
            method: Method::default(),
            max_iterations: 10,
            alpha: 3.0,
            beta: 1.0,
            seed: None,
            parallel: false,
        }
    }
}

impl RunParameters {
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
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

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Runs the selected driver with its default strategy set.
    pub fn run(
        &self,
        cdt: &mut Triangulation,
        region: &BoundaryRegion,
    ) -> Result<RefineResult, RefineError> {
        let strategies = self.method.default_strategies();
        match self.method {
            Method::Legacy => {
                let config = GreedyConfig::default()
                    .with_max_iterations(self.max_iterations)
                    .with_strategy(strategies[0]);
                GreedyRunner::run(cdt, region, &config)
            }
            Method::Local => {
                let config = LocalSearchConfig::default()
                    .with_max_iterations(self.max_iterations)
                    .with_strategies(strategies)
                    .with_parallel(self.parallel);
                LocalSearchRunner::run(cdt, region, &config)
            }
            Method::Sa => {
                let mut config = SaConfig::default()
                    .with_max_iterations(self.max_iterations)
                    .with_strategies(strategies)
                    .with_weights(self.alpha, self.beta);
                config.seed = self.seed;
                SaRunner::run(cdt, region, &config).map(RefineResult::from)
            }
            Method::Ant => Err(RefineError::NotImplemented(Method::Ant.name())),
        }
    }
}
