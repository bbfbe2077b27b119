//! SA run summary.

use crate::search::{RefineResult, SteinerPoint};

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
pub struct SaResult {
    /// Committed points, in commit order.
    pub steiner_points: Vec<SteinerPoint>,

    /// Total number of iterations executed.
    pub iterations: usize,

    pub initial_obtuse: usize,
    pub final_obtuse: usize,

    /// Obtuse count after each iteration.
    pub obtuse_history: Vec<usize>,

    /// Temperature of the last executed iteration.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,

    /// Evaluated moves that were not accepted.
    pub rejected_moves: usize,

    /// Energy before the first iteration.
    pub initial_energy: f64,

    /// Energy after the last iteration.
    pub final_energy: f64,
}

impl From<SaResult> for RefineResult {
    fn from(sa: SaResult) -> Self {
        RefineResult {
            steiner_points: sa.steiner_points,
            iterations: sa.iterations,
            initial_obtuse: sa.initial_obtuse,
            final_obtuse: sa.final_obtuse,
            obtuse_history: sa.obtuse_history,
        }
    }
}
