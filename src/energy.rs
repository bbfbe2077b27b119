//! Objective minimised by simulated annealing.

/// `alpha * obtuse + beta * steiner`. Lower is better.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyModel {
    /// Weight of each obtuse triangle.
    pub alpha: f64,
    /// Weight of each Steiner point.
    pub beta: f64,
}

impl Default for EnergyModel {
    fn default() -> Self {
        Self {
            alpha: 3.0,
            beta: 1.0,
        }
    }
}

impl EnergyModel {
    pub fn new(alpha: f64, beta: f64) -> Self {
        Self { alpha, beta }
    }

    pub fn energy(&self, obtuse: usize, steiner: usize) -> f64 {
        self.alpha * obtuse as f64 + self.beta * steiner as f64
    }
}
