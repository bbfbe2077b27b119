//! Simulated Annealing (SA) refinement.
//!
//! For every obtuse triangle one strategy is drawn at random and evaluated on
//! a clone of the triangulation. The move is scored with the
//! [`EnergyModel`](crate::energy::EnergyModel) and accepted by the Metropolis
//! criterion, so worsening moves still pass while the temperature is high.
//! The temperature falls linearly from 1 to 0 over the iteration budget.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast
//!   Computing Machines"

mod config;
mod runner;
mod types;

pub use config::SaConfig;
pub use runner::{accept, SaRunner};
pub use types::SaResult;
