//! Greedy single-strategy refinement.
//!
//! Every obtuse triangle of the iteration snapshot gets one point from the
//! configured strategy, committed directly without any trial evaluation.

mod config;
mod runner;

pub use config::GreedyConfig;
pub use runner::GreedyRunner;
