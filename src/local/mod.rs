//! Best-of-N local search.
//!
//! For every obtuse triangle each configured strategy is tried on a clone of
//! the triangulation. The strategy leaving the fewest obtuse triangles is
//! replayed on the live triangulation; ties go to the strategy declared
//! first in [`Strategy`](crate::steiner::Strategy).

mod config;
mod runner;

pub use config::LocalSearchConfig;
pub use runner::LocalSearchRunner;
