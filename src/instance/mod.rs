//! CG:SHOP 2025 instance loading and solution export.
//!
//! An [`Instance`] is validated, then [`Instance::build`] produces the
//! constrained triangulation and boundary region the drivers refine. A
//! [`Solution`] records the Steiner points as exact `"num/den"` strings and
//! every edge of the final triangulation.

mod error;
mod input;
mod solution;

pub use error::InstanceError;
pub use input::{Instance, MeshSetup, Parameters};
pub use solution::Solution;
