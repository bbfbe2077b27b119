//! Steiner point refinement of planar triangulations.
//!
//! Inserts additional ("Steiner") points into a constrained triangulation to
//! reduce the number of obtuse triangles, using a small library of placement
//! strategies driven by one of three search procedures:
//!
//! - **Greedy** ([`greedy`]): one fixed strategy applied to every obtuse
//!   triangle.
//! - **Local Search** ([`local`]): every strategy is evaluated on a copy of
//!   the triangulation and the one leaving the fewest obtuse triangles wins.
//! - **Simulated Annealing** ([`sa`]): a randomly drawn strategy is accepted
//!   by the Metropolis criterion on an [`energy`] objective.
//!
//! All geometry is exact: coordinates are `rug::Rational`, so angle
//! classification, containment and the triangulation's own predicates
//! always agree.
//!
//! # Architecture
//!
//! - [`geometry`]: points, predicates and the boundary region.
//! - [`cdt`]: constrained triangulation with flip and no-flip insertion.
//! - [`steiner`]: placement strategies.
//! - [`search`]: shared driver skeleton and method selection.
//! - [`instance`]: CG:SHOP 2025 instance and solution files.

pub mod cdt;
pub mod energy;
pub mod geometry;
pub mod greedy;
pub mod instance;
pub mod local;
pub mod sa;
pub mod search;
pub mod steiner;
