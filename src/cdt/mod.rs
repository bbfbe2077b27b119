//! Exact constrained triangulation.
//!
//! [`Triangulation`] triangulates the convex hull of its vertices and keeps a
//! set of constrained edges that are never flipped away. Points are inserted
//! under an explicit [`InsertMode`]:
//!
//! - [`InsertMode::Delaunay`] restores the constrained Delaunay property with
//!   Lawson flips around the new vertex.
//! - [`InsertMode::NoFlip`] only subdivides the face (or edge) containing the
//!   point and leaves every other edge untouched.
//!
//! Faces are plain vertex triples, so a [`Face`] captured from one
//! triangulation stays meaningful in any clone of it. After a mutation a
//! captured face may no longer exist; check with
//! [`Triangulation::contains_face`].

mod constraint;
mod triangulation;
mod types;

pub use triangulation::Triangulation;
pub use types::{CdtError, Edge, Face, InsertMode, InsertOutcome, VertexId};
