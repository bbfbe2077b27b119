//! Exact planar geometry.
//!
//! Every coordinate is a [`rug::Rational`], so orientation, in-circle and
//! angle classification are exact sign tests. Triangles with a right angle
//! are never misclassified as obtuse, and constructed points (midpoints,
//! circumcenters, projections, centroids) carry no rounding error.

mod point;
mod predicates;
mod region;

pub use point::Point;
pub use predicates::{
    centroid, circumcenter, incircle, is_convex, is_obtuse, obtuse_vertex, opposite_edge,
    orient2d, project_onto_line, squared_distance,
};
pub use region::{BoundaryRegion, Containment};
