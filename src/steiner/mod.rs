//! Steiner point placement strategies.
//!
//! Each strategy maps a triangle to one candidate point. Strategies never
//! check the boundary region; that is the caller's job. All constructions
//! are exact.
//!
//! | Strategy | Point |
//! |---|---|
//! | [`Strategy::MaxEdge`] | midpoint of the longest edge |
//! | [`Strategy::Pericenter`] | circumcenter |
//! | [`Strategy::Polygon`] | centroid of a convex polygon of obtuse neighbors |
//! | [`Strategy::Projection`] | foot of the obtuse vertex on the opposite edge |
//! | [`Strategy::Bisection`], [`Strategy::Altitude`] | reserved |

mod generators;
mod strategy;

pub use generators::{generate, max_edge, pericenter, polygon, projection};
pub use strategy::{Strategy, StrategyError, UnknownStrategy};
