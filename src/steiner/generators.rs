//! Placement rules.

use crate::cdt::{Face, Triangulation};
use crate::geometry::{
    centroid, circumcenter, is_convex, obtuse_vertex, opposite_edge, project_onto_line,
    squared_distance, Point,
};

use super::strategy::{Strategy, StrategyError};

/// Midpoint of the longest edge. Edges are ranked `(v0, v1)`, `(v1, v2)`,
/// `(v2, v0)` and the first one at least as long as both others wins.
pub fn max_edge(tri: [&Point; 3]) -> Point {
    let [a, b, c] = tri;
    let ab = squared_distance(a, b);
    let bc = squared_distance(b, c);
    let ca = squared_distance(c, a);
    if ab >= bc && ab >= ca {
        a.midpoint(b)
    } else if bc >= ca {
        b.midpoint(c)
    } else {
        c.midpoint(a)
    }
}

pub fn pericenter(tri: [&Point; 3]) -> Result<Point, StrategyError> {
    let [a, b, c] = tri;
    circumcenter(a, b, c).ok_or(StrategyError::Degenerate)
}

/// Orthogonal projection of the obtuse vertex onto the opposite edge.
pub fn projection(tri: [&Point; 3]) -> Result<Point, StrategyError> {
    let [a, b, c] = tri;
    let obtuse = obtuse_vertex(a, b, c).ok_or(StrategyError::NoObtuseVertex)?;
    let (i, j) = opposite_edge(obtuse);
    project_onto_line(tri[obtuse], tri[i], tri[j]).ok_or(StrategyError::Degenerate)
}

/// Grows a convex polygon around `face` by absorbing obtuse neighbors,
/// constrains its boundary in `cdt` and returns its vertex centroid.
///
/// A neighbor is absorbed by splicing its far vertex between the endpoints
/// of the shared edge; the splice is kept only if the polygon stays convex.
pub fn polygon(cdt: &mut Triangulation, face: &Face) -> Result<Point, StrategyError> {
    let mut ring: Vec<usize> = face.vertices().to_vec();

    for i in 0..3 {
        let Some((neighbor, far)) = cdt.adjacent(face, i) else {
            continue;
        };
        if !cdt.is_obtuse_face(&neighbor) || ring.contains(&far) {
            continue;
        }
        let (u, _) = face.edge(i);
        let Some(at) = ring.iter().position(|&k| k == u) else {
            continue;
        };

        let mut grown = ring.clone();
        grown.insert(at + 1, far);
        let points: Vec<Point> = grown.iter().map(|&k| cdt.point(k).clone()).collect();
        if is_convex(&points) {
            ring = grown;
        }
    }

    if ring.len() <= 3 {
        return Err(StrategyError::PolygonNotGrown);
    }

    for (k, &u) in ring.iter().enumerate() {
        let v = ring[(k + 1) % ring.len()];
        cdt.insert_constraint(u, v)?;
    }
    let points: Vec<Point> = ring.iter().map(|&k| cdt.point(k).clone()).collect();
    centroid(&points).ok_or(StrategyError::Degenerate)
}

/// Computes the candidate point `strategy` proposes for `face`.
///
/// Only [`Strategy::Polygon`] mutates `cdt` (it adds constraints).
pub fn generate(
    cdt: &mut Triangulation,
    face: &Face,
    strategy: Strategy,
) -> Result<Point, StrategyError> {
    if !cdt.contains_face(face) {
        return Err(StrategyError::FaceNotFound);
    }
    match strategy {
        Strategy::MaxEdge => Ok(max_edge(cdt.triangle(face))),
        Strategy::Pericenter => pericenter(cdt.triangle(face)),
        Strategy::Projection => projection(cdt.triangle(face)),
        Strategy::Polygon => polygon(cdt, face),
        Strategy::Bisection | Strategy::Altitude => Err(StrategyError::NotImplemented(strategy)),
    }
}
