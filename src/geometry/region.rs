//! Boundary region: the simple polygon Steiner points must stay within.

use std::cmp::Ordering;

use super::point::Point;
use super::predicates::orient2d;

/// Where a point lies relative to a [`BoundaryRegion`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Containment {
    Inside,
    OnBoundary,
    Outside,
}

impl Containment {
    /// Inside or on the boundary.
    pub fn is_admissible(self) -> bool {
        !matches!(self, Containment::Outside)
    }
}

/// A simple polygon given by its ordered vertices (either orientation).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundaryRegion {
    vertices: Vec<Point>,
}

impl BoundaryRegion {
    pub fn new(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Exact three-way point-in-polygon test (winding number).
    pub fn contains(&self, p: &Point) -> Containment {
        let n = self.vertices.len();
        if n < 3 {
            return Containment::Outside;
        }

        let mut winding = 0i64;
        for i in 0..n {
            let a = &self.vertices[i];
            let b = &self.vertices[(i + 1) % n];
            let side = orient2d(a, b, p);

            if side == Ordering::Equal && within_box(p, a, b) {
                return Containment::OnBoundary;
            }

            if a.y <= p.y {
                if b.y > p.y && side == Ordering::Greater {
                    winding += 1;
                }
            } else if b.y <= p.y && side == Ordering::Less {
                winding -= 1;
            }
        }

        if winding != 0 {
            Containment::Inside
        } else {
            Containment::Outside
        }
    }
}

fn within_box(p: &Point, a: &Point, b: &Point) -> bool {
    let (lo_x, hi_x) = if a.x <= b.x { (&a.x, &b.x) } else { (&b.x, &a.x) };
    let (lo_y, hi_y) = if a.y <= b.y { (&a.y, &b.y) } else { (&b.y, &a.y) };
    *lo_x <= p.x && p.x <= *hi_x && *lo_y <= p.y && p.y <= *hi_y
}
