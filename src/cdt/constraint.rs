//! Constraint recovery by edge flips.

use std::cmp::Ordering;
use std::collections::VecDeque;

use crate::geometry::{orient2d, squared_distance};

use super::triangulation::Triangulation;
use super::types::{CdtError, Edge, VertexId};

impl Triangulation {
    /// Forces the segment between vertices `a` and `b` to be an edge and
    /// marks it constrained.
    ///
    /// Vertices lying on the open segment split it into sub-constraints.
    /// Edges crossing the segment are flipped away, then the constrained
    /// Delaunay property is restored on the edges the flips created.
    pub fn insert_constraint(&mut self, a: VertexId, b: VertexId) -> Result<(), CdtError> {
        for v in [a, b] {
            if v >= self.vertex_count() {
                return Err(CdtError::UnknownVertex(v));
            }
        }
        if a == b {
            return Err(CdtError::DegenerateConstraint(a));
        }
        if self.face_count() == 0 {
            return Err(CdtError::NoFaces);
        }

        if self.has_edge(a, b) {
            self.mark_constrained(a, b);
            return Ok(());
        }
        if let Some(mid) = self.vertex_on_segment(a, b) {
            self.insert_constraint(a, mid)?;
            return self.insert_constraint(mid, b);
        }

        let mut queue: VecDeque<(VertexId, VertexId)> = self.crossing_edges(a, b)?.into();
        let mut created = Vec::new();
        while let Some((u, v)) = queue.pop_front() {
            let (w, x) = self
                .apexes(u, v)
                .ok_or(CdtError::BrokenAdjacency(u, v))?;
            if !self.flippable(u, v, w, x) {
                queue.push_back((u, v));
                continue;
            }
            self.flip(u, v).ok_or(CdtError::BrokenAdjacency(u, v))?;
            if self.segments_cross(a, b, w, x) {
                queue.push_back((w, x));
            } else {
                created.push((w, x));
            }
        }

        self.mark_constrained(a, b);
        self.legalize(created);
        Ok(())
    }

    /// Vertex strictly inside segment `(a, b)` closest to `a`.
    fn vertex_on_segment(&self, a: VertexId, b: VertexId) -> Option<VertexId> {
        let (pa, pb) = (self.point(a), self.point(b));
        let len = squared_distance(pa, pb);
        (0..self.vertex_count())
            .filter(|&k| k != a && k != b)
            .filter(|&k| {
                let pk = self.point(k);
                orient2d(pa, pb, pk) == Ordering::Equal
                    && squared_distance(pa, pk) < len
                    && squared_distance(pb, pk) < len
            })
            .min_by(|&i, &j| {
                squared_distance(pa, self.point(i)).cmp(&squared_distance(pa, self.point(j)))
            })
    }

    fn crossing_edges(
        &self,
        a: VertexId,
        b: VertexId,
    ) -> Result<Vec<(VertexId, VertexId)>, CdtError> {
        let mut crossing = Vec::new();
        for Edge(u, v) in self.edges() {
            if [u, v].iter().any(|k| *k == a || *k == b) || !self.segments_cross(a, b, u, v) {
                continue;
            }
            if self.is_constrained(u, v) {
                return Err(CdtError::ConstraintsCross { a, b, c: u, d: v });
            }
            crossing.push((u, v));
        }
        Ok(crossing)
    }

    /// Proper crossing: the segments share exactly one interior point.
    fn segments_cross(&self, a: VertexId, b: VertexId, u: VertexId, v: VertexId) -> bool {
        let [pa, pb, pu, pv] = [a, b, u, v].map(|k| self.point(k));
        let s1 = orient2d(pa, pb, pu);
        let s2 = orient2d(pa, pb, pv);
        let s3 = orient2d(pu, pv, pa);
        let s4 = orient2d(pu, pv, pb);
        s1 != Ordering::Equal
            && s2 != Ordering::Equal
            && s1 != s2
            && s3 != Ordering::Equal
            && s4 != Ordering::Equal
            && s3 != s4
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cdt::InsertMode;
    use crate::geometry::Point;

    fn p(x: i64, y: i64) -> Point {
        Point::from_ints(x, y)
    }

    // Delaunay picks the short diagonal 1-3
    fn kite() -> Triangulation {
        Triangulation::from_points([p(0, 0), p(4, -1), p(8, 0), p(4, 1)])
    }

    #[test]
    fn test_existing_edge_is_marked() {
        let mut cdt = kite();
        assert!(cdt.has_edge(1, 3));
        cdt.insert_constraint(3, 1).unwrap();
        assert!(cdt.is_constrained(1, 3));
        assert_eq!(cdt.constraints(), vec![Edge(1, 3)]);
    }

    #[test]
    fn test_constraint_forces_flip() {
        let mut cdt = kite();
        assert!(!cdt.has_edge(0, 2));
        cdt.insert_constraint(0, 2).unwrap();
        assert!(cdt.has_edge(0, 2));
        assert!(cdt.is_constrained(0, 2));
        assert!(!cdt.has_edge(1, 3));
        cdt.check_invariants();
    }

    #[test]
    fn test_constraint_survives_later_insertions() {
        let mut cdt = kite();
        cdt.insert_constraint(0, 2).unwrap();
        cdt.insert(p(4, 0), InsertMode::Delaunay);
        cdt.insert(p(3, 0), InsertMode::Delaunay);
        assert!(!cdt.is_constrained(0, 2));
        assert!(cdt.is_constrained(0, 5));
        assert!(cdt.is_constrained(5, 4));
        assert!(cdt.is_constrained(4, 2));
        cdt.check_invariants();
        assert!(cdt.is_constrained_delaunay());
    }

    #[test]
    fn test_crossing_constraint_rejected() {
        let mut cdt = kite();
        cdt.insert_constraint(1, 3).unwrap();
        let err = cdt.insert_constraint(0, 2).unwrap_err();
        assert!(matches!(err, CdtError::ConstraintsCross { .. }));
    }

    #[test]
    fn test_vertex_on_segment_splits_constraint() {
        let mut cdt =
            Triangulation::from_points([p(0, 0), p(2, 0), p(4, 0), p(2, 2), p(2, -2)]);
        cdt.insert_constraint(0, 2).unwrap();
        assert_eq!(cdt.constraints(), vec![Edge(0, 1), Edge(1, 2)]);
        cdt.check_invariants();
    }

    #[test]
    fn test_constraint_through_many_edges() {
        let mut cdt = Triangulation::from_points([
            p(0, 0),
            p(10, 0),
            p(2, 1),
            p(5, 1),
            p(8, 1),
            p(3, -1),
            p(7, -1),
            p(5, 3),
            p(5, -3),
        ]);
        cdt.insert_constraint(0, 1).unwrap();
        assert!(cdt.has_edge(0, 1));
        cdt.check_invariants();
        assert!(cdt.is_constrained_delaunay());
    }

    #[test]
    fn test_constraint_errors() {
        let mut cdt = kite();
        assert_eq!(cdt.insert_constraint(0, 9), Err(CdtError::UnknownVertex(9)));
        assert_eq!(
            cdt.insert_constraint(2, 2),
            Err(CdtError::DegenerateConstraint(2))
        );

        let mut line = Triangulation::from_points([p(0, 0), p(1, 0), p(2, 0)]);
        assert_eq!(line.insert_constraint(0, 2), Err(CdtError::NoFaces));
    }
}
