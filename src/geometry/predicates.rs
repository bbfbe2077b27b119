//! Exact predicates and constructions on rational points.

use std::cmp::Ordering;

use rug::Rational;

use super::point::Point;

/// Twice the signed area of `(a, b, c)`.
fn cross(a: &Point, b: &Point, c: &Point) -> Rational {
    let (abx, aby) = b.minus(a);
    let (acx, acy) = c.minus(a);
    Rational::from(&abx * &acy) - Rational::from(&aby * &acx)
}

/// Dot product of `(p - o)` and `(q - o)`: negative iff the angle at `o` is obtuse.
fn dot_at(o: &Point, p: &Point, q: &Point) -> Rational {
    let (px, py) = p.minus(o);
    let (qx, qy) = q.minus(o);
    Rational::from(&px * &qx) + Rational::from(&py * &qy)
}

/// Orientation of `c` relative to the directed line `a -> b`.
///
/// `Greater` for a left turn (counter-clockwise), `Less` for a right turn,
/// `Equal` when the three points are collinear.
pub fn orient2d(a: &Point, b: &Point, c: &Point) -> Ordering {
    cross(a, b, c).cmp0()
}

/// In-circle test: `Greater` iff `d` lies strictly inside the circle through
/// the counter-clockwise triangle `(a, b, c)`, `Equal` if on it.
pub fn incircle(a: &Point, b: &Point, c: &Point, d: &Point) -> Ordering {
    let (adx, ady) = a.minus(d);
    let (bdx, bdy) = b.minus(d);
    let (cdx, cdy) = c.minus(d);

    let alift = Rational::from(&adx * &adx) + Rational::from(&ady * &ady);
    let blift = Rational::from(&bdx * &bdx) + Rational::from(&bdy * &bdy);
    let clift = Rational::from(&cdx * &cdx) + Rational::from(&cdy * &cdy);

    let bc = Rational::from(&bdx * &cdy) - Rational::from(&bdy * &cdx);
    let ca = Rational::from(&cdx * &ady) - Rational::from(&cdy * &adx);
    let ab = Rational::from(&adx * &bdy) - Rational::from(&ady * &bdx);

    let det = alift * bc + blift * ca + clift * ab;
    det.cmp0()
}

pub fn squared_distance(a: &Point, b: &Point) -> Rational {
    let (dx, dy) = b.minus(a);
    Rational::from(&dx * &dx) + Rational::from(&dy * &dy)
}

/// True iff one interior angle of `(a, b, c)` exceeds 90 degrees.
///
/// A right angle is not obtuse.
pub fn is_obtuse(a: &Point, b: &Point, c: &Point) -> bool {
    obtuse_vertex(a, b, c).is_some()
}

/// Index (0, 1 or 2) of the vertex holding the obtuse angle.
pub fn obtuse_vertex(a: &Point, b: &Point, c: &Point) -> Option<usize> {
    [dot_at(a, b, c), dot_at(b, a, c), dot_at(c, a, b)]
        .iter()
        .position(|d| d.cmp0() == Ordering::Less)
}

/// Vertex indices of the edge opposite vertex `vertex`.
///
/// # Panics
///
/// Panics if `vertex` is not 0, 1 or 2.
pub fn opposite_edge(vertex: usize) -> (usize, usize) {
    match vertex {
        0 => (1, 2),
        1 => (0, 2),
        2 => (0, 1),
        _ => panic!("triangle vertex index out of range: {vertex}"),
    }
}

/// Convexity of the closed polygon `points[0] -> points[1] -> ... -> points[0]`.
///
/// Either orientation is accepted and collinear vertices are allowed, but a
/// fully collinear sequence is not convex. Every vertex must lie on the same
/// side of every edge, which also rejects self-intersecting cycles.
pub fn is_convex(points: &[Point]) -> bool {
    let n = points.len();
    if n < 3 {
        return false;
    }

    let mut seen_left = false;
    let mut seen_right = false;
    for i in 0..n {
        let a = &points[i];
        let b = &points[(i + 1) % n];
        for (k, c) in points.iter().enumerate() {
            if k == i || k == (i + 1) % n {
                continue;
            }
            match orient2d(a, b, c) {
                Ordering::Greater => seen_left = true,
                Ordering::Less => seen_right = true,
                Ordering::Equal => {}
            }
            if seen_left && seen_right {
                return false;
            }
        }
    }
    seen_left || seen_right
}

/// Arithmetic mean of `points`.
pub fn centroid(points: &[Point]) -> Option<Point> {
    if points.is_empty() {
        return None;
    }
    let n = points.len() as u64;
    let mut sx = Rational::new();
    let mut sy = Rational::new();
    for p in points {
        sx += &p.x;
        sy += &p.y;
    }
    Some(Point::new(sx / Rational::from(n), sy / Rational::from(n)))
}

/// Center of the circle through `a`, `b`, `c`; `None` if they are collinear.
pub fn circumcenter(a: &Point, b: &Point, c: &Point) -> Option<Point> {
    let d = cross(a, b, c) * 2u32;
    if d.cmp0() == Ordering::Equal {
        return None;
    }
    let (bx, by) = b.minus(a);
    let (cx, cy) = c.minus(a);
    let b_len = Rational::from(&bx * &bx) + Rational::from(&by * &by);
    let c_len = Rational::from(&cx * &cx) + Rational::from(&cy * &cy);

    let ux = (Rational::from(&cy * &b_len) - Rational::from(&by * &c_len)) / &d;
    let uy = (Rational::from(&bx * &c_len) - Rational::from(&cx * &b_len)) / &d;
    Some(Point::new(ux + &a.x, uy + &a.y))
}

/// Orthogonal projection of `p` onto the line through `a` and `b`.
///
/// `None` if `a == b`.
pub fn project_onto_line(p: &Point, a: &Point, b: &Point) -> Option<Point> {
    let len = squared_distance(a, b);
    if len.cmp0() == Ordering::Equal {
        return None;
    }
    let (dx, dy) = b.minus(a);
    let t = dot_at(a, p, b) / len;
    let x = Rational::from(&dx * &t) + &a.x;
    let y = Rational::from(&dy * &t) + &a.y;
    Some(Point::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn p(x: i64, y: i64) -> Point {
        Point::from_ints(x, y)
    }

    #[test]
    fn test_orient2d_signs() {
        assert_eq!(orient2d(&p(0, 0), &p(1, 0), &p(0, 1)), Ordering::Greater);
        assert_eq!(orient2d(&p(0, 0), &p(0, 1), &p(1, 0)), Ordering::Less);
        assert_eq!(orient2d(&p(0, 0), &p(1, 1), &p(3, 3)), Ordering::Equal);
    }

    #[test]
    fn test_incircle() {
        let (a, b, c) = (p(0, 0), p(2, 0), p(0, 2));
        assert_eq!(incircle(&a, &b, &c, &p(1, 1)), Ordering::Greater);
        assert_eq!(incircle(&a, &b, &c, &p(2, 2)), Ordering::Equal);
        assert_eq!(incircle(&a, &b, &c, &p(3, 3)), Ordering::Less);
    }

    #[test]
    fn test_right_angle_is_not_obtuse() {
        assert!(!is_obtuse(&p(0, 0), &p(4, 0), &p(0, 3)));
        assert_eq!(obtuse_vertex(&p(0, 0), &p(4, 0), &p(0, 3)), None);
    }

    #[test]
    fn test_obtuse_vertex_index() {
        // angle at (2, 1) is obtuse
        assert_eq!(obtuse_vertex(&p(0, 0), &p(4, 0), &p(2, 1)), Some(2));
        assert_eq!(obtuse_vertex(&p(2, 1), &p(0, 0), &p(4, 0)), Some(0));
        assert_eq!(obtuse_vertex(&p(0, 0), &p(2, 1), &p(4, 0)), Some(1));
    }

    #[test]
    fn test_nearly_right_angle_is_exact() {
        let a = p(0, 0);
        let b = p(1_000_000, 1);
        // dot product at the origin is exactly zero
        assert_eq!(obtuse_vertex(&a, &b, &p(-1, 1_000_000)), None);
        // dot product at the origin is -1
        assert_eq!(obtuse_vertex(&a, &b, &p(-1, 999_999)), Some(0));
    }

    #[test]
    fn test_opposite_edge_mapping() {
        for i in 0..3 {
            let (j, k) = opposite_edge(i);
            assert_ne!(j, i);
            assert_ne!(k, i);
            assert!(j < k);
        }
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_opposite_edge_rejects_bad_index() {
        opposite_edge(3);
    }

    #[test]
    fn test_is_convex() {
        let square = [p(0, 0), p(2, 0), p(2, 2), p(0, 2)];
        assert!(is_convex(&square));

        let mut clockwise = square.clone();
        clockwise.reverse();
        assert!(is_convex(&clockwise));

        let dart = [p(0, 0), p(4, 0), p(1, 1), p(0, 4)];
        assert!(!is_convex(&dart));

        let bowtie = [p(0, 0), p(2, 2), p(2, 0), p(0, 2)];
        assert!(!is_convex(&bowtie));

        let line = [p(0, 0), p(1, 1), p(2, 2)];
        assert!(!is_convex(&line));

        let with_collinear = [p(0, 0), p(1, 0), p(2, 0), p(2, 2)];
        assert!(is_convex(&with_collinear));
    }

    #[test]
    fn test_centroid() {
        let pts = [p(0, 0), p(3, 0), p(0, 3)];
        assert_eq!(centroid(&pts), Some(p(1, 1)));
        assert_eq!(centroid(&[]), None);
    }

    #[test]
    fn test_circumcenter() {
        let c = circumcenter(&p(0, 0), &p(4, 0), &p(0, 2)).unwrap();
        assert_eq!(c, p(2, 1));
        let obtuse = circumcenter(&p(0, 0), &p(4, 0), &p(2, 1)).unwrap();
        assert_eq!(obtuse, Point::from_fractions((2, 1), (-3, 2)));
        assert_eq!(circumcenter(&p(0, 0), &p(1, 1), &p(2, 2)), None);
    }

    #[test]
    fn test_projection() {
        let foot = project_onto_line(&p(2, 1), &p(0, 0), &p(4, 0)).unwrap();
        assert_eq!(foot, p(2, 0));
        let foot = project_onto_line(&p(0, 2), &p(0, 0), &p(2, 2)).unwrap();
        assert_eq!(foot, p(1, 1));
        assert_eq!(project_onto_line(&p(1, 1), &p(0, 0), &p(0, 0)), None);
    }

    proptest! {
        #[test]
        fn prop_obtuse_agrees_with_vertex_lookup(
            ax in -50i64..50, ay in -50i64..50,
            bx in -50i64..50, by in -50i64..50,
            cx in -50i64..50, cy in -50i64..50,
        ) {
            let (a, b, c) = (p(ax, ay), p(bx, by), p(cx, cy));
            prop_assert_eq!(is_obtuse(&a, &b, &c), obtuse_vertex(&a, &b, &c).is_some());
        }

        #[test]
        fn prop_circumcenter_is_equidistant(
            ax in -50i64..50, ay in -50i64..50,
            bx in -50i64..50, by in -50i64..50,
            cx in -50i64..50, cy in -50i64..50,
        ) {
            let (a, b, c) = (p(ax, ay), p(bx, by), p(cx, cy));
            if let Some(o) = circumcenter(&a, &b, &c) {
                let ra = squared_distance(&o, &a);
                prop_assert_eq!(&ra, &squared_distance(&o, &b));
                prop_assert_eq!(&ra, &squared_distance(&o, &c));
            }
        }

        #[test]
        fn prop_projection_lies_on_line(
            px in -50i64..50, py in -50i64..50,
            ax in -50i64..50, ay in -50i64..50,
            bx in -50i64..50, by in -50i64..50,
        ) {
            let (q, a, b) = (p(px, py), p(ax, ay), p(bx, by));
            if let Some(foot) = project_onto_line(&q, &a, &b) {
                prop_assert_eq!(orient2d(&a, &b, &foot), Ordering::Equal);
            }
        }
    }
}
