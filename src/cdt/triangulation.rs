//! Face storage, point location, insertion and Lawson flips.

use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap, HashSet};

use crate::geometry::{incircle, is_obtuse, orient2d, Point};

use super::types::{Edge, Face, InsertMode, InsertOutcome, VertexId};

enum Location {
    Face(usize),
    Edge(VertexId, VertexId),
    Outside,
}

/// Constrained triangulation of the convex hull of its vertices.
///
/// Cloning produces a fully independent copy, which is how search drivers
/// evaluate a candidate insertion without touching the live mesh.
#[derive(Debug, Clone, Default)]
pub struct Triangulation {
    points: Vec<Point>,
    index: HashMap<Point, VertexId>,
    slots: Vec<Option<Face>>,
    free: Vec<usize>,
    // directed counter-clockwise edge -> slot of the face on its left
    half_edges: HashMap<(VertexId, VertexId), usize>,
    constraints: HashSet<Edge>,
    // vertices waiting for a non-collinear point
    pending: Vec<VertexId>,
}

impl Triangulation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delaunay triangulation of `points`, inserted in order.
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = Point>,
    {
        let mut cdt = Self::new();
        for p in points {
            cdt.insert(p, InsertMode::Delaunay);
        }
        cdt
    }

    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    /// Coordinates of vertex `v`.
    ///
    /// # Panics
    ///
    /// Panics if `v` is not a vertex id of this triangulation.
    pub fn point(&self, v: VertexId) -> &Point {
        &self.points[v]
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn vertex_of(&self, p: &Point) -> Option<VertexId> {
        self.index.get(p).copied()
    }

    pub fn face_count(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Finite faces in storage order.
    pub fn faces(&self) -> impl Iterator<Item = Face> + '_ {
        self.slots.iter().filter_map(|slot| *slot)
    }

    /// Corner points of `face`.
    pub fn triangle(&self, face: &Face) -> [&Point; 3] {
        let [a, b, c] = face.vertices();
        [&self.points[a], &self.points[b], &self.points[c]]
    }

    pub fn contains_face(&self, face: &Face) -> bool {
        let [a, b, _] = face.vertices();
        self.face_at(a, b) == Some(*face)
    }

    pub fn has_edge(&self, u: VertexId, v: VertexId) -> bool {
        self.half_edges.contains_key(&(u, v)) || self.half_edges.contains_key(&(v, u))
    }

    /// Neighbor across the edge opposite vertex `i` of `face`, with the
    /// neighbor's vertex that is not on the shared edge.
    pub fn adjacent(&self, face: &Face, i: usize) -> Option<(Face, VertexId)> {
        if !self.contains_face(face) {
            return None;
        }
        let (u, v) = face.edge(i);
        let neighbor = self.face_at(v, u)?;
        let far = neighbor.third(u, v)?;
        Some((neighbor, far))
    }

    pub fn is_constrained(&self, u: VertexId, v: VertexId) -> bool {
        self.constraints.contains(&Edge::new(u, v))
    }

    /// Constrained edges, sorted.
    pub fn constraints(&self) -> Vec<Edge> {
        let mut edges: Vec<Edge> = self.constraints.iter().copied().collect();
        edges.sort_unstable();
        edges
    }

    /// Every finite edge, sorted.
    pub fn edges(&self) -> Vec<Edge> {
        self.half_edges
            .keys()
            .map(|&(u, v)| Edge::new(u, v))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn is_obtuse_face(&self, face: &Face) -> bool {
        let [a, b, c] = self.triangle(face);
        is_obtuse(a, b, c)
    }

    pub fn obtuse_faces(&self) -> Vec<Face> {
        self.faces().filter(|f| self.is_obtuse_face(f)).collect()
    }

    pub fn count_obtuse(&self) -> usize {
        self.faces().filter(|f| self.is_obtuse_face(f)).count()
    }

    /// Inserts `point`, subdividing the face or edge that contains it, or
    /// connecting it to every visible hull edge when it lies outside.
    ///
    /// A point on a constrained edge splits the constraint into two
    /// constrained halves.
    pub fn insert(&mut self, point: Point, mode: InsertMode) -> InsertOutcome {
        if let Some(&v) = self.index.get(&point) {
            return InsertOutcome::Existing(v);
        }
        let v = self.points.len();
        self.index.insert(point.clone(), v);
        self.points.push(point);

        let suspects = if self.face_count() == 0 {
            self.pending.push(v);
            self.seed_from_pending()
        } else {
            match self.locate(v) {
                Location::Face(slot) => self.split_face(slot, v),
                Location::Edge(a, b) => self.split_edge(a, b, v),
                Location::Outside => self.extend_hull(v),
            }
        };

        if mode == InsertMode::Delaunay {
            self.legalize(suspects);
        }
        InsertOutcome::Inserted(v)
    }

    fn locate(&self, v: VertexId) -> Location {
        let p = &self.points[v];
        for (slot, face) in self.slots.iter().enumerate() {
            let Some(face) = face else { continue };
            let [a, b, c] = self.triangle(face);
            let sides = [orient2d(a, b, p), orient2d(b, c, p), orient2d(c, a, p)];
            if sides.contains(&Ordering::Less) {
                continue;
            }
            let mut on_edges = (0..3).filter(|&i| sides[i] == Ordering::Equal);
            match (on_edges.next(), on_edges.next()) {
                (None, _) => return Location::Face(slot),
                (Some(i), None) => {
                    let (u, w) = face.half_edges()[i];
                    return Location::Edge(u, w);
                }
                // on a corner; duplicates never reach here
                _ => continue,
            }
        }
        Location::Outside
    }

    fn split_face(&mut self, slot: usize, v: VertexId) -> Vec<(VertexId, VertexId)> {
        let Some(face) = self.remove_face(slot) else {
            return Vec::new();
        };
        let [a, b, c] = face.vertices();
        self.add_face(a, b, v);
        self.add_face(b, c, v);
        self.add_face(c, a, v);
        vec![(a, b), (b, c), (c, a)]
    }

    fn split_edge(&mut self, a: VertexId, b: VertexId, v: VertexId) -> Vec<(VertexId, VertexId)> {
        let left = self.half_edges.get(&(a, b)).copied();
        let right = self.half_edges.get(&(b, a)).copied();
        let mut outer = Vec::with_capacity(4);

        if let Some(face) = left.and_then(|slot| self.remove_face(slot)) {
            if let Some(w) = face.third(a, b) {
                self.add_face(a, v, w);
                self.add_face(v, b, w);
                outer.extend([(b, w), (w, a)]);
            }
        }
        if let Some(face) = right.and_then(|slot| self.remove_face(slot)) {
            if let Some(x) = face.third(a, b) {
                self.add_face(b, v, x);
                self.add_face(v, a, x);
                outer.extend([(a, x), (x, b)]);
            }
        }

        if self.constraints.remove(&Edge::new(a, b)) {
            self.constraints.insert(Edge::new(a, v));
            self.constraints.insert(Edge::new(v, b));
        }
        outer
    }

    fn extend_hull(&mut self, v: VertexId) -> Vec<(VertexId, VertexId)> {
        let p = &self.points[v];
        let mut visible: Vec<(VertexId, VertexId)> = self
            .half_edges
            .keys()
            .filter(|&&(a, b)| !self.half_edges.contains_key(&(b, a)))
            .filter(|&&(a, b)| orient2d(&self.points[a], &self.points[b], p) == Ordering::Less)
            .copied()
            .collect();
        visible.sort_unstable();
        for &(a, b) in &visible {
            self.add_face(b, a, v);
        }
        visible
    }

    /// Builds the first faces once the pending vertices stop being collinear.
    fn seed_from_pending(&mut self) -> Vec<(VertexId, VertexId)> {
        if self.pending.len() < 3 {
            return Vec::new();
        }
        let (p0, p1) = (self.pending[0], self.pending[1]);
        let apex_pos = self.pending.iter().position(|&k| {
            orient2d(&self.points[p0], &self.points[p1], &self.points[k]) != Ordering::Equal
        });
        let Some(apex_pos) = apex_pos else {
            return Vec::new();
        };

        let apex = self.pending.remove(apex_pos);
        let mut chain = std::mem::take(&mut self.pending);
        chain.sort_by(|&i, &j| self.points[i].cmp(&self.points[j]));

        for pair in chain.windows(2) {
            let (u, w) = (pair[0], pair[1]);
            if orient2d(&self.points[u], &self.points[w], &self.points[apex]) == Ordering::Greater {
                self.add_face(u, w, apex);
            } else {
                self.add_face(w, u, apex);
            }
        }
        chain[1..chain.len() - 1]
            .iter()
            .map(|&k| (k, apex))
            .collect()
    }

    /// Lawson flips starting from `stack`, never touching constrained edges.
    pub(super) fn legalize(&mut self, mut stack: Vec<(VertexId, VertexId)>) {
        while let Some((a, b)) = stack.pop() {
            if self.is_constrained(a, b) {
                continue;
            }
            let Some((w, x)) = self.apexes(a, b) else {
                continue;
            };
            let [pa, pb, pw, px] = [a, b, w, x].map(|k| &self.points[k]);
            if incircle(pa, pb, pw, px) != Ordering::Greater || !self.flippable(a, b, w, x) {
                continue;
            }
            if self.flip(a, b).is_some() {
                stack.extend([(a, x), (x, b), (b, w), (w, a)]);
            }
        }
    }

    pub(super) fn face_at(&self, u: VertexId, v: VertexId) -> Option<Face> {
        self.half_edges.get(&(u, v)).and_then(|&slot| self.slots[slot])
    }

    /// Apex of the face left of `u -> v` and apex of the face left of `v -> u`.
    pub(super) fn apexes(&self, u: VertexId, v: VertexId) -> Option<(VertexId, VertexId)> {
        let w = self.face_at(u, v)?.third(u, v)?;
        let x = self.face_at(v, u)?.third(u, v)?;
        Some((w, x))
    }

    /// The quadrilateral around edge `(u, v)` with apexes `w`, `x` is strictly convex.
    pub(super) fn flippable(&self, u: VertexId, v: VertexId, w: VertexId, x: VertexId) -> bool {
        let [pu, pv, pw, px] = [u, v, w, x].map(|k| &self.points[k]);
        let su = orient2d(pw, px, pu);
        let sv = orient2d(pw, px, pv);
        su != Ordering::Equal && sv != Ordering::Equal && su != sv
    }

    /// Replaces edge `(u, v)` by the other diagonal; returns it.
    pub(super) fn flip(&mut self, u: VertexId, v: VertexId) -> Option<(VertexId, VertexId)> {
        let left = *self.half_edges.get(&(u, v))?;
        let right = *self.half_edges.get(&(v, u))?;
        let (w, x) = self.apexes(u, v)?;
        self.remove_face(left);
        self.remove_face(right);
        self.add_face(u, x, w);
        self.add_face(x, v, w);
        Some((w, x))
    }

    pub(super) fn mark_constrained(&mut self, u: VertexId, v: VertexId) {
        self.constraints.insert(Edge::new(u, v));
    }

    fn add_face(&mut self, a: VertexId, b: VertexId, c: VertexId) -> usize {
        let face = Face::new(a, b, c);
        let slot = match self.free.pop() {
            Some(slot) => {
                self.slots[slot] = Some(face);
                slot
            }
            None => {
                self.slots.push(Some(face));
                self.slots.len() - 1
            }
        };
        for half_edge in face.half_edges() {
            self.half_edges.insert(half_edge, slot);
        }
        slot
    }

    fn remove_face(&mut self, slot: usize) -> Option<Face> {
        let face = self.slots.get_mut(slot)?.take()?;
        for half_edge in face.half_edges() {
            self.half_edges.remove(&half_edge);
        }
        self.free.push(slot);
        Some(face)
    }
}

#[cfg(test)]
impl Triangulation {
    /// Orientation, adjacency and Euler characteristic checks.
    pub(crate) fn check_invariants(&self) {
        let mut used = HashSet::new();
        for face in self.faces() {
            let [a, b, c] = self.triangle(&face);
            assert_eq!(orient2d(a, b, c), Ordering::Greater, "face {face:?} is not ccw");
            for he in face.half_edges() {
                assert_eq!(self.face_at(he.0, he.1), Some(face));
                used.insert(he.0);
                used.insert(he.1);
            }
        }
        assert_eq!(self.half_edges.len(), self.face_count() * 3);
        if self.face_count() > 0 {
            let v = used.len() as i64;
            let e = self.edges().len() as i64;
            let f = self.face_count() as i64;
            assert_eq!(v - e + f, 1, "euler characteristic of a disk");
        }
        for edge in &self.constraints {
            assert!(self.has_edge(edge.0, edge.1), "constraint {edge:?} lost");
        }
    }

    /// No unconstrained interior edge has its opposite apex inside a circumcircle.
    pub(crate) fn is_constrained_delaunay(&self) -> bool {
        self.edges().into_iter().all(|Edge(u, v)| {
            if self.is_constrained(u, v) {
                return true;
            }
            match self.apexes(u, v) {
                Some((w, x)) => {
                    let [pu, pv, pw, px] = [u, v, w, x].map(|k| &self.points[k]);
                    incircle(pu, pv, pw, px) != Ordering::Greater
                }
                None => true,
            }
        })
    }
}
