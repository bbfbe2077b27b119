//! Handles and options of the triangulation.

/// Dense vertex index, assigned in insertion order.
pub type VertexId = usize;

/// A counter-clockwise triangle, stored rotated so the smallest id comes first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Face([VertexId; 3]);

impl Face {
    /// Builds a face from counter-clockwise vertex ids.
    pub fn new(a: VertexId, b: VertexId, c: VertexId) -> Self {
        let v = [a, b, c];
        let first = (0..3).min_by_key(|&i| v[i]).unwrap_or(0);
        Face([v[first], v[(first + 1) % 3], v[(first + 2) % 3]])
    }

    pub fn vertices(&self) -> [VertexId; 3] {
        self.0
    }

    pub fn vertex(&self, i: usize) -> VertexId {
        self.0[i]
    }

    /// Directed counter-clockwise edge opposite vertex `i`.
    pub fn edge(&self, i: usize) -> (VertexId, VertexId) {
        (self.0[(i + 1) % 3], self.0[(i + 2) % 3])
    }

    pub fn has_vertex(&self, v: VertexId) -> bool {
        self.0.contains(&v)
    }

    /// The vertex that is neither `u` nor `v`.
    pub fn third(&self, u: VertexId, v: VertexId) -> Option<VertexId> {
        self.0.iter().copied().find(|&w| w != u && w != v)
    }

    pub(crate) fn half_edges(&self) -> [(VertexId, VertexId); 3] {
        let [a, b, c] = self.0;
        [(a, b), (b, c), (c, a)]
    }
}

/// Undirected edge with `0 < 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge(pub VertexId, pub VertexId);

impl Edge {
    pub fn new(a: VertexId, b: VertexId) -> Self {
        if a < b {
            Edge(a, b)
        } else {
            Edge(b, a)
        }
    }
}

/// How far an insertion may retriangulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InsertMode {
    /// Flip non-Delaunay, unconstrained edges around the new vertex.
    #[default]
    Delaunay,
    /// Subdivide the containing face or edge only.
    NoFlip,
}

/// Result of [`Triangulation::insert`](super::Triangulation::insert).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// A new vertex was created.
    Inserted(VertexId),
    /// The point coincides with an existing vertex; nothing changed.
    Existing(VertexId),
}

impl InsertOutcome {
    pub fn vertex(self) -> VertexId {
        match self {
            InsertOutcome::Inserted(v) | InsertOutcome::Existing(v) => v,
        }
    }

    pub fn is_new(self) -> bool {
        matches!(self, InsertOutcome::Inserted(_))
    }
}

/// Errors raised by constraint insertion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CdtError {
    #[error("vertex {0} does not exist")]
    UnknownVertex(VertexId),

    #[error("constraint endpoints coincide at vertex {0}")]
    DegenerateConstraint(VertexId),

    #[error("triangulation has no faces yet (all points are collinear)")]
    NoFaces,

    #[error("constraint ({a}, {b}) crosses existing constraint ({c}, {d})")]
    ConstraintsCross {
        a: VertexId,
        b: VertexId,
        c: VertexId,
        d: VertexId,
    },

    #[error("edge ({0}, {1}) is missing an adjacent face")]
    BrokenAdjacency(VertexId, VertexId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_rotation_keeps_orientation() {
        let f = Face::new(5, 2, 9);
        assert_eq!(f.vertices(), [2, 9, 5]);
        assert_eq!(Face::new(9, 5, 2), f);
        assert_ne!(Face::new(2, 5, 9), f);
    }

    #[test]
    fn test_face_edges() {
        let f = Face::new(0, 1, 2);
        assert_eq!(f.edge(0), (1, 2));
        assert_eq!(f.edge(1), (2, 0));
        assert_eq!(f.edge(2), (0, 1));
        assert_eq!(f.third(2, 0), Some(1));
    }

    #[test]
    fn test_edge_normalized() {
        assert_eq!(Edge::new(4, 1), Edge(1, 4));
        assert_eq!(Edge::new(1, 4), Edge(1, 4));
    }

    #[test]
    fn test_insert_outcome() {
        assert!(InsertOutcome::Inserted(3).is_new());
        assert!(!InsertOutcome::Existing(3).is_new());
        assert_eq!(InsertOutcome::Existing(7).vertex(), 7);
    }
}
