//! Pieces shared by the refinement drivers.
//!
//! Every driver follows the same skeleton: snapshot the faces at the start
//! of an iteration, visit the snapshot faces that still exist and are obtuse,
//! evaluate strategies on throwaway clones of the triangulation, and commit
//! the chosen point into the live one. Committed points are never undone.

mod method;

pub use method::{Method, RunParameters, UnknownMethod};

use tracing::debug;

use crate::cdt::{Face, InsertOutcome, Triangulation};
use crate::geometry::{obtuse_vertex, opposite_edge, BoundaryRegion, Point};
use crate::steiner::{generate, Strategy};

/// A committed Steiner point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SteinerPoint {
    pub point: Point,
    /// Strategy that placed the point.
    pub strategy: Strategy,
    /// 1-based iteration that committed the point.
    pub iteration: usize,
}

/// Outcome of a refinement run.
#[derive(Debug, Clone)]
pub struct RefineResult {
    /// Committed points, in commit order.
    pub steiner_points: Vec<SteinerPoint>,
    /// Number of iterations executed.
    pub iterations: usize,
    /// Obtuse triangles before the first iteration.
    pub initial_obtuse: usize,
    /// Obtuse triangles after the last iteration.
    pub final_obtuse: usize,
    /// Obtuse count after each iteration.
    pub obtuse_history: Vec<usize>,
}

impl RefineResult {
    pub(crate) fn start(initial_obtuse: usize) -> Self {
        Self {
            steiner_points: Vec::new(),
            iterations: 0,
            initial_obtuse,
            final_obtuse: initial_obtuse,
            obtuse_history: Vec::new(),
        }
    }

    pub(crate) fn end_iteration(&mut self, obtuse: usize) {
        self.iterations += 1;
        self.final_obtuse = obtuse;
        self.obtuse_history.push(obtuse);
    }
}

/// Errors raised before a driver starts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RefineError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    UnknownMethod(#[from] UnknownMethod),

    #[error("search method `{0}` is not implemented")]
    NotImplemented(&'static str),
}

/// Faces of `cdt` at this moment.
pub(crate) fn snapshot(cdt: &Triangulation) -> Vec<Face> {
    cdt.faces().collect()
}

/// A snapshot face worth refining now: still present and obtuse.
pub(crate) fn is_live_obtuse(cdt: &Triangulation, face: &Face) -> bool {
    cdt.contains_face(face) && cdt.is_obtuse_face(face)
}

/// The edge opposite the obtuse vertex of `face` is constrained.
///
/// # Panics
///
/// Panics if `face` is not obtuse.
pub(crate) fn pericenter_blocked(cdt: &Triangulation, face: &Face) -> bool {
    let [a, b, c] = cdt.triangle(face);
    let obtuse = obtuse_vertex(a, b, c)
        .unwrap_or_else(|| panic!("obtuse vertex lookup failed on {face:?}"));
    let (i, j) = opposite_edge(obtuse);
    cdt.is_constrained(face.vertex(i), face.vertex(j))
}

/// Whether `strategy` may be evaluated on `face` at all.
pub(crate) fn is_applicable(cdt: &Triangulation, face: &Face, strategy: Strategy) -> bool {
    strategy != Strategy::Pericenter || !pericenter_blocked(cdt, face)
}

/// Generates `strategy` for `face`, checks the region and inserts the point.
///
/// Returns the point only if it became a new vertex.
pub(crate) fn place(
    cdt: &mut Triangulation,
    region: &BoundaryRegion,
    face: &Face,
    strategy: Strategy,
) -> Option<Point> {
    let point = match generate(cdt, face, strategy) {
        Ok(point) => point,
        Err(err) => {
            debug!(%strategy, "strategy failed: {err}");
            return None;
        }
    };
    if !region.contains(&point).is_admissible() {
        debug!(%strategy, %point, "candidate outside the region");
        return None;
    }
    match cdt.insert(point.clone(), strategy.insert_mode()) {
        InsertOutcome::Inserted(_) => Some(point),
        InsertOutcome::Existing(v) => {
            debug!(%strategy, %point, "candidate coincides with vertex {v}");
            None
        }
    }
}

/// Result of evaluating one strategy on a clone.
#[derive(Debug, Clone)]
pub(crate) struct Trial {
    pub strategy: Strategy,
    pub obtuse_after: usize,
}

/// Evaluates `strategy` on a copy of `cdt`; `None` if it cannot place a point.
pub(crate) fn run_trial(
    cdt: &Triangulation,
    region: &BoundaryRegion,
    face: &Face,
    strategy: Strategy,
) -> Option<Trial> {
    let mut copy = cdt.clone();
    place(&mut copy, region, face, strategy)?;
    let obtuse_after = copy.count_obtuse();
    debug!(%strategy, obtuse_after, "trial succeeded");
    Some(Trial {
        strategy,
        obtuse_after,
    })
}

/// Places `strategy` on the live triangulation and records it.
pub(crate) fn commit(
    cdt: &mut Triangulation,
    region: &BoundaryRegion,
    face: &Face,
    strategy: Strategy,
    iteration: usize,
    result: &mut RefineResult,
) -> bool {
    match place(cdt, region, face, strategy) {
        Some(point) => {
            debug!(iteration, %strategy, %point, "committed steiner point");
            result.steiner_points.push(SteinerPoint {
                point,
                strategy,
                iteration,
            });
            true
        }
        None => false,
    }
}
