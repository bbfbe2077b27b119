//! Local search execution loop.

use tracing::{debug, info};

use super::config::LocalSearchConfig;
use crate::cdt::{Face, Triangulation};
use crate::geometry::BoundaryRegion;
use crate::search::{self, RefineError, RefineResult, Trial};
use crate::steiner::Strategy;

/// Executes the local search driver.
pub struct LocalSearchRunner;

impl LocalSearchRunner {
    /// Refines `cdt` in place.
    pub fn run(
        cdt: &mut Triangulation,
        region: &BoundaryRegion,
        config: &LocalSearchConfig,
    ) -> Result<RefineResult, RefineError> {
        config.validate().map_err(RefineError::InvalidConfig)?;

        let mut result = RefineResult::start(cdt.count_obtuse());
        info!(
            max_iterations = config.max_iterations,
            strategies = config.strategies.len(),
            obtuse = result.initial_obtuse,
            "local search started"
        );

        for iteration in 1..=config.max_iterations {
            if result.final_obtuse == 0 {
                break;
            }
            for face in search::snapshot(cdt) {
                if !search::is_live_obtuse(cdt, &face) {
                    continue;
                }
                let trials =
                    Self::candidates(cdt, region, &face, &config.strategies, config.parallel);
                let Some(best) = select(&trials) else {
                    debug!(?face, "no strategy succeeded");
                    continue;
                };
                debug!(strategy = %best, "strategy selected");
                search::commit(cdt, region, &face, best, iteration, &mut result);
            }
            result.end_iteration(cdt.count_obtuse());
            debug!(iteration, obtuse = result.final_obtuse, "iteration finished");
        }

        info!(
            iterations = result.iterations,
            initial_obtuse = result.initial_obtuse,
            final_obtuse = result.final_obtuse,
            steiner_points = result.steiner_points.len(),
            "local search finished"
        );
        Ok(result)
    }

    /// Successful trials of `strategies` on `face`, in strategy order.
    ///
    /// Pericenter is left out when the edge opposite the obtuse vertex is
    /// constrained. `face` must be obtuse.
    pub(crate) fn candidates(
        cdt: &Triangulation,
        region: &BoundaryRegion,
        face: &Face,
        strategies: &[Strategy],
        parallel: bool,
    ) -> Vec<Trial> {
        let mut order = strategies.to_vec();
        order.sort_unstable();
        order.dedup();
        order.retain(|&s| search::is_applicable(cdt, face, s));
        evaluate(cdt, region, face, &order, parallel)
    }
}

#[cfg(feature = "parallel")]
fn evaluate(
    cdt: &Triangulation,
    region: &BoundaryRegion,
    face: &Face,
    order: &[Strategy],
    parallel: bool,
) -> Vec<Trial> {
    use rayon::prelude::*;

    if parallel {
        order
            .par_iter()
            .filter_map(|&s| search::run_trial(cdt, region, face, s))
            .collect()
    } else {
        order
            .iter()
            .filter_map(|&s| search::run_trial(cdt, region, face, s))
            .collect()
    }
}

#[cfg(not(feature = "parallel"))]
fn evaluate(
    cdt: &Triangulation,
    region: &BoundaryRegion,
    face: &Face,
    order: &[Strategy],
    _parallel: bool,
) -> Vec<Trial> {
    order
        .iter()
        .filter_map(|&s| search::run_trial(cdt, region, face, s))
        .collect()
}

/// Fewest obtuse triangles wins; ties go to the lowest strategy.
fn select(trials: &[Trial]) -> Option<Strategy> {
    trials
        .iter()
        .min_by_key(|t| (t.obtuse_after, t.strategy))
        .map(|t| t.strategy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::fixtures::*;

    fn config(strategies: Vec<Strategy>, l: usize) -> LocalSearchConfig {
        LocalSearchConfig::default()
            .with_max_iterations(l)
            .with_strategies(strategies)
    }

    #[test]
    fn test_single_flat_triangle_one_iteration() {
        let (mut cdt, region) = flat_triangle();
        let config = config(vec![Strategy::MaxEdge, Strategy::Projection], 1);
        let result = LocalSearchRunner::run(&mut cdt, &region, &config).unwrap();

        assert_eq!(result.steiner_points.len(), 1);
        assert_eq!(result.steiner_points[0].point, p(2, 0));
        assert_eq!(result.final_obtuse, 0);
        assert_eq!(cdt.count_obtuse(), 0);
    }

    #[test]
    fn test_tie_goes_to_lowest_strategy() {
        // MaxEdge and Projection both place (2, 0)
        let (mut cdt, region) = flat_triangle();
        let config = config(vec![Strategy::Projection, Strategy::MaxEdge], 1);
        let result = LocalSearchRunner::run(&mut cdt, &region, &config).unwrap();

        assert_eq!(result.steiner_points.len(), 1);
        assert_eq!(result.steiner_points[0].strategy, Strategy::MaxEdge);
    }

    #[test]
    fn test_select_prefers_fewer_obtuse() {
        let trials = vec![
            Trial {
                strategy: Strategy::MaxEdge,
                obtuse_after: 3,
            },
            Trial {
                strategy: Strategy::Projection,
                obtuse_after: 1,
            },
            Trial {
                strategy: Strategy::Polygon,
                obtuse_after: 1,
            },
        ];
        assert_eq!(select(&trials), Some(Strategy::Polygon));
        assert_eq!(select(&[]), None);
    }

    #[test]
    fn test_pericenter_omitted_on_constrained_edge() {
        let region = BoundaryRegion::new(vec![p(-10, -10), p(10, -10), p(10, 10), p(-10, 10)]);
        let mut cdt = Triangulation::from_points([p(0, 0), p(4, 0), p(2, 1)]);
        let face = cdt.faces().next().unwrap();
        let strategies = [Strategy::Pericenter, Strategy::MaxEdge];

        let free = LocalSearchRunner::candidates(&cdt, &region, &face, &strategies, false);
        assert!(free.iter().any(|t| t.strategy == Strategy::Pericenter));

        cdt.insert_constraint(0, 1).unwrap();
        let blocked = LocalSearchRunner::candidates(&cdt, &region, &face, &strategies, false);
        assert!(blocked.iter().all(|t| t.strategy != Strategy::Pericenter));
        assert_eq!(blocked.len(), 1);
    }

    #[test]
    fn test_outside_candidate_is_not_a_trial() {
        // pericenter lands below the region
        let region = BoundaryRegion::new(vec![p(0, 0), p(4, 0), p(4, 4), p(0, 4)]);
        let cdt = Triangulation::from_points([p(0, 0), p(4, 0), p(2, 1)]);
        let face = cdt.faces().next().unwrap();
        let trials =
            LocalSearchRunner::candidates(&cdt, &region, &face, &[Strategy::Pericenter], false);
        assert!(trials.is_empty());
    }

    #[test]
    fn test_reserved_strategies_never_win() {
        let (mut cdt, region) = flat_triangle();
        let config = config(vec![Strategy::Bisection, Strategy::Altitude], 2);
        let result = LocalSearchRunner::run(&mut cdt, &region, &config).unwrap();
        assert!(result.steiner_points.is_empty());
        assert_eq!(result.final_obtuse, 1);
    }

    #[test]
    fn test_idempotent_on_non_obtuse_mesh() {
        let (mut cdt, region) = right_square();
        let before = cdt.edges();
        let result =
            LocalSearchRunner::run(&mut cdt, &region, &LocalSearchConfig::default()).unwrap();
        assert!(result.steiner_points.is_empty());
        assert_eq!(cdt.edges(), before);
    }

    #[test]
    fn test_points_stay_in_l_shape() {
        let (mut cdt, region) = l_shape();
        assert!(cdt.count_obtuse() > 0);
        let result =
            LocalSearchRunner::run(&mut cdt, &region, &config(Strategy::ALL.to_vec(), 3)).unwrap();

        for sp in &result.steiner_points {
            assert!(region.contains(&sp.point).is_admissible(), "{} escaped", sp.point);
        }
        cdt.check_invariants();
    }

    #[test]
    fn test_history_tracks_iterations() {
        let (mut cdt, region) = l_shape();
        let result =
            LocalSearchRunner::run(&mut cdt, &region, &config(Strategy::ALL.to_vec(), 2)).unwrap();
        assert_eq!(result.obtuse_history.len(), result.iterations);
        if let Some(&last) = result.obtuse_history.last() {
            assert_eq!(last, result.final_obtuse);
        }
    }
}
