//! Greedy execution loop.

use tracing::{debug, info};

use super::config::GreedyConfig;
use crate::cdt::Triangulation;
use crate::geometry::BoundaryRegion;
use crate::search::{self, RefineError, RefineResult};

/// Executes the greedy driver.
pub struct GreedyRunner;

impl GreedyRunner {
    /// Refines `cdt` in place.
    pub fn run(
        cdt: &mut Triangulation,
        region: &BoundaryRegion,
        config: &GreedyConfig,
    ) -> Result<RefineResult, RefineError> {
        config.validate().map_err(RefineError::InvalidConfig)?;

        let strategy = config.strategy;
        let mut result = RefineResult::start(cdt.count_obtuse());
        info!(
            strategy = %strategy,
            max_iterations = config.max_iterations,
            obtuse = result.initial_obtuse,
            "greedy refinement started"
        );

        for iteration in 1..=config.max_iterations {
            if result.final_obtuse == 0 {
                break;
            }
            for face in search::snapshot(cdt) {
                if !search::is_live_obtuse(cdt, &face) {
                    continue;
                }
                if !search::is_applicable(cdt, &face, strategy) {
                    debug!(?face, "pericenter skipped: opposite edge is constrained");
                    continue;
                }
                search::commit(cdt, region, &face, strategy, iteration, &mut result);
            }
            result.end_iteration(cdt.count_obtuse());
            debug!(iteration, obtuse = result.final_obtuse, "iteration finished");
        }

        info!(
            iterations = result.iterations,
            initial_obtuse = result.initial_obtuse,
            final_obtuse = result.final_obtuse,
            steiner_points = result.steiner_points.len(),
            "greedy refinement finished"
        );
        Ok(result)
    }
}
