//! SA execution loop.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use super::config::SaConfig;
use super::types::SaResult;
use crate::cdt::Triangulation;
use crate::geometry::BoundaryRegion;
use crate::search::{self, RefineError, RefineResult};

/// Metropolis acceptance criterion.
///
/// Strict improvements are always accepted. Otherwise the move passes with
/// probability `exp(-(e_next - e_current) / temperature)`; at zero
/// temperature nothing but a strict improvement passes.
pub fn accept<R: Rng>(e_current: f64, e_next: f64, temperature: f64, rng: &mut R) -> bool {
    let delta = e_next - e_current;
    if delta < 0.0 {
        true
    } else if temperature > 0.0 {
        let probability = (-delta / temperature).exp();
        rng.random_range(0.0..1.0) < probability
    } else {
        false
    }
}

/// Executes the Simulated Annealing driver.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA with a generator seeded from `config.seed`, or from OS
    /// entropy when no seed is set.
    pub fn run(
        cdt: &mut Triangulation,
        region: &BoundaryRegion,
        config: &SaConfig,
    ) -> Result<SaResult, RefineError> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::run_with_rng(cdt, region, config, &mut rng)
    }

    /// Runs SA drawing from `rng`; `config.seed` is ignored.
    pub fn run_with_rng<R: Rng>(
        cdt: &mut Triangulation,
        region: &BoundaryRegion,
        config: &SaConfig,
        rng: &mut R,
    ) -> Result<SaResult, RefineError> {
        config.validate().map_err(RefineError::InvalidConfig)?;

        let model = config.energy_model();
        let mut result = RefineResult::start(cdt.count_obtuse());
        let initial_energy = model.energy(result.initial_obtuse, 0);
        let mut temperature = config.temperature(0);
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut rejected_moves = 0usize;

        info!(
            max_iterations = config.max_iterations,
            alpha = config.alpha,
            beta = config.beta,
            obtuse = result.initial_obtuse,
            "simulated annealing started"
        );

        for k in 0..=config.max_iterations {
            if result.final_obtuse == 0 {
                break;
            }
            temperature = config.temperature(k);
            let iteration = k + 1;
            let e_current = model.energy(cdt.count_obtuse(), result.steiner_points.len());

            for face in search::snapshot(cdt) {
                if !search::is_live_obtuse(cdt, &face) {
                    continue;
                }
                let strategy = config.strategies[rng.random_range(0..config.strategies.len())];
                if !search::is_applicable(cdt, &face, strategy) {
                    debug!(?face, "pericenter skipped: opposite edge is constrained");
                    continue;
                }
                let Some(trial) = search::run_trial(cdt, region, &face, strategy) else {
                    continue;
                };

                let e_next = model.energy(trial.obtuse_after, result.steiner_points.len() + 1);
                if !accept(e_current, e_next, temperature, rng) {
                    rejected_moves += 1;
                    debug!(%strategy, e_current, e_next, temperature, "move rejected");
                    continue;
                }

                accepted_moves += 1;
                if e_next < e_current {
                    improving_moves += 1;
                }
                debug!(%strategy, e_current, e_next, temperature, "move accepted");
                search::commit(cdt, region, &face, strategy, iteration, &mut result);
            }

            result.end_iteration(cdt.count_obtuse());
            debug!(iteration, temperature, obtuse = result.final_obtuse, "iteration finished");
        }

        let final_energy = model.energy(result.final_obtuse, result.steiner_points.len());
        info!(
            iterations = result.iterations,
            final_temperature = temperature,
            accepted_moves,
            improving_moves,
            rejected_moves,
            initial_obtuse = result.initial_obtuse,
            final_obtuse = result.final_obtuse,
            steiner_points = result.steiner_points.len(),
            initial_energy,
            final_energy,
            "simulated annealing finished"
        );

        Ok(SaResult {
            steiner_points: result.steiner_points,
            iterations: result.iterations,
            initial_obtuse: result.initial_obtuse,
            final_obtuse: result.final_obtuse,
            obtuse_history: result.obtuse_history,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            rejected_moves,
            initial_energy,
            final_energy,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::fixtures::*;
    use crate::steiner::Strategy;

    fn acceptance_ratio(delta: f64, temperature: f64, draws: usize) -> f64 {
        let mut rng = StdRng::seed_from_u64(42);
        let accepted = (0..draws)
            .filter(|_| accept(10.0, 10.0 + delta, temperature, &mut rng))
            .count();
        accepted as f64 / draws as f64
    }

    #[test]
    fn test_accept_improvement_always() {
        let mut rng = StdRng::seed_from_u64(1);
        for t in [0.0, 0.5, 1.0] {
            assert!(accept(5.0, 4.0, t, &mut rng));
        }
    }

    #[test]
    fn test_accept_zero_temperature_rejects_non_improving() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..1000 {
            assert!(!accept(5.0, 6.0, 0.0, &mut rng));
            assert!(!accept(5.0, 5.0, 0.0, &mut rng));
        }
    }

    #[test]
    fn test_accept_high_temperature_accepts_uphill() {
        let ratio = acceptance_ratio(1.0, 1e9, 2000);
        assert!(ratio > 0.99, "expected near-certain acceptance, got {ratio}");
    }

    #[test]
    fn test_accept_matches_boltzmann_probability() {
        // exp(-1) ~ 0.368
        let ratio = acceptance_ratio(1.0, 1.0, 20_000);
        assert!((ratio - (-1.0f64).exp()).abs() < 0.02, "got {ratio}");
    }

    #[test]
    fn test_sa_fixes_flat_triangle() {
        let (mut cdt, region) = flat_triangle();
        let config = SaConfig::default()
            .with_strategies(vec![Strategy::MaxEdge, Strategy::Projection])
            .with_seed(7);
        let result = SaRunner::run(&mut cdt, &region, &config).unwrap();

        assert_eq!(result.steiner_points.len(), 1);
        assert_eq!(result.steiner_points[0].point, p(2, 0));
        assert_eq!(result.iterations, 1);
        assert_eq!(result.accepted_moves, 1);
        assert_eq!(result.improving_moves, 1);
        assert_eq!(result.final_obtuse, 0);
        assert!((result.initial_energy - 3.0).abs() < 1e-12);
        assert!((result.final_energy - 1.0).abs() < 1e-12);
        assert!((result.final_temperature - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_sa_runs_full_schedule() {
        let (mut cdt, region) = flat_triangle();
        let config = SaConfig::default()
            .with_max_iterations(4)
            .with_strategies(vec![Strategy::Bisection])
            .with_seed(3);
        let result = SaRunner::run(&mut cdt, &region, &config).unwrap();

        assert_eq!(result.iterations, 5);
        assert_eq!(result.final_temperature, 0.0);
        assert!(result.steiner_points.is_empty());
        assert_eq!(result.accepted_moves + result.rejected_moves, 0);
    }

    #[test]
    fn test_sa_idempotent_on_non_obtuse_mesh() {
        let (mut cdt, region) = right_square();
        let before = cdt.edges();
        let result = SaRunner::run(&mut cdt, &region, &SaConfig::default().with_seed(5)).unwrap();
        assert!(result.steiner_points.is_empty());
        assert_eq!(result.iterations, 0);
        assert_eq!(cdt.edges(), before);
    }

    #[test]
    fn test_sa_reproducible_with_seed() {
        let config = SaConfig::default().with_max_iterations(3).with_seed(11);
        let (mut first, region) = l_shape();
        let (mut second, _) = l_shape();
        let a = SaRunner::run(&mut first, &region, &config).unwrap();
        let b = SaRunner::run(&mut second, &region, &config).unwrap();
        assert_eq!(a.steiner_points, b.steiner_points);
        assert_eq!(first.edges(), second.edges());
    }

    #[test]
    fn test_sa_points_stay_in_l_shape() {
        let (mut cdt, region) = l_shape();
        let config = SaConfig::default()
            .with_max_iterations(4)
            .with_strategies(Strategy::ALL.to_vec())
            .with_weights(1.0, 0.0);
        let mut rng = StdRng::seed_from_u64(99);
        let result = SaRunner::run_with_rng(&mut cdt, &region, &config, &mut rng).unwrap();

        for sp in &result.steiner_points {
            assert!(region.contains(&sp.point).is_admissible(), "{} escaped", sp.point);
        }
        assert_eq!(result.obtuse_history.len(), result.iterations);
        cdt.check_invariants();
    }

    #[test]
    fn test_sa_result_converts() {
        let (mut cdt, region) = flat_triangle();
        let config = SaConfig::default()
            .with_strategies(vec![Strategy::Projection])
            .with_seed(1);
        let sa = SaRunner::run(&mut cdt, &region, &config).unwrap();
        let refine = RefineResult::from(sa.clone());
        assert_eq!(refine.steiner_points, sa.steiner_points);
        assert_eq!(refine.final_obtuse, sa.final_obtuse);
    }
}
