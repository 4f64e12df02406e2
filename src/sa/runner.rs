//! SA execution loop.

use super::config::SaConfig;
use super::types::SaProblem;
use rand::Rng;
use u_numflow::random::create_rng;

/// Failure of a Simulated Annealing run.
#[derive(Debug, thiserror::Error)]
pub enum SaError<E> {
    /// The configuration did not pass [`SaConfig::validate`].
    #[error("invalid SaConfig: {0}")]
    InvalidConfig(String),

    /// A problem callback failed; the run stopped at that point.
    #[error(transparent)]
    Problem(E),
}

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
pub struct SaResult<S: Clone> {
    /// The best solution found.
    pub best: S,

    /// Cost of the best solution.
    pub best_cost: f64,

    /// Cost of the initial solution.
    pub initial_cost: f64,

    /// Total number of iterations (neighbor evaluations).
    pub iterations: usize,

    /// Final temperature when the algorithm stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of improving moves.
    pub improving_moves: usize,

    /// Best cost sampled at regular intervals for history tracking.
    pub cost_history: Vec<f64>,
}

/// Executes the Simulated Annealing algorithm.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA optimization with an RNG seeded from `config.seed`.
    pub fn run<P: SaProblem>(
        problem: &P,
        config: &SaConfig,
    ) -> Result<SaResult<P::Solution>, SaError<P::Error>> {
        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };
        Self::run_with_rng(problem, config, &mut rng)
    }

    /// Runs SA drawing every random decision from `rng`.
    ///
    /// `config.seed` is ignored; the caller owns seeding.
    pub fn run_with_rng<P: SaProblem, R: Rng>(
        problem: &P,
        config: &SaConfig,
        rng: &mut R,
    ) -> Result<SaResult<P::Solution>, SaError<P::Error>> {
        config.validate().map_err(SaError::InvalidConfig)?;

        let mut current = problem.initial_solution(rng).map_err(SaError::Problem)?;
        let mut current_cost = problem.cost(&current).map_err(SaError::Problem)?;
        let initial_cost = current_cost;
        let mut best = current.clone();
        let mut best_cost = current_cost;

        let mut temperature = config.initial_temperature;
        let mut total_iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;

        // Cost history: sample every N iterations
        let history_interval = 100.max(config.iterations_per_temperature);
        let mut cost_history = vec![best_cost];

        tracing::debug!(
            initial_temperature = config.initial_temperature,
            min_temperature = config.min_temperature,
            cooling = ?config.cooling,
            initial_cost,
            "SA: starting"
        );

        'levels: while temperature > config.min_temperature {
            for _ in 0..config.iterations_per_temperature {
                if config.max_iterations > 0 && total_iterations >= config.max_iterations {
                    break 'levels;
                }

                let neighbor = problem.neighbor(&current, rng).map_err(SaError::Problem)?;
                let neighbor_cost = problem.cost(&neighbor).map_err(SaError::Problem)?;
                let delta = neighbor_cost - current_cost;

                // Metropolis acceptance criterion
                let accept = if delta < 0.0 {
                    improving_moves += 1;
                    true
                } else {
                    let probability = (-delta / temperature).exp();
                    rng.random_range(0.0..1.0) < probability
                };

                if accept {
                    current = neighbor;
                    current_cost = neighbor_cost;
                    accepted_moves += 1;

                    if current_cost < best_cost {
                        tracing::trace!(
                            iteration = total_iterations,
                            temperature,
                            best_cost = current_cost,
                            "SA: new best"
                        );
                        best = current.clone();
                        best_cost = current_cost;
                    }
                }

                total_iterations += 1;

                if total_iterations.is_multiple_of(history_interval) {
                    cost_history.push(best_cost);
                }
            }

            temperature = config.cooling.next(temperature);
        }

        // Final history entry
        if cost_history
            .last()
            .is_none_or(|&last| (last - best_cost).abs() > 1e-15)
        {
            cost_history.push(best_cost);
        }

        tracing::debug!(
            iterations = total_iterations,
            accepted_moves,
            improving_moves,
            final_temperature = temperature,
            best_cost,
            "SA: finished"
        );

        Ok(SaResult {
            best,
            best_cost,
            initial_cost,
            iterations: total_iterations,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            cost_history,
        })
    }
}
