//! Core trait for Simulated Annealing.

use rand::Rng;

/// Defines a Simulated Annealing problem.
///
/// The user implements neighbor generation and cost evaluation.
/// The SA framework handles temperature management, acceptance
/// criterion, and cooling.
///
/// Every callback is fallible: a problem whose state turns out to be
/// inconsistent (an unknown key, no admissible neighbor) reports it and
/// the runner stops with that error instead of continuing on bad data.
///
/// # Minimization
///
/// SA minimizes the cost function. For maximization, negate the cost.
///
/// # Examples
///
/// ```ignore
/// struct TspProblem { distances: Vec<Vec<f64>> }
///
/// impl SaProblem for TspProblem {
///     type Solution = Vec<usize>;
///     type Error = std::convert::Infallible;
///
///     fn initial_solution<R: Rng>(&self, rng: &mut R) -> Result<Vec<usize>, Self::Error> {
///         let mut tour: Vec<usize> = (0..self.distances.len()).collect();
///         u_numflow::random::shuffle(&mut tour, rng);
///         Ok(tour)
///     }
///
///     fn cost(&self, tour: &Vec<usize>) -> Result<f64, Self::Error> {
///         Ok(tour.windows(2).map(|w| self.distances[w[0]][w[1]]).sum())
///     }
///
///     fn neighbor<R: Rng>(&self, tour: &Vec<usize>, rng: &mut R) -> Result<Vec<usize>, Self::Error> {
///         let mut new = tour.clone();
///         let i = rng.random_range(0..new.len());
///         let j = rng.random_range(0..new.len());
///         new.swap(i, j);
///         Ok(new)
///     }
/// }
/// ```
///
/// # References
///
/// Kirkpatrick et al. (1983), Cerny (1985)
pub trait SaProblem {
    /// The solution representation type.
    type Solution: Clone;

    /// Error raised by any callback.
    type Error: std::error::Error;

    /// Creates the initial solution.
    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Result<Self::Solution, Self::Error>;

    /// Computes the cost of a solution. Lower is better.
    fn cost(&self, solution: &Self::Solution) -> Result<f64, Self::Error>;

    /// Generates a neighbor of the current solution.
    ///
    /// Must return a fresh value; `solution` is the runner's accepted state
    /// and stays untouched whether or not the neighbor is accepted.
    fn neighbor<R: Rng>(
        &self,
        solution: &Self::Solution,
        rng: &mut R,
    ) -> Result<Self::Solution, Self::Error>;
}
