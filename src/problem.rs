//! Room allocation as a Simulated Annealing problem.

use rand::Rng;

use crate::alloc::NameAllocation;
use crate::config::AllocatorConfig;
use crate::cost;
use crate::error::AllocError;
use crate::moves;
use crate::prefs::PreferenceStore;
use crate::sa::SaProblem;
use crate::seed;

/// Binds the store and layout to the SA callbacks.
///
/// - initial state: [`seed::build_random`]
/// - cost: [`cost::energy`]
/// - neighbor: [`moves::select_move`]
#[derive(Debug, Clone)]
pub struct RoomAllocProblem<'a> {
    store: &'a PreferenceStore,
    max_rooms_per_house: usize,
    max_people_per_room: usize,
    max_move_attempts: usize,
}

impl<'a> RoomAllocProblem<'a> {
    pub fn new(store: &'a PreferenceStore, config: &AllocatorConfig) -> Self {
        Self {
            store,
            max_rooms_per_house: config.max_rooms_per_house,
            max_people_per_room: config.max_people_per_room,
            max_move_attempts: config.max_move_attempts,
        }
    }
}

impl SaProblem for RoomAllocProblem<'_> {
    type Solution = NameAllocation;
    type Error = AllocError;

    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Result<NameAllocation, AllocError> {
        seed::build_random(
            self.store,
            self.max_rooms_per_house,
            self.max_people_per_room,
            rng,
        )
    }

    fn cost(&self, solution: &NameAllocation) -> Result<f64, AllocError> {
        cost::energy(self.store, solution).map(|e| e as f64)
    }

    fn neighbor<R: Rng>(
        &self,
        solution: &NameAllocation,
        rng: &mut R,
    ) -> Result<NameAllocation, AllocError> {
        moves::select_move(solution, rng, self.max_move_attempts).map(|(_, next)| next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::tests::sample_store;
    use u_numflow::random::create_rng;

    #[test]
    fn test_callbacks_wire_components() {
        let store = sample_store();
        let problem = RoomAllocProblem::new(&store, &AllocatorConfig::default());
        let mut rng = create_rng(5);

        let initial = problem.initial_solution(&mut rng).unwrap();
        assert_eq!(initial.len(), store.len());

        let cost = problem.cost(&initial).unwrap();
        assert_eq!(cost, cost::energy(&store, &initial).unwrap() as f64);

        let next = problem.neighbor(&initial, &mut rng).unwrap();
        assert_ne!(next, initial);
        assert_eq!(next.len(), initial.len());
    }

    #[test]
    fn test_single_person_has_no_neighbor() {
        let store: PreferenceStore = [("solo", Vec::<&str>::new())].into_iter().collect();
        let problem = RoomAllocProblem::new(&store, &AllocatorConfig::default());
        let mut rng = create_rng(1);
        let initial = problem.initial_solution(&mut rng).unwrap();
        assert!(matches!(
            problem.neighbor(&initial, &mut rng),
            Err(AllocError::NoValidMove { .. })
        ));
    }
}
