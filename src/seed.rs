//! Initial allocation builder.

use rand::Rng;

use crate::alloc::{NameAllocation, Slot};
use crate::error::AllocError;
use crate::prefs::PreferenceStore;

/// Shuffles every known person and fills slots greedily.
///
/// Rooms are filled to `max_people_per_room` before moving to the next
/// room; after `max_rooms_per_house` rooms the next house is opened. As
/// many houses are created as the population needs, and the last room may
/// be partially filled.
///
/// # Errors
///
/// [`AllocError::InvalidLayout`] if either capacity is zero.
///
/// # Examples
///
/// ```
/// use u_roomalloc::{seed::build_random, PreferenceStore};
///
/// let store: PreferenceStore = [("a", ["b"]), ("b", ["a"]), ("c", ["a"])]
///     .into_iter()
///     .collect();
/// let mut rng = u_numflow::random::create_rng(1);
/// let alloc = build_random(&store, 2, 2, &mut rng).unwrap();
/// assert_eq!(alloc.len(), 3);
/// ```
pub fn build_random<R: Rng>(
    store: &PreferenceStore,
    max_rooms_per_house: usize,
    max_people_per_room: usize,
    rng: &mut R,
) -> Result<NameAllocation, AllocError> {
    if max_rooms_per_house == 0 {
        return Err(AllocError::InvalidLayout(
            "max_rooms_per_house must be at least 1".into(),
        ));
    }
    if max_people_per_room == 0 {
        return Err(AllocError::InvalidLayout(
            "max_people_per_room must be at least 1".into(),
        ));
    }

    let mut people: Vec<&str> = store.people().collect();
    u_numflow::random::shuffle(&mut people, rng);

    let mut alloc = NameAllocation::new();
    let (mut house, mut room, mut occupants) = (0, 0, 0);
    for person in people {
        alloc.assign(person, Slot::new(house, room));
        occupants += 1;
        if occupants >= max_people_per_room {
            occupants = 0;
            room += 1;
            if room >= max_rooms_per_house {
                room = 0;
                house += 1;
            }
        }
    }
    Ok(alloc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::tests::sample_store;
    use u_numflow::random::create_rng;

    fn slot_counts(alloc: &NameAllocation) -> Vec<(Slot, usize)> {
        let mut counts: Vec<(Slot, usize)> = alloc
            .to_house_view()
            .rooms()
            .map(|(s, o)| (s, o.len()))
            .collect();
        counts.sort();
        counts
    }

    #[test]
    fn test_fill_order_three_by_two() {
        let store = sample_store();
        let alloc = build_random(&store, 3, 2, &mut create_rng(42)).unwrap();
        assert_eq!(alloc.len(), 8);
        assert_eq!(
            slot_counts(&alloc),
            vec![
                (Slot::new(0, 0), 2),
                (Slot::new(0, 1), 2),
                (Slot::new(0, 2), 2),
                (Slot::new(1, 0), 2),
            ]
        );
    }

    #[test]
    fn test_partial_last_room() {
        let store = sample_store();
        let alloc = build_random(&store, 2, 3, &mut create_rng(7)).unwrap();
        assert_eq!(
            slot_counts(&alloc),
            vec![
                (Slot::new(0, 0), 3),
                (Slot::new(0, 1), 3),
                (Slot::new(1, 0), 2),
            ]
        );
    }

    #[test]
    fn test_everyone_placed_once() {
        let store = sample_store();
        let alloc = build_random(&store, 1, 1, &mut create_rng(3)).unwrap();
        let mut placed: Vec<&str> = alloc.people().collect();
        placed.sort_unstable();
        let expected: Vec<&str> = store.people().collect();
        assert_eq!(placed, expected);
        // One person per house.
        assert_eq!(alloc.to_house_view().house_count(), 8);
    }

    #[test]
    fn test_same_seed_same_allocation() {
        let store = sample_store();
        let a = build_random(&store, 3, 2, &mut create_rng(99)).unwrap();
        let b = build_random(&store, 3, 2, &mut create_rng(99)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let store = sample_store();
        let mut rng = create_rng(1);
        assert!(matches!(
            build_random(&store, 0, 2, &mut rng),
            Err(AllocError::InvalidLayout(_))
        ));
        assert!(matches!(
            build_random(&store, 3, 0, &mut rng),
            Err(AllocError::InvalidLayout(_))
        ));
    }

    #[test]
    fn test_empty_store() {
        let alloc = build_random(&PreferenceStore::new(), 3, 2, &mut create_rng(1)).unwrap();
        assert!(alloc.is_empty());
    }
}
