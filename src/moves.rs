//! Neighbor moves over a [`NameAllocation`].
//!
//! Two operators, both pure: they read the input, work on their own copy
//! and return it.
//!
//! - [`switch_people`]: two people in different slots trade slots.
//! - [`switch_rooms`]: two rooms trade their entire occupant lists.
//!
//! Each operator checks up front that two distinguishable slots exist and
//! reports [`AllocError::NoValidMove`] otherwise. [`switch_people`] then draws
//! its second person only among those in a different slot, so it always
//! succeeds. [`switch_rooms`] uses rejection sampling with a capped number
//! of draws; a single draw hits two distinct rooms with probability at
//! least one half.

use rand::Rng;

use crate::alloc::{HouseAllocation, NameAllocation, Slot};
use crate::error::AllocError;

/// Probability that [`select_move`] picks [`switch_people`].
pub const SWITCH_PEOPLE_PROBABILITY: f64 = 0.25;

/// Default cap on rejection-sampling draws in [`switch_rooms`].
pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000;

const SWITCH_PEOPLE: &str = "switch_people";
const SWITCH_ROOMS: &str = "switch_rooms";

/// Which operator produced a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    SwitchPeople,
    SwitchRooms,
}

/// Swaps the slots of two people currently in different slots.
///
/// The first person is drawn uniformly from the allocation's keys, the
/// second uniformly among the people not sharing the first one's slot.
///
/// # Errors
///
/// [`AllocError::NoValidMove`] if every person shares one slot (or there
/// are fewer than two people).
pub fn switch_people<R: Rng>(
    alloc: &NameAllocation,
    rng: &mut R,
) -> Result<NameAllocation, AllocError> {
    if alloc.occupied_slots() < 2 {
        return Err(AllocError::NoValidMove {
            operator: SWITCH_PEOPLE,
            reason: format!(
                "{} people occupy fewer than two distinct slots",
                alloc.len()
            ),
        });
    }

    let i = rng.random_range(0..alloc.len());
    let from = alloc.slot_at(i);
    let others: Vec<usize> = (0..alloc.len())
        .filter(|&j| alloc.slot_at(j) != from)
        .collect();
    // At least two occupied slots, so `others` is never empty.
    let j = others[rng.random_range(0..others.len())];

    let mut next = alloc.clone();
    next.swap_slots(i, j);
    Ok(next)
}

/// Swaps the occupant lists of two distinct rooms.
///
/// Each address is drawn by picking a house uniformly among existing houses,
/// then a room uniformly among that house's rooms. The two rooms may be in
/// the same house.
///
/// # Errors
///
/// - [`AllocError::NoValidMove`] if the allocation has fewer than two rooms.
/// - [`AllocError::MovesExhausted`] if `max_attempts` draws all failed.
pub fn switch_rooms<R: Rng>(
    alloc: &NameAllocation,
    rng: &mut R,
    max_attempts: usize,
) -> Result<NameAllocation, AllocError> {
    let mut houses = alloc.to_house_view();
    if houses.room_count() < 2 {
        return Err(AllocError::NoValidMove {
            operator: SWITCH_ROOMS,
            reason: format!("{} room(s) in total", houses.room_count()),
        });
    }

    let house_keys: Vec<usize> = houses.house_indices().collect();
    for _ in 0..max_attempts {
        let from = random_room(&houses, &house_keys, rng)?;
        let to = random_room(&houses, &house_keys, rng)?;
        if from == to {
            continue;
        }
        houses.swap_rooms(from, to)?;
        return Ok(houses.to_name_view());
    }

    Err(AllocError::MovesExhausted {
        operator: SWITCH_ROOMS,
        attempts: max_attempts,
    })
}

/// Applies [`switch_people`] with probability [`SWITCH_PEOPLE_PROBABILITY`],
/// otherwise [`switch_rooms`].
///
/// If the chosen operator has no valid move the other one is tried before
/// giving up.
pub fn select_move<R: Rng>(
    alloc: &NameAllocation,
    rng: &mut R,
    max_attempts: usize,
) -> Result<(MoveKind, NameAllocation), AllocError> {
    let first = if rng.random_bool(SWITCH_PEOPLE_PROBABILITY) {
        MoveKind::SwitchPeople
    } else {
        MoveKind::SwitchRooms
    };

    match apply(first, alloc, rng, max_attempts) {
        Err(AllocError::NoValidMove { .. }) => {
            let second = match first {
                MoveKind::SwitchPeople => MoveKind::SwitchRooms,
                MoveKind::SwitchRooms => MoveKind::SwitchPeople,
            };
            tracing::warn!(?first, ?second, "no valid move, trying the other operator");
            apply(second, alloc, rng, max_attempts).map(|next| (second, next))
        }
        other => other.map(|next| (first, next)),
    }
}

fn apply<R: Rng>(
    kind: MoveKind,
    alloc: &NameAllocation,
    rng: &mut R,
    max_attempts: usize,
) -> Result<NameAllocation, AllocError> {
    match kind {
        MoveKind::SwitchPeople => switch_people(alloc, rng),
        MoveKind::SwitchRooms => switch_rooms(alloc, rng, max_attempts),
    }
}

fn random_room<R: Rng>(
    houses: &HouseAllocation,
    house_keys: &[usize],
    rng: &mut R,
) -> Result<Slot, AllocError> {
    let house = house_keys[rng.random_range(0..house_keys.len())];
    let rooms = houses.house(house)?;
    if rooms.is_empty() {
        return Err(AllocError::MissingRoom { house, room: 0 });
    }
    let pick = rng.random_range(0..rooms.len());
    let room = rooms
        .keys()
        .nth(pick)
        .copied()
        .ok_or(AllocError::MissingRoom { house, room: pick })?;
    Ok(Slot::new(house, room))
}
