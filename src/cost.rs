//! Social-discomfort cost of an allocation.
//!
//! Every pair of people sharing a room or a house is penalized for each
//! direction in which the preference is not returned. Room mates are also
//! house mates, so a mismatched room pair pays both tiers.
//!
//! # Double counting
//!
//! [`energy`] visits every *ordered* pair `(i, j)` with `i != j`, and
//! [`pairwise_penalty`] already charges both directions. Each unordered pair
//! is therefore charged twice per tier: two people who ignore each other in
//! one room cost `2 * 2 * ROOM_COST + 2 * 2 * HOUSE_COST = 440`. Scores are
//! compared against baselines computed this way; do not halve them.

use crate::alloc::{HouseAllocation, NameAllocation};
use crate::error::AllocError;
use crate::prefs::PreferenceStore;

/// Unit penalty for an unreturned preference between room mates.
pub const ROOM_COST: u64 = 100;

/// Unit penalty for an unreturned preference between house mates.
pub const HOUSE_COST: u64 = 10;

/// Penalty for placing `a` and `b` together.
///
/// Adds `unit` if `a` does not list `b`, and `unit` again if `b` does not
/// list `a`. The result is one of `0`, `unit` or `2 * unit`, and symmetric
/// in `a` and `b`.
///
/// # Examples
///
/// ```
/// use u_roomalloc::{cost::pairwise_penalty, PreferenceStore};
///
/// let mut store = PreferenceStore::new();
/// store.insert("adam", ["belinda"]);
/// store.insert("belinda", ["connor"]);
///
/// assert_eq!(pairwise_penalty(&store, "adam", "belinda", 1).unwrap(), 1);
/// ```
pub fn pairwise_penalty(
    store: &PreferenceStore,
    a: &str,
    b: &str,
    unit: u64,
) -> Result<u64, AllocError> {
    let mut penalty = 0;
    if !store.prefers(a, b)? {
        penalty += unit;
    }
    if !store.prefers(b, a)? {
        penalty += unit;
    }
    Ok(penalty)
}

/// Total cost of `allocation`. Lower is better.
pub fn energy(store: &PreferenceStore, allocation: &NameAllocation) -> Result<u64, AllocError> {
    energy_of_houses(store, &allocation.to_house_view())
}

/// Total cost of an allocation already grouped by house.
pub fn energy_of_houses(
    store: &PreferenceStore,
    houses: &HouseAllocation,
) -> Result<u64, AllocError> {
    let mut total = 0;
    for (_, rooms) in houses.houses() {
        for occupants in rooms.values() {
            total += ordered_pair_cost(store, occupants.iter().map(String::as_str), ROOM_COST)?;
        }
        let residents = rooms.values().flatten().map(String::as_str);
        total += ordered_pair_cost(store, residents, HOUSE_COST)?;
    }
    Ok(total)
}

/// Sum of [`pairwise_penalty`] over every ordered pair of distinct positions.
fn ordered_pair_cost<'a>(
    store: &PreferenceStore,
    group: impl Iterator<Item = &'a str>,
    unit: u64,
) -> Result<u64, AllocError> {
    let group: Vec<&str> = group.collect();
    let mut total = 0;
    for (i, a) in group.iter().enumerate() {
        for (j, b) in group.iter().enumerate() {
            if i == j {
                continue;
            }
            total += pairwise_penalty(store, a, b, unit)?;
        }
    }
    Ok(total)
}
