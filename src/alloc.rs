//! Allocation representations and the lossless conversion between them.
//!
//! - [`NameAllocation`]: person → [`Slot`], the view the search operates on.
//! - [`HouseAllocation`]: house → room → occupants, the view scoring and
//!   room swaps operate on.
//!
//! Both are plain values. Converting never shares containers between the
//! input and the output.

use std::collections::{BTreeMap, HashMap};

use crate::error::AllocError;

/// A (house, room) address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slot {
    pub house: usize,
    pub room: usize,
}

impl Slot {
    pub fn new(house: usize, room: usize) -> Self {
        Self { house, room }
    }
}

/// Person-indexed allocation.
///
/// Each person maps to exactly one slot; assigning a person again moves
/// them. Insertion order is preserved for iteration and random key draws,
/// but equality compares the person → slot mapping only.
///
/// # Examples
///
/// ```
/// use u_roomalloc::{NameAllocation, Slot};
///
/// let mut alloc = NameAllocation::new();
/// alloc.assign("qq", Slot::new(1, 0));
/// alloc.assign("uu", Slot::new(1, 0));
///
/// let houses = alloc.to_house_view();
/// assert_eq!(houses.room(1, 0).unwrap(), ["qq", "uu"]);
/// assert_eq!(houses.to_name_view(), alloc);
/// ```
#[derive(Debug, Clone, Default)]
pub struct NameAllocation {
    entries: Vec<(String, Slot)>,
    index: HashMap<String, usize>,
}

impl NameAllocation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns `person` to `slot`, returning their previous slot if any.
    pub fn assign(&mut self, person: impl Into<String>, slot: Slot) -> Option<Slot> {
        let person = person.into();
        match self.index.get(&person) {
            Some(&i) => Some(std::mem::replace(&mut self.entries[i].1, slot)),
            None => {
                self.index.insert(person.clone(), self.entries.len());
                self.entries.push((person, slot));
                None
            }
        }
    }

    pub fn slot(&self, person: &str) -> Option<Slot> {
        self.index.get(person).map(|&i| self.entries[i].1)
    }

    /// Slot of the entry at position `i`; `i` must be below [`len`](Self::len).
    pub(crate) fn slot_at(&self, i: usize) -> Slot {
        self.entries[i].1
    }

    /// Exchanges the slots of the entries at positions `i` and `j`.
    pub(crate) fn swap_slots(&mut self, i: usize, j: usize) {
        let tmp = self.entries[i].1;
        self.entries[i].1 = self.entries[j].1;
        self.entries[j].1 = tmp;
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Slot)> {
        self.entries.iter().map(|(p, s)| (p.as_str(), *s))
    }

    pub fn people(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(p, _)| p.as_str())
    }

    /// Number of distinct slots with at least one occupant.
    pub fn occupied_slots(&self) -> usize {
        let mut slots: Vec<Slot> = self.entries.iter().map(|(_, s)| *s).collect();
        slots.sort_unstable();
        slots.dedup();
        slots.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Groups people by house and room.
    ///
    /// Occupants of a room appear in this allocation's insertion order.
    pub fn to_house_view(&self) -> HouseAllocation {
        let mut houses: BTreeMap<usize, BTreeMap<usize, Vec<String>>> = BTreeMap::new();
        for (person, slot) in &self.entries {
            houses
                .entry(slot.house)
                .or_default()
                .entry(slot.room)
                .or_default()
                .push(person.clone());
        }
        HouseAllocation { houses }
    }
}

impl PartialEq for NameAllocation {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(p, s)| other.slot(p) == Some(s))
    }
}

impl Eq for NameAllocation {}

impl<P: Into<String>> FromIterator<(P, Slot)> for NameAllocation {
    fn from_iter<T: IntoIterator<Item = (P, Slot)>>(iter: T) -> Self {
        let mut alloc = Self::new();
        for (person, slot) in iter {
            alloc.assign(person, slot);
        }
        alloc
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for NameAllocation {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (person, slot) in self.iter() {
            map.serialize_entry(person, &slot)?;
        }
        map.end()
    }
}

/// House/room-indexed allocation.
///
/// Houses and rooms are sparse integer keys created on demand. Each room
/// holds its occupants in insertion order; a person may appear only once
/// across the whole structure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HouseAllocation {
    houses: BTreeMap<usize, BTreeMap<usize, Vec<String>>>,
}

impl HouseAllocation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `person` to the room at `slot`, creating it if needed.
    pub fn push(&mut self, slot: Slot, person: impl Into<String>) -> Result<(), AllocError> {
        let person = person.into();
        if self.rooms().any(|(_, occupants)| occupants.contains(&person)) {
            return Err(AllocError::DuplicatePerson(person));
        }
        self.houses
            .entry(slot.house)
            .or_default()
            .entry(slot.room)
            .or_default()
            .push(person);
        Ok(())
    }

    /// Occupants of the room at (`house`, `room`).
    pub fn room(&self, house: usize, room: usize) -> Result<&[String], AllocError> {
        self.houses
            .get(&house)
            .ok_or(AllocError::MissingHouse { house })?
            .get(&room)
            .map(Vec::as_slice)
            .ok_or(AllocError::MissingRoom { house, room })
    }

    /// Rooms of `house`, keyed by room index.
    pub fn house(&self, house: usize) -> Result<&BTreeMap<usize, Vec<String>>, AllocError> {
        self.houses
            .get(&house)
            .ok_or(AllocError::MissingHouse { house })
    }

    /// Exchanges the full occupant lists of two rooms.
    pub fn swap_rooms(&mut self, a: Slot, b: Slot) -> Result<(), AllocError> {
        if a == b {
            self.room(a.house, a.room)?;
            return Ok(());
        }
        let from = self.take_room(a)?;
        let to = match self.take_room(b) {
            Ok(to) => to,
            Err(e) => {
                self.put_room(a, from);
                return Err(e);
            }
        };
        self.put_room(a, to);
        self.put_room(b, from);
        Ok(())
    }

    fn take_room(&mut self, slot: Slot) -> Result<Vec<String>, AllocError> {
        let rooms = self
            .houses
            .get_mut(&slot.house)
            .ok_or(AllocError::MissingHouse { house: slot.house })?;
        rooms
            .get_mut(&slot.room)
            .map(std::mem::take)
            .ok_or(AllocError::MissingRoom {
                house: slot.house,
                room: slot.room,
            })
    }

    fn put_room(&mut self, slot: Slot, occupants: Vec<String>) {
        self.houses
            .entry(slot.house)
            .or_default()
            .insert(slot.room, occupants);
    }

    pub fn house_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.houses.keys().copied()
    }

    /// Every room with its address, houses and rooms ascending.
    pub fn rooms(&self) -> impl Iterator<Item = (Slot, &[String])> {
        self.houses.iter().flat_map(|(&house, rooms)| {
            rooms
                .iter()
                .map(move |(&room, occupants)| (Slot::new(house, room), occupants.as_slice()))
        })
    }

    /// Houses with their rooms, ascending.
    pub fn houses(&self) -> impl Iterator<Item = (usize, &BTreeMap<usize, Vec<String>>)> {
        self.houses.iter().map(|(&h, rooms)| (h, rooms))
    }

    pub fn house_count(&self) -> usize {
        self.houses.len()
    }

    pub fn room_count(&self) -> usize {
        self.houses.values().map(BTreeMap::len).sum()
    }

    /// Maps every occupant back to their slot.
    pub fn to_name_view(&self) -> NameAllocation {
        let mut out = NameAllocation::new();
        for (slot, occupants) in self.rooms() {
            for person in occupants {
                out.assign(person.clone(), slot);
            }
        }
        out
    }
}
