//! Preference store.
//!
//! Maps each person to the people they would accept as co-residents.
//! Lists need not be reciprocal; order is kept but irrelevant to scoring.
//!
//! The store is an ordinary value: build it once, pass it by reference to
//! the cost model and the search, and [`clear`](PreferenceStore::clear) it
//! when done.

use std::collections::BTreeMap;

use crate::error::AllocError;

/// Person → ordered preference list.
///
/// People are kept sorted by identifier so that iteration (and therefore
/// any seeded shuffle built on top of it) is reproducible.
///
/// # Examples
///
/// ```
/// use u_roomalloc::PreferenceStore;
///
/// let mut store = PreferenceStore::new();
/// store.insert("qq", ["uu"]);
/// store.insert("uu", ["qq"]);
///
/// assert!(store.prefers("qq", "uu").unwrap());
/// assert_eq!(store.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreferenceStore {
    prefs: BTreeMap<String, Vec<String>>,
}

impl PreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets (or replaces) the preference list of `person`.
    pub fn insert<P, I, S>(&mut self, person: P, preferred: I)
    where
        P: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prefs.insert(
            person.into(),
            preferred.into_iter().map(Into::into).collect(),
        );
    }

    /// Inserts every `(person, list)` pair, replacing existing entries.
    pub fn load<P, I, S>(&mut self, entries: impl IntoIterator<Item = (P, I)>)
    where
        P: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for (person, preferred) in entries {
            self.insert(person, preferred);
        }
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        self.prefs.clear();
    }

    /// Returns the preference list of `person`.
    pub fn get(&self, person: &str) -> Result<&[String], AllocError> {
        self.prefs
            .get(person)
            .map(Vec::as_slice)
            .ok_or_else(|| AllocError::UnknownPerson(person.to_string()))
    }

    /// Whether `person` lists `other`.
    pub fn prefers(&self, person: &str, other: &str) -> Result<bool, AllocError> {
        Ok(self.get(person)?.iter().any(|p| p == other))
    }

    pub fn contains(&self, person: &str) -> bool {
        self.prefs.contains_key(person)
    }

    /// All known people, sorted.
    pub fn people(&self) -> impl Iterator<Item = &str> {
        self.prefs.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.prefs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prefs.is_empty()
    }
}

impl<P, I, S> FromIterator<(P, I)> for PreferenceStore
where
    P: Into<String>,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (P, I)>>(iter: T) -> Self {
        let mut store = Self::new();
        store.load(iter);
        store
    }
}
