use std::collections::hash_map::{self, HashMap};
use std::hash::Hash;

use log::{debug, error};

use crate::tally_error::InputKeyError;
use crate::tally_lang::{Key, Value};

/// Occurrence counts of the distinct items of a sequence.
///
/// Every stored count is at least 1. Iteration order is whatever the
/// underlying `HashMap` yields; use `most_common` for a stable listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tally<T: Eq + Hash> {
    data: HashMap<T, usize>,
}

impl<T: Eq + Hash> Default for Tally<T> {
    fn default() -> Self {
        Self { data: HashMap::new() }
    }
}

impl<T: Eq + Hash> Tally<T> {
    fn insert(&mut self, item: T) {
        *self.data.entry(item).or_insert(0) += 1;
    }

    /// Count for `item`, 0 if it never occurred.
    pub fn get(&self, item: &T) -> usize {
        self.data.get(item).copied().unwrap_or(0)
    }

    /// Number of distinct items.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Sum of all counts, i.e. the length of the tallied sequence.
    pub fn total(&self) -> usize {
        self.data.values().sum()
    }

    pub fn keys(&self) -> hash_map::Keys<'_, T, usize> {
        self.data.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&T, usize)> {
        self.data.iter().map(|(item, &count)| (item, count))
    }
}

impl<T: Eq + Hash + Ord> Tally<T> {
    /// Entries by descending count, ties by ascending item.
    pub fn most_common(&self) -> Vec<(&T, usize)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|(a, ca), (b, cb)| cb.cmp(ca).then_with(|| a.cmp(b)));
        entries
    }
}

impl<T: Eq + Hash> FromIterator<T> for Tally<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tally = Tally::default();
        for item in iter {
            tally.insert(item);
        }
        tally
    }
}

impl<'a, T: Eq + Hash> IntoIterator for &'a Tally<T> {
    type Item = (&'a T, &'a usize);
    type IntoIter = hash_map::Iter<'a, T, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T: Eq + Hash> From<Tally<T>> for HashMap<T, usize> {
    fn from(tally: Tally<T>) -> Self {
        tally.data
    }
}

/// Counts each distinct item of `input` in a single pass.
pub fn tally<T, I>(input: I) -> Tally<T>
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
{
    let counts: Tally<T> = input.into_iter().collect();
    debug!("tallied {} items into {} keys", counts.total(), counts.len());
    counts
}

/// Tallies dynamically typed values, failing on the first one that has no
/// key form. No partial result is returned.
pub fn try_tally(input: &[Value]) -> Result<Tally<Key>, InputKeyError> {
    let keys = input
        .iter()
        .enumerate()
        .map(|(index, value)| {
            value.to_key().map_err(|reason| {
                error!("element {} ({:?}) is not a valid key", index, value);
                InputKeyError { index, reason }
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(tally(keys))
}
