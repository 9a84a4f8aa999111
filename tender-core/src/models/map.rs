use super::LotId;

/// Per-lot data of a single bid, in the order the lots were first inserted.
///
/// A bid holds at most a handful of lots and lookups happen once per lot
/// entry of a patch, so the map is an `IndexMap` with the Fx hasher.
#[derive(Debug, Clone, PartialEq)]
pub struct LotMap<V>(indexmap::IndexMap<LotId, V, rustc_hash::FxBuildHasher>);

impl<V> LotMap<V> {
    /// The entry for `lot`, if any.
    pub fn get(&self, lot: &LotId) -> Option<&V> {
        self.0.get(lot)
    }

    /// Whether `lot` has an entry.
    pub fn contains(&self, lot: &LotId) -> bool {
        self.0.contains_key(lot)
    }

    /// Record `value` for `lot`, returning the entry it replaced.
    pub fn insert(&mut self, lot: LotId, value: V) -> Option<V> {
        self.0.insert(lot, value)
    }

    /// Number of lots with an entry.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no lot has an entry.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&LotId, &V)> {
        self.0.iter()
    }
}

impl<V> Default for LotMap<V> {
    fn default() -> Self {
        Self(indexmap::IndexMap::default())
    }
}

// A later entry for the same lot replaces the earlier one but keeps its position.
impl<V> FromIterator<(LotId, V)> for LotMap<V> {
    fn from_iter<I: IntoIterator<Item = (LotId, V)>>(iter: I) -> Self {
        Self(indexmap::IndexMap::from_iter(iter))
    }
}
