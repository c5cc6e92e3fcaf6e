//! The cell type backing a [`Table`](crate::Table).

/// One cell of the table.
///
/// A slot is `Occupied` if and only if it holds a key. `Tombstone` marks a
/// cell whose entry was removed: it can be reused by an insert, but lookups
/// must keep probing past it because later entries of the same probe chain
/// may live beyond it. `Empty` cells were never used since the last clear or
/// resize and end every probe chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot<K, V> {
    /// Never used since the last clear or resize.
    Empty,
    /// Holds a live entry.
    Occupied {
        /// The stored key, as produced by the allocator.
        key: K,
        /// The stored value, as produced by the allocator.
        value: V,
    },
    /// Previously occupied, now logically deleted.
    Tombstone,
}

impl<K, V> Default for Slot<K, V> {
    fn default() -> Self {
        Slot::Empty
    }
}

impl<K, V> Slot<K, V> {
    #[inline(always)]
    pub(crate) fn occupied(key: K, value: V) -> Self {
        Slot::Occupied { key, value }
    }

    /// Returns `true` if the slot was never used.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }

    /// Returns `true` if the slot holds a live entry.
    #[inline(always)]
    pub fn is_occupied(&self) -> bool {
        matches!(self, Slot::Occupied { .. })
    }

    /// Returns `true` if the slot held an entry that has since been removed.
    #[inline(always)]
    pub fn is_tombstone(&self) -> bool {
        matches!(self, Slot::Tombstone)
    }

    /// Returns `true` if an insert may place a new entry here.
    #[inline(always)]
    pub fn is_free(&self) -> bool {
        !self.is_occupied()
    }

    /// The stored key, if the slot is occupied.
    #[inline(always)]
    pub fn key(&self) -> Option<&K> {
        match self {
            Slot::Occupied { key, .. } => Some(key),
            _ => None,
        }
    }

    /// The stored value, if the slot is occupied.
    #[inline(always)]
    pub fn value(&self) -> Option<&V> {
        match self {
            Slot::Occupied { value, .. } => Some(value),
            _ => None,
        }
    }

    #[inline(always)]
    pub(crate) fn value_mut(&mut self) -> Option<&mut V> {
        match self {
            Slot::Occupied { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Both halves of the stored entry, if the slot is occupied.
    #[inline(always)]
    pub fn entry(&self) -> Option<(&K, &V)> {
        match self {
            Slot::Occupied { key, value } => Some((key, value)),
            _ => None,
        }
    }

    /// Applies `eq` to the stored key. Free slots never match.
    #[inline(always)]
    pub(crate) fn key_matches(&self, eq: impl FnOnce(&K) -> bool) -> bool {
        match self {
            Slot::Occupied { key, .. } => eq(key),
            _ => false,
        }
    }

    /// Moves the entry out, leaving a tombstone behind. Free slots are left as
    /// they are.
    #[inline]
    pub(crate) fn take(&mut self) -> Option<(K, V)> {
        match self {
            Slot::Occupied { .. } => core::mem::replace(self, Slot::Tombstone).into_entry(),
            _ => None,
        }
    }

    /// Moves the entry out, leaving the slot empty.
    #[inline]
    pub(crate) fn into_entry(self) -> Option<(K, V)> {
        match self {
            Slot::Occupied { key, value } => Some((key, value)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        let slot: Slot<u32, u32> = Slot::default();
        assert!(slot.is_empty());
        assert!(slot.is_free());
        assert!(!slot.is_occupied());
        assert!(!slot.is_tombstone());
        assert_eq!(slot.key(), None);
    }

    #[test]
    fn occupied_iff_key_present() {
        let slot = Slot::occupied(7u32, "seven");
        assert!(slot.is_occupied());
        assert!(!slot.is_free());
        assert_eq!(slot.key(), Some(&7));
        assert_eq!(slot.value(), Some(&"seven"));
        assert_eq!(slot.entry(), Some((&7, &"seven")));
    }

    #[test]
    fn take_leaves_tombstone() {
        let mut slot = Slot::occupied(1u8, 2u8);
        assert_eq!(slot.take(), Some((1, 2)));
        assert!(slot.is_tombstone());
        assert!(slot.is_free());
        assert_eq!(slot.key(), None);

        assert_eq!(slot.take(), None);
        assert!(slot.is_tombstone());

        let mut empty: Slot<u8, u8> = Slot::Empty;
        assert_eq!(empty.take(), None);
        assert!(empty.is_empty());
    }

    #[test]
    fn free_slots_never_match() {
        let empty: Slot<u8, u8> = Slot::Empty;
        let tomb: Slot<u8, u8> = Slot::Tombstone;
        assert!(!empty.key_matches(|_| true));
        assert!(!tomb.key_matches(|_| true));
        assert!(Slot::occupied(3u8, ()).key_matches(|&k| k == 3));
        assert!(!Slot::occupied(3u8, ()).key_matches(|&k| k == 4));
    }
}
