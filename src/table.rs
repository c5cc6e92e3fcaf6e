//! A fixed-capacity, linearly probed hash table.
//!
//! Every entry lives directly in a contiguous slot array. An entry whose home
//! slot (`hash % capacity`) is taken is placed in the next free slot, wrapping
//! at the end of the array, so each probe visits at most `capacity` slots.
//! Removal leaves a [`Slot::Tombstone`] so that entries further along the same
//! probe chain stay reachable; lookups stop at the first [`Slot::Empty`].

use alloc::borrow::ToOwned;
use alloc::boxed::Box;
use alloc::vec::Vec;
use core::borrow::Borrow;
use core::fmt;
use core::fmt::Debug;
use core::hash::Hash;
use core::iter::FusedIterator;
use core::marker::PhantomData;

use crate::Error;
use crate::slot::Slot;
use crate::strategy::DefaultHash;
use crate::strategy::EntryAllocator;
use crate::strategy::EqEquals;
use crate::strategy::KeyEquals;
use crate::strategy::KeyHasher;
use crate::strategy::ToOwnedAllocator;

/// Outcome of an insert probe.
enum Probe {
    /// The key is stored at this index.
    Found(usize),
    /// The key is absent; this is the first free slot on its probe chain.
    Vacant(usize),
    /// The key is absent and no slot is free.
    Full,
}

fn empty_slots<K, V>(capacity: usize) -> Box<[Slot<K, V>]> {
    core::iter::repeat_with(Slot::default)
        .take(capacity)
        .collect()
}

/// A hash table with a fixed number of slots and caller-supplied strategies.
///
/// `Table<K, V, H, E, A>` is keyed by `K` and maps to `V`, both of which may
/// be unsized (`str`, `[u8]`, ...). The table never copies, compares, or
/// hashes keys by itself:
///
/// - `H: KeyHasher<K>` picks the home slot,
/// - `E: KeyEquals<K>` recognizes a stored key,
/// - `A: EntryAllocator<K, V>` produces the owned `A::Key`/`A::Value` stored
///   in a slot, and releases them again.
///
/// The table does not grow by itself. An insert into a table whose slots are
/// all occupied fails; call [`resize`](Table::resize) to make room.
///
/// ## Example
///
/// ```rust
/// use linprobe::strategy::StrEq;
/// use linprobe::strategy::StrHash;
/// use linprobe::strategy::ToOwnedAllocator;
/// use linprobe::Table;
///
/// let mut table: Table<str, i32, _, _, _> =
///     Table::new(4, StrHash, StrEq, ToOwnedAllocator).unwrap();
/// assert!(table.insert("A", &1));
/// assert!(table.insert("B", &2));
/// assert!(table.insert("C", &3));
///
/// assert_eq!(table.len(), 3);
/// assert_eq!(table.get("A"), Some(&1));
/// assert_eq!(table.get("D"), None);
///
/// assert!(table.remove("B"));
/// assert_eq!(table.len(), 2);
/// assert!(!table.contains("B"));
/// assert_eq!(table.get("A"), Some(&1));
/// ```
pub struct Table<K, V, H, E, A>
where
    K: ?Sized,
    V: ?Sized,
    A: EntryAllocator<K, V>,
{
    slots: Box<[Slot<A::Key, A::Value>]>,
    populated: usize,

    hash: H,
    equals: E,
    allocator: A,

    _phantom: PhantomData<fn(&K, &V)>,
}

impl<K, V, H, E, A> Debug for Table<K, V, H, E, A>
where
    K: ?Sized,
    V: ?Sized,
    A: EntryAllocator<K, V>,
    A::Key: Debug,
    A::Value: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("capacity", &self.slots.len())
            .field("populated", &self.populated)
            .field(
                "slots",
                &SlotsDebug {
                    slots: &self.slots,
                },
            )
            .finish()
    }
}

struct SlotsDebug<'a, K, V> {
    slots: &'a [Slot<K, V>],
}

impl<K: Debug, V: Debug> Debug for SlotsDebug<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        for slot in self.slots {
            match slot {
                Slot::Empty => list.entry(&format_args!("..")),
                Slot::Tombstone => list.entry(&format_args!("xx")),
                Slot::Occupied { key, value } => {
                    list.entry(&format_args!("{key:?}: {value:?}"))
                }
            };
        }
        list.finish()
    }
}

impl<K, V> Table<K, V, DefaultHash, EqEquals, ToOwnedAllocator>
where
    K: Hash + PartialEq + ToOwned + ?Sized,
    V: ToOwned + ?Sized,
{
    /// Creates a table with `capacity` slots that hashes with
    /// [`DefaultHash`], compares with `==`, and stores owned copies made by
    /// [`ToOwned`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linprobe::Table;
    ///
    /// let mut table = Table::<str, str, _, _, _>::with_capacity(8).unwrap();
    /// table.insert("lang", "rust");
    /// assert_eq!(table.get("lang"), Some("rust"));
    /// assert_eq!(table.capacity(), 8);
    /// ```
    pub fn with_capacity(capacity: usize) -> Result<Self, Error> {
        Self::new(
            capacity,
            DefaultHash::default(),
            EqEquals,
            ToOwnedAllocator,
        )
    }
}

impl<K, V, H, E, A> Table<K, V, H, E, A>
where
    K: ?Sized,
    V: ?Sized,
    H: KeyHasher<K>,
    E: KeyEquals<K>,
    A: EntryAllocator<K, V>,
{
    /// Creates a table with exactly `capacity` empty slots and the given
    /// strategies.
    ///
    /// Fails with [`Error::ZeroCapacity`] if `capacity` is zero. Running out
    /// of memory for the slot array aborts.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linprobe::strategy::IdentityHash;
    /// use linprobe::strategy::IntEq;
    /// use linprobe::strategy::ToOwnedAllocator;
    /// use linprobe::Error;
    /// use linprobe::Table;
    ///
    /// let table: Table<i32, i32, _, _, _> =
    ///     Table::new(16, IdentityHash, IntEq, ToOwnedAllocator).unwrap();
    /// assert!(table.is_empty());
    ///
    /// let zero = Table::<i32, i32, _, _, _>::new(0, IdentityHash, IntEq, ToOwnedAllocator);
    /// assert_eq!(zero.err(), Some(Error::ZeroCapacity));
    /// ```
    pub fn new(capacity: usize, hash: H, equals: E, allocator: A) -> Result<Self, Error> {
        if capacity == 0 {
            return Err(Error::ZeroCapacity);
        }

        Ok(Self {
            slots: empty_slots(capacity),
            populated: 0,
            hash,
            equals,
            allocator,
            _phantom: PhantomData,
        })
    }

    /// Returns the number of slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of live entries.
    #[inline]
    pub fn len(&self) -> usize {
        debug_assert_eq!(
            self.populated,
            self.slots.iter().filter(|s| s.is_occupied()).count()
        );
        self.populated
    }

    /// Returns `true` if the table holds no live entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.populated == 0
    }

    /// Returns the allocator strategy.
    pub fn allocator(&self) -> &A {
        &self.allocator
    }

    /// Returns the hash strategy.
    pub fn hasher(&self) -> &H {
        &self.hash
    }

    /// Read-only view of the slot array, in index order.
    pub fn slots(&self) -> &[Slot<A::Key, A::Value>] {
        &self.slots
    }

    #[inline(always)]
    fn home(&self, key: &K) -> usize {
        (self.hash.hash(key) % self.slots.len() as u64) as usize
    }

    #[inline(always)]
    fn next(&self, index: usize) -> usize {
        if index + 1 == self.slots.len() {
            0
        } else {
            index + 1
        }
    }

    #[inline(always)]
    fn prev(&self, index: usize) -> usize {
        if index == 0 {
            self.slots.len() - 1
        } else {
            index - 1
        }
    }

    #[inline(always)]
    fn matches(&self, slot: &Slot<A::Key, A::Value>, key: &K) -> bool {
        slot.key_matches(|stored| {
            self.equals
                .equals(<A::Key as Borrow<K>>::borrow(stored), key)
        })
    }

    /// Index of the slot holding `key`.
    fn find_index(&self, key: &K) -> Option<usize> {
        let mut index = self.home(key);
        for _ in 0..self.slots.len() {
            let slot = &self.slots[index];
            if slot.is_empty() {
                return None;
            }
            if self.matches(slot, key) {
                return Some(index);
            }
            index = self.next(index);
        }

        None
    }

    /// Walks the probe chain of `key` looking for it, remembering the first
    /// free slot so that the key is only placed once it is known to be absent.
    fn probe_for_insert(&self, key: &K) -> Probe {
        let mut first_free = None;
        let mut index = self.home(key);
        for _ in 0..self.slots.len() {
            let slot = &self.slots[index];
            match slot {
                Slot::Empty => return Probe::Vacant(first_free.unwrap_or(index)),
                Slot::Tombstone => {
                    if first_free.is_none() {
                        first_free = Some(index);
                    }
                }
                Slot::Occupied { .. } => {
                    if self.matches(slot, key) {
                        return Probe::Found(index);
                    }
                }
            }
            index = self.next(index);
        }

        match first_free {
            Some(index) => Probe::Vacant(index),
            None => Probe::Full,
        }
    }

    /// Inserts `key` mapped to `value`, reporting why the insert failed.
    ///
    /// If `key` is already present, its entry is handed to
    /// [`EntryAllocator::deallocate`] before the replacement is allocated into
    /// the same slot, so the number of entries is unchanged. Otherwise the
    /// entry is allocated into the first free slot of the key's probe chain.
    ///
    /// # Errors
    ///
    /// [`Error::TableFull`] if the key is absent and every slot is occupied.
    /// The table is unchanged and the allocator is not called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linprobe::Error;
    /// use linprobe::Table;
    ///
    /// let mut table = Table::<u32, u32, _, _, _>::with_capacity(1).unwrap();
    /// assert_eq!(table.try_insert(&1, &10), Ok(()));
    /// assert_eq!(table.try_insert(&1, &11), Ok(()));
    /// assert_eq!(table.try_insert(&2, &20), Err(Error::TableFull { capacity: 1 }));
    /// assert_eq!(table.get(&1), Some(&11));
    /// ```
    pub fn try_insert(&mut self, key: &K, value: &V) -> Result<(), Error> {
        match self.probe_for_insert(key) {
            Probe::Found(index) => {
                if let Some((old_key, old_value)) = self.slots[index].take() {
                    self.allocator.deallocate(old_key, old_value);
                }
                let (key, value) = self.allocator.allocate(key, value);
                self.slots[index] = Slot::occupied(key, value);
                Ok(())
            }
            Probe::Vacant(index) => {
                let (key, value) = self.allocator.allocate(key, value);
                self.slots[index] = Slot::occupied(key, value);
                self.populated += 1;
                Ok(())
            }
            Probe::Full => {
                log::debug!(
                    "insert refused: all {} slots are occupied",
                    self.slots.len()
                );
                Err(Error::TableFull {
                    capacity: self.slots.len(),
                })
            }
        }
    }

    /// Inserts `key` mapped to `value`, replacing any previous value.
    ///
    /// Returns `false` only if the key is absent and the table is full. See
    /// [`try_insert`](Table::try_insert).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linprobe::Table;
    ///
    /// let mut table = Table::<str, i32, _, _, _>::with_capacity(4).unwrap();
    /// assert!(table.insert("x", &1));
    /// assert!(table.insert("x", &2));
    /// assert_eq!(table.len(), 1);
    /// assert_eq!(table.get("x"), Some(&2));
    /// ```
    pub fn insert(&mut self, key: &K, value: &V) -> bool {
        self.try_insert(key, value).is_ok()
    }

    /// Returns the value mapped to `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linprobe::Table;
    ///
    /// let mut table = Table::<str, i32, _, _, _>::with_capacity(4).unwrap();
    /// table.insert("a", &1);
    /// assert_eq!(table.get("a"), Some(&1));
    /// assert_eq!(table.get("b"), None);
    /// ```
    pub fn get(&self, key: &K) -> Option<&V> {
        let index = self.find_index(key)?;
        self.slots[index]
            .value()
            .map(<A::Value as Borrow<V>>::borrow)
    }

    /// Returns the stored key and value for `key`.
    pub fn get_key_value(&self, key: &K) -> Option<(&K, &V)> {
        let index = self.find_index(key)?;
        self.slots[index]
            .entry()
            .map(|(k, v)| {
                (
                    <A::Key as Borrow<K>>::borrow(k),
                    <A::Value as Borrow<V>>::borrow(v),
                )
            })
    }

    /// Returns a mutable reference to the stored value for `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linprobe::Table;
    ///
    /// let mut table = Table::<str, str, _, _, _>::with_capacity(4).unwrap();
    /// table.insert("greeting", "hello");
    /// if let Some(value) = table.get_mut("greeting") {
    ///     value.push_str(" world");
    /// }
    /// assert_eq!(table.get("greeting"), Some("hello world"));
    /// ```
    pub fn get_mut(&mut self, key: &K) -> Option<&mut A::Value> {
        let index = self.find_index(key)?;
        self.slots[index].value_mut()
    }

    /// Returns `true` if `key` is present.
    pub fn contains(&self, key: &K) -> bool {
        self.find_index(key).is_some()
    }

    /// Removes `key`, handing its entry to [`EntryAllocator::deallocate`].
    ///
    /// Returns `false` if the key was not present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linprobe::Table;
    ///
    /// let mut table = Table::<u8, u8, _, _, _>::with_capacity(4).unwrap();
    /// table.insert(&1, &1);
    /// assert!(table.remove(&1));
    /// assert!(!table.remove(&1));
    /// assert!(table.is_empty());
    /// ```
    pub fn remove(&mut self, key: &K) -> bool {
        let Some(index) = self.find_index(key) else {
            return false;
        };

        if let Some((key, value)) = self.slots[index].take() {
            self.populated -= 1;
            self.allocator.deallocate(key, value);
        }
        self.settle_tombstones(index);
        true
    }

    /// A tombstone directly followed by an empty slot ends no probe chain that
    /// the empty slot doesn't already end, so such a run of tombstones ending
    /// at `index` can be turned back into empty slots.
    fn settle_tombstones(&mut self, index: usize) {
        if !self.slots[self.next(index)].is_empty() {
            return;
        }

        let mut index = index;
        for _ in 0..self.slots.len() {
            if !self.slots[index].is_tombstone() {
                break;
            }
            self.slots[index] = Slot::Empty;
            index = self.prev(index);
        }
    }

    /// Rehashes every live entry into a fresh array of `new_capacity` slots.
    ///
    /// Tombstones are discarded, so resizing to the current capacity compacts
    /// the probe chains. Entries are moved, not reallocated: neither
    /// `allocate` nor `deallocate` is called.
    ///
    /// # Errors
    ///
    /// - [`Error::ZeroCapacity`] if `new_capacity` is zero.
    /// - [`Error::CapacityExceeded`] if the live entries do not fit.
    ///
    /// The table is unchanged on error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linprobe::Error;
    /// use linprobe::Table;
    ///
    /// let mut table = Table::<u32, u32, _, _, _>::with_capacity(2).unwrap();
    /// table.insert(&1, &1);
    /// table.insert(&2, &2);
    /// assert!(!table.insert(&3, &3));
    ///
    /// table.resize(8).unwrap();
    /// assert!(table.insert(&3, &3));
    /// assert_eq!(table.get(&1), Some(&1));
    ///
    /// assert_eq!(
    ///     table.resize(2),
    ///     Err(Error::CapacityExceeded { live: 3, requested: 2 })
    /// );
    /// ```
    pub fn resize(&mut self, new_capacity: usize) -> Result<(), Error> {
        if new_capacity == 0 {
            return Err(Error::ZeroCapacity);
        }
        if new_capacity < self.populated {
            log::debug!(
                "resize refused: {} live entries do not fit in {} slots",
                self.populated,
                new_capacity
            );
            return Err(Error::CapacityExceeded {
                live: self.populated,
                requested: new_capacity,
            });
        }

        log::trace!(
            "resizing table from {} to {} slots ({} live)",
            self.slots.len(),
            new_capacity,
            self.populated
        );

        let old = core::mem::replace(&mut self.slots, empty_slots(new_capacity));
        for slot in Vec::from(old) {
            if let Some((key, value)) = slot.into_entry() {
                let mut index = self.home(<A::Key as Borrow<K>>::borrow(&key));
                // A free slot exists: `populated <= new_capacity`.
                while !self.slots[index].is_empty() {
                    index = self.next(index);
                }
                self.slots[index] = Slot::occupied(key, value);
            }
        }

        Ok(())
    }

    /// Resets every slot to empty.
    ///
    /// Stored entries are dropped without being passed to
    /// [`EntryAllocator::deallocate`]; use
    /// [`release_all`](Table::release_all) when the allocator must see them.
    pub fn clear(&mut self) {
        log::trace!("clearing {} slots", self.slots.len());
        self.slots.fill_with(Slot::default);
        self.populated = 0;
    }

    /// Hands every live entry to [`EntryAllocator::deallocate`] and leaves
    /// the table empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linprobe::strategy::CountingAllocator;
    /// use linprobe::strategy::StrEq;
    /// use linprobe::strategy::StrHash;
    /// use linprobe::strategy::ToOwnedAllocator;
    /// use linprobe::Table;
    ///
    /// let alloc = CountingAllocator::new(ToOwnedAllocator);
    /// let mut table: Table<str, str, _, _, _> = Table::new(4, StrHash, StrEq, alloc).unwrap();
    /// table.insert("a", "1");
    /// table.insert("b", "2");
    /// assert_eq!(table.allocator().live(), 2);
    ///
    /// table.release_all();
    /// assert!(table.is_empty());
    /// assert_eq!(table.allocator().live(), 0);
    /// ```
    pub fn release_all(&mut self) {
        log::trace!("releasing {} live entries", self.populated);
        for slot in self.slots.iter_mut() {
            if let Some((key, value)) = core::mem::take(slot).into_entry() {
                self.allocator.deallocate(key, value);
            }
        }
        self.populated = 0;
    }

    /// Removes every entry, yielding the owned keys and values.
    ///
    /// The allocator is not involved; the caller owns the yielded entries.
    /// Dropping the iterator early still empties the table.
    pub fn drain(&mut self) -> Drain<'_, A::Key, A::Value> {
        Drain {
            slots: self.slots.iter_mut(),
            populated: &mut self.populated,
        }
    }

    /// Iterates over the live entries in slot order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linprobe::Table;
    ///
    /// let mut table = Table::<u32, u32, _, _, _>::with_capacity(8).unwrap();
    /// table.insert(&1, &10);
    /// table.insert(&2, &20);
    ///
    /// let mut entries: Vec<_> = table.iter().collect();
    /// entries.sort();
    /// assert_eq!(entries, [(&1, &10), (&2, &20)]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V, A::Key, A::Value> {
        Iter {
            slots: self.slots.iter(),
            remaining: self.populated,
            _phantom: PhantomData,
        }
    }

    /// Iterates over the live keys in slot order.
    pub fn keys(&self) -> Keys<'_, K, V, A::Key, A::Value> {
        Keys { inner: self.iter() }
    }

    /// Iterates over the live values in slot order.
    pub fn values(&self) -> Values<'_, K, V, A::Key, A::Value> {
        Values { inner: self.iter() }
    }

    /// Returns a [`Display`](fmt::Display) adapter that renders every slot in
    /// index order: live entries through `format`, free slots as `[None]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linprobe::strategy::IdentityHash;
    /// use linprobe::strategy::IntEq;
    /// use linprobe::strategy::ToOwnedAllocator;
    /// use linprobe::Table;
    ///
    /// let mut table: Table<u32, str, _, _, _> =
    ///     Table::new(3, IdentityHash, IntEq, ToOwnedAllocator).unwrap();
    /// table.insert(&1, "one");
    ///
    /// let dump = table.dump(|f, k, v| write!(f, "[{k} -> {v}]"));
    /// assert_eq!(dump.to_string(), "[None][1 -> one][None]");
    /// ```
    pub fn dump<F>(&self, format: F) -> Dump<'_, K, V, A::Key, A::Value, F>
    where
        F: Fn(&mut fmt::Formatter<'_>, &K, &V) -> fmt::Result,
    {
        Dump {
            slots: &self.slots,
            format,
            _phantom: PhantomData,
        }
    }

    /// Collects slot-state counts and the probe-length histogram.
    ///
    /// Requires the `stats` feature.
    #[cfg(feature = "stats")]
    pub fn probe_stats(&self) -> crate::stats::ProbeStats {
        let capacity = self.slots.len();
        let mut stats = crate::stats::ProbeStats::new(capacity);
        for (index, slot) in self.slots.iter().enumerate() {
            match slot {
                Slot::Empty => stats.empty += 1,
                Slot::Tombstone => stats.tombstones += 1,
                Slot::Occupied { key, .. } => {
                    let home = self.home(<A::Key as Borrow<K>>::borrow(key));
                    stats.record_probe((index + capacity - home) % capacity);
                }
            }
        }
        stats
    }
}

impl<'a, K, V, H, E, A> IntoIterator for &'a Table<K, V, H, E, A>
where
    K: ?Sized,
    V: ?Sized,
    H: KeyHasher<K>,
    E: KeyEquals<K>,
    A: EntryAllocator<K, V>,
{
    type IntoIter = Iter<'a, K, V, A::Key, A::Value>;
    type Item = (&'a K, &'a V);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over the live entries of a [`Table`].
///
/// Created by [`Table::iter`]. `SK`/`SV` are the stored (owned) forms that
/// borrow as `K`/`V`.
pub struct Iter<'a, K: ?Sized, V: ?Sized, SK, SV> {
    slots: core::slice::Iter<'a, Slot<SK, SV>>,
    remaining: usize,
    _phantom: PhantomData<(&'a K, &'a V)>,
}

impl<K: ?Sized, V: ?Sized, SK, SV> Clone for Iter<'_, K, V, SK, SV> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
            remaining: self.remaining,
            _phantom: PhantomData,
        }
    }
}

impl<'a, K, V, SK, SV> Iterator for Iter<'a, K, V, SK, SV>
where
    K: ?Sized + 'a,
    V: ?Sized + 'a,
    SK: Borrow<K>,
    SV: Borrow<V>,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        for slot in self.slots.by_ref() {
            if let Some((key, value)) = slot.entry() {
                self.remaining -= 1;
                return Some((key.borrow(), value.borrow()));
            }
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K, V, SK, SV> ExactSizeIterator for Iter<'a, K, V, SK, SV>
where
    K: ?Sized + 'a,
    V: ?Sized + 'a,
    SK: Borrow<K>,
    SV: Borrow<V>,
{
}

impl<'a, K, V, SK, SV> FusedIterator for Iter<'a, K, V, SK, SV>
where
    K: ?Sized + 'a,
    V: ?Sized + 'a,
    SK: Borrow<K>,
    SV: Borrow<V>,
{
}

/// An iterator over the live keys of a [`Table`]. Created by [`Table::keys`].
pub struct Keys<'a, K: ?Sized, V: ?Sized, SK, SV> {
    inner: Iter<'a, K, V, SK, SV>,
}

impl<'a, K, V, SK, SV> Iterator for Keys<'a, K, V, SK, SV>
where
    K: ?Sized + 'a,
    V: ?Sized + 'a,
    SK: Borrow<K>,
    SV: Borrow<V>,
{
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, K, V, SK, SV> ExactSizeIterator for Keys<'a, K, V, SK, SV>
where
    K: ?Sized + 'a,
    V: ?Sized + 'a,
    SK: Borrow<K>,
    SV: Borrow<V>,
{
}

/// An iterator over the live values of a [`Table`]. Created by
/// [`Table::values`].
pub struct Values<'a, K: ?Sized, V: ?Sized, SK, SV> {
    inner: Iter<'a, K, V, SK, SV>,
}

impl<'a, K, V, SK, SV> Iterator for Values<'a, K, V, SK, SV>
where
    K: ?Sized + 'a,
    V: ?Sized + 'a,
    SK: Borrow<K>,
    SV: Borrow<V>,
{
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, K, V, SK, SV> ExactSizeIterator for Values<'a, K, V, SK, SV>
where
    K: ?Sized + 'a,
    V: ?Sized + 'a,
    SK: Borrow<K>,
    SV: Borrow<V>,
{
}

/// A draining iterator over the entries of a [`Table`].
///
/// Created by [`Table::drain`]. Yields the stored entries by value and
/// leaves every slot empty, including slots it was not driven to.
pub struct Drain<'a, SK, SV> {
    slots: core::slice::IterMut<'a, Slot<SK, SV>>,
    populated: &'a mut usize,
}

impl<SK, SV> Iterator for Drain<'_, SK, SV> {
    type Item = (SK, SV);

    fn next(&mut self) -> Option<Self::Item> {
        for slot in self.slots.by_ref() {
            if let Some(entry) = core::mem::take(slot).into_entry() {
                *self.populated -= 1;
                return Some(entry);
            }
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (*self.populated, Some(*self.populated))
    }
}

impl<SK, SV> Drop for Drain<'_, SK, SV> {
    fn drop(&mut self) {
        for _ in &mut *self {}
    }
}

/// Slot-by-slot rendering of a [`Table`]. Created by [`Table::dump`].
pub struct Dump<'a, K: ?Sized, V: ?Sized, SK, SV, F> {
    slots: &'a [Slot<SK, SV>],
    format: F,
    _phantom: PhantomData<fn(&K, &V)>,
}

impl<K, V, SK, SV, F> fmt::Display for Dump<'_, K, V, SK, SV, F>
where
    K: ?Sized,
    V: ?Sized,
    SK: Borrow<K>,
    SV: Borrow<V>,
    F: Fn(&mut fmt::Formatter<'_>, &K, &V) -> fmt::Result,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in self.slots {
            match slot.entry() {
                Some((key, value)) => (self.format)(f, key.borrow(), value.borrow())?,
                None => f.write_str("[None]")?,
            }
        }
        Ok(())
    }
}
