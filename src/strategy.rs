//! Caller-supplied behavior for a [`Table`](crate::Table).
//!
//! A table never inspects keys or values on its own. Every operation is
//! expressed through four roles:
//!
//! - [`KeyHasher`] maps a key to a `u64`; the home slot is `hash % capacity`.
//! - [`KeyEquals`] decides whether two keys are the same key.
//! - [`EntryAllocator::allocate`] turns borrowed input into the owned form
//!   stored in a slot.
//! - [`EntryAllocator::deallocate`] releases what `allocate` produced.
//!
//! Hashers and equality predicates can be plain closures or functions. The
//! allocate/deallocate pair lives on one trait so the two halves can never be
//! mismatched; [`FnAllocator`] builds one from two closures.

use core::borrow::Borrow;
use core::hash::BuildHasher;
use core::hash::Hash;
use core::hash::Hasher;
use core::marker::PhantomData;

use alloc::borrow::ToOwned;

/// Maps a key to a hash value.
pub trait KeyHasher<K: ?Sized> {
    /// Hashes `key`.
    fn hash(&self, key: &K) -> u64;
}

impl<K: ?Sized, F> KeyHasher<K> for F
where
    F: Fn(&K) -> u64,
{
    #[inline(always)]
    fn hash(&self, key: &K) -> u64 {
        self(key)
    }
}

/// Decides key equivalence.
///
/// Implementations must be consistent with the paired [`KeyHasher`]: keys
/// that compare equal must hash equally.
pub trait KeyEquals<K: ?Sized> {
    /// Returns `true` if `lhs` and `rhs` denote the same key.
    fn equals(&self, lhs: &K, rhs: &K) -> bool;
}

impl<K: ?Sized, F> KeyEquals<K> for F
where
    F: Fn(&K, &K) -> bool,
{
    #[inline(always)]
    fn equals(&self, lhs: &K, rhs: &K) -> bool {
        self(lhs, rhs)
    }
}

/// Produces and releases the owned key/value stored in a slot.
///
/// `allocate` is called exactly once per insert (after `deallocate` on the
/// replaced entry when the insert is an update). `deallocate` is called when
/// an entry is removed, replaced, or released with
/// [`Table::release_all`](crate::Table::release_all). Dropping or clearing a
/// table drops the stored entries without calling `deallocate`.
pub trait EntryAllocator<K: ?Sized, V: ?Sized> {
    /// Owned form of a stored key.
    type Key: Borrow<K>;
    /// Owned form of a stored value.
    type Value: Borrow<V>;

    /// Produces the owned entry for `key` and `value`.
    fn allocate(&mut self, key: &K, value: &V) -> (Self::Key, Self::Value);

    /// Releases an entry previously produced by [`allocate`].
    ///
    /// [`allocate`]: EntryAllocator::allocate
    fn deallocate(&mut self, key: Self::Key, value: Self::Value);
}

/// Copies keys and values through [`ToOwned`]; deallocation drops them.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToOwnedAllocator;

impl<K, V> EntryAllocator<K, V> for ToOwnedAllocator
where
    K: ToOwned + ?Sized,
    V: ToOwned + ?Sized,
{
    type Key = K::Owned;
    type Value = V::Owned;

    #[inline]
    fn allocate(&mut self, key: &K, value: &V) -> (K::Owned, V::Owned) {
        (key.to_owned(), value.to_owned())
    }

    #[inline]
    fn deallocate(&mut self, key: K::Owned, value: V::Owned) {
        drop(key);
        drop(value);
    }
}

/// An [`EntryAllocator`] assembled from an allocate closure and a deallocate
/// closure.
///
/// ```rust
/// use linprobe::strategy::FnAllocator;
/// use linprobe::strategy::StrEq;
/// use linprobe::strategy::StrHash;
/// use linprobe::Table;
///
/// let alloc = FnAllocator::new(
///     |k: &str, v: &i32| (k.to_uppercase(), *v),
///     |_k: String, _v: i32| {},
/// );
/// let mut table = Table::new(4, StrHash, StrEq, alloc).unwrap();
/// assert!(table.insert("a", &1));
/// assert_eq!(table.keys().collect::<Vec<_>>(), ["A"]);
/// ```
pub struct FnAllocator<A, D, SK, SV> {
    allocate: A,
    deallocate: D,
    _marker: PhantomData<fn() -> (SK, SV)>,
}

impl<A, D, SK, SV> FnAllocator<A, D, SK, SV> {
    /// Pairs `allocate` with the `deallocate` that releases its output.
    pub fn new<K, V>(allocate: A, deallocate: D) -> Self
    where
        K: ?Sized,
        V: ?Sized,
        A: FnMut(&K, &V) -> (SK, SV),
        D: FnMut(SK, SV),
    {
        Self {
            allocate,
            deallocate,
            _marker: PhantomData,
        }
    }
}

impl<K, V, A, D, SK, SV> EntryAllocator<K, V> for FnAllocator<A, D, SK, SV>
where
    K: ?Sized,
    V: ?Sized,
    A: FnMut(&K, &V) -> (SK, SV),
    D: FnMut(SK, SV),
    SK: Borrow<K>,
    SV: Borrow<V>,
{
    type Key = SK;
    type Value = SV;

    #[inline]
    fn allocate(&mut self, key: &K, value: &V) -> (SK, SV) {
        (self.allocate)(key, value)
    }

    #[inline]
    fn deallocate(&mut self, key: SK, value: SV) {
        (self.deallocate)(key, value)
    }
}

/// Wraps another allocator and tracks how many entries it has handed out
/// that have not been deallocated yet.
#[derive(Debug, Clone, Default)]
pub struct CountingAllocator<A> {
    inner: A,
    allocated: usize,
    deallocated: usize,
}

impl<A> CountingAllocator<A> {
    /// Wraps `inner`.
    pub fn new(inner: A) -> Self {
        Self {
            inner,
            allocated: 0,
            deallocated: 0,
        }
    }

    /// Total calls to `allocate`.
    pub fn allocated(&self) -> usize {
        self.allocated
    }

    /// Total calls to `deallocate`.
    pub fn deallocated(&self) -> usize {
        self.deallocated
    }

    /// Entries allocated and not yet deallocated.
    pub fn live(&self) -> usize {
        self.allocated - self.deallocated
    }

    /// Returns the wrapped allocator.
    pub fn into_inner(self) -> A {
        self.inner
    }
}

impl<K, V, A> EntryAllocator<K, V> for CountingAllocator<A>
where
    K: ?Sized,
    V: ?Sized,
    A: EntryAllocator<K, V>,
{
    type Key = A::Key;
    type Value = A::Value;

    #[inline]
    fn allocate(&mut self, key: &K, value: &V) -> (A::Key, A::Value) {
        self.allocated += 1;
        self.inner.allocate(key, value)
    }

    #[inline]
    fn deallocate(&mut self, key: A::Key, value: A::Value) {
        self.deallocated += 1;
        self.inner.deallocate(key, value)
    }
}

/// Shift-sum string hash.
///
/// Byte `c` at 1-based position `i` contributes `(c << 3) << i`, summed with
/// wrapping arithmetic. Cheap, and weak: short keys that differ only in late
/// positions land far apart, but long keys collide often once the shifts wrap.
///
/// Bytes are widened as unsigned values, so a byte `>= 0x80` contributes
/// `c` in `0x80..=0xFF`. Hashes of non-ASCII keys therefore differ from a
/// variant that sign-extends each byte through a signed `char`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrHash;

impl<K: AsRef<str> + ?Sized> KeyHasher<K> for StrHash {
    fn hash(&self, key: &K) -> u64 {
        key.as_ref()
            .bytes()
            .zip(1u32..)
            .fold(0u64, |sum, (c, shift)| {
                sum.wrapping_add((u64::from(c) << 3).wrapping_shl(shift))
            })
    }
}

/// Exact string comparison.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrEq;

impl<K: AsRef<str> + ?Sized> KeyEquals<K> for StrEq {
    #[inline]
    fn equals(&self, lhs: &K, rhs: &K) -> bool {
        lhs.as_ref() == rhs.as_ref()
    }
}

/// Identity hash for integers: the value itself, widened to `u64`.
///
/// Signed values are sign-extended and 128-bit values truncated.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityHash;

/// Exact integer comparison.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntEq;

macro_rules! int_strategies {
    ($($t:ty),* $(,)?) => {
        $(
            impl KeyHasher<$t> for IdentityHash {
                #[inline(always)]
                fn hash(&self, key: &$t) -> u64 {
                    *key as u64
                }
            }

            impl KeyEquals<$t> for IntEq {
                #[inline(always)]
                fn equals(&self, lhs: &$t, rhs: &$t) -> bool {
                    lhs == rhs
                }
            }
        )*
    };
}

int_strategies!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize
);

/// Equality through [`PartialEq`].
#[derive(Debug, Clone, Copy, Default)]
pub struct EqEquals;

impl<K: PartialEq + ?Sized> KeyEquals<K> for EqEquals {
    #[inline(always)]
    fn equals(&self, lhs: &K, rhs: &K) -> bool {
        lhs == rhs
    }
}

/// Adapts any [`BuildHasher`] into a [`KeyHasher`] for `Hash` keys.
#[derive(Clone, Default)]
pub struct BuildHasherStrategy<S>(pub S);

impl<K: Hash + ?Sized, S: BuildHasher> KeyHasher<K> for BuildHasherStrategy<S> {
    #[inline]
    fn hash(&self, key: &K) -> u64 {
        self.0.hash_one(key)
    }
}

/// Fowler–Noll–Vo (FNV-1a) hasher, used as the default when neither the
/// `foldhash` nor the `std` feature is enabled.
#[derive(Debug, Clone, Copy)]
pub struct FnvHasher {
    hash: u64,
}

impl FnvHasher {
    const FNV_PRIME: u64 = 0x100000001B3;
    const FNV_OFFSET_BASIS: u64 = 0xCBF29CE484222325;
}

impl Default for FnvHasher {
    fn default() -> Self {
        Self {
            hash: Self::FNV_OFFSET_BASIS,
        }
    }
}

impl Hasher for FnvHasher {
    fn finish(&self) -> u64 {
        self.hash
    }

    fn write(&mut self, bytes: &[u8]) {
        for byte in bytes {
            self.hash ^= u64::from(*byte);
            self.hash = self.hash.wrapping_mul(Self::FNV_PRIME);
        }
    }
}

cfg_if::cfg_if! {
    if #[cfg(feature = "foldhash")] {
        /// Hasher builder behind [`DefaultHash`].
        pub type DefaultHashBuilder = foldhash::fast::FixedState;
    } else if #[cfg(feature = "std")] {
        /// Hasher builder behind [`DefaultHash`].
        pub type DefaultHashBuilder = std::hash::RandomState;
    } else {
        /// Hasher builder behind [`DefaultHash`].
        pub type DefaultHashBuilder = core::hash::BuildHasherDefault<FnvHasher>;
    }
}

/// The general-purpose hash strategy used by
/// [`Table::with_capacity`](crate::Table::with_capacity).
pub type DefaultHash = BuildHasherStrategy<DefaultHashBuilder>;
