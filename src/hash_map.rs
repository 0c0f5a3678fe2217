//! The keyed facade over the probing engine.
//!
//! [`HashMap`] pairs the engine with a key type and a hash function chosen
//! at construction. [`StringTable`] and [`IntTable`] are the two aliases
//! most callers want: byte-string keys hashed with FNV-1a and `u32` keys
//! hashed with an avalanche mix.

use alloc::boxed::Box;
use alloc::collections::TryReserveError;
use alloc::string::String;
use core::fmt;
use core::mem;

use crate::hash::Fnv1a;
use crate::hash::HashFn;
use crate::hash::IntMix;
use crate::hash_table::Entry as TableEntry;
use crate::hash_table::HashTable;
use crate::hash_table::OccupiedEntry as TableOccupiedEntry;
use crate::hash_table::TableStats;
use crate::hash_table::VacantEntry as TableVacantEntry;

/// A key type storable in a [`HashMap`].
///
/// Stored keys are owned by the table; lookups borrow. The associated
/// `Borrowed` form is what `get`/`remove` accept, and `DefaultHash` names
/// the hash function used when none is supplied at construction.
///
/// Implemented for exactly the supported key types: `Box<[u8]>` and
/// `String` (byte-string keys), and `u32` / `u64` (integer keys).
pub trait TableKey {
    /// Borrowed form accepted by lookups.
    type Borrowed: ?Sized + Eq;
    /// Hash function used when none is supplied at construction.
    type DefaultHash: HashFn<Self::Borrowed> + Default;

    /// Borrows the stored key for hashing and comparison.
    fn as_borrowed(&self) -> &Self::Borrowed;
}

impl TableKey for Box<[u8]> {
    type Borrowed = [u8];
    type DefaultHash = Fnv1a;

    fn as_borrowed(&self) -> &[u8] {
        self
    }
}

impl TableKey for String {
    type Borrowed = str;
    type DefaultHash = Fnv1a;

    fn as_borrowed(&self) -> &str {
        self
    }
}

impl TableKey for u32 {
    type Borrowed = u32;
    type DefaultHash = IntMix;

    fn as_borrowed(&self) -> &u32 {
        self
    }
}

impl TableKey for u64 {
    type Borrowed = u64;
    type DefaultHash = IntMix;

    fn as_borrowed(&self) -> &u64 {
        self
    }
}

/// A byte-string-keyed table hashing with FNV-1a.
pub type StringTable<V> = HashMap<Box<[u8]>, V>;

/// A 32-bit-integer-keyed table hashing with [`mix32`](crate::hash::mix32).
pub type IntTable<V> = HashMap<u32, V>;

/// A hash map built on the linear-probing [`HashTable`].
///
/// Keys are owned by the map (inserts move them in, so no caller buffer is
/// ever aliased); lookups take the key's borrowed form. The hasher `H` is
/// part of the map's type and fixed for its lifetime — there is no way to
/// change it after construction, because rehashing under a different
/// function would corrupt every existing probe chain.
///
/// # Examples
///
/// ```rust
/// use probe_hash::StringTable;
///
/// let mut table: StringTable<&str> = StringTable::new();
/// table.insert(Box::from(&b"foo"[..]), "foo");
/// table.insert(Box::from(&b"bar"[..]), "bar");
///
/// assert_eq!(table.get(b"foo"), Some(&"foo"));
/// assert_eq!(table.get(b"baz"), None);
/// ```
#[derive(Clone)]
pub struct HashMap<K: TableKey, V, H = <K as TableKey>::DefaultHash> {
    table: HashTable<(K, V)>,
    hasher: H,
}

impl<K, V, H> HashMap<K, V, H>
where
    K: TableKey,
    H: HashFn<K::Borrowed> + Default,
{
    /// Creates an empty map with the minimum capacity, the default load
    /// factor of 70%, and the key type's default hash function.
    pub fn new() -> Self {
        Self::with_capacity_and_hasher(0, H::default())
    }

    /// Creates an empty map with at least the given capacity (rounded up
    /// to a power of two, minimum 8).
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, H::default())
    }

    /// Creates an empty map with the given capacity and load factor
    /// percentage.
    ///
    /// # Panics
    ///
    /// Panics if `load_factor` is outside `1..=100`.
    pub fn with_capacity_and_load_factor(capacity: usize, load_factor: u32) -> Self {
        Self::with_load_factor_and_hasher(capacity, load_factor, H::default())
    }
}

impl<K, V, H> HashMap<K, V, H>
where
    K: TableKey,
    H: HashFn<K::Borrowed>,
{
    /// Creates an empty map using `hasher` instead of the key type's
    /// default hash function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use probe_hash::HashFn;
    /// use probe_hash::HashMap;
    ///
    /// struct ReverseBits;
    ///
    /// impl HashFn<u32> for ReverseBits {
    ///     fn hash(&self, key: &u32) -> u64 {
    ///         u64::from(key.reverse_bits())
    ///     }
    /// }
    ///
    /// let mut map: HashMap<u32, &str, ReverseBits> = HashMap::with_hasher(ReverseBits);
    /// map.insert(1, "one");
    /// assert_eq!(map.get(&1), Some(&"one"));
    /// ```
    pub fn with_hasher(hasher: H) -> Self {
        Self::with_capacity_and_hasher(0, hasher)
    }

    /// Creates an empty map with at least the given capacity and the given
    /// hasher.
    pub fn with_capacity_and_hasher(capacity: usize, hasher: H) -> Self {
        Self {
            table: HashTable::with_capacity(capacity),
            hasher,
        }
    }

    /// Creates an empty map with the given capacity, load factor
    /// percentage, and hasher.
    ///
    /// # Panics
    ///
    /// Panics if `load_factor` is outside `1..=100`.
    pub fn with_load_factor_and_hasher(capacity: usize, load_factor: u32, hasher: H) -> Self {
        Self {
            table: HashTable::with_capacity_and_load_factor(capacity, load_factor),
            hasher,
        }
    }

    /// Returns the number of entries in the map.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns `true` if the map contains no entries.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Returns the slot count of the backing array.
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    /// Returns the growth threshold in percent.
    pub fn load_factor(&self) -> u32 {
        self.table.load_factor()
    }

    /// Enables or disables probe statistics collection.
    pub fn set_collect_stats(&mut self, enabled: bool) {
        self.table.set_collect_stats(enabled);
    }

    /// Returns the collected statistics, or `None` if collection is
    /// disabled.
    pub fn stats(&self) -> Option<&TableStats> {
        self.table.stats()
    }

    /// Inserts a key-value pair, growing the map first if needed.
    ///
    /// Returns the previous value if the key was already present. An
    /// overwrite installs the newly provided key and drops the previously
    /// stored one; the entry count is unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use probe_hash::IntTable;
    /// #
    /// let mut map: IntTable<&str> = IntTable::new();
    /// assert_eq!(map.insert(37, "a"), None);
    /// assert_eq!(map.insert(37, "b"), Some("a"));
    /// assert_eq!(map.get(&37), Some(&"b"));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let hash = self.hasher.hash(key.as_borrowed());
        match self
            .table
            .entry(hash, |(stored, _)| stored.as_borrowed() == key.as_borrowed())
        {
            TableEntry::Occupied(mut entry) => {
                // Drops the previously stored key along with the tuple.
                let (_, old_value) = mem::replace(entry.get_mut(), (key, value));
                Some(old_value)
            }
            TableEntry::Vacant(entry) => {
                entry.insert((key, value));
                None
            }
        }
    }

    /// Returns a reference to the value for `key`, or `None` if absent.
    ///
    /// Read-only and allocation-free. A stored value is always returned as
    /// `Some`, so a miss is never confused with any stored payload.
    pub fn get(&self, key: &K::Borrowed) -> Option<&V> {
        let hash = self.hasher.hash(key);
        self.table
            .find(hash, |(stored, _)| stored.as_borrowed() == key)
            .map(|(_, value)| value)
    }

    /// Returns a mutable reference to the value for `key`.
    pub fn get_mut(&mut self, key: &K::Borrowed) -> Option<&mut V> {
        let hash = self.hasher.hash(key);
        self.table
            .find_mut(hash, |(stored, _)| stored.as_borrowed() == key)
            .map(|(_, value)| value)
    }

    /// Returns `true` if the map contains `key`.
    pub fn contains_key(&self, key: &K::Borrowed) -> bool {
        self.get(key).is_some()
    }

    /// Removes `key` from the map, returning its value.
    ///
    /// The slot is tombstoned so probe chains through it survive; removing
    /// an absent key returns `None` and changes nothing, however often it
    /// is repeated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use probe_hash::StringTable;
    /// #
    /// let mut map: StringTable<i32> = StringTable::new();
    /// map.insert(Box::from(&b"baz"[..]), 3);
    ///
    /// assert_eq!(map.remove(b"baz"), Some(3));
    /// assert_eq!(map.get(b"baz"), None);
    /// assert_eq!(map.remove(b"baz"), None);
    /// ```
    pub fn remove(&mut self, key: &K::Borrowed) -> Option<V> {
        self.remove_entry(key).map(|(_, value)| value)
    }

    /// Removes `key` from the map, returning the stored key and value.
    pub fn remove_entry(&mut self, key: &K::Borrowed) -> Option<(K, V)> {
        let hash = self.hasher.hash(key);
        self.table
            .remove(hash, |(stored, _)| stored.as_borrowed() == key)
    }

    /// Gets the entry for `key`, for in-place update or insertion.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use probe_hash::HashMap;
    /// #
    /// let mut counts: HashMap<String, u32> = HashMap::new();
    /// for word in "a b a".split_whitespace() {
    ///     *counts.entry(word.to_owned()).or_insert(0) += 1;
    /// }
    /// assert_eq!(counts.get("a"), Some(&2));
    /// assert_eq!(counts.get("b"), Some(&1));
    /// ```
    pub fn entry(&mut self, key: K) -> Entry<'_, K, V> {
        let hash = self.hasher.hash(key.as_borrowed());
        match self
            .table
            .entry(hash, |(stored, _)| stored.as_borrowed() == key.as_borrowed())
        {
            TableEntry::Occupied(inner) => Entry::Occupied(OccupiedEntry { inner }),
            TableEntry::Vacant(inner) => Entry::Vacant(VacantEntry { inner, key }),
        }
    }

    /// Removes all entries, keeping the current capacity.
    pub fn clear(&mut self) {
        self.table.clear();
    }

    /// Grows the backing array so `additional` more entries fit without
    /// rehashing.
    pub fn reserve(&mut self, additional: usize) {
        self.table.reserve(additional);
    }

    /// Fallible [`reserve`](Self::reserve); the map is untouched on error.
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        self.table.try_reserve(additional)
    }

    /// Returns an iterator over key-value pairs, in unspecified order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.table.iter(),
        }
    }

    /// Returns an iterator over the keys.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// Returns an iterator over the values.
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }

    /// Returns an iterator that removes and yields every entry.
    ///
    /// The map is empty once the iterator is dropped.
    pub fn drain(&mut self) -> Drain<'_, K, V> {
        Drain {
            inner: self.table.drain(),
        }
    }
}

impl<K, V, H> Default for HashMap<K, V, H>
where
    K: TableKey,
    H: HashFn<K::Borrowed> + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, H> fmt::Debug for HashMap<K, V, H>
where
    K: TableKey + fmt::Debug,
    V: fmt::Debug,
    H: HashFn<K::Borrowed>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// A view into a single map entry, occupied or vacant.
///
/// Returned by [`HashMap::entry`].
pub enum Entry<'a, K, V> {
    /// The key is present.
    Occupied(OccupiedEntry<'a, K, V>),
    /// The key is absent; inserting will use the probed slot.
    Vacant(VacantEntry<'a, K, V>),
}

impl<'a, K, V> Entry<'a, K, V> {
    /// Inserts `default` if vacant; returns a mutable reference to the
    /// value either way.
    pub fn or_insert(self, default: V) -> &'a mut V {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default),
        }
    }

    /// Inserts the result of `default()` if vacant; returns a mutable
    /// reference to the value either way.
    pub fn or_insert_with<F>(self, default: F) -> &'a mut V
    where
        F: FnOnce() -> V,
    {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default()),
        }
    }

    /// Applies `f` to the value if occupied, then returns the entry.
    pub fn and_modify<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&mut V),
    {
        if let Entry::Occupied(entry) = &mut self {
            f(entry.get_mut());
        }
        self
    }

    /// Returns a reference to the entry's key.
    pub fn key(&self) -> &K {
        match self {
            Entry::Occupied(entry) => entry.key(),
            Entry::Vacant(entry) => entry.key(),
        }
    }
}

impl<'a, K, V> Entry<'a, K, V>
where
    V: Default,
{
    /// Inserts `V::default()` if vacant; returns a mutable reference to
    /// the value either way.
    pub fn or_default(self) -> &'a mut V {
        self.or_insert_with(V::default)
    }
}

/// A view into an occupied map entry.
pub struct OccupiedEntry<'a, K, V> {
    inner: TableOccupiedEntry<'a, (K, V)>,
}

impl<'a, K, V> OccupiedEntry<'a, K, V> {
    /// Returns a reference to the stored key.
    pub fn key(&self) -> &K {
        &self.inner.get().0
    }

    /// Gets a reference to the value.
    pub fn get(&self) -> &V {
        &self.inner.get().1
    }

    /// Gets a mutable reference to the value.
    pub fn get_mut(&mut self) -> &mut V {
        &mut self.inner.get_mut().1
    }

    /// Converts the entry into a mutable reference tied to the map borrow.
    pub fn into_mut(self) -> &'a mut V {
        &mut self.inner.into_mut().1
    }

    /// Replaces the value, returning the old one.
    pub fn insert(&mut self, value: V) -> V {
        mem::replace(self.get_mut(), value)
    }

    /// Removes the entry, returning the value.
    pub fn remove(self) -> V {
        self.inner.remove().1
    }

    /// Removes the entry, returning the stored key and value.
    pub fn remove_entry(self) -> (K, V) {
        self.inner.remove()
    }
}

/// A view into a vacant map entry.
pub struct VacantEntry<'a, K, V> {
    inner: TableVacantEntry<'a, (K, V)>,
    key: K,
}

impl<'a, K, V> VacantEntry<'a, K, V> {
    /// Returns a reference to the key that would be inserted.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Returns the key without inserting anything.
    pub fn into_key(self) -> K {
        self.key
    }

    /// Inserts the key with `value`, returning a mutable reference to the
    /// value.
    pub fn insert(self, value: V) -> &'a mut V {
        let VacantEntry { inner, key } = self;
        &mut inner.insert((key, value)).1
    }
}

/// An iterator over the key-value pairs of a [`HashMap`].
pub struct Iter<'a, K, V> {
    inner: crate::hash_table::Iter<'a, (K, V)>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|entry| (&entry.0, &entry.1))
    }
}

/// An iterator over the keys of a [`HashMap`].
pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }
}

/// An iterator over the values of a [`HashMap`].
pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, value)| value)
    }
}

/// A draining iterator over the entries of a [`HashMap`].
pub struct Drain<'a, K, V> {
    inner: crate::hash_table::Drain<'a, (K, V)>,
}

impl<K, V> Iterator for Drain<'_, K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}
