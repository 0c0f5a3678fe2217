//! Hash functions and the [`HashFn`] pluggability trait.
//!
//! Every table fixes its hash function at construction time; swapping it
//! afterwards would silently corrupt the probe chains of existing entries,
//! so no setter exists anywhere in the crate.

/// FNV-1a offset basis (32-bit).
pub const FNV_OFFSET_BASIS: u32 = 2_166_136_261;

/// FNV-1a prime (32-bit).
pub const FNV_PRIME: u32 = 16_777_619;

/// Hashes a byte sequence with 32-bit FNV-1a.
///
/// Starts from [`FNV_OFFSET_BASIS`], then for each byte XORs it in and
/// multiplies by [`FNV_PRIME`]. The multiply wraps modulo 2^32; the
/// wraparound is part of the algorithm, not an overflow bug.
///
/// # Examples
///
/// ```rust
/// # use probe_hash::hash::fnv1a;
/// #
/// assert_eq!(fnv1a(b""), 0x811c9dc5);
/// assert_eq!(fnv1a(b"foobar"), 0xbf9cf968);
/// ```
#[inline]
pub fn fnv1a(bytes: &[u8]) -> u32 {
    let mut hash = FNV_OFFSET_BASIS;
    for &byte in bytes {
        hash ^= u32::from(byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Avalanches a 32-bit integer key.
///
/// Sequential keys have almost no entropy in their high bits, which is
/// fatal for a table that indexes with `hash & (capacity - 1)`. This is
/// the MurmurHash3 finalizer: two xor-shift/multiply rounds that spread
/// every input bit across the whole word.
///
/// # Examples
///
/// ```rust
/// # use probe_hash::hash::mix32;
/// #
/// assert_ne!(mix32(1), mix32(2));
/// // Zero is a fixed point; every other input avalanches.
/// assert_eq!(mix32(0), 0);
/// ```
#[inline]
pub fn mix32(mut key: u32) -> u32 {
    key ^= key >> 16;
    key = key.wrapping_mul(0x85eb_ca6b);
    key ^= key >> 13;
    key = key.wrapping_mul(0xc2b2_ae35);
    key ^= key >> 16;
    key
}

/// Avalanches a 64-bit integer key.
///
/// SplitMix64 finalizer, the 64-bit counterpart of [`mix32`].
#[inline]
pub fn mix64(mut key: u64) -> u64 {
    key ^= key >> 30;
    key = key.wrapping_mul(0xbf58_476d_1ce4_e5b9);
    key ^= key >> 27;
    key = key.wrapping_mul(0x94d0_49bb_1331_11eb);
    key ^= key >> 31;
    key
}

/// A hash function over keys of type `K`.
///
/// This is the construction-time pluggability seam: a
/// [`HashMap`](crate::HashMap) is generic over an implementor of this
/// trait and consults it for every operation. Implementations must be
/// deterministic and pure — hashing the same key twice must yield the same
/// value for the lifetime of the table.
///
/// The result is widened to `u64`; the table only ever uses the low bits
/// for indexing, so a 32-bit hash function loses nothing by
/// zero-extension.
///
/// # Examples
///
/// ```rust
/// use probe_hash::HashFn;
/// use probe_hash::HashMap;
///
/// /// Hashes every key to the same slot. Terrible, but legal.
/// struct Constant;
///
/// impl HashFn<u32> for Constant {
///     fn hash(&self, _key: &u32) -> u64 {
///         0
///     }
/// }
///
/// let mut table: HashMap<u32, &str, Constant> = HashMap::with_hasher(Constant);
/// table.insert(1, "one");
/// table.insert(2, "two");
/// assert_eq!(table.get(&1), Some(&"one"));
/// assert_eq!(table.get(&2), Some(&"two"));
/// ```
pub trait HashFn<K: ?Sized> {
    /// Hashes `key`.
    fn hash(&self, key: &K) -> u64;
}

/// [`HashFn`] for byte-string keys using [`fnv1a`].
///
/// The default hasher of [`StringTable`](crate::StringTable).
#[derive(Clone, Copy, Debug, Default)]
pub struct Fnv1a;

impl HashFn<[u8]> for Fnv1a {
    #[inline]
    fn hash(&self, key: &[u8]) -> u64 {
        u64::from(fnv1a(key))
    }
}

impl HashFn<str> for Fnv1a {
    #[inline]
    fn hash(&self, key: &str) -> u64 {
        u64::from(fnv1a(key.as_bytes()))
    }
}

/// [`HashFn`] for integer keys using [`mix32`] / [`mix64`].
///
/// The default hasher of [`IntTable`](crate::IntTable).
#[derive(Clone, Copy, Debug, Default)]
pub struct IntMix;

impl HashFn<u32> for IntMix {
    #[inline]
    fn hash(&self, key: &u32) -> u64 {
        u64::from(mix32(*key))
    }
}

impl HashFn<u64> for IntMix {
    #[inline]
    fn hash(&self, key: &u64) -> u64 {
        mix64(*key)
    }
}

/// [`HashFn`] adapter for the `foldhash` crate.
///
/// An alternative byte-string hasher for workloads where FNV-1a's
/// byte-at-a-time loop shows up in profiles. Uses a fixed seed so tables
/// stay deterministic across runs.
#[cfg(feature = "foldhash")]
#[derive(Clone, Default)]
pub struct FoldHash(foldhash::fast::FixedState);

#[cfg(feature = "foldhash")]
impl HashFn<[u8]> for FoldHash {
    #[inline]
    fn hash(&self, key: &[u8]) -> u64 {
        use core::hash::BuildHasher;
        self.0.hash_one(key)
    }
}

#[cfg(feature = "foldhash")]
impl HashFn<str> for FoldHash {
    #[inline]
    fn hash(&self, key: &str) -> u64 {
        use core::hash::BuildHasher;
        self.0.hash_one(key.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    #[test]
    fn fnv1a_reference_vectors() {
        // Vectors from the FNV reference material.
        assert_eq!(fnv1a(b""), 0x811c_9dc5);
        assert_eq!(fnv1a(b"a"), 0xe40c_292c);
        assert_eq!(fnv1a(b"foobar"), 0xbf9c_f968);
    }

    #[test]
    fn fnv1a_wraps_instead_of_overflowing() {
        // Long inputs exercise the wrapping multiply many times over.
        let bytes = [0xffu8; 4096];
        let _ = fnv1a(&bytes);
    }

    #[test]
    fn mix32_is_injective_on_a_sample() {
        let mut hashes: Vec<u32> = (0u32..4096).map(mix32).collect();
        hashes.sort_unstable();
        hashes.dedup();
        assert_eq!(hashes.len(), 4096);
    }

    #[test]
    fn mix32_spreads_sequential_keys() {
        // Sequential keys must not collapse onto a handful of low-bit
        // patterns once masked down to a small table.
        let mut buckets = [0usize; 8];
        for key in 0u32..800 {
            buckets[(mix32(key) & 7) as usize] += 1;
        }
        for &count in &buckets {
            assert!(count > 50, "skewed bucket distribution: {buckets:?}");
        }
    }

    #[test]
    fn mix64_is_injective_on_a_sample() {
        let mut hashes: Vec<u64> = (0u64..4096).map(mix64).collect();
        hashes.sort_unstable();
        hashes.dedup();
        assert_eq!(hashes.len(), 4096);
    }

    #[test]
    fn hash_fn_impls_agree_with_free_functions() {
        assert_eq!(Fnv1a.hash(b"key".as_slice()), u64::from(fnv1a(b"key")));
        assert_eq!(Fnv1a.hash("key"), u64::from(fnv1a(b"key")));
        assert_eq!(IntMix.hash(&7u32), u64::from(mix32(7)));
        assert_eq!(IntMix.hash(&7u64), mix64(7));
    }
}
