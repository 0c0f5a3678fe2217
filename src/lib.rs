#![warn(missing_docs)]
#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

/// Hash functions and the pluggability trait.
///
/// FNV-1a for byte strings, avalanche mixes for integers, and the
/// [`HashFn`] trait tables are generic over.
pub mod hash;

/// The keyed map facade over the probing engine.
///
/// Provides `HashMap<K, V, H>` plus the `StringTable` and `IntTable`
/// aliases for the two original key flavors.
pub mod hash_map;

pub mod hash_table;

/// The tagged-union payload type.
pub mod value;

pub use hash::Fnv1a;
#[cfg(feature = "foldhash")]
pub use hash::FoldHash;
pub use hash::HashFn;
pub use hash::IntMix;
pub use hash_map::Entry;
pub use hash_map::HashMap;
pub use hash_map::IntTable;
pub use hash_map::StringTable;
pub use hash_map::TableKey;
pub use hash_table::HashTable;
pub use hash_table::TableStats;
pub use value::Value;
