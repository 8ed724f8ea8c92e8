//! # Index, Count, and Key Types
use core::{
    borrow::Borrow,
    fmt::{Debug, Display},
    hash::Hash,
    ops::AddAssign,
};

use num_traits::{FromPrimitive, PrimInt, ToPrimitive, Unsigned};

/// A type that can be used as a vocabulary index.
///
/// Any unsigned primitive integer. A vocab built with `T` fails with
/// [`crate::WordcorpusError::VocabSizeOverflow`] if its last index does
/// not fit `T`.
pub trait TokenType:
    'static
    + PrimInt
    + FromPrimitive
    + ToPrimitive
    + Unsigned
    + Hash
    + Default
    + Debug
    + Display
    + Send
    + Sync
{
}

impl<T> TokenType for T where
    T: 'static
        + PrimInt
        + FromPrimitive
        + ToPrimitive
        + Unsigned
        + Hash
        + Default
        + Debug
        + Display
        + Send
        + Sync
{
}

/// A type that can be used as a string key.
pub trait StringChunkType:
    for<'a> From<&'a str> + AsRef<str> + Borrow<str> + Debug + Clone + Send + Sync + Eq + Hash
{
}

impl<T> StringChunkType for T where
    T: for<'a> From<&'a str> + AsRef<str> + Borrow<str> + Debug + Clone + Send + Sync + Eq + Hash
{
}

/// A type that can be used as a token count.
pub trait CountType:
    'static
    + PrimInt
    + FromPrimitive
    + ToPrimitive
    + Hash
    + Default
    + Debug
    + Display
    + Send
    + Sync
    + AddAssign
{
}

impl<T> CountType for T where
    T: 'static
        + PrimInt
        + FromPrimitive
        + ToPrimitive
        + Hash
        + Default
        + Debug
        + Display
        + Send
        + Sync
        + AddAssign
{
}

cfg_if::cfg_if! {
    if #[cfg(feature = "ahash")] {
        /// The hasher state shared by [`WCHashMap`] and [`WCHashSet`].
        pub type WCBuildHasher = ahash::RandomState;
    } else if #[cfg(feature = "foldhash")] {
        /// The hasher state shared by [`WCHashMap`] and [`WCHashSet`].
        pub type WCBuildHasher = foldhash::fast::RandomState;
    } else {
        /// The hasher state shared by [`WCHashMap`] and [`WCHashSet`].
        pub type WCBuildHasher = std::collections::hash_map::RandomState;
    }
}

/// Hash map keyed with the feature-selected hasher.
pub type WCHashMap<K, V> = std::collections::HashMap<K, V, WCBuildHasher>;

/// Hash set keyed with the feature-selected hasher.
pub type WCHashSet<V> = std::collections::HashSet<V, WCBuildHasher>;

/// An empty [`WCHashMap`] with room for `capacity` entries.
pub fn hash_map_with_capacity<K, V>(capacity: usize) -> WCHashMap<K, V> {
    WCHashMap::with_capacity_and_hasher(capacity, WCBuildHasher::default())
}

/// An empty [`WCHashSet`] with room for `capacity` entries.
pub fn hash_set_with_capacity<V>(capacity: usize) -> WCHashSet<V> {
    WCHashSet::with_capacity_and_hasher(capacity, WCBuildHasher::default())
}
