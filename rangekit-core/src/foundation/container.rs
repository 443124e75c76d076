//! Container capability traits.
//!
//! The adapters never name concrete collections. They are written against
//! the traits in this module, and each collection opts in by describing how
//! it is traversed.
//!
//! ## Element access shapes
//!
//! [`Traversable::Item`] fixes, per container and at compile time, what a
//! traversal step hands out:
//!
//! - Reference-shaped containers (`Vec<T>`, slices, arrays, `VecDeque<T>`,
//!   `LinkedList<T>`, `BTreeSet<T>`, `BTreeMap<K, V>`) yield borrows into
//!   their storage.
//! - Flat value containers (`str`, `String`, integer ranges) have no element
//!   storage to point into. They yield their declared value type (`char`, the
//!   integer type) by value.
//!
//! Mutation is a separate capability. Only containers implementing
//! [`TraversableMut`] can back a mutating view, so asking for one over a
//! `String` or a `BTreeSet` is rejected by the compiler.

use std::collections::{
    btree_map, btree_set, hash_map, linked_list, vec_deque, BTreeMap, BTreeSet, HashMap,
    LinkedList, VecDeque,
};
use std::iter::FusedIterator;
use std::ops::{Range, RangeInclusive};
use std::slice;
use std::str::Chars;

// ============================================================================
// Capability Traits
// ============================================================================

/// A container that can be walked from both ends without consuming it.
pub trait Traversable {
    /// The element handed out by one traversal step.
    type Item<'a>
    where
        Self: 'a;

    /// The cursor pair over the whole container.
    type Iter<'a>: DoubleEndedIterator<Item = Self::Item<'a>>
    where
        Self: 'a;

    /// Starts a read-only traversal.
    fn traverse(&self) -> Self::Iter<'_>;
}

/// A container whose elements can be modified in place while walking it.
pub trait TraversableMut: Traversable {
    /// The mutable element handed out by one traversal step.
    type ItemMut<'a>
    where
        Self: 'a;

    /// The mutable cursor pair over the whole container.
    type IterMut<'a>: DoubleEndedIterator<Item = Self::ItemMut<'a>>
    where
        Self: 'a;

    /// Starts a mutating traversal.
    fn traverse_mut(&mut self) -> Self::IterMut<'_>;
}

/// A key to value container.
///
/// The entry order is whatever the container enumerates natively: sorted by
/// key for `BTreeMap`, unspecified for `HashMap`, insertion order for
/// association lists.
pub trait Associative {
    /// The key type.
    type Key;

    /// The value type.
    type Value;

    /// Iterator over borrowed entries.
    type Entries<'a>: Iterator<Item = (&'a Self::Key, &'a Self::Value)>
    where
        Self: 'a;

    /// Enumerates the entries.
    fn entries(&self) -> Self::Entries<'_>;

    /// Returns the number of entries.
    fn entry_count(&self) -> usize;
}

/// A key to value container whose values can be modified in place.
pub trait AssociativeMut: Associative {
    /// Iterator over entries with mutable values. Keys stay shared.
    type EntriesMut<'a>: Iterator<Item = (&'a Self::Key, &'a mut Self::Value)>
    where
        Self: 'a;

    /// Enumerates the entries with mutable access to each value.
    fn entries_mut(&mut self) -> Self::EntriesMut<'_>;
}

// ============================================================================
// Reference-Shaped Containers
// ============================================================================

macro_rules! impl_traversable_slice_like {
    ($($container:ty),+ $(,)?) => {
        $(
            impl<T> Traversable for $container {
                type Item<'a> = &'a T where Self: 'a;
                type Iter<'a> = slice::Iter<'a, T> where Self: 'a;

                #[inline]
                fn traverse(&self) -> Self::Iter<'_> {
                    self.iter()
                }
            }

            impl<T> TraversableMut for $container {
                type ItemMut<'a> = &'a mut T where Self: 'a;
                type IterMut<'a> = slice::IterMut<'a, T> where Self: 'a;

                #[inline]
                fn traverse_mut(&mut self) -> Self::IterMut<'_> {
                    self.iter_mut()
                }
            }
        )+
    };
}

impl_traversable_slice_like!([T], Vec<T>, Box<[T]>);

impl<T, const N: usize> Traversable for [T; N] {
    type Item<'a> = &'a T where Self: 'a;
    type Iter<'a> = slice::Iter<'a, T> where Self: 'a;

    #[inline]
    fn traverse(&self) -> Self::Iter<'_> {
        self.iter()
    }
}

impl<T, const N: usize> TraversableMut for [T; N] {
    type ItemMut<'a> = &'a mut T where Self: 'a;
    type IterMut<'a> = slice::IterMut<'a, T> where Self: 'a;

    #[inline]
    fn traverse_mut(&mut self) -> Self::IterMut<'_> {
        self.iter_mut()
    }
}

impl<T> Traversable for VecDeque<T> {
    type Item<'a> = &'a T where Self: 'a;
    type Iter<'a> = vec_deque::Iter<'a, T> where Self: 'a;

    #[inline]
    fn traverse(&self) -> Self::Iter<'_> {
        self.iter()
    }
}

impl<T> TraversableMut for VecDeque<T> {
    type ItemMut<'a> = &'a mut T where Self: 'a;
    type IterMut<'a> = vec_deque::IterMut<'a, T> where Self: 'a;

    #[inline]
    fn traverse_mut(&mut self) -> Self::IterMut<'_> {
        self.iter_mut()
    }
}

impl<T> Traversable for LinkedList<T> {
    type Item<'a> = &'a T where Self: 'a;
    type Iter<'a> = linked_list::Iter<'a, T> where Self: 'a;

    #[inline]
    fn traverse(&self) -> Self::Iter<'_> {
        self.iter()
    }
}

impl<T> TraversableMut for LinkedList<T> {
    type ItemMut<'a> = &'a mut T where Self: 'a;
    type IterMut<'a> = linked_list::IterMut<'a, T> where Self: 'a;

    #[inline]
    fn traverse_mut(&mut self) -> Self::IterMut<'_> {
        self.iter_mut()
    }
}

// Set elements are their own ordering keys; no TraversableMut.
impl<T> Traversable for BTreeSet<T> {
    type Item<'a> = &'a T where Self: 'a;
    type Iter<'a> = btree_set::Iter<'a, T> where Self: 'a;

    #[inline]
    fn traverse(&self) -> Self::Iter<'_> {
        self.iter()
    }
}

impl<K, V> Traversable for BTreeMap<K, V> {
    type Item<'a> = (&'a K, &'a V) where Self: 'a;
    type Iter<'a> = btree_map::Iter<'a, K, V> where Self: 'a;

    #[inline]
    fn traverse(&self) -> Self::Iter<'_> {
        self.iter()
    }
}

impl<K, V> TraversableMut for BTreeMap<K, V> {
    type ItemMut<'a> = (&'a K, &'a mut V) where Self: 'a;
    type IterMut<'a> = btree_map::IterMut<'a, K, V> where Self: 'a;

    #[inline]
    fn traverse_mut(&mut self) -> Self::IterMut<'_> {
        self.iter_mut()
    }
}

// ============================================================================
// Flat Value Containers
// ============================================================================

impl Traversable for str {
    type Item<'a> = char;
    type Iter<'a> = Chars<'a>;

    #[inline]
    fn traverse(&self) -> Self::Iter<'_> {
        self.chars()
    }
}

impl Traversable for String {
    type Item<'a> = char;
    type Iter<'a> = Chars<'a>;

    #[inline]
    fn traverse(&self) -> Self::Iter<'_> {
        self.chars()
    }
}

macro_rules! impl_traversable_int_range {
    ($($int:ty),+ $(,)?) => {
        $(
            impl Traversable for Range<$int> {
                type Item<'a> = $int;
                type Iter<'a> = Range<$int>;

                #[inline]
                fn traverse(&self) -> Self::Iter<'_> {
                    self.clone()
                }
            }

            impl Traversable for RangeInclusive<$int> {
                type Item<'a> = $int;
                type Iter<'a> = RangeInclusive<$int>;

                #[inline]
                fn traverse(&self) -> Self::Iter<'_> {
                    self.clone()
                }
            }
        )+
    };
}

impl_traversable_int_range!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

// ============================================================================
// Associative Containers
// ============================================================================

impl<K, V> Associative for BTreeMap<K, V> {
    type Key = K;
    type Value = V;
    type Entries<'a> = btree_map::Iter<'a, K, V> where Self: 'a;

    #[inline]
    fn entries(&self) -> Self::Entries<'_> {
        self.iter()
    }

    #[inline]
    fn entry_count(&self) -> usize {
        self.len()
    }
}

impl<K, V> AssociativeMut for BTreeMap<K, V> {
    type EntriesMut<'a> = btree_map::IterMut<'a, K, V> where Self: 'a;

    #[inline]
    fn entries_mut(&mut self) -> Self::EntriesMut<'_> {
        self.iter_mut()
    }
}

impl<K, V, S> Associative for HashMap<K, V, S> {
    type Key = K;
    type Value = V;
    type Entries<'a> = hash_map::Iter<'a, K, V> where Self: 'a;

    #[inline]
    fn entries(&self) -> Self::Entries<'_> {
        self.iter()
    }

    #[inline]
    fn entry_count(&self) -> usize {
        self.len()
    }
}

impl<K, V, S> AssociativeMut for HashMap<K, V, S> {
    type EntriesMut<'a> = hash_map::IterMut<'a, K, V> where Self: 'a;

    #[inline]
    fn entries_mut(&mut self) -> Self::EntriesMut<'_> {
        self.iter_mut()
    }
}

impl<K, V> Associative for [(K, V)] {
    type Key = K;
    type Value = V;
    type Entries<'a> = PairEntries<'a, K, V> where Self: 'a;

    #[inline]
    fn entries(&self) -> Self::Entries<'_> {
        PairEntries { inner: self.iter() }
    }

    #[inline]
    fn entry_count(&self) -> usize {
        self.len()
    }
}

impl<K, V> AssociativeMut for [(K, V)] {
    type EntriesMut<'a> = PairEntriesMut<'a, K, V> where Self: 'a;

    #[inline]
    fn entries_mut(&mut self) -> Self::EntriesMut<'_> {
        PairEntriesMut {
            inner: self.iter_mut(),
        }
    }
}

impl<K, V> Associative for Vec<(K, V)> {
    type Key = K;
    type Value = V;
    type Entries<'a> = PairEntries<'a, K, V> where Self: 'a;

    #[inline]
    fn entries(&self) -> Self::Entries<'_> {
        self.as_slice().entries()
    }

    #[inline]
    fn entry_count(&self) -> usize {
        self.len()
    }
}

impl<K, V> AssociativeMut for Vec<(K, V)> {
    type EntriesMut<'a> = PairEntriesMut<'a, K, V> where Self: 'a;

    #[inline]
    fn entries_mut(&mut self) -> Self::EntriesMut<'_> {
        self.as_mut_slice().entries_mut()
    }
}

/// Entries of an association list, split into key and value borrows.
#[derive(Debug, Clone)]
pub struct PairEntries<'a, K, V> {
    inner: slice::Iter<'a, (K, V)>,
}

impl<'a, K, V> Iterator for PairEntries<'a, K, V> {
    type Item = (&'a K, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let (key, value) = self.inner.next()?;
        Some((key, value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, K, V> DoubleEndedIterator for PairEntries<'a, K, V> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        let (key, value) = self.inner.next_back()?;
        Some((key, value))
    }
}

impl<'a, K, V> ExactSizeIterator for PairEntries<'a, K, V> {}
impl<'a, K, V> FusedIterator for PairEntries<'a, K, V> {}

/// Entries of an association list with mutable values.
#[derive(Debug)]
pub struct PairEntriesMut<'a, K, V> {
    inner: slice::IterMut<'a, (K, V)>,
}

impl<'a, K, V> Iterator for PairEntriesMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let (key, value) = self.inner.next()?;
        Some((&*key, value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, K, V> DoubleEndedIterator for PairEntriesMut<'a, K, V> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        let (key, value) = self.inner.next_back()?;
        Some((&*key, value))
    }
}

impl<'a, K, V> ExactSizeIterator for PairEntriesMut<'a, K, V> {}
impl<'a, K, V> FusedIterator for PairEntriesMut<'a, K, V> {}
