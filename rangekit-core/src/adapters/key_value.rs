//! Key/value iteration over associative containers.
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use rangekit_core::adapters::key_value::key_values;
//!
//! let digits: BTreeMap<i32, &str> = [(1, "one"), (2, "two"), (3, "three")].into_iter().collect();
//! let mut lines = Vec::new();
//! for (key, value) in key_values(&digits) {
//!     lines.push(format!("{key} -> {value}"));
//! }
//! assert_eq!(lines, ["1 -> one", "2 -> two", "3 -> three"]);
//! ```
//!
//! Entries come out in the container's own order; see
//! [`Associative`] for what each container provides.

use core::fmt;
use core::iter::FusedIterator;

use tracing::trace;

use crate::foundation::{
    container::{Associative, AssociativeMut},
    iterator::IteratorAdapter,
};

/// Iterator over `(key, value)` pairs of an associative container.
#[derive(Debug, Clone)]
pub struct KeyValueIter<I> {
    entries: I,
}

impl<I> KeyValueIter<I>
where
    I: Iterator,
{
    /// Wraps an entry iterator.
    #[inline]
    pub const fn new(entries: I) -> Self {
        Self { entries }
    }
}

impl<I> Iterator for KeyValueIter<I>
where
    I: Iterator,
{
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<I> DoubleEndedIterator for KeyValueIter<I>
where
    I: DoubleEndedIterator,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.entries.next_back()
    }
}

impl<I> ExactSizeIterator for KeyValueIter<I> where I: ExactSizeIterator {}
impl<I> FusedIterator for KeyValueIter<I> where I: FusedIterator {}

impl<I> IteratorAdapter for KeyValueIter<I>
where
    I: Iterator,
{
    type Source = I;

    fn source(&self) -> &Self::Source {
        &self.entries
    }

    fn source_mut(&mut self) -> &mut Self::Source {
        &mut self.entries
    }
}

// ============================================================================
// Borrowed View
// ============================================================================

/// Read-only key/value view borrowing its container.
pub struct KeyValues<'a, C: ?Sized> {
    container: &'a C,
}

impl<'a, C> KeyValues<'a, C>
where
    C: Associative + ?Sized,
{
    /// Creates a new borrowed key/value view.
    pub fn new(container: &'a C) -> Self {
        trace!(entries = container.entry_count(), "key/value view over borrowed container");
        Self { container }
    }

    /// Enumerates `(key, value)` pairs.
    #[inline]
    pub fn iter(&self) -> KeyValueIter<C::Entries<'a>> {
        KeyValueIter::new(self.container.entries())
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.container.entry_count()
    }

    /// Returns whether the container has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Enumerates the keys only.
    pub fn keys(&self) -> impl Iterator<Item = &'a C::Key> {
        self.container.entries().map(|(key, _)| key)
    }

    /// Enumerates the values only.
    pub fn values(&self) -> impl Iterator<Item = &'a C::Value> {
        self.container.entries().map(|(_, value)| value)
    }
}

impl<'a, C: ?Sized> Clone for KeyValues<'a, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, C: ?Sized> Copy for KeyValues<'a, C> {}

impl<'a, C> fmt::Debug for KeyValues<'a, C>
where
    C: fmt::Debug + ?Sized,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyValues")
            .field("container", &self.container)
            .finish()
    }
}

impl<'a, C> IntoIterator for KeyValues<'a, C>
where
    C: Associative + ?Sized,
{
    type Item = (&'a C::Key, &'a C::Value);
    type IntoIter = KeyValueIter<C::Entries<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, 'v, C> IntoIterator for &'v KeyValues<'a, C>
where
    C: Associative + ?Sized,
{
    type Item = (&'a C::Key, &'a C::Value);
    type IntoIter = KeyValueIter<C::Entries<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// Owned View
// ============================================================================

/// Read-only key/value view owning its container.
#[derive(Debug, Clone)]
pub struct OwnedKeyValues<C> {
    container: C,
}

impl<C> OwnedKeyValues<C>
where
    C: Associative,
{
    /// Creates a new owning key/value view.
    pub fn new(container: C) -> Self {
        trace!(entries = container.entry_count(), "key/value view over owned container");
        Self { container }
    }

    /// Enumerates borrowed `(key, value)` pairs.
    #[inline]
    pub fn iter(&self) -> KeyValueIter<C::Entries<'_>> {
        KeyValueIter::new(self.container.entries())
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.container.entry_count()
    }

    /// Returns whether the container has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Consumes the view, returning the container.
    #[inline]
    pub fn into_inner(self) -> C {
        self.container
    }
}

impl<'v, C> IntoIterator for &'v OwnedKeyValues<C>
where
    C: Associative,
{
    type Item = (&'v C::Key, &'v C::Value);
    type IntoIter = KeyValueIter<C::Entries<'v>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<C> IntoIterator for OwnedKeyValues<C>
where
    C: Associative + IntoIterator<Item = (<C as Associative>::Key, <C as Associative>::Value)>,
{
    type Item = (C::Key, C::Value);
    type IntoIter = KeyValueIter<C::IntoIter>;

    fn into_iter(self) -> Self::IntoIter {
        KeyValueIter::new(self.container.into_iter())
    }
}

// ============================================================================
// Mutating View
// ============================================================================

/// Key/value view with mutable values over a uniquely borrowed container.
pub struct KeyValuesMut<'a, C: ?Sized> {
    container: &'a mut C,
}

impl<'a, C> KeyValuesMut<'a, C>
where
    C: AssociativeMut + ?Sized,
{
    /// Creates a new mutating key/value view.
    pub fn new(container: &'a mut C) -> Self {
        trace!(entries = container.entry_count(), "mutating key/value view");
        Self { container }
    }

    /// Enumerates borrowed `(key, value)` pairs.
    #[inline]
    pub fn iter(&self) -> KeyValueIter<C::Entries<'_>> {
        KeyValueIter::new(self.container.entries())
    }

    /// Enumerates `(key, value)` pairs with mutable values.
    #[inline]
    pub fn iter_mut(&mut self) -> KeyValueIter<C::EntriesMut<'_>> {
        KeyValueIter::new(self.container.entries_mut())
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.container.entry_count()
    }

    /// Returns whether the container has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<'a, C> fmt::Debug for KeyValuesMut<'a, C>
where
    C: fmt::Debug + ?Sized,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyValuesMut")
            .field("container", &self.container)
            .finish()
    }
}

impl<'a, C> IntoIterator for KeyValuesMut<'a, C>
where
    C: AssociativeMut + ?Sized,
{
    type Item = (&'a C::Key, &'a mut C::Value);
    type IntoIter = KeyValueIter<C::EntriesMut<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        let Self { container } = self;
        KeyValueIter::new(container.entries_mut())
    }
}

impl<'a, 'v, C> IntoIterator for &'v mut KeyValuesMut<'a, C>
where
    C: AssociativeMut + ?Sized,
{
    type Item = (&'v C::Key, &'v mut C::Value);
    type IntoIter = KeyValueIter<C::EntriesMut<'v>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

// ============================================================================
// Constructors
// ============================================================================

/// Creates a read-only key/value view over a borrowed container.
pub fn key_values<C>(container: &C) -> KeyValues<'_, C>
where
    C: Associative + ?Sized,
{
    KeyValues::new(container)
}

/// Creates a read-only key/value view that takes ownership of `container`.
///
/// Useful for temporaries, whose storage then lives as long as the view:
///
/// ```rust
/// use std::collections::BTreeMap;
/// use rangekit_core::adapters::key_value::key_values_owned;
///
/// fn load() -> BTreeMap<String, u32> {
///     [("b".to_string(), 2), ("a".to_string(), 1)].into_iter().collect()
/// }
///
/// for (key, value) in &key_values_owned(load()) {
///     assert_eq!(key.len(), 1);
///     assert!(*value > 0);
/// }
/// ```
pub fn key_values_owned<C>(container: C) -> OwnedKeyValues<C>
where
    C: Associative,
{
    OwnedKeyValues::new(container)
}

/// Creates a key/value view whose values can be modified in place.
///
/// Keys stay read-only:
///
/// ```compile_fail
/// use std::collections::BTreeMap;
/// use rangekit_core::adapters::key_value::key_values_mut;
///
/// let mut map: BTreeMap<u32, u32> = BTreeMap::new();
/// for (key, _) in key_values_mut(&mut map) {
///     *key += 1;
/// }
/// ```
pub fn key_values_mut<C>(container: &mut C) -> KeyValuesMut<'_, C>
where
    C: AssociativeMut + ?Sized,
{
    KeyValuesMut::new(container)
}
