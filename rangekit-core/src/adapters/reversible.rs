//! Reversible views over a single container.
//!
//! A reversible view pairs a container with a [`Direction`] fixed at
//! construction time. The direction may come from a runtime flag, so one
//! loop body can walk a container forward or backward:
//!
//! ```rust
//! use rangekit_core::adapters::reversible::reversible;
//!
//! let values = vec![0, 1, 2, 3];
//! let mut seen = Vec::new();
//! for backward in [true, false] {
//!     for value in reversible(&values, backward) {
//!         seen.push(*value);
//!     }
//! }
//! assert_eq!(seen, vec![3, 2, 1, 0, 0, 1, 2, 3]);
//! ```
//!
//! Three constructors cover the ownership cases:
//!
//! | Constructor | Holds | Access |
//! |---|---|---|
//! | [`reversible`] / [`reversed`] | `&C` | read-only |
//! | [`reversible_owned`] | `C` (moved in) | read-only |
//! | [`reversible_mut`] | `&mut C` | mutating |
//!
//! There is deliberately no mutating view over an owned container.

use core::fmt;

use tracing::trace;

use crate::foundation::{
    container::{Traversable, TraversableMut},
    iterator::ReversibleIter,
    types::Direction,
};

// ============================================================================
// Borrowed View
// ============================================================================

/// Read-only reversible view borrowing its container.
///
/// Created by [`reversible`] and [`reversed`].
pub struct Reversible<'a, C: ?Sized> {
    container: &'a C,
    direction: Direction,
}

impl<'a, C> Reversible<'a, C>
where
    C: Traversable + ?Sized,
{
    /// Creates a new borrowed reversible view.
    pub fn new(container: &'a C, direction: Direction) -> Self {
        trace!(%direction, "reversible view over borrowed container");
        Self {
            container,
            direction,
        }
    }

    /// Returns the traversal direction.
    #[inline]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the borrowed container.
    #[inline]
    pub const fn container(&self) -> &'a C {
        self.container
    }

    /// Starts a traversal in the view's direction.
    #[inline]
    pub fn iter(&self) -> ReversibleIter<C::Iter<'a>> {
        ReversibleIter::new(self.container.traverse(), self.direction)
    }
}

impl<'a, C: ?Sized> Clone for Reversible<'a, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, C: ?Sized> Copy for Reversible<'a, C> {}

impl<'a, C> fmt::Debug for Reversible<'a, C>
where
    C: fmt::Debug + ?Sized,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reversible")
            .field("container", &self.container)
            .field("direction", &self.direction)
            .finish()
    }
}

impl<'a, C> IntoIterator for Reversible<'a, C>
where
    C: Traversable + ?Sized,
{
    type Item = C::Item<'a>;
    type IntoIter = ReversibleIter<C::Iter<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, 'v, C> IntoIterator for &'v Reversible<'a, C>
where
    C: Traversable + ?Sized,
{
    type Item = C::Item<'a>;
    type IntoIter = ReversibleIter<C::Iter<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// Owned View
// ============================================================================

/// Read-only reversible view owning its container.
///
/// Created by [`reversible_owned`]. The container lives exactly as long as
/// the view, so a temporary can be handed straight to a loop.
#[derive(Debug, Clone)]
pub struct OwnedReversible<C> {
    container: C,
    direction: Direction,
}

impl<C> OwnedReversible<C> {
    /// Creates a new owning reversible view.
    pub fn new(container: C, direction: Direction) -> Self {
        trace!(%direction, "reversible view over owned container");
        Self {
            container,
            direction,
        }
    }

    /// Returns the traversal direction.
    #[inline]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns a shared reference to the owned container.
    #[inline]
    pub const fn container(&self) -> &C {
        &self.container
    }

    /// Consumes the view, returning the container.
    #[inline]
    pub fn into_inner(self) -> C {
        self.container
    }
}

impl<C> OwnedReversible<C>
where
    C: Traversable,
{
    /// Starts a borrowing traversal in the view's direction.
    #[inline]
    pub fn iter(&self) -> ReversibleIter<C::Iter<'_>> {
        ReversibleIter::new(self.container.traverse(), self.direction)
    }
}

impl<'v, C> IntoIterator for &'v OwnedReversible<C>
where
    C: Traversable,
{
    type Item = C::Item<'v>;
    type IntoIter = ReversibleIter<C::Iter<'v>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<C> IntoIterator for OwnedReversible<C>
where
    C: IntoIterator,
    C::IntoIter: DoubleEndedIterator,
{
    type Item = C::Item;
    type IntoIter = ReversibleIter<C::IntoIter>;

    fn into_iter(self) -> Self::IntoIter {
        ReversibleIter::new(self.container.into_iter(), self.direction)
    }
}

// ============================================================================
// Mutating View
// ============================================================================

/// Mutating reversible view over a uniquely borrowed container.
///
/// Created by [`reversible_mut`].
pub struct ReversibleMut<'a, C: ?Sized> {
    container: &'a mut C,
    direction: Direction,
}

impl<'a, C> ReversibleMut<'a, C>
where
    C: TraversableMut + ?Sized,
{
    /// Creates a new mutating reversible view.
    pub fn new(container: &'a mut C, direction: Direction) -> Self {
        trace!(%direction, "mutating reversible view");
        Self {
            container,
            direction,
        }
    }

    /// Returns the traversal direction.
    #[inline]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Starts a read-only traversal in the view's direction.
    #[inline]
    pub fn iter(&self) -> ReversibleIter<C::Iter<'_>> {
        ReversibleIter::new(self.container.traverse(), self.direction)
    }

    /// Starts a mutating traversal in the view's direction.
    #[inline]
    pub fn iter_mut(&mut self) -> ReversibleIter<C::IterMut<'_>> {
        ReversibleIter::new(self.container.traverse_mut(), self.direction)
    }
}

impl<'a, C> fmt::Debug for ReversibleMut<'a, C>
where
    C: fmt::Debug + ?Sized,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReversibleMut")
            .field("container", &self.container)
            .field("direction", &self.direction)
            .finish()
    }
}

impl<'a, C> IntoIterator for ReversibleMut<'a, C>
where
    C: TraversableMut + ?Sized,
{
    type Item = C::ItemMut<'a>;
    type IntoIter = ReversibleIter<C::IterMut<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        let Self {
            container,
            direction,
        } = self;
        ReversibleIter::new(container.traverse_mut(), direction)
    }
}

impl<'a, 'v, C> IntoIterator for &'v mut ReversibleMut<'a, C>
where
    C: TraversableMut + ?Sized,
{
    type Item = C::ItemMut<'v>;
    type IntoIter = ReversibleIter<C::IterMut<'v>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

// ============================================================================
// Constructors
// ============================================================================

/// Creates a read-only reversible view over a borrowed container.
///
/// The container is only read, even when the caller holds it mutably; use
/// [`reversible_mut`] to modify elements during the walk. `direction`
/// accepts a [`Direction`] or a `bool` where `true` means backward.
pub fn reversible<C>(container: &C, direction: impl Into<Direction>) -> Reversible<'_, C>
where
    C: Traversable + ?Sized,
{
    Reversible::new(container, direction.into())
}

/// Creates a backward view over a borrowed container.
///
/// ```rust
/// use rangekit_core::adapters::reversible::reversed;
///
/// let values = [0, 1, 2, 3];
/// let walked: Vec<i32> = reversed(&values).into_iter().copied().collect();
/// assert_eq!(walked, vec![3, 2, 1, 0]);
/// ```
pub fn reversed<C>(container: &C) -> Reversible<'_, C>
where
    C: Traversable + ?Sized,
{
    Reversible::new(container, Direction::default())
}

/// Creates a read-only reversible view that takes ownership of `container`.
///
/// Iterating the view by reference borrows from the owned container;
/// iterating it by value consumes the container and yields owned elements.
pub fn reversible_owned<C>(container: C, direction: impl Into<Direction>) -> OwnedReversible<C> {
    OwnedReversible::new(container, direction.into())
}

/// Creates a mutating reversible view over a uniquely borrowed container.
///
/// Changes made through the yielded references land in the container itself.
///
/// Owned temporaries are rejected, since modifying a value about to be dropped
/// is almost certainly a mistake:
///
/// ```compile_fail
/// use rangekit_core::adapters::reversible::reversible_mut;
///
/// for value in reversible_mut(vec![1, 2, 3], true) {
///     *value += 1;
/// }
/// ```
///
/// So are containers whose elements cannot be modified in place:
///
/// ```compile_fail
/// use rangekit_core::adapters::reversible::reversible_mut;
///
/// let mut text = String::from("abc");
/// for c in reversible_mut(&mut text, true) {
///     let _ = c;
/// }
/// ```
pub fn reversible_mut<C>(
    container: &mut C,
    direction: impl Into<Direction>,
) -> ReversibleMut<'_, C>
where
    C: TraversableMut + ?Sized,
{
    ReversibleMut::new(container, direction.into())
}
