//! Iterator extensions and the direction-switching cursor.
//!
//! [`ReversibleIter`] is the iteration object behind every reversible view.
//! It wraps one double-ended cursor pair and steps whichever end the
//! [`Direction`] selects, so a single loop body can walk a container either
//! way depending on state evaluated before the loop.
//!
//! ## Design Principles
//!
//! - **Zero-Cost**: the direction is matched per step, no boxing or dynamic
//!   dispatch is involved
//! - **Transparent**: size hints, exactness and fusing are forwarded from the
//!   wrapped cursor

#![allow(clippy::module_name_repetitions)]

use core::iter::FusedIterator;

use crate::foundation::types::Direction;

// ============================================================================
// Core Iterator Traits
// ============================================================================

/// Base trait for the iteration objects produced by the adapters.
///
/// Gives access to the cursor (or cursor set) an adapter is driving.
pub trait IteratorAdapter: Iterator + Sized {
    /// The source iterator type.
    type Source;

    /// Returns a reference to the source iterator.
    fn source(&self) -> &Self::Source;

    /// Returns a mutable reference to the source iterator.
    fn source_mut(&mut self) -> &mut Self::Source;
}

// ============================================================================
// Direction-Switching Cursor
// ============================================================================

/// Iterator that steps the front or the back of a double-ended cursor.
///
/// With [`Direction::Forward`] every step takes the next element from the
/// front; with [`Direction::Backward`] every step takes it from the back.
/// The sequence ends when the active end meets the other one, which is
/// exactly when the wrapped iterator is exhausted.
#[derive(Debug, Clone)]
pub struct ReversibleIter<I> {
    iter: I,
    direction: Direction,
}

impl<I> ReversibleIter<I>
where
    I: DoubleEndedIterator,
{
    /// Creates a new direction-switching iterator.
    #[inline]
    pub const fn new(iter: I, direction: Direction) -> Self {
        Self { iter, direction }
    }

    /// Returns the traversal direction.
    #[inline]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Consumes the adapter, returning the wrapped cursor.
    #[inline]
    pub fn into_inner(self) -> I {
        self.iter
    }
}

impl<I> Iterator for ReversibleIter<I>
where
    I: DoubleEndedIterator,
{
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        match self.direction {
            Direction::Forward => self.iter.next(),
            Direction::Backward => self.iter.next_back(),
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<I> DoubleEndedIterator for ReversibleIter<I>
where
    I: DoubleEndedIterator,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        match self.direction {
            Direction::Forward => self.iter.next_back(),
            Direction::Backward => self.iter.next(),
        }
    }
}

impl<I> ExactSizeIterator for ReversibleIter<I>
where
    I: DoubleEndedIterator + ExactSizeIterator,
{
    #[inline]
    fn len(&self) -> usize {
        self.iter.len()
    }
}

impl<I> FusedIterator for ReversibleIter<I> where I: DoubleEndedIterator + FusedIterator {}

impl<I> IteratorAdapter for ReversibleIter<I>
where
    I: DoubleEndedIterator,
{
    type Source = I;

    fn source(&self) -> &Self::Source {
        &self.iter
    }

    fn source_mut(&mut self) -> &mut Self::Source {
        &mut self.iter
    }
}

/// Extension trait for double-ended iterators.
pub trait IteratorExt: DoubleEndedIterator {
    /// Walks this iterator in a direction chosen at runtime.
    ///
    /// Accepts a [`Direction`] or a `bool` where `true` means backward.
    ///
    /// ```rust
    /// use rangekit_core::foundation::iterator::IteratorExt;
    ///
    /// let backward = true;
    /// let values: Vec<_> = (0..4).directed(backward).collect();
    /// assert_eq!(values, vec![3, 2, 1, 0]);
    /// ```
    fn directed(self, direction: impl Into<Direction>) -> ReversibleIter<Self>
    where
        Self: Sized,
    {
        ReversibleIter::new(self, direction.into())
    }
}

impl<I: DoubleEndedIterator> IteratorExt for I {}
