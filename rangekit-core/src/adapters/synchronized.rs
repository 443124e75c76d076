//! Lockstep iteration over several containers.
//!
//! A synchronized view borrows N containers and walks them together, one
//! element from each per step. The sequence is as long as the shortest
//! container: it ends as soon as any cursor runs out.
//!
//! ```rust
//! use rangekit_core::synchronized;
//!
//! let values = vec![0, 1, 2, 3, 4, 5];
//! let labels = vec!["0", "1", "2", "3"];
//!
//! let mut pairs = Vec::new();
//! for (value, label) in synchronized!(values, labels) {
//!     pairs.push(format!("{value} -> {label}"));
//! }
//! assert_eq!(pairs, ["0 -> 0", "1 -> 1", "2 -> 2", "3 -> 3"]);
//! ```
//!
//! Each step holds the current element of every container by value:
//! borrowed elements are cloned out through [`Detach`], flat values such as
//! `char` pass through. [`Synchronized::iter_refs`] walks the same steps
//! without copying, yielding the containers' own borrows instead.
//!
//! Containers of different types are supplied as a tuple of references
//! (arity 1 to 12). Containers of one type may also be supplied as an array,
//! which yields an array per step. An empty array is rejected at build time:
//!
//! ```compile_fail
//! use rangekit_core::adapters::synchronized::synchronized;
//!
//! let sources: [&Vec<i32>; 0] = [];
//! for step in synchronized(sources) {
//!     let _ = step;
//! }
//! ```

use core::iter::FusedIterator;

use tracing::{debug, trace};

use crate::foundation::{
    container::Traversable,
    error::{Error, Result},
    iterator::IteratorAdapter,
};

// ============================================================================
// Cursor and Source Sets
// ============================================================================

/// A fixed set of cursors advanced together.
pub trait CursorSet {
    /// One element from every cursor, in supply order.
    type Item;

    /// Number of cursors in the set. Never zero.
    const ARITY: usize;

    /// Advances every cursor once and collects their elements.
    ///
    /// Returns `None` as soon as any cursor is exhausted. Cursors are
    /// advanced in supply order and the ones after the exhausted cursor are
    /// left untouched.
    fn advance(&mut self) -> Option<Self::Item>;

    /// Bounds on the remaining steps: the minimum over all cursors.
    fn size_hint(&self) -> (usize, Option<usize>);
}

/// A fixed set of borrowed containers that can start a lockstep walk.
pub trait SourceSet {
    /// The cursors over every container.
    type Cursors: CursorSet;

    /// Number of containers in the set. Never zero.
    const ARITY: usize;

    /// Starts one cursor per container.
    fn begin(&self) -> Self::Cursors;

    /// Exact length of every container, `None` where it is not known up front.
    fn lengths(&self) -> Vec<Option<usize>>;
}

/// Arity of an array of sources or cursors.
///
/// Evaluating `VALUE` for `N == 0` fails the build.
struct ArrayArity<const N: usize>;

impl<const N: usize> ArrayArity<N> {
    const VALUE: usize = {
        assert!(N > 0, "a lockstep walk needs at least one container");
        N
    };
}

#[inline]
fn exact_len<I: Iterator>(iter: &I) -> Option<usize> {
    match iter.size_hint() {
        (lower, Some(upper)) if lower == upper => Some(lower),
        _ => None,
    }
}

#[inline]
fn min_hint(a: (usize, Option<usize>), b: (usize, Option<usize>)) -> (usize, Option<usize>) {
    let upper = match (a.1, b.1) {
        (Some(x), Some(y)) => Some(x.min(y)),
        (Some(x), None) | (None, Some(x)) => Some(x),
        (None, None) => None,
    };
    (a.0.min(b.0), upper)
}

macro_rules! impl_lockstep_tuple {
    ($arity:expr; $(($C:ident, $I:ident, $idx:tt)),+ $(,)?) => {
        impl<$($I: Iterator),+> CursorSet for ($($I,)+) {
            type Item = ($($I::Item,)+);
            const ARITY: usize = $arity;

            #[inline]
            fn advance(&mut self) -> Option<Self::Item> {
                Some(($(self.$idx.next()?,)+))
            }

            #[inline]
            fn size_hint(&self) -> (usize, Option<usize>) {
                let hint = (usize::MAX, None);
                $(let hint = min_hint(hint, self.$idx.size_hint());)+
                hint
            }
        }

        impl<'a, $($C: Traversable + ?Sized),+> SourceSet for ($(&'a $C,)+) {
            type Cursors = ($(<$C as Traversable>::Iter<'a>,)+);
            const ARITY: usize = $arity;

            #[inline]
            fn begin(&self) -> Self::Cursors {
                ($(self.$idx.traverse(),)+)
            }

            fn lengths(&self) -> Vec<Option<usize>> {
                vec![$(exact_len(&self.$idx.traverse()),)+]
            }
        }

        impl<$($I: ExactSizeIterator),+> ExactSizeIterator for SynchronizedRefs<($($I,)+)> {}

        impl<$($I: Detach),+> Detach for ($($I,)+) {
            type Detached = ($($I::Detached,)+);

            #[inline]
            fn detach(self) -> Self::Detached {
                ($(self.$idx.detach(),)+)
            }
        }
    };
}

impl_lockstep_tuple!(1; (A, IA, 0));
impl_lockstep_tuple!(2; (A, IA, 0), (B, IB, 1));
impl_lockstep_tuple!(3; (A, IA, 0), (B, IB, 1), (C, IC, 2));
impl_lockstep_tuple!(4; (A, IA, 0), (B, IB, 1), (C, IC, 2), (D, ID, 3));
impl_lockstep_tuple!(5; (A, IA, 0), (B, IB, 1), (C, IC, 2), (D, ID, 3), (E, IE, 4));
impl_lockstep_tuple!(6; (A, IA, 0), (B, IB, 1), (C, IC, 2), (D, ID, 3), (E, IE, 4), (F, IF, 5));
impl_lockstep_tuple!(
    7;
    (A, IA, 0), (B, IB, 1), (C, IC, 2), (D, ID, 3), (E, IE, 4), (F, IF, 5), (G, IG, 6),
);
impl_lockstep_tuple!(
    8;
    (A, IA, 0), (B, IB, 1), (C, IC, 2), (D, ID, 3), (E, IE, 4), (F, IF, 5), (G, IG, 6), (H, IH, 7),
);
impl_lockstep_tuple!(
    9;
    (A, IA, 0), (B, IB, 1), (C, IC, 2), (D, ID, 3), (E, IE, 4), (F, IF, 5), (G, IG, 6), (H, IH, 7),
    (J, IJ, 8),
);
impl_lockstep_tuple!(
    10;
    (A, IA, 0), (B, IB, 1), (C, IC, 2), (D, ID, 3), (E, IE, 4), (F, IF, 5), (G, IG, 6), (H, IH, 7),
    (J, IJ, 8), (K, IK, 9),
);
impl_lockstep_tuple!(
    11;
    (A, IA, 0), (B, IB, 1), (C, IC, 2), (D, ID, 3), (E, IE, 4), (F, IF, 5), (G, IG, 6), (H, IH, 7),
    (J, IJ, 8), (K, IK, 9), (L, IL, 10),
);
impl_lockstep_tuple!(
    12;
    (A, IA, 0), (B, IB, 1), (C, IC, 2), (D, ID, 3), (E, IE, 4), (F, IF, 5), (G, IG, 6), (H, IH, 7),
    (J, IJ, 8), (K, IK, 9), (L, IL, 10), (M, IM, 11),
);

impl<I, const N: usize> CursorSet for [I; N]
where
    I: Iterator,
{
    type Item = [I::Item; N];
    const ARITY: usize = ArrayArity::<N>::VALUE;

    fn advance(&mut self) -> Option<Self::Item> {
        let mut slots: [Option<I::Item>; N] = core::array::from_fn(|_| None);
        for (slot, cursor) in slots.iter_mut().zip(self.iter_mut()) {
            *slot = Some(cursor.next()?);
        }
        Some(slots.map(|slot| match slot {
            Some(item) => item,
            None => unreachable!("every cursor yielded an element"),
        }))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter()
            .map(Iterator::size_hint)
            .fold((usize::MAX, None), min_hint)
    }
}

impl<'a, C, const N: usize> SourceSet for [&'a C; N]
where
    C: Traversable + ?Sized,
{
    type Cursors = [C::Iter<'a>; N];
    const ARITY: usize = ArrayArity::<N>::VALUE;

    #[inline]
    fn begin(&self) -> Self::Cursors {
        self.map(|container| container.traverse())
    }

    fn lengths(&self) -> Vec<Option<usize>> {
        self.iter()
            .map(|container| exact_len(&container.traverse()))
            .collect()
    }
}

impl<I, const N: usize> ExactSizeIterator for SynchronizedRefs<[I; N]> where I: ExactSizeIterator {}

// ============================================================================
// Detaching Borrowed Elements
// ============================================================================

/// Conversion of one step's elements into owned values.
///
/// Shared borrows are detached through [`ToOwned`]; plain values pass
/// through unchanged. Tuples and arrays detach component by component.
pub trait Detach {
    /// The owned form.
    type Detached;

    /// Converts into the owned form.
    fn detach(self) -> Self::Detached;
}

impl<T> Detach for &T
where
    T: ToOwned + ?Sized,
{
    type Detached = T::Owned;

    #[inline]
    fn detach(self) -> Self::Detached {
        self.to_owned()
    }
}

macro_rules! impl_detach_identity {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Detach for $ty {
                type Detached = $ty;

                #[inline]
                fn detach(self) -> Self::Detached {
                    self
                }
            }
        )+
    };
}

impl_detach_identity!(
    char, bool, f32, f64, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize,
);

impl<T, const N: usize> Detach for [T; N]
where
    T: Detach,
{
    type Detached = [T::Detached; N];

    #[inline]
    fn detach(self) -> Self::Detached {
        self.map(Detach::detach)
    }
}

// ============================================================================
// Synchronized View
// ============================================================================

/// Read-only lockstep view over a set of borrowed containers.
///
/// Created by [`synchronized`] or the [`synchronized!`](crate::synchronized)
/// macro.
#[derive(Debug, Clone, Copy)]
pub struct Synchronized<S> {
    sources: S,
}

impl<S> Synchronized<S>
where
    S: SourceSet,
{
    /// Creates a new lockstep view.
    ///
    /// An empty array of sources does not compile.
    pub fn new(sources: S) -> Self {
        let arity = S::ARITY;
        trace!(arity, "synchronized view");
        Self { sources }
    }

    /// Returns the number of containers walked together.
    #[inline]
    pub const fn arity(&self) -> usize {
        S::ARITY
    }

    /// Returns the borrowed containers.
    #[inline]
    pub const fn sources(&self) -> &S {
        &self.sources
    }

    /// Starts a lockstep walk yielding each step by value.
    #[inline]
    pub fn iter(&self) -> SynchronizedIter<S::Cursors>
    where
        <S::Cursors as CursorSet>::Item: Detach,
    {
        self.iter_refs().into_values()
    }

    /// Starts a lockstep walk yielding the containers' own element borrows.
    ///
    /// Use this for element types that cannot be cloned, or to avoid the
    /// copies [`iter`](Self::iter) makes.
    #[inline]
    pub fn iter_refs(&self) -> SynchronizedRefs<S::Cursors> {
        SynchronizedRefs::new(self.sources.begin())
    }

    /// Returns the exact length of every container, in supply order.
    pub fn lengths(&self) -> Vec<Option<usize>> {
        self.sources.lengths()
    }

    /// Checks that every container has the same exact length.
    ///
    /// A plain synchronized view silently stops at the shortest container.
    /// This is the strict variant for callers that treat a length mismatch
    /// as a bug.
    pub fn check_equal_lengths(self) -> Result<Self> {
        let mut shortest = usize::MAX;
        let mut longest = 0;
        for (index, length) in self.lengths().into_iter().enumerate() {
            let length = length.ok_or(Error::UnknownLength { index })?;
            shortest = shortest.min(length);
            longest = longest.max(length);
        }

        if shortest != longest {
            debug!(shortest, longest, "synchronized containers differ in length");
            return Err(Error::LengthMismatch { shortest, longest });
        }
        Ok(self)
    }
}

impl<S> IntoIterator for Synchronized<S>
where
    S: SourceSet,
    <S::Cursors as CursorSet>::Item: Detach,
{
    type Item = <<S::Cursors as CursorSet>::Item as Detach>::Detached;
    type IntoIter = SynchronizedIter<S::Cursors>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S> IntoIterator for &Synchronized<S>
where
    S: SourceSet,
    <S::Cursors as CursorSet>::Item: Detach,
{
    type Item = <<S::Cursors as CursorSet>::Item as Detach>::Detached;
    type IntoIter = SynchronizedIter<S::Cursors>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Lockstep iterator yielding one borrowed element from every container.
///
/// Once any cursor is exhausted the iterator stays exhausted.
#[derive(Debug, Clone)]
pub struct SynchronizedRefs<K> {
    cursors: K,
    finished: bool,
}

impl<K> SynchronizedRefs<K>
where
    K: CursorSet,
{
    /// Creates a lockstep iterator over started cursors.
    ///
    /// An empty array of cursors does not compile:
    ///
    /// ```compile_fail
    /// use rangekit_core::adapters::synchronized::SynchronizedRefs;
    ///
    /// let cursors: [std::slice::Iter<'_, i32>; 0] = [];
    /// let steps = SynchronizedRefs::new(cursors);
    /// assert_eq!(steps.count(), 0);
    /// ```
    #[inline]
    pub const fn new(cursors: K) -> Self {
        let _arity: usize = K::ARITY;
        Self {
            cursors,
            finished: false,
        }
    }

    /// Switches to yielding every step by value.
    #[inline]
    pub const fn into_values(self) -> SynchronizedIter<K>
    where
        K::Item: Detach,
    {
        SynchronizedIter { steps: self }
    }
}

impl<K> Iterator for SynchronizedRefs<K>
where
    K: CursorSet,
{
    type Item = K::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let step = self.cursors.advance();
        if step.is_none() {
            self.finished = true;
        }
        step
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished {
            (0, Some(0))
        } else {
            self.cursors.size_hint()
        }
    }
}

impl<K> FusedIterator for SynchronizedRefs<K> where K: CursorSet {}

impl<K> IteratorAdapter for SynchronizedRefs<K>
where
    K: CursorSet,
{
    type Source = K;

    fn source(&self) -> &Self::Source {
        &self.cursors
    }

    fn source_mut(&mut self) -> &mut Self::Source {
        &mut self.cursors
    }
}

/// Lockstep iterator yielding one value from every container per step.
#[derive(Debug, Clone)]
pub struct SynchronizedIter<K> {
    steps: SynchronizedRefs<K>,
}

impl<K> Iterator for SynchronizedIter<K>
where
    K: CursorSet,
    K::Item: Detach,
{
    type Item = <K::Item as Detach>::Detached;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.steps.next().map(Detach::detach)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.steps.size_hint()
    }
}

impl<K> ExactSizeIterator for SynchronizedIter<K>
where
    K: CursorSet,
    K::Item: Detach,
    SynchronizedRefs<K>: ExactSizeIterator,
{
}

impl<K> FusedIterator for SynchronizedIter<K>
where
    K: CursorSet,
    K::Item: Detach,
{
}

impl<K> IteratorAdapter for SynchronizedIter<K>
where
    K: CursorSet,
    K::Item: Detach,
{
    type Source = K;

    fn source(&self) -> &Self::Source {
        self.steps.source()
    }

    fn source_mut(&mut self) -> &mut Self::Source {
        self.steps.source_mut()
    }
}

/// Creates a lockstep view over a tuple or array of borrowed containers.
///
/// ```rust
/// use rangekit_core::adapters::synchronized::synchronized;
///
/// let a = [1, 2, 3];
/// let b = [10, 20, 30];
/// let sums: Vec<i32> = synchronized([&a, &b]).into_iter().map(|[x, y]| x + y).collect();
/// assert_eq!(sums, vec![11, 22, 33]);
/// ```
pub fn synchronized<S>(sources: S) -> Synchronized<S>
where
    S: SourceSet,
{
    Synchronized::new(sources)
}

/// Creates a lockstep view over the given containers, borrowing each one.
///
/// `synchronized!(a, b, c)` is shorthand for `synchronized((&a, &b, &c))`.
#[macro_export]
macro_rules! synchronized {
    ($($container:expr),+ $(,)?) => {
        $crate::adapters::synchronized::synchronized(($(&$container,)+))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_stops_at_shortest() {
        let values = vec![0, 1, 2, 3, 4, 5];
        let labels = vec!["0", "1", "2", "3"];
        let pairs: Vec<_> = synchronized((&values, &labels)).into_iter().collect();
        assert_eq!(pairs, vec![(0, "0"), (1, "1"), (2, "2"), (3, "3")]);
    }

    #[test]
    fn test_steps_hold_values() {
        let ids = vec![1, 2];
        let names = vec![String::from("one"), String::from("two")];
        let steps: Vec<(i32, String)> = synchronized((&ids, &names)).into_iter().collect();
        assert_eq!(steps, vec![(1, "one".to_string()), (2, "two".to_string())]);
        assert_eq!(names, ["one", "two"]);
    }

    #[test]
    fn test_single_container() {
        let values = [7, 8];
        let steps: Vec<_> = synchronized((&values,)).into_iter().collect();
        assert_eq!(steps, vec![(7,), (8,)]);
    }

    #[test]
    fn test_empty_container_means_no_steps() {
        let values = vec![1, 2, 3];
        let empty: Vec<u8> = Vec::new();
        assert_eq!(synchronized((&values, &empty)).into_iter().count(), 0);
        assert_eq!(synchronized((&empty, &values)).into_iter().count(), 0);
    }

    #[test]
    fn test_later_cursors_untouched_on_exhaustion() {
        let short = [1];
        let long = [1, 2, 3];
        let mut iter = synchronized((&short, &long)).into_iter();
        assert!(iter.next().is_some());
        assert!(iter.next().is_none());
        assert_eq!(iter.source().1.len(), 2);
    }

    #[test]
    fn test_fused() {
        let a = [1];
        let b = [1, 2];
        let mut iter = synchronized((&a, &b)).into_iter();
        iter.next();
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.size_hint(), (0, Some(0)));
    }

    #[test]
    fn test_heterogeneous_shapes() {
        let numbers = vec![1, 2, 3];
        let text = "xyz";
        let set: BTreeSet<_> = ["c", "a", "b"].into_iter().collect();
        let steps: Vec<_> = synchronized((&numbers, text, &set)).into_iter().collect();
        assert_eq!(steps, vec![(1, 'x', "a"), (2, 'y', "b"), (3, 'z', "c")]);
    }

    #[test]
    fn test_size_hint_is_minimum() {
        let a = vec![0; 5];
        let b = vec![0; 3];
        let c = vec![0; 9];
        let iter = synchronized((&a, &b, &c)).into_iter();
        assert_eq!(iter.size_hint(), (3, Some(3)));
        assert_eq!(iter.len(), 3);
    }

    #[test]
    fn test_array_sources() {
        let a = vec![1, 2, 3, 4];
        let b = vec![10, 20, 30];
        let c = vec![100, 200, 300, 400];
        let view = synchronized([&a, &b, &c]);
        assert_eq!(view.arity(), 3);
        assert_eq!(<[&Vec<i32>; 3] as SourceSet>::ARITY, 3);

        let sums: Vec<i32> = view.iter().map(|step| step.into_iter().sum()).collect();
        assert_eq!(sums, vec![111, 222, 333]);
        assert_eq!(view.iter().len(), 3);
    }

    #[test]
    fn test_borrowed_walk() {
        struct Token(u8);

        let tokens = vec![Token(1), Token(2), Token(3)];
        let weights = vec![0.5, 1.5];
        let view = synchronized((&tokens, &weights));

        let mut total = 0.0;
        for (token, weight) in view.iter_refs() {
            total += f64::from(token.0) * weight;
        }
        assert!((total - 3.5).abs() < f64::EPSILON);
        assert_eq!(view.iter_refs().len(), 2);

        let detached: Vec<(u8, f64)> = synchronized((&[4u8, 5], &weights))
            .iter_refs()
            .into_values()
            .collect();
        assert_eq!(detached, vec![(4, 0.5), (5, 1.5)]);
    }

    #[test]
    fn test_check_equal_lengths() {
        let a = vec![1, 2, 3];
        let b = vec!['a', 'b', 'c'];
        assert!(synchronized((&a, &b)).check_equal_lengths().is_ok());

        let c = vec![1.0, 2.0];
        let error = synchronized((&a, &b, &c)).check_equal_lengths().unwrap_err();
        assert_eq!(
            error,
            Error::LengthMismatch {
                shortest: 2,
                longest: 3
            }
        );
    }

    #[test]
    fn test_check_equal_lengths_unknown() {
        let a = vec![1, 2, 3];
        let error = synchronized((&a, "abc")).check_equal_lengths().unwrap_err();
        assert_eq!(error, Error::UnknownLength { index: 1 });
    }

    #[test]
    fn test_macro() {
        let values = vec![0, 1, 2, 3, 4, 5];
        let labels = vec!["0", "1", "2", "3"];
        let view = crate::synchronized!(values, labels);
        assert_eq!(view.lengths(), vec![Some(6), Some(4)]);
        assert_eq!(view.into_iter().count(), 4);
    }
}
