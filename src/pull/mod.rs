//! The pull iteration protocol and everything that speaks it.
//!
//! A [`Pull`] is a single-owner cursor: each call to [`next`](Pull::next) either produces the
//! next element or reports exhaustion, and exhaustion is permanent. Adaptors wrap one upstream
//! pull and are themselves pulls, so chains compose the same way [`std::iter`] chains do.
//! Terminal operations drive the outermost pull to completion.
//!
//! Element order is strictly the upstream order at every stage. No adaptor reorders, deduplicates
//! or buffers beyond what it structurally must (a flattening stage holds the one sub-sequence it
//! is currently draining, nothing more).

pub mod adapt;
pub mod bridge;
pub mod map;
pub mod slice;


use std::collections::HashMap;
use std::hash::Hash;

use adapt::{Cloned, Convert, ConvertCheck, Copied, Filt, Flat, MultiKeyValues};
use bridge::PullIter;

use crate::brk::Fallible;

/// A pull-based cursor over a sequence of elements.
///
/// # Contract
/// Once [`next`](Pull::next) has returned [`None`], every later call must also return [`None`]
/// (no resurrection). Types that can rewind do so through the separate, opt-in [`Reset`] trait.
/// A pull is a single-owner cursor; it is never safe to assume a partially consumed chain can be
/// shared, and the underlying data must not be mutated while the chain is live.
///
/// # Examples
/// ```
/// use loop_lib::pull::Pull;
/// use loop_lib::pull::slice::SlicePull;
///
/// let nums = [1, 2, 3, 4, 5, 6];
/// let even = SlicePull::new(&nums)
///     .filt(|n| **n % 2 == 0)
///     .convert(|n| n.to_string())
///     .to_vec();
/// assert_eq!(even, ["2", "4", "6"]);
/// ```
pub trait Pull {
    /// The type of element this cursor produces.
    type Item;

    /// Produces the next element, or [`None`] once the source is exhausted.
    fn next(&mut self) -> Option<Self::Item>;

    /// Lazily applies a transform to every element. (1:1, no filtering.)
    fn convert<U, F>(self, convert: F) -> Convert<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> U,
    {
        Convert::new(self, convert)
    }

    /// Lazily transforms elements, discarding those for which the transform returns [`None`].
    ///
    /// The returned pull loops internally past discarded elements, so a long run of them costs
    /// iteration, not stack.
    fn convert_check<U, F>(self, check: F) -> ConvertCheck<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> Option<U>,
    {
        ConvertCheck::new(self, check)
    }

    /// Clones every element out of a pull over references.
    fn cloned<'a, T>(self) -> Cloned<Self>
    where
        Self: Sized + Pull<Item = &'a T>,
        T: Clone + 'a,
    {
        Cloned::new(self)
    }

    /// Copies every element out of a pull over references.
    fn copied<'a, T>(self) -> Copied<Self>
    where
        Self: Sized + Pull<Item = &'a T>,
        T: Copy + 'a,
    {
        Copied::new(self)
    }

    /// Lazily discards elements failing the predicate.
    ///
    /// Like [`convert_check`](Pull::convert_check), rejection is an iterative find-next loop.
    fn filt<F>(self, pred: F) -> Filt<Self, F>
    where
        Self: Sized,
        F: FnMut(&Self::Item) -> bool,
    {
        Filt::new(self, pred)
    }

    /// Lazily expands every element into a sub-sequence and yields the sub-sequences' elements
    /// in order. (1:N.)
    ///
    /// Empty expansions contribute zero elements, not a gap; the pull skips past them to the
    /// next non-empty one.
    fn flat<I, F>(self, expand: F) -> Flat<Self, F, I>
    where
        Self: Sized,
        I: IntoIterator,
        F: FnMut(Self::Item) -> I,
    {
        Flat::new(self, expand)
    }

    /// [`filt`](Pull::filt) on the source elements, then [`flat`](Pull::flat) on the survivors.
    fn filt_flat<I, P, F>(self, pred: P, expand: F) -> Flat<Filt<Self, P>, F, I>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
        I: IntoIterator,
        F: FnMut(Self::Item) -> I,
    {
        self.filt(pred).flat(expand)
    }

    /// [`flat`](Pull::flat) on the source elements, then [`filt`](Pull::filt) on the expansion.
    fn flat_filt<I, F, P>(self, expand: F, pred: P) -> Filt<Flat<Self, F, I>, P>
    where
        Self: Sized,
        I: IntoIterator,
        F: FnMut(Self::Item) -> I,
        P: FnMut(&I::Item) -> bool,
    {
        self.flat(expand).filt(pred)
    }

    /// Projects every element to a key/value pair. (1 key, 1 value per element.)
    fn key_values<K, V, F>(self, entry: F) -> Convert<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> (K, V),
    {
        self.convert(entry)
    }

    /// Projects every element to N keys and M values and yields their cross product, iterating
    /// values fastest. (N×M pairs per element.)
    ///
    /// An element whose key set or value set is empty contributes no pairs.
    fn multi_key_values<K, V, FK, FV>(
        self,
        keys: FK,
        values: FV,
    ) -> MultiKeyValues<Self, FK, FV, K, V>
    where
        Self: Sized,
        K: Clone,
        V: Clone,
        FK: FnMut(&Self::Item) -> Vec<K>,
        FV: FnMut(&Self::Item) -> Vec<V>,
    {
        MultiKeyValues::new(self, keys, values)
    }

    /// Lifts this pull into the fallible family with error type `E`. It never actually fails;
    /// the lift exists so an infallible source can feed a chain of fallible stages.
    fn fallible<E>(self) -> Fallible<Self, E>
    where
        Self: Sized,
    {
        Fallible::new(self)
    }

    /// Exposes this pull as a [`std::iter::Iterator`], consuming it.
    ///
    /// The result is a [`FusedIterator`](std::iter::FusedIterator): the [`Pull`] contract
    /// already guarantees exhaustion is permanent.
    fn iterator(self) -> PullIter<Self>
    where
        Self: Sized,
    {
        PullIter::new(self)
    }

    /// Drives the pull to exhaustion, collecting every element. An immediately exhausted pull
    /// collects to an empty [`Vec`].
    fn to_vec(mut self) -> Vec<Self::Item>
    where
        Self: Sized,
    {
        let mut out = Vec::new();
        while let Some(item) = self.next() {
            out.push(item);
        }
        out
    }

    /// Drives the pull to exhaustion, counting the elements.
    fn count(mut self) -> usize
    where
        Self: Sized,
    {
        let mut count = 0;
        while self.next().is_some() {
            count += 1;
        }
        count
    }

    /// Folds the elements pairwise, seeding the accumulator with the first element.
    ///
    /// Returns [`None`] for an exhausted source. For a single-element source the merge function
    /// is never invoked.
    fn reduce<F>(mut self, mut merge: F) -> Option<Self::Item>
    where
        Self: Sized,
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        let mut acc = self.next()?;
        while let Some(item) = self.next() {
            acc = merge(acc, item);
        }
        Some(acc)
    }

    /// Drives the pull to exhaustion, bucketing every element by its extracted key.
    ///
    /// Within a bucket, elements keep source order.
    fn group<K, F>(mut self, mut key: F) -> HashMap<K, Vec<Self::Item>>
    where
        Self: Sized,
        K: Hash + Eq,
        F: FnMut(&Self::Item) -> K,
    {
        let mut buckets: HashMap<K, Vec<Self::Item>> = HashMap::new();
        while let Some(item) = self.next() {
            buckets.entry(key(&item)).or_default().push(item);
        }
        buckets
    }

    /// Pulls until an element satisfies the predicate and returns it, or [`None`] if the source
    /// exhausts first. Elements after the match are never pulled.
    fn first<F>(mut self, mut pred: F) -> Option<Self::Item>
    where
        Self: Sized,
        F: FnMut(&Self::Item) -> bool,
    {
        while let Some(item) = self.next() {
            if pred(&item) {
                return Some(item);
            }
        }
        None
    }

    /// Returns true if any element satisfies the predicate, pulling no further than the match.
    fn has_any<F>(self, pred: F) -> bool
    where
        Self: Sized,
        F: FnMut(&Self::Item) -> bool,
    {
        self.first(pred).is_some()
    }

    /// Drives the pull to exhaustion, invoking the callback on every element.
    fn for_each<F>(mut self, mut each: F)
    where
        Self: Sized,
        F: FnMut(Self::Item),
    {
        while let Some(item) = self.next() {
            each(item);
        }
    }

    /// Drives the pull to exhaustion, invoking the callback with each element's position.
    fn track<F>(mut self, mut each: F)
    where
        Self: Sized,
        F: FnMut(usize, Self::Item),
    {
        let mut at = 0;
        while let Some(item) = self.next() {
            each(at, item);
            at += 1;
        }
    }
}

impl<P: Pull + ?Sized> Pull for &mut P {
    type Item = P::Item;

    fn next(&mut self) -> Option<Self::Item> {
        (**self).next()
    }
}

/// The opt-in capability to rewind a [`Pull`] back to its not-started state.
///
/// Resetting an exhausted cursor permits a fresh traversal; without this trait, exhaustion is
/// final. Adaptors implement `Reset` whenever their source does, discarding any pending
/// intermediate state of their own.
pub trait Reset {
    /// Rewinds the cursor so the next pull starts from the beginning again.
    fn reset(&mut self);
}
