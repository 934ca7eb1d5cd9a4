//! The breakable (fallible) pull family: the same protocol as [`pull`](crate::pull) with an
//! error threaded through every stage.
//!
//! A [`TryPull`] produces `Result<Option<Item>, Error>`: `Ok(Some(_))` is an element,
//! `Ok(None)` is clean exhaustion, `Err(_)` is a failure from somewhere in the chain. Adaptor
//! closures are fallible, and the first error any stage produces propagates outward unchanged -
//! no stage swallows or wraps it, and no stage pulls further upstream elements afterwards.
//! After an error, the chain's only supported use is dropping it (or resetting, where the types
//! allow); it is not required to repeat the same error on a later pull.
//!
//! Terminal callbacks take the error channel one step further: they return
//! [`Stop`], so a callback can end the traversal early with [`Stop::Break`] without the caller
//! ever seeing a failure, while [`Stop::Fail`] surfaces as the terminal's own `Err`.

mod adapt;
mod error;
mod lift;

pub use adapt::*;
pub use error::*;
pub use lift::*;

use std::collections::HashMap;
use std::hash::Hash;

/// A pull-based cursor whose stages can fail.
///
/// The exhaustion contract matches [`Pull`](crate::pull::Pull): after `Ok(None)`, every later
/// call also returns `Ok(None)`. After an `Err`, further calls are unsupported - stop pulling.
///
/// # Examples
/// ```
/// use loop_lib::brk::TryPull;
/// use loop_lib::pull::Pull;
/// use loop_lib::pull::slice::SlicePull;
///
/// let digits = ["4", "17", "2"];
/// let parsed = SlicePull::new(&digits)
///     .fallible()
///     .convert(|d| d.parse::<u32>())
///     .to_vec();
/// assert_eq!(parsed, Ok(vec![4, 17, 2]));
/// ```
pub trait TryPull {
    /// The type of element this cursor produces.
    type Item;

    /// The error any stage of the chain can fail with.
    type Error;

    /// Produces the next element, clean exhaustion, or the first failure.
    fn next(&mut self) -> Result<Option<Self::Item>, Self::Error>;

    /// Lazily applies a fallible transform to every element.
    fn convert<U, F>(self, convert: F) -> Convert<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> Result<U, Self::Error>,
    {
        Convert::new(self, convert)
    }

    /// Lazily transforms elements, discarding those the transform maps to [`None`].
    fn convert_check<U, F>(self, check: F) -> ConvertCheck<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> Result<Option<U>, Self::Error>,
    {
        ConvertCheck::new(self, check)
    }

    /// Lazily discards elements failing the fallible predicate.
    fn filt<F>(self, pred: F) -> Filt<Self, F>
    where
        Self: Sized,
        F: FnMut(&Self::Item) -> Result<bool, Self::Error>,
    {
        Filt::new(self, pred)
    }

    /// Lazily expands every element into a sub-sequence via a fallible expander.
    fn flat<I, F>(self, expand: F) -> Flat<Self, F, I>
    where
        Self: Sized,
        I: IntoIterator,
        F: FnMut(Self::Item) -> Result<I, Self::Error>,
    {
        Flat::new(self, expand)
    }

    /// [`filt`](TryPull::filt) on the source elements, then [`flat`](TryPull::flat) on the
    /// survivors.
    fn filt_flat<I, P, F>(self, pred: P, expand: F) -> Flat<Filt<Self, P>, F, I>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> Result<bool, Self::Error>,
        I: IntoIterator,
        F: FnMut(Self::Item) -> Result<I, Self::Error>,
    {
        self.filt(pred).flat(expand)
    }

    /// [`flat`](TryPull::flat) on the source elements, then [`filt`](TryPull::filt) on the
    /// expansion.
    fn flat_filt<I, F, P>(self, expand: F, pred: P) -> Filt<Flat<Self, F, I>, P>
    where
        Self: Sized,
        I: IntoIterator,
        F: FnMut(Self::Item) -> Result<I, Self::Error>,
        P: FnMut(&I::Item) -> Result<bool, Self::Error>,
    {
        self.flat(expand).filt(pred)
    }

    /// Exposes this chain as a [`std::iter::Iterator`] of [`Result`] elements. The iterator
    /// fuses after yielding an error.
    fn iterator(self) -> TryPullIter<Self>
    where
        Self: Sized,
    {
        TryPullIter::new(self)
    }

    /// Drives the chain to exhaustion, collecting every element, or stops at the first failure.
    fn to_vec(mut self) -> Result<Vec<Self::Item>, Self::Error>
    where
        Self: Sized,
    {
        let mut out = Vec::new();
        while let Some(item) = self.next()? {
            out.push(item);
        }
        Ok(out)
    }

    /// Folds the elements pairwise with a fallible merge, seeding from the first element.
    /// `Ok(None)` means the source was exhausted before producing anything.
    fn reduce<F>(mut self, mut merge: F) -> Result<Option<Self::Item>, Self::Error>
    where
        Self: Sized,
        F: FnMut(Self::Item, Self::Item) -> Result<Self::Item, Self::Error>,
    {
        let Some(mut acc) = self.next()? else {
            return Ok(None);
        };
        while let Some(item) = self.next()? {
            acc = merge(acc, item)?;
        }
        Ok(Some(acc))
    }

    /// Drives the chain to exhaustion, bucketing every element by its (fallibly) extracted key.
    fn group<K, F>(mut self, mut key: F) -> Result<HashMap<K, Vec<Self::Item>>, Self::Error>
    where
        Self: Sized,
        K: Hash + Eq,
        F: FnMut(&Self::Item) -> Result<K, Self::Error>,
    {
        let mut buckets: HashMap<K, Vec<Self::Item>> = HashMap::new();
        while let Some(item) = self.next()? {
            buckets.entry(key(&item)?).or_default().push(item);
        }
        Ok(buckets)
    }

    /// Pulls until an element satisfies the fallible predicate and returns it, or `Ok(None)` if
    /// the source exhausts first.
    fn first<F>(mut self, mut pred: F) -> Result<Option<Self::Item>, Self::Error>
    where
        Self: Sized,
        F: FnMut(&Self::Item) -> Result<bool, Self::Error>,
    {
        while let Some(item) = self.next()? {
            if pred(&item)? {
                return Ok(Some(item));
            }
        }
        Ok(None)
    }

    /// Returns whether any element satisfies the fallible predicate, pulling no further than
    /// the match.
    fn has_any<F>(self, pred: F) -> Result<bool, Self::Error>
    where
        Self: Sized,
        F: FnMut(&Self::Item) -> Result<bool, Self::Error>,
    {
        self.first(pred).map(|found| found.is_some())
    }

    /// Drives the chain, invoking the callback on every element.
    ///
    /// The callback may return [`Stop::Break`] to end the traversal early; that is control
    /// flow, not a failure, and the terminal returns `Ok(())` for it. [`Stop::Fail`] - which
    /// `?` produces from any real error, via `From` - surfaces as this terminal's `Err`.
    fn for_each<F>(mut self, mut each: F) -> Result<(), Self::Error>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> Result<(), Stop<Self::Error>>,
    {
        while let Some(item) = self.next()? {
            match each(item) {
                Ok(()) => {},
                Err(Stop::Break) => return Ok(()),
                Err(Stop::Fail(error)) => return Err(error),
            }
        }
        Ok(())
    }

    /// Drives the chain, invoking the callback with each element's position. Breaks and fails
    /// exactly as [`for_each`](TryPull::for_each) does.
    fn track<F>(mut self, mut each: F) -> Result<(), Self::Error>
    where
        Self: Sized,
        F: FnMut(usize, Self::Item) -> Result<(), Stop<Self::Error>>,
    {
        let mut at = 0;
        while let Some(item) = self.next()? {
            match each(at, item) {
                Ok(()) => {},
                Err(Stop::Break) => return Ok(()),
                Err(Stop::Fail(error)) => return Err(error),
            }
            at += 1;
        }
        Ok(())
    }
}

impl<P: TryPull + ?Sized> TryPull for &mut P {
    type Item = P::Item;
    type Error = P::Error;

    fn next(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        (**self).next()
    }
}
