use std::iter::FusedIterator;
use std::marker::PhantomData;

use crate::pull::{Pull, Reset};

use super::TryPull;

/// An infallible pull lifted into the fallible family. See [`Pull::fallible`].
///
/// Every pull succeeds by construction; the error type exists only so downstream fallible
/// stages have a channel to fail through.
pub struct Fallible<P, E> {
    pub(crate) source: P,
    // We never produce an E, but the trait needs us to name one.
    pub(crate) _error: PhantomData<E>,
}

impl<P, E> Fallible<P, E> {
    pub(crate) const fn new(source: P) -> Fallible<P, E> {
        Fallible {
            source,
            _error: PhantomData,
        }
    }
}

impl<P: Pull, E> TryPull for Fallible<P, E> {
    type Item = P::Item;
    type Error = E;

    fn next(&mut self) -> Result<Option<P::Item>, E> {
        Ok(self.source.next())
    }
}

impl<P: Reset, E> Reset for Fallible<P, E> {
    fn reset(&mut self) {
        self.source.reset();
    }
}

/// A fallible chain exposed as a [`std::iter::Iterator`] of [`Result`] elements. See
/// [`TryPull::iterator`].
///
/// Because a [`TryPull`] makes no promises after its first error, this iterator fuses itself
/// once it has yielded one: clean exhaustion and a reported failure both end it for good.
pub struct TryPullIter<P> {
    pub(crate) source: P,
    pub(crate) done: bool,
}

impl<P> TryPullIter<P> {
    pub(crate) const fn new(source: P) -> TryPullIter<P> {
        TryPullIter {
            source,
            done: false,
        }
    }
}

impl<P: TryPull> Iterator for TryPullIter<P> {
    type Item = Result<P::Item, P::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.source.next() {
            Ok(Some(item)) => Some(Ok(item)),
            Ok(None) => {
                self.done = true;
                None
            },
            Err(error) => {
                self.done = true;
                Some(Err(error))
            },
        }
    }
}

impl<P: TryPull> FusedIterator for TryPullIter<P> {}

impl<P: Reset> Reset for TryPullIter<P> {
    fn reset(&mut self) {
        self.done = false;
        self.source.reset();
    }
}
