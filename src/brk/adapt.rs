//! Fallible adaptors. Shapes mirror [`pull::adapt`](crate::pull::adapt) with the error channel
//! threaded through: `?` on the upstream pull forwards an upstream failure, `?` on the closure
//! aborts the current pull with the closure's failure. Either way the chain stops pulling.

use crate::pull::Reset;

use super::TryPull;

/// The fallible 1:1 transforming pull. See [`TryPull::convert`].
pub struct Convert<P, F> {
    pub(crate) source: P,
    pub(crate) convert: F,
}

impl<P, F> Convert<P, F> {
    pub(crate) const fn new(source: P, convert: F) -> Convert<P, F> {
        Convert { source, convert }
    }
}

impl<U, P, F> TryPull for Convert<P, F>
where
    P: TryPull,
    F: FnMut(P::Item) -> Result<U, P::Error>,
{
    type Item = U;
    type Error = P::Error;

    fn next(&mut self) -> Result<Option<U>, P::Error> {
        match self.source.next()? {
            Some(item) => (self.convert)(item).map(Some),
            None => Ok(None),
        }
    }
}

impl<P: Reset, F> Reset for Convert<P, F> {
    fn reset(&mut self) {
        self.source.reset();
    }
}

/// The fallible transform-and-filter pull. See [`TryPull::convert_check`].
pub struct ConvertCheck<P, F> {
    pub(crate) source: P,
    pub(crate) check: F,
}

impl<P, F> ConvertCheck<P, F> {
    pub(crate) const fn new(source: P, check: F) -> ConvertCheck<P, F> {
        ConvertCheck { source, check }
    }
}

impl<U, P, F> TryPull for ConvertCheck<P, F>
where
    P: TryPull,
    F: FnMut(P::Item) -> Result<Option<U>, P::Error>,
{
    type Item = U;
    type Error = P::Error;

    fn next(&mut self) -> Result<Option<U>, P::Error> {
        loop {
            let Some(item) = self.source.next()? else {
                return Ok(None);
            };
            if let Some(kept) = (self.check)(item)? {
                return Ok(Some(kept));
            }
        }
    }
}

impl<P: Reset, F> Reset for ConvertCheck<P, F> {
    fn reset(&mut self) {
        self.source.reset();
    }
}

/// The fallible predicate-gated pass-through pull. See [`TryPull::filt`].
pub struct Filt<P, F> {
    pub(crate) source: P,
    pub(crate) pred: F,
}

impl<P, F> Filt<P, F> {
    pub(crate) const fn new(source: P, pred: F) -> Filt<P, F> {
        Filt { source, pred }
    }
}

impl<P, F> TryPull for Filt<P, F>
where
    P: TryPull,
    F: FnMut(&P::Item) -> Result<bool, P::Error>,
{
    type Item = P::Item;
    type Error = P::Error;

    fn next(&mut self) -> Result<Option<P::Item>, P::Error> {
        loop {
            let Some(item) = self.source.next()? else {
                return Ok(None);
            };
            if (self.pred)(&item)? {
                return Ok(Some(item));
            }
        }
    }
}

impl<P: Reset, F> Reset for Filt<P, F> {
    fn reset(&mut self) {
        self.source.reset();
    }
}

/// The fallible 1:N expanding pull. See [`TryPull::flat`].
///
/// Same two-level cursor as the plain version; a failed expansion aborts the pull before any of
/// that element's expansion is yielded.
pub struct Flat<P, F, I: IntoIterator> {
    pub(crate) source: P,
    pub(crate) expand: F,
    pub(crate) pending: Option<I::IntoIter>,
}

impl<P, F, I: IntoIterator> Flat<P, F, I> {
    pub(crate) const fn new(source: P, expand: F) -> Flat<P, F, I> {
        Flat {
            source,
            expand,
            pending: None,
        }
    }
}

impl<P, F, I> TryPull for Flat<P, F, I>
where
    P: TryPull,
    I: IntoIterator,
    F: FnMut(P::Item) -> Result<I, P::Error>,
{
    type Item = I::Item;
    type Error = P::Error;

    fn next(&mut self) -> Result<Option<I::Item>, P::Error> {
        loop {
            if let Some(inner) = &mut self.pending {
                if let Some(item) = inner.next() {
                    return Ok(Some(item));
                }
                self.pending = None;
            }

            let Some(item) = self.source.next()? else {
                return Ok(None);
            };
            self.pending = Some((self.expand)(item)?.into_iter());
        }
    }
}

impl<P: Reset, F, I: IntoIterator> Reset for Flat<P, F, I> {
    fn reset(&mut self) {
        self.pending = None;
        self.source.reset();
    }
}
