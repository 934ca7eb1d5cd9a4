use crate::pull::{Pull, Reset};

/// A 1:N expanding pull. See [`Pull::flat`].
///
/// This is the one adaptor with nontrivial state: a two-level cursor, the upstream pull plus the
/// partially drained expansion of the element most recently pulled from it. Empty expansions are
/// skipped without ever being observable downstream.
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

impl<P, F, I> Pull for Flat<P, F, I>
where
    P: Pull,
    I: IntoIterator,
    F: FnMut(P::Item) -> I,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        loop {
            if let Some(inner) = &mut self.pending {
                if let Some(item) = inner.next() {
                    return Some(item);
                }
                self.pending = None;
            }

            let item = self.source.next()?;
            self.pending = Some((self.expand)(item).into_iter());
        }
    }
}

impl<P: Reset, F, I: IntoIterator> Reset for Flat<P, F, I> {
    fn reset(&mut self) {
        self.pending = None;
        self.source.reset();
    }
}
