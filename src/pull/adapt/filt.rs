use crate::pull::{Pull, Reset};

/// A predicate-gated pass-through pull. See [`Pull::filt`].
///
/// Rejection is a find-next loop, not recursion: a long run of rejected elements costs pulls,
/// not stack frames.
pub struct Filt<P, F> {
    pub(crate) source: P,
    pub(crate) pred: F,
}

impl<P, F> Filt<P, F> {
    pub(crate) const fn new(source: P, pred: F) -> Filt<P, F> {
        Filt { source, pred }
    }
}

impl<P, F> Pull for Filt<P, F>
where
    P: Pull,
    F: FnMut(&P::Item) -> bool,
{
    type Item = P::Item;

    fn next(&mut self) -> Option<P::Item> {
        loop {
            let item = self.source.next()?;
            if (self.pred)(&item) {
                return Some(item);
            }
        }
    }
}

impl<P: Reset, F> Reset for Filt<P, F> {
    fn reset(&mut self) {
        self.source.reset();
    }
}
