use crate::pull::{Pull, Reset};

/// A 1:1 transforming pull. See [`Pull::convert`].
pub struct Convert<P, F> {
    pub(crate) source: P,
    pub(crate) convert: F,
}

impl<P, F> Convert<P, F> {
    pub(crate) const fn new(source: P, convert: F) -> Convert<P, F> {
        Convert { source, convert }
    }
}

impl<U, P, F> Pull for Convert<P, F>
where
    P: Pull,
    F: FnMut(P::Item) -> U,
{
    type Item = U;

    fn next(&mut self) -> Option<U> {
        self.source.next().map(&mut self.convert)
    }
}

impl<P: Reset, F> Reset for Convert<P, F> {
    fn reset(&mut self) {
        self.source.reset();
    }
}

/// A transform-and-filter pull: elements the transform maps to [`None`] are discarded. See
/// [`Pull::convert_check`].
pub struct ConvertCheck<P, F> {
    pub(crate) source: P,
    pub(crate) check: F,
}

impl<P, F> ConvertCheck<P, F> {
    pub(crate) const fn new(source: P, check: F) -> ConvertCheck<P, F> {
        ConvertCheck { source, check }
    }
}

impl<U, P, F> Pull for ConvertCheck<P, F>
where
    P: Pull,
    F: FnMut(P::Item) -> Option<U>,
{
    type Item = U;

    fn next(&mut self) -> Option<U> {
        loop {
            let item = self.source.next()?;
            if let Some(kept) = (self.check)(item) {
                return Some(kept);
            }
        }
    }
}

impl<P: Reset, F> Reset for ConvertCheck<P, F> {
    fn reset(&mut self) {
        self.source.reset();
    }
}

/// A pull cloning elements out of a pull over references. See [`Pull::cloned`].
pub struct Cloned<P>(pub(crate) P);

impl<P> Cloned<P> {
    pub(crate) const fn new(source: P) -> Cloned<P> {
        Cloned(source)
    }
}

impl<'a, T, P> Pull for Cloned<P>
where
    T: Clone + 'a,
    P: Pull<Item = &'a T>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.0.next().cloned()
    }
}

impl<P: Reset> Reset for Cloned<P> {
    fn reset(&mut self) {
        self.0.reset();
    }
}

/// A pull copying elements out of a pull over references. See [`Pull::copied`].
pub struct Copied<P>(pub(crate) P);

impl<P> Copied<P> {
    pub(crate) const fn new(source: P) -> Copied<P> {
        Copied(source)
    }
}

impl<'a, T, P> Pull for Copied<P>
where
    T: Copy + 'a,
    P: Pull<Item = &'a T>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.0.next().copied()
    }
}

impl<P: Reset> Reset for Copied<P> {
    fn reset(&mut self) {
        self.0.reset();
    }
}
