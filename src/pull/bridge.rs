//! Interop between the [`Pull`] protocol and [`std::iter`].
//!
//! [`from_iter`] lets anything iterable feed a pull chain; [`Pull::iterator`] lets a pull chain
//! feed a `for` loop or any [`Iterator`] consumer. Together they make the protocol a peer of the
//! host language's native iteration rather than an island.

use std::iter::FusedIterator;

use crate::pull::{Pull, Reset};

/// Wraps any [`IntoIterator`] as a pull source.
///
/// # Examples
/// ```
/// use loop_lib::pull::Pull;
/// use loop_lib::pull::bridge::from_iter;
///
/// let squares = from_iter(1..=4).convert(|n| n * n).to_vec();
/// assert_eq!(squares, [1, 4, 9, 16]);
/// ```
pub fn from_iter<I: IntoIterator>(iter: I) -> IterPull<I::IntoIter> {
    IterPull(iter.into_iter())
}

/// A [`std::iter::Iterator`] speaking the pull protocol. See [`from_iter`].
///
/// Exhaustion idempotence holds for any well-behaved iterator; a non-fused iterator that
/// resurrects violates the [`Pull`] contract exactly as it violates iteration conventions
/// everywhere else.
#[derive(Debug, Clone)]
pub struct IterPull<I>(pub(crate) I);

impl<I: Iterator> Pull for IterPull<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        self.0.next()
    }
}

/// A pull chain exposed as a [`std::iter::Iterator`]. See [`Pull::iterator`].
#[derive(Debug, Clone)]
pub struct PullIter<P>(pub(crate) P);

impl<P> PullIter<P> {
    pub(crate) const fn new(pull: P) -> PullIter<P> {
        PullIter(pull)
    }
}

impl<P: Pull> Iterator for PullIter<P> {
    type Item = P::Item;

    fn next(&mut self) -> Option<P::Item> {
        self.0.next()
    }
}

// The Pull contract requires exhaustion to be permanent, which is exactly the fused guarantee.
impl<P: Pull> FusedIterator for PullIter<P> {}

impl<P: Reset> Reset for PullIter<P> {
    fn reset(&mut self) {
        self.0.reset();
    }
}
