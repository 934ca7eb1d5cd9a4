//! An instrumented pull wrapper for tests that assert how many times an upstream source was
//! actually pulled.

use std::cell::RefCell;
use std::rc::Rc;

use crate::brk::TryPull;
use crate::pull::{Pull, Reset};

/// Wraps a pull and counts every call to `next`, including the exhausting one.
///
/// The count lives behind an [`Rc`] so a test can keep reading it after the chain has consumed
/// the wrapper.
pub struct Counted<P> {
    inner: P,
    pulls: Rc<RefCell<usize>>,
}

impl<P> Counted<P> {
    /// Wraps `inner`, returning the wrapper and a shared handle to its pull count.
    pub fn new(inner: P) -> (Counted<P>, Rc<RefCell<usize>>) {
        let pulls = Rc::new(RefCell::new(0));
        let counted = Counted {
            inner,
            pulls: Rc::clone(&pulls),
        };
        (counted, pulls)
    }
}

impl<P: Pull> Pull for Counted<P> {
    type Item = P::Item;

    fn next(&mut self) -> Option<P::Item> {
        self.pulls.replace_with(|count| *count + 1);
        self.inner.next()
    }
}

impl<P: TryPull> TryPull for Counted<P> {
    type Item = P::Item;
    type Error = P::Error;

    fn next(&mut self) -> Result<Option<P::Item>, P::Error> {
        self.pulls.replace_with(|count| *count + 1);
        self.inner.next()
    }
}

impl<P: Reset> Reset for Counted<P> {
    fn reset(&mut self) {
        self.inner.reset();
    }
}
