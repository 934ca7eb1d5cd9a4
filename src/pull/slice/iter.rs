use crate::pull::{Pull, Reset};

/// The three states a slice cursor moves through: not yet started, at an in-bounds index, or
/// permanently exhausted. `Done` is one-way except via [`Reset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Cursor {
    Fresh,
    At(usize),
    Done,
}

/// A single-pass pull cursor over a borrowed slice, head to tail.
///
/// # Examples
/// ```
/// use loop_lib::pull::Pull;
/// use loop_lib::pull::slice::SlicePull;
///
/// let letters = ["a", "b", "c"];
/// let mut pull = SlicePull::new(&letters);
///
/// assert_eq!(pull.get(), None, "no current element before the first pull");
/// assert_eq!(pull.next(), Some(&"a"));
/// assert_eq!(pull.get(), Some(&"a"));
/// assert_eq!(pull.cap(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct SlicePull<'a, T> {
    pub(crate) slice: &'a [T],
    pub(crate) cursor: Cursor,
}

impl<'a, T> SlicePull<'a, T> {
    /// Creates a cursor positioned before the first element of `slice`.
    pub const fn new(slice: &'a [T]) -> SlicePull<'a, T> {
        SlicePull {
            slice,
            cursor: Cursor::Fresh,
        }
    }

    /// Returns the current element without advancing, or [`None`] before the first pull and
    /// after exhaustion.
    pub fn get(&self) -> Option<&'a T> {
        match self.cursor {
            Cursor::At(at) => self.slice.get(at),
            Cursor::Fresh | Cursor::Done => None,
        }
    }

    /// Returns the total length of the underlying slice. This never shrinks as the cursor
    /// advances.
    pub const fn cap(&self) -> usize {
        self.slice.len()
    }
}

impl<'a, T> Pull for SlicePull<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let at = match self.cursor {
            Cursor::Fresh => 0,
            Cursor::At(at) => at + 1,
            Cursor::Done => return None,
        };

        match self.slice.get(at) {
            Some(item) => {
                self.cursor = Cursor::At(at);
                Some(item)
            },
            None => {
                self.cursor = Cursor::Done;
                None
            },
        }
    }
}

impl<T> Reset for SlicePull<'_, T> {
    fn reset(&mut self) {
        self.cursor = Cursor::Fresh;
    }
}

impl<'a, T> From<&'a [T]> for SlicePull<'a, T> {
    fn from(slice: &'a [T]) -> SlicePull<'a, T> {
        SlicePull::new(slice)
    }
}

impl<'a, T, const N: usize> From<&'a [T; N]> for SlicePull<'a, T> {
    fn from(array: &'a [T; N]) -> SlicePull<'a, T> {
        SlicePull::new(array)
    }
}

/// A single-pass pull cursor over a borrowed slice, tail to head.
///
/// [`next`](Pull::next) retreats: the first pull yields the last element, and collecting the
/// whole cursor yields the slice reversed.
#[derive(Debug, Clone)]
pub struct RevSlicePull<'a, T> {
    pub(crate) slice: &'a [T],
    pub(crate) cursor: Cursor,
}

impl<'a, T> RevSlicePull<'a, T> {
    /// Creates a cursor positioned after the last element of `slice`.
    pub const fn new(slice: &'a [T]) -> RevSlicePull<'a, T> {
        RevSlicePull {
            slice,
            cursor: Cursor::Fresh,
        }
    }

    /// Returns the current element without advancing, or [`None`] before the first pull and
    /// after exhaustion.
    pub fn get(&self) -> Option<&'a T> {
        match self.cursor {
            Cursor::At(at) => self.slice.get(at),
            Cursor::Fresh | Cursor::Done => None,
        }
    }

    /// Returns the total length of the underlying slice.
    pub const fn cap(&self) -> usize {
        self.slice.len()
    }
}

impl<'a, T> Pull for RevSlicePull<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let at = match self.cursor {
            Cursor::Fresh => self.slice.len().checked_sub(1),
            Cursor::At(at) => at.checked_sub(1),
            Cursor::Done => return None,
        };

        match at {
            Some(at) => {
                self.cursor = Cursor::At(at);
                self.slice.get(at)
            },
            None => {
                self.cursor = Cursor::Done;
                None
            },
        }
    }
}

impl<T> Reset for RevSlicePull<'_, T> {
    fn reset(&mut self) {
        self.cursor = Cursor::Fresh;
    }
}

impl<'a, T> From<&'a [T]> for RevSlicePull<'a, T> {
    fn from(slice: &'a [T]) -> RevSlicePull<'a, T> {
        RevSlicePull::new(slice)
    }
}
