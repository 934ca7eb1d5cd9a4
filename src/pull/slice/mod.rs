//! Pull cursors over borrowed slices.
//!
//! [`SlicePull`] walks a `&[T]` from the head; [`RevSlicePull`] walks it from the tail. Both are
//! non-owning views: the slice outlives the cursor and is never copied. Both also expose the
//! cursor itself - [`get`](SlicePull::get) reads the current element without advancing and
//! [`cap`](SlicePull::cap) reports the total length of the underlying slice (not a remaining
//! count), and both rewind via [`Reset`](crate::pull::Reset).

mod iter;
mod tests;

pub use iter::*;
