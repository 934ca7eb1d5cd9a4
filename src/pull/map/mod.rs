//! Pull cursors over borrowed hash maps.
//!
//! [`MapPull`] yields a map's entries in whatever order the host map iterates them - unspecified,
//! and different between runs. [`OrderedMapPull`] replays a caller-supplied key slice against the
//! map instead, for deterministic order. [`Keys`] and [`Values`] project either cursor down to
//! one side of the pair.

mod iter;

pub use iter::*;
