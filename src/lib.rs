//! This crate is my attempt at writing a lazy iteration library from scratch.
//!
//! # Purpose
//! This repo / crate grew out of wondering how far the "pull" model of iteration can be taken
//! without leaning on [`std::iter`] for anything but interop. Writing the cursors and adaptors by
//! hand helps me to understand what [`Iterator`] combinators actually cost and where their state
//! lives, as well as scratching my "I could write that" itch.
//!
//! Everything here is synchronous and single-owner. "Lazy" means deferred until pulled, not
//! asynchronous: nothing happens until a terminal operation (or a plain `while let` loop) drives
//! the chain, and each stage pulls from the one beneath it with no buffering beyond what the
//! operation structurally requires (one pending sub-sequence inside a flattening stage).
//!
//! # Method
//! The core is the [`Pull`](pull::Pull) trait: `next()` either produces the next element or
//! signals exhaustion, and exhaustion is permanent unless a type opts into [`Reset`](pull::Reset).
//! Sources ([slices](pull::slice), [maps](pull::map)) and adaptors (convert, filter, flatten,
//! key/value projection) all speak this one protocol, so a chain is just structs wrapping structs,
//! exactly like [`std::iter`] does it - but spelled out rather than inherited.
//!
//! The [`brk`] module is the same protocol with an error threaded through every pull, for chains
//! whose transform or predicate logic can fail. Rather than duplicating every adaptor twice the
//! way a language without generics over `Result` would have to, the fallible family is a second
//! small trait, and any plain chain can be lifted into it.
//!
//! # Error Handling
//! Absence is never an error and never a panic: "no current element" is always an [`Option`].
//! The fallible family propagates the first error unchanged through every wrapping stage and
//! stops pulling. Terminal callbacks that want to stop a traversal early return a typed
//! [`Stop`](brk::Stop) value, which the terminal catches - stopping early is control flow, not a
//! failure, and it never reaches the caller as one.
//!
//! Where this crate defines error types it does so the strongly-typed way, using enums for static
//! dispatch with derive macros filling in the [`Error`](std::error::Error) plumbing.
//!
//! # Dependencies
//! Only [`std`] and some derive macros. Collection types are deliberately out of scope: the
//! sources here borrow `&[T]` and [`HashMap`](std::collections::HashMap) views and never own or
//! mutate the underlying data. There is no unsafe code - the original itch included a raw-pointer
//! slice cursor, but indexed access optimizes fine and keeps the whole crate auditable at a
//! glance.

// #![warn(missing_docs)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod brk;
pub mod pull;

#[cfg(test)]
pub(crate) mod util;
