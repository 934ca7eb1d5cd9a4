//! Adaptors: pulls that wrap one upstream pull and transform what it produces.
//!
//! Every type here is constructed through a [`Pull`](crate::pull::Pull) method and holds exactly
//! its upstream cursor, its closure, and (for the expanding adaptors) the one sub-sequence it is
//! currently draining. All of them preserve upstream order.

mod convert;
mod filt;
mod flat;
mod kv;
mod tests;

pub use convert::*;
pub use filt::*;
pub use flat::*;
pub use kv::*;
