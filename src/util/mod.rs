#![warn(missing_docs)]

pub mod count;
