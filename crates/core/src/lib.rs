//! Core building blocks for moviecache.
//!
//! Everything in this crate is free of I/O: key derivation, pattern matching,
//! counters and the trait seams that the binary crate implements.

pub mod cache;
pub mod movies;
