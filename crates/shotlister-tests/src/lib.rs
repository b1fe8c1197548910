//! Integration test crate for shotlister.
//!
//! This crate exists solely to hold cross-crate integration tests; it
//! has no library surface of its own.

#[cfg(test)]
mod capture;
#[cfg(test)]
mod shotlist;
