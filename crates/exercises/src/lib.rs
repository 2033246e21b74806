//! Standalone LeetCode-style exercises. Every function here is pure and
//! self-contained: no shared state, no I/O, no dependency between exercises.

use thiserror::Error;

pub mod list;
pub mod lookup;
pub mod scan;

/// A documented precondition was violated by the caller. This is the only
/// recoverable condition in the crate; the functions have no other failure
/// mode.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PreconditionError {
    /// `two_sum` requires that some pair of distinct indices sums to the
    /// target.
    #[error("no two distinct indices sum to {0}")]
    NoPairForTarget(i32),
}
