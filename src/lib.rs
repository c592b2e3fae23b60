//! `twinseq`: two interchangeable ordered sequence containers.
//!
//! [`ArraySeq`] stores elements in one contiguous growable buffer;
//! [`ChainSeq`] stores them in a doubly linked node chain bounded by two
//! permanent anchors. Both implement the same [`Sequence`] trait with the
//! same bidirectional position protocol, so callers (including the benchmark
//! driver) swap one for the other without code changes and observe the
//! asymptotic difference for the same logical operations.
//!
//! # Time Complexity
//!
//! | operation            | `ArraySeq`        | `ChainSeq` |
//! |----------------------|-------------------|------------|
//! | `append`             | O(1) amortized    | O(1)       |
//! | `prepend`            | O(n)              | O(1)       |
//! | `insert` at position | O(n - i)          | O(1)       |
//! | `erase` at position  | O(n - i)          | O(1)       |
//! | position by offset   | O(1)              | O(d) walk  |
//!
//! # Positions and invalidation
//!
//! Positions are small `Copy` handles, not borrows; every use is validated
//! against the owning instance. The two containers differ exactly where it
//! matters:
//!
//! - `ArraySeq`: any structural mutation (insert, erase, growth) invalidates
//!   every outstanding position, because the buffer may have relocated.
//! - `ChainSeq`: only positions naming an erased node go stale; positions on
//!   other nodes survive mutations elsewhere in the chain.
//!
//! Offset arithmetic clamps at the structural boundaries and never fails for
//! a live position; dereferencing a boundary position fails with
//! [`SeqError::OutOfRange`]. The split is deliberate and part of the
//! contract.
//!
//! # Examples
//!
//! Generic code runs against either container:
//!
//! ```
//! use twinseq::{ArraySeq, ChainSeq, Sequence};
//!
//! fn fill<S: Sequence<i32>>(mut seq: S) -> S {
//!     for i in 1..=3 {
//!         seq.append(i);
//!     }
//!     seq
//! }
//!
//! let array = fill(ArraySeq::new());
//! let chain = fill(ChainSeq::new());
//! assert!(array.iter().eq(chain.iter()));
//! assert_eq!(array.len(), 3);
//! ```
//!
//! Position-based editing:
//!
//! ```
//! use twinseq::{ChainSeq, Sequence};
//!
//! let mut chain: ChainSeq<u8> = [1, 2, 3].into();
//! let second = chain.forward(chain.begin(), 1).unwrap();
//! chain.erase(second).unwrap();
//! assert_eq!(chain.iter().copied().collect::<Vec<_>>(), [1, 3]);
//! ```

mod array;
mod chain;
mod error;
mod iter;
mod seq;

// Re-export public types and traits
pub use array::{ArrayPos, ArraySeq};
pub use chain::{ChainPos, ChainSeq};
pub use error::{Result, SeqError};
pub use iter::{ArrayIter, ChainIter};
pub use seq::Sequence;
