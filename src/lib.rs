//! Arbitrary-precision unsigned integer arithmetic.
//!
//! A single value type, [`Unsigned`], carries the full operator surface of a
//! primitive unsigned integer over an unbounded little-endian digit buffer:
//! Karatsuba multiplication (with a lopsided-split variant for unbalanced
//! operands), Knuth Algorithm D division, shifts and bitwise operators, and
//! parsing/formatting for bases 2 through 36 plus a raw big-endian base-256
//! codec.
//!
//! Subtraction never wraps into arithmetic: an underflow leaves the
//! magnitude modulo `2^(W*n)` and reports through [`Unsigned::carry`].
#![cfg_attr(not(test), no_std)]

extern crate alloc;

mod arithmetic;
mod convert;
mod digit;
pub use digit::{Digit, HalfDigit};
mod error;
pub use error::{Error, Result};
mod numbers;
pub use numbers::Unsigned;
