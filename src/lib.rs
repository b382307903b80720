//! A fixed-capacity bit vector over a borrowed byte buffer, in either byte
//! order.
//! `no_std`, no heap / `alloc`, no `unsafe`, and no copy of the buffer.
//!
//! Designed for bitmaps embedded in larger binary structures such as
//! columnar files, on-disk indexes and wire messages, where the bytes come
//! from elsewhere and may have been written on a machine of the other
//! endianness.
//!
//! [`BitVec`] is the main struct in this library. Its [features](#features)
//! are listed below.
//!
//! # Examples
//! ```
//! use endian_bitvec::{BitVec, Endianness};
//!
//! let mut storage = [0u64; 2];
//! let buffer: &mut [u8] = bytemuck::cast_slice_mut(&mut storage);
//! let mut bits = BitVec::new(buffer, Endianness::Big).unwrap();
//! assert_eq!(bits.len(), 128);
//! assert!(bits.set(9));
//! assert!(bits.test(9));
//! assert_eq!(bits.find_first_one(0), Some(9));
//! assert_eq!(bits.as_bytes()[6], 0b10);
//! ```
//!
//! # Layout
//!
//! The buffer is read as consecutive 64-bit words, each in the declared
//! [`Endianness`]. Bit `i` is bit `i % 64` (from the least significant end)
//! of word `i / 64`. The buffer length must be a multiple of 8 and its start
//! aligned to 8 bytes; allocating it as `[u64]` and casting with
//! [`bytemuck`] is the simplest way to get both.
//!
//! # Features
//!
//! - `#![no_std]` compatible
//! - Zero-copy: the vector borrows the caller's buffer for its lifetime
//! - Little and big endian buffers on any host
//! - Bit-level `test`, `set`, `clear`, `toggle`, failing softly out of range
//! - Word-at-a-time scans:
//!   - `find_first_one(from)`
//!   - `find_first_zero(from)`
//!   - `find_last_one()`
//! - Iteration over set or clear bits: `iter_ones()`, `iter_zeros()`
//! - Counting: `count_ones()`, `count_zeros()`

#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![cfg_attr(not(test), no_std)]

mod bitvec;
mod endian;
mod error;

pub use bitvec::{BitVec, IterOnes, IterZeros, WORD_BITS, WORD_BYTES};
pub use endian::Endianness;
pub use error::{Error, Result};
