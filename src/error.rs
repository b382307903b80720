use thiserror::Error;

/// Reasons a buffer cannot be adopted as a [`BitVec`](crate::BitVec).
///
/// All of them are construction-time failures. Once a vector exists, its
/// accessors report out-of-range indices through `bool` and `Option` instead.
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// The buffer length is not a whole number of 64-bit words.
    #[error("buffer length {len} is not a multiple of 8")]
    InvalidLength {
        /// Length of the rejected buffer in bytes.
        len: usize,
    },
    /// The declared byte order is neither little nor big endian.
    #[error("unsupported endianness tag {tag}")]
    InvalidEndianness {
        /// The unrecognized tag.
        tag: u8,
    },
    /// The host reports a byte order that is neither little nor big endian.
    #[error("unsupported host endianness")]
    UnsupportedArchitecture,
    /// The buffer does not start on an 8-byte boundary, so it cannot be
    /// viewed as `u64` words in place.
    #[error("buffer is not aligned to 8 bytes")]
    Misaligned,
}

/// Result type used throughout this crate.
pub type Result<T> = core::result::Result<T, Error>;
