//! Central error types for the bit cursor.
//!
//! Every failure is reported to the immediate caller; nothing in this crate
//! logs, retries or swallows an error.

use core::fmt;

/// All errors a [`BitCursor`](crate::BitCursor) can report.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A read would consume a bit at or beyond the end of the owned buffer.
    ///
    /// Recoverable: append more bytes and retry, or treat it as end of stream.
    BufferExhausted,
    /// A rewind asked for more bits than have been consumed so far.
    InvalidRewind {
        /// Bits the caller asked to move back.
        requested: usize,
        /// Bits actually consumed (the current bit index).
        available: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BufferExhausted => write!(f, "read exceeds the end of the bit buffer"),
            Self::InvalidRewind { requested, available } => write!(
                f,
                "cannot rewind {requested} bits, only {available} bits consumed"
            ),
        }
    }
}

impl std::error::Error for Error {}

/// A convenience `Result` type alias using [`Error`].
pub type Result<T> = core::result::Result<T, Error>;
