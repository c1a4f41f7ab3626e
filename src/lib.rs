//! bitcursor – MSB-first bit reader for non-byte-aligned binary formats
//!
//! A [`BitCursor`] owns a growable byte buffer and reads it bit by bit:
//! single bits and flags, `n`-bit fields, fixed-width integers and
//! Exp-Golomb codes as found in video/audio bitstream headers.
//!
//! # Beispiel
//!
//! ```
//! use bitcursor::{BitCursor, Error};
//!
//! // 1 | 010 | 0101 | 00111 | 000
//! let mut cursor = BitCursor::new(vec![0b1010_0101, 0b0011_1000]);
//! assert!(cursor.read_flag().unwrap());
//! assert_eq!(cursor.read_unsigned_exp_golomb().unwrap(), 1);
//! assert_eq!(cursor.read_bits(4).unwrap(), 0b0101);
//! assert_eq!(cursor.read_signed_exp_golomb().unwrap(), -3);
//! assert_eq!(cursor.current_bit_index(), 13);
//!
//! // Streaming: out of data, feed more and retry.
//! let cp = cursor.save_checkpoint();
//! assert_eq!(cursor.read_u16(), Err(Error::BufferExhausted));
//! cursor.restore_checkpoint(cp).unwrap();
//! cursor.append(&[0xFF, 0x00]);
//! assert_eq!(cursor.read_u16().unwrap(), 0x1FE0);
//! ```

pub mod cursor;
pub mod error;
pub mod exp_golomb;
pub mod fixed_width;
pub mod options;

pub use error::{Error, Result};

pub use cursor::{BitCursor, BitCursorCheckpoint};
pub use fixed_width::FixedWidth;
pub use options::CursorOptions;
