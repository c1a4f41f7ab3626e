//! Exponential-Golomb codes, order 0.
//!
//! A code word is `n` zero bits, a terminating 1-bit, then `n` suffix bits
//! `v`; the decoded value is `2^n - 1 + v`. The signed variant maps the
//! unsigned result onto 0, 1, -1, 2, -2, ... (odd values positive).
//!
//! | bits        | unsigned | signed |
//! |-------------|----------|--------|
//! | `1`         | 0        | 0      |
//! | `010`       | 1        | 1      |
//! | `011`       | 2        | -1     |
//! | `00100`     | 3        | 2      |
//! | `00101`     | 4        | -2     |

use crate::cursor::BitCursor;
use crate::Result;

/// Decodes an unsigned Exp-Golomb code word.
///
/// The prefix scan has no iteration cap; it ends at the terminating 1-bit or
/// with [`Error::BufferExhausted`](crate::Error::BufferExhausted) once the
/// buffer is used up. Bits read before a failure stay consumed.
///
/// Code words wider than 64 bits (more than 63 leading zeros) are still
/// consumed completely; the result then wraps modulo 2^64.
pub fn decode_unsigned(cursor: &mut BitCursor) -> Result<u64> {
    let mut leading_zeros: usize = 0;
    while cursor.read_bit()? == 0 {
        leading_zeros += 1;
    }
    let suffix = cursor.read_bits(leading_zeros)?;
    // Ab 64 führenden Nullen ist 2^n in u64 gleich 0
    let base = u32::try_from(leading_zeros)
        .ok()
        .and_then(|n| 1u64.checked_shl(n))
        .unwrap_or(0);
    Ok(base.wrapping_sub(1).wrapping_add(suffix))
}

/// Decodes a signed Exp-Golomb code word (zig-zag mapping of
/// [`decode_unsigned`]).
pub fn decode_signed(cursor: &mut BitCursor) -> Result<i64> {
    let v = decode_unsigned(cursor)?;
    if v & 1 == 1 {
        // v = u64::MAX nur bei überbreiten Codes: (v + 1) / 2 wrappt auf 0
        Ok((v.wrapping_add(1) / 2) as i64)
    } else {
        Ok(-((v / 2) as i64))
    }
}

impl BitCursor {
    /// Reads an unsigned Exp-Golomb code word. See [`decode_unsigned`].
    #[inline]
    pub fn read_unsigned_exp_golomb(&mut self) -> Result<u64> {
        decode_unsigned(self)
    }

    /// Reads a signed Exp-Golomb code word. See [`decode_signed`].
    #[inline]
    pub fn read_signed_exp_golomb(&mut self) -> Result<i64> {
        decode_signed(self)
    }
}
