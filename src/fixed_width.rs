//! Fixed-width integer reads (8, 16, 32 and 64 bits).
//!
//! Values are assembled bit by bit via [`BitCursor::read_bits`], i.e. in
//! big-endian bit order regardless of the host. Signed widths reinterpret the
//! bit pattern as two's complement; no arithmetic negation takes place.

use crate::cursor::BitCursor;
use crate::Result;

/// Integer types that can be read with [`BitCursor::read`].
///
/// Implemented for `u8`, `u16`, `u32`, `u64`, `i8`, `i16`, `i32` and `i64`.
pub trait FixedWidth: Sized + Copy {
    /// Number of bits consumed by one read.
    const BITS: u32;

    /// Reinterprets the low [`BITS`](Self::BITS) bits of `raw`.
    fn from_bits(raw: u64) -> Self;
}

macro_rules! impl_unsigned {
    ($($t:ty),*) => {$(
        impl FixedWidth for $t {
            const BITS: u32 = <$t>::BITS;
            #[inline]
            fn from_bits(raw: u64) -> Self { raw as $t }
        }
    )*};
}

// Vorzeichenbehaftet: erst auf die gleich breite unsigned-Variante kürzen,
// dann Bitmuster als Zweierkomplement uminterpretieren.
macro_rules! impl_signed {
    ($($t:ty => $u:ty),*) => {$(
        impl FixedWidth for $t {
            const BITS: u32 = <$t>::BITS;
            #[inline]
            fn from_bits(raw: u64) -> Self { raw as $u as $t }
        }
    )*};
}

impl_unsigned!(u8, u16, u32, u64);
impl_signed!(i8 => u8, i16 => u16, i32 => u32, i64 => u64);

impl BitCursor {
    /// Reads a `T::BITS` wide integer, MSB first.
    ///
    /// Same failure semantics as [`read_bits`](Self::read_bits): on
    /// [`Error::BufferExhausted`](crate::Error::BufferExhausted) the bits read
    /// so far stay consumed.
    #[inline]
    pub fn read<T: FixedWidth>(&mut self) -> Result<T> {
        self.read_bits(T::BITS as usize).map(T::from_bits)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        self.read()
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        self.read()
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        self.read()
    }

    pub fn read_u64(&mut self) -> Result<u64> {
        self.read()
    }

    pub fn read_i8(&mut self) -> Result<i8> {
        self.read()
    }

    pub fn read_i16(&mut self) -> Result<i16> {
        self.read()
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        self.read()
    }

    pub fn read_i64(&mut self) -> Result<i64> {
        self.read()
    }
}
