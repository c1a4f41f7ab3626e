//! Bit-level cursor over an owned, growable byte buffer.
//!
//! Bits within each byte are read MSB first: bit 7 (value 128) is read
//! before bit 0. Multi-bit values are assembled bit by bit in read order,
//! independent of host endianness.

use log::{trace, warn};

use crate::options::CursorOptions;
use crate::{Error, Result};

/// Reads individual bits from an owned byte buffer, MSB first.
///
/// The position is split into `byte_offset` (the byte currently being read)
/// and `bit_offset` (0..=7, counted from the MSB). `bit_offset` never reaches
/// 8: the carry into `byte_offset` happens on the same read.
///
/// # Partial consumption
///
/// Single-bit reads are atomic: on [`Error::BufferExhausted`] the position
/// is unchanged. Multi-bit reads ([`read_bits`](Self::read_bits), the fixed
/// width reads and the Exp-Golomb decoders) are NOT: bits consumed before the
/// buffer ran out stay consumed. Callers that need to retry after an
/// [`append`](Self::append) should take a [`save_checkpoint`](Self::save_checkpoint)
/// first and restore it on error.
#[derive(Debug, Clone, Default)]
pub struct BitCursor {
    buf: Vec<u8>,
    /// Index des Bytes, aus dem gerade gelesen wird.
    byte_offset: usize,
    /// Nächstes Bit innerhalb von `buf[byte_offset]`, 0 = MSB.
    bit_offset: u8,
    growth_warning: Option<usize>,
    /// Warnung für `growth_warning` bereits ausgegeben.
    growth_warned: bool,
}

/// Saved cursor position for [`BitCursor::restore_checkpoint`].
///
/// Only valid until the next [`BitCursor::trim`], which shifts byte indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitCursorCheckpoint {
    byte_offset: usize,
    bit_offset: u8,
}

impl BitCursorCheckpoint {
    /// Absolute bit index the checkpoint points at.
    pub fn bit_index(&self) -> usize {
        self.byte_offset * 8 + self.bit_offset as usize
    }
}

impl BitCursor {
    /// Creates a cursor positioned at bit 0 of byte 0. An empty buffer is legal.
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self { buf: data.into(), ..Self::default() }
    }

    /// Creates a cursor with explicit [`CursorOptions`].
    pub fn with_options(data: impl Into<Vec<u8>>, options: &CursorOptions) -> Self {
        let mut buf = data.into();
        buf.reserve(options.initial_capacity);
        Self {
            buf,
            growth_warning: options.growth_warning,
            ..Self::default()
        }
    }

    // --- Buffer-Mutation ---

    /// Appends `data` to the end of the buffer. The position is unchanged,
    /// so a read that failed with [`Error::BufferExhausted`] can be retried.
    pub fn append(&mut self, data: &[u8]) {
        self.buf.extend_from_slice(data);
        trace!("bitcursor: appended {} bytes, buffer now {} bytes", data.len(), self.buf.len());
        if let Some(limit) = self.growth_warning {
            if self.buf.len() > limit && !self.growth_warned {
                self.growth_warned = true;
                warn!(
                    "bitcursor: buffer grew to {} bytes (threshold {limit}), {} already consumed; call trim()",
                    self.buf.len(),
                    self.byte_offset
                );
            }
        }
    }

    /// Discards all bytes before `byte_offset` and resets `byte_offset` to 0.
    /// `bit_offset` is kept, so [`current_bit_index`](Self::current_bit_index)
    /// drops to the sub-byte remainder.
    ///
    /// Byte indices and checkpoints taken before the trim become invalid.
    pub fn trim(&mut self) {
        let consumed = self.byte_offset;
        if consumed == 0 {
            return;
        }
        self.buf.drain(..consumed);
        self.byte_offset = 0;
        trace!("bitcursor: trimmed {consumed} bytes, {} left", self.buf.len());
        if let Some(limit) = self.growth_warning {
            if self.buf.len() <= limit {
                self.growth_warned = false;
            }
        }
    }

    // --- Position ---

    /// Returns the absolute bit position: `byte_offset * 8 + bit_offset`.
    #[inline]
    pub fn current_bit_index(&self) -> usize {
        self.byte_offset * 8 + self.bit_offset as usize
    }

    /// Index of the byte currently being read.
    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }

    /// Next bit within the current byte, 0 being the MSB.
    pub fn bit_offset(&self) -> u8 {
        self.bit_offset
    }

    /// Moves the cursor back by `count` bits.
    ///
    /// Fails with [`Error::InvalidRewind`] if `count` exceeds
    /// [`current_bit_index`](Self::current_bit_index); the position is then unchanged.
    pub fn rewind(&mut self, count: usize) -> Result<()> {
        let available = self.current_bit_index();
        if count > available {
            return Err(Error::InvalidRewind { requested: count, available });
        }
        self.set_bit_index(available - count);
        Ok(())
    }

    #[inline]
    fn set_bit_index(&mut self, pos: usize) {
        self.byte_offset = pos / 8;
        self.bit_offset = (pos % 8) as u8;
    }

    /// Speichert die aktuelle Leseposition für möglichen Rollback.
    pub fn save_checkpoint(&self) -> BitCursorCheckpoint {
        BitCursorCheckpoint {
            byte_offset: self.byte_offset,
            bit_offset: self.bit_offset,
        }
    }

    /// Restores a position saved with [`save_checkpoint`](Self::save_checkpoint).
    ///
    /// Fails with [`Error::BufferExhausted`] if the checkpoint lies beyond the
    /// end of the buffer (e.g. it was taken before a [`trim`](Self::trim));
    /// the position is then unchanged.
    pub fn restore_checkpoint(&mut self, cp: BitCursorCheckpoint) -> Result<()> {
        if cp.bit_index() > self.total_bits() {
            return Err(Error::BufferExhausted);
        }
        self.byte_offset = cp.byte_offset;
        self.bit_offset = cp.bit_offset;
        Ok(())
    }

    // --- Lesen ---

    /// Reads a single bit (0 or 1) and advances by one bit.
    ///
    /// Fails with [`Error::BufferExhausted`] when `byte_offset` is at or past
    /// the end of the buffer, leaving the position unchanged.
    #[inline]
    pub fn read_bit(&mut self) -> Result<u8> {
        let Some(&byte) = self.buf.get(self.byte_offset) else {
            return Err(Error::BufferExhausted);
        };
        let bit = (byte >> (7 - self.bit_offset)) & 1;
        self.bit_offset += 1;
        if self.bit_offset == 8 {
            self.byte_offset += 1;
            self.bit_offset = 0;
        }
        Ok(bit)
    }

    /// Reads a single bit as a boolean, `true` for 1.
    #[inline]
    pub fn read_flag(&mut self) -> Result<bool> {
        Ok(self.read_bit()? == 1)
    }

    /// Reads `count` bits MSB first and returns them as a `u64`.
    /// When `count` is 0 this is a no-op returning 0.
    ///
    /// Bits are read one at a time; if the buffer runs out midway the bits
    /// already read stay consumed (see the type-level docs).
    ///
    /// For `count > 64` all bits are consumed and the last 64 are returned.
    pub fn read_bits(&mut self, count: usize) -> Result<u64> {
        let mut acc = 0u64;
        for _ in 0..count {
            acc = (acc << 1) | u64::from(self.read_bit()?);
        }
        Ok(acc)
    }

    /// Discards the next `count` bits. Same failure semantics as
    /// [`read_bits`](Self::read_bits).
    pub fn skip(&mut self, count: usize) -> Result<()> {
        for _ in 0..count {
            self.read_bit()?;
        }
        Ok(())
    }

    // --- Introspection ---

    /// Returns `true` if the next read starts on a byte boundary.
    pub fn is_byte_aligned(&self) -> bool {
        self.bit_offset == 0
    }

    /// Returns the number of bits remaining to be read.
    pub fn remaining_bits(&self) -> usize {
        self.total_bits() - self.current_bit_index()
    }

    /// Returns the total number of bits in the buffer.
    pub fn total_bits(&self) -> usize {
        self.buf.len() * 8
    }

    /// Length of the owned buffer in bytes.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// The whole owned buffer, including bytes already consumed.
    pub fn buffer(&self) -> &[u8] {
        &self.buf
    }

    /// Consumes the cursor and returns its buffer.
    pub fn into_inner(self) -> Vec<u8> {
        self.buf
    }
}

impl From<Vec<u8>> for BitCursor {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

impl From<&[u8]> for BitCursor {
    fn from(data: &[u8]) -> Self {
        Self::new(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- Construction ---

    #[test]
    fn new_starts_at_zero() {
        let c = BitCursor::new(vec![0xAB, 0xCD]);
        assert_eq!(c.current_bit_index(), 0);
        assert_eq!(c.byte_offset(), 0);
        assert_eq!(c.bit_offset(), 0);
        assert_eq!(c.total_bits(), 16);
    }

    #[test]
    fn empty_buffer_is_legal() {
        let mut c = BitCursor::new(Vec::new());
        assert!(c.is_empty());
        assert_eq!(c.remaining_bits(), 0);
        assert_eq!(c.read_bit(), Err(Error::BufferExhausted));
        assert_eq!(c.current_bit_index(), 0);
    }

    #[test]
    fn from_slice_copies() {
        let data = [1u8, 2, 3];
        let c = BitCursor::from(&data[..]);
        assert_eq!(c.buffer(), &data);
        assert_eq!(c.into_inner(), vec![1, 2, 3]);
    }

    #[test]
    fn with_options_reserves_capacity() {
        let opts = CursorOptions::default().with_initial_capacity(128);
        let c = BitCursor::with_options(vec![0xFF], &opts);
        assert_eq!(c.len(), 1);
        assert!(c.buf.capacity() >= 129);
    }

    // --- Single bits (MSB first) ---

    #[test]
    fn read_bit_msb_first() {
        let mut c = BitCursor::new(vec![0b1010_0111]);
        let bits: Vec<u8> = (0..8).map(|_| c.read_bit().unwrap()).collect();
        assert_eq!(bits, vec![1, 0, 1, 0, 0, 1, 1, 1]);
        assert_eq!(c.current_bit_index(), 8);
    }

    #[test]
    fn read_bit_carries_into_next_byte() {
        let mut c = BitCursor::new(vec![0x00, 0x80]);
        c.skip(7).unwrap();
        assert_eq!(c.byte_offset(), 0);
        assert_eq!(c.bit_offset(), 7);
        c.read_bit().unwrap();
        assert_eq!(c.byte_offset(), 1);
        assert_eq!(c.bit_offset(), 0);
        assert_eq!(c.read_bit().unwrap(), 1);
    }

    #[test]
    fn read_bit_eof_leaves_position() {
        let mut c = BitCursor::new(vec![0xFF]);
        c.skip(8).unwrap();
        assert_eq!(c.read_bit(), Err(Error::BufferExhausted));
        assert_eq!(c.current_bit_index(), 8);
    }

    #[test]
    fn read_flag_values() {
        let mut c = BitCursor::new(vec![0b1010_0111]);
        assert!(c.read_flag().unwrap());
        assert!(!c.read_flag().unwrap());
    }

    // --- n-bit values ---

    #[test]
    fn zero_bit_read_is_noop() {
        let mut c = BitCursor::new(Vec::new());
        assert_eq!(c.read_bits(0).unwrap(), 0);
        assert_eq!(c.current_bit_index(), 0);
    }

    #[test]
    fn read_bits_cross_byte_boundary() {
        // 11_1010_1010_10 + 4 padding = 11_1010_10 | 10_10_0000
        let mut c = BitCursor::new(vec![0b1110_1010, 0b1010_0000]);
        assert_eq!(c.read_bits(2).unwrap(), 0b11);
        assert_eq!(c.read_bits(10).unwrap(), 0b1010_1010_10);
        assert_eq!(c.current_bit_index(), 12);
    }

    #[test]
    fn read_bits_64_unaligned() {
        let val: u64 = 0xDEAD_BEEF_CAFE_BABE;
        // 3 Bits Versatz: 101 gefolgt von val, dann 5 Padding-Bits
        let mut data = Vec::new();
        let wide = (0b101u128 << 125) | ((val as u128) << 61);
        data.extend_from_slice(&wide.to_be_bytes()[..9]);
        let mut c = BitCursor::new(data);
        assert_eq!(c.read_bits(3).unwrap(), 0b101);
        assert_eq!(c.read_bits(64).unwrap(), val);
    }

    #[test]
    fn read_bits_partial_eof_keeps_consumed_bits() {
        let mut c = BitCursor::new(vec![0xFF, 0xFF]);
        c.skip(4).unwrap();
        assert_eq!(c.read_bits(16), Err(Error::BufferExhausted));
        assert_eq!(c.current_bit_index(), 16);
    }

    #[test]
    fn read_bits_wider_than_64_keeps_low_bits() {
        // 0x01 gefolgt von 8 Bytes: die ersten 8 Bits fallen heraus
        let mut data = vec![0x01];
        data.extend_from_slice(&0x0123_4567_89AB_CDEFu64.to_be_bytes());
        let mut c = BitCursor::new(data);
        assert_eq!(c.read_bits(72).unwrap(), 0x0123_4567_89AB_CDEF);
        assert_eq!(c.current_bit_index(), 72);
    }

    #[test]
    fn read_bits_exact_boundary_then_eof() {
        let mut c = BitCursor::new(vec![0xA5]);
        assert_eq!(c.read_bits(8).unwrap(), 0xA5);
        assert_eq!(c.read_bits(1), Err(Error::BufferExhausted));
        assert_eq!(c.remaining_bits(), 0);
    }

    #[test]
    fn skip_past_end_fails() {
        let mut c = BitCursor::new(vec![0x00]);
        assert_eq!(c.skip(9), Err(Error::BufferExhausted));
        assert_eq!(c.current_bit_index(), 8);
    }

    // --- Rewind ---

    #[test]
    fn rewind_borrows_from_byte_offset() {
        let mut c = BitCursor::new(vec![0b1010_0111, 0b1010_0111]);
        c.skip(9).unwrap();
        c.rewind(2).unwrap();
        assert_eq!(c.byte_offset(), 0);
        assert_eq!(c.bit_offset(), 7);
        assert_eq!(c.read_bits(2).unwrap(), 0b11);
    }

    #[test]
    fn rewind_to_start() {
        let mut c = BitCursor::new(vec![0xF0]);
        c.skip(8).unwrap();
        c.rewind(8).unwrap();
        assert_eq!(c.current_bit_index(), 0);
        assert_eq!(c.read_bits(4).unwrap(), 0xF);
    }

    #[test]
    fn rewind_overflow() {
        let mut c = BitCursor::new(vec![0b1010_0111, 0b1010_0111]);
        c.skip(8).unwrap();
        assert_eq!(
            c.rewind(10),
            Err(Error::InvalidRewind { requested: 10, available: 8 })
        );
        assert_eq!(c.current_bit_index(), 8);
    }

    #[test]
    fn read_skip_rewind_share_count_type() {
        let mut c = BitCursor::new(vec![0b1100_1010, 0xFF]);
        let n: usize = 4;
        assert_eq!(c.read_bits(n).unwrap(), 0b1100);
        c.skip(n).unwrap();
        c.rewind(2 * n).unwrap();
        assert_eq!(c.read_bits(2 * n).unwrap(), 0b1100_1010);
        assert_eq!(c.current_bit_index(), 2 * n);
    }

    #[test]
    fn rewind_zero_is_noop() {
        let mut c = BitCursor::new(Vec::new());
        c.rewind(0).unwrap();
        assert_eq!(c.current_bit_index(), 0);
    }

    // --- Checkpoints ---

    #[test]
    fn checkpoint_restore_after_failed_read() {
        let mut c = BitCursor::new(vec![0xAB]);
        c.skip(3).unwrap();
        let cp = c.save_checkpoint();
        assert_eq!(cp.bit_index(), 3);
        assert!(c.read_bits(12).is_err());
        c.restore_checkpoint(cp).unwrap();
        assert_eq!(c.current_bit_index(), 3);
        assert_eq!(c.read_bits(5).unwrap(), 0b01011);
    }

    #[test]
    fn checkpoint_beyond_buffer_is_rejected() {
        let mut c = BitCursor::new(vec![0x00, 0x00]);
        c.skip(12).unwrap();
        let cp = c.save_checkpoint();
        c.trim();
        // Nach trim: nur noch 1 Byte, Checkpoint zeigt auf Bit 12
        assert_eq!(c.restore_checkpoint(cp), Err(Error::BufferExhausted));
        assert_eq!(c.current_bit_index(), 4);
    }

    // --- Append / Trim ---

    #[test]
    fn append_keeps_position() {
        let mut c = BitCursor::new(vec![0xFA, 0x0A, 0x9B]);
        c.skip(8).unwrap();
        c.append(&[0xFF, 0xFF]);
        assert_eq!(c.current_bit_index(), 8);
        assert_eq!(c.len(), 5);
        assert_eq!(c.read_bits(32).unwrap(), 0x0A9B_FFFF);
    }

    #[test]
    fn trim_keeps_bit_offset() {
        let mut c = BitCursor::new(vec![0xFA, 0x0A, 0x9B]);
        c.skip(9).unwrap();
        c.trim();
        assert_eq!(c.current_bit_index(), 1);
        assert_eq!(c.buffer(), &[0x0A, 0x9B]);
        assert_eq!(c.read_bits(7).unwrap(), 0x0A);
    }

    #[test]
    fn trim_at_start_is_noop() {
        let mut c = BitCursor::new(vec![0x12]);
        c.skip(3).unwrap();
        c.trim();
        assert_eq!(c.buffer(), &[0x12]);
        assert_eq!(c.current_bit_index(), 3);
    }

    #[test]
    fn trim_fully_consumed_buffer() {
        let mut c = BitCursor::new(vec![0x12, 0x34]);
        c.skip(16).unwrap();
        c.trim();
        assert!(c.is_empty());
        assert_eq!(c.current_bit_index(), 0);
        c.append(&[0x80]);
        assert_eq!(c.read_bit().unwrap(), 1);
    }

    #[test]
    fn growth_warning_rearms_after_trim() {
        let opts = CursorOptions::default().with_growth_warning(2);
        let mut c = BitCursor::with_options(Vec::new(), &opts);
        c.append(&[0, 0]);
        assert!(!c.growth_warned);
        c.append(&[0]);
        assert!(c.growth_warned);
        c.skip(16).unwrap();
        c.trim();
        assert!(!c.growth_warned);
    }

    #[test]
    fn byte_alignment() {
        let mut c = BitCursor::new(vec![0x00, 0x00]);
        assert!(c.is_byte_aligned());
        c.skip(3).unwrap();
        assert!(!c.is_byte_aligned());
        c.skip(5).unwrap();
        assert!(c.is_byte_aligned());
        assert_eq!(c.remaining_bits(), 8);
    }
}
