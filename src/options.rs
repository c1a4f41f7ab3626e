//! Construction options for [`BitCursor`](crate::BitCursor).
//!
//! # Beispiel
//!
//! ```
//! use bitcursor::{BitCursor, CursorOptions};
//!
//! let opts = CursorOptions::default()
//!     .with_initial_capacity(4096)
//!     .with_growth_warning(1 << 20);
//!
//! let cursor = BitCursor::with_options(vec![0xAB], &opts);
//! assert_eq!(cursor.len(), 1);
//! assert_eq!(opts.growth_warning(), Some(1 << 20));
//! ```

/// Options controlling buffer allocation and growth diagnostics.
///
/// None of the options change what a read returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CursorOptions {
    pub(crate) initial_capacity: usize,
    pub(crate) growth_warning: Option<usize>,
}

impl CursorOptions {
    // --- Getter ---

    /// Extra bytes reserved in the owned buffer at construction.
    pub fn initial_capacity(&self) -> usize { self.initial_capacity }
    /// Buffer length in bytes above which `append` emits a one-shot warning.
    pub fn growth_warning(&self) -> Option<usize> { self.growth_warning }

    // --- Builder ---

    pub fn with_initial_capacity(mut self, bytes: usize) -> Self { self.initial_capacity = bytes; self }

    pub fn with_growth_warning(mut self, bytes: usize) -> Self { self.growth_warning = Some(bytes); self }

    // --- Setter ---

    pub fn set_initial_capacity(&mut self, bytes: usize) { self.initial_capacity = bytes; }

    pub fn set_growth_warning(&mut self, bytes: Option<usize>) { self.growth_warning = bytes; }
}
