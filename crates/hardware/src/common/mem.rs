//! Word-addressed memory.
//!
//! This module provides the flat memory used for both the instruction image
//! and data memory. It provides:
//! 1. **Addressing:** Byte addresses are resolved to word slots by dividing
//!    by the word size; no sub-word access exists in this model.
//! 2. **Fault Generation:** Out-of-range accesses fail fast with the trap
//!    matching the access type; there is no undefined out-of-image
//!    indexing.

use crate::common::constants::WORD_BYTES;
use crate::common::data::AccessType;
use crate::common::error::Trap;
use crate::common::word::Word;

/// A flat, word-addressed memory image.
///
/// Shared across cycles; for data memory the memory unit is the only
/// datapath writer. Sizing and population belong to the outer driver.
#[derive(Clone, Debug)]
pub struct WordMemory {
    words: Vec<Word>,
}

impl WordMemory {
    /// Creates a zero-filled memory of `words` word slots.
    pub fn with_capacity(words: usize) -> Self {
        Self {
            words: vec![0; words],
        }
    }

    /// Creates a memory of `words` slots with `image` copied to the front.
    ///
    /// Returns `None` when the image does not fit.
    pub fn from_image(words: usize, image: &[Word]) -> Option<Self> {
        if image.len() > words {
            return None;
        }
        let mut mem = Self::with_capacity(words);
        mem.words[..image.len()].copy_from_slice(image);
        Some(mem)
    }

    /// Number of word slots in the memory.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` when the memory has no slots.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Reads the word at byte address `addr`.
    ///
    /// The slot index is `addr / 4`; an index past the image raises the
    /// access fault matching `access`.
    pub fn read(&self, addr: Word, access: AccessType) -> Result<Word, Trap> {
        let idx = (addr / WORD_BYTES) as usize;
        self.words.get(idx).copied().ok_or(match access {
            AccessType::Fetch => Trap::InstructionAccessFault(addr),
            AccessType::Read | AccessType::Write => Trap::LoadAccessFault(addr),
        })
    }

    /// Writes `val` to the word at byte address `addr`.
    ///
    /// The slot index is `addr / 4`; an index past the image raises a
    /// store access fault.
    pub fn write(&mut self, addr: Word, val: Word) -> Result<(), Trap> {
        let idx = (addr / WORD_BYTES) as usize;
        match self.words.get_mut(idx) {
            Some(slot) => {
                *slot = val;
                Ok(())
            }
            None => Err(Trap::StoreAccessFault(addr)),
        }
    }
}
