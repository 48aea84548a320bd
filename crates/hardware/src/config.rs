//! Configuration system for the MIPS simulator.
//!
//! This module defines the configuration structures used to parameterize
//! the simulator. It provides:
//! 1. **Defaults:** Baseline constants (memory sizes, start PC, cycle limit).
//! 2. **Structures:** Hierarchical config for general behaviour and memory sizing.
//!
//! Configuration is supplied as JSON via [`Config::from_json`], or use
//! `Config::default()` for the built-in baseline.

use serde::Deserialize;

use crate::common::word::Word;

/// Default configuration constants for the simulator.
///
/// These values define the baseline configuration when not explicitly
/// overridden in a JSON configuration file.
mod defaults {
    use crate::common::word::Word;

    /// Instruction memory size in words (16 KiB of instructions).
    pub const INSTR_WORDS: usize = 4096;

    /// Data memory size in words (64 KiB of data).
    pub const DATA_WORDS: usize = 16384;

    /// Initial program counter (byte address).
    pub const START_PC: Word = 0;

    /// Cycle budget before the driver gives up on a run.
    pub const MAX_CYCLES: u64 = 1_000_000;
}

/// General simulation behaviour.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Initial program counter (byte address, multiple of 4).
    pub start_pc: Word,
    /// Cycle budget; the driver stops with a cycle-limit report when hit.
    pub max_cycles: u64,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            start_pc: defaults::START_PC,
            max_cycles: defaults::MAX_CYCLES,
        }
    }
}

/// Memory image sizing.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MemoryConfig {
    /// Instruction memory size in words.
    pub instr_words: usize,
    /// Data memory size in words.
    pub data_words: usize,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            instr_words: defaults::INSTR_WORDS,
            data_words: defaults::DATA_WORDS,
        }
    }
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General simulation behaviour.
    pub general: GeneralConfig,
    /// Memory image sizing.
    pub memory: MemoryConfig,
}

impl Config {
    /// Parses a configuration from a JSON document.
    ///
    /// Missing sections and fields fall back to the built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error for malformed documents.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}
