//! Simulator: owns the architectural state between cycles.
//!
//! The datapath itself is stateless; the simulator holds the program
//! counter, register file, and both memories, invokes one datapath cycle
//! per `tick`, and commits the cycle's PC update. Halt conditions (the
//! cycle budget and running off the end of the loaded program) live here,
//! outside the datapath.

use tracing::trace;

use crate::common::constants::WORD_BYTES;
use crate::common::error::Trap;
use crate::common::mem::WordMemory;
use crate::common::reg::RegisterFile;
use crate::common::word::Word;
use crate::config::Config;
use crate::core::datapath;
use crate::isa::disasm::disassemble;
use crate::sim::loader::LoaderError;
use crate::stats::SimStats;

/// Why a simulation run stopped without trapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// The program counter ran past the loaded instruction image.
    ProgramEnd,
    /// The cycle budget was exhausted.
    CycleLimit,
}

/// Top-level simulator: architectural state + statistics.
#[derive(Debug)]
pub struct Simulator {
    /// Current program counter (byte address).
    pub pc: Word,
    /// The 32-entry register file.
    pub regs: RegisterFile,
    /// Instruction memory image.
    pub imem: WordMemory,
    /// Data memory image.
    pub dmem: WordMemory,
    /// Execution statistics for this run.
    pub stats: SimStats,
    /// Words occupied by the loaded program; the run stops when the PC
    /// passes this point.
    program_words: usize,
}

impl Simulator {
    /// Creates a simulator with zeroed state sized per the configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            pc: config.general.start_pc,
            regs: RegisterFile::new(),
            imem: WordMemory::with_capacity(config.memory.instr_words),
            dmem: WordMemory::with_capacity(config.memory.data_words),
            stats: SimStats::new(),
            program_words: 0,
        }
    }

    /// Loads a program image into instruction memory.
    ///
    /// # Errors
    ///
    /// Returns [`LoaderError::ImageTooLarge`] when the image exceeds the
    /// configured instruction memory.
    pub fn load_program(&mut self, image: &[Word]) -> Result<(), LoaderError> {
        let capacity = self.imem.len();
        self.imem = WordMemory::from_image(capacity, image).ok_or(LoaderError::ImageTooLarge {
            words: image.len(),
            capacity,
        })?;
        self.program_words = image.len();
        Ok(())
    }

    /// Loads an initial data image into data memory.
    ///
    /// # Errors
    ///
    /// Returns [`LoaderError::ImageTooLarge`] when the image exceeds the
    /// configured data memory.
    pub fn load_data(&mut self, image: &[Word]) -> Result<(), LoaderError> {
        let capacity = self.dmem.len();
        self.dmem = WordMemory::from_image(capacity, image).ok_or(LoaderError::ImageTooLarge {
            words: image.len(),
            capacity,
        })?;
        Ok(())
    }

    /// Advances the simulation by one clock cycle.
    ///
    /// # Errors
    ///
    /// Propagates any [`Trap`] from the datapath; on a trap no state has
    /// changed and the cycle is not counted.
    pub fn tick(&mut self) -> Result<(), Trap> {
        let old_pc = self.pc;
        let retired = datapath::step(old_pc, &self.imem, &mut self.dmem, &mut self.regs)?;

        trace!(
            "pc={old_pc:#010x} -> {:#010x}  {}",
            retired.next_pc,
            disassemble(&retired.fields)
        );

        self.stats.record(&retired, old_pc);
        self.pc = retired.next_pc;
        Ok(())
    }

    /// Runs until the program ends, the cycle budget is exhausted, or a
    /// trap occurs.
    ///
    /// # Errors
    ///
    /// Propagates the first [`Trap`] raised by any cycle.
    pub fn run(&mut self, max_cycles: u64) -> Result<StopReason, Trap> {
        for _ in 0..max_cycles {
            if self.program_ended() {
                return Ok(StopReason::ProgramEnd);
            }
            self.tick()?;
        }
        Ok(StopReason::CycleLimit)
    }

    /// Whether the PC has run past the loaded program image.
    fn program_ended(&self) -> bool {
        (self.pc / WORD_BYTES) as usize >= self.program_words
    }
}
