//! Simulation statistics collection and reporting.
//!
//! This module tracks execution metrics for the simulator. It provides:
//! 1. **Cycle counts:** Total cycles and retired instructions (identical in
//!    a single-cycle model, tracked separately anyway for reporting).
//! 2. **Instruction mix:** Counts by category (ALU, load, store, branch, jump).
//! 3. **Branches:** How many conditional branches were actually taken.
//! 4. **Wall clock:** Elapsed time and derived simulation rate.

use std::time::Instant;

use crate::common::constants::WORD_BYTES;
use crate::common::word::Word;
use crate::core::datapath::Retired;

/// Execution statistics for one simulation run.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Total simulator cycles elapsed.
    pub cycles: u64,
    /// Number of instructions committed (retired).
    pub instructions_retired: u64,
    /// Count of ALU (non-load/store/branch/jump) instructions retired.
    pub inst_alu: u64,
    /// Count of load instructions retired.
    pub inst_load: u64,
    /// Count of store instructions retired.
    pub inst_store: u64,
    /// Count of conditional branch instructions retired.
    pub inst_branch: u64,
    /// Count of jump instructions retired.
    pub inst_jump: u64,
    /// Number of conditional branches that were taken.
    pub branches_taken: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            instructions_retired: 0,
            inst_alu: 0,
            inst_load: 0,
            inst_store: 0,
            inst_branch: 0,
            inst_jump: 0,
            branches_taken: 0,
        }
    }
}

impl SimStats {
    /// Creates a fresh statistics block with the wall clock started.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one committed cycle.
    ///
    /// `old_pc` is the PC the cycle executed at, used to tell a taken
    /// branch from a fall-through.
    pub fn record(&mut self, retired: &Retired, old_pc: Word) {
        self.cycles += 1;
        self.instructions_retired += 1;

        if retired.ctrl.mem_read {
            self.inst_load += 1;
        } else if retired.ctrl.mem_write {
            self.inst_store += 1;
        } else if retired.ctrl.branch {
            self.inst_branch += 1;
            if retired.next_pc != old_pc.wrapping_add(WORD_BYTES) {
                self.branches_taken += 1;
            }
        } else if retired.ctrl.jump {
            self.inst_jump += 1;
        } else {
            self.inst_alu += 1;
        }
    }

    /// Formats the statistics report.
    pub fn report(&self) -> String {
        let elapsed = self.start_time.elapsed().as_secs_f64();
        let rate = if elapsed > 0.0 {
            self.instructions_retired as f64 / elapsed
        } else {
            0.0
        };
        format!(
            "cycles: {}\n\
             instructions retired: {}\n\
               alu: {}  load: {}  store: {}  branch: {} ({} taken)  jump: {}\n\
             elapsed: {:.3}s ({:.0} inst/s)",
            self.cycles,
            self.instructions_retired,
            self.inst_alu,
            self.inst_load,
            self.inst_store,
            self.inst_branch,
            self.branches_taken,
            self.inst_jump,
            elapsed,
            rate,
        )
    }
}
