//! Instruction fetch tests.

use pretty_assertions::assert_eq;

use mipsim_core::common::error::Trap;
use mipsim_core::common::mem::WordMemory;
use mipsim_core::core::datapath::fetch::fetch;

fn imem() -> WordMemory {
    match WordMemory::from_image(4, &[0xAAAA_0000, 0xBBBB_0001, 0xCCCC_0002, 0xDDDD_0003]) {
        Some(mem) => mem,
        None => panic!("image larger than memory"),
    }
}

#[test]
fn resolves_byte_address_to_word_slot() {
    let mem = imem();
    assert_eq!(fetch(0, &mem), Ok(0xAAAA_0000));
    assert_eq!(fetch(4, &mem), Ok(0xBBBB_0001));
    assert_eq!(fetch(12, &mem), Ok(0xDDDD_0003));
}

#[test]
fn misaligned_pc_traps() {
    let mem = imem();
    for pc in [1, 2, 3, 6] {
        assert_eq!(fetch(pc, &mem), Err(Trap::InstructionAddressMisaligned(pc)));
    }
}

#[test]
fn pc_past_image_traps() {
    let mem = imem();
    assert_eq!(fetch(16, &mem), Err(Trap::InstructionAccessFault(16)));
}
