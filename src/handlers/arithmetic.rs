//! ADD, MULT, MOD, AND, OR, NOT

use crate::error::{VmError, VmResult};
use crate::state::VmState;

const MODULUS: u32 = 32_768;
const BIT_MASK_15: u16 = 0x7FFF;

/// ADD r a b: `reg[r] <- (a + b) mod 32768`.
pub fn handle_add(state: &mut VmState, opcode_pc: u16) -> VmResult<()> {
    let r = state.fetch_register(opcode_pc)?;
    let a = state.fetch_value(opcode_pc)?;
    let b = state.fetch_value(opcode_pc)?;
    let result = ((a as u32 + b as u32) % MODULUS) as u16;
    state.set_reg(r, result);
    Ok(())
}

/// MULT r a b: `reg[r] <- (a * b) mod 32768`, computed wide enough to avoid
/// overflow before the modulo (the product of two 15-bit values needs up
/// to 30 bits).
pub fn handle_mult(state: &mut VmState, opcode_pc: u16) -> VmResult<()> {
    let r = state.fetch_register(opcode_pc)?;
    let a = state.fetch_value(opcode_pc)?;
    let b = state.fetch_value(opcode_pc)?;
    let result = ((a as u32 * b as u32) % MODULUS) as u16;
    state.set_reg(r, result);
    Ok(())
}

/// MOD r a b: `reg[r] <- a mod b`; `b == 0` is a fatal arithmetic error.
pub fn handle_mod(state: &mut VmState, opcode_pc: u16, opcode_word: u16) -> VmResult<()> {
    let r = state.fetch_register(opcode_pc)?;
    let a = state.fetch_value(opcode_pc)?;
    let b = state.fetch_value(opcode_pc)?;
    if b == 0 {
        return Err(VmError::DivisionByZero(
            state.fault_here(opcode_pc, opcode_word),
        ));
    }
    state.set_reg(r, a % b);
    Ok(())
}

/// AND r a b: bitwise AND.
pub fn handle_and(state: &mut VmState, opcode_pc: u16) -> VmResult<()> {
    let r = state.fetch_register(opcode_pc)?;
    let a = state.fetch_value(opcode_pc)?;
    let b = state.fetch_value(opcode_pc)?;
    state.set_reg(r, a & b);
    Ok(())
}

/// OR r a b: bitwise OR.
pub fn handle_or(state: &mut VmState, opcode_pc: u16) -> VmResult<()> {
    let r = state.fetch_register(opcode_pc)?;
    let a = state.fetch_value(opcode_pc)?;
    let b = state.fetch_value(opcode_pc)?;
    state.set_reg(r, a | b);
    Ok(())
}

/// NOT r a: 15-bit bitwise complement; bit 15 of the result is always 0.
pub fn handle_not(state: &mut VmState, opcode_pc: u16) -> VmResult<()> {
    let r = state.fetch_register(opcode_pc)?;
    let a = state.fetch_value(opcode_pc)?;
    state.set_reg(r, a ^ BIT_MASK_15);
    Ok(())
}
