//! PUSH, POP

use crate::error::VmResult;
use crate::state::VmState;

/// PUSH a: push `a` onto the stack.
pub fn handle_push(state: &mut VmState, opcode_pc: u16) -> VmResult<()> {
    let value = state.fetch_value(opcode_pc)?;
    state.push(value);
    Ok(())
}

/// POP r: pop the stack into `reg[r]`; empty stack is a fatal error.
pub fn handle_pop(state: &mut VmState, opcode_pc: u16, opcode_word: u16) -> VmResult<()> {
    let r = state.fetch_register(opcode_pc)?;
    let value = state.pop(opcode_pc, opcode_word)?;
    state.set_reg(r, value);
    Ok(())
}
