//! EQ, GT

use crate::error::VmResult;
use crate::state::VmState;

/// EQ r a b: `reg[r] <- (a == b) ? 1 : 0`.
pub fn handle_eq(state: &mut VmState, opcode_pc: u16) -> VmResult<()> {
    let r = state.fetch_register(opcode_pc)?;
    let a = state.fetch_value(opcode_pc)?;
    let b = state.fetch_value(opcode_pc)?;
    state.set_reg(r, (a == b) as u16);
    Ok(())
}

/// GT r a b: `reg[r] <- (a > b) ? 1 : 0`.
pub fn handle_gt(state: &mut VmState, opcode_pc: u16) -> VmResult<()> {
    let r = state.fetch_register(opcode_pc)?;
    let a = state.fetch_value(opcode_pc)?;
    let b = state.fetch_value(opcode_pc)?;
    state.set_reg(r, (a > b) as u16);
    Ok(())
}
