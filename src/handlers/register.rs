//! SET

use crate::error::VmResult;
use crate::state::VmState;

/// SET r a: `reg[r] <- a`.
pub fn handle_set(state: &mut VmState, opcode_pc: u16) -> VmResult<()> {
    let r = state.fetch_register(opcode_pc)?;
    let value = state.fetch_value(opcode_pc)?;
    state.set_reg(r, value);
    Ok(())
}
