//! HALT

use crate::error::VmResult;
use crate::state::VmState;

/// HALT: stop execution. Does not touch the stack or registers.
pub fn handle_halt(state: &mut VmState) -> VmResult<()> {
    state.halted = true;
    Ok(())
}
