//! OUT, IN

use crate::console::{ConsoleInput, ConsoleOutput};
use crate::error::{VmError, VmResult};
use crate::state::VmState;

/// OUT a: emit the character with code `a`. Codes outside printable ASCII
/// are passed through unchanged rather than rejected.
pub fn handle_out(
    state: &mut VmState,
    opcode_pc: u16,
    opcode_word: u16,
    out: &mut dyn ConsoleOutput,
) -> VmResult<()> {
    let code = state.fetch_value(opcode_pc)?;
    out.emit(code)
        .map_err(|e| VmError::io(format!("<console fd at pc {opcode_pc}>"), e))?;
    if code == b'\n' as u16 {
        out.flush()
            .map_err(|e| VmError::io(format!("<console fd at pc {opcode_word}>"), e))?;
    }
    Ok(())
}

/// IN r: read one character into `reg[r]`.
pub fn handle_in(
    state: &mut VmState,
    opcode_pc: u16,
    input: &mut dyn ConsoleInput,
) -> VmResult<()> {
    let r = state.fetch_register(opcode_pc)?;
    let code = input
        .next_char()
        .map_err(|e| VmError::io(format!("<console fd at pc {opcode_pc}>"), e))?;
    state.set_reg(r, code);
    Ok(())
}
