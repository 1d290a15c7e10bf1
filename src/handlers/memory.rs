//! RMEM, WMEM

use crate::error::VmResult;
use crate::state::VmState;

/// RMEM r a: `reg[r] <- mem[a]`. `a` may itself be a register reference, in
/// which case its decoded value (a 15-bit number) is the memory index.
pub fn handle_rmem(state: &mut VmState, opcode_pc: u16) -> VmResult<()> {
    let r = state.fetch_register(opcode_pc)?;
    let addr = state.fetch_value(opcode_pc)?;
    let value = state.read_mem(addr);
    state.set_reg(r, value);
    Ok(())
}

/// WMEM a b: `mem[a] <- b`. Writing through the PC's own address must not
/// disturb the PC — only the fetch/decode of `a` and `b` advances it.
pub fn handle_wmem(state: &mut VmState, opcode_pc: u16) -> VmResult<()> {
    let addr = state.fetch_value(opcode_pc)?;
    let value = state.fetch_value(opcode_pc)?;
    state.write_mem(addr, value);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opcodes;

    #[test]
    fn rmem_reads_literal_address() {
        let mut state = VmState::new();
        state.memory[10] = 555;
        state.memory[0] = opcodes::RMEM;
        state.memory[1] = 32_768; // register 0
        state.memory[2] = 10;
        state.pc = 1;
        handle_rmem(&mut state, 0).unwrap();
        assert_eq!(state.get_reg(0), 555);
    }

    #[test]
    fn wmem_does_not_disturb_pc_even_when_writing_through_it() {
        let mut state = VmState::new();
        state.memory[0] = opcodes::WMEM;
        state.memory[1] = 0; // address 0: the opcode's own cell
        state.memory[2] = 999;
        state.pc = 1;
        handle_wmem(&mut state, 0).unwrap();
        assert_eq!(state.memory[0], 999);
        assert_eq!(state.pc, 3);
    }
}
