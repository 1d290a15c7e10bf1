//! JMP, JT, JF, CALL, RET

use crate::error::VmResult;
use crate::state::VmState;

/// JMP a: `pc <- a`.
pub fn handle_jmp(state: &mut VmState, opcode_pc: u16) -> VmResult<()> {
    let target = state.fetch_value(opcode_pc)?;
    state.pc = target;
    Ok(())
}

/// JT a b: `pc <- b` if `a` is non-zero, else fall through.
pub fn handle_jt(state: &mut VmState, opcode_pc: u16) -> VmResult<()> {
    let a = state.fetch_value(opcode_pc)?;
    let target = state.fetch_value(opcode_pc)?;
    if a != 0 {
        state.pc = target;
    }
    Ok(())
}

/// JF a b: `pc <- b` if `a` is zero, else fall through.
pub fn handle_jf(state: &mut VmState, opcode_pc: u16) -> VmResult<()> {
    let a = state.fetch_value(opcode_pc)?;
    let target = state.fetch_value(opcode_pc)?;
    if a == 0 {
        state.pc = target;
    }
    Ok(())
}

/// CALL a: push the address of the instruction after this one, then
/// `pc <- a`.
pub fn handle_call(state: &mut VmState, opcode_pc: u16) -> VmResult<()> {
    let target = state.fetch_value(opcode_pc)?;
    let return_addr = state.pc;
    state.push(return_addr);
    state.pc = target;
    Ok(())
}

/// RET: pop the stack into `pc`. An empty stack halts the machine cleanly
/// rather than faulting — a program that returns from its outermost frame
/// has nothing left to do.
pub fn handle_ret(state: &mut VmState, opcode_pc: u16, opcode_word: u16) -> VmResult<()> {
    match state.pop(opcode_pc, opcode_word) {
        Ok(target) => {
            state.pc = target;
            Ok(())
        }
        Err(_) => {
            state.halted = true;
            Ok(())
        }
    }
}
