//! Dispatch loop
//!
//! Fetches the opcode at the program counter, looks up its operand count,
//! and hands off to the matching handler. Handlers that fetch operands
//! advance the PC themselves through [`VmState::fetch_value`] and friends;
//! control-flow handlers overwrite it directly. The loop runs until the
//! machine halts or a handler returns a fatal [`VmError`].

use log::trace;

use crate::console::{ConsoleInput, ConsoleOutput};
use crate::error::{VmError, VmResult};
use crate::handlers;
use crate::opcodes::{self, NARGS, OPCODE_COUNT};
use crate::state::{fault_context, VmState, MEMORY_SIZE};

/// Run `state` to completion against the given console, consuming OUT/IN
/// traffic through `out`/`input`.
pub fn run(
    state: &mut VmState,
    out: &mut dyn ConsoleOutput,
    input: &mut dyn ConsoleInput,
) -> VmResult<()> {
    while !state.halted {
        step(state, out, input)?;
    }
    out.flush()
        .map_err(|e| VmError::io("<console fd>", e))?;
    Ok(())
}

/// Execute exactly one instruction, for callers that want to interleave
/// their own logic between steps (snapshotting mid-run, single-stepping
/// debuggers).
pub fn run_one(
    state: &mut VmState,
    out: &mut dyn ConsoleOutput,
    input: &mut dyn ConsoleInput,
) -> VmResult<()> {
    step(state, out, input)
}

fn step(
    state: &mut VmState,
    out: &mut dyn ConsoleOutput,
    input: &mut dyn ConsoleInput,
) -> VmResult<()> {
    let opcode_pc = state.pc;
    let opcode = state.fetch_opcode();

    if opcode >= OPCODE_COUNT {
        return Err(VmError::IllegalOpcode(fault_context(
            opcode_pc,
            opcode,
            state.memory.as_slice(),
        )));
    }

    let nargs = NARGS[opcode as usize];
    trace!(
        "pc={opcode_pc:5} op={:<5} nargs={} operands={:?}",
        opcodes::mnemonic(opcode),
        nargs,
        operand_words(state, opcode_pc, nargs)
    );

    dispatch(state, opcode, opcode_pc, out, input)
}

/// Peek the raw operand words following the opcode at `opcode_pc`, without
/// consuming them (the handler does that itself via `VmState::fetch_*`).
/// Used only for tracing a faithful record of what the instruction actually
/// read before it runs.
fn operand_words(state: &VmState, opcode_pc: u16, nargs: u8) -> Vec<u16> {
    (1..=nargs as u16)
        .map(|i| state.memory[(opcode_pc.wrapping_add(i) as usize) % MEMORY_SIZE])
        .collect()
}

fn dispatch(
    state: &mut VmState,
    opcode: u16,
    opcode_pc: u16,
    out: &mut dyn ConsoleOutput,
    input: &mut dyn ConsoleInput,
) -> VmResult<()> {
    match opcode {
        opcodes::HALT => handlers::handle_halt(state),
        opcodes::SET => handlers::handle_set(state, opcode_pc),
        opcodes::PUSH => handlers::handle_push(state, opcode_pc),
        opcodes::POP => handlers::handle_pop(state, opcode_pc, opcode),
        opcodes::EQ => handlers::handle_eq(state, opcode_pc),
        opcodes::GT => handlers::handle_gt(state, opcode_pc),
        opcodes::JMP => handlers::handle_jmp(state, opcode_pc),
        opcodes::JT => handlers::handle_jt(state, opcode_pc),
        opcodes::JF => handlers::handle_jf(state, opcode_pc),
        opcodes::ADD => handlers::handle_add(state, opcode_pc),
        opcodes::MULT => handlers::handle_mult(state, opcode_pc),
        opcodes::MOD => handlers::handle_mod(state, opcode_pc, opcode),
        opcodes::AND => handlers::handle_and(state, opcode_pc),
        opcodes::OR => handlers::handle_or(state, opcode_pc),
        opcodes::NOT => handlers::handle_not(state, opcode_pc),
        opcodes::RMEM => handlers::handle_rmem(state, opcode_pc),
        opcodes::WMEM => handlers::handle_wmem(state, opcode_pc),
        opcodes::CALL => handlers::handle_call(state, opcode_pc),
        opcodes::RET => handlers::handle_ret(state, opcode_pc, opcode),
        opcodes::OUT => handlers::handle_out(state, opcode_pc, opcode, out),
        opcodes::IN => handlers::handle_in(state, opcode_pc, input),
        opcodes::NOOP => handlers::handle_noop(state),
        _ => unreachable!("opcode range already checked in step()"),
    }
}
