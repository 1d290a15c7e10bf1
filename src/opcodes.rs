//! Opcode definitions for the VM
//!
//! Instruction format: one opcode word followed by `NARGS[op]` operand
//! words. Every word, including the opcode itself, is a 15-bit unsigned
//! value stored in a 16-bit memory cell.

/// Stop execution.
pub const HALT: u16 = 0;
/// `SET r a` — `reg[r] <- a`.
pub const SET: u16 = 1;
/// `PUSH a` — push `a` onto the stack.
pub const PUSH: u16 = 2;
/// `POP r` — pop the stack into `reg[r]`; empty stack is a fatal error.
pub const POP: u16 = 3;
/// `EQ r a b` — `reg[r] <- (a == b)`.
pub const EQ: u16 = 4;
/// `GT r a b` — `reg[r] <- (a > b)`.
pub const GT: u16 = 5;
/// `JMP a` — unconditional jump.
pub const JMP: u16 = 6;
/// `JT a b` — jump to `b` if `a != 0`.
pub const JT: u16 = 7;
/// `JF a b` — jump to `b` if `a == 0`.
pub const JF: u16 = 8;
/// `ADD r a b` — `reg[r] <- (a + b) mod 32768`.
pub const ADD: u16 = 9;
/// `MULT r a b` — `reg[r] <- (a * b) mod 32768`.
pub const MULT: u16 = 10;
/// `MOD r a b` — `reg[r] <- a mod b`; `b == 0` is a fatal error.
pub const MOD: u16 = 11;
/// `AND r a b` — bitwise AND.
pub const AND: u16 = 12;
/// `OR r a b` — bitwise OR.
pub const OR: u16 = 13;
/// `NOT r a` — 15-bit bitwise complement.
pub const NOT: u16 = 14;
/// `RMEM r a` — `reg[r] <- mem[a]`.
pub const RMEM: u16 = 15;
/// `WMEM a b` — `mem[a] <- b`.
pub const WMEM: u16 = 16;
/// `CALL a` — push the return address, jump to `a`.
pub const CALL: u16 = 17;
/// `RET` — pop the stack into the PC; empty stack halts cleanly.
pub const RET: u16 = 18;
/// `OUT a` — emit the character with code `a`.
pub const OUT: u16 = 19;
/// `IN r` — read one character into `reg[r]`.
pub const IN: u16 = 20;
/// No operation.
pub const NOOP: u16 = 21;

/// One past the highest legal opcode value.
pub const OPCODE_COUNT: u16 = 22;

/// Number of operand words following each opcode, indexed by opcode value.
///
/// `GT` is fixed at 3 here even though the source program this VM descends
/// from omitted it from its own table — the opcode's implementation always
/// consumed three operands, so the omission there was a bug, not a
/// deliberate 0-operand form.
pub const NARGS: [u8; OPCODE_COUNT as usize] = [
    0, // HALT
    2, // SET
    1, // PUSH
    1, // POP
    3, // EQ
    3, // GT
    1, // JMP
    2, // JT
    2, // JF
    3, // ADD
    3, // MULT
    3, // MOD
    3, // AND
    3, // OR
    2, // NOT
    2, // RMEM
    2, // WMEM
    1, // CALL
    0, // RET
    1, // OUT
    1, // IN
    0, // NOOP
];

/// Opcode mnemonic, for tracing and fault reports.
pub fn mnemonic(op: u16) -> &'static str {
    match op {
        HALT => "HALT",
        SET => "SET",
        PUSH => "PUSH",
        POP => "POP",
        EQ => "EQ",
        GT => "GT",
        JMP => "JMP",
        JT => "JT",
        JF => "JF",
        ADD => "ADD",
        MULT => "MULT",
        MOD => "MOD",
        AND => "AND",
        OR => "OR",
        NOT => "NOT",
        RMEM => "RMEM",
        WMEM => "WMEM",
        CALL => "CALL",
        RET => "RET",
        OUT => "OUT",
        IN => "IN",
        NOOP => "NOOP",
        _ => "UNKNOWN",
    }
}
