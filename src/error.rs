//! VM error types

use std::path::PathBuf;

use thiserror::Error;

/// Half-width of the memory window captured in a [`FaultContext`] on either
/// side of the fault address.
pub const FAULT_WINDOW_RADIUS: u16 = 16;

/// Fixed width of [`FaultContext::memory_window`]: the radius on both sides
/// plus the fault address itself. Fixed rather than a `Vec` so the whole
/// context, and `VmError`'s fault-bearing variants with it, can derive
/// `Copy`.
pub const FAULT_WINDOW_LEN: usize = 2 * FAULT_WINDOW_RADIUS as usize + 1;

/// A snapshot of the fault site: the program counter at the moment of the
/// fault, the raw word that was being decoded, and a small window of memory
/// around the fault so the condition can be reproduced from a snapshot taken
/// just before it. Addresses in the window that fall outside `0..MEMORY_SIZE`
/// (the fault occurred near the start or end of memory) are padded with 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaultContext {
    pub pc: u16,
    pub word: u16,
    pub memory_window: [u16; FAULT_WINDOW_LEN],
    /// Address of `memory_window[0]`. May be negative when the fault sits
    /// within `FAULT_WINDOW_RADIUS` of address 0.
    pub window_start: i32,
}

impl std::fmt::Display for FaultContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "pc={} word={} memory[{}..{}]={:?}",
            self.pc,
            self.word,
            self.window_start,
            self.window_start + self.memory_window.len() as i32,
            self.memory_window
        )
    }
}

/// VM execution errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VmError {
    /// Opcode word at the program counter does not name a known instruction.
    #[error("illegal opcode at {0}")]
    IllegalOpcode(FaultContext),

    /// An operand word decoded to neither a literal nor a register reference.
    #[error("illegal operand at {0}")]
    IllegalOperand(FaultContext),

    /// `POP` was executed against an empty stack.
    #[error("stack underflow at {0}")]
    StackUnderflow(FaultContext),

    /// `MOD` was executed with a zero divisor.
    #[error("division by zero at {0}")]
    DivisionByZero(FaultContext),

    /// The program image file was malformed (odd length, too long, unreadable).
    #[error("malformed program image {path}: {reason}")]
    MalformedProgram { path: PathBuf, reason: String },

    /// The snapshot file was malformed or internally inconsistent.
    #[error("malformed snapshot {path}: {reason}")]
    MalformedSnapshot { path: PathBuf, reason: String },

    /// Underlying I/O failure while reading or writing a file. `io::Error`
    /// implements neither `PartialEq` nor `Eq`, so the message is captured
    /// as a `String` at construction time rather than keeping the source
    /// error itself.
    #[error("I/O error on {path}: {reason}")]
    Io { path: PathBuf, reason: String },
}

impl VmError {
    /// Stable numeric exit code for the CLI driver, one per error kind.
    pub fn exit_code(&self) -> i32 {
        match self {
            VmError::IllegalOpcode(_) => 1,
            VmError::IllegalOperand(_) => 2,
            VmError::StackUnderflow(_) => 3,
            VmError::DivisionByZero(_) => 4,
            VmError::MalformedProgram { .. } => 5,
            VmError::MalformedSnapshot { .. } => 6,
            VmError::Io { .. } => 7,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        VmError::Io {
            path: path.into(),
            reason: source.to_string(),
        }
    }
}

/// Result type for VM operations
pub type VmResult<T> = Result<T, VmError>;
