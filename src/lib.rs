//! # vm15
//!
//! Interpreter for a fixed-width 15-bit register virtual machine: 8
//! registers, an unbounded stack, 32768 words of memory, and 22 opcodes.
//!
//! ## Example
//!
//! ```rust
//! use vm15::{console::BufferedOutput, console::BufferedInput, engine, opcodes, VmState};
//!
//! let mut state = VmState::new();
//! state.memory[0] = opcodes::OUT;
//! state.memory[1] = 'H' as u16;
//! state.memory[2] = opcodes::HALT;
//!
//! let mut out = BufferedOutput::default();
//! let mut input = BufferedInput::default();
//! engine::run(&mut state, &mut out, &mut input).unwrap();
//! assert_eq!(out.as_str(), "H");
//! ```

pub mod console;
pub mod decode;
pub mod engine;
pub mod error;
pub mod handlers;
pub mod opcodes;
pub mod program;
pub mod snapshot;
pub mod state;

pub use console::{
    BufferedInput, BufferedOutput, ConsoleInput, ConsoleOutput, StdConsole, StdInput, StdOutput,
};
pub use engine::run;
pub use error::{VmError, VmResult};
pub use state::VmState;

/// Crate version, as declared in `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
