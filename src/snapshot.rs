//! Snapshot codec
//!
//! Layout, little-endian 16-bit words throughout:
//!
//! ```text
//! PC (1 word) | stack depth n (1 word) | n stack words, bottom first
//! | 8 register words | MEMORY_SIZE memory words, address order
//! ```
//!
//! Any divergence from this shape — a truncated stack, a register block
//! that runs short, a memory image that isn't exactly `MEMORY_SIZE` words —
//! is a fatal load error, since versioning is implicit rather than tagged.

use std::io::{Cursor, Read, Write};
use std::path::{Path, PathBuf};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::error::{VmError, VmResult};
use crate::state::{VmState, MEMORY_SIZE, NUM_REGISTERS};

/// Serialise `state` into the snapshot byte layout.
pub fn encode(state: &VmState) -> Vec<u8> {
    let mut buf = Vec::with_capacity((3 + state.stack.len() + NUM_REGISTERS + MEMORY_SIZE) * 2);
    buf.write_u16::<LittleEndian>(state.pc).unwrap();
    buf.write_u16::<LittleEndian>(state.stack.len() as u16)
        .unwrap();
    for &word in &state.stack {
        buf.write_u16::<LittleEndian>(word).unwrap();
    }
    for &reg in &state.regs {
        buf.write_u16::<LittleEndian>(reg).unwrap();
    }
    for &cell in state.memory.iter() {
        buf.write_u16::<LittleEndian>(cell).unwrap();
    }
    buf
}

/// Parse a snapshot byte buffer into a [`VmState`], reporting `path` in any
/// error for diagnostics.
pub fn decode(bytes: &[u8], path: &Path) -> VmResult<VmState> {
    let malformed = |reason: String| VmError::MalformedSnapshot {
        path: path.to_path_buf(),
        reason,
    };

    if bytes.len() % 2 != 0 {
        return Err(malformed(format!(
            "snapshot length {} is not a whole number of 16-bit words",
            bytes.len()
        )));
    }

    let mut cursor = Cursor::new(bytes);
    let pc = cursor
        .read_u16::<LittleEndian>()
        .map_err(|_| malformed("truncated before PC word".into()))?;
    let depth = cursor
        .read_u16::<LittleEndian>()
        .map_err(|_| malformed("truncated before stack-depth word".into()))?;

    let mut stack = Vec::with_capacity(depth as usize);
    for i in 0..depth {
        let word = cursor.read_u16::<LittleEndian>().map_err(|_| {
            malformed(format!(
                "truncated stack: declared depth {depth} but ran out at entry {i}"
            ))
        })?;
        stack.push(word);
    }

    let mut regs = [0u16; NUM_REGISTERS];
    for r in regs.iter_mut() {
        *r = cursor
            .read_u16::<LittleEndian>()
            .map_err(|_| malformed("truncated before register block was complete".into()))?;
    }

    let mut state = VmState::new();
    state.pc = pc;
    state.stack = stack;
    state.regs = regs;

    let mut filled = 0usize;
    loop {
        match cursor.read_u16::<LittleEndian>() {
            Ok(word) => {
                if filled >= MEMORY_SIZE {
                    return Err(malformed(format!(
                        "memory image longer than {MEMORY_SIZE} words"
                    )));
                }
                state.memory[filled] = word;
                filled += 1;
            }
            Err(_) => break,
        }
    }
    if filled != MEMORY_SIZE {
        return Err(malformed(format!(
            "memory image has {filled} words, expected {MEMORY_SIZE}"
        )));
    }

    Ok(state)
}

/// Write `state` to `path` as a snapshot file.
pub fn save(state: &VmState, path: impl AsRef<Path>) -> VmResult<()> {
    let path = path.as_ref();
    let bytes = encode(state);
    let mut file =
        std::fs::File::create(path).map_err(|e| VmError::io(path.to_path_buf(), e))?;
    file.write_all(&bytes)
        .map_err(|e| VmError::io(path.to_path_buf(), e))
}

/// Read and decode a snapshot file.
pub fn load(path: impl AsRef<Path>) -> VmResult<VmState> {
    let path: PathBuf = path.as_ref().to_path_buf();
    let mut bytes = Vec::new();
    std::fs::File::open(&path)
        .and_then(|mut f| f.read_to_end(&mut bytes))
        .map_err(|e| VmError::io(path.clone(), e))?;
    decode(&bytes, &path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_preserves_state_exactly() {
        let mut state = VmState::new();
        state.pc = 42;
        state.regs = [1, 2, 3, 4, 5, 6, 7, 8];
        state.stack = vec![10, 20, 30];
        state.memory[0] = 19;
        state.memory[5] = 777;

        let bytes = encode(&state);
        let restored = decode(&bytes, Path::new("test.snap")).unwrap();
        assert_eq!(restored, state);
    }

    #[test]
    fn empty_stack_round_trips() {
        let state = VmState::new();
        let bytes = encode(&state);
        let restored = decode(&bytes, Path::new("test.snap")).unwrap();
        assert_eq!(restored, state);
    }

    #[test]
    fn truncated_snapshot_is_a_fatal_load_error() {
        let state = VmState::new();
        let mut bytes = encode(&state);
        bytes.truncate(bytes.len() - 4);
        assert!(matches!(
            decode(&bytes, Path::new("test.snap")),
            Err(VmError::MalformedSnapshot { .. })
        ));
    }

    #[test]
    fn odd_length_snapshot_is_a_fatal_load_error() {
        let mut bytes = encode(&VmState::new());
        bytes.push(0);
        assert!(matches!(
            decode(&bytes, Path::new("test.snap")),
            Err(VmError::MalformedSnapshot { .. })
        ));
    }

    #[test]
    fn stack_depth_inconsistent_with_remaining_words_is_fatal() {
        let mut bytes = Vec::new();
        bytes.write_u16::<LittleEndian>(0).unwrap(); // pc
        bytes.write_u16::<LittleEndian>(5).unwrap(); // claims 5 stack entries
        bytes.write_u16::<LittleEndian>(1).unwrap(); // but only provides 1
        assert!(matches!(
            decode(&bytes, Path::new("test.snap")),
            Err(VmError::MalformedSnapshot { .. })
        ));
    }
}
