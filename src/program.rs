//! Program image loading
//!
//! A program image is a sequence of little-endian 16-bit words copied into
//! memory starting at address 0; remaining cells are left zero. The file
//! must be no more than `MEMORY_SIZE` words (65 536 bytes) and must contain
//! a whole number of words.

use std::io::Read;
use std::path::{Path, PathBuf};

use byteorder::{LittleEndian, ReadBytesExt};

use crate::error::{VmError, VmResult};
use crate::state::{VmState, MEMORY_SIZE};

/// Load a program image file into a fresh [`VmState`].
pub fn load(path: impl AsRef<Path>) -> VmResult<VmState> {
    let path: PathBuf = path.as_ref().to_path_buf();
    let mut bytes = Vec::new();
    std::fs::File::open(&path)
        .and_then(|mut f| f.read_to_end(&mut bytes))
        .map_err(|e| VmError::io(path.clone(), e))?;
    decode(&bytes, &path)
}

/// Parse raw program-image bytes into a fresh [`VmState`].
pub fn decode(bytes: &[u8], path: &Path) -> VmResult<VmState> {
    let malformed = |reason: String| VmError::MalformedProgram {
        path: path.to_path_buf(),
        reason,
    };

    if bytes.len() % 2 != 0 {
        return Err(malformed(format!(
            "file length {} is odd; a program image is a sequence of 16-bit words",
            bytes.len()
        )));
    }
    if bytes.len() > MEMORY_SIZE * 2 {
        return Err(malformed(format!(
            "file is {} bytes, exceeds the {}-byte ({} word) memory image",
            bytes.len(),
            MEMORY_SIZE * 2,
            MEMORY_SIZE
        )));
    }

    let mut state = VmState::new();
    let mut cursor = std::io::Cursor::new(bytes);
    let mut i = 0usize;
    while let Ok(word) = cursor.read_u16::<LittleEndian>() {
        state.memory[i] = word;
        i += 1;
    }
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_words_starting_at_zero_leaves_rest_zeroed() {
        let bytes = [19, 0, 65, 0, 0, 0]; // OUT 'A'; HALT
        let state = decode(&bytes, Path::new("prog.bin")).unwrap();
        assert_eq!(state.memory[0], 19);
        assert_eq!(state.memory[1], 65);
        assert_eq!(state.memory[2], 0);
        assert!(state.memory[3..].iter().all(|&c| c == 0));
    }

    #[test]
    fn odd_length_is_a_fatal_load_error() {
        let bytes = [19, 0, 65];
        assert!(matches!(
            decode(&bytes, Path::new("prog.bin")),
            Err(VmError::MalformedProgram { .. })
        ));
    }

    #[test]
    fn oversized_file_is_a_fatal_load_error() {
        let bytes = vec![0u8; (MEMORY_SIZE + 1) * 2];
        assert!(matches!(
            decode(&bytes, Path::new("prog.bin")),
            Err(VmError::MalformedProgram { .. })
        ));
    }
}
