//! Operand decoding
//!
//! An operand word is either a literal 15-bit value or a reference to one
//! of the eight registers, per the address-space convention in the VM's
//! data model: `0..=32767` is a literal, `32768..=32775` names register
//! `w - 32768`, anything else is illegal.

use crate::error::VmError;
use crate::state::{fault_context, NUM_REGISTERS};

const REGISTER_BASE: u16 = 32_768;
const REGISTER_LIMIT: u16 = REGISTER_BASE + NUM_REGISTERS as u16;

/// An operand, decoded once and consumed by the handler that needs it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    Literal(u16),
    Register(u8),
}

/// Decode a raw operand word into a [`Operand`], or an illegal-operand
/// fault if it names neither a literal nor a register.
pub fn decode_operand(word: u16, pc: u16, memory: &[u16]) -> Result<Operand, VmError> {
    if word < REGISTER_BASE {
        Ok(Operand::Literal(word))
    } else if word < REGISTER_LIMIT {
        Ok(Operand::Register((word - REGISTER_BASE) as u8))
    } else {
        Err(VmError::IllegalOperand(fault_context(pc, word, memory)))
    }
}

/// Decode a raw operand word as a register index only; any value outside
/// the register-reference range is an illegal operand.
pub fn decode_register(word: u16, pc: u16, memory: &[u16]) -> Result<u8, VmError> {
    match decode_operand(word, pc, memory)? {
        Operand::Register(r) => Ok(r),
        Operand::Literal(_) => Err(VmError::IllegalOperand(fault_context(pc, word, memory))),
    }
}

/// Resolve an already-decoded operand to its current value, reading the
/// register file when it names a register.
pub fn resolve(operand: Operand, regs: &[u16; NUM_REGISTERS]) -> u16 {
    match operand {
        Operand::Literal(v) => v,
        Operand::Register(r) => regs[r as usize],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mem() -> [u16; 4] {
        [0, 0, 0, 0]
    }

    #[test]
    fn literal_in_range() {
        let m = mem();
        assert_eq!(decode_operand(0, 0, &m).unwrap(), Operand::Literal(0));
        assert_eq!(
            decode_operand(32_767, 0, &m).unwrap(),
            Operand::Literal(32_767)
        );
    }

    #[test]
    fn register_references() {
        let m = mem();
        assert_eq!(
            decode_operand(32_768, 0, &m).unwrap(),
            Operand::Register(0)
        );
        assert_eq!(
            decode_operand(32_775, 0, &m).unwrap(),
            Operand::Register(7)
        );
    }

    #[test]
    fn illegal_operand_above_register_range() {
        let m = mem();
        assert!(matches!(
            decode_operand(32_776, 0, &m),
            Err(VmError::IllegalOperand(_))
        ));
    }

    #[test]
    fn register_only_decode_rejects_literals() {
        let m = mem();
        assert!(matches!(
            decode_register(5, 0, &m),
            Err(VmError::IllegalOperand(_))
        ));
    }

    #[test]
    fn resolve_reads_register_file() {
        let regs = [0, 1, 2, 3, 4, 5, 6, 7];
        assert_eq!(resolve(Operand::Literal(9), &regs), 9);
        assert_eq!(resolve(Operand::Register(3), &regs), 3);
    }
}
