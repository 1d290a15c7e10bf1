//! NOOP

use crate::error::VmResult;
use crate::state::VmState;

/// NOOP: does nothing.
pub fn handle_noop(_state: &mut VmState) -> VmResult<()> {
    Ok(())
}
