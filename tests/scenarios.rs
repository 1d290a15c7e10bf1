//! End-to-end scenarios run against small hand-assembled programs.

use vm15::console::{BufferedInput, BufferedOutput};
use vm15::{engine, program, snapshot, VmState};

fn load(words: &[u16]) -> VmState {
    let mut bytes = Vec::with_capacity(words.len() * 2);
    for &w in words {
        bytes.extend_from_slice(&w.to_le_bytes());
    }
    program::decode(&bytes, std::path::Path::new("scenario.bin")).unwrap()
}

fn run(state: &mut VmState) -> String {
    let mut out = BufferedOutput::default();
    let mut input = BufferedInput::default();
    engine::run(state, &mut out, &mut input).unwrap();
    out.as_str().into_owned()
}

#[test]
fn minimal_output() {
    let mut state = load(&[19, 65, 19, 66, 0]);
    assert_eq!(run(&mut state), "AB");
    assert!(state.halted);
}

#[test]
fn register_arithmetic() {
    let mut state = load(&[
        1, 32768, 3, 1, 32769, 4, 9, 32770, 32768, 32769, 19, 32770, 0,
    ]);
    assert_eq!(run(&mut state), "\u{7}");
    assert_eq!(state.get_reg(0), 3);
    assert_eq!(state.get_reg(1), 4);
    assert_eq!(state.get_reg(2), 7);
}

#[test]
fn overflow_wraps_modulo_32768() {
    let mut state = load(&[9, 32768, 32767, 1, 0]);
    run(&mut state);
    assert_eq!(state.get_reg(0), 0);
}

#[test]
fn jump_if_zero() {
    let mut state = load(&[8, 0, 6, 19, 88, 0, 19, 89, 0]);
    assert_eq!(run(&mut state), "Y");
}

#[test]
fn subroutine_linkage() {
    let mut state = load(&[17, 4, 0, 0, 19, 90, 18]);
    assert_eq!(run(&mut state), "Z");
    assert_eq!(state.pc, 3);
}

#[test]
fn snapshot_round_trip_resumes_identically() {
    let words = [
        1, 32768, 3, 1, 32769, 4, 9, 32770, 32768, 32769, 19, 32770, 0,
    ];

    let mut direct = load(&words);
    let direct_output = run(&mut direct);

    let mut partial = load(&words);
    let mut out1 = BufferedOutput::default();
    let mut in1 = BufferedInput::default();
    engine::run_one(&mut partial, &mut out1, &mut in1).unwrap();

    let bytes = snapshot::encode(&partial);
    let mut resumed = snapshot::decode(&bytes, std::path::Path::new("mid.snap")).unwrap();

    let mut out2 = BufferedOutput::default();
    let mut in2 = BufferedInput::default();
    engine::run(&mut resumed, &mut out2, &mut in2).unwrap();

    let mut combined = out1.bytes.clone();
    combined.extend_from_slice(&out2.bytes);
    assert_eq!(String::from_utf8(combined).unwrap(), direct_output);
    assert_eq!(resumed.get_reg(2), direct.get_reg(2));
}
