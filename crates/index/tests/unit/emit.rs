//! Table Emitter Tests.
//!
//! Drives whole emission passes: header placement, reserved-slot skipping,
//! CSV quoting, the single-pass state machine, and byte-for-byte agreement of
//! the full catalogue with the golden artifact.

use std::fs;

use pretty_assertions::assert_eq;
use wasm_index::catalogue;
use wasm_index::config::{Config, LineEnding};
use wasm_index::emit::{EmitterState, Summary, TableEmitter, generate};
use wasm_index::IndexError;

use crate::common::{
    I32_ADD, I32_TRUNC_SAT_F32_S, defined, emit_to_string, init_tracing, reserved,
};

const GOLDEN: &str = include_str!("../golden/index.csv");
const HEADER: &str = "instruction,immediates,opcode,input,output\r\n";

#[test]
fn empty_catalogue_writes_only_the_header() {
    let (csv, summary) = emit_to_string(&[]);
    assert_eq!(csv, HEADER);
    assert_eq!(summary, Summary::default());
}

#[test]
fn reserved_slots_are_skipped_in_order() {
    init_tracing();
    let entries = [
        reserved(r"\hex{06}"),
        I32_ADD,
        reserved(r"\hex{07}"),
        defined(r"\END", r"\hex{0B}", None),
    ];
    let (csv, summary) = emit_to_string(&entries);
    assert_eq!(csv, format!("{HEADER}i32.add,,6A,\"i32,i32\",i32\r\nend,,0B,,\r\n"));
    assert_eq!(summary, Summary { rows: 2, reserved: 2 });
}

#[test]
fn multi_byte_row_is_not_quoted() {
    let (csv, _) = emit_to_string(&[I32_TRUNC_SAT_F32_S]);
    assert_eq!(csv, format!("{HEADER}i32.trunc,sat.f32.s,FC 00,f32,i32\r\n"));
}

#[test]
fn comma_joined_immediates_are_quoted() {
    let entry = defined(
        r"\CALLINDIRECT~x~y",
        r"\hex{11}",
        Some(r"[t_1^\ast~\I32] \to [t_2^\ast]"),
    );
    let (csv, _) = emit_to_string(&[entry]);
    assert_eq!(csv, format!("{HEADER}callindirect,\"x,y\",11,\"t[],i32\",t[]\r\n"));
}

#[test]
fn state_advances_once_and_second_pass_fails() {
    let mut emitter = TableEmitter::new(Vec::new()).unwrap();
    assert_eq!(emitter.state(), EmitterState::NotStarted);

    let summary = emitter.emit(&[I32_ADD]).unwrap();
    assert_eq!(summary.rows, 1);
    assert_eq!(emitter.state(), EmitterState::Done);

    assert!(matches!(emitter.emit(&[I32_ADD]), Err(IndexError::AlreadyEmitted)));
    let csv = String::from_utf8(emitter.into_inner().unwrap()).unwrap();
    assert_eq!(csv.lines().count(), 2);
}

#[test]
fn lf_is_available_on_request() {
    let mut emitter = TableEmitter::with_line_ending(Vec::new(), LineEnding::Lf).unwrap();
    let _ = emitter.emit(&[I32_ADD]).unwrap();
    let csv = String::from_utf8(emitter.into_inner().unwrap()).unwrap();
    assert_eq!(
        csv,
        "instruction,immediates,opcode,input,output\ni32.add,,6A,\"i32,i32\",i32\n"
    );
}

#[test]
fn full_catalogue_matches_golden() {
    let entries: Vec<_> = catalogue::entries().copied().collect();
    let (csv, summary) = emit_to_string(&entries);
    assert_eq!(csv, GOLDEN);
    assert_eq!(summary.rows, catalogue::defined_count());
    assert_eq!(summary.reserved, catalogue::reserved_count());
    assert_eq!(GOLDEN.lines().count(), summary.rows + 1);
}

#[test]
fn generate_writes_the_artifact_to_disk() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let mut config = Config::default();
    config.output.path = dir.path().join("index.csv");

    let summary = generate(&config).unwrap();
    assert_eq!(summary, Summary { rows: 437, reserved: 69 });
    let written = fs::read_to_string(&config.output.path).unwrap();
    assert_eq!(written, GOLDEN);
    assert_eq!(written.matches("\r\n").count(), summary.rows + 1);
}

#[test]
fn generate_honours_lf_configuration() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = Config::from_json(r#"{"output": {"line_ending": "lf"}}"#).unwrap();
    config.output.path = dir.path().join("index.csv");

    let _ = generate(&config).unwrap();
    let written = fs::read_to_string(&config.output.path).unwrap();
    assert!(!written.contains('\r'));
    assert_eq!(written, GOLDEN.replace("\r\n", "\n"));
}

#[test]
fn generate_overwrites_a_previous_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = Config::default();
    config.output.path = dir.path().join("index.csv");
    fs::write(&config.output.path, "stale contents that are longer than nothing\n").unwrap();

    let _ = wasm_index::generate(&config).unwrap();
    assert_eq!(fs::read_to_string(&config.output.path).unwrap(), GOLDEN);
}

#[test]
fn generate_reports_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = Config::default();
    config.output.path = dir.path().join("missing").join("index.csv");
    assert!(matches!(generate(&config), Err(IndexError::Io(_))));
}
