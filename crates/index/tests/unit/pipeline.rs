//! Pipeline Tests.
//!
//! End-to-end row construction for single entries, reserved-slot projection,
//! and the catalogue-wide opcode uniqueness check.

use std::collections::HashSet;

use pretty_assertions::assert_eq;
use wasm_index::catalogue;
use wasm_index::{IndexError, OutputRow};

use crate::common::{I32_ADD, I32_TRUNC_SAT_F32_S, defined, pipeline, reserved};

fn row(instruction: &str, immediates: &str, opcode: &str, input: &str, output: &str) -> OutputRow {
    OutputRow {
        instruction: instruction.to_owned(),
        immediates: immediates.to_owned(),
        opcode: opcode.to_owned(),
        input: input.to_owned(),
        output: output.to_owned(),
    }
}

#[test]
fn i32_add_row() {
    let projected = pipeline().project(&I32_ADD).unwrap();
    assert_eq!(projected, row("i32.add", "", "6A", "i32,i32", "i32"));
}

#[test]
fn saturating_truncation_row() {
    let projected = pipeline().project(&I32_TRUNC_SAT_F32_S).unwrap();
    assert_eq!(projected, row("i32.trunc", "sat.f32.s", "FC 00", "f32", "i32"));
    assert_eq!(projected.opcode.split(' ').count(), 2);
}

#[test]
fn structural_instruction_has_empty_signature() {
    let entry = defined(r"\ELSE", r"\hex{05}", None);
    assert_eq!(pipeline().project(&entry).unwrap(), row("else", "", "05", "", ""));
}

#[test]
fn memory_access_row_keeps_memarg_suffix() {
    let entry = defined(
        r"\I32.\LOAD\K{8\_s}~\memarg",
        r"\hex{2C}",
        Some(r"[\I32] \to [\I32]"),
    );
    assert_eq!(
        pipeline().project(&entry).unwrap(),
        row("i32.load8", "s_memarg", "2C", "i32", "i32")
    );
}

#[test]
fn row_composes_the_individual_stages() {
    let pipeline = pipeline();
    let entry = defined(
        r"\I16X8.\EXTMUL\K{\_high\_i8x16\_s}",
        r"\hex{FD}~~\hex{9D}~~\hex{01}",
        Some(r"[\V128~\V128] \to [\V128]"),
    );
    let descriptor = entry.descriptor().unwrap();

    let name = pipeline.names().normalize(descriptor.name);
    let opcode = pipeline.opcodes().normalize(descriptor.opcode);
    let signature = pipeline.stacks().parse(descriptor.stack);
    assert_eq!(name, "i16x8.extmul_high_i8x16_s");
    assert_eq!(opcode.as_str(), "FD 9D 01");
    assert!(opcode.is_prefixed());

    assert_eq!(
        pipeline.row(descriptor),
        row(
            "i16x8.extmul",
            "high.i8x16.s",
            opcode.as_str(),
            &signature.inputs,
            &signature.outputs,
        )
    );
    assert_eq!(signature.inputs, "v128,v128");
}

#[test]
fn reserved_slot_projects_to_nothing() {
    assert_eq!(pipeline().project(&reserved(r"\hex{06}")), None);
}

#[test]
fn catalogue_rows_are_well_formed() {
    let pipeline = pipeline();
    let rows: Vec<OutputRow> = catalogue::entries()
        .filter_map(|entry| pipeline.project(entry))
        .collect();
    assert_eq!(rows.len(), catalogue::defined_count());

    let mut opcodes = HashSet::new();
    for row in &rows {
        assert!(!row.instruction.is_empty());
        assert!(!row.instruction.contains(char::is_whitespace), "{row:?}");
        assert!(opcodes.insert(row.opcode.as_str()), "duplicate opcode {}", row.opcode);
    }
}

#[test]
fn catalogue_opcodes_are_unique() {
    pipeline()
        .verify_unique_opcodes(catalogue::entries())
        .unwrap();
}

#[test]
fn duplicate_opcodes_are_reported_with_positions() {
    let entries = [I32_ADD, reserved(r"\hex{06}"), reserved(r"\hex{0x6A}")];
    let err = pipeline().verify_unique_opcodes(&entries).unwrap_err();
    match err {
        IndexError::DuplicateOpcode {
            opcode,
            first,
            second,
        } => {
            assert_eq!(opcode, "6A");
            assert_eq!((first, second), (0, 2));
        }
        other => panic!("unexpected error: {other}"),
    }
}
