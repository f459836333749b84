//! Shared test fixtures.

use wasm_index::catalogue::{Descriptor, Entry};
use wasm_index::emit::{Summary, TableEmitter};
use wasm_index::pipeline::Pipeline;

/// Installs a test-writer subscriber once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}

/// A freshly compiled pipeline.
pub fn pipeline() -> Pipeline {
    Pipeline::new().unwrap()
}

/// An assigned entry.
pub const fn defined(
    name: &'static str,
    opcode: &'static str,
    stack: Option<&'static str>,
) -> Entry {
    Entry::Defined(Descriptor {
        name,
        opcode,
        stack,
    })
}

/// An unassigned slot.
pub const fn reserved(opcode: &'static str) -> Entry {
    Entry::Reserved { opcode }
}

/// `i32.add`, the canonical single-byte example.
pub const I32_ADD: Entry = defined(r"\I32.\ADD", r"\hex{6A}", Some(r"[\I32~\I32] \to [\I32]"));

/// `i32.trunc_sat_f32_s`, a `0xFC`-prefixed saturating truncation.
pub const I32_TRUNC_SAT_F32_S: Entry = defined(
    r"\I32.\TRUNC\K{\_sat\_}\F32\K{\_s}",
    r"\hex{FC}~\hex{00}",
    Some(r"[\F32] \to [\I32]"),
);

/// Runs one emission pass over `entries` into memory.
pub fn emit_to_string(entries: &[Entry]) -> (String, Summary) {
    let mut emitter = TableEmitter::new(Vec::new()).unwrap();
    let summary = emitter.emit(entries).unwrap();
    let bytes = emitter.into_inner().unwrap();
    (String::from_utf8(bytes).unwrap(), summary)
}
