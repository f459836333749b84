//! WebAssembly instruction index generator.
//!
//! This crate turns the hand-authored WebAssembly instruction catalogue into a
//! canonical CSV table with the following:
//! 1. **Catalogue:** The fixed instruction index, reserved slots included, as static data.
//! 2. **Markup:** An ordered, declarative rewrite-rule engine.
//! 3. **Normalize:** Opcode, stack-effect, mnemonic, and immediate canonicalization.
//! 4. **Pipeline:** Per-entry row construction and the opcode uniqueness check.
//! 5. **Emit:** The single-pass CSV emitter and the `generate` entry point.
//!
//! ```
//! use wasm_index::{TableEmitter, catalogue};
//!
//! let mut emitter = TableEmitter::new(Vec::new()).unwrap();
//! let summary = emitter.emit(catalogue::entries()).unwrap();
//! let csv = String::from_utf8(emitter.into_inner().unwrap()).unwrap();
//! assert!(csv.starts_with("instruction,immediates,opcode,input,output\r\n"));
//! assert_eq!(summary.rows, catalogue::defined_count());
//! ```

/// The fixed instruction catalogue.
pub mod catalogue;
/// Sink configuration.
pub mod config;
/// Table emission and artifact generation.
pub mod emit;
/// Error types.
pub mod error;
/// Declarative rewrite rules.
pub mod markup;
/// Markup normalization stages.
pub mod normalize;
/// Per-entry row construction.
pub mod pipeline;

/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// Single-pass CSV emitter and the one-call artifact generator.
pub use crate::emit::{Summary, TableEmitter, generate};
/// Crate error and result types.
pub use crate::error::{IndexError, Result};
/// Row builder and row type.
pub use crate::pipeline::{OutputRow, Pipeline};
