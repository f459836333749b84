//! Markup normalization stages.
//!
//! Each stage turns one raw catalogue field into its canonical text:
//!
//! * `opcode`: `\hex{FC}~\hex{00}` -> `FC 00`.
//! * `stack`: `[\I32~\I32] \to [\I32]` -> (`i32,i32`, `i32`).
//! * `name`: `\I32.\ADD` -> `i32.add`.
//! * `immediate`: `i32.load8_s_memarg` -> family `i32.load8`, immediates `s_memarg`.
//!
//! The regex-driven stages publish their rule tables as constants so the order
//! of rewrites can be read in one place.

/// Instruction family and immediate descriptor extraction.
pub mod immediate;

/// Mnemonic canonicalization.
pub mod name;

/// Opcode canonicalization.
pub mod opcode;

/// Stack-effect parsing.
pub mod stack;

pub use immediate::{base_instruction, extract_immediates};
pub use name::NameNormalizer;
pub use opcode::{CanonicalOpcode, OpcodeNormalizer};
pub use stack::{StackSignature, StackSignatureParser};
