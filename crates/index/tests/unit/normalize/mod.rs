//! # Normalization Stage Tests

/// Immediate extraction and instruction family resolution.
pub mod immediate;

/// Mnemonic canonicalization, including idempotence properties.
pub mod name;

/// Opcode canonicalization.
pub mod opcode;

/// Stack-effect parsing.
pub mod stack;
