//! # Unit Components
//!
//! Tests grouped by the component they exercise.

/// Catalogue shape and ordering.
pub mod catalogue;

/// Sink configuration parsing and defaults.
pub mod config;

/// Single-pass emission, CSV quoting, and the golden artifact.
pub mod emit;

/// Opcode, stack-effect, mnemonic, and immediate normalization.
pub mod normalize;

/// Row construction and the opcode uniqueness check.
pub mod pipeline;
