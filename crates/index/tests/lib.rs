//! # Instruction Index Testing Library
//!
//! Central entry point for the index test suite. Unit tests exercise each
//! normalization stage in isolation; the emitter tests drive whole passes and
//! compare the full artifact against a checked-in golden copy.

/// Shared fixtures: compiled pipeline, hand-built entries, in-memory emission.
pub mod common;

/// Unit tests for the index components.
pub mod unit;
