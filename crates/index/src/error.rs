//! Error types for index generation.
//!
//! The normalizers themselves never fail: reserved slots are skipped, malformed
//! stack effects become empty signatures, and unknown markup passes through.
//! What remains are failures of the surrounding machinery:
//! 1. **Sink:** I/O and CSV serialization errors while writing the artifact.
//! 2. **Rules:** A rewrite pattern that does not compile.
//! 3. **Catalogue:** Two slots that canonicalize to the same opcode.
//! 4. **Configuration:** Malformed JSON configuration.

use thiserror::Error;

/// Errors raised while building or writing the instruction index.
#[derive(Debug, Error)]
pub enum IndexError {
    /// Reading or writing the artifact failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV writer rejected a record.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// A rewrite rule pattern failed to compile.
    #[error("invalid pattern in rule `{rule}`: {source}")]
    Pattern {
        /// Name of the offending rule.
        rule: &'static str,
        /// Underlying regex error.
        source: regex::Error,
    },

    /// The configuration document could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// Two catalogue positions share a canonical opcode.
    #[error("opcode `{opcode}` appears at catalogue positions {first} and {second}")]
    DuplicateOpcode {
        /// The canonical opcode text.
        opcode: String,
        /// Position of the first occurrence.
        first: usize,
        /// Position of the colliding occurrence.
        second: usize,
    },

    /// The emitter has already completed its single pass.
    #[error("table already emitted")]
    AlreadyEmitted,
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, IndexError>;
