//! Per-entry row construction.
//!
//! The [`Pipeline`] owns the compiled normalizers and turns one catalogue entry
//! into one [`OutputRow`]. Rows depend only on their own entry; nothing is
//! carried from one entry to the next.

use std::collections::HashMap;

use serde::Serialize;
use tracing::trace;

use crate::catalogue::{Descriptor, Entry};
use crate::error::{IndexError, Result};
use crate::normalize::{
    NameNormalizer, OpcodeNormalizer, StackSignatureParser, base_instruction, extract_immediates,
};

/// Column names of the artifact, in output order.
pub const HEADER: [&str; 5] = ["instruction", "immediates", "opcode", "input", "output"];

/// One row of the instruction index.
///
/// Field order matches [`HEADER`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OutputRow {
    /// Instruction family, e.g. `i32.load8`.
    pub instruction: String,
    /// Immediate descriptor, e.g. `s_memarg` or `x,y`.
    pub immediates: String,
    /// Space-separated opcode bytes, e.g. `FD 0C`.
    pub opcode: String,
    /// Consumed types.
    pub input: String,
    /// Produced types.
    pub output: String,
}

/// Compiled normalizers, built once per run.
#[derive(Debug)]
pub struct Pipeline {
    names: NameNormalizer,
    opcodes: OpcodeNormalizer,
    stacks: StackSignatureParser,
}

impl Pipeline {
    /// Compiles every normalizer.
    ///
    /// # Errors
    ///
    /// Fails only if a built-in rule pattern does not compile.
    pub fn new() -> Result<Self> {
        Ok(Self {
            names: NameNormalizer::new()?,
            opcodes: OpcodeNormalizer::new()?,
            stacks: StackSignatureParser::new()?,
        })
    }

    /// The mnemonic normalizer.
    pub const fn names(&self) -> &NameNormalizer {
        &self.names
    }

    /// The opcode normalizer.
    pub const fn opcodes(&self) -> &OpcodeNormalizer {
        &self.opcodes
    }

    /// The stack-effect parser.
    pub const fn stacks(&self) -> &StackSignatureParser {
        &self.stacks
    }

    /// Builds the row for an assigned instruction.
    pub fn row(&self, descriptor: &Descriptor) -> OutputRow {
        let name = self.names.normalize(descriptor.name);
        let signature = self.stacks.parse(descriptor.stack);
        let row = OutputRow {
            instruction: base_instruction(&name).to_owned(),
            immediates: extract_immediates(&name),
            opcode: self.opcodes.normalize(descriptor.opcode).into(),
            input: signature.inputs,
            output: signature.outputs,
        };
        trace!(?row, "row");
        row
    }

    /// Builds the row for a catalogue slot; reserved slots yield `None`.
    pub fn project(&self, entry: &Entry) -> Option<OutputRow> {
        entry.descriptor().map(|descriptor| self.row(descriptor))
    }

    /// Checks that no two catalogue slots canonicalize to the same opcode.
    ///
    /// Reserved slots take part: each opcode value has exactly one position.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::DuplicateOpcode`] for the first collision found.
    pub fn verify_unique_opcodes<'a>(
        &self,
        entries: impl IntoIterator<Item = &'a Entry>,
    ) -> Result<()> {
        let mut seen = HashMap::new();
        for (position, entry) in entries.into_iter().enumerate() {
            let opcode = self.opcodes.normalize(entry.opcode());
            if let Some(first) = seen.insert(opcode.clone(), position) {
                return Err(IndexError::DuplicateOpcode {
                    opcode: opcode.into(),
                    first,
                    second: position,
                });
            }
        }
        Ok(())
    }
}
