//! The WebAssembly instruction catalogue.
//!
//! This module holds the fixed, hand-authored instruction index as inert data. It provides:
//! 1. **Entries:** One [`Entry`] per opcode position, either reserved or defined.
//! 2. **Descriptors:** Raw mnemonic, opcode, and stack-effect markup for defined entries.
//! 3. **Ordering:** Single-byte opcodes first, then the `0xFC` and `0xFD` prefixed groups.
//!
//! The markup is kept exactly as authored; all canonicalization happens in
//! [`crate::normalize`].

mod misc;
mod single_byte;
mod vector;

/// Raw markup for an assigned opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Descriptor {
    /// Mnemonic markup, e.g. `\I32.\LOAD\K{8\_s}~\memarg`.
    pub name: &'static str,
    /// Opcode markup, e.g. `\hex{FD}~~\hex{0C}`.
    pub opcode: &'static str,
    /// Stack-effect markup, e.g. `[\I32~\I32] \to [\I32]`.
    ///
    /// `None` for structural instructions such as `else` and `end`.
    pub stack: Option<&'static str>,
}

/// A single position in the opcode space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry {
    /// A byte value with no instruction assigned to it.
    Reserved {
        /// Opcode markup of the unassigned slot.
        opcode: &'static str,
    },
    /// An assigned instruction.
    Defined(Descriptor),
}

impl Entry {
    /// Opcode markup of this slot, assigned or not.
    pub const fn opcode(&self) -> &'static str {
        match self {
            Self::Reserved { opcode } => *opcode,
            Self::Defined(descriptor) => descriptor.opcode,
        }
    }

    /// Returns the descriptor for an assigned slot.
    pub const fn descriptor(&self) -> Option<&Descriptor> {
        match self {
            Self::Reserved { .. } => None,
            Self::Defined(descriptor) => Some(descriptor),
        }
    }

    /// Returns `true` if no instruction occupies this slot.
    pub const fn is_reserved(&self) -> bool {
        matches!(self, Self::Reserved { .. })
    }
}

/// Instruction with a stack effect.
const fn instr(name: &'static str, opcode: &'static str, stack: &'static str) -> Entry {
    Entry::Defined(Descriptor {
        name,
        opcode,
        stack: Some(stack),
    })
}

/// Instruction without a stack effect (block delimiters).
const fn structural(name: &'static str, opcode: &'static str) -> Entry {
    Entry::Defined(Descriptor {
        name,
        opcode,
        stack: None,
    })
}

const fn reserved(opcode: &'static str) -> Entry {
    Entry::Reserved { opcode }
}

/// Iterates the whole catalogue in encoding order.
pub fn entries() -> impl Iterator<Item = &'static Entry> {
    single_byte::SINGLE_BYTE
        .iter()
        .chain(misc::MISC)
        .chain(vector::VECTOR)
}

/// Number of assigned instructions in the catalogue.
pub fn defined_count() -> usize {
    entries().filter(|entry| !entry.is_reserved()).count()
}

/// Number of unassigned opcode slots in the catalogue.
pub fn reserved_count() -> usize {
    entries().filter(|entry| entry.is_reserved()).count()
}
