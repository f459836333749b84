//! Opcode markup canonicalization.
//!
//! `\hex{FD}~~\hex{84}~~\hex{01}` becomes `FD 84 01`.

use std::fmt;

use crate::error::Result;
use crate::markup::{RuleSet, RuleSpec};

/// Opcode rewrite rules, in application order.
///
/// The double separator must run before the single one, otherwise `~~` would
/// become two spaces.
pub const OPCODE_RULES: &[RuleSpec] = &[
    RuleSpec::pattern("hex-literal", r"\\hex\{(0x)?([0-9A-F]+)\}", "$2"),
    RuleSpec::literal("double-separator", "~~", " "),
    RuleSpec::literal("separator", "~", " "),
];

/// A canonical opcode: uppercase hex byte tokens joined by single spaces.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalOpcode(String);

impl CanonicalOpcode {
    /// The byte tokens, prefix first.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.0.split(' ')
    }

    /// Returns the rendered form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` for prefixed (multi-byte) encodings.
    pub fn is_prefixed(&self) -> bool {
        self.0.contains(' ')
    }
}

impl fmt::Display for CanonicalOpcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<CanonicalOpcode> for String {
    fn from(opcode: CanonicalOpcode) -> Self {
        opcode.0
    }
}

/// Strips the hex-literal wrapper and joins byte groups with one space.
///
/// Digits are not validated; anything outside the known markup passes through.
#[derive(Debug)]
pub struct OpcodeNormalizer {
    rules: RuleSet,
}

impl OpcodeNormalizer {
    /// Compiles [`OPCODE_RULES`].
    ///
    /// # Errors
    ///
    /// Fails only if a rule pattern does not compile.
    pub fn new() -> Result<Self> {
        Ok(Self {
            rules: RuleSet::compile(OPCODE_RULES)?,
        })
    }

    /// Canonicalizes opcode markup.
    pub fn normalize(&self, markup: &str) -> CanonicalOpcode {
        CanonicalOpcode(self.rules.apply(markup))
    }
}
