//! Mnemonic markup canonicalization.
//!
//! The catalogue writes mnemonics with escaped command tokens (`\I32`, `\LOAD`),
//! placeholder wrappers (`\X{bt}`), annotation wrappers (`\K{8\_s}`) and `~`
//! separators before operands. The canonical form is the plain lowercase text:
//! `\I32.\LOAD\K{8\_s}~\memarg` becomes `i32.load8_s_memarg`.
//!
//! Normalization is idempotent. Every rule below either needs a backslash, a
//! `~`, a caret, or an uppercase `X{`/`K{` to fire, and the output contains
//! none of those.

use crate::error::Result;
use crate::markup::{RuleSet, RuleSpec};

/// Mnemonic rewrite rules, in application order.
pub const NAME_RULES: &[RuleSpec] = &[
    // `\NOP` -> `NOP`; also turns `\X{` and `\K{` into `X{` and `K{`.
    RuleSpec::pattern("command", r"\\([A-Z][A-Z0-9]*)", "$1"),
    RuleSpec::pattern("placeholder", r"\\?X\{([^}]+)\}", "$1"),
    RuleSpec::pattern("annotation", r"\\?K\{([^}]+)\}", "$1"),
    // `\_` inside annotations and escaped operand names such as `\memarg`.
    RuleSpec::literal("escape", "\\", ""),
    RuleSpec::literal("separator", "~", "_"),
    RuleSpec::literal("repetition", "^ast", ""),
    RuleSpec::literal("caret", "^", ""),
    RuleSpec::lowercase("lowercase"),
];

/// Rewrites raw mnemonic markup into a canonical name.
#[derive(Debug)]
pub struct NameNormalizer {
    rules: RuleSet,
}

impl NameNormalizer {
    /// Compiles [`NAME_RULES`].
    ///
    /// # Errors
    ///
    /// Fails only if a rule pattern does not compile.
    pub fn new() -> Result<Self> {
        Ok(Self {
            rules: RuleSet::compile(NAME_RULES)?,
        })
    }

    /// Canonicalizes mnemonic markup.
    pub fn normalize(&self, markup: &str) -> String {
        self.rules.apply(markup)
    }
}
