//! Stack-effect markup parsing.
//!
//! A stack effect is written `[<inputs>] \to [<outputs>]`. Each side is rewritten
//! independently into a comma-separated list of lowercase type tokens, where a
//! `[]` suffix marks "zero or more of this type".

use regex::Regex;
use tracing::debug;

use crate::error::{IndexError, Result};
use crate::markup::{RuleSet, RuleSpec};

/// Grammar of a stack effect. Anchored at the start; trailing text is ignored.
pub const STACK_EFFECT_PATTERN: &str = r"^\[(.*?)\] \\to \[(.*?)\]";

/// Rewrite rules applied to each side of a stack effect, in order.
pub const STACK_SIDE_RULES: &[RuleSpec] = &[
    RuleSpec::pattern("type-command", r"\\([A-Z][A-Z0-9]+)", "$1"),
    RuleSpec::literal("repetition", r"^\ast", "[]"),
    RuleSpec::literal("separator", "~", ","),
    RuleSpec::pattern("subscript", r"_[0-9]", ""),
    RuleSpec::literal("caret", "^", ""),
    RuleSpec::lowercase("lowercase"),
];

/// Ordered input and output type lists of an instruction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StackSignature {
    /// Consumed types, comma separated, bottom of stack first.
    pub inputs: String,
    /// Produced types, comma separated.
    pub outputs: String,
}

impl StackSignature {
    /// The signature of an instruction with no stack effect.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns `true` if neither side lists a type.
    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty() && self.outputs.is_empty()
    }
}

/// Parses stack-effect markup into a [`StackSignature`].
#[derive(Debug)]
pub struct StackSignatureParser {
    grammar: Regex,
    side: RuleSet,
}

impl StackSignatureParser {
    /// Compiles the grammar and [`STACK_SIDE_RULES`].
    ///
    /// # Errors
    ///
    /// Fails only if a pattern does not compile.
    pub fn new() -> Result<Self> {
        let grammar = Regex::new(STACK_EFFECT_PATTERN).map_err(|source| IndexError::Pattern {
            rule: "stack-effect",
            source,
        })?;
        Ok(Self {
            grammar,
            side: RuleSet::compile(STACK_SIDE_RULES)?,
        })
    }

    /// Parses optional stack-effect markup.
    ///
    /// Absent or non-matching markup yields an empty signature.
    pub fn parse(&self, markup: Option<&str>) -> StackSignature {
        let Some(markup) = markup else {
            return StackSignature::empty();
        };
        let Some(captures) = self.grammar.captures(markup) else {
            debug!(markup, "stack effect does not match grammar; treating as empty");
            return StackSignature::empty();
        };
        let side = |index| captures.get(index).map_or("", |m| m.as_str());
        StackSignature {
            inputs: self.side.apply(side(1)),
            outputs: self.side.apply(side(2)),
        }
    }
}
