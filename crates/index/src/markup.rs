//! Declarative text-rewrite rules.
//!
//! Every normalization stage is an ordered table of [`RuleSpec`] values compiled
//! once into a [`RuleSet`]. Rules run strictly in declaration order and each
//! sees the output of the previous one, so reordering a table changes results.

use std::borrow::Cow;

use regex::Regex;
use tracing::trace;

use crate::error::{IndexError, Result};

/// How a single rule rewrites its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rewrite {
    /// Replace every match of a regex. The replacement may use `$1`-style groups.
    Pattern {
        /// Regex source.
        pattern: &'static str,
        /// Replacement template.
        replacement: &'static str,
    },
    /// Replace every occurrence of a literal substring, left to right.
    Literal {
        /// Text to find.
        from: &'static str,
        /// Text to substitute.
        to: &'static str,
    },
    /// Lowercase the whole string.
    Lowercase,
}

/// A named, uncompiled rewrite rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleSpec {
    /// Short name used in diagnostics.
    pub name: &'static str,
    /// The rewrite this rule performs.
    pub rewrite: Rewrite,
}

impl RuleSpec {
    /// A regex rule.
    pub const fn pattern(
        name: &'static str,
        pattern: &'static str,
        replacement: &'static str,
    ) -> Self {
        Self {
            name,
            rewrite: Rewrite::Pattern {
                pattern,
                replacement,
            },
        }
    }

    /// A literal substitution rule.
    pub const fn literal(name: &'static str, from: &'static str, to: &'static str) -> Self {
        Self {
            name,
            rewrite: Rewrite::Literal { from, to },
        }
    }

    /// A lowercasing rule.
    pub const fn lowercase(name: &'static str) -> Self {
        Self {
            name,
            rewrite: Rewrite::Lowercase,
        }
    }
}

#[derive(Debug)]
enum Compiled {
    Pattern(Regex, &'static str),
    Literal(&'static str, &'static str),
    Lowercase,
}

#[derive(Debug)]
struct Rule {
    name: &'static str,
    compiled: Compiled,
}

impl Rule {
    fn apply<'a>(&self, input: &'a str) -> Cow<'a, str> {
        match &self.compiled {
            Compiled::Pattern(regex, replacement) => regex.replace_all(input, *replacement),
            Compiled::Literal(from, to) => {
                if input.contains(from) {
                    Cow::Owned(input.replace(from, to))
                } else {
                    Cow::Borrowed(input)
                }
            }
            Compiled::Lowercase => Cow::Owned(input.to_lowercase()),
        }
    }
}

/// An ordered, compiled list of rewrite rules.
#[derive(Debug)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Compiles `specs` in order.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::Pattern`] naming the first rule whose regex does not compile.
    pub fn compile(specs: &[RuleSpec]) -> Result<Self> {
        let rules = specs
            .iter()
            .map(|spec| -> Result<Rule> {
                let compiled = match spec.rewrite {
                    Rewrite::Pattern {
                        pattern,
                        replacement,
                    } => Compiled::Pattern(
                        Regex::new(pattern).map_err(|source| IndexError::Pattern {
                            rule: spec.name,
                            source,
                        })?,
                        replacement,
                    ),
                    Rewrite::Literal { from, to } => Compiled::Literal(from, to),
                    Rewrite::Lowercase => Compiled::Lowercase,
                };
                Ok(Rule {
                    name: spec.name,
                    compiled,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rules })
    }

    /// Runs every rule over `input`, in order.
    pub fn apply(&self, input: &str) -> String {
        let mut text = input.to_owned();
        for rule in &self.rules {
            let rewritten = match rule.apply(&text) {
                Cow::Borrowed(_) => continue,
                Cow::Owned(rewritten) => rewritten,
            };
            if rewritten != text {
                trace!(rule = rule.name, before = %text, after = %rewritten, "rewrite");
            }
            text = rewritten;
        }
        text
    }

    /// Number of rules in the set.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if the set has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
