//! Splitting a canonical name into instruction family and immediates.
//!
//! Everything before the first underscore is the instruction; everything after
//! it describes the immediate operands. The immediate suffix is regrouped by the
//! first matching entry of [`IMMEDIATE_RULES`].
//!
//! The rules are fitted to the mnemonics in the current catalogue rather than
//! derived from a grammar. A future suffix that merely contains `low_` or
//! `sat_` by accident will be dotted like the conversion qualifiers.

/// How the underscores of an immediate suffix are rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Regroup {
    /// Every underscore becomes a dot: `sat_f32_s` -> `sat.f32.s`.
    Dotted,
    /// The single underscore becomes a comma: `x_y` -> `x,y`.
    Listed,
}

/// One entry of the immediate priority chain.
#[derive(Debug, Clone, Copy)]
pub struct ImmediateRule {
    /// Short name used in diagnostics.
    pub name: &'static str,
    /// Predicate over the suffix after the first underscore.
    pub matches: fn(&str) -> bool,
    /// Rewrite applied when the predicate holds.
    pub regroup: Regroup,
}

/// Immediate regrouping rules, highest priority first. A suffix matching none
/// of them is returned unchanged (`8_s`, `s_memarg`, `i32_u`).
pub const IMMEDIATE_RULES: &[ImmediateRule] = &[
    ImmediateRule {
        name: "saturating",
        matches: |suffix| suffix.contains("sat_"),
        regroup: Regroup::Dotted,
    },
    ImmediateRule {
        name: "half",
        matches: |suffix| suffix.contains("high_") || suffix.contains("low_"),
        regroup: Regroup::Dotted,
    },
    ImmediateRule {
        name: "operand-pair",
        matches: is_operand_pair,
        regroup: Regroup::Listed,
    },
];

/// Two single-letter operand variables, as in `x_y` or `l_l`. Width and
/// signedness pairs such as `8_s` are not operand variables.
fn is_operand_pair(suffix: &str) -> bool {
    let parts: Vec<&str> = suffix.split('_').collect();
    parts.len() == 2
        && parts.iter().all(|part| {
            let mut chars = part.chars();
            matches!((chars.next(), chars.next()), (Some(c), None) if c.is_ascii_alphabetic())
        })
}

/// Returns the instruction family: the name up to its first underscore.
pub fn base_instruction(name: &str) -> &str {
    name.split_once('_').map_or(name, |(base, _)| base)
}

/// Returns the immediate descriptor of a canonical name, or `""` when the name
/// has no underscore.
pub fn extract_immediates(name: &str) -> String {
    let Some((_, suffix)) = name.split_once('_') else {
        return String::new();
    };
    match IMMEDIATE_RULES.iter().find(|rule| (rule.matches)(suffix)) {
        Some(rule) => match rule.regroup {
            Regroup::Dotted => suffix.replace('_', "."),
            Regroup::Listed => suffix.replace('_', ","),
        },
        None => suffix.to_owned(),
    }
}
