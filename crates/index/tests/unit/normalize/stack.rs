//! Stack Signature Parser Tests.
//!
//! Covers type-command unwrapping, the `[]` repetition suffix, subscripts, and
//! the permissive handling of absent or malformed stack effects.

use rstest::rstest;
use wasm_index::normalize::{StackSignature, StackSignatureParser};

fn parse(markup: Option<&str>) -> StackSignature {
    StackSignatureParser::new().unwrap().parse(markup)
}

#[rstest]
#[case::binop(r"[\I32~\I32] \to [\I32]", "i32,i32", "i32")]
#[case::nullary(r"[] \to []", "", "")]
#[case::repetition(r"[t_1^\ast~\I32] \to [t_2^\ast]", "t[],i32", "t[]")]
#[case::polymorphic(r"[t~t~\I32] \to [t]", "t,t,i32", "t")]
#[case::reference(r"[] \to [\FUNCREF]", "", "funcref")]
#[case::vector(r"[\V128~\I32] \to [\V128]", "v128,i32", "v128")]
#[case::store(r"[\I32~\I64] \to []", "i32,i64", "")]
fn parses_both_sides(#[case] markup: &str, #[case] input: &str, #[case] output: &str) {
    let signature = parse(Some(markup));
    assert_eq!(signature.inputs, input);
    assert_eq!(signature.outputs, output);
}

#[test]
fn absent_stack_effect_is_empty() {
    let signature = parse(None);
    assert!(signature.is_empty());
    assert_eq!(signature, StackSignature::empty());
}

#[rstest]
#[case::arrow("I32 -> I32")]
#[case::missing_to(r"[\I32] [\I32]")]
#[case::unbracketed(r"\I32 \to \I32")]
#[case::leading_text(r"x [\I32] \to [\I32]")]
fn malformed_stack_effect_is_empty(#[case] markup: &str) {
    assert!(parse(Some(markup)).is_empty());
}

#[test]
fn trailing_text_after_grammar_is_ignored() {
    let signature = parse(Some(r"[\I32] \to [\I64] (extra)"));
    assert_eq!(signature.inputs, "i32");
    assert_eq!(signature.outputs, "i64");
}

#[test]
fn subscripts_only_strip_single_digits() {
    let signature = parse(Some(r"[t_1~t_2] \to [t_12]"));
    assert_eq!(signature.inputs, "t,t");
    assert_eq!(signature.outputs, "t2");
}
