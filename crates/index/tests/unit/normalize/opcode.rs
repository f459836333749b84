//! Opcode Normalizer Tests.
//!
//! Verifies wrapper stripping, radix-prefix removal, and that one or two
//! separators between byte groups both render as a single space.

use rstest::rstest;
use wasm_index::normalize::OpcodeNormalizer;

#[rstest]
#[case::single_byte(r"\hex{6A}", "6A")]
#[case::radix_prefix(r"\hex{0x6A}", "6A")]
#[case::single_separator(r"\hex{FC}~\hex{00}", "FC 00")]
#[case::double_separator(r"\hex{FD}~~\hex{0C}", "FD 0C")]
#[case::three_groups(r"\hex{FD}~~\hex{84}~~\hex{01}", "FD 84 01")]
fn normalizes_known_markup(#[case] markup: &str, #[case] expected: &str) {
    let normalizer = OpcodeNormalizer::new().unwrap();
    assert_eq!(normalizer.normalize(markup).as_str(), expected);
}

#[test]
fn separator_count_does_not_change_rendering() {
    let normalizer = OpcodeNormalizer::new().unwrap();
    assert_eq!(
        normalizer.normalize(r"\hex{FD}~\hex{0C}"),
        normalizer.normalize(r"\hex{FD}~~\hex{0C}")
    );
}

#[test]
fn unrecognized_tokens_pass_through() {
    let normalizer = OpcodeNormalizer::new().unwrap();
    // Lowercase digits are outside the wrapper grammar and are not validated.
    assert_eq!(normalizer.normalize(r"\hex{6a}").as_str(), r"\hex{6a}");
    assert_eq!(normalizer.normalize("FF").as_str(), "FF");
}

#[test]
fn tokens_split_prefix_and_sub_opcode() {
    let normalizer = OpcodeNormalizer::new().unwrap();
    let opcode = normalizer.normalize(r"\hex{FD}~~\hex{84}~~\hex{01}");
    assert!(opcode.is_prefixed());
    assert_eq!(opcode.tokens().collect::<Vec<_>>(), ["FD", "84", "01"]);
    assert_eq!(opcode.to_string(), "FD 84 01");

    let single = normalizer.normalize(r"\hex{0B}");
    assert!(!single.is_prefixed());
    assert_eq!(single.tokens().count(), 1);
}
