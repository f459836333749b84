//! Name Normalizer Tests.
//!
//! Verifies command, placeholder, and annotation unwrapping, separator
//! conversion, and that normalization is idempotent both over the real
//! catalogue and over arbitrary markup.

use proptest::prelude::*;
use rstest::rstest;
use wasm_index::catalogue;
use wasm_index::normalize::NameNormalizer;

fn normalizer() -> NameNormalizer {
    NameNormalizer::new().unwrap()
}

#[rstest]
#[case::plain(r"\NOP", "nop")]
#[case::typed(r"\I32.\ADD", "i32.add")]
#[case::placeholder(r"\BLOCK~\X{bt}", "block_bt")]
#[case::bare_operand(r"\CALL~x", "call_x")]
#[case::operand_pair(r"\CALLINDIRECT~x~y", "callindirect_x_y")]
#[case::repeated_operand(r"\BRTABLE~l^\ast~l", "brtable_l_l")]
#[case::width_annotation(r"\I32.\LOAD\K{8\_s}~\memarg", "i32.load8_s_memarg")]
#[case::signedness(r"\I32.\GT\K{\_s}", "i32.gt_s")]
#[case::conversion(r"\F32.\CONVERT\K{\_}\I32\K{\_s}", "f32.convert_i32_s")]
#[case::saturating(r"\I32.\TRUNC\K{\_sat\_}\F32\K{\_s}", "i32.trunc_sat_f32_s")]
#[case::lane_store(r"\V128.\STORE\K{64\_lane}~\memarg~\laneidx", "v128.store64_lane_memarg_laneidx")]
#[case::lane_list(r"\I8X16.\SHUFFLE~\laneidx^{16}", "i8x16.shuffle_laneidx{16}")]
#[case::vector_half(r"\I16X8.\EXTMUL\K{\_high\_i8x16\_s}", "i16x8.extmul_high_i8x16_s")]
#[case::immediate_type(r"\I64.\CONST~\i64", "i64.const_i64")]
fn normalizes_catalogue_markup(#[case] markup: &str, #[case] expected: &str) {
    assert_eq!(normalizer().normalize(markup), expected);
}

#[test]
fn canonical_names_are_fixed_points() {
    let names = normalizer();
    for descriptor in catalogue::entries().filter_map(|e| e.descriptor()) {
        let once = names.normalize(descriptor.name);
        assert_eq!(names.normalize(&once), once, "not idempotent for {}", descriptor.name);
    }
}

#[test]
fn canonical_names_have_no_whitespace_or_markup() {
    let names = normalizer();
    for descriptor in catalogue::entries().filter_map(|e| e.descriptor()) {
        let name = names.normalize(descriptor.name);
        assert!(!name.is_empty());
        assert!(
            !name.contains(|c: char| c.is_whitespace() || matches!(c, '\\' | '~' | '^')),
            "leftover markup in {name:?}"
        );
        assert_eq!(name, name.to_lowercase());
    }
}

proptest! {
    #[test]
    fn normalization_is_idempotent(markup in r"[A-Za-z0-9\\~{}_^. ]{0,40}") {
        let names = normalizer();
        let once = names.normalize(&markup);
        prop_assert_eq!(names.normalize(&once), once);
    }

    #[test]
    fn escaped_commands_lowercase_to_bare_text(command in "[A-Z][A-Z0-9]{0,8}") {
        let names = normalizer();
        prop_assert_eq!(names.normalize(&format!(r"\{command}")), command.to_lowercase());
    }
}
