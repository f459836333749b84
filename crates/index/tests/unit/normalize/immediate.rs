//! Immediate Extractor and Base Instruction Tests.
//!
//! Walks the priority chain (saturating, half, single-character pair,
//! verbatim) and pins the catalogue-fitted behaviour for suffixes that only
//! resemble a higher-priority rule.

use proptest::prelude::*;
use rstest::rstest;
use wasm_index::normalize::{base_instruction, extract_immediates};

#[rstest]
#[case::no_underscore("i32.add", "i32.add", "")]
#[case::signedness("i32.load8_s", "i32.load8", "s")]
#[case::memarg("i64.load16_u_memarg", "i64.load16", "u_memarg")]
#[case::width_suffix("i32.wrap_8_s", "i32.wrap", "8_s")]
#[case::saturating("i32.trunc_sat_f32_s", "i32.trunc", "sat.f32.s")]
#[case::saturating_zero("i32x4.vtrunc_sat_f64x2_s_zero", "i32x4.vtrunc", "sat.f64x2.s.zero")]
#[case::high("i16x8.extmul_high_i8x16_s", "i16x8.extmul", "high.i8x16.s")]
#[case::low("f64x2.vpromote_low_f32x4", "f64x2.vpromote", "low.f32x4")]
#[case::pair("callindirect_x_y", "callindirect", "x,y")]
#[case::repeated_label("brtable_l_l", "brtable", "l,l")]
#[case::triple("tableinit_x_y_z", "tableinit", "x_y_z")]
#[case::digit_pair("a_1_2", "a", "1_2")]
#[case::wide_pair("f32.convert_i32_s", "f32.convert", "i32_s")]
#[case::lane_list("i8x16.shuffle_laneidx{16}", "i8x16.shuffle", "laneidx{16}")]
fn splits_name(#[case] name: &str, #[case] base: &str, #[case] immediates: &str) {
    assert_eq!(base_instruction(name), base);
    assert_eq!(extract_immediates(name), immediates);
}

#[test]
fn trailing_underscore_yields_empty_immediates() {
    assert_eq!(base_instruction("drop_"), "drop");
    assert_eq!(extract_immediates("drop_"), "");
}

#[test]
fn incidental_low_is_dotted() {
    // Fitted to the catalogue: any suffix containing `low_` is treated as a
    // half qualifier, even when the match is accidental.
    assert_eq!(extract_immediates("i32.op_slow_x"), "slow.x");
    assert_eq!(extract_immediates("i32.op_sat_x"), "sat.x");
}

proptest! {
    #[test]
    fn base_is_underscore_free_prefix(name in "[a-z0-9._]{0,24}") {
        let base = base_instruction(&name);
        prop_assert!(name.starts_with(base));
        prop_assert!(!base.contains('_'));
    }

    #[test]
    fn regrouping_only_touches_underscores(name in "[a-z0-9]{1,6}(_[a-z0-9]{0,6}){0,4}") {
        let immediates = extract_immediates(&name);
        match name.split_once('_') {
            None => prop_assert!(immediates.is_empty()),
            Some((_, suffix)) => {
                let restored = immediates.replace(|c: char| c == '.' || c == ',', "_");
                prop_assert_eq!(restored, suffix);
            }
        }
    }
}
