//! Property-based checks that hold for every mode and every input.

use proptest::prelude::*;

use crate::converter::{ConversionMode, Transliterator};
use crate::converter::testutil::test_transliterator;
use crate::unicode::is_chinese_char;

fn arb_non_chinese_char() -> impl Strategy<Value = char> {
    any::<char>().prop_filter("non-Chinese", |c| !is_chinese_char(*c))
}

fn arb_mode() -> impl Strategy<Value = ConversionMode> {
    prop::sample::select(ConversionMode::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn non_chinese_input_is_unchanged(
        chars in prop::collection::vec(arb_non_chinese_char(), 0..48),
        mode in arb_mode(),
    ) {
        let t = test_transliterator();
        let text: String = chars.into_iter().collect();
        prop_assert_eq!(t.convert(&text, mode), text);
    }

    #[test]
    fn unavailable_is_identity(text in ".*", mode in arb_mode()) {
        let t = Transliterator::unavailable();
        prop_assert_eq!(t.convert(&text, mode), text);
    }

    #[test]
    fn output_has_no_chinese_when_table_covers_input(
        picks in prop::collection::vec(0usize..4, 0..16),
        mode in arb_mode(),
    ) {
        let alphabet = ['你', '好', 'a', ' '];
        let text: String = picks.into_iter().map(|i| alphabet[i]).collect();
        let t = test_transliterator();
        prop_assert!(!t.convert(&text, mode).chars().any(is_chinese_char));
    }

    #[test]
    fn percentage_within_bounds(text in ".*") {
        let info = test_transliterator().conversion_info(&text);
        prop_assert!((0.0..=100.0).contains(&info.chinese_percentage));
        prop_assert_eq!(info.has_chinese, info.chinese_count > 0);
    }
}
