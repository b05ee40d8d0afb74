use crate::converter::{ConversionMode, Transliterator};

#[test]
fn test_unavailable_echoes_input() {
    let t = Transliterator::unavailable();
    for mode in ConversionMode::ALL {
        assert_eq!(t.convert("你好世界", mode), "你好世界", "mode {mode}");
        assert_eq!(t.convert("Hello 你好", mode), "Hello 你好", "mode {mode}");
        assert_eq!(t.convert("", mode), "", "mode {mode}");
    }
}

#[test]
fn test_unavailable_reported_by_info() {
    let t = Transliterator::unavailable();
    assert!(!t.is_available());
    let info = t.conversion_info("你好");
    assert!(!info.converter_available);
    // Counting does not need the table
    assert_eq!(info.chinese_count, 2);
    assert!(info.has_chinese);
}

#[test]
fn test_default_table_availability_follows_feature() {
    let t = Transliterator::with_default_table();
    assert_eq!(t.is_available(), cfg!(feature = "pinyin"));
}

#[test]
fn test_debug_output() {
    let t = Transliterator::unavailable();
    let s = format!("{t:?}");
    assert!(s.contains("available: false"));
}
