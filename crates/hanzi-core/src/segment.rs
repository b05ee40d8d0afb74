//! Split text into maximal runs of Chinese and non-Chinese characters.

use crate::unicode::is_chinese_char;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub is_chinese: bool,
}

/// Partition `text` into maximal same-classification runs, in order.
///
/// Adjacent segments always differ in `is_chinese`, and concatenating every
/// `text` yields the input exactly. Empty input yields no segments.
pub fn segment(text: &str) -> Vec<Segment> {
    let mut segments: Vec<Segment> = Vec::new();
    for c in text.chars() {
        let is_chinese = is_chinese_char(c);
        match segments.last_mut() {
            Some(cur) if cur.is_chinese == is_chinese => cur.text.push(c),
            _ => segments.push(Segment {
                text: c.to_string(),
                is_chinese,
            }),
        }
    }
    segments
}
