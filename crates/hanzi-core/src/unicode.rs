//! Character-level Unicode classification for Chinese text.

use unicode_general_category::{get_general_category, GeneralCategory};

/// Check the CJK Unified Ideographs block (U+4E00..U+9FFF).
///
/// Extension blocks (U+3400.., U+20000..) are deliberately not included:
/// characters there are treated as ordinary text and passed through.
pub fn is_chinese_char(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c)
}

pub fn contains_chinese(text: &str) -> bool {
    text.chars().any(is_chinese_char)
}

pub fn chinese_char_count(text: &str) -> usize {
    text.chars().filter(|&c| is_chinese_char(c)).count()
}

/// Letter in the Unicode general-category sense (Lu, Ll, Lt, Lm, Lo).
///
/// Narrower than `char::is_alphabetic`: letter numbers such as Ⅻ and
/// spacing vowel signs such as ा are excluded.
pub fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// First and last characters of `s`, if any.
pub(crate) fn edge_chars(s: &str) -> Option<(char, char)> {
    let first = s.chars().next()?;
    let last = s.chars().next_back()?;
    Some((first, last))
}
