use std::borrow::Cow;
use std::collections::BTreeMap;

use super::config::{parse_syllable_toml, SyllableConfigError};
use super::SyllableTable;

/// Table backed by the `pinyin` crate's bundled character data.
///
/// Heteronyms resolve to the crate's first (most common) reading. `ü` is
/// spelled `v`, so every syllable is plain lowercase ASCII.
#[cfg(feature = "pinyin")]
#[derive(Debug, Default, Clone, Copy)]
pub struct PinyinTable;

#[cfg(feature = "pinyin")]
impl SyllableTable for PinyinTable {
    fn syllable_of(&self, c: char) -> Option<Cow<'_, str>> {
        use pinyin::ToPinyin;

        let plain = c.to_pinyin()?.plain();
        if plain.contains('ü') {
            Some(Cow::Owned(plain.replace('ü', "v")))
        } else {
            Some(Cow::Borrowed(plain))
        }
    }
}

/// Explicit character-to-syllable map, typically loaded from TOML.
#[derive(Debug, Default, Clone)]
pub struct MapTable {
    entries: BTreeMap<char, String>,
}

impl MapTable {
    pub fn from_toml(toml_str: &str) -> Result<Self, SyllableConfigError> {
        Ok(Self {
            entries: parse_syllable_toml(toml_str)?,
        })
    }

    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (char, S)>,
        S: Into<String>,
    {
        Self {
            entries: pairs.into_iter().map(|(c, s)| (c, s.into())).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SyllableTable for MapTable {
    fn syllable_of(&self, c: char) -> Option<Cow<'_, str>> {
        self.entries.get(&c).map(|s| Cow::Borrowed(s.as_str()))
    }
}

/// Overrides consulted first, then the base table.
pub struct OverlayTable<B> {
    overrides: MapTable,
    base: B,
}

impl<B: SyllableTable> OverlayTable<B> {
    pub fn new(overrides: MapTable, base: B) -> Self {
        Self { overrides, base }
    }
}

impl<B: SyllableTable> SyllableTable for OverlayTable<B> {
    fn syllable_of(&self, c: char) -> Option<Cow<'_, str>> {
        self.overrides
            .syllable_of(c)
            .or_else(|| self.base.syllable_of(c))
    }
}
