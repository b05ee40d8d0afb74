//! Chinese-to-pinyin conversion.
//!
//! Every mode runs the same pipeline: segment the input into Chinese and
//! non-Chinese runs, render Chinese runs as syllables (optionally remapped
//! through the pronunciation map), then reassemble. Modes differ only in
//! whether syllables and segments are space-separated and whether the
//! remap step runs.

mod info;
mod reassemble;
pub(crate) mod testutil;

#[cfg(test)]
mod tests;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span};

use crate::pronunciation::PronunciationMap;
use crate::segment::segment;
use crate::syllable::{syllables, SyllableTable};
use crate::unicode::chinese_char_count;

pub use info::ConversionInfo;
pub use reassemble::{join_segments, needs_space};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConversionMode {
    /// Syllables and segments run together: "nihao".
    Compact,
    /// One space between syllables and at alphabetic segment boundaries.
    Spaced,
    CompactPronunciation,
    SpacedPronunciation,
}

impl ConversionMode {
    pub const ALL: [ConversionMode; 4] = [
        ConversionMode::Compact,
        ConversionMode::Spaced,
        ConversionMode::CompactPronunciation,
        ConversionMode::SpacedPronunciation,
    ];

    pub fn spaced(self) -> bool {
        matches!(self, Self::Spaced | Self::SpacedPronunciation)
    }

    pub fn remaps_pronunciation(self) -> bool {
        matches!(self, Self::CompactPronunciation | Self::SpacedPronunciation)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Compact => "compact",
            Self::Spaced => "spaced",
            Self::CompactPronunciation => "compact-pronunciation",
            Self::SpacedPronunciation => "spaced-pronunciation",
        }
    }
}

impl fmt::Display for ConversionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown conversion mode: {0} (expected compact, spaced, compact-pronunciation or spaced-pronunciation)")]
pub struct ParseModeError(String);

impl FromStr for ConversionMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| ParseModeError(s.to_string()))
    }
}

/// The transliteration engine: a syllable table plus a pronunciation map.
///
/// Without a table every conversion echoes its input, and
/// [`ConversionInfo::converter_available`] reports `false`.
pub struct Transliterator {
    table: Option<Box<dyn SyllableTable>>,
    pronunciation: PronunciationMap,
}

impl Transliterator {
    pub fn new(table: impl SyllableTable + 'static, pronunciation: PronunciationMap) -> Self {
        Self {
            table: Some(Box::new(table)),
            pronunciation,
        }
    }

    /// Engine with no syllable table; every conversion is the identity.
    pub fn unavailable() -> Self {
        Self {
            table: None,
            pronunciation: PronunciationMap::global().clone(),
        }
    }

    /// The bundled `pinyin` table with the global pronunciation map, or an
    /// unavailable engine when built without the `pinyin` feature.
    pub fn with_default_table() -> Self {
        #[cfg(feature = "pinyin")]
        {
            Self::new(crate::syllable::PinyinTable, PronunciationMap::global().clone())
        }
        #[cfg(not(feature = "pinyin"))]
        {
            tracing::warn!("built without the pinyin feature, Chinese text will pass through unchanged");
            Self::unavailable()
        }
    }

    pub fn with_pronunciation_map(mut self, pronunciation: PronunciationMap) -> Self {
        self.pronunciation = pronunciation;
        self
    }

    pub fn is_available(&self) -> bool {
        self.table.is_some()
    }

    pub fn pronunciation_map(&self) -> &PronunciationMap {
        &self.pronunciation
    }

    pub fn convert(&self, text: &str, mode: ConversionMode) -> String {
        let Some(table) = self.table.as_deref() else {
            return text.to_string();
        };
        let _span = debug_span!("convert", %mode, char_count = text.chars().count()).entered();

        let sep = if mode.spaced() { " " } else { "" };
        let parts: Vec<String> = segment(text)
            .into_iter()
            .map(|seg| {
                if !seg.is_chinese {
                    return seg.text;
                }
                let syls = syllables(table, &seg.text);
                if mode.remaps_pronunciation() {
                    syls.iter()
                        .map(|s| self.pronunciation.remap(s))
                        .collect::<Vec<_>>()
                        .join(sep)
                } else {
                    syls.join(sep)
                }
            })
            .collect();
        debug!(segment_count = parts.len());

        if mode.spaced() {
            join_segments(&parts)
        } else {
            parts.concat()
        }
    }

    /// Compact pinyin: "你好" → "nihao".
    pub fn to_pinyin(&self, text: &str) -> String {
        self.convert(text, ConversionMode::Compact)
    }

    /// Spaced pinyin: "你好世界" → "ni hao shi jie".
    pub fn to_pinyin_spaced(&self, text: &str) -> String {
        self.convert(text, ConversionMode::Spaced)
    }

    pub fn to_pinyin_with_pronunciation(&self, text: &str) -> String {
        self.convert(text, ConversionMode::CompactPronunciation)
    }

    pub fn to_pinyin_spaced_with_pronunciation(&self, text: &str) -> String {
        self.convert(text, ConversionMode::SpacedPronunciation)
    }

    pub fn conversion_info(&self, text: &str) -> ConversionInfo {
        ConversionInfo::new(
            chinese_char_count(text),
            text.chars().count(),
            self.is_available(),
            self.pronunciation.len(),
        )
    }
}

impl fmt::Debug for Transliterator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transliterator")
            .field("available", &self.is_available())
            .field("pronunciation_map_size", &self.pronunciation.len())
            .finish()
    }
}
