//! Chinese-to-pinyin normalization for text that is about to be spoken.
//!
//! The engine splits input into Chinese and non-Chinese runs, renders each
//! Chinese character as an unaccented pinyin syllable, optionally remaps
//! syllables through a pronunciation table, and stitches the runs back
//! together. Non-Chinese text passes through untouched.

pub mod converter;
pub mod pronunciation;
pub mod segment;
pub mod settings;
pub mod syllable;
pub mod unicode;

pub use converter::{ConversionInfo, ConversionMode, ParseModeError, Transliterator};
pub use pronunciation::PronunciationMap;
pub use segment::{segment, Segment};
pub use syllable::{MapTable, OverlayTable, SyllableTable};
#[cfg(feature = "pinyin")]
pub use syllable::PinyinTable;
