//! Character-to-syllable lookup.
//!
//! The table is an injected dependency: the engine only sees the
//! [`SyllableTable`] trait, so the `pinyin` crate, a TOML-loaded map, or a
//! test stub can stand behind it interchangeably.

mod config;
mod table;

pub use config::{parse_syllable_toml, SyllableConfigError};
#[cfg(feature = "pinyin")]
pub use table::PinyinTable;
pub use table::{MapTable, OverlayTable};

use std::borrow::Cow;

use tracing::debug;

/// Deterministic, side-effect-free mapping from one character to its
/// unaccented syllable.
pub trait SyllableTable: Send + Sync {
    fn syllable_of(&self, c: char) -> Option<Cow<'_, str>>;
}

impl<T: SyllableTable + ?Sized> SyllableTable for Box<T> {
    fn syllable_of(&self, c: char) -> Option<Cow<'_, str>> {
        (**self).syllable_of(c)
    }
}

/// One syllable per character of `run`, in order.
///
/// Characters the table has no entry for contribute nothing: the output may
/// be shorter than the input.
pub fn syllables(table: &dyn SyllableTable, run: &str) -> Vec<String> {
    let mut out = Vec::with_capacity(run.chars().count());
    for c in run.chars() {
        match table.syllable_of(c) {
            Some(s) => out.push(s.into_owned()),
            None => debug!(%c, "no syllable, skipped"),
        }
    }
    out
}
