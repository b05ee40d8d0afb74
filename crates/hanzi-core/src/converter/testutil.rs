#![cfg(test)]

use crate::pronunciation::PronunciationMap;
use crate::syllable::MapTable;

use super::Transliterator;

/// Shared stub table for converter tests.
///
/// Covers every character used by the scenario tests so they do not depend
/// on the `pinyin` feature.
pub fn test_table() -> MapTable {
    MapTable::from_pairs([
        ('你', "ni"),
        ('好', "hao"),
        ('世', "shi"),
        ('界', "jie"),
        ('今', "jin"),
        ('天', "tian"),
        ('气', "qi"),
        ('很', "hen"),
        ('请', "qing"),
        ('安', "an"),
        ('静', "jing"),
        ('星', "xing"),
        ('新', "xin"),
        ('亲', "qin"),
        ('学', "xue"),
        ('家', "jia"),
    ])
}

pub fn test_transliterator() -> Transliterator {
    let map = PronunciationMap::from_toml(crate::pronunciation::DEFAULT_TOML)
        .expect("default pronunciation TOML");
    Transliterator::new(test_table(), map)
}
