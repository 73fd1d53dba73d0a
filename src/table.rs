//! Translation table - the key → display text map backing every UI label
//!
//! A table is built once for one language and never mutated afterwards.
//! The UI receives it by reference instead of reaching for a global, so
//! "initialised before first lookup" is enforced by construction order.

use std::collections::HashMap;

use crate::i18n::Language;

/// Key → localized text for a single language.
///
/// An empty table (the `Default`) is the uninitialized state: every
/// lookup yields `""`.
#[derive(Debug, Clone, Default)]
pub struct TranslationTable {
    language: Option<Language>,
    dic: HashMap<&'static str, &'static str>,
}

impl TranslationTable {
    /// Build a table from a language code.
    ///
    /// An unrecognised code leaves the table empty; lookups then return
    /// blank text rather than an error.
    pub fn init(code: &str) -> Self {
        match Language::from_code(code) {
            Some(lang) => Self::for_language(lang),
            None => {
                log::warn!("Unrecognised language code {:?}, UI text will be blank", code);
                Self::empty()
            }
        }
    }

    pub fn for_language(lang: Language) -> Self {
        let entries = lang.entries();
        let mut dic = HashMap::with_capacity(entries.len());
        for &(key, text) in entries {
            dic.insert(key, text);
        }
        log::debug!("Loaded {} UI strings for {}", dic.len(), lang);

        Self {
            language: Some(lang),
            dic,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Localized text for `key`, or `""` when the key is unknown.
    pub fn get(&self, key: &str) -> &str {
        self.dic.get(key).copied().unwrap_or_default()
    }

    pub fn language(&self) -> Option<Language> {
        self.language
    }

    pub fn is_ready(&self) -> bool {
        self.language.is_some()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.dic.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.dic.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dic.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.dic.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::KEYS;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeSet;

    #[test]
    fn test_english_scenario() {
        let table = TranslationTable::init("en");
        assert_eq!(table.get("save"), "Save to Disk");
        assert_eq!(table.get("red"), "Red");
        assert_eq!(table.language(), Some(Language::English));
    }

    #[test]
    fn test_chinese_scenario() {
        let table = TranslationTable::init("zhcn");
        assert_eq!(table.get("undo"), "撤销");
    }

    #[test]
    fn test_korean_scenario() {
        let table = TranslationTable::init("ko");
        assert_eq!(table.get("mosaicFill"), "사각형 모자이크");

        let table = TranslationTable::init("kr");
        assert_eq!(table.get("save"), "디스크에 저장");
    }

    #[test]
    fn test_unrecognised_code_is_blank() {
        let table = TranslationTable::init("xx");
        assert!(!table.is_ready());
        assert!(table.is_empty());
        assert_eq!(table.get("save"), "");
    }

    #[test]
    fn test_uninitialized_lookup_is_blank() {
        let table = TranslationTable::default();
        assert_eq!(table.language(), None);
        assert_eq!(table.get("undo"), "");
    }

    #[test]
    fn test_unknown_key_is_blank() {
        let table = TranslationTable::init("en");
        assert_eq!(table.get("doesNotExist"), "");
        assert_eq!(table.get(""), "");
        // Keys are case-sensitive
        assert_eq!(table.get("Save"), "");
    }

    #[test]
    fn test_documented_keys_non_empty_in_every_language() {
        for lang in Language::all() {
            let table = TranslationTable::for_language(*lang);
            assert_eq!(table.len(), KEYS.len());
            for key in ["save", "undo", "redo", "red", "black", "start"] {
                assert!(!table.get(key).is_empty(), "{} missing in {}", key, lang);
            }
            for key in KEYS {
                assert!(table.contains(key));
            }
        }
    }

    #[test]
    fn test_languages_share_identical_key_sets() {
        let sets: Vec<BTreeSet<&str>> = Language::all()
            .iter()
            .map(|lang| TranslationTable::for_language(*lang).keys().collect())
            .collect();
        assert_eq!(sets[0], sets[1]);
        assert_eq!(sets[1], sets[2]);
    }

    #[test]
    fn test_new_table_has_no_stale_entries() {
        let english = TranslationTable::init("en");
        assert_eq!(english.get("undo"), "Undo");

        let chinese = TranslationTable::init("zhcn");
        assert_eq!(chinese.language(), Some(Language::SimplifiedChinese));
        for key in KEYS {
            assert_eq!(chinese.get(key), zh_text(key));
        }
    }

    fn zh_text(key: &str) -> &'static str {
        crate::i18n::ZH_CN
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
            .unwrap_or_default()
    }

    #[test]
    fn test_table_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TranslationTable>();

        let table = std::sync::Arc::new(TranslationTable::init("en"));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let table = table.clone();
                std::thread::spawn(move || table.get("close").to_string())
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), "Close");
        }
    }
}
