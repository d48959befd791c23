//! Autocomplete dictionary and substring filter

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// One autocomplete candidate
///
/// Equality and hashing look at `text` only; the category is a display tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutoCompleteEntry {
    pub text: String,
    /// Icon index in the host's image list
    #[serde(default)]
    pub category: usize,
}

impl AutoCompleteEntry {
    pub fn new(text: impl Into<String>, category: usize) -> Self {
        Self {
            text: text.into(),
            category,
        }
    }
}

impl PartialEq for AutoCompleteEntry {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for AutoCompleteEntry {}

impl Hash for AutoCompleteEntry {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

/// Dictionary in insertion order
pub type AutoCompleteIndex = Vec<AutoCompleteEntry>;

/// Build an index from a word list, every entry sharing `category`
pub fn entries_from_words<I, S>(words: I, category: usize) -> AutoCompleteIndex
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    words
        .into_iter()
        .map(|word| AutoCompleteEntry::new(word, category))
        .collect()
}

/// Entries whose text contains `word`, in index order
///
/// Matching is case-sensitive and not anchored: `"wor"` matches `"world"`
/// and `"password"` alike. An empty word matches nothing.
pub fn filter(index: &[AutoCompleteEntry], word: &str) -> Vec<AutoCompleteEntry> {
    if word.is_empty() {
        return Vec::new();
    }
    index
        .iter()
        .filter(|entry| entry.text.contains(word))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(entries: &[AutoCompleteEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.text.as_str()).collect()
    }

    #[test]
    fn test_filter_preserves_order() {
        let index = entries_from_words(["foo", "foobar", "bar"], 0);
        assert_eq!(texts(&filter(&index, "foo")), vec!["foo", "foobar"]);
    }

    #[test]
    fn test_filter_matches_anywhere() {
        let index = entries_from_words(["password", "world", "sword"], 0);
        assert_eq!(texts(&filter(&index, "wor")), vec!["password", "world", "sword"]);
    }

    #[test]
    fn test_filter_is_case_sensitive() {
        let index = entries_from_words(["Print", "printf"], 0);
        assert_eq!(texts(&filter(&index, "print")), vec!["printf"]);
    }

    #[test]
    fn test_filter_empty_word() {
        let index = entries_from_words(["a"], 0);
        assert!(filter(&index, "").is_empty());
    }

    #[test]
    fn test_filter_keeps_duplicates_from_index() {
        let index = vec![AutoCompleteEntry::new("dup", 1), AutoCompleteEntry::new("dup", 2)];
        let found = filter(&index, "du");
        assert_eq!(found.len(), 2);
        assert_eq!(found[1].category, 2);
    }

    #[test]
    fn test_entry_identity_is_text() {
        assert_eq!(AutoCompleteEntry::new("x", 1), AutoCompleteEntry::new("x", 7));
        assert_ne!(AutoCompleteEntry::new("x", 1), AutoCompleteEntry::new("y", 1));
    }

    #[test]
    fn test_entries_from_words_category() {
        let index = entries_from_words(vec!["a".to_string(), "b".to_string()], 3);
        assert!(index.iter().all(|e| e.category == 3));
    }
}
