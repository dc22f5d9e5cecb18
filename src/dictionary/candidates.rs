//! Candidate set: the universe of graph vertices

use crate::core::{LadderConfig, Word, WordError};
use rustc_hash::FxHashSet;

/// Deduplicated set of valid words of one fixed length
///
/// Filled once by a loader and treated as read-only afterwards. Lookups take a
/// plain `&str`.
#[derive(Debug, Clone)]
pub struct CandidateSet {
    config: LadderConfig,
    words: FxHashSet<Word>,
}

impl CandidateSet {
    /// Create an empty set for the given configuration
    #[must_use]
    pub fn new(config: LadderConfig) -> Self {
        Self {
            config,
            words: FxHashSet::default(),
        }
    }

    /// Build a set from raw text, silently skipping invalid entries
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::LadderConfig;
    /// use word_ladder::dictionary::CandidateSet;
    ///
    /// let config = LadderConfig::new(3).unwrap();
    /// let set = CandidateSet::from_words(config, ["cat", "COT", "cat", "dogs"]);
    /// assert_eq!(set.len(), 2);
    /// assert!(set.contains("cot"));
    /// ```
    #[must_use]
    pub fn from_words<I, S>(config: LadderConfig, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new(config);
        for word in words {
            // Wrong length or letters outside the alphabet are not vertices
            let _ = set.insert(word.as_ref());
        }
        set
    }

    /// Validate and insert one word
    ///
    /// Returns `Ok(true)` if the word was new, `Ok(false)` if it was already
    /// present.
    ///
    /// # Errors
    /// Returns `WordError` if the text is not a valid word for this set's
    /// configuration.
    pub fn insert(&mut self, text: &str) -> Result<bool, WordError> {
        let word = Word::new(text, &self.config)?;
        Ok(self.words.insert(word))
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.words.contains(text)
    }

    /// Get the stored word equal to `text`
    #[inline]
    #[must_use]
    pub fn get(&self, text: &str) -> Option<&Word> {
        self.words.get(text)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &LadderConfig {
        &self.config
    }

    /// Iterate in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }

    /// All words in lexicographic order
    #[must_use]
    pub fn sorted(&self) -> Vec<&Word> {
        let mut words: Vec<&Word> = self.words.iter().collect();
        words.sort_unstable();
        words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(length: usize) -> LadderConfig {
        LadderConfig::new(length).unwrap()
    }

    #[test]
    fn from_words_filters_and_dedups() {
        let set = CandidateSet::from_words(config(3), ["cat", "Cat", "cats", "c4t", "dog"]);
        assert_eq!(set.len(), 2);
        assert!(set.contains("cat"));
        assert!(set.contains("dog"));
        assert!(!set.contains("cats"));
    }

    #[test]
    fn insert_reports_duplicates() {
        let mut set = CandidateSet::new(config(3));
        assert_eq!(set.insert("cat"), Ok(true));
        assert_eq!(set.insert("CAT"), Ok(false));
        assert!(set.insert("cart").is_err());
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn sorted_is_lexicographic() {
        let set = CandidateSet::from_words(config(3), ["dog", "cat", "cot"]);
        let words: Vec<&str> = set.sorted().into_iter().map(Word::text).collect();
        assert_eq!(words, vec!["cat", "cot", "dog"]);
    }

    #[test]
    fn get_returns_stored_word() {
        let set = CandidateSet::from_words(config(3), ["cat"]);
        assert_eq!(set.get("cat").map(Word::text), Some("cat"));
        assert!(set.get("cot").is_none());
    }

    #[test]
    fn empty_set() {
        let set = CandidateSet::from_words(config(4), Vec::<String>::new());
        assert!(set.is_empty());
        assert!(set.sorted().is_empty());
    }
}
