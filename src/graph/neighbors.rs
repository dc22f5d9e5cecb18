//! Neighbor generation by single-letter substitution

use crate::core::Word;
use crate::dictionary::CandidateSet;
use std::collections::BTreeSet;

/// Find every word in the set reachable by changing exactly one letter
///
/// Each position is replaced by each letter of the set's alphabet; a
/// replacement is kept only if it is in the candidate set and differs from
/// `word`. `word` is lowercased first, matching the set's normalization. The
/// result is ordered lexicographically and never contains `word` itself.
///
/// Cost is `O(L × |alphabet|)` hash lookups.
///
/// # Examples
/// ```
/// use word_ladder::core::LadderConfig;
/// use word_ladder::dictionary::CandidateSet;
/// use word_ladder::graph::neighbors;
///
/// let config = LadderConfig::new(3).unwrap();
/// let set = CandidateSet::from_words(config, ["cat", "cot", "cog", "dog", "bat"]);
///
/// let found: Vec<&str> = neighbors("cat", &set).into_iter().map(|w| w.text()).collect();
/// assert_eq!(found, vec!["bat", "cot"]);
/// ```
#[must_use]
pub fn neighbors<'a>(word: &str, candidates: &'a CandidateSet) -> BTreeSet<&'a Word> {
    let alphabet = candidates.config().alphabet();
    let word = word.to_lowercase();
    let mut buffer = word.as_bytes().to_vec();
    let mut found = BTreeSet::new();

    for position in 0..buffer.len() {
        let original = buffer[position];

        for &letter in alphabet.letters() {
            if letter == original {
                continue;
            }
            buffer[position] = letter;

            // Substituting into a multi-byte char yields invalid UTF-8; such
            // words are never in the set anyway.
            let Ok(candidate) = std::str::from_utf8(&buffer) else {
                continue;
            };
            if let Some(neighbor) = candidates.get(candidate) {
                if neighbor.text() != word.as_str() {
                    found.insert(neighbor);
                }
            }
        }

        buffer[position] = original;
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Alphabet, LadderConfig};

    fn set(length: usize, words: &[&str]) -> CandidateSet {
        CandidateSet::from_words(LadderConfig::new(length).unwrap(), words)
    }

    fn texts<'a>(found: &BTreeSet<&'a Word>) -> Vec<&'a str> {
        found.iter().map(|&w| w.text()).collect()
    }

    #[test]
    fn finds_single_substitutions() {
        let words = set(3, &["cat", "cot", "cog", "dog", "dot"]);
        assert_eq!(texts(&neighbors("cot", &words)), vec!["cat", "cog", "dot"]);
        assert_eq!(texts(&neighbors("dog", &words)), vec!["cog", "dot"]);
    }

    #[test]
    fn never_includes_self() {
        let words = set(3, &["cat", "cot", "cog", "dog", "dot"]);
        for word in words.iter() {
            let found = neighbors(word.text(), &words);
            assert!(!found.contains(word), "{word} listed as its own neighbor");
        }
    }

    #[test]
    fn substitution_is_symmetric() {
        let words = set(4, &["cold", "cord", "card", "ward", "warm", "worm", "word"]);
        for a in words.iter() {
            for b in neighbors(a.text(), &words) {
                assert!(
                    neighbors(b.text(), &words).contains(a),
                    "{a} -> {b} has no reverse edge"
                );
            }
        }
    }

    #[test]
    fn mixed_case_word_is_not_its_own_neighbor() {
        let words = set(3, &["cat", "bat"]);
        assert_eq!(texts(&neighbors("cAt", &words)), vec!["bat"]);
        assert_eq!(texts(&neighbors("BAT", &words)), vec!["cat"]);
    }

    #[test]
    fn ignores_multi_letter_changes() {
        let words = set(3, &["cat", "dog"]);
        assert!(neighbors("cat", &words).is_empty());
    }

    #[test]
    fn word_outside_set_still_gets_neighbors() {
        let words = set(3, &["cat", "bat"]);
        assert_eq!(texts(&neighbors("hat", &words)), vec!["bat", "cat"]);
    }

    #[test]
    fn single_letter_words() {
        let words = set(1, &["a", "i", "o"]);
        assert_eq!(texts(&neighbors("a", &words)), vec!["i", "o"]);
    }

    #[test]
    fn restricted_alphabet_limits_substitutions() {
        let config = LadderConfig::with_alphabet(3, Alphabet::new("act").unwrap()).unwrap();
        let words = CandidateSet::from_words(config, ["cat", "tat", "aat"]);
        assert_eq!(texts(&neighbors("cat", &words)), vec!["aat", "tat"]);
    }

    #[test]
    fn empty_set_has_no_neighbors() {
        let words = set(3, &[]);
        assert!(neighbors("cat", &words).is_empty());
    }
}
