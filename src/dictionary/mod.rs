//! Dictionary provider
//!
//! Supplies the candidate set of fixed-length words, either from the corpus
//! compiled into the binary or from a user file.

mod candidates;
mod embedded;
pub mod loader;

pub use candidates::CandidateSet;
pub use embedded::{CORPUS, CORPUS_COUNT};
pub use loader::{DictionaryError, DictionarySource, load_words};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corpus_count_matches_const() {
        assert_eq!(CORPUS.len(), CORPUS_COUNT);
    }

    #[test]
    fn corpus_entries_are_alphabetic() {
        for &word in CORPUS {
            assert!(!word.is_empty());
            assert!(
                word.chars().all(|c| c.is_ascii_alphabetic()),
                "Word '{word}' contains non-letter chars"
            );
        }
    }

    #[test]
    fn corpus_has_common_lengths() {
        for length in 3..=5 {
            assert!(
                CORPUS.iter().filter(|w| w.len() == length).count() > 100,
                "too few {length}-letter words"
            );
        }
    }

    #[test]
    fn corpus_covers_everyday_four_letter_words() {
        let four: Vec<&str> = CORPUS.iter().copied().filter(|w| w.len() == 4).collect();
        assert!(four.len() > 2000, "only {} four-letter words", four.len());

        for word in ["ajar", "chef", "dusk", "quiz", "yolk", "zinc", "jinx", "wimp"] {
            assert!(four.contains(&word), "missing '{word}'");
        }
    }
}
