//! Search results

use crate::core::Word;
use std::fmt;

/// A shortest chain of words from source to target
///
/// Consecutive words differ in exactly one position. Always holds at least one
/// word: a search whose source equals its target yields a one-word ladder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ladder {
    words: Vec<Word>,
}

impl Ladder {
    pub(crate) const fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// Number of words, source and target included
    ///
    /// This is the step count reported to the user.
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

    /// Number of single-letter changes (`len() - 1`)
    #[inline]
    #[must_use]
    pub fn transformations(&self) -> usize {
        self.words.len().saturating_sub(1)
    }

    /// Words in source → target order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn source(&self) -> Option<&Word> {
        self.words.first()
    }

    #[must_use]
    pub fn target(&self) -> Option<&Word> {
        self.words.last()
    }

    /// Words in target → source order, the order the search discovers them
    pub fn reversed(&self) -> impl Iterator<Item = &Word> {
        self.words.iter().rev()
    }
}

impl fmt::Display for Ladder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.reversed().enumerate() {
            if i > 0 {
                write!(f, " <- ")?;
            }
            write!(f, "{word}")?;
        }
        Ok(())
    }
}

/// Outcome of a completed search
///
/// `NoPath` is a normal result, not an error: both words exist but are in
/// different components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathResult {
    Found(Ladder),
    NoPath { source: Word, target: Word },
}

impl PathResult {
    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    #[must_use]
    pub const fn ladder(&self) -> Option<&Ladder> {
        match self {
            Self::Found(ladder) => Some(ladder),
            Self::NoPath { .. } => None,
        }
    }

    #[must_use]
    pub fn into_ladder(self) -> Option<Ladder> {
        match self {
            Self::Found(ladder) => Some(ladder),
            Self::NoPath { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LadderConfig;

    fn ladder(words: &[&str]) -> Ladder {
        let config = LadderConfig::new(3).unwrap();
        Ladder::new(words.iter().map(|w| Word::new(w, &config).unwrap()).collect())
    }

    #[test]
    fn display_is_target_first() {
        let ladder = ladder(&["cat", "cot", "cog", "dog"]);
        assert_eq!(ladder.to_string(), "dog <- cog <- cot <- cat");
    }

    #[test]
    fn counts() {
        let ladder = ladder(&["cat", "cot", "cog", "dog"]);
        assert_eq!(ladder.len(), 4);
        assert_eq!(ladder.transformations(), 3);
        assert_eq!(ladder.source().map(Word::text), Some("cat"));
        assert_eq!(ladder.target().map(Word::text), Some("dog"));
    }

    #[test]
    fn single_word_ladder() {
        let ladder = ladder(&["cat"]);
        assert_eq!(ladder.len(), 1);
        assert_eq!(ladder.transformations(), 0);
        assert_eq!(ladder.to_string(), "cat");
        assert_eq!(ladder.source(), ladder.target());
    }

    #[test]
    fn path_result_accessors() {
        let found = PathResult::Found(ladder(&["cat"]));
        assert!(found.is_found());
        assert!(found.ladder().is_some());

        let config = LadderConfig::new(3).unwrap();
        let missing = PathResult::NoPath {
            source: Word::new("cat", &config).unwrap(),
            target: Word::new("dog", &config).unwrap(),
        };
        assert!(!missing.is_found());
        assert!(missing.into_ladder().is_none());
    }
}
