//! # Per-Token Feature Extraction
//!
//! The functional counterpart of [`WordPreprocessor`](crate::preprocessor::WordPreprocessor):
//! maps a single surface token to its word id and, optionally, its
//! character ids, against already-built vocabularies.

use crate::error::Result;
use crate::normalize::Normalizer;
use crate::vocab::{CharVocab, SpecialTokens, Vocabulary};

/// Numeric features for one token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordFeatures {
    /// Index into the word vocabulary, always in `[0, |vocab|)`.
    /// `None` only when the processor has no word vocabulary configured.
    pub word_id: Option<usize>,
    /// Character indices, present only when character features are enabled.
    /// Out-of-vocabulary characters are dropped, not substituted.
    pub char_ids: Option<Vec<usize>>,
}

/// Token-to-id processor over borrowed vocabularies.
///
/// Both vocabularies are optional: without a word vocabulary the processor
/// only normalizes (and optionally emits character ids); with one, word
/// lookup falls back to the `unknown` special, then to `padding` if
/// `unknown` is itself absent, and finally to index 0. It never fails.
pub struct WordProcessor<'v> {
    vocab_words: Option<&'v Vocabulary>,
    vocab_chars: Option<&'v CharVocab>,
    normalizer: Normalizer,
    use_char: bool,
    specials: SpecialTokens,
}

impl<'v> WordProcessor<'v> {
    /// Constructs a processor. Character features are emitted only when
    /// `use_char` is set and a character vocabulary is supplied.
    ///
    /// # Errors
    ///
    /// Returns `SeqprepError::Regex` if the digit-folding pattern fails to
    /// compile (should never happen).
    pub fn new(
        vocab_words: Option<&'v Vocabulary>,
        vocab_chars: Option<&'v CharVocab>,
        lowercase: bool,
        use_char: bool,
    ) -> Result<Self> {
        Ok(Self {
            vocab_words,
            vocab_chars,
            normalizer: Normalizer::new(lowercase, true)?,
            use_char,
            specials: SpecialTokens::default(),
        })
    }

    /// Override the reserved tokens used for fallback lookups.
    pub fn with_specials(mut self, specials: SpecialTokens) -> Self {
        self.specials = specials;
        self
    }

    /// Map one token to its numeric features.
    pub fn process(&self, word: &str) -> WordFeatures {
        let word = self.normalizer.normalize(word);

        let char_ids = match (self.vocab_chars, self.use_char) {
            (Some(vc), true) => Some(vc.encode(&word)),
            _ => None,
        };

        let word_id = self.vocab_words.map(|vw| {
            vw.get(&word)
                .or_else(|| vw.get(&self.specials.unknown))
                .or_else(|| vw.get(&self.specials.padding))
                .unwrap_or(0)
        });

        WordFeatures { word_id, char_ids }
    }

    /// Map a whole sentence.
    pub fn process_sentence(&self, words: &[String]) -> Vec<WordFeatures> {
        words.iter().map(|w| self.process(w)).collect()
    }
}
