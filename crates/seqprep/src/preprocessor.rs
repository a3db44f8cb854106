//! # Stateful Fit/Transform Preprocessor
//!
//! Builds the word/char/tag vocabularies from a corpus (`fit`), maps
//! sentences and labels to id sequences (`transform`), and maps tag ids
//! back to strings (`inverse_transform`). Only `fit` mutates state;
//! repeated fits on the same input produce the same vocabularies.

use crate::error::{Result, SeqprepError};
use crate::normalize::Normalizer;
use crate::vocab::{CharVocab, SpecialTokens, Vocabulary};

/// Options for [`WordPreprocessor`].
#[derive(Debug, Clone)]
pub struct PreprocessorOptions {
    /// Lowercase tokens before vocabulary construction and lookup.
    pub lowercase: bool,
    /// Collapse ASCII and full-width digits to `'0'`.
    pub fold_digits: bool,
    /// Emit per-word character ids alongside word ids.
    pub char_feature: bool,
    /// Seed vocabulary unioned into the word vocabulary at fit time.
    pub vocab_init: Vec<String>,
    /// Reserved tokens.
    pub specials: SpecialTokens,
}

impl Default for PreprocessorOptions {
    fn default() -> Self {
        Self {
            lowercase: true,
            fold_digits: true,
            char_feature: true,
            vocab_init: Vec::new(),
            specials: SpecialTokens::default(),
        }
    }
}

impl PreprocessorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    pub fn with_fold_digits(mut self, fold_digits: bool) -> Self {
        self.fold_digits = fold_digits;
        self
    }

    pub fn with_char_feature(mut self, char_feature: bool) -> Self {
        self.char_feature = char_feature;
        self
    }

    pub fn with_vocab_init(mut self, vocab_init: Vec<String>) -> Self {
        self.vocab_init = vocab_init;
        self
    }

    pub fn with_specials(mut self, specials: SpecialTokens) -> Self {
        self.specials = specials;
        self
    }
}

/// Numeric features for one sentence produced by
/// [`WordPreprocessor::transform`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceFeatures {
    /// One id per word, unknown words mapped to the `unknown` index.
    pub word_ids: Vec<usize>,
    /// Per-word character ids when character features are enabled.
    pub char_ids: Option<Vec<Vec<usize>>>,
}

/// Fit/transform vocabulary processor.
///
/// Not designed for concurrent mutation: callers must serialize `fit`
/// against any concurrent `transform`/`inverse_transform` use.
pub struct WordPreprocessor {
    options: PreprocessorOptions,
    normalizer: Normalizer,
    vocab_word: Vocabulary,
    vocab_char: CharVocab,
    vocab_tag: Vocabulary,
}

impl WordPreprocessor {
    /// Constructs an unfitted preprocessor.
    ///
    /// # Errors
    ///
    /// Returns `SeqprepError::Regex` if the digit-folding pattern fails to
    /// compile (should never happen).
    pub fn new(options: PreprocessorOptions) -> Result<Self> {
        let normalizer = Normalizer::new(options.lowercase, options.fold_digits)?;
        Ok(Self {
            options,
            normalizer,
            vocab_word: Vocabulary::new(),
            vocab_char: CharVocab::new(),
            vocab_tag: Vocabulary::new(),
        })
    }

    /// Build all three vocabularies from scratch.
    ///
    /// The word and char vocabularies reserve index 0 for the unknown
    /// token; tags get no reserved index. Words are collected in
    /// first-seen order (then the seed vocabulary), characters are drawn
    /// from the normalized words, tags in first-seen order across the
    /// label sequences.
    pub fn fit(&mut self, sents: &[Vec<String>], labels: &[Vec<String>]) -> &mut Self {
        let mut words = Vocabulary::new();
        words.push(&self.options.specials.unknown);
        let mut chars = CharVocab::with_reserved_slot();
        let mut tags = Vocabulary::new();

        for word in sents.iter().flatten().chain(self.options.vocab_init.iter()) {
            let word = self.normalizer.normalize(word);
            words.push(&word);
            if self.options.char_feature {
                for c in word.chars() {
                    chars.insert(c);
                }
            }
        }

        for tag in labels.iter().flatten() {
            tags.push(tag);
        }

        self.vocab_word = words;
        self.vocab_char = chars;
        self.vocab_tag = tags;
        self
    }

    /// Map sentences to word-id (and optionally char-id) sequences and
    /// labels to tag ids.
    ///
    /// # Errors
    ///
    /// Returns `SeqprepError::UnknownTag` for any tag not seen during
    /// `fit`. Words have the unknown fallback; tags deliberately do not.
    pub fn transform(
        &self,
        sents: &[Vec<String>],
        labels: &[Vec<String>],
    ) -> Result<(Vec<SentenceFeatures>, Vec<Vec<usize>>)> {
        let unk = self
            .vocab_word
            .get(&self.options.specials.unknown)
            .unwrap_or(0);

        let mut features = Vec::with_capacity(sents.len());
        for sent in sents {
            let mut word_ids = Vec::with_capacity(sent.len());
            let mut char_ids = self
                .options
                .char_feature
                .then(|| Vec::with_capacity(sent.len()));

            for word in sent {
                let word = self.normalizer.normalize(word);
                word_ids.push(self.vocab_word.get(&word).unwrap_or(unk));
                if let Some(char_ids) = char_ids.as_mut() {
                    char_ids.push(self.vocab_char.encode(&word));
                }
            }
            features.push(SentenceFeatures { word_ids, char_ids });
        }

        let tag_ids = labels
            .iter()
            .map(|seq| {
                seq.iter()
                    .map(|tag| {
                        self.vocab_tag
                            .get(tag)
                            .ok_or_else(|| SeqprepError::UnknownTag(tag.clone()))
                    })
                    .collect::<Result<Vec<usize>>>()
            })
            .collect::<Result<Vec<_>>>()?;

        Ok((features, tag_ids))
    }

    /// Map tag ids back to their string tags.
    ///
    /// # Errors
    ///
    /// Returns `SeqprepError::TagIdOutOfRange` for ids outside the tag
    /// vocabulary.
    pub fn inverse_transform(&self, tag_ids: &[usize]) -> Result<Vec<String>> {
        tag_ids
            .iter()
            .map(|&id| {
                self.vocab_tag
                    .token(id)
                    .map(str::to_string)
                    .ok_or(SeqprepError::TagIdOutOfRange {
                        id,
                        num_tags: self.vocab_tag.len(),
                    })
            })
            .collect()
    }

    pub fn vocab_word(&self) -> &Vocabulary {
        &self.vocab_word
    }

    pub fn vocab_char(&self) -> &CharVocab {
        &self.vocab_char
    }

    pub fn vocab_tag(&self) -> &Vocabulary {
        &self.vocab_tag
    }

    /// Size of the tag vocabulary.
    pub fn num_tags(&self) -> usize {
        self.vocab_tag.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> (Vec<Vec<String>>, Vec<Vec<String>>) {
        let sents = vec![
            vec!["The".to_string(), "cat".to_string()],
            vec!["A".to_string(), "dog".to_string(), "ran".to_string()],
        ];
        let labels = vec![
            vec!["O".to_string(), "B-ANIMAL".to_string()],
            vec!["O".to_string(), "B-ANIMAL".to_string(), "O".to_string()],
        ];
        (sents, labels)
    }

    #[test]
    fn test_fit_seeds_unknown_at_zero() {
        let (sents, labels) = corpus();
        let mut pre = WordPreprocessor::new(PreprocessorOptions::default()).unwrap();
        pre.fit(&sents, &labels);

        assert_eq!(pre.vocab_word().get("<unk>"), Some(0));
        // First-seen order after the seed: the, cat, a, dog, ran.
        assert_eq!(pre.vocab_word().get("the"), Some(1));
        assert_eq!(pre.vocab_word().get("ran"), Some(5));
        // Tags are unseeded and first-seen.
        assert_eq!(pre.vocab_tag().get("O"), Some(0));
        assert_eq!(pre.vocab_tag().get("B-ANIMAL"), Some(1));
        assert_eq!(pre.num_tags(), 2);
        // Char index 0 stays reserved.
        assert_eq!(pre.vocab_char().get('t'), Some(1));
    }

    #[test]
    fn test_fit_is_idempotent() {
        let (sents, labels) = corpus();
        let mut pre = WordPreprocessor::new(PreprocessorOptions::default()).unwrap();
        pre.fit(&sents, &labels);
        let first = pre.vocab_word().clone();
        pre.fit(&sents, &labels);
        assert_eq!(*pre.vocab_word(), first);
    }

    #[test]
    fn test_transform_and_inverse_roundtrip_tags() {
        let (sents, labels) = corpus();
        let mut pre = WordPreprocessor::new(PreprocessorOptions::default()).unwrap();
        pre.fit(&sents, &labels);

        let (feats, tag_ids) = pre.transform(&sents, &labels).unwrap();
        assert_eq!(feats.len(), 2);
        assert_eq!(feats[1].word_ids.len(), 3);
        assert!(feats[0].char_ids.is_some());

        for (ids, original) in tag_ids.iter().zip(&labels) {
            assert_eq!(&pre.inverse_transform(ids).unwrap(), original);
        }
    }

    #[test]
    fn test_transform_oov_word_maps_to_unknown() {
        let (sents, labels) = corpus();
        let mut pre = WordPreprocessor::new(PreprocessorOptions::default()).unwrap();
        pre.fit(&sents, &labels);

        let oov = vec![vec!["zebra".to_string()]];
        let (feats, _) = pre.transform(&oov, &[vec!["O".to_string()]]).unwrap();
        assert_eq!(feats[0].word_ids, vec![0]);
    }

    #[test]
    fn test_transform_unknown_tag_fails() {
        let (sents, labels) = corpus();
        let mut pre = WordPreprocessor::new(PreprocessorOptions::default()).unwrap();
        pre.fit(&sents, &labels);

        let err = pre
            .transform(&sents[..1].to_vec(), &[vec!["B-PLANT".to_string(), "O".to_string()]])
            .unwrap_err();
        assert!(matches!(err, SeqprepError::UnknownTag(t) if t == "B-PLANT"));
    }

    #[test]
    fn test_inverse_transform_out_of_range() {
        let (sents, labels) = corpus();
        let mut pre = WordPreprocessor::new(PreprocessorOptions::default()).unwrap();
        pre.fit(&sents, &labels);

        let err = pre.inverse_transform(&[7]).unwrap_err();
        assert!(matches!(
            err,
            SeqprepError::TagIdOutOfRange { id: 7, num_tags: 2 }
        ));
    }

    #[test]
    fn test_vocab_init_union() {
        let (sents, labels) = corpus();
        let options = PreprocessorOptions::default()
            .with_vocab_init(vec!["Zebra".to_string()]);
        let mut pre = WordPreprocessor::new(options).unwrap();
        pre.fit(&sents, &labels);

        assert!(pre.vocab_word().contains("zebra"));
        // Seed words contribute characters too.
        assert!(pre.vocab_char().get('z').is_some());
    }

    #[test]
    fn test_char_feature_disabled() {
        let (sents, labels) = corpus();
        let options = PreprocessorOptions::default().with_char_feature(false);
        let mut pre = WordPreprocessor::new(options).unwrap();
        pre.fit(&sents, &labels);

        let (feats, _) = pre.transform(&sents, &labels).unwrap();
        assert!(feats[0].char_ids.is_none());
        // Only the reserved slot.
        assert_eq!(pre.vocab_char().len(), 1);
    }

    #[test]
    fn test_digit_folding_merges_numbers() {
        let sents = vec![vec!["12".to_string()], vec!["９８".to_string()]];
        let labels = vec![vec!["O".to_string()], vec!["O".to_string()]];
        let mut pre = WordPreprocessor::new(PreprocessorOptions::default()).unwrap();
        pre.fit(&sents, &labels);

        let (feats, _) = pre.transform(&sents, &labels).unwrap();
        // Both surface forms share the "00" slot.
        assert_eq!(feats[0].word_ids, feats[1].word_ids);
    }
}
