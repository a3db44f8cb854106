//! # Seqprep
//!
//! Vocabulary construction and numeric feature preprocessing for word- and
//! character-level sequence labeling (NER-style BIO tagging). Converts raw
//! tokenized sentences and tag sequences into fixed-width integer arrays
//! for a neural network, and manages the word/char/tag vocabularies,
//! including alignment with pretrained word embeddings.
//!
//! ## Quick Start
//!
//! ```rust
//! use seqprep::{PreprocessorOptions, WordPreprocessor};
//!
//! let sents = vec![
//!     vec!["The".to_string(), "cat".to_string()],
//!     vec!["A".to_string(), "dog".to_string(), "ran".to_string()],
//! ];
//! let labels = vec![
//!     vec!["O".to_string(), "B-ANIMAL".to_string()],
//!     vec!["O".to_string(), "B-ANIMAL".to_string(), "O".to_string()],
//! ];
//!
//! let mut pre = WordPreprocessor::new(PreprocessorOptions::default()).unwrap();
//! pre.fit(&sents, &labels);
//!
//! let (features, tag_ids) = pre.transform(&sents, &labels).unwrap();
//! assert_eq!(features[1].word_ids.len(), 3);
//! assert_eq!(pre.inverse_transform(&tag_ids[0]).unwrap(), labels[0]);
//! ```
pub mod config;
pub mod dataset;
pub mod embeddings;
pub mod error;
pub mod normalize;
pub mod padding;
pub mod preprocessor;
pub mod processing;
pub mod vocab;

// Re-export primary API
pub use config::Config;
pub use dataset::{Dataset, Split};
pub use embeddings::load_embeddings;
pub use error::{Result, SeqprepError};
pub use normalize::Normalizer;
pub use padding::{pad_char_ids, pad_sentence_words, pad_word_chars, pad_word_ids, to_onehot};
pub use preprocessor::{PreprocessorOptions, SentenceFeatures, WordPreprocessor};
pub use processing::{WordFeatures, WordProcessor};
pub use vocab::{
    CharVocab, SpecialTokens, VocabSet, Vocabulary, build_vocab, load_embedding_vocab, load_vocab,
    vocab_paths,
};
