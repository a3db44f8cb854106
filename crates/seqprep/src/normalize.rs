//! # Token Normalization
//!
//! Lowercasing and digit folding applied before vocabulary lookup, so that
//! surface variants of the same token share one vocabulary slot. Both the
//! functional [`WordProcessor`](crate::processing::WordProcessor) and the
//! stateful [`WordPreprocessor`](crate::preprocessor::WordPreprocessor)
//! route every token through this one implementation.

use regex::Regex;

use crate::error::Result;

/// Token normalizer with pre-compiled digit pattern.
#[derive(Debug, Clone)]
pub struct Normalizer {
    lowercase: bool,
    fold_digits: bool,
    re_digits: Regex,
}

impl Normalizer {
    /// Constructs a normalizer.
    ///
    /// # Errors
    ///
    /// Returns `SeqprepError::Regex` if the digit pattern fails to compile
    /// (should never happen with the static pattern defined here).
    pub fn new(lowercase: bool, fold_digits: bool) -> Result<Self> {
        Ok(Self {
            lowercase,
            fold_digits,
            // ASCII digits plus the full-width glyphs U+FF10..=U+FF19.
            re_digits: Regex::new(r"[0-9０-９]")?,
        })
    }

    /// Whether lowercasing is applied.
    pub fn lowercase(&self) -> bool {
        self.lowercase
    }

    /// Whether digit folding is applied.
    pub fn fold_digits(&self) -> bool {
        self.fold_digits
    }

    /// Normalize a single token. Pure and idempotent.
    pub fn normalize(&self, token: &str) -> String {
        let token = if self.lowercase {
            token.to_lowercase()
        } else {
            token.to_string()
        };
        if self.fold_digits {
            self.re_digits.replace_all(&token, "0").into_owned()
        } else {
            token
        }
    }
}
