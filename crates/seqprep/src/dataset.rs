//! # Tagged Corpora
//!
//! Sentence/label containers for the preprocessing pipeline, plus a loader
//! for CoNLL-style files (one `token<TAB>tag` pair per line, blank line
//! between sentences).

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::Result;

/// One partition of a dataset: parallel sentences and tag sequences.
///
/// `sents[i]` and `labels[i]` always have equal length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Split {
    pub sents: Vec<Vec<String>>,
    pub labels: Vec<Vec<String>>,
}

impl Split {
    pub fn new(sents: Vec<Vec<String>>, labels: Vec<Vec<String>>) -> Self {
        debug_assert_eq!(sents.len(), labels.len());
        Self { sents, labels }
    }

    /// Number of sentences in the split.
    pub fn len(&self) -> usize {
        self.sents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sents.is_empty()
    }

    /// Load a split from a CoNLL-style tagged file.
    ///
    /// Each non-empty line holds a token and its tag separated by
    /// whitespace; when a line carries extra columns, the first column is
    /// the token and the last is the tag. Blank lines end a sentence.
    /// Lines starting with `#` or `-DOCSTART-` are skipped.
    pub fn from_conll_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        let mut sents = Vec::new();
        let mut labels = Vec::new();
        let mut current_tokens: Vec<String> = Vec::new();
        let mut current_tags: Vec<String> = Vec::new();

        for line in reader.lines() {
            let line = line?;
            let line = line.trim();

            if line.is_empty() {
                if !current_tokens.is_empty() {
                    sents.push(std::mem::take(&mut current_tokens));
                    labels.push(std::mem::take(&mut current_tags));
                }
                continue;
            }

            if line.starts_with('#') || line.starts_with("-DOCSTART-") {
                continue;
            }

            let mut parts = line.split_whitespace();
            let token = parts.next();
            // Lines without a tag column are skipped.
            if let (Some(token), Some(tag)) = (token, parts.last()) {
                current_tokens.push(token.to_string());
                current_tags.push(tag.to_string());
            }
        }

        // Don't forget the last sentence
        if !current_tokens.is_empty() {
            sents.push(current_tokens);
            labels.push(current_tags);
        }

        Ok(Self { sents, labels })
    }
}

/// A dataset partitioned into train/validation/test splits.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub train: Split,
    pub valid: Split,
    pub test: Split,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_split_len() {
        let split = Split::new(
            vec![vec!["a".into(), "b".into()]],
            vec![vec!["O".into(), "O".into()]],
        );
        assert_eq!(split.len(), 1);
        assert!(!split.is_empty());
    }

    #[test]
    fn test_load_conll_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("train.conll");
        let mut f = File::create(&path).unwrap();
        writeln!(f, "# a comment").unwrap();
        writeln!(f, "-DOCSTART- -X- O O").unwrap();
        writeln!(f, "The\tO").unwrap();
        writeln!(f, "cat\tB-ANIMAL").unwrap();
        writeln!(f).unwrap();
        writeln!(f, "EU NNP B-ORG").unwrap();
        writeln!(f, "rejects VBZ O").unwrap();
        drop(f);

        let split = Split::from_conll_file(&path).unwrap();
        assert_eq!(split.len(), 2);
        assert_eq!(split.sents[0], vec!["The", "cat"]);
        assert_eq!(split.labels[0], vec!["O", "B-ANIMAL"]);
        // Extra columns: first is the token, last is the tag.
        assert_eq!(split.sents[1], vec!["EU", "rejects"]);
        assert_eq!(split.labels[1], vec!["B-ORG", "O"]);
    }

    #[test]
    fn test_last_sentence_without_trailing_blank() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tail.conll");
        std::fs::write(&path, "a\tO\nb\tB-X").unwrap();

        let split = Split::from_conll_file(&path).unwrap();
        assert_eq!(split.len(), 1);
        assert_eq!(split.labels[0], vec!["O", "B-X"]);
    }
}
