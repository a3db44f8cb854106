//! # Vocabularies
//!
//! Ordered token→index mappings for words, characters and tags, persisted
//! as one-token-per-line text files and reloaded by line order
//! (index = line number). Also hosts the corpus-level vocabulary builder,
//! which can intersect the word vocabulary with a pretrained embedding
//! vocabulary to bound memory and guarantee embedding coverage.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::dataset::Split;
use crate::error::Result;
use crate::normalize::Normalizer;

/// Reserved tokens, passed through configuration rather than held as
/// ambient module state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialTokens {
    /// Stands in for any out-of-vocabulary word.
    pub unknown: String,
    /// Fills sequences to a fixed length.
    pub padding: String,
    /// Canonical placeholder produced by digit folding.
    pub number: String,
}

impl Default for SpecialTokens {
    fn default() -> Self {
        Self {
            unknown: "<unk>".to_string(),
            padding: "<pad>".to_string(),
            number: "<num>".to_string(),
        }
    }
}

/// Ordered mapping from token to a unique contiguous index starting at 0.
///
/// Immutable once built or loaded; the builder inserts in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    tokens: Vec<String>,
    index: HashMap<String, usize>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a vocabulary from tokens, assigning indices in iteration
    /// order. Duplicates keep their first index.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut vocab = Self::new();
        for token in tokens {
            vocab.push(&token.into());
        }
        vocab
    }

    /// Insert a token if absent and return its index.
    pub fn push(&mut self, token: &str) -> usize {
        if let Some(&id) = self.index.get(token) {
            return id;
        }
        let id = self.tokens.len();
        self.tokens.push(token.to_string());
        self.index.insert(token.to_string(), id);
        id
    }

    /// Index of a token, if present.
    pub fn get(&self, token: &str) -> Option<usize> {
        self.index.get(token).copied()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.index.contains_key(token)
    }

    /// Token at an index, if in range.
    pub fn token(&self, id: usize) -> Option<&str> {
        self.tokens.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterate tokens in index order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    /// Load a vocabulary from a one-token-per-line file.
    /// The line number becomes the index.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let mut vocab = Self::new();
        for line in reader.lines() {
            vocab.push(&line?);
        }
        info!(tokens = vocab.len(), "loaded vocabulary");
        Ok(vocab)
    }

    /// Write the vocabulary as a one-token-per-line file, in index order.
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        for token in &self.tokens {
            writeln!(writer, "{token}")?;
        }
        writer.flush()?;
        Ok(())
    }
}

/// Character vocabulary for encoding tokens.
///
/// `with_reserved_slot` keeps index 0 free so character padding never
/// collides with a real character id.
#[derive(Debug, Clone, Default)]
pub struct CharVocab {
    index: HashMap<char, usize>,
    size: usize,
}

impl CharVocab {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty vocabulary whose first inserted character gets index 1,
    /// reserving 0 for padding/unknown.
    pub fn with_reserved_slot() -> Self {
        Self {
            index: HashMap::new(),
            size: 1,
        }
    }

    /// Build from characters in iteration order, no reserved slot.
    pub fn from_chars<I: IntoIterator<Item = char>>(chars: I) -> Self {
        let mut vocab = Self::new();
        for c in chars {
            vocab.insert(c);
        }
        vocab
    }

    /// Insert a character if absent and return its index.
    pub fn insert(&mut self, c: char) -> usize {
        if let Some(&id) = self.index.get(&c) {
            return id;
        }
        let id = self.size;
        self.index.insert(c, id);
        self.size += 1;
        id
    }

    /// Index of a character, if present.
    pub fn get(&self, c: char) -> Option<usize> {
        self.index.get(&c).copied()
    }

    /// Encode a token as character indices.
    ///
    /// Characters absent from the vocabulary are silently skipped, not
    /// substituted with an unknown id.
    pub fn encode(&self, token: &str) -> Vec<usize> {
        token.chars().filter_map(|c| self.get(c)).collect()
    }

    /// Number of indices, reserved slot included.
    pub fn len(&self) -> usize {
        self.size
    }

    /// True when no characters have been inserted; a reserved slot alone
    /// does not count.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Load from a one-character-per-line file; line number = index.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let mut vocab = Self::new();
        for line in reader.lines() {
            if let Some(c) = line?.chars().next() {
                vocab.insert(c);
            }
        }
        info!(chars = vocab.len(), "loaded character vocabulary");
        Ok(vocab)
    }

    /// Write as a one-character-per-line file, in index order.
    ///
    /// Only meaningful for vocabularies without a reserved slot, i.e. the
    /// ones produced by [`build_vocab`]; round-tripping preserves indices.
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut ordered: Vec<(usize, char)> =
            self.index.iter().map(|(&c, &id)| (id, c)).collect();
        ordered.sort_unstable();

        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        for (_, c) in ordered {
            writeln!(writer, "{c}")?;
        }
        writer.flush()?;
        Ok(())
    }
}

/// The three vocabularies used by a sequence-labeling model.
#[derive(Debug, Clone, Default)]
pub struct VocabSet {
    pub words: Vocabulary,
    pub chars: CharVocab,
    pub tags: Vocabulary,
}

/// Standard vocabulary file locations inside a save directory.
pub fn vocab_paths<P: AsRef<Path>>(dir: P) -> (PathBuf, PathBuf, PathBuf) {
    let dir = dir.as_ref();
    (
        dir.join("words.txt"),
        dir.join("chars.txt"),
        dir.join("tags.txt"),
    )
}

/// Load all three vocabularies from a save directory.
pub fn load_vocab<P: AsRef<Path>>(dir: P) -> Result<VocabSet> {
    let (word_file, char_file, tag_file) = vocab_paths(dir);
    Ok(VocabSet {
        words: Vocabulary::from_file(word_file)?,
        chars: CharVocab::from_file(char_file)?,
        tags: Vocabulary::from_file(tag_file)?,
    })
}

/// Read the set of words covered by a pretrained embedding file
/// (first whitespace-separated token of every line).
pub fn load_embedding_vocab<P: AsRef<Path>>(path: P) -> Result<HashSet<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut vocab = HashSet::new();
    for line in reader.lines() {
        let line = line?;
        if let Some(word) = line.split_whitespace().next() {
            vocab.insert(word.to_string());
        }
    }
    info!(words = vocab.len(), "loaded embedding vocabulary");
    Ok(vocab)
}

/// Build the word/char/tag vocabularies from one or more splits, write
/// them under `save_dir`, and reload them so the returned mappings are
/// exactly what the files say.
///
/// Words are lowercased and collected in sorted order; characters come
/// from `char_source` only (conventionally the train split). When an
/// embedding vocabulary is given, the word set is intersected with it and
/// the `unknown`/`number` specials are re-added so they always keep a
/// slot. An optional seed vocabulary is unioned into the word set.
pub fn build_vocab(
    splits: &[&Split],
    char_source: &Split,
    embedding_vocab: Option<&HashSet<String>>,
    seed: Option<&[String]>,
    specials: &SpecialTokens,
    save_dir: &Path,
) -> Result<VocabSet> {
    let normalizer = Normalizer::new(true, false)?;

    let mut words: BTreeSet<String> = BTreeSet::new();
    let mut tags: BTreeSet<String> = BTreeSet::new();
    for split in splits {
        for (sent, labels) in split.sents.iter().zip(&split.labels) {
            words.extend(sent.iter().map(|w| normalizer.normalize(w)));
            tags.extend(labels.iter().cloned());
        }
    }
    if let Some(seed) = seed {
        words.extend(seed.iter().map(|w| normalizer.normalize(w)));
    }

    let mut chars: BTreeSet<char> = BTreeSet::new();
    for sent in &char_source.sents {
        for word in sent {
            chars.extend(word.chars());
        }
    }

    if let Some(known) = embedding_vocab {
        words.retain(|w| known.contains(w));
    }
    // The specials must keep a slot even when the intersection drops them.
    words.insert(specials.unknown.clone());
    words.insert(specials.number.clone());

    info!(
        words = words.len(),
        chars = chars.len(),
        tags = tags.len(),
        "built vocabularies"
    );

    let (word_file, char_file, tag_file) = vocab_paths(save_dir);
    Vocabulary::from_tokens(words).write_to(&word_file)?;
    CharVocab::from_chars(chars).write_to(&char_file)?;
    Vocabulary::from_tokens(tags).write_to(&tag_file)?;

    // Reload so the in-memory view and the files agree by construction.
    load_vocab(save_dir)
}
