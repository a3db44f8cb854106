//! Pipeline configuration.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Configuration for the preprocessing pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Maximum sentence length in words; longer sentences are truncated.
    pub num_steps: usize,
    /// Maximum word length in characters.
    pub max_word_len: usize,
    /// Dimension of the pretrained embedding vectors.
    pub embedding_dim: usize,
    /// Path to the pretrained embedding file, if any.
    pub embeddings_path: Option<PathBuf>,
    /// Directory holding words.txt / chars.txt / tags.txt.
    pub save_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            num_steps: 50,
            max_word_len: 20,
            embedding_dim: 100,
            embeddings_path: None,
            save_dir: PathBuf::from("data/vocab"),
        }
    }
}

impl Config {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Set the maximum sentence length.
    pub fn with_num_steps(mut self, num_steps: usize) -> Self {
        self.num_steps = num_steps;
        self
    }

    /// Set the maximum word length.
    pub fn with_max_word_len(mut self, max_word_len: usize) -> Self {
        self.max_word_len = max_word_len;
        self
    }

    /// Set the embedding dimension.
    pub fn with_embedding_dim(mut self, embedding_dim: usize) -> Self {
        self.embedding_dim = embedding_dim;
        self
    }

    /// Set the pretrained embedding file path.
    pub fn with_embeddings_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.embeddings_path = Some(path.into());
        self
    }

    /// Set the vocabulary save directory.
    pub fn with_save_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.save_dir = dir.into();
        self
    }
}
