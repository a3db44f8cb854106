//! # Pretrained Embedding Loader
//!
//! Reads a GloVe-style text file (`word v1 v2 … vD` per line) into a dense
//! matrix aligned by vocabulary index. Words absent from the file keep a
//! zero row; file words absent from the vocabulary are ignored.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use ndarray::Array2;
use tracing::info;

use crate::error::{Result, SeqprepError};
use crate::vocab::Vocabulary;

/// Load pretrained word vectors into a (|vocab| × `dim`) matrix, row *i*
/// holding the vector for the word at vocabulary index *i*.
///
/// # Errors
///
/// Propagates I/O failures, and returns `SeqprepError::MalformedEmbedding`
/// when a line for an in-vocabulary word does not parse into exactly `dim`
/// floats. No normalization is applied.
pub fn load_embeddings<P: AsRef<Path>>(
    vocab: &Vocabulary,
    path: P,
    dim: usize,
) -> Result<Array2<f32>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut matrix = Array2::<f32>::zeros((vocab.len(), dim));
    let mut filled = 0usize;

    for (line_idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = line_idx + 1;

        let mut parts = line.split_whitespace();
        let Some(word) = parts.next() else { continue };
        let Some(idx) = vocab.get(word) else { continue };

        let values = parts
            .map(|v| {
                v.parse::<f32>().map_err(|e| SeqprepError::MalformedEmbedding {
                    line_no,
                    reason: format!("{v:?}: {e}"),
                })
            })
            .collect::<Result<Vec<f32>>>()?;

        if values.len() != dim {
            return Err(SeqprepError::MalformedEmbedding {
                line_no,
                reason: format!("expected {dim} values, found {}", values.len()),
            });
        }

        let mut row = matrix.row_mut(idx);
        for (d, value) in values.into_iter().enumerate() {
            row[d] = value;
        }
        filled += 1;
    }

    info!(rows = filled, total = vocab.len(), "loaded pretrained embeddings");
    Ok(matrix)
}
