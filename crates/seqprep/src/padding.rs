//! # Padding and One-Hot Expansion
//!
//! Turns ragged id sequences into rectangular `ndarray` arrays ready for
//! batched numeric processing. Padding is always "post": the array tail
//! holds the padding, and truncation keeps the sequence prefix.

use ndarray::{Array2, Array3};

/// Right-pad each sentence of word ids with 0 up to `max_len`, truncating
/// longer sentences. Output shape: (sentences, `max_len`).
pub fn pad_word_ids(sentences: &[Vec<usize>], max_len: usize) -> Array2<usize> {
    let mut out = Array2::zeros((sentences.len(), max_len));
    for (i, sent) in sentences.iter().enumerate() {
        for (j, &id) in sent.iter().take(max_len).enumerate() {
            out[[i, j]] = id;
        }
    }
    out
}

/// Pad label sequences like [`pad_word_ids`], then expand each label to a
/// one-hot vector of width `num_tags`. Padded steps are one-hot at index 0.
/// Output shape: (sentences, `max_len`, `num_tags`).
pub fn to_onehot(label_seqs: &[Vec<usize>], max_len: usize, num_tags: usize) -> Array3<f32> {
    let mut out = Array3::zeros((label_seqs.len(), max_len, num_tags));
    for (i, labels) in label_seqs.iter().enumerate() {
        for j in 0..max_len {
            let tag = labels.get(j).copied().unwrap_or(0);
            debug_assert!(tag < num_tags);
            out[[i, j, tag]] = 1.0;
        }
    }
    out
}

/// Zero-pad each word's character ids to `max_word_len`, right-truncating.
pub fn pad_word_chars(words: &[Vec<usize>], max_word_len: usize) -> Vec<Vec<usize>> {
    words
        .iter()
        .map(|word| {
            let mut padded = word.clone();
            padded.resize(max_word_len, 0);
            padded
        })
        .collect()
}

/// Pad a sentence of already character-padded words up to `max_sent_len`
/// with all-zero filler words, truncating any excess.
pub fn pad_sentence_words(
    mut words: Vec<Vec<usize>>,
    max_word_len: usize,
    max_sent_len: usize,
) -> Vec<Vec<usize>> {
    words.resize(max_sent_len, vec![0; max_word_len]);
    words
}

/// Build the full character-level batch: character padding per word, then
/// sentence-level padding over words.
/// Output shape: (sentences, `max_sent_len`, `max_word_len`).
pub fn pad_char_ids(
    sentences: &[Vec<Vec<usize>>],
    max_word_len: usize,
    max_sent_len: usize,
) -> Array3<usize> {
    let mut out = Array3::zeros((sentences.len(), max_sent_len, max_word_len));
    for (i, sent) in sentences.iter().enumerate() {
        let words = pad_sentence_words(
            pad_word_chars(sent, max_word_len),
            max_word_len,
            max_sent_len,
        );
        for (j, word) in words.iter().enumerate() {
            for (k, &id) in word.iter().enumerate() {
                out[[i, j, k]] = id;
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_word_ids_shorter_sentence() {
        let padded = pad_word_ids(&[vec![5, 6]], 4);
        assert_eq!(padded.shape(), &[1, 4]);
        assert_eq!(padded.row(0).to_vec(), vec![5, 6, 0, 0]);
    }

    #[test]
    fn test_pad_word_ids_truncates_to_prefix() {
        let padded = pad_word_ids(&[vec![1, 2, 3, 4, 5]], 3);
        assert_eq!(padded.row(0).to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_onehot_rows_sum_to_one() {
        let onehot = to_onehot(&[vec![2, 0], vec![1]], 3, 4);
        assert_eq!(onehot.shape(), &[2, 3, 4]);

        for i in 0..2 {
            for j in 0..3 {
                let row: Vec<f32> = (0..4).map(|k| onehot[[i, j, k]]).collect();
                assert_eq!(row.iter().sum::<f32>(), 1.0);
            }
        }
        // The 1 sits at the original label id.
        assert_eq!(onehot[[0, 0, 2]], 1.0);
        assert_eq!(onehot[[0, 1, 0]], 1.0);
        assert_eq!(onehot[[1, 0, 1]], 1.0);
        // Padded step is one-hot at index 0.
        assert_eq!(onehot[[1, 2, 0]], 1.0);
    }

    #[test]
    fn test_pad_word_chars() {
        let padded = pad_word_chars(&[vec![3, 4], vec![1, 2, 3, 4, 5]], 4);
        assert_eq!(padded[0], vec![3, 4, 0, 0]);
        assert_eq!(padded[1], vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_pad_sentence_words() {
        let words = vec![vec![1, 0], vec![2, 3]];
        let padded = pad_sentence_words(words, 2, 4);
        assert_eq!(padded.len(), 4);
        assert_eq!(padded[2], vec![0, 0]);

        let truncated = pad_sentence_words(vec![vec![1, 0], vec![2, 3], vec![4, 5]], 2, 2);
        assert_eq!(truncated, vec![vec![1, 0], vec![2, 3]]);
    }

    #[test]
    fn test_pad_char_ids_is_rectangular() {
        let sents = vec![
            vec![vec![1, 2, 3], vec![4]],
            vec![vec![5]],
        ];
        let batch = pad_char_ids(&sents, 2, 3);
        assert_eq!(batch.shape(), &[2, 3, 2]);
        // First word truncated to its prefix.
        assert_eq!(batch[[0, 0, 0]], 1);
        assert_eq!(batch[[0, 0, 1]], 2);
        // Short word zero-padded.
        assert_eq!(batch[[0, 1, 0]], 4);
        assert_eq!(batch[[0, 1, 1]], 0);
        // Filler word is all zeros.
        assert_eq!(batch[[1, 2, 0]], 0);
    }

    // The worked example from the pipeline docs: two sentences, three
    // steps, tag one-hots of shape (2, 3, num_tags).
    #[test]
    fn test_two_sentence_batch() {
        let word_ids = vec![vec![1, 2], vec![3, 4, 5]];
        let tag_ids = vec![vec![0, 1], vec![0, 1, 0]];

        let x = pad_word_ids(&word_ids, 3);
        assert_eq!(x.row(0).to_vec(), vec![1, 2, 0]);
        assert_eq!(x.row(1).to_vec(), vec![3, 4, 5]);

        let y = to_onehot(&tag_ids, 3, 2);
        assert_eq!(y.shape(), &[2, 3, 2]);
        assert_eq!(y[[0, 1, 1]], 1.0);
        assert_eq!(y[[1, 2, 0]], 1.0);
    }
}
