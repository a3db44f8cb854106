use thiserror::Error;

/// Errors that can occur during seqprep operations.
#[derive(Debug, Error)]
pub enum SeqprepError {
    /// An underlying filesystem read or write failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A regex pattern failed to compile (should not happen with static patterns).
    #[error("regex compilation error: {0}")]
    Regex(#[from] regex::Error),

    /// A configuration file could not be parsed.
    #[error("config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// An embedding file line could not be parsed into a vector of the
    /// expected dimension.
    #[error("malformed embedding line {line_no}: {reason}")]
    MalformedEmbedding {
        /// 1-based line number in the embedding file.
        line_no: usize,
        /// What went wrong on that line.
        reason: String,
    },

    /// A tag was seen at transform time that was not present at fit time.
    /// Unlike words, tags have no UNKNOWN fallback.
    #[error("tag not present in fitted vocabulary: {0:?}")]
    UnknownTag(String),

    /// A tag id passed to `inverse_transform` is outside the tag vocabulary.
    #[error("tag id {id} out of range for {num_tags} tags")]
    TagIdOutOfRange {
        /// The offending id.
        id: usize,
        /// Size of the tag vocabulary.
        num_tags: usize,
    },
}

/// Result type alias for seqprep operations.
pub type Result<T> = std::result::Result<T, SeqprepError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = SeqprepError::UnknownTag("B-MISC".into());
        assert!(err.to_string().contains("B-MISC"));

        let err = SeqprepError::TagIdOutOfRange { id: 9, num_tags: 3 };
        assert_eq!(err.to_string(), "tag id 9 out of range for 3 tags");
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SeqprepError>();
    }
}
