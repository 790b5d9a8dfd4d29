//! Error types for the lexical layer.

/// Fatal problems found while discovering a message's control characters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    /// The header segment is absent, empty, truncated, or declares
    /// control characters that collide with each other.
    #[error("malformed header segment: {0}")]
    MalformedHeader(String),
}

/// Why a line could not be read as a segment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HeaderError {
    /// Fewer than three characters were present on the line.
    #[error("segment too short to carry a header: {0:?}")]
    TooShort(String),
    /// The three-letter code is neither registered nor a `Z` extension.
    #[error("unrecognized segment header: {0}")]
    Unrecognized(String),
}
