//! Decoder configuration.

use medi_hl7_lexer::{EncodingCharacters, EscapePolicy};

/// Configuration for decoding messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecoderConfig {
    /// How escape sequences inside leaf text are substituted
    pub escape_policy: EscapePolicy,
    /// Whether trailing spaces and tabs are stripped from each segment line
    pub trim_trailing_whitespace: bool,
    /// Control characters for decoders invoked without a header.
    /// Message parses ignore this and use the header's characters.
    pub encoding_override: Option<EncodingCharacters>,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            escape_policy: EscapePolicy::AllOccurrences,
            trim_trailing_whitespace: true,
            encoding_override: None,
        }
    }
}

impl DecoderConfig {
    /// Same as [`DecoderConfig::default`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the escape policy.
    pub fn with_escape_policy(mut self, escape_policy: EscapePolicy) -> Self {
        self.escape_policy = escape_policy;
        self
    }

    /// Enable or disable trailing whitespace stripping.
    pub fn with_trim_trailing_whitespace(mut self, trim: bool) -> Self {
        self.trim_trailing_whitespace = trim;
        self
    }

    /// Set the characters used by standalone decoder calls.
    pub fn with_encoding_override(mut self, encoding: EncodingCharacters) -> Self {
        self.encoding_override = Some(encoding);
        self
    }

    /// The characters standalone decoders use.
    pub fn standalone_encoding(&self) -> EncodingCharacters {
        self.encoding_override.unwrap_or_default()
    }
}
