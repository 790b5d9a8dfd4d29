//! Error taxonomy and decode results.

use medi_hl7_ast::{Document, SegmentRole};
use medi_hl7_lexer::{HeaderError, LexError};
use thiserror::Error;

/// Problems found while decoding a message.
///
/// `MalformedHeader` and `UnsupportedMessageType` stop decoding at once.
/// `MissingMandatorySegment` is collected after every line has been read.
/// The remaining variants are warnings: the offending line is skipped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The header segment is missing or does not declare usable control
    /// characters.
    #[error("malformed header segment: {0}")]
    MalformedHeader(String),

    /// A line whose three-letter code is not a known segment.
    #[error("line {line}: unrecognized segment header {header:?}")]
    UnrecognizedSegmentHeader {
        /// 1-based segment line.
        line: usize,
        /// The three characters read as the code.
        header: String,
    },

    /// A line too short to carry a segment code.
    #[error("line {line}: segment too short to carry a header: {text:?}")]
    TruncatedSegment {
        /// 1-based segment line.
        line: usize,
        /// The whole line.
        text: String,
    },

    /// A second header segment inside the same message.
    #[error("line {line}: repeated MSH segment ignored")]
    RepeatedHeader {
        /// 1-based segment line.
        line: usize,
    },

    /// A segment the message type requires was never seen.
    #[error("missing mandatory segment {0}")]
    MissingMandatorySegment(SegmentRole),

    /// The (message type, trigger event) pair has no decoder.
    #[error("unsupported message type {message_type}^{trigger_event}")]
    UnsupportedMessageType {
        /// `MSH-9.1`, empty when absent.
        message_type: String,
        /// `MSH-9.2`, empty when absent.
        trigger_event: String,
    },
}

impl DecodeError {
    /// True for conditions that abort decoding before the rest of the
    /// message is read.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            DecodeError::MalformedHeader(_) | DecodeError::UnsupportedMessageType { .. }
        )
    }

    /// True for conditions that skip a line and let decoding continue.
    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            DecodeError::UnrecognizedSegmentHeader { .. }
                | DecodeError::TruncatedSegment { .. }
                | DecodeError::RepeatedHeader { .. }
        )
    }

    pub(crate) fn from_header_error(line: usize, err: HeaderError) -> Self {
        match err {
            HeaderError::TooShort(text) => DecodeError::TruncatedSegment { line, text },
            HeaderError::Unrecognized(header) => {
                DecodeError::UnrecognizedSegmentHeader { line, header }
            }
        }
    }
}

impl From<LexError> for DecodeError {
    fn from(err: LexError) -> Self {
        match err {
            LexError::MalformedHeader(msg) => DecodeError::MalformedHeader(msg),
        }
    }
}

/// A successfully decoded message and the lines that were skipped on the
/// way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    /// The decoded message.
    pub document: Document,
    /// Skipped lines, in message order.
    pub warnings: Vec<DecodeError>,
}

/// A message that could not be fully decoded.
///
/// `partial` is `None` when decoding stopped at the header, and holds the
/// document built so far when every line was read but mandatory segments
/// were missing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to decode message: {}", summary(.errors))]
pub struct ParseFailure {
    /// Either one fatal error, or every missing mandatory segment.
    pub errors: Vec<DecodeError>,
    /// The document built before decoding stopped, if any.
    pub partial: Option<Document>,
}

impl ParseFailure {
    pub(crate) fn fatal(error: DecodeError) -> Self {
        Self {
            errors: vec![error],
            partial: None,
        }
    }

    /// The roles reported missing, in the order they were checked.
    pub fn missing_segments(&self) -> Vec<SegmentRole> {
        self.errors
            .iter()
            .filter_map(|e| match e {
                DecodeError::MissingMandatorySegment(role) => Some(*role),
                _ => None,
            })
            .collect()
    }
}

fn summary(errors: &[DecodeError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
