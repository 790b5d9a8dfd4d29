//! Medi HL7 v2 lexical layer
//!
//! This crate owns everything about an HL7 v2 message that can be decided
//! without knowing what a field means: the five control characters declared
//! by the header segment, escape-sequence decoding, and recognition of the
//! three-letter segment code that opens every line.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod encoding;
pub mod error;
pub mod escape;
pub mod header;
pub mod segment_code;

// Re-export the main types for convenience
pub use encoding::EncodingCharacters;
pub use error::{HeaderError, LexError};
pub use escape::{escape, unescape, EscapeCode, EscapePolicy};
pub use header::{read_segment_header, segment_lines, SegmentHeader};
pub use segment_code::SegmentCode;
