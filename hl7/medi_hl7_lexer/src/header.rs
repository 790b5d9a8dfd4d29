//! Segment splitting and segment-header recognition.

use std::iter;

use crate::error::HeaderError;
use crate::segment_code::SegmentCode;

/// The header of one segment line, split from its body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentHeader<'a> {
    /// The recognized code.
    pub code: SegmentCode,
    /// The three characters the code was read from.
    pub name: &'a str,
    /// Everything after the header.
    ///
    /// For `MSH` this starts at offset 3, so the body still begins with the
    /// field separator and the encoding characters. For every other segment
    /// it starts at offset 4, past the field separator following the code.
    pub body: &'a str,
}

/// Read the three-letter code that opens `line`.
///
/// An unrecognized code is reported as a value so callers can decide to
/// skip the line; it never aborts anything on its own.
pub fn read_segment_header(line: &str) -> Result<SegmentHeader<'_>, HeaderError> {
    let code_end = line
        .char_indices()
        .map(|(i, _)| i)
        .chain(iter::once(line.len()))
        .nth(3)
        .ok_or_else(|| HeaderError::TooShort(line.to_string()))?;

    let name = &line[..code_end];
    let code =
        SegmentCode::recognize(name).ok_or_else(|| HeaderError::Unrecognized(name.to_string()))?;

    let after = &line[code_end..];
    let body = if code == SegmentCode::Msh {
        after
    } else {
        let mut rest = after.chars();
        rest.next();
        rest.as_str()
    };

    #[cfg(feature = "logging")]
    log::trace!("segment header {name} ({code:?}), body length {}", body.len());

    Ok(SegmentHeader { code, name, body })
}

/// Split message text into segment lines.
///
/// `\r`, `\n` and `\r\n` all terminate a segment; blank lines are dropped.
/// Each item carries its 1-based position among the non-blank segments.
pub fn segment_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.split(['\r', '\n'])
        .filter(|line| !line.is_empty())
        .enumerate()
        .map(|(index, line)| (index + 1, line))
}
