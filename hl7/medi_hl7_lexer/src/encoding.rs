//! The five control characters that govern one HL7 v2 message.
//!
//! Control characters are discovered exactly once, from the header segment,
//! and then threaded by value through every later decoding step. A message
//! that declares `#` as its field separator is therefore decoded correctly
//! even while another message using `|` is being decoded elsewhere.

use nom::bytes::complete::{tag, take_till};
use nom::character::complete::anychar;
use nom::IResult;

use crate::error::LexError;

/// Segment code of the header segment.
pub const HEADER_CODE: &str = "MSH";

/// Sub-component separator assumed when the header declares only three
/// encoding characters.
pub const DEFAULT_SUB_COMPONENT_SEPARATOR: char = '&';

/// Control characters declared by a message header (`MSH-1` and `MSH-2`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncodingCharacters {
    /// Separates fields within a segment (`MSH-1`).
    pub field_separator: char,
    /// Separates components within a field.
    pub component_separator: char,
    /// Separates sub-components within a component.
    pub sub_component_separator: char,
    /// Separates repetitions of a field.
    pub repetition_separator: char,
    /// Opens and closes an escape sequence.
    pub escape_character: char,
}

impl Default for EncodingCharacters {
    /// The conventional `|^~\&` set, used when a decoder runs without a header.
    fn default() -> Self {
        Self {
            field_separator: '|',
            component_separator: '^',
            sub_component_separator: '&',
            repetition_separator: '~',
            escape_character: '\\',
        }
    }
}

impl EncodingCharacters {
    /// Build a character set, rejecting any pair of colliding characters.
    pub fn new(
        field_separator: char,
        component_separator: char,
        repetition_separator: char,
        escape_character: char,
        sub_component_separator: char,
    ) -> Result<Self, LexError> {
        let encoding = Self {
            field_separator,
            component_separator,
            sub_component_separator,
            repetition_separator,
            escape_character,
        };
        let chars = encoding.as_array();
        for (i, a) in chars.iter().enumerate() {
            if chars[i + 1..].contains(a) {
                return Err(LexError::MalformedHeader(format!(
                    "control character {a:?} is declared more than once"
                )));
            }
        }
        Ok(encoding)
    }

    /// Derive the control characters from the raw text of a header segment.
    ///
    /// The character right after `MSH` is the field separator; the field that
    /// follows it (`MSH-2`) holds the component separator, repetition
    /// separator, escape character and sub-component separator in that order.
    /// On success the remainder of the segment, starting at the separator
    /// that closes `MSH-2`, is returned alongside the characters.
    pub fn from_header(segment: &str) -> Result<(Self, &str), LexError> {
        if segment.is_empty() {
            return Err(LexError::MalformedHeader("header segment is empty".into()));
        }
        let (rest, (field, declared)) = encoding_field(segment).map_err(|_| {
            LexError::MalformedHeader(format!(
                "expected {HEADER_CODE} followed by the field separator, found {segment:?}"
            ))
        })?;

        let mut declared = declared.chars();
        let (Some(component), Some(repetition), Some(escape)) =
            (declared.next(), declared.next(), declared.next())
        else {
            return Err(LexError::MalformedHeader(format!(
                "fewer than four control characters follow {HEADER_CODE}"
            )));
        };
        let sub_component = declared.next().unwrap_or(DEFAULT_SUB_COMPONENT_SEPARATOR);

        let encoding = Self::new(field, component, repetition, escape, sub_component)?;

        #[cfg(feature = "logging")]
        log::debug!("derived encoding characters {:?}", encoding.declared());

        Ok((encoding, rest))
    }

    /// The text of `MSH-2` as it would be written for this character set.
    pub fn declared(&self) -> String {
        [
            self.component_separator,
            self.repetition_separator,
            self.escape_character,
            self.sub_component_separator,
        ]
        .iter()
        .collect()
    }

    /// Returns true when `c` is one of the five control characters.
    pub fn is_control(&self, c: char) -> bool {
        self.as_array().contains(&c)
    }

    fn as_array(&self) -> [char; 5] {
        [
            self.field_separator,
            self.component_separator,
            self.repetition_separator,
            self.escape_character,
            self.sub_component_separator,
        ]
    }
}

fn encoding_field(input: &str) -> IResult<&str, (char, &str)> {
    let (input, _) = tag(HEADER_CODE)(input)?;
    let (input, field) = anychar(input)?;
    let (input, declared) = take_till(move |c: char| c == field)(input)?;
    Ok((input, (field, declared)))
}
