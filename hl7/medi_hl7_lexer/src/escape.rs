//! Escape-sequence decoding and encoding.
//!
//! Field text cannot contain the message's control characters literally, so
//! HL7 wraps short mnemonics in the escape character instead (`\F\` for the
//! field separator, `\.br\` for a line break, and so on). Decoding runs only
//! on leaf text, after the field has been split on every delimiter, so an
//! escaped separator never splits anything.

use nom::branch::alt;
use nom::bytes::complete::{tag, tag_no_case, take_till};
use nom::character::complete::char;
use nom::combinator::value;
use nom::sequence::delimited;
use nom::IResult;

use crate::encoding::EncodingCharacters;

/// How many occurrences of each escape code are substituted within one value.
///
/// A value is one leaf token: a component or sub-component after the field
/// has been split, never the whole field. Under `FirstOccurrence` the same
/// code is therefore substituted once in each component of a field.
///
/// Older integrations substituted each code once per value, using a
/// single-shot string replace; `FirstOccurrence` reproduces that output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EscapePolicy {
    /// Substitute every escape sequence.
    #[default]
    AllOccurrences,
    /// Substitute only the first occurrence of each escape code; later
    /// occurrences of the same code are kept verbatim.
    FirstOccurrence,
}

/// The escape codes understood inside field text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EscapeCode {
    /// `.br` - line break, decoded as a carriage return.
    LineBreak,
    /// `F` - the field separator.
    Field,
    /// `R` - the repetition separator.
    Repetition,
    /// `S` - the component separator.
    Component,
    /// `T` - the sub-component separator.
    SubComponent,
    /// `E` - the escape character itself.
    Escape,
    /// `X0A` - a line feed.
    LineFeed,
    /// `X0D` - a carriage return.
    CarriageReturn,
}

impl EscapeCode {
    /// Every escape code, in a fixed order.
    pub const ALL: [EscapeCode; 8] = [
        EscapeCode::LineBreak,
        EscapeCode::Field,
        EscapeCode::Repetition,
        EscapeCode::Component,
        EscapeCode::SubComponent,
        EscapeCode::Escape,
        EscapeCode::LineFeed,
        EscapeCode::CarriageReturn,
    ];

    /// The mnemonic written between two escape characters.
    pub fn mnemonic(self) -> &'static str {
        match self {
            EscapeCode::LineBreak => ".br",
            EscapeCode::Field => "F",
            EscapeCode::Repetition => "R",
            EscapeCode::Component => "S",
            EscapeCode::SubComponent => "T",
            EscapeCode::Escape => "E",
            EscapeCode::LineFeed => "X0A",
            EscapeCode::CarriageReturn => "X0D",
        }
    }

    /// The literal character this code stands for under `encoding`.
    pub fn literal(self, encoding: &EncodingCharacters) -> char {
        match self {
            EscapeCode::LineBreak | EscapeCode::CarriageReturn => '\r',
            EscapeCode::Field => encoding.field_separator,
            EscapeCode::Repetition => encoding.repetition_separator,
            EscapeCode::Component => encoding.component_separator,
            EscapeCode::SubComponent => encoding.sub_component_separator,
            EscapeCode::Escape => encoding.escape_character,
            EscapeCode::LineFeed => '\n',
        }
    }

    /// The code that must be used to write `c` inside field text, if any.
    pub fn for_literal(c: char, encoding: &EncodingCharacters) -> Option<Self> {
        if c == encoding.field_separator {
            Some(EscapeCode::Field)
        } else if c == encoding.component_separator {
            Some(EscapeCode::Component)
        } else if c == encoding.sub_component_separator {
            Some(EscapeCode::SubComponent)
        } else if c == encoding.repetition_separator {
            Some(EscapeCode::Repetition)
        } else if c == encoding.escape_character {
            Some(EscapeCode::Escape)
        } else if c == '\n' {
            Some(EscapeCode::LineFeed)
        } else if c == '\r' {
            Some(EscapeCode::CarriageReturn)
        } else {
            None
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Decode escape sequences in `text`.
///
/// Absent input stays absent; it never becomes an empty string. Sequences
/// with an unknown mnemonic, and lone escape characters, are copied through
/// unchanged.
pub fn unescape(
    text: Option<&str>,
    encoding: &EncodingCharacters,
    policy: EscapePolicy,
) -> Option<String> {
    text.map(|text| unescape_str(text, encoding, policy))
}

/// Encode `text` so that it can be embedded in a field under `encoding`.
pub fn escape(text: &str, encoding: &EncodingCharacters) -> String {
    if !text
        .chars()
        .any(|c| encoding.is_control(c) || c == '\r' || c == '\n')
    {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match EscapeCode::for_literal(c, encoding) {
            Some(code) => {
                out.push(encoding.escape_character);
                out.push_str(code.mnemonic());
                out.push(encoding.escape_character);
            }
            None => out.push(c),
        }
    }
    out
}

fn unescape_str(text: &str, encoding: &EncodingCharacters, policy: EscapePolicy) -> String {
    let esc = encoding.escape_character;
    if !text.contains(esc) {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut substituted = [false; EscapeCode::ALL.len()];
    let mut rest = text;
    while !rest.is_empty() {
        let Ok((after, literal)) = literal_run(rest, esc) else {
            out.push_str(rest);
            break;
        };
        out.push_str(literal);
        rest = after;
        if rest.is_empty() {
            break;
        }

        match escape_sequence(rest, esc) {
            Ok((after, code))
                if policy == EscapePolicy::AllOccurrences || !substituted[code.index()] =>
            {
                substituted[code.index()] = true;
                out.push(code.literal(encoding));
                rest = after;
            }
            _ => {
                out.push(esc);
                rest = &rest[esc.len_utf8()..];
            }
        }
    }
    out
}

fn literal_run(input: &str, esc: char) -> IResult<&str, &str> {
    take_till(|c: char| c == esc)(input)
}

fn escape_sequence(input: &str, esc: char) -> IResult<&str, EscapeCode> {
    delimited(char(esc), escape_mnemonic, char(esc))(input)
}

fn escape_mnemonic(input: &str) -> IResult<&str, EscapeCode> {
    alt((
        value(EscapeCode::LineBreak, tag(".br")),
        value(EscapeCode::LineFeed, tag_no_case("X0A")),
        value(EscapeCode::CarriageReturn, tag_no_case("X0D")),
        value(EscapeCode::Field, tag("F")),
        value(EscapeCode::Repetition, tag("R")),
        value(EscapeCode::Component, tag("S")),
        value(EscapeCode::SubComponent, tag("T")),
        value(EscapeCode::Escape, tag("E")),
    ))(input)
}
