//! Positional token-to-record mapping.
//!
//! Every delimiter level (fields in a segment, components in a field,
//! sub-components in a component) is decoded the same way: the value is
//! split on the level's separator and the i-th token is handed to the i-th
//! declared [`Slot`]. Alignment comes only from declaration order, so a
//! field without a decoder must still be declared (see [`Slot::skip`]) to
//! keep the fields after it in place.

use log::trace;
use medi_hl7_lexer::{unescape, EncodingCharacters};

use crate::config::DecoderConfig;

/// The delimiter level a [`Scope`] sits at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// A segment body, split into fields.
    Segment,
    /// A field, split into components.
    Field,
    /// A component, split into sub-components.
    Component,
    /// A sub-component; never split further.
    SubComponent,
}

impl Level {
    /// The level of the tokens produced by splitting a value at this level.
    pub fn child(self) -> Self {
        match self {
            Level::Segment => Level::Field,
            Level::Field => Level::Component,
            Level::Component | Level::SubComponent => Level::SubComponent,
        }
    }

    /// The separator that splits a value at this level, if any.
    pub fn separator(self, encoding: &EncodingCharacters) -> Option<char> {
        match self {
            Level::Segment => Some(encoding.field_separator),
            Level::Field => Some(encoding.component_separator),
            Level::Component => Some(encoding.sub_component_separator),
            Level::SubComponent => None,
        }
    }
}

/// Everything a slot needs to decode one token: the message's control
/// characters, the decoder configuration, the current level and a
/// diagnostic path such as `PID.3.4`.
///
/// The path is only ever logged; it has no effect on what is decoded.
#[derive(Debug, Clone)]
pub struct Scope<'a> {
    encoding: EncodingCharacters,
    config: &'a DecoderConfig,
    level: Level,
    path: String,
}

impl<'a> Scope<'a> {
    /// Root scope for the fields of one segment.
    pub fn segment(name: &str, encoding: EncodingCharacters, config: &'a DecoderConfig) -> Self {
        Self {
            encoding,
            config,
            level: Level::Segment,
            path: name.to_string(),
        }
    }

    /// Field-level scope for calling a composite decoder on its own, using
    /// `config.encoding_override` or the default `|^~\&` set.
    pub fn standalone(label: &str, config: &'a DecoderConfig) -> Self {
        Self {
            encoding: config.standalone_encoding(),
            config,
            level: Level::Field,
            path: label.to_string(),
        }
    }

    /// The control characters in effect.
    pub fn encoding(&self) -> &EncodingCharacters {
        &self.encoding
    }

    /// The decoder configuration.
    pub fn config(&self) -> &DecoderConfig {
        self.config
    }

    /// The level of the value this scope decodes.
    pub fn level(&self) -> Level {
        self.level
    }

    /// Diagnostic path, e.g. `PID.3[2].4`.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Scope for the token at 1-based `position` one level down.
    pub fn child(&self, position: usize) -> Scope<'a> {
        Scope {
            encoding: self.encoding,
            config: self.config,
            level: self.level.child(),
            path: format!("{}.{}", self.path, position),
        }
    }

    /// Scope for the 1-based `n`th repetition of a field.
    pub fn repetition(&self, n: usize) -> Scope<'a> {
        Scope {
            encoding: self.encoding,
            config: self.config,
            level: self.level,
            path: format!("{}[{}]", self.path, n),
        }
    }

    /// Split `value` on this level's separator.
    pub fn split<'v>(&self, value: &'v str) -> Vec<&'v str> {
        match self.level.separator(&self.encoding) {
            Some(sep) => value.split(sep).collect(),
            None => vec![value],
        }
    }

    /// Leaf text with escape sequences decoded.
    pub fn text(&self, token: &str) -> Option<String> {
        unescape(Some(token), &self.encoding, self.config.escape_policy)
    }

    /// A numeric leaf such as a set id. Empty or non-numeric text is absent.
    pub fn number(&self, token: &str) -> Option<u32> {
        token.trim().parse().ok()
    }

    /// A repeating field of plain text. An empty field is an empty list.
    pub fn repeated_text(&self, token: &str) -> Option<Vec<String>> {
        decode_repeated(Some(token), self, |value, scope| {
            value.and_then(|v| scope.text(v)).unwrap_or_default()
        })
    }
}

/// Decodes one token into the record.
pub type TokenFn<T> = fn(&mut T, &str, &Scope<'_>);
/// Fills the record from the scope alone; the token is ignored.
pub type ConstantFn<T> = fn(&mut T, &Scope<'_>);

/// What a slot does with the token at its position.
pub enum Decode<T> {
    /// Decode the token into the record.
    Token(TokenFn<T>),
    /// Fill the record without looking at the token. Used for `MSH-1` and
    /// `MSH-2`, whose values come from the control characters.
    Constant(ConstantFn<T>),
    /// Occupies the position without decoding anything.
    Skip,
}

/// One named position in a record layout.
pub struct Slot<T> {
    /// Field or component name, used only in trace output.
    pub name: &'static str,
    /// How the token at this position is used.
    pub decode: Decode<T>,
}

impl<T> Slot<T> {
    /// A slot that decodes its token.
    pub const fn token(name: &'static str, decode: TokenFn<T>) -> Self {
        Self {
            name,
            decode: Decode::Token(decode),
        }
    }

    /// A slot filled from the scope; its token is consumed but unused.
    pub const fn constant(name: &'static str, decode: ConstantFn<T>) -> Self {
        Self {
            name,
            decode: Decode::Constant(decode),
        }
    }

    /// A pass-through slot that only keeps later positions aligned.
    pub const fn skip(name: &'static str) -> Self {
        Self {
            name,
            decode: Decode::Skip,
        }
    }

    fn apply(&self, record: &mut T, token: &str, scope: &Scope<'_>) {
        match self.decode {
            Decode::Token(decode) => decode(record, token, scope),
            Decode::Constant(decode) => decode(record, scope),
            Decode::Skip => {}
        }
    }
}

/// Map `tokens` onto `slots` in declaration order.
///
/// Short input is never an error: slots without a token keep their default.
/// Mapping stops at the first token that has no slot; it and every token
/// after it are dropped, and the record built so far is returned.
pub fn map_elements<'t, T, I>(tokens: I, slots: &[Slot<T>], scope: &Scope<'_>) -> T
where
    T: Default,
    I: IntoIterator<Item = &'t str>,
{
    let mut record = T::default();
    for (index, token) in tokens.into_iter().enumerate() {
        let Some(slot) = slots.get(index) else {
            trace!(
                "{}: no slot at position {}, dropping remaining tokens",
                scope.path(),
                index + 1
            );
            break;
        };
        let child = scope.child(index + 1);
        trace!("{} -> {} = {:?}", child.path(), slot.name, token);
        slot.apply(&mut record, token, &child);
    }
    record
}

/// Decode a composite value at `scope`'s level.
///
/// Absent input yields the type's default, with every component absent.
pub fn decode_composite<T: Default>(
    value: Option<&str>,
    slots: &[Slot<T>],
    scope: &Scope<'_>,
) -> T {
    match value {
        Some(value) => map_elements(scope.split(value), slots, scope),
        None => T::default(),
    }
}

/// Decode each repetition of a field independently, preserving order.
///
/// An absent field yields `None`; an empty field yields an empty list.
pub fn decode_repeated<T, F>(value: Option<&str>, scope: &Scope<'_>, decode: F) -> Option<Vec<T>>
where
    F: Fn(Option<&str>, &Scope<'_>) -> T,
{
    let value = value?;
    if value.is_empty() {
        return Some(Vec::new());
    }
    let repetition = scope.encoding().repetition_separator;
    Some(
        value
            .split(repetition)
            .enumerate()
            .map(|(i, rep)| decode(Some(rep), &scope.repetition(i + 1)))
            .collect(),
    )
}
