//! Typed document model for decoded HL7 v2 messages.
//!
//! This crate defines the composite data types, segment records and the
//! `Document` produced by `medi_hl7_parser`, along with JSON helpers.

pub mod datatypes;
pub mod document;
pub mod segments;

// Re-export commonly used types
pub use document::{Document, MessageType, RawSegment, SegmentRole};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors raised while converting documents to and from JSON.
#[cfg(feature = "serde")]
#[derive(Debug, thiserror::Error)]
pub enum JsonError {
    #[error("json: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Serializes a document or record to a JSON string.
///
/// Absent fields become `null`; present-but-empty fields stay `""`.
///
/// # Example
///
/// ```
/// use medi_hl7_ast::datatypes::PersonName;
/// use medi_hl7_ast::to_json;
///
/// let name = PersonName {
///     family_name: Some("DOE".into()),
///     given_name: Some(String::new()),
///     ..Default::default()
/// };
/// let json = to_json(&name).unwrap();
/// assert!(json.contains(r#""family_name": "DOE""#));
/// assert!(json.contains(r#""given_name": """#));
/// assert!(json.contains(r#""suffix": null"#));
/// ```
#[cfg(feature = "serde")]
pub fn to_json<T: Serialize>(value: &T) -> Result<String, JsonError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Deserializes a document or record from a JSON string.
#[cfg(feature = "serde")]
pub fn from_json<T: for<'de> Deserialize<'de>>(json: &str) -> Result<T, JsonError> {
    Ok(serde_json::from_str(json)?)
}
