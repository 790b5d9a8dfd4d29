//! The (message type, trigger event) pairs this decoder accepts.
//!
//! A pair missing from the table is rejected before any segment after the
//! header is read. Supporting a new event means adding a row here.

use std::collections::HashMap;

use lazy_static::lazy_static;
use medi_hl7_ast::{MessageType, SegmentRole};

/// The segment roles every message of a given type must carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageStructure {
    /// The (code, trigger event) pair this structure decodes.
    pub message_type: MessageType,
    /// Roles checked once every line has been read.
    pub mandatory: &'static [SegmentRole],
}

const ADT_MANDATORY: &[SegmentRole] = &[
    SegmentRole::Header,
    SegmentRole::Event,
    SegmentRole::PatientIdentification,
    SegmentRole::Visit,
];

const ADT_EVENTS: &[&str] = &[
    "A01", "A02", "A03", "A04", "A05", "A06", "A07", "A08", "A11", "A12", "A13",
];

lazy_static! {
    // message code -> trigger event -> structure
    static ref STRUCTURES: HashMap<&'static str, HashMap<&'static str, MessageStructure>> = {
        let mut adt = HashMap::new();
        for &event in ADT_EVENTS {
            adt.insert(
                event,
                MessageStructure {
                    message_type: MessageType::new("ADT", event),
                    mandatory: ADT_MANDATORY,
                },
            );
        }
        let mut table = HashMap::new();
        table.insert("ADT", adt);
        table
    };
}

/// Find the structure for a message code and trigger event.
pub fn lookup(code: &str, trigger_event: &str) -> Option<&'static MessageStructure> {
    STRUCTURES.get(code)?.get(trigger_event)
}

/// Every supported pair, sorted by code then event.
pub fn supported() -> Vec<MessageType> {
    let mut types: Vec<MessageType> = STRUCTURES
        .values()
        .flat_map(|events| events.values())
        .map(|s| s.message_type.clone())
        .collect();
    types.sort_by(|a, b| (&a.code, &a.trigger_event).cmp(&(&b.code, &b.trigger_event)));
    types
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_adt_events_require_core_segments() {
        for event in ADT_EVENTS {
            let structure = lookup("ADT", event).unwrap();
            assert_eq!(structure.message_type, MessageType::new("ADT", *event));
            assert_eq!(
                structure.mandatory,
                &[
                    SegmentRole::Header,
                    SegmentRole::Event,
                    SegmentRole::PatientIdentification,
                    SegmentRole::Visit,
                ]
            );
        }
    }

    #[test]
    fn test_unknown_pairs() {
        assert!(lookup("ORM", "O01").is_none());
        assert!(lookup("ADT", "A09").is_none());
        assert!(lookup("adt", "A01").is_none());
    }

    #[test]
    fn test_supported_is_sorted() {
        let names: Vec<String> = supported().iter().map(ToString::to_string).collect();
        assert_eq!(names.len(), 11);
        assert_eq!(names.first().map(String::as_str), Some("ADT^A01"));
        assert_eq!(names.last().map(String::as_str), Some("ADT^A13"));
    }
}
