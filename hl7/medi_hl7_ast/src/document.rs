//! The decoded form of one message.

use std::fmt;

use medi_hl7_lexer::{EncodingCharacters, SegmentCode};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::segments::*;

/// The part a segment plays in a message.
///
/// Singular roles hold at most one record; a repeated occurrence replaces
/// the earlier one. Repeatable roles keep every occurrence in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SegmentRole {
    Header,
    Event,
    PatientIdentification,
    AdditionalDemographics,
    Visit,
    AdditionalVisit,
    NextOfKin,
    Observation,
    Allergy,
    Diagnosis,
}

impl SegmentRole {
    /// The segment code that carries this role.
    pub fn code(self) -> &'static str {
        match self {
            SegmentRole::Header => "MSH",
            SegmentRole::Event => "EVN",
            SegmentRole::PatientIdentification => "PID",
            SegmentRole::AdditionalDemographics => "PD1",
            SegmentRole::Visit => "PV1",
            SegmentRole::AdditionalVisit => "PV2",
            SegmentRole::NextOfKin => "NK1",
            SegmentRole::Observation => "OBX",
            SegmentRole::Allergy => "AL1",
            SegmentRole::Diagnosis => "DG1",
        }
    }

    /// The role of a recognized segment, if it has a dedicated decoder.
    pub fn for_code(code: SegmentCode) -> Option<Self> {
        match code {
            SegmentCode::Msh => Some(SegmentRole::Header),
            SegmentCode::Evn => Some(SegmentRole::Event),
            SegmentCode::Pid => Some(SegmentRole::PatientIdentification),
            SegmentCode::Pd1 => Some(SegmentRole::AdditionalDemographics),
            SegmentCode::Pv1 => Some(SegmentRole::Visit),
            SegmentCode::Pv2 => Some(SegmentRole::AdditionalVisit),
            SegmentCode::Nk1 => Some(SegmentRole::NextOfKin),
            SegmentCode::Obx => Some(SegmentRole::Observation),
            SegmentCode::Al1 => Some(SegmentRole::Allergy),
            SegmentCode::Dg1 => Some(SegmentRole::Diagnosis),
            SegmentCode::Registered | SegmentCode::SiteDefined => None,
        }
    }

    /// Repeatable roles collect every occurrence; the others keep one.
    pub fn is_repeatable(self) -> bool {
        matches!(
            self,
            SegmentRole::NextOfKin
                | SegmentRole::Observation
                | SegmentRole::Allergy
                | SegmentRole::Diagnosis
        )
    }
}

impl fmt::Display for SegmentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Message code and trigger event, e.g. `ADT` / `A04`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MessageType {
    pub code: String,
    pub trigger_event: String,
}

impl MessageType {
    pub fn new(code: impl Into<String>, trigger_event: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            trigger_event: trigger_event.into(),
        }
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}^{}", self.code, self.trigger_event)
    }
}

/// A recognized segment kept verbatim because it has no field decoder.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RawSegment {
    pub header: String,
    pub body: String,
}

/// One fully decoded message.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Document {
    pub encoding: EncodingCharacters,
    pub message_type: MessageType,
    pub header: Msh,
    pub event: Option<Evn>,
    pub patient_identification: Option<Pid>,
    pub additional_demographics: Option<Pd1>,
    pub visit: Option<Pv1>,
    pub additional_visit: Option<Pv2>,
    pub next_of_kin: Vec<Nk1>,
    pub observations: Vec<Obx>,
    pub allergies: Vec<Al1>,
    pub diagnoses: Vec<Dg1>,
    pub unparsed: Vec<RawSegment>,
}

impl Document {
    /// Start a document from its decoded header.
    pub fn new(encoding: EncodingCharacters, message_type: MessageType, header: Msh) -> Self {
        Self {
            encoding,
            message_type,
            header,
            event: None,
            patient_identification: None,
            additional_demographics: None,
            visit: None,
            additional_visit: None,
            next_of_kin: Vec::new(),
            observations: Vec::new(),
            allergies: Vec::new(),
            diagnoses: Vec::new(),
            unparsed: Vec::new(),
        }
    }

    /// Whether at least one segment filling `role` has been decoded.
    pub fn has(&self, role: SegmentRole) -> bool {
        match role {
            SegmentRole::Header => true,
            SegmentRole::Event => self.event.is_some(),
            SegmentRole::PatientIdentification => self.patient_identification.is_some(),
            SegmentRole::AdditionalDemographics => self.additional_demographics.is_some(),
            SegmentRole::Visit => self.visit.is_some(),
            SegmentRole::AdditionalVisit => self.additional_visit.is_some(),
            SegmentRole::NextOfKin => !self.next_of_kin.is_empty(),
            SegmentRole::Observation => !self.observations.is_empty(),
            SegmentRole::Allergy => !self.allergies.is_empty(),
            SegmentRole::Diagnosis => !self.diagnoses.is_empty(),
        }
    }
}
