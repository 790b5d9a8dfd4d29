//! Composite data types shared by many segments.
//! Every component is optional: `None` means no token reached that position,
//! `Some("")` means the position was present but empty.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// HD - hierarchic designator
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HierarchicDesignator {
    pub namespace_id: Option<String>,
    pub universal_id: Option<String>,
    pub universal_id_type: Option<String>,
}

/// EI - entity identifier
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EntityIdentifier {
    pub entity_identifier: Option<String>,
    pub namespace_id: Option<String>,
    pub universal_id: Option<String>,
    pub universal_id_type: Option<String>,
}

/// CWE - coded with exceptions. Also used for plain CE fields, whose
/// six components are a prefix of this one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CodedValue {
    pub identifier: Option<String>,
    pub text: Option<String>,
    pub name_of_coding_system: Option<String>,
    pub alternate_identifier: Option<String>,
    pub alternate_text: Option<String>,
    pub name_of_alternate_coding_system: Option<String>,
    pub coding_system_version_id: Option<String>,
    pub alternate_coding_system_version_id: Option<String>,
    pub original_text: Option<String>,
}

/// DR - date/time range
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DateRange {
    pub range_start: Option<String>,
    pub range_end: Option<String>,
}

/// CX - extended composite id with check digit
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CompositeId {
    pub id: Option<String>,
    pub check_digit: Option<String>,
    pub check_digit_scheme: Option<String>,
    pub assigning_authority: Option<HierarchicDesignator>,
    pub identifier_type_code: Option<String>,
    pub assigning_facility: Option<HierarchicDesignator>,
    pub effective_date: Option<String>,
    pub expiration_date: Option<String>,
}

/// XPN - extended person name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PersonName {
    pub family_name: Option<String>,
    pub given_name: Option<String>,
    pub second_and_further_given_names: Option<String>,
    pub suffix: Option<String>,
    pub prefix: Option<String>,
    pub degree: Option<String>,
    pub name_type_code: Option<String>,
    pub name_representation_code: Option<String>,
    pub name_context: Option<CodedValue>,
    pub name_validity_range: Option<DateRange>,
    pub name_assembly_order: Option<String>,
}

/// XAD - extended address
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Address {
    pub street_address: Option<String>,
    pub other_designation: Option<String>,
    pub city: Option<String>,
    pub state_or_province: Option<String>,
    pub zip_or_postal_code: Option<String>,
    pub country: Option<String>,
    pub address_type: Option<String>,
    pub other_geographic_designation: Option<String>,
    pub county_parish_code: Option<String>,
    pub census_tract: Option<String>,
    pub address_representation_code: Option<String>,
    pub address_validity_range: Option<DateRange>,
}

/// XTN - extended telecommunication number
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TelecomNumber {
    pub telephone_number: Option<String>,
    pub telecommunication_use_code: Option<String>,
    pub telecommunication_equipment_type: Option<String>,
    pub email_address: Option<String>,
    pub country_code: Option<String>,
    pub area_city_code: Option<String>,
    pub phone_number: Option<String>,
    pub extension: Option<String>,
    pub any_text: Option<String>,
}

/// XCN - extended composite id number and name for persons
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PersonIdentifier {
    pub id_number: Option<String>,
    pub family_name: Option<String>,
    pub given_name: Option<String>,
    pub second_and_further_given_names: Option<String>,
    pub suffix: Option<String>,
    pub prefix: Option<String>,
    pub degree: Option<String>,
    pub source_table: Option<String>,
    pub assigning_authority: Option<HierarchicDesignator>,
    pub name_type_code: Option<String>,
    pub identifier_check_digit: Option<String>,
    pub check_digit_scheme: Option<String>,
    pub identifier_type_code: Option<String>,
    pub assigning_facility: Option<HierarchicDesignator>,
    pub name_representation_code: Option<String>,
    pub name_context: Option<CodedValue>,
    pub name_validity_range: Option<DateRange>,
    pub name_assembly_order: Option<String>,
}

/// XON - extended composite name and identification number for organizations
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrganizationName {
    pub organization_name: Option<String>,
    pub organization_name_type_code: Option<String>,
    pub id_number: Option<String>,
    pub check_digit: Option<String>,
    pub check_digit_scheme: Option<String>,
    pub assigning_authority: Option<HierarchicDesignator>,
    pub identifier_type_code: Option<String>,
    pub assigning_facility: Option<HierarchicDesignator>,
    pub name_representation_code: Option<String>,
}

/// PL - person location
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PersonLocation {
    pub point_of_care: Option<String>,
    pub room: Option<String>,
    pub bed: Option<String>,
    pub facility: Option<HierarchicDesignator>,
    pub location_status: Option<String>,
    pub person_location_type: Option<String>,
    pub building: Option<String>,
    pub floor: Option<String>,
    pub location_description: Option<String>,
}

/// FC - financial class
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FinancialClass {
    pub financial_class: Option<String>,
    pub effective_date: Option<String>,
}

/// DLD - discharge location
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DischargeLocation {
    pub discharge_location: Option<String>,
    pub effective_date: Option<String>,
}

/// JCC - job code/class
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct JobCodeClass {
    pub job_code: Option<String>,
    pub job_class: Option<String>,
}

/// MSG - message type
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MessageTypeField {
    pub message_code: Option<String>,
    pub trigger_event: Option<String>,
    pub message_structure: Option<String>,
}

/// PT - processing type
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ProcessingType {
    pub processing_id: Option<String>,
    pub processing_mode: Option<String>,
}

/// VID - version identifier
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VersionId {
    pub version_id: Option<String>,
    pub internationalization_code: Option<CodedValue>,
    pub international_version_id: Option<CodedValue>,
}
