//! Decoders for the reusable composite data types.
//!
//! Each decoder splits its value on the separator of the level it is called
//! at: a composite that is a whole field splits on the component separator,
//! one nested inside a component splits on the sub-component separator.
//! Absent input always yields the type's default record.

use medi_hl7_ast::datatypes::*;

use crate::mapper::{decode_composite, Scope, Slot};

const HD: &[Slot<HierarchicDesignator>] = &[
    Slot::token("namespace_id", |r, t, s| r.namespace_id = s.text(t)),
    Slot::token("universal_id", |r, t, s| r.universal_id = s.text(t)),
    Slot::token("universal_id_type", |r, t, s| r.universal_id_type = s.text(t)),
];

const EI: &[Slot<EntityIdentifier>] = &[
    Slot::token("entity_identifier", |r, t, s| r.entity_identifier = s.text(t)),
    Slot::token("namespace_id", |r, t, s| r.namespace_id = s.text(t)),
    Slot::token("universal_id", |r, t, s| r.universal_id = s.text(t)),
    Slot::token("universal_id_type", |r, t, s| r.universal_id_type = s.text(t)),
];

const CWE: &[Slot<CodedValue>] = &[
    Slot::token("identifier", |r, t, s| r.identifier = s.text(t)),
    Slot::token("text", |r, t, s| r.text = s.text(t)),
    Slot::token("name_of_coding_system", |r, t, s| r.name_of_coding_system = s.text(t)),
    Slot::token("alternate_identifier", |r, t, s| r.alternate_identifier = s.text(t)),
    Slot::token("alternate_text", |r, t, s| r.alternate_text = s.text(t)),
    Slot::token("name_of_alternate_coding_system", |r, t, s| {
        r.name_of_alternate_coding_system = s.text(t)
    }),
    Slot::token("coding_system_version_id", |r, t, s| {
        r.coding_system_version_id = s.text(t)
    }),
    Slot::token("alternate_coding_system_version_id", |r, t, s| {
        r.alternate_coding_system_version_id = s.text(t)
    }),
    Slot::token("original_text", |r, t, s| r.original_text = s.text(t)),
];

const DR: &[Slot<DateRange>] = &[
    Slot::token("range_start", |r, t, s| r.range_start = s.text(t)),
    Slot::token("range_end", |r, t, s| r.range_end = s.text(t)),
];

const CX: &[Slot<CompositeId>] = &[
    Slot::token("id", |r, t, s| r.id = s.text(t)),
    Slot::token("check_digit", |r, t, s| r.check_digit = s.text(t)),
    Slot::token("check_digit_scheme", |r, t, s| r.check_digit_scheme = s.text(t)),
    Slot::token("assigning_authority", |r, t, s| {
        r.assigning_authority = Some(decode_hd(Some(t), s))
    }),
    Slot::token("identifier_type_code", |r, t, s| r.identifier_type_code = s.text(t)),
    Slot::token("assigning_facility", |r, t, s| {
        r.assigning_facility = Some(decode_hd(Some(t), s))
    }),
    Slot::token("effective_date", |r, t, s| r.effective_date = s.text(t)),
    Slot::token("expiration_date", |r, t, s| r.expiration_date = s.text(t)),
];

const XPN: &[Slot<PersonName>] = &[
    Slot::token("family_name", |r, t, s| r.family_name = s.text(t)),
    Slot::token("given_name", |r, t, s| r.given_name = s.text(t)),
    Slot::token("second_and_further_given_names", |r, t, s| {
        r.second_and_further_given_names = s.text(t)
    }),
    Slot::token("suffix", |r, t, s| r.suffix = s.text(t)),
    Slot::token("prefix", |r, t, s| r.prefix = s.text(t)),
    Slot::token("degree", |r, t, s| r.degree = s.text(t)),
    Slot::token("name_type_code", |r, t, s| r.name_type_code = s.text(t)),
    Slot::token("name_representation_code", |r, t, s| {
        r.name_representation_code = s.text(t)
    }),
    Slot::token("name_context", |r, t, s| r.name_context = Some(decode_cwe(Some(t), s))),
    Slot::token("name_validity_range", |r, t, s| {
        r.name_validity_range = Some(decode_dr(Some(t), s))
    }),
    Slot::token("name_assembly_order", |r, t, s| r.name_assembly_order = s.text(t)),
];

const XAD: &[Slot<Address>] = &[
    Slot::token("street_address", |r, t, s| r.street_address = s.text(t)),
    Slot::token("other_designation", |r, t, s| r.other_designation = s.text(t)),
    Slot::token("city", |r, t, s| r.city = s.text(t)),
    Slot::token("state_or_province", |r, t, s| r.state_or_province = s.text(t)),
    Slot::token("zip_or_postal_code", |r, t, s| r.zip_or_postal_code = s.text(t)),
    Slot::token("country", |r, t, s| r.country = s.text(t)),
    Slot::token("address_type", |r, t, s| r.address_type = s.text(t)),
    Slot::token("other_geographic_designation", |r, t, s| {
        r.other_geographic_designation = s.text(t)
    }),
    Slot::token("county_parish_code", |r, t, s| r.county_parish_code = s.text(t)),
    Slot::token("census_tract", |r, t, s| r.census_tract = s.text(t)),
    Slot::token("address_representation_code", |r, t, s| {
        r.address_representation_code = s.text(t)
    }),
    Slot::token("address_validity_range", |r, t, s| {
        r.address_validity_range = Some(decode_dr(Some(t), s))
    }),
];

const XTN: &[Slot<TelecomNumber>] = &[
    Slot::token("telephone_number", |r, t, s| r.telephone_number = s.text(t)),
    Slot::token("telecommunication_use_code", |r, t, s| {
        r.telecommunication_use_code = s.text(t)
    }),
    Slot::token("telecommunication_equipment_type", |r, t, s| {
        r.telecommunication_equipment_type = s.text(t)
    }),
    Slot::token("email_address", |r, t, s| r.email_address = s.text(t)),
    Slot::token("country_code", |r, t, s| r.country_code = s.text(t)),
    Slot::token("area_city_code", |r, t, s| r.area_city_code = s.text(t)),
    Slot::token("phone_number", |r, t, s| r.phone_number = s.text(t)),
    Slot::token("extension", |r, t, s| r.extension = s.text(t)),
    Slot::token("any_text", |r, t, s| r.any_text = s.text(t)),
];

const XCN: &[Slot<PersonIdentifier>] = &[
    Slot::token("id_number", |r, t, s| r.id_number = s.text(t)),
    Slot::token("family_name", |r, t, s| r.family_name = s.text(t)),
    Slot::token("given_name", |r, t, s| r.given_name = s.text(t)),
    Slot::token("second_and_further_given_names", |r, t, s| {
        r.second_and_further_given_names = s.text(t)
    }),
    Slot::token("suffix", |r, t, s| r.suffix = s.text(t)),
    Slot::token("prefix", |r, t, s| r.prefix = s.text(t)),
    Slot::token("degree", |r, t, s| r.degree = s.text(t)),
    Slot::token("source_table", |r, t, s| r.source_table = s.text(t)),
    Slot::token("assigning_authority", |r, t, s| {
        r.assigning_authority = Some(decode_hd(Some(t), s))
    }),
    Slot::token("name_type_code", |r, t, s| r.name_type_code = s.text(t)),
    Slot::token("identifier_check_digit", |r, t, s| r.identifier_check_digit = s.text(t)),
    Slot::token("check_digit_scheme", |r, t, s| r.check_digit_scheme = s.text(t)),
    Slot::token("identifier_type_code", |r, t, s| r.identifier_type_code = s.text(t)),
    Slot::token("assigning_facility", |r, t, s| {
        r.assigning_facility = Some(decode_hd(Some(t), s))
    }),
    Slot::token("name_representation_code", |r, t, s| {
        r.name_representation_code = s.text(t)
    }),
    Slot::token("name_context", |r, t, s| r.name_context = Some(decode_cwe(Some(t), s))),
    Slot::token("name_validity_range", |r, t, s| {
        r.name_validity_range = Some(decode_dr(Some(t), s))
    }),
    Slot::token("name_assembly_order", |r, t, s| r.name_assembly_order = s.text(t)),
];

const XON: &[Slot<OrganizationName>] = &[
    Slot::token("organization_name", |r, t, s| r.organization_name = s.text(t)),
    Slot::token("organization_name_type_code", |r, t, s| {
        r.organization_name_type_code = s.text(t)
    }),
    Slot::token("id_number", |r, t, s| r.id_number = s.text(t)),
    Slot::token("check_digit", |r, t, s| r.check_digit = s.text(t)),
    Slot::token("check_digit_scheme", |r, t, s| r.check_digit_scheme = s.text(t)),
    Slot::token("assigning_authority", |r, t, s| {
        r.assigning_authority = Some(decode_hd(Some(t), s))
    }),
    Slot::token("identifier_type_code", |r, t, s| r.identifier_type_code = s.text(t)),
    Slot::token("assigning_facility", |r, t, s| {
        r.assigning_facility = Some(decode_hd(Some(t), s))
    }),
    Slot::token("name_representation_code", |r, t, s| {
        r.name_representation_code = s.text(t)
    }),
];

const PL: &[Slot<PersonLocation>] = &[
    Slot::token("point_of_care", |r, t, s| r.point_of_care = s.text(t)),
    Slot::token("room", |r, t, s| r.room = s.text(t)),
    Slot::token("bed", |r, t, s| r.bed = s.text(t)),
    Slot::token("facility", |r, t, s| r.facility = Some(decode_hd(Some(t), s))),
    Slot::token("location_status", |r, t, s| r.location_status = s.text(t)),
    Slot::token("person_location_type", |r, t, s| r.person_location_type = s.text(t)),
    Slot::token("building", |r, t, s| r.building = s.text(t)),
    Slot::token("floor", |r, t, s| r.floor = s.text(t)),
    Slot::token("location_description", |r, t, s| r.location_description = s.text(t)),
];

const FC: &[Slot<FinancialClass>] = &[
    Slot::token("financial_class", |r, t, s| r.financial_class = s.text(t)),
    Slot::token("effective_date", |r, t, s| r.effective_date = s.text(t)),
];

const DLD: &[Slot<DischargeLocation>] = &[
    Slot::token("discharge_location", |r, t, s| r.discharge_location = s.text(t)),
    Slot::token("effective_date", |r, t, s| r.effective_date = s.text(t)),
];

const JCC: &[Slot<JobCodeClass>] = &[
    Slot::token("job_code", |r, t, s| r.job_code = s.text(t)),
    Slot::token("job_class", |r, t, s| r.job_class = s.text(t)),
];

const MSG: &[Slot<MessageTypeField>] = &[
    Slot::token("message_code", |r, t, s| r.message_code = s.text(t)),
    Slot::token("trigger_event", |r, t, s| r.trigger_event = s.text(t)),
    Slot::token("message_structure", |r, t, s| r.message_structure = s.text(t)),
];

const PT: &[Slot<ProcessingType>] = &[
    Slot::token("processing_id", |r, t, s| r.processing_id = s.text(t)),
    Slot::token("processing_mode", |r, t, s| r.processing_mode = s.text(t)),
];

const VID: &[Slot<VersionId>] = &[
    Slot::token("version_id", |r, t, s| r.version_id = s.text(t)),
    Slot::token("internationalization_code", |r, t, s| {
        r.internationalization_code = Some(decode_cwe(Some(t), s))
    }),
    Slot::token("international_version_id", |r, t, s| {
        r.international_version_id = Some(decode_cwe(Some(t), s))
    }),
];

/// `HD` hierarchic designator: namespace, universal id and its type.
pub fn decode_hd(value: Option<&str>, scope: &Scope<'_>) -> HierarchicDesignator {
    decode_composite(value, HD, scope)
}

/// `EI` entity identifier.
pub fn decode_ei(value: Option<&str>, scope: &Scope<'_>) -> EntityIdentifier {
    decode_composite(value, EI, scope)
}

/// Coded value; serves both CE and CWE fields.
pub fn decode_cwe(value: Option<&str>, scope: &Scope<'_>) -> CodedValue {
    decode_composite(value, CWE, scope)
}

/// `DR` date range.
pub fn decode_dr(value: Option<&str>, scope: &Scope<'_>) -> DateRange {
    decode_composite(value, DR, scope)
}

/// `CX` extended composite id. The assigning authority and facility are
/// nested `HD` values split on the sub-component separator.
pub fn decode_cx(value: Option<&str>, scope: &Scope<'_>) -> CompositeId {
    decode_composite(value, CX, scope)
}

/// `XPN` extended person name.
pub fn decode_xpn(value: Option<&str>, scope: &Scope<'_>) -> PersonName {
    decode_composite(value, XPN, scope)
}

/// `XAD` extended address.
pub fn decode_xad(value: Option<&str>, scope: &Scope<'_>) -> Address {
    decode_composite(value, XAD, scope)
}

/// `XTN` telecommunication number.
pub fn decode_xtn(value: Option<&str>, scope: &Scope<'_>) -> TelecomNumber {
    decode_composite(value, XTN, scope)
}

/// `XCN` extended composite id and name for persons.
pub fn decode_xcn(value: Option<&str>, scope: &Scope<'_>) -> PersonIdentifier {
    decode_composite(value, XCN, scope)
}

/// `XON` extended organization name.
pub fn decode_xon(value: Option<&str>, scope: &Scope<'_>) -> OrganizationName {
    decode_composite(value, XON, scope)
}

/// `PL` person location.
pub fn decode_pl(value: Option<&str>, scope: &Scope<'_>) -> PersonLocation {
    decode_composite(value, PL, scope)
}

/// `FC` financial class.
pub fn decode_fc(value: Option<&str>, scope: &Scope<'_>) -> FinancialClass {
    decode_composite(value, FC, scope)
}

/// `DLD` discharge location and date.
pub fn decode_dld(value: Option<&str>, scope: &Scope<'_>) -> DischargeLocation {
    decode_composite(value, DLD, scope)
}

/// `JCC` job code and class.
pub fn decode_jcc(value: Option<&str>, scope: &Scope<'_>) -> JobCodeClass {
    decode_composite(value, JCC, scope)
}

/// `MSG` message type: code, trigger event and structure.
pub fn decode_msg(value: Option<&str>, scope: &Scope<'_>) -> MessageTypeField {
    decode_composite(value, MSG, scope)
}

/// `PT` processing type.
pub fn decode_pt(value: Option<&str>, scope: &Scope<'_>) -> ProcessingType {
    decode_composite(value, PT, scope)
}

/// `VID` version identifier.
pub fn decode_vid(value: Option<&str>, scope: &Scope<'_>) -> VersionId {
    decode_composite(value, VID, scope)
}
