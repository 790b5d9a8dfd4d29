//! Field layouts and decoders for the segments with a dedicated record.
//!
//! Every layout lists the segment's fields in standard order. Fields that are
//! not modelled are declared with [`Slot::skip`] so the fields after them stay
//! aligned. Each decoder takes the segment body as returned by
//! `read_segment_header` and a segment-level [`Scope`].

use medi_hl7_ast::segments::*;

use crate::composites::*;
use crate::mapper::{decode_repeated, map_elements, Scope, Slot};

// MSH-1 and MSH-2 are the control characters themselves and are never
// escaped, so they are rebuilt from the scope instead of read from the text.
const MSH: &[Slot<Msh>] = &[
    Slot::constant("field_separator", |r, s| {
        r.field_separator = Some(s.encoding().field_separator.to_string())
    }),
    Slot::constant("encoding_characters", |r, s| {
        r.encoding_characters = Some(s.encoding().declared())
    }),
    Slot::token("sending_application", |r, t, s| {
        r.sending_application = Some(decode_hd(Some(t), s))
    }),
    Slot::token("sending_facility", |r, t, s| r.sending_facility = Some(decode_hd(Some(t), s))),
    Slot::token("receiving_application", |r, t, s| {
        r.receiving_application = Some(decode_hd(Some(t), s))
    }),
    Slot::token("receiving_facility", |r, t, s| r.receiving_facility = Some(decode_hd(Some(t), s))),
    Slot::token("date_time_of_message", |r, t, s| r.date_time_of_message = s.text(t)),
    Slot::token("security", |r, t, s| r.security = s.text(t)),
    Slot::token("message_type", |r, t, s| r.message_type = Some(decode_msg(Some(t), s))),
    Slot::token("message_control_id", |r, t, s| r.message_control_id = s.text(t)),
    Slot::token("processing_id", |r, t, s| r.processing_id = Some(decode_pt(Some(t), s))),
    Slot::token("version_id", |r, t, s| r.version_id = Some(decode_vid(Some(t), s))),
    Slot::token("sequence_number", |r, t, s| r.sequence_number = s.text(t)),
    Slot::token("continuation_pointer", |r, t, s| r.continuation_pointer = s.text(t)),
    Slot::token("accept_acknowledgment_type", |r, t, s| {
        r.accept_acknowledgment_type = s.text(t)
    }),
    Slot::token("application_acknowledgment_type", |r, t, s| {
        r.application_acknowledgment_type = s.text(t)
    }),
    Slot::token("country_code", |r, t, s| r.country_code = s.text(t)),
    Slot::token("character_set", |r, t, s| r.character_set = s.repeated_text(t)),
    Slot::token("principal_language_of_message", |r, t, s| {
        r.principal_language_of_message = Some(decode_cwe(Some(t), s))
    }),
];

const EVN: &[Slot<Evn>] = &[
    Slot::token("event_type_code", |r, t, s| r.event_type_code = s.text(t)),
    Slot::token("recorded_date_time", |r, t, s| r.recorded_date_time = s.text(t)),
    Slot::token("date_time_planned_event", |r, t, s| r.date_time_planned_event = s.text(t)),
    Slot::token("event_reason_code", |r, t, s| r.event_reason_code = Some(decode_cwe(Some(t), s))),
    Slot::token("operator_id", |r, t, s| r.operator_id = decode_repeated(Some(t), s, decode_xcn)),
    Slot::token("event_occurred", |r, t, s| r.event_occurred = s.text(t)),
    Slot::token("event_facility", |r, t, s| r.event_facility = Some(decode_hd(Some(t), s))),
];

const PID: &[Slot<Pid>] = &[
    Slot::token("set_id", |r, t, s| r.set_id = s.number(t)),
    Slot::token("patient_id", |r, t, s| r.patient_id = Some(decode_cx(Some(t), s))),
    Slot::token("patient_identifier_list", |r, t, s| {
        r.patient_identifier_list = decode_repeated(Some(t), s, decode_cx)
    }),
    Slot::token("alternate_patient_id", |r, t, s| {
        r.alternate_patient_id = decode_repeated(Some(t), s, decode_cx)
    }),
    Slot::token("patient_name", |r, t, s| r.patient_name = decode_repeated(Some(t), s, decode_xpn)),
    Slot::token("mothers_maiden_name", |r, t, s| {
        r.mothers_maiden_name = decode_repeated(Some(t), s, decode_xpn)
    }),
    Slot::token("date_time_of_birth", |r, t, s| r.date_time_of_birth = s.text(t)),
    Slot::token("administrative_sex", |r, t, s| r.administrative_sex = s.text(t)),
    Slot::token("patient_alias", |r, t, s| {
        r.patient_alias = decode_repeated(Some(t), s, decode_xpn)
    }),
    Slot::token("race", |r, t, s| r.race = decode_repeated(Some(t), s, decode_cwe)),
    Slot::token("patient_address", |r, t, s| {
        r.patient_address = decode_repeated(Some(t), s, decode_xad)
    }),
    Slot::token("county_code", |r, t, s| r.county_code = s.text(t)),
    Slot::token("phone_number_home", |r, t, s| {
        r.phone_number_home = decode_repeated(Some(t), s, decode_xtn)
    }),
    Slot::token("phone_number_business", |r, t, s| {
        r.phone_number_business = decode_repeated(Some(t), s, decode_xtn)
    }),
    Slot::token("primary_language", |r, t, s| r.primary_language = Some(decode_cwe(Some(t), s))),
    Slot::token("marital_status", |r, t, s| r.marital_status = Some(decode_cwe(Some(t), s))),
    Slot::token("religion", |r, t, s| r.religion = Some(decode_cwe(Some(t), s))),
    Slot::token("patient_account_number", |r, t, s| {
        r.patient_account_number = Some(decode_cx(Some(t), s))
    }),
    Slot::token("ssn_number", |r, t, s| r.ssn_number = s.text(t)),
    Slot::skip("drivers_license_number"),
    Slot::token("mothers_identifier", |r, t, s| {
        r.mothers_identifier = decode_repeated(Some(t), s, decode_cx)
    }),
    Slot::token("ethnic_group", |r, t, s| r.ethnic_group = decode_repeated(Some(t), s, decode_cwe)),
    Slot::token("birth_place", |r, t, s| r.birth_place = s.text(t)),
    Slot::token("multiple_birth_indicator", |r, t, s| r.multiple_birth_indicator = s.text(t)),
    Slot::token("birth_order", |r, t, s| r.birth_order = s.text(t)),
    Slot::token("citizenship", |r, t, s| r.citizenship = decode_repeated(Some(t), s, decode_cwe)),
    Slot::token("veterans_military_status", |r, t, s| {
        r.veterans_military_status = Some(decode_cwe(Some(t), s))
    }),
    Slot::token("nationality", |r, t, s| r.nationality = Some(decode_cwe(Some(t), s))),
    Slot::token("patient_death_date_and_time", |r, t, s| {
        r.patient_death_date_and_time = s.text(t)
    }),
    Slot::token("patient_death_indicator", |r, t, s| r.patient_death_indicator = s.text(t)),
];

const PD1: &[Slot<Pd1>] = &[
    Slot::token("living_dependency", |r, t, s| r.living_dependency = s.repeated_text(t)),
    Slot::token("living_arrangement", |r, t, s| r.living_arrangement = s.text(t)),
    Slot::token("patient_primary_facility", |r, t, s| {
        r.patient_primary_facility = decode_repeated(Some(t), s, decode_xon)
    }),
    Slot::token("patient_primary_care_provider", |r, t, s| {
        r.patient_primary_care_provider = decode_repeated(Some(t), s, decode_xcn)
    }),
    Slot::token("student_indicator", |r, t, s| r.student_indicator = s.text(t)),
    Slot::token("handicap", |r, t, s| r.handicap = s.text(t)),
    Slot::token("living_will_code", |r, t, s| r.living_will_code = s.text(t)),
    Slot::token("organ_donor_code", |r, t, s| r.organ_donor_code = s.text(t)),
    Slot::token("separate_bill", |r, t, s| r.separate_bill = s.text(t)),
    Slot::token("duplicate_patient", |r, t, s| {
        r.duplicate_patient = decode_repeated(Some(t), s, decode_cx)
    }),
    Slot::token("publicity_code", |r, t, s| r.publicity_code = Some(decode_cwe(Some(t), s))),
    Slot::token("protection_indicator", |r, t, s| r.protection_indicator = s.text(t)),
];

const NK1: &[Slot<Nk1>] = &[
    Slot::token("set_id", |r, t, s| r.set_id = s.number(t)),
    Slot::token("name", |r, t, s| r.name = decode_repeated(Some(t), s, decode_xpn)),
    Slot::token("relationship", |r, t, s| r.relationship = Some(decode_cwe(Some(t), s))),
    Slot::token("address", |r, t, s| r.address = decode_repeated(Some(t), s, decode_xad)),
    Slot::token("phone_number", |r, t, s| r.phone_number = decode_repeated(Some(t), s, decode_xtn)),
    Slot::token("business_phone_number", |r, t, s| {
        r.business_phone_number = decode_repeated(Some(t), s, decode_xtn)
    }),
    Slot::token("contact_role", |r, t, s| r.contact_role = Some(decode_cwe(Some(t), s))),
    Slot::token("start_date", |r, t, s| r.start_date = s.text(t)),
    Slot::token("end_date", |r, t, s| r.end_date = s.text(t)),
    Slot::token("job_title", |r, t, s| r.job_title = s.text(t)),
    Slot::token("job_code_class", |r, t, s| r.job_code_class = Some(decode_jcc(Some(t), s))),
    Slot::token("employee_number", |r, t, s| r.employee_number = Some(decode_cx(Some(t), s))),
    Slot::token("organization_name", |r, t, s| {
        r.organization_name = decode_repeated(Some(t), s, decode_xon)
    }),
    Slot::token("marital_status", |r, t, s| r.marital_status = Some(decode_cwe(Some(t), s))),
    Slot::token("administrative_sex", |r, t, s| r.administrative_sex = s.text(t)),
    Slot::token("date_time_of_birth", |r, t, s| r.date_time_of_birth = s.text(t)),
    Slot::token("living_dependency", |r, t, s| r.living_dependency = s.repeated_text(t)),
    Slot::token("ambulatory_status", |r, t, s| r.ambulatory_status = s.repeated_text(t)),
    Slot::token("citizenship", |r, t, s| r.citizenship = decode_repeated(Some(t), s, decode_cwe)),
    Slot::token("primary_language", |r, t, s| r.primary_language = Some(decode_cwe(Some(t), s))),
];

const PV1: &[Slot<Pv1>] = &[
    Slot::token("set_id", |r, t, s| r.set_id = s.number(t)),
    Slot::token("patient_class", |r, t, s| r.patient_class = s.text(t)),
    Slot::token("assigned_patient_location", |r, t, s| {
        r.assigned_patient_location = Some(decode_pl(Some(t), s))
    }),
    Slot::token("admission_type", |r, t, s| r.admission_type = s.text(t)),
    Slot::token("preadmit_number", |r, t, s| r.preadmit_number = Some(decode_cx(Some(t), s))),
    Slot::token("prior_patient_location", |r, t, s| {
        r.prior_patient_location = Some(decode_pl(Some(t), s))
    }),
    Slot::token("attending_doctor", |r, t, s| {
        r.attending_doctor = decode_repeated(Some(t), s, decode_xcn)
    }),
    Slot::token("referring_doctor", |r, t, s| {
        r.referring_doctor = decode_repeated(Some(t), s, decode_xcn)
    }),
    Slot::token("consulting_doctor", |r, t, s| {
        r.consulting_doctor = decode_repeated(Some(t), s, decode_xcn)
    }),
    Slot::token("hospital_service", |r, t, s| r.hospital_service = s.text(t)),
    Slot::token("temporary_location", |r, t, s| r.temporary_location = Some(decode_pl(Some(t), s))),
    Slot::token("preadmit_test_indicator", |r, t, s| r.preadmit_test_indicator = s.text(t)),
    Slot::token("re_admission_indicator", |r, t, s| r.re_admission_indicator = s.text(t)),
    Slot::token("admit_source", |r, t, s| r.admit_source = s.text(t)),
    Slot::token("ambulatory_status", |r, t, s| r.ambulatory_status = s.repeated_text(t)),
    Slot::token("vip_indicator", |r, t, s| r.vip_indicator = s.text(t)),
    Slot::token("admitting_doctor", |r, t, s| {
        r.admitting_doctor = decode_repeated(Some(t), s, decode_xcn)
    }),
    Slot::token("patient_type", |r, t, s| r.patient_type = s.text(t)),
    Slot::token("visit_number", |r, t, s| r.visit_number = Some(decode_cx(Some(t), s))),
    Slot::token("financial_class", |r, t, s| {
        r.financial_class = decode_repeated(Some(t), s, decode_fc)
    }),
    Slot::token("charge_price_indicator", |r, t, s| r.charge_price_indicator = s.text(t)),
    Slot::token("courtesy_code", |r, t, s| r.courtesy_code = s.text(t)),
    Slot::token("credit_rating", |r, t, s| r.credit_rating = s.text(t)),
    Slot::skip("contract_code"),
    Slot::skip("contract_effective_date"),
    Slot::skip("contract_amount"),
    Slot::skip("contract_period"),
    Slot::skip("interest_code"),
    Slot::skip("transfer_to_bad_debt_code"),
    Slot::skip("transfer_to_bad_debt_date"),
    Slot::skip("bad_debt_agency_code"),
    Slot::skip("bad_debt_transfer_amount"),
    Slot::skip("bad_debt_recovery_amount"),
    Slot::skip("delete_account_indicator"),
    Slot::skip("delete_account_date"),
    Slot::token("discharge_disposition", |r, t, s| r.discharge_disposition = s.text(t)),
    Slot::token("discharged_to_location", |r, t, s| {
        r.discharged_to_location = Some(decode_dld(Some(t), s))
    }),
    Slot::token("diet_type", |r, t, s| r.diet_type = Some(decode_cwe(Some(t), s))),
    Slot::token("servicing_facility", |r, t, s| r.servicing_facility = s.text(t)),
    Slot::token("bed_status", |r, t, s| r.bed_status = s.text(t)),
    Slot::token("account_status", |r, t, s| r.account_status = s.text(t)),
    Slot::token("pending_location", |r, t, s| r.pending_location = Some(decode_pl(Some(t), s))),
    Slot::token("prior_temporary_location", |r, t, s| {
        r.prior_temporary_location = Some(decode_pl(Some(t), s))
    }),
    Slot::token("admit_date_time", |r, t, s| r.admit_date_time = s.text(t)),
    Slot::token("discharge_date_time", |r, t, s| r.discharge_date_time = s.repeated_text(t)),
    Slot::token("current_patient_balance", |r, t, s| r.current_patient_balance = s.text(t)),
    Slot::token("total_charges", |r, t, s| r.total_charges = s.text(t)),
    Slot::token("total_adjustments", |r, t, s| r.total_adjustments = s.text(t)),
    Slot::token("total_payments", |r, t, s| r.total_payments = s.text(t)),
    Slot::token("alternate_visit_id", |r, t, s| r.alternate_visit_id = Some(decode_cx(Some(t), s))),
    Slot::token("visit_indicator", |r, t, s| r.visit_indicator = s.text(t)),
    Slot::token("other_healthcare_provider", |r, t, s| {
        r.other_healthcare_provider = decode_repeated(Some(t), s, decode_xcn)
    }),
];

const PV2: &[Slot<Pv2>] = &[
    Slot::token("prior_pending_location", |r, t, s| {
        r.prior_pending_location = Some(decode_pl(Some(t), s))
    }),
    Slot::token("accommodation_code", |r, t, s| {
        r.accommodation_code = Some(decode_cwe(Some(t), s))
    }),
    Slot::token("admit_reason", |r, t, s| r.admit_reason = Some(decode_cwe(Some(t), s))),
    Slot::token("transfer_reason", |r, t, s| r.transfer_reason = Some(decode_cwe(Some(t), s))),
    Slot::token("patient_valuables", |r, t, s| r.patient_valuables = s.repeated_text(t)),
    Slot::token("patient_valuables_location", |r, t, s| {
        r.patient_valuables_location = s.text(t)
    }),
    Slot::token("visit_user_code", |r, t, s| r.visit_user_code = s.repeated_text(t)),
    Slot::token("expected_admit_date_time", |r, t, s| r.expected_admit_date_time = s.text(t)),
    Slot::token("expected_discharge_date_time", |r, t, s| {
        r.expected_discharge_date_time = s.text(t)
    }),
    Slot::token("estimated_length_of_inpatient_stay", |r, t, s| {
        r.estimated_length_of_inpatient_stay = s.text(t)
    }),
    Slot::token("actual_length_of_inpatient_stay", |r, t, s| {
        r.actual_length_of_inpatient_stay = s.text(t)
    }),
    Slot::token("visit_description", |r, t, s| r.visit_description = s.text(t)),
    Slot::token("referral_source_code", |r, t, s| {
        r.referral_source_code = decode_repeated(Some(t), s, decode_xcn)
    }),
    Slot::token("previous_service_date", |r, t, s| r.previous_service_date = s.text(t)),
    Slot::token("employment_illness_related_indicator", |r, t, s| {
        r.employment_illness_related_indicator = s.text(t)
    }),
    Slot::token("purge_status_code", |r, t, s| r.purge_status_code = s.text(t)),
    Slot::token("purge_status_date", |r, t, s| r.purge_status_date = s.text(t)),
    Slot::token("special_program_code", |r, t, s| r.special_program_code = s.text(t)),
    Slot::token("retention_indicator", |r, t, s| r.retention_indicator = s.text(t)),
    Slot::token("expected_number_of_insurance_plans", |r, t, s| {
        r.expected_number_of_insurance_plans = s.text(t)
    }),
    Slot::token("visit_publicity_code", |r, t, s| r.visit_publicity_code = s.text(t)),
    Slot::token("visit_protection_indicator", |r, t, s| {
        r.visit_protection_indicator = s.text(t)
    }),
    Slot::token("clinic_organization_name", |r, t, s| {
        r.clinic_organization_name = decode_repeated(Some(t), s, decode_xon)
    }),
];

const OBX: &[Slot<Obx>] = &[
    Slot::token("set_id", |r, t, s| r.set_id = s.number(t)),
    Slot::token("value_type", |r, t, s| r.value_type = s.text(t)),
    Slot::token("observation_identifier", |r, t, s| {
        r.observation_identifier = Some(decode_cwe(Some(t), s))
    }),
    Slot::token("observation_sub_id", |r, t, s| r.observation_sub_id = s.text(t)),
    Slot::token("observation_value", |r, t, s| r.observation_value = s.repeated_text(t)),
    Slot::token("units", |r, t, s| r.units = Some(decode_cwe(Some(t), s))),
    Slot::token("references_range", |r, t, s| r.references_range = s.text(t)),
    Slot::token("abnormal_flags", |r, t, s| r.abnormal_flags = s.repeated_text(t)),
    Slot::token("probability", |r, t, s| r.probability = s.text(t)),
    Slot::token("nature_of_abnormal_test", |r, t, s| {
        r.nature_of_abnormal_test = s.repeated_text(t)
    }),
    Slot::token("observation_result_status", |r, t, s| r.observation_result_status = s.text(t)),
    Slot::token("date_last_observed_normal_value", |r, t, s| {
        r.date_last_observed_normal_value = s.text(t)
    }),
    Slot::token("user_defined_access_checks", |r, t, s| {
        r.user_defined_access_checks = s.text(t)
    }),
    Slot::token("date_time_of_the_observation", |r, t, s| {
        r.date_time_of_the_observation = s.text(t)
    }),
    Slot::token("producers_id", |r, t, s| r.producers_id = Some(decode_cwe(Some(t), s))),
    Slot::token("responsible_observer", |r, t, s| {
        r.responsible_observer = decode_repeated(Some(t), s, decode_xcn)
    }),
    Slot::token("observation_method", |r, t, s| {
        r.observation_method = decode_repeated(Some(t), s, decode_cwe)
    }),
    Slot::token("equipment_instance_identifier", |r, t, s| {
        r.equipment_instance_identifier = decode_repeated(Some(t), s, decode_ei)
    }),
    Slot::token("date_time_of_the_analysis", |r, t, s| r.date_time_of_the_analysis = s.text(t)),
];

const AL1: &[Slot<Al1>] = &[
    Slot::token("set_id", |r, t, s| r.set_id = s.number(t)),
    Slot::token("allergen_type_code", |r, t, s| {
        r.allergen_type_code = Some(decode_cwe(Some(t), s))
    }),
    Slot::token("allergen_code", |r, t, s| r.allergen_code = Some(decode_cwe(Some(t), s))),
    Slot::token("allergy_severity_code", |r, t, s| {
        r.allergy_severity_code = Some(decode_cwe(Some(t), s))
    }),
    Slot::token("allergy_reaction_code", |r, t, s| r.allergy_reaction_code = s.repeated_text(t)),
    Slot::token("identification_date", |r, t, s| r.identification_date = s.text(t)),
];

const DG1: &[Slot<Dg1>] = &[
    Slot::token("set_id", |r, t, s| r.set_id = s.number(t)),
    Slot::token("diagnosis_coding_method", |r, t, s| r.diagnosis_coding_method = s.text(t)),
    Slot::token("diagnosis_code", |r, t, s| r.diagnosis_code = Some(decode_cwe(Some(t), s))),
    Slot::token("diagnosis_description", |r, t, s| r.diagnosis_description = s.text(t)),
    Slot::token("diagnosis_date_time", |r, t, s| r.diagnosis_date_time = s.text(t)),
    Slot::token("diagnosis_type", |r, t, s| r.diagnosis_type = s.text(t)),
    Slot::token("major_diagnostic_category", |r, t, s| {
        r.major_diagnostic_category = Some(decode_cwe(Some(t), s))
    }),
    Slot::token("diagnostic_related_group", |r, t, s| {
        r.diagnostic_related_group = Some(decode_cwe(Some(t), s))
    }),
    Slot::token("drg_approval_indicator", |r, t, s| r.drg_approval_indicator = s.text(t)),
    Slot::token("drg_grouper_review_code", |r, t, s| r.drg_grouper_review_code = s.text(t)),
    Slot::token("outlier_type", |r, t, s| r.outlier_type = Some(decode_cwe(Some(t), s))),
    Slot::token("outlier_days", |r, t, s| r.outlier_days = s.text(t)),
    Slot::token("outlier_cost", |r, t, s| r.outlier_cost = s.text(t)),
    Slot::token("grouper_version_and_type", |r, t, s| r.grouper_version_and_type = s.text(t)),
    Slot::token("diagnosis_priority", |r, t, s| r.diagnosis_priority = s.text(t)),
    Slot::token("diagnosing_clinician", |r, t, s| {
        r.diagnosing_clinician = decode_repeated(Some(t), s, decode_xcn)
    }),
    Slot::token("diagnosis_classification", |r, t, s| r.diagnosis_classification = s.text(t)),
    Slot::token("confidential_indicator", |r, t, s| r.confidential_indicator = s.text(t)),
    Slot::token("attestation_date_time", |r, t, s| r.attestation_date_time = s.text(t)),
];

/// Decode a header body, which starts at the field separator after `MSH`.
pub fn decode_msh(body: &str, scope: &Scope<'_>) -> Msh {
    map_elements(scope.split(body), MSH, scope)
}

/// Decode an `EVN` body.
pub fn decode_evn(body: &str, scope: &Scope<'_>) -> Evn {
    map_elements(scope.split(body), EVN, scope)
}

/// Decode a `PID` body. `PID-20` is held by a skip slot.
pub fn decode_pid(body: &str, scope: &Scope<'_>) -> Pid {
    map_elements(scope.split(body), PID, scope)
}

/// Decode a `PD1` body.
pub fn decode_pd1(body: &str, scope: &Scope<'_>) -> Pd1 {
    map_elements(scope.split(body), PD1, scope)
}

/// Decode an `NK1` body.
pub fn decode_nk1(body: &str, scope: &Scope<'_>) -> Nk1 {
    map_elements(scope.split(body), NK1, scope)
}

/// Decode a `PV1` body. `PV1-24` through `PV1-35` are held by skip slots.
pub fn decode_pv1(body: &str, scope: &Scope<'_>) -> Pv1 {
    map_elements(scope.split(body), PV1, scope)
}

/// Decode a `PV2` body.
pub fn decode_pv2(body: &str, scope: &Scope<'_>) -> Pv2 {
    map_elements(scope.split(body), PV2, scope)
}

/// Decode an `OBX` body.
pub fn decode_obx(body: &str, scope: &Scope<'_>) -> Obx {
    map_elements(scope.split(body), OBX, scope)
}

/// Decode an `AL1` body.
pub fn decode_al1(body: &str, scope: &Scope<'_>) -> Al1 {
    map_elements(scope.split(body), AL1, scope)
}

/// Decode a `DG1` body.
pub fn decode_dg1(body: &str, scope: &Scope<'_>) -> Dg1 {
    map_elements(scope.split(body), DG1, scope)
}
