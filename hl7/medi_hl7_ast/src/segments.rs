//! Segment records. Field order follows the standard's field numbering;
//! fields with no dedicated decoder are not represented here but still
//! occupy their position when a segment is decoded.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::datatypes::*;

/// MSH - message header
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Msh {
    pub field_separator: Option<String>,
    pub encoding_characters: Option<String>,
    pub sending_application: Option<HierarchicDesignator>,
    pub sending_facility: Option<HierarchicDesignator>,
    pub receiving_application: Option<HierarchicDesignator>,
    pub receiving_facility: Option<HierarchicDesignator>,
    pub date_time_of_message: Option<String>,
    pub security: Option<String>,
    pub message_type: Option<MessageTypeField>,
    pub message_control_id: Option<String>,
    pub processing_id: Option<ProcessingType>,
    pub version_id: Option<VersionId>,
    pub sequence_number: Option<String>,
    pub continuation_pointer: Option<String>,
    pub accept_acknowledgment_type: Option<String>,
    pub application_acknowledgment_type: Option<String>,
    pub country_code: Option<String>,
    pub character_set: Option<Vec<String>>,
    pub principal_language_of_message: Option<CodedValue>,
}

/// EVN - event type
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Evn {
    pub event_type_code: Option<String>,
    pub recorded_date_time: Option<String>,
    pub date_time_planned_event: Option<String>,
    pub event_reason_code: Option<CodedValue>,
    pub operator_id: Option<Vec<PersonIdentifier>>,
    pub event_occurred: Option<String>,
    pub event_facility: Option<HierarchicDesignator>,
}

/// PID - patient identification
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pid {
    pub set_id: Option<u32>,
    pub patient_id: Option<CompositeId>,
    pub patient_identifier_list: Option<Vec<CompositeId>>,
    pub alternate_patient_id: Option<Vec<CompositeId>>,
    pub patient_name: Option<Vec<PersonName>>,
    pub mothers_maiden_name: Option<Vec<PersonName>>,
    pub date_time_of_birth: Option<String>,
    pub administrative_sex: Option<String>,
    pub patient_alias: Option<Vec<PersonName>>,
    pub race: Option<Vec<CodedValue>>,
    pub patient_address: Option<Vec<Address>>,
    pub county_code: Option<String>,
    pub phone_number_home: Option<Vec<TelecomNumber>>,
    pub phone_number_business: Option<Vec<TelecomNumber>>,
    pub primary_language: Option<CodedValue>,
    pub marital_status: Option<CodedValue>,
    pub religion: Option<CodedValue>,
    pub patient_account_number: Option<CompositeId>,
    pub ssn_number: Option<String>,
    pub mothers_identifier: Option<Vec<CompositeId>>,
    pub ethnic_group: Option<Vec<CodedValue>>,
    pub birth_place: Option<String>,
    pub multiple_birth_indicator: Option<String>,
    pub birth_order: Option<String>,
    pub citizenship: Option<Vec<CodedValue>>,
    pub veterans_military_status: Option<CodedValue>,
    pub nationality: Option<CodedValue>,
    pub patient_death_date_and_time: Option<String>,
    pub patient_death_indicator: Option<String>,
}

/// PD1 - patient additional demographic
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pd1 {
    pub living_dependency: Option<Vec<String>>,
    pub living_arrangement: Option<String>,
    pub patient_primary_facility: Option<Vec<OrganizationName>>,
    pub patient_primary_care_provider: Option<Vec<PersonIdentifier>>,
    pub student_indicator: Option<String>,
    pub handicap: Option<String>,
    pub living_will_code: Option<String>,
    pub organ_donor_code: Option<String>,
    pub separate_bill: Option<String>,
    pub duplicate_patient: Option<Vec<CompositeId>>,
    pub publicity_code: Option<CodedValue>,
    pub protection_indicator: Option<String>,
}

/// NK1 - next of kin / associated parties
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Nk1 {
    pub set_id: Option<u32>,
    pub name: Option<Vec<PersonName>>,
    pub relationship: Option<CodedValue>,
    pub address: Option<Vec<Address>>,
    pub phone_number: Option<Vec<TelecomNumber>>,
    pub business_phone_number: Option<Vec<TelecomNumber>>,
    pub contact_role: Option<CodedValue>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub job_title: Option<String>,
    pub job_code_class: Option<JobCodeClass>,
    pub employee_number: Option<CompositeId>,
    pub organization_name: Option<Vec<OrganizationName>>,
    pub marital_status: Option<CodedValue>,
    pub administrative_sex: Option<String>,
    pub date_time_of_birth: Option<String>,
    pub living_dependency: Option<Vec<String>>,
    pub ambulatory_status: Option<Vec<String>>,
    pub citizenship: Option<Vec<CodedValue>>,
    pub primary_language: Option<CodedValue>,
}

/// PV1 - patient visit
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pv1 {
    pub set_id: Option<u32>,
    pub patient_class: Option<String>,
    pub assigned_patient_location: Option<PersonLocation>,
    pub admission_type: Option<String>,
    pub preadmit_number: Option<CompositeId>,
    pub prior_patient_location: Option<PersonLocation>,
    pub attending_doctor: Option<Vec<PersonIdentifier>>,
    pub referring_doctor: Option<Vec<PersonIdentifier>>,
    pub consulting_doctor: Option<Vec<PersonIdentifier>>,
    pub hospital_service: Option<String>,
    pub temporary_location: Option<PersonLocation>,
    pub preadmit_test_indicator: Option<String>,
    pub re_admission_indicator: Option<String>,
    pub admit_source: Option<String>,
    pub ambulatory_status: Option<Vec<String>>,
    pub vip_indicator: Option<String>,
    pub admitting_doctor: Option<Vec<PersonIdentifier>>,
    pub patient_type: Option<String>,
    pub visit_number: Option<CompositeId>,
    pub financial_class: Option<Vec<FinancialClass>>,
    pub charge_price_indicator: Option<String>,
    pub courtesy_code: Option<String>,
    pub credit_rating: Option<String>,
    pub discharge_disposition: Option<String>,
    pub discharged_to_location: Option<DischargeLocation>,
    pub diet_type: Option<CodedValue>,
    pub servicing_facility: Option<String>,
    pub bed_status: Option<String>,
    pub account_status: Option<String>,
    pub pending_location: Option<PersonLocation>,
    pub prior_temporary_location: Option<PersonLocation>,
    pub admit_date_time: Option<String>,
    pub discharge_date_time: Option<Vec<String>>,
    pub current_patient_balance: Option<String>,
    pub total_charges: Option<String>,
    pub total_adjustments: Option<String>,
    pub total_payments: Option<String>,
    pub alternate_visit_id: Option<CompositeId>,
    pub visit_indicator: Option<String>,
    pub other_healthcare_provider: Option<Vec<PersonIdentifier>>,
}

/// PV2 - patient visit, additional information
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pv2 {
    pub prior_pending_location: Option<PersonLocation>,
    pub accommodation_code: Option<CodedValue>,
    pub admit_reason: Option<CodedValue>,
    pub transfer_reason: Option<CodedValue>,
    pub patient_valuables: Option<Vec<String>>,
    pub patient_valuables_location: Option<String>,
    pub visit_user_code: Option<Vec<String>>,
    pub expected_admit_date_time: Option<String>,
    pub expected_discharge_date_time: Option<String>,
    pub estimated_length_of_inpatient_stay: Option<String>,
    pub actual_length_of_inpatient_stay: Option<String>,
    pub visit_description: Option<String>,
    pub referral_source_code: Option<Vec<PersonIdentifier>>,
    pub previous_service_date: Option<String>,
    pub employment_illness_related_indicator: Option<String>,
    pub purge_status_code: Option<String>,
    pub purge_status_date: Option<String>,
    pub special_program_code: Option<String>,
    pub retention_indicator: Option<String>,
    pub expected_number_of_insurance_plans: Option<String>,
    pub visit_publicity_code: Option<String>,
    pub visit_protection_indicator: Option<String>,
    pub clinic_organization_name: Option<Vec<OrganizationName>>,
}

/// OBX - observation / result
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Obx {
    pub set_id: Option<u32>,
    pub value_type: Option<String>,
    pub observation_identifier: Option<CodedValue>,
    pub observation_sub_id: Option<String>,
    pub observation_value: Option<Vec<String>>,
    pub units: Option<CodedValue>,
    pub references_range: Option<String>,
    pub abnormal_flags: Option<Vec<String>>,
    pub probability: Option<String>,
    pub nature_of_abnormal_test: Option<Vec<String>>,
    pub observation_result_status: Option<String>,
    pub date_last_observed_normal_value: Option<String>,
    pub user_defined_access_checks: Option<String>,
    pub date_time_of_the_observation: Option<String>,
    pub producers_id: Option<CodedValue>,
    pub responsible_observer: Option<Vec<PersonIdentifier>>,
    pub observation_method: Option<Vec<CodedValue>>,
    pub equipment_instance_identifier: Option<Vec<EntityIdentifier>>,
    pub date_time_of_the_analysis: Option<String>,
}

/// AL1 - patient allergy information
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Al1 {
    pub set_id: Option<u32>,
    pub allergen_type_code: Option<CodedValue>,
    pub allergen_code: Option<CodedValue>,
    pub allergy_severity_code: Option<CodedValue>,
    pub allergy_reaction_code: Option<Vec<String>>,
    pub identification_date: Option<String>,
}

/// DG1 - diagnosis
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dg1 {
    pub set_id: Option<u32>,
    pub diagnosis_coding_method: Option<String>,
    pub diagnosis_code: Option<CodedValue>,
    pub diagnosis_description: Option<String>,
    pub diagnosis_date_time: Option<String>,
    pub diagnosis_type: Option<String>,
    pub major_diagnostic_category: Option<CodedValue>,
    pub diagnostic_related_group: Option<CodedValue>,
    pub drg_approval_indicator: Option<String>,
    pub drg_grouper_review_code: Option<String>,
    pub outlier_type: Option<CodedValue>,
    pub outlier_days: Option<String>,
    pub outlier_cost: Option<String>,
    pub grouper_version_and_type: Option<String>,
    pub diagnosis_priority: Option<String>,
    pub diagnosing_clinician: Option<Vec<PersonIdentifier>>,
    pub diagnosis_classification: Option<String>,
    pub confidential_indicator: Option<String>,
    pub attestation_date_time: Option<String>,
}
