use medi_hl7_ast::{to_json, SegmentRole};
use medi_hl7_lexer::EncodingCharacters;
use medi_hl7_parser::{parse_message, parse_message_with_config, DecodeError, DecoderConfig};
use pretty_assertions::assert_eq;
use tests::*;

fn init_test_logger() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Debug)
        .try_init();
}

#[test]
fn test_reference_admission_message() {
    init_test_logger();
    let decoded = parse_message(&adt_a04()).unwrap();
    assert!(decoded.warnings.is_empty());
    let doc = decoded.document;

    assert_eq!(doc.encoding.field_separator, '|');
    assert_eq!(doc.encoding.component_separator, '^');
    assert_eq!(doc.header.field_separator.as_deref(), Some("|"));
    assert_eq!(doc.message_type.to_string(), "ADT^A04");
    assert_eq!(doc.header.message_control_id.as_deref(), Some("103102"));

    let pid = doc.patient_identification.unwrap();
    let ids = pid.patient_identifier_list.unwrap();
    assert_eq!(ids[0].id.as_deref(), Some("583295"));
    assert_eq!(
        ids[0]
            .assigning_authority
            .as_ref()
            .and_then(|hd| hd.namespace_id.as_deref()),
        Some("ADT1")
    );
    let names = pid.patient_name.unwrap();
    let name = &names[0];
    assert_eq!(name.family_name.as_deref(), Some("DOE"));
    assert_eq!(name.given_name.as_deref(), Some("JANE"));
    assert_eq!(pid.date_time_of_birth.as_deref(), Some("19610615"));
    assert_eq!(pid.administrative_sex.as_deref(), Some("M"));

    let addresses = pid.patient_address.unwrap();
    let address = &addresses[0];
    assert_eq!(address.city.as_deref(), Some("GREENSBORO"));
    assert_eq!(address.zip_or_postal_code.as_deref(), Some("27401-1020"));
    assert_eq!(pid.phone_number_business.map(|p| p.len()), Some(2));
    assert_eq!(pid.ssn_number.as_deref(), Some("123456789"));
    let account = pid.patient_account_number.unwrap();
    assert_eq!(account.id.as_deref(), Some("PATID12345001"));
    assert_eq!(account.check_digit_scheme.as_deref(), Some("M10"));

    let pv1 = doc.visit.unwrap();
    assert_eq!(pv1.patient_class.as_deref(), Some("E"));
    assert_eq!(
        pv1.attending_doctor.unwrap()[0].family_name.as_deref(),
        Some("GOOD")
    );
    assert_eq!(pv1.hospital_service.as_deref(), Some("SUR"));

    let evn = doc.event.unwrap();
    assert_eq!(evn.recorded_date_time.as_deref(), Some("200006070112"));
    assert_eq!(evn.event_occurred.as_deref(), Some("200006070110"));
}

#[test]
fn test_missing_event_segment_keeps_partial_document() {
    init_test_logger();
    let text = message(&[ADT_A04_HEADER, ADT_A04_PID, ADT_A04_PV1]);
    let failure = parse_message(&text).unwrap_err();

    assert_eq!(
        failure.errors,
        vec![DecodeError::MissingMandatorySegment(SegmentRole::Event)]
    );
    assert!(failure.to_string().contains("EVN"));

    let partial = failure.partial.unwrap();
    let pid = partial.patient_identification.unwrap();
    assert_eq!(
        pid.patient_identifier_list.unwrap()[0].id.as_deref(),
        Some("583295")
    );
    assert_eq!(partial.visit.unwrap().patient_class.as_deref(), Some("E"));
}

#[test]
fn test_unsupported_message_type() {
    init_test_logger();
    let text = message(&[
        "MSH|^~\\&|LAB|HOSP|RIS|HOSP|||ORM^O01|555|P|2.3",
        ADT_A04_PID,
        ADT_A04_PV1,
    ]);
    let failure = parse_message(&text).unwrap_err();
    assert!(matches!(
        failure.errors.as_slice(),
        [DecodeError::UnsupportedMessageType { message_type, .. }] if message_type == "ORM"
    ));
    assert!(failure.partial.is_none());
}

#[test]
fn test_malformed_header() {
    for text in ["", "MSH", "MSH|^", "MSH|^^~\\&|A", "EVN|A04"] {
        let failure = parse_message(text).unwrap_err();
        assert!(
            matches!(failure.errors[0], DecodeError::MalformedHeader(_)),
            "{text:?} gave {:?}",
            failure.errors
        );
    }
}

#[test]
fn test_parsing_is_deterministic() {
    let text = adt_a04();
    let first = parse_message(&text).unwrap();
    let second = parse_message(&text).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_line_terminators() {
    let segments = [ADT_A04_HEADER, ADT_A04_EVN, ADT_A04_PID, ADT_A04_PV1];
    let expected = parse_message(&segments.join("\r")).unwrap();
    for terminator in ["\n", "\r\n", "\r\r\n"] {
        let decoded = parse_message(&segments.join(terminator)).unwrap();
        assert_eq!(decoded.document, expected.document, "terminator {terminator:?}");
    }
}

#[test]
fn test_unknown_and_site_segments() {
    init_test_logger();
    let text = message(&[
        ADT_A04_HEADER,
        ADT_A04_EVN,
        "QQQ|1|2",
        ADT_A04_PID,
        "ZPI|VIP^Y",
        ADT_A04_PV1,
    ]);
    let decoded = parse_message(&text).unwrap();
    assert_eq!(
        decoded.warnings,
        vec![DecodeError::UnrecognizedSegmentHeader {
            line: 3,
            header: "QQQ".into()
        }]
    );
    assert_eq!(decoded.document.unparsed.len(), 1);
    assert_eq!(decoded.document.unparsed[0].header, "ZPI");
    assert_eq!(decoded.document.unparsed[0].body, "VIP^Y");
    assert!(decoded.document.has(SegmentRole::PatientIdentification));
}

#[test]
fn test_lowercase_site_segment_is_kept_raw() {
    init_test_logger();
    let text = message(&[
        ADT_A04_HEADER,
        ADT_A04_EVN,
        ADT_A04_PID,
        ADT_A04_PV1,
        "Zab|custom",
        "Z-1|1^2",
    ]);
    let decoded = parse_message(&text).unwrap();
    assert!(decoded.warnings.is_empty(), "{:?}", decoded.warnings);
    let headers: Vec<_> = decoded
        .document
        .unparsed
        .iter()
        .map(|raw| (raw.header.as_str(), raw.body.as_str()))
        .collect();
    assert_eq!(headers, vec![("Zab", "custom"), ("Z-1", "1^2")]);
}

#[test]
fn test_custom_control_characters() {
    init_test_logger();
    let text = message(&[
        "MSH#*!%$#SEND#FAC#RECV#FAC###ADT*A01#1#P#2.5",
        "EVN#A01",
        "PID#1##583295***ADT1$1.2.3$ISO!99***MPI##DOE*JANE%T%SMITH",
        "PV1#1#I",
    ]);
    let decoded = parse_message(&text).unwrap();
    let doc = decoded.document;
    assert_eq!(
        doc.encoding,
        EncodingCharacters::new('#', '*', '!', '%', '$').unwrap()
    );
    assert_eq!(doc.header.encoding_characters.as_deref(), Some("*!%$"));

    let pid = doc.patient_identification.unwrap();
    let ids = pid.patient_identifier_list.unwrap();
    assert_eq!(ids.len(), 2);
    let authority = ids[0].assigning_authority.clone().unwrap();
    assert_eq!(authority.namespace_id.as_deref(), Some("ADT1"));
    assert_eq!(authority.universal_id.as_deref(), Some("1.2.3"));
    assert_eq!(
        pid.patient_name.unwrap()[0].given_name.as_deref(),
        Some("JANE$SMITH")
    );
}

#[test]
fn test_three_character_header_defaults_sub_component_separator() {
    let text = message(&[
        "MSH|^~\\|A|B|C|D|||ADT^A01|1|P|2.3",
        "EVN|A01",
        "PID|1||7^^^HOSP&1.2&ISO",
        "PV1|1|I",
    ]);
    let doc = parse_message(&text).unwrap().document;
    assert_eq!(doc.encoding.sub_component_separator, '&');
    assert_eq!(doc.header.encoding_characters.as_deref(), Some("^~\\&"));
    let ids = doc
        .patient_identification
        .unwrap()
        .patient_identifier_list
        .unwrap();
    let id = &ids[0];
    assert_eq!(
        id.assigning_authority
            .as_ref()
            .and_then(|hd| hd.universal_id_type.as_deref()),
        Some("ISO")
    );
}

#[test]
fn test_repeatable_segments_in_order() {
    let text = message(&[
        ADT_A04_HEADER,
        ADT_A04_EVN,
        ADT_A04_PID,
        "NK1|1|ROE^MARIE|SPO^Spouse",
        "NK1|2|DOE^JOHN|FTH^Father",
        ADT_A04_PV1,
        "AL1|1|DA|PCN^Penicillin|SV|HIVES",
        "DG1|1|I10|I10^Hypertension^I10",
        "DG1|2|I10|E11.9^Type 2 diabetes^I10",
    ]);
    let doc = parse_message(&text).unwrap().document;
    let kin: Vec<_> = doc.next_of_kin.iter().map(|n| n.set_id).collect();
    assert_eq!(kin, vec![Some(1), Some(2)]);
    assert_eq!(doc.allergies[0].set_id, Some(1));
    let codes: Vec<_> = doc
        .diagnoses
        .iter()
        .filter_map(|d| d.diagnosis_code.as_ref()?.identifier.clone())
        .collect();
    assert_eq!(codes, vec!["I10".to_string(), "E11.9".to_string()]);
}

#[test]
fn test_first_occurrence_policy_end_to_end() {
    let text = message(&[
        ADT_A04_HEADER,
        ADT_A04_EVN,
        "PID|||1||SMITH\\T\\JONES\\T\\LEE^ANN",
        ADT_A04_PV1,
    ]);
    let all = parse_message(&text).unwrap().document;
    let names = all.patient_identification.unwrap().patient_name.unwrap();
    assert_eq!(names[0].family_name.as_deref(), Some("SMITH&JONES&LEE"));

    let config = DecoderConfig::default()
        .with_escape_policy(medi_hl7_lexer::EscapePolicy::FirstOccurrence);
    let first = parse_message_with_config(&text, &config).unwrap().document;
    let names = first.patient_identification.unwrap().patient_name.unwrap();
    assert_eq!(names[0].family_name.as_deref(), Some("SMITH&JONES\\T\\LEE"));
}

#[test]
fn test_document_to_json() {
    let doc = parse_message(&adt_a04()).unwrap().document;
    let json = to_json(&doc).unwrap();
    assert!(json.contains(r#""family_name": "DOE""#));
    assert!(json.contains(r#""additional_visit": null"#));
}
