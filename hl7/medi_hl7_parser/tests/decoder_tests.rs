use medi_hl7_lexer::{EncodingCharacters, EscapePolicy};
use medi_hl7_parser::composites::decode_xpn;
use medi_hl7_parser::segments::{decode_al1, decode_nk1};
use medi_hl7_parser::{parse_message_with_config, DecoderConfig, Scope};
use pretty_assertions::assert_eq;

fn init_test_logger() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Debug)
        .try_init();
}

#[test]
fn test_escape_policy_reaches_leaf_text() {
    init_test_logger();
    let field = Some("O\\T\\BRIEN \\T\\ SONS^ANN");

    let all = DecoderConfig::default();
    let name = decode_xpn(field, &Scope::standalone("PID.5", &all));
    assert_eq!(name.family_name.as_deref(), Some("O&BRIEN & SONS"));

    let first = DecoderConfig::default().with_escape_policy(EscapePolicy::FirstOccurrence);
    let name = decode_xpn(field, &Scope::standalone("PID.5", &first));
    assert_eq!(name.family_name.as_deref(), Some("O&BRIEN \\T\\ SONS"));
    assert_eq!(name.given_name.as_deref(), Some("ANN"));
}

#[test]
fn test_first_occurrence_applies_to_each_component() {
    init_test_logger();
    let config = DecoderConfig::default().with_escape_policy(EscapePolicy::FirstOccurrence);
    let name = decode_xpn(
        Some("A\\T\\B\\T\\C^D\\T\\E"),
        &Scope::standalone("PID.5", &config),
    );
    assert_eq!(name.family_name.as_deref(), Some("A&B\\T\\C"));
    assert_eq!(name.given_name.as_deref(), Some("D&E"));
}

#[test]
fn test_message_uses_header_characters_not_override() {
    init_test_logger();
    let override_chars = EncodingCharacters::new('#', '*', '!', '%', '$').unwrap();
    let config = DecoderConfig::default().with_encoding_override(override_chars);
    let text =
        "MSH|^~\\&|A|B|C|D|||ADT^A08|9|P|2.5\rEVN|A08\rPID|1||7^^^HOSP||DOE^JOHN\rPV1|1|O";
    let decoded = parse_message_with_config(text, &config).unwrap();
    assert_eq!(decoded.document.encoding, EncodingCharacters::default());
    let pid = decoded.document.patient_identification.unwrap();
    assert_eq!(
        pid.patient_name.unwrap()[0].given_name.as_deref(),
        Some("JOHN")
    );
}

#[test]
fn test_set_id_regression_pins_standard_positions() {
    init_test_logger();
    let config = DecoderConfig::default();
    let scope = |name| Scope::segment(name, config.standalone_encoding(), &config);

    // AL1-1 is the set id even when AL1-2 is empty.
    let al1 = decode_al1("4||PCN^Penicillin", &scope("AL1"));
    assert_eq!(al1.set_id, Some(4));
    assert_eq!(
        al1.allergen_type_code.and_then(|c| c.identifier).as_deref(),
        Some("")
    );

    // NK1-1 is the set id even when NK1-2 is populated; a name is not a number.
    let nk1 = decode_nk1("7|ROE^MARIE", &scope("NK1"));
    assert_eq!(nk1.set_id, Some(7));
    let nk1 = decode_nk1("ROE^MARIE|7", &scope("NK1"));
    assert_eq!(nk1.set_id, None);
}
