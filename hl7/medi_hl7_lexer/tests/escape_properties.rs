use medi_hl7_lexer::{escape, unescape, EncodingCharacters, EscapeCode, EscapePolicy};
use proptest::prelude::*;

fn init_test_logger() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Trace)
        .try_init();
}

fn custom_encoding() -> EncodingCharacters {
    EncodingCharacters::new('#', '*', '!', '%', '$').unwrap()
}

#[test]
fn test_every_code_round_trips() {
    init_test_logger();
    let enc = EncodingCharacters::default();
    for code in EscapeCode::ALL {
        let literal = code.literal(&enc).to_string();
        let escaped = escape(&literal, &enc);
        assert_eq!(
            unescape(Some(&escaped), &enc, EscapePolicy::AllOccurrences).as_deref(),
            Some(literal.as_str()),
            "code {code:?}"
        );
    }
}

#[test]
fn test_line_break_decodes_to_carriage_return() {
    let enc = EncodingCharacters::default();
    let out = unescape(Some("first\\.br\\second"), &enc, EscapePolicy::AllOccurrences);
    assert_eq!(out.as_deref(), Some("first\rsecond"));
}

proptest! {
    #[test]
    fn unescape_inverts_escape(text in ".*") {
        let enc = EncodingCharacters::default();
        let escaped = escape(&text, &enc);
        let decoded = unescape(Some(&escaped), &enc, EscapePolicy::AllOccurrences);
        prop_assert_eq!(decoded, Some(text));
    }

    #[test]
    fn unescape_inverts_escape_for_custom_characters(text in "[a-z#*!%$ \r\n]*") {
        let enc = custom_encoding();
        let escaped = escape(&text, &enc);
        prop_assert!(!escaped.contains('#'));
        let decoded = unescape(Some(&escaped), &enc, EscapePolicy::AllOccurrences);
        prop_assert_eq!(decoded, Some(text));
    }

    #[test]
    fn text_without_escape_character_is_unchanged(text in "[^\\\\]*") {
        let enc = EncodingCharacters::default();
        for policy in [EscapePolicy::AllOccurrences, EscapePolicy::FirstOccurrence] {
            let once = unescape(Some(&text), &enc, policy);
            prop_assert_eq!(once.as_deref(), Some(text.as_str()));
        }
    }

    #[test]
    fn unescape_is_idempotent_once_sequences_are_gone(text in "[a-zA-Z0-9 |^~&]*") {
        let enc = EncodingCharacters::default();
        let once = unescape(Some(&escape(&text, &enc)), &enc, EscapePolicy::AllOccurrences);
        let twice = unescape(once.as_deref(), &enc, EscapePolicy::AllOccurrences);
        prop_assert_eq!(once, twice);
    }
}
