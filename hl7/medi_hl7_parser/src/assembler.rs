//! Builds a [`Document`] from the lines of one message.

use log::{debug, trace, warn};
use medi_hl7_ast::{Document, RawSegment, SegmentRole};
use medi_hl7_lexer::{
    read_segment_header, segment_lines, EncodingCharacters, SegmentCode, SegmentHeader,
};

use crate::config::DecoderConfig;
use crate::dispatch::{self, MessageStructure};
use crate::error::{DecodeError, Decoded, ParseFailure};
use crate::mapper::Scope;
use crate::segments::*;

/// Where the assembler is in a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssemblerState {
    /// No line has been read; the next one must be the header.
    AwaitingHeader,
    /// The header was accepted and body segments are being decoded.
    Decoding,
    /// Every mandatory segment was present.
    Complete,
    /// Decoding stopped at a fatal error, or mandatory segments were missing.
    Failed,
}

/// Line-at-a-time decoder for a single message.
///
/// The control characters and message structure are fixed by the header
/// line; no later segment can change them.
#[derive(Debug)]
pub struct MessageAssembler<'c> {
    config: &'c DecoderConfig,
    state: AssemblerState,
    structure: Option<&'static MessageStructure>,
    document: Option<Document>,
    warnings: Vec<DecodeError>,
    fatal: Option<DecodeError>,
}

impl<'c> MessageAssembler<'c> {
    /// An assembler waiting for the header line.
    pub fn new(config: &'c DecoderConfig) -> Self {
        Self {
            config,
            state: AssemblerState::AwaitingHeader,
            structure: None,
            document: None,
            warnings: Vec::new(),
            fatal: None,
        }
    }

    /// The current state.
    pub fn state(&self) -> AssemblerState {
        self.state
    }

    /// Non-fatal problems recorded so far.
    pub fn warnings(&self) -> &[DecodeError] {
        &self.warnings
    }

    /// Consume one segment line. `line_number` is only used in diagnostics.
    ///
    /// Returns the error that moved the assembler to `Failed`. Lines fed
    /// after that are ignored.
    pub fn feed(&mut self, line_number: usize, line: &str) -> Result<(), DecodeError> {
        let result = match self.state {
            AssemblerState::AwaitingHeader => self.accept_header(line),
            AssemblerState::Decoding => self.decode_line(line_number, line),
            AssemblerState::Complete | AssemblerState::Failed => {
                trace!("line {line_number}: ignored in state {:?}", self.state);
                return Ok(());
            }
        };
        match result {
            Ok(()) => {
                if self.state == AssemblerState::AwaitingHeader {
                    self.transition(AssemblerState::Decoding);
                }
                Ok(())
            }
            Err(err) => self.report(err),
        }
    }

    /// Check the mandatory segments and hand back the result.
    pub fn finish(mut self) -> Result<Decoded, ParseFailure> {
        if let Some(err) = self.fatal.take() {
            return Err(ParseFailure::fatal(err));
        }
        let (Some(document), Some(structure)) = (self.document.take(), self.structure) else {
            self.transition(AssemblerState::Failed);
            return Err(ParseFailure::fatal(DecodeError::MalformedHeader(
                "message contains no segments".into(),
            )));
        };

        let errors: Vec<DecodeError> = structure
            .mandatory
            .iter()
            .filter(|role| !document.has(**role))
            .map(|role| DecodeError::MissingMandatorySegment(*role))
            .collect();

        if errors.is_empty() {
            self.transition(AssemblerState::Complete);
            Ok(Decoded {
                document,
                warnings: self.warnings,
            })
        } else {
            for err in &errors {
                debug!("{err}");
            }
            self.transition(AssemblerState::Failed);
            Err(ParseFailure {
                errors,
                partial: Some(document),
            })
        }
    }

    fn transition(&mut self, next: AssemblerState) {
        debug!("assembler {:?} -> {:?}", self.state, next);
        self.state = next;
    }

    // Fatal errors stop the assembler; anything else skips the line.
    fn report(&mut self, err: DecodeError) -> Result<(), DecodeError> {
        if err.is_fatal() {
            self.fatal = Some(err.clone());
            self.transition(AssemblerState::Failed);
            return Err(err);
        }
        debug_assert!(err.is_warning(), "{err} raised while reading lines");
        warn!("{err}, skipping");
        self.warnings.push(err);
        Ok(())
    }

    fn accept_header(&mut self, line: &str) -> Result<(), DecodeError> {
        let (encoding, _) = EncodingCharacters::from_header(line)?;
        let header = read_segment_header(line)
            .map_err(|e| DecodeError::MalformedHeader(e.to_string()))?;
        let msh = decode_msh(header.body, &Scope::segment(header.name, encoding, self.config));

        let message_type = msh.message_type.clone().unwrap_or_default();
        let code = message_type.message_code.unwrap_or_default();
        let trigger_event = message_type.trigger_event.unwrap_or_default();
        let Some(structure) = dispatch::lookup(&code, &trigger_event) else {
            debug!(
                "no structure for {code}^{trigger_event}, supported: {}",
                dispatch::supported()
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ")
            );
            return Err(DecodeError::UnsupportedMessageType {
                message_type: code,
                trigger_event,
            });
        };
        debug!("dispatching {}", structure.message_type);

        self.structure = Some(structure);
        self.document = Some(Document::new(encoding, structure.message_type.clone(), msh));
        Ok(())
    }

    fn decode_line(&mut self, line_number: usize, line: &str) -> Result<(), DecodeError> {
        let Some(document) = self.document.as_mut() else {
            return Ok(());
        };
        let header = read_segment_header(line)
            .map_err(|err| DecodeError::from_header_error(line_number, err))?;

        let Some(role) = SegmentRole::for_code(header.code) else {
            trace!("line {line_number}: keeping {} undecoded", header.name);
            document.unparsed.push(RawSegment {
                header: header.name.to_string(),
                body: header.body.to_string(),
            });
            return Ok(());
        };
        if role == SegmentRole::Header {
            return Err(DecodeError::RepeatedHeader { line: line_number });
        }

        if !role.is_repeatable() && document.has(role) {
            debug!("{role} seen more than once, keeping the last occurrence");
        }
        let scope = Scope::segment(header.name, document.encoding, self.config);
        store(document, &header, &scope);
        Ok(())
    }
}

// Singular roles are overwritten, so the last occurrence wins.
fn store(document: &mut Document, header: &SegmentHeader<'_>, scope: &Scope<'_>) {
    let body = header.body;
    match header.code {
        SegmentCode::Evn => document.event = Some(decode_evn(body, scope)),
        SegmentCode::Pid => document.patient_identification = Some(decode_pid(body, scope)),
        SegmentCode::Pd1 => document.additional_demographics = Some(decode_pd1(body, scope)),
        SegmentCode::Pv1 => document.visit = Some(decode_pv1(body, scope)),
        SegmentCode::Pv2 => document.additional_visit = Some(decode_pv2(body, scope)),
        SegmentCode::Nk1 => document.next_of_kin.push(decode_nk1(body, scope)),
        SegmentCode::Obx => document.observations.push(decode_obx(body, scope)),
        SegmentCode::Al1 => document.allergies.push(decode_al1(body, scope)),
        SegmentCode::Dg1 => document.diagnoses.push(decode_dg1(body, scope)),
        SegmentCode::Msh | SegmentCode::Registered | SegmentCode::SiteDefined => {}
    }
}

/// Decode a message using the default configuration.
pub fn parse_message(text: &str) -> Result<Decoded, ParseFailure> {
    parse_message_with_config(text, &DecoderConfig::default())
}

/// Decode a message.
///
/// Segments may be terminated by `\r`, `\n` or `\r\n`. The first segment
/// must be `MSH`; its control characters apply to the whole message.
pub fn parse_message_with_config(
    text: &str,
    config: &DecoderConfig,
) -> Result<Decoded, ParseFailure> {
    let mut assembler = MessageAssembler::new(config);
    for (line_number, line) in segment_lines(text) {
        let line = if config.trim_trailing_whitespace {
            line.trim_end_matches([' ', '\t'])
        } else {
            line
        };
        if line.is_empty() {
            continue;
        }
        if assembler.feed(line_number, line).is_err() {
            break;
        }
    }
    assembler.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::init_test_logger;
    use pretty_assertions::assert_eq;

    const HEADER: &str = "MSH|^~\\&|SEND|FAC|RECV|FAC|20240101||ADT^A01|1|P|2.5";

    #[test]
    fn test_state_transitions() {
        init_test_logger();
        let config = DecoderConfig::default();
        let mut assembler = MessageAssembler::new(&config);
        assert_eq!(assembler.state(), AssemblerState::AwaitingHeader);

        assembler.feed(1, HEADER).unwrap();
        assert_eq!(assembler.state(), AssemblerState::Decoding);
        assembler.feed(2, "EVN|A01").unwrap();
        assembler.feed(3, "PID|1||42").unwrap();
        assembler.feed(4, "PV1|1|I").unwrap();

        let decoded = assembler.finish().unwrap();
        assert!(decoded.warnings.is_empty());
        assert_eq!(decoded.document.message_type.to_string(), "ADT^A01");
    }

    #[test]
    fn test_first_line_must_be_header() {
        init_test_logger();
        let config = DecoderConfig::default();
        let mut assembler = MessageAssembler::new(&config);
        let err = assembler.feed(1, "PID|1||42").unwrap_err();
        assert!(matches!(err, DecodeError::MalformedHeader(_)));
        assert_eq!(assembler.state(), AssemblerState::Failed);

        assembler.feed(2, HEADER).unwrap();
        assert_eq!(assembler.state(), AssemblerState::Failed);

        let failure = assembler.finish().unwrap_err();
        assert_eq!(failure.errors, vec![err]);
        assert_eq!(failure.partial, None);
    }

    #[test]
    fn test_feed_keeps_going_after_warnings() {
        init_test_logger();
        let config = DecoderConfig::default();
        let mut assembler = MessageAssembler::new(&config);
        assembler.feed(1, HEADER).unwrap();
        assembler.feed(2, "QQQ|1").unwrap();
        assembler.feed(3, HEADER).unwrap();
        assembler.feed(4, "ZAB|kept").unwrap();

        assert_eq!(assembler.state(), AssemblerState::Decoding);
        assert_eq!(assembler.warnings().len(), 2);
        assert!(assembler.warnings().iter().all(DecodeError::is_warning));
    }

    #[test]
    fn test_empty_message() {
        let failure = parse_message("\r\n\r\n").unwrap_err();
        assert!(matches!(failure.errors[0], DecodeError::MalformedHeader(_)));
        assert_eq!(failure.partial, None);
    }

    #[test]
    fn test_unsupported_message_type_is_fatal() {
        init_test_logger();
        let failure = parse_message(
            "MSH|^~\\&|A|B|C|D|||ORM^O01|1|P|2.3\rPID|1||42\rPV1|1|I",
        )
        .unwrap_err();
        assert_eq!(
            failure.errors,
            vec![DecodeError::UnsupportedMessageType {
                message_type: "ORM".into(),
                trigger_event: "O01".into(),
            }]
        );
        assert_eq!(failure.partial, None);
    }

    #[test]
    fn test_missing_message_type_is_unsupported() {
        let failure = parse_message("MSH|^~\\&|A|B").unwrap_err();
        assert_eq!(
            failure.errors,
            vec![DecodeError::UnsupportedMessageType {
                message_type: String::new(),
                trigger_event: String::new(),
            }]
        );
    }

    #[test]
    fn test_singular_roles_keep_last_and_repeatable_roles_append() {
        init_test_logger();
        let text = [
            HEADER,
            "EVN|A01",
            "PID|1||FIRST",
            "PID|1||SECOND",
            "PV1|1|I",
            "OBX|1|NM|HR||72",
            "OBX|2|NM|RR||16",
            "AL1|1|DA|PCN",
        ]
        .join("\r");
        let document = parse_message(&text).unwrap().document;
        let pid = document.patient_identification.unwrap();
        assert_eq!(
            pid.patient_identifier_list.unwrap()[0].id.as_deref(),
            Some("SECOND")
        );
        let set_ids: Vec<_> = document.observations.iter().map(|o| o.set_id).collect();
        assert_eq!(set_ids, vec![Some(1), Some(2)]);
        assert_eq!(document.allergies.len(), 1);
    }

    #[test]
    fn test_soft_problems_become_warnings() {
        init_test_logger();
        let text = [
            HEADER,
            "EVN|A01",
            "XYZ|not a segment",
            "PI",
            "PID|1||42",
            "MSH|^~\\&|OTHER",
            "PV1|1|I",
            "ZPD|custom^data",
            "IN1|1|PLAN",
        ]
        .join("\n");
        let decoded = parse_message(&text).unwrap();
        assert_eq!(
            decoded.warnings,
            vec![
                DecodeError::UnrecognizedSegmentHeader {
                    line: 3,
                    header: "XYZ".into()
                },
                DecodeError::TruncatedSegment {
                    line: 4,
                    text: "PI".into()
                },
                DecodeError::RepeatedHeader { line: 6 },
            ]
        );
        assert_eq!(
            decoded.document.unparsed,
            vec![
                RawSegment {
                    header: "ZPD".into(),
                    body: "custom^data".into()
                },
                RawSegment {
                    header: "IN1".into(),
                    body: "1|PLAN".into()
                },
            ]
        );
        assert_eq!(
            decoded
                .document
                .header
                .sending_application
                .and_then(|hd| hd.namespace_id)
                .as_deref(),
            Some("SEND")
        );
    }

    #[test]
    fn test_every_missing_role_is_reported() {
        init_test_logger();
        let failure = parse_message(HEADER).unwrap_err();
        assert_eq!(
            failure.missing_segments(),
            vec![
                SegmentRole::Event,
                SegmentRole::PatientIdentification,
                SegmentRole::Visit,
            ]
        );
        assert!(failure.partial.is_some());
    }

    #[test]
    fn test_trailing_whitespace() {
        let text = format!("{HEADER}\rEVN|A01\rPID|1||42  \t\rPV1|1|I");
        let decoded = parse_message(&text).unwrap();
        let pid = decoded.document.patient_identification.unwrap();
        let id = pid.patient_identifier_list.unwrap();
        assert_eq!(id[0].id.as_deref(), Some("42"));

        let config = DecoderConfig::default().with_trim_trailing_whitespace(false);
        let decoded = parse_message_with_config(&text, &config).unwrap();
        let pid = decoded.document.patient_identification.unwrap();
        let id = pid.patient_identifier_list.unwrap();
        assert_eq!(id[0].id.as_deref(), Some("42  \t"));
    }
}
