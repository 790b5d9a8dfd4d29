//! The closed registry of segment codes.
//!
//! Segments this workspace decodes field-by-field get their own variant.
//! Every other segment defined by the standard shares `Registered`, and
//! site-defined extensions (any code starting with `Z`) are `SiteDefined`.

use logos::Logos;

/// A recognized three-letter segment code.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentCode {
    /// Message header
    #[token("MSH")]
    Msh,
    /// Event type
    #[token("EVN")]
    Evn,
    /// Patient identification
    #[token("PID")]
    Pid,
    /// Additional demographics
    #[token("PD1")]
    Pd1,
    /// Next of kin / associated parties
    #[token("NK1")]
    Nk1,
    /// Patient visit
    #[token("PV1")]
    Pv1,
    /// Patient visit - additional information
    #[token("PV2")]
    Pv2,
    /// Observation / result
    #[token("OBX")]
    Obx,
    /// Patient allergy information
    #[token("AL1")]
    Al1,
    /// Diagnosis
    #[token("DG1")]
    Dg1,

    /// Any other segment defined by the standard.
    #[token("ACC")]
    #[token("ADD")]
    #[token("AIG")]
    #[token("AIL")]
    #[token("AIP")]
    #[token("AIS")]
    #[token("APR")]
    #[token("ARQ")]
    #[token("AUT")]
    #[token("BHS")]
    #[token("BLG")]
    #[token("BTS")]
    #[token("CDM")]
    #[token("CSR")]
    #[token("CTD")]
    #[token("CTI")]
    #[token("DB1")]
    #[token("DRG")]
    #[token("DSC")]
    #[token("DSP")]
    #[token("EQU")]
    #[token("ERR")]
    #[token("FHS")]
    #[token("FT1")]
    #[token("FTS")]
    #[token("GT1")]
    #[token("IAM")]
    #[token("IN1")]
    #[token("IN2")]
    #[token("IN3")]
    #[token("LAN")]
    #[token("MFA")]
    #[token("MFE")]
    #[token("MFI")]
    #[token("MRG")]
    #[token("MSA")]
    #[token("NPU")]
    #[token("NTE")]
    #[token("OBR")]
    #[token("ODS")]
    #[token("ODT")]
    #[token("ORC")]
    #[token("PR1")]
    #[token("PRA")]
    #[token("PRB")]
    #[token("PRD")]
    #[token("PTH")]
    #[token("QAK")]
    #[token("QPD")]
    #[token("QRD")]
    #[token("QRF")]
    #[token("RCP")]
    #[token("RF1")]
    #[token("RGS")]
    #[token("ROL")]
    #[token("RXA")]
    #[token("RXC")]
    #[token("RXE")]
    #[token("RXO")]
    #[token("RXR")]
    #[token("SCH")]
    #[token("SFT")]
    #[token("SPM")]
    #[token("STF")]
    #[token("TQ1")]
    #[token("TXA")]
    #[token("UB1")]
    #[token("UB2")]
    Registered,

    /// A site-defined segment: `Z` followed by any two characters.
    #[regex(r"Z[^\r\n]{2}")]
    SiteDefined,
}

impl SegmentCode {
    /// Recognize `name` as a whole; partial matches are rejected.
    pub fn recognize(name: &str) -> Option<Self> {
        let mut lex = Self::lexer(name);
        match lex.next() {
            Some(Ok(code)) if lex.span() == (0..name.len()) => Some(code),
            _ => None,
        }
    }
}
