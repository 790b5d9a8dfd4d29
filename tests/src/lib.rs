//! Reference messages shared by the end-to-end tests.

/// Header of the reference admission message.
pub const ADT_A04_HEADER: &str =
    "MSH|^~\\&|MESA_ADT|XYZ_ADMITTING|iFW|ZYX_HOSPITAL|||ADT^A04|103102|P|2.4";

pub const ADT_A04_EVN: &str = "EVN||200006070112||||200006070110";

pub const ADT_A04_PID: &str = "PID|||583295^^^ADT1||DOE^JANE||19610615|M||2106-3|123 MAIN STREET^^GREENSBORO^NC^27401-1020|GL|(919)379-1212|(919)271-3434~(919)277-3114||S||PATID12345001^2^M10^ADT1^AN^A|123456789|9-87654^NC";

pub const ADT_A04_PV1: &str = "PV1||E|||||004777^GOOD^SIDNEY^J|||SUR||||ADM|A0";

/// Join segment lines with the standard carriage-return terminator.
pub fn message(segments: &[&str]) -> String {
    segments.join("\r")
}

/// The full reference `ADT^A04` message.
pub fn adt_a04() -> String {
    message(&[ADT_A04_HEADER, ADT_A04_EVN, ADT_A04_PID, ADT_A04_PV1])
}
