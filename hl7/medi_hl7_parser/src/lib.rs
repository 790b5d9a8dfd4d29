//! Decoder for HL7 v2 pipe-delimited messages.
//!
//! [`parse_message`] reads the control characters from the `MSH` segment,
//! dispatches on the message type and trigger event, and decodes every
//! known segment positionally into a [`medi_hl7_ast::Document`]. The
//! segment and composite decoders are public so they can be run on their
//! own, with the control characters supplied through a [`Scope`].

#![warn(missing_docs)]

pub mod assembler;
pub mod composites;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod mapper;
pub mod segments;

pub use assembler::{
    parse_message, parse_message_with_config, AssemblerState, MessageAssembler,
};
pub use config::DecoderConfig;
pub use error::{DecodeError, Decoded, ParseFailure};
pub use mapper::{Scope, Slot};

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Once;

    use env_logger::Builder;
    use log::LevelFilter;

    static INIT: Once = Once::new();

    /// Initialize the logger for tests
    pub fn init_test_logger() {
        INIT.call_once(|| {
            let _ = Builder::new()
                .is_test(true)
                .filter_level(LevelFilter::Trace)
                .format(|buf, record| {
                    writeln!(
                        buf,
                        "[{}] {}: {}",
                        record.level(),
                        record.target(),
                        record.args()
                    )
                })
                .try_init();
        });
    }
}
