use color_print::ceprintln;
use thiserror::Error;

use crate::msg::Msg;

#[derive(Error, Debug)]
pub enum Error {
    // Image walking errors
    #[error("Unexpected end of image at ${0:04x}")]
    OutOfBounds(u16),

    #[error("Unknown character code ${1:02x} in text at ${0:04x}")]
    UnknownCharacterCode(u16, u8),

    #[error("Local label `{1}` referenced from its own address ${0:04x}")]
    SelfRelativeReference(u16, String),

    #[error("Duplicate label `{name}` at ${at:04x}: ${closer:04x} is nearer than ${target:04x}")]
    DuplicateLabelName {
        at: u16,
        name: String,
        target: u16,
        closer: u16,
    },

    // Configuration errors
    #[error("Invalid opcode table: {0}")]
    OpcodeTable(String),

    #[error("Invalid address: `{0}`")]
    InvalidAddress(String),

    #[error("Invalid segment: ${0:04x}-${1:04x} ends before it starts")]
    InvalidSegment(u16, u16),

    #[error("Invalid character code: `{0}`")]
    InvalidCharacterCode(String),

    #[error("Failed to parse {0}")]
    Config(String, #[source] serde_yaml::Error),

    // File errors
    #[error("Failed to open file: {0}")]
    FileOpen(String, #[source] std::io::Error),

    #[error("Failed to write file: {0}")]
    FileWrite(String, #[source] std::io::Error),
}

impl Error {
    /// Print the error and its causes, pointing at the input file.
    pub fn diag(&self, file: &str) {
        Msg::Error(self.to_string()).print();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            ceprintln!("       <blue>caused by</>: {}", cause);
            source = cause.source();
        }
        ceprintln!("     <blue>--></> <underline>{}</>", file);
    }
}
