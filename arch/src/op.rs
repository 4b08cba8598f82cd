use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Instruction mnemonics.
///
/// Parsing is case-insensitive so both the upper case grid cells (`LDA`) and
/// listing text (`lda`) are accepted. Display is always lower case.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Op {
    ADC,
    AND,
    ASL,
    BCC,
    BCS,
    BEQ,
    BIT,
    BMI,
    BNE,
    BPL,
    BRK,
    BVC,
    BVS,
    CLC,
    CLD,
    CLI,
    CLV,
    CMP,
    CPX,
    CPY,
    DEC,
    DEX,
    DEY,
    EOR,
    INC,
    INX,
    INY,
    JMP,
    JSR,
    LDA,
    LDX,
    LDY,
    LSR,
    NOP,
    ORA,
    PHA,
    PHP,
    PLA,
    PLP,
    ROL,
    ROR,
    RTI,
    RTS,
    SBC,
    SEC,
    SED,
    SEI,
    STA,
    STX,
    STY,
    TAX,
    TAY,
    TSX,
    TXA,
    TXS,
    TYA,

    // Undocumented
    ALR,
    ANC,
    ARR,
    AXS,
    DCP,
    ISC,
    JAM,
    LAS,
    LAX,
    RLA,
    RRA,
    SAX,
    SHA,
    SHX,
    SHY,
    SLO,
    SRE,
    TAS,
    XAA,
}

impl Op {
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.parse::<Self>() {
            Ok(op) => Ok(op),
            Err(_) => Err(format!("Undefined Op: {s}")),
        }
    }
}
