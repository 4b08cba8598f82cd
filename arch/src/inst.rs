use crate::{mode::Mode, op::Op};
use std::fmt::Display;

/// Mnemonic of a grid cell. Names outside `Op` are kept as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mnemonic {
    Op(Op),
    Other(String),
}

/// Lower case, as in the listing.
impl Display for Mnemonic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mnemonic::Op(op) => write!(f, "{}", op),
            Mnemonic::Other(name) => write!(f, "{}", name.to_lowercase()),
        }
    }
}

/// One cell of the opcode grid: a mnemonic and its addressing mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inst {
    pub mnemonic: Mnemonic,
    pub mode: Mode,
}

impl Inst {
    pub fn new(op: Op, mode: Mode) -> Self {
        Inst {
            mnemonic: Mnemonic::Op(op),
            mode,
        }
    }

    /// Instruction named by a mnemonic `Op` does not know, e.g. `KIL`.
    pub fn other(name: &str, mode: Mode) -> Self {
        Inst {
            mnemonic: Mnemonic::Other(name.to_string()),
            mode,
        }
    }

    pub fn op(&self) -> Option<Op> {
        match self.mnemonic {
            Mnemonic::Op(op) => Some(op),
            Mnemonic::Other(_) => None,
        }
    }

    /// Parse a grid cell such as `"LDA imm"`.
    ///
    /// A cell that is not an upper case mnemonic followed by a mode token is
    /// not an instruction and yields `Ok(None)`. Any upper case word is a
    /// mnemonic. A well formed cell with an unknown mode token is an error.
    pub fn parse(cell: &str) -> Result<Option<Inst>, String> {
        let mut words = cell.split_whitespace();
        let (mnemonic, token) = match (words.next(), words.next()) {
            (Some(mnemonic), Some(token)) => (mnemonic, token),
            _ => return Ok(None),
        };
        if !mnemonic.chars().all(|c| c.is_ascii_uppercase())
            || !token.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Ok(None);
        }
        let mnemonic = match Op::parse(mnemonic) {
            Ok(op) => Mnemonic::Op(op),
            Err(_) => Mnemonic::Other(mnemonic.to_string()),
        };
        let mode = Mode::parse(token)?;
        Ok(Some(Inst { mnemonic, mode }))
    }

    /// Listing text with an already rendered operand target.
    pub fn format(&self, target: &str) -> String {
        let operand = self.mode.wrap(target);
        if operand.is_empty() {
            format!("{}", self.mnemonic)
        } else {
            format!("{} {}", self.mnemonic, operand)
        }
    }
}

/// Renders back into grid cell form.
impl Display for Inst {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.mnemonic.to_string().to_uppercase(), self.mode)
    }
}
