/// BASIC `SYS` token.
const SYS: u8 = 0x9e;

/// One line BASIC loader such as `10 SYS 2064`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicStub {
    pub line: u16,
    pub sys: String,
    /// Bytes from the load address to the end of the stub.
    pub len: usize,
}

/// Look for a BASIC line starting with `SYS` right after the load address
/// header. The stub ends at the next line pointer; a following `$00 $00`
/// end-of-program marker is included.
pub fn detect(image: &[u8], load: u16) -> Option<BasicStub> {
    let program = image.get(2..)?;
    let next = u16::from_le_bytes([*program.first()?, *program.get(1)?]);
    let line = u16::from_le_bytes([*program.get(2)?, *program.get(3)?]);
    if *program.get(4)? != SYS {
        return None;
    }
    let digits = program.get(5..)?;
    let end = digits.iter().position(|&b| b == 0)?;
    let sys = digits[..end].iter().map(|&b| b as char).collect::<String>();
    let sys = sys.trim().to_string();

    let mut len = next.checked_sub(load)? as usize;
    if len < 5 + end + 1 || len > program.len() {
        return None;
    }
    if program.get(len..len + 2) == Some(&[0u8, 0][..]) {
        len += 2;
    }
    Some(BasicStub { line, sys, len })
}
