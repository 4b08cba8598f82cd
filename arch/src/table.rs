use crate::inst::Inst;
use once_cell::sync::Lazy;

/// Documented NMOS 6502 opcodes, row = high nibble, column = low nibble.
/// Undocumented opcodes are left as `---`.
#[rustfmt::skip]
pub const GRID: [[&str; 16]; 16] = [
    // 0x0_
    ["BRK imp", "ORA inx", "---", "---", "---", "ORA zp", "ASL zp", "---",
     "PHP imp", "ORA imm", "ASL akk", "---", "---", "ORA abs", "ASL abs", "---"],
    // 0x1_
    ["BPL rel", "ORA iny", "---", "---", "---", "ORA zpx", "ASL zpx", "---",
     "CLC imp", "ORA aby", "---", "---", "---", "ORA abx", "ASL abx", "---"],
    // 0x2_
    ["JSR abs", "AND inx", "---", "---", "BIT zp", "AND zp", "ROL zp", "---",
     "PLP imp", "AND imm", "ROL akk", "---", "BIT abs", "AND abs", "ROL abs", "---"],
    // 0x3_
    ["BMI rel", "AND iny", "---", "---", "---", "AND zpx", "ROL zpx", "---",
     "SEC imp", "AND aby", "---", "---", "---", "AND abx", "ROL abx", "---"],
    // 0x4_
    ["RTI imp", "EOR inx", "---", "---", "---", "EOR zp", "LSR zp", "---",
     "PHA imp", "EOR imm", "LSR akk", "---", "JMP abs", "EOR abs", "LSR abs", "---"],
    // 0x5_
    ["BVC rel", "EOR iny", "---", "---", "---", "EOR zpx", "LSR zpx", "---",
     "CLI imp", "EOR aby", "---", "---", "---", "EOR abx", "LSR abx", "---"],
    // 0x6_
    ["RTS imp", "ADC inx", "---", "---", "---", "ADC zp", "ROR zp", "---",
     "PLA imp", "ADC imm", "ROR akk", "---", "JMP ind", "ADC abs", "ROR abs", "---"],
    // 0x7_
    ["BVS rel", "ADC iny", "---", "---", "---", "ADC zpx", "ROR zpx", "---",
     "SEI imp", "ADC aby", "---", "---", "---", "ADC abx", "ROR abx", "---"],
    // 0x8_
    ["---", "STA inx", "---", "---", "STY zp", "STA zp", "STX zp", "---",
     "DEY imp", "---", "TXA imp", "---", "STY abs", "STA abs", "STX abs", "---"],
    // 0x9_
    ["BCC rel", "STA iny", "---", "---", "STY zpx", "STA zpx", "STX zpy", "---",
     "TYA imp", "STA aby", "TXS imp", "---", "---", "STA abx", "---", "---"],
    // 0xA_
    ["LDY imm", "LDA inx", "LDX imm", "---", "LDY zp", "LDA zp", "LDX zp", "---",
     "TAY imp", "LDA imm", "TAX imp", "---", "LDY abs", "LDA abs", "LDX abs", "---"],
    // 0xB_
    ["BCS rel", "LDA iny", "---", "---", "LDY zpx", "LDA zpx", "LDX zpy", "---",
     "CLV imp", "LDA aby", "TSX imp", "---", "LDY abx", "LDA abx", "LDX aby", "---"],
    // 0xC_
    ["CPY imm", "CMP inx", "---", "---", "CPY zp", "CMP zp", "DEC zp", "---",
     "INY imp", "CMP imm", "DEX imp", "---", "CPY abs", "CMP abs", "DEC abs", "---"],
    // 0xD_
    ["BNE rel", "CMP iny", "---", "---", "---", "CMP zpx", "DEC zpx", "---",
     "CLD imp", "CMP aby", "---", "---", "---", "CMP abx", "DEC abx", "---"],
    // 0xE_
    ["CPX imm", "SBC inx", "---", "---", "CPX zp", "SBC zp", "INC zp", "---",
     "INX imp", "SBC imm", "NOP imp", "---", "CPX abs", "SBC abs", "INC abs", "---"],
    // 0xF_
    ["BEQ rel", "SBC iny", "---", "---", "---", "SBC zpx", "INC zpx", "---",
     "SED imp", "SBC aby", "---", "---", "---", "SBC abx", "INC abx", "---"],
];

static DEFAULT: Lazy<OpcodeTable> = Lazy::new(|| {
    let grid: Vec<Vec<String>> = GRID
        .iter()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect();
    OpcodeTable::from_grid(&grid).expect("built-in opcode grid is well formed")
});

/// Parsed opcode grid, one optional instruction per opcode byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpcodeTable {
    cells: Vec<Option<Inst>>,
}

impl OpcodeTable {
    /// Parse a 16x16 grid of cells.
    pub fn from_grid(grid: &[Vec<String>]) -> Result<Self, String> {
        if grid.len() != 16 {
            return Err(format!("Opcode grid has {} rows, expected 16", grid.len()));
        }
        let mut cells = Vec::with_capacity(256);
        for (row_idx, row) in grid.iter().enumerate() {
            if row.len() != 16 {
                return Err(format!(
                    "Opcode grid row {:X}_ has {} cells, expected 16",
                    row_idx,
                    row.len()
                ));
            }
            for (col_idx, cell) in row.iter().enumerate() {
                let inst = Inst::parse(cell)
                    .map_err(|e| format!("{} (opcode ${:X}{:X})", e, row_idx, col_idx))?;
                cells.push(inst);
            }
        }
        Ok(OpcodeTable { cells })
    }

    pub fn get(&self, opcode: u8) -> Option<Inst> {
        let row = (opcode / 16) as usize;
        let col = (opcode % 16) as usize;
        self.cells.get(row * 16 + col).cloned().flatten()
    }

    pub fn len(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for OpcodeTable {
    fn default() -> Self {
        DEFAULT.clone()
    }
}
