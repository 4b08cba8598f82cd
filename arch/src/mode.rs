use bimap::BiMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Addressing modes, named by the tokens used in the opcode grid.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
pub enum Mode {
    Imm,
    Imp,
    Akk,
    Zp,
    Zpx,
    Zpy,
    Abs,
    Abx,
    Aby,
    Ind,
    Inx,
    Iny,
    Rel,
}

static MODE_STR: Lazy<BiMap<Mode, &'static str>> = Lazy::new(|| {
    let mut map: BiMap<Mode, &'static str> = BiMap::new();
    map.insert(Mode::Imm, "imm");
    map.insert(Mode::Imp, "imp");
    map.insert(Mode::Akk, "akk");
    map.insert(Mode::Zp, "zp");
    map.insert(Mode::Zpx, "zpx");
    map.insert(Mode::Zpy, "zpy");
    map.insert(Mode::Abs, "abs");
    map.insert(Mode::Abx, "abx");
    map.insert(Mode::Aby, "aby");
    map.insert(Mode::Ind, "ind");
    map.insert(Mode::Inx, "inx");
    map.insert(Mode::Iny, "iny");
    map.insert(Mode::Rel, "rel");
    map
});

/// What the operand bytes of a mode denote.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Operand {
    None,
    Value,
    ZeroPage,
    Absolute,
    Relative,
}

impl Mode {
    pub fn parse(s: &str) -> Result<Mode, String> {
        if let Some(mode) = MODE_STR.get_by_right(s) {
            Ok(*mode)
        } else {
            Err(format!("Unknown Addressing Mode: `{}`", s))
        }
    }

    pub fn token(&self) -> &'static str {
        MODE_STR.get_by_left(self).copied().unwrap_or_default()
    }

    pub fn operand(&self) -> Operand {
        use Mode::*;
        match self {
            Imp | Akk => Operand::None,
            Imm => Operand::Value,
            Zp | Zpx | Zpy | Inx | Iny => Operand::ZeroPage,
            Abs | Abx | Aby | Ind => Operand::Absolute,
            Rel => Operand::Relative,
        }
    }

    /// Number of bytes following the opcode.
    pub fn operand_len(&self) -> u8 {
        match self.operand() {
            Operand::None => 0,
            Operand::Value | Operand::ZeroPage | Operand::Relative => 1,
            Operand::Absolute => 2,
        }
    }

    /// Wrap the rendered target in the syntax of this mode.
    ///
    /// `inx` keeps the index inside the parentheses, `iny` puts it outside.
    pub fn wrap(&self, target: &str) -> String {
        use Mode::*;
        match self {
            Imp | Akk => String::new(),
            Imm => format!("#{}", target),
            Zp | Abs | Rel => target.to_string(),
            Zpx | Abx => format!("{},x", target),
            Zpy | Aby => format!("{},y", target),
            Ind => format!("({})", target),
            Inx => format!("({},x)", target),
            Iny => format!("({}),y", target),
        }
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_mode {
        ($($name:ident: $token:expr => $mode:expr, $len:expr, $shape:expr,)*) => {
            $(
                #[test]
                fn $name() {
                    let mode = Mode::parse($token).unwrap();
                    assert_eq!(mode, $mode);
                    assert_eq!(mode.token(), $token);
                    assert_eq!(mode.operand_len(), $len);
                    assert_eq!(mode.wrap("$10"), $shape);
                }
            )*
        }
    }

    test_mode! {
        test_imm: "imm" => Mode::Imm, 1, "#$10",
        test_imp: "imp" => Mode::Imp, 0, "",
        test_akk: "akk" => Mode::Akk, 0, "",
        test_zp: "zp" => Mode::Zp, 1, "$10",
        test_zpx: "zpx" => Mode::Zpx, 1, "$10,x",
        test_zpy: "zpy" => Mode::Zpy, 1, "$10,y",
        test_abs: "abs" => Mode::Abs, 2, "$10",
        test_abx: "abx" => Mode::Abx, 2, "$10,x",
        test_aby: "aby" => Mode::Aby, 2, "$10,y",
        test_ind: "ind" => Mode::Ind, 2, "($10)",
        test_inx: "inx" => Mode::Inx, 1, "($10,x)",
        test_iny: "iny" => Mode::Iny, 1, "($10),y",
        test_rel: "rel" => Mode::Rel, 1, "$10",
    }

    #[test]
    fn unknown_token() {
        assert!(Mode::parse("izz").is_err());
        assert!(Mode::parse("IMM").is_err());
    }
}
