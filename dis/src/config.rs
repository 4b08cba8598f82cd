use arch::OpcodeTable;
use indexmap::IndexMap;
use serde::{de::DeserializeOwned, Deserialize};
use std::fmt::Display;
use std::fs::File;
use std::io::BufReader;

use crate::{
    charset::Charset,
    constants::default_constants,
    error::Error,
    segment::{Segment, SegmentKind},
};

/// Everything a run needs besides the image itself.
#[derive(Debug, Clone)]
pub struct Setup {
    pub segments: Vec<Segment>,
    /// Names given to addresses by the user.
    pub labels: IndexMap<u16, String>,
    /// Hardware addresses, declared with `.label` when used.
    pub constants: IndexMap<u16, String>,
    pub opcodes: OpcodeTable,
    pub charset: Charset,
    /// Emit `// $xxxx` before every line.
    pub addresses: bool,
}

impl Default for Setup {
    fn default() -> Self {
        Setup {
            segments: vec![],
            labels: IndexMap::new(),
            constants: default_constants(),
            opcodes: OpcodeTable::default(),
            charset: Charset::default(),
            addresses: false,
        }
    }
}

// ----------------------------------------------------------------------------
// File formats

/// Number written as an integer, a decimal string, `$hex` or `0xhex`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(untagged)]
enum Number {
    Int(u64),
    Text(String),
}

impl Number {
    fn value(&self) -> Option<u64> {
        match self {
            Number::Int(value) => Some(*value),
            Number::Text(text) => {
                let text = text.trim();
                let hex = text
                    .strip_prefix('$')
                    .or_else(|| text.strip_prefix("0x"))
                    .or_else(|| text.strip_prefix("0X"));
                match hex {
                    Some(digits) => u64::from_str_radix(digits, 16).ok(),
                    None => text.parse().ok(),
                }
            }
        }
    }

    fn address(&self) -> Result<u16, Error> {
        self.value()
            .and_then(|value| u16::try_from(value).ok())
            .ok_or_else(|| Error::InvalidAddress(self.to_string()))
    }

    fn char_code(&self) -> Result<u8, Error> {
        self.value()
            .and_then(|value| u8::try_from(value).ok())
            .ok_or_else(|| Error::InvalidCharacterCode(self.to_string()))
    }
}

impl Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Number::Int(value) => write!(f, "{}", value),
            Number::Text(text) => write!(f, "{}", text),
        }
    }
}

#[derive(Debug, Deserialize)]
struct SegmentsFile {
    #[serde(default, alias = "data")]
    segments: Vec<SegmentEntry>,
    #[serde(default)]
    labels: IndexMap<Number, String>,
    #[serde(default)]
    constants: IndexMap<Number, String>,
}

#[derive(Debug, Deserialize)]
struct SegmentEntry {
    from: Number,
    to: Number,
    #[serde(rename = "type", default)]
    kind: SegmentKind,
}

type OpcodesFile = Vec<Vec<String>>;

type CharsetFile = IndexMap<Number, String>;

fn read_yaml<T: DeserializeOwned>(path: &str) -> Result<T, Error> {
    let file = File::open(path).map_err(|e| Error::FileOpen(path.to_string(), e))?;
    serde_yaml::from_reader(BufReader::new(file)).map_err(|e| Error::Config(path.to_string(), e))
}

fn parse_yaml<T: DeserializeOwned>(text: &str, what: &str) -> Result<T, Error> {
    serde_yaml::from_str(text).map_err(|e| Error::Config(what.to_string(), e))
}

// ----------------------------------------------------------------------------
// Loading

impl Setup {
    /// Segments, labels and constant overrides from a YAML or JSON file.
    pub fn load_segments(self, path: &str) -> Result<Self, Error> {
        let file = read_yaml(path)?;
        self.apply_segments(file)
    }

    pub fn parse_segments(self, text: &str) -> Result<Self, Error> {
        let file = parse_yaml(text, "segments")?;
        self.apply_segments(file)
    }

    /// Replacement 16x16 opcode grid.
    pub fn load_opcodes(self, path: &str) -> Result<Self, Error> {
        let grid = read_yaml(path)?;
        self.apply_opcodes(grid)
    }

    pub fn parse_opcodes(self, text: &str) -> Result<Self, Error> {
        let grid = parse_yaml(text, "opcodes")?;
        self.apply_opcodes(grid)
    }

    /// Replacement character table.
    pub fn load_charset(self, path: &str) -> Result<Self, Error> {
        let map = read_yaml(path)?;
        self.apply_charset(map)
    }

    pub fn parse_charset(self, text: &str) -> Result<Self, Error> {
        let map = parse_yaml(text, "charset")?;
        self.apply_charset(map)
    }

    fn apply_segments(mut self, file: SegmentsFile) -> Result<Self, Error> {
        for entry in &file.segments {
            let segment = Segment::new(entry.from.address()?, entry.to.address()?, entry.kind)?;
            self.segments.push(segment);
        }
        for (addr, name) in &file.labels {
            self.labels.insert(addr.address()?, name.clone());
        }
        for (addr, name) in &file.constants {
            self.constants.insert(addr.address()?, name.clone());
        }
        Ok(self)
    }

    fn apply_opcodes(mut self, grid: OpcodesFile) -> Result<Self, Error> {
        self.opcodes = OpcodeTable::from_grid(&grid).map_err(Error::OpcodeTable)?;
        Ok(self)
    }

    fn apply_charset(mut self, map: CharsetFile) -> Result<Self, Error> {
        let mut chars = IndexMap::new();
        for (code, text) in &map {
            chars.insert(code.char_code()?, text.clone());
        }
        self.charset = Charset::from_map(&chars);
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arch::{Inst, Mode, Op};

    #[test]
    fn segments_yaml() {
        let setup = Setup::default()
            .parse_segments(
                r#"
segments:
  - { from: $0810, to: $081f, type: text }
  - { from: 2080, to: "2083", type: all }
  - { from: 0x0900, to: $0900 }
labels:
  $0820: main
  2100: "!loop"
constants:
  $d020: BORDER
  "$c000": MUSIC
"#,
            )
            .unwrap();
        assert_eq!(
            setup.segments,
            vec![
                Segment::new(0x0810, 0x081f, SegmentKind::Text).unwrap(),
                Segment::new(0x0820, 0x0823, SegmentKind::AllBytes).unwrap(),
                Segment::new(0x0900, 0x0900, SegmentKind::SingleBytes).unwrap(),
            ]
        );
        assert_eq!(setup.labels.get(&0x0820).map(String::as_str), Some("main"));
        assert_eq!(setup.labels.get(&2100).map(String::as_str), Some("!loop"));
        assert_eq!(setup.constants.get(&0xd020).map(String::as_str), Some("BORDER"));
        assert_eq!(setup.constants.get(&0xc000).map(String::as_str), Some("MUSIC"));
        assert_eq!(
            setup.constants.get(&0xd018).map(String::as_str),
            Some("VIC_MEMORY_SETUP_REGISTER")
        );
    }

    #[test]
    fn json_segments() {
        let setup = Setup::default()
            .parse_segments(
                r#"{"data": [{"from": 2049, "to": 2060, "type": "all"}], "labels": {"$0810": "start"}}"#,
            )
            .unwrap();
        assert_eq!(
            setup.segments,
            vec![Segment::new(0x0801, 0x080c, SegmentKind::AllBytes).unwrap()]
        );
        assert_eq!(setup.labels.get(&0x0810).map(String::as_str), Some("start"));
    }

    #[test]
    fn bad_addresses() {
        let err = Setup::default()
            .parse_segments("labels:\n  $10000: big\n")
            .unwrap_err();
        assert!(matches!(err, Error::InvalidAddress(ref s) if s == "$10000"), "{:?}", err);

        let err = Setup::default()
            .parse_segments("labels:\n  $zz: bad\n")
            .unwrap_err();
        assert!(matches!(err, Error::InvalidAddress(_)), "{:?}", err);

        let err = Setup::default()
            .parse_segments("segments:\n  - { from: $0900, to: $08ff }\n")
            .unwrap_err();
        assert!(matches!(err, Error::InvalidSegment(0x0900, 0x08ff)), "{:?}", err);

        let err = Setup::default()
            .parse_segments("segments:\n  - { from: $0900, to: $0901, type: words }\n")
            .unwrap_err();
        assert!(matches!(err, Error::Config(_, _)), "{:?}", err);
    }

    #[test]
    fn opcode_grid() {
        let mut rows = vec![];
        for row in 0..16 {
            let cells = (0..16)
                .map(|col| match (row, col) {
                    (0xA, 0x7) => "\"LAX zp\"",
                    (0x0, 0x2) => "\"KIL imp\"",
                    _ => "\"\"",
                })
                .collect::<Vec<_>>();
            rows.push(format!("[{}]", cells.join(", ")));
        }
        let text = format!("[{}]", rows.join(",\n"));
        let setup = Setup::default().parse_opcodes(&text).unwrap();
        assert_eq!(setup.opcodes.get(0xA7), Some(Inst::new(Op::LAX, Mode::Zp)));
        assert_eq!(setup.opcodes.get(0x02), Some(Inst::other("KIL", Mode::Imp)));
        assert_eq!(setup.opcodes.get(0xA9), None);

        let bad = text.replace("LAX zp", "LAX qq");
        let err = Setup::default().parse_opcodes(&bad).unwrap_err();
        assert!(matches!(err, Error::OpcodeTable(_)), "{:?}", err);
    }

    #[test]
    fn charset_map() {
        let setup = Setup::default()
            .parse_charset("0: \"a\"\n\"$01\": \"b\"\n")
            .unwrap();
        assert_eq!(setup.charset.decode(0x00), Some("a"));
        assert_eq!(setup.charset.decode(0x01), Some("b"));
        assert_eq!(setup.charset.decode(0x02), None);

        let err = Setup::default().parse_charset("256: x\n").unwrap_err();
        assert!(matches!(err, Error::InvalidCharacterCode(_)), "{:?}", err);
    }
}
