use indexmap::IndexMap;

/// Byte to text mapping used for `.text` segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charset {
    chars: Vec<Option<String>>,
}

impl Charset {
    pub fn from_map(map: &IndexMap<u8, String>) -> Self {
        let mut chars = vec![None; 256];
        for (code, text) in map {
            chars[*code as usize] = Some(text.clone());
        }
        Charset { chars }
    }

    pub fn decode(&self, code: u8) -> Option<&str> {
        self.chars[code as usize].as_deref()
    }
}

/// Upper case screen codes. Codes without a plain text rendering
/// (pound, arrows, graphics, reverse video) stay unmapped.
impl Default for Charset {
    fn default() -> Self {
        let mut map = IndexMap::new();
        map.insert(0x00, "@".to_string());
        for code in 0x01..=0x1a_u8 {
            map.insert(code, ((b'A' + code - 1) as char).to_string());
        }
        map.insert(0x1b, "[".to_string());
        map.insert(0x1d, "]".to_string());
        for code in 0x20..=0x3f_u8 {
            let text = match code {
                0x22 => "\\\"".to_string(),
                _ => (code as char).to_string(),
            };
            map.insert(code, text);
        }
        Charset::from_map(&map)
    }
}
