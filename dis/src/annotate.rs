use arch::{Inst, Mode, Op};
use indexmap::IndexMap;
use itertools::Itertools;
use once_cell::sync::Lazy;

/// Bit field of a hardware register.
pub struct Field {
    pub shift: u8,
    pub width: u8,
    /// Called with the field value and the whole register value.
    pub render: fn(u8, u8) -> Option<String>,
}

impl Field {
    fn new(shift: u8, width: u8, render: fn(u8, u8) -> Option<String>) -> Self {
        Field {
            shift,
            width,
            render,
        }
    }

    fn decode(&self, value: u8) -> Option<String> {
        let mask = ((1u16 << self.width) - 1) as u8;
        (self.render)((value >> self.shift) & mask, value)
    }
}

pub struct Register {
    pub title: &'static str,
    pub fields: Vec<Field>,
}

fn on_off(flag: u8) -> &'static str {
    if flag != 0 {
        "on"
    } else {
        "off"
    }
}

fn enabled(flag: u8) -> &'static str {
    if flag != 0 {
        "enabled"
    } else {
        "disabled"
    }
}

// CIA interrupt control: bit 7 selects whether the other set bits are
// enabled or disabled, clear bits are left alone.
fn cia_source(flag: u8, value: u8, source: &str) -> Option<String> {
    if flag == 0 {
        return None;
    }
    let verb = if value & 0x80 != 0 { "Enable" } else { "Disable" };
    Some(format!("{} {}", verb, source))
}

/// Registers with a known bit layout, keyed by constant name.
static REGISTERS: Lazy<IndexMap<&'static str, Register>> = Lazy::new(|| {
    let mut map = IndexMap::new();
    map.insert(
        "VIC_MEMORY_SETUP_REGISTER",
        Register {
            title: "Set Screen Addresses : ",
            fields: vec![
                Field::new(4, 4, |v, _| Some(format!("screenmem ${:04x}", v as u16 * 0x400))),
                Field::new(3, 1, |v, _| Some(format!("bitmap ${:04x}", v as u16 * 0x2000))),
                Field::new(1, 3, |v, _| Some(format!("charmem ${:04x}", v as u16 * 0x800))),
            ],
        },
    );
    map.insert(
        "VIC_SCREEN_CONTROL_REGISTER_1",
        Register {
            title: "",
            fields: vec![
                Field::new(0, 3, |v, _| Some(format!("vertical scroll {}", v))),
                Field::new(3, 1, |v, _| Some(format!("screen height {}", 24 + v))),
                Field::new(4, 1, |v, _| Some(format!("set screen {}", on_off(v)))),
                Field::new(5, 1, |v, _| {
                    Some(format!("{} mode", if v != 0 { "bitmap" } else { "text" }))
                }),
                Field::new(6, 1, |v, _| {
                    Some(format!("extended background mode {}", on_off(v)))
                }),
                Field::new(7, 1, |v, _| Some(format!("bit 8 raster line interrupt {}", v))),
            ],
        },
    );
    map.insert(
        "VIC_SCREEN_CONTROL_REGISTER_2",
        Register {
            title: "",
            fields: vec![
                Field::new(0, 3, |v, _| Some(format!("horizontal scroll {}", v))),
                Field::new(3, 1, |v, _| Some(format!("screen width {}", 38 + 2 * v))),
                Field::new(4, 1, |v, _| Some(format!("multicolor mode {}", on_off(v)))),
            ],
        },
    );
    map.insert(
        "VIC_RASTER_INTERRUPT_CONTROL",
        Register {
            title: "",
            fields: vec![
                Field::new(0, 1, |v, _| Some(format!("Raster interrupt {}", enabled(v)))),
                Field::new(1, 1, |v, _| {
                    Some(format!("Sprite-background collision interrupt {}", enabled(v)))
                }),
                Field::new(2, 1, |v, _| {
                    Some(format!("Sprite-sprite collision interrupt {}", enabled(v)))
                }),
                Field::new(3, 1, |v, _| Some(format!("Light pen interrupt {}", enabled(v)))),
            ],
        },
    );
    map.insert(
        "INTERRUPT_CONTROL_AND_STATUS_REGISTER",
        Register {
            title: "",
            fields: vec![
                Field::new(0, 1, |v, r| cia_source(v, r, "timer A underflow")),
                Field::new(1, 1, |v, r| cia_source(v, r, "timer B underflow")),
                Field::new(2, 1, |v, r| cia_source(v, r, "TOD alarm interrupt")),
                Field::new(3, 1, |v, r| {
                    cia_source(v, r, "byte received/sent via serial shift")
                }),
                Field::new(4, 1, |v, r| cia_source(v, r, "positive edge on FLAG pin")),
            ],
        },
    );
    map
});

/// Explain `value` written to the register named `register`.
pub fn annotate(register: &str, value: u8) -> Option<String> {
    let register = REGISTERS.get(register)?;
    let parts = register
        .fields
        .iter()
        .filter_map(|field| field.decode(value))
        .collect::<Vec<_>>();
    if parts.is_empty() {
        return None;
    }
    Some(format!("{}{}", register.title, parts.iter().join(", ")))
}

/// Value last loaded into the accumulator by the previous instruction.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Snapshot {
    accumulator: Option<u8>,
}

impl Snapshot {
    /// Comment for `inst` whose operand rendered as `target`.
    pub fn comment(&self, inst: &Inst, target: &str) -> Option<String> {
        match (inst.op(), inst.mode, self.accumulator) {
            (Some(Op::STA), Mode::Abs, Some(value)) => annotate(target, value),
            _ => None,
        }
    }

    /// Record `inst` as the previous instruction.
    pub fn update(&mut self, inst: &Inst, operand: Option<u16>) {
        self.accumulator = match (inst.op(), inst.mode, operand) {
            (Some(Op::LDA), Mode::Imm, Some(value)) => Some(value as u8),
            _ => None,
        };
    }

    pub fn clear(&mut self) {
        self.accumulator = None;
    }
}
