use arch::{mode::Operand, Inst};
use itertools::Itertools;

use crate::{
    annotate::Snapshot,
    basic,
    config::Setup,
    cursor::Cursor,
    driver::Pass,
    error::Error,
    label::Labels,
    msg::Msg,
    resolve::{hex, resolve},
    segment::{classify, Class},
};

/// State of one walk over the image.
///
/// The label table outlives the walk; cursor and snapshot start fresh.
pub struct Context<'a> {
    setup: &'a Setup,
    labels: &'a mut Labels,
    cursor: Cursor<'a>,
    snapshot: Snapshot,
    pass: Pass,
    pub lines: Vec<String>,
    pub msgs: Vec<Msg>,
}

impl<'a> Context<'a> {
    pub fn new(image: &'a [u8], setup: &'a Setup, labels: &'a mut Labels, pass: Pass) -> Self {
        Context {
            setup,
            labels,
            cursor: Cursor::new(image),
            snapshot: Snapshot::default(),
            pass,
            lines: vec![],
            msgs: vec![],
        }
    }

    fn output(&mut self, line: String) {
        if self.pass == Pass::Emit {
            self.lines.push(line);
        }
    }

    pub fn run(&mut self) -> Result<(), Error> {
        let load = self.cursor.read_load_address()?;
        self.output(format!("* = {}", hex(load, 4)));
        if let Some(stub) = basic::detect(self.cursor.image(), load) {
            self.output(format!("// Basic Startup: {} SYS {}", stub.line, stub.sys));
            self.bytes(stub.len)?;
        }
        while !self.cursor.is_done() {
            self.item()?;
        }
        Ok(())
    }

    fn item(&mut self) -> Result<(), Error> {
        let addr = self.cursor.address();
        if self.pass != Pass::Discover {
            let definition = self
                .labels
                .fall_at(addr)
                .filter(|label| label.uses > 0)
                .map(|label| format!("{}:  // {}", label.name, hex(addr, 4)));
            if let Some(line) = definition {
                self.output(line);
            }
        }
        if self.setup.addresses {
            self.output(format!("// {}", hex(addr, 4)));
        }
        match classify(&self.setup.segments, addr) {
            Some(Class::AllBytes(len)) => self.bytes(len),
            Some(Class::Text(len)) => self.text(len),
            Some(Class::SingleByte) => self.bytes(1),
            None => self.instruction(),
        }
    }

    // ------------------------------------------------------------------------
    // Data

    fn bytes(&mut self, len: usize) -> Result<(), Error> {
        let mut bytes = Vec::with_capacity(len);
        for _ in 0..len {
            bytes.push(self.cursor.read_byte()?);
        }
        let line = format!(
            ".byte {}",
            bytes.iter().map(|&b| hex(b as u16, 2)).join(", ")
        );
        self.output(line);
        self.snapshot.clear();
        Ok(())
    }

    fn text(&mut self, len: usize) -> Result<(), Error> {
        self.output(r#".encoding "screencode_upper""#.to_string());
        let mut text = String::new();
        for _ in 0..len {
            let addr = self.cursor.address();
            let code = self.cursor.read_byte()?;
            let decoded = self
                .setup
                .charset
                .decode(code)
                .ok_or(Error::UnknownCharacterCode(addr, code))?;
            text.push_str(decoded);
        }
        self.output(format!(".text \"{}\"", text));
        self.snapshot.clear();
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Code

    fn instruction(&mut self) -> Result<(), Error> {
        let addr = self.cursor.address();
        let opcode = self.cursor.read_byte()?;
        let Some(inst) = self.setup.opcodes.get(opcode) else {
            if self.pass == Pass::Emit {
                self.msgs.push(Msg::Warn(format!(
                    "Unknown opcode {} at {}",
                    hex(opcode as u16, 2),
                    hex(addr, 4)
                )));
            }
            self.output(format!(".byte {}", hex(opcode as u16, 2)));
            self.snapshot.clear();
            return Ok(());
        };

        let (target, operand) = self.operand(&inst)?;
        let comment = self.snapshot.comment(&inst, &target);
        self.snapshot.update(&inst, operand);

        let mut line = format!("\t{}", inst.format(&target));
        if let Some(comment) = comment {
            line.push_str(" // ");
            line.push_str(&comment);
        }
        self.output(line);
        Ok(())
    }

    /// Read the operand of `inst`; returns its rendering and raw value.
    fn operand(&mut self, inst: &Inst) -> Result<(String, Option<u16>), Error> {
        match inst.mode.operand() {
            Operand::None => Ok((String::new(), None)),
            Operand::Value => {
                let value = self.cursor.read_byte()? as u16;
                Ok((hex(value, 2), Some(value)))
            }
            Operand::ZeroPage => {
                let addr = self.cursor.read_byte()? as u16;
                Ok((self.reference(addr, 2)?, Some(addr)))
            }
            Operand::Absolute => {
                let addr = self.cursor.read_word()?;
                Ok((self.reference(addr, 4)?, Some(addr)))
            }
            Operand::Relative => {
                // Offset counts from the byte after the operand.
                let offset = self.cursor.read_byte()? as i8;
                let addr = self.cursor.address().wrapping_add(offset as u16);
                Ok((self.reference(addr, 4)?, Some(addr)))
            }
        }
    }

    fn reference(&mut self, addr: u16, digits: usize) -> Result<String, Error> {
        self.labels.reference(addr);
        resolve(self.labels, addr, self.cursor.address(), digits)
    }
}
