use crate::error::Error;

/// Sequential reader over a program image.
///
/// The first two bytes of the image are the load address, so the address of
/// the byte at `pos` is `load + pos - 2`.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    image: &'a [u8],
    pos: usize,
    load: u16,
}

impl<'a> Cursor<'a> {
    pub fn new(image: &'a [u8]) -> Self {
        Cursor {
            image,
            pos: 0,
            load: 0,
        }
    }

    pub fn read_byte(&mut self) -> Result<u8, Error> {
        let byte = *self
            .image
            .get(self.pos)
            .ok_or(Error::OutOfBounds(self.address()))?;
        self.pos += 1;
        Ok(byte)
    }

    /// Little endian.
    pub fn read_word(&mut self) -> Result<u16, Error> {
        let lo = self.read_byte()?;
        let hi = self.read_byte()?;
        Ok(u16::from_le_bytes([lo, hi]))
    }

    /// Consume the two byte header and return the load address.
    pub fn read_load_address(&mut self) -> Result<u16, Error> {
        self.load = self.read_word()?;
        Ok(self.load)
    }

    pub fn address(&self) -> u16 {
        self.load.wrapping_add(self.pos as u16).wrapping_sub(2)
    }

    pub fn is_done(&self) -> bool {
        self.pos >= self.image.len()
    }

    pub fn image(&self) -> &'a [u8] {
        self.image
    }
}
