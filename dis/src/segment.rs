use serde::{Deserialize, Serialize};

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SegmentKind {
    /// The whole range as one `.byte` block.
    #[serde(rename = "all")]
    AllBytes,
    /// The whole range as one `.text` string.
    #[serde(rename = "text")]
    Text,
    /// One `.byte` line per byte.
    #[default]
    #[serde(rename = "bytes")]
    SingleBytes,
}

/// Address range, `to` inclusive. Only built through `new`, so `from <= to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    from: u16,
    to: u16,
    kind: SegmentKind,
}

impl Segment {
    pub fn new(from: u16, to: u16, kind: SegmentKind) -> Result<Self, Error> {
        if from > to {
            return Err(Error::InvalidSegment(from, to));
        }
        Ok(Segment { from, to, kind })
    }

    pub fn from(&self) -> u16 {
        self.from
    }

    pub fn to(&self) -> u16 {
        self.to
    }

    pub fn kind(&self) -> SegmentKind {
        self.kind
    }

    pub fn size(&self) -> usize {
        (self.to - self.from) as usize + 1
    }

    pub fn contains(&self, addr: u16) -> bool {
        self.from <= addr && addr <= self.to
    }
}

/// How the bytes at an address are to be emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Class {
    AllBytes(usize),
    Text(usize),
    SingleByte,
}

/// First matching segment wins. Block kinds only claim their range at its
/// first address; anywhere else inside a range the byte is emitted alone.
pub fn classify(segments: &[Segment], addr: u16) -> Option<Class> {
    segments
        .iter()
        .find(|seg| seg.contains(addr))
        .map(|seg| match seg.kind {
            SegmentKind::AllBytes if addr == seg.from => Class::AllBytes(seg.size()),
            SegmentKind::Text if addr == seg.from => Class::Text(seg.size()),
            _ => Class::SingleByte,
        })
}
