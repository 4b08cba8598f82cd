mod annotate;
mod basic;
mod charset;
mod config;
mod constants;
mod context;
mod cursor;
mod driver;
mod error;
mod label;
mod msg;
mod resolve;
mod segment;

pub use annotate::annotate;
pub use basic::{detect as detect_basic_stub, BasicStub};
pub use charset::Charset;
pub use config::Setup;
pub use constants::default_constants;
pub use driver::{disassemble, Listing, Pass};
pub use error::Error;
pub use label::{Label, Labels};
pub use msg::Msg;
pub use resolve::{resolve, LOCAL_MARKER};
pub use segment::{classify, Class, Segment, SegmentKind};
