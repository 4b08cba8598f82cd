pub mod inst;
pub mod mode;
pub mod op;
pub mod table;

pub use inst::{Inst, Mnemonic};
pub use mode::Mode;
pub use op::Op;
pub use table::OpcodeTable;
