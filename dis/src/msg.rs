use color_print::ceprintln;

/// Diagnostic collected while disassembling. Printed on stderr so the
/// listing on stdout stays clean.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    Error(String),
    Warn(String),
    Note(String),
}

impl Msg {
    pub fn print(&self) {
        match self {
            Msg::Error(msg) => ceprintln!("<red,bold>error</>: {}", msg),
            Msg::Warn(msg) => ceprintln!("<yellow,bold>warn</>: {}", msg),
            Msg::Note(msg) => ceprintln!("<green,bold>note</>: {}", msg),
        }
    }

    pub fn is_note(&self) -> bool {
        matches!(self, Msg::Note(_))
    }
}
