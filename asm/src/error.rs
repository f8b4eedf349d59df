use color_print::cprintln;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Duplicate symbol: `{0}`")]
    DuplicateSymbol(String),

    #[error("Register out of range: `{0}` (expected R0 to R15)")]
    RegisterOutOfRange(String),

    #[error("Value out of range: `{0}` (expected 0 to 32767)")]
    ValueOutOfRange(String),

    #[error("Unrecognized comp: `{0}`")]
    UnrecognizedComp(String),

    #[error("Unrecognized jump: `{0}`")]
    UnrecognizedJump(String),

    #[error("Syntax Error: cannot parse `{0}`")]
    UnparsableLine(String),

    #[error("Unclosed label: `{0}` is missing `)`")]
    UnclosedLabel(String),

    #[error("Empty label name")]
    EmptyLabel,

    #[error("Failed to open file: {0}")]
    FileOpen(String, #[source] std::io::Error),

    #[error("Failed to read line: {0}")]
    FileRead(String, #[source] std::io::Error),

    #[error("Failed to create file: {0}")]
    FileCreate(String, #[source] std::io::Error),

    #[error("Failed to write file: {0}")]
    FileWrite(String, #[source] std::io::Error),

    #[error("Failed to serialize symbol map")]
    SymbolMap(#[source] serde_yaml::Error),

    #[error("Aborting due to {0} previous error(s)")]
    Aborted(usize),
}

/// An error raised by one source line. `line` is 1-based.
#[derive(Error, Debug)]
#[error("line {line}: {error}")]
pub struct LineError {
    pub line: usize,
    pub error: Error,
}

impl LineError {
    pub fn new(line: usize, error: Error) -> Self {
        LineError { line, error }
    }

    /// Print error with the file location and the offending line
    pub fn print_diag(&self, file: &str, content: Option<&str>) {
        cprintln!("<red,bold>error</>: {}", self.error);
        cprintln!("     <blue>--></> <underline>{}:{}</>", file, self.line);
        cprintln!("      <blue>|</>");
        cprintln!(" <blue>{:>4} |</> {}", self.line, content.unwrap_or(""));
        cprintln!("      <blue>|</>");
    }
}
