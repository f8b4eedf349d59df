mod assembler;
pub mod dump;
pub mod error;
pub mod parser;
pub mod source;
pub mod symbol;

pub use assembler::{assemble, assemble_with, Assembler, Assembly, Listed, Options};
pub use error::{Error, LineError};
pub use hack::Dialect;
pub use source::Source;
pub use symbol::{SymbolMap, SymbolTable};
