pub mod comp;
pub mod dest;
pub mod dialect;
pub mod inst;
pub mod jump;
pub mod reg;

pub use comp::{Alu, Comp};
pub use dest::Dest;
pub use dialect::Dialect;
pub use inst::Inst;
pub use jump::Jump;
pub use reg::Builtin;
