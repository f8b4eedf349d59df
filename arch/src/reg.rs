use num_enum::IntoPrimitive;
use strum::{Display, EnumIter, EnumString};

/// `R0`..`R15`
pub const REG_COUNT: u16 = 16;

/// Variables are allocated from here upwards.
pub const VAR_BASE: u16 = 16;

/// Predefined symbols with a fixed address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoPrimitive, EnumString, Display, EnumIter)]
#[repr(u16)]
pub enum Builtin {
    SP = 0,
    LCL = 1,
    ARG = 2,
    THIS = 3,
    THAT = 4,
    SCREEN = 0x4000,
    KBD = 0x6000,
}

impl Builtin {
    /// `extended` enables `THAT`, `SCREEN` and `KBD` on top of the four
    /// reserved pointers.
    pub fn parse(s: &str, extended: bool) -> Option<Self> {
        let builtin = s.parse::<Self>().ok()?;
        (extended || builtin.is_reserved()).then_some(builtin)
    }

    pub fn is_reserved(self) -> bool {
        matches!(
            self,
            Builtin::SP | Builtin::LCL | Builtin::ARG | Builtin::THIS
        )
    }

    pub fn addr(self) -> u16 {
        self.into()
    }
}
