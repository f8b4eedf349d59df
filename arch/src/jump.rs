use num_enum::{IntoPrimitive, TryFromPrimitive};
use strum::{Display, EnumIter, EnumString};

use crate::dialect::Dialect;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    IntoPrimitive,
    TryFromPrimitive,
    EnumString,
    Display,
    EnumIter,
)]
#[repr(u8)]
pub enum Jump {
    #[strum(serialize = "null")]
    Null = 0b000,
    JGT = 0b001,
    JEQ = 0b010,
    JGE = 0b011,
    JLT = 0b100,
    JNE = 0b101,
    JLE = 0b110,
    JMP = 0b111,
}

impl Jump {
    pub fn parse(s: &str) -> Option<Self> {
        s.parse::<Self>().ok()
    }

    pub fn bits(self, dialect: Dialect) -> u8 {
        match (self, dialect) {
            (Jump::JMP, Dialect::Legacy) => 0b110,
            _ => self.into(),
        }
    }

    pub fn from_bits(bits: u8) -> Option<Self> {
        Self::try_from(bits & 0b111).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    macro_rules! test_jump {
        ($($name:ident: $s:expr => $std:expr, $legacy:expr,)*) => {
            $(
                #[test]
                fn $name() {
                    let jump = Jump::parse($s).unwrap();
                    assert_eq!(jump.bits(Dialect::Standard), $std);
                    assert_eq!(jump.bits(Dialect::Legacy), $legacy);
                    assert_eq!(jump.to_string(), $s);
                }
            )*
        }
    }

    test_jump! {
        test_null: "null" => 0b000, 0b000,
        test_jgt: "JGT" => 0b001, 0b001,
        test_jeq: "JEQ" => 0b010, 0b010,
        test_jge: "JGE" => 0b011, 0b011,
        test_jlt: "JLT" => 0b100, 0b100,
        test_jne: "JNE" => 0b101, 0b101,
        test_jle: "JLE" => 0b110, 0b110,
        test_jmp: "JMP" => 0b111, 0b110,
    }

    #[test]
    fn test_unknown() {
        assert_eq!(Jump::parse("JZZ"), None);
        assert_eq!(Jump::parse("jmp"), None);
        assert_eq!(Jump::parse("NULL"), None);
        assert_eq!(Jump::parse(""), None);
    }

    #[test]
    fn test_from_bits() {
        for jump in Jump::iter() {
            assert_eq!(Jump::from_bits(jump.bits(Dialect::Standard)), Some(jump));
        }
    }
}
