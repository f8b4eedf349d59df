use bimap::BiMap;
use once_cell::sync::Lazy;
use std::fmt::Display;
use strum::{EnumIter, IntoEnumIterator};

use crate::dialect::Dialect;

/// ALU operation. `X` is the A register or memory `M`, picked by the a-bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Alu {
    Zero,
    One,
    NegOne,
    D,
    X,
    NotD,
    NotX,
    NegD,
    NegX,
    IncD,
    IncX,
    DecD,
    DecX,
    AddDX,
    SubDX,
    SubXD,
    AndDX,
    OrDX,
}

impl Alu {
    pub fn bits(self, dialect: Dialect) -> u8 {
        use Alu::*;
        match self {
            Zero => 0b101010,
            One => 0b111111,
            NegOne => 0b111010,
            D => 0b001100,
            X => 0b110000,
            NotD => 0b001101,
            NotX => 0b110001,
            NegD => 0b001111,
            NegX => 0b110011,
            IncD => 0b011111,
            IncX => match dialect {
                Dialect::Standard => 0b110111,
                Dialect::Legacy => 0b011111,
            },
            DecD => 0b001110,
            DecX => 0b110010,
            AddDX => 0b000010,
            SubDX => 0b010011,
            SubXD => 0b000111,
            AndDX => 0b000000,
            OrDX => 0b010101,
        }
    }

    /// Whether the operation reads A or M.
    pub fn uses_x(self) -> bool {
        use Alu::*;
        matches!(
            self,
            X | NotX | NegX | IncX | DecX | AddDX | SubDX | SubXD | AndDX | OrDX
        )
    }
}

// ----------------------------------------------------------------------------
// Comp

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Comp {
    alu: Alu,
    m: bool,
}

impl Comp {
    /// The memory-select bit only applies to operations reading `X`.
    pub fn new(alu: Alu, m: bool) -> Comp {
        Comp {
            alu,
            m: m && alu.uses_x(),
        }
    }

    pub fn alu(self) -> Alu {
        self.alu
    }

    pub fn m(self) -> bool {
        self.m
    }

    pub fn parse(s: &str, dialect: Dialect) -> Option<Comp> {
        if dialect == Dialect::Legacy && matches!(s, "1" | "D&M") {
            return None;
        }
        match s {
            "M&A" => Some(Comp::new(Alu::AndDX, true)),
            _ => COMP_STR.get_by_right(s).copied(),
        }
    }

    /// a-bit followed by the 6-bit ALU code.
    pub fn bits(self, dialect: Dialect) -> u8 {
        (self.m as u8) << 6 | self.alu.bits(dialect)
    }

    /// Decodes with the standard table.
    pub fn from_bits(bits: u8) -> Option<Comp> {
        let m = bits & 0b100_0000 != 0;
        let code = bits & 0b11_1111;
        Alu::iter()
            .find(|alu| alu.bits(Dialect::Standard) == code)
            .filter(|alu| !m || alu.uses_x())
            .map(|alu| Comp::new(alu, m))
    }
}

impl Display for Comp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match COMP_STR.get_by_left(self) {
            Some(s) => write!(f, "{}", s),
            None => write!(f, "{:?}", self),
        }
    }
}

static COMP_STR: Lazy<BiMap<Comp, &'static str>> = Lazy::new(|| {
    use Alu::*;
    let mut map: BiMap<Comp, &'static str> = BiMap::new();
    map.insert(Comp::new(Zero, false), "0");
    map.insert(Comp::new(One, false), "1");
    map.insert(Comp::new(NegOne, false), "-1");
    map.insert(Comp::new(D, false), "D");
    map.insert(Comp::new(X, false), "A");
    map.insert(Comp::new(X, true), "M");
    map.insert(Comp::new(NotD, false), "!D");
    map.insert(Comp::new(NotX, false), "!A");
    map.insert(Comp::new(NotX, true), "!M");
    map.insert(Comp::new(NegD, false), "-D");
    map.insert(Comp::new(NegX, false), "-A");
    map.insert(Comp::new(NegX, true), "-M");
    map.insert(Comp::new(IncD, false), "D+1");
    map.insert(Comp::new(IncX, false), "A+1");
    map.insert(Comp::new(IncX, true), "M+1");
    map.insert(Comp::new(DecD, false), "D-1");
    map.insert(Comp::new(DecX, false), "A-1");
    map.insert(Comp::new(DecX, true), "M-1");
    map.insert(Comp::new(AddDX, false), "D+A");
    map.insert(Comp::new(AddDX, true), "D+M");
    map.insert(Comp::new(SubDX, false), "D-A");
    map.insert(Comp::new(SubDX, true), "D-M");
    map.insert(Comp::new(SubXD, false), "A-D");
    map.insert(Comp::new(SubXD, true), "M-D");
    map.insert(Comp::new(AndDX, false), "D&A");
    map.insert(Comp::new(AndDX, true), "D&M");
    map.insert(Comp::new(OrDX, false), "D|A");
    map.insert(Comp::new(OrDX, true), "D|M");
    map
});
