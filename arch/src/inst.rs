use crate::{comp::Comp, dest::Dest, dialect::Dialect, jump::Jump};

use color_print::cformat;
use std::fmt::Display;

/// Largest value an address instruction can carry.
pub const ADDR_MAX: u16 = 0x7FFF;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inst {
    Addr(u16),
    Comp { dest: Dest, comp: Comp, jump: Jump },
}

impl Inst {
    pub fn to_bin(&self, dialect: Dialect) -> u16 {
        match self {
            Inst::Addr(value) => value & ADDR_MAX,
            Inst::Comp { dest, comp, jump } => {
                0b111 << 13
                    | (comp.bits(dialect) as u16) << 6
                    | (dest.bits() as u16) << 3
                    | jump.bits(dialect) as u16
            }
        }
    }

    /// Decodes a machine word with the standard tables.
    pub fn from_bin(bin: u16) -> Option<Inst> {
        if bin & 0x8000 == 0 {
            return Some(Inst::Addr(bin));
        }
        if bin >> 13 != 0b111 {
            return None;
        }
        Some(Inst::Comp {
            comp: Comp::from_bits(((bin >> 6) & 0x7F) as u8)?,
            dest: Dest::from_bits(((bin >> 3) & 0x7) as u8),
            jump: Jump::from_bits((bin & 0x7) as u8)?,
        })
    }

    /// The 16-character `0`/`1` text of the machine word.
    pub fn to_text(&self, dialect: Dialect) -> String {
        format!("{:016b}", self.to_bin(dialect))
    }
}

impl Display for Inst {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Inst::Addr(value) => write!(f, "@{}", value),
            Inst::Comp { dest, comp, jump } => {
                if !dest.is_null() {
                    write!(f, "{}=", dest)?;
                }
                write!(f, "{}", comp)?;
                if *jump != Jump::Null {
                    write!(f, ";{}", jump)?;
                }
                Ok(())
            }
        }
    }
}

impl Inst {
    pub fn cformat(&self) -> String {
        match self {
            Inst::Addr(value) => cformat!("<r>@</><y>{}</>", value),
            Inst::Comp { dest, comp, jump } => {
                let dest = if dest.is_null() {
                    String::new()
                } else {
                    cformat!("<b>{}</>=", dest)
                };
                let jump = match jump {
                    Jump::Null => String::new(),
                    _ => cformat!(";<r>{}</>", jump),
                };
                cformat!("{}<g>{}</>{}", dest, comp, jump)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comp(dest: &str, comp: &str, jump: &str) -> Inst {
        Inst::Comp {
            dest: Dest::parse(dest),
            comp: Comp::parse(comp, Dialect::Standard).unwrap(),
            jump: Jump::parse(jump).unwrap(),
        }
    }

    macro_rules! test_inst {
        ($($name:ident: $inst:expr => $bin:expr, $text:expr,)*) => {
            $(
                #[test]
                fn $name() {
                    let inst = $inst;
                    assert_eq!(inst.to_text(Dialect::Standard), $bin);
                    assert_eq!(inst.to_string(), $text);
                    assert_eq!(Inst::from_bin(inst.to_bin(Dialect::Standard)), Some(inst));
                }
            )*
        }
    }

    test_inst! {
        test_addr_zero: Inst::Addr(0) => "0000000000000000", "@0",
        test_addr_two: Inst::Addr(2) => "0000000000000010", "@2",
        test_addr_max: Inst::Addr(ADDR_MAX) => "0111111111111111", "@32767",
        test_d_eq_a: comp("D", "A", "null") => "1110110000010000", "D=A",
        test_d_eq_d_plus_a: comp("D", "D+A", "null") => "1110000010010000", "D=D+A",
        test_m_eq_d: comp("M", "D", "null") => "1110001100001000", "M=D",
        test_jmp: comp("", "0", "JMP") => "1110101010000111", "0;JMP",
        test_d_jgt: comp("", "D", "JGT") => "1110001100000001", "D;JGT",
        test_am_eq_m_plus_1: comp("AM", "M+1", "null") => "1111110111101000", "AM=M+1",
        test_full: comp("AMD", "D|M", "JNE") => "1111010101111101", "AMD=D|M;JNE",
    }

    #[test]
    fn test_legacy_jmp() {
        let inst = comp("", "0", "JMP");
        assert_eq!(inst.to_text(Dialect::Legacy), "1110101010000110");
    }

    #[test]
    fn test_addr_is_masked() {
        assert_eq!(Inst::Addr(0xFFFF).to_bin(Dialect::Standard), ADDR_MAX);
    }

    #[test]
    fn test_from_bin_rejects() {
        // bits 14..13 must be set on compute instructions
        assert_eq!(Inst::from_bin(0b1000_1100_0001_0000), None);
        // a=1 with `D`
        assert_eq!(Inst::from_bin(0b1111_0011_0001_0000), None);
    }

    #[test]
    fn test_addr_bits_roundtrip() {
        for n in [0u16, 1, 2, 3, 15, 16, 255, 256, 1024, 16384, 24576, 32767] {
            let text = Inst::Addr(n).to_text(Dialect::Standard);
            assert_eq!(text.len(), 16);
            assert!(text.starts_with('0'));
            assert_eq!(u16::from_str_radix(&text[1..], 2), Ok(n));
        }
    }
}
