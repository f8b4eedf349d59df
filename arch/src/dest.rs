use std::fmt::Display;

/// Destination flags of a compute instruction, stored to A, D and/or M.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Dest {
    pub a: bool,
    pub d: bool,
    pub m: bool,
}

impl Dest {
    pub const NULL: Dest = Dest {
        a: false,
        d: false,
        m: false,
    };

    /// Each flag is set when its letter occurs anywhere in `s`, so `MD`, `DM`
    /// and `AMD` are all accepted.
    pub fn parse(s: &str) -> Dest {
        Dest {
            a: s.contains('A'),
            d: s.contains('D'),
            m: s.contains('M'),
        }
    }

    pub fn bits(self) -> u8 {
        (self.a as u8) << 2 | (self.d as u8) << 1 | self.m as u8
    }

    pub fn from_bits(bits: u8) -> Dest {
        Dest {
            a: bits & 0b100 != 0,
            d: bits & 0b010 != 0,
            m: bits & 0b001 != 0,
        }
    }

    pub fn is_null(self) -> bool {
        self == Dest::NULL
    }
}

impl Display for Dest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_null() {
            return write!(f, "null");
        }
        // Hack's canonical spelling: AMD, AM, AD, MD
        for (set, c) in [(self.a, 'A'), (self.m, 'M'), (self.d, 'D')] {
            if set {
                write!(f, "{}", c)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_dest {
        ($($name:ident: $s:expr => $bits:expr,)*) => {
            $(
                #[test]
                fn $name() {
                    assert_eq!(Dest::parse($s).bits(), $bits);
                }
            )*
        }
    }

    test_dest! {
        test_empty: "" => 0b000,
        test_m: "M" => 0b001,
        test_d: "D" => 0b010,
        test_md: "MD" => 0b011,
        test_dm: "DM" => 0b011,
        test_a: "A" => 0b100,
        test_am: "AM" => 0b101,
        test_ad: "AD" => 0b110,
        test_amd: "AMD" => 0b111,
        test_dma: "DMA" => 0b111,
    }

    #[test]
    fn test_display() {
        assert_eq!(Dest::NULL.to_string(), "null");
        assert_eq!(Dest::from_bits(0b111).to_string(), "AMD");
        assert_eq!(Dest::from_bits(0b011).to_string(), "MD");
        assert_eq!(Dest::from_bits(0b110).to_string(), "AD");
    }

    #[test]
    fn test_from_bits() {
        for bits in 0..8 {
            assert_eq!(Dest::from_bits(bits).bits(), bits);
        }
    }
}
