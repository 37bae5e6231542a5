use std::fmt;

/// An address in the PPU's 14-bit address space ($0000-$3FFF), held in the
/// platform's full 16-bit address width.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash, Default)]
pub struct PpuAddress(u16);

impl PpuAddress {
    pub const ZERO: PpuAddress = PpuAddress(0x0000);
    /// Width of a PPU address. Packed address encodings must fill it exactly.
    pub const BITS: u32 = u16::BITS;

    pub const fn new(value: u16) -> PpuAddress {
        PpuAddress(value)
    }

    pub const fn to_u16(self) -> u16 {
        self.0
    }

    pub const fn to_usize(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn advance(self, offset: u16) -> PpuAddress {
        PpuAddress(self.0.wrapping_add(offset))
    }

    #[inline]
    pub const fn offset_from(self, base: PpuAddress) -> u16 {
        self.0.wrapping_sub(base.0)
    }
}

impl From<PpuAddress> for u16 {
    fn from(value: PpuAddress) -> Self {
        value.0
    }
}

impl fmt::Display for PpuAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:04X}", self.0)
    }
}

impl fmt::Debug for PpuAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PpuAddress(${:04X})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_and_offset_are_inverse() {
        let base = PpuAddress::new(0x2000);
        let address = base.advance(0x3C0);
        assert_eq!(address.to_u16(), 0x23C0);
        assert_eq!(address.offset_from(base), 0x3C0);
    }

    #[test]
    fn display_is_hex() {
        assert_eq!(PpuAddress::new(0x2ABC).to_string(), "$2ABC");
    }
}
