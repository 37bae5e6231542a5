use crate::memory::ppu_address::PpuAddress;

/// A fixed-size view over a contiguous span of video memory.
///
/// Nothing is owned here: a region is only a base address and a length, and
/// both are fixed once it's built. Bytes are written through a
/// [`VideoMemory`](crate::memory::vram::VideoMemory) at the addresses a
/// region hands out.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct MemoryRegion {
    base: PpuAddress,
    size: u16,
}

impl MemoryRegion {
    pub const fn new(base: PpuAddress, size: u16) -> MemoryRegion {
        MemoryRegion { base, size }
    }

    #[inline]
    pub const fn begin(self) -> PpuAddress {
        self.base
    }

    #[inline]
    pub const fn end(self) -> PpuAddress {
        self.base.advance(self.size)
    }

    pub const fn size(self) -> u16 {
        self.size
    }

    pub const fn contains(self, address: PpuAddress) -> bool {
        address.to_u16() >= self.base.to_u16() && address.to_u16() < self.end().to_u16()
    }

    /// True if this region starts exactly where `previous` ends.
    pub const fn follows(self, previous: MemoryRegion) -> bool {
        self.base.to_u16() == previous.end().to_u16()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_is_exclusive() {
        let region = MemoryRegion::new(PpuAddress::new(0x2000), 0x3C0);
        assert_eq!(region.end(), PpuAddress::new(0x23C0));
        assert!(region.contains(PpuAddress::new(0x23BF)));
        assert!(!region.contains(PpuAddress::new(0x23C0)));
        assert!(!region.contains(PpuAddress::new(0x1FFF)));
    }

    #[test]
    fn adjacent_regions_follow() {
        let first = MemoryRegion::new(PpuAddress::new(0x2000), 0x3C0);
        let second = MemoryRegion::new(first.end(), 0x40);
        assert!(second.follows(first));
        assert!(!first.follows(second));
    }
}
