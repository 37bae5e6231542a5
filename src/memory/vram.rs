use crate::memory::ppu_address::PpuAddress;
use crate::memory::region::MemoryRegion;

pub const PPU_ADDRESS_SPACE_SIZE: usize = 0x4000;
const ADDRESS_MASK: usize = PPU_ADDRESS_SPACE_SIZE - 1;

/// Raw byte storage behind the video memory layout.
///
/// No bounds checking is done on behalf of callers: addresses come from the
/// layout's address helpers, and writing outside the intended phase of the
/// frame is the caller's responsibility.
pub trait VideoMemory {
    fn read(&self, address: PpuAddress) -> u8;
    fn write(&mut self, address: PpuAddress, value: u8);

    fn write_all(&mut self, start: PpuAddress, values: &[u8]) {
        for (offset, &value) in values.iter().enumerate() {
            self.write(start.advance(offset as u16), value);
        }
    }

    fn fill(&mut self, region: MemoryRegion, value: u8) {
        for offset in 0..region.size() {
            self.write(region.begin().advance(offset), value);
        }
    }
}

/// Memory-backed stand-in for the console's video memory.
pub struct SimulatedVram(Box<[u8; PPU_ADDRESS_SPACE_SIZE]>);

impl SimulatedVram {
    pub fn new() -> SimulatedVram {
        SimulatedVram(Box::new([0; PPU_ADDRESS_SPACE_SIZE]))
    }

    pub fn as_bytes(&self) -> &[u8; PPU_ADDRESS_SPACE_SIZE] {
        &self.0
    }

    pub fn slice(&self, region: MemoryRegion) -> &[u8] {
        &self.0[region.begin().to_usize()..region.end().to_usize()]
    }
}

impl Default for SimulatedVram {
    fn default() -> Self {
        SimulatedVram::new()
    }
}

impl VideoMemory for SimulatedVram {
    #[inline]
    fn read(&self, address: PpuAddress) -> u8 {
        // The PPU only decodes 14 address lines.
        self.0[address.to_usize() & ADDRESS_MASK]
    }

    #[inline]
    fn write(&mut self, address: PpuAddress, value: u8) {
        self.0[address.to_usize() & ADDRESS_MASK] = value;
    }
}

/// Video memory reached through volatile accesses relative to a fixed base.
pub struct MappedVram {
    base: *mut u8,
}

impl MappedVram {
    /// # Safety
    ///
    /// `base` must point to `PPU_ADDRESS_SPACE_SIZE` bytes that stay valid and
    /// writable for as long as the returned value is used.
    pub const unsafe fn new(base: *mut u8) -> MappedVram {
        MappedVram { base }
    }
}

impl VideoMemory for MappedVram {
    #[inline(always)]
    fn read(&self, address: PpuAddress) -> u8 {
        unsafe { core::ptr::read_volatile(self.base.add(address.to_usize() & ADDRESS_MASK)) }
    }

    #[inline(always)]
    fn write(&mut self, address: PpuAddress, value: u8) {
        unsafe { core::ptr::write_volatile(self.base.add(address.to_usize() & ADDRESS_MASK), value) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_covers_exactly_the_region() {
        let mut vram = SimulatedVram::new();
        let region = MemoryRegion::new(PpuAddress::new(0x2000), 0x3C0);
        vram.fill(region, b' ');
        assert_eq!(vram.read(PpuAddress::new(0x1FFF)), 0);
        assert!(vram.slice(region).iter().all(|&byte| byte == b' '));
        assert_eq!(vram.read(PpuAddress::new(0x23C0)), 0);
    }

    #[test]
    fn write_all_is_sequential() {
        let mut vram = SimulatedVram::new();
        vram.write_all(PpuAddress::new(0x214A), b"NES");
        assert_eq!(vram.read(PpuAddress::new(0x214A)), b'N');
        assert_eq!(vram.read(PpuAddress::new(0x214B)), b'E');
        assert_eq!(vram.read(PpuAddress::new(0x214C)), b'S');
    }

    #[test]
    fn mapped_vram_writes_through_pointer() {
        let mut backing = vec![0u8; PPU_ADDRESS_SPACE_SIZE];
        let mut vram = unsafe { MappedVram::new(backing.as_mut_ptr()) };
        vram.write(PpuAddress::new(0x3F00), 0x0F);
        assert_eq!(vram.read(PpuAddress::new(0x3F00)), 0x0F);
        drop(vram);
        assert_eq!(backing[0x3F00], 0x0F);
    }
}
