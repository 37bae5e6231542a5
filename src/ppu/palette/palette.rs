use crate::memory::ppu_address::PpuAddress;
use crate::memory::region::MemoryRegion;
use crate::memory::vram::VideoMemory;
use crate::ppu::constants::{NUM_COLORS, NUM_PALETTES, PALETTE_SIZE};
use crate::ppu::palette::color::Color;

/// Four palettes of four color codes each. Color 0 of every palette is the
/// transparent/background slot.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Palette(MemoryRegion);

impl Palette {
    pub const SIZE: u16 = PALETTE_SIZE;

    pub const fn at(start: PpuAddress) -> Palette {
        Palette(MemoryRegion::new(start, Self::SIZE))
    }

    pub const fn begin(&self) -> PpuAddress {
        self.0.begin()
    }

    pub const fn end(&self) -> PpuAddress {
        self.0.end()
    }

    pub const fn region(&self) -> MemoryRegion {
        self.0
    }

    /// Address of slot `IDX`. Only indexes below the palette count build:
    ///
    /// ```
    /// use nesmap::ppu::layout::LAYOUT;
    /// assert_eq!(LAYOUT.bg_palette().addr::<3>().to_u16(), 0x3F03);
    /// ```
    ///
    /// ```compile_fail
    /// use nesmap::ppu::layout::LAYOUT;
    /// let _ = LAYOUT.bg_palette().addr::<4>();
    /// ```
    #[inline]
    pub const fn addr<const IDX: u8>(&self) -> PpuAddress {
        const { assert!((IDX as u16) < NUM_PALETTES, "palette index out of range") };
        self.0.begin().advance(IDX as u16)
    }

    /// Address of color `COLOR` within palette `PALETTE`, both checked at build time.
    ///
    /// ```compile_fail
    /// use nesmap::ppu::layout::LAYOUT;
    /// let _ = LAYOUT.sprite_palette().slot_addr::<1, 4>();
    /// ```
    #[inline]
    pub const fn slot_addr<const PALETTE: u8, const COLOR: u8>(&self) -> PpuAddress {
        const {
            assert!((PALETTE as u16) < NUM_PALETTES, "palette number out of range");
            assert!((COLOR as u16) < NUM_COLORS, "color number out of range");
        };
        self.0.begin().advance(PALETTE as u16 * NUM_COLORS + COLOR as u16)
    }

    pub fn load(&self, vram: &mut impl VideoMemory, codes: &[u8; PALETTE_SIZE as usize]) {
        vram.write_all(self.begin(), codes);
    }

    pub fn load_colors(&self, vram: &mut impl VideoMemory, colors: &[Color; PALETTE_SIZE as usize]) {
        self.load(vram, &colors.map(Color::code));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::vram::SimulatedVram;

    #[test]
    fn addr_is_base_plus_index() {
        let palette = Palette::at(PpuAddress::new(0x3F00));
        assert_eq!(palette.addr::<0>(), PpuAddress::new(0x3F00));
        assert_eq!(palette.addr::<1>(), PpuAddress::new(0x3F01));
        assert_eq!(palette.addr::<2>(), PpuAddress::new(0x3F02));
        assert_eq!(palette.addr::<3>(), PpuAddress::new(0x3F03));
    }

    #[test]
    fn slot_addr_strides_by_palette() {
        let palette = Palette::at(PpuAddress::new(0x3F10));
        assert_eq!(palette.slot_addr::<0, 0>(), PpuAddress::new(0x3F10));
        assert_eq!(palette.slot_addr::<1, 2>(), PpuAddress::new(0x3F16));
        assert_eq!(palette.slot_addr::<3, 3>(), PpuAddress::new(0x3F1F));
    }

    #[test]
    fn load_colors_writes_codes() {
        use Color::*;

        let palette = Palette::at(PpuAddress::new(0x3F00));
        let mut vram = SimulatedVram::new();
        palette.load_colors(&mut vram, &[
            TrueBlack, Grey, White, White,
            TrueBlack, Blue11, Green2A, Red,
            TrueBlack, Grey, White, White,
            TrueBlack, Grey, White, White,
        ]);
        assert_eq!(vram.slice(palette.region())[..8], [0x0F, 0x10, 0x30, 0x30, 0x0F, 0x11, 0x2A, 0x16]);
    }
}
