use crate::memory::ppu_address::PpuAddress;
use crate::memory::region::MemoryRegion;
use crate::ppu::constants::{ATTRIBUTE_BLOCK_TILE_WIDTH, ATTRIBUTE_TABLE_SIZE, SCREEN_TILE_WIDTH};
use crate::ppu::palette::palette_selector::PaletteSelector;

const BLOCK_SHIFT: u32 = ATTRIBUTE_BLOCK_TILE_WIDTH.trailing_zeros();
const BLOCKS_PER_ROW_SHIFT: u32 = (SCREEN_TILE_WIDTH / ATTRIBUTE_BLOCK_TILE_WIDTH).trailing_zeros();

/// One byte per 4x4 tile block, each holding four 2-bit palette selectors.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct AttributeTable(MemoryRegion);

impl AttributeTable {
    pub const SIZE: u16 = ATTRIBUTE_TABLE_SIZE;

    pub const fn at(start: PpuAddress) -> AttributeTable {
        AttributeTable(MemoryRegion::new(start, Self::SIZE))
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

    /// Address of the attribute byte covering the tile at column `x`, row `y`.
    #[inline]
    pub const fn addr(&self, x: u8, y: u8) -> PpuAddress {
        let block_row = y as u16 >> BLOCK_SHIFT;
        let block_column = x as u16 >> BLOCK_SHIFT;
        self.0.begin().advance((block_row << BLOCKS_PER_ROW_SHIFT) | block_column)
    }

    /// Packs the selectors of a block's four 2x2 quadrants: top left, top
    /// right, bottom left, bottom right.
    pub fn pack(selectors: [PaletteSelector; 4]) -> u8 {
        selectors.iter()
            .enumerate()
            .fold(0, |byte, (quadrant, &selector)| byte | (selector as u8) << (2 * quadrant))
    }

    /// The selector that applies to the tile at column `x`, row `y`, given the
    /// attribute byte covering it.
    pub fn selector_for(attribute: u8, x: u8, y: u8) -> PaletteSelector {
        let quadrant = 2 * ((y / 2) % 2) + (x / 2) % 2;
        PaletteSelector::unpack_byte(attribute)[quadrant as usize]
    }
}
