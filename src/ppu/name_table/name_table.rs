use crate::memory::ppu_address::PpuAddress;
use crate::memory::region::MemoryRegion;
use crate::ppu::constants::{NAME_TABLE_SIZE, SCREEN_TILE_WIDTH};
use crate::ppu::name_table::attribute_table::AttributeTable;

// Rows are laid out 32 bytes apart even though only 30 are visible.
const ROW_SHIFT: u32 = SCREEN_TILE_WIDTH.trailing_zeros();
const _: () = assert!(1 << ROW_SHIFT == SCREEN_TILE_WIDTH);

/// A screen's grid of tile indexes, immediately followed by its attribute table.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct NameTable {
    tiles: MemoryRegion,
    attribute_table: AttributeTable,
}

impl NameTable {
    pub const SIZE: u16 = NAME_TABLE_SIZE;

    pub const fn at(start: PpuAddress) -> NameTable {
        let tiles = MemoryRegion::new(start, Self::SIZE);
        NameTable {
            tiles,
            attribute_table: AttributeTable::at(tiles.end()),
        }
    }

    pub const fn begin(&self) -> PpuAddress {
        self.tiles.begin()
    }

    /// End of the tile indexes, which is also where the attribute table begins.
    pub const fn end(&self) -> PpuAddress {
        self.tiles.end()
    }

    pub const fn region(&self) -> MemoryRegion {
        self.tiles
    }

    pub const fn attribute_table(&self) -> &AttributeTable {
        &self.attribute_table
    }

    /// Address of the tile index at column `x`, row `y`. Nothing is checked:
    /// `x` must be below 32 and `y` below 30.
    #[inline]
    pub const fn addr(&self, x: u8, y: u8) -> PpuAddress {
        let offset = ((y as u16) << ROW_SHIFT) | x as u16;
        self.tiles.begin().advance(offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_table_starts_where_tiles_end() {
        let name_table = NameTable::at(PpuAddress::new(0x2000));
        assert_eq!(name_table.end(), PpuAddress::new(0x23C0));
        assert_eq!(name_table.attribute_table().begin(), name_table.end());
        assert_eq!(name_table.attribute_table().end(), PpuAddress::new(0x2400));
    }

    #[test]
    fn addr_packs_row_and_column() {
        let name_table = NameTable::at(PpuAddress::new(0x2000));
        assert_eq!(name_table.addr(0, 0), PpuAddress::new(0x2000));
        assert_eq!(name_table.addr(10, 10), PpuAddress::new(0x214A));
        assert_eq!(name_table.addr(31, 29), PpuAddress::new(0x23BF));
    }
}
