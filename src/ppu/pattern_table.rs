use splitbits::splitbits;

use crate::memory::ppu_address::PpuAddress;
use crate::memory::region::MemoryRegion;
use crate::ppu::constants::PATTERN_TABLE_SIDE_SIZE;
use crate::ppu::pattern_table_side::PatternTableSide;
use crate::ppu::tile::Plane;

const PADDING_BITS: u32 = 4;
const TILE_BITS: u32 = 8;
const PLANE_BITS: u32 = 1;
const ROW_BITS: u32 = 3;

const ROW_SHIFT: u32 = 0;
const PLANE_SHIFT: u32 = ROW_SHIFT + ROW_BITS;
const TILE_SHIFT: u32 = PLANE_SHIFT + PLANE_BITS;
const ROW_MASK: u16 = (1 << ROW_BITS) - 1;

// The packed tile address must be exactly as wide as a PPU address.
const _: () = assert!(PADDING_BITS + TILE_BITS + PLANE_BITS + ROW_BITS == PpuAddress::BITS);
const _: () = assert!(1 << (TILE_SHIFT + TILE_BITS) == PATTERN_TABLE_SIDE_SIZE as u32);

/*
 * 0123 456789AB C DEF
 * .... TTTTTTTT P RRR
 * |||| |||||||| | +++-- Row within the tile
 * |||| |||||||| +------ Bit plane
 * |||| ++++++++-------- Tile index
 * ++++----------------- Padding (always zero)
 */
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct PatternAddress {
    tile_index: u8,
    plane: Plane,
    row: u8,
}

impl PatternAddress {
    pub const fn new(tile_index: u8, plane: Plane, row: u8) -> PatternAddress {
        PatternAddress { tile_index, plane, row }
    }

    /// Offset of this tile row within one side of the pattern table. Rows
    /// above 7 are truncated to their low three bits.
    #[inline]
    pub const fn to_offset(self) -> u16 {
        ((self.tile_index as u16) << TILE_SHIFT)
            | ((self.plane as u16) << PLANE_SHIFT)
            | ((self.row as u16 & ROW_MASK) << ROW_SHIFT)
    }

    pub fn from_offset(offset: u16) -> PatternAddress {
        let fields = splitbits!(offset, "....ttttttttprrr");
        PatternAddress {
            tile_index: fields.t,
            plane: Plane::from(fields.p),
            row: fields.r,
        }
    }

    pub const fn tile_index(self) -> u8 {
        self.tile_index
    }

    pub const fn plane(self) -> Plane {
        self.plane
    }

    pub const fn row(self) -> u8 {
        self.row
    }
}

/// Bitmap tile storage: two 4 KiB sides of 256 tiles each.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct PatternTable {
    sides: [MemoryRegion; 2],
}

impl PatternTable {
    pub const SIDE_SIZE: u16 = PATTERN_TABLE_SIDE_SIZE;

    pub const fn at(start: PpuAddress) -> PatternTable {
        PatternTable {
            sides: [
                MemoryRegion::new(start, Self::SIDE_SIZE),
                MemoryRegion::new(start.advance(Self::SIDE_SIZE), Self::SIDE_SIZE),
            ],
        }
    }

    pub const fn begin(&self) -> PpuAddress {
        self.sides[0].begin()
    }

    pub const fn end(&self) -> PpuAddress {
        self.sides[self.sides.len() - 1].end()
    }

    pub const fn side(&self, side: PatternTableSide) -> MemoryRegion {
        self.sides[side as usize]
    }

    #[inline]
    pub const fn addr(&self, side: PatternTableSide, plane: Plane, tile_index: u8, row: u8) -> PpuAddress {
        let offset = PatternAddress::new(tile_index, plane, row).to_offset();
        self.sides[side as usize].begin().advance(offset)
    }

    /// Recovers the side and packed fields an address was built from.
    pub fn locate(&self, address: PpuAddress) -> Option<(PatternTableSide, PatternAddress)> {
        if address < self.begin() || address >= self.end() {
            return None;
        }

        let side = PatternTableSide::from_offset(address.offset_from(self.begin()));
        let offset = address.offset_from(self.side(side).begin());
        Some((side, PatternAddress::from_offset(offset)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_land_on_hardware_bits() {
        assert_eq!(PatternAddress::new(0x00, Plane::Lower, 1).to_offset(), 0b0000_0000_0000_0001);
        assert_eq!(PatternAddress::new(0x00, Plane::Upper, 0).to_offset(), 0b0000_0000_0000_1000);
        assert_eq!(PatternAddress::new(0x01, Plane::Lower, 0).to_offset(), 0b0000_0000_0001_0000);
        assert_eq!(PatternAddress::new(0xFF, Plane::Upper, 7).to_offset(), 0b0000_1111_1111_1111);
    }

    #[test]
    fn oversized_row_is_truncated() {
        assert_eq!(
            PatternAddress::new(0x12, Plane::Lower, 0b1010).to_offset(),
            PatternAddress::new(0x12, Plane::Lower, 0b0010).to_offset(),
        );
    }

    #[test]
    fn decode_matches_encode() {
        let address = PatternAddress::new(0xA5, Plane::Upper, 6);
        assert_eq!(PatternAddress::from_offset(address.to_offset()), address);
    }

    #[test]
    fn right_side_is_offset_by_4k() {
        let table = PatternTable::at(PpuAddress::ZERO);
        let left = table.addr(PatternTableSide::Left, Plane::Upper, 0x42, 3);
        let right = table.addr(PatternTableSide::Right, Plane::Upper, 0x42, 3);
        assert_eq!(right.offset_from(left), 0x1000);
        assert_eq!(left, PpuAddress::new(0x042B));
    }

    #[test]
    fn locate_outside_table_is_none() {
        let table = PatternTable::at(PpuAddress::ZERO);
        assert_eq!(table.locate(PpuAddress::new(0x2000)), None);
        assert_eq!(
            table.locate(PpuAddress::new(0x1FFF)),
            Some((PatternTableSide::Right, PatternAddress::new(0xFF, Plane::Upper, 7))),
        );
    }
}
