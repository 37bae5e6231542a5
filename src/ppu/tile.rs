use enum_iterator::{all, Sequence};
use log::warn;

use crate::memory::vram::VideoMemory;
use crate::ppu::constants::{PATTERN_TABLE_SIDE_SIZE, TILES_PER_PATTERN_TABLE_SIDE, TILE_SIZE};
use crate::ppu::pattern_table::PatternTable;
use crate::ppu::pattern_table_side::PatternTableSide;
use crate::util::bit_util::{get_bit, pack_bools};

const ROWS: usize = 8;

/// One of the two bit planes of a tile.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Sequence)]
pub enum Plane {
    Lower,
    Upper,
}

impl From<bool> for Plane {
    fn from(value: bool) -> Plane {
        if value {
            Plane::Upper
        } else {
            Plane::Lower
        }
    }
}

/// An 8x8 tile of 2-bit pixels, stored as its lower plane followed by its
/// upper plane, exactly as it sits in a pattern table.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Tile([u8; TILE_SIZE as usize]);

impl Tile {
    pub const fn from_bytes(raw: [u8; TILE_SIZE as usize]) -> Tile {
        Tile(raw)
    }

    /// Builds a tile from palette indexes (0-3). The leftmost pixel of each row
    /// lands in the most significant bit of that row's plane bytes.
    pub fn from_pixels(pixels: &[[u8; 8]; ROWS]) -> Tile {
        let mut raw = [0; TILE_SIZE as usize];
        for (row, row_pixels) in pixels.iter().enumerate() {
            raw[row] = pack_bools(row_pixels.map(|pixel| pixel & 0b01 != 0));
            raw[ROWS + row] = pack_bools(row_pixels.map(|pixel| pixel & 0b10 != 0));
        }

        Tile(raw)
    }

    pub fn to_bytes(&self) -> &[u8; TILE_SIZE as usize] {
        &self.0
    }

    #[inline]
    pub fn plane_row(&self, plane: Plane, row: u8) -> u8 {
        self.0[plane as usize * ROWS + row as usize]
    }

    pub fn pixel(&self, row: u8, column: u8) -> u8 {
        debug_assert!(row < 8 && column < 8, "pixel ({column}, {row}) is outside the tile");
        let low = get_bit(self.plane_row(Plane::Lower, row), column as usize);
        let high = get_bit(self.plane_row(Plane::Upper, row), column as usize);
        (u8::from(high) << 1) | u8::from(low)
    }

    pub fn write_to(
        &self,
        vram: &mut impl VideoMemory,
        pattern_table: &PatternTable,
        side: PatternTableSide,
        tile_index: u8,
    ) {
        for plane in all::<Plane>() {
            for row in 0..ROWS as u8 {
                vram.write(pattern_table.addr(side, plane, tile_index, row), self.plane_row(plane, row));
            }
        }
    }

    pub fn read_from(
        vram: &impl VideoMemory,
        pattern_table: &PatternTable,
        side: PatternTableSide,
        tile_index: u8,
    ) -> Tile {
        let mut raw = [0; TILE_SIZE as usize];
        for plane in all::<Plane>() {
            for row in 0..ROWS as u8 {
                raw[plane as usize * ROWS + row as usize] =
                    vram.read(pattern_table.addr(side, plane, tile_index, row));
            }
        }

        Tile(raw)
    }
}

/// Concatenates tiles into one pattern table side of CHR data, zero-padded to
/// 4 KiB. Tiles past the 256th are dropped.
pub fn chr_block(tiles: &[Tile]) -> Vec<u8> {
    let max_tiles = TILES_PER_PATTERN_TABLE_SIDE as usize;
    if tiles.len() > max_tiles {
        warn!("{} tiles supplied, only the first {max_tiles} fit in a pattern table side.", tiles.len());
    }

    let mut block: Vec<u8> = tiles.iter()
        .take(max_tiles)
        .flat_map(|tile| tile.0)
        .collect();
    block.resize(PATTERN_TABLE_SIDE_SIZE as usize, 0);
    block
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHECKER: [[u8; 8]; 8] = [
        [0, 1, 2, 3, 0, 1, 2, 3],
        [3, 2, 1, 0, 3, 2, 1, 0],
        [0, 0, 0, 0, 0, 0, 0, 0],
        [3, 3, 3, 3, 3, 3, 3, 3],
        [1, 1, 1, 1, 0, 0, 0, 0],
        [2, 2, 2, 2, 0, 0, 0, 0],
        [0, 0, 0, 0, 1, 1, 1, 1],
        [0, 0, 0, 0, 2, 2, 2, 2],
    ];

    #[test]
    fn planes_split_low_and_high_bits() {
        let tile = Tile::from_pixels(&CHECKER);
        assert_eq!(tile.plane_row(Plane::Lower, 0), 0b0101_0101);
        assert_eq!(tile.plane_row(Plane::Upper, 0), 0b0011_0011);
        assert_eq!(tile.plane_row(Plane::Lower, 3), 0xFF);
        assert_eq!(tile.plane_row(Plane::Upper, 3), 0xFF);
        assert_eq!(tile.plane_row(Plane::Lower, 4), 0xF0);
        assert_eq!(tile.plane_row(Plane::Upper, 4), 0x00);
    }

    #[test]
    fn pixels_decode_to_source() {
        let tile = Tile::from_pixels(&CHECKER);
        for (row, row_pixels) in CHECKER.iter().enumerate() {
            for (column, &pixel) in row_pixels.iter().enumerate() {
                assert_eq!(tile.pixel(row as u8, column as u8), pixel);
            }
        }
    }

    #[test]
    fn chr_block_pads_to_a_full_side() {
        let block = chr_block(&[Tile::from_pixels(&CHECKER)]);
        assert_eq!(block.len(), 0x1000);
        assert_eq!(&block[..16], Tile::from_pixels(&CHECKER).to_bytes());
        assert!(block[16..].iter().all(|&byte| byte == 0));
    }

    #[test]
    fn chr_block_truncates_extra_tiles() {
        let tiles = vec![Tile::from_bytes([0xAA; 16]); 300];
        let block = chr_block(&tiles);
        assert_eq!(block.len(), 0x1000);
        assert!(block.iter().all(|&byte| byte == 0xAA));
    }
}
