use crate::util::unit::KIBIBYTE;

// Pixels are palette indexes; index 0 is always transparent/background.
pub const PIXEL_BITS: u16 = 2;
pub const TILE_PIXEL_WIDTH: u16 = 8;
// Two 8-byte planes, lower then upper. Each pixel has one bit in the same
// position of each plane: the low color bit in the lower plane, the high
// color bit in the upper plane.
pub const TILE_SIZE: u16 = PIXEL_BITS * TILE_PIXEL_WIDTH * TILE_PIXEL_WIDTH / 8;
pub const TILES_PER_PATTERN_TABLE_SIDE: u16 = 256;
pub const PATTERN_TABLE_SIDE_SIZE: u16 = TILES_PER_PATTERN_TABLE_SIDE * TILE_SIZE;

pub const SCREEN_TILE_WIDTH: u16 = 32;
pub const SCREEN_TILE_HEIGHT: u16 = 30;
// One byte per tile.
pub const NAME_TABLE_SIZE: u16 = SCREEN_TILE_WIDTH * SCREEN_TILE_HEIGHT;
// One byte per 4x4 tile block.
pub const ATTRIBUTE_BLOCK_TILE_WIDTH: u16 = 4;
pub const ATTRIBUTE_TABLE_SIZE: u16 =
    (SCREEN_TILE_WIDTH / ATTRIBUTE_BLOCK_TILE_WIDTH) * SCREEN_TILE_HEIGHT.div_ceil(ATTRIBUTE_BLOCK_TILE_WIDTH);

pub const NUM_PALETTES: u16 = 4;
pub const NUM_COLORS: u16 = 4;
// Each byte is one system color.
pub const PALETTE_SIZE: u16 = NUM_PALETTES * NUM_COLORS;

// Name table mirrors between the last attribute table and the palettes.
pub const PADDING_SIZE: u16 = 0xF00;

const _: () = assert!(TILE_SIZE == 16);
const _: () = assert!(PATTERN_TABLE_SIDE_SIZE as u32 == 4 * KIBIBYTE);
const _: () = assert!(ATTRIBUTE_TABLE_SIZE == 64);
const _: () = assert!((NAME_TABLE_SIZE + ATTRIBUTE_TABLE_SIZE) as u32 == KIBIBYTE);
