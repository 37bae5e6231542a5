pub fn pack_bools(bools: [bool; 8]) -> u8 {
    let mut result = 0;
    for i in 0..8 {
        if bools[7 - i] {
            result += 1 << i;
        }
    }

    result
}

// Index 0 is the leftmost (most significant) bit, matching pixel order within a tile row.
#[inline]
pub fn get_bit(byte: u8, index: usize) -> bool {
    debug_assert!(index < 8);
    let mask = 0b1000_0000 >> index as u8;
    byte & mask != 0
}
