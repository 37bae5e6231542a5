use enum_iterator::Sequence;

use crate::ppu::constants::PATTERN_TABLE_SIDE_SIZE;

/// Which 4 KiB half of the pattern table.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Sequence)]
pub enum PatternTableSide {
    Left,
    Right,
}

impl PatternTableSide {
    pub fn from_offset(offset: u16) -> PatternTableSide {
        assert!(offset < 2 * PATTERN_TABLE_SIDE_SIZE);
        if offset / PATTERN_TABLE_SIDE_SIZE == 0 {
            PatternTableSide::Left
        } else {
            PatternTableSide::Right
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_map_to_sides() {
        assert_eq!(PatternTableSide::from_offset(0x0000), PatternTableSide::Left);
        assert_eq!(PatternTableSide::from_offset(0x0FFF), PatternTableSide::Left);
        assert_eq!(PatternTableSide::from_offset(0x1000), PatternTableSide::Right);
        assert_eq!(PatternTableSide::from_offset(0x1FFF), PatternTableSide::Right);
    }
}
