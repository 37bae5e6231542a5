use enum_iterator::Sequence;

/// Which of the four palettes a block of background tiles uses.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default, Sequence)]
pub enum PaletteSelector {
    #[default]
    Zero,
    One,
    Two,
    Three,
}

impl PaletteSelector {
    /// Unpacks an attribute byte into top left, top right, bottom left, bottom right.
    pub fn unpack_byte(value: u8) -> [PaletteSelector; 4] {
        [
            PaletteSelector::from_low_bits(value),
            PaletteSelector::from_low_bits(value >> 2),
            PaletteSelector::from_low_bits(value >> 4),
            PaletteSelector::from_low_bits(value >> 6),
        ]
    }

    fn from_low_bits(value: u8) -> PaletteSelector {
        match value & 0b0000_0011 {
            0 => PaletteSelector::Zero,
            1 => PaletteSelector::One,
            2 => PaletteSelector::Two,
            3 => PaletteSelector::Three,
            _ => unreachable!(),
        }
    }
}
