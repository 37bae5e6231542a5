use enum_iterator::Sequence;
use num_derive::FromPrimitive;
use num_traits::FromPrimitive;

use crate::ppu::palette::rgb::Rgb;

/// Named system colors.
///
/// Output varies from one console to the next, so each code only
/// approximates the RGB value listed by [`Color::approximate_rgb`].
#[derive(PartialEq, Eq, Clone, Copy, Debug, FromPrimitive, Sequence)]
#[repr(u8)]
pub enum Color {
    White = 0x30,
    LightGrey = 0x3D,
    Grey = 0x10,
    LightDarkGrey = 0x00,
    DarkGrey = 0x2D,
    DarkDarkGrey = 0x1D,
    Black = 0x3F,
    DarkBlack = 0x2F,
    TrueBlack = 0x0F,
    DarkBrown = 0x08,
    Brown = 0x18,
    Red4 = 0x04,
    Red5 = 0x05,
    Red6 = 0x06,
    Red7 = 0x07,
    Red15 = 0x15,
    Red = 0x16,
    Red17 = 0x17,
    Orange26 = 0x26,
    Orange27 = 0x27,
    Orange28 = 0x28,
    Orange36 = 0x36,
    Yellow37 = 0x37,
    Yellow38 = 0x38,
    Green39 = 0x39,
    Green29 = 0x29,
    Green2A = 0x2A,
    Green19 = 0x19,
    Green1A = 0x1A,
    Green1B = 0x1B,
    Green9 = 0x09,
    GreenA = 0x0A,
    GreenB = 0x0B,
    Teal2B = 0x2B,
    Teal3A = 0x3A,
    Teal3B = 0x3B,
    Blue3C = 0x3C,
    Blue32 = 0x32,
    Blue31 = 0x31,
    Blue2C = 0x2C,
    Blue22 = 0x22,
    Blue21 = 0x21,
    Blue1C = 0x1C,
    Blue12 = 0x12,
    Blue11 = 0x11,
    BlueC = 0x0C,
    Blue2 = 0x02,
    Blue1 = 0x01,
    Violet3 = 0x03,
    Violet13 = 0x13,
    Pink14 = 0x14,
    Pink23 = 0x23,
    Pink24 = 0x24,
    Pink25 = 0x25,
    Pink33 = 0x33,
    Pink34 = 0x34,
    Pink35 = 0x35,
}

impl Color {
    pub const fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Color> {
        FromPrimitive::from_u8(code)
    }

    pub fn approximate_rgb(self) -> Rgb {
        use Color::*;
        Rgb::from_hex(match self {
            White => 0xFFFFFF,
            LightGrey => 0xD6D6D6,
            Grey => 0xBDBDBD,
            LightDarkGrey => 0x6E6E6E,
            DarkGrey => 0x4A4A4A,
            DarkDarkGrey => 0x141414,
            Black => 0x0A0A0A,
            DarkBlack => 0x050505,
            TrueBlack => 0x000000,
            DarkBrown => 0x521D00,
            Brown => 0xD14600,
            Red4 => 0xAB004A,
            Red5 => 0xDE0012,
            Red6 => 0xCC0000,
            Red7 => 0x8F0000,
            Red15 => 0xFF0037,
            Red => 0xFF0000,
            Red17 => 0xF00000,
            Orange26 => 0xFF6C0A,
            Orange27 => 0xFF8400,
            Orange28 => 0xFFAA00,
            Orange36 => 0xFFC69E,
            Yellow37 => 0xFFEA8F,
            Yellow38 => 0xFFF782,
            Green39 => 0xC8E67C,
            Green29 => 0x66E300,
            Green2A => 0x00F500,
            Green19 => 0x007000,
            Green1A => 0x008200,
            Green1B => 0x007A3F,
            Green9 => 0x003600,
            GreenA => 0x003800,
            GreenB => 0x00381F,
            Teal2B => 0x00F58F,
            Teal3A => 0x6DED9C,
            Teal3B => 0x64F5D1,
            Blue3C => 0x42FFFC,
            Blue32 => 0x8AEBFF,
            Blue31 => 0x63FFFF,
            Blue2C => 0x00FFFF,
            Blue22 => 0x3892FF,
            Blue21 => 0x00D4FF,
            Blue1C => 0x008BC7,
            Blue12 => 0x0040FF,
            Blue11 => 0x0062FF,
            BlueC => 0x003054,
            Blue2 => 0x0B00A6,
            Blue1 => 0x00299C,
            Violet3 => 0x3B0087,
            Violet13 => 0x830FFF,
            Pink14 => 0xFF00AA,
            Pink23 => 0xE561FF,
            Pink24 => 0xFF00F7,
            Pink25 => 0xFF3877,
            Pink33 => 0xE498EB,
            Pink34 => 0xFF8FFB,
            Pink35 => 0xFF94A2,
        })
    }
}

impl From<Color> for u8 {
    fn from(color: Color) -> u8 {
        color.code()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use enum_iterator::all;

    use super::*;

    #[test]
    fn codes_are_fixed() {
        assert_eq!(Color::White.code(), 0x30);
        assert_eq!(Color::LightDarkGrey.code(), 0x00);
        assert_eq!(Color::TrueBlack.code(), 0x0F);
        assert_eq!(Color::Red.code(), 0x16);
        assert_eq!(Color::Green2A.code(), 0x2A);
        assert_eq!(Color::BlueC.code(), 0x0C);
        assert_eq!(Color::Pink35.code(), 0x35);
    }

    #[test]
    fn codes_are_unique_and_in_range() {
        let codes: BTreeSet<u8> = all::<Color>().map(Color::code).collect();
        assert_eq!(codes.len(), all::<Color>().count());
        assert!(codes.iter().all(|&code| code < 0x40));
    }

    #[test]
    fn from_code_inverts_code() {
        for color in all::<Color>() {
            assert_eq!(Color::from_code(color.code()), Some(color));
        }
        // $0E is one of the unnamed blacks.
        assert_eq!(Color::from_code(0x0E), None);
    }

    #[test]
    fn approximations() {
        assert_eq!(Color::White.approximate_rgb(), Rgb::WHITE);
        assert_eq!(Color::TrueBlack.approximate_rgb(), Rgb::BLACK);
        assert_eq!(Color::Brown.approximate_rgb(), Rgb::new(0xD1, 0x46, 0x00));
    }
}
