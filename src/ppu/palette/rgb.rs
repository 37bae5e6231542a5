#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Rgb {
    red: u8,
    green: u8,
    blue: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0x00, 0x00, 0x00);
    pub const WHITE: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);

    pub const fn new(red: u8, green: u8, blue: u8) -> Rgb {
        Rgb {red, green, blue}
    }

    // 0xRRGGBB
    pub const fn from_hex(value: u32) -> Rgb {
        Rgb::new((value >> 16) as u8, (value >> 8) as u8, value as u8)
    }

    pub fn red(self) -> u8 {
        self.red
    }

    pub fn green(self) -> u8 {
        self.green
    }

    pub fn blue(self) -> u8 {
        self.blue
    }
}
