use log::info;

use crate::driver::{BankDriver, PpuDriver};
use crate::mapper::{BankSelect, ChrBankSelect, ChrMapper, PrgMapper};
use crate::memory::vram::VideoMemory;
use crate::ppu::layout::LAYOUT;
use crate::ppu::register::display::Display;

pub const MESSAGE: &str = "Hello, NES!";
pub const MESSAGE_POSITION: (u8, u8) = (10, 10);
pub const COLOR_CODE_POSITION: (u8, u8) = (14, 12);

pub const BACKGROUND_PALETTE: [u8; 16] = [
    0x0F, 0x10, 0x20, 0x30,
    0x0F, 0x10, 0x20, 0x30,
    0x0F, 0x10, 0x20, 0x30,
    0x0F, 0x10, 0x20, 0x30,
];

pub const SPRITE_PALETTE: [u8; 16] = [
    0x0F, 0x10, 0x26, 0x30,
    0x0F, 0x11, 0x2A, 0x16,
    0x0F, 0x10, 0x20, 0x30,
    0x0F, 0x10, 0x20, 0x30,
];

const PRG_BANK: u8 = 0;
const BACKGROUND_BANK: u8 = 0;
const SPLIT_BACKGROUND_BANK: u8 = 3;
const SPRITE_BANKS: (u8, u8) = (1, 2);
// Every color code the PPU accepts.
const COLOR_CODE_COUNT: u8 = 64;

/// The demo program: a static message, a sprite CHR bank swapped at a fixed
/// interval and a background color cycled twice a second.
///
/// All hardware is reached through `driver` and `vram`, so the same loop runs
/// against a simulated console or real registers.
pub struct Console<D: BankDriver + PpuDriver, V: VideoMemory> {
    driver: D,
    vram: V,
    prg: PrgMapper,
    chr0: ChrMapper<0>,
    chr1: ChrMapper<1>,

    sprite_bank: u8,
    palette_color: u8,
    frame: u64,
    swap_interval: u64,
    split: bool,
}

impl<D: BankDriver + PpuDriver, V: VideoMemory> Console<D, V> {
    pub fn new(driver: D, vram: V, swap_interval: u64, split: bool) -> Console<D, V> {
        let prg = PrgMapper::new(&driver);
        let chr0 = ChrMapper::new(&driver);
        let chr1 = ChrMapper::new(&driver);
        Console {
            driver,
            vram,
            prg,
            chr0,
            chr1,
            sprite_bank: SPRITE_BANKS.0,
            palette_color: 0,
            frame: 0,
            swap_interval,
            split,
        }
    }

    /// Loads palettes and the message while rendering is off, then turns
    /// rendering back on.
    pub fn init_ppu(&mut self) {
        LAYOUT.off(&mut self.driver);

        self.prg.select(&mut self.driver, PRG_BANK);
        self.chr0.select(&mut self.driver, BACKGROUND_BANK);
        LAYOUT.bg_palette().load(&mut self.vram, &BACKGROUND_PALETTE);

        let name_table = *LAYOUT.name_table(0);
        self.vram.fill(name_table.region(), b' ');
        let (x, y) = MESSAGE_POSITION;
        self.vram.write_all(name_table.addr(x, y), MESSAGE.as_bytes());

        self.chr1.select(&mut self.driver, self.sprite_bank);
        LAYOUT.sprite_palette().load(&mut self.vram, &SPRITE_PALETTE);

        LAYOUT.on(&mut self.driver, Display::All);
    }

    pub fn run_frame(&mut self) {
        LAYOUT.wait_nmi(&mut self.driver);
        self.frame += 1;

        // Still inside the frame-sync window.
        self.chr1.select(&mut self.driver, self.sprite_bank);
        self.chr0.select(&mut self.driver, BACKGROUND_BANK);

        if self.frame % self.swap_interval == 0 {
            self.sprite_bank = if self.sprite_bank == SPRITE_BANKS.0 { SPRITE_BANKS.1 } else { SPRITE_BANKS.0 };
            info!(target: "banks", "Frame {}: swapping to sprite bank {}", self.frame, self.sprite_bank);
            self.chr1.select_with_retry(&mut self.driver, self.sprite_bank);
        }

        let half_second = LAYOUT.timing_standard(&self.driver).frames_per_second() / 2;
        if self.frame % half_second == 0 {
            self.palette_color = (self.palette_color + 1) % COLOR_CODE_COUNT;
            self.vram.write(LAYOUT.bg_palette().slot_addr::<0, 3>(), self.palette_color);

            let (x, y) = COLOR_CODE_POSITION;
            let code = format!("${:02x}", self.palette_color);
            self.vram.write_all(LAYOUT.name_table(0).addr(x, y), code.as_bytes());
        }

        if self.split {
            self.chr0.select_ephemeral(&mut self.driver, SPLIT_BACKGROUND_BANK);
        }
    }

    pub fn run(&mut self, frames: u64) {
        for _ in 0..frames {
            self.run_frame();
        }
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    pub fn vram(&self) -> &V {
        &self.vram
    }

    pub fn prg(&self) -> &PrgMapper {
        &self.prg
    }

    pub fn chr0(&self) -> &ChrMapper<0> {
        &self.chr0
    }

    pub fn chr1(&self) -> &ChrMapper<1> {
        &self.chr1
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn sprite_bank(&self) -> u8 {
        self.sprite_bank
    }

    pub fn palette_color(&self) -> u8 {
        self.palette_color
    }
}
