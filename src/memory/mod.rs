pub mod ppu_address;
pub mod region;
pub mod vram;
