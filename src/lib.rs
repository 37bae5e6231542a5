pub mod config;
pub mod console;
pub mod driver;
pub mod mapper;
pub mod memory;
pub mod ppu;
pub mod util;
