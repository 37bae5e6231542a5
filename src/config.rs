use structopt::StructOpt;

use crate::ppu::register::display::TimingStandard;
use crate::util::logger::Logger;

pub struct Config {
    frames: u64,
    timing_standard: TimingStandard,
    interference: u32,
    swap_interval: u64,
    split: bool,
    logger: Logger,
}

impl Config {
    pub fn new(opt: &Opt) -> Result<Config, String> {
        if opt.swap_interval == 0 {
            return Err("Swap interval must be at least one frame.".to_string());
        }

        let logger = Logger {
            log_banks: opt.log_banks,
            log_ppu_flags: opt.log_ppu_flags,
            log_frames: opt.log_frames,
            log_layout: opt.log_layout,
            verbose: opt.verbose,
        };

        Ok(Config {
            frames: opt.frames,
            timing_standard: opt.timing,
            interference: opt.interference,
            swap_interval: opt.swap_interval,
            split: opt.split,
            logger,
        })
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn timing_standard(&self) -> TimingStandard {
        self.timing_standard
    }

    pub fn interference(&self) -> u32 {
        self.interference
    }

    pub fn swap_interval(&self) -> u64 {
        self.swap_interval
    }

    pub fn split(&self) -> bool {
        self.split
    }

    pub fn logger(&self) -> Logger {
        self.logger
    }
}

#[derive(Debug, StructOpt)]
#[structopt(name = "NESMAP", about = "Drives the NES video memory layout and bank mappers against a simulated console.")]
pub struct Opt {
    #[structopt(long, default_value = "180")]
    pub frames: u64,

    #[structopt(long, default_value = "ntsc")]
    pub timing: TimingStandard,

    /// Frame-sync interrupts to inject into the first interference-safe CHR select.
    #[structopt(long, default_value = "0")]
    pub interference: u32,

    /// Frames between sprite bank swaps.
    #[structopt(name = "swap-interval", long, default_value = "60")]
    pub swap_interval: u64,

    /// Switch the background CHR bank partway through every frame.
    #[structopt(long)]
    pub split: bool,

    #[structopt(long)]
    pub log_banks: bool,

    #[structopt(long)]
    pub log_ppu_flags: bool,

    #[structopt(long)]
    pub log_frames: bool,

    #[structopt(long)]
    pub log_layout: bool,

    #[structopt(short, long)]
    pub verbose: bool,
}
