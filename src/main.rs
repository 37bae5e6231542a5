use log::info;
use structopt::StructOpt;

use nesmap::config::{Config, Opt};
use nesmap::console::Console;
use nesmap::driver::ChrChunk;
use nesmap::driver::simulated::SimulatedDriver;
use nesmap::mapper::BankSelect;
use nesmap::memory::vram::SimulatedVram;
use nesmap::ppu::layout::LAYOUT;
use nesmap::util::logger;

fn main() {
    let opt = Opt::from_args();
    let config = match Config::new(&opt) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("{message}");
            std::process::exit(1);
        }
    };

    logger::init(config.logger()).expect("Failed to initialize logging.");

    for (name, region) in LAYOUT.regions() {
        info!(target: "layout", "{:<20} {}-{} ({:#06X} bytes)", name, region.begin(), region.end(), region.size());
    }

    let mut driver = SimulatedDriver::new(config.timing_standard());
    driver.inject_interference(config.interference());

    let mut console = Console::new(driver, SimulatedVram::new(), config.swap_interval(), config.split());
    console.init_ppu();
    console.run(config.frames());

    let driver = console.driver();
    println!(
        "Ran {} frames ({:?}). Sprite bank {}, background color ${:02x}.",
        console.frame(),
        config.timing_standard(),
        console.chr1().bank(),
        console.palette_color(),
    );
    println!(
        "CHR selects: chunk 0 {}, chunk 1 {} ({} interrupted). Frame-sync interrupts: {}.",
        driver.chr_select_count(ChrChunk::Zero),
        driver.chr_select_count(ChrChunk::One),
        driver.interrupted_count(),
        driver.frame_count(),
    );
}
