use nesmap::console::{Console, MESSAGE};
use nesmap::driver::ChrChunk;
use nesmap::driver::simulated::SimulatedDriver;
use nesmap::mapper::BankSelect;
use nesmap::memory::vram::{SimulatedVram, VideoMemory};
use nesmap::ppu::layout::LAYOUT;
use nesmap::ppu::register::display::TimingStandard;

fn console(interference: u32, split: bool) -> Console<SimulatedDriver, SimulatedVram> {
    let mut driver = SimulatedDriver::new(TimingStandard::Ntsc);
    driver.inject_interference(interference);
    let mut console = Console::new(driver, SimulatedVram::new(), 60, split);
    console.init_ppu();
    console
}

#[test]
fn sprite_bank_swaps_on_interval() {
    let mut console = console(0, false);
    console.run(59);
    assert_eq!(console.sprite_bank(), 1);
    console.run(1);
    assert_eq!(console.sprite_bank(), 2);
    assert_eq!(console.chr1().bank(), 2);
    assert_eq!(console.driver().hardware_chr_bank(ChrChunk::One), 2);
    console.run(60);
    assert_eq!(console.driver().hardware_chr_bank(ChrChunk::One), 1);
}

#[test]
fn swap_survives_injected_interference() {
    let mut console = console(3, false);
    console.run(60);
    assert_eq!(console.driver().interrupted_count(), 3);
    assert_eq!(console.driver().hardware_chr_bank(ChrChunk::One), 2);
    assert_eq!(console.chr1().bank(), 2);
    // Each interrupted attempt ran the frame-sync handler once more.
    assert_eq!(console.driver().frame_count(), 63);
    assert_eq!(console.frame(), 60);
}

#[test]
fn split_is_undone_every_frame() {
    let mut console = console(0, true);
    console.run(1);
    assert_eq!(console.driver().hardware_chr_bank(ChrChunk::Zero), 3);
    assert_eq!(console.chr0().bank(), 0);

    console.run(1);
    assert_eq!(console.chr0().bank(), 0);
    // Two splits, plus the second frame restoring the background bank first.
    assert_eq!(console.driver().chr_select_count(ChrChunk::Zero), 3);
}

#[test]
fn message_and_color_code_are_written() {
    let mut console = console(0, false);
    console.run(90);
    assert_eq!(console.palette_color(), 3);
    assert_eq!(console.vram().read(LAYOUT.bg_palette().slot_addr::<0, 3>()), 3);

    let name_table = LAYOUT.name_table(0);
    let message: Vec<u8> = (0..MESSAGE.len() as u8)
        .map(|i| console.vram().read(name_table.addr(10 + i, 10)))
        .collect();
    assert_eq!(message, MESSAGE.as_bytes());

    let code: Vec<u8> = (0..3).map(|i| console.vram().read(name_table.addr(14 + i, 12))).collect();
    assert_eq!(code, b"$03");
    assert_eq!(console.vram().read(name_table.addr(17, 12)), b' ');
}
