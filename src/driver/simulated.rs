use log::{debug, info};

use crate::driver::serial_latch::{SerialLatch, ShiftStatus};
use crate::driver::{BankDriver, ChrChunk, PpuDriver, SelectAttempt};
use crate::ppu::register::display::{Display, Emphasis, TimingStandard};
use crate::ppu::register::mask::Mask;

// How many bit writes an injected frame-sync interrupt lets through before it fires.
const INTERFERENCE_STEP: usize = 3;

/// Host-side model of a serially loaded bank register plus the frame-sync
/// handler that shares it with the main program.
///
/// The handler re-applies the frame banks with full select sequences, so a
/// select that it preempts is left incomplete and the hardware keeps showing
/// the frame bank. Interference is injected deterministically with
/// [`SimulatedDriver::inject_interference`].
#[derive(Debug)]
pub struct SimulatedDriver {
    timing_standard: TimingStandard,
    prg_bank: u8,
    prg_select_count: u32,

    latch: SerialLatch,
    // What the hardware currently maps.
    chr_banks: [u8; 2],
    // What the frame-sync handler re-applies.
    frame_chr_banks: [u8; 2],
    chr_select_counts: [u32; 2],
    chr_commit_counts: [u32; 2],
    interrupted_count: u32,

    nmi_occurred: bool,
    pending_interference: u32,
    frame_count: u64,
    mask: Mask,
}

impl SimulatedDriver {
    pub fn new(timing_standard: TimingStandard) -> SimulatedDriver {
        SimulatedDriver::with_banks(timing_standard, 0, [0, 0])
    }

    pub fn with_banks(timing_standard: TimingStandard, prg_bank: u8, chr_banks: [u8; 2]) -> SimulatedDriver {
        SimulatedDriver {
            timing_standard,
            prg_bank,
            prg_select_count: 0,
            latch: SerialLatch::default(),
            chr_banks,
            frame_chr_banks: chr_banks,
            chr_select_counts: [0; 2],
            chr_commit_counts: [0; 2],
            interrupted_count: 0,
            nmi_occurred: false,
            pending_interference: 0,
            frame_count: 0,
            mask: Mask::all_disabled(),
        }
    }

    /// Arranges for the next `count` interference-detecting selects to be
    /// preempted by the frame-sync handler partway through their sequence.
    pub fn inject_interference(&mut self, count: u32) {
        self.pending_interference += count;
    }

    pub fn pending_interference(&self) -> u32 {
        self.pending_interference
    }

    /// Runs the frame-sync handler.
    pub fn nmi(&mut self) {
        self.latch.reset();
        for chunk in enum_iterator::all::<ChrChunk>() {
            let bank = self.frame_chr_banks[chunk as usize];
            self.shift_in(chunk, bank, None);
        }

        self.nmi_occurred = true;
        self.frame_count += 1;
        info!(target: "frames", "Frame {} (CHR banks {:?})", self.frame_count, self.chr_banks);
    }

    pub fn hardware_chr_bank(&self, chunk: ChrChunk) -> u8 {
        self.chr_banks[chunk as usize]
    }

    pub fn prg_select_count(&self) -> u32 {
        self.prg_select_count
    }

    /// Select sequences started by the program on `chunk`, excluding the
    /// frame-sync handler's own re-applies.
    pub fn chr_select_count(&self, chunk: ChrChunk) -> u32 {
        self.chr_select_counts[chunk as usize]
    }

    /// Completed latch commits into `chunk`, whoever started them.
    pub fn chr_commit_count(&self, chunk: ChrChunk) -> u32 {
        self.chr_commit_counts[chunk as usize]
    }

    pub fn interrupted_count(&self) -> u32 {
        self.interrupted_count
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn mask(&self) -> Mask {
        self.mask
    }

    // Feeds one full select sequence through the latch. The handler fires
    // after `interrupt_after` bits, leaving the rest to land in a fresh latch.
    fn shift_in(&mut self, chunk: ChrChunk, bank: u8, interrupt_after: Option<usize>) {
        self.latch.reset();
        for i in 0..u8::BITS as usize {
            if interrupt_after == Some(i) {
                self.nmi();
            }

            if let ShiftStatus::Done { finished_value } = self.latch.shift(bank >> i & 1 == 1) {
                self.chr_banks[chunk as usize] = finished_value;
                self.chr_commit_counts[chunk as usize] += 1;
            }
        }
    }
}

impl BankDriver for SimulatedDriver {
    fn prg_bank(&self) -> u8 {
        self.prg_bank
    }

    fn set_prg_bank(&mut self, bank: u8) {
        info!(target: "banks", "PRG bank {} -> {}", self.prg_bank, bank);
        self.prg_select_count += 1;
        self.prg_bank = bank;
    }

    fn chr_bank(&self, chunk: ChrChunk) -> u8 {
        self.frame_chr_banks[chunk as usize]
    }

    fn set_chr_bank(&mut self, chunk: ChrChunk, bank: u8) {
        info!(target: "banks", "CHR {:?} bank {} -> {}", chunk, self.frame_chr_banks[chunk as usize], bank);
        self.chr_select_counts[chunk as usize] += 1;
        self.frame_chr_banks[chunk as usize] = bank;
        self.shift_in(chunk, bank, None);
    }

    fn try_set_chr_bank(&mut self, chunk: ChrChunk, bank: u8) -> SelectAttempt {
        self.chr_select_counts[chunk as usize] += 1;
        self.nmi_occurred = false;

        let interrupt_after = if self.pending_interference > 0 {
            self.pending_interference -= 1;
            Some(INTERFERENCE_STEP)
        } else {
            None
        };

        self.shift_in(chunk, bank, interrupt_after);
        if self.nmi_occurred {
            self.interrupted_count += 1;
            debug!(target: "banks", "CHR {:?} select of bank {} interrupted", chunk, bank);
            return SelectAttempt::Interrupted;
        }

        info!(target: "banks", "CHR {:?} bank {} -> {}", chunk, self.frame_chr_banks[chunk as usize], bank);
        self.frame_chr_banks[chunk as usize] = bank;
        SelectAttempt::Committed
    }

    fn split_chr_bank(&mut self, chunk: ChrChunk, bank: u8) {
        info!(target: "banks", "CHR {:?} split to bank {}", chunk, bank);
        self.chr_select_counts[chunk as usize] += 1;
        self.shift_in(chunk, bank, None);
    }
}

impl PpuDriver for SimulatedDriver {
    fn ppu_on(&mut self, display: Display) {
        let mask = self.mask.with_full_screen(display);
        self.mask.set(mask);
    }

    fn ppu_off(&mut self) {
        let mask = self.mask.with_rendering_disabled();
        self.mask.set(mask);
    }

    fn set_color_emphasis(&mut self, emphasis: Emphasis) {
        let mask = self.mask.with_emphasis(emphasis);
        self.mask.set(mask);
    }

    fn wait_nmi(&mut self) {
        self.nmi();
    }

    fn timing_standard(&self) -> TimingStandard {
        self.timing_standard
    }
}
