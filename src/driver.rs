//! The hardware collaborator behind bank selection and display control.
//!
//! Everything in here is consumed, not implemented, by the layout and mapper
//! code: a target build wires these traits to the console's register
//! primitives, while [`simulated::SimulatedDriver`] stands in for them on a
//! host.

pub mod serial_latch;
pub mod simulated;

use enum_iterator::Sequence;

use crate::ppu::register::display::{Display, Emphasis, TimingStandard};

/// The two independently switchable 4 KiB CHR windows.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Sequence)]
pub enum ChrChunk {
    Zero,
    One,
}

/// Outcome of one interference-detecting select sequence.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum SelectAttempt {
    Committed,
    /// The frame-sync handler ran mid-sequence; the register may hold anything.
    Interrupted,
}

pub trait BankDriver {
    fn prg_bank(&self) -> u8;
    fn set_prg_bank(&mut self, bank: u8);

    fn chr_bank(&self, chunk: ChrChunk) -> u8;
    /// Selects `bank` and makes it the bank the frame-sync handler re-applies.
    fn set_chr_bank(&mut self, chunk: ChrChunk, bank: u8);
    /// One select sequence that reports whether the frame-sync handler
    /// preempted it. The frame bank is only updated on `Committed`.
    fn try_set_chr_bank(&mut self, chunk: ChrChunk, bank: u8) -> SelectAttempt;
    /// Selects `bank` on the hardware only. The frame-sync handler's next
    /// routine select puts the frame bank back.
    fn split_chr_bank(&mut self, chunk: ChrChunk, bank: u8);
}

pub trait PpuDriver {
    fn ppu_on(&mut self, display: Display);
    fn ppu_off(&mut self);
    fn set_color_emphasis(&mut self, emphasis: Emphasis);
    /// Blocks until the next frame-sync interrupt has been handled.
    fn wait_nmi(&mut self);
    fn timing_standard(&self) -> TimingStandard;
}
