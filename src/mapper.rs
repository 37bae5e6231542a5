//! Cached bank selection on top of a [`BankDriver`].
//!
//! Every mapper remembers the bank it last committed so that routine
//! per-frame selects of an unchanged bank cost no hardware writes. PRG
//! mappers only support the plain select; CHR mappers add the
//! interference-safe and ephemeral variants through [`ChrBankSelect`].

pub mod chr_mapper;
pub mod prg_mapper;

pub use crate::driver::{BankDriver, ChrChunk};
pub use crate::mapper::chr_mapper::ChrMapper;
pub use crate::mapper::prg_mapper::PrgMapper;

pub trait BankSelect {
    /// The last bank committed by a non-ephemeral select.
    fn bank(&self) -> u8;

    /// Selects `bank`, skipping the hardware write if it is already mapped.
    ///
    /// Not safe against a frame-sync handler that selects banks on the same
    /// register while the sequence is in flight.
    fn select<D: BankDriver>(&mut self, driver: &mut D, bank: u8);
}

pub trait ChrBankSelect: BankSelect {
    /// Selects `bank`, repeating the select sequence until one completes
    /// without the frame-sync handler preempting it. On return the hardware
    /// and [`BankSelect::bank`] both equal `bank`.
    fn select_with_retry<D: BankDriver>(&mut self, driver: &mut D, bank: u8);

    /// Selects `bank` until the frame-sync handler's next routine select.
    /// The cached bank is left as it was.
    fn select_ephemeral<D: BankDriver>(&mut self, driver: &mut D, bank: u8);
}
