use const_panic::concat_panic;
use log::{debug, info};

use crate::driver::{BankDriver, ChrChunk, SelectAttempt};
use crate::mapper::{BankSelect, ChrBankSelect};

/// One of the two 4 KiB CHR bank registers, chosen by `CHUNK`.
///
/// Only chunks 0 and 1 exist. Any other chunk fails to build:
///
/// ```compile_fail
/// use nesmap::driver::simulated::SimulatedDriver;
/// use nesmap::mapper::ChrMapper;
/// use nesmap::ppu::register::display::TimingStandard;
///
/// let driver = SimulatedDriver::new(TimingStandard::Ntsc);
/// let _chr = ChrMapper::<2>::new(&driver);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ChrMapper<const CHUNK: u8> {
    bank: u8,
    // Set by an ephemeral select: the hardware may no longer hold `bank`.
    split_active: bool,
}

impl<const CHUNK: u8> ChrMapper<CHUNK> {
    const TARGET: ChrChunk = match CHUNK {
        0 => ChrChunk::Zero,
        1 => ChrChunk::One,
        _ => concat_panic!("CHR chunk must be 0 or 1, was ", CHUNK),
    };

    pub fn new<D: BankDriver>(driver: &D) -> ChrMapper<CHUNK> {
        ChrMapper { bank: driver.chr_bank(Self::TARGET), split_active: false }
    }

    pub const fn chunk(&self) -> ChrChunk {
        Self::TARGET
    }

    pub fn split_active(&self) -> bool {
        self.split_active
    }

    fn is_mapped(&self, bank: u8) -> bool {
        bank == self.bank && !self.split_active
    }
}

impl<const CHUNK: u8> BankSelect for ChrMapper<CHUNK> {
    fn bank(&self) -> u8 {
        self.bank
    }

    fn select<D: BankDriver>(&mut self, driver: &mut D, bank: u8) {
        if self.is_mapped(bank) {
            return;
        }

        driver.set_chr_bank(Self::TARGET, bank);
        self.bank = bank;
        self.split_active = false;
    }
}

impl<const CHUNK: u8> ChrBankSelect for ChrMapper<CHUNK> {
    fn select_with_retry<D: BankDriver>(&mut self, driver: &mut D, bank: u8) {
        if self.is_mapped(bank) {
            return;
        }

        let mut retries: u32 = 0;
        while driver.try_set_chr_bank(Self::TARGET, bank) == SelectAttempt::Interrupted {
            retries += 1;
            debug!(target: "banks", "Retrying CHR {:?} select of bank {bank} (attempt {})", Self::TARGET, retries + 1);
        }

        if retries > 0 {
            info!(target: "banks", "CHR {:?} select of bank {bank} needed {retries} retries", Self::TARGET);
        }

        self.bank = bank;
        self.split_active = false;
    }

    fn select_ephemeral<D: BankDriver>(&mut self, driver: &mut D, bank: u8) {
        driver.split_chr_bank(Self::TARGET, bank);
        self.split_active = true;
    }
}
