use log::debug;

use crate::driver::BankDriver;
use crate::mapper::BankSelect;

/// The single PRG bank register.
#[derive(Clone, Copy, Debug)]
pub struct PrgMapper {
    bank: u8,
}

impl PrgMapper {
    pub fn new<D: BankDriver>(driver: &D) -> PrgMapper {
        PrgMapper { bank: driver.prg_bank() }
    }
}

impl BankSelect for PrgMapper {
    fn bank(&self) -> u8 {
        self.bank
    }

    fn select<D: BankDriver>(&mut self, driver: &mut D, bank: u8) {
        if bank == self.bank {
            debug!(target: "banks", "PRG bank {bank} already selected");
            return;
        }

        driver.set_prg_bank(bank);
        self.bank = bank;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::simulated::SimulatedDriver;
    use crate::ppu::register::display::TimingStandard;

    #[test]
    fn starts_from_live_register() {
        let driver = SimulatedDriver::with_banks(TimingStandard::Ntsc, 3, [0, 0]);
        assert_eq!(PrgMapper::new(&driver).bank(), 3);
    }

    #[test]
    fn repeated_select_writes_once() {
        let mut driver = SimulatedDriver::new(TimingStandard::Ntsc);
        let mut prg = PrgMapper::new(&driver);
        prg.select(&mut driver, 5);
        prg.select(&mut driver, 5);
        assert_eq!(driver.prg_select_count(), 1);
        assert_eq!(driver.prg_bank(), 5);
        assert_eq!(prg.bank(), 5);
    }
}
