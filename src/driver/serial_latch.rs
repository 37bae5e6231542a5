// The marker bit reaches bit 0 after seven shifts, so the eighth write completes the value.
const EMPTY_LATCH: u8 = 0b1000_0000;

/// A bank register that is loaded one bit per write, least significant bit first.
#[derive(Clone, Copy, Debug)]
pub struct SerialLatch {
    value: u8,
}

impl SerialLatch {
    pub fn shift(&mut self, bit: bool) -> ShiftStatus {
        let is_last_shift = self.value & 1 == 1;
        self.value >>= 1;
        // Copy the written bit to the front of the latch.
        self.value |= u8::from(bit) << 7;

        if !is_last_shift {
            return ShiftStatus::Continue;
        }

        let finished_value = self.value;
        self.value = EMPTY_LATCH;
        ShiftStatus::Done { finished_value }
    }

    pub fn reset(&mut self) {
        self.value = EMPTY_LATCH;
    }

    pub fn is_empty(&self) -> bool {
        self.value == EMPTY_LATCH
    }
}

impl Default for SerialLatch {
    fn default() -> Self {
        Self { value: EMPTY_LATCH }
    }
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum ShiftStatus {
    Continue,
    Done { finished_value: u8 },
}
