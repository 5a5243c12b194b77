// Seed used when none (or zero) is given
pub const LFSR_DEFAULT_SEED: u16 = 0xACE1;

/// 16-bit Fibonacci LFSR, taps 16 14 13 11 (maximal length, period 65535).
pub struct NekoLfsr {
    state: u16,
}

impl NekoLfsr {
    pub fn new(seed: u16) -> Self {
        // An all-zero register never leaves zero
        let state = if seed == 0 { LFSR_DEFAULT_SEED } else { seed };

        NekoLfsr { state }
    }

    pub fn state(&self) -> u16 {
        self.state
    }

    pub fn next(&mut self) -> u16 {
        let bit = ((self.state >> 0) ^ (self.state >> 2) ^ (self.state >> 3) ^ (self.state >> 5)) & 1;
        self.state = (self.state >> 1) | (bit << 15);

        return self.state;
    }
}

impl Default for NekoLfsr {
    fn default() -> Self {
        Self::new(LFSR_DEFAULT_SEED)
    }
}
